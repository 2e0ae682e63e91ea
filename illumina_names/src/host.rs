//! Named functions for exposing the collectors to a host, such as a build
//! tool that lets plugins add functions callable as `$(illumina_lane ...)`.
//!
//! A host implements [`FunctionRegistry`] and calls [`register_all`] once
//! at startup.

use crate::aggregate::collect_field_with;
use crate::field::FieldSelector;
use crate::scheme::ParseError;
use log::debug;
use std::collections::BTreeMap;
use thiserror::Error;

/// A function that collects the distinct values of one component from a
/// whitespace-separated list of filenames.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HostFunction {
    /// Name the host exposes the function under
    pub name: &'static str,
    /// Component the function collects
    pub field: FieldSelector,
    /// Fewest arguments the host should accept
    pub min_args: usize,
    /// Most arguments the host should accept
    pub max_args: usize,
}

/// All host functions, in registration order.
pub static HOST_FUNCTIONS: [HostFunction; 5] = [
    HostFunction::unary("illumina_sample", FieldSelector::SampleName),
    HostFunction::unary("illumina_barcode", FieldSelector::BarcodeSequence),
    HostFunction::unary("illumina_lane", FieldSelector::Lane),
    HostFunction::unary("illumina_read", FieldSelector::ReadNumber),
    HostFunction::unary("illumina_set", FieldSelector::SetNumber),
];

impl HostFunction {
    const fn unary(name: &'static str, field: FieldSelector) -> Self {
        HostFunction {
            name,
            field,
            min_args: 1,
            max_args: 1,
        }
    }

    /// Call the function. Anything other than exactly one argument gives
    /// no value.
    pub fn invoke(&self, args: &[&str]) -> Option<String> {
        self.invoke_with(args, |token, err| {
            debug!("{}: skipping {token:?}: {err}", self.name);
        })
    }

    /// Same as [`HostFunction::invoke`], calling `on_reject` with every
    /// filename that failed to parse.
    pub fn invoke_with<F>(&self, args: &[&str], on_reject: F) -> Option<String>
    where
        F: FnMut(&str, &ParseError),
    {
        match args {
            [input] => collect_field_with(input, self.field, on_reject),
            _ => {
                debug!("{}: expected 1 argument, got {}", self.name, args.len());
                None
            }
        }
    }
}

/// Find a host function by name.
pub fn lookup(name: &str) -> Option<&'static HostFunction> {
    HOST_FUNCTIONS.iter().find(|f| f.name == name)
}

/// Errors while registering host functions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A function with this name was already registered.
    #[error("a function named {name:?} is already registered")]
    DuplicateFunction {
        /// The duplicated name
        name: String,
    },
}

/// The registration surface of a host.
pub trait FunctionRegistry {
    /// Make `function` callable by its name.
    fn add_function(&mut self, function: &'static HostFunction) -> Result<(), RegistryError>;
}

/// Register every function in [`HOST_FUNCTIONS`], stopping at the first error.
pub fn register_all<R: FunctionRegistry + ?Sized>(registry: &mut R) -> Result<(), RegistryError> {
    for function in &HOST_FUNCTIONS {
        registry.add_function(function)?;
    }
    Ok(())
}

/// An in-memory [`FunctionRegistry`].
#[derive(Clone, Debug, Default)]
pub struct Registry {
    functions: BTreeMap<&'static str, &'static HostFunction>,
}

impl Registry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding all of [`HOST_FUNCTIONS`].
    pub fn with_host_functions() -> Self {
        let mut registry = Registry::new();
        registry.functions = HOST_FUNCTIONS.iter().map(|f| (f.name, f)).collect();
        registry
    }

    /// The function registered as `name`.
    pub fn get(&self, name: &str) -> Option<&'static HostFunction> {
        self.functions.get(name).copied()
    }

    /// Call the function registered as `name`. Unknown names give no value.
    pub fn call(&self, name: &str, args: &[&str]) -> Option<String> {
        self.get(name)?.invoke(args)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.functions.keys().copied()
    }

    /// Number of registered functions.
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// True if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

impl FunctionRegistry for Registry {
    fn add_function(&mut self, function: &'static HostFunction) -> Result<(), RegistryError> {
        if self.functions.contains_key(function.name) {
            return Err(RegistryError::DuplicateFunction {
                name: function.name.to_string(),
            });
        }
        self.functions.insert(function.name, function);
        Ok(())
    }
}
