// Copyright (c) 2024 10x Genomics, Inc. All rights reserved.
//! Tools for pulling fields out of Illumina FASTQ filenames.
//! Major functionality includes:
//! * Parsing a `bcl2fastq`-style filename of the form
//!   `<sample>_<barcode>_L<lane>_R<read>_<set>.fastq.gz` into its components
//! * Collecting the distinct values of one component across a
//!   whitespace-separated list of filenames
//! * A table of named host functions (`illumina_lane` and friends) and a
//!   registration interface for exposing them to a build tool
#![deny(missing_docs)]

pub mod aggregate;
pub mod field;
pub mod host;
pub mod scheme;

pub use crate::aggregate::{collect_field, collect_field_with, FieldValueSet};
pub use crate::field::FieldSelector;
pub use crate::host::{register_all, FunctionRegistry, HostFunction, Registry, RegistryError};
pub use crate::scheme::{IlluminaFilename, ParseError};
