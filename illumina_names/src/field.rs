//! Selectors for the five components of an Illumina FASTQ filename.

use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::{EnumIter, EnumString};

/// One of the five components of an Illumina FASTQ filename, in the order
/// they appear left to right.
///
/// Parses from the names used in the Illumina naming convention
/// (`sample-name`, `barcode-sequence`, `lane`, `read-number`, `set-number`)
/// and from the short forms used by the host function names
/// (`sample`, `barcode`, `read`, `set`).
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    EnumIter,
    EnumString,
    Eq,
    Hash,
    PartialEq,
    PartialOrd,
    Ord,
    Serialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum FieldSelector {
    /// `<sample name>`, the only component that may contain `_`.
    #[strum(serialize = "sample-name", serialize = "sample")]
    SampleName,
    /// `<barcode sequence>`
    #[strum(serialize = "barcode-sequence", serialize = "barcode")]
    BarcodeSequence,
    /// `L<lane>`
    #[strum(serialize = "lane")]
    Lane,
    /// `R1` or `R2`
    #[strum(serialize = "read-number", serialize = "read")]
    ReadNumber,
    /// `<set number>`, with the file extension removed.
    #[strum(serialize = "set-number", serialize = "set")]
    SetNumber,
}

impl FieldSelector {
    /// The canonical, hyphenated name of this component.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldSelector::SampleName => "sample-name",
            FieldSelector::BarcodeSequence => "barcode-sequence",
            FieldSelector::Lane => "lane",
            FieldSelector::ReadNumber => "read-number",
            FieldSelector::SetNumber => "set-number",
        }
    }
}

impl fmt::Display for FieldSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
