//! Parsing of FASTQ filenames produced by Illumina's `bcl2fastq`.
//!
//! Illumina FASTQ files use the following naming scheme:
//!
//! `<sample name>_<barcode sequence>_L<lane>_R<read number>_<set number>.fastq.gz`
//!
//! The lane and set number are conventionally zero-padded to three digits,
//! but any positive integer is accepted.

use crate::field::FieldSelector;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

const NUM_COMPONENTS: usize = 5;
const DELIMITER: u8 = b'_';
const EXTENSION_SEPARATOR: char = '.';

/// Reasons a filename does not follow the Illumina naming scheme.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The last `_`-delimited segment has no `.`, so this is not a filename.
    #[error("the last component {segment:?} has no file extension")]
    NoExtension {
        /// The rightmost segment
        segment: String,
    },

    /// Fewer than five `_`-delimited components.
    #[error("expected {NUM_COMPONENTS} '_'-delimited components, found {found}")]
    TooFewComponents {
        /// Number of components found
        found: usize,
    },

    /// The lane is not `L` followed by a positive integer.
    #[error("lane {lane:?} is not 'L' followed by a positive integer")]
    InvalidLane {
        /// The offending component
        lane: String,
    },

    /// The read number is neither `R1` nor `R2`.
    #[error("read number {read:?} is neither R1 nor R2")]
    InvalidReadNumber {
        /// The offending component
        read: String,
    },

    /// The set number is not a positive integer.
    #[error("set number {set:?} is not a positive integer")]
    InvalidSetNumber {
        /// The offending component, with its extension removed
        set: String,
    },
}

/// A parsed representation of an Illumina FASTQ filename. Every component
/// borrows from the filename it was parsed from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct IlluminaFilename<'a> {
    /// The filename exactly as it was given
    pub original: &'a str,
    /// Everything left of the barcode, `_` included
    pub sample_name: &'a str,
    /// May be empty
    pub barcode_sequence: &'a str,
    /// `L` followed by a positive integer, e.g. `L001`
    pub lane: &'a str,
    /// `R1` or `R2`
    pub read_number: &'a str,
    /// A positive integer, e.g. `001`
    pub set_number: &'a str,
    /// The text removed from the end of the set number, starting at the
    /// first `.`, e.g. `.fastq.gz`
    pub extension: &'a str,
}

impl<'a> IlluminaFilename<'a> {
    /// Attempt to parse `filename` as an Illumina FASTQ filename.
    ///
    /// The sample name is the only component allowed to contain `_`, so the
    /// four fixed-format components are peeled off from the right and
    /// whatever is left over becomes the sample name.
    pub fn parse(filename: &'a str) -> Result<IlluminaFilename<'a>, ParseError> {
        let bytes = filename.as_bytes();

        // barcode, lane, read and set, filled from the right
        let mut carved = [""; NUM_COMPONENTS - 1];
        let mut remaining = carved.len();
        let mut extension = "";
        let mut end = filename.len();
        let mut i = filename.len();

        // The first byte is never a cut point, so the sample name is never empty.
        while i > 1 && remaining > 0 {
            i -= 1;
            if bytes[i] != DELIMITER {
                continue;
            }
            let mut component = &filename[i + 1..end];
            if remaining == carved.len() {
                let dot = component.find(EXTENSION_SEPARATOR).ok_or_else(|| {
                    ParseError::NoExtension {
                        segment: component.to_string(),
                    }
                })?;
                extension = &component[dot..];
                component = &component[..dot];
            }
            remaining -= 1;
            carved[remaining] = component;
            end = i;
        }

        if remaining > 0 {
            return Err(ParseError::TooFewComponents {
                found: NUM_COMPONENTS - remaining,
            });
        }

        let [barcode_sequence, lane, read_number, set_number] = carved;

        if !lane.strip_prefix('L').is_some_and(is_positive_integer) {
            return Err(ParseError::InvalidLane {
                lane: lane.to_string(),
            });
        }
        if read_number != "R1" && read_number != "R2" {
            return Err(ParseError::InvalidReadNumber {
                read: read_number.to_string(),
            });
        }
        if !is_positive_integer(set_number) {
            return Err(ParseError::InvalidSetNumber {
                set: set_number.to_string(),
            });
        }

        Ok(IlluminaFilename {
            original: filename,
            sample_name: &filename[..end],
            barcode_sequence,
            lane,
            read_number,
            set_number,
            extension,
        })
    }

    /// The value of one component.
    pub fn field(&self, field: FieldSelector) -> &'a str {
        match field {
            FieldSelector::SampleName => self.sample_name,
            FieldSelector::BarcodeSequence => self.barcode_sequence,
            FieldSelector::Lane => self.lane,
            FieldSelector::ReadNumber => self.read_number,
            FieldSelector::SetNumber => self.set_number,
        }
    }
}

/// Joins the components with `_`, which gives back the original filename
/// without its extension.
impl fmt::Display for IlluminaFilename<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}_{}_{}_{}_{}",
            self.sample_name, self.barcode_sequence, self.lane, self.read_number, self.set_number
        )
    }
}

/// Decimal digits with an optional leading `+`, at least one of them non-zero.
fn is_positive_integer(s: &str) -> bool {
    let digits = s.strip_prefix('+').unwrap_or(s);
    !digits.is_empty()
        && digits.bytes().all(|b| b.is_ascii_digit())
        && digits.bytes().any(|b| b != b'0')
}
