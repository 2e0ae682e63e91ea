use illumina_names::host::lookup;
use illumina_names::{
    collect_field, register_all, FieldSelector, IlluminaFilename, ParseError, Registry,
};
use pretty_assertions::assert_eq;
use std::str::FromStr;

/// A MiSeq run with two samples split over two lanes, plus some noise that
/// tends to end up in the same directory listing.
const RUN: &str = "
    Infected_S3_L001_R1_001.fastq.gz  Infected_S3_L001_R2_001.fastq.gz
    Infected_S3_L002_R1_001.fastq.gz  Infected_S3_L002_R2_001.fastq.gz
    mock_ctrl_S4_L001_R1_001.fastq.gz mock_ctrl_S4_L001_R2_001.fastq.gz
    mock_ctrl_S4_L001_I1_001.fastq.gz
    Undetermined_S0_L001_R1_001
    SampleSheet.csv
";

#[test]
fn collect_every_field_from_run() {
    let expected = [
        (FieldSelector::SampleName, "Infected mock_ctrl"),
        (FieldSelector::BarcodeSequence, "S3 S4"),
        (FieldSelector::Lane, "L001 L002"),
        (FieldSelector::ReadNumber, "R1 R2"),
        (FieldSelector::SetNumber, "001"),
    ];
    for (field, values) in expected {
        assert_eq!(collect_field(RUN, field).as_deref(), Some(values), "{field}");
    }
}

#[test]
fn selectors_parse_from_host_names() {
    let field = FieldSelector::from_str("barcode-sequence").unwrap();
    assert_eq!(collect_field(RUN, field).as_deref(), Some("S3 S4"));
}

#[test]
fn host_functions_match_collect_field() {
    let mut registry = Registry::new();
    register_all(&mut registry).unwrap();
    for name in registry.names() {
        let function = lookup(name).unwrap();
        assert_eq!(registry.call(name, &[RUN]), collect_field(RUN, function.field));
    }
}

#[test]
fn parse_reports_specific_errors() {
    let cases = [
        ("a_b_X001_R1_001.fastq.gz", "InvalidLane"),
        ("a_b_L001_R3_001.fastq.gz", "InvalidReadNumber"),
        ("a_b_L001_R1_001", "NoExtension"),
        ("a_L001_R1_001.fq", "TooFewComponents"),
        ("a_b_L001_R1_0.fq", "InvalidSetNumber"),
    ];
    for (filename, kind) in cases {
        let err = IlluminaFilename::parse(filename).unwrap_err();
        let got = match err {
            ParseError::NoExtension { .. } => "NoExtension",
            ParseError::TooFewComponents { .. } => "TooFewComponents",
            ParseError::InvalidLane { .. } => "InvalidLane",
            ParseError::InvalidReadNumber { .. } => "InvalidReadNumber",
            ParseError::InvalidSetNumber { .. } => "InvalidSetNumber",
        };
        assert_eq!(got, kind, "{filename}");
    }
}

#[test]
fn parsed_names_serialize() {
    let r = IlluminaFilename::parse("heart_1k_v3_S1_L002_R2_001.fastq.gz").unwrap();
    let json = serde_json::to_value(r).unwrap();
    assert_eq!(json["sample_name"], "heart_1k_v3");
    assert_eq!(json["lane"], "L002");
    assert_eq!(json["extension"], ".fastq.gz");
}

#[test]
fn error_messages() {
    let err = IlluminaFilename::parse("a_b_L001_R3_001.fastq.gz").unwrap_err();
    assert_eq!(err.to_string(), "read number \"R3\" is neither R1 nor R2");
    let err = IlluminaFilename::parse("a.fq").unwrap_err();
    assert_eq!(
        err.to_string(),
        "expected 5 '_'-delimited components, found 1"
    );
}
