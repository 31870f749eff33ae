use clap::ValueEnum;

use super::*;

#[test]
fn output_format_default_is_text() {
    assert_eq!(OutputFormat::default(), OutputFormat::Text);
}

#[test]
fn output_format_parses_case_insensitively() {
    assert_eq!(
        OutputFormat::from_str("json", true).unwrap(),
        OutputFormat::Json
    );
    assert_eq!(
        OutputFormat::from_str("TEXT", true).unwrap(),
        OutputFormat::Text
    );
    assert!(OutputFormat::from_str("sarif", true).is_err());
}
