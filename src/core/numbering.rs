use chrono::{Datelike, NaiveDate};

use super::error::{UblError, ValidationError};

/// Length of a GİB invoice number: 3-character prefix, 4-digit year, 9-digit sequence.
pub const INVOICE_NUMBER_LEN: usize = 16;

/// Format a GİB invoice number, e.g. `format_invoice_number("GIB", 2009, 1)`
/// gives "GIB2009000000001".
///
/// Numbers are caller-managed; this only renders one.
pub fn format_invoice_number(prefix: &str, year: i32, sequence: u64) -> Result<String, UblError> {
    if prefix.chars().count() != 3 || !prefix.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(UblError::Numbering(format!(
            "invoice number prefix must be 3 alphanumeric characters, got '{prefix}'"
        )));
    }
    if !(1000..=9999).contains(&year) {
        return Err(UblError::Numbering(format!("invoice number year out of range: {year}")));
    }
    if sequence == 0 || sequence > 999_999_999 {
        return Err(UblError::Numbering(format!(
            "invoice number sequence must be 1..=999999999, got {sequence}"
        )));
    }
    Ok(format!("{prefix}{year}{sequence:09}"))
}

/// Check an invoice number against the GİB format: 3 alphanumeric
/// characters followed by 13 digits, the first four of which are the year
/// of `issue_date`. Advisory; the assembler does not call it.
pub fn check_invoice_number(id: &str, issue_date: NaiveDate) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if id.len() != INVOICE_NUMBER_LEN || !id.is_ascii() {
        errors.push(ValidationError::with_rule(
            "header.id",
            format!("invoice number must be {INVOICE_NUMBER_LEN} ASCII characters, got '{id}'"),
            "TR-N01",
        ));
        return errors;
    }

    let (prefix, rest) = id.split_at(3);
    if !prefix.chars().all(|c| c.is_ascii_alphanumeric()) {
        errors.push(ValidationError::with_rule(
            "header.id",
            format!("invoice number prefix '{prefix}' must be alphanumeric"),
            "TR-N02",
        ));
    }
    if !rest.chars().all(|c| c.is_ascii_digit()) {
        errors.push(ValidationError::with_rule(
            "header.id",
            format!("invoice number '{id}' must end in 13 digits"),
            "TR-N03",
        ));
        return errors;
    }

    let year = &rest[..4];
    if year != issue_date.year().to_string() {
        errors.push(ValidationError::with_rule(
            "header.id",
            format!(
                "invoice number year {year} does not match issue year {}",
                issue_date.year()
            ),
            "TR-N04",
        ));
    }
    if rest[4..].chars().all(|c| c == '0') {
        errors.push(ValidationError::with_rule(
            "header.id",
            "invoice number sequence must not be zero",
            "TR-N05",
        ));
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, 1, 5).unwrap()
    }

    #[test]
    fn formats_gib_number() {
        assert_eq!(
            format_invoice_number("GIB", 2009, 1).unwrap(),
            "GIB2009000000001"
        );
        assert_eq!(
            format_invoice_number("ABC", 2024, 123_456_789).unwrap(),
            "ABC2024123456789"
        );
    }

    #[test]
    fn format_rejects_bad_parts() {
        assert!(format_invoice_number("GI", 2009, 1).is_err());
        assert!(format_invoice_number("G-B", 2009, 1).is_err());
        assert!(format_invoice_number("GIB", 2009, 0).is_err());
        assert!(format_invoice_number("GIB", 2009, 1_000_000_000).is_err());
    }

    #[test]
    fn valid_number_passes() {
        assert!(check_invoice_number("GIB2009000000001", date(2009)).is_empty());
    }

    #[test]
    fn year_mismatch() {
        let errors = check_invoice_number("GIB2009000000001", date(2010));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].rule.as_deref(), Some("TR-N04"));
    }

    #[test]
    fn wrong_length() {
        let errors = check_invoice_number("GIB200900001", date(2009));
        assert_eq!(errors[0].rule.as_deref(), Some("TR-N01"));
    }

    #[test]
    fn non_digit_tail() {
        let errors = check_invoice_number("GIB2009A00000001", date(2009));
        assert_eq!(errors[0].rule.as_deref(), Some("TR-N03"));
    }

    #[test]
    fn zero_sequence() {
        let errors = check_invoice_number("GIB2009000000000", date(2009));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].rule.as_deref(), Some("TR-N05"));
    }
}
