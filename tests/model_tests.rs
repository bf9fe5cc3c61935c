//! Entity model, builders, numbering and reference data.

#![cfg(feature = "core")]

use chrono::NaiveDate;
use efatura::core::codes::{
    CodeTable, COUNTRY_CODES, CURRENCY_CODES, PARTY_ID_SCHEMES, TAX_TYPE_CODES, UNIT_CODES,
    WITHHOLDING_TAX_TYPE_CODES,
};
use efatura::core::*;
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn seller() -> Party {
    PartyBuilder::vkn("1288331521", AddressBuilder::new("Beşiktaş", "İstanbul").build())
        .name("AAA AŞ")
        .tax_office("Büyük Mükellefler")
        .build()
}

// --- Builders ---

#[test]
fn party_builder_vkn() {
    let party = seller();
    assert!(party.has_scheme("VKN"));
    assert!(!party.has_scheme("TCKN"));
    assert_eq!(party.tax_office(), Some("Büyük Mükellefler"));
    assert_eq!(party.party_name.as_deref(), Some("AAA AŞ"));
    let address = party.postal_address.unwrap();
    assert_eq!(address.city_name.as_deref(), Some("İstanbul"));
    assert_eq!(
        address.country.and_then(|c| c.identification_code),
        Some("TR".to_string())
    );
}

#[test]
fn party_builder_tckn_with_person() {
    let party = PartyBuilder::tckn("12345678901", AddressBuilder::new("Çankaya", "Ankara").build())
        .person("Ayşe", "Yılmaz")
        .build();
    assert!(party.has_scheme("TCKN"));
    let person = party.person.unwrap();
    assert_eq!(person.first_name.as_deref(), Some("Ayşe"));
    assert_eq!(person.family_name.as_deref(), Some("Yılmaz"));
}

#[test]
fn line_builder_computes_extension_and_kdv() {
    let line = InvoiceLineBuilder::new("1", "Danışmanlık", dec!(3), "HUR", dec!(229.50))
        .kdv(dec!(18))
        .build();
    assert_eq!(line.line_extension_amount, Some(dec!(688.50)));
    let tax = line.tax_total.unwrap();
    assert_eq!(tax.tax_amount, Some(dec!(123.93)));
    assert_eq!(tax.tax_subtotals.len(), 1);
    assert_eq!(tax.tax_subtotals[0].taxable_amount, Some(dec!(688.50)));
    assert_eq!(
        tax.tax_subtotals[0]
            .tax_category
            .as_ref()
            .and_then(TaxCategory::tax_type_code),
        Some("0015")
    );
}

#[test]
fn line_builder_applies_allowances_and_charges() {
    let line = InvoiceLineBuilder::new("1", "Kalem", dec!(10), "C62", dec!(10))
        .add_allowance_charge(AllowanceCharge::allowance(dec!(15)))
        .add_allowance_charge(AllowanceCharge::charge(dec!(5)))
        .build();
    assert_eq!(line.line_extension_amount, Some(dec!(90)));
    assert!(line.tax_total.is_none());
    assert_eq!(line.allowance_charges.len(), 2);
}

#[test]
fn line_builder_exemption_lands_on_category() {
    let line = InvoiceLineBuilder::new("1", "Kalem", dec!(1), "C62", dec!(100))
        .kdv(dec!(0))
        .exemption("301", "11/1-a Mal ihracatı")
        .build();
    let category = line.tax_total.unwrap().tax_subtotals[0]
        .tax_category
        .clone()
        .unwrap();
    assert_eq!(category.tax_exemption_reason_code.as_deref(), Some("301"));
}

// --- Header and code enums ---

#[test]
fn header_defaults() {
    let header = InvoiceHeader::new("GIB2024000000001", "ABC", date(2024, 3, 1));
    assert_eq!(header.profile_id, Some(ProfileId::TemelFatura));
    assert_eq!(header.invoice_type_code, Some(InvoiceTypeCode::Satis));
    assert!(!header.copy_indicator);
    assert!(header.line_count.is_none());
}

#[test]
fn unknown_codes_pass_through() {
    assert_eq!(ProfileId::from_code("HALFATURA").code(), "HALFATURA");
    assert_eq!(InvoiceTypeCode::from_code("SGK").code(), "SGK");
    assert_eq!(InvoiceTypeCode::from_code("IADE"), InvoiceTypeCode::Iade);
}

#[test]
fn generated_uuid_is_upper_case_v4() {
    let id = new_uuid();
    assert_eq!(id.len(), 36);
    assert_eq!(id, id.to_uppercase());
    assert_ne!(id, new_uuid());
}

#[test]
fn header_serde_round_trip() {
    let mut header = InvoiceHeader::new("GIB2024000000001", "ABC", date(2024, 3, 1));
    header.notes = vec!["Not".into()];
    header.document_currency_code = Some("USD".into());
    let json = serde_json::to_string(&header).unwrap();
    let back: InvoiceHeader = serde_json::from_str(&json).unwrap();
    assert_eq!(back, header);
}

#[test]
fn options_deserialize_with_defaults() {
    let options: AssemblyOptions = serde_json::from_str(r#"{"strict_code_lists": true}"#).unwrap();
    assert!(options.strict_code_lists);
    assert!(options.enforce_section_order);
    assert_eq!(options.default_currency, "TRY");
    assert_eq!(options.max_depth, AssemblyOptions::default().max_depth);
}

// --- Numbering ---

#[test]
fn invoice_number_format_and_check_agree() {
    let id = format_invoice_number("GIB", 2024, 42).unwrap();
    assert_eq!(id, "GIB2024000000042");
    assert!(check_invoice_number(&id, date(2024, 6, 30)).is_empty());
}

#[test]
fn invoice_number_zero_sequence() {
    let errors = check_invoice_number("GIB2024000000000", date(2024, 1, 1));
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].rule.as_deref(), Some("TR-N05"));
}

#[test]
fn invoice_number_format_error_variant() {
    let err = format_invoice_number("GIB", 12, 1).unwrap_err();
    assert!(matches!(err, UblError::Numbering(_)));
}

// --- Arithmetic ---

#[test]
fn consistent_totals_pass() {
    let total = MonetaryTotal {
        line_extension_amount: Some(dec!(688.50)),
        tax_exclusive_amount: Some(dec!(688.50)),
        tax_inclusive_amount: Some(dec!(812.43)),
        payable_amount: Some(dec!(812.43)),
        ..MonetaryTotal::default()
    };
    assert!(check_monetary_total(&total).is_empty());
}

#[test]
fn prepaid_and_rounding_enter_payable() {
    let total = MonetaryTotal {
        line_extension_amount: Some(dec!(100)),
        tax_exclusive_amount: Some(dec!(100)),
        tax_inclusive_amount: Some(dec!(118)),
        prepaid_amount: Some(dec!(18)),
        payable_rounding_amount: Some(dec!(0.01)),
        payable_amount: Some(dec!(100.01)),
        ..MonetaryTotal::default()
    };
    assert!(check_monetary_total(&total).is_empty());
}

#[test]
fn tax_total_mismatch() {
    let total = TaxTotal::new(
        dec!(100),
        vec![TaxSubtotal::new(
            dec!(500),
            dec!(90),
            dec!(18),
            TaxCategory::new(TaxScheme::tax("KDV", "0015")),
        )],
    );
    let errors = check_tax_total(&total);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].rule.as_deref(), Some("TR-M04"));
}

// --- Reference data ---

#[test]
fn code_lists_know_common_codes() {
    assert!(UNIT_CODES.contains("C62"));
    assert!(UNIT_CODES.contains("KGM"));
    assert!(CURRENCY_CODES.contains("EUR"));
    assert!(COUNTRY_CODES.contains("DE"));
    assert!(PARTY_ID_SCHEMES.contains("MERSISNO"));
    assert!(TAX_TYPE_CODES.contains("0015"));
    assert!(WITHHOLDING_TAX_TYPE_CODES.contains("602"));
    assert!(!WITHHOLDING_TAX_TYPE_CODES.contains("618"));
}

#[test]
fn unit_lookup_has_turkish_names() {
    assert_eq!(UNIT_CODES.lookup("HUR").map(|e| e.name), Some("SAAT"));
}

// --- Errors ---

#[test]
fn error_messages() {
    let err: UblError = StructuralError::missing("InvoiceLine", "InvoicedQuantity@unitCode", Cardinality::Required)
        .at("Invoice/InvoiceLine")
        .into();
    assert_eq!(
        err.to_string(),
        "structural error: missing mandatory field InvoiceLine.InvoicedQuantity@unitCode (1) at Invoice/InvoiceLine"
    );

    let miss = ReferenceDataMiss {
        list: "UnitCode".into(),
        code: "XYZ".into(),
        path: "Invoice/InvoiceLine".into(),
    };
    assert_eq!(
        miss.to_string(),
        "UnitCode 'XYZ' is not a known code at Invoice/InvoiceLine"
    );
    let depth = UblError::NestingTooDeep {
        entity: "Party",
        limit: 16,
    };
    assert_eq!(depth.to_string(), "Party nested deeper than 16 levels");
}
