//! Property-based tests for formatting, numbering and assembly.
//!
//! Run with: `cargo test --test proptest_tests`

#![cfg(feature = "invoice")]

use chrono::NaiveDate;
use efatura::core::*;
use efatura::invoice::{Element, InvoiceAssembler, InvoiceDocument, element_to_xml, format_amount};
use efatura::validate::{EnvelopeValidator, SchemaValidator};
use proptest::prelude::*;
use rust_decimal::Decimal;
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

fn buyer() -> Party {
    PartyBuilder::tckn("12345678901", AddressBuilder::new("Çankaya", "Ankara").build())
        .person("Ayşe", "Yılmaz")
        .build()
}

fn arb_amount() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000, 0u32..=4).prop_map(|(n, scale)| Decimal::new(n, scale))
}

/// Unit prices of at least 1, so every line carries non-zero KDV.
fn arb_price() -> impl Strategy<Value = Decimal> {
    (100i64..10_000_000, 0u32..=2).prop_map(|(n, scale)| Decimal::new(n, scale))
}

fn arb_currency() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("TRY"), Just("USD"), Just("EUR")]
}

fn assemble(currency: &str, prices: &[Decimal]) -> InvoiceDocument {
    let mut header = InvoiceHeader::new(
        "GIB2024000000001",
        "F47AC10B-58CC-4372-A567-0E02B2C3D479",
        date(2024, 3, 1),
    );
    header.document_currency_code = Some(currency.to_string());
    let lines: Vec<_> = prices
        .iter()
        .enumerate()
        .map(|(i, price)| {
            InvoiceLineBuilder::new((i + 1).to_string(), "Kalem", dec!(2), "C62", *price)
                .kdv(dec!(20))
                .build()
        })
        .collect();
    let net: Decimal = lines.iter().filter_map(|l| l.line_extension_amount).sum();
    let tax: Decimal = lines
        .iter()
        .filter_map(|l| l.tax_total.as_ref().and_then(|t| t.tax_amount))
        .sum();

    let mut asm = InvoiceAssembler::new(AssemblyOptions::default().verify_totals(true));
    asm.ubl_extensions(&UblExtensions::default())
        .unwrap()
        .identification(&header)
        .unwrap()
        .signature(&Signature::new("1288331521", seller(), "#Signature_1"))
        .unwrap()
        .accounting_supplier_party(&SupplierParty::new(seller()))
        .unwrap()
        .accounting_customer_party(&CustomerParty::new(buyer()))
        .unwrap();
    if currency != "TRY" {
        asm.pricing_exchange_rate(&ExchangeRate::new(currency, "TRY", dec!(34.5)))
            .unwrap();
    }
    asm.tax_total(&TaxTotal::new(
        tax,
        vec![TaxSubtotal::new(
            net,
            tax,
            dec!(20),
            TaxCategory::new(TaxScheme::tax("KDV", "0015")),
        )],
    ))
    .unwrap()
    .legal_monetary_total(&MonetaryTotal {
        line_extension_amount: Some(net),
        tax_exclusive_amount: Some(net),
        tax_inclusive_amount: Some(net + tax),
        payable_amount: Some(net + tax),
        ..MonetaryTotal::default()
    })
    .unwrap()
    .invoice_lines(&lines)
    .unwrap();
    asm.finish().unwrap()
}

fn amount_currencies(el: &Element, out: &mut Vec<String>) {
    if el.local_name().ends_with("Amount") {
        out.push(el.attribute("currencyID").unwrap_or_default().to_string());
    }
    for child in el.children() {
        amount_currencies(child, out);
    }
}

proptest! {
    #[test]
    fn amount_keeps_value_and_two_decimals(d in arb_amount()) {
        let s = format_amount(d);
        let (_, fraction) = s.split_once('.').unwrap();
        prop_assert!(fraction.len() >= 2);
        prop_assert_eq!(s.parse::<Decimal>().unwrap(), d);
    }

    #[test]
    fn invoice_number_format_passes_check(
        prefix in "[A-Z0-9]{3}",
        year in 2000i32..2100,
        sequence in 1u64..=999_999_999,
    ) {
        let id = format_invoice_number(&prefix, year, sequence).unwrap();
        prop_assert_eq!(id.len(), INVOICE_NUMBER_LEN);
        prop_assert!(check_invoice_number(&id, date(year, 6, 1)).is_empty());
    }

    #[test]
    fn text_survives_escaping_or_is_rejected(
        text in "[a-zA-Z0-9 &<>\"'çğışöüÇĞİŞÖÜ\\x00-\\x08\\x0B\\x0C\\x0E-\\x1F]{1,40}",
    ) {
        let result = element_to_xml(
            &Element::with_text("cbc:Note", text.as_str()),
            &SerializeOptions { indent: 0, declaration: false },
        );
        if text.chars().any(|c| c < ' ') {
            let is_xml_error = matches!(result, Err(UblError::Xml(_)));
            prop_assert!(is_xml_error);
        } else {
            let xml = result.unwrap();
            let mut reader = quick_xml::Reader::from_str(&xml);
            let mut read = String::new();
            loop {
                match reader.read_event().unwrap() {
                    quick_xml::events::Event::Text(t) => read.push_str(&t.unescape().unwrap()),
                    quick_xml::events::Event::Eof => break,
                    _ => {}
                }
            }
            prop_assert_eq!(read, text);
        }
    }

    #[test]
    fn every_amount_uses_document_currency(
        currency in arb_currency(),
        prices in prop::collection::vec(arb_price(), 1..8),
    ) {
        let doc = assemble(currency, &prices);
        let mut currencies = Vec::new();
        amount_currencies(doc.root(), &mut currencies);
        prop_assert!(!currencies.is_empty());
        prop_assert!(currencies.iter().all(|c| c == currency));
    }

    #[test]
    fn line_count_matches_lines(prices in prop::collection::vec(arb_price(), 1..20)) {
        let doc = assemble("TRY", &prices);
        let expected = prices.len().to_string();
        prop_assert_eq!(doc.root().find_text("cbc:LineCountNumeric"), Some(expected.as_str()));
        prop_assert_eq!(doc.root().children_named("cac:InvoiceLine").count(), prices.len());
    }

    #[test]
    fn assembled_output_is_stable_and_conforms(prices in prop::collection::vec(arb_price(), 1..5)) {
        let first = assemble("TRY", &prices).to_xml().unwrap();
        let second = assemble("TRY", &prices).to_xml().unwrap();
        prop_assert_eq!(&first, &second);
        let verdict = EnvelopeValidator::new().validate(&first).unwrap();
        prop_assert!(verdict.is_valid(), "{:?}", verdict);
    }
}
