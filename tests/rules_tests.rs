//! Conditional business rule tables.

#![cfg(feature = "invoice")]

use efatura::core::*;
use efatura::invoice::Section;
use efatura::invoice::rules::{
    DOCUMENT_RULES, DocumentFacts, Rule, SIGNATURE_RULES, TAX_CATEGORY_RULES, TRADING_PARTY_RULES,
    evaluate,
};

fn facts(profile: ProfileId, kind: InvoiceTypeCode, currency: &str) -> DocumentFacts {
    DocumentFacts {
        profile_id: Some(profile),
        invoice_type_code: Some(kind),
        document_currency: Some(currency.into()),
        ..DocumentFacts::default()
    }
}

fn violated<T>(rules: &[Rule<T>], value: &T) -> Vec<&'static str> {
    evaluate(rules, value).into_iter().map(|r| r.id).collect()
}

// --- Document ---

#[test]
fn plain_sale_needs_nothing_extra() {
    let f = facts(ProfileId::TemelFatura, InvoiceTypeCode::Satis, "TRY");
    assert!(violated(DOCUMENT_RULES, &f).is_empty());
}

#[test]
fn withholding_needs_withholding_total() {
    let mut f = facts(ProfileId::TicariFatura, InvoiceTypeCode::Tevkifat, "TRY");
    assert_eq!(violated(DOCUMENT_RULES, &f), ["TR-D02"]);
    f.sections.insert(Section::WithholdingTaxTotal);
    assert!(violated(DOCUMENT_RULES, &f).is_empty());
}

#[test]
fn export_needs_buyer_and_rate_when_foreign() {
    let mut f = facts(ProfileId::Ihracat, InvoiceTypeCode::Istisna, "EUR");
    assert_eq!(violated(DOCUMENT_RULES, &f), ["TR-D03", "TR-D04"]);
    f.sections.insert(Section::BuyerCustomerParty);
    f.sections.insert(Section::PricingExchangeRate);
    assert!(violated(DOCUMENT_RULES, &f).is_empty());
}

#[test]
fn passenger_invoice_needs_representative() {
    let f = facts(ProfileId::YolcuBeraberFatura, InvoiceTypeCode::Istisna, "TRY");
    assert_eq!(violated(DOCUMENT_RULES, &f), ["TR-D05"]);
}

#[test]
fn return_with_foreign_currency_reports_both_rules() {
    let f = facts(ProfileId::TemelFatura, InvoiceTypeCode::Iade, "USD");
    assert_eq!(violated(DOCUMENT_RULES, &f), ["TR-D01", "TR-D03"]);
}

// --- Parties ---

#[test]
fn tckn_party_without_person() {
    let party = Party {
        party_identifications: vec![PartyIdentification::tckn("12345678901")],
        ..Party::default()
    };
    assert_eq!(violated(TRADING_PARTY_RULES, &party), ["TR-P03"]);
}

#[test]
fn party_with_other_scheme_only_lacks_tax_number() {
    let party = Party {
        party_identifications: vec![PartyIdentification::new("123", "MUSTERINO")],
        ..Party::default()
    };
    assert_eq!(violated(TRADING_PARTY_RULES, &party), ["TR-P00"]);
}

#[test]
fn lowercase_scheme_is_not_a_tax_number() {
    let party = Party {
        party_identifications: vec![PartyIdentification::new("1288331521", "vkn")],
        ..Party::default()
    };
    assert_eq!(violated(TRADING_PARTY_RULES, &party), ["TR-P00"]);
}

#[test]
fn extra_schemes_alongside_vkn_are_fine() {
    let party = Party {
        party_identifications: vec![
            PartyIdentification::new("0123456789012345", "MERSISNO"),
            PartyIdentification::vkn("1288331521"),
        ],
        party_name: Some("AAA AŞ".into()),
        party_tax_scheme: Some(PartyTaxScheme {
            tax_scheme: Some(TaxScheme::tax_office("Büyük Mükellefler")),
            ..PartyTaxScheme::default()
        }),
        ..Party::default()
    };
    assert!(violated(TRADING_PARTY_RULES, &party).is_empty());
}

// --- Signature and taxes ---

#[test]
fn signature_attachment_needs_external_reference() {
    let party = Party::default();
    let mut signature = Signature::new("1288331521", party, "#Signature_1");
    assert!(violated(SIGNATURE_RULES, &signature).is_empty());
    if let Some(attachment) = signature.digital_signature_attachment.as_mut() {
        attachment.external_reference = None;
    }
    assert_eq!(violated(SIGNATURE_RULES, &signature), ["TR-S01"]);
}

#[test]
fn tax_category_names_its_tax() {
    let bare = TaxCategory {
        tax_scheme: Some(TaxScheme::default()),
        ..TaxCategory::default()
    };
    assert_eq!(violated(TAX_CATEGORY_RULES, &bare), ["TR-T01"]);
    let coded = TaxCategory::new(TaxScheme::tax("KDV", "0015"));
    assert!(violated(TAX_CATEGORY_RULES, &coded).is_empty());
}

#[test]
fn rule_tables_describe_themselves() {
    for rule in DOCUMENT_RULES {
        assert_eq!(rule.entity, "Invoice");
        assert!(!rule.description.is_empty());
    }
    assert_eq!(TRADING_PARTY_RULES.len(), 4);
    assert_eq!(TRADING_PARTY_RULES[0].id, "TR-P00");
}
