//! Conditional business rules: "if X holds, Y becomes mandatory".
//!
//! Each rule is a plain record with two predicates so the table can be
//! listed, audited and tested without assembling a document. The
//! assembler enforces a table where the entity is rendered and reports
//! the first violated rule as a [`StructuralError`] carrying the rule ID.

use std::collections::BTreeSet;
use std::fmt;

use crate::core::{
    Cardinality, InvoiceTypeCode, Party, ProfileId, Signature, StructuralError, TaxCategory,
    TaxSubtotal, UblError, DEFAULT_CURRENCY,
};

use super::assembler::Section;

pub struct Rule<T> {
    pub id: &'static str,
    /// Entity the mandatory field belongs to.
    pub entity: &'static str,
    /// Field that becomes mandatory, as a path relative to the entity.
    pub field: &'static str,
    pub description: &'static str,
    pub applies: fn(&T) -> bool,
    pub satisfied: fn(&T) -> bool,
}

impl<T> Rule<T> {
    pub fn is_violated_by(&self, value: &T) -> bool {
        (self.applies)(value) && !(self.satisfied)(value)
    }

    fn to_error(&self, path: &str) -> StructuralError {
        StructuralError::missing(self.entity, self.field, Cardinality::Required)
            .at(path)
            .with_rule(self.id)
    }
}

impl<T> fmt::Debug for Rule<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("id", &self.id)
            .field("entity", &self.entity)
            .field("field", &self.field)
            .finish()
    }
}

/// The rules of `rules` that `value` violates, in table order.
pub fn evaluate<'r, T>(rules: &'r [Rule<T>], value: &T) -> Vec<&'r Rule<T>> {
    rules.iter().filter(|r| r.is_violated_by(value)).collect()
}

/// Fail with the first violated rule.
pub(crate) fn enforce<T>(rules: &[Rule<T>], value: &T, path: &str) -> Result<(), UblError> {
    match rules.iter().find(|r| r.is_violated_by(value)) {
        Some(rule) => Err(rule.to_error(path).into()),
        None => Ok(()),
    }
}

// ---------------------------------------------------------------------------
// Parties

fn identified_by_tax_number(p: &Party) -> bool {
    identified_by_vkn(p) || identified_by_tckn(p)
}

fn identified_by_vkn(p: &Party) -> bool {
    p.has_scheme("VKN")
}

fn identified_by_tckn(p: &Party) -> bool {
    p.has_scheme("TCKN")
}

fn has_tax_office(p: &Party) -> bool {
    p.tax_office().is_some_and(|name| !name.trim().is_empty())
}

fn has_party_name(p: &Party) -> bool {
    p.party_name.as_deref().is_some_and(|name| !name.trim().is_empty())
}

fn has_person(p: &Party) -> bool {
    p.person.is_some()
}

/// Rules for the accounting, buyer, seller and tax representative parties.
pub static TRADING_PARTY_RULES: &[Rule<Party>] = &[
    Rule {
        id: "TR-P00",
        entity: "Party",
        field: "PartyIdentification/ID@schemeID",
        description: "a trading party is identified by VKN or TCKN",
        applies: always,
        satisfied: identified_by_tax_number,
    },
    Rule {
        id: "TR-P01",
        entity: "Party",
        field: "PartyTaxScheme/TaxScheme/Name",
        description: "a party identified by VKN names its tax office",
        applies: identified_by_vkn,
        satisfied: has_tax_office,
    },
    Rule {
        id: "TR-P02",
        entity: "Party",
        field: "PartyName/Name",
        description: "a party identified by VKN carries its company name",
        applies: identified_by_vkn,
        satisfied: has_party_name,
    },
    Rule {
        id: "TR-P03",
        entity: "Party",
        field: "Person",
        description: "a party identified by TCKN carries the person's name",
        applies: identified_by_tckn,
        satisfied: has_person,
    },
];

// ---------------------------------------------------------------------------
// Signature

fn has_signature_attachment(s: &Signature) -> bool {
    s.digital_signature_attachment.is_some()
}

fn attachment_has_external_reference(s: &Signature) -> bool {
    s.digital_signature_attachment
        .as_ref()
        .and_then(|a| a.external_reference.as_ref())
        .is_some()
}

pub static SIGNATURE_RULES: &[Rule<Signature>] = &[Rule {
    id: "TR-S01",
    entity: "Signature",
    field: "DigitalSignatureAttachment/ExternalReference",
    description: "a digital signature attachment points at the signature",
    applies: has_signature_attachment,
    satisfied: attachment_has_external_reference,
}];

// ---------------------------------------------------------------------------
// Taxes

fn always<T>(_: &T) -> bool {
    true
}

fn names_tax(c: &TaxCategory) -> bool {
    c.tax_scheme
        .as_ref()
        .is_some_and(|ts| ts.name.is_some() || ts.tax_type_code.is_some())
}

fn is_zero_kdv(s: &TaxSubtotal) -> bool {
    let kdv = s
        .tax_category
        .as_ref()
        .and_then(TaxCategory::tax_type_code)
        == Some("0015");
    kdv && s.tax_amount.is_some_and(|amount| amount.is_zero())
}

fn has_exemption_code(s: &TaxSubtotal) -> bool {
    s.tax_category
        .as_ref()
        .and_then(|c| c.tax_exemption_reason_code.as_deref())
        .is_some()
}

pub static TAX_CATEGORY_RULES: &[Rule<TaxCategory>] = &[Rule {
    id: "TR-T01",
    entity: "TaxCategory",
    field: "TaxScheme/Name",
    description: "a tax category names its tax or gives its tax type code",
    applies: always,
    satisfied: names_tax,
}];

pub static TAX_SUBTOTAL_RULES: &[Rule<TaxSubtotal>] = &[Rule {
    id: "TR-T02",
    entity: "TaxSubtotal",
    field: "TaxCategory/TaxExemptionReasonCode",
    description: "zero KDV requires an exemption reason code",
    applies: is_zero_kdv,
    satisfied: has_exemption_code,
}];

// ---------------------------------------------------------------------------
// Document

/// What the document-level rules look at once every section is appended.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentFacts {
    pub profile_id: Option<ProfileId>,
    pub invoice_type_code: Option<InvoiceTypeCode>,
    /// Effective document currency.
    pub document_currency: Option<String>,
    pub sections: BTreeSet<Section>,
}

impl DocumentFacts {
    pub fn has(&self, section: Section) -> bool {
        self.sections.contains(&section)
    }
}

fn is_return(f: &DocumentFacts) -> bool {
    f.invoice_type_code == Some(InvoiceTypeCode::Iade)
}

fn is_withholding(f: &DocumentFacts) -> bool {
    f.invoice_type_code == Some(InvoiceTypeCode::Tevkifat)
}

fn is_foreign_currency(f: &DocumentFacts) -> bool {
    f.document_currency
        .as_deref()
        .is_some_and(|c| c != DEFAULT_CURRENCY)
}

fn is_export(f: &DocumentFacts) -> bool {
    f.profile_id == Some(ProfileId::Ihracat)
}

fn is_passenger(f: &DocumentFacts) -> bool {
    f.profile_id == Some(ProfileId::YolcuBeraberFatura)
}

fn has_billing_reference(f: &DocumentFacts) -> bool {
    f.has(Section::BillingReference)
}

fn has_withholding(f: &DocumentFacts) -> bool {
    f.has(Section::WithholdingTaxTotal)
}

fn has_pricing_rate(f: &DocumentFacts) -> bool {
    f.has(Section::PricingExchangeRate)
}

fn has_buyer_customer(f: &DocumentFacts) -> bool {
    f.has(Section::BuyerCustomerParty)
}

fn has_tax_representative(f: &DocumentFacts) -> bool {
    f.has(Section::TaxRepresentativeParty)
}

pub static DOCUMENT_RULES: &[Rule<DocumentFacts>] = &[
    Rule {
        id: "TR-D01",
        entity: "Invoice",
        field: "BillingReference",
        description: "a return invoice references the invoice it returns",
        applies: is_return,
        satisfied: has_billing_reference,
    },
    Rule {
        id: "TR-D02",
        entity: "Invoice",
        field: "WithholdingTaxTotal",
        description: "a withholding invoice carries its withholding total",
        applies: is_withholding,
        satisfied: has_withholding,
    },
    Rule {
        id: "TR-D03",
        entity: "Invoice",
        field: "PricingExchangeRate",
        description: "a foreign-currency invoice gives its exchange rate to TRY",
        applies: is_foreign_currency,
        satisfied: has_pricing_rate,
    },
    Rule {
        id: "TR-D04",
        entity: "Invoice",
        field: "BuyerCustomerParty",
        description: "an export invoice names the foreign buyer",
        applies: is_export,
        satisfied: has_buyer_customer,
    },
    Rule {
        id: "TR-D05",
        entity: "Invoice",
        field: "TaxRepresentativeParty",
        description: "a passenger invoice names the tax-free intermediary",
        applies: is_passenger,
        satisfied: has_tax_representative,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PartyIdentification, TaxScheme};
    use rust_decimal_macros::dec;

    #[test]
    fn rule_ids_are_unique() {
        let mut ids: Vec<&str> = TRADING_PARTY_RULES
            .iter()
            .map(|r| r.id)
            .chain(SIGNATURE_RULES.iter().map(|r| r.id))
            .chain(TAX_CATEGORY_RULES.iter().map(|r| r.id))
            .chain(TAX_SUBTOTAL_RULES.iter().map(|r| r.id))
            .chain(DOCUMENT_RULES.iter().map(|r| r.id))
            .collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn vkn_party_without_tax_office_or_name() {
        let party = Party {
            party_identifications: vec![PartyIdentification::vkn("1288331521")],
            ..Party::default()
        };
        let ids: Vec<_> = evaluate(TRADING_PARTY_RULES, &party)
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, ["TR-P01", "TR-P02"]);
    }

    #[test]
    fn party_needs_a_tax_number_scheme() {
        let party = Party {
            party_identifications: vec![PartyIdentification::new("123456", "MUSTERINO")],
            party_name: Some("AAA AŞ".into()),
            ..Party::default()
        };
        let err = enforce(TRADING_PARTY_RULES, &party, "Invoice/AccountingSupplierParty/Party")
            .unwrap_err();
        match err {
            UblError::Structural(e) => {
                assert_eq!(e.rule, Some("TR-P00"));
                assert_eq!(e.field, "PartyIdentification/ID@schemeID");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn blank_party_name_does_not_count() {
        let party = Party {
            party_identifications: vec![PartyIdentification::vkn("1288331521")],
            party_name: Some("  ".into()),
            ..Party::default()
        };
        assert!(
            evaluate(TRADING_PARTY_RULES, &party)
                .iter()
                .any(|r| r.id == "TR-P02")
        );
    }

    #[test]
    fn zero_kdv_needs_exemption() {
        let kdv = TaxCategory::new(TaxScheme::tax("KDV", "0015"));
        let subtotal = TaxSubtotal::new(dec!(100), dec!(0), dec!(0), kdv);
        let violated = evaluate(TAX_SUBTOTAL_RULES, &subtotal);
        assert_eq!(violated.len(), 1);
        assert_eq!(violated[0].id, "TR-T02");

        let err = enforce(TAX_SUBTOTAL_RULES, &subtotal, "Invoice/TaxTotal/TaxSubtotal")
            .unwrap_err();
        match err {
            UblError::Structural(e) => {
                assert_eq!(e.rule, Some("TR-T02"));
                assert_eq!(e.path, "Invoice/TaxTotal/TaxSubtotal");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_zero_kdv_is_fine() {
        let kdv = TaxCategory::new(TaxScheme::tax("KDV", "0015"));
        let subtotal = TaxSubtotal::new(dec!(688.50), dec!(123.93), dec!(18), kdv);
        assert!(evaluate(TAX_SUBTOTAL_RULES, &subtotal).is_empty());
    }

    #[test]
    fn foreign_currency_needs_pricing_rate() {
        let mut facts = DocumentFacts {
            document_currency: Some("USD".into()),
            ..DocumentFacts::default()
        };
        assert_eq!(evaluate(DOCUMENT_RULES, &facts)[0].id, "TR-D03");
        facts.sections.insert(Section::PricingExchangeRate);
        assert!(evaluate(DOCUMENT_RULES, &facts).is_empty());
    }

    #[test]
    fn return_invoice_needs_billing_reference() {
        let facts = DocumentFacts {
            invoice_type_code: Some(InvoiceTypeCode::Iade),
            document_currency: Some("TRY".into()),
            ..DocumentFacts::default()
        };
        let violated = evaluate(DOCUMENT_RULES, &facts);
        assert_eq!(violated.len(), 1);
        assert_eq!(violated[0].field, "BillingReference");
    }
}
