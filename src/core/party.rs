//! Parties, addresses and the identification blocks hanging off them.
//!
//! Every field that the UBL-TR guide marks as mandatory is still an
//! `Option` here: the model records what the caller supplied, and the
//! assembler reports a [`StructuralError`](super::StructuralError) for
//! whatever is missing. This keeps "unset" distinct from an empty string.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::finance::FinancialAccount;
use super::document::DocumentReference;
use super::types::Identifier;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Country {
    /// ISO 3166-1 alpha-2 code.
    pub identification_code: Option<String>,
    /// Required. Country name, e.g. "Türkiye".
    pub name: Option<String>,
}

impl Country {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            identification_code: None,
            name: Some(name.into()),
        }
    }

    pub fn with_code(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            identification_code: Some(code.into()),
            name: Some(name.into()),
        }
    }
}

/// `cac:PostalAddress` and every other address-typed element.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Address {
    pub id: Option<String>,
    pub postbox: Option<String>,
    pub room: Option<String>,
    pub street_name: Option<String>,
    pub block_name: Option<String>,
    pub building_name: Option<String>,
    pub building_number: Option<String>,
    /// Required. District (ilçe).
    pub city_subdivision_name: Option<String>,
    /// Required. Province (il).
    pub city_name: Option<String>,
    pub postal_zone: Option<String>,
    pub region: Option<String>,
    pub district: Option<String>,
    /// Required.
    pub country: Option<Country>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Location {
    pub id: Option<String>,
    pub address: Option<Address>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TaxScheme {
    pub id: Option<String>,
    /// Tax office name for parties, tax name for tax subtotals.
    pub name: Option<String>,
    /// Code from the tax type table, e.g. "0015" for KDV.
    pub tax_type_code: Option<String>,
}

impl TaxScheme {
    /// A tax scheme naming only the tax office of a party.
    pub fn tax_office(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// A tax scheme for a tax subtotal, e.g. `TaxScheme::tax("KDV", "0015")`.
    pub fn tax(name: impl Into<String>, tax_type_code: impl Into<String>) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
            tax_type_code: Some(tax_type_code.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PartyTaxScheme {
    pub registration_name: Option<String>,
    pub company_id: Option<String>,
    /// Required.
    pub tax_scheme: Option<TaxScheme>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Communication {
    /// Required. UN/EDIFACT 3155 channel code (TE, FX, EM, ...).
    pub channel_code: Option<String>,
    pub channel: Option<String>,
    /// Required.
    pub value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Contact {
    pub id: Option<String>,
    pub name: Option<String>,
    pub telephone: Option<String>,
    pub telefax: Option<String>,
    pub electronic_mail: Option<String>,
    pub notes: Vec<String>,
    pub other_communication: Vec<Communication>,
}

/// `cac:PartyIdentification`. The `ID` must always carry a `schemeID`
/// (VKN, TCKN, MERSISNO, ...).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PartyIdentification {
    /// Required, with a required `schemeID`.
    pub id: Option<Identifier>,
}

impl PartyIdentification {
    pub fn new(value: impl Into<String>, scheme_id: impl Into<String>) -> Self {
        Self {
            id: Some(Identifier::with_scheme(value, scheme_id)),
        }
    }

    /// Tax identification number of a company (10 digits).
    pub fn vkn(value: impl Into<String>) -> Self {
        Self::new(value, "VKN")
    }

    /// National identity number of a person (11 digits).
    pub fn tckn(value: impl Into<String>) -> Self {
        Self::new(value, "TCKN")
    }

    pub fn scheme_id(&self) -> Option<&str> {
        self.id.as_ref().and_then(|id| id.scheme_id.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Person {
    /// Required.
    pub first_name: Option<String>,
    /// Required.
    pub family_name: Option<String>,
    pub title: Option<String>,
    pub middle_name: Option<String>,
    pub name_suffix: Option<String>,
    pub nationality_id: Option<String>,
    pub financial_account: Option<FinancialAccount>,
    pub identity_document_reference: Option<DocumentReference>,
}

impl Person {
    pub fn new(first_name: impl Into<String>, family_name: impl Into<String>) -> Self {
        Self {
            first_name: Some(first_name.into()),
            family_name: Some(family_name.into()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CorporateRegistrationScheme {
    pub id: Option<String>,
    pub name: Option<String>,
    pub corporate_registration_type_code: Option<String>,
    pub jurisdiction_region_addresses: Vec<Address>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PartyLegalEntity {
    pub registration_name: Option<String>,
    pub company_id: Option<String>,
    pub registration_date: Option<NaiveDate>,
    pub sole_proprietorship_indicator: Option<bool>,
    pub corporate_stock_amount: Option<Decimal>,
    pub fully_paid_shares_indicator: Option<bool>,
    pub corporate_registration_scheme: Option<CorporateRegistrationScheme>,
    pub head_office_party: Option<Box<Party>>,
    /// Currency of `corporate_stock_amount`; inherits the document currency when unset.
    pub currency_id: Option<String>,
}

/// `cac:Party`. Also used for agent, signatory, carrier and issuer parties.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Party {
    pub website_uri: Option<String>,
    pub endpoint_id: Option<Identifier>,
    pub industry_classification_code: Option<String>,
    /// Required (1..n).
    pub party_identifications: Vec<PartyIdentification>,
    pub party_name: Option<String>,
    /// Required for accounting supplier and customer parties.
    pub postal_address: Option<Address>,
    pub physical_location: Option<Location>,
    pub party_tax_scheme: Option<PartyTaxScheme>,
    pub party_legal_entities: Vec<PartyLegalEntity>,
    pub contact: Option<Contact>,
    pub person: Option<Person>,
    pub agent_party: Option<Box<Party>>,
}

impl Party {
    /// Whether any identification uses the given scheme (e.g. "VKN").
    pub fn has_scheme(&self, scheme: &str) -> bool {
        self.party_identifications
            .iter()
            .any(|p| p.scheme_id() == Some(scheme))
    }

    /// Tax office name from `PartyTaxScheme/TaxScheme/Name`, if present.
    pub fn tax_office(&self) -> Option<&str> {
        self.party_tax_scheme
            .as_ref()
            .and_then(|pts| pts.tax_scheme.as_ref())
            .and_then(|ts| ts.name.as_deref())
    }
}

/// `cac:AccountingCustomerParty`, `cac:BuyerCustomerParty`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CustomerParty {
    /// Required.
    pub party: Option<Party>,
    pub delivery_contact: Option<Contact>,
}

impl CustomerParty {
    pub fn new(party: Party) -> Self {
        Self {
            party: Some(party),
            delivery_contact: None,
        }
    }
}

/// `cac:AccountingSupplierParty`, `cac:SellerSupplierParty`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SupplierParty {
    /// Required.
    pub party: Option<Party>,
    pub despatch_contact: Option<Contact>,
}

impl SupplierParty {
    pub fn new(party: Party) -> Self {
        Self {
            party: Some(party),
            despatch_contact: None,
        }
    }
}
