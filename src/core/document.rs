use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::finance::Period;
use super::party::Party;
use super::types::{Identifier, InvoiceTypeCode, ProfileId};

/// Element placed inside `ext:ExtensionContent` until the signing step
/// replaces it with the XAdES signature.
pub const SIGNATURE_PLACEHOLDER: &str = "auto-generated_for_wildcard";

/// The identification block at the head of the invoice, from `ProfileID`
/// through `LineCountNumeric`. `UBLVersionID` and `CustomizationID` are fixed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceHeader {
    /// Required.
    pub profile_id: Option<ProfileId>,
    /// Required. 16 characters: 3-character prefix, issue year, 9-digit sequence.
    pub id: Option<String>,
    pub copy_indicator: bool,
    /// Required. Caller-supplied so that output stays deterministic; see [`new_uuid`].
    pub uuid: Option<String>,
    /// Required.
    pub issue_date: Option<NaiveDate>,
    pub issue_time: Option<NaiveTime>,
    /// Required.
    pub invoice_type_code: Option<InvoiceTypeCode>,
    pub notes: Vec<String>,
    /// Falls back to the assembler's default currency when unset.
    pub document_currency_code: Option<String>,
    pub tax_currency_code: Option<String>,
    pub pricing_currency_code: Option<String>,
    pub payment_currency_code: Option<String>,
    pub accounting_cost: Option<String>,
    /// Counted from the appended invoice lines when unset.
    pub line_count: Option<u32>,
}

impl InvoiceHeader {
    /// A TEMELFATURA / SATIS header with the given number, UUID and issue date.
    pub fn new(id: impl Into<String>, uuid: impl Into<String>, issue_date: NaiveDate) -> Self {
        Self {
            profile_id: Some(ProfileId::TemelFatura),
            id: Some(id.into()),
            copy_indicator: false,
            uuid: Some(uuid.into()),
            issue_date: Some(issue_date),
            issue_time: None,
            invoice_type_code: Some(InvoiceTypeCode::Satis),
            notes: Vec::new(),
            document_currency_code: None,
            tax_currency_code: None,
            pricing_currency_code: None,
            payment_currency_code: None,
            accounting_cost: None,
            line_count: None,
        }
    }
}

/// Generate a random (v4) UUID for `InvoiceHeader::uuid`.
pub fn new_uuid() -> String {
    uuid::Uuid::new_v4().to_string().to_uppercase()
}

/// `ext:UBLExtensions` with a single extension whose content is a placeholder element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UblExtensions {
    pub placeholder: String,
}

impl Default for UblExtensions {
    fn default() -> Self {
        Self {
            placeholder: SIGNATURE_PLACEHOLDER.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExternalReference {
    /// Required.
    pub uri: Option<String>,
}

impl ExternalReference {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: Some(uri.into()),
        }
    }
}

/// `cbc:EmbeddedDocumentBinaryObject`: base64 content supplied by the caller.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EmbeddedDocument {
    pub content: String,
    /// Required companion attribute `mimeCode`.
    pub mime_code: Option<String>,
    pub filename: Option<String>,
    pub encoding_code: Option<String>,
    pub character_set_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Attachment {
    pub embedded_document: Option<EmbeddedDocument>,
    pub external_reference: Option<ExternalReference>,
}

/// `cac:DespatchDocumentReference`, `cac:AdditionalDocumentReference`, ...
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DocumentReference {
    /// Required.
    pub id: Option<Identifier>,
    /// Required.
    pub issue_date: Option<NaiveDate>,
    pub document_type_code: Option<String>,
    pub document_type: Option<String>,
    pub document_descriptions: Vec<String>,
    pub attachment: Option<Attachment>,
    pub validity_period: Option<Period>,
    pub issuer_party: Option<Box<Party>>,
}

impl DocumentReference {
    pub fn new(id: impl Into<String>, issue_date: NaiveDate) -> Self {
        Self {
            id: Some(Identifier::new(id)),
            issue_date: Some(issue_date),
            ..Self::default()
        }
    }
}

/// `cac:BillingReference`, pointing a return invoice at the original.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BillingReference {
    /// Required.
    pub invoice_document_reference: Option<DocumentReference>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OrderReference {
    /// Required.
    pub id: Option<String>,
    pub sales_order_id: Option<String>,
    /// Required.
    pub issue_date: Option<NaiveDate>,
    pub order_type_code: Option<String>,
    pub document_reference: Option<DocumentReference>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OrderLineReference {
    /// Required.
    pub line_id: Option<String>,
    pub sales_order_line_id: Option<String>,
    pub uuid: Option<String>,
    pub line_status_code: Option<String>,
    pub order_reference: Option<OrderReference>,
}

/// `cac:DespatchLineReference`, `cac:ReceiptLineReference`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LineReference {
    /// Required.
    pub line_id: Option<String>,
    pub line_status_code: Option<String>,
    pub document_reference: Option<DocumentReference>,
}

/// `cac:Signature`: where the signature lives, not the signature itself.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Signature {
    /// Required. VKN or TCKN of the signer; `schemeID` defaults to `VKN_TCKN`.
    pub id: Option<Identifier>,
    /// Required.
    pub signatory_party: Option<Party>,
    pub digital_signature_attachment: Option<Attachment>,
}

impl Signature {
    /// A signature block for `signer` (VKN or TCKN) referencing `#Signature_<uuid>`.
    pub fn new(signer: impl Into<String>, signatory_party: Party, uri: impl Into<String>) -> Self {
        Self {
            id: Some(Identifier::with_scheme(signer, "VKN_TCKN")),
            signatory_party: Some(signatory_party),
            digital_signature_attachment: Some(Attachment {
                embedded_document: None,
                external_reference: Some(ExternalReference::new(uri)),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_defaults() {
        let header = InvoiceHeader::new(
            "GIB2009000000001",
            "F47AC10B-58CC-4372-A567-0E02B2C3D479",
            NaiveDate::from_ymd_opt(2009, 1, 5).unwrap(),
        );
        assert_eq!(header.profile_id, Some(ProfileId::TemelFatura));
        assert_eq!(header.invoice_type_code, Some(InvoiceTypeCode::Satis));
        assert!(!header.copy_indicator);
        assert!(header.line_count.is_none());
    }

    #[test]
    fn generated_uuids_are_distinct_and_uppercase() {
        let a = new_uuid();
        let b = new_uuid();
        assert_ne!(a, b);
        assert_eq!(a.len(), 36);
        assert_eq!(a, a.to_uppercase());
    }

    #[test]
    fn signature_uses_vkn_tckn_scheme() {
        let sig = Signature::new("5750464002", Party::default(), "#Signature_1");
        assert_eq!(
            sig.id.as_ref().and_then(|id| id.scheme_id.as_deref()),
            Some("VKN_TCKN")
        );
    }
}
