use quick_xml::events::Event;
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::NsReader;

use crate::core::{SchemaViolation, UblError, CUSTOMIZATION_ID, UBL_VERSION_ID};
use crate::invoice::ubl_ns;

use super::{Conformance, SchemaValidator};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Ns {
    Ext,
    Cbc,
    Cac,
}

impl Ns {
    fn uri(self) -> &'static str {
        match self {
            Ns::Ext => ubl_ns::EXT,
            Ns::Cbc => ubl_ns::CBC,
            Ns::Cac => ubl_ns::CAC,
        }
    }
}

struct Slot {
    name: &'static str,
    ns: Ns,
    repeatable: bool,
    required: bool,
}

const fn slot(name: &'static str, ns: Ns, repeatable: bool, required: bool) -> Slot {
    Slot {
        name,
        ns,
        repeatable,
        required,
    }
}

/// Children of `Invoice`, in Invoice-2.1 sequence order, with UBL-TR
/// occurrence constraints.
static INVOICE_SEQUENCE: &[Slot] = &[
    slot("UBLExtensions", Ns::Ext, false, true),
    slot("UBLVersionID", Ns::Cbc, false, true),
    slot("CustomizationID", Ns::Cbc, false, true),
    slot("ProfileID", Ns::Cbc, false, true),
    slot("ProfileExecutionID", Ns::Cbc, false, false),
    slot("ID", Ns::Cbc, false, true),
    slot("CopyIndicator", Ns::Cbc, false, true),
    slot("UUID", Ns::Cbc, false, true),
    slot("IssueDate", Ns::Cbc, false, true),
    slot("IssueTime", Ns::Cbc, false, false),
    slot("InvoiceTypeCode", Ns::Cbc, false, true),
    slot("Note", Ns::Cbc, true, false),
    slot("TaxPointDate", Ns::Cbc, false, false),
    slot("DocumentCurrencyCode", Ns::Cbc, false, true),
    slot("TaxCurrencyCode", Ns::Cbc, false, false),
    slot("PricingCurrencyCode", Ns::Cbc, false, false),
    slot("PaymentCurrencyCode", Ns::Cbc, false, false),
    slot("PaymentAlternativeCurrencyCode", Ns::Cbc, false, false),
    slot("AccountingCostCode", Ns::Cbc, false, false),
    slot("AccountingCost", Ns::Cbc, false, false),
    slot("LineCountNumeric", Ns::Cbc, false, true),
    slot("BuyerReference", Ns::Cbc, false, false),
    slot("InvoicePeriod", Ns::Cac, false, false),
    slot("OrderReference", Ns::Cac, false, false),
    slot("BillingReference", Ns::Cac, true, false),
    slot("DespatchDocumentReference", Ns::Cac, true, false),
    slot("ReceiptDocumentReference", Ns::Cac, true, false),
    slot("StatementDocumentReference", Ns::Cac, true, false),
    slot("OriginatorDocumentReference", Ns::Cac, true, false),
    slot("ContractDocumentReference", Ns::Cac, true, false),
    slot("AdditionalDocumentReference", Ns::Cac, true, false),
    slot("ProjectReference", Ns::Cac, true, false),
    slot("Signature", Ns::Cac, true, true),
    slot("AccountingSupplierParty", Ns::Cac, false, true),
    slot("AccountingCustomerParty", Ns::Cac, false, true),
    slot("PayeeParty", Ns::Cac, false, false),
    slot("BuyerCustomerParty", Ns::Cac, false, false),
    slot("SellerSupplierParty", Ns::Cac, false, false),
    slot("TaxRepresentativeParty", Ns::Cac, false, false),
    slot("Delivery", Ns::Cac, true, false),
    slot("DeliveryTerms", Ns::Cac, true, false),
    slot("PaymentMeans", Ns::Cac, true, false),
    slot("PaymentTerms", Ns::Cac, true, false),
    slot("PrepaidPayment", Ns::Cac, true, false),
    slot("AllowanceCharge", Ns::Cac, true, false),
    slot("TaxExchangeRate", Ns::Cac, false, false),
    slot("PricingExchangeRate", Ns::Cac, false, false),
    slot("PaymentExchangeRate", Ns::Cac, false, false),
    slot("PaymentAlternativeExchangeRate", Ns::Cac, false, false),
    slot("TaxTotal", Ns::Cac, true, true),
    slot("WithholdingTaxTotal", Ns::Cac, true, false),
    slot("LegalMonetaryTotal", Ns::Cac, false, true),
    slot("InvoiceLine", Ns::Cac, true, true),
];

/// Structural check of the Invoice envelope, without the XSD.
///
/// Verifies well-formedness, the root element and its namespace, the order
/// and namespaces of the root's children, that every mandatory top-level
/// element is present, and the fixed `UBLVersionID` / `CustomizationID`
/// values. Element content below the top level is only checked for
/// well-formedness.
///
/// ```
/// use efatura::validate::{EnvelopeValidator, SchemaValidator};
///
/// let mut validator = EnvelopeValidator::new();
/// let verdict = validator.validate("<Invoice/>").unwrap();
/// assert!(!verdict.is_valid());
/// ```
#[derive(Debug, Clone, Default)]
pub struct EnvelopeValidator {
    _private: (),
}

impl EnvelopeValidator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SchemaValidator for EnvelopeValidator {
    fn validate(&mut self, xml: &str) -> Result<Conformance, UblError> {
        let verdict = match check(xml) {
            Ok(()) => Conformance::Valid,
            Err(violation) => Conformance::Invalid(violation),
        };
        match &verdict {
            Conformance::Valid => tracing::info!(validator = "envelope", "document is valid"),
            Conformance::Invalid(v) => {
                tracing::info!(validator = "envelope", violation = %v, "document is invalid")
            }
        }
        Ok(verdict)
    }
}

/// Line and column (1-based) of the first non-blank byte at or after `offset`.
fn locate(xml: &str, offset: usize) -> (u32, u32) {
    let start = offset.min(xml.len());
    let blank = xml.as_bytes()[start..]
        .iter()
        .take_while(|b| b.is_ascii_whitespace())
        .count();
    let bytes = &xml.as_bytes()[..start + blank];
    let line = bytes.iter().filter(|b| **b == b'\n').count() + 1;
    let line_start = bytes.iter().rposition(|b| *b == b'\n').map_or(0, |i| i + 1);
    let column = bytes.len() - line_start + 1;
    (
        u32::try_from(line).unwrap_or(u32::MAX),
        u32::try_from(column).unwrap_or(u32::MAX),
    )
}

fn violation_at(xml: &str, offset: usize, message: impl Into<String>) -> SchemaViolation {
    let (line, column) = locate(xml, offset);
    SchemaViolation {
        line: Some(line),
        column: Some(column),
        message: message.into(),
    }
}

fn is_bound_to(ns: &ResolveResult<'_>, uri: &str) -> bool {
    matches!(ns, ResolveResult::Bound(Namespace(bound)) if *bound == uri.as_bytes())
}

fn check(xml: &str) -> Result<(), SchemaViolation> {
    let mut reader = NsReader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut depth = 0usize;
    let mut root_seen = false;
    let mut position: Option<usize> = None;
    let mut present = vec![false; INVOICE_SEQUENCE.len()];
    // Top-level element whose text is being collected for a value check.
    let mut capture: Option<(&'static str, String, usize)> = None;

    loop {
        let offset = usize::try_from(reader.buffer_position()).unwrap_or(usize::MAX);
        let (ns, event) = reader
            .read_resolved_event()
            .map_err(|e| violation_at(xml, offset, format!("not well-formed: {e}")))?;

        match event {
            Event::Start(ref e) | Event::Empty(ref e) => {
                let is_empty = matches!(event, Event::Empty(_));
                let local = e.local_name();
                let local = std::str::from_utf8(local.as_ref()).unwrap_or("");

                if depth == 0 {
                    if root_seen {
                        return Err(violation_at(xml, offset, "content after the root element"));
                    }
                    if local != "Invoice" || !is_bound_to(&ns, ubl_ns::INVOICE) {
                        return Err(violation_at(
                            xml,
                            offset,
                            format!("root element must be Invoice in {}", ubl_ns::INVOICE),
                        ));
                    }
                    root_seen = true;
                } else if depth == 1 {
                    let Some(index) = INVOICE_SEQUENCE.iter().position(|s| s.name == local) else {
                        return Err(violation_at(
                            xml,
                            offset,
                            format!("unexpected element {local} in Invoice"),
                        ));
                    };
                    let slot = &INVOICE_SEQUENCE[index];
                    if !is_bound_to(&ns, slot.ns.uri()) {
                        return Err(violation_at(
                            xml,
                            offset,
                            format!("element {local} must be in {}", slot.ns.uri()),
                        ));
                    }
                    if let Some(previous) = position {
                        if index < previous {
                            return Err(violation_at(
                                xml,
                                offset,
                                format!(
                                    "element {local} is out of order after {}",
                                    INVOICE_SEQUENCE[previous].name
                                ),
                            ));
                        }
                        if index == previous && !slot.repeatable {
                            return Err(violation_at(
                                xml,
                                offset,
                                format!("element {local} may occur only once"),
                            ));
                        }
                    }
                    position = Some(index);
                    present[index] = true;
                    if !is_empty && matches!(slot.name, "UBLVersionID" | "CustomizationID") {
                        capture = Some((slot.name, String::new(), offset));
                    } else if is_empty && matches!(slot.name, "UBLVersionID" | "CustomizationID") {
                        check_value(xml, slot.name, "", offset)?;
                    }
                }

                if !is_empty {
                    depth += 1;
                }
            }
            Event::Text(ref t) => {
                if let Some((_, text, _)) = capture.as_mut() {
                    let unescaped = t
                        .unescape()
                        .map_err(|e| violation_at(xml, offset, format!("bad text: {e}")))?;
                    text.push_str(&unescaped);
                }
            }
            Event::End(_) => {
                depth = depth.saturating_sub(1);
                if depth == 1 {
                    if let Some((name, text, at)) = capture.take() {
                        check_value(xml, name, text.trim(), at)?;
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !root_seen {
        return Err(SchemaViolation {
            line: None,
            column: None,
            message: "document has no root element".into(),
        });
    }
    if let Some(missing) = INVOICE_SEQUENCE
        .iter()
        .zip(&present)
        .find(|(slot, seen)| slot.required && !**seen)
    {
        return Err(SchemaViolation {
            line: None,
            column: None,
            message: format!("missing required element {}", missing.0.name),
        });
    }
    Ok(())
}

fn check_value(xml: &str, name: &str, value: &str, offset: usize) -> Result<(), SchemaViolation> {
    let expected = match name {
        "UBLVersionID" => UBL_VERSION_ID,
        "CustomizationID" => CUSTOMIZATION_ID,
        _ => return Ok(()),
    };
    if value == expected {
        Ok(())
    } else {
        Err(violation_at(
            xml,
            offset,
            format!("{name} must be {expected}, found '{value}'"),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEAD: &str = r#"<Invoice xmlns="urn:oasis:names:specification:ubl:schema:xsd:Invoice-2" xmlns:cac="urn:oasis:names:specification:ubl:schema:xsd:CommonAggregateComponents-2" xmlns:cbc="urn:oasis:names:specification:ubl:schema:xsd:CommonBasicComponents-2" xmlns:ext="urn:oasis:names:specification:ubl:schema:xsd:CommonExtensionComponents-2">"#;

    fn body(version: &str) -> String {
        format!(
            "{HEAD}\n<ext:UBLExtensions/>\n<cbc:UBLVersionID>{version}</cbc:UBLVersionID>\
             <cbc:CustomizationID>TR1.2</cbc:CustomizationID><cbc:ProfileID>TEMELFATURA</cbc:ProfileID>\
             <cbc:ID>GIB2024000000001</cbc:ID><cbc:CopyIndicator>false</cbc:CopyIndicator>\
             <cbc:UUID>U</cbc:UUID><cbc:IssueDate>2024-03-01</cbc:IssueDate>\
             <cbc:InvoiceTypeCode>SATIS</cbc:InvoiceTypeCode>\
             <cbc:DocumentCurrencyCode>TRY</cbc:DocumentCurrencyCode>\
             <cbc:LineCountNumeric>1</cbc:LineCountNumeric><cac:Signature/>\
             <cac:AccountingSupplierParty/><cac:AccountingCustomerParty/><cac:TaxTotal/>\
             <cac:LegalMonetaryTotal/><cac:InvoiceLine/><cac:InvoiceLine/></Invoice>"
        )
    }

    fn verdict(xml: &str) -> Conformance {
        EnvelopeValidator::new().validate(xml).unwrap()
    }

    #[test]
    fn complete_envelope_is_valid() {
        assert_eq!(verdict(&body("2.1")), Conformance::Valid);
    }

    #[test]
    fn wrong_version_is_reported_with_location() {
        let v = verdict(&body("2.0"));
        let violation = v.violation().unwrap();
        assert!(violation.message.contains("UBLVersionID must be 2.1"));
        assert_eq!(violation.line, Some(3));
    }

    #[test]
    fn out_of_order_child() {
        let xml = body("2.1").replace(
            "<cac:Signature/><cac:AccountingSupplierParty/>",
            "<cac:AccountingSupplierParty/><cac:Signature/>",
        );
        let v = verdict(&xml);
        assert!(v.violation().unwrap().message.contains("out of order"));
    }

    #[test]
    fn duplicate_single_child() {
        let xml = body("2.1").replace(
            "<cac:LegalMonetaryTotal/>",
            "<cac:LegalMonetaryTotal/><cac:LegalMonetaryTotal/>",
        );
        assert!(verdict(&xml)
            .violation()
            .unwrap()
            .message
            .contains("only once"));
    }

    #[test]
    fn missing_required_child() {
        let xml = body("2.1").replace("<cac:TaxTotal/>", "");
        let v = verdict(&xml);
        assert_eq!(
            v.violation().unwrap().message,
            "missing required element TaxTotal"
        );
    }

    #[test]
    fn wrong_namespace() {
        let xml = body("2.1").replace("<cac:Signature/>", "<cbc:Signature/>");
        assert!(verdict(&xml).violation().unwrap().message.contains("must be in"));
        assert!(!verdict("<Invoice/>").is_valid());
    }

    #[test]
    fn malformed_input() {
        let v = verdict(&format!("{HEAD}<cbc:ID>1</cbc:UUID></Invoice>"));
        assert!(v.violation().unwrap().message.starts_with("not well-formed"));
    }

    #[test]
    fn locate_counts_lines_and_columns() {
        assert_eq!(locate("ab\ncd", 4), (2, 2));
        assert_eq!(locate("ab", 0), (1, 1));
        assert_eq!(locate("a>\n  <b", 2), (2, 3));
    }
}
