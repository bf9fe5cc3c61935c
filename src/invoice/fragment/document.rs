use crate::core::codes::CURRENCY_CODES;
use crate::core::{
    Attachment, BillingReference, Cardinality, CUSTOMIZATION_ID, DocumentReference,
    ExternalReference, InvoiceHeader, LineReference, OrderLineReference, OrderReference,
    Signature, UBL_VERSION_ID, UblError, UblExtensions,
};
use crate::invoice::rules::SIGNATURE_RULES;
use crate::invoice::tree::Element;

use super::{Fragment, Scope};

/// The identification block, rendered inline under the root.
impl Fragment for InvoiceHeader {
    const ENTITY: &'static str = "Invoice";

    fn fill(&self, s: &mut Scope<'_>) -> Result<(), UblError> {
        s.text("cbc:UBLVersionID", Some(UBL_VERSION_ID));
        s.text("cbc:CustomizationID", Some(CUSTOMIZATION_ID));
        s.req_text("cbc:ProfileID", self.profile_id.as_ref().map(|p| p.code()))?;
        s.req_text("cbc:ID", self.id.as_deref())?;
        s.indicator("cbc:CopyIndicator", Some(self.copy_indicator));
        s.req_text("cbc:UUID", self.uuid.as_deref())?;
        s.req_date("cbc:IssueDate", self.issue_date)?;
        s.time("cbc:IssueTime", self.issue_time);
        s.req_text(
            "cbc:InvoiceTypeCode",
            self.invoice_type_code.as_ref().map(|c| c.code()),
        )?;
        s.texts("cbc:Note", &self.notes);

        let document_currency = self
            .document_currency_code
            .clone()
            .unwrap_or_else(|| s.currency().to_string());
        for code in [
            Some(&document_currency),
            self.tax_currency_code.as_ref(),
            self.pricing_currency_code.as_ref(),
            self.payment_currency_code.as_ref(),
        ]
        .into_iter()
        .flatten()
        {
            s.check(&CURRENCY_CODES, code)?;
        }
        s.text("cbc:DocumentCurrencyCode", Some(&document_currency));
        s.text("cbc:TaxCurrencyCode", self.tax_currency_code.as_deref());
        s.text(
            "cbc:PricingCurrencyCode",
            self.pricing_currency_code.as_deref(),
        );
        s.text(
            "cbc:PaymentCurrencyCode",
            self.payment_currency_code.as_deref(),
        );
        s.text("cbc:AccountingCost", self.accounting_cost.as_deref());
        if let Some(count) = self.line_count {
            s.text("cbc:LineCountNumeric", Some(&count.to_string()));
        }
        Ok(())
    }
}

impl Fragment for UblExtensions {
    const ENTITY: &'static str = "UBLExtensions";

    fn fill(&self, s: &mut Scope<'_>) -> Result<(), UblError> {
        if self.placeholder.trim().is_empty() {
            return Err(s.missing("ExtensionContent", Cardinality::Required));
        }
        let mut content = Element::new("ext:ExtensionContent");
        content.push(Element::new(self.placeholder.as_str()));
        let mut extension = Element::new("ext:UBLExtension");
        extension.push(content);
        s.push(extension);
        Ok(())
    }
}

impl Fragment for ExternalReference {
    const ENTITY: &'static str = "ExternalReference";

    fn fill(&self, s: &mut Scope<'_>) -> Result<(), UblError> {
        s.req_text("cbc:URI", self.uri.as_deref())
    }
}

impl Fragment for Attachment {
    const ENTITY: &'static str = "Attachment";

    fn fill(&self, s: &mut Scope<'_>) -> Result<(), UblError> {
        if let Some(doc) = &self.embedded_document {
            let mime = doc.mime_code.as_deref().ok_or_else(|| {
                s.missing(
                    "EmbeddedDocumentBinaryObject@mimeCode",
                    Cardinality::Required,
                )
            })?;
            let mut element = Element::with_text("cbc:EmbeddedDocumentBinaryObject", doc.content.as_str());
            element.set_attribute("mimeCode", mime);
            if let Some(encoding) = &doc.encoding_code {
                element.set_attribute("encodingCode", encoding.as_str());
            }
            if let Some(charset) = &doc.character_set_code {
                element.set_attribute("characterSetCode", charset.as_str());
            }
            if let Some(filename) = &doc.filename {
                element.set_attribute("filename", filename.as_str());
            }
            s.push(element);
        }
        s.child("cac:ExternalReference", self.external_reference.as_ref())
    }
}

impl Fragment for DocumentReference {
    const ENTITY: &'static str = "DocumentReference";

    fn fill(&self, s: &mut Scope<'_>) -> Result<(), UblError> {
        s.req_identifier("cbc:ID", self.id.as_ref())?;
        s.req_date("cbc:IssueDate", self.issue_date)?;
        s.text("cbc:DocumentTypeCode", self.document_type_code.as_deref());
        s.text("cbc:DocumentType", self.document_type.as_deref());
        s.texts("cbc:DocumentDescription", &self.document_descriptions);
        s.child("cac:Attachment", self.attachment.as_ref())?;
        s.child("cac:ValidityPeriod", self.validity_period.as_ref())?;
        s.child("cac:IssuerParty", self.issuer_party.as_deref())
    }
}

impl Fragment for BillingReference {
    const ENTITY: &'static str = "BillingReference";

    fn fill(&self, s: &mut Scope<'_>) -> Result<(), UblError> {
        s.req_child(
            "cac:InvoiceDocumentReference",
            self.invoice_document_reference.as_ref(),
        )
    }
}

impl Fragment for OrderReference {
    const ENTITY: &'static str = "OrderReference";

    fn fill(&self, s: &mut Scope<'_>) -> Result<(), UblError> {
        s.req_text("cbc:ID", self.id.as_deref())?;
        s.text("cbc:SalesOrderID", self.sales_order_id.as_deref());
        s.req_date("cbc:IssueDate", self.issue_date)?;
        s.text("cbc:OrderTypeCode", self.order_type_code.as_deref());
        s.child("cac:DocumentReference", self.document_reference.as_ref())
    }
}

impl Fragment for OrderLineReference {
    const ENTITY: &'static str = "OrderLineReference";

    fn fill(&self, s: &mut Scope<'_>) -> Result<(), UblError> {
        s.req_text("cbc:LineID", self.line_id.as_deref())?;
        s.text("cbc:SalesOrderLineID", self.sales_order_line_id.as_deref());
        s.text("cbc:UUID", self.uuid.as_deref());
        s.text("cbc:LineStatusCode", self.line_status_code.as_deref());
        s.child("cac:OrderReference", self.order_reference.as_ref())
    }
}

impl Fragment for LineReference {
    const ENTITY: &'static str = "LineReference";

    fn fill(&self, s: &mut Scope<'_>) -> Result<(), UblError> {
        s.req_text("cbc:LineID", self.line_id.as_deref())?;
        s.text("cbc:LineStatusCode", self.line_status_code.as_deref());
        s.child("cac:DocumentReference", self.document_reference.as_ref())
    }
}

impl Fragment for Signature {
    const ENTITY: &'static str = "Signature";

    fn fill(&self, s: &mut Scope<'_>) -> Result<(), UblError> {
        s.req_scheme_identifier("cbc:ID", self.id.as_ref())?;
        s.req_child("cac:SignatoryParty", self.signatory_party.as_ref())?;
        s.child(
            "cac:DigitalSignatureAttachment",
            self.digital_signature_attachment.as_ref(),
        )?;
        s.enforce(SIGNATURE_RULES, self)
    }
}

#[cfg(test)]
mod tests {
    use super::super::Context;
    use crate::core::{
        AssemblyOptions, Attachment, EmbeddedDocument, UblError, UblExtensions,
    };

    #[test]
    fn extension_wraps_placeholder() {
        let mut cx = Context::new(AssemblyOptions::default(), "Invoice");
        let el = cx
            .render("ext:UBLExtensions", &UblExtensions::default())
            .unwrap();
        let placeholder = el
            .find("ext:UBLExtension/ext:ExtensionContent/auto-generated_for_wildcard")
            .unwrap();
        assert!(placeholder.children().is_empty());
        assert!(placeholder.text().is_none());
    }

    #[test]
    fn embedded_document_requires_mime_code() {
        let attachment = Attachment {
            embedded_document: Some(EmbeddedDocument {
                content: "UEsDBBQ=".into(),
                filename: Some("fatura.xslt".into()),
                ..EmbeddedDocument::default()
            }),
            external_reference: None,
        };
        let mut cx = Context::new(AssemblyOptions::default(), "Invoice");
        match cx.render("cac:Attachment", &attachment).unwrap_err() {
            UblError::Structural(e) => {
                assert_eq!(e.field, "EmbeddedDocumentBinaryObject@mimeCode")
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
