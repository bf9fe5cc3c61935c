use std::fmt;

use crate::core::{
    check_monetary_total, check_tax_total, AllowanceCharge, AssemblyOptions, BillingReference,
    Cardinality, CustomerParty, Delivery, DocumentReference, ExchangeRate, InvoiceHeader,
    InvoiceLine, MonetaryTotal, OrderReference, Party, PaymentMeans, PaymentTerms, Period,
    ReferenceDataMiss, SerializeOptions, Signature, StructuralError, SupplierParty, TaxTotal,
    UblError, UblExtensions, ValidationError,
};

use super::fragment::{Context, Fragment};
use super::rules::{self, DocumentFacts, DOCUMENT_RULES, TRADING_PARTY_RULES};
use super::serialize;
use super::tree::Element;
use super::ubl_ns;

/// Top-level sections of an Invoice, in Invoice-2.1 sequence order.
///
/// The derived ordering is the schema order; the assembler rejects a
/// section that ranks below the last one appended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Section {
    UblExtensions,
    /// `UBLVersionID` through `LineCountNumeric`.
    Identification,
    InvoicePeriod,
    OrderReference,
    BillingReference,
    DespatchDocumentReference,
    ReceiptDocumentReference,
    OriginatorDocumentReference,
    ContractDocumentReference,
    AdditionalDocumentReference,
    Signature,
    AccountingSupplierParty,
    AccountingCustomerParty,
    BuyerCustomerParty,
    SellerSupplierParty,
    TaxRepresentativeParty,
    Delivery,
    PaymentMeans,
    PaymentTerms,
    AllowanceCharge,
    TaxExchangeRate,
    PricingExchangeRate,
    PaymentExchangeRate,
    TaxTotal,
    WithholdingTaxTotal,
    LegalMonetaryTotal,
    InvoiceLine,
}

impl Section {
    /// Local name of the section's element.
    pub fn name(self) -> &'static str {
        match self {
            Section::UblExtensions => "UBLExtensions",
            Section::Identification => "Identification",
            Section::InvoicePeriod => "InvoicePeriod",
            Section::OrderReference => "OrderReference",
            Section::BillingReference => "BillingReference",
            Section::DespatchDocumentReference => "DespatchDocumentReference",
            Section::ReceiptDocumentReference => "ReceiptDocumentReference",
            Section::OriginatorDocumentReference => "OriginatorDocumentReference",
            Section::ContractDocumentReference => "ContractDocumentReference",
            Section::AdditionalDocumentReference => "AdditionalDocumentReference",
            Section::Signature => "Signature",
            Section::AccountingSupplierParty => "AccountingSupplierParty",
            Section::AccountingCustomerParty => "AccountingCustomerParty",
            Section::BuyerCustomerParty => "BuyerCustomerParty",
            Section::SellerSupplierParty => "SellerSupplierParty",
            Section::TaxRepresentativeParty => "TaxRepresentativeParty",
            Section::Delivery => "Delivery",
            Section::PaymentMeans => "PaymentMeans",
            Section::PaymentTerms => "PaymentTerms",
            Section::AllowanceCharge => "AllowanceCharge",
            Section::TaxExchangeRate => "TaxExchangeRate",
            Section::PricingExchangeRate => "PricingExchangeRate",
            Section::PaymentExchangeRate => "PaymentExchangeRate",
            Section::TaxTotal => "TaxTotal",
            Section::WithholdingTaxTotal => "WithholdingTaxTotal",
            Section::LegalMonetaryTotal => "LegalMonetaryTotal",
            Section::InvoiceLine => "InvoiceLine",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Sections every invoice must contain, with the field name reported when absent.
const REQUIRED_SECTIONS: &[(Section, &str, Cardinality)] = &[
    (Section::UblExtensions, "UBLExtensions", Cardinality::Required),
    (Section::Identification, "ID", Cardinality::Required),
    (Section::Signature, "Signature", Cardinality::RequiredMany),
    (
        Section::AccountingSupplierParty,
        "AccountingSupplierParty",
        Cardinality::Required,
    ),
    (
        Section::AccountingCustomerParty,
        "AccountingCustomerParty",
        Cardinality::Required,
    ),
    (Section::TaxTotal, "TaxTotal", Cardinality::RequiredMany),
    (
        Section::LegalMonetaryTotal,
        "LegalMonetaryTotal",
        Cardinality::Required,
    ),
    (Section::InvoiceLine, "InvoiceLine", Cardinality::RequiredMany),
];

/// Builds one UBL-TR Invoice, one section at a time.
///
/// Each operation renders its entity completely before touching the
/// document, so a call that fails leaves the document as it was.
///
/// ```
/// use efatura::core::AssemblyOptions;
/// use efatura::invoice::{InvoiceAssembler, Section};
/// use efatura::core::{Period, UblError};
/// use chrono::NaiveDate;
///
/// let mut asm = InvoiceAssembler::new(AssemblyOptions::default());
/// let d = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// asm.invoice_period(&Period::between(d, d)).unwrap();
/// let err = asm.ubl_extensions(&Default::default()).unwrap_err();
/// assert!(matches!(err, UblError::SectionOrder { section: "UBLExtensions", .. }));
/// ```
#[derive(Debug)]
pub struct InvoiceAssembler {
    cx: Context,
    root: Element,
    last: Option<Section>,
    facts: DocumentFacts,
    /// Where `LineCountNumeric` goes when the header leaves it to be counted.
    line_count_at: Option<usize>,
    lines: u32,
}

impl InvoiceAssembler {
    pub fn new(options: AssemblyOptions) -> Self {
        let mut root = Element::new("Invoice");
        root.set_attribute("xmlns", ubl_ns::INVOICE);
        root.set_attribute("xmlns:cac", ubl_ns::CAC);
        root.set_attribute("xmlns:cbc", ubl_ns::CBC);
        root.set_attribute("xmlns:ext", ubl_ns::EXT);
        Self {
            cx: Context::new(options, "Invoice"),
            root,
            last: None,
            facts: DocumentFacts::default(),
            line_count_at: None,
            lines: 0,
        }
    }

    pub fn options(&self) -> &AssemblyOptions {
        self.cx.options()
    }

    /// The last section appended, if any.
    pub fn last_section(&self) -> Option<Section> {
        self.last
    }

    fn enter(&self, section: Section) -> Result<(), UblError> {
        if !self.cx.options().enforce_section_order {
            return Ok(());
        }
        match self.last {
            Some(last) if section < last => Err(UblError::SectionOrder {
                section: section.name(),
                after: last.name(),
            }),
            _ => Ok(()),
        }
    }

    fn commit(&mut self, section: Section, elements: Vec<Element>) {
        let count: usize = elements.iter().map(Element::element_count).sum();
        tracing::debug!(section = section.name(), elements = count, "appended section");
        self.root.extend(elements);
        self.facts.sections.insert(section);
        self.last = Some(section);
    }

    fn append<F: Fragment>(&mut self, section: Section, name: &str, value: &F) -> Result<&mut Self, UblError> {
        self.enter(section)?;
        let element = self.cx.render(name, value)?;
        self.commit(section, vec![element]);
        Ok(self)
    }

    fn append_party<F: Fragment>(
        &mut self,
        section: Section,
        value: &F,
        party: Option<&Party>,
    ) -> Result<&mut Self, UblError> {
        self.enter(section)?;
        let element = self.cx.render(&format!("cac:{}", section.name()), value)?;
        if let Some(party) = party {
            rules::enforce(
                TRADING_PARTY_RULES,
                party,
                &format!("Invoice/{}/Party", section.name()),
            )?;
        }
        self.commit(section, vec![element]);
        Ok(self)
    }

    // -- header ---------------------------------------------------------------

    pub fn ubl_extensions(&mut self, extensions: &UblExtensions) -> Result<&mut Self, UblError> {
        self.append(Section::UblExtensions, "ext:UBLExtensions", extensions)
    }

    /// `UBLVersionID` through `LineCountNumeric`. Fixes the document currency
    /// that amounts without their own currency fall back to.
    pub fn identification(&mut self, header: &InvoiceHeader) -> Result<&mut Self, UblError> {
        self.enter(Section::Identification)?;
        let elements = self.cx.render_inline(header)?;

        let currency = header
            .document_currency_code
            .clone()
            .unwrap_or_else(|| self.cx.currency().to_string());
        self.cx.set_document_currency(currency.clone());
        self.facts.profile_id = header.profile_id.clone();
        self.facts.invoice_type_code = header.invoice_type_code.clone();
        self.facts.document_currency = Some(currency);

        self.commit(Section::Identification, elements);
        if header.line_count.is_none() {
            self.line_count_at = Some(self.root.children().len());
        }
        Ok(self)
    }

    pub fn invoice_period(&mut self, period: &Period) -> Result<&mut Self, UblError> {
        self.append(Section::InvoicePeriod, "cac:InvoicePeriod", period)
    }

    pub fn order_reference(&mut self, reference: &OrderReference) -> Result<&mut Self, UblError> {
        self.append(Section::OrderReference, "cac:OrderReference", reference)
    }

    pub fn billing_reference(&mut self, reference: &BillingReference) -> Result<&mut Self, UblError> {
        self.append(Section::BillingReference, "cac:BillingReference", reference)
    }

    pub fn despatch_document_reference(
        &mut self,
        reference: &DocumentReference,
    ) -> Result<&mut Self, UblError> {
        self.append(
            Section::DespatchDocumentReference,
            "cac:DespatchDocumentReference",
            reference,
        )
    }

    pub fn receipt_document_reference(
        &mut self,
        reference: &DocumentReference,
    ) -> Result<&mut Self, UblError> {
        self.append(
            Section::ReceiptDocumentReference,
            "cac:ReceiptDocumentReference",
            reference,
        )
    }

    pub fn originator_document_reference(
        &mut self,
        reference: &DocumentReference,
    ) -> Result<&mut Self, UblError> {
        self.append(
            Section::OriginatorDocumentReference,
            "cac:OriginatorDocumentReference",
            reference,
        )
    }

    pub fn contract_document_reference(
        &mut self,
        reference: &DocumentReference,
    ) -> Result<&mut Self, UblError> {
        self.append(
            Section::ContractDocumentReference,
            "cac:ContractDocumentReference",
            reference,
        )
    }

    pub fn additional_document_reference(
        &mut self,
        reference: &DocumentReference,
    ) -> Result<&mut Self, UblError> {
        self.append(
            Section::AdditionalDocumentReference,
            "cac:AdditionalDocumentReference",
            reference,
        )
    }

    pub fn signature(&mut self, signature: &Signature) -> Result<&mut Self, UblError> {
        self.append(Section::Signature, "cac:Signature", signature)
    }

    // -- parties --------------------------------------------------------------

    pub fn accounting_supplier_party(&mut self, supplier: &SupplierParty) -> Result<&mut Self, UblError> {
        self.append_party(Section::AccountingSupplierParty, supplier, supplier.party.as_ref())
    }

    pub fn accounting_customer_party(&mut self, customer: &CustomerParty) -> Result<&mut Self, UblError> {
        self.append_party(Section::AccountingCustomerParty, customer, customer.party.as_ref())
    }

    pub fn buyer_customer_party(&mut self, buyer: &CustomerParty) -> Result<&mut Self, UblError> {
        self.append_party(Section::BuyerCustomerParty, buyer, buyer.party.as_ref())
    }

    pub fn seller_supplier_party(&mut self, seller: &SupplierParty) -> Result<&mut Self, UblError> {
        self.append_party(Section::SellerSupplierParty, seller, seller.party.as_ref())
    }

    pub fn tax_representative_party(&mut self, party: &Party) -> Result<&mut Self, UblError> {
        self.enter(Section::TaxRepresentativeParty)?;
        let element = self.cx.render("cac:TaxRepresentativeParty", party)?;
        rules::enforce(TRADING_PARTY_RULES, party, "Invoice/TaxRepresentativeParty")?;
        self.commit(Section::TaxRepresentativeParty, vec![element]);
        Ok(self)
    }

    // -- delivery and payment -------------------------------------------------

    pub fn delivery(&mut self, delivery: &Delivery) -> Result<&mut Self, UblError> {
        self.append(Section::Delivery, "cac:Delivery", delivery)
    }

    pub fn payment_means(&mut self, means: &PaymentMeans) -> Result<&mut Self, UblError> {
        self.append(Section::PaymentMeans, "cac:PaymentMeans", means)
    }

    pub fn payment_terms(&mut self, terms: &PaymentTerms) -> Result<&mut Self, UblError> {
        self.append(Section::PaymentTerms, "cac:PaymentTerms", terms)
    }

    pub fn allowance_charge(&mut self, allowance_charge: &AllowanceCharge) -> Result<&mut Self, UblError> {
        self.append(Section::AllowanceCharge, "cac:AllowanceCharge", allowance_charge)
    }

    pub fn tax_exchange_rate(&mut self, rate: &ExchangeRate) -> Result<&mut Self, UblError> {
        self.append(Section::TaxExchangeRate, "cac:TaxExchangeRate", rate)
    }

    pub fn pricing_exchange_rate(&mut self, rate: &ExchangeRate) -> Result<&mut Self, UblError> {
        self.append(Section::PricingExchangeRate, "cac:PricingExchangeRate", rate)
    }

    pub fn payment_exchange_rate(&mut self, rate: &ExchangeRate) -> Result<&mut Self, UblError> {
        self.append(Section::PaymentExchangeRate, "cac:PaymentExchangeRate", rate)
    }

    // -- totals ---------------------------------------------------------------

    pub fn tax_total(&mut self, total: &TaxTotal) -> Result<&mut Self, UblError> {
        self.verify(|| check_tax_total(total))?;
        self.append(Section::TaxTotal, "cac:TaxTotal", total)
    }

    pub fn withholding_tax_total(&mut self, total: &TaxTotal) -> Result<&mut Self, UblError> {
        self.verify(|| check_tax_total(total))?;
        self.append(Section::WithholdingTaxTotal, "cac:WithholdingTaxTotal", total)
    }

    pub fn legal_monetary_total(&mut self, total: &MonetaryTotal) -> Result<&mut Self, UblError> {
        self.verify(|| check_monetary_total(total))?;
        self.append(Section::LegalMonetaryTotal, "cac:LegalMonetaryTotal", total)
    }

    fn verify(&self, check: impl FnOnce() -> Vec<ValidationError>) -> Result<(), UblError> {
        if !self.cx.options().verify_totals {
            return Ok(());
        }
        let errors = check();
        if errors.is_empty() {
            return Ok(());
        }
        let message = errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        Err(UblError::Arithmetic(message))
    }

    // -- lines ----------------------------------------------------------------

    pub fn invoice_line(&mut self, line: &InvoiceLine) -> Result<&mut Self, UblError> {
        self.append(Section::InvoiceLine, "cac:InvoiceLine", line)?;
        self.lines += 1;
        Ok(self)
    }

    /// Append every line in order. All lines render before any is appended.
    pub fn invoice_lines(&mut self, lines: &[InvoiceLine]) -> Result<&mut Self, UblError> {
        if lines.is_empty() {
            return Err(StructuralError::missing("Invoice", "InvoiceLine", Cardinality::RequiredMany)
                .at("Invoice")
                .into());
        }
        self.enter(Section::InvoiceLine)?;
        let elements = lines
            .iter()
            .map(|line| self.cx.render("cac:InvoiceLine", line))
            .collect::<Result<Vec<_>, _>>()?;
        self.commit(Section::InvoiceLine, elements);
        self.lines += u32::try_from(lines.len()).unwrap_or(u32::MAX);
        Ok(self)
    }

    // -- completion -----------------------------------------------------------

    /// Check that every mandatory section is present and the document-level
    /// rules hold, then hand over the finished tree.
    pub fn finish(mut self) -> Result<InvoiceDocument, UblError> {
        for (section, field, cardinality) in REQUIRED_SECTIONS {
            if !self.facts.has(*section) {
                return Err(StructuralError::missing("Invoice", *field, *cardinality)
                    .at("Invoice")
                    .into());
            }
        }
        rules::enforce(DOCUMENT_RULES, &self.facts, "Invoice")?;

        if let Some(index) = self.line_count_at {
            self.root.insert(
                index,
                Element::with_text("cbc:LineCountNumeric", self.lines.to_string()),
            );
        }

        let warnings = self.cx.into_warnings();
        tracing::debug!(
            lines = self.lines,
            elements = self.root.element_count(),
            warnings = warnings.len(),
            "invoice assembled"
        );
        Ok(InvoiceDocument {
            root: self.root,
            warnings,
        })
    }
}

/// A completely assembled invoice: the element tree plus the code-list
/// misses recorded while building it.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceDocument {
    root: Element,
    warnings: Vec<ReferenceDataMiss>,
}

impl InvoiceDocument {
    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn warnings(&self) -> &[ReferenceDataMiss] {
        &self.warnings
    }

    pub fn into_root(self) -> Element {
        self.root
    }

    pub fn to_xml(&self) -> Result<String, UblError> {
        serialize::to_xml(self)
    }

    pub fn to_xml_with(&self, options: &SerializeOptions) -> Result<String, UblError> {
        serialize::to_xml_with(self, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{
        Address, Country, InvoiceLineBuilder, PartyBuilder, Person, ProfileId, TaxCategory,
        TaxScheme, TaxSubtotal,
    };
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    fn address() -> Address {
        Address {
            city_subdivision_name: Some("Çankaya".into()),
            city_name: Some("Ankara".into()),
            country: Some(Country::with_code("Türkiye", "TR")),
            ..Address::default()
        }
    }

    fn seller() -> Party {
        PartyBuilder::vkn("1288331521", address())
            .name("AAA AŞ")
            .tax_office("Çankaya")
            .build()
    }

    fn buyer() -> Party {
        PartyBuilder::tckn("12345678901", address())
            .person("Ayşe", "Yılmaz")
            .build()
    }

    fn tax_total() -> TaxTotal {
        TaxTotal::new(
            dec!(123.93),
            vec![TaxSubtotal::new(
                dec!(688.50),
                dec!(123.93),
                dec!(18),
                TaxCategory::new(TaxScheme::tax("KDV", "0015")),
            )],
        )
    }

    fn monetary_total() -> MonetaryTotal {
        MonetaryTotal {
            line_extension_amount: Some(dec!(688.50)),
            tax_exclusive_amount: Some(dec!(688.50)),
            tax_inclusive_amount: Some(dec!(812.43)),
            payable_amount: Some(dec!(812.43)),
            ..MonetaryTotal::default()
        }
    }

    fn assembler_through_parties() -> InvoiceAssembler {
        let mut asm = InvoiceAssembler::new(AssemblyOptions::default());
        asm.ubl_extensions(&UblExtensions::default())
            .unwrap()
            .identification(&InvoiceHeader::new("GIB2024000000001", "UUID-1", date()))
            .unwrap()
            .signature(&Signature::new("1288331521", seller(), "#Signature_1"))
            .unwrap()
            .accounting_supplier_party(&SupplierParty::new(seller()))
            .unwrap()
            .accounting_customer_party(&CustomerParty::new(buyer()))
            .unwrap();
        asm
    }

    fn line(id: &str) -> InvoiceLine {
        InvoiceLineBuilder::new(id, "Kalem", dec!(3), "C62", dec!(229.50))
            .kdv(dec!(18))
            .build()
    }

    #[test]
    fn minimal_invoice_assembles() {
        let mut asm = assembler_through_parties();
        asm.tax_total(&tax_total())
            .unwrap()
            .legal_monetary_total(&monetary_total())
            .unwrap()
            .invoice_line(&line("1"))
            .unwrap();
        let doc = asm.finish().unwrap();
        let root = doc.root();
        assert_eq!(root.attribute("xmlns"), Some(ubl_ns::INVOICE));
        assert_eq!(root.find_text("cbc:LineCountNumeric"), Some("1"));
        assert_eq!(root.find_text("cbc:DocumentCurrencyCode"), Some("TRY"));
        assert!(doc.warnings().is_empty());

        let names: Vec<&str> = root.children().iter().map(Element::local_name).collect();
        let count_at = names.iter().position(|n| *n == "LineCountNumeric").unwrap();
        assert_eq!(names[count_at - 1], "DocumentCurrencyCode");
        assert_eq!(names[count_at + 1], "Signature");
    }

    #[test]
    fn out_of_order_section_is_rejected() {
        let mut asm = assembler_through_parties();
        let err = asm
            .signature(&Signature::new("1288331521", seller(), "#Signature_1"))
            .unwrap_err();
        assert!(matches!(
            err,
            UblError::SectionOrder {
                section: "Signature",
                after: "AccountingCustomerParty"
            }
        ));
    }

    #[test]
    fn order_guard_can_be_disabled() {
        let mut asm = InvoiceAssembler::new(AssemblyOptions::default().enforce_section_order(false));
        asm.invoice_period(&Period::between(date(), date())).unwrap();
        assert!(asm.ubl_extensions(&UblExtensions::default()).is_ok());
    }

    #[test]
    fn failed_section_leaves_document_untouched() {
        let mut asm = assembler_through_parties();
        let before = asm.root.element_count();
        let mut broken = tax_total();
        broken.tax_subtotals.clear();
        assert!(asm.tax_total(&broken).is_err());
        assert_eq!(asm.root.element_count(), before);
        assert_eq!(asm.last_section(), Some(Section::AccountingCustomerParty));
    }

    #[test]
    fn trading_party_rules_apply() {
        let mut asm = InvoiceAssembler::new(AssemblyOptions::default());
        let mut nameless = seller();
        nameless.party_name = None;
        let err = asm
            .accounting_supplier_party(&SupplierParty::new(nameless))
            .unwrap_err();
        match err {
            UblError::Structural(e) => {
                assert_eq!(e.rule, Some("TR-P02"));
                assert_eq!(e.path, "Invoice/AccountingSupplierParty/Party");
            }
            other => panic!("unexpected error: {other}"),
        }

        let mut anonymous = buyer();
        anonymous.person = None;
        let err = asm
            .accounting_customer_party(&CustomerParty::new(anonymous))
            .unwrap_err();
        assert!(matches!(err, UblError::Structural(ref e) if e.rule == Some("TR-P03")));

        let mut with_person = buyer();
        with_person.person = Some(Person::new("Ali", "Kaya"));
        assert!(asm.accounting_customer_party(&CustomerParty::new(with_person)).is_ok());
    }

    #[test]
    fn finish_reports_missing_lines() {
        let mut asm = assembler_through_parties();
        asm.tax_total(&tax_total())
            .unwrap()
            .legal_monetary_total(&monetary_total())
            .unwrap();
        match asm.finish().unwrap_err() {
            UblError::Structural(e) => {
                assert_eq!(e.field, "InvoiceLine");
                assert_eq!(e.cardinality, Cardinality::RequiredMany);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_line_list_is_rejected() {
        let mut asm = assembler_through_parties();
        assert!(matches!(
            asm.invoice_lines(&[]).unwrap_err(),
            UblError::Structural(ref e) if e.cardinality == Cardinality::RequiredMany
        ));
    }

    #[test]
    fn explicit_line_count_is_kept() {
        let mut header = InvoiceHeader::new("GIB2024000000001", "UUID-1", date());
        header.line_count = Some(7);
        let mut asm = InvoiceAssembler::new(AssemblyOptions::default());
        asm.ubl_extensions(&UblExtensions::default())
            .unwrap()
            .identification(&header)
            .unwrap()
            .signature(&Signature::new("1288331521", seller(), "#Signature_1"))
            .unwrap()
            .accounting_supplier_party(&SupplierParty::new(seller()))
            .unwrap()
            .accounting_customer_party(&CustomerParty::new(buyer()))
            .unwrap()
            .tax_total(&tax_total())
            .unwrap()
            .legal_monetary_total(&monetary_total())
            .unwrap()
            .invoice_lines(&[line("1"), line("2")])
            .unwrap();
        let doc = asm.finish().unwrap();
        let counts: Vec<_> = doc.root().children_named("cbc:LineCountNumeric").collect();
        assert_eq!(counts.len(), 1);
        assert_eq!(counts[0].text(), Some("7"));
    }

    #[test]
    fn verify_totals_rejects_inconsistent_amounts() {
        let mut asm = InvoiceAssembler::new(AssemblyOptions::default().verify_totals(true));
        let mut total = monetary_total();
        total.payable_amount = Some(dec!(800));
        assert!(matches!(
            asm.legal_monetary_total(&total).unwrap_err(),
            UblError::Arithmetic(ref m) if m.contains("TR-M03")
        ));
        assert!(asm.legal_monetary_total(&monetary_total()).is_ok());
    }

    #[test]
    fn export_profile_requires_buyer_customer() {
        let mut header = InvoiceHeader::new("GIB2024000000001", "UUID-1", date());
        header.profile_id = Some(ProfileId::Ihracat);
        let mut asm = InvoiceAssembler::new(AssemblyOptions::default());
        asm.ubl_extensions(&UblExtensions::default())
            .unwrap()
            .identification(&header)
            .unwrap()
            .signature(&Signature::new("1288331521", seller(), "#Signature_1"))
            .unwrap()
            .accounting_supplier_party(&SupplierParty::new(seller()))
            .unwrap()
            .accounting_customer_party(&CustomerParty::new(buyer()))
            .unwrap()
            .tax_total(&tax_total())
            .unwrap()
            .legal_monetary_total(&monetary_total())
            .unwrap()
            .invoice_line(&line("1"))
            .unwrap();
        match asm.finish().unwrap_err() {
            UblError::Structural(e) => assert_eq!(e.rule, Some("TR-D04")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
