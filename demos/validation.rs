use chrono::NaiveDate;
use efatura::core::*;
use efatura::invoice::InvoiceAssembler;
use efatura::validate::{EnvelopeValidator, SchemaValidator};
use rust_decimal_macros::dec;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), UblError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let issue_date = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();

    // Advisory checks on the raw entities
    for error in check_invoice_number("GIB2023000000000", issue_date) {
        println!("numbering: {error}");
    }
    let totals = MonetaryTotal {
        line_extension_amount: Some(dec!(100)),
        tax_exclusive_amount: Some(dec!(100)),
        tax_inclusive_amount: Some(dec!(118)),
        payable_amount: Some(dec!(120)),
        ..MonetaryTotal::default()
    };
    for error in check_monetary_total(&totals) {
        println!("totals: {error}");
    }

    // Structural errors surface while assembling
    let mut party = PartyBuilder::vkn("1288331521", AddressBuilder::new("Konak", "İzmir").build())
        .name("AAA AŞ")
        .build();
    let mut asm = InvoiceAssembler::new(AssemblyOptions::default());
    if let Err(e) = asm.accounting_supplier_party(&SupplierParty::new(party.clone())) {
        println!("assembly: {e}");
    }
    party.party_tax_scheme = Some(PartyTaxScheme {
        tax_scheme: Some(TaxScheme::tax_office("Konak")),
        ..PartyTaxScheme::default()
    });

    // A complete invoice, then the envelope check on its XML
    let line = InvoiceLineBuilder::new("1", "Danışmanlık", dec!(1), "HUR", dec!(100))
        .kdv(dec!(20))
        .build();
    let mut asm = InvoiceAssembler::new(AssemblyOptions::default());
    asm.ubl_extensions(&UblExtensions::default())?
        .identification(&InvoiceHeader::new(
            "GIB2024000000001",
            new_uuid(),
            issue_date,
        ))?
        .signature(&Signature::new("1288331521", party.clone(), "#Signature_1"))?
        .accounting_supplier_party(&SupplierParty::new(party.clone()))?
        .accounting_customer_party(&CustomerParty::new(party))?
        .tax_total(&TaxTotal::new(
            dec!(20),
            vec![TaxSubtotal::new(
                dec!(100),
                dec!(20),
                dec!(20),
                TaxCategory::new(TaxScheme::tax("KDV", "0015")),
            )],
        ))?
        .legal_monetary_total(&MonetaryTotal {
            payable_amount: Some(dec!(120)),
            ..totals
        })?
        .invoice_line(&line)?;
    let xml = asm.finish()?.to_xml()?;

    let mut envelope = EnvelopeValidator::new();
    println!("envelope: {:?}", envelope.validate(&xml)?);
    let broken = xml.replace(">TR1.2<", ">TR1.0<");
    println!("envelope (tampered): {:?}", envelope.validate(&broken)?);

    #[cfg(feature = "xsd")]
    if let Ok(path) = std::env::var("UBL_TR_XSD") {
        let mut xsd = efatura::validate::XsdValidator::from_file(&path)?;
        println!("xsd: {:?}", xsd.validate(&xml)?);
    }

    Ok(())
}
