use chrono::NaiveDate;
use efatura::core::*;
use efatura::invoice::InvoiceAssembler;
use rust_decimal_macros::dec;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), UblError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let issue_date = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
    let mut header = InvoiceHeader::new(
        format_invoice_number("GIB", 2024, 1)?,
        new_uuid(),
        issue_date,
    );
    header.profile_id = Some(ProfileId::TicariFatura);
    header.notes = vec!["Yalnız dokuz yüz kırk dört TL".into()];

    let seller = PartyBuilder::vkn(
        "1288331521",
        AddressBuilder::new("Beşiktaş", "İstanbul")
            .street("Barbaros Bulvarı")
            .building_number("12")
            .postal_zone("34353")
            .build(),
    )
    .name("AAA Yazılım AŞ")
    .tax_office("Büyük Mükellefler")
    .identification("0123456789012345", "MERSISNO")
    .contact(Some("+90 212 555 00 00".into()), None, Some("fatura@aaa.example".into()))
    .build();
    let buyer = PartyBuilder::tckn(
        "12345678901",
        AddressBuilder::new("Çankaya", "Ankara").build(),
    )
    .person("Ayşe", "Yılmaz")
    .build();

    let lines = vec![
        InvoiceLineBuilder::new("1", "Yazılım geliştirme", dec!(6), "HUR", dec!(120))
            .kdv(dec!(20))
            .description("Arayüz geliştirme")
            .build(),
        InvoiceLineBuilder::new("2", "Barındırma (aylık)", dec!(1), "C62", dec!(67))
            .kdv(dec!(20))
            .build(),
    ];
    // 720 + 67 = 787 net, 157.40 KDV
    let tax_total = TaxTotal::new(
        dec!(157.40),
        vec![TaxSubtotal::new(
            dec!(787),
            dec!(157.40),
            dec!(20),
            TaxCategory::new(TaxScheme::tax("KDV", "0015")),
        )],
    );
    let totals = MonetaryTotal {
        line_extension_amount: Some(dec!(787)),
        tax_exclusive_amount: Some(dec!(787)),
        tax_inclusive_amount: Some(dec!(944.40)),
        payable_amount: Some(dec!(944.40)),
        ..MonetaryTotal::default()
    };

    let mut asm = InvoiceAssembler::new(AssemblyOptions::default().verify_totals(true));
    asm.ubl_extensions(&UblExtensions::default())?
        .identification(&header)?
        .signature(&Signature::new("1288331521", seller.clone(), "#Signature_1"))?
        .accounting_supplier_party(&SupplierParty::new(seller))?
        .accounting_customer_party(&CustomerParty::new(buyer))?
        .payment_means(&PaymentMeans {
            payment_means_code: Some("42".into()),
            payment_due_date: NaiveDate::from_ymd_opt(2024, 7, 15),
            payee_financial_account: Some(FinancialAccount::iban("TR330006100519786457841326")),
            ..PaymentMeans::default()
        })?
        .tax_total(&tax_total)?
        .legal_monetary_total(&totals)?
        .invoice_lines(&lines)?;
    let invoice = asm.finish()?;

    for miss in invoice.warnings() {
        println!("warning: {miss}");
    }
    println!("{}", invoice.to_xml()?);
    Ok(())
}
