use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use efatura::core::*;
use efatura::invoice::{InvoiceAssembler, InvoiceDocument};
use efatura::validate::{EnvelopeValidator, SchemaValidator};

fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

fn seller() -> Party {
    PartyBuilder::vkn(
        "1288331521",
        AddressBuilder::new("Beşiktaş", "İstanbul")
            .street("Barbaros Bulvarı")
            .build(),
    )
    .name("Benchmark AŞ")
    .tax_office("Büyük Mükellefler")
    .build()
}

fn buyer() -> Party {
    PartyBuilder::vkn("9876543210", AddressBuilder::new("Konak", "İzmir").build())
        .name("Müşteri Ltd. Şti.")
        .tax_office("Konak")
        .build()
}

fn lines(count: usize) -> Vec<InvoiceLine> {
    (1..=count)
        .map(|i| {
            InvoiceLineBuilder::new(i.to_string(), format!("Kalem {i}"), dec!(2), "C62", dec!(9.99))
                .kdv(dec!(20))
                .build()
        })
        .collect()
}

fn assemble(lines: &[InvoiceLine]) -> InvoiceDocument {
    let net: Decimal = lines.iter().filter_map(|l| l.line_extension_amount).sum();
    let tax: Decimal = lines
        .iter()
        .filter_map(|l| l.tax_total.as_ref().and_then(|t| t.tax_amount))
        .sum();

    let mut asm = InvoiceAssembler::new(AssemblyOptions::default());
    asm.ubl_extensions(&UblExtensions::default())
        .unwrap()
        .identification(&InvoiceHeader::new(
            "GIB2024000000001",
            "F47AC10B-58CC-4372-A567-0E02B2C3D479",
            test_date(),
        ))
        .unwrap()
        .signature(&Signature::new("1288331521", seller(), "#Signature_1"))
        .unwrap()
        .accounting_supplier_party(&SupplierParty::new(seller()))
        .unwrap()
        .accounting_customer_party(&CustomerParty::new(buyer()))
        .unwrap()
        .tax_total(&TaxTotal::new(
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
        .invoice_lines(lines)
        .unwrap();
    asm.finish().unwrap()
}

fn bench_assemble(c: &mut Criterion) {
    let ten = lines(10);
    c.bench_function("assemble_10_lines", |b| {
        b.iter(|| black_box(assemble(black_box(&ten))));
    });
    let thousand = lines(1000);
    c.bench_function("assemble_1000_lines", |b| {
        b.iter(|| black_box(assemble(black_box(&thousand))));
    });
}

fn bench_serialize(c: &mut Criterion) {
    let doc = assemble(&lines(10));
    c.bench_function("serialize_10_lines", |b| {
        b.iter(|| black_box(black_box(&doc).to_xml()));
    });
    let doc = assemble(&lines(1000));
    c.bench_function("serialize_1000_lines", |b| {
        b.iter(|| black_box(black_box(&doc).to_xml()));
    });
}

fn bench_envelope_validation(c: &mut Criterion) {
    let xml = assemble(&lines(1000)).to_xml().unwrap();
    let mut validator = EnvelopeValidator::new();
    c.bench_function("envelope_validate_1000_lines", |b| {
        b.iter(|| black_box(validator.validate(black_box(&xml))));
    });
}

criterion_group!(
    benches,
    bench_assemble,
    bench_serialize,
    bench_envelope_validation,
);
criterion_main!(benches);
