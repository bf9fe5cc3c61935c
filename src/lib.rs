//! # efatura
//!
//! UBL-TR (Turkish e-Fatura) invoices: a typed entity model, a document
//! assembler that renders it into a deterministic UBL 2.1 Invoice tree,
//! an XML serializer and post-hoc conformance validators.
//!
//! All monetary values use [`rust_decimal::Decimal`], never floating point.
//! Mandatory fields are `Option`s so that "unset" is distinguishable from
//! an empty string; leaving one unset makes the assembler fail with a
//! [`StructuralError`](crate::core::StructuralError) that names the entity,
//! the field and the element path.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use efatura::core::*;
//! use efatura::invoice::InvoiceAssembler;
//! use rust_decimal_macros::dec;
//!
//! let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
//! let seller = PartyBuilder::vkn("1288331521", AddressBuilder::new("Beşiktaş", "İstanbul").build())
//!     .name("AAA AŞ")
//!     .tax_office("Büyük Mükellefler")
//!     .build();
//! let buyer = PartyBuilder::tckn("12345678901", AddressBuilder::new("Çankaya", "Ankara").build())
//!     .person("Ayşe", "Yılmaz")
//!     .build();
//! let line = InvoiceLineBuilder::new("1", "Danışmanlık", dec!(3), "HUR", dec!(229.50))
//!     .kdv(dec!(18))
//!     .build();
//!
//! let mut asm = InvoiceAssembler::new(AssemblyOptions::default());
//! asm.ubl_extensions(&UblExtensions::default())?
//!     .identification(&InvoiceHeader::new("GIB2024000000001", new_uuid(), date))?
//!     .signature(&Signature::new("1288331521", seller.clone(), "#Signature_1"))?
//!     .accounting_supplier_party(&SupplierParty::new(seller))?
//!     .accounting_customer_party(&CustomerParty::new(buyer))?
//!     .tax_total(line.tax_total.as_ref().unwrap())?
//!     .legal_monetary_total(&MonetaryTotal {
//!         line_extension_amount: Some(dec!(688.50)),
//!         tax_exclusive_amount: Some(dec!(688.50)),
//!         tax_inclusive_amount: Some(dec!(812.43)),
//!         payable_amount: Some(dec!(812.43)),
//!         ..MonetaryTotal::default()
//!     })?
//!     .invoice_line(&line)?;
//! let xml = asm.finish()?.to_xml()?;
//!
//! assert!(xml.contains(r#"<cbc:TaxAmount currencyID="TRY">123.93</cbc:TaxAmount>"#));
//! # Ok::<(), UblError>(())
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` | Entity model, reference data, errors, options, numbering and totals checks |
//! | `invoice` (default) | Assembler, serializer and envelope validator |
//! | `xsd` | Full XSD validation through libxml2 |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "invoice")]
pub mod invoice;

#[cfg(feature = "invoice")]
pub mod validate;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
