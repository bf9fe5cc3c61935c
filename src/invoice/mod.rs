//! UBL-TR Invoice assembly and serialization.
//!
//! [`InvoiceAssembler`] appends one section at a time in Invoice-2.1
//! order, rendering each entity into an [`Element`] subtree and enforcing
//! mandatory fields and the [`rules`] table as it goes.
//! [`to_xml`] turns the finished [`InvoiceDocument`] into text.

mod assembler;
mod fragment;
pub mod rules;
mod serialize;
mod tree;

pub use assembler::{InvoiceAssembler, InvoiceDocument, Section};
pub use serialize::{element_to_xml, format_amount, format_numeric, to_xml, to_xml_with};
pub use tree::Element;

/// UBL namespace URIs.
pub mod ubl_ns {
    pub const INVOICE: &str = "urn:oasis:names:specification:ubl:schema:xsd:Invoice-2";
    pub const CAC: &str =
        "urn:oasis:names:specification:ubl:schema:xsd:CommonAggregateComponents-2";
    pub const CBC: &str = "urn:oasis:names:specification:ubl:schema:xsd:CommonBasicComponents-2";
    pub const EXT: &str =
        "urn:oasis:names:specification:ubl:schema:xsd:CommonExtensionComponents-2";
}
