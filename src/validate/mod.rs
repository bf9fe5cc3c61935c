//! Post-serialization conformance checks.
//!
//! A validator is an explicit value: build it once, keep it, and pass it
//! every document you want checked. The core never validates on its own.
//!
//! - [`EnvelopeValidator`] is pure Rust and checks the document envelope:
//!   root element and namespace, top-level element order, mandatory
//!   top-level elements and the fixed version identifiers.
//! - `XsdValidator` (feature `xsd`) runs the full UBL-TR XSD through libxml2.

mod envelope;
#[cfg(feature = "xsd")]
mod xsd;

pub use envelope::EnvelopeValidator;
#[cfg(feature = "xsd")]
pub use xsd::XsdValidator;

use crate::core::{SchemaViolation, UblError};

/// Outcome of validating one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Conformance {
    Valid,
    /// The first violation found.
    Invalid(SchemaViolation),
}

impl Conformance {
    pub fn is_valid(&self) -> bool {
        matches!(self, Conformance::Valid)
    }

    pub fn violation(&self) -> Option<&SchemaViolation> {
        match self {
            Conformance::Valid => None,
            Conformance::Invalid(v) => Some(v),
        }
    }
}

/// Checks serialized invoice text.
///
/// `Err` is reserved for failures of the validator itself; a
/// non-conforming document is `Ok(Conformance::Invalid(..))`.
pub trait SchemaValidator {
    fn validate(&mut self, xml: &str) -> Result<Conformance, UblError>;
}
