use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while assembling, serializing or validating a UBL-TR invoice.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum UblError {
    /// A mandatory field, list or companion attribute is missing, or a
    /// conditional business rule is not satisfied.
    #[error("structural error: {0}")]
    Structural(StructuralError),

    /// A document section was appended after a section that follows it in
    /// the Invoice-2.1 sequence.
    #[error("section {section} cannot follow {after}")]
    SectionOrder {
        section: &'static str,
        after: &'static str,
    },

    /// A coded value is not in its reference table (strict mode only).
    #[error("reference data miss: {0}")]
    ReferenceData(ReferenceDataMiss),

    /// A recursive entity nests deeper than the configured limit.
    #[error("{entity} nested deeper than {limit} levels")]
    NestingTooDeep { entity: &'static str, limit: usize },

    /// Invoice number formatting error.
    #[error("numbering error: {0}")]
    Numbering(String),

    /// Invoice totals or arithmetic inconsistency.
    #[error("arithmetic error: {0}")]
    Arithmetic(String),

    /// XML generation or parsing error.
    #[error("XML error: {0}")]
    Xml(String),

    /// The schema could not be loaded or compiled.
    #[error("schema error: {0}")]
    Schema(String),
}

impl From<StructuralError> for UblError {
    fn from(e: StructuralError) -> Self {
        UblError::Structural(e)
    }
}

impl From<ReferenceDataMiss> for UblError {
    fn from(e: ReferenceDataMiss) -> Self {
        UblError::ReferenceData(e)
    }
}

/// Declared occurrence of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cardinality {
    /// Exactly one (1).
    Required,
    /// Zero or one (0..1).
    Optional,
    /// One or more (1..n).
    RequiredMany,
    /// Zero or more (0..n).
    OptionalMany,
}

impl Cardinality {
    /// The UBL-TR notation for this cardinality, e.g. `1..n`.
    pub fn notation(self) -> &'static str {
        match self {
            Cardinality::Required => "1",
            Cardinality::Optional => "0..1",
            Cardinality::RequiredMany => "1..n",
            Cardinality::OptionalMany => "0..n",
        }
    }

    pub fn is_mandatory(self) -> bool {
        matches!(self, Cardinality::Required | Cardinality::RequiredMany)
    }
}

/// A violation of the entity model's mandatory-field contract, detected
/// before anything is serialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuralError {
    /// Entity that owns the field (e.g. "Address").
    pub entity: &'static str,
    /// Schema name of the missing field (e.g. "CityName", "InvoicedQuantity@unitCode").
    pub field: String,
    pub cardinality: Cardinality,
    /// Slash-separated element path from the document root to the entity.
    pub path: String,
    /// Business rule ID when the field is mandatory only through a conditional rule.
    pub rule: Option<&'static str>,
}

impl StructuralError {
    pub fn missing(entity: &'static str, field: impl Into<String>, cardinality: Cardinality) -> Self {
        Self {
            entity,
            field: field.into(),
            cardinality,
            path: String::new(),
            rule: None,
        }
    }

    pub fn at(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn with_rule(mut self, rule: &'static str) -> Self {
        self.rule = Some(rule);
        self
    }

    /// `Entity.Field`, the qualified name used in messages.
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.entity, self.field)
    }
}

impl std::fmt::Display for StructuralError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(rule) = self.rule {
            write!(f, "[{rule}] ")?;
        }
        write!(
            f,
            "missing mandatory field {} ({})",
            self.qualified_name(),
            self.cardinality.notation()
        )?;
        if !self.path.is_empty() {
            write!(f, " at {}", self.path)?;
        }
        Ok(())
    }
}

impl std::error::Error for StructuralError {}

/// A coded value that was not found in its reference table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceDataMiss {
    /// Name of the code list (e.g. "UnitCode").
    pub list: String,
    pub code: String,
    /// Element path where the code was used.
    pub path: String,
}

impl std::fmt::Display for ReferenceDataMiss {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} '{}' is not a known code", self.list, self.code)?;
        if !self.path.is_empty() {
            write!(f, " at {}", self.path)?;
        }
        Ok(())
    }
}

/// A schema violation reported by a [`SchemaValidator`](crate::validate::SchemaValidator).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaViolation {
    pub line: Option<u32>,
    pub column: Option<u32>,
    pub message: String,
}

impl std::fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.line, self.column) {
            (Some(line), Some(col)) => write!(f, "{line}:{col}: {}", self.message),
            (Some(line), None) => write!(f, "{line}: {}", self.message),
            _ => f.write_str(&self.message),
        }
    }
}

/// A single advisory finding with field path and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dot-separated path to the offending field (e.g. "legal_monetary_total.payable_amount").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
    /// Rule ID if applicable (e.g. "TR-M01").
    pub rule: Option<String>,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(rule) = &self.rule {
            write!(f, "[{}] {}: {}", rule, self.field, self.message)
        } else {
            write!(f, "{}: {}", self.field, self.message)
        }
    }
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            rule: None,
        }
    }

    pub fn with_rule(
        field: impl Into<String>,
        message: impl Into<String>,
        rule: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            rule: Some(rule.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structural_error_display() {
        let err = StructuralError::missing("Address", "CityName", Cardinality::Required)
            .at("AccountingSupplierParty/Party/PostalAddress");
        assert_eq!(
            err.to_string(),
            "missing mandatory field Address.CityName (1) at AccountingSupplierParty/Party/PostalAddress"
        );
    }

    #[test]
    fn structural_error_display_with_rule() {
        let err = StructuralError::missing("Party", "PartyTaxScheme/TaxScheme/Name", Cardinality::Required)
            .with_rule("TR-P01");
        assert!(err.to_string().starts_with("[TR-P01] missing mandatory field Party."));
    }

    #[test]
    fn cardinality_notation() {
        assert_eq!(Cardinality::RequiredMany.notation(), "1..n");
        assert!(Cardinality::RequiredMany.is_mandatory());
        assert!(!Cardinality::OptionalMany.is_mandatory());
    }

    #[test]
    fn schema_violation_display() {
        let v = SchemaViolation {
            line: Some(12),
            column: Some(4),
            message: "unexpected element".into(),
        };
        assert_eq!(v.to_string(), "12:4: unexpected element");
    }
}
