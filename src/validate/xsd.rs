use libxml::parser::Parser;
use libxml::schemas::{SchemaParserContext, SchemaValidationContext};

use crate::core::{SchemaViolation, UblError};

use super::{Conformance, SchemaValidator};

/// Full XSD validation through libxml2.
///
/// The schema is compiled once in [`XsdValidator::from_file`]; the same
/// instance then validates any number of documents.
pub struct XsdValidator {
    schema: SchemaValidationContext,
    parser: Parser,
}

impl std::fmt::Debug for XsdValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("XsdValidator").finish_non_exhaustive()
    }
}

impl XsdValidator {
    /// Compile `UBL-Invoice-2.1.xsd` (or any schema) from `path`. Included
    /// component schemas are resolved relative to it.
    pub fn from_file(path: &str) -> Result<Self, UblError> {
        let mut parser_context = SchemaParserContext::from_file(path);
        let schema = SchemaValidationContext::from_parser(&mut parser_context).map_err(|errors| {
            let detail = errors
                .iter()
                .filter_map(|e| e.message.as_deref())
                .map(str::trim)
                .collect::<Vec<_>>()
                .join("; ");
            UblError::Schema(format!("cannot compile {path}: {detail}"))
        })?;
        tracing::debug!(path, "compiled XSD");
        Ok(Self {
            schema,
            parser: Parser::default(),
        })
    }
}

impl SchemaValidator for XsdValidator {
    fn validate(&mut self, xml: &str) -> Result<Conformance, UblError> {
        let document = match self.parser.parse_string(xml) {
            Ok(document) => document,
            Err(e) => {
                let violation = SchemaViolation {
                    line: None,
                    column: None,
                    message: format!("not well-formed: {e:?}"),
                };
                tracing::info!(validator = "xsd", violation = %violation, "document is invalid");
                return Ok(Conformance::Invalid(violation));
            }
        };

        match self.schema.validate_document(&document) {
            Ok(()) => {
                tracing::info!(validator = "xsd", "document is valid");
                Ok(Conformance::Valid)
            }
            Err(errors) => {
                let violation = errors
                    .first()
                    .map(|e| SchemaViolation {
                        line: e.line.and_then(|l| u32::try_from(l).ok()),
                        column: e.col.and_then(|c| u32::try_from(c).ok()),
                        message: e
                            .message
                            .as_deref()
                            .unwrap_or("schema violation")
                            .trim()
                            .to_string(),
                    })
                    .unwrap_or_else(|| SchemaViolation {
                        line: None,
                        column: None,
                        message: "schema violation".into(),
                    });
                tracing::info!(
                    validator = "xsd",
                    violation = %violation,
                    errors = errors.len(),
                    "document is invalid"
                );
                Ok(Conformance::Invalid(violation))
            }
        }
    }
}
