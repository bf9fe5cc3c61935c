use serde::{Deserialize, Serialize};

use super::types::DEFAULT_CURRENCY;

/// Knobs for [`InvoiceAssembler`](crate::invoice::InvoiceAssembler).
///
/// ```
/// use efatura::core::AssemblyOptions;
///
/// let options = AssemblyOptions::default()
///     .strict_code_lists(true)
///     .verify_totals(true);
/// assert_eq!(options.default_currency, "TRY");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssemblyOptions {
    /// Currency for amounts whose entity and document name none.
    pub default_currency: String,
    /// Turn reference data misses into errors instead of warnings.
    pub strict_code_lists: bool,
    /// Reject sections appended out of Invoice-2.1 order.
    pub enforce_section_order: bool,
    /// Cross-check tax and monetary totals as they are appended.
    pub verify_totals: bool,
    /// Maximum nesting of a recursive entity inside itself.
    pub max_depth: usize,
}

impl Default for AssemblyOptions {
    fn default() -> Self {
        Self {
            default_currency: DEFAULT_CURRENCY.to_string(),
            strict_code_lists: false,
            enforce_section_order: true,
            verify_totals: false,
            max_depth: 16,
        }
    }
}

impl AssemblyOptions {
    pub fn default_currency(mut self, code: impl Into<String>) -> Self {
        self.default_currency = code.into();
        self
    }

    pub fn strict_code_lists(mut self, strict: bool) -> Self {
        self.strict_code_lists = strict;
        self
    }

    pub fn enforce_section_order(mut self, enforce: bool) -> Self {
        self.enforce_section_order = enforce;
        self
    }

    pub fn verify_totals(mut self, verify: bool) -> Self {
        self.verify_totals = verify;
        self
    }

    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }
}

/// Output formatting for the serializer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SerializeOptions {
    /// Spaces per nesting level; 0 disables pretty-printing.
    pub indent: usize,
    /// Emit `<?xml version="1.0" encoding="UTF-8"?>`.
    pub declaration: bool,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        Self {
            indent: 2,
            declaration: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let o = AssemblyOptions::default();
        assert_eq!(o.default_currency, "TRY");
        assert!(!o.strict_code_lists);
        assert!(o.enforce_section_order);
        assert!(!o.verify_totals);
        assert_eq!(o.max_depth, 16);
    }

    #[test]
    fn partial_config_fills_defaults() {
        let o: AssemblyOptions =
            serde_json::from_str(r#"{"default_currency":"USD","strict_code_lists":true}"#).unwrap();
        assert_eq!(o.default_currency, "USD");
        assert!(o.strict_code_lists);
        assert!(o.enforce_section_order);
        assert_eq!(o.max_depth, 16);
    }
}
