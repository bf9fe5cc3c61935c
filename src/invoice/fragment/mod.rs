//! Per-entity rendering.
//!
//! Every entity implements [`Fragment`]: it writes its fields, in schema
//! order, into a [`Scope`] that owns the element being built. The scope
//! knows the element path, the enclosing currency and the options, so the
//! helpers can raise a [`StructuralError`] naming the exact field, attach
//! `currencyID`, and look coded values up in the reference tables.

mod document;
mod finance;
mod line;
mod logistics;
mod party;

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;

use crate::core::codes::{CodeTable, CURRENCY_CODES, UNIT_CODES};
use crate::core::{
    AssemblyOptions, Cardinality, Code, Identifier, Measure, Quantity, ReferenceDataMiss,
    StructuralError, UblError,
};

use super::rules::{self, Rule};
use super::serialize::{format_amount, format_numeric};
use super::tree::{Element, local_name};

/// An entity that renders itself as the content of one element.
pub(crate) trait Fragment {
    /// Entity name used in structural errors.
    const ENTITY: &'static str;

    /// Whether the entity can contain itself, directly or indirectly.
    const RECURSIVE: bool = false;

    /// Currency this entity's amounts are expressed in, if it sets one.
    fn currency(&self) -> Option<&str> {
        None
    }

    fn fill(&self, s: &mut Scope<'_>) -> Result<(), UblError>;
}

/// State carried through one document assembly.
#[derive(Debug)]
pub(crate) struct Context {
    options: AssemblyOptions,
    path: Vec<String>,
    entities: Vec<&'static str>,
    currencies: Vec<String>,
    document_currency: Option<String>,
    warnings: Vec<ReferenceDataMiss>,
}

impl Context {
    pub(crate) fn new(options: AssemblyOptions, root: &str) -> Self {
        Self {
            options,
            path: vec![root.to_string()],
            entities: Vec::new(),
            currencies: Vec::new(),
            document_currency: None,
            warnings: Vec::new(),
        }
    }

    pub(crate) fn options(&self) -> &AssemblyOptions {
        &self.options
    }

    pub(crate) fn set_document_currency(&mut self, code: impl Into<String>) {
        self.document_currency = Some(code.into());
    }

    /// Currency in effect: innermost entity currency, then the document's,
    /// then the configured default.
    pub(crate) fn currency(&self) -> &str {
        self.currencies
            .last()
            .or(self.document_currency.as_ref())
            .map_or(self.options.default_currency.as_str(), String::as_str)
    }

    pub(crate) fn path(&self) -> String {
        self.path.join("/")
    }

    pub(crate) fn into_warnings(self) -> Vec<ReferenceDataMiss> {
        self.warnings
    }

    /// Render `value` as an element named `name`.
    pub(crate) fn render<F: Fragment>(&mut self, name: &str, value: &F) -> Result<Element, UblError> {
        self.path.push(local_name(name).to_string());
        let mut element = Element::new(name);
        let result = self.scoped(value, &mut element);
        self.path.pop();
        result.map(|()| element)
    }

    /// Render `value` straight into `parent`, without a wrapping element.
    pub(crate) fn render_inline<F: Fragment>(&mut self, value: &F) -> Result<Vec<Element>, UblError> {
        let mut scratch = Element::new(F::ENTITY);
        self.scoped(value, &mut scratch)?;
        Ok(scratch.into_children())
    }

    fn scoped<F: Fragment>(&mut self, value: &F, element: &mut Element) -> Result<(), UblError> {
        if F::RECURSIVE {
            let depth = self.entities.iter().filter(|e| **e == F::ENTITY).count();
            if depth >= self.options.max_depth {
                return Err(UblError::NestingTooDeep {
                    entity: F::ENTITY,
                    limit: self.options.max_depth,
                });
            }
        }

        let currency = value.currency();
        if let Some(code) = currency {
            self.check(&CURRENCY_CODES, code)?;
            self.currencies.push(code.to_string());
        }
        self.entities.push(F::ENTITY);

        let result = value.fill(&mut Scope {
            cx: &mut *self,
            element: &mut *element,
            entity: F::ENTITY,
        });

        self.entities.pop();
        if currency.is_some() {
            self.currencies.pop();
        }
        result
    }

    /// Look `code` up in `table`; a miss is a warning, or an error in strict mode.
    pub(crate) fn check(&mut self, table: &dyn CodeTable, code: &str) -> Result<(), UblError> {
        if table.contains(code) {
            return Ok(());
        }
        let miss = ReferenceDataMiss {
            list: table.name().to_string(),
            code: code.to_string(),
            path: self.path(),
        };
        if self.options.strict_code_lists {
            return Err(miss.into());
        }
        tracing::warn!(list = table.name(), code, path = %miss.path, "unknown code passed through");
        self.warnings.push(miss);
        Ok(())
    }
}

/// The element an entity is writing into.
pub(crate) struct Scope<'a> {
    cx: &'a mut Context,
    element: &'a mut Element,
    entity: &'static str,
}

impl Scope<'_> {
    pub(crate) fn missing(&self, name: &str, cardinality: Cardinality) -> UblError {
        StructuralError::missing(self.entity, local_name(name), cardinality)
            .at(self.cx.path())
            .into()
    }

    fn missing_attribute(&self, name: &str, attribute: &str) -> UblError {
        self.missing(&format!("{}@{attribute}", local_name(name)), Cardinality::Required)
    }

    pub(crate) fn push(&mut self, element: Element) {
        self.element.push(element);
    }

    pub(crate) fn currency(&self) -> &str {
        self.cx.currency()
    }

    pub(crate) fn check(&mut self, table: &dyn CodeTable, code: &str) -> Result<(), UblError> {
        self.cx.check(table, code)
    }

    pub(crate) fn enforce<T>(&self, rules: &[Rule<T>], value: &T) -> Result<(), UblError> {
        rules::enforce(rules, value, &self.cx.path())
    }

    // -- text ---------------------------------------------------------------

    pub(crate) fn text(&mut self, name: &str, value: Option<&str>) {
        if let Some(value) = value {
            self.element.push(Element::with_text(name, value));
        }
    }

    pub(crate) fn req_text(&mut self, name: &str, value: Option<&str>) -> Result<(), UblError> {
        let value = value.ok_or_else(|| self.missing(name, Cardinality::Required))?;
        self.text(name, Some(value));
        Ok(())
    }

    pub(crate) fn texts(&mut self, name: &str, values: &[String]) {
        for value in values {
            self.element.push(Element::with_text(name, value));
        }
    }

    pub(crate) fn date(&mut self, name: &str, value: Option<NaiveDate>) {
        if let Some(date) = value {
            self.text(name, Some(&date.format("%Y-%m-%d").to_string()));
        }
    }

    pub(crate) fn req_date(&mut self, name: &str, value: Option<NaiveDate>) -> Result<(), UblError> {
        let date = value.ok_or_else(|| self.missing(name, Cardinality::Required))?;
        self.date(name, Some(date));
        Ok(())
    }

    pub(crate) fn time(&mut self, name: &str, value: Option<NaiveTime>) {
        if let Some(time) = value {
            self.text(name, Some(&time.format("%H:%M:%S").to_string()));
        }
    }

    pub(crate) fn indicator(&mut self, name: &str, value: Option<bool>) {
        if let Some(flag) = value {
            self.text(name, Some(if flag { "true" } else { "false" }));
        }
    }

    pub(crate) fn req_indicator(&mut self, name: &str, value: Option<bool>) -> Result<(), UblError> {
        let flag = value.ok_or_else(|| self.missing(name, Cardinality::Required))?;
        self.indicator(name, Some(flag));
        Ok(())
    }

    // -- numbers ------------------------------------------------------------

    pub(crate) fn numeric(&mut self, name: &str, value: Option<Decimal>) {
        if let Some(n) = value {
            self.text(name, Some(&format_numeric(n)));
        }
    }

    pub(crate) fn req_numeric(&mut self, name: &str, value: Option<Decimal>) -> Result<(), UblError> {
        let n = value.ok_or_else(|| self.missing(name, Cardinality::Required))?;
        self.numeric(name, Some(n));
        Ok(())
    }

    /// An amount in the currency in effect.
    pub(crate) fn amount(&mut self, name: &str, value: Option<Decimal>) {
        if let Some(amount) = value {
            let mut element = Element::with_text(name, format_amount(amount));
            element.set_attribute("currencyID", self.cx.currency());
            self.element.push(element);
        }
    }

    pub(crate) fn req_amount(&mut self, name: &str, value: Option<Decimal>) -> Result<(), UblError> {
        let amount = value.ok_or_else(|| self.missing(name, Cardinality::Required))?;
        self.amount(name, Some(amount));
        Ok(())
    }

    /// A measure; `unitCode` is mandatory on every measure.
    pub(crate) fn measure(&mut self, name: &str, value: Option<&Measure>) -> Result<(), UblError> {
        let Some(measure) = value else {
            return Ok(());
        };
        let unit = measure
            .unit_code
            .as_deref()
            .ok_or_else(|| self.missing_attribute(name, "unitCode"))?;
        self.check(&UNIT_CODES, unit)?;
        let mut element = Element::with_text(name, format_numeric(measure.value));
        element.set_attribute("unitCode", unit);
        self.element.push(element);
        Ok(())
    }

    /// A quantity; `unitCode` is optional here.
    pub(crate) fn quantity(&mut self, name: &str, value: Option<&Quantity>) -> Result<(), UblError> {
        let Some(quantity) = value else {
            return Ok(());
        };
        let mut element = Element::with_text(name, format_numeric(quantity.value));
        if let Some(unit) = quantity.unit_code.as_deref() {
            self.check(&UNIT_CODES, unit)?;
            element.set_attribute("unitCode", unit);
        }
        self.element.push(element);
        Ok(())
    }

    /// A mandatory quantity with a mandatory `unitCode`.
    pub(crate) fn req_quantity(&mut self, name: &str, value: Option<&Quantity>) -> Result<(), UblError> {
        let quantity = value.ok_or_else(|| self.missing(name, Cardinality::Required))?;
        if quantity.unit_code.is_none() {
            return Err(self.missing_attribute(name, "unitCode"));
        }
        self.quantity(name, Some(quantity))
    }

    // -- identifiers and codes ----------------------------------------------

    pub(crate) fn identifier(&mut self, name: &str, value: Option<&Identifier>) {
        if let Some(id) = value {
            let mut element = Element::with_text(name, id.value.as_str());
            if let Some(scheme) = &id.scheme_id {
                element.set_attribute("schemeID", scheme.as_str());
            }
            self.element.push(element);
        }
    }

    pub(crate) fn req_identifier(&mut self, name: &str, value: Option<&Identifier>) -> Result<(), UblError> {
        let id = value.ok_or_else(|| self.missing(name, Cardinality::Required))?;
        self.identifier(name, Some(id));
        Ok(())
    }

    /// A mandatory identifier whose `schemeID` is mandatory too.
    pub(crate) fn req_scheme_identifier(
        &mut self,
        name: &str,
        value: Option<&Identifier>,
    ) -> Result<(), UblError> {
        let id = value.ok_or_else(|| self.missing(name, Cardinality::Required))?;
        if id.scheme_id.is_none() {
            return Err(self.missing_attribute(name, "schemeID"));
        }
        self.identifier(name, Some(id));
        Ok(())
    }

    pub(crate) fn code(&mut self, name: &str, value: Option<&Code>) {
        if let Some(code) = value {
            let mut element = Element::with_text(name, code.value.as_str());
            if let Some(list_agency_id) = &code.list_agency_id {
                element.set_attribute("listAgencyID", list_agency_id.as_str());
            }
            if let Some(list_id) = &code.list_id {
                element.set_attribute("listID", list_id.as_str());
            }
            self.element.push(element);
        }
    }

    pub(crate) fn req_code(&mut self, name: &str, value: Option<&Code>) -> Result<(), UblError> {
        let code = value.ok_or_else(|| self.missing(name, Cardinality::Required))?;
        self.code(name, Some(code));
        Ok(())
    }

    // -- aggregates ---------------------------------------------------------

    pub(crate) fn child<F: Fragment>(&mut self, name: &str, value: Option<&F>) -> Result<(), UblError> {
        if let Some(value) = value {
            let element = self.cx.render(name, value)?;
            self.element.push(element);
        }
        Ok(())
    }

    pub(crate) fn req_child<F: Fragment>(&mut self, name: &str, value: Option<&F>) -> Result<(), UblError> {
        let value = value.ok_or_else(|| self.missing(name, Cardinality::Required))?;
        self.child(name, Some(value))
    }

    pub(crate) fn children<F: Fragment>(&mut self, name: &str, values: &[F]) -> Result<(), UblError> {
        for value in values {
            let element = self.cx.render(name, value)?;
            self.element.push(element);
        }
        Ok(())
    }

    pub(crate) fn req_children<F: Fragment>(&mut self, name: &str, values: &[F]) -> Result<(), UblError> {
        if values.is_empty() {
            return Err(self.missing(name, Cardinality::RequiredMany));
        }
        self.children(name, values)
    }
}
