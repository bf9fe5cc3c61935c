use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::document::{LineReference, OrderLineReference};
use super::finance::{AllowanceCharge, TaxTotal};
use super::logistics::Delivery;
use super::party::Country;
use super::types::{Code, Quantity};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ItemIdentification {
    /// Required.
    pub id: Option<String>,
}

impl ItemIdentification {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: Some(id.into()) }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CommodityClassification {
    /// `listAgencyID` / `listID` travel on the code, e.g. GTİP customs tariff numbers.
    pub item_classification_code: Option<Code>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ItemInstance {
    pub product_trace_id: Option<String>,
    pub manufacture_date: Option<NaiveDate>,
    pub best_before_date: Option<NaiveDate>,
    pub registration_id: Option<String>,
    pub serial_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Item {
    pub description: Option<String>,
    /// Required.
    pub name: Option<String>,
    pub keyword: Option<String>,
    pub brand_name: Option<String>,
    pub model_name: Option<String>,
    pub buyers_item_identification: Option<ItemIdentification>,
    pub sellers_item_identification: Option<ItemIdentification>,
    pub manufacturers_item_identification: Option<ItemIdentification>,
    pub additional_item_identifications: Vec<ItemIdentification>,
    pub origin_country: Option<Country>,
    pub commodity_classifications: Vec<CommodityClassification>,
    pub item_instances: Vec<ItemInstance>,
}

impl Item {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Price {
    /// Required.
    pub price_amount: Option<Decimal>,
    pub currency_id: Option<String>,
}

impl Price {
    pub fn new(price_amount: Decimal) -> Self {
        Self {
            price_amount: Some(price_amount),
            currency_id: None,
        }
    }
}

/// `cac:InvoiceLine`; nested lines are emitted as `cac:SubInvoiceLine`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InvoiceLine {
    /// Required.
    pub id: Option<String>,
    pub notes: Vec<String>,
    /// Required, with a required `unitCode`.
    pub invoiced_quantity: Option<Quantity>,
    /// Required.
    pub line_extension_amount: Option<Decimal>,
    pub order_line_references: Vec<OrderLineReference>,
    pub despatch_line_references: Vec<LineReference>,
    pub receipt_line_references: Vec<LineReference>,
    pub deliveries: Vec<Delivery>,
    pub allowance_charges: Vec<AllowanceCharge>,
    pub tax_total: Option<TaxTotal>,
    pub withholding_tax_totals: Vec<TaxTotal>,
    /// Required.
    pub item: Option<Item>,
    /// Required.
    pub price: Option<Price>,
    pub sub_invoice_lines: Vec<InvoiceLine>,
    /// Currency of the line amounts; inherited by nested tax totals, allowances and price.
    pub currency_id: Option<String>,
}
