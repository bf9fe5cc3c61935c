//! Delivery, shipment and transport sub-trees.
//!
//! These appear under `cac:Delivery` at document and line level and are
//! mostly relevant to export (IHRACAT) invoices, where customs requires
//! the shipment, package and transport details.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::document::DocumentReference;
use super::finance::{AllowanceCharge, Period};
use super::line::{InvoiceLine, Item};
use super::party::{Address, Contact, Location, Party};
use super::types::{Identifier, Measure, Quantity};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Temperature {
    /// Required.
    pub attribute_id: Option<String>,
    /// Required. Unit is usually CEL.
    pub measure: Option<Measure>,
    pub descriptions: Vec<String>,
}

/// `cac:MeasurementDimension` and the other dimension-typed elements.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Dimension {
    /// Required.
    pub attribute_id: Option<String>,
    pub measure: Option<Measure>,
    pub descriptions: Vec<String>,
    pub minimum_measure: Option<Measure>,
    pub maximum_measure: Option<Measure>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DeliveryTerms {
    /// INCOTERMS code, e.g. `Identifier::with_scheme("FOB", "INCOTERMS")`.
    pub id: Option<Identifier>,
    pub special_terms: Option<String>,
    pub amount: Option<Decimal>,
    pub currency_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Despatch {
    pub id: Option<String>,
    pub actual_despatch_date: Option<NaiveDate>,
    pub actual_despatch_time: Option<NaiveTime>,
    pub instructions: Option<String>,
    pub despatch_address: Option<Address>,
    pub despatch_party: Option<Party>,
    pub contact: Option<Contact>,
    pub estimated_despatch_period: Option<Period>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Delivery {
    pub id: Option<String>,
    pub quantity: Option<Quantity>,
    pub actual_delivery_date: Option<NaiveDate>,
    pub actual_delivery_time: Option<NaiveTime>,
    pub latest_delivery_date: Option<NaiveDate>,
    pub latest_delivery_time: Option<NaiveTime>,
    pub tracking_id: Option<String>,
    pub delivery_address: Option<Address>,
    pub alternative_delivery_location: Option<Location>,
    pub estimated_delivery_period: Option<Period>,
    pub carrier_party: Option<Party>,
    pub delivery_party: Option<Party>,
    pub despatch: Option<Despatch>,
    pub delivery_terms: Vec<DeliveryTerms>,
    pub shipment: Option<Box<Shipment>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Shipment {
    /// Required.
    pub id: Option<String>,
    pub handling_code: Option<String>,
    pub handling_instructions: Option<String>,
    pub gross_weight_measure: Option<Measure>,
    pub net_weight_measure: Option<Measure>,
    pub gross_volume_measure: Option<Measure>,
    pub net_volume_measure: Option<Measure>,
    pub total_goods_item_quantity: Option<Quantity>,
    pub total_transport_handling_unit_quantity: Option<Quantity>,
    pub insurance_value_amount: Option<Decimal>,
    pub declared_customs_value_amount: Option<Decimal>,
    pub declared_for_carriage_value_amount: Option<Decimal>,
    pub declared_statistics_value_amount: Option<Decimal>,
    pub free_on_board_value_amount: Option<Decimal>,
    pub special_instructions: Vec<String>,
    pub goods_items: Vec<GoodsItem>,
    pub delivery: Option<Delivery>,
    pub transport_handling_units: Vec<TransportHandlingUnit>,
    pub return_address: Option<Address>,
    pub first_arrival_port_location: Option<Location>,
    pub last_exit_port_location: Option<Location>,
    pub currency_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GoodsItem {
    pub id: Option<String>,
    pub descriptions: Vec<String>,
    pub hazardous_risk_indicator: Option<bool>,
    pub declared_customs_value_amount: Option<Decimal>,
    pub declared_for_carriage_value_amount: Option<Decimal>,
    pub declared_statistics_value_amount: Option<Decimal>,
    pub free_on_board_value_amount: Option<Decimal>,
    pub insurance_value_amount: Option<Decimal>,
    pub value_amount: Option<Decimal>,
    pub gross_weight_measure: Option<Measure>,
    pub net_weight_measure: Option<Measure>,
    pub chargeable_weight_measure: Option<Measure>,
    pub gross_volume_measure: Option<Measure>,
    pub net_volume_measure: Option<Measure>,
    pub quantity: Option<Quantity>,
    pub required_customs_id: Option<String>,
    pub customs_status_code: Option<String>,
    pub customs_tariff_quantity: Option<Quantity>,
    pub customs_import_classified_indicator: Option<bool>,
    pub chargeable_quantity: Option<Quantity>,
    pub returnable_quantity: Option<Quantity>,
    pub trace_id: Option<String>,
    pub items: Vec<Item>,
    pub freight_allowance_charges: Vec<AllowanceCharge>,
    pub invoice_lines: Vec<InvoiceLine>,
    pub temperatures: Vec<Temperature>,
    pub origin_address: Option<Address>,
    pub measurement_dimensions: Vec<Dimension>,
    pub currency_id: Option<String>,
}

/// `cac:ActualPackage`; nested packages are emitted as `cac:ContainedPackage`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Package {
    pub id: Option<String>,
    pub quantity: Option<Quantity>,
    pub returnable_material_indicator: Option<bool>,
    pub package_level_code: Option<String>,
    pub packaging_type_code: Option<String>,
    pub packing_materials: Vec<String>,
    pub contained_packages: Vec<Package>,
    pub goods_items: Vec<GoodsItem>,
    pub measurement_dimensions: Vec<Dimension>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Stowage {
    pub location_id: Option<String>,
    pub locations: Vec<Location>,
    pub measurement_dimensions: Vec<Dimension>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AirTransport {
    /// Required.
    pub aircraft_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RoadTransport {
    /// Required.
    pub license_plate_id: Option<String>,
}

impl RoadTransport {
    pub fn new(license_plate_id: impl Into<String>) -> Self {
        Self {
            license_plate_id: Some(license_plate_id.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RailTransport {
    /// Required.
    pub train_id: Option<String>,
    pub rail_car_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MaritimeTransport {
    pub vessel_id: Option<String>,
    pub vessel_name: Option<String>,
    pub radio_call_sign_id: Option<String>,
    pub ships_requirements: Vec<String>,
    pub gross_tonnage_measure: Option<Measure>,
    pub net_tonnage_measure: Option<Measure>,
    pub registry_certificate_document_reference: Option<DocumentReference>,
    pub registry_port_location: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TransportMeans {
    pub journey_id: Option<String>,
    pub registration_nationality_id: Option<String>,
    pub registration_nationalities: Vec<String>,
    pub direction_code: Option<String>,
    pub transport_means_type_code: Option<String>,
    pub trade_service_code: Option<String>,
    pub stowage: Option<Stowage>,
    pub air_transport: Option<AirTransport>,
    pub road_transport: Option<RoadTransport>,
    pub rail_transport: Option<RailTransport>,
    pub maritime_transport: Option<MaritimeTransport>,
    pub owner_party: Option<Party>,
    pub measurement_dimensions: Vec<Dimension>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TransportEquipment {
    /// Plate or container number, e.g. `schemeID="DORSEPLAKA"` for a trailer.
    pub id: Option<Identifier>,
    pub transport_equipment_type_code: Option<String>,
    pub descriptions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HazardousGoodsTransit {
    pub transport_emergency_card_code: Option<String>,
    pub packing_criteria_code: Option<String>,
    pub hazardous_regulation_code: Option<String>,
    pub inhalation_toxicity_zone_code: Option<String>,
    pub transport_authorization_code: Option<String>,
    pub maximum_temperature: Option<Temperature>,
    pub minimum_temperature: Option<Temperature>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CustomsDeclaration {
    /// Required.
    pub id: Option<String>,
    pub issuer_party: Option<Party>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TransportHandlingUnit {
    pub id: Option<String>,
    pub transport_handling_unit_type_code: Option<String>,
    pub handling_code: Option<String>,
    pub handling_instructions: Option<String>,
    pub hazardous_risk_indicator: Option<bool>,
    pub total_goods_item_quantity: Option<Quantity>,
    pub total_package_quantity: Option<Quantity>,
    pub damage_remarks: Vec<String>,
    pub trace_id: Option<String>,
    pub actual_packages: Vec<Package>,
    pub transport_equipment: Vec<TransportEquipment>,
    pub transport_means: Vec<TransportMeans>,
    pub hazardous_goods_transits: Vec<HazardousGoodsTransit>,
    pub measurement_dimensions: Vec<Dimension>,
    pub minimum_temperature: Option<Temperature>,
    pub maximum_temperature: Option<Temperature>,
    pub floor_space_measurement_dimension: Option<Dimension>,
    pub pallet_space_measurement_dimension: Option<Dimension>,
    pub shipment_document_references: Vec<DocumentReference>,
    pub customs_declarations: Vec<CustomsDeclaration>,
}

