use crate::core::{
    AirTransport, Cardinality, CustomsDeclaration, Delivery, DeliveryTerms, Despatch, Dimension, GoodsItem,
    HazardousGoodsTransit, MaritimeTransport, Package, RailTransport, RoadTransport, Shipment,
    Stowage, Temperature, TransportEquipment, TransportHandlingUnit, TransportMeans, UblError,
};

use super::{Fragment, Scope};

impl Fragment for Temperature {
    const ENTITY: &'static str = "Temperature";

    fn fill(&self, s: &mut Scope<'_>) -> Result<(), UblError> {
        s.req_text("cbc:AttributeID", self.attribute_id.as_deref())?;
        if self.measure.is_none() {
            return Err(s.missing("cbc:Measure", Cardinality::Required));
        }
        s.measure("cbc:Measure", self.measure.as_ref())?;
        s.texts("cbc:Description", &self.descriptions);
        Ok(())
    }
}

impl Fragment for Dimension {
    const ENTITY: &'static str = "Dimension";

    fn fill(&self, s: &mut Scope<'_>) -> Result<(), UblError> {
        s.req_text("cbc:AttributeID", self.attribute_id.as_deref())?;
        s.measure("cbc:Measure", self.measure.as_ref())?;
        s.texts("cbc:Description", &self.descriptions);
        s.measure("cbc:MinimumMeasure", self.minimum_measure.as_ref())?;
        s.measure("cbc:MaximumMeasure", self.maximum_measure.as_ref())
    }
}

impl Fragment for DeliveryTerms {
    const ENTITY: &'static str = "DeliveryTerms";

    fn currency(&self) -> Option<&str> {
        self.currency_id.as_deref()
    }

    fn fill(&self, s: &mut Scope<'_>) -> Result<(), UblError> {
        s.identifier("cbc:ID", self.id.as_ref());
        s.text("cbc:SpecialTerms", self.special_terms.as_deref());
        s.amount("cbc:Amount", self.amount);
        Ok(())
    }
}

impl Fragment for Despatch {
    const ENTITY: &'static str = "Despatch";

    fn fill(&self, s: &mut Scope<'_>) -> Result<(), UblError> {
        s.text("cbc:ID", self.id.as_deref());
        s.date("cbc:ActualDespatchDate", self.actual_despatch_date);
        s.time("cbc:ActualDespatchTime", self.actual_despatch_time);
        s.text("cbc:Instructions", self.instructions.as_deref());
        s.child("cac:DespatchAddress", self.despatch_address.as_ref())?;
        s.child("cac:DespatchParty", self.despatch_party.as_ref())?;
        s.child("cac:Contact", self.contact.as_ref())?;
        s.child(
            "cac:EstimatedDespatchPeriod",
            self.estimated_despatch_period.as_ref(),
        )
    }
}

impl Fragment for Delivery {
    const ENTITY: &'static str = "Delivery";
    const RECURSIVE: bool = true;

    fn fill(&self, s: &mut Scope<'_>) -> Result<(), UblError> {
        s.text("cbc:ID", self.id.as_deref());
        s.quantity("cbc:Quantity", self.quantity.as_ref())?;
        s.date("cbc:ActualDeliveryDate", self.actual_delivery_date);
        s.time("cbc:ActualDeliveryTime", self.actual_delivery_time);
        s.date("cbc:LatestDeliveryDate", self.latest_delivery_date);
        s.time("cbc:LatestDeliveryTime", self.latest_delivery_time);
        s.text("cbc:TrackingID", self.tracking_id.as_deref());
        s.child("cac:DeliveryAddress", self.delivery_address.as_ref())?;
        s.child(
            "cac:AlternativeDeliveryLocation",
            self.alternative_delivery_location.as_ref(),
        )?;
        s.child(
            "cac:EstimatedDeliveryPeriod",
            self.estimated_delivery_period.as_ref(),
        )?;
        s.child("cac:CarrierParty", self.carrier_party.as_ref())?;
        s.child("cac:DeliveryParty", self.delivery_party.as_ref())?;
        s.child("cac:Despatch", self.despatch.as_ref())?;
        s.children("cac:DeliveryTerms", &self.delivery_terms)?;
        s.child("cac:Shipment", self.shipment.as_deref())
    }
}

impl Fragment for Shipment {
    const ENTITY: &'static str = "Shipment";

    fn currency(&self) -> Option<&str> {
        self.currency_id.as_deref()
    }

    fn fill(&self, s: &mut Scope<'_>) -> Result<(), UblError> {
        s.req_text("cbc:ID", self.id.as_deref())?;
        s.text("cbc:HandlingCode", self.handling_code.as_deref());
        s.text(
            "cbc:HandlingInstructions",
            self.handling_instructions.as_deref(),
        );
        s.measure("cbc:GrossWeightMeasure", self.gross_weight_measure.as_ref())?;
        s.measure("cbc:NetWeightMeasure", self.net_weight_measure.as_ref())?;
        s.measure("cbc:GrossVolumeMeasure", self.gross_volume_measure.as_ref())?;
        s.measure("cbc:NetVolumeMeasure", self.net_volume_measure.as_ref())?;
        s.quantity(
            "cbc:TotalGoodsItemQuantity",
            self.total_goods_item_quantity.as_ref(),
        )?;
        s.quantity(
            "cbc:TotalTransportHandlingUnitQuantity",
            self.total_transport_handling_unit_quantity.as_ref(),
        )?;
        s.amount("cbc:InsuranceValueAmount", self.insurance_value_amount);
        s.amount(
            "cbc:DeclaredCustomsValueAmount",
            self.declared_customs_value_amount,
        );
        s.amount(
            "cbc:DeclaredForCarriageValueAmount",
            self.declared_for_carriage_value_amount,
        );
        s.amount(
            "cbc:DeclaredStatisticsValueAmount",
            self.declared_statistics_value_amount,
        );
        s.amount("cbc:FreeOnBoardValueAmount", self.free_on_board_value_amount);
        s.texts("cbc:SpecialInstructions", &self.special_instructions);
        s.children("cac:GoodsItem", &self.goods_items)?;
        s.child("cac:Delivery", self.delivery.as_ref())?;
        s.children(
            "cac:TransportHandlingUnit",
            &self.transport_handling_units,
        )?;
        s.child("cac:ReturnAddress", self.return_address.as_ref())?;
        s.child(
            "cac:FirstArrivalPortLocation",
            self.first_arrival_port_location.as_ref(),
        )?;
        s.child(
            "cac:LastExitPortLocation",
            self.last_exit_port_location.as_ref(),
        )
    }
}

impl Fragment for GoodsItem {
    const ENTITY: &'static str = "GoodsItem";

    fn currency(&self) -> Option<&str> {
        self.currency_id.as_deref()
    }

    fn fill(&self, s: &mut Scope<'_>) -> Result<(), UblError> {
        s.text("cbc:ID", self.id.as_deref());
        s.texts("cbc:Description", &self.descriptions);
        s.indicator("cbc:HazardousRiskIndicator", self.hazardous_risk_indicator);
        s.amount(
            "cbc:DeclaredCustomsValueAmount",
            self.declared_customs_value_amount,
        );
        s.amount(
            "cbc:DeclaredForCarriageValueAmount",
            self.declared_for_carriage_value_amount,
        );
        s.amount(
            "cbc:DeclaredStatisticsValueAmount",
            self.declared_statistics_value_amount,
        );
        s.amount("cbc:FreeOnBoardValueAmount", self.free_on_board_value_amount);
        s.amount("cbc:InsuranceValueAmount", self.insurance_value_amount);
        s.amount("cbc:ValueAmount", self.value_amount);
        s.measure("cbc:GrossWeightMeasure", self.gross_weight_measure.as_ref())?;
        s.measure("cbc:NetWeightMeasure", self.net_weight_measure.as_ref())?;
        s.measure(
            "cbc:ChargeableWeightMeasure",
            self.chargeable_weight_measure.as_ref(),
        )?;
        s.measure("cbc:GrossVolumeMeasure", self.gross_volume_measure.as_ref())?;
        s.measure("cbc:NetVolumeMeasure", self.net_volume_measure.as_ref())?;
        s.quantity("cbc:Quantity", self.quantity.as_ref())?;
        s.text("cbc:RequiredCustomsID", self.required_customs_id.as_deref());
        s.text("cbc:CustomsStatusCode", self.customs_status_code.as_deref());
        s.quantity(
            "cbc:CustomsTariffQuantity",
            self.customs_tariff_quantity.as_ref(),
        )?;
        s.indicator(
            "cbc:CustomsImportClassifiedIndicator",
            self.customs_import_classified_indicator,
        );
        s.quantity("cbc:ChargeableQuantity", self.chargeable_quantity.as_ref())?;
        s.quantity("cbc:ReturnableQuantity", self.returnable_quantity.as_ref())?;
        s.text("cbc:TraceID", self.trace_id.as_deref());
        s.children("cac:Item", &self.items)?;
        s.children(
            "cac:FreightAllowanceCharge",
            &self.freight_allowance_charges,
        )?;
        s.children("cac:InvoiceLine", &self.invoice_lines)?;
        s.children("cac:Temperature", &self.temperatures)?;
        s.child("cac:OriginAddress", self.origin_address.as_ref())?;
        s.children("cac:MeasurementDimension", &self.measurement_dimensions)
    }
}

impl Fragment for Package {
    const ENTITY: &'static str = "Package";
    const RECURSIVE: bool = true;

    fn fill(&self, s: &mut Scope<'_>) -> Result<(), UblError> {
        s.text("cbc:ID", self.id.as_deref());
        s.quantity("cbc:Quantity", self.quantity.as_ref())?;
        s.indicator(
            "cbc:ReturnableMaterialIndicator",
            self.returnable_material_indicator,
        );
        s.text("cbc:PackageLevelCode", self.package_level_code.as_deref());
        s.text("cbc:PackagingTypeCode", self.packaging_type_code.as_deref());
        s.texts("cbc:PackingMaterial", &self.packing_materials);
        s.children("cac:ContainedPackage", &self.contained_packages)?;
        s.children("cac:GoodsItem", &self.goods_items)?;
        s.children("cac:MeasurementDimension", &self.measurement_dimensions)
    }
}

impl Fragment for Stowage {
    const ENTITY: &'static str = "Stowage";

    fn fill(&self, s: &mut Scope<'_>) -> Result<(), UblError> {
        s.text("cbc:LocationID", self.location_id.as_deref());
        s.children("cac:Location", &self.locations)?;
        s.children("cac:MeasurementDimension", &self.measurement_dimensions)
    }
}

impl Fragment for AirTransport {
    const ENTITY: &'static str = "AirTransport";

    fn fill(&self, s: &mut Scope<'_>) -> Result<(), UblError> {
        s.req_text("cbc:AircraftID", self.aircraft_id.as_deref())
    }
}

impl Fragment for RoadTransport {
    const ENTITY: &'static str = "RoadTransport";

    fn fill(&self, s: &mut Scope<'_>) -> Result<(), UblError> {
        s.req_text("cbc:LicensePlateID", self.license_plate_id.as_deref())
    }
}

impl Fragment for RailTransport {
    const ENTITY: &'static str = "RailTransport";

    fn fill(&self, s: &mut Scope<'_>) -> Result<(), UblError> {
        s.req_text("cbc:TrainID", self.train_id.as_deref())?;
        s.text("cbc:RailCarID", self.rail_car_id.as_deref());
        Ok(())
    }
}

impl Fragment for MaritimeTransport {
    const ENTITY: &'static str = "MaritimeTransport";

    fn fill(&self, s: &mut Scope<'_>) -> Result<(), UblError> {
        s.text("cbc:VesselID", self.vessel_id.as_deref());
        s.text("cbc:VesselName", self.vessel_name.as_deref());
        s.text("cbc:RadioCallSignID", self.radio_call_sign_id.as_deref());
        s.texts("cbc:ShipsRequirements", &self.ships_requirements);
        s.measure(
            "cbc:GrossTonnageMeasure",
            self.gross_tonnage_measure.as_ref(),
        )?;
        s.measure("cbc:NetTonnageMeasure", self.net_tonnage_measure.as_ref())?;
        s.child(
            "cac:RegistryCertificateDocumentReference",
            self.registry_certificate_document_reference.as_ref(),
        )?;
        s.child(
            "cac:RegistryPortLocation",
            self.registry_port_location.as_ref(),
        )
    }
}

impl Fragment for TransportMeans {
    const ENTITY: &'static str = "TransportMeans";

    fn fill(&self, s: &mut Scope<'_>) -> Result<(), UblError> {
        s.text("cbc:JourneyID", self.journey_id.as_deref());
        s.text(
            "cbc:RegistrationNationalityID",
            self.registration_nationality_id.as_deref(),
        );
        s.texts(
            "cbc:RegistrationNationality",
            &self.registration_nationalities,
        );
        s.text("cbc:DirectionCode", self.direction_code.as_deref());
        s.text(
            "cbc:TransportMeansTypeCode",
            self.transport_means_type_code.as_deref(),
        );
        s.text("cbc:TradeServiceCode", self.trade_service_code.as_deref());
        s.child("cac:Stowage", self.stowage.as_ref())?;
        s.child("cac:AirTransport", self.air_transport.as_ref())?;
        s.child("cac:RoadTransport", self.road_transport.as_ref())?;
        s.child("cac:RailTransport", self.rail_transport.as_ref())?;
        s.child("cac:MaritimeTransport", self.maritime_transport.as_ref())?;
        s.child("cac:OwnerParty", self.owner_party.as_ref())?;
        s.children("cac:MeasurementDimension", &self.measurement_dimensions)
    }
}

impl Fragment for TransportEquipment {
    const ENTITY: &'static str = "TransportEquipment";

    fn fill(&self, s: &mut Scope<'_>) -> Result<(), UblError> {
        s.identifier("cbc:ID", self.id.as_ref());
        s.text(
            "cbc:TransportEquipmentTypeCode",
            self.transport_equipment_type_code.as_deref(),
        );
        s.texts("cbc:Description", &self.descriptions);
        Ok(())
    }
}

impl Fragment for HazardousGoodsTransit {
    const ENTITY: &'static str = "HazardousGoodsTransit";

    fn fill(&self, s: &mut Scope<'_>) -> Result<(), UblError> {
        s.text(
            "cbc:TransportEmergencyCardCode",
            self.transport_emergency_card_code.as_deref(),
        );
        s.text(
            "cbc:PackingCriteriaCode",
            self.packing_criteria_code.as_deref(),
        );
        s.text(
            "cbc:HazardousRegulationCode",
            self.hazardous_regulation_code.as_deref(),
        );
        s.text(
            "cbc:InhalationToxicityZoneCode",
            self.inhalation_toxicity_zone_code.as_deref(),
        );
        s.text(
            "cbc:TransportAuthorizationCode",
            self.transport_authorization_code.as_deref(),
        );
        s.child("cac:MaximumTemperature", self.maximum_temperature.as_ref())?;
        s.child("cac:MinimumTemperature", self.minimum_temperature.as_ref())
    }
}

impl Fragment for CustomsDeclaration {
    const ENTITY: &'static str = "CustomsDeclaration";

    fn fill(&self, s: &mut Scope<'_>) -> Result<(), UblError> {
        s.req_text("cbc:ID", self.id.as_deref())?;
        s.child("cac:IssuerParty", self.issuer_party.as_ref())
    }
}

impl Fragment for TransportHandlingUnit {
    const ENTITY: &'static str = "TransportHandlingUnit";

    fn fill(&self, s: &mut Scope<'_>) -> Result<(), UblError> {
        s.text("cbc:ID", self.id.as_deref());
        s.text(
            "cbc:TransportHandlingUnitTypeCode",
            self.transport_handling_unit_type_code.as_deref(),
        );
        s.text("cbc:HandlingCode", self.handling_code.as_deref());
        s.text(
            "cbc:HandlingInstructions",
            self.handling_instructions.as_deref(),
        );
        s.indicator("cbc:HazardousRiskIndicator", self.hazardous_risk_indicator);
        s.quantity(
            "cbc:TotalGoodsItemQuantity",
            self.total_goods_item_quantity.as_ref(),
        )?;
        s.quantity(
            "cbc:TotalPackageQuantity",
            self.total_package_quantity.as_ref(),
        )?;
        s.texts("cbc:DamageRemarks", &self.damage_remarks);
        s.text("cbc:TraceID", self.trace_id.as_deref());
        s.children("cac:ActualPackage", &self.actual_packages)?;
        s.children("cac:TransportEquipment", &self.transport_equipment)?;
        s.children("cac:TransportMeans", &self.transport_means)?;
        s.children(
            "cac:HazardousGoodsTransit",
            &self.hazardous_goods_transits,
        )?;
        s.children("cac:MeasurementDimension", &self.measurement_dimensions)?;
        s.child("cac:MinimumTemperature", self.minimum_temperature.as_ref())?;
        s.child("cac:MaximumTemperature", self.maximum_temperature.as_ref())?;
        s.child(
            "cac:FloorSpaceMeasurementDimension",
            self.floor_space_measurement_dimension.as_ref(),
        )?;
        s.child(
            "cac:PalletSpaceMeasurementDimension",
            self.pallet_space_measurement_dimension.as_ref(),
        )?;
        s.children(
            "cac:ShipmentDocumentReference",
            &self.shipment_document_references,
        )?;
        s.children("cac:CustomsDeclaration", &self.customs_declarations)
    }
}
