use crate::core::codes::{
    CodeTable, COUNTRY_CODES, PARTY_ID_SCHEMES, TAX_TYPE_CODES, WITHHOLDING_TAX_TYPE_CODES,
};
use crate::core::{
    Address, Communication, Contact, CorporateRegistrationScheme, Country, CustomerParty, Location,
    Party, PartyIdentification, PartyLegalEntity, PartyTaxScheme, Person, SupplierParty, TaxScheme,
    UblError,
};

use super::{Fragment, Scope};
use crate::invoice::tree::Element;

impl Fragment for Country {
    const ENTITY: &'static str = "Country";

    fn fill(&self, s: &mut Scope<'_>) -> Result<(), UblError> {
        if let Some(code) = self.identification_code.as_deref() {
            s.check(&COUNTRY_CODES, code)?;
        }
        s.text("cbc:IdentificationCode", self.identification_code.as_deref());
        s.req_text("cbc:Name", self.name.as_deref())
    }
}

impl Fragment for Address {
    const ENTITY: &'static str = "Address";

    fn fill(&self, s: &mut Scope<'_>) -> Result<(), UblError> {
        s.text("cbc:ID", self.id.as_deref());
        s.text("cbc:Postbox", self.postbox.as_deref());
        s.text("cbc:Room", self.room.as_deref());
        s.text("cbc:StreetName", self.street_name.as_deref());
        s.text("cbc:BlockName", self.block_name.as_deref());
        s.text("cbc:BuildingName", self.building_name.as_deref());
        s.text("cbc:BuildingNumber", self.building_number.as_deref());
        s.req_text("cbc:CitySubdivisionName", self.city_subdivision_name.as_deref())?;
        s.req_text("cbc:CityName", self.city_name.as_deref())?;
        s.text("cbc:PostalZone", self.postal_zone.as_deref());
        s.text("cbc:Region", self.region.as_deref());
        s.text("cbc:District", self.district.as_deref());
        s.req_child("cac:Country", self.country.as_ref())
    }
}

impl Fragment for Location {
    const ENTITY: &'static str = "Location";

    fn fill(&self, s: &mut Scope<'_>) -> Result<(), UblError> {
        s.text("cbc:ID", self.id.as_deref());
        s.child("cac:Address", self.address.as_ref())
    }
}

impl Fragment for TaxScheme {
    const ENTITY: &'static str = "TaxScheme";

    fn fill(&self, s: &mut Scope<'_>) -> Result<(), UblError> {
        if let Some(code) = self.tax_type_code.as_deref() {
            // Withholding subtotals use the 6xx list.
            if !WITHHOLDING_TAX_TYPE_CODES.contains(code) {
                s.check(&TAX_TYPE_CODES, code)?;
            }
        }
        s.text("cbc:ID", self.id.as_deref());
        s.text("cbc:Name", self.name.as_deref());
        s.text("cbc:TaxTypeCode", self.tax_type_code.as_deref());
        Ok(())
    }
}

impl Fragment for PartyTaxScheme {
    const ENTITY: &'static str = "PartyTaxScheme";

    fn fill(&self, s: &mut Scope<'_>) -> Result<(), UblError> {
        s.text("cbc:RegistrationName", self.registration_name.as_deref());
        s.text("cbc:CompanyID", self.company_id.as_deref());
        s.req_child("cac:TaxScheme", self.tax_scheme.as_ref())
    }
}

impl Fragment for Communication {
    const ENTITY: &'static str = "Communication";

    fn fill(&self, s: &mut Scope<'_>) -> Result<(), UblError> {
        s.req_text("cbc:ChannelCode", self.channel_code.as_deref())?;
        s.text("cbc:Channel", self.channel.as_deref());
        s.req_text("cbc:Value", self.value.as_deref())
    }
}

impl Fragment for Contact {
    const ENTITY: &'static str = "Contact";

    fn fill(&self, s: &mut Scope<'_>) -> Result<(), UblError> {
        s.text("cbc:ID", self.id.as_deref());
        s.text("cbc:Name", self.name.as_deref());
        s.text("cbc:Telephone", self.telephone.as_deref());
        s.text("cbc:Telefax", self.telefax.as_deref());
        s.text("cbc:ElectronicMail", self.electronic_mail.as_deref());
        s.texts("cbc:Note", &self.notes);
        s.children("cac:OtherCommunication", &self.other_communication)
    }
}

impl Fragment for PartyIdentification {
    const ENTITY: &'static str = "PartyIdentification";

    fn fill(&self, s: &mut Scope<'_>) -> Result<(), UblError> {
        if let Some(scheme) = self.scheme_id() {
            s.check(&PARTY_ID_SCHEMES, scheme)?;
        }
        s.req_scheme_identifier("cbc:ID", self.id.as_ref())
    }
}

impl Fragment for Person {
    const ENTITY: &'static str = "Person";

    fn fill(&self, s: &mut Scope<'_>) -> Result<(), UblError> {
        s.req_text("cbc:FirstName", self.first_name.as_deref())?;
        s.req_text("cbc:FamilyName", self.family_name.as_deref())?;
        s.text("cbc:Title", self.title.as_deref());
        s.text("cbc:MiddleName", self.middle_name.as_deref());
        s.text("cbc:NameSuffix", self.name_suffix.as_deref());
        s.text("cbc:NationalityID", self.nationality_id.as_deref());
        s.child("cac:FinancialAccount", self.financial_account.as_ref())?;
        s.child(
            "cac:IdentityDocumentReference",
            self.identity_document_reference.as_ref(),
        )
    }
}

impl Fragment for CorporateRegistrationScheme {
    const ENTITY: &'static str = "CorporateRegistrationScheme";

    fn fill(&self, s: &mut Scope<'_>) -> Result<(), UblError> {
        s.text("cbc:ID", self.id.as_deref());
        s.text("cbc:Name", self.name.as_deref());
        s.text(
            "cbc:CorporateRegistrationTypeCode",
            self.corporate_registration_type_code.as_deref(),
        );
        s.children(
            "cac:JurisdictionRegionAddress",
            &self.jurisdiction_region_addresses,
        )
    }
}

impl Fragment for PartyLegalEntity {
    const ENTITY: &'static str = "PartyLegalEntity";

    fn currency(&self) -> Option<&str> {
        self.currency_id.as_deref()
    }

    fn fill(&self, s: &mut Scope<'_>) -> Result<(), UblError> {
        s.text("cbc:RegistrationName", self.registration_name.as_deref());
        s.text("cbc:CompanyID", self.company_id.as_deref());
        s.date("cbc:RegistrationDate", self.registration_date);
        s.indicator(
            "cbc:SoleProprietorshipIndicator",
            self.sole_proprietorship_indicator,
        );
        s.amount("cbc:CorporateStockAmount", self.corporate_stock_amount);
        s.indicator(
            "cbc:FullyPaidSharesIndicator",
            self.fully_paid_shares_indicator,
        );
        s.child(
            "cac:CorporateRegistrationScheme",
            self.corporate_registration_scheme.as_ref(),
        )?;
        s.child("cac:HeadOfficeParty", self.head_office_party.as_deref())
    }
}

impl Fragment for Party {
    const ENTITY: &'static str = "Party";
    const RECURSIVE: bool = true;

    fn fill(&self, s: &mut Scope<'_>) -> Result<(), UblError> {
        s.text("cbc:WebsiteURI", self.website_uri.as_deref());
        s.identifier("cbc:EndpointID", self.endpoint_id.as_ref());
        s.text(
            "cbc:IndustryClassificationCode",
            self.industry_classification_code.as_deref(),
        );
        s.req_children("cac:PartyIdentification", &self.party_identifications)?;
        if let Some(name) = self.party_name.as_deref() {
            let mut party_name = Element::new("cac:PartyName");
            party_name.push(Element::with_text("cbc:Name", name));
            s.push(party_name);
        }
        s.req_child("cac:PostalAddress", self.postal_address.as_ref())?;
        s.child("cac:PhysicalLocation", self.physical_location.as_ref())?;
        s.child("cac:PartyTaxScheme", self.party_tax_scheme.as_ref())?;
        s.children("cac:PartyLegalEntity", &self.party_legal_entities)?;
        s.child("cac:Contact", self.contact.as_ref())?;
        s.child("cac:Person", self.person.as_ref())?;
        s.child("cac:AgentParty", self.agent_party.as_deref())
    }
}

impl Fragment for CustomerParty {
    const ENTITY: &'static str = "CustomerParty";

    fn fill(&self, s: &mut Scope<'_>) -> Result<(), UblError> {
        s.req_child("cac:Party", self.party.as_ref())?;
        s.child("cac:DeliveryContact", self.delivery_contact.as_ref())
    }
}

impl Fragment for SupplierParty {
    const ENTITY: &'static str = "SupplierParty";

    fn fill(&self, s: &mut Scope<'_>) -> Result<(), UblError> {
        s.req_child("cac:Party", self.party.as_ref())?;
        s.child("cac:DespatchContact", self.despatch_contact.as_ref())
    }
}
