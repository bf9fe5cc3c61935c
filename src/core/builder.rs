use rust_decimal::{Decimal, RoundingStrategy};

use super::finance::{AllowanceCharge, TaxCategory, TaxSubtotal, TaxTotal};
use super::line::{InvoiceLine, Item, ItemIdentification, Price};
use super::party::{
    Address, Contact, Country, Party, PartyIdentification, PartyTaxScheme, Person, TaxScheme,
};
use super::types::Quantity;

/// Builder for a trading [`Party`] identified by VKN or TCKN.
///
/// ```
/// use efatura::core::*;
///
/// let seller = PartyBuilder::vkn("1288331521", AddressBuilder::new("Beşiktaş", "İstanbul").build())
///     .name("AAA AŞ")
///     .tax_office("Büyük Mükellefler")
///     .build();
/// assert!(seller.has_scheme("VKN"));
/// assert_eq!(seller.tax_office(), Some("Büyük Mükellefler"));
/// ```
pub struct PartyBuilder {
    identifications: Vec<PartyIdentification>,
    name: Option<String>,
    address: Address,
    tax_office: Option<String>,
    person: Option<Person>,
    website_uri: Option<String>,
    contact: Option<Contact>,
}

impl PartyBuilder {
    /// A company, identified by its 10-digit tax number.
    pub fn vkn(vkn: impl Into<String>, address: Address) -> Self {
        Self::with_identification(PartyIdentification::vkn(vkn), address)
    }

    /// A natural person, identified by an 11-digit citizen number.
    pub fn tckn(tckn: impl Into<String>, address: Address) -> Self {
        Self::with_identification(PartyIdentification::tckn(tckn), address)
    }

    fn with_identification(id: PartyIdentification, address: Address) -> Self {
        Self {
            identifications: vec![id],
            name: None,
            address,
            tax_office: None,
            person: None,
            website_uri: None,
            contact: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn tax_office(mut self, office: impl Into<String>) -> Self {
        self.tax_office = Some(office.into());
        self
    }

    pub fn person(mut self, first_name: impl Into<String>, family_name: impl Into<String>) -> Self {
        self.person = Some(Person::new(first_name, family_name));
        self
    }

    /// Additional identification, e.g. `("0123456789012345", "MERSISNO")`.
    pub fn identification(mut self, value: impl Into<String>, scheme_id: impl Into<String>) -> Self {
        self.identifications
            .push(PartyIdentification::new(value, scheme_id));
        self
    }

    pub fn website(mut self, uri: impl Into<String>) -> Self {
        self.website_uri = Some(uri.into());
        self
    }

    pub fn contact(
        mut self,
        telephone: Option<String>,
        telefax: Option<String>,
        electronic_mail: Option<String>,
    ) -> Self {
        self.contact = Some(Contact {
            telephone,
            telefax,
            electronic_mail,
            ..Contact::default()
        });
        self
    }

    pub fn build(self) -> Party {
        Party {
            website_uri: self.website_uri,
            party_identifications: self.identifications,
            party_name: self.name,
            postal_address: Some(self.address),
            party_tax_scheme: self.tax_office.map(|office| PartyTaxScheme {
                tax_scheme: Some(TaxScheme::tax_office(office)),
                ..PartyTaxScheme::default()
            }),
            contact: self.contact,
            person: self.person,
            ..Party::default()
        }
    }
}

/// Builder for a Turkish postal [`Address`].
///
/// UBL-TR requires the district (`CitySubdivisionName`), the city and the
/// country name; the country defaults to Türkiye.
pub struct AddressBuilder {
    street_name: Option<String>,
    building_number: Option<String>,
    city_subdivision_name: String,
    city_name: String,
    postal_zone: Option<String>,
    region: Option<String>,
    country: Country,
}

impl AddressBuilder {
    pub fn new(city_subdivision_name: impl Into<String>, city_name: impl Into<String>) -> Self {
        Self {
            street_name: None,
            building_number: None,
            city_subdivision_name: city_subdivision_name.into(),
            city_name: city_name.into(),
            postal_zone: None,
            region: None,
            country: Country::with_code("Türkiye", "TR"),
        }
    }

    pub fn street(mut self, street: impl Into<String>) -> Self {
        self.street_name = Some(street.into());
        self
    }

    pub fn building_number(mut self, number: impl Into<String>) -> Self {
        self.building_number = Some(number.into());
        self
    }

    pub fn postal_zone(mut self, zone: impl Into<String>) -> Self {
        self.postal_zone = Some(zone.into());
        self
    }

    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn country(mut self, name: impl Into<String>, code: impl Into<String>) -> Self {
        self.country = Country::with_code(name, code);
        self
    }

    pub fn build(self) -> Address {
        Address {
            street_name: self.street_name,
            building_number: self.building_number,
            city_subdivision_name: Some(self.city_subdivision_name),
            city_name: Some(self.city_name),
            postal_zone: self.postal_zone,
            region: self.region,
            country: Some(self.country),
            ..Address::default()
        }
    }
}

/// Builder for an [`InvoiceLine`].
///
/// The line extension amount is quantity × price less allowances plus
/// charges, rounded to 2 decimals. A KDV rate adds a single-subtotal tax
/// total computed on that amount. Callers needing other figures set the
/// fields on the built line directly.
pub struct InvoiceLineBuilder {
    id: String,
    item_name: String,
    quantity: Decimal,
    unit_code: String,
    price: Decimal,
    kdv_percent: Option<Decimal>,
    exemption: Option<(String, String)>,
    notes: Vec<String>,
    allowance_charges: Vec<AllowanceCharge>,
    sellers_item_id: Option<String>,
    description: Option<String>,
    currency_id: Option<String>,
}

impl InvoiceLineBuilder {
    pub fn new(
        id: impl Into<String>,
        item_name: impl Into<String>,
        quantity: Decimal,
        unit_code: impl Into<String>,
        price: Decimal,
    ) -> Self {
        Self {
            id: id.into(),
            item_name: item_name.into(),
            quantity,
            unit_code: unit_code.into(),
            price,
            kdv_percent: None,
            exemption: None,
            notes: Vec::new(),
            allowance_charges: Vec::new(),
            sellers_item_id: None,
            description: None,
            currency_id: None,
        }
    }

    pub fn kdv(mut self, percent: Decimal) -> Self {
        self.kdv_percent = Some(percent);
        self
    }

    /// Exemption code and reason for a zero-rated KDV line, e.g. `("351", "...")`.
    pub fn exemption(mut self, code: impl Into<String>, reason: impl Into<String>) -> Self {
        self.exemption = Some((code.into(), reason.into()));
        self
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn add_allowance_charge(mut self, allowance_charge: AllowanceCharge) -> Self {
        self.allowance_charges.push(allowance_charge);
        self
    }

    pub fn sellers_item_id(mut self, id: impl Into<String>) -> Self {
        self.sellers_item_id = Some(id.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn currency(mut self, code: impl Into<String>) -> Self {
        self.currency_id = Some(code.into());
        self
    }

    pub fn build(self) -> InvoiceLine {
        let adjustments: Decimal = self
            .allowance_charges
            .iter()
            .map(|ac| {
                let amount = ac.amount.unwrap_or(Decimal::ZERO);
                if ac.charge_indicator == Some(true) {
                    amount
                } else {
                    -amount
                }
            })
            .sum();
        let line_extension = round2(self.quantity * self.price + adjustments);

        let tax_total = self.kdv_percent.map(|percent| {
            let tax_amount = round2(line_extension * percent / Decimal::ONE_HUNDRED);
            let mut category = TaxCategory::new(TaxScheme::tax("KDV", "0015"));
            if let Some((code, reason)) = self.exemption {
                category.tax_exemption_reason_code = Some(code);
                category.tax_exemption_reason = Some(reason);
            }
            TaxTotal::new(
                tax_amount,
                vec![TaxSubtotal::new(line_extension, tax_amount, percent, category)],
            )
        });

        let item = Item {
            description: self.description,
            sellers_item_identification: self.sellers_item_id.map(ItemIdentification::new),
            ..Item::new(self.item_name)
        };

        InvoiceLine {
            id: Some(self.id),
            notes: self.notes,
            invoiced_quantity: Some(Quantity::new(self.quantity, self.unit_code)),
            line_extension_amount: Some(line_extension),
            allowance_charges: self.allowance_charges,
            tax_total,
            item: Some(item),
            price: Some(Price::new(self.price)),
            currency_id: self.currency_id,
            ..InvoiceLine::default()
        }
    }
}

fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
