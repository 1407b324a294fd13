//! Assembly of resolved portions into the five display layouts.

use serde::{Deserialize, Serialize};

use crate::core::portion::resolve;
use crate::core::types::{AddressComponent, AddressComponents, BuildingType, Portion};

const SECTION_TYPE: &str = "корпус";
const CONSTRUCTION_TYPE: &str = "строение";
const PLACE_OWNERSHIP_TYPE: &str = "место";
const APARTMENT_OWNERSHIP_TYPE: &str = "квартира";

/// The five display layouts rendered for one address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressFormats {
    /// Full address, region through ownership unit.
    pub all: String,
    /// Street alone, or the village when there is no street.
    pub street_only: String,
    /// Region through township, plus the village when a street follows.
    pub finishing_with_village: String,
    /// Street through ownership unit, led by the village when there is
    /// no street.
    pub starting_with_street: String,
    /// Region through street.
    pub finishing_with_street: String,
}

impl AddressFormats {
    /// Every layout falls back to the same plain address string.
    pub fn plain(address: &str) -> Self {
        Self {
            all: address.to_string(),
            street_only: address.to_string(),
            finishing_with_village: address.to_string(),
            starting_with_street: address.to_string(),
            finishing_with_street: address.to_string(),
        }
    }
}

/// Joins portions with ", ", dropping missing and empty ones and
/// collapsing adjacent repeats. A portion with an unknown type discards
/// the whole result.
pub fn format_result(portions: &[Portion]) -> String {
    if portions.contains(&Portion::UnknownType) {
        return String::new();
    }

    let mut parts: Vec<&str> = Vec::with_capacity(portions.len());
    for portion in portions {
        if let Portion::Formatted(text) = portion {
            if text.is_empty() || parts.last().copied() == Some(text.as_str()) {
                continue;
            }
            parts.push(text);
        }
    }

    parts.join(", ")
}

/// Renders all five address layouts from the supplied components.
///
/// `plain_address` backs every layout that comes out empty, and all of
/// them when no components are supplied at all. `premise_number` is the
/// ownership-unit value; `building_type` selects whether that unit is a
/// numbered place (garage/parking buildings) or an apartment.
pub fn all_formats(
    plain_address: &str,
    address_components: Option<&AddressComponents>,
    premise_number: Option<&str>,
    building_type: Option<BuildingType>,
) -> AddressFormats {
    let data = match address_components {
        Some(data) if !data.is_empty() => data,
        _ => return AddressFormats::plain(plain_address),
    };

    let ownership_type = match building_type {
        Some(building_type) if building_type.is_garage_or_parking() => PLACE_OWNERSHIP_TYPE,
        _ => APARTMENT_OWNERSHIP_TYPE,
    };

    let region = resolve(data, AddressComponent::Region, None, None);
    let district = resolve(data, AddressComponent::District, None, None);
    let city = resolve(data, AddressComponent::City, None, None);
    let township = resolve(data, AddressComponent::Township, None, None);
    let village = resolve(data, AddressComponent::Village, None, None);
    let street = resolve(data, AddressComponent::Street, None, None);
    let building = resolve(data, AddressComponent::Building, None, None);
    let section = resolve(data, AddressComponent::Section, None, Some(SECTION_TYPE));
    let construction = resolve(
        data,
        AddressComponent::Construction,
        None,
        Some(CONSTRUCTION_TYPE),
    );
    let ownership = resolve(
        data,
        AddressComponent::Ownership,
        premise_number,
        Some(ownership_type),
    );

    // Keyed off the raw field, not off whether the street type resolved.
    let has_street = data.value("street").is_some();

    let street_or_village = if has_street {
        street.clone()
    } else {
        village.clone()
    };

    let mut finishing_with_village = vec![
        region.clone(),
        district.clone(),
        city.clone(),
        township.clone(),
    ];
    if has_street {
        finishing_with_village.push(village.clone());
    }

    let mut starting_with_street = Vec::new();
    if !has_street {
        starting_with_street.push(village.clone());
    }
    starting_with_street.extend([
        street.clone(),
        building.clone(),
        section.clone(),
        construction.clone(),
        ownership.clone(),
    ]);

    let or_plain = |formatted: String| {
        if formatted.is_empty() {
            plain_address.to_string()
        } else {
            formatted
        }
    };

    AddressFormats {
        all: or_plain(format_result(&[
            region.clone(),
            district.clone(),
            city.clone(),
            township.clone(),
            village.clone(),
            street.clone(),
            building,
            section,
            construction,
            ownership,
        ])),
        street_only: or_plain(format_result(&[street_or_village])),
        finishing_with_village: or_plain(format_result(&finishing_with_village)),
        starting_with_street: or_plain(format_result(&starting_with_street)),
        finishing_with_street: or_plain(format_result(&[
            region, district, city, township, village, street,
        ])),
    }
}
