//! Resolution of one address component into its display portion.

use crate::core::normalize::{
    dot_after_word, non_breaking_abbreviation, non_breaking_value, possessive_dot, space_after_dot,
    NBSP,
};
use crate::core::order::starts_with_type;
use crate::core::registry::type_metadata;
use crate::core::types::{AddressComponent, AddressComponents, Portion};

/// Resolves one component of `components` into its formatted portion.
///
/// The explicit `value` / `component_type` arguments supply the parts
/// the input mapping has no field for (section and construction types,
/// the ownership value) and back absent fields up. A field present with
/// a null value wins over the explicit argument.
pub fn resolve(
    components: &AddressComponents,
    component: AddressComponent,
    value: Option<&str>,
    component_type: Option<&str>,
) -> Portion {
    let keys = component.keys();

    let value = match keys.value_key {
        Some(key) => components.field(key).unwrap_or(value),
        None => value,
    };
    let component_type = match keys.type_key {
        Some(key) => components.field(key).unwrap_or(component_type),
        None => component_type,
    };

    let (Some(value), Some(component_type)) = (value, component_type) else {
        return Portion::Missing;
    };

    let Some(metadata) = type_metadata(component, component_type) else {
        return Portion::UnknownType;
    };

    let value = space_after_dot(&possessive_dot(value));
    let abbreviation = dot_after_word(metadata.abbreviation);

    let type_leads = starts_with_type(&value, metadata.suffix_set.endings());

    let value = non_breaking_value(&value);
    let abbreviation = non_breaking_abbreviation(&abbreviation);

    if type_leads {
        Portion::Formatted(format!("{abbreviation}{NBSP}{value}"))
    } else {
        Portion::Formatted(format!("{value}{NBSP}{abbreviation}"))
    }
}
