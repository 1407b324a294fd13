use crate::error::AddressFormatError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One structural slot of a Russian postal address. The declaration
/// order is the assembly order of the full address layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressComponent {
    Region,
    District,
    City,
    Township,
    Village,
    Street,
    Building,
    Section,
    Construction,
    Ownership,
}

impl AddressComponent {
    pub const ALL: [AddressComponent; 10] = [
        AddressComponent::Region,
        AddressComponent::District,
        AddressComponent::City,
        AddressComponent::Township,
        AddressComponent::Village,
        AddressComponent::Street,
        AddressComponent::Building,
        AddressComponent::Section,
        AddressComponent::Construction,
        AddressComponent::Ownership,
    ];

    /// Input-mapping fields this component reads its value and type
    /// name from. `None` means the part has no field of its own and
    /// must be supplied by the caller.
    pub fn keys(self) -> ComponentKeys {
        match self {
            AddressComponent::Region => ComponentKeys {
                value_key: Some("region"),
                type_key: Some("region_type_full"),
            },
            AddressComponent::District => ComponentKeys {
                value_key: Some("area"),
                type_key: Some("area_type_full"),
            },
            AddressComponent::City => ComponentKeys {
                value_key: Some("city"),
                type_key: Some("city_type_full"),
            },
            AddressComponent::Township => ComponentKeys {
                value_key: Some("city_district"),
                type_key: Some("city_district_type_full"),
            },
            AddressComponent::Village => ComponentKeys {
                value_key: Some("settlement"),
                type_key: Some("settlement_type_full"),
            },
            AddressComponent::Street => ComponentKeys {
                value_key: Some("street"),
                type_key: Some("street_type_full"),
            },
            AddressComponent::Building => ComponentKeys {
                value_key: Some("house"),
                type_key: Some("house_type_full"),
            },
            AddressComponent::Section => ComponentKeys {
                value_key: Some("section"),
                type_key: None,
            },
            AddressComponent::Construction => ComponentKeys {
                value_key: Some("building"),
                type_key: None,
            },
            AddressComponent::Ownership => ComponentKeys {
                value_key: None,
                type_key: None,
            },
        }
    }
}

/// Field names one component reads from the input mapping.
#[derive(Debug, Clone, Copy)]
pub struct ComponentKeys {
    pub value_key: Option<&'static str>,
    pub type_key: Option<&'static str>,
}

/// Adjectival ending group of a type name's grammatical gender. The
/// endings decide whether a value like "1-я" already carries its own
/// leading qualifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuffixSet {
    Empty,
    Masculine,
    Feminine,
    Neuter,
}

impl SuffixSet {
    pub fn endings(self) -> &'static [&'static str] {
        match self {
            SuffixSet::Empty => &[],
            SuffixSet::Masculine => &["ый", "ий", "ой"],
            SuffixSet::Feminine => &["ая", "яя"],
            SuffixSet::Neuter => &["ое", "ее"],
        }
    }
}

/// Display metadata registered for one administrative type name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeMetadata {
    pub abbreviation: &'static str,
    pub suffix_set: SuffixSet,
}

/// Outcome of resolving one address component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Portion {
    /// The fully formatted component text.
    Formatted(String),
    /// Value or type name missing, the component is skipped on assembly.
    Missing,
    /// The type name is not registered for this component. Discards the
    /// whole assembled layout, not just this component.
    UnknownType,
}

/// Building classification passed alongside the premise number.
/// Codes 2 and 4 mark garage and parking buildings whose ownership
/// units are numbered places rather than apartments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BuildingType {
    Code(i64),
    Label(String),
}

impl BuildingType {
    pub fn is_garage_or_parking(&self) -> bool {
        match self {
            BuildingType::Code(code) => matches!(code, 2 | 4),
            BuildingType::Label(label) => matches!(label.trim(), "2" | "4"),
        }
    }
}

impl From<i64> for BuildingType {
    fn from(code: i64) -> Self {
        BuildingType::Code(code)
    }
}

impl From<&str> for BuildingType {
    fn from(label: &str) -> Self {
        BuildingType::Label(label.to_string())
    }
}

/// Caller-supplied address components keyed by field name.
///
/// A key present with no value is not the same as an absent key: a null
/// field suppresses the component even when an explicit fallback value
/// is passed, while an absent field admits the fallback.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddressComponents {
    fields: HashMap<String, Option<String>>,
}

impl AddressComponents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Option<String>) {
        self.fields.insert(key.into(), value);
    }

    /// Field lookup keeping the present-but-null / absent distinction:
    /// the outer `None` means the key itself is missing.
    pub fn field(&self, key: &str) -> Option<Option<&str>> {
        self.fields.get(key).map(|value| value.as_deref())
    }

    /// Field value, treating null and absent alike.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.field(key).flatten()
    }

    /// Accepts a raw housing-service payload. Fields holding anything
    /// other than text or null (nested objects, numbers, markers) carry
    /// no address component and are dropped.
    pub fn from_json(payload: &str) -> Result<Self, AddressFormatError> {
        Ok(serde_json::from_str(payload)?)
    }
}

impl From<HashMap<String, Option<String>>> for AddressComponents {
    fn from(fields: HashMap<String, Option<String>>) -> Self {
        Self { fields }
    }
}

impl<'de> Deserialize<'de> for AddressComponents {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw: serde_json::Map<String, serde_json::Value> =
            serde_json::Map::deserialize(deserializer)?;

        let mut fields = HashMap::new();
        for (key, value) in raw {
            match value {
                serde_json::Value::String(text) => {
                    fields.insert(key, Some(text));
                }
                serde_json::Value::Null => {
                    fields.insert(key, None);
                }
                _ => {}
            }
        }

        Ok(Self { fields })
    }
}
