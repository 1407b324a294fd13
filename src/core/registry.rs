//! Static table of recognized administrative type names.
//!
//! The vocabulary and abbreviations are fixed domain data; rendered
//! addresses stay byte-compatible only while they are left untouched.

use crate::core::types::{AddressComponent, SuffixSet, TypeMetadata};

const fn meta(abbreviation: &'static str, suffix_set: SuffixSet) -> TypeMetadata {
    TypeMetadata {
        abbreviation,
        suffix_set,
    }
}

/// Looks up display metadata for a type name within one component.
pub fn type_metadata(component: AddressComponent, type_name: &str) -> Option<TypeMetadata> {
    use SuffixSet::{Empty, Feminine, Masculine, Neuter};

    let found = match component {
        AddressComponent::Region => match type_name {
            "город" => meta("г", Empty),
            "край" => meta("кр", Masculine),
            "область" => meta("обл", Feminine),
            "республика" => meta("респ", Feminine),
            _ => return None,
        },
        AddressComponent::District => match type_name {
            "город" => meta("г", Empty),
            "поселение" => meta("пос", Empty),
            "район" => meta("р-н", Masculine),
            _ => return None,
        },
        AddressComponent::City => match type_name {
            "город" => meta("г", Empty),
            "сельское поселение" => meta("с/п", Empty),
            _ => return None,
        },
        AddressComponent::Township => match type_name {
            "округ" => meta("окр", Masculine),
            "район" => meta("р-н", Masculine),
            _ => return None,
        },
        AddressComponent::Village => match type_name {
            "гаражно-строительный кооп." => meta("кооп", Empty),
            "дачный поселок" => meta("д/п", Empty),
            "деревня" => meta("д", Empty),
            "квартал" => meta("кв", Masculine),
            "микрорайон" => meta("мкр", Masculine),
            "поселок" => meta("п", Empty),
            "рабочий поселок" => meta("р/п", Empty),
            "село" => meta("с", Empty),
            "станция" => meta("ст", Empty),
            "территория" => meta("тер", Empty),
            "хутор" => meta("хут", Empty),
            _ => return None,
        },
        AddressComponent::Street => match type_name {
            "аллея" => meta("ал", Feminine),
            "бульвар" => meta("б-р", Masculine),
            "городок" => meta("гор", Masculine),
            "квартал" => meta("кв", Masculine),
            "километр" => meta("км", Masculine),
            "линия" => meta("лин", Feminine),
            "микрорайон" => meta("мкр", Masculine),
            "набережная" => meta("наб", Feminine),
            "переулок" => meta("пер", Empty),
            "площадь" => meta("пл", Feminine),
            "поселок" => meta("п", Empty),
            "проезд" => meta("пр", Masculine),
            "проспект" => meta("просп", Masculine),
            "разъезд" => meta("р-д", Masculine),
            "станция" => meta("ст", Empty),
            "территория" => meta("тер", Empty),
            "тракт" => meta("тр", Masculine),
            "тупик" => meta("туп", Masculine),
            "улица" => meta("ул", Empty),
            "шоссе" => meta("ш", Neuter),
            _ => return None,
        },
        AddressComponent::Building => match type_name {
            "дом" => meta("д", Empty),
            _ => return None,
        },
        AddressComponent::Section => match type_name {
            "корпус" => meta("корп", Empty),
            _ => return None,
        },
        AddressComponent::Construction => match type_name {
            "строение" => meta("стр", Empty),
            _ => return None,
        },
        AddressComponent::Ownership => match type_name {
            "квартира" => meta("кв", Empty),
            "место" => meta("м", Empty),
            _ => return None,
        },
    };

    Some(found)
}

/// Every type name registered for a component, in table order.
pub fn registered_type_names(component: AddressComponent) -> &'static [&'static str] {
    match component {
        AddressComponent::Region => &["город", "край", "область", "республика"],
        AddressComponent::District => &["город", "поселение", "район"],
        AddressComponent::City => &["город", "сельское поселение"],
        AddressComponent::Township => &["округ", "район"],
        AddressComponent::Village => &[
            "гаражно-строительный кооп.",
            "дачный поселок",
            "деревня",
            "квартал",
            "микрорайон",
            "поселок",
            "рабочий поселок",
            "село",
            "станция",
            "территория",
            "хутор",
        ],
        AddressComponent::Street => &[
            "аллея",
            "бульвар",
            "городок",
            "квартал",
            "километр",
            "линия",
            "микрорайон",
            "набережная",
            "переулок",
            "площадь",
            "поселок",
            "проезд",
            "проспект",
            "разъезд",
            "станция",
            "территория",
            "тракт",
            "тупик",
            "улица",
            "шоссе",
        ],
        AddressComponent::Building => &["дом"],
        AddressComponent::Section => &["корпус"],
        AddressComponent::Construction => &["строение"],
        AddressComponent::Ownership => &["квартира", "место"],
    }
}
