use addr_core::{all_formats, AddressComponents, AddressFormats, BuildingType};

fn components(entries: &[(&str, Option<&str>)]) -> AddressComponents {
    let mut data = AddressComponents::new();
    for (key, value) in entries {
        data.insert(*key, value.map(str::to_string));
    }
    data
}

#[test]
fn all_formats_without_components_fall_back_to_the_plain_address() {
    let expected = AddressFormats::plain("plain_address");

    assert_eq!(all_formats("plain_address", None, None, None), expected);
    assert_eq!(
        all_formats(
            "plain_address",
            Some(&AddressComponents::new()),
            None,
            None,
        ),
        expected
    );
}

#[test]
fn all_formats_from_a_raw_housing_payload() {
    // Payload as the housing service ships it: null fields, short-form
    // duplicates and a nested summary object that carry no components.
    let data = AddressComponents::from_json(
        r#"{
            "area": null,
            "city": "Брянск",
            "flat": null,
            "_type": "addresscomponents",
            "block": null,
            "house": "9",
            "short": {
                "flat": null, "house": "9", "street": null, "country": "Россия",
                "locality": "Брянск", "flat_type": null, "house_type": "д",
                "postal_code": "241035", "street_type": null,
                "flat_type_full": null,
                "house_type_full": "дом", "street_type_full": null
            },
            "region": "Брянская",
            "street": null,
            "country": "Россия",
            "section": null, "building": null,
            "area_type": null, "city_type": "г", "flat_type": null,
            "block_type": null,
            "house_type": "д", "settlement": null, "postal_code": "241035",
            "region_type": "обл", "street_type": null, "city_district": "Бежицкий",
            "area_type_full": null, "city_type_full": "город",
            "flat_type_full": null,
            "block_type_full": null, "house_type_full": "дом",
            "settlement_type": null,
            "region_type_full": "область", "street_type_full": null,
            "city_district_type": "р-н", "settlement_type_full": null,
            "city_district_type_full": "район"
        }"#,
    )
    .unwrap();

    let result = all_formats(
        "plain_address",
        Some(&data),
        Some("1"),
        Some(BuildingType::Code(1)),
    );
    assert_eq!(
        result,
        AddressFormats {
            all: "Брянская\u{a0}обл., г.\u{a0}Брянск, Бежицкий\u{a0}р\u{2060}-\u{2060}н, \
                  д.\u{a0}9, кв.\u{a0}1"
                .to_string(),
            street_only: "plain_address".to_string(),
            finishing_with_village:
                "Брянская\u{a0}обл., г.\u{a0}Брянск, Бежицкий\u{a0}р\u{2060}-\u{2060}н"
                    .to_string(),
            starting_with_street: "д.\u{a0}9, кв.\u{a0}1".to_string(),
            finishing_with_street:
                "Брянская\u{a0}обл., г.\u{a0}Брянск, Бежицкий\u{a0}р\u{2060}-\u{2060}н"
                    .to_string(),
        }
    );

    // Without a premise number the ownership unit disappears.
    let result = all_formats("plain_address", Some(&data), None, None);
    assert_eq!(
        result.all,
        "Брянская\u{a0}обл., г.\u{a0}Брянск, Бежицкий\u{a0}р\u{2060}-\u{2060}н, д.\u{a0}9"
    );
    assert_eq!(result.starting_with_street, "д.\u{a0}9");
}

#[test]
fn all_formats_full_component_set() {
    let data = components(&[
        ("region", Some("Курганская")),
        ("region_type_full", Some("область")),
        ("area", Some("Катайский")),
        ("area_type_full", Some("район")),
        ("city", Some("Серов")),
        ("city_type_full", Some("город")),
        ("city_district", Some("Кировский")),
        ("city_district_type_full", Some("округ")),
        ("settlement", Some("Дрянное")),
        ("settlement_type_full", Some("село")),
        ("street", Some("Майская")),
        ("street_type_full", Some("улица")),
        ("house", Some("5")),
        ("house_type_full", Some("дом")),
        ("section", Some("6")),
        ("building", Some("7")),
    ]);

    let result = all_formats("", Some(&data), Some("45"), Some(BuildingType::Code(2)));

    assert_eq!(
        result.all,
        "Курганская\u{a0}обл., Катайский\u{a0}р\u{2060}-\u{2060}н, г.\u{a0}Серов, \
         Кировский\u{a0}окр., с.\u{a0}Дрянное, ул.\u{a0}Майская, д.\u{a0}5, корп.\u{a0}6, \
         стр.\u{a0}7, м.\u{a0}45"
    );
}

#[test]
fn all_formats_possessive_settlement_and_hyphenated_city() {
    let data = components(&[
        ("region", None),
        ("region_type_full", None),
        ("area", None),
        ("area_type_full", None),
        ("city", Some("Калач-на-Дону")),
        ("city_type_full", Some("город")),
        ("city_district", None),
        ("city_district_type_full", None),
        ("settlement", Some("им В.В.Петрова")),
        ("settlement_type_full", Some("село")),
        ("street", None),
        ("street_type_full", None),
        ("house", Some("5")),
        ("house_type_full", Some("дом")),
        ("section", None),
        ("building", Some("7")),
    ]);

    let result = all_formats("", Some(&data), Some("45"), Some(BuildingType::Code(2)));

    assert_eq!(
        result.all,
        "г.\u{a0}Калач\u{2060}-\u{2060}на\u{2060}-\u{2060}Дону, \
         с.\u{a0}им.\u{a0}В.\u{a0}В.\u{a0}Петрова, д.\u{a0}5, стр.\u{a0}7, м.\u{a0}45"
    );
}

#[test]
fn all_formats_street_portion_for_a_parking_place() {
    let data = components(&[
        ("region", Some("Пермский")),
        ("region_type_full", Some("край")),
        ("city", Some("Грелово")),
        ("city_type_full", Some("сельское поселение")),
        ("street", Some("Апрельский")),
        ("street_type_full", Some("бульвар")),
        ("house", Some("543")),
        ("house_type_full", Some("дом")),
    ]);

    let result = all_formats("", Some(&data), Some("45"), Some(BuildingType::Code(4)));

    assert_eq!(
        result.starting_with_street,
        "Апрельский\u{a0}б\u{2060}-\u{2060}р, д.\u{a0}543, м.\u{a0}45"
    );
}

#[test]
fn all_formats_slash_abbreviation_finishing_with_village() {
    let data = components(&[
        ("region", Some("Пермский")),
        ("region_type_full", Some("край")),
        ("city", Some("Грелово")),
        ("city_type_full", Some("сельское поселение")),
        ("street", Some("Апрельский")),
        ("street_type_full", Some("бульвар")),
        ("house", Some("543")),
        ("house_type_full", Some("дом")),
    ]);

    let result = all_formats("", Some(&data), Some("45"), Some(BuildingType::Code(1)));

    assert_eq!(
        result.finishing_with_village,
        "Пермский\u{a0}кр., с\u{2060}/\u{2060}п\u{a0}Грелово"
    );
}

#[test]
fn all_formats_ordinal_street_keeps_its_numeral_in_front() {
    let data = components(&[
        ("street", Some("5-я")),
        ("street_type_full", Some("линия")),
    ]);

    let result = all_formats("", Some(&data), Some("45"), Some(BuildingType::Code(4)));

    assert_eq!(result.street_only, "5\u{2060}-\u{2060}я\u{a0}лин.");
}

#[test]
fn all_formats_street_only_falls_back_when_nothing_resolves() {
    let data = components(&[
        ("region", None),
        ("area", None),
        ("city", None),
        ("city_district", None),
        ("settlement", None),
        ("street", None),
        ("house", None),
        ("section", None),
        ("building", None),
    ]);

    let result = all_formats(
        "г Москва, ул Кривая",
        Some(&data),
        Some("45"),
        Some(BuildingType::Code(4)),
    );

    assert_eq!(result.street_only, "г Москва, ул Кривая");
}

#[test]
fn all_formats_collapses_adjacent_district_and_city_repeats() {
    let data = components(&[
        ("region", Some("Московская")),
        ("region_type_full", Some("область")),
        ("area", Some("Наро-Фоминск")),
        ("area_type_full", Some("город")),
        ("city", Some("Наро-Фоминск")),
        ("city_type_full", Some("город")),
        ("settlement", Some("Мякишево")),
        ("settlement_type_full", Some("деревня")),
    ]);

    let result = all_formats("", Some(&data), None, None);

    assert_eq!(
        result.all,
        "Московская\u{a0}обл., г.\u{a0}Наро\u{2060}-\u{2060}Фоминск, д.\u{a0}Мякишево"
    );
}

#[test]
fn all_formats_unknown_type_poisons_only_layouts_including_it() {
    let data = components(&[
        ("region", Some("Курганская")),
        ("region_type_full", Some("federal oblast")),
        ("street", Some("Майская")),
        ("street_type_full", Some("улица")),
        ("house", Some("5")),
        ("house_type_full", Some("дом")),
    ]);

    let result = all_formats("plain_address", Some(&data), None, None);

    // The region participates in these three, they all fall back.
    assert_eq!(result.all, "plain_address");
    assert_eq!(result.finishing_with_village, "plain_address");
    assert_eq!(result.finishing_with_street, "plain_address");

    // Layouts without the region are unaffected.
    assert_eq!(result.street_only, "ул.\u{a0}Майская");
    assert_eq!(result.starting_with_street, "ул.\u{a0}Майская, д.\u{a0}5");
}

#[test]
fn all_formats_accepts_string_building_types() {
    let data = components(&[("house", Some("9")), ("house_type_full", Some("дом"))]);

    let garage = all_formats("", Some(&data), Some("3"), Some(BuildingType::from("2")));
    assert_eq!(garage.starting_with_street, "д.\u{a0}9, м.\u{a0}3");

    let apartment = all_formats("", Some(&data), Some("3"), Some(BuildingType::from("7")));
    assert_eq!(apartment.starting_with_street, "д.\u{a0}9, кв.\u{a0}3");
}
