use swatchbook_tokens::{PaletteTable, ShadeKey, TextTone, TokenError, accessibility_label, parse_json, text_color};

fn load_fixture() -> PaletteTable {
    let tokens = include_str!("data/palette_fixture.json");
    parse_json(tokens).expect("load palette from fixture")
}

#[test]
fn keeps_group_order_from_source() {
    let table = load_fixture();
    let names: Vec<&str> = table.group_names().collect();
    assert_eq!(names, ["purple", "grey", "orange"]);
    assert_eq!(table.shade_count(), 6);
}

#[test]
fn shades_iterate_descending_numerically() {
    let table = load_fixture();
    let grey = table.group("grey").expect("grey present");
    let keys: Vec<u16> = grey.descending().map(|(key, _)| key.value()).collect();
    assert_eq!(keys, [90, 50, 5], "\"5\" must sort below \"50\" and \"90\"");
}

#[test]
fn explicit_entries_survive_unchanged() {
    let table = load_fixture();
    let purple = table.group("purple").expect("purple present");
    let dark = purple.get(ShadeKey::new(90)).expect("purple-90 present");
    assert_eq!(dark.hex.as_str(), "#200");
    assert_eq!(dark.contrast.as_str(), "#fff");
    assert!(!dark.base);
    assert_eq!(text_color(&dark.contrast), TextTone::Light);
    assert_eq!(accessibility_label(dark, true), "AAA");

    let (base_key, base) = purple.base().expect("purple has a base shade");
    assert_eq!(base_key, ShadeKey::new(10));
    assert_eq!(base.name, "purple-10");
}

#[test]
fn missing_fields_are_derived() {
    let table = load_fixture();
    let orange = table.group("orange").expect("orange present");
    let entry = orange.get(ShadeKey::new(60)).expect("orange-60 present");
    assert_eq!(entry.name, "orange-60");
    assert!(!entry.base);
    assert!(entry.contrast_ratio() >= 3.0, "derived contrast should be the legible side");
}

#[test]
fn invalid_tokens_are_rejected_with_the_offending_value() {
    let bad_hex = r##"{ "red": { "50": { "hex": "#zzzzzz" } } }"##;
    let error = parse_json(bad_hex).unwrap_err();
    assert!(matches!(error, TokenError::Json(_)));
    assert!(error.to_string().contains(r##"invalid hex color "#zzzzzz""##), "{error}");

    let bad_key = r##"{ "red": { "fifty": { "hex": "#da0013" } } }"##;
    let error = parse_json(bad_key).unwrap_err();
    assert!(error.to_string().contains(r#"invalid shade key "fifty""#), "{error}");

    let bad_name = r##"{ "red": { "50": { "hex": "#da0013", "name": 5 } } }"##;
    let error = parse_json(bad_name).unwrap_err();
    assert!(error.to_string().contains("invalid type"), "{error}");
}

#[test]
fn duplicate_shades_are_rejected() {
    let duplicated = r##"{ "blue": { "5": { "hex": "#f2f9ff" }, "05": { "hex": "#eef7ff" } } }"##;
    let error = parse_json(duplicated).unwrap_err();
    assert!(error.to_string().contains("duplicate shade key 5"), "{error}");
}
