use mensura_units::{default_prefixes, default_units, Kind, PrefixTable, Quantity, UnitTable};

#[test]
fn default_tables_are_populated() {
    assert!(!default_units().is_empty());
    assert!(!default_prefixes().is_empty());
    assert_eq!(default_units().canonical_of("meters"), Some("meter"));
    assert_eq!(default_prefixes().canonical_of("\u{00b5}"), Some("micro"));
}

#[test]
fn custom_tables_are_independent_snapshots() {
    let mut units = UnitTable::new();
    units.register("smoot", Kind::Length, &["smoots"]);
    let mut prefixes = PrefixTable::new();
    prefixes.register("kilo", 1e3, &["k"]);

    assert_eq!(units.canonical_of("smoots"), Some("smoot"));
    assert_eq!(default_units().canonical_of("smoots"), None);
    assert_eq!(prefixes.factor_of("kilo"), Some(1e3));
}

#[test]
fn quantity_from_parsed_parts() {
    let numerator = vec!["<kilogram>".to_string(), "<meter>".to_string()];
    let denominator = vec!["<second>".to_string(), "<second>".to_string()];
    let q = Quantity::from_parts(
        9.8,
        &numerator,
        &denominator,
        default_units(),
        default_prefixes(),
    )
    .unwrap();
    assert_eq!(q.value, 9.8);
    assert_eq!(q.numerator, vec!["kilogram", "meter"]);
    assert_eq!(q.denominator, vec!["second", "second"]);
}
