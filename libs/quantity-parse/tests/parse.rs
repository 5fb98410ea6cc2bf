//! End-to-end parsing tests against the default unit registry.

use mensura_parse::{
    Config, ConfigError, ConfigValue, ExpressionParser, ParseError, Parser, ParserGateway,
    ParserMode, UnitTrie,
};
use mensura_units::{default_prefixes, default_units, Kind, Quantity};

fn trie() -> UnitTrie {
    UnitTrie::new(default_units(), default_prefixes())
}

fn sorted(atoms: &[String]) -> Vec<String> {
    let mut v = atoms.to_vec();
    v.sort();
    v
}

#[test]
fn parses_newtons_worth_of_atoms() {
    let trie = trie();
    let mut parser = Parser::new(&trie);
    let r = parser.parse("9.8 kg*m/s^2").unwrap();
    assert_eq!(r.scalar, 9.8);
    assert_eq!(sorted(&r.numerator), ["<kilogram>", "<meter>"]);
    assert_eq!(sorted(&r.denominator), ["<second>", "<second>"]);
    assert_eq!(r.expression(), "9.8 <kilogram>*<meter>/<second>*<second>");
}

#[test]
fn multiplication_and_division_compose() {
    let trie = trie();
    let mut parser = Parser::new(&trie);

    let a = parser.parse_owned("2 m/s").unwrap();
    let b = parser.parse_owned("3 s").unwrap();
    let mut product = a.clone();
    product.multiply(&b);
    assert_eq!(product.scalar, 6.0);
    assert_eq!(sorted(&product.numerator), ["<meter>", "<second>"]);
    assert_eq!(product.denominator.as_slice(), ["<second>"]);

    let mut quotient = a;
    quotient.divide(&b);
    assert_eq!(quotient.scalar, 2.0 / 3.0);
    assert_eq!(sorted(&quotient.denominator), ["<second>", "<second>"]);
}

#[test]
fn exponent_rearranges_without_scaling() {
    let trie = trie();
    let mut parser = Parser::new(&trie);

    let r = parser.parse_owned("(2 m)^3").unwrap();
    assert_eq!(r.scalar, 2.0);
    assert_eq!(r.numerator.len(), 3);

    let r = parser.parse_owned("(2 m)^0").unwrap();
    assert_eq!(r.scalar, 2.0);
    assert!(r.is_dimensionless());

    let r = parser.parse_owned("(2 m)^-2").unwrap();
    assert_eq!(r.scalar, 2.0);
    assert!(r.numerator.is_empty());
    assert_eq!(r.denominator.as_slice(), ["<meter>", "<meter>"]);
}

#[test]
fn numeric_literal_shapes() {
    let trie = trie();
    let mut parser = Parser::new(&trie);

    assert_eq!(parser.parse_owned("3.5e3 s").unwrap().scalar, 3500.0);
    assert_eq!(parser.parse_owned("1/2").unwrap().scalar, 0.5);
    assert_eq!(parser.parse_owned("2 3/4 m").unwrap().scalar, 2.75);
    assert_eq!(parser.parse_owned("1,250 m").unwrap().scalar, 1250.0);
    assert_eq!(parser.parse_owned("-4 m").unwrap().scalar, -4.0);
}

#[test]
fn error_taxonomy() {
    let trie = trie();
    let mut parser = Parser::new(&trie);

    assert_eq!(parser.parse_owned("").unwrap_err(), ParseError::EmptyInput);
    assert_eq!(parser.parse_owned(" \t ").unwrap_err(), ParseError::EmptyInput);

    let err = parser.parse_owned("5 blorps").unwrap_err();
    match err {
        ParseError::UnknownUnit { name, offset } => {
            assert_eq!(name, "blorps");
            assert_eq!(offset, 2);
        }
        other => panic!("expected UnknownUnit, got {other:?}"),
    }

    assert!(matches!(
        parser.parse_owned("(kg*m").unwrap_err(),
        ParseError::Syntax { .. }
    ));
    assert!(matches!(
        parser.parse_owned("kg*").unwrap_err(),
        ParseError::Syntax { .. }
    ));
    assert!(matches!(
        parser.parse_owned("m^x").unwrap_err(),
        ParseError::Syntax { .. }
    ));
}

#[test]
fn gateway_agreement_corpus() {
    // Everywhere both grammars succeed they must agree, so checked mode
    // returns the same answer as either parser alone.
    let corpus = [
        "1 m",
        "9.8 kg*m/s^2",
        "1/2",
        "3.5e3 s",
        "km",
        "5 m^2",
        "2 km/hour",
        "100 W",
        "37 degC",
        "-12 ft",
    ];

    let trie = trie();
    let mut gateway = ParserGateway::new(&trie, &Config::default());
    let mut parser = Parser::new(&trie);
    for text in corpus {
        let checked = gateway.parse(text).unwrap_or_else(|e| panic!("{text}: {e}"));
        let direct = parser.parse_owned(text).unwrap();
        assert!(
            checked.agrees_with(&direct, 1e-10),
            "disagreement on {text}: gateway {} vs parser {}",
            checked.expression(),
            direct.expression()
        );
    }
}

#[test]
fn gateway_recovers_legacy_idioms() {
    let trie = trie();
    let mut gateway = ParserGateway::new(&trie, &Config::default());
    assert_eq!(gateway.mode(), ParserMode::NewChecked);

    let r = gateway.parse("5 feet 6 inches").unwrap();
    assert_eq!(r.scalar, 5.5);
    assert_eq!(r.numerator.as_slice(), ["<foot>"]);

    let r = gateway.parse("150 lbs 8 oz").unwrap();
    assert_eq!(r.scalar, 150.5);
    assert_eq!(r.numerator.as_slice(), ["<pound>"]);

    let r = gateway.parse("0:05:30").unwrap();
    assert_eq!(r.scalar, 330.0);
    assert_eq!(r.numerator.as_slice(), ["<second>"]);

    let r = gateway.parse("$1,250.50").unwrap();
    assert_eq!(r.scalar, 1250.5);
    assert_eq!(r.numerator.as_slice(), ["<dollar>"]);
}

#[test]
fn config_rejects_bad_values_at_set_time() {
    let mut cfg = Config::default();
    assert_eq!(
        cfg.set("no-such-key", ConfigValue::Boolean(true)),
        Err(ConfigError::UnknownKey("no-such-key".into()))
    );
    assert!(matches!(
        cfg.set("parser-cache-size", ConfigValue::Integer(10_000_000)),
        Err(ConfigError::OutOfRange { .. })
    ));
    assert!(matches!(
        cfg.set("strict-lexer", ConfigValue::Integer(1)),
        Err(ConfigError::WrongType { .. })
    ));
    // Failed sets never partially apply.
    assert_eq!(cfg, Config::default());
}

#[test]
fn strict_lexer_surfaces_junk_characters() {
    let trie = trie();
    let mut cfg = Config::default();
    cfg.set("strict-lexer", ConfigValue::Boolean(true)).unwrap();
    cfg.set("compatibility-mode", ConfigValue::Boolean(false)).unwrap();
    let mut gateway = ParserGateway::new(&trie, &cfg);

    assert!(matches!(
        gateway.parse("5 m @").unwrap_err(),
        ParseError::Syntax { .. }
    ));
    assert!(gateway.parse("5 m").is_ok());
}

#[test]
fn trait_object_dispatch() {
    let trie = trie();
    let mut parsers: Vec<Box<dyn ExpressionParser + '_>> = vec![
        Box::new(Parser::new(&trie)),
        Box::new(mensura_parse::LegacyParser::new(&trie)),
    ];
    for parser in parsers.iter_mut() {
        let r = parser.parse("2 km").unwrap();
        assert_eq!(r.scalar, 2.0);
        assert_eq!(r.numerator.as_slice(), ["<kilo>", "<meter>"]);
    }
}

#[test]
fn quantity_handoff_applies_prefix_factors() {
    let trie = trie();
    let mut parser = Parser::new(&trie);
    let r = parser.parse_owned("2 km/s").unwrap();

    let q = Quantity::from_parts(
        r.scalar,
        &r.numerator,
        &r.denominator,
        default_units(),
        default_prefixes(),
    )
    .unwrap();
    assert_eq!(q.value, 2000.0);
    assert_eq!(q.numerator, ["meter"]);
    assert_eq!(q.denominator, ["second"]);

    let r = parser.parse_owned("7 kg").unwrap();
    let q = Quantity::from_parts(
        r.scalar,
        &r.numerator,
        &r.denominator,
        default_units(),
        default_prefixes(),
    )
    .unwrap();
    assert_eq!(q.value, 7.0);
    assert_eq!(q.kind, Some(Kind::Mass));
}

#[test]
fn rendered_expression_round_trips_through_quantity() {
    let trie = trie();
    let mut parser = Parser::new(&trie);

    // Denominator-only results must render with the scalar/atom separator so
    // the constructor can split the string back apart.
    let r = parser.parse_owned("s^-1").unwrap();
    assert_eq!(r.expression(), "1 /<second>");
    let q = Quantity::from_expression(&r.expression(), default_units(), default_prefixes())
        .unwrap();
    assert!(q.numerator.is_empty());
    assert_eq!(q.denominator, vec!["second"]);

    let r = parser.parse_owned("9.8 kg*m/s^2").unwrap();
    let q = Quantity::from_expression(&r.expression(), default_units(), default_prefixes())
        .unwrap();
    assert_eq!(q.value, 9.8);
    assert_eq!(q.numerator, vec!["kilogram", "meter"]);
    assert_eq!(q.denominator, vec!["second", "second"]);
}
