//! Built-in unit and prefix definitions.
//!
//! A pragmatic default set rather than an exhaustive one: SI base units,
//! the derived units that show up in everyday quantity strings, imperial
//! lengths and weights, temperatures, angle, information, currency and
//! percent. Callers with richer needs build their own tables.

use crate::kind::Kind;
use crate::tables::{PrefixTable, UnitTable};

pub(crate) fn build_default_tables() -> (UnitTable, PrefixTable) {
    (build_units(), build_prefixes())
}

fn build_units() -> UnitTable {
    let mut t = UnitTable::new();

    // Length
    t.register("meter", Kind::Length, &["m", "meters", "metre", "metres"]);
    t.register("foot", Kind::Length, &["ft", "feet"]);
    t.register("inch", Kind::Length, &["in", "inches"]);
    t.register("yard", Kind::Length, &["yd", "yards"]);
    t.register("mile", Kind::Length, &["mi", "miles"]);

    // Mass
    t.register("gram", Kind::Mass, &["g", "grams", "gramme", "grammes"]);
    // Registered as a unit in its own right so that "kg" resolves exactly
    // instead of decomposing into kilo+gram.
    t.register("kilogram", Kind::Mass, &["kg", "kilograms"]);
    t.register("pound", Kind::Mass, &["lb", "lbs", "pounds", "pound-mass"]);
    t.register("ounce", Kind::Mass, &["oz", "ounces"]);
    t.register("stone", Kind::Mass, &["st", "stones"]);

    // Time
    t.register("second", Kind::Time, &["s", "sec", "secs", "seconds"]);
    t.register("minute", Kind::Time, &["min", "mins", "minutes"]);
    t.register("hour", Kind::Time, &["h", "hr", "hrs", "hours"]);
    t.register("day", Kind::Time, &["d", "days"]);
    t.register("week", Kind::Time, &["wk", "weeks"]);
    t.register("year", Kind::Time, &["yr", "yrs", "years"]);

    // Temperature
    t.register("kelvin", Kind::Temperature, &["K", "degK"]);
    t.register("celsius", Kind::Temperature, &["degC", "centigrade"]);
    t.register("fahrenheit", Kind::Temperature, &["degF"]);

    // Electric / substance / luminous
    t.register("ampere", Kind::Current, &["A", "amp", "amps", "amperes"]);
    t.register("mole", Kind::Substance, &["mol", "moles"]);
    t.register("candela", Kind::Luminosity, &["cd", "candelas"]);

    // Derived
    t.register("newton", Kind::Force, &["N", "newtons"]);
    t.register("joule", Kind::Energy, &["J", "joules"]);
    t.register("watt", Kind::Power, &["W", "watts"]);
    t.register("pascal", Kind::Pressure, &["Pa", "pascals"]);
    t.register("hertz", Kind::Frequency, &["Hz"]);
    t.register("liter", Kind::Volume, &["l", "L", "liters", "litre", "litres"]);

    // Angle
    t.register("degree", Kind::Angle, &["deg", "degrees", "\u{00b0}"]);
    t.register("radian", Kind::Angle, &["rad", "radians"]);

    // Information
    t.register("byte", Kind::Information, &["B", "bytes"]);
    t.register("bit", Kind::Information, &["b", "bits"]);

    // Currency and dimensionless
    t.register("dollar", Kind::Currency, &["USD", "dollars"]);
    t.register("percent", Kind::Unity, &["pct"]);
    t.register("each", Kind::Unity, &["ea"]);

    t
}

fn build_prefixes() -> PrefixTable {
    let mut t = PrefixTable::new();

    t.register("yotta", 1e24, &["Y"]);
    t.register("zetta", 1e21, &["Z"]);
    t.register("exa", 1e18, &["E"]);
    t.register("peta", 1e15, &["P"]);
    t.register("tera", 1e12, &["T"]);
    t.register("giga", 1e9, &["G"]);
    t.register("mega", 1e6, &["M"]);
    t.register("kilo", 1e3, &["k"]);
    t.register("hecto", 1e2, &["h"]);
    t.register("deka", 1e1, &["da", "deca"]);
    t.register("deci", 1e-1, &["d"]);
    t.register("centi", 1e-2, &["c"]);
    t.register("milli", 1e-3, &["m"]);
    t.register("micro", 1e-6, &["u", "\u{00b5}"]);
    t.register("nano", 1e-9, &["n"]);
    t.register("pico", 1e-12, &["p"]);
    t.register("femto", 1e-15, &["f"]);
    t.register("atto", 1e-18, &["a"]);
    t.register("zepto", 1e-21, &["z"]);
    t.register("yocto", 1e-24, &["y"]);

    t
}
