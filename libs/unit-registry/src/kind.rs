/// Dimensional kind of a canonical unit.
///
/// `Unity` marks dimensionless units (percent, each). Compound dimensions
/// produced by unit algebra carry no kind tag; the tag is only meaningful for
/// a single registered unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Kind {
    Unity,
    Length,
    Mass,
    Time,
    Temperature,
    Current,
    Luminosity,
    Substance,
    Angle,
    Information,
    Currency,
    Force,
    Energy,
    Power,
    Pressure,
    Frequency,
    Volume,
}

impl Kind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Unity => "unity",
            Kind::Length => "length",
            Kind::Mass => "mass",
            Kind::Time => "time",
            Kind::Temperature => "temperature",
            Kind::Current => "current",
            Kind::Luminosity => "luminosity",
            Kind::Substance => "substance",
            Kind::Angle => "angle",
            Kind::Information => "information",
            Kind::Currency => "currency",
            Kind::Force => "force",
            Kind::Energy => "energy",
            Kind::Power => "power",
            Kind::Pressure => "pressure",
            Kind::Frequency => "frequency",
            Kind::Volume => "volume",
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
