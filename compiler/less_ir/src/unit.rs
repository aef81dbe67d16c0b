//! CSS units and the conversion groups used for comparison and arithmetic.

use std::fmt;

/// Unit attached to a number.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Unit {
    /// Plain number.
    #[default]
    None,
    Px,
    Cm,
    Mm,
    In,
    Pt,
    Pc,
    M,
    Em,
    Rem,
    Percent,
    S,
    Ms,
    Rad,
    Deg,
    Grad,
    Turn,
    /// Anything else (`vw`, `fr`, `dpi`, ...). Only equal to itself.
    Other(Box<str>),
}

/// Units that convert into each other.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum UnitGroup {
    Length,
    Duration,
    Angle,
}

impl Unit {
    /// Parse a unit suffix. The empty string is [`Unit::None`].
    pub fn parse(text: &str) -> Unit {
        match text {
            "" => Unit::None,
            "px" => Unit::Px,
            "cm" => Unit::Cm,
            "mm" => Unit::Mm,
            "in" => Unit::In,
            "pt" => Unit::Pt,
            "pc" => Unit::Pc,
            "m" => Unit::M,
            "em" => Unit::Em,
            "rem" => Unit::Rem,
            "%" => Unit::Percent,
            "s" => Unit::S,
            "ms" => Unit::Ms,
            "rad" => Unit::Rad,
            "deg" => Unit::Deg,
            "grad" => Unit::Grad,
            "turn" => Unit::Turn,
            other => Unit::Other(other.into()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Unit::None => "",
            Unit::Px => "px",
            Unit::Cm => "cm",
            Unit::Mm => "mm",
            Unit::In => "in",
            Unit::Pt => "pt",
            Unit::Pc => "pc",
            Unit::M => "m",
            Unit::Em => "em",
            Unit::Rem => "rem",
            Unit::Percent => "%",
            Unit::S => "s",
            Unit::Ms => "ms",
            Unit::Rad => "rad",
            Unit::Deg => "deg",
            Unit::Grad => "grad",
            Unit::Turn => "turn",
            Unit::Other(text) => text,
        }
    }

    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self, Unit::None)
    }

    /// Conversion group and the factor to the group's base unit
    /// (`m`, `s`, `turn`).
    pub fn group(&self) -> Option<(UnitGroup, f64)> {
        const INCH: f64 = 0.0254;
        let entry = match self {
            Unit::M => (UnitGroup::Length, 1.0),
            Unit::Cm => (UnitGroup::Length, 0.01),
            Unit::Mm => (UnitGroup::Length, 0.001),
            Unit::In => (UnitGroup::Length, INCH),
            Unit::Px => (UnitGroup::Length, INCH / 96.0),
            Unit::Pt => (UnitGroup::Length, INCH / 72.0),
            Unit::Pc => (UnitGroup::Length, INCH / 72.0 * 12.0),
            Unit::S => (UnitGroup::Duration, 1.0),
            Unit::Ms => (UnitGroup::Duration, 0.001),
            Unit::Rad => (UnitGroup::Angle, 1.0 / (2.0 * std::f64::consts::PI)),
            Unit::Deg => (UnitGroup::Angle, 1.0 / 360.0),
            Unit::Grad => (UnitGroup::Angle, 1.0 / 400.0),
            Unit::Turn => (UnitGroup::Angle, 1.0),
            _ => return None,
        };
        Some(entry)
    }

    /// Base unit of a conversion group.
    pub fn base_of(group: UnitGroup) -> Unit {
        match group {
            UnitGroup::Length => Unit::M,
            UnitGroup::Duration => Unit::S,
            UnitGroup::Angle => Unit::Turn,
        }
    }

    /// Express `value` (in `self`) in the group's base unit.
    ///
    /// Units outside every group are returned unchanged.
    pub fn unify(&self, value: f64) -> (f64, Unit) {
        match self.group() {
            Some((group, factor)) => (value * factor, Unit::base_of(group)),
            None => (value, self.clone()),
        }
    }

    /// Convert `value` from `self` into `target`, if both are in the same group.
    pub fn convert(&self, value: f64, target: &Unit) -> Option<f64> {
        if self == target {
            return Some(value);
        }
        let (from_group, from_factor) = self.group()?;
        let (to_group, to_factor) = target.group()?;
        (from_group == to_group).then(|| value * from_factor / to_factor)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
