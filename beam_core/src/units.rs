//! # Unit Normalizer
//!
//! Conversion between the display unit systems a caller works in and the
//! fixed base system the engine computes in.
//!
//! ## Design Philosophy
//!
//! All analysis happens in one base system (meters, newtons). Inputs are
//! normalized on the way in and results are converted back to the
//! caller's display units on the way out, so the solver never has to
//! reason about units at all.
//!
//! Conversion is driven by symbol tables rather than hard-coded match
//! arms so the same functions serve typed units and raw UI strings. An
//! unknown symbol falls back to a scale factor of 1 (silent no-op, not
//! an error).
//!
//! ## Example
//!
//! ```rust
//! use beam_core::units::{convert_length, LengthUnit, UnitSystem};
//!
//! let m = convert_length(10.0, "ft", "m");
//! assert!((m - 3.048).abs() < 1e-9);
//!
//! let system = UnitSystem::new(LengthUnit::M, beam_core::units::ForceUnit::Kn);
//! assert_eq!(system.length.symbol(), "m");
//! ```

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

// ============================================================================
// Conversion Tables
// ============================================================================

/// Length symbol -> meters per unit
static LENGTH_FACTORS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert("m", 1.0);
    m.insert("mm", 0.001);
    m.insert("ft", 0.3048);
    m
});

/// Force symbol -> newtons per unit
static FORCE_FACTORS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert("N", 1.0);
    m.insert("kN", 1000.0);
    m.insert("kips", 4448.2216152605);
    m
});

/// Meters per unit of `symbol`, or 1.0 for an unknown symbol
pub fn length_factor(symbol: &str) -> f64 {
    LENGTH_FACTORS.get(symbol).copied().unwrap_or(1.0)
}

/// Newtons per unit of `symbol`, or 1.0 for an unknown symbol
pub fn force_factor(symbol: &str) -> f64 {
    FORCE_FACTORS.get(symbol).copied().unwrap_or(1.0)
}

/// Convert a length value between unit symbols
pub fn convert_length(value: f64, from: &str, to: &str) -> f64 {
    value * length_factor(from) / length_factor(to)
}

/// Convert a force value between unit symbols
pub fn convert_force(value: f64, from: &str, to: &str) -> f64 {
    value * force_factor(from) / force_factor(to)
}

/// Convert a distributed-load intensity (force per length) between systems
pub fn convert_distributed(value: f64, from: &UnitSystem, to: &UnitSystem) -> f64 {
    value * from.distributed_factor() / to.distributed_factor()
}

/// Convert a moment (force times length) between systems
pub fn convert_moment(value: f64, from: &UnitSystem, to: &UnitSystem) -> f64 {
    value * from.moment_factor() / to.moment_factor()
}

// ============================================================================
// Typed Units
// ============================================================================

/// Length unit selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LengthUnit {
    /// Meters
    #[default]
    M,
    /// Millimeters
    Mm,
    /// Feet
    Ft,
}

impl LengthUnit {
    /// All available length units for UI selection
    pub const ALL: [LengthUnit; 3] = [LengthUnit::M, LengthUnit::Mm, LengthUnit::Ft];

    /// Unit symbol as used in the conversion tables
    pub fn symbol(&self) -> &'static str {
        match self {
            LengthUnit::M => "m",
            LengthUnit::Mm => "mm",
            LengthUnit::Ft => "ft",
        }
    }

    /// Parse a unit symbol
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "m" => Some(LengthUnit::M),
            "mm" => Some(LengthUnit::Mm),
            "ft" => Some(LengthUnit::Ft),
            _ => None,
        }
    }

    /// Meters per unit
    pub fn factor(&self) -> f64 {
        length_factor(self.symbol())
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Force unit selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ForceUnit {
    /// Newtons
    #[default]
    N,
    /// Kilonewtons
    Kn,
    /// Kips (1000 pounds-force)
    Kips,
}

impl ForceUnit {
    /// All available force units for UI selection
    pub const ALL: [ForceUnit; 3] = [ForceUnit::N, ForceUnit::Kn, ForceUnit::Kips];

    /// Unit symbol as used in the conversion tables
    pub fn symbol(&self) -> &'static str {
        match self {
            ForceUnit::N => "N",
            ForceUnit::Kn => "kN",
            ForceUnit::Kips => "kips",
        }
    }

    /// Parse a unit symbol
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "N" => Some(ForceUnit::N),
            "kN" => Some(ForceUnit::Kn),
            "kips" => Some(ForceUnit::Kips),
            _ => None,
        }
    }

    /// Newtons per unit
    pub fn factor(&self) -> f64 {
        force_factor(self.symbol())
    }
}

impl fmt::Display for ForceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

// ============================================================================
// Unit System
// ============================================================================

/// The display unit pair a caller supplies input in and wants results in
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct UnitSystem {
    /// Length unit for positions and spans
    pub length: LengthUnit,
    /// Force unit for loads and reactions
    pub force: ForceUnit,
}

impl UnitSystem {
    /// Create a unit system
    pub fn new(length: LengthUnit, force: ForceUnit) -> Self {
        UnitSystem { length, force }
    }

    /// The fixed base system all computation happens in
    pub fn base() -> Self {
        UnitSystem::new(LengthUnit::M, ForceUnit::N)
    }

    /// Metric display system (m, kN)
    pub fn metric() -> Self {
        UnitSystem::new(LengthUnit::M, ForceUnit::Kn)
    }

    /// US customary display system (ft, kips)
    pub fn us() -> Self {
        UnitSystem::new(LengthUnit::Ft, ForceUnit::Kips)
    }

    /// Base units per display unit for lengths
    pub fn length_factor(&self) -> f64 {
        self.length.factor()
    }

    /// Base units per display unit for forces
    pub fn force_factor(&self) -> f64 {
        self.force.factor()
    }

    /// Base units per display unit for distributed intensities (force/length)
    pub fn distributed_factor(&self) -> f64 {
        self.force.factor() / self.length.factor()
    }

    /// Base units per display unit for moments (force * length)
    pub fn moment_factor(&self) -> f64 {
        self.force.factor() * self.length.factor()
    }

    /// Length value: this system -> base
    pub fn length_to_base(&self, value: f64) -> f64 {
        value * self.length_factor()
    }

    /// Length value: base -> this system
    pub fn length_from_base(&self, value: f64) -> f64 {
        value / self.length_factor()
    }

    /// Force value: this system -> base
    pub fn force_to_base(&self, value: f64) -> f64 {
        value * self.force_factor()
    }

    /// Force value: base -> this system
    pub fn force_from_base(&self, value: f64) -> f64 {
        value / self.force_factor()
    }

    /// Distributed intensity: this system -> base
    pub fn distributed_to_base(&self, value: f64) -> f64 {
        value * self.distributed_factor()
    }

    /// Moment value: this system -> base
    pub fn moment_to_base(&self, value: f64) -> f64 {
        value * self.moment_factor()
    }

    /// Moment value: base -> this system
    pub fn moment_from_base(&self, value: f64) -> f64 {
        value / self.moment_factor()
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.length, self.force)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_conversion() {
        assert!((convert_length(1.0, "ft", "m") - 0.3048).abs() < 1e-12);
        assert!((convert_length(1000.0, "mm", "m") - 1.0).abs() < 1e-12);
        assert!((convert_length(3.0, "m", "m") - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_force_conversion() {
        assert!((convert_force(1.0, "kN", "N") - 1000.0).abs() < 1e-9);
        assert!((convert_force(1.0, "kips", "kN") - 4.4482216152605).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_symbol_is_noop() {
        // Unknown symbols fall back to factor 1, silently
        assert_eq!(length_factor("furlong"), 1.0);
        assert_eq!(convert_force(42.0, "stone", "stone"), 42.0);
        assert_eq!(convert_length(7.5, "cubits", "m"), 7.5);
    }

    #[test]
    fn test_distributed_factor() {
        // kN/m -> N/m is a factor of 1000
        let metric = UnitSystem::metric();
        assert!((metric.distributed_factor() - 1000.0).abs() < 1e-9);

        // kips/ft -> N/m
        let us = UnitSystem::us();
        let expected = 4448.2216152605 / 0.3048;
        assert!((us.distributed_factor() - expected).abs() < 1e-6);
    }

    #[test]
    fn test_moment_factor() {
        // kN*m -> N*m is a factor of 1000
        let metric = UnitSystem::metric();
        assert!((metric.moment_factor() - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn test_round_trip() {
        let us = UnitSystem::us();
        let length = 27.35;
        let back = us.length_from_base(us.length_to_base(length));
        assert!(((back - length) / length).abs() < 1e-9);

        let moment = 812.4;
        let back = us.moment_from_base(us.moment_to_base(moment));
        assert!(((back - moment) / moment).abs() < 1e-9);
    }

    #[test]
    fn test_symbol_parsing() {
        assert_eq!(LengthUnit::from_symbol("ft"), Some(LengthUnit::Ft));
        assert_eq!(LengthUnit::from_symbol("yd"), None);
        assert_eq!(ForceUnit::from_symbol("kN"), Some(ForceUnit::Kn));
    }

    #[test]
    fn test_serialization() {
        let system = UnitSystem::us();
        let json = serde_json::to_string(&system).unwrap();
        let roundtrip: UnitSystem = serde_json::from_str(&json).unwrap();
        assert_eq!(system, roundtrip);
    }
}
