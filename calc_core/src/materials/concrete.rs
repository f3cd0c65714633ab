//! Concrete strength classes.
//!
//! The class name encodes the characteristic cylinder strength: `C30` has
//! fck = 30 MPa. Classes above C50 are high-strength concretes, for which both
//! design codes switch to the reduced stress-block parameters.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Concrete strength classes C10 to C90
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConcreteClass {
    C10,
    C15,
    C20,
    C25,
    C30,
    C35,
    C40,
    C45,
    C50,
    C55,
    C60,
    C65,
    C70,
    C75,
    C80,
    C85,
    C90,
}

impl ConcreteClass {
    /// All classes in ascending strength order
    pub const ALL: [ConcreteClass; 17] = [
        ConcreteClass::C10,
        ConcreteClass::C15,
        ConcreteClass::C20,
        ConcreteClass::C25,
        ConcreteClass::C30,
        ConcreteClass::C35,
        ConcreteClass::C40,
        ConcreteClass::C45,
        ConcreteClass::C50,
        ConcreteClass::C55,
        ConcreteClass::C60,
        ConcreteClass::C65,
        ConcreteClass::C70,
        ConcreteClass::C75,
        ConcreteClass::C80,
        ConcreteClass::C85,
        ConcreteClass::C90,
    ];

    /// Characteristic compressive strength fck (MPa)
    pub fn fck(&self) -> f64 {
        match self {
            ConcreteClass::C10 => 10.0,
            ConcreteClass::C15 => 15.0,
            ConcreteClass::C20 => 20.0,
            ConcreteClass::C25 => 25.0,
            ConcreteClass::C30 => 30.0,
            ConcreteClass::C35 => 35.0,
            ConcreteClass::C40 => 40.0,
            ConcreteClass::C45 => 45.0,
            ConcreteClass::C50 => 50.0,
            ConcreteClass::C55 => 55.0,
            ConcreteClass::C60 => 60.0,
            ConcreteClass::C65 => 65.0,
            ConcreteClass::C70 => 70.0,
            ConcreteClass::C75 => 75.0,
            ConcreteClass::C80 => 80.0,
            ConcreteClass::C85 => 85.0,
            ConcreteClass::C90 => 90.0,
        }
    }

    /// High-strength classes (fck > 50 MPa) use the reduced code parameters
    pub fn is_high_strength(&self) -> bool {
        self.fck() > 50.0
    }

    /// Parse from "C30", "c30", "C 30" or a bare "30"
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        let normalized = s.trim().to_uppercase().replace([' ', '-'], "");
        let digits = normalized.strip_prefix('C').unwrap_or(&normalized);
        let fck: f64 = digits
            .parse()
            .map_err(|_| CalcError::material_not_found(s))?;
        Self::ALL
            .iter()
            .copied()
            .find(|class| class.fck() == fck)
            .ok_or_else(|| CalcError::material_not_found(s))
    }
}

impl std::fmt::Display for ConcreteClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "C{}", self.fck() as u32)
    }
}
