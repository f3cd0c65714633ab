//! Reinforcing Steel
//!
//! Grades and the elastic-perfectly-plastic material used by the flexural
//! solver. The CA designation ("Concreto Armado") carries the yield strength
//! in tens of MPa: CA-50 yields at 500 MPa.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::materials::steel::{SteelGrade, SteelMaterial};
//!
//! let steel = SteelMaterial::new(500.0)?;
//! assert!((steel.eyk() - 500.0 / 210_000.0).abs() < 1e-15);
//! assert_eq!(SteelGrade::from_str_flexible("ca-60")?, SteelGrade::CA60);
//! # Ok::<(), calc_core::errors::CalcError>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{ensure_positive, CalcError, CalcResult};

/// Elastic modulus of reinforcing steel, Es (MPa)
pub const STEEL_ELASTIC_MODULUS_MPA: f64 = 210_000.0;

/// Ultimate (maximum admissible) tensile strain of reinforcing steel
pub const STEEL_ULTIMATE_STRAIN: f64 = 0.01;

/// Reinforcing steel grades
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SteelGrade {
    /// Wire, fyk = 250 MPa
    #[serde(rename = "CA-25")]
    CA25,
    /// Ribbed bars, fyk = 500 MPa
    #[serde(rename = "CA-50")]
    CA50,
    /// Smooth bars, fyk = 600 MPa
    #[serde(rename = "CA-60")]
    CA60,
}

impl SteelGrade {
    /// All grades for selection lists
    pub const ALL: [SteelGrade; 3] = [SteelGrade::CA25, SteelGrade::CA50, SteelGrade::CA60];

    /// Characteristic yield strength fyk (MPa)
    pub fn fyk(&self) -> f64 {
        match self {
            SteelGrade::CA25 => 250.0,
            SteelGrade::CA50 => 500.0,
            SteelGrade::CA60 => 600.0,
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_uppercase().replace([' ', '_', '-'], "").as_str() {
            "CA25" => Ok(SteelGrade::CA25),
            "CA50" => Ok(SteelGrade::CA50),
            "CA60" => Ok(SteelGrade::CA60),
            _ => Err(CalcError::material_not_found(s)),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            SteelGrade::CA25 => "CA-25",
            SteelGrade::CA50 => "CA-50",
            SteelGrade::CA60 => "CA-60",
        }
    }
}

impl Default for SteelGrade {
    fn default() -> Self {
        SteelGrade::CA50
    }
}

impl std::fmt::Display for SteelGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Reinforcing steel with an elastic-perfectly-plastic stress-strain law.
///
/// Immutable once built; construct through [`SteelMaterial::new`] or
/// [`SteelMaterial::from_grade`]. Deserialized values are checked by
/// [`SteelMaterial::validate`] before every design.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SteelMaterial {
    /// Characteristic yield strength fyk (MPa)
    pub fyk_mpa: f64,
    /// Elastic modulus Es (MPa)
    pub es_mpa: f64,
    /// Ultimate tensile strain esu
    pub esu: f64,
}

impl SteelMaterial {
    /// Create a steel with a custom yield strength.
    pub fn new(fyk_mpa: f64) -> CalcResult<Self> {
        let steel = SteelMaterial {
            fyk_mpa,
            es_mpa: STEEL_ELASTIC_MODULUS_MPA,
            esu: STEEL_ULTIMATE_STRAIN,
        };
        steel.validate()?;
        Ok(steel)
    }

    /// Create a steel from a tabulated grade.
    pub fn from_grade(grade: SteelGrade) -> Self {
        SteelMaterial {
            fyk_mpa: grade.fyk(),
            es_mpa: STEEL_ELASTIC_MODULUS_MPA,
            esu: STEEL_ULTIMATE_STRAIN,
        }
    }

    /// Validate all three constants, including values that bypassed the
    /// constructors through deserialization.
    ///
    /// esu must lie above the yield strain and at most at the 10‰ limit.
    pub fn validate(&self) -> CalcResult<()> {
        ensure_positive("fyk_mpa", self.fyk_mpa, "Yield strength must be positive")?;
        ensure_positive("es_mpa", self.es_mpa, "Elastic modulus must be positive")?;
        let esu = ensure_positive("esu", self.esu, "Ultimate strain must be positive")?;
        if esu > STEEL_ULTIMATE_STRAIN {
            return Err(CalcError::invalid_input(
                "esu",
                esu.to_string(),
                "Ultimate strain exceeds the 10‰ limit",
            ));
        }
        if esu <= self.eyk() {
            return Err(CalcError::invalid_input(
                "esu",
                esu.to_string(),
                "Ultimate strain must exceed the yield strain",
            ));
        }
        Ok(())
    }

    /// Yield strain eyk = fyk / Es
    pub fn eyk(&self) -> f64 {
        self.fyk_mpa / self.es_mpa
    }

    /// Stress for a given strain, clipped at the design yield strength.
    ///
    /// Compression strains are negative and pass through unclipped on the
    /// negative side; callers treat a non-positive stress as unusable.
    pub fn stress_at(&self, strain: f64, fyd_mpa: f64) -> f64 {
        fyd_mpa.min(self.es_mpa * strain)
    }
}

impl Default for SteelMaterial {
    fn default() -> Self {
        SteelMaterial::from_grade(SteelGrade::default())
    }
}

impl std::fmt::Display for SteelMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Steel Parameters:")?;
        writeln!(f, "  fyk: \t{} MPa,", self.fyk_mpa)?;
        writeln!(f, "  eyk: \t{:.4} %,", self.eyk() * 100.0)?;
        writeln!(f, "  esu: \t{} %,", self.esu * 100.0)?;
        write!(f, "  Es:  \t{} MPa.", self.es_mpa)
    }
}
