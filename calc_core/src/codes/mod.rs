//! # Design Codes
//!
//! Safety factors and concrete stress-block parameters for the two supported
//! design codes:
//!
//! - [`nbr6118`] - Brazilian NBR 6118:2014, nonlinear parabola-rectangle law
//! - [`eurocode2`] - EN 1992-1-1, idealized rectangular stress block
//!
//! Parameter derivation is a pure function of fck. A [`DesignCode`] holds only
//! the code variant and its safety factors, so one instance can be shared
//! freely between threads designing sections of different concrete classes.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::codes::{CodeKind, CodeParameters, DesignCode};
//!
//! let code = DesignCode::new(CodeKind::Nbr6118);
//! let params = code.parameters(30.0)?;
//! assert_eq!(params.ecu(), 0.0035);
//! assert_eq!(params.neutral_axis_limit(), 0.45);
//! assert!(matches!(params, CodeParameters::ParabolaRectangle(_)));
//! # Ok::<(), calc_core::errors::CalcError>(())
//! ```

pub mod eurocode2;
pub mod nbr6118;

pub use eurocode2::RectangularBlockParams;
pub use nbr6118::ParabolaRectangleParams;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Upper bound on fck covered by both codes (MPa)
pub const MAX_FCK_MPA: f64 = 90.0;

/// fck above which the high-strength parameter formulas apply (MPa)
pub const HIGH_STRENGTH_FCK_MPA: f64 = 50.0;

/// Partial safety factors.
///
/// ## JSON Example
///
/// ```json
/// { "gc": 1.4, "gs": 1.15, "gf": 1.4 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SafetyFactors {
    /// Concrete strength reduction (γc)
    pub gc: f64,
    /// Steel strength reduction (γs)
    pub gs: f64,
    /// Load amplification (γf)
    pub gf: f64,
}

impl SafetyFactors {
    /// Create validated safety factors; every factor must be at least 1.
    pub fn new(gc: f64, gs: f64, gf: f64) -> CalcResult<Self> {
        Ok(SafetyFactors {
            gc: validate_factor("gc", gc)?,
            gs: validate_factor("gs", gs)?,
            gf: validate_factor("gf", gf)?,
        })
    }

    /// Replace the concrete factor
    pub fn with_gc(self, gc: f64) -> CalcResult<Self> {
        Ok(SafetyFactors { gc: validate_factor("gc", gc)?, ..self })
    }

    /// Replace the steel factor
    pub fn with_gs(self, gs: f64) -> CalcResult<Self> {
        Ok(SafetyFactors { gs: validate_factor("gs", gs)?, ..self })
    }

    /// Replace the load factor
    pub fn with_gf(self, gf: f64) -> CalcResult<Self> {
        Ok(SafetyFactors { gf: validate_factor("gf", gf)?, ..self })
    }

    /// Check factors that arrived through deserialization
    pub fn validate(&self) -> CalcResult<()> {
        Self::new(self.gc, self.gs, self.gf).map(|_| ())
    }
}

impl Default for SafetyFactors {
    fn default() -> Self {
        SafetyFactors {
            gc: 1.4,
            gs: 1.15,
            gf: 1.4,
        }
    }
}

fn validate_factor(field: &str, value: f64) -> CalcResult<f64> {
    if value.is_finite() && value >= 1.0 {
        Ok(value)
    } else {
        Err(CalcError::invalid_input(
            field,
            value.to_string(),
            "Safety factor must be at least 1.0",
        ))
    }
}

/// Supported design code variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CodeKind {
    /// NBR 6118:2014 - parabola-rectangle diagram, iterative equilibrium
    #[serde(rename = "NBR6118")]
    Nbr6118,
    /// Eurocode 2 - rectangular stress block, closed-form equilibrium
    #[serde(rename = "EC2")]
    Eurocode2,
}

impl CodeKind {
    /// All code variants
    pub const ALL: [CodeKind; 2] = [CodeKind::Nbr6118, CodeKind::Eurocode2];

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            CodeKind::Nbr6118 => "NBR 6118:2014",
            CodeKind::Eurocode2 => "Eurocode 2",
        }
    }
}

impl std::fmt::Display for CodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A design code variant together with its safety factors.
///
/// ## JSON Example
///
/// ```json
/// { "kind": "NBR6118", "safety": { "gc": 1.4, "gs": 1.15, "gf": 1.4 } }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DesignCode {
    pub kind: CodeKind,
    #[serde(default)]
    pub safety: SafetyFactors,
}

impl DesignCode {
    /// Code with default safety factors (γc = 1.4, γs = 1.15, γf = 1.4)
    pub fn new(kind: CodeKind) -> Self {
        DesignCode {
            kind,
            safety: SafetyFactors::default(),
        }
    }

    /// Shorthand for NBR 6118 with default factors
    pub fn nbr6118() -> Self {
        Self::new(CodeKind::Nbr6118)
    }

    /// Shorthand for Eurocode 2 with default factors
    pub fn eurocode2() -> Self {
        Self::new(CodeKind::Eurocode2)
    }

    /// Replace all safety factors at once.
    pub fn with_safety_factors(self, gc: f64, gs: f64, gf: f64) -> CalcResult<Self> {
        Ok(DesignCode {
            safety: SafetyFactors::new(gc, gs, gf)?,
            ..self
        })
    }

    /// Derive the stress-block parameters for a concrete strength.
    ///
    /// Fails for fck ≤ 0; clamps fck above 90 MPa to 90 MPa.
    pub fn parameters(&self, fck_mpa: f64) -> CalcResult<CodeParameters> {
        let fck = clamp_fck(fck_mpa)?;
        Ok(match self.kind {
            CodeKind::Nbr6118 => CodeParameters::ParabolaRectangle(ParabolaRectangleParams::for_fck(fck)),
            CodeKind::Eurocode2 => CodeParameters::RectangularBlock(RectangularBlockParams::for_fck(fck)),
        })
    }
}

/// Validate fck and clamp it to the upper code limit.
pub fn clamp_fck(fck_mpa: f64) -> CalcResult<f64> {
    if !fck_mpa.is_finite() || fck_mpa <= 0.0 {
        return Err(CalcError::invalid_input(
            "fck_mpa",
            fck_mpa.to_string(),
            "Concrete strength must be positive",
        ));
    }
    if fck_mpa > MAX_FCK_MPA {
        tracing::warn!(fck_mpa, limit = MAX_FCK_MPA, "fck above code limit, clamping");
        return Ok(MAX_FCK_MPA);
    }
    Ok(fck_mpa)
}

/// Stress-block parameters derived for one concrete strength.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "law")]
pub enum CodeParameters {
    ParabolaRectangle(ParabolaRectangleParams),
    RectangularBlock(RectangularBlockParams),
}

impl CodeParameters {
    /// The (possibly clamped) fck these parameters were derived for
    pub fn fck(&self) -> f64 {
        match self {
            CodeParameters::ParabolaRectangle(p) => p.fck_mpa,
            CodeParameters::RectangularBlock(p) => p.fck_mpa,
        }
    }

    /// Ultimate concrete compressive strain εcu
    pub fn ecu(&self) -> f64 {
        match self {
            CodeParameters::ParabolaRectangle(p) => p.ecu,
            CodeParameters::RectangularBlock(p) => p.ecu,
        }
    }

    /// Neutral-axis depth limit as a fraction of d
    pub fn neutral_axis_limit(&self) -> f64 {
        match self {
            CodeParameters::ParabolaRectangle(p) => p.neutral_axis_limit,
            CodeParameters::RectangularBlock(p) => p.neutral_axis_limit,
        }
    }
}

impl std::fmt::Display for CodeParameters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CodeParameters::ParabolaRectangle(p) => write!(f, "{}", p),
            CodeParameters::RectangularBlock(p) => write!(f, "{}", p),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_safety_factors() {
        let code = DesignCode::nbr6118();
        assert_eq!(code.safety.gc, 1.4);
        assert_eq!(code.safety.gs, 1.15);
        assert_eq!(code.safety.gf, 1.4);
    }

    #[test]
    fn test_safety_factor_validation() {
        assert!(SafetyFactors::new(1.5, 1.15, 1.4).is_ok());
        assert!(SafetyFactors::new(0.9, 1.15, 1.4).is_err());
        assert!(SafetyFactors::new(1.4, 0.5, 1.4).is_err());
        assert!(SafetyFactors::new(1.4, 1.15, f64::NAN).is_err());
        assert!(DesignCode::eurocode2().with_safety_factors(1.0, 1.0, 1.0).is_ok());

        let factors = SafetyFactors::default().with_gf(1.0).unwrap();
        assert_eq!(factors.gf, 1.0);
        assert_eq!(factors.gc, 1.4);
        assert!(factors.with_gs(0.99).is_err());
        assert!(factors.with_gc(1.3).is_ok());
    }

    #[test]
    fn test_fck_validation_and_clamp() {
        assert!(clamp_fck(0.0).is_err());
        assert!(clamp_fck(-20.0).is_err());
        assert_eq!(clamp_fck(35.0).unwrap(), 35.0);
        assert_eq!(clamp_fck(120.0).unwrap(), 90.0);

        let params = DesignCode::eurocode2().parameters(100.0).unwrap();
        assert_eq!(params.fck(), 90.0);
    }

    #[test]
    fn test_dispatch_by_kind() {
        let nbr = DesignCode::nbr6118().parameters(25.0).unwrap();
        let ec2 = DesignCode::eurocode2().parameters(25.0).unwrap();
        assert!(matches!(nbr, CodeParameters::ParabolaRectangle(_)));
        assert!(matches!(ec2, CodeParameters::RectangularBlock(_)));
        assert_eq!(nbr.neutral_axis_limit(), ec2.neutral_axis_limit());
    }

    #[test]
    fn test_code_serialization() {
        let code = DesignCode::eurocode2();
        let json = serde_json::to_string(&code).unwrap();
        assert!(json.contains("\"EC2\""));
        let roundtrip: DesignCode = serde_json::from_str(&json).unwrap();
        assert_eq!(code, roundtrip);

        // Safety factors default when omitted
        let minimal: DesignCode = serde_json::from_str(r#"{"kind":"NBR6118"}"#).unwrap();
        assert_eq!(minimal.safety, SafetyFactors::default());
    }
}
