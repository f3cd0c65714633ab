//! Eurocode 2 rectangular stress block (EN 1992-1-1, 3.1.7(3)).
//!
//! A uniform stress `η·fcd` acts over a depth `λ·x`. Equilibrium of a singly
//! reinforced section is then quadratic in x, so no iteration is needed.

use serde::{Deserialize, Serialize};

use super::HIGH_STRENGTH_FCK_MPA;

/// Ultimate compressive strain used with the rectangular block
pub const RECTANGULAR_BLOCK_ECU: f64 = 0.0035;

/// Rectangular stress-block parameters for one fck.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectangularBlockParams {
    /// Characteristic strength used for the derivation (MPa, ≤ 90)
    pub fck_mpa: f64,
    /// Stress reduction αc (includes the long-term factor)
    pub ac: f64,
    /// Block depth factor λ
    pub lambda: f64,
    /// Neutral-axis depth limit as a fraction of d
    pub neutral_axis_limit: f64,
    /// Ultimate compressive strain, εcu
    pub ecu: f64,
}

impl RectangularBlockParams {
    /// Derive the parameters; `fck` must already be validated and clamped.
    pub fn for_fck(fck: f64) -> Self {
        let (ac, lambda, neutral_axis_limit) = if fck <= HIGH_STRENGTH_FCK_MPA {
            (0.85, 0.8, 0.45)
        } else {
            (
                0.85 * (1.0 - (fck - 50.0) / 200.0),
                0.8 - (fck - 50.0) / 400.0,
                0.35,
            )
        };

        RectangularBlockParams {
            fck_mpa: fck,
            ac,
            lambda,
            neutral_axis_limit,
            ecu: RECTANGULAR_BLOCK_ECU,
        }
    }
}

impl std::fmt::Display for RectangularBlockParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Concrete Parameters according to Eurocode 2:")?;
        writeln!(f, "  fck    =\t{:.3} MPa,", self.fck_mpa)?;
        writeln!(f, "  ac     =\t{:.3},", self.ac)?;
        write!(f, "  lambda =\t{:.3}.", self.lambda)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_strength() {
        let p = RectangularBlockParams::for_fck(30.0);
        assert_eq!(p.ac, 0.85);
        assert_eq!(p.lambda, 0.8);
        assert_eq!(p.neutral_axis_limit, 0.45);
        assert_eq!(p.ecu, 0.0035);
    }

    #[test]
    fn test_high_strength() {
        // fck = 90: ac = 0.85 * 0.8 = 0.68, lambda = 0.8 - 0.1 = 0.7
        let p = RectangularBlockParams::for_fck(90.0);
        assert!((p.ac - 0.68).abs() < 1e-12);
        assert!((p.lambda - 0.7).abs() < 1e-12);
        assert_eq!(p.neutral_axis_limit, 0.35);
        assert_eq!(p.ecu, 0.0035);
    }
}
