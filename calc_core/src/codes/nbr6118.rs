//! NBR 6118:2014 concrete parameters (item 8.2.10.1).
//!
//! The compressed concrete follows the parabola-rectangle diagram
//! `σc = 0.85·fcd·[1 - (1 - εc/εc2)^n]` up to εc2, then stays constant up to
//! εcu. For fck above 50 MPa the peak strain grows, the ultimate strain and the
//! parabola exponent shrink, and the admissible neutral-axis depth drops from
//! 0.45·d to 0.35·d.

use serde::{Deserialize, Serialize};

use super::HIGH_STRENGTH_FCK_MPA;

/// Parabola-rectangle parameters for one fck.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParabolaRectangleParams {
    /// Characteristic strength used for the derivation (MPa, ≤ 90)
    pub fck_mpa: f64,
    /// Strain at the end of the parabola, εc2
    pub ec2: f64,
    /// Ultimate compressive strain, εcu
    pub ecu: f64,
    /// Parabola exponent n
    pub n: f64,
    /// Neutral-axis depth limit as a fraction of d
    pub neutral_axis_limit: f64,
    /// Mean tensile strength fct,m (MPa)
    pub fctm_mpa: f64,
    /// Lower characteristic tensile strength fctk,inf (MPa)
    pub fctk_inf_mpa: f64,
    /// Upper characteristic tensile strength fctk,sup (MPa)
    pub fctk_sup_mpa: f64,
}

impl ParabolaRectangleParams {
    /// Derive the parameters; `fck` must already be validated and clamped.
    pub fn for_fck(fck: f64) -> Self {
        let (ec2, ecu, n, neutral_axis_limit, fctm) = if fck <= HIGH_STRENGTH_FCK_MPA {
            (0.002, 0.0035, 2.0, 0.45, 0.3 * fck.powf(2.0 / 3.0))
        } else {
            let reduction = ((90.0 - fck) / 100.0).powi(4);
            (
                0.002 + 0.000085 * (fck - 50.0).powf(0.53),
                0.0026 + 0.035 * reduction,
                1.4 + 23.4 * reduction,
                0.35,
                2.12 * (1.0 + 0.11 * fck).ln(),
            )
        };

        ParabolaRectangleParams {
            fck_mpa: fck,
            ec2,
            ecu,
            n,
            neutral_axis_limit,
            fctm_mpa: fctm,
            fctk_inf_mpa: 0.7 * fctm,
            fctk_sup_mpa: 1.3 * fctm,
        }
    }
}

impl std::fmt::Display for ParabolaRectangleParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Concrete Parameters according to NBR 6118:2014:")?;
        writeln!(f, "  fck     =\t{:.3} MPa,", self.fck_mpa)?;
        writeln!(f, "  LN      =\t{:.3}*d,", self.neutral_axis_limit)?;
        writeln!(f, "  ec2     =\t{:.4} %,", self.ec2 * 100.0)?;
        writeln!(f, "  ecu     =\t{:.4} %,", self.ecu * 100.0)?;
        writeln!(f, "  n       =\t{:.3},", self.n)?;
        writeln!(f, "  fctm    =\t{:.3} MPa,", self.fctm_mpa)?;
        writeln!(f, "  fctkinf =\t{:.3} MPa,", self.fctk_inf_mpa)?;
        write!(f, "  fctksup =\t{:.3} MPa.", self.fctk_sup_mpa)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_strength_constants() {
        for fck in [10.0, 20.0, 35.0, 50.0] {
            let p = ParabolaRectangleParams::for_fck(fck);
            assert_eq!(p.ec2, 0.002);
            assert_eq!(p.ecu, 0.0035);
            assert_eq!(p.n, 2.0);
            assert_eq!(p.neutral_axis_limit, 0.45);
        }
    }

    #[test]
    fn test_fck_90_reference_values() {
        // ec2 = 0.002 + 0.000085 * 40^0.53 = 0.0026005
        // (90 - fck) = 0 so ecu = 0.0026 and n = 1.4
        let p = ParabolaRectangleParams::for_fck(90.0);
        assert!((p.ec2 - 0.002_600_497).abs() < 1e-8);
        assert!((p.ecu - 0.0026).abs() < 1e-15);
        assert!((p.n - 1.4).abs() < 1e-15);
        assert_eq!(p.neutral_axis_limit, 0.35);
    }

    #[test]
    fn test_fck_70_intermediate_values() {
        // ((90-70)/100)^4 = 0.0016
        let p = ParabolaRectangleParams::for_fck(70.0);
        assert!((p.ecu - (0.0026 + 0.035 * 0.0016)).abs() < 1e-15);
        assert!((p.n - (1.4 + 23.4 * 0.0016)).abs() < 1e-12);
    }

    #[test]
    fn test_tensile_strengths() {
        // fctm = 0.3 * 27^(2/3) = 2.7
        let p = ParabolaRectangleParams::for_fck(27.0);
        assert!((p.fctm_mpa - 2.7).abs() < 1e-9);
        assert!((p.fctk_inf_mpa - 1.89).abs() < 1e-9);
        assert!((p.fctk_sup_mpa - 3.51).abs() < 1e-9);

        let high = ParabolaRectangleParams::for_fck(60.0);
        assert!((high.fctm_mpa - 2.12 * 7.6_f64.ln()).abs() < 1e-12);
    }
}
