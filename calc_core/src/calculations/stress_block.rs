//! # Parabola-Rectangle Stress Block
//!
//! Area and centroid of the compressed-concrete stress diagram, expressed per
//! unit width and parameterized by strain rather than depth. Because strain is
//! linear in depth, dividing a "specific" quantity by the top strain εc and
//! multiplying by x gives the real one.
//!
//! The stress ratio is `1 - (1 - ε/εc2)^n` on `[0, e1]` (the parabola) and `1`
//! on `[e1, e1 + e2]` (the plateau). Both pieces are integrated with fixed
//! 5-point Gauss-Legendre quadrature; the integrand is smooth and bounded on
//! `[0, εc2]` so no adaptive refinement is needed.

use once_cell::sync::Lazy;

/// Gauss-Legendre nodes and weights on `[-1, 1]`, as (node, weight).
static GAUSS_LEGENDRE_5: Lazy<[(f64, f64); 5]> = Lazy::new(|| {
    let inner = (5.0 - 2.0 * (10.0_f64 / 7.0).sqrt()).sqrt() / 3.0;
    let outer = (5.0 + 2.0 * (10.0_f64 / 7.0).sqrt()).sqrt() / 3.0;
    let w_inner = (322.0 + 13.0 * 70.0_f64.sqrt()) / 900.0;
    let w_outer = (322.0 - 13.0 * 70.0_f64.sqrt()) / 900.0;
    [
        (0.0, 128.0 / 225.0),
        (inner, w_inner),
        (-inner, w_inner),
        (outer, w_outer),
        (-outer, w_outer),
    ]
});

/// Integrate `f` over `[a, b]` with 5-point Gauss-Legendre quadrature.
///
/// Exact for polynomials up to degree 9. A zero-width interval yields 0.
pub fn gauss_legendre_5<F>(a: f64, b: f64, f: F) -> f64
where
    F: Fn(f64) -> f64,
{
    let half_width = (b - a) / 2.0;
    if half_width == 0.0 {
        return 0.0;
    }
    let midpoint = (b + a) / 2.0;
    GAUSS_LEGENDRE_5
        .iter()
        .map(|&(node, weight)| weight * f(half_width * node + midpoint))
        .sum::<f64>()
        * half_width
}

/// Stress ratio σ/σmax of the parabola branch at strain `e`
fn parabola_ratio(e: f64, ec2: f64, n: f64) -> f64 {
    1.0 - (1.0 - e / ec2).powf(n)
}

/// Top-fiber concrete strain split into its parabola and plateau parts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrainSplit {
    /// Strain carried by the parabola branch, min(εc, εc2)
    pub e1: f64,
    /// Strain carried by the constant plateau, max(0, εc - εc2)
    pub e2: f64,
}

impl StrainSplit {
    /// Strain state for a trial neutral-axis depth `xk`.
    ///
    /// The section rotates about the tension steel at its ultimate strain esu
    /// (domain 2) until the concrete reaches εcu (domains 3 and 4).
    pub fn at_depth(xk: f64, d: f64, ecu: f64, ec2: f64, esu: f64) -> Self {
        let ec = (esu * xk / (d - xk)).min(ecu);
        StrainSplit {
            e1: ec.min(ec2),
            e2: (ec - ec2).max(0.0),
        }
    }

    /// Total top-fiber strain εc = e1 + e2
    pub fn total(&self) -> f64 {
        self.e1 + self.e2
    }
}

/// Specific area of the stress diagram: ∫ σ/σmax dε over `[0, e1 + e2]`.
pub fn specific_area(e1: f64, e2: f64, ec2: f64, n: f64) -> f64 {
    gauss_legendre_5(0.0, e1, |e| parabola_ratio(e, ec2, n)) + e2
}

/// Specific centroid of the stress diagram, measured from the top fiber.
///
/// Returned in strain units: the resultant sits `centroid / ec * x` below the
/// compressed face. Returns 0 when the diagram has no area.
pub fn specific_centroid(ec: f64, e1: f64, e2: f64, ec2: f64, n: f64) -> f64 {
    let area = specific_area(e1, e2, ec2, n);
    if area <= 0.0 {
        return 0.0;
    }
    let parabola_moment = gauss_legendre_5(0.0, e1, |e| e * parabola_ratio(e, ec2, n));
    let plateau_moment = gauss_legendre_5(e1, ec, |e| e);
    ec - (parabola_moment + plateau_moment) / area
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        if b.abs() < 1e-12 {
            a.abs() < tol
        } else {
            ((a - b) / b).abs() < tol
        }
    }

    #[test]
    fn test_weights_sum_to_interval_length() {
        let total: f64 = GAUSS_LEGENDRE_5.iter().map(|&(_, w)| w).sum();
        assert!(approx_eq(total, 2.0, 1e-14));
    }

    #[test]
    fn test_quadrature_exact_for_degree_nine() {
        // ∫0^2 x^9 dx = 2^10 / 10 = 102.4
        let integral = gauss_legendre_5(0.0, 2.0, |x| x.powi(9));
        assert!(approx_eq(integral, 102.4, 1e-12));
    }

    #[test]
    fn test_zero_width_interval() {
        assert_eq!(gauss_legendre_5(0.3, 0.3, |x| 1.0 / x), 0.0);
        assert_eq!(specific_area(0.0, 0.0, 0.002, 2.0), 0.0);
        assert_eq!(specific_centroid(0.0, 0.0, 0.0, 0.002, 2.0), 0.0);
    }

    #[test]
    fn test_full_parabola_area() {
        // ∫0^ec2 1 - (1 - e/ec2)^2 de = 2/3 · ec2
        let area = specific_area(0.002, 0.0, 0.002, 2.0);
        assert!(approx_eq(area, 2.0 / 3.0 * 0.002, 1e-6));
    }

    #[test]
    fn test_parabola_rectangle_area_and_centroid() {
        // Classic NBR result for ec = 3.5‰: α = 0.8095, centroid at 0.416·x
        let ec2 = 0.002;
        let split = StrainSplit { e1: 0.002, e2: 0.0015 };
        let ec = split.total();
        let area = specific_area(split.e1, split.e2, ec2, 2.0);
        assert!(approx_eq(area / ec, 17.0 / 21.0, 1e-9));

        let centroid = specific_centroid(ec, split.e1, split.e2, ec2, 2.0);
        assert!(approx_eq(centroid / ec, 99.0 / 238.0, 1e-9));
    }

    #[test]
    fn test_plateau_only_centroid_is_mid_depth() {
        // Pure plateau between 0 and ec would put the resultant at ec/2
        let centroid = specific_centroid(0.004, 0.0, 0.004, 0.002, 2.0);
        assert!(approx_eq(centroid, 0.002, 1e-12));
    }

    #[test]
    fn test_strain_split_domains() {
        // Shallow neutral axis: steel governs, concrete below ec2
        let shallow = StrainSplit::at_depth(50.0, 500.0, 0.0035, 0.002, 0.01);
        assert!(approx_eq(shallow.e1, 0.01 * 50.0 / 450.0, 1e-12));
        assert_eq!(shallow.e2, 0.0);

        // Deep neutral axis: concrete at ecu, plateau active
        let deep = StrainSplit::at_depth(200.0, 500.0, 0.0035, 0.002, 0.01);
        assert_eq!(deep.e1, 0.002);
        assert!(approx_eq(deep.e2, 0.0015, 1e-12));
        assert!(approx_eq(deep.total(), 0.0035, 1e-12));
    }
}
