use calc_core::calculations::flexure::{flexural, parabola_rectangle_moment};
use calc_core::calculations::stress_block::StrainSplit;
use calc_core::codes::{DesignCode, ParabolaRectangleParams};
use calc_core::materials::steel::STEEL_ULTIMATE_STRAIN;
use calc_core::sections::ConcreteSection;
use proptest::prelude::*;

const SAMPLES: usize = 60;

proptest! {
    #[test]
    fn resisted_moment_grows_with_depth(
        fck in 10.0f64..=90.0,
        b in 100.0f64..2000.0,
        d in 100.0f64..1200.0,
    ) {
        let params = ParabolaRectangleParams::for_fck(fck);
        let fcd = fck / 1.4;
        let limit = params.neutral_axis_limit * d;

        let mut previous = 0.0;
        for i in 1..=SAMPLES {
            let xk = limit * i as f64 / SAMPLES as f64;
            let md = parabola_rectangle_moment(&params, xk, b, d, fcd, STEEL_ULTIMATE_STRAIN).moment_nmm;
            prop_assert!(md.is_finite());
            prop_assert!(md >= previous * (1.0 - 1e-9), "Md({}) = {} < {}", xk, md, previous);
            previous = md;
        }
    }

    #[test]
    fn strain_split_stays_within_limits(fck in 10.0f64..=90.0, ratio in 0.001f64..0.999) {
        let params = ParabolaRectangleParams::for_fck(fck);
        let d = 500.0;
        let split = StrainSplit::at_depth(ratio * d, d, params.ecu, params.ec2, STEEL_ULTIMATE_STRAIN);

        prop_assert!(split.e1 <= params.ec2);
        prop_assert!(split.e2 >= 0.0);
        prop_assert!(split.total() <= params.ecu + 1e-15);
    }

    #[test]
    fn areas_are_positive_and_rounded(mk_knm in 1.0f64..150.0, fck in 20.0f64..=50.0) {
        let beam = ConcreteSection::beam(200.0, 600.0, fck).unwrap();
        for code in [DesignCode::nbr6118(), DesignCode::eurocode2()] {
            let result = flexural(mk_knm * 1.0e6, &beam, &code, &beam.steel).unwrap();
            let area = result.reinforcement.as_mm2;
            prop_assert!(area > 0.0);
            prop_assert!(result.reinforcement.as2_mm2 >= 0.0);
            prop_assert!(((area * 1.0e4).round() / 1.0e4 - area).abs() < 1e-9);
        }
    }
}
