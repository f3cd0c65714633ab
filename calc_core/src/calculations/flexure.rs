//! # Flexural Reinforcement Design
//!
//! Required tension and compression reinforcement of a rectangular section
//! under a bending moment, at the ultimate limit state.
//!
//! ## Method
//!
//! 1. Design values: `fcd = fck/γc`, `fyd = fyk/γs`, `Msd = γf·Mk`
//! 2. Neutral axis `x` for which the concrete zone resists `Msd`, capped at
//!    the code limit `LN·d`:
//!    - NBR 6118 (parabola-rectangle): bisection on x, with the stress diagram
//!      integrated numerically at each trial depth
//!    - Eurocode 2 (rectangular block): closed-form root of the quadratic
//! 3. Steel strains from plane sections, stresses from the
//!    elastic-perfectly-plastic law
//! 4. Whatever moment the concrete zone cannot take at `x = LN·d` goes to a
//!    steel couple with compression bars at `d2 = 50 mm`
//!
//! ## Units
//!
//! N, mm and MPa throughout. Moments in N·mm, areas in mm².
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::flexure::{calculate, FlexureInput};
//! use calc_core::codes::DesignCode;
//! use calc_core::sections::ConcreteSection;
//!
//! let input = FlexureInput {
//!     label: "V1".to_string(),
//!     moment_nmm: 70.0e6,
//!     section: ConcreteSection::beam(150.0, 500.0, 20.0)?,
//!     code: DesignCode::nbr6118(),
//! };
//!
//! let result = calculate(&input)?;
//! assert_eq!(result.reinforcement.as2_mm2, 0.0);
//! assert!(result.reinforcement.as_mm2 > 500.0 && result.reinforcement.as_mm2 < 530.0);
//! # Ok::<(), calc_core::errors::CalcError>(())
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::stress_block::{specific_area, specific_centroid, StrainSplit};
use crate::codes::{CodeParameters, DesignCode, ParabolaRectangleParams, RectangularBlockParams};
use crate::errors::{CalcError, CalcResult};
use crate::materials::SteelMaterial;
use crate::sections::ConcreteSection;

/// Depth of the compression reinforcement below the compressed face (mm)
pub const COMPRESSION_COVER_MM: f64 = 50.0;

/// Residual moments at or below this value (N·mm) are quadrature and
/// bisection noise, not a demand for compression steel.
pub const RESIDUAL_MOMENT_SNAP_NMM: f64 = 50_000.0;

/// Reported areas are rounded to this many decimals (mm²)
pub const AREA_ROUNDING_DECIMALS: i32 = 4;

/// Bisection stops once the neutral-axis bracket is this narrow (mm)
pub const BISECTION_TOLERANCE_MM: f64 = 0.001;

/// Bisection gives up after this many halvings
pub const MAX_BISECTION_ITERATIONS: usize = 200;

/// Reduction applied to fcd in the parabola-rectangle diagram (Rüsch effect)
const PARABOLA_STRESS_FACTOR: f64 = 0.85;

/// Denominators at or below this magnitude are treated as zero
const DEGENERATE_EPSILON: f64 = 1e-12;

/// Required reinforcement areas.
///
/// ## JSON Example
///
/// ```json
/// { "as_mm2": 516.1554, "as2_mm2": 0.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ReinforcementResult {
    /// Tension reinforcement As (mm²)
    pub as_mm2: f64,
    /// Compression reinforcement As2 (mm²)
    pub as2_mm2: f64,
}

impl ReinforcementResult {
    /// Total steel area As + As2 (mm²)
    pub fn total_mm2(&self) -> f64 {
        self.as_mm2 + self.as2_mm2
    }

    /// True when the concrete zone alone balances the tension steel
    pub fn is_singly_reinforced(&self) -> bool {
        self.as2_mm2 == 0.0
    }
}

/// Equilibrium state at a neutral-axis depth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NeutralAxisState {
    /// Neutral-axis depth x (mm)
    pub depth_mm: f64,
    /// Top-fiber concrete strain εc
    pub concrete_strain: f64,
    /// Depth of the concrete resultant below the compressed face (mm)
    pub centroid_mm: f64,
    /// Moment resisted by the concrete zone about the tension steel (N·mm)
    pub moment_nmm: f64,
}

/// Results of a flexural design.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlexuralResult {
    /// Required reinforcement areas (rounded)
    pub reinforcement: ReinforcementResult,
    /// Design moment Msd = γf·Mk (N·mm)
    pub design_moment_nmm: f64,
    /// Moment resisted by the concrete zone at equilibrium (N·mm)
    pub concrete_moment_nmm: f64,
    /// Moment assigned to the compression-steel couple (N·mm)
    pub residual_moment_nmm: f64,
    /// Neutral-axis depth x (mm)
    pub neutral_axis_mm: f64,
    /// Top-fiber concrete strain εc
    pub concrete_strain: f64,
    /// Depth of the concrete resultant below the compressed face (mm)
    pub centroid_mm: f64,
    /// Tension steel strain εs
    pub tension_strain: f64,
    /// Compression steel strain εs2
    pub compression_strain: f64,
    /// Tension steel stress (MPa)
    pub tension_stress_mpa: f64,
    /// Compression steel stress (MPa)
    pub compression_stress_mpa: f64,
    /// Bisection steps taken (0 for the closed-form path)
    pub iterations: usize,
}

impl FlexuralResult {
    /// Neutral-axis depth ratio x/d
    pub fn depth_ratio(&self, d_mm: f64) -> f64 {
        self.neutral_axis_mm / d_mm
    }
}

/// A design case: one section, one code, one moment.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "V1",
///   "moment_nmm": 70000000.0,
///   "section": {
///     "kind": "Beam",
///     "width_mm": 150.0,
///     "depth_mm": 500.0,
///     "fck_mpa": 20.0,
///     "steel": { "fyk_mpa": 500.0, "es_mpa": 210000.0, "esu": 0.01 }
///   },
///   "code": { "kind": "NBR6118" }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlexureInput {
    /// User label (e.g., "V1", "L1")
    pub label: String,
    /// Characteristic bending moment Mk (N·mm)
    pub moment_nmm: f64,
    /// Section geometry, concrete and steel
    pub section: ConcreteSection,
    /// Design code and safety factors
    pub code: DesignCode,
}

impl FlexureInput {
    /// Validate input parameters, including values that bypassed the
    /// validating constructors through deserialization.
    pub fn validate(&self) -> CalcResult<()> {
        if !self.moment_nmm.is_finite() || self.moment_nmm <= 0.0 {
            return Err(CalcError::invalid_input(
                "moment_nmm",
                self.moment_nmm.to_string(),
                "Moment must be positive",
            ));
        }
        self.section.validate()?;
        self.code.safety.validate()
    }
}

/// Design the reinforcement for a [`FlexureInput`].
pub fn calculate(input: &FlexureInput) -> CalcResult<FlexuralResult> {
    input.validate()?;
    let span = tracing::debug_span!("flexure", label = %input.label);
    let _guard = span.enter();
    flexural(input.moment_nmm, &input.section, &input.code, &input.section.steel)
}

/// Design values shared by both equilibrium strategies.
#[derive(Debug, Clone, Copy)]
struct DesignValues {
    b: f64,
    d: f64,
    fcd: f64,
    fyd: f64,
    msd: f64,
    esu: f64,
}

/// Required reinforcement for a characteristic moment `mk` (N·mm).
///
/// The section supplies geometry and fck; the code supplies safety factors
/// and the stress-block law; the steel supplies fyk, Es and esu. All of them
/// are validated before any design value is formed.
///
/// fck above 90 MPa is clamped for the stress-block parameters and for
/// `fcd` alike.
pub fn flexural(
    mk: f64,
    section: &ConcreteSection,
    code: &DesignCode,
    steel: &SteelMaterial,
) -> CalcResult<FlexuralResult> {
    if !mk.is_finite() || mk <= 0.0 {
        return Err(CalcError::invalid_input("mk", mk.to_string(), "Moment must be positive"));
    }
    section.validate()?;
    steel.validate()?;
    code.safety.validate()?;
    let params = code.parameters(section.fck_mpa)?;

    let dv = DesignValues {
        b: section.width_mm,
        d: section.depth_mm,
        fcd: params.fck() / code.safety.gc,
        fyd: steel.fyk_mpa / code.safety.gs,
        msd: mk * code.safety.gf,
        esu: steel.esu,
    };

    let (state, iterations) = match &params {
        CodeParameters::ParabolaRectangle(p) => bisect_parabola_rectangle(p, &dv)?,
        CodeParameters::RectangularBlock(p) => (closed_form_rectangular_block(p, &dv), 0),
    };

    let result = reinforcement_for(&state, &dv, steel, iterations)?;
    debug!(
        code = %code.kind,
        msd = dv.msd,
        x = result.neutral_axis_mm,
        as_mm2 = result.reinforcement.as_mm2,
        as2_mm2 = result.reinforcement.as2_mm2,
        iterations,
        "flexural design complete"
    );
    Ok(result)
}

/// Concrete-zone resistance of the parabola-rectangle diagram at depth `xk`.
pub fn parabola_rectangle_moment(
    params: &ParabolaRectangleParams,
    xk: f64,
    b: f64,
    d: f64,
    fcd: f64,
    esu: f64,
) -> NeutralAxisState {
    let split = StrainSplit::at_depth(xk, d, params.ecu, params.ec2, esu);
    let ec = split.total();
    let area = specific_area(split.e1, split.e2, params.ec2, params.n);
    let centroid = specific_centroid(ec, split.e1, split.e2, params.ec2, params.n);
    let centroid_mm = centroid / ec * xk;
    NeutralAxisState {
        depth_mm: xk,
        concrete_strain: ec,
        centroid_mm,
        moment_nmm: PARABOLA_STRESS_FACTOR * fcd * b * (area / ec) * xk * (d - centroid_mm),
    }
}

/// Concrete-zone resistance of the rectangular block at depth `xk`.
pub fn rectangular_block_moment(
    params: &RectangularBlockParams,
    xk: f64,
    b: f64,
    d: f64,
    fcd: f64,
    esu: f64,
) -> NeutralAxisState {
    let centroid_mm = params.lambda / 2.0 * xk;
    NeutralAxisState {
        depth_mm: xk,
        concrete_strain: (esu * xk / (d - xk)).min(params.ecu),
        centroid_mm,
        moment_nmm: params.ac * fcd * b * params.lambda * xk * (d - centroid_mm),
    }
}

/// Bisection on x over `[0, min(LN·d, d)]`.
///
/// The resisted moment must grow with x. Every trial is checked against the
/// moments at the current bracket ends, so a flat or folding curve is reported
/// instead of converging to the wrong root.
fn bisect_parabola_rectangle(
    params: &ParabolaRectangleParams,
    dv: &DesignValues,
) -> CalcResult<(NeutralAxisState, usize)> {
    let evaluate = |xk: f64| parabola_rectangle_moment(params, xk, dv.b, dv.d, dv.fcd, dv.esu);

    let mut xi = 0.0;
    let mut xf = (params.neutral_axis_limit * dv.d).min(dv.d);
    let mut md_low = 0.0;
    let mut md_high = evaluate(xf).moment_nmm;
    let tolerance = 1e-9 * md_high.abs();

    let mut state = None;
    let mut iterations = 0;
    while (xi - xf).abs() > BISECTION_TOLERANCE_MM {
        if iterations == MAX_BISECTION_ITERATIONS {
            return Err(CalcError::NonConvergence {
                iterations,
                bracket_mm: (xf - xi).abs(),
            });
        }
        iterations += 1;

        let xk = (xi + xf) / 2.0;
        let trial = evaluate(xk);
        if !trial.moment_nmm.is_finite() {
            return Err(CalcError::degenerate("resisted moment", trial.moment_nmm));
        }
        if trial.moment_nmm < md_low - tolerance || trial.moment_nmm > md_high + tolerance {
            return Err(CalcError::NonMonotonicResistance {
                neutral_axis_mm: xk,
                reason: format!(
                    "Md = {:.1} N·mm outside bracket [{:.1}, {:.1}]",
                    trial.moment_nmm, md_low, md_high
                ),
            });
        }
        trace!(iteration = iterations, xk, md = trial.moment_nmm, "bisection step");

        if trial.moment_nmm > dv.msd {
            xf = xk;
            md_high = trial.moment_nmm;
        } else {
            xi = xk;
            md_low = trial.moment_nmm;
        }
        state = Some(trial);
    }

    // The loop never ran: the admissible bracket is already narrower than the tolerance
    let state = state.ok_or_else(|| CalcError::degenerate("neutral axis bracket (mm)", xf))?;
    Ok((state, iterations))
}

/// Closed-form neutral axis for the rectangular block.
///
/// When the quadratic has no real root the concrete zone cannot carry Msd on
/// its own; the depth is then pinned at the code limit and the remainder goes
/// to compression steel.
fn closed_form_rectangular_block(params: &RectangularBlockParams, dv: &DesignValues) -> NeutralAxisState {
    let limit = params.neutral_axis_limit * dv.d;
    let discriminant = dv.d.powi(2) - 2.0 * dv.msd / (params.ac * dv.fcd * dv.b);
    let xk = if discriminant >= 0.0 {
        ((dv.d - discriminant.sqrt()) / params.lambda).min(limit)
    } else {
        debug!(discriminant, "moment exceeds singly reinforced capacity, x pinned at limit");
        limit
    };
    rectangular_block_moment(params, xk, dv.b, dv.d, dv.fcd, dv.esu)
}

/// Strain compatibility, steel stresses and the two reinforcement areas.
fn reinforcement_for(
    state: &NeutralAxisState,
    dv: &DesignValues,
    steel: &SteelMaterial,
    iterations: usize,
) -> CalcResult<FlexuralResult> {
    let xk = nonzero("neutral axis depth x (mm)", state.depth_mm)?;
    let ec = nonzero("concrete strain ec", state.concrete_strain)?;
    let d = dv.d;

    let es = ec * d / xk - ec;
    let es2 = ec * (xk - COMPRESSION_COVER_MM) / xk;
    let fs = steel.stress_at(es, dv.fyd);
    let fs2 = steel.stress_at(es2, dv.fyd);
    let fs = positive("tension steel stress fs (MPa)", fs)?;

    let mut md = state.moment_nmm;
    let mut md2 = dv.msd - md;
    if md2 <= RESIDUAL_MOMENT_SNAP_NMM {
        md += md2;
        md2 = 0.0;
    }

    let lever_arm = d - state.centroid_mm;
    let mut as_mm2 = md / (fs * positive("lever arm d - CG (mm)", lever_arm)?);
    let mut as2_mm2 = 0.0;
    if md2 > 0.0 {
        let couple_arm = positive("compression couple arm d - d2 (mm)", d - COMPRESSION_COVER_MM)?;
        let fs2 = positive("compression steel stress fs2 (MPa)", fs2)?;
        as2_mm2 = md2 / (fs2 * couple_arm);
        as_mm2 += md2 / (fs * couple_arm);
    }

    Ok(FlexuralResult {
        reinforcement: ReinforcementResult {
            as_mm2: round_area(as_mm2),
            as2_mm2: round_area(as2_mm2),
        },
        design_moment_nmm: dv.msd,
        concrete_moment_nmm: state.moment_nmm,
        residual_moment_nmm: md2,
        neutral_axis_mm: xk,
        concrete_strain: ec,
        centroid_mm: state.centroid_mm,
        tension_strain: es,
        compression_strain: es2,
        tension_stress_mpa: fs,
        compression_stress_mpa: fs2,
        iterations,
    })
}

fn nonzero(quantity: &str, value: f64) -> CalcResult<f64> {
    if value.is_finite() && value.abs() > DEGENERATE_EPSILON {
        Ok(value)
    } else {
        Err(CalcError::degenerate(quantity, value))
    }
}

fn positive(quantity: &str, value: f64) -> CalcResult<f64> {
    if value.is_finite() && value > DEGENERATE_EPSILON {
        Ok(value)
    } else {
        Err(CalcError::degenerate(quantity, value))
    }
}

/// Round an area to [`AREA_ROUNDING_DECIMALS`] places.
fn round_area(area_mm2: f64) -> f64 {
    let scale = 10f64.powi(AREA_ROUNDING_DECIMALS);
    (area_mm2 * scale).round() / scale
}
