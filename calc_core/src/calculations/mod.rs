//! # Structural Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`flexure`] - Bending reinforcement of rectangular RC sections
//! - [`stress_block`] - Numerical integration of the parabola-rectangle diagram

pub mod flexure;
pub mod stress_block;

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;

// Re-export commonly used types
pub use flexure::{FlexuralResult, FlexureInput, ReinforcementResult};

/// Enum wrapper for all calculation types.
///
/// Lets a project store heterogeneous calculations in one collection while
/// keeping a clean tagged JSON form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationItem {
    /// Bending design of a beam or slab section
    Flexure(FlexureInput),
}

impl CalculationItem {
    /// Get the user-provided label for this calculation
    pub fn label(&self) -> &str {
        match self {
            CalculationItem::Flexure(f) => &f.label,
        }
    }

    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationItem::Flexure(_) => "Flexure",
        }
    }

    /// Run the calculation
    pub fn run(&self) -> CalcResult<FlexuralResult> {
        match self {
            CalculationItem::Flexure(input) => flexure::calculate(input),
        }
    }
}
