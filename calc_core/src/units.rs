//! # Unit Types
//!
//! Thin newtype wrappers for the SI units used in reinforced concrete design.
//! The solver itself works on raw `f64` in the consistent N / mm / MPa system;
//! these wrappers live at the edges (input parsing and result display), where
//! mixing kN·m with N·mm or cm² with mm² is the usual mistake.
//!
//! ## Consistent Unit System
//!
//! - Length: millimeters (mm)
//! - Stress: megapascals (MPa = N/mm²)
//! - Moment: newton-millimeters (N·mm); kilonewton-meters (kN·m) for input
//! - Area: square millimeters (mm²); square centimeters (cm²) for display
//!
//! ## Example
//!
//! ```rust
//! use calc_core::units::{KilonewtonMeters, NewtonMillimeters, SquareCentimeters, SquareMillimeters};
//!
//! let mk: NewtonMillimeters = KilonewtonMeters(70.0).into();
//! assert_eq!(mk.0, 70.0e6);
//!
//! let area: SquareCentimeters = SquareMillimeters(516.0).into();
//! assert_eq!(area.0, 5.16);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Moment Units
// ============================================================================

/// Moment in newton-millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NewtonMillimeters(pub f64);

/// Moment in kilonewton-meters (1 kN·m = 10^6 N·mm)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KilonewtonMeters(pub f64);

impl From<KilonewtonMeters> for NewtonMillimeters {
    fn from(knm: KilonewtonMeters) -> Self {
        NewtonMillimeters(knm.0 * 1.0e6)
    }
}

impl From<NewtonMillimeters> for KilonewtonMeters {
    fn from(nmm: NewtonMillimeters) -> Self {
        KilonewtonMeters(nmm.0 / 1.0e6)
    }
}

// ============================================================================
// Area Units
// ============================================================================

/// Area in square millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareMillimeters(pub f64);

/// Area in square centimeters (bar tables are usually in cm²)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareCentimeters(pub f64);

impl From<SquareMillimeters> for SquareCentimeters {
    fn from(mm2: SquareMillimeters) -> Self {
        SquareCentimeters(mm2.0 / 100.0)
    }
}

impl From<SquareCentimeters> for SquareMillimeters {
    fn from(cm2: SquareCentimeters) -> Self {
        SquareMillimeters(cm2.0 * 100.0)
    }
}

// ============================================================================
// Arithmetic Implementations
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }
        }
    };
}

impl_arithmetic!(NewtonMillimeters);
impl_arithmetic!(KilonewtonMeters);
impl_arithmetic!(SquareMillimeters);
impl_arithmetic!(SquareCentimeters);
