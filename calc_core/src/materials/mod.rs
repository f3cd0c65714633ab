//! # Materials Database
//!
//! Tabulated material constants for reinforced concrete design.
//!
//! ## Material Types
//!
//! - **Reinforcing steel**: Brazilian CA grades (CA-25 wire, CA-50 bars,
//!   CA-60 smooth bars) with an elastic-perfectly-plastic law
//! - **Concrete**: strength classes C10 to C90 in 5 MPa steps, where the class
//!   number is the characteristic compressive strength fck in MPa
//!
//! ## Example
//!
//! ```rust
//! use calc_core::materials::{ConcreteClass, SteelGrade, SteelMaterial};
//!
//! let steel = SteelMaterial::from_grade(SteelGrade::CA50);
//! assert_eq!(steel.fyk_mpa, 500.0);
//! assert_eq!(ConcreteClass::C20.fck(), 20.0);
//! ```

pub mod concrete;
pub mod steel;

pub use concrete::ConcreteClass;
pub use steel::{SteelGrade, SteelMaterial};
