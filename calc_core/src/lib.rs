//! # calc_core - Reinforced Concrete Flexural Design Engine
//!
//! `calc_core` computes the tension and compression reinforcement that a
//! rectangular reinforced concrete section (beam or slab strip) needs to resist
//! a bending moment, under either the NBR 6118 parabola-rectangle law or the
//! Eurocode 2 rectangular stress block. All inputs and outputs are
//! JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: code parameters are a pure function of fck; no shared caches
//! - **JSON-First**: all inputs and results implement Serialize/Deserialize
//! - **Rich Errors**: invalid input and numerical breakdown are distinct errors,
//!   never a silent `NaN`
//!
//! ## Quick Start
//!
//! ```rust
//! use calc_core::codes::DesignCode;
//! use calc_core::sections::ConcreteSection;
//!
//! let mut beam = ConcreteSection::beam(150.0, 500.0, 20.0)?;
//! let result = beam.design(70.0e6, &DesignCode::nbr6118())?;
//!
//! println!("As = {:.1} mm², As2 = {:.1} mm²",
//!     result.reinforcement.as_mm2, result.reinforcement.as2_mm2);
//! # Ok::<(), calc_core::errors::CalcError>(())
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Flexural solver and stress-block integration
//! - [`codes`] - Design code parameters and safety factors
//! - [`sections`] - Beam and slab section value objects
//! - [`materials`] - Steel grades and concrete classes
//! - [`project`] - Batches of design cases
//! - [`file_io`] - Atomic project saves
//! - [`units`] - Unit newtypes for input and display
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod codes;
pub mod errors;
pub mod file_io;
pub mod materials;
pub mod project;
pub mod sections;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::flexure::flexural;
pub use calculations::{FlexuralResult, FlexureInput, ReinforcementResult};
pub use codes::{CodeKind, DesignCode, SafetyFactors};
pub use errors::{CalcError, CalcResult};
pub use file_io::{load_project, save_project};
pub use project::{Project, ProjectMetadata, ProjectSettings};
pub use sections::ConcreteSection;
