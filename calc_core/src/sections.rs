//! # Concrete Sections
//!
//! Rectangular reinforced concrete sections: beams of any width and one-meter
//! slab strips. A section carries its geometry, concrete strength and
//! reinforcing steel, and remembers the reinforcement from its last design.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::codes::DesignCode;
//! use calc_core::materials::{ConcreteClass, SteelGrade};
//! use calc_core::sections::ConcreteSection;
//!
//! let mut beam = ConcreteSection::beam_with_class(150.0, 500.0, ConcreteClass::C20)?
//!     .with_grade(SteelGrade::CA50);
//! beam.design(70.0e6, &DesignCode::nbr6118())?;
//!
//! let reinforcement = beam.reinforcement.expect("designed");
//! assert_eq!(reinforcement.as2_mm2, 0.0);
//! println!("{}", beam);
//! # Ok::<(), calc_core::errors::CalcError>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::flexure::{flexural, FlexuralResult, ReinforcementResult};
use crate::codes::DesignCode;
use crate::errors::{ensure_positive, CalcResult};
use crate::materials::{ConcreteClass, SteelGrade, SteelMaterial};
use crate::units::{SquareCentimeters, SquareMillimeters};

/// Width of the strip used to design one-way slabs (mm)
pub const SLAB_STRIP_WIDTH_MM: f64 = 1000.0;

/// Structural element type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionKind {
    Beam,
    /// One-meter strip of a one-way slab
    Slab,
}

impl SectionKind {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            SectionKind::Beam => "Beam",
            SectionKind::Slab => "Slab",
        }
    }
}

/// Rectangular reinforced concrete section.
///
/// All dimensions are strictly positive; every constructor and setter
/// re-validates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConcreteSection {
    pub kind: SectionKind,
    /// Width b (mm)
    pub width_mm: f64,
    /// Effective depth d, compressed face to tension steel (mm)
    pub depth_mm: f64,
    /// Characteristic concrete strength fck (MPa)
    pub fck_mpa: f64,
    /// Reinforcing steel, CA-50 unless stated otherwise
    #[serde(default)]
    pub steel: SteelMaterial,
    /// Reinforcement from the last design, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reinforcement: Option<ReinforcementResult>,
}

impl ConcreteSection {
    /// Beam of width `b` and effective depth `d` with CA-50 steel.
    pub fn beam(width_mm: f64, depth_mm: f64, fck_mpa: f64) -> CalcResult<Self> {
        let section = ConcreteSection {
            kind: SectionKind::Beam,
            width_mm,
            depth_mm,
            fck_mpa,
            steel: SteelMaterial::default(),
            reinforcement: None,
        };
        section.validate()?;
        Ok(section)
    }

    /// Beam with fck taken from a concrete class.
    pub fn beam_with_class(width_mm: f64, depth_mm: f64, class: ConcreteClass) -> CalcResult<Self> {
        Self::beam(width_mm, depth_mm, class.fck())
    }

    /// One-meter slab strip of effective depth `d` with CA-50 steel.
    pub fn slab(depth_mm: f64, fck_mpa: f64) -> CalcResult<Self> {
        let section = ConcreteSection {
            kind: SectionKind::Slab,
            width_mm: SLAB_STRIP_WIDTH_MM,
            depth_mm,
            fck_mpa,
            steel: SteelMaterial::default(),
            reinforcement: None,
        };
        section.validate()?;
        Ok(section)
    }

    /// Slab strip with fck taken from a concrete class.
    pub fn slab_with_class(depth_mm: f64, class: ConcreteClass) -> CalcResult<Self> {
        Self::slab(depth_mm, class.fck())
    }

    /// Use a specific steel
    pub fn with_steel(mut self, steel: SteelMaterial) -> Self {
        self.steel = steel;
        self
    }

    /// Use a tabulated steel grade
    pub fn with_grade(self, grade: SteelGrade) -> Self {
        self.with_steel(SteelMaterial::from_grade(grade))
    }

    /// Validate geometry, concrete strength and steel.
    pub fn validate(&self) -> CalcResult<()> {
        ensure_positive("width_mm", self.width_mm, "Width must be positive")?;
        ensure_positive("depth_mm", self.depth_mm, "Effective depth must be positive")?;
        ensure_positive("fck_mpa", self.fck_mpa, "Concrete strength must be positive")?;
        self.steel.validate()
    }

    /// Change the width
    pub fn set_width(&mut self, width_mm: f64) -> CalcResult<()> {
        self.width_mm = ensure_positive("width_mm", width_mm, "Width must be positive")?;
        Ok(())
    }

    /// Change the effective depth
    pub fn set_depth(&mut self, depth_mm: f64) -> CalcResult<()> {
        self.depth_mm = ensure_positive("depth_mm", depth_mm, "Effective depth must be positive")?;
        Ok(())
    }

    /// Change the concrete strength
    pub fn set_fck(&mut self, fck_mpa: f64) -> CalcResult<()> {
        self.fck_mpa = ensure_positive("fck_mpa", fck_mpa, "Concrete strength must be positive")?;
        Ok(())
    }

    /// Design the reinforcement for a characteristic moment and store it.
    ///
    /// On failure the previously stored reinforcement is left untouched.
    pub fn design(&mut self, mk_nmm: f64, code: &DesignCode) -> CalcResult<FlexuralResult> {
        let result = flexural(mk_nmm, self, code, &self.steel)?;
        self.reinforcement = Some(result.reinforcement);
        Ok(result)
    }
}

impl std::fmt::Display for ConcreteSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let reinforcement = self.reinforcement.unwrap_or_default();
        let as_cm2: SquareCentimeters = SquareMillimeters(reinforcement.as_mm2).into();
        let as2_cm2: SquareCentimeters = SquareMillimeters(reinforcement.as2_mm2).into();

        writeln!(f, "*{} Dimensions:", self.kind.display_name())?;
        writeln!(f, "  Width-b  =\t{} mm,", self.width_mm)?;
        writeln!(f, "  Height-d =\t{} mm,", self.depth_mm)?;
        writeln!(f, "  fck      =\t{} MPa,", self.fck_mpa)?;
        writeln!(f, "  Area-As  =\t{:.4} cm²,", as_cm2.value())?;
        write!(f, "  Area-As2 =\t{:.4} cm².", as2_cm2.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_geometry_rejected() {
        assert!(ConcreteSection::beam(0.0, 500.0, 20.0).is_err());
        assert!(ConcreteSection::beam(150.0, -1.0, 20.0).is_err());
        assert!(ConcreteSection::beam(150.0, 500.0, 0.0).is_err());
        assert!(ConcreteSection::slab(0.0, 20.0).is_err());
    }

    #[test]
    fn test_slab_uses_meter_strip() {
        let slab = ConcreteSection::slab_with_class(150.0, ConcreteClass::C25).unwrap();
        assert_eq!(slab.width_mm, 1000.0);
        assert_eq!(slab.fck_mpa, 25.0);
        assert_eq!(slab.kind, SectionKind::Slab);
        assert_eq!(slab.steel, SteelMaterial::from_grade(SteelGrade::CA50));
    }

    #[test]
    fn test_setters_revalidate() {
        let mut beam = ConcreteSection::beam(150.0, 500.0, 20.0).unwrap();
        assert!(beam.set_width(200.0).is_ok());
        assert_eq!(beam.width_mm, 200.0);
        assert!(beam.set_width(0.0).is_err());
        assert_eq!(beam.width_mm, 200.0);
        assert!(beam.set_depth(-5.0).is_err());
        assert!(beam.set_fck(f64::NAN).is_err());
        assert!(beam.set_fck(30.0).is_ok());
    }

    #[test]
    fn test_design_stores_reinforcement() {
        let mut beam = ConcreteSection::beam(150.0, 500.0, 20.0).unwrap();
        assert!(beam.reinforcement.is_none());

        let result = beam.design(70.0e6, &DesignCode::eurocode2()).unwrap();
        assert_eq!(beam.reinforcement, Some(result.reinforcement));

        // Failed design keeps the previous result
        assert!(beam.design(-1.0, &DesignCode::eurocode2()).is_err());
        assert_eq!(beam.reinforcement, Some(result.reinforcement));
    }

    #[test]
    fn test_display_in_square_centimeters() {
        let mut beam = ConcreteSection::beam(150.0, 500.0, 20.0).unwrap();
        beam.reinforcement = Some(ReinforcementResult {
            as_mm2: 516.1554,
            as2_mm2: 0.0,
        });
        let text = beam.to_string();
        assert!(text.starts_with("*Beam Dimensions:"));
        assert!(text.contains("5.1616 cm²"));
        assert!(text.contains("0.0000 cm²"));
    }

    #[test]
    fn test_deserialized_steel_is_validated() {
        for esu in ["-0.01", "0.0", "5.0"] {
            let json = format!(
                r#"{{"kind":"Beam","width_mm":150.0,"depth_mm":500.0,"fck_mpa":20.0,
                    "steel":{{"fyk_mpa":500.0,"es_mpa":210000.0,"esu":{}}}}}"#,
                esu
            );
            let mut beam: ConcreteSection = serde_json::from_str(&json).unwrap();
            assert_eq!(beam.validate().unwrap_err().error_code(), "INVALID_INPUT");
            let err = beam.design(70.0e6, &DesignCode::nbr6118()).unwrap_err();
            assert_eq!(err.error_code(), "INVALID_INPUT");
            assert!(beam.reinforcement.is_none());
        }
    }

    #[test]
    fn test_serialization_defaults_steel() {
        let json = r#"{"kind":"Slab","width_mm":1000.0,"depth_mm":120.0,"fck_mpa":30.0}"#;
        let slab: ConcreteSection = serde_json::from_str(json).unwrap();
        assert_eq!(slab.steel.fyk_mpa, 500.0);
        assert!(slab.reinforcement.is_none());
    }
}
