//! # Project Data Structures
//!
//! The `Project` struct is the root container for a set of design cases.
//! Projects serialize to `.rcd` files as human-readable JSON.
//!
//! ## Structure
//!
//! ```text
//! Project
//! ├── meta: ProjectMetadata (version, engineer, job info, timestamps)
//! ├── settings: ProjectSettings (default code, default steel)
//! └── items: HashMap<Uuid, CalculationItem> (all design cases)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use calc_core::project::Project;
//! use calc_core::sections::ConcreteSection;
//!
//! let mut project = Project::new("Jane Engineer", "25-042", "ACME Corp");
//! let id = project.add_flexure("V1", 70.0e6, ConcreteSection::beam(150.0, 500.0, 20.0)?);
//!
//! for (item_id, outcome) in project.design_all() {
//!     assert_eq!(item_id, id);
//!     assert!(outcome.is_ok());
//! }
//! # Ok::<(), calc_core::errors::CalcError>(())
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculations::{CalculationItem, FlexuralResult, FlexureInput};
use crate::codes::{CodeKind, DesignCode};
use crate::errors::CalcResult;
use crate::materials::{SteelGrade, SteelMaterial};
use crate::sections::ConcreteSection;

/// Current schema version for .rcd files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Root project container.
///
/// Items are stored in a flat UUID-keyed map for O(1) lookups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Project metadata (version, engineer, job info)
    pub meta: ProjectMetadata,

    /// Defaults applied to new design cases
    #[serde(default)]
    pub settings: ProjectSettings,

    /// All design cases, keyed by UUID
    pub items: HashMap<Uuid, CalculationItem>,
}

impl Project {
    /// Create a new empty project.
    pub fn new(engineer: impl Into<String>, job_id: impl Into<String>, client: impl Into<String>) -> Self {
        let now = Utc::now();
        Project {
            meta: ProjectMetadata {
                version: SCHEMA_VERSION.to_string(),
                engineer: engineer.into(),
                job_id: job_id.into(),
                client: client.into(),
                created: now,
                modified: now,
            },
            settings: ProjectSettings::default(),
            items: HashMap::new(),
        }
    }

    /// Add a calculation item to the project.
    ///
    /// Returns the UUID assigned to the item.
    pub fn add_item(&mut self, item: CalculationItem) -> Uuid {
        let id = Uuid::new_v4();
        self.items.insert(id, item);
        self.touch();
        id
    }

    /// Add a bending design case using the project's default code and steel.
    ///
    /// The section's own steel is replaced by the project default.
    pub fn add_flexure(&mut self, label: impl Into<String>, moment_nmm: f64, section: ConcreteSection) -> Uuid {
        let input = FlexureInput {
            label: label.into(),
            moment_nmm,
            section: section.with_grade(self.settings.default_steel),
            code: self.settings.default_code,
        };
        self.add_item(CalculationItem::Flexure(input))
    }

    /// Remove a calculation item by UUID.
    ///
    /// Returns the removed item if it existed.
    pub fn remove_item(&mut self, id: &Uuid) -> Option<CalculationItem> {
        let item = self.items.remove(id);
        if item.is_some() {
            self.touch();
        }
        item
    }

    /// Get a calculation item by UUID.
    pub fn get_item(&self, id: &Uuid) -> Option<&CalculationItem> {
        self.items.get(id)
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    /// Number of design cases
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Design every case in parallel.
    ///
    /// Cases share nothing mutable, so each runs independently; a failing case
    /// does not stop the others. Results are ordered by label.
    pub fn design_all(&self) -> Vec<(Uuid, CalcResult<FlexuralResult>)> {
        let mut entries: Vec<(&Uuid, &CalculationItem)> = self.items.iter().collect();
        entries.sort_by(|a, b| a.1.label().cmp(b.1.label()));

        let results: Vec<_> = entries
            .par_iter()
            .map(|(id, item)| (**id, item.run()))
            .collect();

        let failures = results.iter().filter(|(_, r)| r.is_err()).count();
        tracing::info!(cases = results.len(), failures, "project design complete");
        results
    }
}

impl Default for Project {
    fn default() -> Self {
        Project::new("", "", "")
    }
}

/// Project metadata stored in the file header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Name of the responsible engineer
    pub engineer: String,

    /// Job/project number
    pub job_id: String,

    /// Client name
    pub client: String,

    /// When the project was created
    pub created: DateTime<Utc>,

    /// When the project was last modified
    pub modified: DateTime<Utc>,
}

/// Project-wide defaults for new design cases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectSettings {
    /// Design code and safety factors
    pub default_code: DesignCode,

    /// Reinforcing steel grade
    pub default_steel: SteelGrade,
}

impl ProjectSettings {
    /// Steel material for the default grade
    pub fn steel(&self) -> SteelMaterial {
        SteelMaterial::from_grade(self.default_steel)
    }
}

impl Default for ProjectSettings {
    fn default() -> Self {
        ProjectSettings {
            default_code: DesignCode::new(CodeKind::Nbr6118),
            default_steel: SteelGrade::CA50,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_project() -> Project {
        let mut project = Project::new("Engineer", "25-001", "Client");
        project.add_flexure("V2", 250.0e6, ConcreteSection::beam(150.0, 500.0, 20.0).unwrap());
        project.add_flexure("L1", 5.0e6, ConcreteSection::slab(150.0, 20.0).unwrap());
        project.add_flexure("V1", 70.0e6, ConcreteSection::beam(150.0, 500.0, 20.0).unwrap());
        project
    }

    #[test]
    fn test_project_creation() {
        let project = Project::new("John Doe", "25-001", "Acme Corp");
        assert_eq!(project.meta.engineer, "John Doe");
        assert_eq!(project.meta.job_id, "25-001");
        assert_eq!(project.meta.version, SCHEMA_VERSION);
        assert_eq!(project.settings.default_code.kind, CodeKind::Nbr6118);
    }

    #[test]
    fn test_project_serialization() {
        let project = sample_project();
        let json = serde_json::to_string_pretty(&project).unwrap();
        assert!(json.contains("\"type\": \"Flexure\""));
        assert!(json.contains("NBR6118"));

        let roundtrip: Project = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.item_count(), 3);
        assert_eq!(roundtrip.items, project.items);
    }

    #[test]
    fn test_add_remove_item() {
        let mut project = Project::new("Engineer", "25-001", "Client");
        let id = project.add_flexure("V1", 70.0e6, ConcreteSection::beam(150.0, 500.0, 20.0).unwrap());
        assert_eq!(project.item_count(), 1);
        assert_eq!(project.get_item(&id).map(|i| i.label()), Some("V1"));

        assert!(project.remove_item(&id).is_some());
        assert_eq!(project.item_count(), 0);
        assert!(project.remove_item(&id).is_none());
    }

    #[test]
    fn test_defaults_applied_to_new_cases() {
        let mut project = Project::default();
        project.settings.default_code = DesignCode::eurocode2();
        project.settings.default_steel = SteelGrade::CA60;

        let id = project.add_flexure("V1", 70.0e6, ConcreteSection::beam(150.0, 500.0, 20.0).unwrap());
        let Some(CalculationItem::Flexure(input)) = project.get_item(&id) else {
            panic!("flexure item expected");
        };
        assert_eq!(input.code.kind, CodeKind::Eurocode2);
        assert_eq!(input.section.steel, project.settings.steel());
    }

    #[test]
    fn test_design_all_sorted_and_independent() {
        let mut project = sample_project();
        // A case that fails must not affect the others
        let bad = ConcreteSection::beam(150.0, 100.0, 20.0).unwrap();
        project.add_flexure("V3", 20.0e6, bad);

        let results = project.design_all();
        let labels: Vec<_> = results
            .iter()
            .map(|(id, _)| project.get_item(id).map(|i| i.label()).unwrap_or_default())
            .collect();
        assert_eq!(labels, vec!["L1", "V1", "V2", "V3"]);

        assert!(results[0].1.is_ok());
        assert!(results[1].1.is_ok());
        assert!(results[2].1.as_ref().unwrap().reinforcement.as2_mm2 > 0.0);
        assert!(results[3].1.is_err());
    }
}
