//! Main NavConfig and conversion methods.

use std::path::Path as FsPath;

use serde::{Deserialize, Serialize};

use crate::grid::ClearancePolicy;
use crate::search::{select_heuristic, MovementRules, Pathfinder};

use super::defaults;
use super::error::ConfigLoadError;

/// Full navigation configuration loaded from YAML.
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct NavConfig {
    /// Grid rasterization settings
    #[serde(default)]
    pub grid: GridSection,

    /// Movement rule settings
    #[serde(default)]
    pub movement: MovementSection,

    /// A* search settings
    #[serde(default)]
    pub search: SearchSection,

    /// Clearance sampling settings
    #[serde(default)]
    pub clearance: ClearanceSection,
}

/// Grid rasterization settings section
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GridSection {
    /// Cell size in world units (pixels per cell)
    #[serde(default = "defaults::cell_size")]
    pub cell_size: f32,
}

impl Default for GridSection {
    fn default() -> Self {
        Self {
            cell_size: defaults::cell_size(),
        }
    }
}

/// Movement rule settings section
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MovementSection {
    /// Enable 8-directional movement
    #[serde(default = "defaults::enabled")]
    pub allow_diagonal: bool,

    /// Reject diagonal moves through blocked corners
    #[serde(default = "defaults::enabled")]
    pub prevent_corner_cutting: bool,

    /// Cost multiplier for diagonal moves (sqrt(2))
    #[serde(default = "defaults::diagonal_cost")]
    pub diagonal_cost: f32,

    /// Cost of a cardinal move
    #[serde(default = "defaults::orthogonal_cost")]
    pub orthogonal_cost: f32,
}

impl Default for MovementSection {
    fn default() -> Self {
        Self {
            allow_diagonal: true,
            prevent_corner_cutting: true,
            diagonal_cost: defaults::diagonal_cost(),
            orthogonal_cost: defaults::orthogonal_cost(),
        }
    }
}

/// A* search settings section
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchSection {
    /// Maximum nodes to expand before giving up
    #[serde(default = "defaults::max_search_nodes")]
    pub max_search_nodes: usize,
}

impl Default for SearchSection {
    fn default() -> Self {
        Self {
            max_search_nodes: defaults::max_search_nodes(),
        }
    }
}

/// Clearance sampling settings section
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ClearanceSection {
    /// Character clearance radius in world units (0 = point agent)
    #[serde(default = "defaults::character_radius")]
    pub character_radius: f32,

    /// Require the full clearance disk to fit (disables the lenient
    /// boundary fallback)
    #[serde(default)]
    pub strict: bool,
}

impl Default for ClearanceSection {
    fn default() -> Self {
        Self {
            character_radius: defaults::character_radius(),
            strict: false,
        }
    }
}

impl NavConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &FsPath) -> Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Load from the default config path (configs/navigation.yaml),
    /// falling back to defaults when the file does not exist.
    pub fn load_default() -> Result<Self, ConfigLoadError> {
        let path = FsPath::new("configs/navigation.yaml");
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: Self =
            serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject defect-class values: non-positive cell size or costs,
    /// negative radius, zero node budget.
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        if !(self.grid.cell_size.is_finite() && self.grid.cell_size > 0.0) {
            return Err(ConfigLoadError::Invalid(format!(
                "grid.cell_size must be positive (got {})",
                self.grid.cell_size
            )));
        }
        if !(self.movement.orthogonal_cost.is_finite() && self.movement.orthogonal_cost > 0.0) {
            return Err(ConfigLoadError::Invalid(format!(
                "movement.orthogonal_cost must be positive (got {})",
                self.movement.orthogonal_cost
            )));
        }
        if !(self.movement.diagonal_cost.is_finite() && self.movement.diagonal_cost > 0.0) {
            return Err(ConfigLoadError::Invalid(format!(
                "movement.diagonal_cost must be positive (got {})",
                self.movement.diagonal_cost
            )));
        }
        if !(self.clearance.character_radius.is_finite()
            && self.clearance.character_radius >= 0.0)
        {
            return Err(ConfigLoadError::Invalid(format!(
                "clearance.character_radius must be non-negative (got {})",
                self.clearance.character_radius
            )));
        }
        if self.search.max_search_nodes == 0 {
            return Err(ConfigLoadError::Invalid(
                "search.max_search_nodes must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Movement rules from the movement section.
    pub fn movement_rules(&self) -> MovementRules {
        MovementRules {
            allow_diagonal: self.movement.allow_diagonal,
            prevent_corner_cutting: self.movement.prevent_corner_cutting,
            diagonal_cost: self.movement.diagonal_cost,
            orthogonal_cost: self.movement.orthogonal_cost,
        }
    }

    /// Clearance policy from the clearance section.
    pub fn clearance_policy(&self) -> ClearancePolicy {
        if self.clearance.strict {
            ClearancePolicy::Strict
        } else {
            ClearancePolicy::Lenient
        }
    }

    /// Build a ready-to-use pathfinding engine: movement rules from
    /// the movement section, the matching admissible heuristic, and
    /// the configured node budget.
    pub fn pathfinder(&self) -> Pathfinder {
        let rules = self.movement_rules();
        let heuristic = select_heuristic(&rules);
        Pathfinder::new(rules, heuristic, self.search.max_search_nodes)
    }
}
