//! # Plan Options
//!
//! Feature-selection policy applied by the builder.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PlanError;
use crate::types::{GridType, ScrewSize};

/// Where screws go.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrewPlacement {
    /// No screws.
    #[default]
    None,
    /// Only at corners of each screw-eligible region.
    Corners,
    /// At every screw-eligible summit.
    All,
}

impl ScrewPlacement {
    pub fn is_enabled(self) -> bool {
        !matches!(self, ScrewPlacement::None)
    }
}

impl fmt::Display for ScrewPlacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScrewPlacement::None => f.write_str("none"),
            ScrewPlacement::Corners => f.write_str("corners"),
            ScrewPlacement::All => f.write_str("all"),
        }
    }
}

impl FromStr for ScrewPlacement {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(ScrewPlacement::None),
            "corners" => Ok(ScrewPlacement::Corners),
            "all" => Ok(ScrewPlacement::All),
            _ => Err(PlanError::UnknownVariant {
                what: "screw placement",
                value: s.to_string(),
            }),
        }
    }
}

/// Which feature classes to activate.
///
/// ## Example
///
/// ```rust
/// use opengrid_plan::{GridType, PlanOptions, ScrewPlacement};
///
/// let options = PlanOptions::default()
///     .with_grid_type(GridType::Lite)
///     .with_connectors(true)
///     .with_screws(ScrewPlacement::Corners);
/// assert_eq!(options.resolved_screw_size().diameter(), 4.1);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlanOptions {
    pub grid_type: GridType,
    pub connectors: bool,
    pub tile_chamfers: bool,
    pub screws: ScrewPlacement,
    /// With screws enabled, restrict tile chamfers to the four outer grid
    /// corners, as the reference panels do.
    pub outer_chamfers_with_screws: bool,
    /// `None` uses the grid type's reference screw.
    pub screw_size: Option<ScrewSize>,
}

impl PlanOptions {
    /// Every feature class enabled, screws at corners.
    pub fn all_features() -> Self {
        Self {
            connectors: true,
            tile_chamfers: true,
            screws: ScrewPlacement::Corners,
            ..Self::default()
        }
    }

    pub fn with_grid_type(mut self, grid_type: GridType) -> Self {
        self.grid_type = grid_type;
        self
    }

    pub fn with_connectors(mut self, enabled: bool) -> Self {
        self.connectors = enabled;
        self
    }

    pub fn with_tile_chamfers(mut self, enabled: bool) -> Self {
        self.tile_chamfers = enabled;
        self
    }

    pub fn with_screws(mut self, placement: ScrewPlacement) -> Self {
        self.screws = placement;
        self
    }

    pub fn with_outer_chamfers_with_screws(mut self, enabled: bool) -> Self {
        self.outer_chamfers_with_screws = enabled;
        self
    }

    pub fn with_screw_size(mut self, screw_size: ScrewSize) -> Self {
        self.screw_size = Some(screw_size);
        self
    }

    /// The explicit screw size, or the grid type's default.
    pub fn resolved_screw_size(&self) -> ScrewSize {
        self.screw_size
            .unwrap_or_else(|| ScrewSize::default_for(self.grid_type))
    }
}
