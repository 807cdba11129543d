//! # Plan Types
//!
//! Value types carried by a [`GridPlan`](crate::GridPlan): grid variant,
//! screw dimensions and per-summit features.

use std::fmt;
use std::str::FromStr;

use config::constants::PlannerDefaults;
use opengrid_layout::{ConnectorAngle, FeatureKind};
use serde::{Deserialize, Serialize};

use crate::error::PlanError;

// =============================================================================
// GRID TYPE
// =============================================================================

/// Tile variant. Only consumed by the geometry stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GridType {
    #[default]
    Full,
    Lite,
}

impl fmt::Display for GridType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridType::Full => f.write_str("full"),
            GridType::Lite => f.write_str("lite"),
        }
    }
}

impl FromStr for GridType {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "full" => Ok(GridType::Full),
            "lite" => Ok(GridType::Lite),
            _ => Err(PlanError::UnknownVariant {
                what: "grid type",
                value: s.to_string(),
            }),
        }
    }
}

// =============================================================================
// SCREW SIZE
// =============================================================================

/// Countersunk screw dimensions in millimeters.
///
/// Always positive with `head_diameter > diameter`; the only way to build
/// one is through [`ScrewSize::new`] or the per-type defaults.
///
/// ## Example
///
/// ```rust
/// use opengrid_plan::{GridType, ScrewSize};
///
/// let screw = ScrewSize::new(3.0, 6.5, 0.5).unwrap();
/// assert_eq!(screw.head_diameter(), 6.5);
/// assert!(ScrewSize::new(3.0, 3.0, 0.5).is_err());
/// assert_eq!(ScrewSize::default_for(GridType::Lite).diameter(), 4.1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawScrewSize")]
pub struct ScrewSize {
    diameter: f64,
    head_diameter: f64,
    head_inset: f64,
}

impl ScrewSize {
    pub fn new(diameter: f64, head_diameter: f64, head_inset: f64) -> Result<Self, PlanError> {
        for (name, value) in [
            ("diameter", diameter),
            ("head_diameter", head_diameter),
            ("head_inset", head_inset),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(PlanError::invalid_screw(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        if head_diameter <= diameter {
            return Err(PlanError::invalid_screw(format!(
                "head_diameter {head_diameter} must exceed diameter {diameter}"
            )));
        }
        Ok(Self {
            diameter,
            head_diameter,
            head_inset,
        })
    }

    /// Reference screw for the given tile variant.
    pub fn default_for(grid_type: GridType) -> Self {
        let defaults = match grid_type {
            GridType::Full => PlannerDefaults::default(),
            GridType::Lite => PlannerDefaults::lite(),
        };
        Self {
            diameter: defaults.screw_diameter,
            head_diameter: defaults.screw_head_diameter,
            head_inset: defaults.screw_head_inset,
        }
    }

    #[inline]
    pub fn diameter(&self) -> f64 {
        self.diameter
    }

    #[inline]
    pub fn head_diameter(&self) -> f64 {
        self.head_diameter
    }

    #[inline]
    pub fn head_inset(&self) -> f64 {
        self.head_inset
    }

    /// `[diameter, head_diameter, head_inset]`.
    pub fn to_array(&self) -> [f64; 3] {
        [self.diameter, self.head_diameter, self.head_inset]
    }
}

impl Default for ScrewSize {
    fn default() -> Self {
        Self::default_for(GridType::Full)
    }
}

#[derive(Deserialize)]
struct RawScrewSize {
    diameter: f64,
    head_diameter: f64,
    head_inset: f64,
}

impl TryFrom<RawScrewSize> for ScrewSize {
    type Error = PlanError;

    fn try_from(raw: RawScrewSize) -> Result<Self, Self::Error> {
        Self::new(raw.diameter, raw.head_diameter, raw.head_inset)
    }
}

// =============================================================================
// SUMMIT FEATURES
// =============================================================================

/// One active feature at a summit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SummitFeature {
    /// Connector cutout, rotated towards the tile side.
    Connector(ConnectorAngle),
    TileChamfer,
    Screw,
}

impl SummitFeature {
    pub fn kind(self) -> FeatureKind {
        match self {
            SummitFeature::Connector(_) => FeatureKind::Connector,
            SummitFeature::TileChamfer => FeatureKind::TileChamfer,
            SummitFeature::Screw => FeatureKind::Screw,
        }
    }
}

/// What to draw at a single summit: nothing, or exactly one feature.
///
/// Serializes in the flat `{connector_angle, tile_chamfer, screw}` shape;
/// deserializing a record with more than one active field fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "SummitRecord", into = "SummitRecord")]
pub struct SummitFeatures {
    feature: Option<SummitFeature>,
}

impl SummitFeatures {
    /// No feature.
    pub const NONE: Self = Self { feature: None };

    pub fn new(feature: Option<SummitFeature>) -> Self {
        Self { feature }
    }

    pub fn connector(angle: ConnectorAngle) -> Self {
        Self::new(Some(SummitFeature::Connector(angle)))
    }

    pub fn tile_chamfer() -> Self {
        Self::new(Some(SummitFeature::TileChamfer))
    }

    pub fn screw() -> Self {
        Self::new(Some(SummitFeature::Screw))
    }

    #[inline]
    pub fn feature(&self) -> Option<SummitFeature> {
        self.feature
    }

    pub fn kind(&self) -> Option<FeatureKind> {
        self.feature.map(SummitFeature::kind)
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.feature.is_some()
    }

    pub fn connector_direction(&self) -> Option<ConnectorAngle> {
        match self.feature {
            Some(SummitFeature::Connector(angle)) => Some(angle),
            _ => None,
        }
    }

    pub fn has_tile_chamfer(&self) -> bool {
        matches!(self.feature, Some(SummitFeature::TileChamfer))
    }

    pub fn has_screw(&self) -> bool {
        matches!(self.feature, Some(SummitFeature::Screw))
    }
}

impl From<SummitFeature> for SummitFeatures {
    fn from(feature: SummitFeature) -> Self {
        Self::new(Some(feature))
    }
}

#[derive(Serialize, Deserialize)]
struct SummitRecord {
    #[serde(default)]
    connector_angle: Option<f64>,
    #[serde(default)]
    tile_chamfer: bool,
    #[serde(default)]
    screw: bool,
}

impl TryFrom<SummitRecord> for SummitFeatures {
    type Error = PlanError;

    fn try_from(record: SummitRecord) -> Result<Self, Self::Error> {
        let connector = record
            .connector_angle
            .map(|deg| ConnectorAngle::from_degrees(deg).ok_or(PlanError::InvalidAngle(deg)))
            .transpose()?;
        match (connector, record.tile_chamfer, record.screw) {
            (None, false, false) => Ok(Self::NONE),
            (Some(angle), false, false) => Ok(Self::connector(angle)),
            (None, true, false) => Ok(Self::tile_chamfer()),
            (None, false, true) => Ok(Self::screw()),
            _ => Err(PlanError::ConflictingFeatures),
        }
    }
}

impl From<SummitFeatures> for SummitRecord {
    fn from(features: SummitFeatures) -> Self {
        Self {
            connector_angle: features.connector_direction().map(ConnectorAngle::degrees),
            tile_chamfer: features.has_tile_chamfer(),
            screw: features.has_screw(),
        }
    }
}
