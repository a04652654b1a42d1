//! Road segments between districts.

use serde::{Deserialize, Serialize};

use artifex_core::Vec3;

/// Road class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoadKind {
    /// Ring road between neighbouring districts.
    Main,
    /// Spoke from a district to the city center.
    Secondary,
}

impl RoadKind {
    /// Fixed width of this road class.
    #[must_use]
    pub const fn width(self) -> f32 {
        match self {
            Self::Main => 25.0,
            Self::Secondary => 15.0,
        }
    }
}

/// A straight road segment.
///
/// Holds coordinates only, never a reference to the districts it joins.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Road {
    /// Start point.
    pub start: Vec3,
    /// End point.
    pub end: Vec3,
    /// Width in world units.
    pub width: f32,
    /// Road class.
    pub kind: RoadKind,
}

impl Road {
    /// Creates a road of the given class; the width follows the class.
    #[must_use]
    pub const fn new(start: Vec3, end: Vec3, kind: RoadKind) -> Self {
        Self {
            start,
            end,
            width: kind.width(),
            kind,
        }
    }

    /// Segment length.
    #[must_use]
    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }
}
