// File: crates/svgchart-core/src/axis.rs
// Summary: Axis orientation descriptors (primary vs counter coordinate).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ChartError;
use crate::geometry::Bound;

/// Geometric coordinate an axis maps to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Coord {
    X,
    Y,
}

impl Coord {
    pub const fn other(self) -> Self {
        match self {
            Coord::X => Coord::Y,
            Coord::Y => Coord::X,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Coord::X => "x",
            Coord::Y => "y",
        }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Coord {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "x" => Ok(Coord::X),
            "y" => Ok(Coord::Y),
            other => Err(ChartError::UnknownCoord(other.to_string())),
        }
    }
}

/// Chart-rectangle dimension spanned along a coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Extent {
    Width,
    Height,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Horizontal,
    Vertical,
}

/// Unit descriptor for one coordinate: which position key, which extent, and
/// which chart-rectangle bound a span along it starts from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AxisUnits {
    pub pos: Coord,
    pub len: Extent,
    pub dir: Direction,
    pub rect_start: Bound,
}

impl AxisUnits {
    pub const X: AxisUnits = AxisUnits {
        pos: Coord::X,
        len: Extent::Width,
        dir: Direction::Horizontal,
        rect_start: Bound::X1,
    };

    pub const Y: AxisUnits = AxisUnits {
        pos: Coord::Y,
        len: Extent::Height,
        dir: Direction::Vertical,
        rect_start: Bound::Y2,
    };

    pub const fn for_coord(pos: Coord) -> Self {
        match pos {
            Coord::X => Self::X,
            Coord::Y => Self::Y,
        }
    }
}

/// Orientation of a grid: lines sit at a fixed `units` coordinate and extend along `counter_units`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridAxis {
    pub units: AxisUnits,
    pub counter_units: AxisUnits,
}

impl GridAxis {
    /// Axis whose grid lines are fixed on `pos` and span the other coordinate.
    pub const fn along(pos: Coord) -> Self {
        Self {
            units: AxisUnits::for_coord(pos),
            counter_units: AxisUnits::for_coord(pos.other()),
        }
    }

    /// Horizontal axis; emits vertical grid lines.
    pub const fn x() -> Self { Self::along(Coord::X) }

    /// Vertical axis; emits horizontal grid lines.
    pub const fn y() -> Self { Self::along(Coord::Y) }
}
