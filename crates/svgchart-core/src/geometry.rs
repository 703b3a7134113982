// File: crates/svgchart-core/src/geometry.rs
// Summary: Chart rectangle in SVG pixel space.

use crate::axis::Extent;
use crate::types::Padding;

/// One edge of the chart rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bound {
    X1,
    X2,
    Y1,
    Y2,
}

/// Plot area inside the surface.
///
/// `y2` is the top edge and `y1` the bottom edge (SVG y grows downward), so
/// `height()` is `y1 - y2`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ChartRect {
    pub x1: f64,
    pub x2: f64,
    pub y1: f64,
    pub y2: f64,
    pub padding: Padding,
}

impl ChartRect {
    pub const fn from_bounds(x1: f64, x2: f64, y1: f64, y2: f64) -> Self {
        Self { x1, x2, y1, y2, padding: Padding::uniform(0.0) }
    }
    pub fn width(&self) -> f64 { self.x2 - self.x1 }
    pub fn height(&self) -> f64 { self.y1 - self.y2 }

    pub fn bound(&self, bound: Bound) -> f64 {
        match bound {
            Bound::X1 => self.x1,
            Bound::X2 => self.x2,
            Bound::Y1 => self.y1,
            Bound::Y2 => self.y2,
        }
    }

    pub fn extent(&self, extent: Extent) -> f64 {
        match extent {
            Extent::Width => self.width(),
            Extent::Height => self.height(),
        }
    }
}
