// File: crates/svgchart-core/src/options.rs
// Summary: Chart options (size, padding, axis placement, class names) loadable from JSON.

use serde::{Deserialize, Serialize};

use crate::axis::Direction;
use crate::error::Result;
use crate::types::{PaddingSpec, PartialPadding};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisPosition {
    Start,
    #[default]
    End,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AxisOptions {
    /// Space reserved for the axis labels, in pixels.
    pub offset: f64,
    pub position: AxisPosition,
    pub show_grid: bool,
}

impl AxisOptions {
    pub const fn new(offset: f64, position: AxisPosition) -> Self {
        Self { offset, position, show_grid: true }
    }
}

impl Default for AxisOptions {
    fn default() -> Self {
        Self::new(0.0, AxisPosition::End)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClassNames {
    pub chart: String,
    pub grid_group: String,
    pub grid: String,
    pub grid_background: String,
    pub horizontal: String,
    pub vertical: String,
}

impl ClassNames {
    pub fn for_direction(&self, dir: Direction) -> &str {
        match dir {
            Direction::Horizontal => &self.horizontal,
            Direction::Vertical => &self.vertical,
        }
    }
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            chart: "ct-chart".to_string(),
            grid_group: "ct-grids".to_string(),
            grid: "ct-grid".to_string(),
            grid_background: "ct-grid-background".to_string(),
            horizontal: "ct-horizontal".to_string(),
            vertical: "ct-vertical".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChartOptions {
    /// CSS length for the surface width, e.g. `"640px"`.
    pub width: Option<String>,
    pub height: Option<String>,
    pub chart_padding: PaddingSpec,
    pub axis_x: Option<AxisOptions>,
    pub axis_y: Option<AxisOptions>,
    pub show_grid_background: bool,
    pub class_names: ClassNames,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            chart_padding: PartialPadding::default().top(15.0).right(15.0).bottom(5.0).left(10.0).into(),
            axis_x: Some(AxisOptions::new(30.0, AxisPosition::End)),
            axis_y: Some(AxisOptions::new(40.0, AxisPosition::Start)),
            show_grid_background: false,
            class_names: ClassNames::default(),
        }
    }
}

impl ChartOptions {
    /// Parse options from JSON; absent fields keep their defaults.
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn has_axis(&self) -> bool {
        self.axis_x.is_some() || self.axis_y.is_some()
    }
}

/// Numeric part of a CSS length (`"500px"` -> 500). Unit-less numbers are accepted.
pub fn quantity(input: &str) -> Option<f64> {
    let s = input.trim();
    let end = s
        .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == '-' || c == '+'))
        .unwrap_or(s.len());
    s[..end].parse().ok()
}
