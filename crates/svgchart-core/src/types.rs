// File: crates/svgchart-core/src/types.rs
// Summary: Shared types (paddings) and padding normalization.

use serde::{Deserialize, Serialize};

/// Fully populated four-sided padding, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Padding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Padding {
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self { top, right, bottom, left }
    }
    pub const fn uniform(v: f64) -> Self {
        Self::new(v, v, v, v)
    }
    /// Total horizontal padding (left + right).
    pub fn hsum(&self) -> f64 { self.left + self.right }
    /// Total vertical padding (top + bottom).
    pub fn vsum(&self) -> f64 { self.top + self.bottom }
}

impl Default for Padding {
    fn default() -> Self {
        Self::uniform(0.0)
    }
}

/// Padding where any side may be absent. `Some(0.0)` is a present side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialPadding {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<f64>,
}

impl PartialPadding {
    pub fn top(mut self, v: f64) -> Self { self.top = Some(v); self }
    pub fn right(mut self, v: f64) -> Self { self.right = Some(v); self }
    pub fn bottom(mut self, v: f64) -> Self { self.bottom = Some(v); self }
    pub fn left(mut self, v: f64) -> Self { self.left = Some(v); self }
}

/// Loose padding input: either one number for every side or a partial set of sides.
///
/// Deserializes from `10` as well as from `{"top": 5, "left": 0}`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PaddingSpec {
    Uniform(f64),
    Sides(PartialPadding),
}

impl Default for PaddingSpec {
    fn default() -> Self {
        PaddingSpec::Sides(PartialPadding::default())
    }
}

impl From<f64> for PaddingSpec {
    fn from(v: f64) -> Self { PaddingSpec::Uniform(v) }
}

impl From<PartialPadding> for PaddingSpec {
    fn from(p: PartialPadding) -> Self { PaddingSpec::Sides(p) }
}

impl From<Padding> for PaddingSpec {
    fn from(p: Padding) -> Self {
        PaddingSpec::Sides(PartialPadding {
            top: Some(p.top),
            right: Some(p.right),
            bottom: Some(p.bottom),
            left: Some(p.left),
        })
    }
}

/// Coerce a loose padding spec into a four-sided [`Padding`].
///
/// Only absent sides take `fallback`; a side explicitly set to `0` stays `0`.
pub fn normalize_padding(padding: impl Into<PaddingSpec>, fallback: f64) -> Padding {
    match padding.into() {
        PaddingSpec::Uniform(v) => Padding::uniform(v),
        PaddingSpec::Sides(p) => Padding {
            top: p.top.unwrap_or(fallback),
            right: p.right.unwrap_or(fallback),
            bottom: p.bottom.unwrap_or(fallback),
            left: p.left.unwrap_or(fallback),
        },
    }
}
