// File: crates/svgchart-core/tests/padding.rs
// Purpose: Padding normalization from numbers, partial sides and JSON.

use svgchart_core::{normalize_padding, Padding, PaddingSpec, PartialPadding};

#[test]
fn number_padding() {
    assert_eq!(normalize_padding(10.0, 0.0), Padding::new(10.0, 10.0, 10.0, 10.0));
}

#[test]
fn number_padding_zero() {
    assert_eq!(normalize_padding(0.0, 7.0), Padding::new(0.0, 0.0, 0.0, 0.0));
}

#[test]
fn empty_padding_default_fallback() {
    assert_eq!(normalize_padding(PartialPadding::default(), 0.0), Padding::uniform(0.0));
}

#[test]
fn empty_padding_specified_fallback() {
    assert_eq!(normalize_padding(PartialPadding::default(), 10.0), Padding::uniform(10.0));
}

#[test]
fn partial_padding_specified_fallback() {
    let partial = PartialPadding::default().top(5.0).left(5.0);
    assert_eq!(normalize_padding(partial, 10.0), Padding::new(5.0, 10.0, 10.0, 5.0));
}

#[test]
fn explicit_zero_side_is_kept() {
    let partial = PartialPadding::default().right(0.0);
    assert_eq!(normalize_padding(partial, 10.0), Padding::new(10.0, 0.0, 10.0, 10.0));
}

#[test]
fn complete_padding_unchanged() {
    let full = Padding::new(5.0, 5.0, 5.0, 5.0);
    assert_eq!(normalize_padding(full, 10.0), full);
}

#[test]
fn padding_spec_from_json() {
    let uniform: PaddingSpec = serde_json::from_str("12").unwrap();
    assert_eq!(uniform, PaddingSpec::Uniform(12.0));

    let sides: PaddingSpec = serde_json::from_str(r#"{"top": 0, "left": 4}"#).unwrap();
    assert_eq!(normalize_padding(sides, 3.0), Padding::new(0.0, 3.0, 3.0, 4.0));
}
