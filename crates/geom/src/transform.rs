//! Builders for the affine transforms applied to paths.
//!
//! Transforms are euclid's `Transform2D`, which maps `(x, y)` to
//! `(m11·x + m21·y + m31, m12·x + m22·y + m32)`. In the usual `{a, b, c, d, tx, ty}`
//! notation, `a = m11`, `b = m12`, `c = m21`, `d = m22`, `tx = m31` and `ty = m32`.

use crate::scalar::Scalar;
use crate::{vector, Angle, Point, Transform};

/// A transform translating by `(x, y)`.
#[inline]
pub fn translation<S: Scalar>(x: S, y: S) -> Transform<S> {
    Transform::translation(x, y)
}

/// A transform scaling by `(sx, sy)` around `origin`.
pub fn scale_about<S: Scalar>(sx: S, sy: S, origin: Point<S>) -> Transform<S> {
    Transform::translation(-origin.x, -origin.y)
        .then_scale(sx, sy)
        .then_translate(origin.to_vector())
}

/// A transform rotating by `angle` around `origin`.
///
/// Positive angles rotate from the x axis towards the y axis.
pub fn rotation_about<S: Scalar>(angle: Angle<S>, origin: Point<S>) -> Transform<S> {
    Transform::translation(-origin.x, -origin.y)
        .then_rotate(angle)
        .then_translate(vector(origin.x, origin.y))
}

/// Combine a sequence of transforms into one.
///
/// The transforms are applied in order: the first one in the slice is applied first.
/// An empty slice yields the identity.
pub fn merge_transforms<S: Scalar>(transforms: &[Transform<S>]) -> Transform<S> {
    transforms
        .iter()
        .fold(Transform::identity(), |acc, transform| acc.then(transform))
}

#[cfg(test)]
use crate::point;

#[cfg(test)]
fn assert_approx_eq(a: Point<f64>, b: Point<f64>) {
    assert!((a - b).length() < 1e-9, "{:?} != {:?}", a, b);
}

#[test]
fn apply_to_point() {
    let t: Transform<f64> = Transform::new(2.0, 3.0, 4.0, 5.0, 6.0, 7.0);
    // (a·x + c·y + tx, b·x + d·y + ty) with a=2, b=3, c=4, d=5, tx=6, ty=7.
    assert_eq!(t.transform_point(point(1.0, 1.0)), point(12.0, 15.0));
    assert_eq!(translation(3.0, -1.0).transform_point(point(1.0, 1.0)), point(4.0, 0.0));
}

#[test]
fn scale_keeps_origin_fixed() {
    let origin = point(5.0f64, 5.0);
    let scale = scale_about(2.0, 3.0, origin);
    assert_approx_eq(scale.transform_point(origin), origin);
    assert_approx_eq(scale.transform_point(point(6.0, 6.0)), point(7.0, 8.0));
}

#[test]
fn rotation_keeps_origin_fixed() {
    let origin = point(5.0f64, 5.0);
    let rotation = rotation_about(Angle::degrees(90.0), origin);
    assert_approx_eq(rotation.transform_point(origin), origin);
    assert_approx_eq(rotation.transform_point(point(6.0, 5.0)), point(5.0, 6.0));
}

#[test]
fn merge_applies_in_call_order() {
    let scale = scale_about(2.0f64, 2.0, point(0.0, 0.0));
    let translate = translation(10.0, 0.0);
    let p = point(1.0, 1.0);

    let merged = merge_transforms(&[translate, scale]);
    assert_approx_eq(merged.transform_point(p), point(22.0, 2.0));

    let merged = merge_transforms(&[scale, translate]);
    assert_approx_eq(merged.transform_point(p), point(12.0, 2.0));

    assert_eq!(merge_transforms::<f64>(&[]), Transform::identity());
}

#[test]
fn translation_round_trip() {
    let there = translation(12.5f64, -3.25);
    let back = translation(-12.5f64, 3.25);
    let p = point(0.3, 7.1);
    assert_approx_eq(merge_transforms(&[there, back]).transform_point(p), p);
}
