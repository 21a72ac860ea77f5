#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![allow(clippy::excessive_precision)]
#![allow(clippy::many_single_char_names)]

//! 2D geometric primitives on top of euclid.
//!
//! This crate is reexported in [vecpath](../vecpath/index.html).
//!
//! # Overview.
//!
//! This crate implements the maths to work with:
//!
//! - line segments,
//! - quadratic and cubic bézier curves,
//! - elliptic arcs in their SVG parametrization, converted to cubic bézier chains,
//! - 2D affine transforms.
//!
//! # Curves
//!
//! [`CubicBezierSegment`] is a plain value type made of four points. [`CubicCurve`]
//! wraps a segment together with its first and second derivative curves (hodographs)
//! computed once at construction, and answers the differential queries (tangent,
//! normal, curvature, radius of curvature) and the arclength query.
//!
//! The arclength is computed with a fixed 24 points Gauss-Legendre quadrature, which
//! makes it deterministic and cheap at the expense of an error estimate.
//!
//! # Arcs
//!
//! Elliptic arcs are only ever used as an input format: [`SvgArc::for_each_cubic_bezier`]
//! approximates the arc with one cubic bézier segment per sweep of at most 120 degrees.

// Reexport dependencies.
pub use euclid;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

pub mod arc;
pub mod cubic_bezier;
pub mod curve;
mod line;
pub mod quadratic_bezier;
pub mod transform;
pub mod utils;

#[doc(inline)]
pub use crate::arc::{ArcFlags, SvgArc};
#[doc(inline)]
pub use crate::cubic_bezier::CubicBezierSegment;
#[doc(inline)]
pub use crate::curve::CubicCurve;
#[doc(inline)]
pub use crate::line::LineSegment;
#[doc(inline)]
pub use crate::quadratic_bezier::QuadraticBezierSegment;
#[doc(inline)]
pub use crate::transform::{merge_transforms, rotation_about, scale_about, translation};
#[doc(inline)]
pub use crate::utils::VectorExt;

pub use crate::scalar::Scalar;

mod scalar {
    pub(crate) use euclid::Trig;
    pub(crate) use num_traits::{Float, FloatConst, NumCast};

    use std::fmt::{Debug, Display};
    use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

    pub trait Scalar:
        Float
        + NumCast
        + FloatConst
        + Sized
        + Display
        + Debug
        + Trig
        + AddAssign
        + SubAssign
        + MulAssign
        + DivAssign
    {
        const HALF: Self;
        const ZERO: Self;
        const ONE: Self;
        const TWO: Self;
        const THREE: Self;
        const FOUR: Self;
        const SIX: Self;

        const MIN: Self;
        const MAX: Self;

        /// Tolerance used when deciding whether control points are aligned.
        const LINEAR_TOLERANCE: Self;

        fn value(v: f64) -> Self;
    }

    impl Scalar for f32 {
        const HALF: Self = 0.5;
        const ZERO: Self = 0.0;
        const ONE: Self = 1.0;
        const TWO: Self = 2.0;
        const THREE: Self = 3.0;
        const FOUR: Self = 4.0;
        const SIX: Self = 6.0;

        const MIN: Self = f32::MIN;
        const MAX: Self = f32::MAX;

        const LINEAR_TOLERANCE: Self = 1e-4;

        #[inline]
        fn value(v: f64) -> Self {
            v as f32
        }
    }

    impl Scalar for f64 {
        const HALF: Self = 0.5;
        const ZERO: Self = 0.0;
        const ONE: Self = 1.0;
        const TWO: Self = 2.0;
        const THREE: Self = 3.0;
        const FOUR: Self = 4.0;
        const SIX: Self = 6.0;

        const MIN: Self = f64::MIN;
        const MAX: Self = f64::MAX;

        const LINEAR_TOLERANCE: Self = 1e-4;

        #[inline]
        fn value(v: f64) -> Self {
            v
        }
    }
}

/// Alias for `euclid::default::Point2D`.
pub use euclid::default::Point2D as Point;

/// Alias for `euclid::default::Vector2D`.
pub use euclid::default::Vector2D as Vector;

/// Alias for `euclid::default::Transform2D`
pub type Transform<S> = euclid::default::Transform2D<S>;

/// Alias for `euclid::default::Rotation2D`
pub type Rotation<S> = euclid::default::Rotation2D<S>;

/// An angle in radians.
pub use euclid::Angle;

/// Shorthand for `Vector::new(x, y)`.
#[inline]
pub fn vector<S>(x: S, y: S) -> Vector<S> {
    Vector::new(x, y)
}

/// Shorthand for `Point::new(x, y)`.
#[inline]
pub fn point<S>(x: S, y: S) -> Point<S> {
    Point::new(x, y)
}

pub mod traits {
    use crate::{Point, Scalar, Transform};

    /// Something that maps points to points.
    pub trait Transformation<S> {
        fn transform_point(&self, p: Point<S>) -> Point<S>;
    }

    impl<S: Scalar> Transformation<S> for Transform<S> {
        fn transform_point(&self, p: Point<S>) -> Point<S> {
            self.transform_point(p)
        }
    }
}
