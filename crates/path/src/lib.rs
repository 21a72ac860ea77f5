#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]

//! Data structures to build, measure and serialize paths made of cubic bézier curves.
//!
//! A [`Path`] is an immutable list of [`PathCommand`]s. The first geometric query
//! decomposes it into [`BezierSubpath`]s of [`CubicCurve`](crate::geom::CubicCurve)s
//! and measures them, once. All queries are parametrized by the fraction of the
//! total arclength.
//!
//! This crate is reexported in [vecpath](../vecpath/index.html).
//!
//! # Examples
//!
//! ```
//! use vecpath_path::Path;
//! use vecpath_path::math::point;
//!
//! let mut builder = Path::builder();
//! builder.move_to(point(0.0, 0.0));
//! builder.line_to(point(10.0, 0.0));
//! builder.line_to(point(10.0, 10.0));
//! builder.close();
//!
//! let path = builder.build();
//!
//! assert!((path.length() - 34.142).abs() < 1e-3);
//! assert_eq!(path.point_at(0.0), Some(point(0.0, 0.0)));
//! assert_eq!(path.to_svg(), "M 0 0 L 10 0 L 10 10 Z");
//! ```

pub use vecpath_geom as geom;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

pub mod builder;
pub mod commands;
pub mod computed;
pub mod path;
pub mod subpath;
pub mod surface;

#[doc(inline)]
pub use crate::builder::{BorderRadii, Builder};
#[doc(inline)]
pub use crate::commands::PathCommand;
#[doc(inline)]
pub use crate::computed::{ComputedPath, CurveLocation};
#[doc(inline)]
pub use crate::path::Path;
#[doc(inline)]
pub use crate::subpath::{Anchor, BezierSubpath};
#[doc(inline)]
pub use crate::surface::{DrawingSurface, SvgSerializer};

/// Magic number for approximating a quarter of a circle with a cubic bézier curve.
///
/// The control points sit at `KAPPA * radius` from the endpoints along the tangents.
pub const KAPPA: f64 = 0.5522847498;

pub mod math {
    //! f64 version of the vecpath_geom types used everywhere.

    use crate::geom::euclid;

    /// Alias for ```euclid::default::Point2D<f64>```.
    pub type Point = euclid::default::Point2D<f64>;

    /// Alias for ```euclid::default::Vector2D<f64>```.
    pub type Vector = euclid::default::Vector2D<f64>;

    /// Alias for ```euclid::default::Box2D<f64>```
    pub type Box2D = euclid::default::Box2D<f64>;

    /// Alias for ```euclid::default::Transform2D<f64>```
    pub type Transform = euclid::default::Transform2D<f64>;

    /// An angle in radians (f64).
    pub type Angle = euclid::Angle<f64>;

    /// Shorthand for `Vector::new(x, y)`.
    #[inline]
    pub fn vector(x: f64, y: f64) -> Vector {
        Vector::new(x, y)
    }

    /// Shorthand for `Point::new(x, y)`.
    #[inline]
    pub fn point(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    /// Shorthand for `Box2D::new(point(x_min, y_min), point(x_max, y_max))`.
    #[inline]
    pub fn rect(x: f64, y: f64, w: f64, h: f64) -> Box2D {
        Box2D::new(point(x, y), point(x + w, y + h))
    }
}
