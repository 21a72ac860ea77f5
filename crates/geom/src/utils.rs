//! Vector helpers and numeric tables shared by the curve types.

use crate::scalar::{Float, Scalar};
use crate::{vector, Angle, Vector};

/// The vector rotated by +90 degrees.
#[inline]
pub fn tangent<S: Float>(v: Vector<S>) -> Vector<S> {
    vector(-v.y, v.x)
}

/// Operations on vectors that euclid does not provide out of the box.
///
/// Addition, subtraction, scaling, dot product, length, distance and normalization
/// are provided by euclid's `Vector2D` and `Point2D` directly.
pub trait VectorExt<S> {
    /// Scale the vector down so that its length does not exceed `max`.
    fn limit(self, max: S) -> Self;

    /// Rotate the vector by `angle`, counter-clockwise when the y axis points up.
    fn rotated(self, angle: Angle<S>) -> Self;

    /// The unsigned angle between two vectors, in `[0, PI]`.
    ///
    /// The cosine is clamped into `[-1, 1]` so that rounding errors on nearly
    /// colinear vectors do not produce NaN.
    fn angle_between(self, other: Self) -> Angle<S>;

    /// Direction of the vector relative to the x axis.
    fn heading(self) -> Angle<S>;

    fn is_zero(self) -> bool;
}

impl<S: Scalar> VectorExt<S> for Vector<S> {
    fn limit(self, max: S) -> Self {
        let square_length = self.square_length();
        if square_length > max * max {
            return self / square_length.sqrt() * max;
        }

        self
    }

    fn rotated(self, angle: Angle<S>) -> Self {
        let (sin, cos) = Float::sin_cos(angle.radians);
        vector(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    fn angle_between(self, other: Self) -> Angle<S> {
        let div = self.length() * other.length();
        let cos = (self.dot(other) / div).max(-S::ONE).min(S::ONE);
        Angle::radians(cos.acos())
    }

    fn heading(self) -> Angle<S> {
        Angle::radians(Float::atan2(self.y, self.x))
    }

    fn is_zero(self) -> bool {
        self.x == S::ZERO && self.y == S::ZERO
    }
}

/// Nodes and weights of the 24 points Gauss-Legendre quadrature on `[-1, 1]`,
/// as `(weight, abscissa)` pairs.
pub const GAUSS_LEGENDRE_COEFFS_24: [(f64, f64); 24] = [
    (0.1279381953467521569740561652246953718517, -0.0640568928626056260850430826247450385909),
    (0.1279381953467521569740561652246953718517, 0.0640568928626056260850430826247450385909),
    (0.1258374563468282961213753825111836887264, -0.1911188674736163091586398207570696318404),
    (0.1258374563468282961213753825111836887264, 0.1911188674736163091586398207570696318404),
    (0.1216704729278033912044631534762624256070, -0.3150426796961633743867932913198102407864),
    (0.1216704729278033912044631534762624256070, 0.3150426796961633743867932913198102407864),
    (0.1155056680537256013533444839067835598622, -0.4337935076260451384870842319133497124524),
    (0.1155056680537256013533444839067835598622, 0.4337935076260451384870842319133497124524),
    (0.1074442701159656347825773424466062227946, -0.5454214713888395356583756172183723700107),
    (0.1074442701159656347825773424466062227946, 0.5454214713888395356583756172183723700107),
    (0.0976186521041138882698806644642471544279, -0.6480936519369755692524957869107476266696),
    (0.0976186521041138882698806644642471544279, 0.6480936519369755692524957869107476266696),
    (0.0861901615319532759171852029837426671850, -0.7401241915785543642438281030999784255232),
    (0.0861901615319532759171852029837426671850, 0.7401241915785543642438281030999784255232),
    (0.0733464814110803057340336152531165181193, -0.8200019859739029219539498726697452080761),
    (0.0733464814110803057340336152531165181193, 0.8200019859739029219539498726697452080761),
    (0.0592985849154367807463677585001085845412, -0.8864155270044010342131543419821967550873),
    (0.0592985849154367807463677585001085845412, 0.8864155270044010342131543419821967550873),
    (0.0442774388174198061686027482113382288593, -0.9382745520027327585236490017087214496548),
    (0.0442774388174198061686027482113382288593, 0.9382745520027327585236490017087214496548),
    (0.0285313886289336631813078159518782864491, -0.9747285559713094981983919930081690617411),
    (0.0285313886289336631813078159518782864491, 0.9747285559713094981983919930081690617411),
    (0.0123412297999871995468056670700372915759, -0.9951872199970213601799974097007368118745),
    (0.0123412297999871995468056670700372915759, 0.9951872199970213601799974097007368118745),
];

/// Integrate `f` over `[0, 1]` with the 24 points Gauss-Legendre quadrature.
pub fn gauss_legendre_24<S: Scalar, F>(mut f: F) -> S
where
    F: FnMut(S) -> S,
{
    let mut sum = S::ZERO;
    for &(weight, abscissa) in &GAUSS_LEGENDRE_COEFFS_24 {
        let t = S::HALF * S::value(abscissa) + S::HALF;
        sum += S::value(weight) * f(t);
    }

    S::HALF * sum
}

#[cfg(test)]
fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() <= epsilon
}

#[test]
fn quadrature_weights_sum_to_two() {
    let sum: f64 = GAUSS_LEGENDRE_COEFFS_24.iter().map(|c| c.0).sum();
    assert!(approx_eq(sum, 2.0, 1e-12));
}

#[test]
fn quadrature_is_exact_for_polynomials() {
    // The 24 points rule integrates polynomials up to degree 47 exactly.
    let integral: f64 = gauss_legendre_24(|t: f64| t.powi(5) * 6.0 + 1.0);
    assert!(approx_eq(integral, 2.0, 1e-12));

    let integral: f64 = gauss_legendre_24(|t: f64| t.sin());
    assert!(approx_eq(integral, 1.0 - 1.0f64.cos(), 1e-12));
}

#[test]
fn limit() {
    let v = vector(3.0f64, 4.0);
    assert_eq!(v.limit(10.0), v);
    let limited = v.limit(2.5);
    assert!(approx_eq(limited.length(), 2.5, 1e-12));
    assert!(approx_eq(limited.x, 1.5, 1e-12));
    assert!(approx_eq(limited.y, 2.0, 1e-12));
}

#[test]
fn rotation_uses_the_matrix_convention() {
    // Pins the convention: the y component is x·sin + y·cos, the same as
    // the rotation applied by transforms.
    let v = vector(1.0f64, 2.0).rotated(Angle::frac_pi_2());
    assert!(approx_eq(v.x, -2.0, 1e-12));
    assert!(approx_eq(v.y, 1.0, 1e-12));

    let angle = Angle::degrees(30.0f64);
    let v = vector(3.0f64, -1.0);
    let expected = crate::Rotation::new(angle).transform_vector(v);
    let rotated = v.rotated(angle);
    assert!(approx_eq(rotated.x, expected.x, 1e-12));
    assert!(approx_eq(rotated.y, expected.y, 1e-12));
}

#[test]
fn angle_between() {
    let a = vector(1.0f64, 0.0);
    assert!(approx_eq(a.angle_between(vector(0.0, 3.0)).to_degrees(), 90.0, 1e-9));
    assert!(approx_eq(a.angle_between(vector(-2.0, 0.0)).to_degrees(), 180.0, 1e-9));
    // Nearly identical directions must not produce NaN.
    let b = vector(1.0f64, 1e-9);
    assert!(!a.angle_between(b).radians.is_nan());
    assert!(approx_eq(vector(0.0f64, 1.0).heading().to_degrees(), 90.0, 1e-9));
}
