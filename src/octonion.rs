// src/octonion.rs
// Octonions over f64: the 8-dimensional normed division algebra.
// Non-commutative and non-associative, but alternative, and the norm
// composes: |pq| = |p||q|.

use crate::basis::MULT_TABLE;
use crate::error::{OctonionError, Result};
use itertools::Itertools;
use rand::Rng;
use rand_distr::{Distribution, StandardNormal, Uniform};
use std::fmt;
use std::ops::{Add, AddAssign, Div, Index, Mul, MulAssign, Neg, Sub, SubAssign};

// --- CONFIGURATION ---
pub const DIM: usize = 8;
// Tolerance for comparisons after a handful of multiplications at unit scale
pub const DEFAULT_EPSILON: f64 = 1e-10;
pub const DISPLAY_PRECISION: usize = 3;

/// One element of the algebra. Index 0 is the real part, 1..8 the
/// imaginary units i, j, k, l, il, jl, kl.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Octonion {
    pub e: [f64; DIM],
}

impl Octonion {
    #[allow(clippy::too_many_arguments)]
    pub fn new(e0: f64, e1: f64, e2: f64, e3: f64, e4: f64, e5: f64, e6: f64, e7: f64) -> Self {
        Octonion { e: [e0, e1, e2, e3, e4, e5, e6, e7] }
    }

    pub fn from_components(e: [f64; DIM]) -> Self {
        Octonion { e }
    }

    pub fn zero() -> Self {
        Octonion { e: [0.0; DIM] }
    }

    pub fn identity() -> Self {
        Octonion::from_scalar(1.0)
    }

    /// The real number `s` embedded along e0.
    pub fn from_scalar(s: f64) -> Self {
        let mut e = [0.0; DIM];
        e[0] = s;
        Octonion { e }
    }

    /// Unit basis element e_k. Panics if `k >= 8`.
    pub fn basis(k: usize) -> Self {
        let mut e = [0.0; DIM];
        e[k] = 1.0;
        Octonion { e }
    }

    /// Builds a value from a slice that must hold exactly 8 components.
    /// An empty slice counts as a missing input and fails the same way.
    pub fn from_slice(values: &[f64]) -> Result<Self> {
        if values.len() != DIM {
            tracing::debug!(len = values.len(), "rejected octonion conversion");
            return Err(OctonionError::InvalidLength { len: values.len() });
        }
        let mut e = [0.0; DIM];
        e.copy_from_slice(values);
        Ok(Octonion { e })
    }

    /// Fresh owned copy of the components.
    pub fn to_vec(&self) -> Vec<f64> {
        self.e.to_vec()
    }

    pub fn components(&self) -> &[f64; DIM] {
        &self.e
    }

    // Samples each component uniformly from [-1, 1)
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let dist = Uniform::new(-1.0, 1.0);
        let mut e = [0.0; DIM];
        for c in e.iter_mut() {
            *c = dist.sample(rng);
        }
        Octonion { e }
    }

    /// Samples uniformly from the unit 7-sphere: isotropic Gaussian, then
    /// projected. Redraws on the (practically impossible) all-zero draw.
    pub fn random_unit<R: Rng + ?Sized>(rng: &mut R) -> Self {
        loop {
            let mut e = [0.0; DIM];
            for c in e.iter_mut() {
                *c = StandardNormal.sample(rng);
            }
            if let Ok(unit) = (Octonion { e }).normalise() {
                return unit;
            }
        }
    }

    // ------------------------------------------------------------------------
    // Structural accessors
    // ------------------------------------------------------------------------

    pub fn real(&self) -> f64 {
        self.e[0]
    }

    /// The value with its real part removed.
    pub fn imaginary(&self) -> Self {
        let mut e = self.e;
        e[0] = 0.0;
        Octonion { e }
    }

    pub fn is_zero(&self) -> bool {
        self.e.iter().all(|&x| x == 0.0)
    }

    // Conjugate: real part stays, imaginary parts negated
    pub fn conjugate(&self) -> Self {
        let mut e = self.e;
        for c in e.iter_mut().skip(1) {
            *c = -*c;
        }
        Octonion { e }
    }

    // ------------------------------------------------------------------------
    // Scalar operations
    // ------------------------------------------------------------------------

    pub fn scale(&self, s: f64) -> Self {
        let mut e = self.e;
        for c in e.iter_mut() {
            *c *= s;
        }
        Octonion { e }
    }

    pub fn negate(&self) -> Self {
        self.scale(-1.0)
    }

    /// Adds `s` to the real part only; `s` is read as s·e0.
    pub fn add_scalar(&self, s: f64) -> Self {
        let mut e = self.e;
        e[0] += s;
        Octonion { e }
    }

    /// Subtracts `s` from the real part only.
    pub fn sub_scalar(&self, s: f64) -> Self {
        let mut e = self.e;
        e[0] -= s;
        Octonion { e }
    }

    // ------------------------------------------------------------------------
    // Metric
    // ------------------------------------------------------------------------

    /// Euclidean inner product of the coefficient vectors.
    pub fn dot(&self, other: &Octonion) -> f64 {
        self.e.iter().zip(other.e.iter()).map(|(a, b)| a * b).sum()
    }

    pub fn norm_squared(&self) -> f64 {
        self.dot(self)
    }

    /// Largest absolute component; the scale factor that keeps the metric
    /// operations clear of overflow and underflow.
    pub fn max_abs(&self) -> f64 {
        self.e.iter().fold(0.0, |m: f64, c| m.max(c.abs()))
    }

    // Divides every component by s (not a multiply by 1/s, which overflows
    // for subnormal s)
    fn div_components(&self, s: f64) -> Self {
        let mut e = self.e;
        for c in e.iter_mut() {
            *c /= s;
        }
        Octonion { e }
    }

    /// Euclidean length, computed on the max-abs rescaled value so it stays
    /// finite and nonzero wherever the true length is representable.
    pub fn norm(&self) -> f64 {
        let m = self.max_abs();
        if m == 0.0 {
            return 0.0;
        }
        m * self.div_components(m).norm_squared().sqrt()
    }

    /// Scales to unit norm. A zero input is rejected before any division and
    /// handed back unchanged inside the error.
    pub fn normalise(&self) -> Result<Self> {
        let m = self.max_abs();
        if m == 0.0 {
            tracing::debug!(value = %self, "normalise called on zero-norm octonion");
            return Err(OctonionError::DegenerateNormalisation { value: *self });
        }
        // q' has components in [-1, 1] and |q'| in [1, sqrt(8)]
        let scaled = self.div_components(m);
        let unit = scaled.div_components(scaled.norm_squared().sqrt());
        if !unit.is_finite() {
            tracing::debug!(value = %self, "normalise produced non-finite components");
            return Err(OctonionError::DegenerateNormalisation { value: *self });
        }
        Ok(unit)
    }

    /// q⁻¹ = conj(q) / |q|², evaluated as conj(q') / |q'|² / m with q' = q / m.
    /// Relies on q·conj(q) = |q|²·e0. Fails for zero and for inputs whose
    /// inverse is not representable (e.g. subnormal magnitudes).
    pub fn inverse(&self) -> Result<Self> {
        let m = self.max_abs();
        if m == 0.0 {
            tracing::debug!(value = %self, "inverse called on zero-norm octonion");
            return Err(OctonionError::NonInvertible);
        }
        let scaled = self.div_components(m);
        let inv = scaled
            .conjugate()
            .div_components(scaled.norm_squared())
            .div_components(m);
        if !inv.is_finite() {
            tracing::debug!(value = %self, "inverse is not representable");
            return Err(OctonionError::NonInvertible);
        }
        Ok(inv)
    }

    pub fn is_finite(&self) -> bool {
        self.e.iter().all(|c| c.is_finite())
    }

    // ------------------------------------------------------------------------
    // Multiplication
    // ------------------------------------------------------------------------

    /// Distributes (Σ pᵢeᵢ)(Σ qⱼeⱼ) over the 64 basis products.
    /// Accumulates into fresh storage; neither operand is touched.
    pub fn multiply(&self, other: &Octonion) -> Self {
        let mut res = [0.0; DIM];
        for (i, row) in MULT_TABLE.iter().enumerate() {
            for (j, entry) in row.iter().enumerate() {
                res[entry.index] += f64::from(entry.sign) * self.e[i] * other.e[j];
            }
        }
        Octonion { e: res }
    }

    /// Right division: self * other⁻¹.
    pub fn try_div(&self, other: &Octonion) -> Result<Self> {
        Ok(self.multiply(&other.inverse()?))
    }

    /// Integer power by square-and-multiply. Octonions are power-associative,
    /// so the bracketing is irrelevant. Negative exponents go through `inverse`.
    pub fn powi(&self, n: i32) -> Result<Self> {
        let mut base = if n < 0 { self.inverse()? } else { *self };
        let mut e = n.unsigned_abs();
        let mut res = Octonion::identity();
        while e > 0 {
            if e & 1 == 1 {
                res = res * base;
            }
            base = base * base;
            e >>= 1;
        }
        Ok(res)
    }

    /// True iff every component differs by at most `epsilon`.
    ///
    /// Comparison is numeric (IEEE `==`), not bitwise: with `epsilon == 0.0`
    /// components must be equal as numbers, so `0.0` matches `-0.0` and an
    /// infinity matches itself. NaN never matches, and a negative `epsilon`
    /// never compares equal.
    pub fn approx_eq(&self, other: &Octonion, epsilon: f64) -> bool {
        if !(epsilon >= 0.0) {
            return false;
        }
        self.e
            .iter()
            .zip(other.e.iter())
            .all(|(&a, &b)| a == b || (a - b).abs() <= epsilon)
    }
}

// The Associator: [X, Y, Z] = (XY)Z - X(YZ)
// Zero whenever two arguments coincide (alternativity), nonzero in general.
pub fn associator(x: Octonion, y: Octonion, z: Octonion) -> Octonion {
    ((x * y) * z) - (x * (y * z))
}

// The Commutator: [X, Y] = XY - YX
pub fn commutator(x: Octonion, y: Octonion) -> Octonion {
    (x * y) - (y * x)
}

// ============================================================================
// Operator Implementations
// ============================================================================

impl Add for Octonion {
    type Output = Self;
    #[inline(always)]
    fn add(self, other: Self) -> Self {
        let mut e = [0.0; DIM];
        for i in 0..DIM {
            e[i] = self.e[i] + other.e[i];
        }
        Octonion { e }
    }
}

impl Sub for Octonion {
    type Output = Self;
    #[inline(always)]
    fn sub(self, other: Self) -> Self {
        let mut e = [0.0; DIM];
        for i in 0..DIM {
            e[i] = self.e[i] - other.e[i];
        }
        Octonion { e }
    }
}

impl Neg for Octonion {
    type Output = Self;
    fn neg(self) -> Self {
        self.negate()
    }
}

impl Mul for Octonion {
    type Output = Self;
    #[inline(always)]
    fn mul(self, other: Self) -> Self {
        self.multiply(&other)
    }
}

impl Mul<f64> for Octonion {
    type Output = Self;
    fn mul(self, s: f64) -> Self {
        self.scale(s)
    }
}

impl Mul<Octonion> for f64 {
    type Output = Octonion;
    fn mul(self, q: Octonion) -> Octonion {
        q.scale(self)
    }
}

// Component-wise division by a real scalar; IEEE semantics apply for s == 0.
impl Div<f64> for Octonion {
    type Output = Self;
    fn div(self, s: f64) -> Self {
        self.div_components(s)
    }
}

impl AddAssign for Octonion {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl SubAssign for Octonion {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

// Right-multiplies in place: self = self * other
impl MulAssign for Octonion {
    fn mul_assign(&mut self, other: Self) {
        *self = self.multiply(&other);
    }
}

impl Index<usize> for Octonion {
    type Output = f64;
    fn index(&self, i: usize) -> &f64 {
        &self.e[i]
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl From<[f64; DIM]> for Octonion {
    fn from(e: [f64; DIM]) -> Self {
        Octonion { e }
    }
}

impl From<Octonion> for [f64; DIM] {
    fn from(q: Octonion) -> Self {
        q.e
    }
}

impl TryFrom<&[f64]> for Octonion {
    type Error = OctonionError;
    fn try_from(values: &[f64]) -> Result<Self> {
        Octonion::from_slice(values)
    }
}

impl TryFrom<Vec<f64>> for Octonion {
    type Error = OctonionError;
    fn try_from(values: Vec<f64>) -> Result<Self> {
        Octonion::from_slice(&values)
    }
}

impl fmt::Display for Octonion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(DISPLAY_PRECISION);
        let body = self.e.iter().map(|c| format!("{:.*}", precision, c)).join(", ");
        write!(f, "𝕆({})", body)
    }
}
