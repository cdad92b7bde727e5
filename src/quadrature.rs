/// Gauss-Legendre-Quadrature points, weights and rules
pub mod glq;
/// Low order Newton-Cotes rules (midpoint, trapezoid, Simpson)
pub mod newton_cotes;

#[cfg(feature = "json_export")]
use json::{object, JsonValue};
use std::fmt;
use std::ops::{AddAssign, Mul};

/// A Quadrature Rule over a `DIM`-dimensional reference cell
///
/// A rule is a list of points and a matching list of weights, such that the integral of some function `f`
/// over the reference cell is approximated by `Σ w_q * f(x_q)`.
///
/// Rules are immutable once constructed.
///
/// ```
/// use hp_quadrature::prelude::*;
///
/// let rule = Quadrature::<1>::new(vec![[0.25], [0.75]], vec![0.5, 0.5]).unwrap();
///
/// assert_eq!(rule.size(), 2);
/// assert!((rule.integrate(|[x]| *x) - 0.5).abs() < 1e-14);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Quadrature<const DIM: usize> {
    points: Vec<[f64; DIM]>,
    weights: Vec<f64>,
}

impl<const DIM: usize> Quadrature<DIM> {
    /// Build a rule from a list of points and their weights
    ///
    /// Returns an `Err` if the number of points and weights differ
    pub fn new(points: Vec<[f64; DIM]>, weights: Vec<f64>) -> Result<Self, QuadratureError> {
        if points.len() != weights.len() {
            return Err(QuadratureError::MismatchedLengths {
                points: points.len(),
                weights: weights.len(),
            });
        }

        Ok(Self { points, weights })
    }

    /// A rule without any points
    pub fn empty() -> Self {
        Self {
            points: Vec::new(),
            weights: Vec::new(),
        }
    }

    /// Build the `DIM`-fold tensor product of a 1D rule
    ///
    /// The first coordinate runs fastest. The weight of each point is the product of the 1D weights.
    ///
    /// ```
    /// use hp_quadrature::prelude::*;
    ///
    /// let line: Quadrature<1> = QTrapez::new();
    /// let square = Quadrature::<2>::tensor_product(&line);
    ///
    /// assert_eq!(square.size(), 4);
    /// assert_eq!(square.point(1), Some(&[1.0, 0.0]));
    /// assert_eq!(square.weight(3), Some(0.25));
    /// ```
    pub fn tensor_product(base: &Quadrature<1>) -> Self {
        let n = base.size();
        let num_points = n.pow(DIM as u32);

        let mut points = Vec::with_capacity(num_points);
        let mut weights = Vec::with_capacity(num_points);

        for flat_idx in 0..num_points {
            let mut point = [0.0; DIM];
            let mut weight = 1.0;
            let mut rem = flat_idx;

            for coord in point.iter_mut() {
                let idx_1d = rem % n;
                rem /= n;

                *coord = base.points[idx_1d][0];
                weight *= base.weights[idx_1d];
            }

            points.push(point);
            weights.push(weight);
        }

        Self { points, weights }
    }

    /// Number of quadrature points
    pub fn size(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The `q`th quadrature point (`None` if `q` is out of range)
    pub fn point(&self, q: usize) -> Option<&[f64; DIM]> {
        self.points.get(q)
    }

    /// The weight of the `q`th quadrature point (`None` if `q` is out of range)
    pub fn weight(&self, q: usize) -> Option<f64> {
        self.weights.get(q).copied()
    }

    pub fn points(&self) -> &[[f64; DIM]] {
        &self.points
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Sum of all weights (the measure of the reference cell for a consistent rule)
    pub fn sum_of_weights(&self) -> f64 {
        self.weights.iter().sum()
    }

    /// Apply the rule to some integrand `f`
    ///
    /// The integrand can return any type which can be scaled by an `f64` and accumulated, such as
    /// `f64`, complex numbers, or nalgebra vectors.
    pub fn integrate<T, F>(&self, integrand: F) -> T
    where
        T: Default + AddAssign + Mul<f64, Output = T>,
        F: Fn(&[f64; DIM]) -> T,
    {
        let mut solution = T::default();
        for (point, w) in self.points.iter().zip(self.weights.iter()) {
            solution += integrand(point) * *w;
        }
        solution
    }

    /// Estimate of the memory consumed by this rule (in bytes)
    pub fn memory_consumption(&self) -> usize {
        std::mem::size_of::<Self>()
            + self.points.capacity() * std::mem::size_of::<[f64; DIM]>()
            + self.weights.capacity() * std::mem::size_of::<f64>()
    }
}

impl<const DIM: usize> fmt::Display for Quadrature<DIM> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Quadrature<{}> ({} points)", DIM, self.size())
    }
}

#[cfg(feature = "json_export")]
impl<const DIM: usize> From<&Quadrature<DIM>> for JsonValue {
    fn from(rule: &Quadrature<DIM>) -> Self {
        let points: Vec<JsonValue> = rule
            .points
            .iter()
            .map(|p| JsonValue::from(p.to_vec()))
            .collect();

        object! {
            "dim": DIM,
            "points": points,
            "weights": rule.weights.clone(),
        }
    }
}

/// The Error Type for invalid Quadrature Rule construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuadratureError {
    MismatchedLengths { points: usize, weights: usize },
    ZeroPoints,
    DegreeOverflow(usize),
}

impl std::error::Error for QuadratureError {}

impl fmt::Display for QuadratureError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::MismatchedLengths { points, weights } => write!(
                f,
                "Got {} points but {} weights; Cannot construct Quadrature rule!",
                points, weights
            ),
            Self::ZeroPoints => write!(
                f,
                "Rule must have at least one point per direction; Cannot construct Quadrature rule!"
            ),
            Self::DegreeOverflow(degree) => write!(
                f,
                "No point count exists for polynomial degree {}; Cannot construct Quadrature rule!",
                degree
            ),
        }
    }
}
