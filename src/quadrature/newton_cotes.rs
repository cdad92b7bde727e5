use super::Quadrature;

/// One-point midpoint rule on the unit cell
///
/// Exact for polynomials of degree 1 in each variable
pub struct QMidpoint;

impl QMidpoint {
    pub fn new<const DIM: usize>() -> Quadrature<DIM> {
        Quadrature::tensor_product(&line_rule(vec![0.5], vec![1.0]))
    }
}

/// Two-point trapezoidal rule on the unit cell (points on the vertices)
///
/// Exact for polynomials of degree 1 in each variable
pub struct QTrapez;

impl QTrapez {
    pub fn new<const DIM: usize>() -> Quadrature<DIM> {
        Quadrature::tensor_product(&line_rule(vec![0.0, 1.0], vec![0.5, 0.5]))
    }
}

/// Three-point Simpson rule on the unit cell
///
/// Exact for polynomials of degree 3 in each variable
///
/// ```
/// use hp_quadrature::prelude::*;
///
/// let rule: Quadrature<1> = QSimpson::new();
/// let solution = rule.integrate(|[x]| x.powi(3));
///
/// assert!((solution - 0.25).abs() < 1e-14);
/// ```
pub struct QSimpson;

impl QSimpson {
    pub fn new<const DIM: usize>() -> Quadrature<DIM> {
        Quadrature::tensor_product(&line_rule(
            vec![0.0, 0.5, 1.0],
            vec![1.0 / 6.0, 2.0 / 3.0, 1.0 / 6.0],
        ))
    }
}

// points and weights are always the same length here
fn line_rule(points: Vec<f64>, weights: Vec<f64>) -> Quadrature<1> {
    Quadrature {
        points: points.into_iter().map(|x| [x]).collect(),
        weights,
    }
}
