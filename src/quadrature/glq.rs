use super::{Quadrature, QuadratureError};
use log::debug;
use nalgebra::{DMatrix, SymmetricEigen};

/// The `n` Gauss-Legendre points and weights over `(-1, 1)`, sorted by point
///
/// The points are the eigenvalues of the symmetric Jacobi matrix of the Legendre recurrence, and each
/// weight is twice the squared first component of the matching normalized eigenvector (Golub-Welsch).
///
/// Returns an `Err` if `n` is zero
///
/// ```
/// use hp_quadrature::quadrature::glq::*;
///
/// let (points, weights) = gauss_legendre_points(10).unwrap();
/// assert_eq!(points.len(), 10);
/// assert!(points.iter().sum::<f64>().abs() < 1e-12);
/// assert!((weights.iter().sum::<f64>() - 2.0).abs() < 1e-12);
///
/// assert!(gauss_legendre_points(0).is_err());
/// ```
// https://en.wikipedia.org/wiki/Gaussian_quadrature#Gauss%E2%80%93Legendre_quadrature
pub fn gauss_legendre_points(n: usize) -> Result<(Vec<f64>, Vec<f64>), QuadratureError> {
    if n == 0 {
        return Err(QuadratureError::ZeroPoints);
    }

    // off-diagonal terms: k / sqrt(4k^2 - 1)
    let jacobi = DMatrix::from_fn(n, n, |r, c| {
        if r.abs_diff(c) == 1 {
            let k = r.max(c) as f64;
            k / (4.0 * k * k - 1.0).sqrt()
        } else {
            0.0
        }
    });

    let SymmetricEigen {
        eigenvalues,
        eigenvectors,
        ..
    } = SymmetricEigen::new(jacobi);

    let mut pairs: Vec<(f64, f64)> = eigenvalues
        .iter()
        .zip(eigenvectors.row(0).iter())
        .map(|(x, v)| (*x, 2.0 * v * v))
        .collect();
    pairs.sort_by(|a, b| a.0.total_cmp(&b.0));

    Ok(pairs.into_iter().unzip())
}

/// An `n`-point Gauss-Legendre rule mapped affinely onto the interval `[min, max]`
///
/// ```
/// use hp_quadrature::quadrature::glq::*;
///
/// let line = gauss_legendre_line(4, -0.75, 0.25).unwrap();
///
/// assert!(line.points().iter().all(|[x]| *x > -0.75 && *x < 0.25));
/// assert!((line.sum_of_weights() - 1.0).abs() < 1e-12);
/// ```
pub fn gauss_legendre_line(n: usize, min: f64, max: f64) -> Result<Quadrature<1>, QuadratureError> {
    let (points, weights) = gauss_legendre_points(n)?;
    let half_width = (max - min) / 2.0;
    let center = (max + min) / 2.0;

    Quadrature::new(
        points.iter().map(|x| [center + half_width * x]).collect(),
        weights.iter().map(|w| w * half_width).collect(),
    )
}

/// Gauss-Legendre Quadrature Rules on the unit cell `[0, 1]^DIM`
///
/// An `n`-point rule (per direction) integrates polynomials of degree `2n - 1` exactly in each variable.
///
/// ```
/// use hp_quadrature::prelude::*;
///
/// let rule: Quadrature<2> = QGauss::new(3).unwrap();
/// assert_eq!(rule.size(), 9);
///
/// // ∫∫ x^5 y^4 over the unit square
/// let solution = rule.integrate(|[x, y]| x.powi(5) * y.powi(4));
/// assert!((solution - 1.0 / 30.0).abs() < 1e-12);
/// ```
pub struct QGauss;

impl QGauss {
    pub fn new<const DIM: usize>(n: usize) -> Result<Quadrature<DIM>, QuadratureError> {
        let line = gauss_legendre_line(n, 0.0, 1.0)?;

        debug!("Generated {}-point Gauss rule in {} dimension(s)", n, DIM);

        Ok(Quadrature::tensor_product(&line))
    }
}
