/// Ordered collections of Finite Element variants
pub mod fe_collection;
/// Ordered collections of Quadrature Rules
pub mod q_collection;

use crate::quadrature::Quadrature;
use fe_collection::{FECollection, FiniteElementVariant};
use q_collection::QCollection;

use log::debug;
use rayon::prelude::*;
use std::fmt;
use std::ops::{AddAssign, Mul};

/// A paired [FECollection] and [QCollection], indexed together by the active fe index of each cell
///
/// The two collections must have the same size, unless the [QCollection] holds a single rule, in which case
/// that rule is used for every element variant.
///
/// ```
/// use hp_quadrature::prelude::*;
///
/// struct Lagrange(usize);
///
/// impl FiniteElementVariant for Lagrange {
///     fn name(&self) -> String { format!("FE_Q({})", self.0) }
///     fn degree(&self) -> usize { self.0 }
/// }
///
/// let fe_collection: FECollection<Lagrange> = (1..=4).map(Lagrange).collect();
/// let q_collection = QCollection::<2>::gauss_for(&fe_collection).unwrap();
/// let hp = HpCollections::new(&fe_collection, &q_collection).unwrap();
///
/// // the rule for active fe index 2 is a 4x4 point Gauss rule
/// assert_eq!(hp.quadrature_for(2).unwrap().size(), 16);
/// ```
pub struct HpCollections<'c, E, const DIM: usize> {
    fe_collection: &'c FECollection<E>,
    q_collection: &'c QCollection<DIM>,
}

impl<'c, E: FiniteElementVariant, const DIM: usize> HpCollections<'c, E, DIM> {
    /// Pair an [FECollection] with a [QCollection]
    ///
    /// Returns an `Err` if either collection is empty, or if their sizes are incompatible
    pub fn new(
        fe_collection: &'c FECollection<E>,
        q_collection: &'c QCollection<DIM>,
    ) -> Result<Self, HpError> {
        if q_collection.is_empty() {
            return Err(HpError::NoQuadrature);
        }
        if fe_collection.is_empty() {
            return Err(HpError::NoElements);
        }
        if q_collection.size() != 1 && q_collection.size() != fe_collection.size() {
            return Err(HpError::MismatchedCollectionSizes {
                elements: fe_collection.size(),
                quadratures: q_collection.size(),
            });
        }

        debug!(
            "Paired {} with {} quadrature rule(s)",
            fe_collection,
            q_collection.size()
        );

        Ok(Self {
            fe_collection,
            q_collection,
        })
    }

    /// Number of element variants (the range of valid active fe indices)
    pub fn size(&self) -> usize {
        self.fe_collection.size()
    }

    /// The element variant for some active fe index
    pub fn element_for(&self, active_fe_index: usize) -> Result<&'c E, HpError> {
        self.fe_collection.get(active_fe_index)
    }

    /// The quadrature rule for some active fe index
    ///
    /// Returns an `Err` if the index does not refer to an element variant
    pub fn quadrature_for(&self, active_fe_index: usize) -> Result<&'c Quadrature<DIM>, HpError> {
        self.element_for(active_fe_index)?;

        if self.q_collection.size() == 1 {
            self.q_collection.get(0)
        } else {
            self.q_collection.get(active_fe_index)
        }
    }

    /// Integrate over each cell with the rule that matches its active fe index
    ///
    /// `active_fe_indices[c]` is the active fe index of cell `c`. The integrand is evaluated
    /// as `integrand(c, element, point)`. Cells are integrated in parallel. The returned values are
    /// ordered by cell.
    ///
    /// Returns an `Err` for the first cell with an invalid active fe index
    pub fn par_integrate<T, F>(
        &self,
        active_fe_indices: &[usize],
        integrand: F,
    ) -> Result<Vec<T>, HpError>
    where
        E: Sync,
        T: Default + AddAssign + Mul<f64, Output = T> + Send,
        F: Fn(usize, &E, &[f64; DIM]) -> T + Sync,
    {
        let cells: Vec<(&E, &Quadrature<DIM>)> = active_fe_indices
            .iter()
            .map(|&fe_index| Ok((self.element_for(fe_index)?, self.quadrature_for(fe_index)?)))
            .collect::<Result<_, HpError>>()?;

        Ok(cells
            .par_iter()
            .enumerate()
            .map(|(cell, (element, quadrature))| {
                quadrature.integrate(|point| integrand(cell, *element, point))
            })
            .collect())
    }
}

/// The Error Type for hp-collection access and pairing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HpError {
    IndexOutOfRange { index: usize, size: usize },
    NoQuadrature,
    NoElements,
    MismatchedCollectionSizes { elements: usize, quadratures: usize },
}

impl std::error::Error for HpError {}

impl fmt::Display for HpError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, size } => write!(
                f,
                "Index {} is not in the range [0, {}); Cannot access collection!",
                index, size
            ),
            Self::NoQuadrature => write!(
                f,
                "QCollection is empty; Cannot pair with an FECollection!"
            ),
            Self::NoElements => write!(
                f,
                "FECollection is empty; Cannot pair with a QCollection!"
            ),
            Self::MismatchedCollectionSizes {
                elements,
                quadratures,
            } => write!(
                f,
                "FECollection has {} variants but QCollection has {} rules; Cannot pair collections!",
                elements, quadratures
            ),
        }
    }
}
