use super::fe_collection::{FECollection, FiniteElementVariant};
use super::HpError;
use crate::quadrature::{glq::QGauss, Quadrature, QuadratureError};

#[cfg(feature = "json_export")]
use json::JsonValue;
use log::trace;
use std::sync::Arc;

/// An ordered collection of Quadrature Rules, used alongside an [FECollection] for hp-assembly
///
/// The rule at position `i` is used to integrate over cells whose active element variant is `i`.
/// Thus, the rules must be added in the same order as the element variants they pair with.
/// This ordering is a usage convention; the collection does not check it.
///
/// Stored rules are immutable and shared between clones of a collection, while the ordered list itself
/// belongs to each clone.
///
/// ```
/// use hp_quadrature::prelude::*;
///
/// let mut q_collection = QCollection::<2>::new();
/// q_collection.push_back(&QGauss::new(1).unwrap());
/// q_collection.push_back(&QGauss::new(2).unwrap());
/// q_collection.push_back(&QGauss::new(3).unwrap());
///
/// assert_eq!(q_collection.size(), 3);
/// assert_eq!(q_collection.get(1).unwrap().size(), 4);
/// assert!(q_collection.get(3).is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct QCollection<const DIM: usize> {
    quadratures: Vec<Arc<Quadrature<DIM>>>,
}

impl<const DIM: usize> QCollection<DIM> {
    /// An empty collection, to be filled with [QCollection::push_back]
    pub fn new() -> Self {
        Self {
            quadratures: Vec::new(),
        }
    }

    /// A collection holding a copy of a single rule
    ///
    /// More rules may be added with [QCollection::push_back], though it is usually clearer to build
    /// all entries the same way.
    pub fn from_quadrature(quadrature: &Quadrature<DIM>) -> Self {
        Self {
            quadratures: vec![Arc::new(quadrature.clone())],
        }
    }

    /// Build a collection with one Gauss rule per element variant, in the same order
    ///
    /// Each variant of degree `p` gets a `p + 1` point (per direction) Gauss rule.
    ///
    /// Returns an `Err` if some variant's degree is `usize::MAX`
    pub fn gauss_for<E: FiniteElementVariant>(
        fe_collection: &FECollection<E>,
    ) -> Result<Self, QuadratureError> {
        fe_collection
            .iter()
            .map(|fe| -> Result<Quadrature<DIM>, QuadratureError> {
                let degree = fe.degree();
                let n = degree
                    .checked_add(1)
                    .ok_or(QuadratureError::DegreeOverflow(degree))?;
                QGauss::new::<DIM>(n)
            })
            .collect()
    }

    /// Append a copy of a rule. The caller keeps ownership of the original.
    pub fn push_back(&mut self, new_quadrature: &Quadrature<DIM>) {
        self.quadratures.push(Arc::new(new_quadrature.clone()));
        trace!(
            "Added {} to QCollection at index {}",
            new_quadrature,
            self.quadratures.len() - 1
        );
    }

    /// The rule at some `index`
    ///
    /// Returns an `Err` if `index` is not in `[0, size)`
    pub fn get(&self, index: usize) -> Result<&Quadrature<DIM>, HpError> {
        self.quadratures
            .get(index)
            .map(|q| q.as_ref())
            .ok_or(HpError::IndexOutOfRange {
                index,
                size: self.quadratures.len(),
            })
    }

    /// Number of rules in the collection
    pub fn size(&self) -> usize {
        self.quadratures.len()
    }

    /// True if no rules have been added yet
    pub fn is_empty(&self) -> bool {
        self.quadratures.is_empty()
    }

    /// Iterate over the rules in index order
    pub fn iter(&self) -> impl Iterator<Item = &Quadrature<DIM>> + '_ {
        self.quadratures.iter().map(|q| q.as_ref())
    }

    /// The largest number of points over all rules (0 if the collection is empty)
    pub fn max_n_quadrature_points(&self) -> usize {
        self.iter().map(|q| q.size()).max().unwrap_or(0)
    }

    /// Estimate of the memory consumed by this collection (in bytes)
    pub fn memory_consumption(&self) -> usize {
        std::mem::size_of::<Self>()
            + self.quadratures.capacity() * std::mem::size_of::<Arc<Quadrature<DIM>>>()
            + self
                .quadratures
                .iter()
                .map(|q| q.memory_consumption())
                .sum::<usize>()
    }
}

impl<const DIM: usize> From<Quadrature<DIM>> for QCollection<DIM> {
    fn from(quadrature: Quadrature<DIM>) -> Self {
        Self {
            quadratures: vec![Arc::new(quadrature)],
        }
    }
}

impl<const DIM: usize> FromIterator<Quadrature<DIM>> for QCollection<DIM> {
    fn from_iter<I: IntoIterator<Item = Quadrature<DIM>>>(iter: I) -> Self {
        Self {
            quadratures: iter.into_iter().map(Arc::new).collect(),
        }
    }
}

impl<const DIM: usize> Extend<Quadrature<DIM>> for QCollection<DIM> {
    fn extend<I: IntoIterator<Item = Quadrature<DIM>>>(&mut self, iter: I) {
        self.quadratures.extend(iter.into_iter().map(Arc::new));
    }
}

#[cfg(feature = "json_export")]
impl<const DIM: usize> From<&QCollection<DIM>> for JsonValue {
    fn from(q_collection: &QCollection<DIM>) -> Self {
        JsonValue::Array(q_collection.iter().map(JsonValue::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quadrature::newton_cotes::{QMidpoint, QSimpson, QTrapez};

    struct Degree(usize);

    impl FiniteElementVariant for Degree {
        fn name(&self) -> String {
            format!("P{}", self.0)
        }

        fn degree(&self) -> usize {
            self.0
        }
    }

    fn abc() -> [Quadrature<2>; 3] {
        [QMidpoint::new(), QTrapez::new(), QSimpson::new()]
    }

    #[test]
    fn append_then_access() {
        let [a, b, c] = abc();
        let mut q_collection = QCollection::new();
        q_collection.push_back(&a);
        q_collection.push_back(&b);
        q_collection.push_back(&c);

        assert_eq!(q_collection.size(), 3);
        assert_eq!(q_collection.get(0).unwrap(), &a);
        assert_eq!(q_collection.get(1).unwrap(), &b);
        assert_eq!(q_collection.get(2).unwrap(), &c);
        assert_eq!(
            q_collection.get(3).unwrap_err(),
            HpError::IndexOutOfRange { index: 3, size: 3 }
        );
        assert_eq!(q_collection.size(), 3);
    }

    #[test]
    fn size_tracks_appends() {
        let rule: Quadrature<1> = QGauss::new(2).unwrap();
        let mut q_collection = QCollection::<1>::new();

        for n in 0..10 {
            assert_eq!(q_collection.size(), n);
            q_collection.push_back(&rule);
        }
        assert_eq!(q_collection.size(), 10);
    }

    #[test]
    fn empty_collection() {
        let q_collection = QCollection::<3>::new();

        assert!(q_collection.is_empty());
        assert_eq!(q_collection.max_n_quadrature_points(), 0);
        assert_eq!(
            q_collection.get(0).unwrap_err(),
            HpError::IndexOutOfRange { index: 0, size: 0 }
        );
    }

    #[test]
    fn from_single_rule() {
        let [_, b, _] = abc();

        let promoted: QCollection<2> = b.clone().into();
        assert_eq!(promoted.size(), 1);
        assert_eq!(promoted.get(0).unwrap(), &b);

        let copied = QCollection::from_quadrature(&b);
        assert_eq!(copied.size(), 1);
        assert_eq!(copied.get(0).unwrap(), &b);
    }

    #[test]
    fn clones_are_independent() {
        let [a, b, c] = abc();
        let mut original: QCollection<2> = [a.clone(), b.clone()].into_iter().collect();
        let mut copy = original.clone();

        assert_eq!(copy.size(), original.size());
        for (q_orig, q_copy) in original.iter().zip(copy.iter()) {
            assert_eq!(q_orig, q_copy);
        }

        copy.push_back(&c);
        assert_eq!(original.size(), 2);
        assert_eq!(copy.size(), 3);

        original.push_back(&a);
        assert_eq!(original.get(2).unwrap(), &a);
        assert_eq!(copy.get(2).unwrap(), &c);
    }

    #[test]
    fn memory_consumption_never_decreases() {
        let mut q_collection = QCollection::<3>::new();
        let mut last = q_collection.memory_consumption();
        assert!(last > 0);

        for n in 1..8 {
            q_collection.push_back(&QGauss::new(n).unwrap());
            let current = q_collection.memory_consumption();
            assert!(current >= last);
            last = current;
        }
    }

    #[test]
    fn gauss_rules_follow_element_order() {
        let fe_collection: FECollection<Degree> = [2, 0, 1].into_iter().map(Degree).collect();
        let q_collection = QCollection::<2>::gauss_for(&fe_collection).unwrap();

        let sizes: Vec<usize> = q_collection.iter().map(|q| q.size()).collect();
        assert_eq!(sizes, vec![9, 1, 4]);
    }

    #[test]
    fn gauss_rules_for_unbounded_degree() {
        let fe_collection: FECollection<Degree> = [1, usize::MAX].into_iter().map(Degree).collect();

        assert_eq!(
            QCollection::<1>::gauss_for(&fe_collection).unwrap_err(),
            QuadratureError::DegreeOverflow(usize::MAX)
        );
    }

    #[cfg(feature = "json_export")]
    #[test]
    fn json_export_in_append_order() {
        let [a, b, _] = abc();
        let mut q_collection = QCollection::new();
        q_collection.push_back(&a);
        q_collection.push_back(&b);

        let jv = JsonValue::from(&q_collection);

        assert_eq!(jv.len(), 2);
        assert_eq!(jv[0]["points"].len(), 1);
        assert_eq!(jv[1]["points"].len(), b.size());
        for (q, point) in b.points().iter().enumerate() {
            assert_eq!(jv[1]["points"][q][0], point[0]);
            assert_eq!(jv[1]["points"][q][1], point[1]);
            assert_eq!(jv[1]["weights"][q], b.weight(q).unwrap());
        }
    }

    #[test]
    fn max_points_and_extend() {
        let [a, b, c] = abc();
        let mut q_collection = QCollection::from(a);
        q_collection.extend([c, b]);

        assert_eq!(q_collection.size(), 3);
        assert_eq!(q_collection.max_n_quadrature_points(), 9);
    }
}
