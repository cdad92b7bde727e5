use super::HpError;
use std::fmt;

/// A Finite Element variant that can be selected on a cell via its active index
pub trait FiniteElementVariant {
    /// A human readable name such as `FE_Q(2)`
    fn name(&self) -> String;
    /// The polynomial degree of the variant's basis
    fn degree(&self) -> usize;
}

/// An ordered collection of Finite Element variants
///
/// The position of each variant is its "active fe index".
/// A companion [QCollection](super::q_collection::QCollection) holds the matching rules at the same positions.
#[derive(Clone, Debug)]
pub struct FECollection<E> {
    elements: Vec<E>,
}

impl<E> FECollection<E> {
    /// An empty collection, to be filled with [FECollection::push_back]
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Append a variant; it takes the next active index
    pub fn push_back(&mut self, element: E) {
        self.elements.push(element);
    }

    /// The variant at some active index
    ///
    /// Returns an `Err` if `index` is not in `[0, size)`
    pub fn get(&self, index: usize) -> Result<&E, HpError> {
        self.elements.get(index).ok_or(HpError::IndexOutOfRange {
            index,
            size: self.elements.len(),
        })
    }

    /// Number of variants in the collection
    pub fn size(&self) -> usize {
        self.elements.len()
    }

    /// True if no variants have been added yet
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterate over the variants in active index order
    pub fn iter(&self) -> impl Iterator<Item = &E> + '_ {
        self.elements.iter()
    }
}

impl<E: FiniteElementVariant> FECollection<E> {
    /// The highest polynomial degree in the collection (0 if it is empty)
    pub fn max_degree(&self) -> usize {
        self.elements.iter().map(|e| e.degree()).max().unwrap_or(0)
    }
}

impl<E> Default for FECollection<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> From<E> for FECollection<E> {
    fn from(element: E) -> Self {
        Self {
            elements: vec![element],
        }
    }
}

impl<E> FromIterator<E> for FECollection<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<E: FiniteElementVariant> fmt::Display for FECollection<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let names: Vec<String> = self.elements.iter().map(|e| e.name()).collect();
        write!(f, "FECollection [{}]", names.join(", "))
    }
}
