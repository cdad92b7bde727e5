//! Quadrature Rules and hp-Collections for mixed-order Finite Element assembly
//!
//! A [QCollection](hp::q_collection::QCollection) stores one quadrature rule per element variant of an
//! [FECollection](hp::fe_collection::FECollection). Cells select both their element and their rule
//! through the same "active fe index".
//!
//! ```
//! use hp_quadrature::prelude::*;
//!
//! let mut q_collection = QCollection::<2>::new();
//! q_collection.push_back(&QGauss::new(2).unwrap());
//! q_collection.push_back(&QTrapez::new());
//! q_collection.push_back(&QSimpson::new());
//!
//! assert_eq!(q_collection.size(), 3);
//! assert_eq!(q_collection.get(1).unwrap(), &QTrapez::new());
//! assert_eq!(
//!     q_collection.get(3).unwrap_err(),
//!     HpError::IndexOutOfRange { index: 3, size: 3 }
//! );
//! ```

/// Finite Element and Quadrature collections for hp-assembly
pub mod hp;
/// Quadrature Rules over the unit cell
pub mod quadrature;

pub mod prelude {
    pub use crate::hp::{
        fe_collection::{FECollection, FiniteElementVariant},
        q_collection::QCollection,
        HpCollections, HpError,
    };
    pub use crate::quadrature::{
        glq::QGauss,
        newton_cotes::{QMidpoint, QSimpson, QTrapez},
        Quadrature, QuadratureError,
    };
}
