//! Canonical element ordering for Maven project descriptors.
//!
//! [`PomSorter`] ties the pieces together: it builds the order table for a
//! [`SortConfig`], classifies every element of a `pom.xml` and reports the
//! sorted order or whether the document already follows it.

pub mod error;
pub mod sorter;

pub use error::PomSortError;
pub use sorter::PomSorter;

pub use pomsort_order::{
    GroupWrapper, OrderTable, PredefinedOrder, SortConfig, SortError, SortFlags, TemplateError,
    Wrapper, WrapperFactory,
};
pub use pomsort_tree::{ElementNode, XmlDocument};
