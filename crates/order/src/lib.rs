//! Canonical sort order for project descriptors.
//!
//! An [`OrderTable`] is built once from a canonical template document and maps
//! every structural path (`/project/dependencies/dependency`) to a priority that
//! reflects template document order. A [`WrapperFactory`] then classifies the
//! elements of input documents into [`Wrapper`]s, and a [`GroupWrapper`] sorts
//! each sibling group by those priorities.
//!
//! ```
//! use pomsort_order::WrapperFactory;
//! use pomsort_tree::XmlDocument;
//!
//! let factory = WrapperFactory::builder().with_sort_dependencies(true).build()?;
//! let doc = XmlDocument::parse("<project><version/><groupId/></project>").unwrap();
//! let mut group = factory.create_group(doc.root_element())?;
//! group.sort();
//! assert!(group.is_sorted());
//! # Ok::<(), pomsort_order::SortError>(())
//! ```

pub mod config;
pub mod error;
pub mod factory;
pub mod group;
pub mod path;
pub mod table;
pub mod templates;
pub mod wrapper;

pub use config::{SortConfig, SortFlags};
pub use error::{SortError, TemplateError};
pub use factory::{WrapperFactory, WrapperFactoryBuilder};
pub use group::GroupWrapper;
pub use path::{MAX_TREE_DEPTH, StructuralPath};
pub use table::{OrderTable, Priority, SORT_ORDER_BASE, SORT_ORDER_INCREMENT};
pub use templates::{PredefinedOrder, decode_text};
pub use wrapper::{SortKey, Wrapper};
