//! Element classification: turns input elements into sort wrappers.
use crate::config::{SortConfig, SortFlags};
use crate::error::SortError;
use crate::group::GroupWrapper;
use crate::path::{MAX_TREE_DEPTH, StructuralPath};
use crate::table::OrderTable;
use crate::templates::{PredefinedOrder, decode_text};
use crate::wrapper::Wrapper;
use pomsort_tree::ElementNode;
use std::sync::Arc;

/// Creates wrappers for the elements of input documents.
///
/// Holds the order table for a sorting session together with the flags it was
/// built with. Both are immutable; cloning shares the table.
#[derive(Debug, Clone)]
pub struct WrapperFactory {
    table: Arc<OrderTable>,
    flags: SortFlags,
}

impl WrapperFactory {
    pub fn new(table: Arc<OrderTable>, flags: SortFlags) -> Self {
        WrapperFactory { table, flags }
    }

    pub fn builder() -> WrapperFactoryBuilder {
        WrapperFactoryBuilder::default()
    }

    pub fn order_table(&self) -> &OrderTable {
        &self.table
    }

    pub fn flags(&self) -> SortFlags {
        self.flags
    }

    /// Classifies a single element against the order table.
    ///
    /// Elements whose path is not in the table become [`Wrapper::Unsorted`].
    /// Dependency and plugin entries become [`Wrapper::CompositeSorted`] when the
    /// matching flag is set; everything else found in the table is
    /// [`Wrapper::Sorted`].
    pub fn classify<'a, N: ElementNode<'a>>(&self, element: N) -> Result<Wrapper<N>, SortError> {
        let path = StructuralPath::of(element)?;
        let Some(priority) = self.table.priority(path.as_str()) else {
            log::debug!("No sort order for '{}', leaving it unsorted", path);
            return Ok(Wrapper::Unsorted(element));
        };

        if self.is_group_and_artifact_sorted(element) {
            return Ok(Wrapper::CompositeSorted {
                element,
                priority,
                secondary_key: group_and_artifact_key(element),
            });
        }
        Ok(Wrapper::Sorted { element, priority })
    }

    /// Wraps a whole document: `root` and every descendant element.
    pub fn create_group<'a, N: ElementNode<'a>>(
        &self,
        root: N,
    ) -> Result<GroupWrapper<N>, SortError> {
        let children = self.wrap_children(root, 1)?;
        Ok(GroupWrapper::new(self.classify(root)?, children))
    }

    fn wrap_children<'a, N: ElementNode<'a>>(
        &self,
        element: N,
        depth: usize,
    ) -> Result<Vec<Wrapper<N>>, SortError> {
        if depth >= MAX_TREE_DEPTH {
            return Err(SortError::MalformedTree {
                path: element.local_name().to_string(),
                message: format!("document nesting exceeds {} levels", MAX_TREE_DEPTH),
            });
        }

        element
            .child_elements()
            .map(|child| -> Result<Wrapper<N>, SortError> {
                let head = self.classify(child)?;
                let grandchildren = self.wrap_children(child, depth + 1)?;
                Ok(if grandchildren.is_empty() {
                    head
                } else {
                    Wrapper::Group(GroupWrapper::new(head, grandchildren))
                })
            })
            .collect()
    }

    fn is_group_and_artifact_sorted<'a, N: ElementNode<'a>>(&self, element: N) -> bool {
        (self.flags.sort_dependencies && is_child_of(element, "dependency", "dependencies"))
            || (self.flags.sort_plugins && is_child_of(element, "plugin", "plugins"))
    }
}

fn is_child_of<'a, N: ElementNode<'a>>(element: N, name: &str, parent_name: &str) -> bool {
    element.local_name() == name
        && element
            .parent()
            .is_some_and(|parent| parent.local_name() == parent_name)
}

fn group_and_artifact_key<'a, N: ElementNode<'a>>(element: N) -> String {
    let group_id = element.child_text("groupId").unwrap_or_default();
    let artifact_id = element.child_text("artifactId").unwrap_or_default();
    group_id + &artifact_id
}

#[derive(Debug, Clone)]
enum TemplateSource {
    Predefined(PredefinedOrder),
    Text(String),
    Bytes {
        bytes: Vec<u8>,
        encoding: String,
    },
}

impl Default for TemplateSource {
    fn default() -> Self {
        TemplateSource::Predefined(PredefinedOrder::default())
    }
}

/// A builder for creating a [`WrapperFactory`].
///
/// Uses the recommended predefined order with both flags off unless configured
/// otherwise.
#[derive(Debug, Clone, Default)]
pub struct WrapperFactoryBuilder {
    flags: SortFlags,
    template: TemplateSource,
}

impl WrapperFactoryBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    /// Applies the flags and predefined order of a [`SortConfig`].
    /// `custom_sort_order_file` is not read here; load it and pass the bytes to
    /// [`WrapperFactoryBuilder::with_template_bytes`].
    pub fn with_config(self, config: &SortConfig) -> Self {
        self.with_sort_dependencies(config.sort_dependencies)
            .with_sort_plugins(config.sort_plugins)
            .with_predefined_order(config.predefined_sort_order)
    }

    pub fn with_sort_dependencies(mut self, sort_dependencies: bool) -> Self {
        self.flags.sort_dependencies = sort_dependencies;
        self
    }

    pub fn with_sort_plugins(mut self, sort_plugins: bool) -> Self {
        self.flags.sort_plugins = sort_plugins;
        self
    }

    pub fn with_predefined_order(mut self, order: PredefinedOrder) -> Self {
        self.template = TemplateSource::Predefined(order);
        self
    }

    /// Uses `text` as the canonical template instead of a predefined order.
    pub fn with_template_source(mut self, text: impl Into<String>) -> Self {
        self.template = TemplateSource::Text(text.into());
        self
    }

    /// Uses raw template bytes, decoded with `encoding` when the factory is built.
    pub fn with_template_bytes(mut self, bytes: Vec<u8>, encoding: &str) -> Self {
        self.template = TemplateSource::Bytes {
            bytes,
            encoding: encoding.to_string(),
        };
        self
    }

    /// Consumes the builder, loading the template and building the order table.
    pub fn build(self) -> Result<WrapperFactory, SortError> {
        let table = match &self.template {
            TemplateSource::Predefined(order) => OrderTable::from_template_str(order.template())?,
            TemplateSource::Text(text) => OrderTable::from_template_str(text)?,
            TemplateSource::Bytes { bytes, encoding } => {
                OrderTable::from_template_str(&decode_text(bytes, encoding)?)?
            }
        };
        Ok(WrapperFactory::new(Arc::new(table), self.flags))
    }
}
