//! The order table: structural path to priority, built once from a canonical template.
use crate::error::{SortError, TemplateError};
use crate::path::{MAX_TREE_DEPTH, StructuralPath};
use pomsort_tree::{ElementNode, XmlDocument};
use std::collections::HashMap;
use std::collections::hash_map::Entry;

pub type Priority = u32;

/// Priority of the template's document element.
pub const SORT_ORDER_BASE: Priority = 1000;

/// How much the running priority grows for every element visited after the root.
pub const SORT_ORDER_INCREMENT: Priority = 100;

/// An immutable mapping from [`StructuralPath`] to [`Priority`].
///
/// Priorities come from one running counter over a pre-order walk of the
/// template, so they follow template document order rather than nesting depth:
/// for `<r><a><x/></a><b/></r>` the values are r=1000, a=1100, x=1200, b=1300.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderTable {
    priorities: HashMap<StructuralPath, Priority>,
}

impl OrderTable {
    /// Parses `text` as XML and builds the table from its document element.
    pub fn from_template_str(text: &str) -> Result<Self, SortError> {
        let doc = XmlDocument::parse(text).map_err(TemplateError::from)?;
        Self::build(doc.root_element())
    }

    /// Builds the table from an already parsed template tree.
    pub fn build<'a, N: ElementNode<'a>>(template_root: N) -> Result<Self, SortError> {
        let mut table = OrderTable::default();
        let mut priority = SORT_ORDER_BASE;
        table.add_elements(template_root, &mut priority, 0)?;
        log::debug!(
            "Built sort order table for '{}' with {} paths",
            template_root.local_name(),
            table.len()
        );
        Ok(table)
    }

    fn add_elements<'a, N: ElementNode<'a>>(
        &mut self,
        element: N,
        priority: &mut Priority,
        depth: usize,
    ) -> Result<(), SortError> {
        if depth >= MAX_TREE_DEPTH {
            return Err(SortError::MalformedTree {
                path: element.local_name().to_string(),
                message: format!("template nesting exceeds {} levels", MAX_TREE_DEPTH),
            });
        }

        // A repeated path takes the priority of its last occurrence.
        match self.priorities.entry(StructuralPath::of(element)?) {
            Entry::Vacant(entry) => {
                entry.insert(*priority);
            }
            Entry::Occupied(mut entry) => {
                log::warn!(
                    "Sort order template repeats '{}', replacing priority {} with {}",
                    entry.key(),
                    entry.get(),
                    priority
                );
                entry.insert(*priority);
            }
        }

        for child in element.child_elements() {
            *priority = priority.checked_add(SORT_ORDER_INCREMENT).ok_or_else(|| {
                SortError::MalformedTree {
                    path: child.local_name().to_string(),
                    message: "template has too many elements to number".to_string(),
                }
            })?;
            self.add_elements(child, priority, depth + 1)?;
        }
        Ok(())
    }

    /// Looks up the priority for a path, e.g. `"/project/dependencies"`.
    pub fn priority(&self, path: &str) -> Option<Priority> {
        self.priorities.get(path).copied()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.priorities.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.priorities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.priorities.is_empty()
    }

    /// All entries in ascending priority order.
    pub fn entries(&self) -> Vec<(&StructuralPath, Priority)> {
        let mut entries: Vec<_> = self.priorities.iter().map(|(p, &v)| (p, v)).collect();
        entries.sort_by_key(|&(_, priority)| priority);
        entries
    }
}
