//! Sort wrappers: what a tree sorter needs to know about one element.
use crate::group::GroupWrapper;
use crate::table::Priority;
use pomsort_tree::ElementNode;
use std::cmp::Ordering;

/// A wrapper around one element of the input document.
///
/// Wrappers borrow into the tree through `Copy` handles and are discarded after
/// the sort pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Wrapper<N> {
    /// No entry in the order table. Keeps its position relative to other
    /// unsorted siblings and goes after all ranked ones.
    Unsorted(N),
    Sorted {
        element: N,
        priority: Priority,
    },
    /// A dependency or plugin entry, tie-broken by `groupId` + `artifactId`.
    CompositeSorted {
        element: N,
        priority: Priority,
        secondary_key: String,
    },
    /// An element with child elements. Ranked by its head wrapper.
    Group(GroupWrapper<N>),
}

/// The rank of a wrapper among its siblings. Ascending order is sorted order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortKey<'w> {
    Ranked {
        priority: Priority,
        secondary_key: Option<&'w str>,
    },
    Unranked,
}

impl<N: Copy> Wrapper<N> {
    pub fn element(&self) -> N {
        match self {
            Wrapper::Unsorted(element)
            | Wrapper::Sorted { element, .. }
            | Wrapper::CompositeSorted { element, .. } => *element,
            Wrapper::Group(group) => group.element(),
        }
    }

    pub fn sort_key(&self) -> SortKey<'_> {
        match self {
            Wrapper::Unsorted(_) => SortKey::Unranked,
            Wrapper::Sorted { priority, .. } => SortKey::Ranked {
                priority: *priority,
                secondary_key: None,
            },
            Wrapper::CompositeSorted {
                priority,
                secondary_key,
                ..
            } => SortKey::Ranked {
                priority: *priority,
                secondary_key: Some(secondary_key),
            },
            Wrapper::Group(group) => group.head().sort_key(),
        }
    }

    pub fn priority(&self) -> Option<Priority> {
        match self.sort_key() {
            SortKey::Ranked { priority, .. } => Some(priority),
            SortKey::Unranked => None,
        }
    }

    pub fn is_sorted(&self) -> bool {
        self.priority().is_some()
    }

    /// Compares two sibling wrappers. Unranked wrappers compare equal to each
    /// other, so a stable sort keeps their original order.
    pub fn cmp_order(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl<'a, N: ElementNode<'a>> Wrapper<N> {
    /// A one-line description, e.g. `dependency [3000, org.slf4jslf4j-api]`.
    pub fn describe(&self) -> String {
        let name = self.element().local_name();
        match self.sort_key() {
            SortKey::Ranked {
                priority,
                secondary_key: Some(key),
            } => format!("{} [{}, {}]", name, priority, key),
            SortKey::Ranked { priority, .. } => format!("{} [{}]", name, priority),
            SortKey::Unranked => format!("{} (unsorted)", name),
        }
    }
}
