//! Container wrappers and the sort operations exposed to tree sorters.
use crate::wrapper::Wrapper;
use pomsort_tree::ElementNode;
use std::cmp::Ordering;
use std::fmt::Write;

/// Wraps an element that has child elements.
///
/// The head is the element's own leaf wrapper and decides where the group goes
/// among its siblings. The children are ordered by [`GroupWrapper::sort`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupWrapper<N> {
    head: Box<Wrapper<N>>,
    children: Vec<Wrapper<N>>,
}

impl<N: Copy> GroupWrapper<N> {
    pub fn new(head: Wrapper<N>, children: Vec<Wrapper<N>>) -> Self {
        GroupWrapper {
            head: Box::new(head),
            children,
        }
    }

    pub fn element(&self) -> N {
        self.head.element()
    }

    pub fn head(&self) -> &Wrapper<N> {
        &self.head
    }

    pub fn children(&self) -> &[Wrapper<N>] {
        &self.children
    }

    /// The child elements in their current order.
    pub fn elements(&self) -> Vec<N> {
        self.children.iter().map(Wrapper::element).collect()
    }

    /// Reorders every sibling group in the hierarchy.
    ///
    /// The sort is stable: unsorted siblings, and ranked siblings with equal keys,
    /// keep their relative order.
    pub fn sort(&mut self) {
        self.children.sort_by(Wrapper::cmp_order);
        for child in &mut self.children {
            if let Wrapper::Group(group) = child {
                group.sort();
            }
        }
    }

    /// Whether [`GroupWrapper::sort`] would leave every element where it is.
    pub fn is_sorted(&self) -> bool {
        let in_order = self
            .children
            .windows(2)
            .all(|pair| pair[0].cmp_order(&pair[1]) != Ordering::Greater);
        in_order
            && self.children.iter().all(|child| match child {
                Wrapper::Group(group) => group.is_sorted(),
                _ => true,
            })
    }
}

impl<'a, N: ElementNode<'a>> GroupWrapper<N> {
    /// An indented listing of the hierarchy in its current order, one element per
    /// line with its priority.
    pub fn outline(&self) -> String {
        let mut out = String::new();
        self.write_outline(&mut out, 0);
        out
    }

    fn write_outline(&self, out: &mut String, depth: usize) {
        let _ = writeln!(out, "{:indent$}{}", "", self.head.describe(), indent = depth * 2);
        for child in &self.children {
            match child {
                Wrapper::Group(group) => group.write_outline(out, depth + 1),
                leaf => {
                    let _ = writeln!(
                        out,
                        "{:indent$}{}",
                        "",
                        leaf.describe(),
                        indent = (depth + 1) * 2
                    );
                }
            }
        }
    }
}
