//! Defines the core abstraction for a navigable, read-only element tree.
use std::fmt::Debug;

/// The contract for an element handle in a read-only, hierarchical document.
///
/// Handles are cheap `Copy` values pointing into a tree owned elsewhere. Parent
/// navigation is a lookup into that tree, never an ownership relation.
///
/// `'a` is the lifetime of the underlying tree.
pub trait ElementNode<'a>: Debug + Clone + Copy + PartialEq + Eq {
    /// The local name of the element, without any namespace prefix.
    fn local_name(&self) -> &'a str;

    /// An iterator over the direct child elements, in document order.
    /// Text, comments and processing instructions are not included.
    fn child_elements(&self) -> Box<dyn Iterator<Item = Self> + 'a>;

    /// The parent element. Returns `None` for the document element, whose parent
    /// (if any) is not an element.
    fn parent(&self) -> Option<Self>;

    /// The concatenated text content of the element's direct text children.
    fn text(&self) -> String;

    /// The trimmed text of the first child element named `name`, or `None` if
    /// there is no such child.
    fn child_text(&self, name: &str) -> Option<String> {
        self.child_elements()
            .find(|child| child.local_name() == name)
            .map(|child| child.text().trim().to_string())
    }
}
