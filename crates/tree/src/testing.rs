//! In-memory element trees for tests.
//!
//! Publicly available so downstream crates can build trees without going through
//! an XML parser, including deliberately broken ones (see [`MockTree::set_parent`]).
use crate::node::ElementNode;
use std::collections::HashMap;

#[derive(Debug, Clone)]
struct MockElementData {
    name: String,
    text: String,
    children: Vec<usize>,
}

#[derive(Debug, Default)]
pub struct MockTree {
    nodes: Vec<MockElementData>,
    // Child id -> parent id, consulted by `parent()`.
    parent_map: HashMap<usize, usize>,
}

/// A node handle that holds a reference to its tree so it can navigate itself.
#[derive(Debug, Clone, Copy)]
pub struct MockNode<'a> {
    pub id: usize,
    pub tree: &'a MockTree,
}

impl MockTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an element with no parent and returns its id.
    pub fn add_root(&mut self, name: &str) -> usize {
        self.push(name, "")
    }

    /// Adds an element as the last child of `parent` and returns its id.
    pub fn add_child(&mut self, parent: usize, name: &str) -> usize {
        self.add_text_child(parent, name, "")
    }

    /// Adds a text-only element (e.g. `<groupId>org.example</groupId>`).
    pub fn add_text_child(&mut self, parent: usize, name: &str, text: &str) -> usize {
        let id = self.push(name, text);
        self.nodes[parent].children.push(id);
        self.parent_map.insert(id, parent);
        id
    }

    /// Rewires only the parent link of `child`, leaving child lists untouched.
    /// Used to build cyclic or otherwise malformed trees.
    pub fn set_parent(&mut self, child: usize, parent: usize) {
        self.parent_map.insert(child, parent);
    }

    pub fn node(&self, id: usize) -> MockNode<'_> {
        MockNode { id, tree: self }
    }

    fn push(&mut self, name: &str, text: &str) -> usize {
        self.nodes.push(MockElementData {
            name: name.to_string(),
            text: text.to_string(),
            children: Vec::new(),
        });
        self.nodes.len() - 1
    }
}

impl PartialEq for MockNode<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
impl Eq for MockNode<'_> {}

impl<'a> ElementNode<'a> for MockNode<'a> {
    fn local_name(&self) -> &'a str {
        &self.tree.nodes[self.id].name
    }

    fn child_elements(&self) -> Box<dyn Iterator<Item = Self> + 'a> {
        let tree = self.tree; // Re-borrow to help the lifetime checker
        Box::new(
            tree.nodes[self.id]
                .children
                .iter()
                .map(move |&id| MockNode { id, tree }),
        )
    }

    fn parent(&self) -> Option<Self> {
        self.tree.parent_map.get(&self.id).map(|&pid| MockNode {
            id: pid,
            tree: self.tree,
        })
    }

    fn text(&self) -> String {
        self.tree.nodes[self.id].text.clone()
    }
}
