//! Structural paths: the position class of an element, independent of sibling index.
use crate::error::SortError;
use pomsort_tree::ElementNode;
use std::borrow::Borrow;
use std::fmt;

/// Upper bound on ancestor chains, template nesting and document nesting.
/// Anything deeper is treated as a malformed (possibly cyclic) tree.
///
/// This is a guard for [`ElementNode`] implementations with arbitrary parent
/// links. Documents parsed by roxmltree can run out of stack inside the parser
/// well before this depth on small (e.g. debug test) thread stacks, so XML
/// input never reaches it in practice.
pub const MAX_TREE_DEPTH: usize = 512;

pub const SEPARATOR: char = '/';

/// The names from the document element down to an element, each preceded by
/// [`SEPARATOR`], e.g. `/project/dependencies/dependency`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StructuralPath(String);

impl StructuralPath {
    /// Computes the path of `element` by walking its parent links.
    pub fn of<'a, N: ElementNode<'a>>(element: N) -> Result<Self, SortError> {
        let mut names = Vec::new();
        let mut current = Some(element);
        while let Some(node) = current {
            if names.len() == MAX_TREE_DEPTH {
                return Err(SortError::MalformedTree {
                    path: element.local_name().to_string(),
                    message: format!(
                        "more than {} ancestors, parent links may form a cycle",
                        MAX_TREE_DEPTH
                    ),
                });
            }
            names.push(node.local_name());
            current = node.parent();
        }

        let capacity = names.iter().map(|n| n.len() + 1).sum();
        let mut path = String::with_capacity(capacity);
        for name in names.iter().rev() {
            path.push(SEPARATOR);
            path.push_str(name);
        }
        Ok(StructuralPath(path))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of elements on the path.
    pub fn depth(&self) -> usize {
        self.0.matches(SEPARATOR).count()
    }
}

impl Borrow<str> for StructuralPath {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StructuralPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pomsort_tree::XmlDocument;
    use pomsort_tree::testing::MockTree;

    #[test]
    fn test_path_of_nested_element() {
        let mut tree = MockTree::new();
        let project = tree.add_root("project");
        let deps = tree.add_child(project, "dependencies");
        let dep = tree.add_child(deps, "dependency");

        let path = StructuralPath::of(tree.node(dep)).unwrap();
        assert_eq!(path.as_str(), "/project/dependencies/dependency");
        assert_eq!(path.depth(), 3);
        assert_eq!(StructuralPath::of(tree.node(project)).unwrap().as_str(), "/project");
    }

    #[test]
    fn test_same_ancestor_chain_gives_same_path_across_documents() {
        let first = XmlDocument::parse("<project><build><plugins/></build></project>").unwrap();
        let second =
            XmlDocument::parse("<project><name/><build><x/><plugins><p/></plugins></build></project>")
                .unwrap();

        let find_plugins = |doc: &XmlDocument<'_>| {
            let build = doc
                .root_element()
                .child_elements()
                .find(|e| e.local_name() == "build")
                .unwrap();
            let plugins = build
                .child_elements()
                .find(|e| e.local_name() == "plugins")
                .unwrap();
            StructuralPath::of(plugins).unwrap()
        };
        assert_eq!(find_plugins(&first), find_plugins(&second));
    }

    #[test]
    fn test_cyclic_parent_links_are_rejected() {
        let mut tree = MockTree::new();
        let a = tree.add_root("a");
        let b = tree.add_child(a, "b");
        tree.set_parent(a, b);

        let err = StructuralPath::of(tree.node(b)).unwrap_err();
        assert!(matches!(err, SortError::MalformedTree { ref path, .. } if path == "b"));
    }
}
