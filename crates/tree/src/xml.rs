// XML element tree implementation using roxmltree
use crate::error::TreeError;
use crate::node::ElementNode;
use roxmltree::Node;

/// Wrapper around `roxmltree::Document` exposing its elements as [`ElementNode`]s.
pub struct XmlDocument<'input> {
    doc: roxmltree::Document<'input>,
}

impl<'input> XmlDocument<'input> {
    pub fn parse(text: &'input str) -> Result<Self, TreeError> {
        let doc = roxmltree::Document::parse(text)?;
        Ok(Self { doc })
    }

    /// The document element (e.g. `<project>`), not the roxmltree root node.
    pub fn root_element(&self) -> XmlElement<'_, 'input> {
        XmlElement::new(self.doc.root_element())
    }
}

/// An element handle into a parsed [`XmlDocument`].
#[derive(Debug, Clone, Copy)]
pub struct XmlElement<'a, 'input> {
    node: Node<'a, 'input>,
}

impl<'a, 'input> XmlElement<'a, 'input> {
    pub fn new(node: Node<'a, 'input>) -> Self {
        XmlElement { node }
    }

    pub fn inner(&self) -> Node<'a, 'input> {
        self.node
    }
}

impl PartialEq for XmlElement<'_, '_> {
    fn eq(&self, other: &Self) -> bool {
        self.node.id() == other.node.id()
    }
}

impl Eq for XmlElement<'_, '_> {}

impl<'a, 'input: 'a> ElementNode<'a> for XmlElement<'a, 'input> {
    fn local_name(&self) -> &'a str {
        self.node.tag_name().name()
    }

    fn child_elements(&self) -> Box<dyn Iterator<Item = Self> + 'a> {
        Box::new(
            self.node
                .children()
                .filter(|n| n.is_element())
                .map(XmlElement::new),
        )
    }

    fn parent(&self) -> Option<Self> {
        self.node.parent_element().map(XmlElement::new)
    }

    fn text(&self) -> String {
        self.node
            .children()
            .filter(|n| n.is_text())
            .filter_map(|n| n.text())
            .collect()
    }
}
