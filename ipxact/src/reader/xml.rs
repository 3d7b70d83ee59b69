//! Thin convenience layer over `roxmltree` nodes

use itertools::Itertools;

/// An element in the parsed XML tree (newtype)
#[derive(Clone, Copy, Debug)]
pub struct XmlNode<'a, 'input>(pub roxmltree::Node<'a, 'input>);

pub(crate) trait IntoXmlNode<'a, 'input> {
    fn into_xml_node(self) -> XmlNode<'a, 'input>;
}

impl<'a, 'input> IntoXmlNode<'a, 'input> for roxmltree::Node<'a, 'input> {
    fn into_xml_node(self) -> XmlNode<'a, 'input> {
        XmlNode(self)
    }
}

impl<'a, 'input> XmlNode<'a, 'input> {
    /// Local name of the element, without namespace prefix
    pub fn tag_name(&self) -> &'a str {
        self.0.tag_name().name()
    }

    /// Text content of the element, empty when there is none
    pub fn text(&self) -> &'a str {
        self.0.text().unwrap_or("")
    }

    /// Value of attribute `name`, empty when it is not set
    pub fn attribute(&self, name: &str) -> &'a str {
        self.0.attribute(name).unwrap_or("")
    }

    /// Returns the first child element with the local name `tag`
    pub fn find_child(&self, tag: &str) -> Option<XmlNode<'a, 'input>> {
        self.0
            .children()
            .find(|n| n.is_element() && n.has_tag_name(tag))
            .map(|n| n.into_xml_node())
    }

    pub fn maybe_find_text_by_tag_name(&self, tag: &str) -> Option<&'a str> {
        self.find_child(tag).map(|n| n.text())
    }

    /// Returns the text of the first child element `tag` as an owned string, empty when the child
    /// is missing
    pub fn find_text_by_tag_name(&self, tag: &str) -> String {
        self.maybe_find_text_by_tag_name(tag)
            .unwrap_or("")
            .to_owned()
    }

    pub fn children_with_tag_name(&self, tag: &str) -> Vec<XmlNode<'a, 'input>> {
        self.0
            .children()
            .filter(|n| n.is_element() && n.has_tag_name(tag))
            .map(|n| n.into_xml_node())
            .collect_vec()
    }

    /// Children of the wrapper element `wrapper` with the local name `tag`, e.g. all `parameter`
    /// elements in `parameters`
    pub fn grandchildren(&self, wrapper: &str, tag: &str) -> Vec<XmlNode<'a, 'input>> {
        self.find_child(wrapper)
            .map(|w| w.children_with_tag_name(tag))
            .unwrap_or_default()
    }

    pub fn element_children(&self) -> impl Iterator<Item = XmlNode<'a, 'input>> {
        self.0
            .children()
            .filter(|n| n.is_element())
            .map(|n| n.into_xml_node())
    }

    /// Qualified name of the element as written in the document, e.g. `kactus2:version`
    pub fn qualified_name(&self) -> String {
        let name = self.0.tag_name();
        qualify(self.0, name.namespace(), name.name())
    }

    /// Attributes with qualified names, in document order
    pub fn qualified_attributes(&self) -> Vec<(String, String)> {
        self.0
            .attributes()
            .map(|attr| {
                (
                    qualify(self.0, attr.namespace(), attr.name()),
                    attr.value().to_owned(),
                )
            })
            .collect_vec()
    }

    /// Namespace declarations made on this element itself, as (prefix, URI)
    ///
    /// The default namespace has an empty prefix.
    pub fn declared_namespaces(&self) -> Vec<(String, String)> {
        let inherited = self
            .0
            .parent_element()
            .map(|p| p.namespaces().collect_vec())
            .unwrap_or_default();
        self.0
            .namespaces()
            .filter(|ns| ns.name() != Some("xml"))
            .filter(|ns| {
                !inherited
                    .iter()
                    .any(|p| p.name() == ns.name() && p.uri() == ns.uri())
            })
            .map(|ns| (ns.name().unwrap_or("").to_owned(), ns.uri().to_owned()))
            .collect_vec()
    }
}

fn qualify(node: roxmltree::Node, namespace: Option<&str>, local: &str) -> String {
    match namespace.and_then(|uri| node.lookup_prefix(uri)) {
        Some(prefix) if !prefix.is_empty() => format!("{prefix}:{local}"),
        _ => local.to_owned(),
    }
}


#[test]
fn xml_node_helpers_work() {
    let text = test_util::with_namespaces(
        r#"<ipxact:cpu><ipxact:name>cpu0</ipxact:name><ipxact:regions><ipxact:region/><ipxact:region/></ipxact:regions></ipxact:cpu>"#,
    );
    let doc = roxmltree::Document::parse(&text).unwrap();
    let node = doc.root_element().into_xml_node();

    assert_eq!(node.tag_name(), "cpu");
    assert_eq!(node.qualified_name(), "ipxact:cpu");
    assert_eq!(node.find_text_by_tag_name("name"), "cpu0");
    assert_eq!(node.find_text_by_tag_name("range"), "");
    assert_eq!(node.grandchildren("regions", "region").len(), 2);
    assert_eq!(node.declared_namespaces().len(), 2);
}
