use itertools::Itertools;

use super::{IntoXmlNode, XmlNode};
use crate::model::{
    BooleanValue, ExtensionContent, NameGroup, Revision, VendorExtension, VendorExtensions, Vlnv,
};

/// Read `name`, `displayName`, `shortDescription` and `description` of the element
///
/// `shortDescription` does not exist in IP-XACT 2014 and is ignored in such documents.
pub fn read_name_group(node: &XmlNode, revision: Revision) -> NameGroup {
    let mut name_group = NameGroup::new(node.find_text_by_tag_name("name"));
    name_group.display_name = node.find_text_by_tag_name("displayName");
    if !revision.is_std14() {
        name_group.short_description = node.find_text_by_tag_name("shortDescription");
    }
    name_group.description = node.find_text_by_tag_name("description");
    name_group
}

/// Returns the `isPresent` expression of the element, empty when there is none
pub fn read_is_present(node: &XmlNode) -> String {
    node.find_text_by_tag_name("isPresent")
}

/// Read the children of the `vendorExtensions` element, if any
pub fn read_vendor_extensions(node: &XmlNode) -> VendorExtensions {
    node.find_child("vendorExtensions")
        .map(|exts| {
            exts.element_children()
                .map(|ext| read_vendor_extension(&ext))
                .collect_vec()
        })
        .unwrap_or_default()
        .into()
}

/// Read an arbitrary element as an opaque vendor extension
///
/// Namespace declarations made on the element are kept as `xmlns` attributes so that the
/// extension can be written back on its own.
pub fn read_vendor_extension(node: &XmlNode) -> VendorExtension {
    let mut ext = VendorExtension::new(node.qualified_name());
    ext.attributes = node
        .declared_namespaces()
        .into_iter()
        .map(|(prefix, uri)| match prefix.as_str() {
            "" => ("xmlns".to_owned(), uri),
            _ => (format!("xmlns:{prefix}"), uri),
        })
        .chain(node.qualified_attributes())
        .collect();

    // Whitespace between child elements is formatting, not content
    let has_elements = node.element_children().next().is_some();
    for child in node.0.children() {
        if child.is_element() {
            ext.push_child(read_vendor_extension(&child.into_xml_node()));
        } else if child.is_text() {
            let text = child.text().unwrap_or("");
            if !(has_elements && text.trim().is_empty()) {
                ext.content.push(ExtensionContent::Text(text.to_owned()));
            }
        }
    }
    ext
}

/// Read `vendor`, `library`, `name` and `version` attributes, e.g. of `ipxact:extends`
pub fn read_vlnv_attributes(node: &XmlNode) -> Vlnv {
    Vlnv::new(
        node.attribute("vendor"),
        node.attribute("library"),
        node.attribute("name"),
        node.attribute("version"),
    )
}

/// Read `vendor`, `library`, `name` and `version` child elements of a document root
pub fn read_vlnv_elements(node: &XmlNode) -> Vlnv {
    Vlnv::new(
        node.find_text_by_tag_name("vendor"),
        node.find_text_by_tag_name("library"),
        node.find_text_by_tag_name("name"),
        node.find_text_by_tag_name("version"),
    )
}

/// Returns the boolean value of the child element `tag`, unspecified when it is missing
pub fn read_boolean(node: &XmlNode, tag: &str) -> BooleanValue {
    node.maybe_find_text_by_tag_name(tag)
        .map_or(BooleanValue::Unspecified, BooleanValue::from_text)
}

/// Texts of all `tag` children of the wrapper element `wrapper`
pub(crate) fn read_text_list(node: &XmlNode, wrapper: &str, tag: &str) -> Vec<String> {
    node.grandchildren(wrapper, tag)
        .iter()
        .map(|n| n.text().to_owned())
        .collect()
}

/// Texts of all direct `tag` children
pub(crate) fn read_texts(node: &XmlNode, tag: &str) -> Vec<String> {
    node.children_with_tag_name(tag)
        .iter()
        .map(|n| n.text().to_owned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::test_util::read_fragment;
    use indoc::indoc;

    #[test]
    fn read_name_group_works() {
        let xml = indoc! {r#"
            <ipxact:region>
                <ipxact:name>firstRegion</ipxact:name>
                <ipxact:displayName>r1</ipxact:displayName>
                <ipxact:shortDescription>brief</ipxact:shortDescription>
                <ipxact:description>region description text</ipxact:description>
            </ipxact:region>
        "#};

        let name_group = read_fragment(xml, |node| read_name_group(node, Revision::Std22));
        assert_eq!(name_group.name, "firstRegion");
        assert_eq!(name_group.display_name, "r1");
        assert_eq!(name_group.short_description, "brief");
        assert_eq!(name_group.description, "region description text");

        let name_group = read_fragment(xml, |node| read_name_group(node, Revision::Std14));
        assert_eq!(name_group.short_description, "");
    }

    #[test]
    fn read_vendor_extensions_keeps_unknown_content() {
        let xml = indoc! {r#"
            <ipxact:channel>
                <ipxact:vendorExtensions>
                    <kactus2:version>3.13.0</kactus2:version>
                    <testExtension vendorAttribute="extension">testValue</testExtension>
                    <kactus2:nested kactus2:kind="outer">
                        <kactus2:inner/>
                    </kactus2:nested>
                </ipxact:vendorExtensions>
            </ipxact:channel>
        "#};

        let exts = read_fragment(xml, read_vendor_extensions);
        assert_eq!(exts.len(), 3);
        assert_eq!(exts[0], VendorExtension::with_value("kactus2:version", "3.13.0"));
        assert_eq!(exts[1].name, "testExtension");
        assert_eq!(exts[1].attribute("vendorAttribute"), Some("extension"));
        assert_eq!(exts[1].value(), "testValue");
        assert_eq!(exts[2].attribute("kactus2:kind"), Some("outer"));
        assert_eq!(exts[2].value(), "");
        assert_eq!(
            exts[2].children().collect_vec(),
            vec![&VendorExtension::new("kactus2:inner")]
        );
    }

    #[test]
    fn read_vendor_extension_keeps_mixed_content_and_empty_attributes() {
        let xml = indoc! {r#"
            <ipxact:channel>
                <ipxact:vendorExtensions>
                    <kactus2:note kactus2:flag="">head<kactus2:b/>tail</kactus2:note>
                </ipxact:vendorExtensions>
            </ipxact:channel>
        "#};

        let exts = read_fragment(xml, read_vendor_extensions);
        assert_eq!(exts[0].attribute("kactus2:flag"), Some(""));
        assert_eq!(
            exts[0].content,
            vec![
                ExtensionContent::Text("head".to_owned()),
                ExtensionContent::Element(VendorExtension::new("kactus2:b")),
                ExtensionContent::Text("tail".to_owned()),
            ]
        );
    }

    #[test]
    fn missing_content_reads_as_defaults() {
        let xml = "<ipxact:channel/>";

        assert_eq!(read_fragment(xml, read_is_present), "");
        assert!(read_fragment(xml, read_vendor_extensions).is_empty());
        assert_eq!(
            read_fragment(xml, |node| read_boolean(node, "isStructural")),
            BooleanValue::Unspecified
        );
    }
}
