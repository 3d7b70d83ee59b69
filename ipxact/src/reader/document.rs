use log::{debug, warn};

use super::{read_bus_definition, read_component, read_design, IntoXmlNode, XmlNode};
use crate::{
    error::{ParseError, PositionalError},
    model::{Document, DocumentKind, Revision},
};

/// Namespace prefixes written for every document
const STANDARD_PREFIXES: [&str; 3] = ["xsi", "ipxact", "kactus2"];

/// Detect the revision of a document from its root element
///
/// The namespace bound to the `ipxact` prefix wins. Documents using another prefix are recognized
/// by the namespace of the root element.
pub fn read_revision(root: &XmlNode) -> Revision {
    let uri = root
        .0
        .lookup_namespace_uri(Some("ipxact"))
        .or_else(|| root.0.tag_name().namespace())
        .unwrap_or("");
    Revision::from_namespace(uri)
}

/// Build a [`Document`] from a parsed XML tree
///
/// Comments and processing instructions preceding the root element are kept. Fails only if the
/// root element is not one of the supported document types.
pub fn read_document(
    doc: &roxmltree::Document,
) -> Result<Document, PositionalError<ParseError>> {
    let root = doc.root_element().into_xml_node();
    let revision = read_revision(&root);
    if revision == Revision::Unknown {
        warn!(
            "unrecognized IP-XACT namespace {:?}, reading as {}",
            root.0.tag_name().namespace().unwrap_or(""),
            Revision::Std22
        );
    }

    let kind = match root.tag_name() {
        "busDefinition" => DocumentKind::BusDefinition(read_bus_definition(&root, revision)),
        "component" => DocumentKind::Component(read_component(&root, revision)),
        "design" => DocumentKind::Design(read_design(&root, revision)),
        other => {
            return Err(ParseError::UnsupportedRoot(other.to_owned())
                .with_byte_pos_range(root.0.range(), doc))
        }
    };

    let mut document = Document::new(revision, kind);
    for node in doc
        .root()
        .children()
        .take_while(|node| !node.is_element())
    {
        if node.is_comment() {
            document
                .top_comments
                .push(node.text().unwrap_or("").to_owned());
        } else if let Some(pi) = node.pi() {
            document
                .processing_instructions
                .push((pi.target.to_owned(), pi.value.unwrap_or("").to_owned()));
        }
    }
    document.extra_namespaces = root
        .declared_namespaces()
        .into_iter()
        .filter(|(prefix, _)| !STANDARD_PREFIXES.contains(&prefix.as_str()))
        .collect();

    debug!(
        "read {} {} ({revision})",
        document.kind.tag(),
        document.vlnv()
    );
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    const STD14_BUS: &str = indoc! {r#"
        <?xml version="1.0"?>
        <!--Commented section-->
        <?xml-stylesheet href="style.css" attribute="value"?>
        <ipxact:busDefinition xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xmlns:ipxact="http://www.accellera.org/XMLSchema/IPXACT/1685-2014" xmlns:kactus2="http://kactus2.cs.tut.fi" xmlns:tuni="http://tuni.fi/ext">
            <ipxact:vendor>TUT</ipxact:vendor>
            <ipxact:library>TestLibrary</ipxact:library>
            <ipxact:name>MinimalBus</ipxact:name>
            <ipxact:version>1.0</ipxact:version>
            <ipxact:directConnection>true</ipxact:directConnection>
            <ipxact:isAddressable>true</ipxact:isAddressable>
        </ipxact:busDefinition>
    "#};

    #[test]
    fn read_document_works() {
        let doc = roxmltree::Document::parse(STD14_BUS).unwrap();
        let document = read_document(&doc).unwrap();

        assert_eq!(document.revision, Revision::Std14);
        assert_eq!(document.top_comments, vec!["Commented section"]);
        assert_eq!(
            document.processing_instructions,
            vec![(
                "xml-stylesheet".to_owned(),
                "href=\"style.css\" attribute=\"value\"".to_owned()
            )]
        );
        assert_eq!(
            document.extra_namespaces,
            vec![("tuni".to_owned(), "http://tuni.fi/ext".to_owned())]
        );
        assert_eq!(document.vlnv().to_string(), "TUT:TestLibrary:MinimalBus:1.0");
        assert!(document.as_bus_definition().is_some());
    }

    #[test]
    fn unknown_root_is_an_error() {
        let text = indoc! {r#"
            <ipxact:catalog xmlns:ipxact="http://www.accellera.org/XMLSchema/IPXACT/1685-2022">
            </ipxact:catalog>
        "#};
        let doc = roxmltree::Document::parse(text).unwrap();
        let err = read_document(&doc).unwrap_err();
        assert!(matches!(err.inner(), ParseError::UnsupportedRoot(name) if name == "catalog"));
        assert_eq!(err.position().to_string(), "1:1..2:18");
    }

    #[test]
    fn unknown_namespace_reads_as_unknown_revision() {
        let text = r#"<spirit:component xmlns:spirit="http://www.spiritconsortium.org/XMLSchema/SPIRIT/1.5"/>"#;
        let doc = roxmltree::Document::parse(text).unwrap();
        let document = read_document(&doc).unwrap();
        assert_eq!(document.revision, Revision::Unknown);
        assert!(document.as_component().is_some());
    }
}
