use log::debug;

use super::{write_bus_definition, write_component, write_design, XmlWriter};
use crate::{
    error::WriteError,
    model::{Document, DocumentKind, KACTUS2_NAMESPACE, XSI_NAMESPACE},
};

/// Indentation of nested elements in written documents
const INDENT: usize = 4;

/// Serialize `document` into XML text
///
/// The XML declaration is followed by the top comments and processing instructions of the
/// document, then the root element with the namespace declarations of the document revision.
pub fn write_document(document: &Document) -> Result<String, WriteError> {
    let mut w = XmlWriter::with_indent(INDENT);
    write_document_into(&mut w, document)?;
    let mut text = w.into_string()?;
    text.push('\n');
    Ok(text)
}

/// Write `document` into an existing writer
pub fn write_document_into(w: &mut XmlWriter, document: &Document) -> Result<(), WriteError> {
    let revision = document.revision;
    debug!(
        "writing {} {} ({revision})",
        document.kind.tag(),
        document.vlnv()
    );

    w.declaration()?;
    for comment in &document.top_comments {
        w.comment(comment)?;
    }
    for (target, data) in &document.processing_instructions {
        w.processing_instruction(target, data)?;
    }

    let root = format!("ipxact:{}", document.kind.tag());
    let namespace = revision.namespace();
    let schema_location = revision.schema_location();
    let mut attributes = vec![
        ("xmlns:xsi".to_owned(), XSI_NAMESPACE),
        ("xmlns:ipxact".to_owned(), namespace.as_str()),
        ("xmlns:kactus2".to_owned(), KACTUS2_NAMESPACE),
    ];
    attributes.extend(
        document
            .extra_namespaces
            .iter()
            .map(|(prefix, uri)| (xmlns_attribute(prefix), uri.as_str())),
    );
    attributes.push(("xsi:schemaLocation".to_owned(), schema_location.as_str()));

    w.start_with_attributes(&root, &attributes)?;
    match &document.kind {
        DocumentKind::BusDefinition(bus) => write_bus_definition(w, bus, revision)?,
        DocumentKind::Component(component) => write_component(w, component, revision)?,
        DocumentKind::Design(design) => write_design(w, design, revision)?,
    }
    w.end(&root)
}

/// Attribute declaring the namespace `prefix`. The default namespace has an empty prefix.
fn xmlns_attribute(prefix: &str) -> String {
    if prefix.is_empty() {
        "xmlns".to_owned()
    } else {
        format!("xmlns:{prefix}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BusDefinition, Revision, VendorExtension, Vlnv};
    use indoc::indoc;

    #[test]
    fn write_document_works() {
        let mut bus = BusDefinition::new(Vlnv::new("TUT", "TestLibrary", "MinimalBus", "1.0"));
        bus.direct_connection = true;
        bus.is_addressable = true;
        bus.vendor_extensions
            .push(VendorExtension::with_value("kactus2:version", "3.13.0"));

        let mut document = Document::from(bus);
        document.revision = Revision::Std14;
        document.top_comments.push("Commented section".to_owned());
        document.processing_instructions.push((
            "xml-stylesheet".to_owned(),
            "href=\"style.css\"".to_owned(),
        ));

        let expected = indoc! {r#"
            <?xml version="1.0"?>
            <!--Commented section-->
            <?xml-stylesheet href="style.css"?>
            <ipxact:busDefinition xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xmlns:ipxact="http://www.accellera.org/XMLSchema/IPXACT/1685-2014" xmlns:kactus2="http://kactus2.cs.tut.fi" xsi:schemaLocation="http://www.accellera.org/XMLSchema/IPXACT/1685-2014/ http://www.accellera.org/XMLSchema/IPXACT/1685-2014/index.xsd">
                <ipxact:vendor>TUT</ipxact:vendor>
                <ipxact:library>TestLibrary</ipxact:library>
                <ipxact:name>MinimalBus</ipxact:name>
                <ipxact:version>1.0</ipxact:version>
                <ipxact:directConnection>true</ipxact:directConnection>
                <ipxact:isAddressable>true</ipxact:isAddressable>
                <ipxact:vendorExtensions>
                    <kactus2:version>3.13.0</kactus2:version>
                </ipxact:vendorExtensions>
            </ipxact:busDefinition>
        "#};
        assert_eq!(write_document(&document).unwrap(), expected);
    }

    #[test]
    fn extra_namespaces_are_declared() {
        let mut document = Document::from(BusDefinition::new(Vlnv::new("v", "l", "n", "1")));
        document
            .extra_namespaces
            .push(("tuni".to_owned(), "http://tuni.fi/ext".to_owned()));

        let text = write_document(&document).unwrap();
        assert!(text.contains(
            "xmlns:kactus2=\"http://kactus2.cs.tut.fi\" xmlns:tuni=\"http://tuni.fi/ext\" xsi:schemaLocation="
        ));
        assert!(text.contains("1685-2022"));
    }

    #[test]
    fn default_namespace_survives_rewrite() {
        let text = indoc! {r#"
            <ipxact:busDefinition xmlns="http://example.com/default" xmlns:ipxact="http://www.accellera.org/XMLSchema/IPXACT/1685-2022">
                <ipxact:vendor>v</ipxact:vendor>
                <ipxact:library>l</ipxact:library>
                <ipxact:name>n</ipxact:name>
                <ipxact:version>1</ipxact:version>
            </ipxact:busDefinition>
        "#};
        let document = crate::parse_document(text).unwrap();
        assert_eq!(
            document.extra_namespaces,
            vec![(String::new(), "http://example.com/default".to_owned())]
        );

        let written = write_document(&document).unwrap();
        assert!(written.contains(r#" xmlns="http://example.com/default" "#));
        let reread = crate::parse_document(&written).unwrap();
        assert_eq!(reread, document);
    }
}
