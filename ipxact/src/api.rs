//! Exposes functionality supported by this crate

use std::path;

use fs_err as fs;
use log::{debug, info};

use crate::{
    error::{Error, ParseError, PositionalError},
    expression::IpxactParser,
    library::DocumentResolver,
    model::{Document, DocumentKind, Parameter},
    parameter_finder::ListParameterFinder,
    reader,
    validator::{BusDefinitionValidator, ComponentValidator, DesignValidator, Validator},
    writer,
};

pub use crate::writer::write_document;

/// Parse an IP-XACT document from `text`
pub fn parse_document(text: &str) -> Result<Document, PositionalError<ParseError>> {
    let doc = roxmltree::Document::parse(text).map_err(ParseError::from_xml)?;
    reader::read_document(&doc)
}

/// Read the IP-XACT document at `path`
pub fn read_document(path: &path::Path) -> Result<Document, Error> {
    let text = fs::read_to_string(path)?;
    let document =
        parse_document(&text).map_err(|err| err.with_fname(path.display().to_string()))?;
    debug!("read {} from {}", document.vlnv(), path.display());
    Ok(document)
}

/// Write `document` into the file at `path`, replacing its contents
pub fn save_document(document: &Document, path: &path::Path) -> Result<(), Error> {
    let text = writer::write_document(document)?;
    fs::write(path, text)?;
    info!("Wrote {} to {}", document.vlnv(), path.display());
    Ok(())
}

fn document_parameters(document: &Document) -> &[Parameter] {
    match &document.kind {
        DocumentKind::BusDefinition(bus) => &bus.parameters,
        DocumentKind::Component(component) => &component.parameters,
        DocumentKind::Design(design) => &design.parameters,
    }
}

/// Returns every problem found in `document`
///
/// Expressions are evaluated against the top-level parameters of the document. Documents the
/// document refers to are looked up through `resolver`.
pub fn find_errors(document: &Document, resolver: &dyn DocumentResolver) -> Vec<String> {
    let finder = ListParameterFinder::new(document_parameters(document));
    let parser = IpxactParser::new(&finder);
    let context = format!("{} {}", document.kind.tag(), document.vlnv());

    let mut errors = vec![];
    match &document.kind {
        DocumentKind::BusDefinition(bus) => {
            BusDefinitionValidator::new(&parser, resolver).find_errors_in(&mut errors, bus, &context)
        }
        DocumentKind::Component(component) => {
            ComponentValidator::new(&parser, document.revision).find_errors_in(
                &mut errors,
                component,
                &context,
            )
        }
        DocumentKind::Design(design) => {
            DesignValidator::new(&parser).find_errors_in(&mut errors, design, &context)
        }
    }
    info!(
        "Found {} error(s) in {} {}",
        errors.len(),
        document.kind.tag(),
        document.vlnv()
    );
    errors
}

/// Returns true if `document` has no problems, see [`find_errors`]
pub fn validate(document: &Document, resolver: &dyn DocumentResolver) -> bool {
    let finder = ListParameterFinder::new(document_parameters(document));
    let parser = IpxactParser::new(&finder);
    match &document.kind {
        DocumentKind::BusDefinition(bus) => {
            BusDefinitionValidator::new(&parser, resolver).validate(bus)
        }
        DocumentKind::Component(component) => {
            ComponentValidator::new(&parser, document.revision).validate(component)
        }
        DocumentKind::Design(design) => DesignValidator::new(&parser).validate(design),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    const BUS: &str = indoc! {r#"
        <?xml version="1.0" encoding="UTF-8"?>
        <ipxact:busDefinition xmlns:ipxact="http://www.accellera.org/XMLSchema/IPXACT/1685-2022">
            <ipxact:vendor>tuni.fi</ipxact:vendor>
            <ipxact:library>interface</ipxact:library>
            <ipxact:name>apb</ipxact:name>
            <ipxact:version>1.0</ipxact:version>
            <ipxact:directConnection>true</ipxact:directConnection>
            <ipxact:isAddressable>true</ipxact:isAddressable>
            <ipxact:maxInitiators>initiators</ipxact:maxInitiators>
            <ipxact:parameters>
                <ipxact:parameter parameterId="initiators" resolve="user" type="int">
                    <ipxact:name>initiatorCount</ipxact:name>
                    <ipxact:value>2</ipxact:value>
                </ipxact:parameter>
            </ipxact:parameters>
        </ipxact:busDefinition>
    "#};

    #[test]
    fn expressions_see_document_parameters() {
        let document = parse_document(BUS).unwrap();
        assert!(validate(&document, &()));
        assert!(find_errors(&document, &()).is_empty());
    }

    #[test]
    fn find_errors_reports_unknown_references() {
        let text = BUS.replace(">initiators<", ">unknownId<");
        let document = parse_document(&text).unwrap();
        assert!(!validate(&document, &()));
        assert_eq!(
            find_errors(&document, &()),
            vec![
                "Invalid maximum number of initiators 'unknownId' set for bus definition \
                 tuni.fi:interface:apb:1.0."
            ]
        );
    }

    #[test]
    fn malformed_xml_is_positional_error() {
        let err = parse_document("<ipxact:component>").unwrap_err();
        assert!(matches!(err.inner(), ParseError::Xml(_)));
    }

    #[test]
    fn design_documents_are_read_and_validated() {
        let text = indoc! {r#"
            <ipxact:design xmlns:ipxact="http://www.accellera.org/XMLSchema/IPXACT/1685-2014">
                <ipxact:vendor>tuni.fi</ipxact:vendor>
                <ipxact:library>soc</ipxact:library>
                <ipxact:name>top.design</ipxact:name>
                <ipxact:version>1.0</ipxact:version>
                <ipxact:componentInstances>
                    <ipxact:componentInstance>
                        <ipxact:instanceName>uart_0</ipxact:instanceName>
                        <ipxact:componentRef vendor="tuni.fi" library="ip" name="uart" version="1.0"/>
                    </ipxact:componentInstance>
                </ipxact:componentInstances>
                <ipxact:interconnections>
                    <ipxact:interconnection>
                        <ipxact:name>apb_0</ipxact:name>
                        <ipxact:activeInterface componentRef="uart_0" busRef="apb"/>
                        <ipxact:activeInterface componentRef="cpu_0" busRef="apb_m"/>
                    </ipxact:interconnection>
                </ipxact:interconnections>
            </ipxact:design>
        "#};

        let document = parse_document(text).unwrap();
        assert!(document.as_design().is_some());
        assert!(!validate(&document, &()));
        assert_eq!(
            find_errors(&document, &()),
            vec![
                "Component instance cpu_0 referenced in interconnection apb_0 does not exist \
                 within design tuni.fi:soc:top.design:1.0."
            ]
        );
    }
}
