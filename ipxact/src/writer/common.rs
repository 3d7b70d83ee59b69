use super::XmlWriter;
use crate::{
    error::WriteError,
    model::{
        BooleanValue, ExtensionContent, NameGroup, Revision, VendorExtension, VendorExtensions, Vlnv,
    },
};

/// Write `name`, `displayName`, `shortDescription` and `description`
///
/// The name is always written. `shortDescription` is omitted from IP-XACT 2014 documents.
pub fn write_name_group(
    w: &mut XmlWriter,
    name_group: &NameGroup,
    revision: Revision,
) -> Result<(), WriteError> {
    w.text_element("ipxact:name", &name_group.name)?;
    w.optional_text_element("ipxact:displayName", &name_group.display_name)?;
    if !revision.is_std14() {
        w.optional_text_element("ipxact:shortDescription", &name_group.short_description)?;
    }
    w.optional_text_element("ipxact:description", &name_group.description)
}

pub fn write_is_present(w: &mut XmlWriter, is_present: &str) -> Result<(), WriteError> {
    w.optional_text_element("ipxact:isPresent", is_present)
}

/// Write `ipxact:vendorExtensions` unless there are none
pub fn write_vendor_extensions(
    w: &mut XmlWriter,
    extensions: &VendorExtensions,
) -> Result<(), WriteError> {
    if extensions.is_empty() {
        return Ok(());
    }
    w.start("ipxact:vendorExtensions")?;
    for ext in extensions {
        write_vendor_extension(w, ext)?;
    }
    w.end("ipxact:vendorExtensions")
}

/// Write an opaque vendor extension as it was read
pub fn write_vendor_extension(w: &mut XmlWriter, ext: &VendorExtension) -> Result<(), WriteError> {
    if ext.content.is_empty() {
        return w.empty_with_exact_attributes(&ext.name, &ext.attributes);
    }
    w.start_with_exact_attributes(&ext.name, &ext.attributes)?;
    for content in &ext.content {
        match content {
            ExtensionContent::Text(text) => w.text(text)?,
            ExtensionContent::Element(child) => write_vendor_extension(w, child)?,
        }
    }
    w.end(&ext.name)
}

/// Write the `vendor`, `library`, `name` and `version` elements of a document
pub fn write_vlnv_elements(w: &mut XmlWriter, vlnv: &Vlnv) -> Result<(), WriteError> {
    for (tag, value) in vlnv.parts() {
        w.text_element(&format!("ipxact:{tag}"), value)?;
    }
    Ok(())
}

/// Write `vlnv` as attributes of an empty element `tag`, e.g. `ipxact:extends`
pub fn write_vlnv_attributes(w: &mut XmlWriter, tag: &str, vlnv: &Vlnv) -> Result<(), WriteError> {
    w.empty_with_attributes(tag, &vlnv.parts())
}

/// Write `<tag>true</tag>` or `<tag>false</tag>`. Nothing is written for an unspecified value.
pub fn write_boolean(w: &mut XmlWriter, tag: &str, value: BooleanValue) -> Result<(), WriteError> {
    w.optional_text_element(tag, &value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writer::test_util::write_to_string;

    #[test]
    fn write_name_group_works() {
        let mut name_group = NameGroup::new("testRegion");
        name_group.short_description = "brief".to_owned();
        name_group.description = "text".to_owned();

        assert_eq!(
            write_to_string(|w| write_name_group(w, &name_group, Revision::Std22)),
            "<ipxact:name>testRegion</ipxact:name>\
             <ipxact:shortDescription>brief</ipxact:shortDescription>\
             <ipxact:description>text</ipxact:description>"
        );
        assert_eq!(
            write_to_string(|w| write_name_group(w, &name_group, Revision::Std14)),
            "<ipxact:name>testRegion</ipxact:name><ipxact:description>text</ipxact:description>"
        );
    }

    #[test]
    fn write_vendor_extensions_works() {
        let mut outer = VendorExtension::new("kactus2:nested");
        outer
            .attributes
            .push(("kactus2:kind".to_owned(), "outer".to_owned()));
        outer.push_child(VendorExtension::new("kactus2:inner"));

        let mut extensions = VendorExtensions::default();
        extensions.push(VendorExtension::with_value("kactus2:version", "3.13.0"));
        extensions.push(outer);

        assert_eq!(
            write_to_string(|w| write_vendor_extensions(w, &extensions)),
            "<ipxact:vendorExtensions>\
             <kactus2:version>3.13.0</kactus2:version>\
             <kactus2:nested kactus2:kind=\"outer\"><kactus2:inner/></kactus2:nested>\
             </ipxact:vendorExtensions>"
        );
        assert_eq!(
            write_to_string(|w| write_vendor_extensions(w, &VendorExtensions::default())),
            ""
        );
    }

    #[test]
    fn write_vendor_extension_keeps_mixed_content() {
        let xml = r#"<kactus2:note kactus2:flag="">head<kactus2:b/>tail</kactus2:note>"#;
        let ext = crate::reader::test_util::read_fragment(xml, crate::reader::read_vendor_extension);

        let written = write_to_string(|w| write_vendor_extension(w, &ext));
        assert!(written.contains(r#"kactus2:flag="">head<kactus2:b/>tail</kactus2:note>"#));
        let doc = roxmltree::Document::parse(&written).unwrap();
        let reread = crate::reader::read_vendor_extension(&crate::reader::XmlNode(doc.root_element()));
        assert_eq!(reread, ext);
    }

    #[test]
    fn write_boolean_skips_unspecified() {
        assert_eq!(
            write_to_string(|w| write_boolean(w, "ipxact:broadcast", BooleanValue::Unspecified)),
            ""
        );
        assert_eq!(
            write_to_string(|w| write_boolean(w, "ipxact:broadcast", BooleanValue::False)),
            "<ipxact:broadcast>false</ipxact:broadcast>"
        );
    }
}
