use super::{read_is_present, read_vendor_extensions, XmlNode};
use crate::model::{InterfaceRef, Revision};

/// Name of the attribute holding the instance name of an interface reference
pub(crate) fn component_ref_attribute(revision: Revision) -> &'static str {
    if revision.is_std14() {
        "componentRef"
    } else {
        "componentInstanceRef"
    }
}

/// Read an interface reference of a design connection, e.g. `ipxact:activeInterface`
pub fn read_interface_ref(node: &XmlNode, revision: Revision) -> InterfaceRef {
    InterfaceRef {
        component_ref: node.attribute(component_ref_attribute(revision)).to_owned(),
        bus_ref: node.attribute("busRef").to_owned(),
        is_present: read_is_present(node),
        vendor_extensions: read_vendor_extensions(node),
    }
}

#[test]
fn read_interface_ref_works() {
    use crate::reader::test_util::read_fragment;

    let xml = indoc::indoc! {r#"
        <ipxact:activeInterface componentRef="instance" busRef="bus">
            <ipxact:isPresent>1</ipxact:isPresent>
        </ipxact:activeInterface>
    "#};
    let std14 = read_fragment(xml, |node| read_interface_ref(node, Revision::Std14));
    assert_eq!(std14.component_ref, "instance");
    assert_eq!(std14.bus_ref, "bus");
    assert_eq!(std14.is_present, "1");

    let xml = r#"<ipxact:activeInterface componentInstanceRef="instance" busRef="bus"/>"#;
    let std22 = read_fragment(xml, |node| read_interface_ref(node, Revision::Std22));
    assert_eq!(std22, InterfaceRef::new("instance", "bus"));
}
