use super::{write_is_present, write_vendor_extensions, XmlWriter};
use crate::{
    error::WriteError,
    model::{InterfaceRef, Revision},
    reader::component_ref_attribute,
};

/// Write an interface reference of a design connection as element `tag`, e.g.
/// `ipxact:activeInterface`
///
/// The reference is written as an empty element unless it has a presence expression or vendor
/// extensions.
pub fn write_interface_ref(
    w: &mut XmlWriter,
    tag: &str,
    interface: &InterfaceRef,
    revision: Revision,
) -> Result<(), WriteError> {
    let attributes = [
        (
            component_ref_attribute(revision),
            interface.component_ref.as_str(),
        ),
        ("busRef", interface.bus_ref.as_str()),
    ];
    if interface.is_present.is_empty() && interface.vendor_extensions.is_empty() {
        return w.empty_with_attributes(tag, &attributes);
    }

    w.start_with_attributes(tag, &attributes)?;
    write_is_present(w, &interface.is_present)?;
    write_vendor_extensions(w, &interface.vendor_extensions)?;
    w.end(tag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writer::test_util::write_to_string;

    #[test]
    fn write_interface_ref_works() {
        let interface = InterfaceRef::new("instance", "bus");
        assert_eq!(
            write_to_string(|w| write_interface_ref(
                w,
                "ipxact:activeInterface",
                &interface,
                Revision::Std22
            )),
            "<ipxact:activeInterface componentInstanceRef=\"instance\" busRef=\"bus\"/>"
        );
    }

    #[test]
    fn interface_ref_survives_a_round_trip() {
        use crate::reader::{read_interface_ref, test_util::read_fragment};

        let mut interface = InterfaceRef::new("instance", "bus");
        interface.is_present = "1".to_owned();

        let text = write_to_string(|w| {
            write_interface_ref(w, "ipxact:activeInterface", &interface, Revision::Std14)
        });
        assert!(text.contains("componentRef=\"instance\""));
        let read = read_fragment(&text, |node| read_interface_ref(node, Revision::Std14));
        assert_eq!(read, interface);
    }
}
