use log::debug;

use super::{
    component::write_list, write_interface_ref, write_is_present, write_name_group,
    write_parameters, write_vendor_extensions, write_vlnv_attributes, write_vlnv_elements,
    XmlWriter,
};
use crate::{
    error::WriteError,
    model::{ComponentInstance, Design, Interconnection, Revision},
};

/// Write the content of an `ipxact:design` root element
pub fn write_design(
    w: &mut XmlWriter,
    design: &Design,
    revision: Revision,
) -> Result<(), WriteError> {
    debug!("writing design {}", design.vlnv);
    write_vlnv_elements(w, &design.vlnv)?;
    if !revision.is_std14() {
        w.optional_text_element("ipxact:displayName", &design.display_name)?;
        w.optional_text_element("ipxact:shortDescription", &design.short_description)?;
        w.optional_text_element("ipxact:description", &design.description)?;
    }
    write_list(
        w,
        "ipxact:componentInstances",
        &design.component_instances,
        |w, instance| write_component_instance(w, instance, revision),
    )?;
    write_list(
        w,
        "ipxact:interconnections",
        &design.interconnections,
        |w, connection| write_interconnection(w, connection, revision),
    )?;
    if revision.is_std14() {
        w.optional_text_element("ipxact:description", &design.description)?;
    }
    write_parameters(w, &design.parameters, revision)?;
    write_vendor_extensions(w, &design.vendor_extensions)
}

pub fn write_component_instance(
    w: &mut XmlWriter,
    instance: &ComponentInstance,
    revision: Revision,
) -> Result<(), WriteError> {
    let name_group = &instance.name_group;
    w.start("ipxact:componentInstance")?;
    w.text_element("ipxact:instanceName", &name_group.name)?;
    w.optional_text_element("ipxact:displayName", &name_group.display_name)?;
    if !revision.is_std14() {
        w.optional_text_element("ipxact:shortDescription", &name_group.short_description)?;
    }
    w.optional_text_element("ipxact:description", &name_group.description)?;
    write_is_present(w, &instance.is_present)?;
    write_vlnv_attributes(w, "ipxact:componentRef", &instance.component_ref)?;
    write_vendor_extensions(w, &instance.vendor_extensions)?;
    w.end("ipxact:componentInstance")
}

pub fn write_interconnection(
    w: &mut XmlWriter,
    connection: &Interconnection,
    revision: Revision,
) -> Result<(), WriteError> {
    w.start("ipxact:interconnection")?;
    write_name_group(w, &connection.name_group, revision)?;
    write_is_present(w, &connection.is_present)?;
    for interface in &connection.active_interfaces {
        write_interface_ref(w, "ipxact:activeInterface", interface, revision)?;
    }
    write_vendor_extensions(w, &connection.vendor_extensions)?;
    w.end("ipxact:interconnection")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        model::{InterfaceRef, Vlnv},
        reader::{read_design, read_interconnection, test_util::read_fragment},
        writer::test_util::write_to_string,
    };

    #[test]
    fn write_interconnection_works() {
        let connection = Interconnection::new("apb_0")
            .with_interface(InterfaceRef::new("cpu_0", "apb_m"))
            .with_interface(InterfaceRef::new("uart_0", "apb"));

        let std14 = write_to_string(|w| write_interconnection(w, &connection, Revision::Std14));
        assert_eq!(
            std14,
            "<ipxact:interconnection>\
             <ipxact:name>apb_0</ipxact:name>\
             <ipxact:activeInterface componentRef=\"cpu_0\" busRef=\"apb_m\"/>\
             <ipxact:activeInterface componentRef=\"uart_0\" busRef=\"apb\"/>\
             </ipxact:interconnection>"
        );
        assert_eq!(
            read_fragment(&std14, |node| read_interconnection(node, Revision::Std14)),
            connection
        );

        let std22 = write_to_string(|w| write_interconnection(w, &connection, Revision::Std22));
        assert!(std22.contains("componentInstanceRef=\"uart_0\""));
    }

    #[test]
    fn design_survives_a_round_trip() {
        let mut design = Design::new(Vlnv::new("tuni.fi", "soc", "top.design", "1.0"));
        design.description = "top level".to_owned();
        let mut instance =
            ComponentInstance::new("uart_0", Vlnv::new("tuni.fi", "ip", "uart", "1.0"));
        instance.name_group.display_name = "UART".to_owned();
        design.component_instances.push(instance);
        design.interconnections.push(
            Interconnection::new("apb_0")
                .with_interface(InterfaceRef::new("cpu_0", "apb_m"))
                .with_interface(InterfaceRef::new("uart_0", "apb")),
        );

        for revision in [Revision::Std14, Revision::Std22] {
            let text = write_to_string(|w| {
                w.start("ipxact:design")?;
                write_design(w, &design, revision)?;
                w.end("ipxact:design")
            });
            assert_eq!(
                read_fragment(&text, |node| read_design(node, revision)),
                design,
                "{revision}"
            );
        }
    }
}
