use super::{write_name_group, write_vendor_extensions, XmlWriter};
use crate::{
    error::WriteError,
    model::{Packet, PacketField, Revision},
};

/// Write an `ipxact:packet` element
pub fn write_packet(w: &mut XmlWriter, packet: &Packet, revision: Revision) -> Result<(), WriteError> {
    w.start("ipxact:packet")?;
    write_name_group(w, &packet.name_group, revision)?;
    if !packet.fields.is_empty() {
        w.start("ipxact:packetFields")?;
        for field in &packet.fields {
            write_packet_field(w, field, revision)?;
        }
        w.end("ipxact:packetFields")?;
    }
    write_vendor_extensions(w, &packet.vendor_extensions)?;
    w.end("ipxact:packet")
}

pub fn write_packet_field(
    w: &mut XmlWriter,
    field: &PacketField,
    revision: Revision,
) -> Result<(), WriteError> {
    w.start("ipxact:packetField")?;
    write_name_group(w, &field.name_group, revision)?;
    w.text_element("ipxact:width", &field.width)?;
    w.optional_text_element("ipxact:value", &field.value)?;
    w.optional_text_element("ipxact:endianness", field.endianness.as_ref())?;
    write_vendor_extensions(w, &field.vendor_extensions)?;
    w.end("ipxact:packetField")
}

#[test]
fn write_packet_works() {
    use crate::{model::Endianness, writer::test_util::write_to_string};

    let mut packet = Packet::new("testPacket");
    let mut header = PacketField::new("header", "8");
    header.value = "'hA5".to_owned();
    header.endianness = Endianness::Little;
    packet.fields.push(header);
    packet.fields.push(PacketField::new("payload", "16"));

    assert_eq!(
        write_to_string(|w| write_packet(w, &packet, Revision::Std22)),
        "<ipxact:packet>\
         <ipxact:name>testPacket</ipxact:name>\
         <ipxact:packetFields>\
         <ipxact:packetField>\
         <ipxact:name>header</ipxact:name>\
         <ipxact:width>8</ipxact:width>\
         <ipxact:value>'hA5</ipxact:value>\
         <ipxact:endianness>little</ipxact:endianness>\
         </ipxact:packetField>\
         <ipxact:packetField>\
         <ipxact:name>payload</ipxact:name>\
         <ipxact:width>16</ipxact:width>\
         </ipxact:packetField>\
         </ipxact:packetFields>\
         </ipxact:packet>"
    );
}

#[test]
fn packet_survives_a_round_trip() {
    use crate::{
        model::{Endianness, VendorExtension},
        reader::{read_packet, test_util::read_fragment},
        writer::test_util::write_to_string,
    };

    let mut packet = Packet::new("testPacket");
    packet.name_group.description = "header and payload".to_owned();
    let mut header = PacketField::new("header", "8");
    header.value = "'hA5".to_owned();
    header.endianness = Endianness::Big;
    header
        .vendor_extensions
        .push(VendorExtension::with_value("kactus2:note", "sync"));
    packet.fields.push(header);
    packet.fields.push(PacketField::new("payload", "16"));

    for revision in [Revision::Std14, Revision::Std22] {
        let text = write_to_string(|w| write_packet(w, &packet, revision));
        assert_eq!(
            read_fragment(&text, |node| read_packet(node, revision)),
            packet,
            "{revision}"
        );
    }
}
