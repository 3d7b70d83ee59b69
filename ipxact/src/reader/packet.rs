use super::{read_name_group, read_vendor_extensions, XmlNode};
use crate::model::{Packet, PacketField, Revision};

/// Read an `ipxact:packet` element
pub fn read_packet(node: &XmlNode, revision: Revision) -> Packet {
    Packet {
        name_group: read_name_group(node, revision),
        fields: node
            .grandchildren("packetFields", "packetField")
            .iter()
            .map(|field| read_packet_field(field, revision))
            .collect(),
        vendor_extensions: read_vendor_extensions(node),
    }
}

/// Read an `ipxact:packetField` element
///
/// Unknown endianness values are read as unspecified.
pub fn read_packet_field(node: &XmlNode, revision: Revision) -> PacketField {
    PacketField {
        name_group: read_name_group(node, revision),
        width: node.find_text_by_tag_name("width"),
        value: node.find_text_by_tag_name("value"),
        endianness: node
            .find_text_by_tag_name("endianness")
            .trim()
            .parse()
            .unwrap_or_default(),
        vendor_extensions: read_vendor_extensions(node),
    }
}

#[test]
fn read_packet_works() {
    use crate::{model::Endianness, reader::test_util::read_fragment};

    let xml = indoc::indoc! {r#"
        <ipxact:packet>
            <ipxact:name>testPacket</ipxact:name>
            <ipxact:displayName>packet</ipxact:displayName>
            <ipxact:packetFields>
                <ipxact:packetField>
                    <ipxact:name>header</ipxact:name>
                    <ipxact:width>8</ipxact:width>
                    <ipxact:value>'hA5</ipxact:value>
                    <ipxact:endianness>big</ipxact:endianness>
                </ipxact:packetField>
                <ipxact:packetField>
                    <ipxact:name>payload</ipxact:name>
                    <ipxact:width>id_width*2</ipxact:width>
                    <ipxact:endianness>middle</ipxact:endianness>
                </ipxact:packetField>
            </ipxact:packetFields>
            <ipxact:vendorExtensions>
                <kactus2:note>test</kactus2:note>
            </ipxact:vendorExtensions>
        </ipxact:packet>
    "#};

    let packet = read_fragment(xml, |node| read_packet(node, Revision::Std22));
    assert_eq!(packet.name_group.name, "testPacket");
    assert_eq!(packet.name_group.display_name, "packet");
    assert_eq!(packet.fields.len(), 2);
    assert_eq!(packet.fields[0].width, "8");
    assert_eq!(packet.fields[0].value, "'hA5");
    assert_eq!(packet.fields[0].endianness, Endianness::Big);
    assert_eq!(packet.fields[1].width, "id_width*2");
    assert_eq!(packet.fields[1].endianness, Endianness::Unspecified);
    assert_eq!(packet.vendor_extensions.len(), 1);
}
