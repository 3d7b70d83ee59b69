use super::{read_name_group, read_vendor_extensions, XmlNode};
use crate::model::{Parameter, Revision};

/// Read an `ipxact:parameter` element
pub fn read_parameter(node: &XmlNode, revision: Revision) -> Parameter {
    Parameter {
        name_group: read_name_group(node, revision),
        parameter_id: node.attribute("parameterId").to_owned(),
        prompt: node.attribute("prompt").to_owned(),
        type_: node.attribute("type").to_owned(),
        resolve: node.attribute("resolve").to_owned(),
        minimum: node.attribute("minimum").to_owned(),
        maximum: node.attribute("maximum").to_owned(),
        value: node.find_text_by_tag_name("value"),
        vendor_extensions: read_vendor_extensions(node),
    }
}

/// Read the parameters listed in the `parameters` child of `node`
pub fn read_parameters(node: &XmlNode, revision: Revision) -> Vec<Parameter> {
    node.grandchildren("parameters", "parameter")
        .iter()
        .map(|param| read_parameter(param, revision))
        .collect()
}

#[test]
fn read_parameters_works() {
    use crate::reader::test_util::read_fragment;

    let xml = indoc::indoc! {r#"
        <ipxact:cpu>
            <ipxact:parameters>
                <ipxact:parameter parameterId="id1" prompt="Parm 1" type="shortint" resolve="user">
                    <ipxact:name>param1</ipxact:name>
                    <ipxact:description>First generator parameter.</ipxact:description>
                    <ipxact:value>5</ipxact:value>
                </ipxact:parameter>
                <ipxact:parameter parameterId="id2" minimum="0" maximum="2000">
                    <ipxact:name>param2</ipxact:name>
                    <ipxact:value>1337</ipxact:value>
                </ipxact:parameter>
            </ipxact:parameters>
        </ipxact:cpu>
    "#};

    let params = read_fragment(xml, |node| read_parameters(node, Revision::Std22));
    assert_eq!(params.len(), 2);
    assert_eq!(params[0].name_group.name, "param1");
    assert_eq!(params[0].name_group.description, "First generator parameter.");
    assert_eq!(params[0].parameter_id, "id1");
    assert_eq!(params[0].prompt, "Parm 1");
    assert_eq!(params[0].type_, "shortint");
    assert_eq!(params[0].resolve, "user");
    assert_eq!(params[0].value, "5");
    assert_eq!(params[1].minimum, "0");
    assert_eq!(params[1].maximum, "2000");
    assert_eq!(params[1].value, "1337");
}
