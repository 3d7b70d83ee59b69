use super::{write_name_group, write_vendor_extensions, XmlWriter};
use crate::{
    error::WriteError,
    model::{Parameter, Revision},
};

/// Write an `ipxact:parameter` element
///
/// Attributes are written in alphabetical order, empty ones are left out.
pub fn write_parameter(
    w: &mut XmlWriter,
    parameter: &Parameter,
    revision: Revision,
) -> Result<(), WriteError> {
    w.start_with_attributes(
        "ipxact:parameter",
        &[
            ("maximum", &parameter.maximum),
            ("minimum", &parameter.minimum),
            ("parameterId", &parameter.parameter_id),
            ("prompt", &parameter.prompt),
            ("resolve", &parameter.resolve),
            ("type", &parameter.type_),
        ],
    )?;
    write_name_group(w, &parameter.name_group, revision)?;
    w.text_element("ipxact:value", &parameter.value)?;
    write_vendor_extensions(w, &parameter.vendor_extensions)?;
    w.end("ipxact:parameter")
}

/// Write `ipxact:parameters` unless `parameters` is empty
pub fn write_parameters(
    w: &mut XmlWriter,
    parameters: &[Parameter],
    revision: Revision,
) -> Result<(), WriteError> {
    if parameters.is_empty() {
        return Ok(());
    }
    w.start("ipxact:parameters")?;
    for parameter in parameters {
        write_parameter(w, parameter, revision)?;
    }
    w.end("ipxact:parameters")
}

#[test]
fn write_parameter_works() {
    use crate::writer::test_util::write_to_string;

    let mut parameter = Parameter::new("param1", "5").with_id("id1");
    parameter.type_ = "shortint".to_owned();
    parameter.resolve = "user".to_owned();
    parameter.prompt = "Parm 1".to_owned();

    assert_eq!(
        write_to_string(|w| write_parameters(w, &[parameter], Revision::Std22)),
        "<ipxact:parameters>\
         <ipxact:parameter parameterId=\"id1\" prompt=\"Parm 1\" resolve=\"user\" type=\"shortint\">\
         <ipxact:name>param1</ipxact:name>\
         <ipxact:value>5</ipxact:value>\
         </ipxact:parameter>\
         </ipxact:parameters>"
    );
    assert_eq!(
        write_to_string(|w| write_parameters(w, &[], Revision::Std22)),
        ""
    );
}
