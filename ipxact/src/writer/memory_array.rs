use super::XmlWriter;
use crate::{
    error::WriteError,
    model::{ArrayHost, Dimension, MemoryArray, Revision},
};

/// Write the array of a memory element or a field
///
/// IP-XACT 2014 has no array wrapper and no stride: only the dimensions are written.
pub fn write_memory_array(
    w: &mut XmlWriter,
    array: Option<&MemoryArray>,
    revision: Revision,
    host: ArrayHost,
) -> Result<(), WriteError> {
    let Some(array) = array else {
        return Ok(());
    };

    if revision.is_std14() {
        return write_dimensions(w, &array.dimensions);
    }

    w.start("ipxact:array")?;
    write_dimensions(w, &array.dimensions)?;
    w.optional_text_element(&format!("ipxact:{}", host.stride_tag()), &array.stride)?;
    w.end("ipxact:array")
}

fn write_dimensions(w: &mut XmlWriter, dimensions: &[Dimension]) -> Result<(), WriteError> {
    for dim in dimensions {
        w.text_element_with_attributes("ipxact:dim", &[("indexVar", &dim.index_var)], &dim.value)?;
    }
    Ok(())
}
