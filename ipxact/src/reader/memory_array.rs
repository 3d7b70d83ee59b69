use super::XmlNode;
use crate::model::{ArrayHost, Dimension, MemoryArray, Revision};

/// Read the array of the element `node`
///
/// IP-XACT 2022 wraps dimensions and stride in `ipxact:array`, while IP-XACT 2014 lists bare
/// `ipxact:dim` elements directly under the element and has no stride. Returns `None` when the
/// element is not an array.
pub fn read_memory_array(node: &XmlNode, revision: Revision, host: ArrayHost) -> Option<MemoryArray> {
    if revision.is_std14() {
        let dimensions = read_dimensions(node);
        return (!dimensions.is_empty()).then(|| MemoryArray {
            dimensions,
            stride: String::new(),
        });
    }

    let array = node.find_child("array")?;
    Some(MemoryArray {
        dimensions: read_dimensions(&array),
        stride: array.find_text_by_tag_name(host.stride_tag()),
    })
}

fn read_dimensions(node: &XmlNode) -> Vec<Dimension> {
    node.children_with_tag_name("dim")
        .iter()
        .map(|dim| Dimension {
            value: dim.text().to_owned(),
            index_var: dim.attribute("indexVar").to_owned(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::test_util::read_fragment;
    use indoc::indoc;

    #[test]
    fn read_memory_array_works() {
        let xml = indoc! {r#"
            <ipxact:field>
                <ipxact:array>
                    <ipxact:dim indexVar="i">4</ipxact:dim>
                    <ipxact:dim>2+2</ipxact:dim>
                    <ipxact:bitStride>8</ipxact:bitStride>
                </ipxact:array>
            </ipxact:field>
        "#};

        let array = read_fragment(xml, |node| {
            read_memory_array(node, Revision::Std22, ArrayHost::Field)
        })
        .expect("array was not read");
        assert_eq!(
            array.dimensions,
            vec![
                Dimension {
                    value: "4".to_owned(),
                    index_var: "i".to_owned()
                },
                Dimension::new("2+2"),
            ]
        );
        assert_eq!(array.stride, "8");
    }

    #[test]
    fn read_memory_array_std14_uses_bare_dimensions() {
        let xml = indoc! {r#"
            <ipxact:register>
                <ipxact:dim>8</ipxact:dim>
            </ipxact:register>
        "#};

        let array = read_fragment(xml, |node| {
            read_memory_array(node, Revision::Std14, ArrayHost::Memory)
        });
        assert_eq!(
            array,
            Some(MemoryArray {
                dimensions: vec![Dimension::new("8")],
                stride: String::new(),
            })
        );

        let no_array = read_fragment("<ipxact:register/>", |node| {
            read_memory_array(node, Revision::Std22, ArrayHost::Memory)
        });
        assert_eq!(no_array, None);
    }
}
