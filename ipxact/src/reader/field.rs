//! Readers for the parts of register fields and other memory elements

use log::warn;

use super::{read_vendor_extensions, XmlNode};
use crate::model::{
    Access, AccessPolicy, FieldReference, FieldReferenceKind, FieldReset, IndexedReference,
    ModeReference, Revision,
};

/// Read an `ipxact:reset` element of a field
pub fn read_field_reset(node: &XmlNode) -> FieldReset {
    FieldReset {
        reset_type_reference: node.attribute("resetTypeRef").to_owned(),
        reset_value: node.find_text_by_tag_name("value"),
        reset_mask: node.find_text_by_tag_name("mask"),
    }
}

/// Read the field reference group contained in `node`, e.g. in `ipxact:broadcastTo`
///
/// Each reference element carries the referenced name in an attribute of the same name, e.g.
/// `<ipxact:registerRef registerRef="status"/>`. Elements that are not part of the group are
/// skipped.
pub fn read_field_reference(node: &XmlNode) -> FieldReference {
    let mut reference = FieldReference::default();
    for child in node.element_children() {
        let Some(kind) = FieldReferenceKind::from_tag(child.tag_name()) else {
            continue;
        };
        let indices = child
            .grandchildren("indices", "index")
            .iter()
            .map(|index| index.text().to_owned())
            .collect::<Vec<_>>();
        reference.set_reference(
            kind,
            IndexedReference::new(child.attribute(kind.tag())).with_indices(indices),
        );
    }
    reference
}

/// Read an `ipxact:accessPolicy` element
///
/// An access value outside of the standard set is kept as [`Access::Other`] with a warning.
/// `ipxact:fieldAccessPolicy` has the same layout and is read with this as well.
pub fn read_access_policy(node: &XmlNode) -> AccessPolicy {
    AccessPolicy {
        mode_refs: node
            .children_with_tag_name("modeRef")
            .iter()
            .map(|mode_ref| ModeReference::new(mode_ref.text(), mode_ref.attribute("priority")))
            .collect(),
        access: read_access(node),
        vendor_extensions: read_vendor_extensions(node),
    }
}

/// Read the access policies of a register or a field, listed as `tag` elements inside `wrapper`
///
/// IP-XACT 2014 elements carry a single `ipxact:access` instead, which is read as one policy
/// without mode references.
pub fn read_access_policies(
    node: &XmlNode,
    revision: Revision,
    wrapper: &str,
    tag: &str,
) -> Vec<AccessPolicy> {
    if revision.is_std14() {
        return read_access(node)
            .map(|access| AccessPolicy {
                access: Some(access),
                ..Default::default()
            })
            .into_iter()
            .collect();
    }

    node.grandchildren(wrapper, tag)
        .iter()
        .map(read_access_policy)
        .collect()
}

fn read_access(node: &XmlNode) -> Option<Access> {
    node.maybe_find_text_by_tag_name("access").map(|text| {
        let text = text.trim();
        let access = text
            .parse::<Access>()
            .unwrap_or_else(|_| Access::Other(text.to_owned()));
        if !access.is_standard() {
            warn!("unknown access value {text:?}");
        }
        access
    })
}
