//! Writers for the parts of register fields and other memory elements

use super::{write_vendor_extensions, XmlWriter};
use crate::{
    error::WriteError,
    model::{AccessPolicy, FieldReference, FieldReset, Revision},
};

/// Write an `ipxact:reset` element
pub fn write_field_reset(w: &mut XmlWriter, reset: &FieldReset) -> Result<(), WriteError> {
    w.start_with_attributes(
        "ipxact:reset",
        &[("resetTypeRef", &reset.reset_type_reference)],
    )?;
    w.text_element("ipxact:value", &reset.reset_value)?;
    w.optional_text_element("ipxact:mask", &reset.reset_mask)?;
    w.end("ipxact:reset")
}

/// Write a field reference group inside an element called `wrapper`
///
/// References are written from the outermost level down to the field.
pub fn write_field_reference(
    w: &mut XmlWriter,
    wrapper: &str,
    reference: &FieldReference,
) -> Result<(), WriteError> {
    w.start(wrapper)?;
    for (kind, indexed) in reference.iter() {
        let tag = format!("ipxact:{}", kind.tag());
        let attributes = [(kind.tag(), indexed.reference.as_str())];
        if indexed.indices.is_empty() {
            w.empty_with_attributes(&tag, &attributes)?;
            continue;
        }

        w.start_with_attributes(&tag, &attributes)?;
        w.text_list("ipxact:indices", "ipxact:index", &indexed.indices)?;
        w.end(&tag)?;
    }
    w.end(wrapper)
}

/// Write an `ipxact:accessPolicy` element
pub fn write_access_policy(w: &mut XmlWriter, policy: &AccessPolicy) -> Result<(), WriteError> {
    write_policy(w, "ipxact:accessPolicy", policy)
}

/// Write the access policies of a register or a field as `tag` elements inside `wrapper`
///
/// IP-XACT 2014 has room for a single `ipxact:access` only, which is taken from the first policy.
pub fn write_access_policies(
    w: &mut XmlWriter,
    policies: &[AccessPolicy],
    revision: Revision,
    wrapper: &str,
    tag: &str,
) -> Result<(), WriteError> {
    if revision.is_std14() {
        if let Some(access) = policies.first().and_then(|policy| policy.access.as_ref()) {
            w.text_element("ipxact:access", access.as_str())?;
        }
        return Ok(());
    }

    if policies.is_empty() {
        return Ok(());
    }
    w.start(wrapper)?;
    for policy in policies {
        write_policy(w, tag, policy)?;
    }
    w.end(wrapper)
}

fn write_policy(w: &mut XmlWriter, tag: &str, policy: &AccessPolicy) -> Result<(), WriteError> {
    w.start(tag)?;
    for mode_ref in &policy.mode_refs {
        w.text_element_with_attributes(
            "ipxact:modeRef",
            &[("priority", &mode_ref.priority)],
            &mode_ref.reference,
        )?;
    }
    if let Some(access) = &policy.access {
        w.text_element("ipxact:access", access.as_str())?;
    }
    write_vendor_extensions(w, &policy.vendor_extensions)?;
    w.end(tag)
}
