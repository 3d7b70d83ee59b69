use std::collections::BTreeMap;

use strum::{EnumIter, IntoEnumIterator, IntoStaticStr};

/// The levels a field reference may point through
///
/// Ordering of the variants is the serialization order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, IntoStaticStr)]
pub enum FieldReferenceKind {
    #[strum(serialize = "addressSpaceRef")]
    AddressSpace,
    #[strum(serialize = "memoryMapRef")]
    MemoryMap,
    #[strum(serialize = "memoryRemapRef")]
    MemoryRemap,
    #[strum(serialize = "bankRef")]
    Bank,
    #[strum(serialize = "addressBlockRef")]
    AddressBlock,
    #[strum(serialize = "registerFileRef")]
    RegisterFile,
    #[strum(serialize = "registerRef")]
    Register,
    #[strum(serialize = "alternateRegisterRef")]
    AlternateRegister,
    #[strum(serialize = "fieldRef")]
    Field,
}

impl FieldReferenceKind {
    /// Banks and register files nest, so they may be referenced several times in a row
    pub fn allows_multiple(&self) -> bool {
        matches!(self, Self::Bank | Self::RegisterFile)
    }

    /// Name of the element and of the attribute holding the reference
    pub fn tag(&self) -> &'static str {
        (*self).into()
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::iter().find(|kind| kind.tag() == tag)
    }
}

/// A reference by name, with indices selecting an element of an array
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IndexedReference {
    pub reference: String,
    pub indices: Vec<String>,
}

impl IndexedReference {
    pub fn new(reference: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            indices: vec![],
        }
    }

    pub fn with_indices<S: Into<String>>(mut self, indices: impl IntoIterator<Item = S>) -> Self {
        self.indices = indices.into_iter().map(Into::into).collect();
        self
    }
}

/// `ipxact:fieldReferenceGroup`: a path from an address space or memory map down to a field
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldReference {
    references: BTreeMap<FieldReferenceKind, Vec<IndexedReference>>,
}

impl FieldReference {
    /// Set the reference of `kind`
    ///
    /// Single-valued kinds are replaced, multi-valued kinds are appended to.
    pub fn set_reference(&mut self, kind: FieldReferenceKind, reference: IndexedReference) {
        let entry = self.references.entry(kind).or_default();
        if !kind.allows_multiple() {
            entry.clear();
        }
        entry.push(reference);
    }

    /// Returns the first reference of `kind`
    pub fn reference(&self, kind: FieldReferenceKind) -> Option<&IndexedReference> {
        self.references.get(&kind).and_then(|refs| refs.first())
    }

    /// Returns every reference of `kind` in order
    pub fn references(&self, kind: FieldReferenceKind) -> &[IndexedReference] {
        self.references.get(&kind).map_or(&[], Vec::as_slice)
    }

    pub fn clear_reference(&mut self, kind: FieldReferenceKind) {
        self.references.remove(&kind);
    }

    /// Iterate over all references in serialization order
    pub fn iter(&self) -> impl Iterator<Item = (FieldReferenceKind, &IndexedReference)> {
        self.references
            .iter()
            .flat_map(|(kind, refs)| refs.iter().map(move |r| (*kind, r)))
    }

    pub fn is_empty(&self) -> bool {
        self.references.values().all(Vec::is_empty)
    }
}

#[test]
fn field_reference_iterates_in_kind_order() {
    let mut reference = FieldReference::default();
    reference.set_reference(FieldReferenceKind::Field, IndexedReference::new("f"));
    reference.set_reference(FieldReferenceKind::Bank, IndexedReference::new("b0"));
    reference.set_reference(FieldReferenceKind::MemoryMap, IndexedReference::new("mm"));
    reference.set_reference(FieldReferenceKind::Bank, IndexedReference::new("b1"));
    reference.set_reference(FieldReferenceKind::MemoryMap, IndexedReference::new("mm2"));

    let order = reference
        .iter()
        .map(|(kind, r)| (kind, r.reference.as_str()))
        .collect::<Vec<_>>();
    assert_eq!(
        order,
        vec![
            (FieldReferenceKind::MemoryMap, "mm2"),
            (FieldReferenceKind::Bank, "b0"),
            (FieldReferenceKind::Bank, "b1"),
            (FieldReferenceKind::Field, "f"),
        ]
    );
}
