/// `ipxact:array` of a memory element, e.g. a register or a field
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryArray {
    pub dimensions: Vec<Dimension>,
    /// Written as `stride` for memory elements and `bitStride` for fields. Not available in
    /// IP-XACT 2014.
    pub stride: String,
}

/// Kind of element an array replicates
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArrayHost {
    /// Registers, register files and the like
    Memory,
    Field,
}

impl ArrayHost {
    /// Local name of the stride element
    pub fn stride_tag(&self) -> &'static str {
        match self {
            ArrayHost::Memory => "stride",
            ArrayHost::Field => "bitStride",
        }
    }
}

/// `ipxact:dim`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dimension {
    pub value: String,
    pub index_var: String,
}

impl Dimension {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            index_var: String::new(),
        }
    }
}

/// Holder for an optional memory array
///
/// Embedded by every element that can be replicated. "The dimension" of such an element is the
/// value of its first `dim`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArrayableMemory {
    array: Option<MemoryArray>,
}

impl ArrayableMemory {
    pub fn new(array: Option<MemoryArray>) -> Self {
        Self { array }
    }

    pub fn array(&self) -> Option<&MemoryArray> {
        self.array.as_ref()
    }

    pub fn array_mut(&mut self) -> Option<&mut MemoryArray> {
        self.array.as_mut()
    }

    pub fn set_array(&mut self, array: Option<MemoryArray>) {
        self.array = array;
    }

    /// Returns the value of the first dimension, or an empty string when there is no array
    pub fn dimension(&self) -> &str {
        self.array
            .as_ref()
            .and_then(|array| array.dimensions.first())
            .map_or("", |dim| dim.value.as_str())
    }

    /// Set the value of the first dimension
    ///
    /// The array is created when missing. An empty `value` removes the array altogether.
    pub fn set_dimension(&mut self, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() {
            self.array = None;
            return;
        }

        let array = self.array.get_or_insert_with(MemoryArray::default);
        match array.dimensions.first_mut() {
            Some(dim) => dim.value = value,
            None => array.dimensions.push(Dimension::new(value)),
        }
    }

    /// Stride of the array, empty if there is no array
    pub fn stride(&self) -> &str {
        self.array.as_ref().map_or("", |array| array.stride.as_str())
    }
}

#[test]
fn set_dimension_creates_array_lazily() {
    let mut memory = ArrayableMemory::default();
    assert!(memory.array().is_none());
    assert_eq!(memory.dimension(), "");

    memory.set_dimension("4");
    let array = memory.array().expect("array was not created");
    assert_eq!(array.dimensions, vec![Dimension::new("4")]);
    assert_eq!(memory.dimension(), "4");

    memory.set_dimension("8");
    assert_eq!(memory.array().map(|a| a.dimensions.len()), Some(1));
    assert_eq!(memory.dimension(), "8");

    memory.set_dimension("");
    assert!(memory.array().is_none());
}
