use super::{
    BooleanValue, Channel, FileBuildCommand, FileBuilder, MemoryMap, NameGroup, Named,
    OtherClockDriver, Parameter, PowerDomain, Region, VendorExtensions, Vlnv,
};

/// `ipxact:component`
///
/// Only the parts of a component that have a reader, a writer and a validator in this crate are
/// modeled. Bus interfaces, address spaces, ports and the like are not.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Component {
    pub vlnv: Vlnv,
    /// Document name group. The name is the VLNV name, display name and short description are only
    /// written in IP-XACT 2022.
    pub display_name: String,
    pub short_description: String,
    pub description: String,
    pub power_domains: Vec<PowerDomain>,
    pub channels: Vec<Channel>,
    pub memory_maps: Vec<MemoryMap>,
    pub file_sets: Vec<FileSet>,
    pub cpus: Vec<Cpu>,
    pub other_clock_drivers: Vec<OtherClockDriver>,
    pub parameters: Vec<Parameter>,
    pub vendor_extensions: VendorExtensions,
}

impl Component {
    pub fn new(vlnv: Vlnv) -> Self {
        Self {
            vlnv,
            ..Default::default()
        }
    }
}

/// `ipxact:cpu`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cpu {
    pub name_group: NameGroup,
    pub is_present: String,
    /// IP-XACT 2014 only
    pub address_space_refs: Vec<AddressSpaceRef>,
    /// Size of the address space in addressable units, IP-XACT 2022 only
    pub range: String,
    /// Bit width of an address, IP-XACT 2022 only
    pub width: String,
    pub address_unit_bits: String,
    pub regions: Vec<Region>,
    /// IP-XACT 2022 only
    pub memory_map_ref: String,
    pub parameters: Vec<Parameter>,
    pub vendor_extensions: VendorExtensions,
}

impl Cpu {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name_group: NameGroup::new(name),
            ..Default::default()
        }
    }
}

impl Named for Cpu {
    fn name_group(&self) -> &NameGroup {
        &self.name_group
    }
}

/// `ipxact:addressSpaceRef` of a CPU
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AddressSpaceRef {
    pub address_space_ref: String,
    pub is_present: String,
}

impl AddressSpaceRef {
    pub fn new(address_space_ref: impl Into<String>) -> Self {
        Self {
            address_space_ref: address_space_ref.into(),
            is_present: String::new(),
        }
    }
}

/// `ipxact:fileSet`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FileSet {
    pub name_group: NameGroup,
    pub groups: Vec<String>,
    pub files: Vec<File>,
    pub default_file_builders: Vec<FileBuilder>,
    /// Include directories
    pub dependencies: Vec<String>,
    pub vendor_extensions: VendorExtensions,
}

impl FileSet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name_group: NameGroup::new(name),
            ..Default::default()
        }
    }
}

impl Named for FileSet {
    fn name_group(&self) -> &NameGroup {
        &self.name_group
    }
}

/// `ipxact:fileType`. A `user` file type carries its actual type in the `user` attribute.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FileType {
    pub value: String,
    pub user: String,
}

impl FileType {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            user: String::new(),
        }
    }
}

/// `ipxact:file` of a file set
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct File {
    pub file_id: String,
    /// Path of the file, relative to the containing document
    pub name: String,
    pub is_present: String,
    pub file_types: Vec<FileType>,
    pub is_structural: BooleanValue,
    pub is_include_file: BooleanValue,
    /// Attribute of `isIncludeFile`
    pub external_declarations: BooleanValue,
    pub logical_name: String,
    /// Attribute of `logicalName`
    pub logical_name_default: BooleanValue,
    pub exported_names: Vec<String>,
    pub build_command: Option<FileBuildCommand>,
    pub dependencies: Vec<String>,
    pub image_types: Vec<String>,
    pub description: String,
    pub vendor_extensions: VendorExtensions,
}

impl File {
    pub fn new(name: impl Into<String>, file_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            file_types: vec![FileType::new(file_type)],
            ..Default::default()
        }
    }
}
