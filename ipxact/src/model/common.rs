//! Building blocks shared by nearly every IP-XACT element: identity, the name group, tri-state
//! booleans and VLNV references.

use std::{
    fmt,
    sync::atomic::{AtomicU64, Ordering},
};

use strum::{AsRefStr, Display, EnumString};

/// Stable identity of a model entity
///
/// Identifiers are handed out once per constructed entity and are never compared by value when
/// comparing entities. A clone describes the same entity and therefore keeps the identifier of its
/// source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(u64);

static NEXT_ENTITY_ID: AtomicU64 = AtomicU64::new(1);

impl EntityId {
    /// Allocate a new, process-unique identifier
    pub fn new() -> Self {
        Self(NEXT_ENTITY_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// `ipxact:nameGroup`: name, display name, short description and description
#[derive(Clone, Debug, Default)]
pub struct NameGroup {
    id: EntityId,
    pub name: String,
    pub display_name: String,
    /// Only available in IP-XACT 2022 documents
    pub short_description: String,
    pub description: String,
}

impl NameGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }
}

// Identity is not part of the value
impl PartialEq for NameGroup {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.display_name == other.display_name
            && self.short_description == other.short_description
            && self.description == other.description
    }
}

impl Eq for NameGroup {}

/// Elements that carry a name group
///
/// Name uniqueness among siblings is checked through this trait.
pub trait Named {
    fn name_group(&self) -> &NameGroup;

    fn name(&self) -> &str {
        &self.name_group().name
    }

    fn id(&self) -> EntityId {
        self.name_group().id()
    }
}

impl Named for NameGroup {
    fn name_group(&self) -> &NameGroup {
        self
    }
}

/// Tri-state boolean
///
/// Distinct from `Option<bool>` in that "unspecified" has its own textual form, the empty string,
/// which writers turn into an absent element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BooleanValue {
    True,
    False,
    #[default]
    Unspecified,
}

impl BooleanValue {
    pub fn set_value(&mut self, value: bool) {
        *self = value.into();
    }

    pub fn set_unspecified(&mut self) {
        *self = Self::Unspecified;
    }

    pub fn is_specified(&self) -> bool {
        !matches!(self, Self::Unspecified)
    }

    /// Returns the value as a `bool`, if specified
    pub fn to_bool(&self) -> Option<bool> {
        match self {
            Self::True => Some(true),
            Self::False => Some(false),
            Self::Unspecified => None,
        }
    }

    /// Interpret XML text. Anything other than `true` or `false` is unspecified.
    pub fn from_text(text: &str) -> Self {
        match text.trim() {
            "true" => Self::True,
            "false" => Self::False,
            _ => Self::Unspecified,
        }
    }
}

impl From<bool> for BooleanValue {
    fn from(value: bool) -> Self {
        if value {
            Self::True
        } else {
            Self::False
        }
    }
}

impl fmt::Display for BooleanValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::True => write!(f, "true"),
            Self::False => write!(f, "false"),
            Self::Unspecified => Ok(()),
        }
    }
}

/// Vendor, library, name & version: the identity of an IP-XACT document
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Vlnv {
    pub vendor: String,
    pub library: String,
    pub name: String,
    pub version: String,
}

impl Vlnv {
    pub fn new(
        vendor: impl Into<String>,
        library: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            vendor: vendor.into(),
            library: library.into(),
            name: name.into(),
            version: version.into(),
        }
    }

    /// All four parts are given and none of them is whitespace only
    pub fn is_valid(&self) -> bool {
        [&self.vendor, &self.library, &self.name, &self.version]
            .iter()
            .all(|part| !part.trim().is_empty())
    }

    /// Returns the four parts in document order
    pub fn parts(&self) -> [(&'static str, &str); 4] {
        [
            ("vendor", &self.vendor),
            ("library", &self.library),
            ("name", &self.name),
            ("version", &self.version),
        ]
    }
}

impl fmt::Display for Vlnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}",
            self.vendor, self.library, self.name, self.version
        )
    }
}

/// Byte order of a packet field
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, EnumString, AsRefStr, Display)]
pub enum Endianness {
    #[strum(serialize = "big")]
    Big,
    #[strum(serialize = "little")]
    Little,
    #[default]
    #[strum(serialize = "")]
    Unspecified,
}
