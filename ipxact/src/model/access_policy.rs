use strum::EnumString;

use super::VendorExtensions;

/// Access rights of a memory element
#[derive(Clone, Debug, PartialEq, Eq, EnumString)]
pub enum Access {
    #[strum(serialize = "read-write")]
    ReadWrite,
    #[strum(serialize = "read-only")]
    ReadOnly,
    #[strum(serialize = "write-only")]
    WriteOnly,
    #[strum(serialize = "read-writeOnce")]
    ReadWriteOnce,
    #[strum(serialize = "writeOnce")]
    WriteOnce,
    /// Value outside of the standard set, kept as written
    #[strum(default)]
    Other(String),
}

impl Access {
    pub fn as_str(&self) -> &str {
        match self {
            Access::ReadWrite => "read-write",
            Access::ReadOnly => "read-only",
            Access::WriteOnly => "write-only",
            Access::ReadWriteOnce => "read-writeOnce",
            Access::WriteOnce => "writeOnce",
            Access::Other(text) => text,
        }
    }

    pub fn is_standard(&self) -> bool {
        !matches!(self, Access::Other(_))
    }
}

/// `ipxact:modeRef`: the access policy applies when the referenced mode is active
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModeReference {
    pub reference: String,
    /// Non-negative integer, lower value wins. Empty when not given.
    pub priority: String,
}

impl ModeReference {
    pub fn new(reference: impl Into<String>, priority: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            priority: priority.into(),
        }
    }
}

/// `ipxact:accessPolicy` (IP-XACT 2022)
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AccessPolicy {
    pub mode_refs: Vec<ModeReference>,
    pub access: Option<Access>,
    pub vendor_extensions: VendorExtensions,
}

#[test]
fn access_text_works() {
    assert_eq!("read-writeOnce".parse::<Access>(), Ok(Access::ReadWriteOnce));
    assert_eq!(Access::WriteOnly.as_str(), "write-only");

    let other = "read-write-once".parse::<Access>().unwrap();
    assert_eq!(other, Access::Other("read-write-once".to_owned()));
    assert_eq!(other.as_str(), "read-write-once");
    assert!(!other.is_standard());
}
