//! Opaque vendor extension storage
//!
//! Extensions are kept as plain XML trees. Anything the model does not understand inside
//! `ipxact:vendorExtensions` is stored here and written back unchanged, in the same order.

use std::ops;

/// One vendor extension element, e.g. `<kactus2:version>3.13.0</kactus2:version>`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VendorExtension {
    /// Qualified element name, including the namespace prefix
    pub name: String,
    /// Attributes in document order, names are qualified. Empty values are kept.
    pub attributes: Vec<(String, String)>,
    /// Text and child elements in document order
    pub content: Vec<ExtensionContent>,
}

/// A piece of mixed content inside a vendor extension
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExtensionContent {
    Text(String),
    Element(VendorExtension),
}

impl VendorExtension {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_value(name: impl Into<String>, value: impl Into<String>) -> Self {
        let mut ext = Self::new(name);
        ext.set_value(value);
        ext
    }

    /// Returns the namespace prefix of the element name, if there is one
    pub fn prefix(&self) -> Option<&str> {
        self.name.split_once(':').map(|(prefix, _)| prefix)
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Text content of a simple extension, empty if the extension has child elements
    pub fn value(&self) -> &str {
        match self.content.as_slice() {
            [ExtensionContent::Text(text)] => text,
            _ => "",
        }
    }

    /// Replace all content with `value`. An empty value leaves the element empty.
    pub fn set_value(&mut self, value: impl Into<String>) {
        let value = value.into();
        self.content.clear();
        if !value.is_empty() {
            self.content.push(ExtensionContent::Text(value));
        }
    }

    pub fn push_child(&mut self, child: VendorExtension) {
        self.content.push(ExtensionContent::Element(child));
    }

    /// Child elements in document order
    pub fn children(&self) -> impl Iterator<Item = &VendorExtension> {
        self.content.iter().filter_map(|c| match c {
            ExtensionContent::Element(child) => Some(child),
            ExtensionContent::Text(_) => None,
        })
    }
}

/// Ordered list of vendor extensions (newtype)
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VendorExtensions(Vec<VendorExtension>);

impl VendorExtensions {
    pub fn push(&mut self, extension: VendorExtension) {
        self.0.push(extension);
    }

    /// Returns the first extension with the qualified `name`
    pub fn find(&self, name: &str) -> Option<&VendorExtension> {
        self.0.iter().find(|ext| ext.name == name)
    }

    /// Replaces the value of the first extension called `name`, or appends a new one
    pub fn set_value(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.0.iter_mut().find(|ext| ext.name == name) {
            Some(ext) => ext.set_value(value),
            None => self.0.push(VendorExtension::with_value(name, value)),
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<VendorExtension> {
        let idx = self.0.iter().position(|ext| ext.name == name)?;
        Some(self.0.remove(idx))
    }
}

impl From<Vec<VendorExtension>> for VendorExtensions {
    fn from(value: Vec<VendorExtension>) -> Self {
        Self(value)
    }
}

impl ops::Deref for VendorExtensions {
    type Target = Vec<VendorExtension>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl ops::DerefMut for VendorExtensions {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<'a> IntoIterator for &'a VendorExtensions {
    type Item = &'a VendorExtension;
    type IntoIter = std::slice::Iter<'a, VendorExtension>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[test]
fn vendor_extensions_set_value_works() {
    let mut exts = VendorExtensions::default();
    exts.push(VendorExtension::with_value("bogus:ext", "a"));
    exts.set_value("kactus2:version", "3.13.0");
    exts.set_value("bogus:ext", "b");

    assert_eq!(exts.len(), 2);
    assert_eq!(exts[0].value(), "b");
    assert_eq!(exts.find("kactus2:version").map(|e| e.value()), Some("3.13.0"));
    assert_eq!(exts[1].prefix(), Some("kactus2"));

    assert!(exts.remove("bogus:ext").is_some());
    assert_eq!(exts.len(), 1);
}

#[test]
fn value_of_mixed_content_is_empty() {
    let mut ext = VendorExtension::with_value("kactus2:note", "head");
    ext.push_child(VendorExtension::new("kactus2:b"));
    ext.content.push(ExtensionContent::Text("tail".to_owned()));

    assert_eq!(ext.value(), "");
    assert_eq!(ext.children().count(), 1);

    ext.set_value("");
    assert!(ext.content.is_empty());
}
