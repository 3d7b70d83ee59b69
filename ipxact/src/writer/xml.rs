//! Streaming XML output on top of `quick_xml`

use quick_xml::{
    escape::partial_escape,
    events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
    Writer,
};

use crate::error::WriteError;

/// Streaming XML writer producing a `String`
pub struct XmlWriter {
    inner: Writer<Vec<u8>>,
}

impl Default for XmlWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl XmlWriter {
    /// Writer producing compact output without any whitespace between elements
    pub fn new() -> Self {
        Self {
            inner: Writer::new(Vec::new()),
        }
    }

    /// Writer indenting nested elements by `indent` spaces
    pub fn with_indent(indent: usize) -> Self {
        Self {
            inner: Writer::new_with_indent(Vec::new(), b' ', indent),
        }
    }

    pub fn declaration(&mut self) -> Result<(), WriteError> {
        self.inner
            .write_event(Event::Decl(BytesDecl::new("1.0", None, None)))?;
        Ok(())
    }

    pub fn comment(&mut self, text: &str) -> Result<(), WriteError> {
        self.inner
            .write_event(Event::Comment(BytesText::from_escaped(text)))?;
        Ok(())
    }

    pub fn processing_instruction(&mut self, target: &str, data: &str) -> Result<(), WriteError> {
        let content = if data.is_empty() {
            target.to_owned()
        } else {
            format!("{target} {data}")
        };
        self.inner
            .write_event(Event::PI(BytesText::from_escaped(content)))?;
        Ok(())
    }

    pub fn start(&mut self, tag: &str) -> Result<(), WriteError> {
        self.inner.write_event(Event::Start(BytesStart::new(tag)))?;
        Ok(())
    }

    /// Open `tag` with `attributes`. Attributes with empty values are skipped.
    pub fn start_with_attributes<K: AsRef<str>, V: AsRef<str>>(
        &mut self,
        tag: &str,
        attributes: &[(K, V)],
    ) -> Result<(), WriteError> {
        let elem = with_attributes(tag, attributes);
        self.inner.write_event(Event::Start(elem))?;
        Ok(())
    }

    /// Open `tag` with every one of `attributes`, including those with empty values
    pub fn start_with_exact_attributes(
        &mut self,
        tag: &str,
        attributes: &[(String, String)],
    ) -> Result<(), WriteError> {
        let elem = with_exact_attributes(tag, attributes);
        self.inner.write_event(Event::Start(elem))?;
        Ok(())
    }

    /// Write `<tag attr="..."/>` with every one of `attributes`, including those with empty values
    pub fn empty_with_exact_attributes(
        &mut self,
        tag: &str,
        attributes: &[(String, String)],
    ) -> Result<(), WriteError> {
        let elem = with_exact_attributes(tag, attributes);
        self.inner.write_event(Event::Empty(elem))?;
        Ok(())
    }

    pub fn end(&mut self, tag: &str) -> Result<(), WriteError> {
        self.inner.write_event(Event::End(BytesEnd::new(tag)))?;
        Ok(())
    }

    /// Write `<tag attr="..."/>`. Attributes with empty values are skipped.
    pub fn empty_with_attributes<K: AsRef<str>, V: AsRef<str>>(
        &mut self,
        tag: &str,
        attributes: &[(K, V)],
    ) -> Result<(), WriteError> {
        let elem = with_attributes(tag, attributes);
        self.inner.write_event(Event::Empty(elem))?;
        Ok(())
    }

    /// Write character data. Only markup characters are escaped so that literals such as
    /// `8'hFF` stay readable.
    pub fn text(&mut self, text: &str) -> Result<(), WriteError> {
        self.inner
            .write_event(Event::Text(BytesText::from_escaped(partial_escape(text))))?;
        Ok(())
    }

    /// Write `<tag>text</tag>`, even when `text` is empty
    pub fn text_element(&mut self, tag: &str, text: &str) -> Result<(), WriteError> {
        self.text_element_with_attributes::<&str, &str>(tag, &[], text)
    }

    /// Write `<tag>text</tag>` unless `text` is empty
    pub fn optional_text_element(&mut self, tag: &str, text: &str) -> Result<(), WriteError> {
        if text.is_empty() {
            return Ok(());
        }
        self.text_element(tag, text)
    }

    pub fn text_element_with_attributes<K: AsRef<str>, V: AsRef<str>>(
        &mut self,
        tag: &str,
        attributes: &[(K, V)],
        text: &str,
    ) -> Result<(), WriteError> {
        // An empty text event keeps the end tag on the same line when indenting
        self.start_with_attributes(tag, attributes)?;
        self.text(text)?;
        self.end(tag)
    }

    /// Write `<wrapper><tag>item</tag>...</wrapper>` unless `items` is empty
    pub fn text_list<S: AsRef<str>>(
        &mut self,
        wrapper: &str,
        tag: &str,
        items: &[S],
    ) -> Result<(), WriteError> {
        if items.is_empty() {
            return Ok(());
        }
        self.start(wrapper)?;
        for item in items {
            self.text_element(tag, item.as_ref())?;
        }
        self.end(wrapper)
    }

    /// Returns the document written so far
    pub fn into_string(self) -> Result<String, WriteError> {
        Ok(String::from_utf8(self.inner.into_inner())?)
    }
}

fn with_attributes<'t, K: AsRef<str>, V: AsRef<str>>(
    tag: &'t str,
    attributes: &[(K, V)],
) -> BytesStart<'t> {
    let mut elem = BytesStart::new(tag);
    for (name, value) in attributes {
        if !value.as_ref().is_empty() {
            elem.push_attribute((name.as_ref(), value.as_ref()));
        }
    }
    elem
}

fn with_exact_attributes<'t>(tag: &'t str, attributes: &[(String, String)]) -> BytesStart<'t> {
    let mut elem = BytesStart::new(tag);
    elem.extend_attributes(
        attributes
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str())),
    );
    elem
}

#[test]
fn text_keeps_apostrophes() {
    let mut writer = XmlWriter::new();
    writer.text_element("ipxact:value", "8'hFF < 'h1_00").unwrap();
    assert_eq!(
        writer.into_string().unwrap(),
        "<ipxact:value>8'hFF &lt; 'h1_00</ipxact:value>"
    );
}

#[test]
fn empty_attributes_are_skipped() {
    let mut writer = XmlWriter::new();
    writer
        .empty_with_attributes("ipxact:extends", &[("vendor", "tuni.fi"), ("library", "")])
        .unwrap();
    writer.optional_text_element("ipxact:name", "").unwrap();
    assert_eq!(
        writer.into_string().unwrap(),
        r#"<ipxact:extends vendor="tuni.fi"/>"#
    );
}

#[test]
fn exact_attributes_keep_empty_values() {
    let attributes = vec![("kactus2:flag".to_owned(), String::new())];
    let mut writer = XmlWriter::new();
    writer
        .empty_with_exact_attributes("kactus2:note", &attributes)
        .unwrap();
    assert_eq!(writer.into_string().unwrap(), r#"<kactus2:note kactus2:flag=""/>"#);
}
