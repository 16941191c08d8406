//! Minimal element tree over quick-xml events
//!
//! TEI lookups need parent/child navigation (`analytic//author/persName`),
//! which a streaming reader does not give us, so the document is first
//! collected into a small owned tree. Element names are stored without their
//! namespace prefix.

use crate::{TeiError, TeiResult};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// An element with its attributes, leading text and children
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlElement {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    /// Text before the first child element
    pub text: String,
    pub children: Vec<XmlElement>,
}

impl XmlElement {
    fn from_start(start: &BytesStart<'_>) -> TeiResult<Self> {
        let name = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();
        let mut attributes = Vec::new();
        for attr in start.attributes() {
            let attr = attr.map_err(|e| TeiError::Xml(e.to_string()))?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr
                .unescape_value()
                .map_err(|e| TeiError::Xml(e.to_string()))?
                .into_owned();
            attributes.push((key, value));
        }
        Ok(Self {
            name,
            attributes,
            ..Default::default()
        })
    }

    fn push_text(&mut self, text: &str) {
        if self.children.is_empty() {
            self.text.push_str(text);
        }
    }

    /// Attribute value by its full (possibly prefixed) name
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlElement> {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// First direct child with the given name
    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.children.iter().find(|c| c.name == name)
    }

    /// First direct child with the given name and attribute value
    pub fn child_with(&self, name: &str, key: &str, value: &str) -> Option<&XmlElement> {
        self.children
            .iter()
            .find(|c| c.name == name && c.attr(key) == Some(value))
    }

    /// All descendants in document order, excluding `self`
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: self.children.iter().rev().collect(),
        }
    }

    pub fn descendants_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlElement> {
        self.descendants().filter(move |d| d.name == name)
    }

    /// First descendant with the given name
    pub fn descendant(&self, name: &str) -> Option<&XmlElement> {
        self.descendants().find(|d| d.name == name)
    }

    /// First descendant with the given name and attribute value
    pub fn descendant_with(&self, name: &str, key: &str, value: &str) -> Option<&XmlElement> {
        self.descendants()
            .find(|d| d.name == name && d.attr(key) == Some(value))
    }
}

/// Pre-order walk over an element's descendants
pub struct Descendants<'a> {
    stack: Vec<&'a XmlElement>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a XmlElement;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// Parse an XML document into its root element
pub fn parse_document(xml: &str) -> TeiResult<XmlElement> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut buf = Vec::new();
    let mut open: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => open.push(XmlElement::from_start(e)?),
            Ok(Event::Empty(ref e)) => {
                let element = XmlElement::from_start(e)?;
                attach(&mut open, &mut root, element);
            }
            Ok(Event::End(_)) => {
                let element = open
                    .pop()
                    .ok_or_else(|| TeiError::Xml("unexpected closing tag".to_string()))?;
                attach(&mut open, &mut root, element);
            }
            Ok(Event::Text(e)) => {
                let text = e.unescape().map_err(|e| TeiError::Xml(e.to_string()))?;
                if let Some(current) = open.last_mut() {
                    current.push_text(&text);
                }
            }
            Ok(Event::CData(e)) => {
                if let Some(current) = open.last_mut() {
                    current.push_text(&String::from_utf8_lossy(&e));
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(TeiError::Xml(format!(
                    "{} at position {}",
                    e,
                    reader.buffer_position()
                )))
            }
            _ => {}
        }
        buf.clear();
    }

    if let Some(unclosed) = open.last() {
        return Err(TeiError::Xml(format!(
            "unexpected end of document inside <{}>",
            unclosed.name
        )));
    }
    root.ok_or_else(|| TeiError::Xml("document has no root element".to_string()))
}

fn attach(open: &mut [XmlElement], root: &mut Option<XmlElement>, element: XmlElement) {
    match open.last_mut() {
        Some(parent) => parent.children.push(element),
        None => {
            if root.is_none() {
                *root = Some(element);
            }
        }
    }
}
