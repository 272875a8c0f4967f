//! Minimal element tree over well-formed (X)HTML.
//!
//! Elements live in an arena in document order, so an element's index is
//! also its position in a pre-order walk.

use crate::error::ExtractError;
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::ResolveResult;
use quick_xml::reader::NsReader;

pub const XHTML_NS: &str = "http://www.w3.org/1999/xhtml";

pub type NodeId = usize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Child {
    Element(NodeId),
    Text(String),
}

#[derive(Debug, Clone)]
pub struct Element {
    /// Local name without prefix
    pub name: String,
    /// Resolved namespace URI, if the element is bound to one
    pub namespace: Option<String>,
    pub attributes: Vec<(String, String)>,
    pub parent: Option<NodeId>,
    pub children: Vec<Child>,
}

impl Element {
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// True only for `<p>` bound to the XHTML namespace.
    pub fn is_paragraph(&self) -> bool {
        self.name == "p" && self.namespace.as_deref() == Some(XHTML_NS)
    }
}

#[derive(Debug, Clone)]
pub struct Document {
    elements: Vec<Element>,
}

impl Document {
    /// Parse strictly: mismatched or unclosed tags, stray end tags and
    /// unknown entities are all errors.
    pub fn parse(markup: &str) -> Result<Self, ExtractError> {
        let mut reader = NsReader::from_str(markup);
        let mut elements: Vec<Element> = Vec::new();
        let mut open: Vec<NodeId> = Vec::new();

        loop {
            let event = reader
                .read_resolved_event()
                .map_err(|e| ExtractError::Parse(e.to_string()))
                .and_then(|(ns, event)| Ok((namespace_uri(&ns)?, event)))?;

            match event {
                (ns, Event::Start(start)) => {
                    let id = push_element(&mut elements, &open, ns, &start)?;
                    open.push(id);
                }
                (ns, Event::Empty(start)) => {
                    push_element(&mut elements, &open, ns, &start)?;
                }
                (_, Event::End(_)) => {
                    open.pop();
                }
                (_, Event::Text(text)) => {
                    if let Some(&parent) = open.last() {
                        let text = text
                            .unescape()
                            .map_err(|e| ExtractError::Parse(e.to_string()))?;
                        push_text(&mut elements[parent], &text);
                    }
                }
                (_, Event::CData(data)) => {
                    if let Some(&parent) = open.last() {
                        let text = String::from_utf8_lossy(&data.into_inner()).into_owned();
                        push_text(&mut elements[parent], &text);
                    }
                }
                (_, Event::Eof) => break,
                _ => {}
            }
        }

        if let Some(&unclosed) = open.last() {
            return Err(ExtractError::Parse(format!(
                "unclosed element <{}>",
                elements[unclosed].name
            )));
        }
        if elements.is_empty() {
            return Err(ExtractError::Parse("no root element".to_string()));
        }

        Ok(Self { elements })
    }

    pub fn root(&self) -> NodeId {
        0
    }

    pub fn element(&self, id: NodeId) -> &Element {
        &self.elements[id]
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.elements.get(id).and_then(|e| e.parent)
    }

    /// First element below the root whose `id` attribute equals `value`.
    pub fn find_by_id(&self, value: &str) -> Option<NodeId> {
        (1..self.elements.len()).find(|&id| self.elements[id].attribute("id") == Some(value))
    }

    /// Direct element children, skipping text.
    pub fn child_elements(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.elements[id].children.iter().filter_map(|child| match child {
            Child::Element(child_id) => Some(*child_id),
            Child::Text(_) => None,
        })
    }

    /// All elements below `id`, in document order.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.child_elements(id).collect();
        stack.reverse();
        while let Some(next) = stack.pop() {
            out.push(next);
            let mut children: Vec<NodeId> = self.child_elements(next).collect();
            children.reverse();
            stack.extend(children);
        }
        out
    }

    /// Every text fragment inside `id`, concatenated in document order.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        for child in &self.elements[id].children {
            match child {
                Child::Text(text) => out.push_str(text),
                Child::Element(child_id) => self.collect_text(*child_id, out),
            }
        }
    }
}

fn namespace_uri(ns: &ResolveResult<'_>) -> Result<Option<String>, ExtractError> {
    match ns {
        ResolveResult::Bound(namespace) => Ok(Some(
            String::from_utf8_lossy(namespace.as_ref()).into_owned(),
        )),
        ResolveResult::Unbound => Ok(None),
        ResolveResult::Unknown(prefix) => Err(ExtractError::Parse(format!(
            "undeclared namespace prefix {}",
            String::from_utf8_lossy(prefix)
        ))),
    }
}

fn push_element(
    elements: &mut Vec<Element>,
    open: &[NodeId],
    namespace: Option<String>,
    start: &BytesStart<'_>,
) -> Result<NodeId, ExtractError> {
    let parent = open.last().copied();
    if parent.is_none() && !elements.is_empty() {
        return Err(ExtractError::Parse(
            "more than one root element".to_string(),
        ));
    }

    let mut attributes = Vec::new();
    for attr in start.attributes() {
        let attr = attr.map_err(|e| ExtractError::Parse(e.to_string()))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|e| ExtractError::Parse(e.to_string()))?
            .into_owned();
        attributes.push((key, value));
    }

    let id = elements.len();
    elements.push(Element {
        name: String::from_utf8_lossy(start.local_name().as_ref()).into_owned(),
        namespace,
        attributes,
        parent,
        children: Vec::new(),
    });
    if let Some(parent) = parent {
        elements[parent].children.push(Child::Element(id));
    }
    Ok(id)
}

fn push_text(element: &mut Element, text: &str) {
    if text.is_empty() {
        return;
    }
    match element.children.last_mut() {
        Some(Child::Text(existing)) => existing.push_str(text),
        _ => element.children.push(Child::Text(text.to_string())),
    }
}
