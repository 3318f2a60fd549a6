use std::io::BufRead;

use super::{Document, Node};
use crate::errors::{Error, Result};

use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::{BytesRef, Event as XmlEvent};
use quick_xml::Reader;

fn tag_name(raw: &[u8]) -> Result<String> {
    Ok(String::from_utf8(raw.to_vec())?)
}

/// Text for an entity or character reference such as `&amp;` or `&#48;`.
fn resolve_ref(r: &BytesRef, line: usize) -> Result<String> {
    let bad_ref = |e: &dyn std::fmt::Display| Error::Document(format!("line {line}: {e}"));
    if let Some(ch) = r.resolve_char_ref().map_err(|e| bad_ref(&e))? {
        return Ok(ch.to_string());
    }
    let name = r.decode().map_err(|e| bad_ref(&e))?;
    resolve_predefined_entity(&name)
        .map(str::to_owned)
        .ok_or_else(|| Error::Document(format!("line {line}: unknown entity '&{name};'")))
}

/// Attach a completed node to its parent, or make it the document root.
fn attach(stack: &mut [Node], root: &mut Option<Node>, node: Node) -> Result<()> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(node);
    } else if root.is_some() {
        return Err(Error::Document(format!(
            "multiple root elements (second is '{}' at line {})",
            node.name, node.line
        )));
    } else {
        *root = Some(node);
    }
    Ok(())
}

impl Document {
    pub fn from_reader(reader: &mut dyn BufRead) -> Result<Self> {
        let mut reader = Reader::from_reader(reader);

        let mut buf = Vec::new();
        // Elements opened but not yet closed
        let mut stack: Vec<Node> = Vec::new();
        let mut root = None;

        let mut src_line = 1;
        loop {
            let ev = reader
                .read_event_into(&mut buf)
                .map_err(|e| Error::Document(format!("XML error near line {src_line}: {e}")))?;
            let event_lines = ev.as_ref().iter().filter(|&c| *c == b'\n').count();

            match ev {
                XmlEvent::Start(bs) => {
                    stack.push(Node::new(tag_name(bs.name().as_ref())?, src_line));
                }
                XmlEvent::Empty(bs) => {
                    let node = Node::new(tag_name(bs.name().as_ref())?, src_line);
                    attach(&mut stack, &mut root, node)?;
                }
                XmlEvent::End(_) => {
                    if let Some(node) = stack.pop() {
                        attach(&mut stack, &mut root, node)?;
                    }
                }
                XmlEvent::Text(t) => {
                    if let Some(node) = stack.last_mut() {
                        node.text
                            .push_str(&String::from_utf8(t.into_inner().to_vec())?);
                    }
                }
                XmlEvent::GeneralRef(r) => {
                    if let Some(node) = stack.last_mut() {
                        node.text.push_str(&resolve_ref(&r, src_line)?);
                    }
                }
                XmlEvent::CData(c) => {
                    if let Some(node) = stack.last_mut() {
                        node.text
                            .push_str(&String::from_utf8(c.into_inner().to_vec())?);
                    }
                }
                XmlEvent::Eof => break,
                _ => {}
            }

            src_line += event_lines;
            buf.clear();
        }

        if let Some(open) = stack.last() {
            return Err(Error::Document(format!(
                "unclosed element '{}' at line {}",
                open.name, open.line
            )));
        }

        root.map(|root| Self { root })
            .ok_or_else(|| Error::Document("no root element".to_owned()))
    }
}
