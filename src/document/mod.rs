//! Generic labelled tree parsed from XML text.
//!
//! Each node has a tag name, a (trimmed) text value, and an ordered list of
//! child elements. Attributes, comments and processing instructions are
//! ignored; nothing here knows about lines or arcs.

mod xml;

use std::io::Cursor;
use std::iter::successors;

use crate::errors::Result;

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    name: String,
    text: String,
    line: usize,
    children: Vec<Node>,
}

impl Node {
    fn new(name: String, line: usize) -> Self {
        Self {
            name,
            text: String::new(),
            line,
            children: Vec::new(),
        }
    }
}

/// A parsed document with a single root element.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Node,
}

impl Document {
    pub fn parse_str(input: &str) -> Result<Self> {
        Self::from_reader(&mut Cursor::new(input))
    }

    pub fn root(&self) -> NodeRef<'_> {
        NodeRef {
            siblings: std::slice::from_ref(&self.root),
            index: 0,
        }
    }
}

/// Borrowed handle to a node, able to step to its first child and next sibling.
#[derive(Debug, Clone, Copy)]
pub struct NodeRef<'a> {
    siblings: &'a [Node],
    index: usize,
}

impl<'a> NodeRef<'a> {
    fn node(&self) -> &'a Node {
        &self.siblings[self.index]
    }

    pub fn name(&self) -> &'a str {
        &self.node().name
    }

    /// Element text content with surrounding whitespace removed.
    pub fn text(&self) -> &'a str {
        self.node().text.trim()
    }

    /// 1-based source line of the element's start tag.
    pub fn line(&self) -> usize {
        self.node().line
    }

    pub fn first_child(&self) -> Option<NodeRef<'a>> {
        let children = &self.node().children;
        (!children.is_empty()).then_some(NodeRef {
            siblings: children,
            index: 0,
        })
    }

    pub fn next_sibling(&self) -> Option<NodeRef<'a>> {
        (self.index + 1 < self.siblings.len()).then_some(NodeRef {
            siblings: self.siblings,
            index: self.index + 1,
        })
    }

    pub fn children(&self) -> impl Iterator<Item = NodeRef<'a>> {
        successors(self.first_child(), NodeRef::next_sibling)
    }
}
