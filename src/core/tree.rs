// src/core/tree.rs
//! Owned, index-addressed markup tree.
//!
//! Nodes live in one arena (`Vec<Node>`) and point at each other by [`NodeId`].
//! The document is the single owner of every node; callers only ever hold ids.
//!
//! Detaching a node (`extract`, `unwrap`) leaves it in the arena but unreachable
//! from the root, so it no longer shows up in queries, text, or serialized output.
//! Ids handed out earlier stay valid; `is_attached` tells whether one still counts.
//!
//! Text nodes keep their source text verbatim (entities included); only
//! [`Document::text`] decodes. That keeps `parse → to_html` stable.

use super::tokenizer::{Attribute, Token, Tokens, RAW_TEXT_ELEMENTS};

pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attrs: Vec<Attribute>,
}

impl Element {
    /// Attribute value; a bare attribute reads as `""`.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_deref().unwrap_or(""))
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .is_some_and(|v| v.split_ascii_whitespace().any(|c| c == class))
    }

    pub fn is_void(&self) -> bool {
        VOID_ELEMENTS.contains(&self.name.as_str())
    }

    fn is_raw_text(&self) -> bool {
        RAW_TEXT_ELEMENTS.contains(&self.name.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeKind {
    Root,
    Element(Element),
    Text(String),
    Comment(String),
    Declaration(String),
}

#[derive(Clone, Debug)]
struct Node {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    fn new(kind: NodeKind) -> Self {
        Self { kind, parent: None, children: Vec::new() }
    }
}

/// Match by tag name, by class token, or both.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Selector<'a> {
    tag: Option<&'a str>,
    class: Option<&'a str>,
}

impl<'a> Selector<'a> {
    pub const fn tag(tag: &'a str) -> Self {
        Self { tag: Some(tag), class: None }
    }

    pub const fn class(class: &'a str) -> Self {
        Self { tag: None, class: Some(class) }
    }

    pub const fn tag_class(tag: &'a str, class: &'a str) -> Self {
        Self { tag: Some(tag), class: Some(class) }
    }

    pub fn matches(&self, el: &Element) -> bool {
        self.tag.is_none_or(|t| el.name == t) && self.class.is_none_or(|c| el.has_class(c))
    }
}

#[derive(Clone, Debug)]
pub struct Document {
    nodes: Vec<Node>,
}

const ROOT: NodeId = NodeId(0);

impl Document {
    pub fn new() -> Self {
        Self { nodes: vec![Node::new(NodeKind::Root)] }
    }

    /// Build a tree from markup. Never fails; malformed input degrades to text.
    ///
    /// An end tag closes the nearest open element of the same name (and anything
    /// opened inside it); an end tag with no open match is dropped. Void elements
    /// never take children. Whatever is still open at the end is closed there.
    pub fn parse(markup: &str) -> Self {
        let mut doc = Self::new();
        let mut open: Vec<NodeId> = vec![ROOT];

        for token in Tokens::new(markup) {
            let top = open.last().copied().unwrap_or(ROOT);
            match token {
                Token::Text(t) => {
                    let id = doc.push(NodeKind::Text(s!(t)));
                    doc.append_child(top, id);
                }
                Token::Comment(c) => {
                    let id = doc.push(NodeKind::Comment(s!(c)));
                    doc.append_child(top, id);
                }
                Token::Declaration(d) => {
                    let id = doc.push(NodeKind::Declaration(s!(d)));
                    doc.append_child(top, id);
                }
                Token::StartTag { name, attrs, self_closing } => {
                    let el = Element { name, attrs };
                    let leaf = self_closing || el.is_void();
                    let id = doc.push(NodeKind::Element(el));
                    doc.append_child(top, id);
                    if !leaf {
                        open.push(id);
                    }
                }
                Token::EndTag { name } => {
                    if let Some(pos) = open.iter().rposition(|&id| doc.tag_name(id) == Some(name.as_str())) {
                        open.truncate(pos.max(1));
                    }
                }
            }
        }
        doc
    }

    pub fn root(&self) -> NodeId {
        ROOT
    }

    fn push(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(kind));
        id
    }

    /* ---------- reading ---------- */

    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.nodes[id.0].kind
    }

    pub fn element(&self, id: NodeId) -> Option<&Element> {
        match &self.nodes[id.0].kind {
            NodeKind::Element(el) => Some(el),
            _ => None,
        }
    }

    fn element_mut(&mut self, id: NodeId) -> Option<&mut Element> {
        match &mut self.nodes[id.0].kind {
            NodeKind::Element(el) => Some(el),
            _ => None,
        }
    }

    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        self.element(id).map(|el| el.name.as_str())
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.element(id)?.attr(name)
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.element(id).is_some_and(|el| el.has_class(class))
    }

    /// Reachable from the root.
    pub fn is_attached(&self, id: NodeId) -> bool {
        let mut cur = id;
        loop {
            if cur == ROOT {
                return true;
            }
            match self.nodes[cur.0].parent {
                Some(p) => cur = p,
                None => return false,
            }
        }
    }

    /// All nodes below `scope`, document order, `scope` itself excluded.
    pub fn descendants(&self, scope: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(scope).iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.children(id).iter().rev().copied());
        }
        out
    }

    /// Every matching element below `scope`, in document order.
    pub fn find_all(&self, scope: NodeId, sel: &Selector) -> Vec<NodeId> {
        self.descendants(scope)
            .into_iter()
            .filter(|&id| self.element(id).is_some_and(|el| sel.matches(el)))
            .collect()
    }

    /// First matching element below `scope`.
    pub fn find(&self, scope: NodeId, sel: &Selector) -> Option<NodeId> {
        let mut stack: Vec<NodeId> = self.children(scope).iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            if self.element(id).is_some_and(|el| sel.matches(el)) {
                return Some(id);
            }
            stack.extend(self.children(id).iter().rev().copied());
        }
        None
    }

    /// Visible text: entity-decoded, comments and script/style bodies skipped.
    pub fn text(&self, id: NodeId) -> String {
        let mut out = s!();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        match &self.nodes[id.0].kind {
            NodeKind::Text(t) => out.push_str(&html_escape::decode_html_entities(t)),
            NodeKind::Element(el) if el.is_raw_text() => {}
            NodeKind::Element(_) | NodeKind::Root => {
                for &child in &self.nodes[id.0].children {
                    self.collect_text(child, out);
                }
            }
            NodeKind::Comment(_) | NodeKind::Declaration(_) => {}
        }
    }

    /* ---------- mutation ---------- */

    /// Set (or replace) an attribute. No-op on non-elements.
    pub fn set_attr(&mut self, id: NodeId, name: &str, value: impl Into<String>) {
        let Some(el) = self.element_mut(id) else { return };
        let value = Some(value.into());
        match el.attrs.iter_mut().find(|a| a.name == name) {
            Some(a) => a.value = value,
            None => el.attrs.push(Attribute { name: s!(name), value }),
        }
    }

    /// Remove an attribute, returning its old value (`""` for a bare one).
    pub fn remove_attr(&mut self, id: NodeId, name: &str) -> Option<String> {
        let el = self.element_mut(id)?;
        let pos = el.attrs.iter().position(|a| a.name == name)?;
        Some(el.attrs.remove(pos).value.unwrap_or_default())
    }

    /// New, detached, attribute-less element.
    pub fn create_element(&mut self, name: &str) -> NodeId {
        self.push(NodeKind::Element(Element { name: name.to_ascii_lowercase(), attrs: Vec::new() }))
    }

    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.extract(child);
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    pub fn prepend_child(&mut self, parent: NodeId, child: NodeId) {
        self.extract(child);
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.insert(0, child);
    }

    /// Detach `id` (and its subtree) from its parent. The root cannot be extracted.
    pub fn extract(&mut self, id: NodeId) {
        if let Some(parent) = self.nodes[id.0].parent.take() {
            self.nodes[parent.0].children.retain(|&c| c != id);
        }
    }

    /// Replace `id` by its children, in place.
    pub fn unwrap(&mut self, id: NodeId) {
        let Some(parent) = self.nodes[id.0].parent else { return };
        let children = std::mem::take(&mut self.nodes[id.0].children);
        for &c in &children {
            self.nodes[c.0].parent = Some(parent);
        }
        let siblings = &mut self.nodes[parent.0].children;
        if let Some(pos) = siblings.iter().position(|&c| c == id) {
            siblings.splice(pos..=pos, children);
        }
        self.nodes[id.0].parent = None;
    }

    /* ---------- output ---------- */

    pub fn to_html(&self) -> String {
        self.outer_html(ROOT)
    }

    pub fn outer_html(&self, id: NodeId) -> String {
        let mut out = String::with_capacity(1024);
        self.write_node(id, &mut out);
        out
    }

    /// Just the opening tag, e.g. `<img alt="x">`. Used for error context.
    pub fn open_tag(&self, id: NodeId) -> String {
        let mut out = s!();
        if let Some(el) = self.element(id) {
            write_open_tag(el, &mut out);
        }
        out
    }

    fn write_node(&self, id: NodeId, out: &mut String) {
        let node = &self.nodes[id.0];
        match &node.kind {
            NodeKind::Root => {
                for &c in &node.children {
                    self.write_node(c, out);
                }
            }
            NodeKind::Element(el) => {
                write_open_tag(el, out);
                if el.is_void() {
                    return;
                }
                for &c in &node.children {
                    self.write_node(c, out);
                }
                out.push_str("</");
                out.push_str(&el.name);
                out.push('>');
            }
            NodeKind::Text(t) => out.push_str(t),
            NodeKind::Comment(c) => {
                out.push_str("<!--");
                out.push_str(c);
                out.push_str("-->");
            }
            NodeKind::Declaration(d) => out.push_str(d),
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

fn write_open_tag(el: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&el.name);
    for a in &el.attrs {
        out.push(' ');
        out.push_str(&a.name);
        if let Some(v) = &a.value {
            out.push_str("=\"");
            out.push_str(&html_escape::encode_double_quoted_attribute(v));
            out.push('"');
        }
    }
    out.push('>');
}
