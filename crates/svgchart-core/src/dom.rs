// File: crates/svgchart-core/src/dom.rs
// Summary: Element capability trait, simple selectors, and an in-memory SVG tree.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};
use std::str::FromStr;

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::error::{ChartError, Result};

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Format a number the way it is written into SVG attributes (`10`, `12.5`).
pub fn fmt_num(v: f64) -> String {
    if v == 0.0 { "0".to_string() } else { v.to_string() }
}

/// Drawable element capability: the only surface the creation routines rely on.
///
/// Handles are cheap to clone and refer to the same underlying node; mutation
/// goes through `&self` since the tree is shared by the group, the container and
/// any listener holding a handle during a draw event.
pub trait Element: Clone {
    fn new(name: &str) -> Self;
    fn name(&self) -> String;
    fn set_attr(&self, name: &str, value: &str);
    fn attr(&self, name: &str) -> Option<String>;
    fn add_class(&self, class: &str);
    fn classes(&self) -> Vec<String>;
    fn append_child(&self, child: &Self);
    /// Detach from the parent, if any.
    fn remove(&self);
    /// Descendants (not including `self`) matching `selector`, in document order.
    fn query_all(&self, selector: &Selector) -> Vec<Self>;

    fn set_num(&self, name: &str, value: f64) {
        self.set_attr(name, &fmt_num(value));
    }

    /// Add every whitespace-separated class in `names`.
    fn add_classes(&self, names: &str) {
        for class in names.split_whitespace() {
            self.add_class(class);
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes().iter().any(|c| c == class)
    }

    fn query_selector_all(&self, selector: &str) -> Result<Vec<Self>> {
        let selector: Selector = selector.parse()?;
        Ok(self.query_all(&selector))
    }

    fn query_selector(&self, selector: &str) -> Result<Option<Self>> {
        Ok(self.query_selector_all(selector)?.into_iter().next())
    }
}

/// Compound selector: optional tag (or `*`), optional `#id`, any number of `.class`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selector {
    pub tag: Option<String>,
    pub id: Option<String>,
    pub classes: Vec<String>,
}

impl Selector {
    pub fn tag(name: impl Into<String>) -> Self {
        Self { tag: Some(name.into()), ..Self::default() }
    }

    pub fn class(name: impl Into<String>) -> Self {
        Self { classes: vec![name.into()], ..Self::default() }
    }

    pub fn with_class(mut self, name: impl Into<String>) -> Self {
        self.classes.push(name.into());
        self
    }

    pub fn matches(&self, name: &str, id: Option<&str>, classes: &[String]) -> bool {
        if let Some(tag) = &self.tag {
            if tag != "*" && tag != name { return false; }
        }
        if let Some(want) = &self.id {
            if id != Some(want.as_str()) { return false; }
        }
        self.classes.iter().all(|c| classes.iter().any(|have| have == c))
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

impl FromStr for Selector {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = |reason| ChartError::InvalidSelector { selector: s.to_string(), reason };
        let src = s.trim();
        if src.is_empty() {
            return Err(invalid("empty selector"));
        }
        if src.chars().any(char::is_whitespace) {
            return Err(invalid("combinators are not supported"));
        }

        let mut sel = Selector::default();
        let mut rest = src;
        if let Some(stripped) = rest.strip_prefix('*') {
            sel.tag = Some("*".to_string());
            rest = stripped;
        } else {
            let end = rest.find(|c: char| !is_ident_char(c)).unwrap_or(rest.len());
            if end > 0 {
                sel.tag = Some(rest[..end].to_string());
                rest = &rest[end..];
            }
        }

        while let Some(sigil) = rest.chars().next() {
            let body = &rest[sigil.len_utf8()..];
            let end = body.find(|c: char| !is_ident_char(c)).unwrap_or(body.len());
            if end == 0 {
                return Err(invalid("expected a name"));
            }
            let ident = body[..end].to_string();
            match sigil {
                '.' => sel.classes.push(ident),
                '#' if sel.id.is_none() => sel.id = Some(ident),
                '#' => return Err(invalid("more than one id")),
                _ => return Err(invalid("unexpected character")),
            }
            rest = &body[end..];
        }
        Ok(sel)
    }
}

// ---- in-memory tree -----------------------------------------------------------

struct Node {
    name: String,
    attrs: Vec<(String, String)>,
    classes: Vec<String>,
    text: Option<String>,
    children: Vec<SvgElement>,
    parent: Weak<RefCell<Node>>,
}

/// In-memory SVG element. Cloning yields another handle to the same node.
#[derive(Clone)]
pub struct SvgElement(Rc<RefCell<Node>>);

impl SvgElement {
    pub fn children(&self) -> Vec<SvgElement> {
        self.0.borrow().children.clone()
    }

    pub fn parent(&self) -> Option<SvgElement> {
        self.0.borrow().parent.upgrade().map(SvgElement)
    }

    pub fn set_text(&self, text: impl Into<String>) {
        self.0.borrow_mut().text = Some(text.into());
    }

    /// Whether `other` sits somewhere below this element.
    pub fn contains(&self, other: &SvgElement) -> bool {
        let mut cur = other.parent();
        while let Some(p) = cur {
            if p == *self { return true; }
            cur = p.parent();
        }
        false
    }

    /// Serialize this element and its subtree as markup.
    pub fn to_markup(&self) -> Result<String> {
        let mut writer = Writer::new(Vec::new());
        self.write_markup(&mut writer)?;
        String::from_utf8(writer.into_inner()).map_err(|e| ChartError::Markup(e.to_string()))
    }

    fn write_markup(&self, writer: &mut Writer<Vec<u8>>) -> Result<()> {
        let node = self.0.borrow();
        let mut start = BytesStart::new(node.name.as_str());
        for (k, v) in &node.attrs {
            start.push_attribute((k.as_str(), v.as_str()));
        }
        if !node.classes.is_empty() {
            start.push_attribute(("class", node.classes.join(" ").as_str()));
        }
        if node.children.is_empty() && node.text.is_none() {
            return write_event(writer, Event::Empty(start));
        }
        write_event(writer, Event::Start(start))?;
        if let Some(text) = &node.text {
            write_event(writer, Event::Text(BytesText::new(text)))?;
        }
        for child in &node.children {
            child.write_markup(writer)?;
        }
        write_event(writer, Event::End(BytesEnd::new(node.name.as_str())))
    }

    fn collect(&self, selector: &Selector, out: &mut Vec<SvgElement>) {
        for child in self.0.borrow().children.iter() {
            let matched = {
                let n = child.0.borrow();
                let id = n.attrs.iter().find(|(k, _)| k == "id").map(|(_, v)| v.as_str());
                selector.matches(&n.name, id, &n.classes)
            };
            if matched {
                out.push(child.clone());
            }
            child.collect(selector, out);
        }
    }
}

fn write_event(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<()> {
    writer.write_event(event).map_err(|e| ChartError::Markup(e.to_string()))
}

impl Element for SvgElement {
    fn new(name: &str) -> Self {
        SvgElement(Rc::new(RefCell::new(Node {
            name: name.to_string(),
            attrs: Vec::new(),
            classes: Vec::new(),
            text: None,
            children: Vec::new(),
            parent: Weak::new(),
        })))
    }

    fn name(&self) -> String {
        self.0.borrow().name.clone()
    }

    fn set_attr(&self, name: &str, value: &str) {
        let mut node = self.0.borrow_mut();
        if name == "class" {
            node.classes = value.split_whitespace().map(str::to_string).collect();
            return;
        }
        match node.attrs.iter_mut().find(|(k, _)| k == name) {
            Some(slot) => slot.1 = value.to_string(),
            None => node.attrs.push((name.to_string(), value.to_string())),
        }
    }

    fn attr(&self, name: &str) -> Option<String> {
        let node = self.0.borrow();
        if name == "class" {
            return (!node.classes.is_empty()).then(|| node.classes.join(" "));
        }
        node.attrs.iter().find(|(k, _)| k == name).map(|(_, v)| v.clone())
    }

    fn add_class(&self, class: &str) {
        let mut node = self.0.borrow_mut();
        if !node.classes.iter().any(|c| c == class) {
            node.classes.push(class.to_string());
        }
    }

    fn classes(&self) -> Vec<String> {
        self.0.borrow().classes.clone()
    }

    fn append_child(&self, child: &Self) {
        child.remove();
        child.0.borrow_mut().parent = Rc::downgrade(&self.0);
        self.0.borrow_mut().children.push(child.clone());
    }

    fn remove(&self) {
        let parent = self.0.borrow().parent.upgrade();
        if let Some(parent) = parent {
            parent.borrow_mut().children.retain(|c| !Rc::ptr_eq(&c.0, &self.0));
        }
        self.0.borrow_mut().parent = Weak::new();
    }

    fn query_all(&self, selector: &Selector) -> Vec<Self> {
        let mut out = Vec::new();
        self.collect(selector, &mut out);
        out
    }
}

impl PartialEq for SvgElement {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for SvgElement {}

impl fmt::Debug for SvgElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.0.borrow();
        f.debug_struct("SvgElement")
            .field("name", &node.name)
            .field("attrs", &node.attrs)
            .field("classes", &node.classes)
            .field("children", &node.children.len())
            .finish()
    }
}

impl fmt::Display for SvgElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_markup().map_err(|_| fmt::Error)?)
    }
}
