//! The SVG element model used to assemble charts.
//!
//! Nodes form a closed set of variants rather than an open class hierarchy:
//!
//! - [`Element`] - a generic markup element with a tag, an insertion-ordered
//!   attribute map, and an optional child list
//! - [`Rect`] - a positioned box with fixed `x`/`y`/`width`/`height` geometry
//! - [`Text`] - a positioned label wrapping a [`Literal`] payload
//! - [`Literal`] - a raw text leaf, emitted verbatim
//!
//! All variants serialize through [`std::fmt::Display`]. Serialization is
//! order-sensitive: attributes appear in insertion order, and overwriting an
//! attribute keeps its original position. This keeps output reproducible for
//! golden-file comparison.
//!
//! # Void elements
//!
//! An [`Element`] whose child list is absent is a *void* element and
//! serializes self-closing (`<tag />`) with no closing tag. An element with
//! an *empty* child list still gets an explicit body (`<tag></tag>`). The two
//! states produce different output and must not be conflated.
//!
//! # Escaping
//!
//! Attribute values and literal text are interpolated verbatim; no escaping
//! of `"`, `<`, or `&` is performed. The chart vocabulary is a fixed, trusted
//! set of codes and numbers, so the serializer trades hardening for exact,
//! predictable bytes. Do not feed untrusted text through this model.

use std::fmt;

use indexmap::IndexMap;
use log::debug;

use crate::measure::Measurement;

/// An attribute value with a text serialization.
///
/// The set is closed: plain text, a bare number, or a unit-tagged
/// [`Measurement`].
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    /// Plain text, emitted verbatim.
    Text(String),
    /// A bare number without a unit suffix.
    Number(f64),
    /// A unit-tagged measurement, e.g. `20px`.
    Measure(Measurement),
}

impl AttrValue {
    /// Returns the value as a [`Measurement`] if it is numeric.
    ///
    /// Bare numbers are taken as measurements in the default unit. Text has
    /// no numeric interpretation and yields `None`.
    fn to_measurement(&self) -> Option<Measurement> {
        match self {
            AttrValue::Text(_) => None,
            AttrValue::Number(value) => Some(Measurement::new(*value)),
            AttrValue::Measure(measure) => Some(*measure),
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Text(text) => f.write_str(text),
            AttrValue::Number(value) => write!(f, "{value}"),
            AttrValue::Measure(measure) => write!(f, "{measure}"),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Text(value)
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        AttrValue::Number(value)
    }
}

impl From<Measurement> for AttrValue {
    fn from(value: Measurement) -> Self {
        AttrValue::Measure(value)
    }
}

/// An insertion-ordered attribute map.
///
/// Keys are unique. Inserting an existing key overwrites the value but keeps
/// the key's original position, so serialized attribute order is stable under
/// updates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes(IndexMap<String, AttrValue>);

impl Attributes {
    /// Creates an empty attribute map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites an attribute.
    ///
    /// A new key is appended at the end; an existing key keeps its position
    /// and only the value changes.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        self.0.insert(name.into(), value.into());
    }

    /// Returns the value for `name`, if present.
    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.0.get(name)
    }

    /// Iterates attributes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Returns the number of attributes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Checks whether the map is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Attributes {
    /// Writes each attribute as ` name="value"`, leading space included.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, value) in self.iter() {
            write!(f, " {name}=\"{value}\"")?;
        }
        Ok(())
    }
}

/// A generic markup element.
///
/// The tag is fixed at construction; attributes and children may be mutated
/// afterwards. `children: None` marks a void element (see [module
/// documentation](self)).
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: String,
    attributes: Attributes,
    children: Option<Vec<Node>>,
}

impl Element {
    /// Creates a non-void element with an empty body.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Attributes::new(),
            children: Some(Vec::new()),
        }
    }

    /// Creates a void element: no body, serialized self-closing.
    pub fn new_void(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Attributes::new(),
            children: None,
        }
    }

    /// Returns the tag name.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns the attribute map.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Returns the child list, or `None` for a void element.
    pub fn children(&self) -> Option<&[Node]> {
        self.children.as_deref()
    }

    /// Inserts or overwrites an attribute (see [`Attributes::insert`]).
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        self.attributes.insert(name, value);
    }

    /// Sets the `class` attribute, replacing any previous value wholesale.
    pub fn add_class(&mut self, value: impl Into<AttrValue>) {
        self.set_attribute("class", value);
    }

    /// Appends a child node.
    ///
    /// On a void element this first materializes an empty body, turning the
    /// element non-void.
    pub fn push_child(&mut self, child: impl Into<Node>) {
        self.children.get_or_insert_default().push(child.into());
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}{}", self.tag, self.attributes)?;
        match &self.children {
            None => write!(f, " />"),
            Some(children) => {
                write!(f, ">")?;
                for child in children {
                    write!(f, "{child}")?;
                }
                write!(f, "</{}>", self.tag)
            }
        }
    }
}

/// A positioned box. Serializes as a void `rect` element.
///
/// The geometry attributes are fixed fields and always serialize first, in
/// the order `x, y, width, height`; extra attributes such as `id` and `class`
/// follow in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct Rect {
    x: Measurement,
    y: Measurement,
    width: Measurement,
    height: Measurement,
    extra: Attributes,
}

impl Rect {
    /// Creates a rectangle, wrapping each coordinate in a default-unit
    /// [`Measurement`].
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x: Measurement::new(x),
            y: Measurement::new(y),
            width: Measurement::new(width),
            height: Measurement::new(height),
            extra: Attributes::new(),
        }
    }

    /// Returns the `x` coordinate.
    pub fn x(&self) -> Measurement {
        self.x
    }

    /// Returns the `y` coordinate.
    pub fn y(&self) -> Measurement {
        self.y
    }

    /// Returns the width.
    pub fn width(&self) -> Measurement {
        self.width
    }

    /// Returns the height.
    pub fn height(&self) -> Measurement {
        self.height
    }

    /// Returns the extra (non-geometry) attributes.
    pub fn extra(&self) -> &Attributes {
        &self.extra
    }

    /// Inserts or overwrites an attribute.
    ///
    /// The fixed geometry keys update the stored field in place and keep
    /// their serialized position; any other key goes to the extra map. A
    /// non-numeric value on a geometry key has no sensible interpretation and
    /// is dropped (logged at debug level).
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        let name = name.into();
        let value = value.into();
        let field = match name.as_str() {
            "x" => Some(&mut self.x),
            "y" => Some(&mut self.y),
            "width" => Some(&mut self.width),
            "height" => Some(&mut self.height),
            _ => None,
        };
        match field {
            Some(field) => match value.to_measurement() {
                Some(measure) => *field = measure,
                None => debug!(name; "Ignoring non-numeric value for rect geometry attribute"),
            },
            None => self.extra.insert(name, value),
        }
    }

    /// Sets the `class` attribute, replacing any previous value wholesale.
    pub fn add_class(&mut self, value: impl Into<AttrValue>) {
        self.set_attribute("class", value);
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"{} />",
            self.x, self.y, self.width, self.height, self.extra
        )
    }
}

/// A positioned label. Serializes as a `text` element whose single child is
/// the [`Literal`] content.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    x: Measurement,
    y: Measurement,
    content: Literal,
    extra: Attributes,
}

impl Text {
    /// Creates a text label at the given position.
    pub fn new(x: f64, y: f64, content: impl Into<String>) -> Self {
        Self {
            x: Measurement::new(x),
            y: Measurement::new(y),
            content: Literal::new(content),
            extra: Attributes::new(),
        }
    }

    /// Returns the `x` coordinate.
    pub fn x(&self) -> Measurement {
        self.x
    }

    /// Returns the `y` coordinate.
    pub fn y(&self) -> Measurement {
        self.y
    }

    /// Returns the literal content.
    pub fn content(&self) -> &Literal {
        &self.content
    }

    /// Inserts or overwrites an attribute (same key handling as
    /// [`Rect::set_attribute`], with `x`/`y` as the fixed keys).
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        let name = name.into();
        let value = value.into();
        let field = match name.as_str() {
            "x" => Some(&mut self.x),
            "y" => Some(&mut self.y),
            _ => None,
        };
        match field {
            Some(field) => match value.to_measurement() {
                Some(measure) => *field = measure,
                None => debug!(name; "Ignoring non-numeric value for text geometry attribute"),
            },
            None => self.extra.insert(name, value),
        }
    }

    /// Sets the `class` attribute, replacing any previous value wholesale.
    pub fn add_class(&mut self, value: impl Into<AttrValue>) {
        self.set_attribute("class", value);
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<text x=\"{}\" y=\"{}\"{}>{}</text>",
            self.x, self.y, self.extra, self.content
        )
    }
}

/// A raw text leaf, emitted verbatim with no surrounding markup.
#[derive(Debug, Clone, PartialEq)]
pub struct Literal(String);

impl Literal {
    /// Creates a literal from raw text.
    pub fn new(content: impl Into<String>) -> Self {
        Self(content.into())
    }

    /// Returns the raw text.
    pub fn content(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Any node in the element tree.
///
/// The variant set is closed. Attribute operations are available uniformly;
/// on a [`Literal`] they are documented no-ops, since a literal has no markup
/// surface to carry attributes.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A generic element.
    Element(Element),
    /// A positioned box.
    Rect(Rect),
    /// A positioned label.
    Text(Text),
    /// A raw text leaf.
    Literal(Literal),
}

impl Node {
    /// Inserts or overwrites an attribute on the underlying variant.
    ///
    /// No-op on a [`Literal`].
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        match self {
            Node::Element(element) => element.set_attribute(name, value),
            Node::Rect(rect) => rect.set_attribute(name, value),
            Node::Text(text) => text.set_attribute(name, value),
            Node::Literal(_) => {}
        }
    }

    /// Sets the `class` attribute, replacing any previous value wholesale.
    ///
    /// No-op on a [`Literal`].
    pub fn add_class(&mut self, value: impl Into<AttrValue>) {
        self.set_attribute("class", value);
    }

    /// Returns the inner [`Rect`] if this node is one.
    pub fn as_rect(&self) -> Option<&Rect> {
        match self {
            Node::Rect(rect) => Some(rect),
            _ => None,
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Element(element) => write!(f, "{element}"),
            Node::Rect(rect) => write!(f, "{rect}"),
            Node::Text(text) => write!(f, "{text}"),
            Node::Literal(literal) => write!(f, "{literal}"),
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<Rect> for Node {
    fn from(rect: Rect) -> Self {
        Node::Rect(rect)
    }
}

impl From<Text> for Node {
    fn from(text: Text) -> Self {
        Node::Text(text)
    }
}

impl From<Literal> for Node {
    fn from(literal: Literal) -> Self {
        Node::Literal(literal)
    }
}
