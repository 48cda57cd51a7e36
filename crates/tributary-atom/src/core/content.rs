//! Structured entry content and its XML projection.
//!
//! Entry content is carried as a [`serde_json::Value`] and embedded into
//! `atom:content` as inline XML. The conversion follows the conventions of
//! the upstream JSON-to-XML mapping: object fields become elements, arrays
//! repeat the enclosing field element, and scalars become text.

use serde_json::Value;

/// A generic XML node produced from a content value.
///
/// Content markup never carries attributes, so elements are just a name
/// plus children.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum XmlNode {
    /// An element with a name and child nodes.
    Element {
        /// Element local name, taken from the object key.
        name: String,
        /// Child nodes in document order.
        children: Vec<XmlNode>,
    },
    /// A text node.
    Text(String),
}

impl XmlNode {
    /// Creates an element node.
    #[must_use]
    pub fn element(name: impl Into<String>, children: Vec<XmlNode>) -> Self {
        Self::Element {
            name: name.into(),
            children,
        }
    }

    /// Creates a text node.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }
}

/// Element name used for array items that have no enclosing field name.
const ITEM_ELEMENT: &str = "item";

/// Encodes an object key as a valid XML local name.
///
/// Characters that are not valid XML name characters are escaped as
/// `_xHHHH_` (eight hex digits for supplementary-plane characters), the
/// JSON-to-XML key-encoding convention: `a b` becomes `a_x0020_b`, a
/// leading digit becomes `_x0031_...`. Colons are escaped too, so keys
/// never smuggle in a namespace prefix. A literal `_x` has its underscore
/// escaped (`_x005F_x`) to keep encoded names unambiguous, and an empty
/// key maps to a bare underscore.
fn encode_local_name(key: &str) -> String {
    if key.is_empty() {
        return "_".to_owned();
    }
    let mut name = String::with_capacity(key.len());
    let mut chars = key.chars().peekable();
    let mut first = true;
    while let Some(ch) = chars.next() {
        let valid = if first {
            is_name_start_char(ch)
        } else {
            is_name_char(ch)
        };
        if ch == '_' && chars.peek() == Some(&'x') {
            name.push_str("_x005F_");
        } else if valid {
            name.push(ch);
        } else {
            push_escape(&mut name, ch);
        }
        first = false;
    }
    name
}

fn push_escape(name: &mut String, ch: char) {
    let code = u32::from(ch);
    if code > 0xFFFF {
        name.push_str(&format!("_x{code:08X}_"));
    } else {
        name.push_str(&format!("_x{code:04X}_"));
    }
}

/// XML 1.0 `NameStartChar`, minus the colon.
fn is_name_start_char(ch: char) -> bool {
    matches!(ch,
        'A'..='Z' | '_' | 'a'..='z'
        | '\u{C0}'..='\u{D6}' | '\u{D8}'..='\u{F6}' | '\u{F8}'..='\u{2FF}'
        | '\u{370}'..='\u{37D}' | '\u{37F}'..='\u{1FFF}'
        | '\u{200C}'..='\u{200D}' | '\u{2070}'..='\u{218F}'
        | '\u{2C00}'..='\u{2FEF}' | '\u{3001}'..='\u{D7FF}'
        | '\u{F900}'..='\u{FDCF}' | '\u{FDF0}'..='\u{FFFD}'
        | '\u{10000}'..='\u{EFFFF}')
}

/// XML 1.0 `NameChar`, minus the colon.
fn is_name_char(ch: char) -> bool {
    is_name_start_char(ch)
        || matches!(ch,
            '-' | '.' | '0'..='9' | '\u{B7}'
            | '\u{300}'..='\u{36F}' | '\u{203F}'..='\u{2040}')
}

/// Converts a content value into the XML nodes embedded in `atom:content`.
///
/// ## Summary
/// Object fields map to elements named after the key, in field order;
/// keys that are not valid XML names are encoded character by character
/// as `_xHHHH_` so the embedded markup stays well-formed. A
/// field holding an array repeats the field element once per item. Arrays
/// without a naming context (the root value, or an array nested directly
/// inside another array) wrap each item in an `item` element. Scalars map
/// to text: strings verbatim, numbers with their JSON token text, booleans
/// as `true`/`false`. `null` produces no nodes, so a `null` field becomes
/// an empty element.
#[must_use]
pub fn content_nodes(value: &Value) -> Vec<XmlNode> {
    match value {
        Value::Null => Vec::new(),
        Value::Bool(b) => vec![XmlNode::Text(b.to_string())],
        Value::Number(n) => vec![XmlNode::Text(n.to_string())],
        Value::String(s) => vec![XmlNode::Text(s.clone())],
        Value::Array(items) => items
            .iter()
            .map(|item| XmlNode::element(ITEM_ELEMENT, content_nodes(item)))
            .collect(),
        Value::Object(fields) => fields
            .iter()
            .flat_map(|(key, field)| field_nodes(key, field))
            .collect(),
    }
}

/// Produces the elements for a single object field.
fn field_nodes(key: &str, value: &Value) -> Vec<XmlNode> {
    let name = encode_local_name(key);
    match value {
        Value::Array(items) => items
            .iter()
            .map(|item| XmlNode::element(name.as_str(), content_nodes(item)))
            .collect(),
        _ => vec![XmlNode::element(name, content_nodes(value))],
    }
}
