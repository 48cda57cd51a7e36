//! Embedded content node writing.

use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use crate::core::XmlNode;
use crate::error::AtomResult;

/// Splices a content node tree into the output stream.
///
/// `clear_default_ns` is set for documents whose root declares the Atom
/// namespace as the default namespace; the top-level embedded elements
/// then carry `xmlns=""` so the payload markup stays namespace-less.
/// Nested elements inherit that and declare nothing.
pub(super) fn write_nodes<W: std::io::Write>(
    writer: &mut Writer<W>,
    nodes: &[XmlNode],
    clear_default_ns: bool,
) -> AtomResult<()> {
    for node in nodes {
        write_node(writer, node, clear_default_ns)?;
    }
    Ok(())
}

fn write_node<W: std::io::Write>(
    writer: &mut Writer<W>,
    node: &XmlNode,
    clear_default_ns: bool,
) -> AtomResult<()> {
    match node {
        XmlNode::Text(text) => {
            writer.write_event(Event::Text(BytesText::new(text)))?;
        }
        XmlNode::Element { name, children } => {
            let mut elem = BytesStart::new(name.as_str());
            if clear_default_ns {
                elem.push_attribute(("xmlns", ""));
            }
            if children.is_empty() {
                writer.write_event(Event::Empty(elem))?;
            } else {
                writer.write_event(Event::Start(elem))?;
                for child in children {
                    write_node(writer, child, false)?;
                }
                writer.write_event(Event::End(BytesEnd::new(name.as_str())))?;
            }
        }
    }
    Ok(())
}
