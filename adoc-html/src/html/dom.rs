//! rcdom construction and serialization helpers.
//!
//! Output is built as an rcdom element tree and serialized with html5ever.
//! Pre-rendered markup coming from the upstream parser is grafted by parsing
//! it into a throwaway DOM and adopting the body's children; the serializer
//! then emits it as markup instead of escaping it a second time.

use crate::error::RenderError;
use html5ever::tendril::TendrilSink;
use html5ever::{
    ns, parse_document, serialize, serialize::SerializeOpts, serialize::TraversalScope, Attribute,
    LocalName, QualName,
};
use markup5ever_rcdom::{Handle, Node, NodeData, RcDom, SerializableHandle};
use std::cell::{Cell, RefCell};
use std::default::Default;
use std::rc::Rc;

/// Create an HTML element with attributes
pub(crate) fn create_element(tag: &str, attrs: Vec<(&str, &str)>) -> Handle {
    let qual_name = QualName::new(None, ns!(html), LocalName::from(tag));
    let attributes = attrs
        .into_iter()
        .map(|(name, value)| Attribute {
            name: QualName::new(None, ns!(), LocalName::from(name)),
            value: value.to_string().into(),
        })
        .collect();

    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Element {
            name: qual_name,
            attrs: RefCell::new(attributes),
            template_contents: Default::default(),
            mathml_annotation_xml_integration_point: false,
        },
    })
}

/// Create a text node
pub(crate) fn create_text(text: &str) -> Handle {
    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Text {
            contents: RefCell::new(text.to_string().into()),
        },
    })
}

/// Create an element and attach it to `parent`.
pub(crate) fn append_element(parent: &Handle, tag: &str, attrs: Vec<(&str, &str)>) -> Handle {
    let element = create_element(tag, attrs);
    parent.children.borrow_mut().push(element.clone());
    element
}

/// Attach a text node to `parent`.
pub(crate) fn append_text(parent: &Handle, text: &str) {
    parent.children.borrow_mut().push(create_text(text));
}

/// Graft pre-rendered markup into `parent` without re-escaping it.
///
/// html5ever's document parser wraps the fragment in html/head/body. Most
/// content lands in the body; markup that opens with head-eligible elements
/// (script, style, meta) lands in the head, so both are adopted, head first
/// to preserve source order.
pub(crate) fn append_raw(parent: &Handle, markup: &str) {
    if markup.is_empty() {
        return;
    }
    let dom = parse_document(RcDom::default(), Default::default()).one(markup);
    let Some(html) = find_child_element(&dom.document, "html") else {
        return;
    };
    for part in ["head", "body"] {
        if let Some(element) = find_child_element(&html, part) {
            let children = element.children.borrow();
            parent.children.borrow_mut().extend(children.iter().cloned());
        }
    }
}

fn find_child_element(node: &Handle, tag: &str) -> Option<Handle> {
    node.children
        .borrow()
        .iter()
        .find(|child| {
            matches!(&child.data, NodeData::Element { name, .. } if name.local.as_ref() == tag)
        })
        .cloned()
}

/// Serialize every child of `root` (the staging element itself excluded).
///
/// Uses `TraversalScope::IncludeNode` so each child element is emitted along
/// with its subtree.
pub(crate) fn serialize_children(root: &Handle) -> Result<String, RenderError> {
    let mut output = Vec::new();

    let opts = SerializeOpts {
        traversal_scope: TraversalScope::IncludeNode,
        ..Default::default()
    };

    for child in root.children.borrow().iter() {
        let serializable = SerializableHandle::from(child.clone());
        serialize(&mut output, &serializable, opts.clone()).map_err(|e| {
            RenderError::SerializationError(format!("HTML serialization failed: {e}"))
        })?;
    }

    String::from_utf8(output)
        .map_err(|e| RenderError::SerializationError(format!("UTF-8 conversion failed: {e}")))
}

/// Escape HTML special characters in text
pub(crate) fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
