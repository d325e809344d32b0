use core::fmt;

use indextree::NodeId;

use super::{DOM, DOMNode, Namespace, NodeKind};

fn write_indent(out: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
    for _ in 0..depth {
        out.write_str("  ")?;
    }
    Ok(())
}

fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Foreign elements print with their namespace, `<svg path>`.
fn qualified_tag(tag: &str, namespace: Namespace) -> String {
    match namespace {
        Namespace::Html => tag.to_owned(),
        Namespace::Svg => format!("svg {tag}"),
        Namespace::MathMl => format!("math {tag}"),
        Namespace::Other => format!("? {tag}"),
    }
}

fn fmt_node(dom: &DOM, id: NodeId, out: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
    let Some(DOMNode { kind, attrs }) = dom.node(id) else {
        return Ok(());
    };
    match kind {
        NodeKind::Document => {
            write_indent(out, depth)?;
            writeln!(out, "#document")?;
        }
        NodeKind::Element { tag, namespace } => {
            write_indent(out, depth)?;
            write!(out, "<{}", qualified_tag(tag, *namespace))?;
            for (name, value) in attrs {
                write!(out, " {name}=\"{}\"", escape_text(value))?;
            }
            writeln!(out, ">")?;
        }
        NodeKind::Text { text } => {
            // Whitespace-only runs are noise in a dump.
            if text.chars().all(char::is_whitespace) {
                return Ok(());
            }
            write_indent(out, depth)?;
            writeln!(out, "\"{}\"", escape_text(text))?;
        }
    }
    for child in dom.children(id) {
        fmt_node(dom, child, out, depth + 1)?;
    }
    Ok(())
}

impl fmt::Debug for DOM {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(out, "DOM")?;
        fmt_node(self, self.root, out, 0)
    }
}
