use std::fmt;

use crate::node::Node;

/// Graph-description rendering of a tree's current shape, one edge per line.
///
/// Nodes are labelled `[first..last][value][lazy]`, so the pending adds that
/// have not reached the leaves yet are visible.
pub struct Dot<'a> {
    pub(crate) root: &'a Node,
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}..{}][{}][{}]",
            self.first, self.last, self.value, self.lazy
        )
    }
}

fn write_edges(f: &mut fmt::Formatter<'_>, node: &Node) -> fmt::Result {
    if let Some(children) = node.children.as_deref() {
        writeln!(f, "\"{node}\" -- \"{}\"", children.left)?;
        writeln!(f, "\"{node}\" -- \"{}\"", children.right)?;
        write_edges(f, &children.left)?;
        write_edges(f, &children.right)?;
    }
    Ok(())
}

impl fmt::Display for Dot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "@startuml")?;
        writeln!(f, "graph G {{")?;
        write_edges(f, self.root)?;
        writeln!(f, "}}")?;
        writeln!(f, "@enduml")
    }
}
