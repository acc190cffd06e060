//! Parsed template tree.

/// One unit of a parsed template. Borrows from the template text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node<'a> {
    /// Literal output.
    Text(&'a str),
    /// `{path}` (escaped) or `{&path}` (raw). An empty path is the current item.
    Tag { path: &'a str, escape: bool },
    /// `{@name}`
    Link(&'a str),
    /// `{# ... #}`
    Comment,
    /// `{:path}...{/path}` or `{!path}...{/path}`
    Section(Section<'a>),
}

/// A section and everything between its open and close tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section<'a> {
    pub path: &'a str,
    /// True for `{!path}` sections, rendered only when the value is untruthy.
    pub inverse: bool,
    pub body: Vec<Node<'a>>,
    /// Source text of the body exactly as written, escapes unresolved.
    pub raw_body: &'a str,
}

/// The top-level node sequence of one template.
pub type Template<'a> = Vec<Node<'a>>;

/// Count every node in a tree, nested section bodies included.
pub fn node_count(nodes: &[Node<'_>]) -> usize {
    nodes
        .iter()
        .map(|node| match node {
            Node::Section(section) => 1 + node_count(&section.body),
            _ => 1,
        })
        .sum()
}
