//! AST traits - Common interfaces for uniform node access
//!
//! This module defines the common traits that provide uniform access
//! to node information across all node types.

/// Common interface for all document nodes
pub trait AstNode {
    fn node_type(&self) -> &'static str;
    fn display_label(&self) -> String;
}

/// Nodes that serialize back to source text
pub trait RawText {
    /// Append this node's exact source text to `out`
    fn write_raw(&self, out: &mut String);

    /// This node's exact source text
    fn raw_text(&self) -> String {
        let mut out = String::new();
        self.write_raw(&mut out);
        out
    }
}
