//! Node strings, i.e. polylines through existing nodes
//!
//! A node string in a file may be split over several `NS` lines, with the
//! final node ID negated to mark the end. Only the complete string is stored
//! here, with the sign of the last ID restored.

// internal modules
use crate::utils::*;

// external crates
use itertools::Itertools;
use serde::Serialize;

/// Default number of node IDs written per `NS` line
pub const DEFAULT_FOLD: usize = 10;

/// Representation of a complete node string
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NodeString {
    /// Node IDs in order along the string
    pub nodes: Vec<i64>,
    /// Optional name given after the terminating node
    pub name: Option<String>,
}

impl NodeString {
    /// Number of nodes in the node string
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Canonical 2DM lines for the node string
    ///
    /// At most `fold` node IDs are written per line, with `0` meaning no
    /// limit. The last node ID is negated and followed by the name, if any.
    /// An empty node string has no lines at all.
    ///
    /// ```rust
    /// # use mesh2dm::mesh::NodeString;
    /// let node_string = NodeString {
    ///     nodes: vec![1, 2, 3, 4, 5],
    ///     name: Some("Inflow".to_string()),
    /// };
    /// assert_eq!(node_string.to_lines(3), ["NS 1 2 3", "NS 4 -5 Inflow"]);
    /// ```
    pub fn to_lines(&self, fold: usize) -> Vec<String> {
        let n_nodes = self.nodes.len();
        let fold = if fold == 0 { n_nodes.max(1) } else { fold };

        let mut lines = Vec::with_capacity(n_nodes / fold + 1);
        for (line_index, chunk) in self.nodes.chunks(fold).enumerate() {
            let is_last = (line_index + 1) * fold >= n_nodes;
            let ids = chunk.iter().enumerate().map(|(i, id)| {
                if is_last && i == chunk.len() - 1 {
                    f!("-{id}")
                } else {
                    f!("{id}")
                }
            });

            let mut line = f!("NS {}", ids.format(" "));
            if is_last {
                if let Some(name) = &self.name {
                    line += &f!(" {name}");
                }
            }
            lines.push(line);
        }
        lines
    }

    /// The node string on a single line
    pub fn to_line(&self) -> String {
        self.to_lines(0).into_iter().next().unwrap_or_default()
    }
}

impl std::fmt::Display for NodeString {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match &self.name {
            Some(name) => write!(f, "NodeString \"{name}\": ")?,
            None => write!(f, "Unnamed NodeString: ")?,
        }
        write!(f, "({})", self.nodes.iter().join(", "))
    }
}
