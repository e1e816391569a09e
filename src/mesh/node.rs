// internal modules
use crate::utils::*;

// external crates
use serde::Serialize;

/// Representation of a single mesh node
///
/// An identified point in 3D space, as defined on an `ND` card.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Node {
    /// Unique node ID
    pub id: i64,
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
    /// Z coordinate, usually the elevation
    pub z: f64,
}

impl Node {
    /// Position of the node as an `[x, y, z]` array
    pub fn pos(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Canonical 2DM line for the node, without a line ending
    ///
    /// Coordinates are written with the shortest representation that reads
    /// back to exactly the same value.
    ///
    /// ```rust
    /// # use mesh2dm::mesh::Node;
    /// let node = Node { id: 3, x: 1.5, y: -2.0, z: 0.1 };
    /// assert_eq!(node.to_line(), "ND 3 1.5 -2.0 0.1");
    /// ```
    pub fn to_line(&self) -> String {
        f!("ND {} {:?} {:?} {:?}", self.id, self.x, self.y, self.z)
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "Node {:<6} {:>16} {:>16} {:>16}",
            self.id,
            self.x.sci(6, 2),
            self.y.sci(6, 2),
            self.z.sci(6, 2)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let node = Node {
            id: 1,
            x: 10.0,
            y: -0.5,
            z: 0.0,
        };
        assert_eq!(node.pos(), [10.0, -0.5, 0.0]);
        assert_eq!(node.to_line(), "ND 1 10.0 -0.5 0.0");
        assert_eq!(
            node.to_string(),
            "Node 1          1.000000e+01    -5.000000e-01     0.000000e+00"
        );
    }
}
