use crate::error::{TreeError, TreeResult};

/// An adjacency entry: the neighboring node and the branch length to it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    pub id: usize,
    pub length: f64,
}

/// One edge of the synthesized tree, as emitted by the engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
    pub length: f64,
}

/// Adjacency structure over all nodes of the tree under construction.
///
/// Neighbor lists keep insertion order, which makes traversals
/// deterministic. At termination every leaf has degree 1 and every
/// internal node degree 3.
#[derive(Debug, Clone, Default)]
pub struct NodeGraph {
    adjacency: Vec<Vec<Neighbor>>,
}

impl NodeGraph {
    pub fn with_nodes(n: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); n],
        }
    }

    pub fn num_nodes(&self) -> usize {
        self.adjacency.len()
    }

    pub fn add_node(&mut self) -> usize {
        self.adjacency.push(Vec::new());
        self.adjacency.len() - 1
    }

    fn check(&self, id: usize) -> TreeResult<()> {
        if id < self.adjacency.len() {
            Ok(())
        } else {
            Err(TreeError::OutOfRange {
                id,
                nodes: self.adjacency.len(),
            })
        }
    }

    /// Connect `a` and `b` with the given branch length.
    ///
    /// A repeated pair indicates a bug in the caller and is rejected.
    pub fn add_edge(&mut self, a: usize, b: usize, length: f64) -> TreeResult<()> {
        debug_assert_ne!(a, b);
        self.check(a)?;
        self.check(b)?;
        if self.adjacency[a].iter().any(|nb| nb.id == b) {
            return Err(TreeError::DuplicateEdge { a, b });
        }
        self.adjacency[a].push(Neighbor { id: b, length });
        self.adjacency[b].push(Neighbor { id: a, length });
        Ok(())
    }

    pub fn neighbors(&self, id: usize) -> TreeResult<&[Neighbor]> {
        self.check(id)?;
        Ok(&self.adjacency[id])
    }

    pub fn degree(&self, id: usize) -> TreeResult<usize> {
        self.check(id)?;
        Ok(self.adjacency[id].len())
    }
}
