use crate::error::{TreeError, TreeResult};

/// Pairwise distances over every node ever created, leaf or synthesized.
///
/// The table is append-only: merging never removes a row. The set of nodes
/// still eligible for pairing is tracked separately as the active view,
/// which shrinks by one id per merge.
#[derive(Debug, Clone)]
pub struct DistanceTable {
    names: Vec<Box<str>>,
    data: Vec<f64>,
    num_leaves: usize,
    active: Vec<usize>,
    is_active: Vec<bool>,
}

impl DistanceTable {
    /// Build a table from validated taxa names and a square symmetric
    /// zero-diagonal matrix. The active set starts as all leaves.
    pub fn new(names: Vec<Box<str>>, data: Vec<f64>) -> Self {
        let n = names.len();
        assert_eq!(
            data.len(),
            n * n,
            "distance matrix data length mismatch: expected {}, got {}",
            n * n,
            data.len()
        );
        Self {
            names,
            data,
            num_leaves: n,
            active: (0..n).collect(),
            is_active: vec![true; n],
        }
    }

    pub fn num_leaves(&self) -> usize {
        self.num_leaves
    }

    /// Total number of nodes created so far, leaves included.
    pub fn num_nodes(&self) -> usize {
        self.names.len()
    }

    /// Ids still eligible for pairing, in ascending order.
    pub fn active(&self) -> &[usize] {
        &self.active
    }

    pub fn names(&self) -> &[Box<str>] {
        &self.names
    }

    pub fn name(&self, id: usize) -> TreeResult<&str> {
        self.check(id)?;
        Ok(&self.names[id])
    }

    fn check(&self, id: usize) -> TreeResult<()> {
        if id < self.names.len() {
            Ok(())
        } else {
            Err(TreeError::OutOfRange {
                id,
                nodes: self.names.len(),
            })
        }
    }

    fn check_active(&self, id: usize) -> TreeResult<()> {
        self.check(id)?;
        if self.is_active[id] {
            Ok(())
        } else {
            Err(TreeError::OutOfRange {
                id,
                nodes: self.names.len(),
            })
        }
    }

    /// Symmetric lookup over the full table.
    pub fn distance(&self, i: usize, j: usize) -> TreeResult<f64> {
        self.check(i)?;
        self.check(j)?;
        let n = self.names.len();
        Ok(self.data[i * n + j])
    }

    /// Symmetric lookup restricted to the active view.
    pub fn active_distance(&self, i: usize, j: usize) -> TreeResult<f64> {
        self.check_active(i)?;
        self.check_active(j)?;
        let n = self.names.len();
        Ok(self.data[i * n + j])
    }

    /// Sum of active distances from `i` to every other active node.
    pub fn total_active_distance(&self, i: usize) -> TreeResult<f64> {
        self.check_active(i)?;
        let n = self.names.len();
        let mut total = 0.0;
        for &k in &self.active {
            if k != i {
                total += self.data[i * n + k];
            }
        }
        Ok(total)
    }

    /// Store `value` at both (i,j) and (j,i).
    pub fn set_distance(&mut self, i: usize, j: usize, value: f64) -> TreeResult<()> {
        self.check(i)?;
        self.check(j)?;
        let n = self.names.len();
        self.data[i * n + j] = value;
        self.data[j * n + i] = value;
        Ok(())
    }

    /// Replace active nodes `i` and `j` with a freshly appended node.
    ///
    /// The estimator is evaluated against the pre-merge table for every
    /// remaining active `k`; the results are stored symmetrically in the
    /// new row. Returns the new node's id.
    pub fn merge_into(
        &mut self,
        i: usize,
        j: usize,
        name: Box<str>,
        estimator: impl Fn(&Self, usize) -> TreeResult<f64>,
    ) -> TreeResult<usize> {
        self.check_active(i)?;
        self.check_active(j)?;

        let others: Vec<usize> = self
            .active
            .iter()
            .copied()
            .filter(|&k| k != i && k != j)
            .collect();
        let mut estimated = Vec::with_capacity(others.len());
        for &k in &others {
            estimated.push((k, estimator(self, k)?));
        }

        let u = self.push_node(name);
        for (k, d) in estimated {
            self.set_distance(u, k, d)?;
        }

        self.active.retain(|&k| k != i && k != j);
        self.active.push(u);
        self.is_active[i] = false;
        self.is_active[j] = false;
        Ok(u)
    }

    // Grow the square table by one row and column, zero-filled.
    fn push_node(&mut self, name: Box<str>) -> usize {
        let old = self.names.len();
        let new = old + 1;
        let mut data = vec![0.0; new * new];
        for i in 0..old {
            for j in 0..old {
                data[i * new + j] = self.data[i * old + j];
            }
        }
        self.data = data;
        self.names.push(name);
        self.is_active.push(true);
        old
    }
}
