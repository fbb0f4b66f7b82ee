use serde::Serialize;

/// Distances from one source to every node; `f64::INFINITY` marks an unreachable node.
pub type DistanceVector = Vec<f64>;

/// Result of a shortest-path engine whose input may contain a negative cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum ShortestPaths<T> {
    Distances(T),
    /// A negative cycle is reachable, so the distances are unbounded below
    NegativeCycle,
}

impl<T> ShortestPaths<T> {
    pub fn is_negative_cycle(&self) -> bool {
        matches!(self, ShortestPaths::NegativeCycle)
    }

    /// Returns the distances, or `None` if a negative cycle was detected
    pub fn distances(self) -> Option<T> {
        match self {
            ShortestPaths::Distances(distances) => Some(distances),
            ShortestPaths::NegativeCycle => None,
        }
    }

    pub fn map<U, F>(self, f: F) -> ShortestPaths<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            ShortestPaths::Distances(distances) => ShortestPaths::Distances(f(distances)),
            ShortestPaths::NegativeCycle => ShortestPaths::NegativeCycle,
        }
    }
}

/// Row-major `n x n` table of distances, one row per source node.
///
/// Non-finite entries serialize as `null` in JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistanceMatrix {
    node_count: usize,
    data: Vec<f64>,
}

impl DistanceMatrix {
    /// Creates a matrix with every entry set to `value`
    pub fn filled(node_count: usize, value: f64) -> Self {
        DistanceMatrix {
            node_count,
            data: vec![value; node_count * node_count],
        }
    }

    /// Stacks single-source rows; every row must have one entry per row.
    pub fn from_rows(rows: Vec<DistanceVector>) -> Self {
        let node_count = rows.len();
        debug_assert!(rows.iter().all(|row| row.len() == node_count));
        DistanceMatrix {
            node_count,
            data: rows.into_iter().flatten().collect(),
        }
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Distance from `from` to `to`.
    ///
    /// # Panics
    ///
    /// Panics if `from` or `to` is not below `node_count`. See [`DistanceMatrix::try_get`].
    pub fn get(&self, from: usize, to: usize) -> f64 {
        assert!(to < self.node_count, "column {} out of range", to);
        self.data[from * self.node_count + to]
    }

    /// Distance from `from` to `to`, or `None` if either index is out of range
    pub fn try_get(&self, from: usize, to: usize) -> Option<f64> {
        if from < self.node_count && to < self.node_count {
            Some(self.data[from * self.node_count + to])
        } else {
            None
        }
    }

    /// # Panics
    ///
    /// Panics if `from` or `to` is not below `node_count`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        assert!(to < self.node_count, "column {} out of range", to);
        self.data[from * self.node_count + to] = distance;
    }

    /// Distances from `from` to every node.
    ///
    /// # Panics
    ///
    /// Panics if `from` is not below `node_count`.
    pub fn row(&self, from: usize) -> &[f64] {
        &self.data[from * self.node_count..(from + 1) * self.node_count]
    }

    /// # Panics
    ///
    /// Panics if `from` is not below `node_count`.
    pub fn row_mut(&mut self, from: usize) -> &mut [f64] {
        &mut self.data[from * self.node_count..(from + 1) * self.node_count]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        // chunks(0) panics, and an empty matrix has no rows anyway
        self.data.chunks(self.node_count.max(1))
    }

    /// Compares two matrices entry by entry.
    ///
    /// Finite entries may differ by at most `tolerance`; infinite entries must match
    /// exactly.
    pub fn approx_eq(&self, other: &DistanceMatrix, tolerance: f64) -> bool {
        self.node_count == other.node_count
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(&a, &b)| distances_match(a, b, tolerance))
    }
}

/// Either result shape, as kept by the benchmark harness.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceResult {
    Vector(DistanceVector),
    Matrix(DistanceMatrix),
}

/// True when both distances are the same infinity, or finite and within `tolerance`.
pub fn distances_match(a: f64, b: f64, tolerance: f64) -> bool {
    if a.is_infinite() || b.is_infinite() {
        a == b
    } else {
        (a - b).abs() <= tolerance
    }
}
