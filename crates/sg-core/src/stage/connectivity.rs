//! Connectivity of the major-room edge graph
//!
//! Tracks which rooms are reachable from each other using equivalence
//! classes, the same bookkeeping a later corridor pass would start from.

use super::triangulation::Edge;

/// Tracks room connectivity using equivalence classes
#[derive(Debug, Clone)]
pub struct ConnectivityTracker {
    /// Room ids covered by the tracker
    ids: Vec<usize>,
    /// Each tracked room's equivalence class, parallel to `ids`
    classes: Vec<usize>,
}

impl ConnectivityTracker {
    /// Create a tracker where every room starts in its own class
    pub fn new(ids: &[usize]) -> Self {
        Self {
            ids: ids.to_vec(),
            classes: (0..ids.len()).collect(),
        }
    }

    /// Create a tracker and merge along every edge
    pub fn from_edges(ids: &[usize], edges: &[Edge]) -> Self {
        let mut tracker = Self::new(ids);
        for edge in edges {
            tracker.merge(edge.a, edge.b);
        }
        tracker
    }

    fn slot(&self, id: usize) -> Option<usize> {
        self.ids.iter().position(|&i| i == id)
    }

    /// Check if two rooms are connected (in same equivalence class)
    pub fn are_connected(&self, a: usize, b: usize) -> bool {
        match (self.slot(a), self.slot(b)) {
            (Some(a), Some(b)) => self.classes[a] == self.classes[b],
            _ => false,
        }
    }

    /// Merge equivalence classes when rooms are connected
    pub fn merge(&mut self, a: usize, b: usize) {
        let (Some(a), Some(b)) = (self.slot(a), self.slot(b)) else {
            return;
        };

        let old_class = self.classes[b];
        let new_class = self.classes[a];

        for class in &mut self.classes {
            if *class == old_class {
                *class = new_class;
            }
        }
    }

    /// Check if all rooms are connected
    pub fn all_connected(&self) -> bool {
        match self.classes.first() {
            None => true,
            Some(&first) => self.classes.iter().all(|&c| c == first),
        }
    }

    /// Number of separate groups
    pub fn component_count(&self) -> usize {
        let mut seen: Vec<usize> = Vec::new();
        for &class in &self.classes {
            if !seen.contains(&class) {
                seen.push(class);
            }
        }
        seen.len()
    }
}
