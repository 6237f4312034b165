//! Search trace and exploration statistics.
//!
//! The trace is a flat, append-only log of nodes in the order they were
//! popped. Parent/child links are not stored: a node's parent is the node
//! whose sequence is its sequence minus the last task, so the tree can be
//! rebuilt on demand from indices into the log.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Explored | Nodes popped from the frontier |
//! | Pruned | Popped nodes whose bound could not beat the incumbent |
//! | Expanded | Explored − pruned |
//! | Prune rate | Pruned / explored |

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::SearchNode;

/// Ordered record of every node popped during a search.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SearchTrace {
    nodes: Vec<SearchNode>,
    explored: u64,
    pruned: u64,
}

/// Explored / pruned counts at one depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepthStats {
    /// Sequence length.
    pub depth: usize,
    /// Nodes popped at this depth.
    pub explored: usize,
    /// Of which pruned.
    pub pruned: usize,
}

/// Aggregate exploration statistics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TraceStats {
    /// Nodes popped from the frontier.
    pub explored: u64,
    /// Nodes discarded by the bound check.
    pub pruned: u64,
    /// Nodes that were evaluated and branched on.
    pub expanded: u64,
    /// Deepest recorded node.
    pub max_depth: usize,
    /// Fraction of explored nodes that were pruned (0.0..1.0).
    pub prune_rate: f64,
}

impl SearchTrace {
    /// Creates an empty trace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a popped node, storing it only when `keep` is set.
    pub(crate) fn record(&mut self, node: SearchNode, keep: bool) {
        self.explored += 1;
        if node.pruned {
            self.pruned += 1;
        }
        if keep {
            self.nodes.push(node);
        }
    }

    /// Recorded nodes in pop order.
    pub fn nodes(&self) -> &[SearchNode] {
        &self.nodes
    }

    /// Number of recorded nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether no node was recorded.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates recorded nodes in pop order.
    pub fn iter(&self) -> impl Iterator<Item = &SearchNode> {
        self.nodes.iter()
    }

    /// The root node (empty sequence), if recorded.
    pub fn root(&self) -> Option<&SearchNode> {
        self.nodes.first().filter(|n| n.sequence.is_empty())
    }

    /// Index of the node whose sequence is the given node's sequence
    /// without its last task. `None` for the root or unrecorded parents.
    pub fn parent_of(&self, index: usize) -> Option<usize> {
        let node = self.nodes.get(index)?;
        let (_, prefix) = node.sequence.split_last()?;
        self.nodes[..index]
            .iter()
            .position(|n| n.sequence.as_slice() == prefix)
    }

    /// Indices of the recorded children of a node, in pop order.
    pub fn children_of(&self, index: usize) -> Vec<usize> {
        let Some(node) = self.nodes.get(index) else {
            return Vec::new();
        };
        let depth = node.sequence.len();
        self.nodes
            .iter()
            .enumerate()
            .skip(index + 1)
            .filter(|(_, n)| {
                n.sequence.len() == depth + 1 && n.sequence.starts_with(&node.sequence)
            })
            .map(|(i, _)| i)
            .collect()
    }

    /// All `(parent, child)` index pairs of the reconstructed tree.
    pub fn edges(&self) -> Vec<(usize, usize)> {
        let index: HashMap<&[usize], usize> = self
            .nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (n.sequence.as_slice(), i))
            .collect();

        self.nodes
            .iter()
            .enumerate()
            .filter_map(|(child, n)| {
                let (_, prefix) = n.sequence.split_last()?;
                index.get(prefix).map(|&parent| (parent, child))
            })
            .collect()
    }

    /// Explored and pruned counts per depth, ordered by depth.
    pub fn depth_profile(&self) -> Vec<DepthStats> {
        let max_depth = self.nodes.iter().map(|n| n.depth).max();
        let Some(max_depth) = max_depth else {
            return Vec::new();
        };

        let mut profile: Vec<DepthStats> = (0..=max_depth)
            .map(|depth| DepthStats {
                depth,
                explored: 0,
                pruned: 0,
            })
            .collect();
        for node in &self.nodes {
            let entry = &mut profile[node.depth];
            entry.explored += 1;
            if node.pruned {
                entry.pruned += 1;
            }
        }
        profile
    }

    /// Aggregate statistics. Counts cover every popped node, recorded or not.
    pub fn stats(&self) -> TraceStats {
        let prune_rate = if self.explored == 0 {
            0.0
        } else {
            self.pruned as f64 / self.explored as f64
        };

        TraceStats {
            explored: self.explored,
            pruned: self.pruned,
            expanded: self.explored - self.pruned,
            max_depth: self.nodes.iter().map(|n| n.depth).max().unwrap_or(0),
            prune_rate,
        }
    }
}
