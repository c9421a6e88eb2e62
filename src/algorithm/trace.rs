//! Per-level diagnostic records
//!
//! Traces are returned to the caller alongside the segments of a level. They
//! describe what the generator decided; building one never changes the
//! generator's state or output.

use crate::algorithm::node::SplitStrategy;
use crate::spatial::direction::Move;
use crate::spatial::point::Point;

/// Bounds and availability of one candidate successor
#[derive(Debug, Clone, PartialEq)]
pub struct SuccessorTrace {
    /// Candidate position
    pub position: Point,
    /// Whether the candidate lies inside the grid bounds
    pub in_bounds: bool,
    /// Whether no other node already holds the candidate position
    pub available: bool,
}

impl SuccessorTrace {
    /// Whether the candidate joined the next frontier
    pub const fn admitted(&self) -> bool {
        self.in_bounds && self.available
    }
}

/// Decisions made for one frontier node
#[derive(Debug, Clone, PartialEq)]
pub struct NodeTrace {
    /// Orientation label of the node
    pub orientation: &'static str,
    /// Node position before the level
    pub position: Point,
    /// Node level before the level
    pub level: u32,
    /// Drawn split strategy
    pub split: SplitStrategy,
    /// Whether the node's row was dense enough to allow termination
    pub sufficient_density: bool,
    /// Probability of termination that was applied
    pub termination_chance: f64,
    /// Moves that produced segments
    pub actions: Vec<Move>,
    /// Moves rejected because the target was already claimed
    pub rejected: Vec<Move>,
    /// Candidate successors, one per non-terminal action
    pub successors: Vec<SuccessorTrace>,
}

/// Trace of one full advancement
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LevelTrace {
    /// One entry per node of the frontier that was advanced, in frontier order
    pub nodes: Vec<NodeTrace>,
}

impl LevelTrace {
    /// Total number of rejected draws across the level
    pub fn rejection_count(&self) -> usize {
        self.nodes.iter().map(|node| node.rejected.len()).sum()
    }

    /// Number of nodes that terminated this level
    pub fn terminated_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|node| node.actions.iter().any(|action| action.is_terminal()))
            .count()
    }
}
