//! Level-by-level growth of the circuit pattern
//!
//! The generator owns a frontier of live [`Node`]s. Each call to
//! [`PatternGenerator::advance`] decides, for every frontier node in order,
//! whether it terminates or which moves it takes, emits one [`Segment`] per
//! decision and installs the admitted successors as the next frontier.
//!
//! Per node the random draws always happen in the same order: split
//! strategy, termination, then moves. A move whose target is already claimed
//! by a successor admitted earlier in the same level is rejected and removed
//! from the table, so a node makes at most one draw per distinct move.

use crate::algorithm::node::{Node, Segment, SplitStrategy};
use crate::algorithm::trace::{LevelTrace, NodeTrace, SuccessorTrace};
use crate::io::configuration::{
    DEFAULT_MIN_ROW_DENSITY, DEFAULT_TERMINATION_SCALE, TERMINATION_TABLE_NAME,
    default_move_table, default_split_table,
};
use crate::io::error::{Result, invalid_parameter};
use crate::math::probability::ProbabilityTable;
use crate::math::random::{RandomSource, SeededSource};
use crate::spatial::bounds::{GridBounds, in_bounds};
use crate::spatial::direction::Move;
use crate::spatial::point::Point;

/// How likely an eligible node is to terminate
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TerminationPolicy {
    /// Chance grows with level progress: `progress * scale`
    Progressive {
        /// Multiplier applied to level progress
        scale: f64,
    },
    /// Constant chance regardless of progress
    Fixed(f64),
}

impl TerminationPolicy {
    /// Termination chance for a node at `progress`, clamped to `[0, 1]`
    pub fn chance(self, progress: f64) -> f64 {
        let chance = match self {
            Self::Progressive { scale } => progress * scale,
            Self::Fixed(chance) => chance,
        };

        if chance.is_nan() {
            0.0
        } else {
            chance.clamp(0.0, 1.0)
        }
    }
}

impl Default for TerminationPolicy {
    fn default() -> Self {
        Self::Progressive {
            scale: DEFAULT_TERMINATION_SCALE,
        }
    }
}

/// Tuning for branching, moves and termination
#[derive(Debug, Clone, PartialEq)]
pub struct GrowthConfig {
    /// Weights for how many moves a node attempts per level
    pub split_weights: ProbabilityTable<SplitStrategy>,
    /// Weights for the relative moves of a continuing node
    pub move_weights: ProbabilityTable<Move>,
    /// Termination chance for eligible nodes
    pub termination: TerminationPolicy,
    /// Nodes that must share a row before any of them may terminate
    pub min_row_density: usize,
}

impl Default for GrowthConfig {
    fn default() -> Self {
        Self {
            split_weights: default_split_table(),
            move_weights: default_move_table(),
            termination: TerminationPolicy::default(),
            min_row_density: DEFAULT_MIN_ROW_DENSITY,
        }
    }
}

impl GrowthConfig {
    /// Check every table and parameter
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if a table is malformed, the move table
    /// contains [`Move::Terminate`] or the termination policy is out of range
    pub fn validate(&self) -> Result<()> {
        ProbabilityTable::validated(
            self.split_weights.name(),
            self.split_weights.entries().to_vec(),
        )?;
        ProbabilityTable::validated(
            self.move_weights.name(),
            self.move_weights.entries().to_vec(),
        )?;

        if self.move_weights.weight(Move::Terminate).is_some() {
            return Err(invalid_parameter(
                "move",
                &Move::Terminate,
                &"termination is decided separately and cannot be weighted",
            ));
        }

        match self.termination {
            TerminationPolicy::Progressive { scale } if !scale.is_finite() || scale < 0.0 => Err(
                invalid_parameter("termination_scale", &scale, &"must be finite and >= 0"),
            ),
            TerminationPolicy::Fixed(chance) if !(0.0..=1.0).contains(&chance) => Err(
                invalid_parameter("termination_chance", &chance, &"must lie in [0, 1]"),
            ),
            _ => Ok(()),
        }
    }
}

/// Decisions taken for one node before any successor is admitted
#[derive(Debug)]
struct NodePlan {
    split: SplitStrategy,
    sufficient_density: bool,
    termination_chance: f64,
    actions: Vec<Move>,
    rejected: Vec<Move>,
}

impl NodePlan {
    fn into_trace(self, node: &Node, successors: Vec<SuccessorTrace>) -> NodeTrace {
        NodeTrace {
            orientation: node.orientation.label(),
            position: node.position,
            level: node.level,
            split: self.split,
            sufficient_density: self.sufficient_density,
            termination_chance: self.termination_chance,
            actions: self.actions,
            rejected: self.rejected,
            successors,
        }
    }
}

/// Stateful generator advancing a frontier of growth points one level per call
#[derive(Debug, Clone)]
pub struct PatternGenerator<S = SeededSource> {
    bounds: GridBounds,
    frontier: Vec<Node>,
    config: GrowthConfig,
    source: S,
    levels_advanced: u32,
}

impl PatternGenerator<SeededSource> {
    /// Generator over a `cells_wide` by `cells_high` grid with a seeded source
    pub fn new(cells_wide: u32, cells_high: u32, seed: u64) -> Self {
        Self::with_source(cells_wide, cells_high, SeededSource::new(seed))
    }
}

impl<S: RandomSource> PatternGenerator<S> {
    /// Generator drawing from `source`, seeded with the four origin nodes
    pub fn with_source(cells_wide: u32, cells_high: u32, source: S) -> Self {
        Self {
            bounds: GridBounds::from_cells(cells_wide, cells_high),
            frontier: Node::seeds(),
            config: GrowthConfig::default(),
            source,
            levels_advanced: 0,
        }
    }

    /// Replace the initial frontier
    #[must_use]
    pub fn with_frontier(mut self, frontier: Vec<Node>) -> Self {
        self.frontier = frontier;
        self
    }

    /// Replace the growth tuning
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails [`GrowthConfig::validate`]
    pub fn with_config(mut self, config: GrowthConfig) -> Result<Self> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    /// Nodes that will grow on the next call
    pub fn frontier(&self) -> &[Node] {
        &self.frontier
    }

    /// Whether growth has fully terminated
    pub fn is_exhausted(&self) -> bool {
        self.frontier.is_empty()
    }

    /// Grid bounds, with cell counts already incremented
    pub const fn bounds(&self) -> &GridBounds {
        &self.bounds
    }

    /// Active growth tuning
    pub const fn config(&self) -> &GrowthConfig {
        &self.config
    }

    /// Number of completed advancement calls
    pub const fn levels_advanced(&self) -> u32 {
        self.levels_advanced
    }

    /// Whether `node` lies inside the grid bounds
    pub fn is_in_bounds(&self, node: &Node) -> bool {
        in_bounds(node, self.bounds.half_width(), self.bounds.half_height())
    }

    /// Distance travelled along the growth axis relative to the grid extent on that axis
    pub fn level_progress(&self, node: &Node) -> f64 {
        node.along_axis().abs() / self.bounds.extent_along(node.orientation)
    }

    /// Whether `node` is off its starting row and enough nodes share its row
    pub fn has_sufficient_density(&self, node: &Node) -> bool {
        row_is_dense(node, &self.frontier, self.config.min_row_density)
    }

    /// Advance every frontier node by one level and return the emitted segments
    ///
    /// Segments are ordered by frontier node, then by move. An exhausted
    /// generator returns no segments.
    ///
    /// # Errors
    ///
    /// Returns `MalformedTable` if a probability table cannot absorb a draw.
    /// The frontier is left as it was before the call.
    pub fn advance(&mut self) -> Result<Vec<Segment>> {
        self.step(None)
    }

    /// Like [`Self::advance`], also returning a trace of every node's decisions
    ///
    /// # Errors
    ///
    /// Same as [`Self::advance`]
    pub fn advance_traced(&mut self) -> Result<(Vec<Segment>, LevelTrace)> {
        let mut trace = LevelTrace::default();
        let segments = self.step(Some(&mut trace))?;
        Ok((segments, trace))
    }

    fn step(&mut self, trace: Option<&mut LevelTrace>) -> Result<Vec<Segment>> {
        let current = std::mem::take(&mut self.frontier);

        match self.grow(&current, trace) {
            Ok((segments, next)) => {
                log::debug!(
                    "level {}: {} nodes emitted {} segments, {} survive",
                    self.levels_advanced,
                    current.len(),
                    segments.len(),
                    next.len()
                );
                self.frontier = next;
                self.levels_advanced += 1;
                Ok(segments)
            }
            Err(error) => {
                self.frontier = current;
                Err(error)
            }
        }
    }

    fn grow(
        &mut self,
        current: &[Node],
        mut trace: Option<&mut LevelTrace>,
    ) -> Result<(Vec<Segment>, Vec<Node>)> {
        let mut segments = Vec::with_capacity(current.len());
        let mut next: Vec<Node> = Vec::with_capacity(current.len());

        for node in current {
            let plan = self.plan(node, current, &next)?;
            let mut successors = Vec::with_capacity(plan.actions.len());

            for &action in &plan.actions {
                let segment = Segment::from_node(node, action);
                segments.push(segment);

                if action.is_terminal() {
                    continue;
                }

                let successor = node.successor(segment.end);
                let in_bounds = self.is_in_bounds(&successor);
                let available = is_available(segment.end, current, &next);
                if in_bounds && available {
                    next.push(successor);
                }

                successors.push(SuccessorTrace {
                    position: segment.end,
                    in_bounds,
                    available,
                });
            }

            log::trace!(
                "{} node at {} (level {}): {:?}, rejected {:?}",
                node.orientation,
                node.position,
                node.level,
                plan.actions,
                plan.rejected
            );

            if let Some(trace) = trace.as_deref_mut() {
                trace.nodes.push(plan.into_trace(node, successors));
            }
        }

        Ok((segments, next))
    }

    fn plan(&mut self, node: &Node, current: &[Node], next: &[Node]) -> Result<NodePlan> {
        let split = self.config.split_weights.draw(&mut self.source)?;

        let sufficient_density = row_is_dense(node, current, self.config.min_row_density);
        let termination_chance = if sufficient_density {
            self.config.termination.chance(self.level_progress(node))
        } else {
            0.0
        };

        let mut plan = NodePlan {
            split,
            sufficient_density,
            termination_chance,
            actions: Vec::with_capacity(split.branch_count()),
            rejected: Vec::new(),
        };

        let termination = ProbabilityTable::new(
            TERMINATION_TABLE_NAME,
            vec![(true, termination_chance), (false, 1.0 - termination_chance)],
        );
        if termination.draw(&mut self.source)? {
            plan.actions.push(Move::Terminate);
            return Ok(plan);
        }

        // Every draw removes its move from the table, bounding the loop by the move count
        let mut candidates = self.config.move_weights.clone();
        while plan.actions.len() < split.branch_count() && !candidates.is_empty() {
            let action = candidates.draw(&mut self.source)?;
            candidates = candidates.without(action);

            if is_claimed(node.target(action), next) {
                plan.rejected.push(action);
            } else {
                plan.actions.push(action);
            }
        }

        if plan.actions.is_empty() {
            plan.actions.push(Move::Terminate);
        }

        Ok(plan)
    }
}

/// Whether `node` is off its starting row and at least `min_density` nodes share its row
fn row_is_dense(node: &Node, frontier: &[Node], min_density: usize) -> bool {
    node.along_axis() != 0.0
        && frontier
            .iter()
            .filter(|other| node.shares_row(other))
            .count()
            >= min_density
}

/// Whether a successor admitted this level already holds `position`
fn is_claimed(position: Point, next: &[Node]) -> bool {
    next.iter().any(|node| node.position == position)
}

// Checked against both frontiers so no two admitted successors share a cell
fn is_available(position: Point, current: &[Node], next: &[Node]) -> bool {
    !current.iter().any(|node| node.position == position) && !is_claimed(position, next)
}
