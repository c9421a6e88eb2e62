/// Frontier advancement with branching, collision and termination rules
pub mod generator;
/// Frontier nodes, emitted segments and split strategies
pub mod node;
/// Diagnostic records returned alongside a level's segments
pub mod trace;
