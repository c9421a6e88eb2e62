//! Weighted sampling and random sources for the growth engine

/// Ordered probability tables with mass-conserving label removal
pub mod probability;
/// Injectable uniform random sources
pub mod random;
