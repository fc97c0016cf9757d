/// Depth-first search driver with step observation
pub mod backtrack;
/// Adjacency constraint checks
pub mod constraint;
/// Region id resolution and neighbor lists
pub mod graph;
/// Deterministic region ordering policies
pub mod ordering;
/// Map integrity checks and coloring verification
pub mod validation;
