//! Domain Services - pure classification and resolution logic
//!
//! These services carry the heuristic core of the engine: deriving a
//! coarse role for each node, deciding whether a style value is still at
//! its unthemed baseline, computing the per-node style mutation, and
//! reverting what a previous application wrote.

pub mod default_classifier;
pub mod revert_resolver;
pub mod role_inspector;
pub mod style_resolver;

pub use role_inspector::{role_of, NodeRole};
pub use style_resolver::{resolve, StyleMutation};
