//! Resume screening on top of the vector-space scorer.

pub mod advice;
pub mod analytics;
pub mod audit;
pub mod classify;
pub mod explain;
pub mod model;
pub mod pipeline;
pub mod roles;
pub mod skills;
