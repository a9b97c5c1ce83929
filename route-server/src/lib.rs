//! Multi-criteria route planner server.
//!
//! Answers "what is the best way from here to there" over a small, fixed
//! network of transport options, minimizing time, cost, distance or a
//! blend of time and cost.

pub mod cache;
pub mod domain;
pub mod network;
pub mod planner;
pub mod web;
