//! Station-spacing model for the transit coverage paradox.
//!
//! More stations put everyone closer to the line, but every stop slows the
//! train. For a given line this crate evaluates each feasible station count,
//! computes a closed-form door-to-door journey time, and finds the count
//! that minimises it.

pub mod config;
pub mod domain;
pub mod form;
pub mod sweep;
pub mod web;
