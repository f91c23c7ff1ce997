//! API Routes
//!
//! Route handlers organized by functionality.

pub mod chart;
pub mod health;
pub mod shell;
