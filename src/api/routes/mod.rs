//! API Routes
//!
//! Route handlers organized by functionality.

pub mod airports;
pub mod health;
pub mod meta;
