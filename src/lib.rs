//! Destructible terrain for 2D physics worlds.
//!
//! Static boundary bodies are carved by subtracting a disc-shaped cutter
//! from their outlines; the surviving pieces are rebuilt as new bodies that
//! keep the original collision classification.

pub mod config;
pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod session;
pub mod world;

pub use error::{Result, TerracutError};
