//! Sketching and measuring chains of line segments on a grid canvas.

pub mod app;
pub mod geometry;
pub mod graph;
pub mod model;
pub mod render;
pub mod tools;
