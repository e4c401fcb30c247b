//! Core transformation pipeline
//!
//! Two halves, matching the two sides of the product:
//! - `normalize`: author input → stored LaTeX-annotated text
//! - `render`: stored text → display lines

pub mod normalize;
pub mod render;
