pub mod grid;

pub use grid::{GridStyle, render_week};
