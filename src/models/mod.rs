pub mod grid;
pub mod time;

pub use grid::*;
pub use time::*;
