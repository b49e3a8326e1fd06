/// Cell placement and tile fitting arithmetic
pub mod grid;

pub use grid::GridLayout;
