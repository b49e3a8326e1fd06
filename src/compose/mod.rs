/// Source-over alpha compositing
pub mod blend;
/// Bitmap caption rendering
pub mod caption;
/// Tile placement and canvas composition
pub mod collage;

pub use collage::{Collage, CollageStyle, TilePlacement, compose_collage};
