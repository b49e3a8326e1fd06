//! Random N×N photo collage generation
//!
//! Images are discovered recursively in a directory, sampled uniformly without
//! replacement, sorted by path, then fitted into square tiles with filename
//! captions and written out as PNG or JPEG.

#![forbid(unsafe_code)]

/// Canvas composition and caption drawing
pub mod compose;
/// Input/output operations, configuration and error handling
pub mod io;
/// Grid geometry for tiles, captions and the canvas
pub mod layout;
/// Random selection of source images
pub mod sampling;

pub use io::error::{CollageError, Result};
