#![warn(missing_docs)]
//! Perfect maze generation with Hunt-and-Kill, and a compact text encoding for the result

pub mod codec;
pub mod constants;
pub mod cursor;
pub mod error;
pub mod generator;
pub mod grid;
pub mod settings;

pub use error::MazeError;
