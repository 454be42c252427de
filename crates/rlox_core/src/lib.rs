//! rlox_core: Core utilities for the rlox front end.
//!
//! Provides the source-location types shared by the scanner and the
//! diagnostic infrastructure.

pub mod text;

// Re-export commonly used types
pub use text::{TextPos, TextSpan};
