//! UI primitives for CLI rendering.

pub mod format;

pub use format::{pad_left, pad_right, truncate};
