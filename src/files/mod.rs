//! File Inspection Module
//!
//! - [`text`]: non-blank line checks and `touch`

pub mod text;

pub use text::{is_empty_txt, touch, DEFAULT_MIN_NON_EMPTY_LINES};
