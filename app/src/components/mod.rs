//! UI Components
//!
//! The preferences form and the small controls it is built from.

pub mod notice;
pub mod preferences;
pub mod select;

pub use preferences::Preferences;
