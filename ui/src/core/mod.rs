//! Platform-agnostic state and helpers shared by the components.

pub mod config;
pub mod format;
pub mod locale;
pub mod platform;
pub mod preferences;
pub mod scroll;
pub mod sections;
