// Presentation layer: pure functions from view state to terminal text.

pub mod chart;
pub mod format;
pub mod i18n;
pub mod render;
