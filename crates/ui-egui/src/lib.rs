pub mod app;
pub mod clipboard;
pub mod overlay;
pub mod theme;

pub use app::*;
