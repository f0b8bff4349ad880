//! Scroll animation pipeline and page content, independent of the browser

#[cfg(feature = "ssr")]
pub mod config;
pub mod content;
mod keyframes;
mod page_style;
mod parallax;
mod progress;
mod reveal;
mod source;
mod spring;

pub use keyframes::*;
pub use page_style::*;
pub use parallax::*;
pub use progress::*;
pub use reveal::*;
pub use source::*;
pub use spring::*;
