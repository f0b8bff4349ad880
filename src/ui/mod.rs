pub mod common;
pub mod icon;
pub mod page_style;
pub mod pages;
pub mod parallax;
pub mod progress_bar;
pub mod reveal;
pub mod scroll;
pub mod spring;

pub use icon::{Icon, icons};
pub use pages::{LandingPage, NotFoundPage};
pub use parallax::ParallaxSection;
pub use progress_bar::ScrollProgressBar;
pub use reveal::{AnimatedButton, AnimatedDescription, AnimatedTitle, Reveal};
