pub mod button;

pub use button::LinkButton;
