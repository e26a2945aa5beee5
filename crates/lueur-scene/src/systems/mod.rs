pub mod lantern;
pub mod reveal;
pub mod sky;
pub mod swivel;
pub mod walk;
