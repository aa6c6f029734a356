//! Colour representation shared by frames and renderers.

pub mod color;

pub use color::Color;
