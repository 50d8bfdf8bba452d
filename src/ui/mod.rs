//! UI module - paints the home page document in a native window

pub mod components;
pub mod viewer;
