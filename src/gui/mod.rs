// src/gui/mod.rs
pub mod app;
pub mod components;
pub mod thumbnails;

pub use app::run;
