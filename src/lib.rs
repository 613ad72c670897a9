// src/lib.rs

#[macro_use]
pub mod macros;

pub mod config;
pub mod core;
pub mod error;

pub mod analysis;
pub mod collect;
pub mod csv;
pub mod data;
pub mod file;
pub mod gui;
pub mod listing;
pub mod log;
pub mod normalize;
pub mod progress;

pub use error::{Error, Result};
