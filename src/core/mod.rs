// src/core/mod.rs

pub mod numeric;
pub mod sanitize;
