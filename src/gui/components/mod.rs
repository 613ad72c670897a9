// src/gui/components/mod.rs
pub mod charts;
pub mod deals;
pub mod filter_panel;
pub mod kpis;
pub mod listings_table;
pub mod tabs;
