//! E-commerce Analytics Dashboard
//!
//! Runs a fixed catalogue of reporting queries against an e-commerce MySQL
//! database and renders each result as a table, a single value, or a table
//! with a bar or pie chart.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
