//! Data models for bill extraction.

pub mod bill;
pub mod config;
