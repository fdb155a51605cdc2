//! # Domain Models
//!
//! This crate contains pure domain types with minimal dependencies (`serde`, `strum`).
//! Keep it lean: no I/O or validation logic, just data and simple helpers.

pub mod config;
pub mod menu;
