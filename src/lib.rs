//! # Pondlife
//!
//! Headless host for the pond engine: a facade over the member crates and an
//! [`app::App`] that plays a simple keeper routine against in-memory
//! collaborators.

pub mod app;
pub mod model;
