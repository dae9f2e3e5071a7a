//! Foundation types for spatial navigation.
//!
//! This crate contains the platform-agnostic types shared by the navigation
//! engine and its hosts: screen geometry, directions and key profiles,
//! user settings, and error types.

pub mod config;
pub mod error;
pub mod geometry;
pub mod input;
