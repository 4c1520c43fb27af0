//! Charter Forge - Yacht Charter Contract Generation
//!
//! This crate implements charter risk assessment, a versioned legal
//! clause library with relevance-ranked search, and contract assembly
//! with HTML/PDF export.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
