//! Build-time generator of version info source files.
//!
//! Parses a specification and an implementation version string and renders a
//! small, non-instantiable type exposing their components as constants.

pub mod app;
pub mod core;
