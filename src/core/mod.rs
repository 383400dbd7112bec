//! Core generation logic and infrastructure

pub mod build_info;
pub mod error;
pub mod error_handling;
pub mod generator;
pub mod logging;
pub mod strings;
pub mod version;
pub mod writer;
