//! Foundation constants for schema file generation.
//!
//! This module has NO dependencies on other sdl-export modules.

pub mod constants;
