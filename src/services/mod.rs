//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own filesystem and codec concerns so route handlers can
//! stay focused on protocol translation and status mapping.

pub mod package;
