//! Shared helpers for services.
//!
//! - [`db`]: constraint violation mapping

pub mod db;
