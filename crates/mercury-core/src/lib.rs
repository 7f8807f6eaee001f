//! # Mercury Core
//!
//! Foundational types shared by every Mercury crate:
//!
//! - [`errors`]: the application error type and its HTTP response mapping
//! - [`password`]: bcrypt password hashing and verification
//!
//! # Example
//!
//! ```ignore
//! use mercury_core::{AppError, hash_password, verify_password};
//!
//! let digest = hash_password("pw1")?;
//! if !verify_password("pw1", &digest)? {
//!     return Err(AppError::unauthorized("Invalid password credentials".to_string()));
//! }
//! ```

pub mod errors;
pub mod password;

// Re-export commonly used types at crate root
pub use errors::AppError;
pub use password::{hash_password, verify_password};
