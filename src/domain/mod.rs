//! Domain types shared by every layer of the anonymizer.
//!
//! - **Error types** ([`AnonymizerError`])
//! - **Result type alias** ([`Result`])
//!
//! ```rust
//! use anonymizer::domain::{AnonymizerError, Result};
//!
//! fn check(size: usize, limit: usize) -> Result<()> {
//!     if size > limit {
//!         return Err(AnonymizerError::PayloadTooLarge { size, limit });
//!     }
//!     Ok(())
//! }
//! # assert!(check(1, 2).is_ok());
//! ```

pub mod errors;
pub mod result;

pub use errors::AnonymizerError;
pub use result::Result;
