//! EduSearch Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared plumbing used by every EduSearch workspace member.
//!
//! - **Logging**: `tracing` subscriber setup driven by environment variables
//!
//! # Example
//!
//! ```no_run
//! use edusearch_common::logging::{init_logging, LogConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     init_logging(&LogConfig::from_env()?)?;
//!     tracing::info!("ready");
//!     Ok(())
//! }
//! ```

pub mod logging;
