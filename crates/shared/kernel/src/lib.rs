//! Kernel utilities shared across applications.
//! Keep this crate lightweight; it hosts config loading and re-exports the domain.
//!
//! ## Config loading
//! ```rust,no_run
//! use forno_kernel::config::load_config;
//! use forno_kernel::domain::config::ShellConfig;
//!
//! let cfg: ShellConfig = load_config(Some("config/local.toml")).unwrap_or_default();
//! ```
pub mod config;

pub use forno_domain as domain;
