//! Kernel utilities shared across the workspace.
//! Keep this crate lightweight; today it owns layered configuration loading.
//!
//! ```rust,no_run
//! use cp3_kernel::config::load_app_config;
//!
//! let cfg = load_app_config(None::<&str>).unwrap_or_default();
//! assert!(!cfg.store.url.is_empty());
//! ```
#[cfg(not(target_arch = "wasm32"))]
pub mod config;

pub use cp3_domain as domain;
