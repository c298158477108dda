//! Facade crate for the Cp3Pro features and shared modules.
//! Re-exports domain/kernel primitives, the store client and the feature slices.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `cp3` with the `client` feature to get the Dioxus components.
//! - Build a [`store::Store`] from [`domain::config::StoreConfig`] and provide it as context.

pub use cp3_domain as domain;
pub use cp3_kernel as kernel;
pub use cp3_store as store;

/// Feature registry for runtime introspection.
pub mod features {
    pub use cp3_registration as registration;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        "registration",
        #[cfg(feature = "client")]
        "client",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}
