//! Default hash builder selection.
//!
//! The hasher used by [`HashSet::new`](super::HashSet::new) is chosen at
//! compile time by Cargo feature:
//!
//! | Feature  | `DefaultHashBuilder`           |
//! |----------|--------------------------------|
//! | `fxhash` | `rustc_hash::FxBuildHasher`    |
//! | `ahash`  | `ahash::RandomState`           |
//! | (none)   | `std::hash::RandomState`       |
//!
//! `fxhash` takes precedence when both features are enabled.

/// Hash builder used by sets created without an explicit hasher.
#[cfg(feature = "fxhash")]
pub type DefaultHashBuilder = rustc_hash::FxBuildHasher;

/// Hash builder used by sets created without an explicit hasher.
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type DefaultHashBuilder = ahash::RandomState;

/// Hash builder used by sets created without an explicit hasher.
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type DefaultHashBuilder = std::hash::RandomState;
