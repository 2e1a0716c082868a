//! # setalgebra
//!
//! Generic mathematical sets for Rust.
//!
//! ## Overview
//!
//! The crate is built around two pieces:
//!
//! - **[`Set`](set::Set)**: the capability trait describing what a set can do
//!   (mutation, membership, allocating and in-place algebra, relations,
//!   enumeration and a canonical textual form).
//! - **[`HashSet`](set::HashSet)**: the hash-backed realization of that trait,
//!   storing each element as a key with no payload.
//!
//! Every algebra operation accepts any value implementing [`Set`](set::Set),
//! so sets with different storage can be combined freely.
//!
//! ## Feature Flags
//!
//! - `fxhash`: use `rustc_hash::FxBuildHasher` as the default hasher
//! - `ahash`: use `ahash::RandomState` as the default hasher
//!
//! ## Example
//!
//! ```rust
//! use setalgebra::prelude::*;
//!
//! let set_a: HashSet<i32> = [1, 2, 3].into_iter().collect();
//! let set_b: HashSet<i32> = [3, 4, 5].into_iter().collect();
//!
//! assert_eq!(set_a.union(&set_b).len(), 5);
//! assert_eq!(set_a.intersection(&set_b).elements(), vec![3]);
//! assert!(set_a.difference(&set_b).equals(&HashSet::from([1, 2])));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the set trait and its hash-backed realization.
///
/// # Usage
///
/// ```rust
/// use setalgebra::prelude::*;
/// ```
pub mod prelude {
    pub use crate::set::*;
}

pub mod set;
