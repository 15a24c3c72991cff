//! An order-statistic binary search tree map for Rust.
//!
//! This crate provides [`OrderedMap`], an ordered associative map backed by a plain
//! (unbalanced) binary search tree whose nodes are augmented with subtree sizes.
//! Besides the usual map operations it offers:
//!
//! - [`min`](OrderedMap::min) / [`max`](OrderedMap::max) and
//!   [`delete_min`](OrderedMap::delete_min) / [`delete_max`](OrderedMap::delete_max)
//! - [`floor`](OrderedMap::floor) / [`ceiling`](OrderedMap::ceiling)
//! - [`select`](OrderedMap::select) - the key at a given sorted position
//! - [`rank`](OrderedMap::rank) - the number of keys strictly less than a key
//! - [`range_keys`](OrderedMap::range_keys) / [`range_len`](OrderedMap::range_len) over `[lo, hi]`
//! - [`level_order`](OrderedMap::level_order) and [`height`](OrderedMap::height)
//! - [`validate`](OrderedMap::validate) - a diagnostic check of every structural invariant
//!
//! # Example
//!
//! ```
//! use osbst::{OrderedMap, Rank};
//!
//! let mut scores = OrderedMap::new();
//! scores.insert("Alice", 100);
//! scores.insert("Bob", 85);
//! scores.insert("Carol", 92);
//!
//! assert_eq!(scores.get(&"Bob"), Some(&85));
//! assert_eq!(scores.len(), 3);
//!
//! // Order-statistic operations run in O(height).
//! assert_eq!(scores.select(1), Ok(&"Bob"));
//! assert_eq!(scores.rank(&"Carol"), 2);
//! assert_eq!(scores[Rank(0)], 100);
//!
//! // Keys need not be present to be ranked or bounded.
//! assert_eq!(scores.rank(&"Bz"), 2);
//! assert_eq!(scores.floor(&"Bz"), Some(&"Bob"));
//! ```
//!
//! # Balance
//!
//! The tree is deliberately **not** self-balancing. Every operation costs O(height),
//! and the height is O(n) for adversarial insertion orders (for example strictly
//! increasing keys). Two-child deletion uses Hibbard's method: the deleted node is
//! replaced by the minimum of its right subtree.
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`
//! - **Arena storage** - Nodes live in a contiguous pool and link to each other by handle
//! - **`check-invariants`** - Re-validates the whole tree after every mutation in debug builds

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod error;
mod order_statistic;
mod raw;

pub mod ordered_map;

pub use error::{Error, Result};
pub use order_statistic::Rank;
pub use ordered_map::OrderedMap;
