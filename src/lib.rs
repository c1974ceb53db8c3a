//! Persistent chained maps with structural sharing.
//!
//! Every insertion returns a new map and leaves the original untouched;
//! versions share their unchanged tails, so keeping many closely related
//! maps alive costs one small node per divergence instead of a copy per
//! version.
//!
//! [`Map`] stores all of its entries in a persistent association list.
//! [`ChainMap`] layers such a chain over a `HashMap` base shared by
//! reference, which suits the common scope-chain shape: a large base built
//! once, small per-scope overlays on top.
//!
//! ```
//! use chainmap::ChainMap;
//!
//! let globals = [("x", 1), ("y", 2)].into_iter().collect::<ChainMap<_, _>>();
//! let locals = globals.insert("x", 10);
//!
//! assert_eq!(locals["x"], 10);
//! assert_eq!(locals["y"], 2);
//! assert_eq!(globals["x"], 1);
//! ```

pub mod chain_map;
pub mod list;
pub mod map;

// Re-exports for convenience
pub use chain_map::{ChainMap, ChainMapIterator};
pub use list::{List, ListIterator};
pub use map::{Map, MapIterator};
