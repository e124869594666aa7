//! Hash collections with the `rustc-hash` FxHash hasher.
//!
//! FxHash is substantially faster than SipHash for the short string and
//! integer keys used throughout the workspace; none of these maps are
//! exposed to untrusted keys.

pub type FxHashMap<K, V> = rustc_hash::FxHashMap<K, V>;
pub type FxHashSet<T> = rustc_hash::FxHashSet<T>;
