//! Functional-style helpers over slices and key-value maps.
//!
//! [array] works on ordered sequences, [mapping] on anything implementing
//! [Mapping]. All operations are pure: inputs are borrowed, results are
//! freshly allocated, and the only failures are the ones returned by
//! caller-supplied callbacks.

pub mod array;
pub mod ext;
pub mod map;
pub mod mapping;

pub use collection_traits::{HasLength, Mapping};
pub use ext::{ArrayExt, MappingExt};
