//! Ordered in-memory collections with functional helpers and keyed indexing.
//!
//! [`Collection`] wraps an ordered sequence and [`UniqueCollection`] adds a
//! derived key that must be distinct for every element. The free functions in
//! [`functional`] offer the same traversals over plain slices.
pub mod functional;
pub mod index;

mod collection;
mod error;
mod unique;

pub use collection::Collection;
pub use error::{Error, Result};
pub use functional::{
    each, filter, first, index_by_func, index_unique, last, search, search_or_default,
};
pub use index::{Accessor, Index};
pub use unique::UniqueCollection;
