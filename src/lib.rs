//! A validated music track record.
//!
//! The crate exposes one domain entity, [`Track`]: construction and every
//! mutation validate their input and either apply fully or leave the record
//! untouched, tags are deduplicated case-insensitively, and
//! [`listing_order`] is the comparator used to sort tracks for display.
//!
//! There is no collection type, persistence or I/O here; an embedding
//! application owns those concerns and consumes [`Track`] values directly.

pub mod error;
pub mod track;

pub use error::{Error, Result};
pub use track::{IdAllocator, Track, TrackId, listing_order};
