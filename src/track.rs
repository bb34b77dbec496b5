//! Track record module: the validated [`Track`] entity.
//!
//! The record itself lives in `track::model`, identity allocation in
//! `track::ident` and the listing format in `track::display`.

mod display;
mod ident;
mod model;

pub use ident::{IdAllocator, TrackId};
pub use model::{Track, listing_order};
