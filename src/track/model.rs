use std::cmp::Ordering;

use serde::Serialize;

use crate::error::{Error, Result};

use super::ident::{self, IdAllocator, TrackId};

/// Rating scale bounds, inclusive.
const RATING_MIN: u8 = 1;
const RATING_MAX: u8 = 5;

/// A single validated music track record.
///
/// Fields are private: every way to obtain or change a `Track` goes through
/// validation, so a value of this type always holds a trimmed non-empty
/// title and artist, a positive duration, a rating in `1..=5` and a tag
/// list with no case-insensitive duplicates.
///
/// Serializes for export; there is no `Deserialize` impl, so decoded data
/// cannot bypass validation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Track {
    id: TrackId,
    title: String,
    artist: String,
    duration_sec: u32,
    rating: u8,
    tags: Vec<String>,
}

fn required_text(value: &str, missing: Error) -> Result<&str> {
    let v = value.trim();
    if v.is_empty() { Err(missing) } else { Ok(v) }
}

fn checked_duration(sec: u32) -> Result<u32> {
    if sec == 0 {
        Err(Error::InvalidDuration)
    } else {
        Ok(sec)
    }
}

fn checked_rating(rating: u8) -> Result<u8> {
    if (RATING_MIN..=RATING_MAX).contains(&rating) {
        Ok(rating)
    } else {
        Err(Error::InvalidRating)
    }
}

impl Track {
    /// Build a validated track with a process-wide unique id.
    ///
    /// Checks run in order (title, artist, duration, rating) and only the
    /// first failure is reported; an id is consumed only when every check
    /// passed, so rejected constructions never advance the counter.
    pub fn new(title: &str, artist: &str, duration_sec: u32, rating: u8) -> Result<Self> {
        Self::with_ids(ident::process_ids(), title, artist, duration_sec, rating)
    }

    /// Like [`Track::new`], drawing the id from `ids` instead of the
    /// process-wide allocator. Test harnesses hand in their own allocator to
    /// keep id sequences isolated between cases.
    pub fn with_ids(
        ids: &IdAllocator,
        title: &str,
        artist: &str,
        duration_sec: u32,
        rating: u8,
    ) -> Result<Self> {
        let track = Self::validated(ids, title, artist, duration_sec, rating);
        if let Err(e) = &track {
            tracing::warn!(error = %e, "track construction rejected");
        }
        track
    }

    fn validated(
        ids: &IdAllocator,
        title: &str,
        artist: &str,
        duration_sec: u32,
        rating: u8,
    ) -> Result<Self> {
        let title = required_text(title, Error::EmptyTitle)?;
        let artist = required_text(artist, Error::EmptyArtist)?;
        let duration_sec = checked_duration(duration_sec)?;
        let rating = checked_rating(rating)?;

        Ok(Self {
            id: ids.next_id(),
            title: title.to_string(),
            artist: artist.to_string(),
            duration_sec,
            rating,
            tags: Vec::new(),
        })
    }

    pub fn id(&self) -> TrackId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn artist(&self) -> &str {
        &self.artist
    }

    pub fn duration_sec(&self) -> u32 {
        self.duration_sec
    }

    pub fn rating(&self) -> u8 {
        self.rating
    }

    /// Stored tags, trimmed and in insertion order.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Replace the title; input blank after trimming is rejected and the
    /// record kept as it was.
    pub fn set_title(&mut self, title: &str) -> Result<()> {
        match required_text(title, Error::EmptyTitle) {
            Ok(v) => {
                self.title = v.to_string();
                Ok(())
            }
            Err(e) => Err(self.rejected(e)),
        }
    }

    /// Replace the artist; same rules as [`Track::set_title`].
    pub fn set_artist(&mut self, artist: &str) -> Result<()> {
        match required_text(artist, Error::EmptyArtist) {
            Ok(v) => {
                self.artist = v.to_string();
                Ok(())
            }
            Err(e) => Err(self.rejected(e)),
        }
    }

    /// Replace the duration; zero is rejected.
    pub fn set_duration(&mut self, duration_sec: u32) -> Result<()> {
        match checked_duration(duration_sec) {
            Ok(v) => {
                self.duration_sec = v;
                Ok(())
            }
            Err(e) => Err(self.rejected(e)),
        }
    }

    /// Replace the rating; values outside `1..=5` are rejected.
    pub fn set_rating(&mut self, rating: u8) -> Result<()> {
        match checked_rating(rating) {
            Ok(v) => {
                self.rating = v;
                Ok(())
            }
            Err(e) => Err(self.rejected(e)),
        }
    }

    /// Append `tag` (trimmed, original case kept) at the end of the tag
    /// list, unless it is blank or already present when compared
    /// case-insensitively against the stored tags.
    pub fn add_tag(&mut self, tag: &str) -> Result<()> {
        let t = match required_text(tag, Error::EmptyTag) {
            Ok(v) => v,
            Err(e) => return Err(self.rejected(e)),
        };
        let key = t.to_lowercase();
        if self.tags.iter().any(|stored| stored.to_lowercase() == key) {
            return Err(self.rejected(Error::DuplicateTag));
        }
        self.tags.push(t.to_string());
        Ok(())
    }

    /// Remove the first tag whose case-folded form equals the case-folded,
    /// trimmed input. The relative order of the remaining tags is kept.
    ///
    /// Matching is exactly trim + case fold; inner whitespace and
    /// punctuation differences keep tags distinct.
    pub fn remove_tag(&mut self, tag: &str) -> Result<()> {
        let key = tag.trim().to_lowercase();
        match self.tags.iter().position(|stored| stored.to_lowercase() == key) {
            Some(i) => {
                self.tags.remove(i);
                Ok(())
            }
            None => Err(self.rejected(Error::TagNotFound)),
        }
    }

    /// Case-insensitive substring match against title, artist and every
    /// tag. A keyword that is blank after trimming matches nothing.
    pub fn matches_keyword(&self, keyword: &str) -> bool {
        let k = keyword.trim().to_lowercase();
        if k.is_empty() {
            return false;
        }
        self.title.to_lowercase().contains(&k)
            || self.artist.to_lowercase().contains(&k)
            || self.tags.iter().any(|t| t.to_lowercase().contains(&k))
    }

    // Mutation failures are soft no-ops; surface them to subscribers and
    // hand the error back unchanged.
    fn rejected(&self, e: Error) -> Error {
        tracing::debug!(track = %self.id, error = %e, "change ignored");
        e
    }
}

/// Comparator for sorting listings: rating descending, then title ascending
/// (case-sensitive, as stored), then id ascending.
///
/// Plugs straight into a generic sort: `tracks.sort_by(listing_order)`.
pub fn listing_order(a: &Track, b: &Track) -> Ordering {
    b.rating
        .cmp(&a.rating)
        .then_with(|| a.title.cmp(&b.title))
        .then_with(|| a.id.cmp(&b.id))
}
