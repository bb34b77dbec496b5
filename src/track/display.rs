use std::fmt;

use super::model::Track;

/// Canonical one-line listing form:
/// `[#<id>] <artist> - <title> (<duration>s) <stars>`, with
/// ` [tags: a, b]` appended only when the record has tags.
impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[#{}] {} - {} ({}s) {}",
            self.id(),
            self.artist(),
            self.title(),
            self.duration_sec(),
            "*".repeat(self.rating() as usize),
        )?;
        if !self.tags().is_empty() {
            write!(f, " [tags: {}]", self.tags().join(", "))?;
        }
        Ok(())
    }
}
