//! Market mood sequence and its cyclic cursor.
//!
//! The mood is purely decorative: it is not derived from quote values. A `MoodIndex`
//! starts at the first mood and steps through the sequence, wrapping after the last one.

use serde::Serialize;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumCount, EnumIter};

/// Moods in display order.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumCount, Serialize)]
pub enum Mood {
    Happy,
    Neutral,
    Sad,
    Panic,
    Rocket,
    Greedy,
}

impl Mood {
    /// Symbol shown next to the "Market Mood" label.
    pub fn symbol(self) -> &'static str {
        match self {
            Mood::Happy => "😃",
            Mood::Neutral => "😐",
            Mood::Sad => "😔",
            Mood::Panic => "😱",
            Mood::Rocket => "🚀",
            Mood::Greedy => "🤑",
        }
    }

    /// All moods, in sequence order.
    pub fn sequence() -> Vec<Mood> {
        Mood::iter().collect()
    }
}

/// Cursor into [`Mood::sequence`]. Always within `0..len`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoodIndex(usize);

impl MoodIndex {
    /// Position of the cursor in the sequence.
    pub fn position(self) -> usize {
        self.0
    }

    /// Advance by exactly one, wrapping to the first mood after the last.
    pub fn next(self) -> MoodIndex {
        MoodIndex(advance_mood(self.0, <Mood as strum::EnumCount>::COUNT))
    }

    /// Mood the cursor points at.
    pub fn mood(self) -> Mood {
        Mood::iter().nth(self.0).unwrap_or(Mood::Happy)
    }
}

/// `(index + 1) mod mood_count`. A zero-length sequence keeps the index at 0.
pub fn advance_mood(index: usize, mood_count: usize) -> usize {
    if mood_count == 0 {
        return 0;
    }
    (index + 1) % mood_count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_first_mood() {
        let index = MoodIndex::default();
        assert_eq!(index.position(), 0);
        assert_eq!(index.mood(), Mood::Happy);
        assert_eq!(index.mood().symbol(), "😃");
    }

    #[test]
    fn wraps_after_last_mood() {
        let mut index = MoodIndex::default();
        let mut seen = Vec::new();
        for _ in 0..7 {
            seen.push(index.mood());
            index = index.next();
        }
        assert_eq!(&seen[..6], Mood::sequence().as_slice());
        assert_eq!(seen[6], Mood::Happy);
    }

    #[test]
    fn advance_handles_degenerate_counts() {
        assert_eq!(advance_mood(0, 1), 0);
        assert_eq!(advance_mood(4, 0), 0);
        assert_eq!(advance_mood(5, 6), 0);
    }
}
