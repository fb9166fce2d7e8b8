//! Letter status ordering
//!
//! The same four levels describe a single guess position and the aggregate keyboard.

/// What is known about a letter, ordered by information value
///
/// `None < Absent < Present < Correct`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterStatus {
    /// Not guessed yet
    #[default]
    None,
    /// Guessed, not in the secret word
    Absent,
    /// In the secret word, not at this position
    Present,
    /// In the secret word at this position
    Correct,
}

impl LetterStatus {
    /// All statuses in ascending order
    pub const ALL: [Self; 4] = [Self::None, Self::Absent, Self::Present, Self::Correct];

    /// Combine two observations, keeping the more informative one
    #[inline]
    #[must_use]
    pub fn upgrade(self, observed: Self) -> Self {
        self.max(observed)
    }

    /// Emoji square used in share grids
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::None | Self::Absent => '⬜',
            Self::Present => '🟨',
            Self::Correct => '🟩',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_are_totally_ordered() {
        assert!(LetterStatus::None < LetterStatus::Absent);
        assert!(LetterStatus::Absent < LetterStatus::Present);
        assert!(LetterStatus::Present < LetterStatus::Correct);

        let mut sorted = LetterStatus::ALL;
        sorted.sort();
        assert_eq!(sorted, LetterStatus::ALL);
    }

    #[test]
    fn upgrade_never_regresses() {
        for current in LetterStatus::ALL {
            for observed in LetterStatus::ALL {
                let next = current.upgrade(observed);
                assert!(next >= current);
                assert!(next >= observed);
            }
        }
    }

    #[test]
    fn default_is_none() {
        assert_eq!(LetterStatus::default(), LetterStatus::None);
    }
}
