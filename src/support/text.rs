//! Letter counting.

/// Letters counted as vowels.
///
/// Only the ASCII vowels qualify; accented vowels count as consonants.
pub const VOWELS: &str = "aeiouAEIOU";

/// Vowel and consonant counts for a piece of text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LetterCounts {
    pub vowels: usize,
    pub consonants: usize,
}

impl LetterCounts {
    /// Returns the total number of letters counted.
    #[must_use]
    pub fn letters(&self) -> usize {
        self.vowels + self.consonants
    }
}

/// Counts the vowels and consonants in `text`.
///
/// Characters that are not alphabetic (digits, whitespace, punctuation)
/// are ignored. Every alphabetic character outside [`VOWELS`] is a consonant.
///
/// ```
/// use twine_advisory::support::text::count_letters;
///
/// let counts = count_letters("Hello, World!");
/// assert_eq!(counts.vowels, 3);
/// assert_eq!(counts.consonants, 7);
/// ```
#[must_use]
pub fn count_letters(text: &str) -> LetterCounts {
    text.chars()
        .filter(|c| c.is_alphabetic())
        .fold(LetterCounts::default(), |mut counts, c| {
            if VOWELS.contains(c) {
                counts.vowels += 1;
            } else {
                counts.consonants += 1;
            }
            counts
        })
}
