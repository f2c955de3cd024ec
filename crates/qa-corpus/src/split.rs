//! Sentence segmentation on Unicode (UAX #29) sentence boundaries.

use qa_rank::SentenceSplitter;
use unicode_segmentation::UnicodeSegmentation;

/// Abbreviations that end in a period without ending the sentence.
const ABBREVIATIONS: &[&str] = &[
    "mr.", "mrs.", "ms.", "dr.", "prof.", "sr.", "jr.", "st.", "vs.", "e.g.", "i.e.", "cf.",
    "fig.", "approx.",
];

/// Capitalized words that usually open a sentence rather than continue a name.
const SENTENCE_OPENERS: &[&str] = &[
    "A", "An", "And", "As", "At", "But", "For", "He", "Her", "His", "I", "If", "In", "It",
    "Its", "My", "No", "On", "Our", "She", "So", "That", "The", "Their", "Then", "There",
    "These", "They", "This", "Those", "To", "We", "What", "When", "You",
];

/// Splits text into trimmed sentences.
///
/// UAX #29 breaks after every `.` followed by a capitalized word, which cuts
/// `Mr. Smith` in two. Such a split is rejoined after a known abbreviation,
/// after `No.` when a number follows, and after a capital initial that is part
/// of a name (`J. R. R. Tolkien`). The pronoun `I` is never an initial.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeSentenceSplitter;

impl SentenceSplitter for UnicodeSentenceSplitter {
    fn split<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut spans: Vec<(usize, usize)> = Vec::new();
        for (start, piece) in text.split_sentence_bound_indices() {
            let end = start + piece.len();
            match spans.last_mut() {
                Some(last) if continues_sentence(&text[last.0..last.1], piece) => last.1 = end,
                _ => spans.push((start, end)),
            }
        }

        spans
            .into_iter()
            .map(|(start, end)| text[start..end].trim())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

/// Checks if the break between `previous` and `next` falls inside one sentence.
fn continues_sentence(previous: &str, next: &str) -> bool {
    let mut words = previous.split_whitespace().rev();
    let Some(last) = words.next() else {
        return false;
    };
    let next_word = next.split_whitespace().next().unwrap_or_default();
    let lower = last.to_lowercase();
    if lower == "no." {
        return next_word.starts_with(|c: char| c.is_ascii_digit());
    }
    if ABBREVIATIONS.contains(&lower.as_str()) {
        return true;
    }
    is_initial(last) && (words.next().is_some_and(is_initial) || starts_name(next_word))
}

/// A single uppercase letter other than `I`, followed by a period.
fn is_initial(word: &str) -> bool {
    let mut chars = word.chars();
    matches!(
        (chars.next(), chars.next(), chars.next()),
        (Some(c), Some('.'), None) if c.is_uppercase() && c != 'I'
    )
}

/// A capitalized word that is not a common sentence opener.
fn starts_name(word: &str) -> bool {
    let bare = word.trim_end_matches(|c: char| !c.is_alphanumeric());
    bare.starts_with(char::is_uppercase) && !SENTENCE_OPENERS.contains(&bare)
}

#[cfg(test)]
mod test {
    use super::*;

    fn split(text: &str) -> Vec<&str> {
        UnicodeSentenceSplitter.split(text)
    }

    #[test]
    fn splits_on_terminators() {
        assert_eq!(
            split("Hello world! How are you? Fine."),
            vec!["Hello world!", "How are you?", "Fine."]
        );
    }

    #[test]
    fn keeps_abbreviations_inside_sentences() {
        assert_eq!(
            split("Mr. Smith went to Washington. He liked it."),
            vec!["Mr. Smith went to Washington.", "He liked it."]
        );
    }

    #[test]
    fn keeps_initials_inside_sentences() {
        assert_eq!(
            split("The book is by J. Tolkien. It is long."),
            vec!["The book is by J. Tolkien.", "It is long."]
        );
    }

    #[test]
    fn keeps_chains_of_initials() {
        assert_eq!(
            split("J. R. R. Tolkien wrote it. Fans agree."),
            vec!["J. R. R. Tolkien wrote it.", "Fans agree."]
        );
    }

    #[test]
    fn word_no_ends_a_sentence() {
        assert_eq!(split("I said no. We left."), vec!["I said no.", "We left."]);
    }

    #[test]
    fn numbered_reference_stays_whole() {
        assert_eq!(
            split("See No. 5 Main St. for details."),
            vec!["See No. 5 Main St. for details."]
        );
    }

    #[test]
    fn pronoun_i_ends_a_sentence() {
        assert_eq!(
            split("The answer was I. Then we moved."),
            vec!["The answer was I.", "Then we moved."]
        );
    }

    #[test]
    fn capital_letter_before_new_sentence_splits() {
        assert_eq!(split("Vitamin A. It helps."), vec!["Vitamin A.", "It helps."]);
    }

    #[test]
    fn keeps_decimal_numbers() {
        assert_eq!(split("Pi is about 3.14 today."), vec!["Pi is about 3.14 today."]);
    }

    #[test]
    fn trims_and_drops_blank_pieces() {
        assert_eq!(split("   One.   Two.  "), vec!["One.", "Two."]);
        assert!(split("   ").is_empty());
        assert!(split("").is_empty());
    }

    #[test]
    fn text_without_terminator_is_one_sentence() {
        assert_eq!(split("no terminator here"), vec!["no terminator here"]);
    }
}
