use chunk_translate::chunking::{chunks, Chunker, DEFAULT_MAX_CHARS};
use std::num::NonZeroUsize;

const SAMPLES: [&str; 6] = [
    "The quick brown fox jumps.",
    "Der schnelle braune Fuchs springt über den faulen Hund.",
    "  leading and trailing whitespace   ",
    "Line one.\nLine two.\n\nA new paragraph\twith a tab.",
    "Ça coûte cher, n'est-ce pas ? Très, très cher.",
    "a b c d e f g h i j k l m n o p q r s t u v w x y z",
];

fn width(value: usize) -> NonZeroUsize {
    NonZeroUsize::new(value).unwrap()
}

fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[test]
fn chunks_example_sentence() {
    let output: Vec<&str> = chunks("The quick brown fox jumps.", width(10)).collect();
    assert_eq!(output, ["The quick", "brown fox", "jumps."]);
}

#[test]
fn empty_input_yields_no_chunk() {
    assert_eq!(chunks("", width(10)).count(), 0);
    assert_eq!(chunks(" \n\t  ", width(10)).count(), 0);
}

#[test]
fn rejoined_chunks_preserve_words() {
    for sample in SAMPLES {
        for max_chars in 1..40 {
            let rejoined = chunks(sample, width(max_chars)).collect::<Vec<_>>().join(" ");
            assert_eq!(normalize(&rejoined), normalize(sample), "width {max_chars}");
        }
    }
}

#[test]
fn chunks_respect_width() {
    for sample in SAMPLES {
        let longest_word = sample
            .split_whitespace()
            .map(|word| word.chars().count())
            .max()
            .unwrap();
        for max_chars in longest_word..40 {
            for chunk in chunks(sample, width(max_chars)) {
                assert!(
                    chunk.chars().count() <= max_chars,
                    "{chunk:?} is wider than {max_chars}"
                );
            }
        }
    }
}

#[test]
fn chunks_are_never_empty_nor_padded() {
    for sample in SAMPLES {
        for max_chars in 1..40 {
            for chunk in chunks(sample, width(max_chars)) {
                assert!(!chunk.is_empty());
                assert_eq!(chunk, chunk.trim());
            }
        }
    }
}

#[test]
fn long_words_are_not_broken() {
    let output: Vec<&str> = chunks("a Donaudampfschifffahrt b", width(5)).collect();
    assert_eq!(output, ["a", "Donaudampfschifffahrt", "b"]);
}

#[test]
fn hyphens_are_not_break_points() {
    let output: Vec<&str> = chunks("well-known state-of-the-art", width(12)).collect();
    assert_eq!(output, ["well-known", "state-of-the-art"]);
}

#[test]
fn width_counts_characters_not_bytes() {
    // 11 characters, 20 bytes
    let output: Vec<&str> = chunks("éèê àâä ôöû", width(11)).collect();
    assert_eq!(output, ["éèê àâä ôöû"]);
}

#[test]
fn interior_whitespace_is_kept() {
    let output: Vec<&str> = chunks("one\ntwo  three four", width(14)).collect();
    assert_eq!(output, ["one\ntwo  three", "four"]);
}

#[test]
fn text_within_width_is_a_single_chunk() {
    let text = "Ein kurzer Satz.";
    let output: Vec<&str> = Chunker::default().chunks(text).collect();
    assert_eq!(output, [text]);
}

#[test]
fn default_width() {
    assert_eq!(Chunker::default().max_chars().get(), DEFAULT_MAX_CHARS);
    assert_eq!(DEFAULT_MAX_CHARS, 1500);
}

#[test]
fn chunks_are_lazy_and_fused() {
    let mut iterator = chunks("one two three", width(3));
    assert_eq!(iterator.next(), Some("one"));
    assert_eq!(iterator.next(), Some("two"));
    assert_eq!(iterator.next(), Some("three"));
    assert_eq!(iterator.next(), None);
    assert_eq!(iterator.next(), None);
}

#[test]
fn no_break_space_is_not_a_break_point() {
    let output: Vec<&str> = chunks("Bonjour\u{a0}! Salut", width(8)).collect();
    assert_eq!(output, ["Bonjour\u{a0}!", "Salut"]);

    let output: Vec<&str> = chunks("\u{a0}Salut\u{a0}", width(3)).collect();
    assert_eq!(output, ["\u{a0}Salut\u{a0}"]);
}
