// Copyright 2024 The chunk-translate Authors
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//     http://www.apache.org/licenses/LICENSE-2.0
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! # Width-bounded text chunking
//!
//! Splits a text into an ordered sequence of chunks holding at most a given number of characters
//! (Unicode scalar values). Chunks break at ASCII whitespace only (space, tab, line feed,
//! carriage return, vertical tab and form feed), so a no-break space keeps its neighbours
//! together. A word is never split, and a word longer than the width is emitted on its own as a
//! single oversize chunk. Leading and trailing
//! whitespace of every chunk is dropped, interior whitespace is kept as found in the source.
//! Hyphens are not break points.
//!
//! Chunks borrow from the source text and are produced lazily.
//!
//! ```
//! use chunk_translate::chunking::Chunker;
//! use std::num::NonZeroUsize;
//!
//! let chunker = Chunker::new(NonZeroUsize::new(10).unwrap());
//! let chunks: Vec<&str> = chunker.chunks("The quick brown fox jumps.").collect();
//! assert_eq!(chunks, ["The quick", "brown fox", "jumps."]);
//! ```

use std::iter::FusedIterator;
use std::num::NonZeroUsize;

/// Default chunk width, in characters.
pub const DEFAULT_MAX_CHARS: usize = 1500;

const DEFAULT_WIDTH: NonZeroUsize = match NonZeroUsize::new(DEFAULT_MAX_CHARS) {
    Some(width) => width,
    None => unreachable!(),
};

/// # Splits text into chunks of bounded character width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunker {
    max_chars: NonZeroUsize,
}

impl Chunker {
    pub fn new(max_chars: NonZeroUsize) -> Chunker {
        Chunker { max_chars }
    }

    pub fn max_chars(&self) -> NonZeroUsize {
        self.max_chars
    }

    /// Returns a lazy iterator over the chunks of `text`.
    ///
    /// The iterator is empty for empty or whitespace-only input, and never yields an empty chunk.
    pub fn chunks<'a>(&self, text: &'a str) -> Chunks<'a> {
        Chunks {
            remaining: text,
            max_chars: self.max_chars.get(),
        }
    }
}

impl Default for Chunker {
    fn default() -> Self {
        Chunker {
            max_chars: DEFAULT_WIDTH,
        }
    }
}

/// Shorthand for `Chunker::new(max_chars).chunks(text)`.
pub fn chunks(text: &str, max_chars: NonZeroUsize) -> Chunks<'_> {
    Chunker::new(max_chars).chunks(text)
}

/// # Iterator over the chunks of a text, created by `Chunker::chunks`
#[derive(Debug, Clone)]
pub struct Chunks<'a> {
    remaining: &'a str,
    max_chars: usize,
}

impl<'a> Iterator for Chunks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let text = self.remaining.trim_start_matches(is_break);
        if text.is_empty() {
            self.remaining = text;
            return None;
        }
        let split = split_point(text, self.max_chars);
        let (chunk, rest) = text.split_at(split);
        self.remaining = rest;
        Some(chunk.trim_end_matches(is_break))
    }
}

impl FusedIterator for Chunks<'_> {}

/// Byte offset at which the next chunk of `text` ends. `text` starts with a character that is
/// not a break point.
///
/// Returns the end of the last word such that the prefix holds at most `max_chars` characters,
/// or the end of the first word if that word alone is already too wide.
fn split_point(text: &str, max_chars: usize) -> usize {
    let mut split = None;
    let mut in_word = false;
    let mut char_count = 0;
    for (idx, ch) in text.char_indices() {
        let is_whitespace = is_break(ch);
        if is_whitespace && in_word {
            // `char_count` is the width of `text[..idx]`, which ends on a word
            if char_count > max_chars {
                return split.unwrap_or(idx);
            }
            split = Some(idx);
        }
        in_word = !is_whitespace;
        char_count += 1;
    }
    if char_count > max_chars {
        split.unwrap_or(text.len())
    } else {
        text.len()
    }
}

/// Characters a chunk may break at.
fn is_break(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c')
}
