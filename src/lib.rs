//! # Chunked translation of text files
//!
//! Translates a text file from a source language into English with a pretrained
//! sequence-to-sequence model (MarianMT or NLLB-200, run through `rust-bert` and `tch`).
//! The file is split into chunks of bounded character width that break at whitespace only,
//! every chunk is translated independently and in order, and the translations are written out
//! joined by a blank line.
//!
//! A chunk whose translation fails is replaced by a placeholder (`[Translation failed]` by
//! default) and does not stop the run.
//!
//! ## Usage
//!
//! ```no_run
//! # fn main() -> Result<(), chunk_translate::ChunkTranslateError> {
//! use chunk_translate::chunking::Chunker;
//! use chunk_translate::pipelines::file_translation::ChunkedTranslator;
//! use chunk_translate::pipelines::presets::{ModelPreset, ModelSource};
//! use chunk_translate::pipelines::translator::{DeviceOption, ModelTranslator};
//! use rust_bert::pipelines::translation::Language;
//! use std::path::Path;
//!
//! let translator = ModelTranslator::new(
//!     &ModelSource::Pretrained(ModelPreset::OpusMtFrenchEnglish),
//!     Some(Language::French),
//!     Language::English,
//!     DeviceOption::Auto,
//! )?;
//! let pipeline = ChunkedTranslator::new(translator, Chunker::default());
//! let report = pipeline.translate_file(Path::new("french_input.txt"), Path::new("english.txt"))?;
//! # Ok(())
//! # }
//! ```
//!
//! The `chunk-translate` binary wraps the same pipeline, configured from a JSON file
//! (`FileTranslationConfig`) and command line flags.
//!
//! ## Available models
//!
//! | Preset | Model | Languages |
//! |---|---|---|
//! | `opus-mt-de-en` | Marian | German to English |
//! | `opus-mt-fr-en` | Marian | French (and other Romance languages) to English |
//! | `nllb-200-distilled-600m` | NLLB-200 distilled 600M | 200 languages, source language required |
//! | `nllb-200-1.3b` | NLLB-200 1.3B | 200 languages, source language required |
//!
//! Locally converted Marian or NLLB models can be used through `ModelSource::Local`.
//!
//! ## Libtorch
//!
//! Models run on libtorch through `tch`. Set `LIBTORCH` to a libtorch installation, or enable
//! the `download-libtorch` feature to fetch one at build time.

pub mod chunking;
mod common;
pub mod pipelines;

pub use common::error::ChunkTranslateError;
pub use common::{file_utils, logging, Config};
