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

//! # Chunked file translation pipeline
//!
//! Reads a source file, splits it into width-bounded chunks, translates every chunk in order and
//! writes the translations joined by a blank line. A chunk whose translation fails is replaced by
//! a placeholder and the run carries on with the next chunk; only file I/O errors abort a run.
//!
//! ```no_run
//! # fn main() -> Result<(), chunk_translate::ChunkTranslateError> {
//! use chunk_translate::pipelines::file_translation::{ChunkedTranslator, FileTranslationConfig};
//! use chunk_translate::pipelines::translator::ModelTranslator;
//!
//! let config = FileTranslationConfig::default();
//! config.validate()?;
//! let translator = ModelTranslator::new(
//!     &config.model,
//!     config.source_language,
//!     config.target_language,
//!     config.device,
//! )?;
//! let pipeline = ChunkedTranslator::from_config(translator, &config);
//! let report = pipeline.translate_file(&config.input, &config.output)?;
//! println!("{} chunks, {} failed", report.len(), report.failed_count());
//! # Ok(())
//! # }
//! ```

use crate::chunking::Chunker;
use crate::common::error::ChunkTranslateError;
use crate::common::file_utils::{read_source, write_output};
use crate::pipelines::presets::ModelSource;
use crate::pipelines::translator::{DeviceOption, Translator};
use crate::Config;
use rust_bert::pipelines::translation::Language;
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::num::NonZeroUsize;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};
use tracing::{debug, info, info_span, warn};
use uuid::Uuid;

/// Separator inserted between translated chunks.
pub const CHUNK_SEPARATOR: &str = "\n\n";

/// Output substituted for a chunk whose translation failed.
pub const DEFAULT_PLACEHOLDER: &str = "[Translation failed]";

/// # Configuration for a chunked file translation run
/// Every field has a default, so a configuration file only needs the values it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTranslationConfig {
    /// Source text file (UTF-8)
    pub input: PathBuf,
    /// Translated text file, overwritten
    pub output: PathBuf,
    /// Debug log file, appended to. `None` disables it.
    pub log_file: Option<PathBuf>,
    /// Level of the events printed on stderr, as a `tracing` filter directive
    pub log_level: String,
    pub model: ModelSource,
    /// Language of the input, defaults to the model's single source language if it has one
    pub source_language: Option<Language>,
    pub target_language: Language,
    /// Maximum chunk width in characters
    pub max_chars: NonZeroUsize,
    pub placeholder: String,
    pub device: DeviceOption,
}

impl Default for FileTranslationConfig {
    fn default() -> Self {
        FileTranslationConfig {
            input: PathBuf::from("german_input.txt"),
            output: PathBuf::from("translated_output.txt"),
            log_file: Some(PathBuf::from("translation_debug.log")),
            log_level: "info".to_string(),
            model: ModelSource::default(),
            source_language: None,
            target_language: Language::English,
            max_chars: Chunker::default().max_chars(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            device: DeviceOption::Auto,
        }
    }
}

impl Config for FileTranslationConfig {}

impl FileTranslationConfig {
    /// Configured source language, or the model's default one.
    pub fn effective_source_language(&self) -> Option<Language> {
        self.source_language.or_else(|| self.model.default_source_language())
    }

    /// Checks the configuration before any model is loaded.
    pub fn validate(&self) -> Result<(), ChunkTranslateError> {
        if self.input == self.output {
            return Err(ChunkTranslateError::InvalidConfigurationError(format!(
                "input and output both point to {}",
                self.input.display()
            )));
        }
        self.model.validate_languages(self.effective_source_language(), self.target_language)
    }

    pub fn chunker(&self) -> Chunker {
        Chunker::new(self.max_chars)
    }
}

/// # Outcome of the translation of one chunk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatedChunk {
    /// Position of the chunk in the source text, starting at 0
    pub index: usize,
    pub source: String,
    /// Translation, or the placeholder if the translation failed
    pub output: String,
    /// Reason of the failure, if any
    pub error: Option<String>,
}

impl TranslatedChunk {
    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }
}

/// # Translated chunks of a text, in source order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationReport {
    pub chunks: Vec<TranslatedChunk>,
}

impl TranslationReport {
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    pub fn failed_count(&self) -> usize {
        self.chunks.iter().filter(|chunk| chunk.is_failed()).count()
    }

    pub fn outputs(&self) -> impl Iterator<Item = &str> {
        self.chunks.iter().map(|chunk| chunk.output.as_str())
    }

    /// Translated text: chunk outputs joined by `CHUNK_SEPARATOR`.
    pub fn output_text(&self) -> String {
        self.outputs().collect::<Vec<_>>().join(CHUNK_SEPARATOR)
    }
}

/// # Sequential chunk-by-chunk translator
pub struct ChunkedTranslator<T: Translator> {
    translator: T,
    chunker: Chunker,
    placeholder: String,
}

impl<T: Translator> ChunkedTranslator<T> {
    pub fn new(translator: T, chunker: Chunker) -> ChunkedTranslator<T> {
        ChunkedTranslator {
            translator,
            chunker,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }

    pub fn from_config(translator: T, config: &FileTranslationConfig) -> ChunkedTranslator<T> {
        ChunkedTranslator::new(translator, config.chunker()).with_placeholder(&config.placeholder)
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn chunker(&self) -> &Chunker {
        &self.chunker
    }

    /// Translates chunks one after the other.
    ///
    /// A failed chunk gets the placeholder as output and does not affect the following chunks.
    pub fn translate_chunks<'a, I>(&self, chunks: I) -> TranslationReport
    where
        I: IntoIterator<Item = &'a str>,
    {
        let chunks: Vec<&str> = chunks.into_iter().collect();
        let total = chunks.len();
        info!("Translating {total} chunks...");

        let chunks = chunks
            .into_iter()
            .enumerate()
            .map(|(index, source)| {
                info!("Translating chunk {} / {}", index + 1, total);
                debug!(chunk = index + 1, source = %source, "source text");
                match self.translate_one(source) {
                    Ok(output) => {
                        debug!(chunk = index + 1, translation = %output, "translated text");
                        TranslatedChunk {
                            index,
                            source: source.to_string(),
                            output,
                            error: None,
                        }
                    }
                    Err(error) => {
                        warn!(
                            chunk = index + 1,
                            error = %error,
                            "translation failed, using placeholder"
                        );
                        TranslatedChunk {
                            index,
                            source: source.to_string(),
                            output: self.placeholder.clone(),
                            error: Some(error.to_string()),
                        }
                    }
                }
            })
            .collect();
        TranslationReport { chunks }
    }

    pub fn translate_text(&self, text: &str) -> TranslationReport {
        self.translate_chunks(self.chunker.chunks(text))
    }

    /// Translates the `input` file into `output`.
    ///
    /// Failed chunks are reported in the returned `TranslationReport`. Reading the input or
    /// writing the output are the only failures returned as errors.
    pub fn translate_file(
        &self,
        input: &Path,
        output: &Path,
    ) -> Result<TranslationReport, ChunkTranslateError> {
        let span = info_span!("translation", run_id = %Uuid::new_v4());
        let _enter = span.enter();

        info!("Reading input {}...", input.display());
        let text = read_source(input)?;
        let report = self.translate_text(&text);

        info!("Writing output...");
        write_output(output, &report.output_text())?;
        info!(
            failed = report.failed_count(),
            "Done. Translated file saved to: {}",
            output.display()
        );
        Ok(report)
    }

    /// Runs the translator, turning a panic into a chunk failure.
    ///
    /// The process panic hook still runs first, so a panicking chunk also prints the panic
    /// message on stderr before the run moves on to the next chunk.
    fn translate_one(&self, text: &str) -> Result<String, ChunkTranslateError> {
        // libtorch errors surface as panics from tch
        panic::catch_unwind(AssertUnwindSafe(|| self.translator.translate(text))).unwrap_or_else(
            |payload| Err(ChunkTranslateError::TranslationError(panic_message(&*payload))),
        )
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        format!("translation panicked: {message}")
    } else if let Some(message) = payload.downcast_ref::<String>() {
        format!("translation panicked: {message}")
    } else {
        "translation panicked".to_string()
    }
}
