//! # Translation pipelines
//!
//! - `translator`: the `Translator` seam and its `rust-bert` implementation, `ModelTranslator`
//! - `presets`: registered pretrained models (Marian and NLLB-200) and local model files
//! - `file_translation`: the chunked file translation pipeline and its configuration
//!
//! The translation models themselves (weights, tokenizers, beam search) are provided by
//! `rust-bert`. Pretrained resources are downloaded on first use and cached under
//! `~/.cache/.rustbert`, or `RUSTBERT_CACHE` if set.

pub mod file_translation;
pub mod presets;
pub mod translator;
