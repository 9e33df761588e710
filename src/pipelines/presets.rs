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

//! # Pretrained model presets and local model files
//!
//! A `ModelSource` designates the translation model to load: either one of the registered
//! `ModelPreset`s, downloaded and cached by `rust-bert` on first use, or a set of local files
//! (weights converted to the `.ot` format, configuration, vocabulary and SentencePiece model).

use crate::common::error::ChunkTranslateError;
use clap::ValueEnum;
use rust_bert::marian::{
    MarianConfigResources, MarianModelResources, MarianSourceLanguages, MarianSpmResources,
    MarianTargetLanguages, MarianVocabResources,
};
use rust_bert::nllb::{
    NLLBConfigResources, NLLBLanguages, NLLBMergeResources, NLLBResources, NLLBVocabResources,
};
use rust_bert::pipelines::common::{ModelResource, ModelType};
use rust_bert::pipelines::translation::{Language, TranslationConfig};
use rust_bert::resources::{LocalResource, RemoteResource, ResourceProvider};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use tch::Device;

type RemoteLocation = (&'static str, &'static str);

/// # Registered pretrained translation models
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum ModelPreset {
    /// Marian German to English (Helsinki-NLP/opus-mt-de-en)
    #[serde(rename = "opus-mt-de-en")]
    #[value(name = "opus-mt-de-en")]
    OpusMtGermanEnglish,
    /// Marian Romance languages (including French) to English (Helsinki-NLP/opus-mt-ROMANCE-en)
    #[serde(rename = "opus-mt-fr-en")]
    #[value(name = "opus-mt-fr-en")]
    OpusMtFrenchEnglish,
    /// NLLB-200 distilled, 600M parameters (facebook/nllb-200-distilled-600M)
    #[serde(rename = "nllb-200-distilled-600m")]
    #[value(name = "nllb-200-distilled-600m")]
    Nllb600MDistilled,
    /// NLLB-200, 1.3B parameters (facebook/nllb-200-1.3B)
    #[serde(rename = "nllb-200-1.3b")]
    #[value(name = "nllb-200-1.3b")]
    Nllb1300M,
}

impl ModelPreset {
    pub fn model_type(&self) -> ModelType {
        match self {
            ModelPreset::OpusMtGermanEnglish | ModelPreset::OpusMtFrenchEnglish => {
                ModelType::Marian
            }
            ModelPreset::Nllb600MDistilled | ModelPreset::Nllb1300M => ModelType::NLLB,
        }
    }

    pub fn source_languages(&self) -> &'static [Language] {
        match self {
            ModelPreset::OpusMtGermanEnglish => &MarianSourceLanguages::GERMAN2ENGLISH,
            ModelPreset::OpusMtFrenchEnglish => &MarianSourceLanguages::ROMANCE2ENGLISH,
            ModelPreset::Nllb600MDistilled | ModelPreset::Nllb1300M => &NLLBLanguages::NLLB,
        }
    }

    pub fn target_languages(&self) -> &'static [Language] {
        match self {
            ModelPreset::OpusMtGermanEnglish => &MarianTargetLanguages::GERMAN2ENGLISH,
            ModelPreset::OpusMtFrenchEnglish => &MarianTargetLanguages::ROMANCE2ENGLISH,
            ModelPreset::Nllb600MDistilled | ModelPreset::Nllb1300M => &NLLBLanguages::NLLB,
        }
    }

    /// Source language assumed when none is configured. Multilingual models have none.
    pub fn default_source_language(&self) -> Option<Language> {
        match self {
            ModelPreset::OpusMtGermanEnglish => Some(Language::German),
            ModelPreset::OpusMtFrenchEnglish => Some(Language::French),
            ModelPreset::Nllb600MDistilled | ModelPreset::Nllb1300M => None,
        }
    }

    /// Weights, configuration, vocabulary and merges locations.
    fn remote_locations(
        &self,
    ) -> (RemoteLocation, RemoteLocation, RemoteLocation, RemoteLocation) {
        match self {
            ModelPreset::OpusMtGermanEnglish => (
                MarianModelResources::GERMAN2ENGLISH,
                MarianConfigResources::GERMAN2ENGLISH,
                MarianVocabResources::GERMAN2ENGLISH,
                MarianSpmResources::GERMAN2ENGLISH,
            ),
            ModelPreset::OpusMtFrenchEnglish => (
                MarianModelResources::ROMANCE2ENGLISH,
                MarianConfigResources::ROMANCE2ENGLISH,
                MarianVocabResources::ROMANCE2ENGLISH,
                MarianSpmResources::ROMANCE2ENGLISH,
            ),
            ModelPreset::Nllb600MDistilled => (
                NLLBResources::NLLB_600M_DISTILLED,
                NLLBConfigResources::NLLB_600M_DISTILLED,
                NLLBVocabResources::NLLB_600M_DISTILLED,
                NLLBMergeResources::NLLB_600M_DISTILLED,
            ),
            ModelPreset::Nllb1300M => (
                NLLBResources::NLLB_1_3B,
                NLLBConfigResources::NLLB_1_3B,
                NLLBVocabResources::NLLB_1_3B,
                NLLBMergeResources::NLLB_1_3B,
            ),
        }
    }
}

impl fmt::Display for ModelPreset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            ModelPreset::OpusMtGermanEnglish => "opus-mt-de-en",
            ModelPreset::OpusMtFrenchEnglish => "opus-mt-fr-en",
            ModelPreset::Nllb600MDistilled => "nllb-200-distilled-600m",
            ModelPreset::Nllb1300M => "nllb-200-1.3b",
        };
        f.write_str(name)
    }
}

/// # Architecture of a locally stored model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocalArchitecture {
    Marian,
    Nllb,
}

impl LocalArchitecture {
    pub fn model_type(&self) -> ModelType {
        match self {
            LocalArchitecture::Marian => ModelType::Marian,
            LocalArchitecture::Nllb => ModelType::NLLB,
        }
    }
}

/// # Files of a locally stored translation model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalModelFiles {
    pub architecture: LocalArchitecture,
    /// Model weights (`rust_model.ot`)
    pub weights: PathBuf,
    /// Model configuration (`config.json`)
    pub config: PathBuf,
    /// Vocabulary (`vocab.json` for Marian, `tokenizer.json` for NLLB)
    pub vocab: PathBuf,
    /// SentencePiece model
    pub merges: PathBuf,
    pub source_languages: Vec<Language>,
    pub target_languages: Vec<Language>,
}

/// # Translation model to load
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelSource {
    Pretrained(ModelPreset),
    Local(LocalModelFiles),
}

impl Default for ModelSource {
    fn default() -> Self {
        ModelSource::Pretrained(ModelPreset::OpusMtGermanEnglish)
    }
}

impl From<ModelPreset> for ModelSource {
    fn from(preset: ModelPreset) -> Self {
        ModelSource::Pretrained(preset)
    }
}

impl ModelSource {
    pub fn model_type(&self) -> ModelType {
        match self {
            ModelSource::Pretrained(preset) => preset.model_type(),
            ModelSource::Local(files) => files.architecture.model_type(),
        }
    }

    pub fn source_languages(&self) -> &[Language] {
        match self {
            ModelSource::Pretrained(preset) => preset.source_languages(),
            ModelSource::Local(files) => &files.source_languages,
        }
    }

    pub fn target_languages(&self) -> &[Language] {
        match self {
            ModelSource::Pretrained(preset) => preset.target_languages(),
            ModelSource::Local(files) => &files.target_languages,
        }
    }

    pub fn default_source_language(&self) -> Option<Language> {
        match self {
            ModelSource::Pretrained(preset) => preset.default_source_language(),
            ModelSource::Local(files) => match files.source_languages.as_slice() {
                [language] => Some(*language),
                _ => None,
            },
        }
    }

    /// NLLB models select the source language through a language token, which has no default.
    /// Local models listing several source languages need one picked as well.
    pub fn requires_source_language(&self) -> bool {
        match self {
            ModelSource::Local(files) if files.source_languages.len() > 1 => true,
            _ => matches!(self.model_type(), ModelType::NLLB),
        }
    }

    /// Checks a source/target language pair against the languages supported by the model.
    pub fn validate_languages(
        &self,
        source_language: Option<Language>,
        target_language: Language,
    ) -> Result<(), ChunkTranslateError> {
        if let ModelSource::Local(files) = self {
            if files.source_languages.is_empty() || files.target_languages.is_empty() {
                return Err(ChunkTranslateError::InvalidConfigurationError(
                    "local models must list at least one source and one target language"
                        .to_string(),
                ));
            }
        }
        match source_language {
            Some(language) if !self.source_languages().contains(&language) => {
                return Err(ChunkTranslateError::InvalidConfigurationError(format!(
                    "{language} is not a source language of {self}, supported: {:?}",
                    self.source_languages()
                )));
            }
            None if self.requires_source_language() => {
                return Err(ChunkTranslateError::InvalidConfigurationError(format!(
                    "a source language must be specified for {self}"
                )));
            }
            _ => {}
        }
        if !self.target_languages().contains(&target_language) {
            return Err(ChunkTranslateError::InvalidConfigurationError(format!(
                "{target_language} is not a target language of {self}, supported: {:?}",
                self.target_languages()
            )));
        }
        Ok(())
    }

    /// Builds the `rust-bert` translation configuration for this model.
    pub fn translation_config(&self, device: Device) -> TranslationConfig {
        match self {
            ModelSource::Pretrained(preset) => {
                let (weights, config, vocab, merges) = preset.remote_locations();
                new_translation_config(
                    preset.model_type(),
                    RemoteResource::from_pretrained(weights),
                    RemoteResource::from_pretrained(config),
                    RemoteResource::from_pretrained(vocab),
                    RemoteResource::from_pretrained(merges),
                    preset.source_languages(),
                    preset.target_languages(),
                    device,
                )
            }
            ModelSource::Local(files) => new_translation_config(
                files.architecture.model_type(),
                LocalResource {
                    local_path: files.weights.clone(),
                },
                LocalResource {
                    local_path: files.config.clone(),
                },
                LocalResource {
                    local_path: files.vocab.clone(),
                },
                LocalResource {
                    local_path: files.merges.clone(),
                },
                &files.source_languages,
                &files.target_languages,
                device,
            ),
        }
    }
}

impl fmt::Display for ModelSource {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ModelSource::Pretrained(preset) => write!(f, "{preset}"),
            ModelSource::Local(files) => {
                write!(f, "local {:?} model {}", files.architecture, files.weights.display())
            }
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn new_translation_config<R>(
    model_type: ModelType,
    weights: R,
    config: R,
    vocab: R,
    merges: R,
    source_languages: &[Language],
    target_languages: &[Language],
    device: Device,
) -> TranslationConfig
where
    R: ResourceProvider + Send + 'static,
{
    TranslationConfig::new(
        model_type,
        ModelResource::Torch(Box::new(weights)),
        config,
        vocab,
        Some(merges),
        source_languages,
        target_languages,
        device,
    )
}
