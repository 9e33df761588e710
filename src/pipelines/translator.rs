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

use crate::common::error::ChunkTranslateError;
use crate::pipelines::presets::ModelSource;
use clap::ValueEnum;
use rust_bert::pipelines::translation::{Language, TranslationModel};
use serde::{Deserialize, Serialize};
use tch::Device;

/// # Translation of a single piece of text
///
/// Implemented by `ModelTranslator` on top of a pretrained `rust-bert` model. Calls are
/// synchronous and independent of each other.
pub trait Translator {
    fn translate(&self, text: &str) -> Result<String, ChunkTranslateError>;
}

impl<T: Translator + ?Sized> Translator for &T {
    fn translate(&self, text: &str) -> Result<String, ChunkTranslateError> {
        (**self).translate(text)
    }
}

impl<T: Translator + ?Sized> Translator for Box<T> {
    fn translate(&self, text: &str) -> Result<String, ChunkTranslateError> {
        (**self).translate(text)
    }
}

/// # Device the model is loaded on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DeviceOption {
    /// First CUDA device if available, CPU otherwise
    #[default]
    Auto,
    Cpu,
    /// First CUDA device
    Cuda,
}

impl From<DeviceOption> for Device {
    fn from(option: DeviceOption) -> Self {
        match option {
            DeviceOption::Auto => Device::cuda_if_available(),
            DeviceOption::Cpu => Device::Cpu,
            DeviceOption::Cuda => Device::Cuda(0),
        }
    }
}

/// # Translator backed by a pretrained Marian or NLLB model
pub struct ModelTranslator {
    model: TranslationModel,
    source_language: Option<Language>,
    target_language: Language,
}

impl ModelTranslator {
    /// Loads the model, downloading and caching pretrained resources on first use.
    ///
    /// # Arguments
    ///
    /// * `model_source` - pretrained preset or local model files
    /// * `source_language` - language of the input text, required for NLLB models
    /// * `target_language` - language to translate to
    /// * `device` - device to load the model on
    ///
    /// # Example
    ///
    /// ```no_run
    /// # fn main() -> Result<(), chunk_translate::ChunkTranslateError> {
    /// use chunk_translate::pipelines::presets::{ModelPreset, ModelSource};
    /// use chunk_translate::pipelines::translator::{DeviceOption, ModelTranslator, Translator};
    /// use rust_bert::pipelines::translation::Language;
    ///
    /// let translator = ModelTranslator::new(
    ///     &ModelSource::Pretrained(ModelPreset::OpusMtGermanEnglish),
    ///     Some(Language::German),
    ///     Language::English,
    ///     DeviceOption::Auto,
    /// )?;
    /// let output = translator.translate("Der Hund ist nicht aufgewacht.")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(
        model_source: &ModelSource,
        source_language: Option<Language>,
        target_language: Language,
        device: DeviceOption,
    ) -> Result<ModelTranslator, ChunkTranslateError> {
        let source_language = source_language.or_else(|| model_source.default_source_language());
        model_source.validate_languages(source_language, target_language)?;
        let model = TranslationModel::new(model_source.translation_config(device.into()))?;
        Ok(ModelTranslator {
            model,
            source_language,
            target_language,
        })
    }

    pub fn source_language(&self) -> Option<Language> {
        self.source_language
    }

    pub fn target_language(&self) -> Language {
        self.target_language
    }
}

impl Translator for ModelTranslator {
    fn translate(&self, text: &str) -> Result<String, ChunkTranslateError> {
        let output = self
            .model
            .translate(&[text], self.source_language, self.target_language)?;
        output
            .into_iter()
            .next()
            .map(|translation| translation.trim().to_string())
            .ok_or_else(|| {
                ChunkTranslateError::TranslationError("model returned no output".to_string())
            })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    #[ignore] // no need to run, compilation is enough to verify it is Send
    fn test() {
        let translator = ModelTranslator::new(
            &ModelSource::default(),
            None,
            Language::English,
            DeviceOption::Cpu,
        )
        .unwrap();
        let _: Box<dyn Send> = Box::new(translator);
    }
}
