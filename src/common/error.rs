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

use rust_bert::RustBertError;
use thiserror::Error;
use tracing_subscriber::util::TryInitError;

#[derive(Error, Debug)]
pub enum ChunkTranslateError {
    #[error("IO error: {0}")]
    IOError(String),

    #[error("Model error: {0}")]
    ModelError(String),

    #[error("Translation error: {0}")]
    TranslationError(String),

    #[error("Invalid configuration error: {0}")]
    InvalidConfigurationError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Logging error: {0}")]
    LoggingError(String),
}

impl From<std::io::Error> for ChunkTranslateError {
    fn from(error: std::io::Error) -> Self {
        ChunkTranslateError::IOError(error.to_string())
    }
}

impl From<RustBertError> for ChunkTranslateError {
    fn from(error: RustBertError) -> Self {
        ChunkTranslateError::ModelError(error.to_string())
    }
}

impl From<serde_json::Error> for ChunkTranslateError {
    fn from(error: serde_json::Error) -> Self {
        ChunkTranslateError::SerializationError(error.to_string())
    }
}

impl From<TryInitError> for ChunkTranslateError {
    fn from(error: TryInitError) -> Self {
        ChunkTranslateError::LoggingError(error.to_string())
    }
}
