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
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the directory holding this crate's files under the user configuration directory.
pub const CONFIG_DIRECTORY_NAME: &str = "chunk-translate";

/// Loads a UTF-8 text file in memory.
pub fn read_source(path: &Path) -> Result<String, ChunkTranslateError> {
    fs::read_to_string(path).map_err(|e| {
        ChunkTranslateError::IOError(format!("could not read {}: {e}", path.display()))
    })
}

/// Writes `text` to `path`, replacing any existing file.
pub fn write_output(path: &Path, text: &str) -> Result<(), ChunkTranslateError> {
    fs::write(path, text).map_err(|e| {
        ChunkTranslateError::IOError(format!("could not write {}: {e}", path.display()))
    })
}

/// Default location of the configuration file.
///
/// `CHUNK_TRANSLATE_CONFIG` takes precedence when set, otherwise the file is looked up as
/// `chunk-translate/config.json` under the platform configuration directory.
pub fn default_config_path() -> Option<PathBuf> {
    match env::var_os("CHUNK_TRANSLATE_CONFIG") {
        Some(value) => Some(PathBuf::from(value)),
        None => dirs::config_dir().map(|mut dir| {
            dir.push(CONFIG_DIRECTORY_NAME);
            dir.push("config.json");
            dir
        }),
    }
}
