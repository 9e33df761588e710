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

use anyhow::Context;
use chunk_translate::file_utils::default_config_path;
use chunk_translate::logging::init_logging;
use chunk_translate::pipelines::file_translation::{ChunkedTranslator, FileTranslationConfig};
use chunk_translate::pipelines::presets::{ModelPreset, ModelSource};
use chunk_translate::pipelines::translator::{DeviceOption, ModelTranslator};
use chunk_translate::Config;
use clap::Parser;
use rust_bert::pipelines::translation::Language;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, warn};

/// Translates a text file chunk by chunk with a pretrained Marian or NLLB model
#[derive(Parser, Debug)]
#[command(name = "chunk-translate", version)]
struct Args {
    /// Source text file
    input: Option<PathBuf>,

    /// Translated text file
    output: Option<PathBuf>,

    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Pretrained model
    #[arg(short, long, value_enum)]
    model: Option<ModelPreset>,

    /// Language of the input text (e.g. German, French)
    #[arg(long, value_parser = parse_language)]
    source_language: Option<Language>,

    /// Language to translate to
    #[arg(long, value_parser = parse_language)]
    target_language: Option<Language>,

    /// Maximum chunk width in characters
    #[arg(long)]
    max_chars: Option<NonZeroUsize>,

    /// Output written in place of chunks that fail to translate
    #[arg(long)]
    placeholder: Option<String>,

    #[arg(long, value_enum)]
    device: Option<DeviceOption>,

    /// Debug log file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Do not write a debug log file
    #[arg(long, conflicts_with = "log_file")]
    no_log_file: bool,

    /// Print the resolved configuration as JSON and exit
    #[arg(long)]
    dump_config: bool,
}

fn parse_language(value: &str) -> Result<Language, String> {
    serde_json::from_value(serde_json::Value::String(value.to_string()))
        .map_err(|_| format!("unknown language {value}, expected a name such as German"))
}

fn load_config(args: &Args) -> anyhow::Result<FileTranslationConfig> {
    let mut config = match &args.config {
        Some(path) => FileTranslationConfig::from_file(path)?,
        None => match default_config_path().filter(|path| path.is_file()) {
            Some(path) => FileTranslationConfig::from_file(&path)?,
            None => FileTranslationConfig::default(),
        },
    };

    if let Some(input) = &args.input {
        config.input = input.clone();
    }
    if let Some(output) = &args.output {
        config.output = output.clone();
    }
    if let Some(preset) = args.model {
        config.model = ModelSource::Pretrained(preset);
    }
    if args.source_language.is_some() {
        config.source_language = args.source_language;
    }
    if let Some(language) = args.target_language {
        config.target_language = language;
    }
    if let Some(max_chars) = args.max_chars {
        config.max_chars = max_chars;
    }
    if let Some(placeholder) = &args.placeholder {
        config.placeholder = placeholder.clone();
    }
    if let Some(device) = args.device {
        config.device = device;
    }
    if args.no_log_file {
        config.log_file = None;
    } else if let Some(log_file) = &args.log_file {
        config.log_file = Some(log_file.clone());
    }
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = load_config(&args).context("could not load configuration")?;
    if args.dump_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }
    config.validate()?;
    init_logging(&config.log_level, config.log_file.as_deref())?;

    info!("Loading {}...", config.model);
    let start = Instant::now();
    let translator = ModelTranslator::new(
        &config.model,
        config.source_language,
        config.target_language,
        config.device,
    )
    .with_context(|| format!("could not load model {}", config.model))?;
    info!("Model loaded in {:.1?}", start.elapsed());

    let pipeline = ChunkedTranslator::from_config(translator, &config);
    let report = pipeline.translate_file(&config.input, &config.output)?;
    if report.failed_count() > 0 {
        warn!(
            "{} of {} chunks could not be translated and were replaced by {:?}",
            report.failed_count(),
            report.len(),
            pipeline.placeholder()
        );
    }
    Ok(())
}
