use chunk_translate::chunking::Chunker;
use chunk_translate::pipelines::file_translation::ChunkedTranslator;
use chunk_translate::pipelines::presets::{ModelPreset, ModelSource};
use chunk_translate::pipelines::translator::{DeviceOption, ModelTranslator, Translator};
use rust_bert::pipelines::translation::Language;
use std::fs;
use std::num::NonZeroUsize;

#[test]
#[cfg_attr(not(feature = "all-tests"), ignore)]
fn marian_german_to_english() -> anyhow::Result<()> {
    let translator = ModelTranslator::new(
        &ModelSource::Pretrained(ModelPreset::OpusMtGermanEnglish),
        None,
        Language::English,
        DeviceOption::Auto,
    )?;

    let output = translator.translate("Der Hund ist nicht aufgewacht.")?;

    assert_eq!(translator.source_language(), Some(Language::German));
    assert!(output.to_lowercase().contains("dog"), "{output}");
    assert_eq!(output, output.trim());
    Ok(())
}

#[test]
#[cfg_attr(not(feature = "all-tests"), ignore)]
fn marian_french_file_translation() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let input = dir.path().join("input.txt");
    let output = dir.path().join("output.txt");
    fs::write(
        &input,
        "Le chien ne s'est pas réveillé. Le rapide renard brun saute sur le chien paresseux.",
    )?;

    let translator = ModelTranslator::new(
        &ModelSource::Pretrained(ModelPreset::OpusMtFrenchEnglish),
        Some(Language::French),
        Language::English,
        DeviceOption::Auto,
    )?;
    let chunker = Chunker::new(NonZeroUsize::new(40).unwrap());
    let pipeline = ChunkedTranslator::new(translator, chunker);
    let report = pipeline.translate_file(&input, &output)?;

    assert_eq!(report.len(), 3);
    assert_eq!(report.failed_count(), 0);
    let translated = fs::read_to_string(&output)?;
    assert_eq!(translated.split("\n\n").count(), 3);
    assert!(translated.to_lowercase().contains("fox"), "{translated}");
    Ok(())
}
