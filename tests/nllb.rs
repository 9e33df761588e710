use chunk_translate::pipelines::presets::{ModelPreset, ModelSource};
use chunk_translate::pipelines::translator::{DeviceOption, ModelTranslator, Translator};
use chunk_translate::ChunkTranslateError;
use rust_bert::pipelines::translation::Language;

#[test]
#[cfg_attr(not(feature = "all-tests"), ignore)]
fn nllb_translation() -> anyhow::Result<()> {
    let translator = ModelTranslator::new(
        &ModelSource::Pretrained(ModelPreset::Nllb600MDistilled),
        Some(Language::French),
        Language::English,
        DeviceOption::Auto,
    )?;

    let output = translator.translate("Cette phrase sera traduite en plusieurs langues.")?;

    assert!(output.to_lowercase().contains("sentence"), "{output}");
    assert!(!output.starts_with(' '));
    Ok(())
}

#[test]
fn nllb_without_source_language_fails_before_loading() {
    let result = ModelTranslator::new(
        &ModelSource::Pretrained(ModelPreset::Nllb600MDistilled),
        None,
        Language::English,
        DeviceOption::Cpu,
    );

    assert!(matches!(
        result,
        Err(ChunkTranslateError::InvalidConfigurationError(_))
    ));
}
