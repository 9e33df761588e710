use chunk_translate::chunking::Chunker;
use chunk_translate::logging::init_logging;
use chunk_translate::pipelines::file_translation::ChunkedTranslator;
use chunk_translate::pipelines::translator::Translator;
use chunk_translate::ChunkTranslateError;
use std::fs;
use std::num::NonZeroUsize;

/// Echoes its input, except for chunks containing "fox".
struct FoxShy;

impl Translator for FoxShy {
    fn translate(&self, text: &str) -> Result<String, ChunkTranslateError> {
        if text.contains("fox") {
            Err(ChunkTranslateError::TranslationError(
                "model refused the fox".to_string(),
            ))
        } else {
            Ok(text.to_string())
        }
    }
}

// The subscriber is global to the test binary, so this file holds a single test.
#[test]
fn debug_log_file_records_chunks() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let input = dir.path().join("input.txt");
    let output = dir.path().join("output.txt");
    let log = dir.path().join("translation_debug.log");
    fs::write(&input, "The quick brown fox jumps.")?;
    fs::write(&log, "earlier run\n")?;

    init_logging("info", Some(&log))?;
    let pipeline = ChunkedTranslator::new(FoxShy, Chunker::new(NonZeroUsize::new(10).unwrap()));
    pipeline.translate_file(&input, &output)?;
    pipeline.translate_file(&input, &output)?;

    let contents = fs::read_to_string(&log)?;
    assert!(contents.starts_with("earlier run\n"));
    assert_eq!(contents.matches("Reading input").count(), 2);
    assert!(contents.matches("run_id=").count() >= 2);
    assert!(contents.contains("source text"));
    assert!(contents.contains("source=The quick"));
    assert!(contents.contains("translated text"));
    assert!(contents.contains("translation=The quick"));
    assert!(contents.contains("translation=jumps."));
    assert!(contents.contains("source=brown fox"));
    assert!(contents.contains("translation failed, using placeholder"));
    assert!(contents.contains("model refused the fox"));
    assert!(!contents.contains('\u{1b}'));
    assert!(contents
        .lines()
        .skip(1)
        .all(|line| line.starts_with(|c: char| c.is_ascii_digit())));
    Ok(())
}
