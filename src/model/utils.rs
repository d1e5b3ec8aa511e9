use std::io;
use std::path::Path;
use tokenizers::{PaddingParams, PaddingStrategy, Tokenizer, TruncationParams};

/// Loads a tokenizer from a model directory or explicit tokenizer.json path.
pub fn load_tokenizer(model_path: &Path) -> io::Result<Tokenizer> {
    let tokenizer_path = if model_path
        .file_name()
        .is_some_and(|name| name == std::ffi::OsStr::new("tokenizer.json"))
    {
        model_path.to_path_buf()
    } else if model_path.is_dir() {
        model_path.join("tokenizer.json")
    } else {
        model_path
            .parent()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "Model path has no parent"))?
            .join("tokenizer.json")
    };

    Tokenizer::from_file(&tokenizer_path).map_err(io::Error::other)
}

/// Loads a tokenizer configured for batched sentence-pair scoring.
///
/// Pairs longer than `max_len` tokens are truncated, and every batch is padded
/// to its longest member so the encodings stack into one rectangular tensor.
pub fn load_pair_tokenizer(model_path: &Path, max_len: usize) -> io::Result<Tokenizer> {
    let mut tokenizer = load_tokenizer(model_path)?;

    let truncation = TruncationParams {
        max_length: max_len,
        ..Default::default()
    };

    tokenizer
        .with_truncation(Some(truncation))
        .map_err(|e| io::Error::other(format!("Failed to configure truncation: {}", e)))?;

    // Keep the checkpoint's pad token if it ships one.
    let padding = tokenizer
        .get_padding()
        .cloned()
        .map(|params| PaddingParams {
            strategy: PaddingStrategy::BatchLongest,
            ..params
        })
        .unwrap_or_default();
    tokenizer.with_padding(Some(padding));

    Ok(tokenizer)
}
