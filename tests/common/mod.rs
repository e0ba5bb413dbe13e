/*!
 * Common test utilities for the jimakufmt test suite
 */

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use tempfile::TempDir;

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &PathBuf, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Creates a sample Japanese subtitle file for testing
pub fn create_test_subtitle(dir: &PathBuf, filename: &str) -> Result<PathBuf> {
    create_test_file(dir, filename, sample_japanese_srt())
}

/// A well-formed two-block Japanese SRT document
pub fn sample_japanese_srt() -> &'static str {
    "1\n\
     00:00:00,000 --> 00:00:03,000\n\
     これは非常に長いテキストです、句読点の処理を確認します。\n\
     \n\
     2\n\
     00:00:03,000 --> 00:00:06,000\n\
     ２番目の字幕です。\n"
}
