/*!
 * Integration tests for end-to-end subtitle formatting workflows
 */

use std::fs;

use anyhow::Result;

use jimakufmt::formatter::format_srt;
use jimakufmt::options::{FormatOptions, SynthesizeOptions};
use jimakufmt::srt::parse;
use jimakufmt::synthesizer::synthesize;

use crate::common;

/// Test that we can load, reformat, and save a subtitle file in a full workflow
#[test]
fn test_format_workflow_withFileRoundTrip_shouldPreserveTimingAndEntries() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();

    // 1. Write the source subtitle file
    let input_path = common::create_test_subtitle(&dir, "source.srt")?;

    // 2. Load and reformat it
    let content = fs::read_to_string(&input_path)?;
    let formatted = format_srt(&content, &FormatOptions::default());

    // 3. Save the result and read it back
    let output_path = dir.join("formatted.srt");
    fs::write(&output_path, &formatted)?;
    let reloaded = fs::read_to_string(&output_path)?;

    // 4. The reloaded document has the same entries and timing as the source
    let source_entries = parse(&content);
    let output_entries = parse(&reloaded);

    assert_eq!(output_entries.len(), source_entries.len());
    for (source, output) in source_entries.iter().zip(&output_entries) {
        assert_eq!(output.index, source.index);
        assert_eq!(output.start_ms, source.start_ms);
        assert_eq!(output.end_ms, source.end_ms);
    }

    Ok(())
}

/// Test that reformatting an already formatted document is a fixed point
#[test]
fn test_format_workflow_withRepeatedFormatting_shouldBeStable() {
    let options = FormatOptions::default();

    let once = format_srt(common::sample_japanese_srt(), &options);
    let twice = format_srt(&once, &options);

    assert_eq!(once, twice);
}

/// Test synthesizing a transcript and then reformatting it at a narrower width
#[test]
fn test_synthesize_then_reformat_workflow_shouldPreserveSynthesizedTiming() {
    let transcript = "これは字幕合成の確認です。長いテキストを折り返しながら整形します。最後の文です。";

    let synthesized = synthesize(transcript, &SynthesizeOptions::default());
    let synthesized_entries = parse(&synthesized);
    assert_eq!(synthesized_entries.len(), 3);

    let reformatted = format_srt(
        &synthesized,
        &FormatOptions {
            max_line_width: 10.0,
            ..FormatOptions::default()
        },
    );
    let reformatted_entries = parse(&reformatted);

    assert_eq!(reformatted_entries.len(), 3);
    for (synth, reformatted) in synthesized_entries.iter().zip(&reformatted_entries) {
        assert_eq!(reformatted.index, synth.index);
        assert_eq!(reformatted.start_ms, synth.start_ms);
        assert_eq!(reformatted.end_ms, synth.end_ms);
        assert_eq!(reformatted.lines.concat(), synth.lines.concat());
    }
}

/// Test a transcript file flows through synthesis to a subtitle file on disk
#[test]
fn test_synthesize_workflow_withFileOutput_shouldWriteParsableSrt() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();

    let transcript_path =
        common::create_test_file(&dir, "transcript.txt", "最初の文です。次の文です。")?;
    let transcript = fs::read_to_string(&transcript_path)?;

    let srt = synthesize(&transcript, &SynthesizeOptions::default());
    let output_path = dir.join("synthesized.srt");
    fs::write(&output_path, &srt)?;

    let entries = parse(&fs::read_to_string(&output_path)?);
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].start_ms, 0);
    assert!(entries[0].end_ms > 0);

    Ok(())
}
