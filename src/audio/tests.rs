use std::fs;
use std::path::Path;
use std::time::Duration;

use super::{DurationProbe, TagProbe};
use crate::error::AudioError;

/// Silent 16-bit mono PCM at 8 kHz.
fn write_silent_wav(path: &Path, seconds: u32) {
    let rate: u32 = 8_000;
    let data_len = rate * 2 * seconds;

    let mut bytes = Vec::with_capacity(44 + data_len as usize);
    bytes.extend_from_slice(b"RIFF");
    bytes.extend_from_slice(&(36 + data_len).to_le_bytes());
    bytes.extend_from_slice(b"WAVE");
    bytes.extend_from_slice(b"fmt ");
    bytes.extend_from_slice(&16u32.to_le_bytes());
    bytes.extend_from_slice(&1u16.to_le_bytes()); // PCM
    bytes.extend_from_slice(&1u16.to_le_bytes()); // mono
    bytes.extend_from_slice(&rate.to_le_bytes());
    bytes.extend_from_slice(&(rate * 2).to_le_bytes());
    bytes.extend_from_slice(&2u16.to_le_bytes());
    bytes.extend_from_slice(&16u16.to_le_bytes());
    bytes.extend_from_slice(b"data");
    bytes.extend_from_slice(&data_len.to_le_bytes());
    bytes.resize(44 + data_len as usize, 0);

    fs::write(path, bytes).unwrap();
}

#[test]
fn tag_probe_reads_wav_duration() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tone.wav");
    write_silent_wav(&path, 2);

    let d = TagProbe.duration_of(&path).unwrap();
    let diff = d.abs_diff(Duration::from_secs(2));
    assert!(diff < Duration::from_millis(50), "got {d:?}");
}

#[test]
fn tag_probe_rejects_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = TagProbe.duration_of(&dir.path().join("nope.mp3")).unwrap_err();
    assert!(matches!(err, AudioError::Decode { .. }));
}

#[test]
fn tag_probe_rejects_non_audio() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    fs::write(&path, "not audio at all").unwrap();

    assert!(TagProbe.duration_of(&path).is_err());
}
