//! The analyze command: normalize, profile, and optionally recover.

use anyhow::{Context, Result};
use log::{debug, info};
use std::path::PathBuf;

use crate::analysis::{
    buckets::bucketize, coincidence::coincidence_profile, decode::decode, normalize::normalize,
    recover::recover_key,
};
use crate::cli::OutputFormat;
use crate::core::AnalysisReport;
use crate::io::output::create_writer;

pub struct AnalyzeConfig {
    pub path: PathBuf,
    pub key_length: Option<usize>,
    pub shift_max: usize,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
}

pub fn handle_analyze(config: AnalyzeConfig) -> Result<()> {
    let raw = std::fs::read_to_string(&config.path)
        .with_context(|| format!("failed to read ciphertext file {}", config.path.display()))?;

    let report = analyze_ciphertext(&raw, config.key_length, config.shift_max)?;

    let mut writer = create_writer(config.format, config.output.as_deref())?;
    writer.write_report(&report)
}

/// Runs the analytical pipeline over raw ciphertext.
///
/// With no key length, stops after the coincidence profile; the caller is
/// expected to pick a length from the ranking and run again. With one,
/// continues through bucketing, key recovery, and decoding.
pub fn analyze_ciphertext(
    raw: &str,
    key_length: Option<usize>,
    shift_max: usize,
) -> Result<AnalysisReport> {
    let ciphertext = normalize(raw)?;
    info!("normalized {} ciphertext letters", ciphertext.len());

    let profile = coincidence_profile(&ciphertext, shift_max);
    debug!("coincidence profile has {} entries", profile.entries.len());

    let mut report = AnalysisReport {
        ciphertext_len: ciphertext.len(),
        shift_max,
        profile,
        key_length,
        key: None,
        plaintext: None,
    };

    if let Some(length) = key_length {
        let buckets = bucketize(&ciphertext, length)?;
        let key = recover_key(&buckets)?;
        let plaintext = decode(&ciphertext, &key)?;
        info!("recovered key {} for length {}", key, length);
        report.key = Some(key.to_string());
        report.plaintext = Some(plaintext.to_string());
    }

    Ok(report)
}
