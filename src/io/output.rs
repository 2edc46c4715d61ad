use anyhow::Result;
use colored::Colorize;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::cli::OutputFormat;
use crate::core::AnalysisReport;

pub trait OutputWriter {
    fn write_report(&mut self, report: &AnalysisReport) -> Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &AnalysisReport) -> Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &AnalysisReport) -> Result<()> {
        for entry in &report.profile.entries {
            writeln!(
                self.writer,
                "Shift {}: {} coincidences.",
                entry.shift, entry.count
            )?;
        }

        if let Some(key) = &report.key {
            writeln!(self.writer)?;
            writeln!(self.writer, "{} {}", "Key:".bold(), key)?;
        }
        if let Some(plaintext) = &report.plaintext {
            writeln!(self.writer, "{plaintext}")?;
        }
        Ok(())
    }
}

/// Builds a writer for the requested format, targeting the given file or
/// stdout.
pub fn create_writer(
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<Box<dyn OutputWriter>> {
    let target: Box<dyn Write> = match output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout()),
    };

    Ok(match format {
        OutputFormat::Json => Box::new(JsonWriter::new(target)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(target)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CoincidenceEntry, CoincidenceProfile};
    use pretty_assertions::assert_eq;

    fn sample_report() -> AnalysisReport {
        AnalysisReport {
            ciphertext_len: 8,
            shift_max: 3,
            profile: CoincidenceProfile::new(vec![
                CoincidenceEntry { shift: 1, count: 2 },
                CoincidenceEntry { shift: 2, count: 8 },
                CoincidenceEntry { shift: 3, count: 2 },
            ]),
            key_length: Some(2),
            key: Some("ab".to_string()),
            plaintext: Some("hellothere".to_string()),
        }
    }

    #[test]
    fn terminal_writer_emits_profile_lines_in_ranked_order() {
        colored::control::set_override(false);
        let mut buffer = Vec::new();
        TerminalWriter::new(&mut buffer)
            .write_report(&sample_report())
            .unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(
            text,
            "Shift 2: 8 coincidences.\n\
             Shift 1: 2 coincidences.\n\
             Shift 3: 2 coincidences.\n\
             \n\
             Key: ab\n\
             hellothere\n"
        );
    }

    #[test]
    fn terminal_writer_skips_key_block_on_profile_only_reports() {
        colored::control::set_override(false);
        let mut report = sample_report();
        report.key = None;
        report.plaintext = None;

        let mut buffer = Vec::new();
        TerminalWriter::new(&mut buffer)
            .write_report(&report)
            .unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(!text.contains("Key:"));
        assert!(text.ends_with("coincidences.\n"));
    }

    #[test]
    fn json_writer_round_trips_the_report() {
        let mut buffer = Vec::new();
        JsonWriter::new(&mut buffer)
            .write_report(&sample_report())
            .unwrap();
        let parsed: AnalysisReport = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed.key.as_deref(), Some("ab"));
        assert_eq!(parsed.profile.entries.len(), 3);
    }
}
