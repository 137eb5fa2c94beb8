//! High-level library API: convert a whole file of numeral expressions, or any
//! buffered reader into any writer, and get a `BatchReport` back. Prefer these
//! entrypoints over the per-line functions in `core` when integrating romanwords.
use std::io::{BufRead, Write};
use std::path::Path;

use tracing::{debug, info, warn};

use crate::core::line::process_line;
use crate::core::params::ConversionParams;
use crate::error::{Error, Result};
use crate::io::{open_input, open_output};
use crate::types::BatchState;

/// Batch processing report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Input lines read
    pub lines: usize,
    /// Result lines written
    pub written: usize,
    /// Lines that did not have the `NUMERAL OP NUMERAL` shape
    pub skipped: usize,
    /// Well-shaped lines rejected in strict mode
    pub errors: usize,
}

fn advance(state: &mut BatchState, next: BatchState) {
    debug_assert!(!state.is_terminal(), "no transition out of {state}");
    debug!("Batch state: {} -> {}", state, next);
    *state = next;
}

fn strip_terminator(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

fn convert_lines<R: BufRead, W: Write>(
    mut reader: R,
    writer: &mut W,
    params: &ConversionParams,
) -> Result<BatchReport> {
    let mut report = BatchReport::default();
    let mut buf = Vec::new();

    // Raw bytes per line; bytes that are not UTF-8 become U+FFFD, which no
    // numeral or operator matches, so they degrade like any other bad character.
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(strip_terminator(&buf));
        report.lines += 1;
        let line_no = report.lines;

        match process_line(&line, params.mode) {
            Ok(words) => {
                writeln!(writer, "{}", words)?;
                report.written += 1;
            }
            Err(e) => {
                if params.fail_fast || e.is_fatal() {
                    return Err(e);
                }
                warn!("Skipping line {}: {}", line_no, e);
                if matches!(e, Error::MalformedLine { .. }) {
                    report.skipped += 1;
                } else {
                    report.errors += 1;
                }
            }
        }
    }

    Ok(report)
}

/// Convert every line from `reader` and write one result line per converted
/// input line to `writer`, in input order. Lines that cannot be converted are
/// counted and skipped, or returned as the error when `params.fail_fast` is set.
pub fn process_lines<R: BufRead, W: Write>(
    reader: R,
    mut writer: W,
    params: &ConversionParams,
) -> Result<BatchReport> {
    let report = convert_lines(reader, &mut writer, params)?;
    writer.flush()?;
    Ok(report)
}

/// Convert the file at `input` into `output`. The input is opened first, so a
/// missing input never creates or truncates the output.
pub fn process_file_to_path(
    input: &Path,
    output: &Path,
    params: &ConversionParams,
) -> Result<BatchReport> {
    let mut state = BatchState::Start;
    advance(&mut state, BatchState::ResourcesOpening);

    let reader = match open_input(input) {
        Ok(reader) => reader,
        Err(e) => {
            advance(&mut state, BatchState::Failed);
            return Err(e);
        }
    };
    let mut writer = match open_output(output) {
        Ok(writer) => writer,
        Err(e) => {
            advance(&mut state, BatchState::Failed);
            return Err(e);
        }
    };
    advance(&mut state, BatchState::ResourcesReady);

    info!("Converting {:?} -> {:?} ({} mode)", input, output, params.mode);

    advance(&mut state, BatchState::ProcessingLines);
    let report = match convert_lines(reader, &mut writer, params) {
        Ok(report) => report,
        Err(e) => {
            advance(&mut state, BatchState::Failed);
            return Err(e);
        }
    };

    advance(&mut state, BatchState::Draining);
    if let Err(e) = writer.flush() {
        advance(&mut state, BatchState::Failed);
        return Err(e.into());
    }
    advance(&mut state, BatchState::Done);

    info!(
        "Lines: {}, written: {}, skipped: {}, errors: {}",
        report.lines, report.written, report.skipped, report.errors
    );
    Ok(report)
}
