use std::io::BufRead;
use std::path::{Path, PathBuf};

use common::{CorrelatedRecord, RawEvent, Roster, RosterEntry};
use correlation::Correlator;

#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("writing records: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("input {0} is neither a file nor a directory")]
    InvalidInput(PathBuf),
}

/// One line of an event tape. The external decoder emits `Roster` entries
/// whenever the connected-player set or an equipment value changes, so the
/// roster the correlator sees is always current for the following events.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub enum TapeEntry {
    Roster(Vec<RosterEntry>),
    Event(RawEvent),
}

#[derive(Debug)]
pub struct FileReport {
    pub output: PathBuf,
    pub records: usize,
    /// Line number of the first undecodable or unreadable entry, if the
    /// tape was cut short.
    pub truncated_at: Option<usize>,
}

/// Folds one event tape through a fresh correlator and writes the records.
///
/// A malformed or unreadable line stops the fold but never discards it:
/// everything correlated up to that point is still written.
pub fn process_file(path: &Path, out_dir: &Path, pretty: bool) -> Result<FileReport, DriverError> {
    let file = std::fs::File::open(path)?;
    let reader = std::io::BufReader::new(file);

    let mut correlator = Correlator::new();
    let mut roster = Roster::empty();
    let mut truncated_at = None;

    for (index, line) in reader.lines().enumerate() {
        // A mid-tape read error truncates the fold exactly like a malformed
        // line: the records correlated so far still get written below.
        let line = match line {
            Ok(line) => line,
            Err(error) => {
                tracing::warn!(path = %path.display(), line = index + 1, %error, "Read error, flushing what was correlated so far");
                truncated_at = Some(index + 1);
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let entry: TapeEntry = match serde_json::from_str(&line) {
            Ok(entry) => entry,
            Err(error) => {
                tracing::warn!(path = %path.display(), line = index + 1, %error, "Malformed tape entry, flushing what was correlated so far");
                truncated_at = Some(index + 1);
                break;
            }
        };

        match entry {
            TapeEntry::Roster(players) => roster = Roster::new(players),
            TapeEntry::Event(event) => correlator.process(&event, &roster),
        }
    }

    let records = correlator.into_records();
    let output = output_path(path, out_dir);
    write_records(&output, &records, pretty)?;

    Ok(FileReport {
        output,
        records: records.len(),
        truncated_at,
    })
}

fn output_path(input: &Path, out_dir: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "tape".to_owned());

    out_dir.join(format!("{}.records.json", stem))
}

fn write_records(
    path: &Path,
    records: &[CorrelatedRecord],
    pretty: bool,
) -> Result<(), DriverError> {
    let file = std::fs::File::create(path)?;
    let writer = std::io::BufWriter::new(file);

    if pretty {
        serde_json::to_writer_pretty(writer, records)?;
    } else {
        serde_json::to_writer(writer, records)?;
    }

    Ok(())
}

/// Runs over a single tape file or every `*.json` file in a directory.
/// A failing file is logged and skipped, the run continues.
pub fn run(input: &Path, out_dir: &Path, pretty: bool) -> Result<usize, DriverError> {
    std::fs::create_dir_all(out_dir)?;

    let inputs = if input.is_file() {
        vec![input.to_path_buf()]
    } else if input.is_dir() {
        let mut files: Vec<_> = std::fs::read_dir(input)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.extension().map(|e| e == "json").unwrap_or(false))
            .collect();
        files.sort();
        files
    } else {
        return Err(DriverError::InvalidInput(input.to_path_buf()));
    };

    let mut processed = 0;
    for path in inputs.iter() {
        match process_file(path, out_dir, pretty) {
            Ok(report) => {
                tracing::info!(
                    input = %path.display(),
                    output = %report.output.display(),
                    records = report.records,
                    truncated = report.truncated_at.is_some(),
                    "Tape processed"
                );
                processed += 1;
            }
            Err(error) => {
                tracing::error!(input = %path.display(), %error, "Skipping tape");
            }
        }
    }

    Ok(processed)
}
