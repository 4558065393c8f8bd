use std::{
    fs::File,
    io::{self, BufWriter, StdoutLock, Write as _},
    path::{Path, PathBuf},
};

use anyhow::{Context, ensure};
use sumstat_core::frequency::FrequencyRow;

/// Sink for the JSON result documents: stdout by default, a file when the
/// user passes `--output`.
#[derive(Debug)]
pub enum Output {
    Stdout {
        writer: StdoutLock<'static>,
    },
    File {
        writer: BufWriter<File>,
        path: PathBuf,
    },
}

impl Output {
    pub fn save_json<T>(value: &T, output_path: Option<PathBuf>) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        let mut output = Output::from_output_path(output_path)?;
        output.write_json(value)
    }

    pub fn from_output_path(output_path: Option<PathBuf>) -> anyhow::Result<Self> {
        match output_path {
            Some(path) => Output::open(path),
            None => Ok(Output::stdout()),
        }
    }

    pub fn stdout() -> Self {
        Output::Stdout {
            writer: io::stdout().lock(),
        }
    }

    pub fn open(path: PathBuf) -> anyhow::Result<Self> {
        let file = File::create(&path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        Ok(Output::File {
            writer: BufWriter::new(file),
            path,
        })
    }

    pub fn display_path(&self) -> String {
        match self {
            Output::Stdout { .. } => "stdout".to_string(),
            Output::File { path, .. } => path.display().to_string(),
        }
    }

    pub fn write_json<T>(&mut self, value: T) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        serde_json::to_writer_pretty(&mut *self, &value)
            .with_context(|| format!("Failed to write JSON to {}", self.display_path()))?;
        writeln!(&mut *self).with_context(|| {
            format!(
                "Failed to write newline after JSON to {}",
                self.display_path()
            )
        })?;
        self.flush()
            .with_context(|| format!("Failed to flush output to {}", self.display_path()))?;
        Ok(())
    }
}

impl io::Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Stdout { writer } => writer.write(buf),
            Output::File { writer, .. } => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Stdout { writer } => writer.flush(),
            Output::File { writer, .. } => writer.flush(),
        }
    }
}

pub fn read_json_file<T, P>(file_kind: &str, path: P) -> anyhow::Result<T>
where
    T: serde::de::DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open {} file: {}", file_kind, path.display()))?;

    let reader = io::BufReader::new(file);
    let value = serde_json::from_reader(reader).with_context(|| {
        format!(
            "Failed to parse {} JSON file: {}",
            file_kind,
            path.display()
        )
    })?;

    Ok(value)
}

/// Collects the observations for a subcommand: a JSON array file when
/// `--input` is given, the inline arguments otherwise.
///
/// Non-finite observations are rejected here so the engine only ever sees
/// finite numbers.
pub fn load_values(inline: &[f64], input: Option<&Path>) -> anyhow::Result<Vec<f64>> {
    let values: Vec<f64> = match input {
        Some(path) => read_json_file("values", path)?,
        None => inline.to_vec(),
    };
    ensure!(
        values.iter().all(|v| v.is_finite()),
        "observations must be finite numbers (no NaN or infinity)"
    );
    Ok(values)
}

/// Prints a human-readable frequency table to stderr, with `#` bars
/// proportional to each row's relative frequency.
#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn print_frequency_table(table: &[FrequencyRow]) {
    const MAX_BAR_WIDTH: f64 = 50.0;

    if table.is_empty() {
        eprintln!("(empty frequency table)");
        return;
    }
    eprintln!(
        "{:>12} | {:>5} {:>8} {:>5} {:>8}",
        "value", "f", "fr", "F", "Fr"
    );
    for row in table {
        let bar_width = (row.relative_frequency * MAX_BAR_WIDTH).round() as usize;
        eprintln!(
            "{:>12.4} | {:>5} {:>7.2}% {:>5} {:>7.2}% {}",
            row.value,
            row.absolute_frequency,
            row.relative_frequency * 100.0,
            row.cumulative_frequency,
            row.cumulative_relative_frequency * 100.0,
            "#".repeat(bar_width)
        );
    }
}
