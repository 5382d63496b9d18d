use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::{Result, SynthesisError};
use crate::models::Record;

/// Writes and reads the `[{"header": .., "data": [..]}, ..]` record array.
pub struct JsonWriter {
    pretty: bool,
}

impl JsonWriter {
    pub fn new() -> Self {
        Self { pretty: true }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn render(&self, records: &[Record]) -> Result<String> {
        let text = if self.pretty {
            serde_json::to_string_pretty(records)?
        } else {
            serde_json::to_string(records)?
        };
        Ok(text)
    }

    pub fn write_records(&self, records: &[Record], path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut writer = BufWriter::new(File::create(path)?);
        if self.pretty {
            serde_json::to_writer_pretty(&mut writer, records)?;
        } else {
            serde_json::to_writer(&mut writer, records)?;
        }
        writer.write_all(b"\n")?;
        writer.flush()?;

        info!(path = %path.display(), records = records.len(), "wrote records");
        Ok(())
    }

    pub fn read_records(&self, path: &Path) -> Result<Vec<Record>> {
        let reader = BufReader::new(File::open(path)?);
        let records: Vec<Record> = serde_json::from_reader(reader)?;

        if let Some(bad) = records.iter().find(|r| !r.is_consistent()) {
            return Err(SynthesisError::InvalidFormat(format!(
                "{} record has {} values, header declares {}",
                bad.element(),
                bad.data.len(),
                bad.header.cell_count()
            )));
        }

        Ok(records)
    }

    pub fn get_file_info(&self, path: &Path) -> Result<JsonFileInfo> {
        let records = self.read_records(path)?;
        let file_size = std::fs::metadata(path)?.len();

        Ok(JsonFileInfo {
            path: path.to_path_buf(),
            records: records.len(),
            cells_per_field: records.first().map_or(0, |r| r.header.cell_count()),
            null_values: records.iter().map(Record::missing_count).sum(),
            file_size,
        })
    }
}

impl Default for JsonWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
pub struct JsonFileInfo {
    pub path: PathBuf,
    pub records: usize,
    pub cells_per_field: usize,
    pub null_values: usize,
    pub file_size: u64,
}

impl JsonFileInfo {
    pub fn summary(&self) -> String {
        format!(
            "JSON File Summary:\n\
            - Path: {}\n\
            - Records: {}\n\
            - Cells per field: {}\n\
            - Null values: {}\n\
            - File size: {:.2} KB",
            self.path.display(),
            self.records,
            self.cells_per_field,
            self.null_values,
            self.file_size as f64 / 1024.0
        )
    }
}
