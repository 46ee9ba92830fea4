use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use shopgen_core::{Dataset, Record};

use crate::errors::GenerationError;

/// Write one table as CSV with a header row in column order.
pub fn write_table_csv<R: Record>(path: &Path, rows: &[R]) -> Result<u64, csv::Error> {
    let writer = BufWriter::new(File::create(path).map_err(csv::Error::from)?);
    let counting = CountingWriter::new(writer);
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(counting);

    let table = R::TABLE;
    writer.write_record(table.column_names())?;

    for row in rows {
        let record: Vec<String> = row
            .values()
            .iter()
            .zip(table.columns)
            .map(|(value, column)| value.to_csv(column))
            .collect();
        writer.write_record(&record)?;
    }

    writer.flush()?;
    let counting = writer.into_inner().map_err(|err| err.into_error())?;
    Ok(counting.bytes_written())
}

/// Write every table of the dataset as `<dir>/<table>.csv`.
pub fn write_dataset_csv(dir: &Path, dataset: &Dataset) -> Result<u64, GenerationError> {
    std::fs::create_dir_all(dir)?;
    let mut bytes = 0_u64;
    bytes += write_table_csv(&csv_path::<shopgen_core::Customer>(dir), &dataset.customers)?;
    bytes += write_table_csv(&csv_path::<shopgen_core::Product>(dir), &dataset.products)?;
    bytes += write_table_csv(&csv_path::<shopgen_core::Order>(dir), &dataset.orders)?;
    bytes += write_table_csv(&csv_path::<shopgen_core::Event>(dir), &dataset.events)?;
    Ok(bytes)
}

fn csv_path<R: Record>(dir: &Path) -> std::path::PathBuf {
    dir.join(format!("{}.csv", R::TABLE.name))
}

struct CountingWriter<W: Write> {
    inner: W,
    bytes: u64,
}

impl<W: Write> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, bytes: 0 }
    }

    fn bytes_written(&self) -> u64 {
        self.bytes
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let size = self.inner.write(buf)?;
        self.bytes = self.bytes.saturating_add(size as u64);
        Ok(size)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}
