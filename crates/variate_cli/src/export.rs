//! CSV export of generated variates.
//!
//! One value per record, no header, fixed decimal precision.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use variate_core::Distribution;

use crate::params::params_slug;
use crate::Result;

/// Default export file name: `<id>_<p1>_<p2>….csv`.
pub fn default_file_name(distribution: Distribution, params: &[f64]) -> String {
    if params.is_empty() {
        format!("{}.csv", distribution.id())
    } else {
        format!("{}_{}.csv", distribution.id(), params_slug(params))
    }
}

/// Writes `samples` as single-column CSV records.
pub fn write_csv<W: Write>(writer: W, samples: &[f64], precision: usize) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    for value in samples {
        csv_writer.write_record([format!("{:.*}", precision, value)])?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Writes `samples` to `path`, creating parent directories as needed.
pub fn write_csv_file(path: &Path, samples: &[f64], precision: usize) -> Result<PathBuf> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    write_csv(BufWriter::new(file), samples, precision)?;
    Ok(path.to_path_buf())
}
