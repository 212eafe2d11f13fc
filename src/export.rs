use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;

/// Write one value per row to `path`, no header, overwriting any existing file.
pub fn write_values(path: impl AsRef<Path>, values: &[f64]) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    for value in values {
        writeln!(writer, "{value}")?;
    }

    writer.flush()?;
    Ok(())
}
