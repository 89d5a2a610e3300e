use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::WriterBuilder;
use tracing::info;

use enroll_model::OutputRecord;

use crate::error::Result;

/// Write records in upload layout: leading UTF-8 BOM for spreadsheet
/// compatibility, then the 29 headers and one line per record, in order.
pub fn write_output_csv(path: &Path, records: &[OutputRecord], delimiter: u8) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all("\u{feff}".as_bytes())?;
    let mut writer = WriterBuilder::new().delimiter(delimiter).from_writer(file);
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    info!(path = %path.display(), rows = records.len(), "wrote output csv");
    Ok(())
}
