use crate::error::Result;
use std::path::Path;

/// Write one header row followed by one row per number, in the order given.
pub fn write_phone_csv<P: AsRef<Path>>(path: P, header: &str, numbers: &[String]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path.as_ref())?;

    writer.write_record([header])?;
    for number in numbers {
        writer.write_record([number])?;
    }

    writer.flush()?;
    Ok(())
}
