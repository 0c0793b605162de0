use std::{
    fs::File,
    io::{self, BufReader, Write as _},
    path::Path,
};

use anyhow::Context;
use donkdle_engine::{Catalog, LocationRecord};

pub fn read_json_file<T, P>(file_kind: &str, path: P) -> anyhow::Result<T>
where
    T: serde::de::DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open {} file: {}", file_kind, path.display()))?;

    let reader = BufReader::new(file);
    let value = serde_json::from_reader(reader).with_context(|| {
        format!(
            "Failed to parse {} JSON file: {}",
            file_kind,
            path.display()
        )
    })?;

    Ok(value)
}

/// Read and validate the location catalog from a JSON file
///
/// The file holds an array of location records. Records that cannot be
/// played (no name, unknown hint region) are dropped; any other invalid
/// record is an error.
pub fn read_catalog_file<P>(path: P) -> anyhow::Result<Catalog>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let records: Vec<LocationRecord> = read_json_file("locations", path)?;
    let catalog = Catalog::from_records(records)
        .with_context(|| format!("Invalid locations file: {}", path.display()))?;
    eprintln!(
        "Loaded {} locations from {} ({} skipped)",
        catalog.len(),
        path.display(),
        catalog.skipped()
    );
    Ok(catalog)
}

pub fn print_json<T>(value: &T) -> anyhow::Result<()>
where
    T: serde::Serialize,
{
    let mut writer = io::stdout().lock();
    serde_json::to_writer_pretty(&mut writer, value).context("Failed to write JSON to stdout")?;
    writeln!(writer).context("Failed to write newline after JSON to stdout")?;
    Ok(())
}
