use std::{
    fs::{self, File},
    io::{BufWriter, ErrorKind, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context;

use crate::util;

/// Key under which [`PlayerStats`](donkdle_engine::PlayerStats) are kept.
pub const STATS_KEY: &str = "donkdle_stats";

/// Flat key-value store of JSON documents, one file per key.
///
/// There is no locking or transaction: each `put` overwrites the whole value,
/// and the last writer wins.
#[derive(Debug, Clone)]
pub struct Store {
    dir: PathBuf,
}

impl Store {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// Reads the value stored under `key`, or `None` if nothing is stored.
    pub fn get<T>(&self, key: &str) -> anyhow::Result<Option<T>>
    where
        T: serde::de::DeserializeOwned,
    {
        let path = self.path(key);
        if !path.try_exists().with_context(|| {
            format!("Failed to check for stored file: {}", path.display())
        })? {
            return Ok(None);
        }
        util::read_json_file(key, &path).map(Some)
    }

    pub fn put<T>(&self, key: &str, value: &T) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create directory {}", self.dir.display()))?;

        let path = self.path(key);
        let file = File::create(&path)
            .with_context(|| format!("Failed to create file: {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, value)
            .with_context(|| format!("Failed to write JSON to {}", path.display()))?;
        writer
            .flush()
            .with_context(|| format!("Failed to flush output to {}", path.display()))?;
        Ok(())
    }

    /// Deletes the value stored under `key`. Missing keys are not an error.
    pub fn remove(&self, key: &str) -> anyhow::Result<()> {
        let path = self.path(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => {
                Err(e).with_context(|| format!("Failed to remove file: {}", path.display()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    #[test]
    fn test_missing_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path());
        let value: Option<BTreeMap<String, u32>> = store.get("nothing").unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_put_get_overwrite_remove() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path().join("nested"));

        store.put("counts", &BTreeMap::from([("a", 1)])).unwrap();
        store.put("counts", &BTreeMap::from([("b", 2)])).unwrap();
        let value: BTreeMap<String, u32> = store.get("counts").unwrap().unwrap();
        assert_eq!(value, BTreeMap::from([("b".to_owned(), 2)]));

        store.remove("counts").unwrap();
        store.remove("counts").unwrap();
        assert!(store.get::<BTreeMap<String, u32>>("counts").unwrap().is_none());
    }

    #[test]
    fn test_corrupt_value_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path());
        fs::write(store.path("broken"), "{ not json").unwrap();
        assert!(store.get::<BTreeMap<String, u32>>("broken").is_err());
    }
}
