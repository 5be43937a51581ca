//! Read and write serde values as JSON files.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Load `path`, writing `T::default()` there first if it does not exist.
pub fn load_or_create<T>(path: &Path) -> std::io::Result<T>
where
    T: Serialize + DeserializeOwned + Default,
{
    if !path.exists() {
        let value = T::default();
        save(path, &value)?;
        tracing::debug!(path = ?path, "Created JSON store");
        return Ok(value);
    }
    let reader = BufReader::new(File::open(path)?);
    let value = serde_json::from_reader(reader)?;
    Ok(value)
}

/// Replace the contents of `path` with `value`.
pub fn save<T: Serialize>(path: &Path, value: &T) -> std::io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_load_creates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        let value: BTreeMap<String, u32> = load_or_create(&path).unwrap();
        assert!(value.is_empty());
        assert!(path.exists());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        let mut value = BTreeMap::new();
        value.insert("a".to_string(), 1u32);
        save(&path, &value).unwrap();

        let loaded: BTreeMap<String, u32> = load_or_create(&path).unwrap();
        assert_eq!(loaded.get("a"), Some(&1));
    }

    #[test]
    fn test_load_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(&path, "not json").unwrap();

        let result: std::io::Result<BTreeMap<String, u32>> = load_or_create(&path);
        assert!(result.is_err());
    }
}
