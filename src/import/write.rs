// src/import/write.rs
use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::{
    fs,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// Serialize `records` as a JSON array at `path`: four-space indent,
/// non-ASCII written as-is.
///
/// Goes through a sibling temp file and a rename, so `path` is either left as
/// it was or fully replaced. The parent directory must already exist.
pub fn write_json_array<T: Serialize>(path: &Path, records: &[T]) -> Result<()> {
    let tmp_path = tmp_sibling(path);

    let file = fs::File::create(&tmp_path)
        .with_context(|| format!("creating {}", tmp_path.display()))?;

    let written = write_pretty(file, records)
        .with_context(|| format!("writing JSON for {}", path.display()))
        .and_then(|()| {
            fs::rename(&tmp_path, path).with_context(|| {
                format!("renaming {} -> {}", tmp_path.display(), path.display())
            })
        });
    if written.is_err() {
        let _ = fs::remove_file(&tmp_path);
    }

    written
}

fn write_pretty<T: Serialize>(file: fs::File, records: &[T]) -> Result<()> {
    let mut out = BufWriter::new(file);
    let mut ser = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"    "));
    records.serialize(&mut ser).context("serializing")?;
    out.flush().context("flushing")?;
    Ok(())
}

fn tmp_sibling(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    path.with_file_name(format!(".{}.tmp", name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;
    use tempfile::tempdir;

    #[derive(Serialize)]
    struct Item {
        name: String,
        note: String,
    }

    #[test]
    fn writes_indented_array_with_literal_unicode() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("items.json");
        let items = vec![Item {
            name: "算数".into(),
            note: "x".into(),
        }];

        write_json_array(&path, &items)?;

        let text = fs::read_to_string(&path)?;
        assert_eq!(
            text,
            "[\n    {\n        \"name\": \"算数\",\n        \"note\": \"x\"\n    }\n]"
        );
        assert!(!dir.path().join(".items.json.tmp").exists());
        Ok(())
    }

    #[test]
    fn empty_slice_writes_empty_array() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("empty.json");
        write_json_array::<Item>(&path, &[])?;
        assert_eq!(fs::read_to_string(&path)?, "[]");
        Ok(())
    }

    #[test]
    fn overwrites_existing_file() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("items.json");
        fs::write(&path, "stale contents that are much longer than the new ones")?;

        write_json_array::<Item>(&path, &[])?;
        assert_eq!(fs::read_to_string(&path)?, "[]");
        Ok(())
    }

    #[test]
    fn failed_rename_leaves_no_temp_file() -> Result<()> {
        let dir = tempdir()?;
        // a non-empty directory at the destination makes the rename fail
        let path = dir.path().join("items.json");
        fs::create_dir(&path)?;
        fs::write(path.join("keep"), "x")?;

        let err = write_json_array::<Item>(&path, &[]).unwrap_err();
        assert!(format!("{:#}", err).contains("renaming"));
        assert!(!dir.path().join(".items.json.tmp").exists());
        assert!(path.join("keep").exists());
        Ok(())
    }

    #[test]
    fn missing_parent_directory_is_an_error() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("data").join("items.json");
        let err = write_json_array::<Item>(&path, &[]).unwrap_err();
        assert!(format!("{:#}", err).contains("creating"));
        assert!(!path.exists());
        Ok(())
    }
}
