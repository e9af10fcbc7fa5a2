// ============================================================
// Layer 6 — Storage Helpers
// ============================================================
// Load/save for every artifact the stages exchange:
//
//   feature lists   → JSON (list of name → value maps)
//   vector arrays   → bitcode binary
//   metrics, model  → JSON
//   tables          → CSV (on the Table type itself)
//
// Output directories are created on demand before writing, so a
// fresh checkout can run the whole pipeline without mkdir.

use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::data::vectors::VectorTable;

/// Create the parent directory of an output file if missing.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("cannot create directory '{}'", parent.display()))?;
        }
    }
    Ok(())
}

/// Serialize any value as JSON.
pub fn save_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    ensure_parent_dir(path)?;
    let file = fs::File::create(path)
        .with_context(|| format!("cannot create '{}'", path.display()))?;
    serde_json::to_writer(BufWriter::new(file), value)
        .with_context(|| format!("cannot write JSON to '{}'", path.display()))?;
    Ok(())
}

/// Deserialize a JSON file.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = fs::File::open(path)
        .with_context(|| format!("cannot open '{}'", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("cannot parse JSON from '{}'", path.display()))
}

/// Write a vector table as bitcode binary.
pub fn save_vectors(path: &Path, vectors: &VectorTable) -> Result<()> {
    ensure_parent_dir(path)?;
    fs::write(path, bitcode::encode(vectors))
        .with_context(|| format!("cannot write vectors to '{}'", path.display()))?;
    Ok(())
}

/// Read a bitcode-encoded vector table.
pub fn load_vectors(path: &Path) -> Result<VectorTable> {
    let bytes = fs::read(path)
        .with_context(|| format!("cannot read vectors from '{}'", path.display()))?;
    bitcode::decode(&bytes)
        .with_context(|| format!("cannot decode vector file '{}'", path.display()))
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_json_round_trip_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/out/features.json");

        let rows: Vec<HashMap<String, f64>> =
            vec![HashMap::from([("count_of_tokens".to_string(), 3.0)])];
        save_json(&path, &rows).unwrap();

        let back: Vec<HashMap<String, f64>> = load_json(&path).unwrap();
        assert_eq!(back, rows);
    }

    #[test]
    fn test_vector_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vectors.bin");

        let v = VectorTable::from_rows(vec![vec![1.0_f32, -0.5], vec![0.0, 2.5]]).unwrap();
        save_vectors(&path, &v).unwrap();
        assert_eq!(load_vectors(&path).unwrap(), v);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = load_vectors(Path::new("/no/such/vectors.bin")).unwrap_err();
        assert!(err.to_string().contains("cannot read"));
    }
}
