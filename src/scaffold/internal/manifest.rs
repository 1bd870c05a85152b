//! package.json script merge
//!
//! The generator owns the manifest; we only insert or replace a handful of
//! `scripts` entries. Key order of everything else is preserved
//! (serde_json `preserve_order`), so re-running is a no-op on the file.

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

use crate::error::ScaffoldError;
use crate::log;

/// Merge `entries` into `manifest["scripts"]`, creating the object if absent.
///
/// Existing keys named in `entries` are overwritten in place; other scripts
/// and fields are untouched.
pub fn merge_scripts_into(manifest: &mut Value, entries: &[(&str, &str)]) -> Result<(), String> {
    let root = manifest
        .as_object_mut()
        .ok_or_else(|| "top-level value is not an object".to_string())?;
    let scripts = root
        .entry("scripts")
        .or_insert_with(|| Value::Object(Map::new()))
        .as_object_mut()
        .ok_or_else(|| "\"scripts\" is not an object".to_string())?;

    for (name, command) in entries {
        scripts.insert((*name).to_string(), Value::String((*command).to_string()));
    }
    Ok(())
}

/// Read, merge, and write back the manifest at `path`
pub fn merge_scripts(path: &Path, entries: &[(&str, &str)]) -> Result<()> {
    let read_error = |reason: String| ScaffoldError::ManifestReadError {
        path: path.to_path_buf(),
        reason,
    };

    let raw = fs::read_to_string(path).map_err(|e| read_error(e.to_string()))?;
    let mut manifest: Value = serde_json::from_str(&raw).map_err(|e| read_error(e.to_string()))?;
    merge_scripts_into(&mut manifest, entries).map_err(read_error)?;

    let mut out = serde_json::to_string_pretty(&manifest).context("Failed to serialize manifest")?;
    out.push('\n');
    fs::write(path, out).with_context(|| format!("Failed to write {}", path.display()))?;

    log::debug(
        "scaffold",
        format_args!("merged {} scripts into {}", entries.len(), path.display()),
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    const ENTRIES: &[(&str, &str)] = &[
        ("format", "prettier --write ."),
        ("dev", "npm start"),
    ];

    #[test]
    fn test_existing_scripts_are_kept_and_named_ones_replaced() {
        let mut manifest = json!({
            "name": "demo",
            "scripts": { "start": "react-scripts start", "dev": "old" }
        });
        merge_scripts_into(&mut manifest, ENTRIES).unwrap();

        assert_eq!(manifest["scripts"]["start"], "react-scripts start");
        assert_eq!(manifest["scripts"]["dev"], "npm start");
        assert_eq!(manifest["scripts"]["format"], "prettier --write .");
        assert_eq!(manifest["name"], "demo");
    }

    #[test]
    fn test_missing_scripts_object_is_created() {
        let mut manifest = json!({ "name": "demo" });
        merge_scripts_into(&mut manifest, ENTRIES).unwrap();
        assert_eq!(manifest["scripts"].as_object().unwrap().len(), 2);
    }

    #[test]
    fn test_non_object_shapes_are_rejected() {
        assert!(merge_scripts_into(&mut json!([1, 2]), ENTRIES).is_err());
        assert!(merge_scripts_into(&mut json!({ "scripts": "nope" }), ENTRIES).is_err());
    }

    #[test]
    fn test_file_merge_preserves_key_order_and_is_stable() -> Result<()> {
        let temp = TempDir::new()?;
        let path = temp.path().join("package.json");
        fs::write(
            &path,
            r#"{"name":"demo","version":"0.1.0","scripts":{"start":"vite","dev":"vite"},"dependencies":{}}"#,
        )?;

        merge_scripts(&path, ENTRIES)?;
        let first = fs::read_to_string(&path)?;
        merge_scripts(&path, ENTRIES)?;
        let second = fs::read_to_string(&path)?;

        assert_eq!(first, second);
        assert!(first.ends_with("}\n"));
        let name = first.find("\"name\"").unwrap();
        let version = first.find("\"version\"").unwrap();
        let deps = first.find("\"dependencies\"").unwrap();
        assert!(name < version && version < deps);
        // replaced in place, new key appended after it
        assert!(first.find("\"dev\"").unwrap() < first.find("\"format\"").unwrap());
        assert!(first.contains("\n  \"name\": \"demo\""));
        Ok(())
    }

    #[test]
    fn test_missing_manifest_is_read_error() -> Result<()> {
        let temp = TempDir::new()?;
        let err = merge_scripts(&temp.path().join("package.json"), ENTRIES).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ScaffoldError>(),
            Some(ScaffoldError::ManifestReadError { .. })
        ));
        Ok(())
    }

    #[test]
    fn test_malformed_manifest_is_read_error() -> Result<()> {
        let temp = TempDir::new()?;
        let path = temp.path().join("package.json");
        fs::write(&path, "{ not json")?;

        let err = merge_scripts(&path, ENTRIES).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ScaffoldError>(),
            Some(ScaffoldError::ManifestReadError { .. })
        ));
        assert_eq!(fs::read_to_string(&path)?, "{ not json");
        Ok(())
    }
}
