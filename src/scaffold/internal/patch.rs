//! Configuration patching

use anyhow::Result;
use std::path::Path;

use crate::flavor::ConfigPatch;
use crate::paths::project::manifest_path;

use super::manifest::merge_scripts;
use super::materialize::write_static;

/// Apply each patch once, in order
pub fn apply_patches(root: &Path, patches: &[ConfigPatch], project_name: &str) -> Result<()> {
    for patch in patches {
        match patch {
            ConfigPatch::Overwrite(file) => write_static(root, file, project_name)?,
            ConfigPatch::MergeScripts(entries) => merge_scripts(&manifest_path(root), entries)?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScaffoldError;
    use crate::flavor::{profile, Flavor};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_classic_patches_overwrite_and_merge() -> Result<()> {
        let temp = TempDir::new()?;
        fs::create_dir_all(temp.path().join("src"))?;
        fs::write(temp.path().join("src/index.css"), "body { margin: 0; }")?;
        fs::write(
            temp.path().join("package.json"),
            r#"{"name":"my-app","scripts":{"start":"react-scripts start","test":"react-scripts test"}}"#,
        )?;

        let p = profile(Flavor::Classic);
        apply_patches(temp.path(), &p.patches, "my-app")?;

        let css = fs::read_to_string(temp.path().join("src/index.css"))?;
        assert!(css.starts_with("@tailwind base;"));
        assert!(temp.path().join("tailwind.config.js").is_file());

        let manifest: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(temp.path().join("package.json"))?)?;
        let scripts = manifest["scripts"].as_object().unwrap();
        assert_eq!(scripts.len(), 6);
        assert_eq!(scripts["test"], "react-scripts test");
        assert_eq!(scripts["dev"], "npm start");
        Ok(())
    }

    #[test]
    fn test_missing_manifest_aborts_after_overwrites() -> Result<()> {
        let temp = TempDir::new()?;
        let p = profile(Flavor::Vite);

        let err = apply_patches(temp.path(), &p.patches, "app").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ScaffoldError>(),
            Some(ScaffoldError::ManifestReadError { .. })
        ));
        assert!(temp.path().join("vite.config.js").is_file());
        Ok(())
    }
}
