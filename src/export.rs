//! Non-interactive JSON export of a practical page.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::content::{
    resolve_outputs, resolve_str, OutputBundle, PracticalId, CODE_LANGUAGE, CODE_TITLE,
};

/// Everything the practical page shows, in export form.
#[derive(Debug, Serialize)]
pub struct PracticalExport {
    pub id: PracticalId,
    pub title: &'static str,
    pub description: &'static str,
    pub paragraphs: Vec<&'static str>,
    pub code_title: &'static str,
    pub language: &'static str,
    pub code: &'static str,
    /// `None` when the practical has no recorded output.
    pub outputs: Option<&'static OutputBundle>,
}

impl PracticalExport {
    /// Resolve a raw route parameter into its export.
    pub fn resolve(requested: &str) -> Result<Self> {
        let practical = resolve_str(requested)?;
        Ok(Self {
            id: practical.id,
            title: practical.title,
            description: practical.description,
            paragraphs: practical.paragraphs(),
            code_title: CODE_TITLE,
            language: CODE_LANGUAGE,
            code: practical.code,
            outputs: resolve_outputs(practical.id).bundle(),
        })
    }
}

/// Write the export for `requested` to `path` as pretty JSON.
pub fn export_to_file(requested: &str, path: &Path) -> Result<()> {
    let export = PracticalExport::resolve(requested)?;
    let json = serde_json::to_string_pretty(&export)?;

    let mut file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    file.write_all(json.as_bytes())?;

    tracing::info!(practical = %export.id, path = %path.display(), "exported practical");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ResolveError;

    #[test]
    fn test_export_practical_with_outputs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("practical.json");

        export_to_file("9", &path).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["id"], 9);
        assert_eq!(value["language"], "matlab");
        assert_eq!(value["outputs"]["images"].as_array().unwrap().len(), 3);
        assert_eq!(value["outputs"]["images"][2]["caption"], "Erosion (Rectangular)");
        assert!(!value["paragraphs"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_export_without_outputs() {
        let export = PracticalExport::resolve("8").unwrap();
        assert!(export.outputs.is_none());
        let value = serde_json::to_value(&export).unwrap();
        assert!(value["outputs"].is_null());
    }

    #[test]
    fn test_export_unknown_practical() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");

        let err = export_to_file("11", &path).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ResolveError>(),
            Some(ResolveError::NotFound { requested }) if requested == "11"
        ));
        assert!(!path.exists());
    }
}
