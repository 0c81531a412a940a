use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::{RelfetchError, Result};

/// Remote release descriptor. Only `version` is interpreted; the rest of the
/// document travels into the manifest as raw text.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct VersionDescriptor {
    pub version: String,
}

/// Merges a fetched descriptor into the package manifest at `path`.
///
/// Sets `versionInfo` to the descriptor text exactly as fetched and `version`
/// to the descriptor's version string, then rewrites the file as
/// 2-space-indented JSON with the remaining fields and their order intact.
/// Returns the applied version. A descriptor without a `version` string fails
/// before the manifest is touched.
pub async fn stamp_manifest(path: &Path, descriptor: &str) -> Result<String> {
    let parsed: VersionDescriptor = serde_json::from_str(descriptor)
        .map_err(|err| RelfetchError::Decode(format!("invalid version descriptor: {err}")))?;

    let raw = tokio::fs::read_to_string(path).await?;
    let mut manifest: Value = serde_json::from_str(&raw)
        .map_err(|err| RelfetchError::Decode(format!("invalid manifest JSON: {err}")))?;
    let fields = manifest
        .as_object_mut()
        .ok_or_else(|| RelfetchError::Decode("manifest root is not a JSON object".to_owned()))?;

    fields.insert("versionInfo".to_owned(), Value::String(descriptor.to_owned()));
    fields.insert("version".to_owned(), Value::String(parsed.version.clone()));

    let pretty = serde_json::to_string_pretty(&manifest)
        .map_err(|err| RelfetchError::Decode(format!("manifest serialization failed: {err}")))?;
    tokio::fs::write(path, pretty).await?;

    tracing::debug!(path = %path.display(), version = %parsed.version, "manifest stamped");
    Ok(parsed.version)
}

#[cfg(test)]
mod tests {
    use super::stamp_manifest;
    use crate::RelfetchError;
    use serde_json::Value;

    fn seed_manifest(contents: &str) -> tempfile::NamedTempFile {
        let file = tempfile::NamedTempFile::new().expect("temp file must be created");
        std::fs::write(file.path(), contents).expect("seed manifest must be written");
        file
    }

    #[tokio::test]
    async fn stamps_version_and_raw_descriptor() {
        let file = seed_manifest(r#"{"name":"demo","version":"1.0.0","private":true}"#);
        let descriptor = r#"{"version":"2.4.1","desc":"release notes"}"#;

        let version = stamp_manifest(file.path(), descriptor)
            .await
            .expect("stamp must succeed");
        assert_eq!(version, "2.4.1");

        let rewritten = std::fs::read_to_string(file.path()).expect("manifest must read back");
        let value: Value = serde_json::from_str(&rewritten).expect("manifest must stay JSON");
        assert_eq!(value["version"], "2.4.1");
        assert_eq!(value["versionInfo"], descriptor);
        assert_eq!(value["name"], "demo");
        assert_eq!(value["private"], true);
    }

    #[tokio::test]
    async fn rewrites_with_two_space_indent_and_field_order() {
        let file = seed_manifest(r#"{"name":"demo","version":"1.0.0"}"#);

        stamp_manifest(file.path(), r#"{"version":"1.1.0"}"#)
            .await
            .expect("stamp must succeed");

        let rewritten = std::fs::read_to_string(file.path()).expect("manifest must read back");
        assert!(rewritten.starts_with("{\n  \"name\""));
        let name_at = rewritten.find("\"name\"").expect("name field present");
        let version_at = rewritten.find("\"version\"").expect("version field present");
        assert!(name_at < version_at);
    }

    #[tokio::test]
    async fn descriptor_without_version_leaves_manifest_untouched() {
        let seed = r#"{"name":"demo","version":"1.0.0"}"#;
        let file = seed_manifest(seed);

        let err = stamp_manifest(file.path(), r#"{"tag":"nightly"}"#)
            .await
            .expect_err("stamp must fail");
        assert!(matches!(err, RelfetchError::Decode(_)));

        let contents = std::fs::read_to_string(file.path()).expect("manifest must read back");
        assert_eq!(contents, seed);
    }

    #[tokio::test]
    async fn non_object_manifest_is_a_decode_error() {
        let file = seed_manifest("[1, 2, 3]");

        let err = stamp_manifest(file.path(), r#"{"version":"1.1.0"}"#)
            .await
            .expect_err("stamp must fail");
        assert!(matches!(err, RelfetchError::Decode(_)));
    }

    #[tokio::test]
    async fn missing_manifest_is_an_io_error() {
        let dir = tempfile::tempdir().expect("temp dir must be created");
        let path = dir.path().join("package.json");

        let err = stamp_manifest(&path, r#"{"version":"1.1.0"}"#)
            .await
            .expect_err("stamp must fail");
        assert!(matches!(err, RelfetchError::Io(_)));
    }
}
