//! Extension readiness check
//!
//! Verifies an unpacked extension directory can be loaded: the required
//! files exist, `manifest.json` parses, and every toolbar icon decodes at
//! the size its file name claims.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::icon;

/// Files every Promptree build must ship
pub const REQUIRED_FILES: [&str; 5] = [
    "manifest.json",
    "content.js",
    "popup.html",
    "popup.js",
    "background.js",
];

/// Default icon directory, relative to the extension root
pub const DEFAULT_ICONS_DIR: &str = "images";

/// Outcome of a single check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum CheckStatus {
    Ok,
    Missing,
    Invalid(String),
}

impl CheckStatus {
    pub fn is_ok(&self) -> bool {
        matches!(self, CheckStatus::Ok)
    }

    /// Short label for text output
    pub fn label(&self) -> &'static str {
        match self {
            CheckStatus::Ok => "ok",
            CheckStatus::Missing => "missing",
            CheckStatus::Invalid(_) => "invalid",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FileCheck {
    pub path: PathBuf,
    pub status: CheckStatus,
}

/// Fields read from `manifest.json` for the report; everything else is ignored
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl Manifest {
    /// Pick the report fields out of any parsed JSON document
    fn from_json(value: &serde_json::Value) -> Self {
        let field = |key: &str| value.get(key).and_then(|v| v.as_str()).map(str::to_string);
        Self {
            name: field("name"),
            version: field("version"),
        }
    }

    /// `Name v1.0`, or whichever part is present
    pub fn summary(&self) -> Option<String> {
        match (&self.name, &self.version) {
            (Some(name), Some(version)) => Some(format!("{} v{}", name, version)),
            (Some(name), None) => Some(name.clone()),
            (None, Some(version)) => Some(format!("v{}", version)),
            (None, None) => None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ManifestCheck {
    pub status: CheckStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manifest: Option<Manifest>,
}

#[derive(Debug, Clone, Serialize)]
pub struct IconCheck {
    pub size: u32,
    pub path: PathBuf,
    pub status: CheckStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bytes: Option<u64>,
}

/// Result of checking an extension directory
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub root: PathBuf,
    pub files: Vec<FileCheck>,
    pub manifest: ManifestCheck,
    pub icons: Vec<IconCheck>,
}

impl CheckReport {
    /// Whether the extension can be loaded as-is
    pub fn is_ready(&self) -> bool {
        self.files.iter().all(|f| f.status.is_ok())
            && self.manifest.status.is_ok()
            && self.icons.iter().all(|i| i.status.is_ok())
    }

    pub fn problem_count(&self) -> usize {
        self.files.iter().filter(|f| !f.status.is_ok()).count()
            + usize::from(!self.manifest.status.is_ok())
            + self.icons.iter().filter(|i| !i.status.is_ok()).count()
    }
}

/// Check the extension at `root`, looking for icons under `root/icons_dir`
pub fn check_extension(root: &Path, icons_dir: &Path, sizes: &[u32]) -> CheckReport {
    let files = REQUIRED_FILES
        .iter()
        .map(|name| {
            let path = root.join(name);
            let status = if path.is_file() {
                CheckStatus::Ok
            } else {
                CheckStatus::Missing
            };
            FileCheck {
                path: PathBuf::from(name),
                status,
            }
        })
        .collect();

    let manifest = check_manifest(&root.join("manifest.json"));

    let icons = icon::dedup_sizes(sizes)
        .into_iter()
        .map(|size| check_icon(root, icons_dir, size))
        .collect();

    let report = CheckReport {
        root: root.to_path_buf(),
        files,
        manifest,
        icons,
    };
    tracing::debug!(
        "Checked {}: {} problem(s)",
        root.display(),
        report.problem_count()
    );
    report
}

fn check_manifest(path: &Path) -> ManifestCheck {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return ManifestCheck {
                status: CheckStatus::Missing,
                manifest: None,
            };
        }
        Err(e) => {
            return ManifestCheck {
                status: CheckStatus::Invalid(e.to_string()),
                manifest: None,
            };
        }
    };

    match serde_json::from_str::<serde_json::Value>(&content) {
        Ok(value) => ManifestCheck {
            status: CheckStatus::Ok,
            manifest: Some(Manifest::from_json(&value)),
        },
        Err(e) => {
            tracing::debug!("manifest.json rejected: {}", e);
            ManifestCheck {
                status: CheckStatus::Invalid(e.to_string()),
                manifest: None,
            }
        }
    }
}

fn check_icon(root: &Path, icons_dir: &Path, size: u32) -> IconCheck {
    let path = icons_dir.join(icon::icon_file_name(size));
    let full_path = root.join(&path);

    let Ok(metadata) = std::fs::metadata(&full_path) else {
        return IconCheck {
            size,
            path,
            status: CheckStatus::Missing,
            bytes: None,
        };
    };

    let status = match icon::inspect_icon(&full_path) {
        Ok(info) if info.width != size || info.height != size => CheckStatus::Invalid(format!(
            "expected {}x{}, found {}x{}",
            size, size, info.width, info.height
        )),
        Ok(info) if !info.has_alpha => CheckStatus::Invalid("no alpha channel".to_string()),
        Ok(_) => CheckStatus::Ok,
        // Keep the decoder's reason, not just the top-level message
        Err(e) => CheckStatus::Invalid(format!("{:#}", anyhow::Error::new(e))),
    };

    IconCheck {
        size,
        path,
        status,
        bytes: Some(metadata.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::{Palette, DEFAULT_SIZES};
    use tempfile::TempDir;

    const MANIFEST: &str = r#"{
        "manifest_version": 3,
        "name": "Promptree",
        "version": "1.0.0",
        "action": { "default_popup": "popup.html" }
    }"#;

    fn complete_extension() -> TempDir {
        let dir = TempDir::new().unwrap();
        for name in REQUIRED_FILES {
            std::fs::write(dir.path().join(name), "// stub").unwrap();
        }
        std::fs::write(dir.path().join("manifest.json"), MANIFEST).unwrap();
        icon::generate_all(
            &DEFAULT_SIZES,
            &Palette::default(),
            &dir.path().join(DEFAULT_ICONS_DIR),
        )
        .unwrap();
        dir
    }

    fn check(dir: &TempDir) -> CheckReport {
        check_extension(dir.path(), Path::new(DEFAULT_ICONS_DIR), &DEFAULT_SIZES)
    }

    #[test]
    fn test_complete_extension_is_ready() {
        let dir = complete_extension();
        let report = check(&dir);

        assert!(report.is_ready(), "{:#?}", report);
        assert_eq!(report.problem_count(), 0);
        assert_eq!(
            report.manifest.manifest,
            Some(Manifest {
                name: Some("Promptree".to_string()),
                version: Some("1.0.0".to_string()),
            })
        );
        assert_eq!(report.icons.len(), 3);
        assert!(report.icons.iter().all(|i| i.bytes.unwrap_or(0) > 0));
    }

    #[test]
    fn test_missing_files() {
        let dir = complete_extension();
        std::fs::remove_file(dir.path().join("popup.js")).unwrap();
        std::fs::remove_file(dir.path().join("images").join("icon48.png")).unwrap();

        let report = check(&dir);
        assert!(!report.is_ready());
        assert_eq!(report.problem_count(), 2);

        let popup = report
            .files
            .iter()
            .find(|f| f.path == Path::new("popup.js"))
            .unwrap();
        assert_eq!(popup.status, CheckStatus::Missing);

        let icon48 = report.icons.iter().find(|i| i.size == 48).unwrap();
        assert_eq!(icon48.status, CheckStatus::Missing);
        assert_eq!(icon48.bytes, None);
    }

    #[test]
    fn test_broken_manifest() {
        let dir = complete_extension();
        std::fs::write(dir.path().join("manifest.json"), "{ \"name\": ").unwrap();

        let report = check(&dir);
        assert!(!report.is_ready());
        assert!(matches!(report.manifest.status, CheckStatus::Invalid(_)));
        assert_eq!(report.manifest.status.label(), "invalid");
    }

    #[test]
    fn test_manifest_without_version() {
        let dir = complete_extension();
        std::fs::write(
            dir.path().join("manifest.json"),
            r#"{"manifest_version": 3, "name": "Promptree"}"#,
        )
        .unwrap();

        let report = check(&dir);
        assert!(report.manifest.status.is_ok());
        assert!(report.is_ready());

        let manifest = report.manifest.manifest.unwrap();
        assert_eq!(manifest.name.as_deref(), Some("Promptree"));
        assert_eq!(manifest.version, None);
        assert_eq!(manifest.summary().as_deref(), Some("Promptree"));
    }

    #[test]
    fn test_manifest_any_json_is_accepted() {
        let dir = complete_extension();
        std::fs::write(dir.path().join("manifest.json"), "[1, 2, 3]").unwrap();

        let report = check(&dir);
        assert!(report.manifest.status.is_ok());
        assert_eq!(report.manifest.manifest, Some(Manifest::default()));
        assert_eq!(Manifest::default().summary(), None);
    }

    #[test]
    fn test_icon_with_wrong_dimensions() {
        let dir = complete_extension();
        let images = dir.path().join("images");
        // A 16px image saved under the 48px name
        std::fs::copy(images.join("icon16.png"), images.join("icon48.png")).unwrap();

        let report = check(&dir);
        let icon48 = report.icons.iter().find(|i| i.size == 48).unwrap();
        assert_eq!(
            icon48.status,
            CheckStatus::Invalid("expected 48x48, found 16x16".to_string())
        );
    }

    #[test]
    fn test_icon_without_alpha() {
        let dir = complete_extension();
        let opaque = image::RgbImage::new(16, 16);
        opaque
            .save(dir.path().join("images").join("icon16.png"))
            .unwrap();

        let report = check(&dir);
        let icon16 = report.icons.iter().find(|i| i.size == 16).unwrap();
        assert_eq!(icon16.status, CheckStatus::Invalid("no alpha channel".to_string()));
    }

    #[test]
    fn test_icon_not_a_png() {
        let dir = complete_extension();
        std::fs::write(dir.path().join("images").join("icon16.png"), b"not a png").unwrap();

        let report = check(&dir);
        let icon16 = report.icons.iter().find(|i| i.size == 16).unwrap();
        match &icon16.status {
            CheckStatus::Invalid(reason) => {
                // Message plus the decoder's cause
                assert!(reason.starts_with("Image error for "), "{}", reason);
                assert!(reason.contains("icon16.png: "), "{}", reason);
            }
            other => panic!("expected Invalid, got {:?}", other),
        }
        assert_eq!(icon16.bytes, Some(9));
    }

    #[test]
    fn test_empty_directory() {
        let dir = TempDir::new().unwrap();
        let report = check(&dir);
        assert!(report.files.iter().all(|f| f.status == CheckStatus::Missing));
        assert_eq!(report.manifest.status, CheckStatus::Missing);
        assert_eq!(report.problem_count(), REQUIRED_FILES.len() + 1 + 3);
    }

    #[test]
    fn test_report_serializes() {
        let dir = TempDir::new().unwrap();
        let json = serde_json::to_value(check(&dir)).unwrap();
        assert_eq!(json["manifest"]["status"]["status"], "missing");
        assert!(json["manifest"].get("manifest").is_none());
    }
}
