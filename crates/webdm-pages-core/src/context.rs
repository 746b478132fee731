//! The data context consumed by the snap details template.
//!
//! A context is constructed by the page-assembly layer from snap metadata it
//! has already fetched and validated, or loaded from a JSON document with
//! [`SnapDetails::load`]. It is consumed by a single render call and carries
//! no state between calls.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result, WebdmPagesError};

/// Data context for the snap details page fragment.
///
/// Every field defaults when absent from a JSON document, so partial
/// metadata is representable and is not an error: the template renders an
/// empty description paragraph, omits the screenshots section, or renders an
/// empty frameworks list instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapDetails {
    /// Free text shown (escaped) in the description section. Held as a JSON
    /// scalar rather than a `String` so the zero-is-meaningful fallback in
    /// [`crate::value::resolve`] applies: `0` renders as `0`, while `""`,
    /// `null`, and `false` render as empty content.
    #[serde(default)]
    pub description: Value,

    /// Screenshot image URLs in display order.
    #[serde(default)]
    pub screenshot_urls: Vec<String>,

    /// Click framework identifiers keyed by name. Rendered in key order;
    /// values starting with the hidden prefix are filtered out of the
    /// sidebar (see [`crate::templates::snap`]).
    #[serde(default)]
    pub click_framework: BTreeMap<String, String>,
}

impl SnapDetails {
    /// Load a context document from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| WebdmPagesError::ContextNotFound {
                path: path.to_path_buf(),
                source: e,
            })?;
        let context: Self =
            serde_json::from_str(&contents).map_err(|e| WebdmPagesError::ContextParse {
                path: path.to_path_buf(),
                source: e,
            })?;
        tracing::debug!("loaded context from {}", path.display());
        Ok(context)
    }

    /// Write the context to a JSON file, pretty-printed.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(|e| WebdmPagesError::ContextParse {
            path: path.to_path_buf(),
            source: e,
        })?;
        std::fs::write(path, json)?;
        tracing::debug!("wrote context to {}", path.display());
        Ok(())
    }

    /// Check the renderer preconditions the type system cannot enforce.
    ///
    /// The one dynamic field is `description`: it must be a JSON scalar.
    /// An array or object there is a malformed context, rejected before a
    /// render produces any output.
    pub fn validate(&self) -> Result<()> {
        match self.description {
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => Ok(()),
            Value::Array(_) => Err(WebdmPagesError::InvalidContext {
                reason: "description must be a JSON scalar, got an array".into(),
            }),
            Value::Object(_) => Err(WebdmPagesError::InvalidContext {
                reason: "description must be a JSON scalar, got an object".into(),
            }),
        }
    }

    /// A realistic starter context for `webdm-pages sample`.
    ///
    /// Includes one framework entry hidden by the `ubuntu-core-` filter, so
    /// rendering the sample demonstrates the sidebar filtering.
    pub fn sample() -> Self {
        Self {
            description: Value::String(
                "Docker is an open platform for developers and sysadmins to build, \
                 ship, and run distributed applications."
                    .into(),
            ),
            screenshot_urls: vec![
                "https://myapps.developer.ubuntu.com/site_media/appmedia/2015/04/shot1.png".into(),
                "https://myapps.developer.ubuntu.com/site_media/appmedia/2015/04/shot2.png".into(),
                "https://myapps.developer.ubuntu.com/site_media/appmedia/2015/04/shot3.png".into(),
            ],
            click_framework: BTreeMap::from([
                ("base".to_string(), "ubuntu-core-15.04-dev1".to_string()),
                ("docker".to_string(), "docker-1.6.1".to_string()),
            ]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_context_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("context.json");
        let context = SnapDetails::sample();
        context.save(&path).unwrap();
        let loaded = SnapDetails::load(&path).unwrap();
        assert_eq!(loaded.description, context.description);
        assert_eq!(loaded.screenshot_urls, context.screenshot_urls);
        assert_eq!(loaded.click_framework, context.click_framework);
    }

    #[test]
    fn test_load_missing_file() {
        let result = SnapDetails::load(Path::new("/tmp/nonexistent_webdm_pages_context.json"));
        assert!(matches!(
            result,
            Err(WebdmPagesError::ContextNotFound { .. })
        ));
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("context.json");
        std::fs::write(&path, "not json{").unwrap();
        let result = SnapDetails::load(&path);
        assert!(matches!(result, Err(WebdmPagesError::ContextParse { .. })));
    }

    #[test]
    fn test_load_empty_document_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("context.json");
        std::fs::write(&path, "{}").unwrap();
        let context = SnapDetails::load(&path).unwrap();
        assert!(context.description.is_null());
        assert!(context.screenshot_urls.is_empty());
        assert!(context.click_framework.is_empty());
    }

    #[test]
    fn test_load_rejects_non_list_screenshots() {
        // The enumerable-collection precondition is enforced at the parse
        // boundary: a string where the list belongs is a parse error.
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("context.json");
        std::fs::write(&path, r#"{"screenshot_urls": "shot1.png"}"#).unwrap();
        let result = SnapDetails::load(&path);
        assert!(matches!(result, Err(WebdmPagesError::ContextParse { .. })));
    }

    #[test]
    fn test_load_ignores_unknown_fields() {
        // Store metadata carries many fields the template never reads.
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("context.json");
        std::fs::write(
            &path,
            r#"{"description": "d", "version": "1.0", "publisher": "x"}"#,
        )
        .unwrap();
        let context = SnapDetails::load(&path).unwrap();
        assert_eq!(context.description, json!("d"));
    }

    #[test]
    fn test_validate_accepts_scalars() {
        for description in [json!(null), json!(false), json!(0), json!("text")] {
            let context = SnapDetails {
                description,
                screenshot_urls: vec![],
                click_framework: BTreeMap::new(),
            };
            assert!(context.validate().is_ok());
        }
    }

    #[test]
    fn test_validate_rejects_collections() {
        for description in [json!(["a"]), json!({"k": "v"})] {
            let context = SnapDetails {
                description,
                screenshot_urls: vec![],
                click_framework: BTreeMap::new(),
            };
            assert!(matches!(
                context.validate(),
                Err(WebdmPagesError::InvalidContext { .. })
            ));
        }
    }

    #[test]
    fn test_sample_is_valid() {
        let sample = SnapDetails::sample();
        assert!(sample.validate().is_ok());
        // The sample demonstrates the sidebar filter.
        assert!(sample
            .click_framework
            .values()
            .any(|v| v.starts_with("ubuntu-core-")));
        assert!(sample
            .click_framework
            .values()
            .any(|v| !v.starts_with("ubuntu-core-")));
    }
}
