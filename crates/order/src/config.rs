//! User-facing sort configuration.
use crate::templates::PredefinedOrder;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The switches that select composite (group and artifact) ordering.
///
/// Fixed when a `WrapperFactory` is built; a factory never changes them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortFlags {
    pub sort_dependencies: bool,
    pub sort_plugins: bool,
}

/// Configuration for a sorting session, loadable from JSON.
///
/// ```json
/// { "sort_dependencies": true, "predefined_sort_order": "default_1_0_0" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SortConfig {
    /// Order `<dependency>` entries by groupId and artifactId.
    pub sort_dependencies: bool,
    /// Order `<plugin>` entries by groupId and artifactId.
    pub sort_plugins: bool,
    pub predefined_sort_order: PredefinedOrder,
    /// A template file replacing the predefined order.
    pub custom_sort_order_file: Option<PathBuf>,
    /// Encoding of the custom template and of input documents.
    pub encoding: String,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            sort_dependencies: false,
            sort_plugins: false,
            predefined_sort_order: PredefinedOrder::default(),
            custom_sort_order_file: None,
            encoding: "UTF-8".to_string(),
        }
    }
}

impl SortConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn flags(&self) -> SortFlags {
        SortFlags {
            sort_dependencies: self.sort_dependencies,
            sort_plugins: self.sort_plugins,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = SortConfig::from_json(r#"{ "sort_plugins": true }"#).unwrap();
        assert!(config.sort_plugins);
        assert!(!config.sort_dependencies);
        assert_eq!(config.predefined_sort_order, PredefinedOrder::Recommended2008_06);
        assert_eq!(config.encoding, "UTF-8");
        assert_eq!(
            config.flags(),
            SortFlags {
                sort_dependencies: false,
                sort_plugins: true
            }
        );
    }

    #[test]
    fn test_order_names_and_unknown_fields() {
        let config =
            SortConfig::from_json(r#"{ "predefined_sort_order": "default_1_0_0" }"#).unwrap();
        assert_eq!(config.predefined_sort_order, PredefinedOrder::Default1_0_0);

        assert!(SortConfig::from_json(r#"{ "predefined_sort_order": "custom_9" }"#).is_err());
        assert!(SortConfig::from_json(r#"{ "sort_dependency": true }"#).is_err());
    }
}
