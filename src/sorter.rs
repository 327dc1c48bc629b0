// src/sorter.rs
use crate::error::PomSortError;
use pomsort_order::{SortConfig, WrapperFactory, decode_text};
use pomsort_tree::XmlDocument;
use std::fs;
use std::io;
use std::path::Path;

/// Sorts project descriptors according to one [`SortConfig`].
///
/// The order table is built once in [`PomSorter::new`]; every call afterwards
/// only reads it.
#[derive(Debug, Clone)]
pub struct PomSorter {
    factory: WrapperFactory,
    encoding: String,
}

impl PomSorter {
    /// Builds the sorter, reading `custom_sort_order_file` if one is configured.
    pub fn new(config: &SortConfig) -> Result<Self, PomSortError> {
        let mut builder = WrapperFactory::builder().with_config(config);
        if let Some(path) = &config.custom_sort_order_file {
            let bytes = fs::read(path).map_err(|e| {
                io::Error::new(
                    e.kind(),
                    format!("Failed to read sort order from '{}': {}", path.display(), e),
                )
            })?;
            log::debug!("Using custom sort order from {}", path.display());
            builder = builder.with_template_bytes(bytes, &config.encoding);
        } else {
            log::debug!("Using predefined sort order {}", config.predefined_sort_order);
        }

        Ok(Self {
            factory: builder.build()?,
            encoding: config.encoding.clone(),
        })
    }

    pub fn factory(&self) -> &WrapperFactory {
        &self.factory
    }

    /// Sorts `xml` and returns the indented outline of the sorted hierarchy.
    pub fn outline(&self, xml: &str) -> Result<String, PomSortError> {
        let doc = XmlDocument::parse(xml)?;
        let mut group = self.factory.create_group(doc.root_element())?;
        group.sort();
        Ok(group.outline())
    }

    /// Whether `xml` already follows the canonical order.
    pub fn verify(&self, xml: &str) -> Result<bool, PomSortError> {
        let doc = XmlDocument::parse(xml)?;
        let group = self.factory.create_group(doc.root_element())?;
        let sorted = group.is_sorted();
        if !sorted {
            log::info!("Document element order differs from the canonical order");
        }
        Ok(sorted)
    }

    pub fn outline_file<P: AsRef<Path>>(&self, path: P) -> Result<String, PomSortError> {
        self.outline(&self.read_document(path.as_ref())?)
    }

    pub fn verify_file<P: AsRef<Path>>(&self, path: P) -> Result<bool, PomSortError> {
        self.verify(&self.read_document(path.as_ref())?)
    }

    fn read_document(&self, path: &Path) -> Result<String, PomSortError> {
        let bytes = fs::read(path).map_err(|e| {
            io::Error::new(
                e.kind(),
                format!("Failed to read '{}': {}", path.display(), e),
            )
        })?;
        decode_text(&bytes, &self.encoding)
            .map(|text| text.into_owned())
            .map_err(|source| PomSortError::Decode {
                path: path.to_path_buf(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outline_sorts_top_level_elements() {
        let sorter = PomSorter::new(&SortConfig::default()).unwrap();
        let outline = sorter
            .outline("<project><version/><artifactId/><groupId/><modelVersion/></project>")
            .unwrap();
        assert_eq!(
            outline,
            "project [1000]\n  modelVersion [1100]\n  groupId [1700]\n  artifactId [1800]\n  version [1900]\n"
        );
    }

    #[test]
    fn test_verify() {
        let sorter = PomSorter::new(&SortConfig::default()).unwrap();
        assert!(sorter.verify("<project><groupId/><artifactId/></project>").unwrap());
        assert!(!sorter.verify("<project><artifactId/><groupId/></project>").unwrap());
    }

    #[test]
    fn test_invalid_document_is_a_parse_error() {
        let sorter = PomSorter::new(&SortConfig::default()).unwrap();
        assert!(matches!(
            sorter.outline("<project>"),
            Err(PomSortError::Parse(_))
        ));
    }
}
