use pomsort_tree::TreeError;
use thiserror::Error;

/// Failures while loading a sort-order template. Fatal for initialization: no
/// partial order table is ever produced.
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Unknown character encoding '{0}'")]
    UnknownEncoding(String),

    #[error("Template is not valid {encoding}")]
    Decode { encoding: &'static str },

    #[error("Template parse error: {0}")]
    Parse(#[from] TreeError),

    #[error("Unknown predefined sort order '{0}'")]
    UnknownOrder(String),
}

#[derive(Error, Debug)]
pub enum SortError {
    #[error("Failed to load sort order template: {0}")]
    Template(#[from] TemplateError),

    #[error("Malformed element tree at '{path}': {message}")]
    MalformedTree { path: String, message: String },
}
