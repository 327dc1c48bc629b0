pub mod fixtures;

use pomsort::{PomSortError, PomSorter, SortConfig};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Build a sorter with the default (recommended) order and the given flags
pub fn sorter_with_flags(
    sort_dependencies: bool,
    sort_plugins: bool,
) -> Result<PomSorter, PomSortError> {
    let config = SortConfig {
        sort_dependencies,
        sort_plugins,
        ..SortConfig::default()
    };
    PomSorter::new(&config)
}

/// The non-empty, trimmed lines of an outline
pub fn outline_lines(outline: &str) -> Vec<String> {
    outline
        .lines()
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}
