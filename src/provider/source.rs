//! Locating the configuration document.

use super::ProviderOptions;
use std::path::PathBuf;

/// Find the document: first as given, then under each search path.
pub(super) fn locate(options: &ProviderOptions) -> Option<PathBuf> {
    if options.file_name.is_file() {
        return Some(options.file_name.clone());
    }
    options
        .search_paths
        .iter()
        .map(|dir| dir.join(&options.file_name))
        .find(|candidate| candidate.is_file())
}
