//! Process-wide naming constants and workspace-testing name helpers.

use crate::errors::DiskError;
use std::path::{Path, PathBuf};

/// Folder name for application code.
pub const APP_FOLDER_NAME: &str = "os-app";

/// Folder name for cached artifacts.
pub const CACHE_FOLDER_NAME: &str = "os-cache";

/// Folder name for persistent data.
pub const DATA_FOLDER_NAME: &str = "os-data";

/// Folder name for publicly served assets.
pub const PUBLIC_FOLDER_NAME: &str = "os-public";

/// Root folder name for test-scoped scratch workspaces.
pub const WORKSPACE_TESTING_FOLDER_NAME: &str = "os-workspace-testing";

/// File name of the launch entry point.
pub const LAUNCH_FILE_NAME: &str = "os-launch.js";

/// Default text encoding used when reading and writing files.
pub const DEFAULT_TEXT_ENCODING: &str = "utf8";

/// Builds the namespaced subfolder name for a test workspace.
///
/// Dots are folded into hyphens so the result stays a single path component
/// (`os-bravo.charlie` becomes `test-os-bravo-charlie`). An empty `name`
/// violates the caller contract and fails with
/// [`DiskError::InvalidInput`] before any work happens.
pub fn workspace_testing_subfolder_name(name: &str) -> crate::Result<String> {
    if name.is_empty() {
        return Err(DiskError::invalid_input(
            "workspace-testing subfolder name must not be empty",
        ));
    }
    Ok(format!("test-{}", name.replace('.', "-")))
}

/// Joins the workspace-testing root with the namespaced subfolder for `name`.
pub fn workspace_testing_path(name: &str) -> crate::Result<PathBuf> {
    Ok(Path::new(WORKSPACE_TESTING_FOLDER_NAME).join(workspace_testing_subfolder_name(name)?))
}
