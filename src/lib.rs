//! Small filesystem utilities with a cross-platform safe-basename sanitizer.
//! This crate intentionally stays dependency-light and focuses on stable,
//! reusable primitives: folder predicates, idempotent create/delete, naming
//! constants, and the sanitizer that makes arbitrary strings safe to use as
//! path components.

pub mod errors;
pub mod fs;
pub mod naming;
pub mod sanitize;

pub use errors::{DiskError, Result};
pub use fs::{
    create_folder,
    delete_folder,
    is_real_file_path,
    is_real_folder_path,
    FileSystem,
    RealFileSystem,
};
pub use naming::{
    workspace_testing_path,
    workspace_testing_subfolder_name,
    APP_FOLDER_NAME,
    CACHE_FOLDER_NAME,
    DATA_FOLDER_NAME,
    DEFAULT_TEXT_ENCODING,
    LAUNCH_FILE_NAME,
    PUBLIC_FOLDER_NAME,
    WORKSPACE_TESTING_FOLDER_NAME,
};
pub use sanitize::{safe_basename, safe_basename_with, Disposition, DispositionTable};

/// Re-export a small stable API surface for downstream crates.
pub mod prelude {
    pub use crate::{
        errors::{DiskError, Result},
        fs::*,
        naming::*,
        sanitize::*,
    };
}
