#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::option_if_let_else)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod config;
pub mod error;
pub mod exclude;
pub mod name;
pub mod normalize;
pub mod operations;
pub mod output;
pub mod preview;
pub mod renamer;
pub mod sanitize;
pub mod truncate;

pub use config::Config;
pub use error::ShrinkerError;
pub use exclude::Exclusions;
pub use name::NameParts;
pub use normalize::{normalize_name, normalize_os_name, NormalizeOptions};
pub use operations::{
    config_set_folder_operation, config_show_operation, process_operation,
    process_operation_with_confirm,
};
pub use output::{
    ConfigResult, OutputFormat, OutputFormatter, ProcessResult, ProcessSummary, VersionResult,
};
pub use preview::{render_preview, should_use_color, Preview};
pub use renamer::{process_directory, ProcessOptions, RenameAction, RenameOutcome};
pub use sanitize::{collapse_non_ascii, sanitize_stem, INVALID_SEQUENCES};
pub use truncate::{truncate_stem, ELLIPSIS, HEAD_BYTES, MAX_NAME_BYTES, TAIL_BYTES};
