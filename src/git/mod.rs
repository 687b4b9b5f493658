//! Git integration: the staged side of the pending commit

pub mod staged;

pub use staged::{list_staged_files, parse_name_status, ChangeStatus, StagedFile};
