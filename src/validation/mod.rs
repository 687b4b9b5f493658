pub mod filter;
pub mod inspector;
pub mod result;
pub mod rules;

pub use filter::{is_source_file, select_candidates};
pub use inspector::{ContentInspector, InspectionSummary};
pub use result::ValidationResult;
pub use rules::{ContentRule, DebugPrintRule, UnimplementedMarkerRule};
