pub mod aggregate;
pub mod assemble;
pub mod count;
pub mod error;
pub mod locate;
pub mod platforms;
pub mod snapshot;

pub use aggregate::{aggregate, MAX_VIEW_SAMPLES};
pub use assemble::{assemble_failure, assemble_success};
pub use count::parse_count;
pub use error::SnapshotError;
pub use platforms::extract;
pub use snapshot::{HttpSnapshotSource, PageSnapshot, SnapshotSource};
