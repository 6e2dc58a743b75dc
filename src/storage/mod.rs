mod json_file_storage;
mod traits;

pub use json_file_storage::JsonFileStorage;
pub use traits::{Snapshot, Storage};
