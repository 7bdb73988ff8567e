mod error;
mod requests;
mod types;

pub use error::ValidationError;
pub use requests::EntryPayload;
pub use types::{Entry, EntryId, NewEntry};
