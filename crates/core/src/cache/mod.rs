mod error;
mod invalidation;
mod keys;
mod patterns;
mod serialization;
mod traits;

pub use error::{CacheError, Result};
pub use invalidation::{invalidation_plan, InvalidationPlan, Mutation};
pub use keys::{
    entry_key, entry_pattern, entry_tracking_key, extract_entry_id_from_key, is_entry_key,
    CacheKey, COLLECTION_KEY,
};
pub use patterns::pattern_matches;
pub use serialization::{
    deserialize_entries, deserialize_entry, serialize_entries, serialize_entry,
    SerializationError,
};
pub use traits::Cache;
