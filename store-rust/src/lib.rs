mod errors;
mod persistence;
mod state;
mod store;

pub use errors::{StoreError, StoreResult};
pub use persistence::{JsonFilePersistence, MemoryPersistence, StatePersistence};
pub use state::ArtworkState;
pub use store::ArtworkStore;
