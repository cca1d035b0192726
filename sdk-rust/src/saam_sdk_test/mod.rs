mod api;

pub use api::{MockArtworkApi, MockDocumentResult, MockRequest};
