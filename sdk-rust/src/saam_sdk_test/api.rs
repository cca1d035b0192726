use std::{collections::VecDeque, sync::Mutex};

use crate::{
    api::Document,
    errors::{SaamError, SaamResult},
    ArtworkApi, ArtworkQuery,
};

/// Result for a mocked API call.
/// It can either be a response document or an error to return.
pub enum MockDocumentResult {
    Document(Document),
    Error(SaamError),
}

impl MockDocumentResult {
    /// Construct a result that yields the provided document.
    pub fn document(document: Document) -> Self {
        Self::Document(document)
    }

    /// Construct a result that yields the provided error.
    pub fn error(error: SaamError) -> Self {
        Self::Error(error)
    }
}

impl From<Document> for MockDocumentResult {
    fn from(document: Document) -> Self {
        Self::document(document)
    }
}

impl From<SaamError> for MockDocumentResult {
    fn from(error: SaamError) -> Self {
        Self::error(error)
    }
}

impl From<SaamResult<Document>> for MockDocumentResult {
    fn from(result: SaamResult<Document>) -> Self {
        match result {
            Ok(document) => Self::Document(document),
            Err(error) => Self::Error(error),
        }
    }
}

/// A request received by the mock.
#[derive(Debug, Clone, PartialEq)]
pub enum MockRequest {
    SearchArtworks(ArtworkQuery),
    GetAudio(String),
}

#[derive(Default)]
struct MockArtworkApiState {
    mocked_search_results: VecDeque<MockDocumentResult>,
    mocked_audio_results: VecDeque<MockDocumentResult>,
    tracked_requests: Vec<MockRequest>,
}

impl MockArtworkApiState {
    fn reset(&mut self) {
        self.tracked_requests.clear();
    }

    fn restore(&mut self) {
        self.mocked_search_results.clear();
        self.mocked_audio_results.clear();
        self.reset();
    }
}

/// A mock API for testing that tracks requests and yields predefined
/// documents.
pub struct MockArtworkApi {
    provider: &'static str,
    state: Mutex<MockArtworkApiState>,
}

impl Default for MockArtworkApi {
    fn default() -> Self {
        Self {
            provider: "mock",
            state: Mutex::new(MockArtworkApiState::default()),
        }
    }
}

impl MockArtworkApi {
    /// Construct a new mock API instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue one result for `search_artworks`.
    pub fn enqueue_search<R>(&self, result: R) -> &Self
    where
        R: Into<MockDocumentResult>,
    {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.mocked_search_results.push_back(result.into());
        drop(state);
        self
    }

    /// Enqueue one result for `get_audio`.
    pub fn enqueue_audio<R>(&self, result: R) -> &Self
    where
        R: Into<MockDocumentResult>,
    {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.mocked_audio_results.push_back(result.into());
        drop(state);
        self
    }

    /// Retrieve the requests received so far.
    pub fn tracked_requests(&self) -> Vec<MockRequest> {
        let state = self.state.lock().expect("mock state poisoned");
        state.tracked_requests.clone()
    }

    /// Reset tracked requests without touching enqueued results.
    pub fn reset(&self) {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.reset();
    }

    /// Clear both tracked requests and enqueued results.
    pub fn restore(&self) {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.restore();
    }
}

#[async_trait::async_trait]
impl ArtworkApi for MockArtworkApi {
    fn provider(&self) -> &'static str {
        self.provider
    }

    async fn search_artworks(&self, query: &ArtworkQuery) -> SaamResult<Document> {
        let mut state = self.state.lock().expect("mock state poisoned");
        state
            .tracked_requests
            .push(MockRequest::SearchArtworks(query.clone()));

        let result = state.mocked_search_results.pop_front().ok_or_else(|| {
            SaamError::Invariant(self.provider, "no mocked search results available".into())
        })?;

        match result {
            MockDocumentResult::Document(document) => Ok(document),
            MockDocumentResult::Error(error) => Err(error),
        }
    }

    async fn get_audio(&self, audio_id: &str) -> SaamResult<Document> {
        let mut state = self.state.lock().expect("mock state poisoned");
        state
            .tracked_requests
            .push(MockRequest::GetAudio(audio_id.to_string()));

        let result = state.mocked_audio_results.pop_front().ok_or_else(|| {
            SaamError::Invariant(self.provider, "no mocked audio results available".into())
        })?;

        match result {
            MockDocumentResult::Document(document) => Ok(document),
            MockDocumentResult::Error(error) => Err(error),
        }
    }
}
