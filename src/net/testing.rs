//! In-memory transport for unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use super::client::{ApiClient, HttpRequest, HttpResponse, Transport};
use super::error::ApiError;

pub const TEST_BASE_URL: &str = "http://api.test";

/// Replays queued responses and records every request it sees.
///
/// Clones share the same queues, so a test can keep one handle while the
/// client owns another.
#[derive(Clone, Default)]
pub struct FakeTransport {
    requests: Rc<RefCell<Vec<HttpRequest>>>,
    responses: Rc<RefCell<VecDeque<Result<HttpResponse, ApiError>>>>,
}

impl FakeTransport {
    pub fn respond(&self, status: u16, body: &str) -> &Self {
        self.responses
            .borrow_mut()
            .push_back(Ok(HttpResponse { status, body: body.to_owned() }));
        self
    }

    pub fn fail(&self, error: ApiError) -> &Self {
        self.responses.borrow_mut().push_back(Err(error));
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests.borrow().last().cloned().expect("no request was sent")
    }

    pub fn client(&self, token: Option<&str>) -> ApiClient<FakeTransport> {
        ApiClient::new(TEST_BASE_URL, token.map(str::to_owned), self.clone())
    }
}

impl Transport for FakeTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("no response queued".to_owned())))
    }
}
