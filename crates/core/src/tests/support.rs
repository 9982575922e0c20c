//! Test doubles shared by the behavior modules.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use async_trait::async_trait;

use crate::api::{ApiRequest, ApiResponse, PlantApi, Transport};
use crate::config::AppConfig;
use crate::error::Error;
use crate::result::Result;
use crate::services::Services;
use crate::session::{MemoryStore, Session};

/// Scripted reply for one path.
#[derive(Debug, Clone)]
pub enum Reply {
    Respond(u16, String),
    Fail(String),
}

/// Records every request and answers from a per-path script.
///
/// Each path holds a queue; the last reply repeats once the queue drains.
#[derive(Debug, Clone, Default)]
pub struct RecordingTransport {
    requests: Rc<RefCell<Vec<ApiRequest>>>,
    replies: Rc<RefCell<HashMap<String, Vec<Reply>>>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a JSON reply for `path`.
    pub fn respond(self, path: &str, status: u16, body: serde_json::Value) -> Self {
        self.push(path, Reply::Respond(status, body.to_string()));
        self
    }

    /// Queue a transport failure for `path`.
    pub fn fail(self, path: &str, reason: &str) -> Self {
        self.push(path, Reply::Fail(reason.to_string()));
        self
    }

    fn push(&self, path: &str, reply: Reply) {
        self.replies
            .borrow_mut()
            .entry(path.to_string())
            .or_default()
            .push(reply);
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

#[async_trait(?Send)]
impl Transport for RecordingTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        let path = request.path.clone();
        self.requests.borrow_mut().push(request);

        let reply = {
            let mut replies = self.replies.borrow_mut();
            let queue = replies.get_mut(&path);
            match queue {
                Some(queue) if queue.len() > 1 => Some(queue.remove(0)),
                Some(queue) => queue.first().cloned(),
                None => None,
            }
        };

        match reply {
            Some(Reply::Respond(status, body)) => Ok(ApiResponse::new(status, body)),
            Some(Reply::Fail(reason)) => Err(Error::network(reason)),
            None => Ok(ApiResponse::new(404, r#"{"message":"no route"}"#)),
        }
    }
}

pub type TestServices = Services<RecordingTransport, MemoryStore>;

/// Services over `transport` with default settings and an empty session.
pub fn services(transport: RecordingTransport) -> TestServices {
    services_with(transport, AppConfig::default())
}

pub fn services_with(transport: RecordingTransport, config: AppConfig) -> TestServices {
    Services::new(PlantApi::new(transport), Session::new(MemoryStore::new()), config)
}
