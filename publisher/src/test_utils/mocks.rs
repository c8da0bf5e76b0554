//! Mock implementation of the Medium API port
//!
//! Configurable responses plus call recording, so run-control tests can
//! assert both the outcome and exactly which calls were attempted.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::MediumError;
use crate::medium::{MediumApi, NewPost};

/// A recorded call against the mock, in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    Me,
    CreatePost { user_id: String },
}

pub struct MockMediumApi {
    me_result: Result<String, (u16, String)>,
    post_result: Result<Option<String>, (u16, String)>,
    calls: Mutex<Vec<ApiCall>>,
    posts: Mutex<Vec<NewPost>>,
}

impl MockMediumApi {
    /// A mock that answers both calls successfully as user "u1".
    pub fn new() -> Self {
        Self {
            me_result: Ok("u1".to_string()),
            post_result: Ok(Some("https://medium.com/p/p1".to_string())),
            calls: Mutex::new(Vec::new()),
            posts: Mutex::new(Vec::new()),
        }
    }

    /// Fail the identity call with the given status and body.
    pub fn with_me_error(mut self, status: u16, message: &str) -> Self {
        self.me_result = Err((status, message.to_string()));
        self
    }

    /// Fail the create-post call with the given status and body.
    pub fn with_post_error(mut self, status: u16, message: &str) -> Self {
        self.post_result = Err((status, message.to_string()));
        self
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Every post body the mock accepted.
    pub fn posts(&self) -> Vec<NewPost> {
        self.posts.lock().unwrap().clone()
    }
}

#[async_trait]
impl MediumApi for MockMediumApi {
    async fn me(&self) -> Result<String, MediumError> {
        self.calls.lock().unwrap().push(ApiCall::Me);
        match &self.me_result {
            Ok(id) => Ok(id.clone()),
            Err((status, message)) => Err(MediumError::Api {
                status: *status,
                message: message.clone(),
            }),
        }
    }

    async fn create_post(
        &self,
        user_id: &str,
        post: &NewPost,
    ) -> Result<Option<String>, MediumError> {
        self.calls.lock().unwrap().push(ApiCall::CreatePost {
            user_id: user_id.to_string(),
        });
        self.posts.lock().unwrap().push(post.clone());
        match &self.post_result {
            Ok(url) => Ok(url.clone()),
            Err((status, message)) => Err(MediumError::Api {
                status: *status,
                message: message.clone(),
            }),
        }
    }
}
