use std::collections::VecDeque;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use crate::controller::api::{ApiError, Backend};

/// What effects need from the outside world.
#[derive(Clone, Copy)]
pub struct Deps<'a> {
    pub backend: &'a dyn Backend,
    /// Token forwarded as `X-CSRFToken` on posts.
    pub csrf: Option<&'a str>,
}

impl Deps<'_> {
    /// Serializes `body` and posts it with the session's CSRF token.
    ///
    /// # Errors
    ///
    /// Will return `Err` if serialization fails or the backend rejects the post
    pub async fn post<T: Serialize + Sync>(&self, path: &str, body: &T) -> Result<Value, ApiError> {
        let body = serde_json::to_value(body)?;
        self.backend.post(path, &body, self.csrf).await
    }
}

/// A model driven by messages, whose side effects are described rather than performed.
#[async_trait]
pub trait Program: Send + Sync {
    type Msg: Send;
    type Effect: Send;

    fn update(&mut self, msg: Self::Msg) -> Vec<Self::Effect>;

    async fn run_effect(&self, effect: Self::Effect, deps: Deps<'_>) -> Self::Msg;
}

/// Runs the MVU loop: seeds with `init_msg` and drains effects one at a time, in the order
/// they were produced.
pub async fn run<P: Program>(model: &mut P, init_msg: P::Msg, deps: Deps<'_>) {
    let mut effects: VecDeque<P::Effect> = model.update(init_msg).into();
    while let Some(effect) = effects.pop_front() {
        let msg = model.run_effect(effect, deps).await;
        effects.extend(model.update(msg));
    }
}
