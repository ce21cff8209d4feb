#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{Value, json};

use junior_rankings::controller::api::{ApiError, Backend, Params};
use junior_rankings::mvu::runtime::Deps;

/// A backend answering from canned per-path responses and remembering every call.
#[derive(Default)]
pub struct FakeBackend {
    gets: Mutex<HashMap<String, Result<Value, ApiError>>>,
    posts: Mutex<HashMap<String, Result<Value, ApiError>>>,
    pub get_calls: Mutex<Vec<(String, Params)>>,
    pub post_calls: Mutex<Vec<(String, Value, Option<String>)>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_get(self, path: &str, result: Result<Value, ApiError>) -> Self {
        self.gets.lock().unwrap().insert(path.to_string(), result);
        self
    }

    pub fn on_post(self, path: &str, result: Result<Value, ApiError>) -> Self {
        self.posts.lock().unwrap().insert(path.to_string(), result);
        self
    }

    pub fn set_get(&self, path: &str, result: Result<Value, ApiError>) {
        self.gets.lock().unwrap().insert(path.to_string(), result);
    }

    pub fn gets_to(&self, path: &str) -> Vec<Params> {
        self.get_calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(p, _)| p == path)
            .map(|(_, params)| params.clone())
            .collect()
    }

    pub fn posts_to(&self, path: &str) -> Vec<(Value, Option<String>)> {
        self.post_calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(p, _, _)| p == path)
            .map(|(_, body, csrf)| (body.clone(), csrf.clone()))
            .collect()
    }

    pub fn deps(&self) -> Deps<'_> {
        Deps {
            backend: self,
            csrf: Some("test-csrf"),
        }
    }
}

#[async_trait]
impl Backend for FakeBackend {
    async fn get(&self, path: &str, params: &Params) -> Result<Value, ApiError> {
        self.get_calls
            .lock()
            .unwrap()
            .push((path.to_string(), params.clone()));
        self.gets
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .unwrap_or(Err(ApiError::NonJson { status: 404 }))
    }

    async fn post(&self, path: &str, body: &Value, csrf: Option<&str>) -> Result<Value, ApiError> {
        self.post_calls.lock().unwrap().push((
            path.to_string(),
            body.clone(),
            csrf.map(str::to_string),
        ));
        self.posts
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .unwrap_or(Ok(Value::Null))
    }
}

pub fn application_error(message: &str, params: &[(&str, &str)]) -> ApiError {
    ApiError::Application {
        message: message.to_string(),
        params: params
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect(),
    }
}

pub fn athlete_json() -> Value {
    json!({
        "agbNo": 1_234_567,
        "name": "Robin Fletcher",
        "year": 2010,
        "gender": "Female",
        "age": "U15",
        "division": "Recurve"
    })
}

/// Imported scores as `athlete-scores` sends them: no score id, no round codename.
pub fn persisted_scores_json() -> Value {
    json!({
        "scores": [
            {"event": "County Champs", "eventId": 1, "date": "2024-05-04",
             "round": "Portsmouth", "score": 540, "handicap": 30.0},
            {"event": "Club Open", "eventId": 2, "date": "2024-06-01T00:00:00Z",
             "round": "WA 70m", "score": 600, "handicap": 25}
        ]
    })
}

pub fn events_json() -> Value {
    json!({
        "events": [
            {"identifier": 7, "name": "Summer Shoot", "date": "2024-07-13",
             "rounds": [
                {"codename": "windsor", "name": "Windsor"},
                {"codename": "wa_720_60", "name": "WA 720 (60m)"}
             ]},
            {"identifier": "8", "name": "Autumn Open", "date": "2024-09-21",
             "rounds": [{"codename": "york", "name": "York"}]}
        ]
    })
}
