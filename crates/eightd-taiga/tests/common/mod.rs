//! In-process fake Taiga API backed by `tiny_http`.
//!
//! Serves `/api/v1/{auth,epics,userstories,epics/{id}/related_userstories}`
//! on a random localhost port, records every request, and fails on demand.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::thread;

use serde_json::{Value, json};

pub const TOKEN: &str = "tok-fake-123";
pub const EPIC_ID: u64 = 900;
pub const EPIC_REF: u64 = 17;
pub const FIRST_STORY_ID: u64 = 1000;

/// One request as the fake server saw it.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub authorization: Option<String>,
    pub body: Value,
}

/// Which calls should fail, and how.
#[derive(Debug, Clone, Default)]
pub struct Faults {
    pub auth: Option<(u16, &'static str)>,
    pub epic: Option<(u16, &'static str)>,
    /// 1-based story creation call to fail.
    pub story_at: Option<(usize, u16, &'static str)>,
    /// 1-based link call to fail.
    pub link_at: Option<(usize, u16, &'static str)>,
}

pub struct FakeTaiga {
    pub base_url: String,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl FakeTaiga {
    pub fn start(faults: Faults) -> Self {
        let server = tiny_http::Server::http("127.0.0.1:0").expect("bind fake taiga");
        let port = server
            .server_addr()
            .to_ip()
            .map(|addr| addr.port())
            .expect("tcp listener");
        let requests = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&requests);

        thread::spawn(move || {
            let mut stories = 0usize;
            let mut links = 0usize;
            for mut request in server.incoming_requests() {
                let mut raw = String::new();
                let _ = request.as_reader().read_to_string(&mut raw);
                let body: Value = serde_json::from_str(&raw).unwrap_or(Value::Null);
                let path = request.url().to_string();
                let authorization = request
                    .headers()
                    .iter()
                    .find(|h| h.field.equiv("Authorization"))
                    .map(|h| h.value.as_str().to_string());

                log.lock().unwrap().push(Recorded {
                    method: request.method().to_string(),
                    path: path.clone(),
                    authorization,
                    body: body.clone(),
                });

                let (status, reply) = route(&path, &body, &faults, &mut stories, &mut links);
                let response = tiny_http::Response::from_string(reply)
                    .with_status_code(status)
                    .with_header(
                        tiny_http::Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..])
                            .unwrap(),
                    );
                let _ = request.respond(response);
            }
        });

        Self {
            base_url: format!("http://127.0.0.1:{port}/api/v1"),
            requests,
        }
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    pub fn paths(&self) -> Vec<String> {
        self.requests().into_iter().map(|r| r.path).collect()
    }

    pub fn count(&self, path: &str) -> usize {
        self.requests().iter().filter(|r| r.path == path).count()
    }

    pub fn link_requests(&self) -> Vec<Recorded> {
        self.requests()
            .into_iter()
            .filter(|r| r.path.ends_with("/related_userstories"))
            .collect()
    }
}

fn route(
    path: &str,
    body: &Value,
    faults: &Faults,
    stories: &mut usize,
    links: &mut usize,
) -> (u16, String) {
    match path {
        "/api/v1/auth" => match faults.auth {
            Some((status, reply)) => (status, reply.to_string()),
            None => (
                200,
                json!({"auth_token": TOKEN, "id": 1, "username": body["username"]}).to_string(),
            ),
        },
        "/api/v1/epics" => match faults.epic {
            Some((status, reply)) => (status, reply.to_string()),
            None => (
                201,
                json!({"id": EPIC_ID, "ref": EPIC_REF, "subject": body["subject"], "project": body["project"]})
                    .to_string(),
            ),
        },
        "/api/v1/userstories" => {
            *stories += 1;
            match faults.story_at {
                Some((at, status, reply)) if at == *stories => (status, reply.to_string()),
                _ => {
                    let id = FIRST_STORY_ID + *stories as u64 - 1;
                    (
                        201,
                        json!({"id": id, "ref": id - 900, "subject": body["subject"]}).to_string(),
                    )
                }
            }
        }
        p if p.starts_with("/api/v1/epics/") && p.ends_with("/related_userstories") => {
            *links += 1;
            match faults.link_at {
                Some((at, status, reply)) if at == *links => (status, reply.to_string()),
                _ => (201, body.to_string()),
            }
        }
        _ => (404, r#"{"_error_message": "Not found."}"#.to_string()),
    }
}
