//! HTTP client for the upstream stories/articles API.

use crate::article::Page;
use crate::model::{FetchOutcome, SentencePayload};
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::fmt;

/// Production stories host; override per client for tests and mirrors.
pub const DEFAULT_API_BASE: &str = "https://www.lingual-ninja.com";

#[derive(Debug)]
pub enum ClientError {
    Http(reqwest::Error),
    Status(StatusCode),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Http(err) => write!(f, "http error: {err}"),
            ClientError::Status(status) => write!(f, "unexpected status: {status}"),
        }
    }
}

impl std::error::Error for ClientError {}

impl From<reqwest::Error> for ClientError {
    fn from(value: reqwest::Error) -> Self {
        ClientError::Http(value)
    }
}

#[derive(Clone)]
pub struct StoriesClient {
    base_url: String,
    client: reqwest::Client,
}

impl StoriesClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// One annotated sentence with its word glosses, wrapped in the
    /// response-kind envelope.
    pub async fn get_one_sentence(
        &self,
        story_name: &str,
        line_number: u32,
    ) -> Result<FetchOutcome<SentencePayload>, ClientError> {
        self.get_json(&format!(
            "api/Stories/GetOneSentence/{story_name}/{line_number}"
        ))
        .await
    }

    pub async fn get_article(&self, page_name: &str) -> Result<Page, ClientError> {
        let encoded = utf8_percent_encode(page_name, NON_ALPHANUMERIC);
        self.get_json(&format!("api/Articles/GetArticle?p={encoded}"))
            .await
    }

    pub async fn get_all_articles(&self) -> Result<Vec<Page>, ClientError> {
        self.get_json("api/Articles/GetAllArticles").await
    }

    /// Random related articles; optionally restricted to folktale articles.
    pub async fn get_random_articles(&self, about_folktale: bool) -> Result<Vec<Page>, ClientError> {
        let path = if about_folktale {
            "api/Articles/GetRandomArticles?num=1000&isAboutFolktale=true"
        } else {
            "api/Articles/GetRandomArticles?num=1000"
        };
        self.get_json(path).await
    }

    async fn get_json<T>(&self, path: &str) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}/{}", self.base_url, path);
        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(ClientError::Status(response.status()));
        }
        Ok(response.json::<T>().await?)
    }
}

// Fake-upstream tests live behind the web feature so axum is available as a
// stub server.
#[cfg(all(test, feature = "web"))]
mod tests {
    use super::*;
    use axum::{Json, Router, extract::Path, routing::get};
    use serde_json::json;

    async fn spawn_upstream(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn sentence_json(story: &str, line: u32) -> serde_json::Value {
        json!({
            "responseType": "success",
            "sentence": {
                "storyId": 7,
                "lineNumber": line,
                "kanji": format!("{story}の文"),
                "hiragana": "ぶん",
                "romaji": "bun",
                "english": format!("Line {line} of {story}")
            },
            "words": [{
                "lineNumber": line,
                "wordNumber": 1,
                "kanji": "文",
                "hiragana": "ぶん",
                "english": "sentence"
            }]
        })
    }

    #[tokio::test]
    async fn sentence_fetch_round_trips() {
        let router = Router::new().route(
            "/api/Stories/GetOneSentence/:story/:line",
            get(|Path((story, line)): Path<(String, u32)>| async move {
                Json(sentence_json(&story, line))
            }),
        );
        let base = spawn_upstream(router).await;

        let client = StoriesClient::new(base);
        let outcome = client.get_one_sentence("momotaro--oni_island", 3).await.unwrap();
        let payload = outcome.success().expect("success kind");
        assert_eq!(payload.sentence.line_number, 3);
        assert_eq!(payload.words[0].english, "sentence");
    }

    #[tokio::test]
    async fn non_success_kind_surfaces_as_failure() {
        let router = Router::new().route(
            "/api/Stories/GetOneSentence/:story/:line",
            get(|| async { Json(json!({ "responseType": "dbError" })) }),
        );
        let base = spawn_upstream(router).await;

        let client = StoriesClient::new(base);
        let outcome = client.get_one_sentence("momotaro", 1).await.unwrap();
        assert!(outcome.success().is_none());
    }

    #[tokio::test]
    async fn error_status_maps_to_client_error() {
        let router = Router::new().route(
            "/api/Articles/GetArticle",
            get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        );
        let base = spawn_upstream(router).await;

        let client = StoriesClient::new(base);
        match client.get_article("momotaro").await {
            Err(ClientError::Status(status)) => {
                assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR)
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn trailing_slash_in_base_url_is_trimmed() {
        let router = Router::new().route(
            "/api/Articles/GetAllArticles",
            get(|| async {
                Json(json!([{ "url": "momotaro", "title": "Momotaro", "description": "Peach Boy" }]))
            }),
        );
        let base = spawn_upstream(router).await;

        let client = StoriesClient::new(format!("{base}/"));
        let pages = client.get_all_articles().await.unwrap();
        assert_eq!(pages[0].title, "Momotaro");
    }
}
