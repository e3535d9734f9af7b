//! REST implementation of the board store.
//!
//! Talks to the whiteboard backend API (`/boards`, `/boards/{id}`,
//! `/boards/{id}/strokes`) with the session's bearer credential.

use super::{BoardStore, BoxFuture, RemoteError, RemoteResult};
use crate::board::{Board, BoardSummary};
use crate::session::Session;
use crate::stroke::Stroke;
use log::debug;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde_json::json;

/// Board store backed by the whiteboard REST API.
pub struct HttpBoardStore {
    client: Client,
    base_url: String,
    session: Session,
}

impl HttpBoardStore {
    /// `base_url` is the API root, e.g. `https://host/api`.
    pub fn new(base_url: impl Into<String>, session: Session) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        debug!("{method} {path}");
        self.client
            .request(method, self.url(path))
            .bearer_auth(self.session.bearer_token())
    }

    async fn parse<T: serde::de::DeserializeOwned>(response: Response) -> RemoteResult<T> {
        let response = check_status(response).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| RemoteError::Decode(e.to_string()))
    }
}

async fn check_status(response: Response) -> RemoteResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if status == StatusCode::UNAUTHORIZED {
        return Err(RemoteError::Unauthorized);
    }

    let message = response.text().await.unwrap_or_default();
    if status == StatusCode::NOT_FOUND {
        return Err(RemoteError::NotFound(message));
    }
    Err(RemoteError::Status {
        status: status.as_u16(),
        message,
    })
}

impl From<reqwest::Error> for RemoteError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            RemoteError::Decode(err.to_string())
        } else {
            RemoteError::Transport(err.to_string())
        }
    }
}

impl BoardStore for HttpBoardStore {
    fn create_board(&self, name: &str) -> BoxFuture<'_, RemoteResult<Board>> {
        let body = json!({ "name": name });
        Box::pin(async move {
            let response = self
                .request(Method::POST, "/boards")
                .json(&body)
                .send()
                .await?;
            Self::parse(response).await
        })
    }

    fn list_boards(&self) -> BoxFuture<'_, RemoteResult<Vec<BoardSummary>>> {
        Box::pin(async move {
            let response = self.request(Method::GET, "/boards").send().await?;
            Self::parse(response).await
        })
    }

    fn get_board(&self, id: &str) -> BoxFuture<'_, RemoteResult<Board>> {
        let path = format!("/boards/{id}");
        Box::pin(async move {
            let response = self.request(Method::GET, &path).send().await?;
            Self::parse(response).await
        })
    }

    fn append_stroke(&self, board_id: &str, stroke: &Stroke) -> BoxFuture<'_, RemoteResult<Stroke>> {
        let path = format!("/boards/{board_id}/strokes");
        let stroke = stroke.clone();
        Box::pin(async move {
            let response = self
                .request(Method::POST, &path)
                .json(&stroke)
                .send()
                .await?;
            Self::parse(response).await
        })
    }

    fn replace_strokes(
        &self,
        board_id: &str,
        strokes: &[Stroke],
    ) -> BoxFuture<'_, RemoteResult<Board>> {
        let path = format!("/boards/{board_id}/strokes");
        let strokes = strokes.to_vec();
        Box::pin(async move {
            let response = self
                .request(Method::PATCH, &path)
                .json(&strokes)
                .send()
                .await?;
            Self::parse(response).await
        })
    }

    fn rename_board(&self, id: &str, name: &str) -> BoxFuture<'_, RemoteResult<Board>> {
        let path = format!("/boards/{id}");
        let body = json!({ "name": name });
        Box::pin(async move {
            let response = self.request(Method::PUT, &path).json(&body).send().await?;
            Self::parse(response).await
        })
    }

    fn delete_board(&self, id: &str) -> BoxFuture<'_, RemoteResult<()>> {
        let path = format!("/boards/{id}");
        Box::pin(async move {
            let response = self.request(Method::DELETE, &path).send().await?;
            check_status(response).await?;
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::UserProfile;

    fn session() -> Session {
        Session::new(
            "token",
            UserProfile {
                id: "u1".to_string(),
                name: String::new(),
            },
        )
    }

    #[test]
    fn test_url_building_trims_trailing_slash() {
        let store = HttpBoardStore::new("http://localhost:5000/api/", session());
        assert_eq!(store.url("/boards"), "http://localhost:5000/api/boards");
        assert_eq!(store.url("/boards/7/strokes"), "http://localhost:5000/api/boards/7/strokes");
    }
}
