//! Request dispatch: URL shaping, bearer header, status handling.

use reqwest::Method;
use reqwest::header::AUTHORIZATION;
use serde_json::Value;
use tracing::error;
use url::Url;

use crate::error::GfError;

/// Version segment of an API path (`/api/v1/…` or `/api/v2/…`).
///
/// Nearly every endpoint lives under [`ApiVersion::V1`]; portfolio
/// performance is the exception.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ApiVersion {
    #[default]
    V1,
    V2,
}

impl ApiVersion {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            ApiVersion::V1 => "v1",
            ApiVersion::V2 => "v2",
        }
    }
}

impl super::GfClient {
    /// Build `{host}/api/{version}/{endpoint}/`, appending `{object_id}/`
    /// when given. The remote routes require the trailing slash.
    pub(crate) fn url(
        &self,
        endpoint: &str,
        object_id: Option<&str>,
        version: ApiVersion,
    ) -> Result<Url, GfError> {
        let mut path = format!("api/{}/{}/", version.as_str(), endpoint.trim_matches('/'));
        if let Some(id) = object_id {
            path.push_str(id);
            path.push('/');
        }
        Ok(self.host().join(&path)?)
    }

    /// Issue an authenticated GET and return the decoded JSON body.
    pub async fn get(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
        version: ApiVersion,
    ) -> Result<Value, GfError> {
        let token = self.ensure_token().await?;

        let mut url = self.url(endpoint, None, version)?;
        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params);
        }

        let resp = self
            .http()
            .get(url)
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .send()
            .await?;
        handle_response(resp).await
    }

    /// Issue an authenticated POST with an optional JSON body and return
    /// the decoded JSON response.
    pub async fn post(
        &self,
        endpoint: &str,
        body: Option<&Value>,
        version: ApiVersion,
        object_id: Option<&str>,
    ) -> Result<Value, GfError> {
        self.send_json(Method::POST, endpoint, body, version, object_id)
            .await
    }

    /// Issue an authenticated PUT with an optional JSON body and return
    /// the decoded JSON response.
    pub async fn put(
        &self,
        endpoint: &str,
        body: Option<&Value>,
        version: ApiVersion,
        object_id: Option<&str>,
    ) -> Result<Value, GfError> {
        self.send_json(Method::PUT, endpoint, body, version, object_id)
            .await
    }

    async fn send_json(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&Value>,
        version: ApiVersion,
        object_id: Option<&str>,
    ) -> Result<Value, GfError> {
        let token = self.ensure_token().await?;
        let url = self.url(endpoint, object_id, version)?;

        let mut req = self
            .http()
            .request(method, url)
            .header(AUTHORIZATION, format!("Bearer {token}"));
        if let Some(body) = body {
            req = req.json(body);
        }

        handle_response(req.send().await?).await
    }
}

/// Decode a 2xx body as JSON; anything else is logged with its body and
/// surfaced as [`GfError::Status`].
pub(crate) async fn handle_response(resp: reqwest::Response) -> Result<Value, GfError> {
    let status = resp.status();
    let url = resp.url().to_string();

    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        error!(status = status.as_u16(), url = %url, body = %body, "request failed");
        return Err(GfError::Status {
            status: status.as_u16(),
            url,
        });
    }

    let text = resp.text().await?;
    Ok(serde_json::from_str(&text)?)
}
