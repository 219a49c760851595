//! HTTP client for the content API.
//!
//! Every operation maps its outcome into the shared [`ApiError`] taxonomy:
//! fetch-level failures become `Network`, a 401 becomes `Auth` (and the
//! persisted credentials are dropped on the spot), any other non-2xx
//! becomes `Remote` carrying the upstream message when the body has one.
//! No call is retried and no timeout is configured; recovery is manual.

use gloo_net::http::{Request, RequestBuilder, Response};
use js_sys::Date;
use serde::Deserialize;
use valean_shared::{ApiError, Article, ArticleDraft, ArticlePage, ArticleQuery, ArticleUpdate};

use crate::{config::API_BASE, session, session::UserProfile};

fn network_error(err: gloo_net::Error) -> ApiError {
    ApiError::Network(format!("{:?}", err))
}

/// Map a non-2xx response into the error taxonomy. A 401 invalidates the
/// stored credentials immediately; callers additionally reset the session
/// context and redirect to the login boundary.
async fn reject(response: Response) -> ApiError {
    if response.status() == 401 {
        session::clear_credentials();
        return ApiError::Auth;
    }
    let status = response.status();
    let message = response
        .text()
        .await
        .ok()
        .map(|body| body.trim().to_string())
        .filter(|body| !body.is_empty())
        .unwrap_or_else(|| response.status_text());
    ApiError::Remote { status, message }
}

fn decode_error(err: gloo_net::Error) -> ApiError {
    ApiError::Remote {
        status: 200,
        message: format!("invalid response body: {:?}", err),
    }
}

/// Attach the persisted bearer token, failing fast when it is absent.
fn authorized(builder: RequestBuilder) -> Result<RequestBuilder, ApiError> {
    match session::stored_token() {
        Some(token) => Ok(builder.header("Authorization", &format!("Bearer {}", token))),
        None => Err(ApiError::Auth),
    }
}

/// Fetch one page of articles: `GET /articles?page&limit&search`.
///
/// Only page, page size and free-text search are server-side parameters;
/// status/category/tag narrowing happens client-side on the result.
pub async fn fetch_articles(query: &ArticleQuery) -> Result<ArticlePage, ApiError> {
    let mut url = format!("{}/articles", API_BASE);
    let mut params = vec![
        format!("page={}", query.page.max(1)),
        format!("limit={}", query.limit.max(1)),
    ];
    if let Some(search) = query.search.as_deref() {
        params.push(format!("search={}", urlencoding::encode(search)));
    }
    params.push(format!("_ts={}", Date::now() as u64));
    url.push('?');
    url.push_str(&params.join("&"));

    let response = Request::get(&url)
        .header("Cache-Control", "no-cache, no-store, max-age=0")
        .header("Pragma", "no-cache")
        .send()
        .await
        .map_err(network_error)?;

    if !response.ok() {
        return Err(reject(response).await);
    }

    response.json().await.map_err(decode_error)
}

/// Fetch one article by id. `Ok(None)` on 404.
pub async fn fetch_article(id: &str) -> Result<Option<Article>, ApiError> {
    let url = format!(
        "{}/articles/{}?_ts={}",
        API_BASE,
        urlencoding::encode(id),
        Date::now() as u64
    );
    fetch_single(&url).await
}

/// Fetch one article by slug: the public detail page's fallback when the
/// directory cache misses (direct link, refresh). `Ok(None)` on 404.
pub async fn fetch_article_by_slug(slug: &str) -> Result<Option<Article>, ApiError> {
    let url = format!(
        "{}/articles/slug/{}?_ts={}",
        API_BASE,
        urlencoding::encode(slug),
        Date::now() as u64
    );
    fetch_single(&url).await
}

async fn fetch_single(url: &str) -> Result<Option<Article>, ApiError> {
    let response = Request::get(url)
        .header("Cache-Control", "no-cache, no-store, max-age=0")
        .header("Pragma", "no-cache")
        .send()
        .await
        .map_err(network_error)?;

    if response.status() == 404 {
        return Ok(None);
    }
    if !response.ok() {
        return Err(reject(response).await);
    }

    response.json().await.map_err(decode_error).map(Some)
}

/// Create a new article: `POST /articles`, bearer auth.
pub async fn create_article(draft: &ArticleDraft) -> Result<Article, ApiError> {
    let url = format!("{}/articles", API_BASE);
    let response = authorized(Request::post(&url))?
        .json(draft)
        .map_err(network_error)?
        .send()
        .await
        .map_err(network_error)?;

    if !response.ok() {
        return Err(reject(response).await);
    }

    response.json().await.map_err(decode_error)
}

/// Partially update an article: `PATCH /articles/{id}`, bearer auth.
/// A status-only patch implements the Draft⇄Published toggle.
pub async fn update_article(id: &str, update: &ArticleUpdate) -> Result<Article, ApiError> {
    let url = format!("{}/articles/{}", API_BASE, urlencoding::encode(id));
    let response = authorized(Request::patch(&url))?
        .json(update)
        .map_err(network_error)?
        .send()
        .await
        .map_err(network_error)?;

    if !response.ok() {
        return Err(reject(response).await);
    }

    response.json().await.map_err(decode_error)
}

/// Hard-delete an article: `DELETE /articles/{id}`, bearer auth.
/// Irreversible; the UI asks for confirmation before issuing the call.
pub async fn delete_article(id: &str) -> Result<(), ApiError> {
    let url = format!("{}/articles/{}", API_BASE, urlencoding::encode(id));
    let response = authorized(Request::delete(&url))?
        .send()
        .await
        .map_err(network_error)?;

    if !response.ok() {
        return Err(reject(response).await);
    }

    Ok(())
}

/// Successful `POST /token` payload.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub user: UserProfile,
}

/// Exchange credentials for a bearer token: `POST /token`, form-encoded.
///
/// Does not persist anything — the login page stores the credentials and
/// dispatches the session action, so a failure leaves no residue.
pub async fn login(email: &str, password: &str) -> Result<LoginResponse, ApiError> {
    let url = format!("{}/token", API_BASE);
    let form = format!(
        "username={}&password={}",
        urlencoding::encode(email),
        urlencoding::encode(password)
    );

    let response = Request::post(&url)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(form)
        .map_err(network_error)?
        .send()
        .await
        .map_err(network_error)?;

    if !response.ok() {
        return Err(reject(response).await);
    }

    response.json().await.map_err(decode_error)
}
