//! Spec loading
//!
//! A page spec arrives through one of three channels: inline JSON in the
//! `spec` query parameter, a remote document named by the `url` parameter, or
//! the built-in default. Every channel ends in the same validator, and every
//! failure is a [`LoadError`] whose [`kind`](LoadError::kind) callers can
//! branch on.

use std::net::IpAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::core::default_spec;
use crate::core::spec::{PageSpec, ValidationError, validate};

/// Query parameter carrying inline JSON
pub const SPEC_PARAM: &str = "spec";
/// Query parameter carrying a remote spec URL
pub const URL_PARAM: &str = "url";

pub const DEFAULT_MAX_SPEC_BYTES: usize = 256 * 1024;
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

// ============================================================================
// Sources
// ============================================================================

/// Where the page spec comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecSource {
    Inline(String),
    Remote(String),
    Fallback,
}

impl SpecSource {
    /// Pick the channel from query values. Blank values count as absent and
    /// inline JSON wins over a URL.
    pub fn from_query(spec: Option<String>, url: Option<String>) -> Self {
        let present = |value: Option<String>| value.filter(|v| !v.trim().is_empty());
        match (present(spec), present(url)) {
            (Some(text), _) => SpecSource::Inline(text),
            (None, Some(url)) => SpecSource::Remote(url.trim().to_string()),
            (None, None) => SpecSource::Fallback,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SpecSource::Inline(_) => "inline",
            SpecSource::Remote(_) => "remote",
            SpecSource::Fallback => "fallback",
        }
    }

    /// Load synchronously. Remote sources return `None`; they need a fetch.
    pub fn load_local(&self, max_bytes: usize) -> Option<Result<PageSpec, LoadError>> {
        match self {
            SpecSource::Inline(text) => Some(parse_and_validate_limited(text, max_bytes)),
            SpecSource::Fallback => Some(default_spec::default_spec()),
            SpecSource::Remote(_) => None,
        }
    }
}

// ============================================================================
// Errors
// ============================================================================

/// Why a remote document could not be retrieved
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadFailure {
    #[error("network error: {0}")]
    Network(String),
    #[error("server responded with HTTP {0}")]
    Status(u16),
    #[error("request timed out")]
    Timeout,
    #[error("URL not allowed: {0}")]
    Rejected(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadErrorKind {
    Parse,
    Schema,
    Load,
    TooLarge,
}

impl LoadErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoadErrorKind::Parse => "parse",
            LoadErrorKind::Schema => "schema",
            LoadErrorKind::Load => "load",
            LoadErrorKind::TooLarge => "too_large",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LoadError {
    #[error("malformed JSON at line {line}, column {column}: {message}")]
    Parse {
        message: String,
        line: usize,
        column: usize,
    },

    #[error("invalid page spec at {0}")]
    Schema(#[from] ValidationError),

    #[error("could not load {url}: {reason}")]
    Load { url: String, reason: LoadFailure },

    #[error("spec is {actual} bytes, over the {limit} byte limit")]
    TooLarge { limit: usize, actual: usize },
}

impl LoadError {
    pub fn kind(&self) -> LoadErrorKind {
        match self {
            LoadError::Parse { .. } => LoadErrorKind::Parse,
            LoadError::Schema(_) => LoadErrorKind::Schema,
            LoadError::Load { .. } => LoadErrorKind::Load,
            LoadError::TooLarge { .. } => LoadErrorKind::TooLarge,
        }
    }

    /// Short heading for error screens
    pub fn title(&self) -> &'static str {
        match self.kind() {
            LoadErrorKind::Parse => "The page spec is not valid JSON",
            LoadErrorKind::Schema => "The page spec does not match the schema",
            LoadErrorKind::Load => "The page spec could not be loaded",
            LoadErrorKind::TooLarge => "The page spec is too large",
        }
    }

    /// What the author can do about it
    pub fn guidance(&self) -> &'static str {
        match self {
            LoadError::Parse { .. } => {
                "Check the spec parameter for a missing quote, comma or brace and make sure it is URL-encoded."
            }
            LoadError::Schema(_) => {
                "Fix the field named above; every section needs a known type and its required fields."
            }
            LoadError::Load {
                reason: LoadFailure::Rejected(_),
                ..
            } => "Use an https:// URL for the url parameter.",
            LoadError::Load { .. } => {
                "Make sure the URL is reachable, returns JSON with a 2xx status and allows cross-origin requests."
            }
            LoadError::TooLarge { .. } => "Split the page or host the spec and pass it with the url parameter.",
        }
    }

    /// HTTP status for API responses
    pub fn status_code(&self) -> u16 {
        match self {
            LoadError::Parse { .. } => 400,
            LoadError::Schema(_) => 422,
            LoadError::Load {
                reason: LoadFailure::Rejected(_),
                ..
            } => 400,
            LoadError::Load { .. } => 502,
            LoadError::TooLarge { .. } => 413,
        }
    }

    /// JSON body for API responses
    pub fn to_json(&self) -> Value {
        let mut error = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        match self {
            LoadError::Schema(validation) => {
                error["path"] = validation.path.to_string().into();
                error["violation"] = validation.kind.as_str().into();
            }
            LoadError::Parse { line, column, .. } => {
                error["line"] = (*line).into();
                error["column"] = (*column).into();
            }
            LoadError::Load { url, .. } => {
                error["url"] = url.clone().into();
            }
            LoadError::TooLarge { limit, actual } => {
                error["limit"] = (*limit).into();
                error["actual"] = (*actual).into();
            }
        }
        serde_json::json!({ "error": error })
    }

    fn load(url: &str, reason: LoadFailure) -> Self {
        LoadError::Load {
            url: url.to_string(),
            reason,
        }
    }
}

// ============================================================================
// Parsing
// ============================================================================

/// Parse and validate with the default size limit
pub fn parse_and_validate(text: &str) -> Result<PageSpec, LoadError> {
    parse_and_validate_limited(text, DEFAULT_MAX_SPEC_BYTES)
}

/// Parse `text` as JSON, then validate it. Malformed JSON and schema
/// violations are reported as different kinds.
pub fn parse_and_validate_limited(text: &str, max_bytes: usize) -> Result<PageSpec, LoadError> {
    if text.len() > max_bytes {
        return Err(LoadError::TooLarge {
            limit: max_bytes,
            actual: text.len(),
        });
    }
    let raw: Value = serde_json::from_str(text).map_err(|e| {
        let full = e.to_string();
        let location = format!(" at line {} column {}", e.line(), e.column());
        LoadError::Parse {
            message: full.strip_suffix(&location).unwrap_or(&full).to_string(),
            line: e.line(),
            column: e.column(),
        }
    })?;
    Ok(validate(&raw)?)
}

// ============================================================================
// Remote
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchOptions {
    pub timeout: Duration,
    pub max_bytes: usize,
    /// Permit plain `http://` for any host
    pub allow_http: bool,
    /// Permit loopback hosts, over plain `http://` as well
    pub allow_loopback: bool,
}

impl Default for FetchOptions {
    /// Browser defaults: the viewer's own machine is reachable for local
    /// development
    fn default() -> Self {
        Self {
            timeout: DEFAULT_FETCH_TIMEOUT,
            max_bytes: DEFAULT_MAX_SPEC_BYTES,
            allow_http: false,
            allow_loopback: true,
        }
    }
}

/// https only, plus plain http when allowed. Loopback and unspecified hosts
/// are refused unless `allow_loopback` is set.
pub fn check_remote_url(url: &str, options: &FetchOptions) -> Result<(), LoadError> {
    let lowered = url.trim().to_ascii_lowercase();
    let (secure, rest) = if let Some(rest) = lowered.strip_prefix("https://") {
        (true, rest)
    } else if let Some(rest) = lowered.strip_prefix("http://") {
        (false, rest)
    } else {
        return Err(LoadError::load(
            url,
            LoadFailure::Rejected("expected an https:// URL".to_string()),
        ));
    };

    let loopback = is_local_host(rest);
    if loopback && !options.allow_loopback {
        return Err(LoadError::load(
            url,
            LoadFailure::Rejected("local addresses are not allowed".to_string()),
        ));
    }
    if secure || options.allow_http || loopback {
        return Ok(());
    }
    Err(LoadError::load(
        url,
        LoadFailure::Rejected("plain http is only allowed for localhost".to_string()),
    ))
}

fn is_local_host(after_scheme: &str) -> bool {
    let authority = after_scheme
        .split(['/', '?', '#'])
        .next()
        .unwrap_or_default();
    let authority = authority.rsplit('@').next().unwrap_or_default();
    let host = match authority.strip_prefix('[') {
        Some(v6) => v6.split(']').next().unwrap_or_default(),
        None => authority.split(':').next().unwrap_or_default(),
    };
    let host = host.trim_end_matches('.');
    if host == "localhost" || host.ends_with(".localhost") {
        return true;
    }
    host.parse::<IpAddr>()
        .map(|ip| ip.is_loopback() || ip.is_unspecified())
        .unwrap_or(false)
}

/// Turn a fetched response into a spec. Non-2xx is a load failure naming the
/// URL; a 2xx body goes through the same parser as inline specs.
pub fn accept_remote_response(
    url: &str,
    status: u16,
    body: &str,
    max_bytes: usize,
) -> Result<PageSpec, LoadError> {
    if !(200..300).contains(&status) {
        return Err(LoadError::load(url, LoadFailure::Status(status)));
    }
    parse_and_validate_limited(body, max_bytes)
}

/// Fetch and validate a remote spec on the server
#[cfg(feature = "ssr")]
pub async fn fetch_remote(
    client: &reqwest::Client,
    url: &str,
    options: &FetchOptions,
) -> Result<PageSpec, LoadError> {
    check_remote_url(url, options)?;

    let failure = |e: reqwest::Error| {
        if e.is_timeout() {
            LoadError::load(url, LoadFailure::Timeout)
        } else {
            LoadError::load(url, LoadFailure::Network(e.to_string()))
        }
    };

    let mut response = client
        .get(url)
        .header(reqwest::header::ACCEPT, "application/json")
        .timeout(options.timeout)
        .send()
        .await
        .map_err(failure)?;

    let status = response.status().as_u16();
    tracing::debug!("Remote spec {} responded with {}", url, status);
    if !response.status().is_success() {
        return Err(LoadError::load(url, LoadFailure::Status(status)));
    }
    if let Some(length) = response.content_length() {
        let length = usize::try_from(length).unwrap_or(usize::MAX);
        if length > options.max_bytes {
            return Err(LoadError::TooLarge {
                limit: options.max_bytes,
                actual: length,
            });
        }
    }

    // The declared length is optional, so the running total is checked too
    let mut body = Vec::new();
    while let Some(chunk) = response.chunk().await.map_err(failure)? {
        body.extend_from_slice(&chunk);
        if body.len() > options.max_bytes {
            tracing::warn!("Remote spec {} exceeded {} bytes", url, options.max_bytes);
            return Err(LoadError::TooLarge {
                limit: options.max_bytes,
                actual: body.len(),
            });
        }
    }

    let body = String::from_utf8_lossy(&body);
    accept_remote_response(url, status, &body, options.max_bytes)
}

/// Fetch and validate a remote spec from the browser
#[cfg(all(feature = "hydrate", not(feature = "ssr")))]
pub async fn fetch_remote(url: &str, options: &FetchOptions) -> Result<PageSpec, LoadError> {
    use futures::future::{Either, select};
    use gloo_net::http::Request;
    use gloo_timers::future::TimeoutFuture;

    check_remote_url(url, options)?;

    let request = Box::pin(async {
        let response = Request::get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| LoadError::load(url, LoadFailure::Network(e.to_string())))?;
        let status = response.status();
        if !(200..300).contains(&status) {
            return Err(LoadError::load(url, LoadFailure::Status(status)));
        }
        let body = response
            .text()
            .await
            .map_err(|e| LoadError::load(url, LoadFailure::Network(e.to_string())))?;
        accept_remote_response(url, status, &body, options.max_bytes)
    });
    let millis = u32::try_from(options.timeout.as_millis()).unwrap_or(u32::MAX);
    let timeout = Box::pin(TimeoutFuture::new(millis));

    match select(request, timeout).await {
        Either::Left((result, _)) => result,
        Either::Right(_) => Err(LoadError::load(url, LoadFailure::Timeout)),
    }
}

// ============================================================================
// Sequencing
// ============================================================================

/// Identifies one load attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Last-request-wins guard for overlapping loads. Every new attempt takes a
/// ticket; a completed attempt may only publish its result while its ticket
/// is still the latest.
#[derive(Debug, Clone, Default)]
pub struct LoadSequencer {
    latest: Arc<AtomicU64>,
}

impl LoadSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> LoadTicket {
        LoadTicket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }
}
