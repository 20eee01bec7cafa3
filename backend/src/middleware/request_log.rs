//! Middleware appending one line per inbound request to a plain-text log.
//!
//! The write happens synchronously before any other processing, matching
//! the store-of-record behaviour of the service: an unbounded append-only
//! file with one `timestamp - METHOD uri` line per request. There is no
//! rotation and no size bound, and a failed write never fails the request.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::task::{Context, Poll};

use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::Error;
use chrono::{SecondsFormat, Utc};
use futures_util::future::{ready, Ready};

/// Fixed relative path of the request log.
pub const REQUEST_LOG_PATH: &str = "logs/requests.log";

/// Create the log file's parent directory if it does not exist yet.
pub fn ensure_log_dir(path: &Path) -> std::io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

fn append_line(path: &Path, line: &str) {
    // Fire-and-forget: the request proceeds whether or not the write lands.
    let _ = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .and_then(|mut file| file.write_all(line.as_bytes()));
}

/// Request-logging middleware writing to the file at the configured path.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use backend::RequestLog;
///
/// let app = App::new().wrap(RequestLog::new("logs/requests.log"));
/// ```
#[derive(Clone)]
pub struct RequestLog {
    path: Arc<PathBuf>,
}

impl RequestLog {
    /// Create middleware logging to the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Arc::new(path.into()),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequestLog
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RequestLogMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestLogMiddleware {
            service,
            path: self.path.clone(),
        }))
    }
}

/// Service wrapper produced by [`RequestLog`].
pub struct RequestLogMiddleware<S> {
    service: S,
    path: Arc<PathBuf>,
}

impl<S, B> Service<ServiceRequest> for RequestLogMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = S::Future;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let line = format!(
            "{} - {} {}\n",
            Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            req.method(),
            req.uri()
        );
        append_line(&self.path, &line);
        self.service.call(req)
    }
}
