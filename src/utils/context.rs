use tokio_util::sync::CancellationToken;

/// Per-call context threaded explicitly through every service boundary.
///
/// Carries the inbound caller's bearer token, forwarded verbatim to the
/// upstream CA, and a cancellation token that in-flight outbound calls honor.
/// Clones share the cancellation signal, so a handler can hand a clone to a
/// spawned call and still cancel it. Nothing in here outlives the call.
#[derive(Debug, Clone, Default)]
pub struct CallContext {
    auth_token: Option<String>,
    cancel: CancellationToken,
}

impl CallContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Context for a caller authenticated with the given token.
    pub fn with_auth_token(token: impl Into<String>) -> Self {
        Self {
            auth_token: Some(token.into()),
            cancel: CancellationToken::new(),
        }
    }

    pub fn auth_token(&self) -> Option<&str> {
        self.auth_token.as_deref()
    }

    /// Cancellation signal observed by outbound calls made on behalf of this
    /// context.
    pub fn cancellation(&self) -> &CancellationToken {
        &self.cancel
    }

    /// Cancel the call; any in-flight upstream request is aborted.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }
}
