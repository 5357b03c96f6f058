//! Per-call context carried by every store and service operation.
//!
//! A `Context` bundles an optional cancellation token and an optional
//! deadline. Stores and services only pass it along; callers that drive
//! multi-step work decide when to check it.

use std::time::{Duration, Instant};

use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::error::{AppError, AppResult};

/// Cancellation and deadline plumbing for one logical request.
#[derive(Debug, Clone)]
pub struct Context {
    request_id: Uuid,
    cancel: Option<CancellationToken>,
    deadline: Option<Instant>,
}

impl Context {
    /// A context that is never cancelled and has no deadline
    pub fn background() -> Self {
        Self {
            request_id: Uuid::new_v4(),
            cancel: None,
            deadline: None,
        }
    }

    /// A context cancelled together with `token`
    pub fn with_cancellation(token: CancellationToken) -> Self {
        Self {
            cancel: Some(token),
            ..Self::background()
        }
    }

    /// Set a deadline relative to now
    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// Set an absolute deadline. An earlier existing deadline wins.
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(match self.deadline {
            Some(current) => current.min(deadline),
            None => deadline,
        });
        self
    }

    /// Identifier for log correlation
    pub fn request_id(&self) -> Uuid {
        self.request_id
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(CancellationToken::is_cancelled)
    }

    /// Cancelled or past the deadline
    pub fn is_done(&self) -> bool {
        self.is_cancelled() || self.deadline.is_some_and(|d| Instant::now() >= d)
    }

    /// Fail with `Cancelled` once the context is done
    pub fn ensure_live(&self) -> AppResult<()> {
        if self.is_done() {
            return Err(AppError::Cancelled);
        }
        Ok(())
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::background()
    }
}
