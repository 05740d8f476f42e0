//! Shared display state.
//!
//! Every calculation takes a request token when it starts. Tokens increase
//! monotonically, and a finished calculation only reaches the display when
//! its token is still the newest one issued. Older calculations keep running
//! to completion but their results are dropped.

use std::sync::Arc;

use parking_lot::RwLock;
use playtime_common::{Error, PlaylistId};
use serde::{Deserialize, Serialize};

use crate::calculator::Calculation;

/// Lifecycle of the displayed result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayStatus {
    /// Nothing has been calculated yet.
    Idle,
    /// The newest calculation is still running.
    Loading,
    /// The newest calculation succeeded.
    Ready,
    /// The newest calculation failed.
    Failed,
}

/// What the page currently shows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayView {
    /// Token of the calculation this display belongs to (0 before the
    /// first calculation).
    pub token: u64,
    pub status: DisplayStatus,
    pub playlist_id: Option<PlaylistId>,
    pub embed_url: Option<String>,
    pub calculation: Option<Calculation>,
    /// User-facing error message. Never carries the underlying cause.
    pub error: Option<String>,
}

impl DisplayView {
    fn idle() -> Self {
        Self {
            token: 0,
            status: DisplayStatus::Idle,
            playlist_id: None,
            embed_url: None,
            calculation: None,
            error: None,
        }
    }
}

struct Inner {
    issued: u64,
    display: DisplayView,
}

/// Latest-wins display shared between concurrent calculations.
pub struct DisplayState {
    inner: RwLock<Inner>,
}

impl DisplayState {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            inner: RwLock::new(Inner {
                issued: 0,
                display: DisplayView::idle(),
            }),
        })
    }

    /// Start a calculation: issue the next token, clear the previous result
    /// and show the loading state.
    pub fn begin(&self) -> u64 {
        let mut inner = self.inner.write();
        inner.issued += 1;
        let token = inner.issued;
        inner.display = DisplayView {
            token,
            status: DisplayStatus::Loading,
            ..DisplayView::idle()
        };
        token
    }

    /// Publish the outcome of calculation `token`.
    ///
    /// Returns `false`, leaving the display untouched, when a newer
    /// calculation has been started since.
    pub fn complete(
        &self,
        token: u64,
        outcome: &Result<Calculation, Error>,
    ) -> bool {
        let mut inner = self.inner.write();
        if token != inner.issued {
            tracing::debug!(
                token,
                latest = inner.issued,
                "Discarding stale calculation result"
            );
            return false;
        }

        inner.display = match outcome {
            Ok(calc) => DisplayView {
                token,
                status: DisplayStatus::Ready,
                playlist_id: Some(calc.playlist_id.clone()),
                embed_url: Some(calc.embed_url.clone()),
                calculation: Some(calc.clone()),
                error: None,
            },
            Err(err) => DisplayView {
                token,
                status: DisplayStatus::Failed,
                error: Some(err.user_message().to_string()),
                ..DisplayView::idle()
            },
        };
        true
    }

    /// Snapshot of the current display.
    pub fn current(&self) -> DisplayView {
        self.inner.read().display.clone()
    }

    /// Newest token issued so far.
    pub fn latest_token(&self) -> u64 {
        self.inner.read().issued
    }
}
