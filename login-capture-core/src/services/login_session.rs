//! 登录会话状态机（无界面）
//!
//! `LoggedOut → Submitting → LoggedIn → LoggedOut`。
//! 成功提交后延迟一段固定时间再进入 `LoggedIn`；延迟任务可通过
//! `CancellationToken` 取消（会话销毁时自动取消）。

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use crate::services::{validate_credentials, SubmissionService};
use crate::types::{Credentials, Feedback, Outcome, ValidationErrors};

/// 进入 `LoggedIn` 前的模拟网络延迟
pub const DEFAULT_TRANSITION_DELAY: Duration = Duration::from_millis(1500);

/// 会话状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SessionState {
    LoggedOut,
    Submitting,
    LoggedIn,
}

/// 会话提交结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionSubmit {
    /// 已有提交在进行中或已登录，本次提交被忽略
    Busy,
    /// 会话已销毁
    Closed,
    /// 校验失败，状态保持 `LoggedOut`
    Invalid(ValidationErrors),
    /// 提交已完成
    Completed { outcome: Outcome, feedback: Feedback },
}

/// 登录会话
pub struct LoginSession {
    submission: Arc<SubmissionService>,
    state: Arc<watch::Sender<SessionState>>,
    transition_delay: Duration,
    shutdown: CancellationToken,
}

impl LoginSession {
    #[must_use]
    pub fn new(submission: Arc<SubmissionService>) -> Self {
        Self::with_delay(submission, DEFAULT_TRANSITION_DELAY)
    }

    #[must_use]
    pub fn with_delay(submission: Arc<SubmissionService>, transition_delay: Duration) -> Self {
        let (state, _) = watch::channel(SessionState::LoggedOut);
        Self {
            submission,
            state: Arc::new(state),
            transition_delay,
            shutdown: CancellationToken::new(),
        }
    }

    /// 当前状态
    pub fn state(&self) -> SessionState {
        *self.state.borrow()
    }

    /// 订阅状态变化
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    pub fn transition_delay(&self) -> Duration {
        self.transition_delay
    }

    /// 提交表单
    ///
    /// 仅在 `LoggedOut` 状态下接受提交。校验失败不改变状态；
    /// `Failed` 立即回到 `LoggedOut`；其他结果在延迟后进入 `LoggedIn`。
    pub async fn submit(&self, username: &str, password: &str) -> SessionSubmit {
        if self.shutdown.is_cancelled() {
            return SessionSubmit::Closed;
        }
        if self.state() != SessionState::LoggedOut {
            log::debug!("[session] Submit ignored in state {:?}", self.state());
            return SessionSubmit::Busy;
        }
        if let Err(errors) = validate_credentials(&Credentials::new(username, password)) {
            return SessionSubmit::Invalid(errors);
        }
        if !self.transition(SessionState::LoggedOut, SessionState::Submitting) {
            return SessionSubmit::Busy;
        }

        let outcome = match self.submission.submit(username, password).await {
            Ok(outcome) => outcome,
            Err(errors) => {
                self.state.send_replace(SessionState::LoggedOut);
                return SessionSubmit::Invalid(errors);
            }
        };

        if outcome.is_stored() {
            self.schedule_logged_in();
        } else {
            self.state.send_replace(SessionState::LoggedOut);
        }

        SessionSubmit::Completed {
            outcome,
            feedback: outcome.feedback(),
        }
    }

    /// "Back to Login"：`LoggedIn → LoggedOut`
    pub fn back_to_login(&self) -> bool {
        self.transition(SessionState::LoggedIn, SessionState::LoggedOut)
    }

    /// 销毁会话，取消尚未触发的 `LoggedIn` 转换
    pub fn teardown(&self) {
        if !self.shutdown.is_cancelled() {
            log::debug!("[session] Torn down");
        }
        self.shutdown.cancel();
    }

    fn transition(&self, from: SessionState, to: SessionState) -> bool {
        self.state.send_if_modified(|state| {
            if *state == from {
                *state = to;
                true
            } else {
                false
            }
        })
    }

    fn schedule_logged_in(&self) {
        let token = self.shutdown.child_token();
        let state = Arc::clone(&self.state);
        let delay = self.transition_delay;

        tokio::spawn(async move {
            tokio::select! {
                biased;
                () = token.cancelled() => {
                    log::debug!("[session] Pending LoggedIn transition cancelled");
                }
                () = tokio::time::sleep(delay) => {
                    state.send_if_modified(|s| {
                        if *s == SessionState::Submitting {
                            *s = SessionState::LoggedIn;
                            true
                        } else {
                            false
                        }
                    });
                }
            }
        });
    }
}

impl Drop for LoginSession {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}
