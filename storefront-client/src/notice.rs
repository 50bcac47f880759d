// storefront-client/src/notice.rs
// 用户通知 - 成功/失败提示通道

use tokio::sync::mpsc;

/// User-facing outcome message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    pub fn message(&self) -> &str {
        match self {
            Self::Success(msg) | Self::Error(msg) => msg,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

/// Sending half of the notice channel
///
/// A closed receiver is not an error; the notice is only logged then.
#[derive(Debug, Clone)]
pub struct Notifier {
    tx: mpsc::UnboundedSender<Notice>,
}

impl Notifier {
    pub fn new(tx: mpsc::UnboundedSender<Notice>) -> Self {
        Self { tx }
    }

    /// Notifier plus the receiver the UI drains
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Notice>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(tx), rx)
    }

    pub fn success(&self, message: impl Into<String>) {
        let message = message.into();
        tracing::info!(notice = %message, "Success notice");
        self.send(Notice::Success(message));
    }

    pub fn error(&self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!(notice = %message, "Error notice");
        self.send(Notice::Error(message));
    }

    fn send(&self, notice: Notice) {
        if self.tx.send(notice).is_err() {
            tracing::debug!("Notice receiver dropped");
        }
    }
}
