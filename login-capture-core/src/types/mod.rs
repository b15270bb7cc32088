//! 类型定义模块

mod attempt;
mod outcome;
mod validation;

pub use attempt::{CredentialAttempt, Credentials, NotificationRecord};
pub use outcome::{
    Feedback, NotifyReceipt, Outcome, StoreReceipt, MSG_FAILED, MSG_STORED_LOCAL,
    MSG_STORED_REMOTE,
};
pub use validation::{FormField, ValidationErrors};

// Re-export remote 库的公共类型
pub use login_capture_remote::{FunctionResponse, RemoteCredentials};
