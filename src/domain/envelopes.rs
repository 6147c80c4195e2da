use chrono::{DateTime, TimeZone, Utc};

use super::actions::{Action, ActionType, AuthorizedAction};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRequest {
    pub action: Action,
}

impl CommandRequest {
    pub fn new(action: impl Into<Action>) -> Self {
        Self {
            action: action.into(),
        }
    }

    pub fn action_type(&self) -> ActionType {
        self.action.action_type()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandAuthorization {
    pub user_name: String,
    /// Milliseconds since the unix epoch.
    pub time: i64,
    pub action: AuthorizedAction,
}

impl CommandAuthorization {
    pub fn action_type(&self) -> ActionType {
        self.action.action_type()
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        timestamp_from_millis(self.time)
    }
}

/// An authorization whose `actionType` this client does not know about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAction {
    pub action_type: i32,
    pub user_name: Option<String>,
    pub time: Option<i64>,
}

impl UnknownAction {
    pub fn timestamp(&self) -> DateTime<Utc> {
        timestamp_from_millis(self.time.unwrap_or(0))
    }
}

pub(crate) fn timestamp_from_millis(millis: i64) -> DateTime<Utc> {
    // just use the epoch if the backend sent something chrono can't represent
    Utc.timestamp_millis_opt(millis)
        .single()
        .unwrap_or_default()
}
