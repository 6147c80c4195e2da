use thiserror::Error;

use crate::domain::{actions::ActionType, envelopes::UnknownAction};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodingError {
    #[error("required field `{field}` is absent")]
    MissingField { field: &'static str },

    #[error("field `{field}` value {value} does not fit in int32")]
    OutOfRange { field: &'static str, value: u32 },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MalformedMessage {
    #[error("invalid protobuf: {0}")]
    Wire(String),

    #[error("field `{field}` value {value} is out of range")]
    ValueOutOfRange { field: &'static str, value: i64 },

    #[error("required field `{field}` is missing")]
    MissingField { field: &'static str },

    #[error("action type {0} is not valid in a command request")]
    UnexpectedActionType(ActionType),
}

impl From<prost::DecodeError> for MalformedMessage {
    fn from(value: prost::DecodeError) -> Self {
        MalformedMessage::Wire(value.to_string())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("malformed message: {0}")]
    Malformed(#[from] MalformedMessage),

    #[error("unknown action type {}", .0.action_type)]
    UnknownActionType(UnknownAction),
}
