use crate::domain::actions::{
    DrinkTeaAction, OrderPizzaAction, PlayVideoGameAction, UserJoinAction, UserLeaveAction,
};

use super::{
    errors::{EncodingError, MalformedMessage},
    proto,
};

// Empty strings count as absent in both directions, so anything that decodes
// also re-encodes.

pub fn text_of(field: &'static str, value: &str) -> Result<String, EncodingError> {
    if value.is_empty() {
        Err(EncodingError::MissingField { field })
    } else {
        Ok(value.to_string())
    }
}

pub fn int32_of(field: &'static str, value: u32) -> Result<i32, EncodingError> {
    i32::try_from(value).map_err(|_| EncodingError::OutOfRange { field, value })
}

pub fn required<T>(field: &'static str, value: Option<T>) -> Result<T, MalformedMessage> {
    value.ok_or(MalformedMessage::MissingField { field })
}

pub fn required_text(field: &'static str, value: Option<String>) -> Result<String, MalformedMessage> {
    match value {
        Some(text) if !text.is_empty() => Ok(text),
        _ => Err(MalformedMessage::MissingField { field }),
    }
}

pub fn unsigned(field: &'static str, value: Option<i32>) -> Result<u32, MalformedMessage> {
    let value = required(field, value)?;
    u32::try_from(value).map_err(|_| MalformedMessage::ValueOutOfRange {
        field,
        value: value as i64,
    })
}

impl TryFrom<&UserJoinAction> for proto::UserJoinAction {
    type Error = EncodingError;

    fn try_from(a: &UserJoinAction) -> Result<Self, Self::Error> {
        Ok(proto::UserJoinAction {
            user_count: Some(int32_of("userCount", a.user_count)?),
        })
    }
}

impl TryFrom<&UserLeaveAction> for proto::UserLeaveAction {
    type Error = EncodingError;

    fn try_from(a: &UserLeaveAction) -> Result<Self, Self::Error> {
        Ok(proto::UserLeaveAction {
            user_count: Some(int32_of("userCount", a.user_count)?),
        })
    }
}

impl TryFrom<&OrderPizzaAction> for proto::OrderPizzaAction {
    type Error = EncodingError;

    fn try_from(a: &OrderPizzaAction) -> Result<Self, Self::Error> {
        Ok(proto::OrderPizzaAction {
            pizza_name: Some(text_of("pizzaName", &a.pizza_name)?),
            count: Some(int32_of("count", a.count)?),
        })
    }
}

impl TryFrom<&PlayVideoGameAction> for proto::PlayVideoGameAction {
    type Error = EncodingError;

    fn try_from(a: &PlayVideoGameAction) -> Result<Self, Self::Error> {
        Ok(proto::PlayVideoGameAction {
            video_game_name: Some(text_of("videoGameName", &a.video_game_name)?),
            players: Some(int32_of("players", a.players)?),
        })
    }
}

impl TryFrom<&DrinkTeaAction> for proto::DrinkTeaAction {
    type Error = EncodingError;

    fn try_from(a: &DrinkTeaAction) -> Result<Self, Self::Error> {
        Ok(proto::DrinkTeaAction {
            region: Some(text_of("region", &a.region)?),
            temperature: Some(a.temperature),
        })
    }
}

impl TryFrom<proto::UserJoinAction> for UserJoinAction {
    type Error = MalformedMessage;

    fn try_from(m: proto::UserJoinAction) -> Result<Self, Self::Error> {
        Ok(UserJoinAction {
            user_count: unsigned("userCount", m.user_count)?,
        })
    }
}

impl TryFrom<proto::UserLeaveAction> for UserLeaveAction {
    type Error = MalformedMessage;

    fn try_from(m: proto::UserLeaveAction) -> Result<Self, Self::Error> {
        Ok(UserLeaveAction {
            user_count: unsigned("userCount", m.user_count)?,
        })
    }
}

impl TryFrom<proto::OrderPizzaAction> for OrderPizzaAction {
    type Error = MalformedMessage;

    fn try_from(m: proto::OrderPizzaAction) -> Result<Self, Self::Error> {
        Ok(OrderPizzaAction {
            pizza_name: required_text("pizzaName", m.pizza_name)?,
            count: unsigned("count", m.count)?,
        })
    }
}

impl TryFrom<proto::PlayVideoGameAction> for PlayVideoGameAction {
    type Error = MalformedMessage;

    fn try_from(m: proto::PlayVideoGameAction) -> Result<Self, Self::Error> {
        Ok(PlayVideoGameAction {
            video_game_name: required_text("videoGameName", m.video_game_name)?,
            players: unsigned("players", m.players)?,
        })
    }
}

impl TryFrom<proto::DrinkTeaAction> for DrinkTeaAction {
    type Error = MalformedMessage;

    fn try_from(m: proto::DrinkTeaAction) -> Result<Self, Self::Error> {
        Ok(DrinkTeaAction {
            region: required_text("region", m.region)?,
            temperature: required("temperature", m.temperature)?,
        })
    }
}
