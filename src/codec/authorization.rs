use prost::Message;

use crate::domain::{
    actions::{ActionType, AuthorizedAction},
    envelopes::{CommandAuthorization, UnknownAction},
};

use super::{
    errors::{DecodeError, EncodingError, MalformedMessage},
    payloads::{required, required_text, text_of},
    proto,
};

pub fn encode_authorization(auth: &CommandAuthorization) -> Result<Vec<u8>, EncodingError> {
    let mut message = proto::CommandAuthorization {
        user_name: Some(text_of("userName", &auth.user_name)?),
        time: Some(auth.time),
        action_type: Some(auth.action_type().value()),
        ..Default::default()
    };
    match &auth.action {
        AuthorizedAction::UserJoin(a) => message.user_join_action = Some(a.try_into()?),
        AuthorizedAction::UserLeave(a) => message.user_leave_action = Some(a.try_into()?),
        AuthorizedAction::OrderPizza(a) => message.order_pizza_action = Some(a.try_into()?),
        AuthorizedAction::PlayVideoGame(a) => {
            message.play_video_game_action = Some(a.try_into()?)
        }
        AuthorizedAction::DrinkTea(a) => message.drink_tea_action = Some(a.try_into()?),
    }
    Ok(message.encode_to_vec())
}

/// Unknown action types come back as [`DecodeError::UnknownActionType`] with
/// whatever author and time were present.
pub fn decode_authorization(bytes: &[u8]) -> Result<CommandAuthorization, DecodeError> {
    let message = proto::CommandAuthorization::decode(bytes).map_err(MalformedMessage::from)?;

    let raw = required("actionType", message.action_type)?;
    let Some(action_type) = ActionType::from_value(raw) else {
        return Err(DecodeError::UnknownActionType(UnknownAction {
            action_type: raw,
            user_name: message.user_name,
            time: message.time,
        }));
    };

    let action = match action_type {
        ActionType::UserJoin => AuthorizedAction::UserJoin(
            required("userJoinAction", message.user_join_action)?.try_into()?,
        ),
        ActionType::UserLeave => AuthorizedAction::UserLeave(
            required("userLeaveAction", message.user_leave_action)?.try_into()?,
        ),
        ActionType::OrderPizza => AuthorizedAction::OrderPizza(
            required("orderPizzaAction", message.order_pizza_action)?.try_into()?,
        ),
        ActionType::PlayVideoGame => AuthorizedAction::PlayVideoGame(
            required("playVideoGameAction", message.play_video_game_action)?.try_into()?,
        ),
        ActionType::DrinkTea => AuthorizedAction::DrinkTea(
            required("drinkTeaAction", message.drink_tea_action)?.try_into()?,
        ),
    };

    Ok(CommandAuthorization {
        user_name: required_text("userName", message.user_name)?,
        time: required("time", message.time)?,
        action,
    })
}
