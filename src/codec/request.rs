use prost::Message;

use crate::domain::{
    actions::{Action, ActionType},
    envelopes::{CommandRequest, UnknownAction},
};

use super::{
    errors::{DecodeError, EncodingError, MalformedMessage},
    payloads::required,
    proto,
};

pub fn encode_request(request: &CommandRequest) -> Result<Vec<u8>, EncodingError> {
    let mut message = proto::CommandRequest {
        action_type: Some(request.action_type().value()),
        ..Default::default()
    };
    match &request.action {
        Action::OrderPizza(a) => message.order_pizza_action = Some(a.try_into()?),
        Action::PlayVideoGame(a) => message.play_video_game_action = Some(a.try_into()?),
        Action::DrinkTea(a) => message.drink_tea_action = Some(a.try_into()?),
    }
    Ok(message.encode_to_vec())
}

pub fn decode_request(bytes: &[u8]) -> Result<CommandRequest, DecodeError> {
    let message = proto::CommandRequest::decode(bytes).map_err(MalformedMessage::from)?;

    let raw = required("actionType", message.action_type)?;
    let Some(action_type) = ActionType::from_value(raw) else {
        return Err(DecodeError::UnknownActionType(UnknownAction {
            action_type: raw,
            user_name: None,
            time: None,
        }));
    };

    let action = match action_type {
        ActionType::OrderPizza => Action::OrderPizza(
            required("orderPizzaAction", message.order_pizza_action)?.try_into()?,
        ),
        ActionType::PlayVideoGame => Action::PlayVideoGame(
            required("playVideoGameAction", message.play_video_game_action)?.try_into()?,
        ),
        ActionType::DrinkTea => Action::DrinkTea(
            required("drinkTeaAction", message.drink_tea_action)?.try_into()?,
        ),
        ActionType::UserJoin | ActionType::UserLeave => {
            return Err(MalformedMessage::UnexpectedActionType(action_type).into())
        }
    };

    Ok(CommandRequest { action })
}
