use std::fmt::Display;

use chrono::{DateTime, Utc};

use super::{
    actions::AuthorizedAction,
    envelopes::{CommandAuthorization, UnknownAction},
};

pub const STATUS_CONNECTED: &str = "Websocket connected";
pub const STATUS_CLOSED: &str = "Connection closed";
pub const STATUS_ERROR: &str =
    "Sorry, but there's some problem with your socket or the server is down";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Join,
    Leave,
    Action,
    Plain,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationLine {
    pub author: String,
    pub timestamp: DateTime<Utc>,
    pub text: String,
    pub tone: Tone,
}

impl NotificationLine {
    pub fn from_authorization(auth: &CommandAuthorization) -> Self {
        let (text, tone) = match &auth.action {
            AuthorizedAction::UserJoin(a) => (
                format!("Joined... Logged in users: {}", a.user_count),
                Tone::Join,
            ),
            AuthorizedAction::UserLeave(a) => (
                format!("Left... Logged in users: {}", a.user_count),
                Tone::Leave,
            ),
            AuthorizedAction::OrderPizza(a) => (
                format!("Ordered {} {} pizza(s).", a.count, a.pizza_name),
                Tone::Action,
            ),
            AuthorizedAction::PlayVideoGame(a) => (
                format!("Playing {} with {} player(s).", a.video_game_name, a.players),
                Tone::Action,
            ),
            AuthorizedAction::DrinkTea(a) => (
                format!(
                    "Drinking tea from {} at {} degree(s) Celsius.",
                    a.region, a.temperature
                ),
                Tone::Action,
            ),
        };

        NotificationLine {
            author: auth.user_name.clone(),
            timestamp: auth.timestamp(),
            text,
            tone,
        }
    }

    pub fn from_unknown(unknown: &UnknownAction) -> Self {
        NotificationLine {
            author: unknown.user_name.clone().unwrap_or_default(),
            timestamp: unknown.timestamp(),
            text: format!("Unknown action with type {}.", unknown.action_type),
            tone: Tone::Plain,
        }
    }
}

impl Display for NotificationLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[ {} | {} ]: {}",
            self.author,
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.text
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::actions::{
        DrinkTeaAction, OrderPizzaAction, PlayVideoGameAction, UserJoinAction, UserLeaveAction,
    };

    fn authorization(action: AuthorizedAction) -> CommandAuthorization {
        CommandAuthorization {
            user_name: "User #3".into(),
            time: 1_700_000_000_000,
            action,
        }
    }

    #[test]
    fn test_presence_lines() {
        let join = NotificationLine::from_authorization(&authorization(
            AuthorizedAction::UserJoin(UserJoinAction { user_count: 5 }),
        ));
        assert_eq!(join.text, "Joined... Logged in users: 5");
        assert_eq!(join.tone, Tone::Join);

        let leave = NotificationLine::from_authorization(&authorization(
            AuthorizedAction::UserLeave(UserLeaveAction { user_count: 4 }),
        ));
        assert_eq!(leave.text, "Left... Logged in users: 4");
        assert_eq!(leave.tone, Tone::Leave);
    }

    #[test]
    fn test_action_lines() {
        let cases = vec![
            (
                AuthorizedAction::OrderPizza(OrderPizzaAction {
                    pizza_name: "Funghi".into(),
                    count: 2,
                }),
                "Ordered 2 Funghi pizza(s).",
            ),
            (
                AuthorizedAction::PlayVideoGame(PlayVideoGameAction {
                    video_game_name: "WOW".into(),
                    players: 7,
                }),
                "Playing WOW with 7 player(s).",
            ),
            (
                AuthorizedAction::DrinkTea(DrinkTeaAction {
                    region: "India".into(),
                    temperature: 45,
                }),
                "Drinking tea from India at 45 degree(s) Celsius.",
            ),
        ];

        for (action, expected) in cases {
            let line = NotificationLine::from_authorization(&authorization(action));
            assert_eq!(line.text, expected);
            assert_eq!(line.tone, Tone::Action);
        }
    }

    #[test]
    fn test_unknown_line_and_display() {
        let line = NotificationLine::from_unknown(&UnknownAction {
            action_type: 9,
            user_name: Some("bob".into()),
            time: Some(0),
        });
        assert_eq!(line.tone, Tone::Plain);
        assert_eq!(
            line.to_string(),
            "[ bob | 1970-01-01 00:00:00 ]: Unknown action with type 9."
        );
    }
}
