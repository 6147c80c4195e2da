use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionType {
    UserJoin,
    UserLeave,
    OrderPizza,
    PlayVideoGame,
    DrinkTea,
}

impl ActionType {
    pub const ALL: [ActionType; 5] = [
        ActionType::UserJoin,
        ActionType::UserLeave,
        ActionType::OrderPizza,
        ActionType::PlayVideoGame,
        ActionType::DrinkTea,
    ];

    pub fn value(self) -> i32 {
        match self {
            ActionType::UserJoin => 1,
            ActionType::UserLeave => 2,
            ActionType::OrderPizza => 3,
            ActionType::PlayVideoGame => 4,
            ActionType::DrinkTea => 5,
        }
    }

    pub fn from_value(value: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.value() == value)
    }

    pub fn name(self) -> &'static str {
        match self {
            ActionType::UserJoin => "USER_JOIN",
            ActionType::UserLeave => "USER_LEAVE",
            ActionType::OrderPizza => "ORDER_PIZZA",
            ActionType::PlayVideoGame => "PLAY_VIDEO_GAME",
            ActionType::DrinkTea => "DRINK_TEA",
        }
    }
}

impl Display for ActionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserJoinAction {
    pub user_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserLeaveAction {
    pub user_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderPizzaAction {
    pub pizza_name: String,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayVideoGameAction {
    pub video_game_name: String,
    pub players: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrinkTeaAction {
    pub region: String,
    pub temperature: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    OrderPizza(OrderPizzaAction),
    PlayVideoGame(PlayVideoGameAction),
    DrinkTea(DrinkTeaAction),
}

impl Action {
    pub fn action_type(&self) -> ActionType {
        match self {
            Action::OrderPizza(_) => ActionType::OrderPizza,
            Action::PlayVideoGame(_) => ActionType::PlayVideoGame,
            Action::DrinkTea(_) => ActionType::DrinkTea,
        }
    }
}

impl From<OrderPizzaAction> for Action {
    fn from(value: OrderPizzaAction) -> Self {
        Action::OrderPizza(value)
    }
}

impl From<PlayVideoGameAction> for Action {
    fn from(value: PlayVideoGameAction) -> Self {
        Action::PlayVideoGame(value)
    }
}

impl From<DrinkTeaAction> for Action {
    fn from(value: DrinkTeaAction) -> Self {
        Action::DrinkTea(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthorizedAction {
    UserJoin(UserJoinAction),
    UserLeave(UserLeaveAction),
    OrderPizza(OrderPizzaAction),
    PlayVideoGame(PlayVideoGameAction),
    DrinkTea(DrinkTeaAction),
}

impl AuthorizedAction {
    pub fn action_type(&self) -> ActionType {
        match self {
            AuthorizedAction::UserJoin(_) => ActionType::UserJoin,
            AuthorizedAction::UserLeave(_) => ActionType::UserLeave,
            AuthorizedAction::OrderPizza(_) => ActionType::OrderPizza,
            AuthorizedAction::PlayVideoGame(_) => ActionType::PlayVideoGame,
            AuthorizedAction::DrinkTea(_) => ActionType::DrinkTea,
        }
    }
}

impl From<Action> for AuthorizedAction {
    fn from(value: Action) -> Self {
        match value {
            Action::OrderPizza(a) => AuthorizedAction::OrderPizza(a),
            Action::PlayVideoGame(a) => AuthorizedAction::PlayVideoGame(a),
            Action::DrinkTea(a) => AuthorizedAction::DrinkTea(a),
        }
    }
}
