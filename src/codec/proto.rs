// optional everywhere so an absent required field is distinguishable from zero

use prost::Message;

#[derive(Clone, PartialEq, Message)]
pub struct UserJoinAction {
    #[prost(int32, optional, tag = "1")]
    pub user_count: Option<i32>,
}

#[derive(Clone, PartialEq, Message)]
pub struct UserLeaveAction {
    #[prost(int32, optional, tag = "1")]
    pub user_count: Option<i32>,
}

#[derive(Clone, PartialEq, Message)]
pub struct OrderPizzaAction {
    #[prost(string, optional, tag = "1")]
    pub pizza_name: Option<String>,
    #[prost(int32, optional, tag = "2")]
    pub count: Option<i32>,
}

#[derive(Clone, PartialEq, Message)]
pub struct PlayVideoGameAction {
    #[prost(string, optional, tag = "1")]
    pub video_game_name: Option<String>,
    #[prost(int32, optional, tag = "2")]
    pub players: Option<i32>,
}

#[derive(Clone, PartialEq, Message)]
pub struct DrinkTeaAction {
    #[prost(string, optional, tag = "1")]
    pub region: Option<String>,
    #[prost(int32, optional, tag = "2")]
    pub temperature: Option<i32>,
}

#[derive(Clone, PartialEq, Message)]
pub struct CommandRequest {
    #[prost(int32, optional, tag = "1")]
    pub action_type: Option<i32>,
    #[prost(message, optional, tag = "2")]
    pub order_pizza_action: Option<OrderPizzaAction>,
    #[prost(message, optional, tag = "3")]
    pub play_video_game_action: Option<PlayVideoGameAction>,
    #[prost(message, optional, tag = "4")]
    pub drink_tea_action: Option<DrinkTeaAction>,
}

#[derive(Clone, PartialEq, Message)]
pub struct CommandAuthorization {
    #[prost(string, optional, tag = "1")]
    pub user_name: Option<String>,
    #[prost(int64, optional, tag = "2")]
    pub time: Option<i64>,
    #[prost(int32, optional, tag = "3")]
    pub action_type: Option<i32>,
    #[prost(message, optional, tag = "4")]
    pub user_join_action: Option<UserJoinAction>,
    #[prost(message, optional, tag = "5")]
    pub user_leave_action: Option<UserLeaveAction>,
    #[prost(message, optional, tag = "6")]
    pub order_pizza_action: Option<OrderPizzaAction>,
    #[prost(message, optional, tag = "7")]
    pub play_video_game_action: Option<PlayVideoGameAction>,
    #[prost(message, optional, tag = "8")]
    pub drink_tea_action: Option<DrinkTeaAction>,
}
