pub mod actions;
pub mod envelopes;
pub mod notification;
