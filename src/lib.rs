pub mod codec;
pub mod domain;
pub mod handlers;
pub mod services;
