mod authorization;
pub mod errors;
mod payloads;
pub mod proto;
mod request;

pub use authorization::{decode_authorization, encode_authorization};
pub use errors::{DecodeError, EncodingError, MalformedMessage};
pub use request::{decode_request, encode_request};
