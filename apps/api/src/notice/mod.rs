// Notice API: query validation, defaults and the two generate handlers.

pub mod date;
pub mod handlers;
pub mod request;
