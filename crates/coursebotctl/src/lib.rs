//! Coursebotctl library - chat front end over coursebot_common
//!
//! Modules are exported so integration tests can drive a session directly.

pub mod intent_router;
pub mod repl;
pub mod session;
pub mod typing;
pub mod views;
