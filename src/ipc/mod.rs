//! TCP+msgpack message-channel transport.
//!
//! Length-prefixed msgpack framing carrying `{id, service, method, body}`
//! requests and `{id, ok, body | error}` responses.

pub mod codec;
pub mod dispatch;
pub mod handlers;
pub mod server;

pub use server::IpcServer;
