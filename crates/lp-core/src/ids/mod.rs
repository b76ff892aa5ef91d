//! Identifier wrapper types.

mod listener_id;

pub use listener_id::ListenerId;
