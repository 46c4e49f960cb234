//! User-facing text: the [`Message`] enum, its wording, and the `msg_*`
//! output macros.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
