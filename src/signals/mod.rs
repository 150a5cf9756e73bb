//! Signal derivation and chat replies.

pub mod decision;
pub mod engine;
pub mod reply;

pub use decision::*;
pub use engine::*;
pub use reply::{classify, compose_reply, ChatIntent};
