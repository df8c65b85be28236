//! Guest messages: classification and canned replies.

pub mod model;
pub mod responder;
pub mod rules;

pub use model::{Disposition, MessageCategory, MessageClassification, Priority};
pub use responder::render_reply;
pub use rules::{CategoryRule, MessageClassifier};
