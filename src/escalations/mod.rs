//! Guest messages routed to the host.

pub mod queue;

pub use queue::{Escalation, EscalationQueue, EscalationStatus};
