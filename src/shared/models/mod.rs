mod ack;
mod document;

pub use ack::Ack;
pub use document::{Document, Event, Monitor};
