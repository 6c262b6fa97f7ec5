//! Event abstractions shared by the domain crates.

pub mod event;
pub mod handler;

pub use event::Event;
pub use handler::execute;
