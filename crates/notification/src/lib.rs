pub mod contact;
mod message;
mod mock;
mod service;

pub use message::OutboundEmail;
pub use mock::MockMailer;
pub use service::*;
