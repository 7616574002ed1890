#[cfg(feature = "client")]
mod form;
mod response;
mod submission;

#[cfg(feature = "client")]
pub use form::*;
pub use response::*;
pub use submission::*;
