//! Session records, token secrets, and authorization header strategies.

pub mod header;
pub mod secret;
pub mod session;

pub use header::*;
pub use secret::*;
pub use session::*;
