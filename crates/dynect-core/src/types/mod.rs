mod common;
mod response;
mod session;
mod zone;

pub use response::*;
pub use session::*;
pub use zone::*;
