//! API endpoint modules.

mod session;
mod zone;

pub use session::{Session, SessionApi};
pub use zone::ZoneNoteRequestBuilder;
