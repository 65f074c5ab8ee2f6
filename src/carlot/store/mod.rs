//! # Storage Layer
//!
//! The [`DataStore`] trait abstracts persistence of the two documents carlot
//! keeps: the dealers document (every dealer and its cars) and the session
//! document (which dealer is logged in).
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage under a data directory
//!   - `Dealers.json` holds the whole fleet
//!   - `Session.json` holds at most one session record
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!
//! ## Storage Format
//!
//! ```text
//! Data/
//! ├── Dealers.json    # { Type, Description, Dealers: [...] }
//! ├── Session.json    # { Type, Description, DealerId, Presence }
//! └── Settings.json   # CLI settings, see config.rs
//! ```
//!
//! Documents are always read and written whole. There is no locking: two
//! processes writing the same directory can clobber each other.

use crate::error::Result;
use crate::model::{DealersDocument, SessionDocument};

pub mod fs;
pub mod memory;

pub const DEALERS_FILENAME: &str = "Dealers.json";
pub const SESSION_FILENAME: &str = "Session.json";

/// Abstract interface for document storage.
///
/// Loading a document that was never saved yields (and, for file stores,
/// creates) the default empty document. Anything else that cannot be read
/// is an error.
pub trait DataStore {
    /// Load the dealers document
    fn load_dealers(&self) -> Result<DealersDocument>;

    /// Overwrite the dealers document
    fn save_dealers(&mut self, doc: &DealersDocument) -> Result<()>;

    /// Load the session document
    fn load_session(&self) -> Result<SessionDocument>;

    /// Overwrite the session document
    fn save_session(&mut self, doc: &SessionDocument) -> Result<()>;
}
