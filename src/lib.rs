pub mod config;
pub mod coordinator;
pub mod error;
pub mod host;
pub mod logger;
pub mod netservice;
pub mod record;
pub mod testutil;
pub mod zone;

pub use coordinator::{ProbeCoordinator, ProbeHandle, ProbeReply, ProbeState};
pub use error::{Error, ErrorKind, Result, ZoneError};
pub use host::Host;
pub use record::{DnsName, RData, ResourceKey, ResourceRecord};
pub use zone::{ItemId, ItemState, Zone};
