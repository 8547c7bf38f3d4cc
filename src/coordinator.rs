//! The boundary the zone consumes from the (external, out-of-scope) transaction
//! and scope subsystem: multiplexing `ANY`-type probe transactions by name and
//! delivering their outcome back to the zone.

use std::net::IpAddr;

use crate::error::ZoneError;
use crate::record::ResourceKey;
use crate::zone::{ItemId, Zone};

/// Identifies an item within a single [`Zone`]. Stable for the item's lifetime.
pub type ProbeItemId = ItemId;

/// An opaque reference to a coordinator-owned probe transaction. The zone
/// only ever stores or passes this back; it never interprets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProbeHandle(pub u64);

/// Mirrors `Transaction::state` from the external transaction layer. Only
/// `Success` is distinguished for tie-break purposes; everything else other
/// than the `{Null, Pending, Validating}` prefix means "we won".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeState {
    Null,
    Pending,
    Validating,
    Success,
    Failure,
    NoServer,
    RcodeFailure,
    Aborted,
}

impl ProbeState {
    /// `true` for the states `notify` must not act on yet.
    pub fn is_inflight(self) -> bool {
        matches!(self, ProbeState::Null | ProbeState::Pending | ProbeState::Validating)
    }
}

/// The sender/destination addresses observed on a `Success` probe reply,
/// used for the tie-break comparison.
#[derive(Debug, Clone, Copy)]
pub struct ProbeReply {
    pub sender: IpAddr,
    pub destination: IpAddr,
}

/// The contract the zone consumes from its scope's transaction layer.
///
/// Implementations multiplex probes by `(class, ANY, name)`: an `attach` for
/// a name that already has a live transaction joins its listener set instead
/// of starting a new one. A real implementation transmits on the wire and
/// calls back into the `Zone` handle asynchronously; [`crate::testutil::LoopbackCoordinator`]
/// is a deterministic in-process stand-in used by tests and the demo binary.
pub trait ProbeCoordinator: Send + Sync {
    /// Attach `item` to the `(key.class, ANY, key.name)` transaction,
    /// starting one if none is live. `notify` is invoked synchronously,
    /// zero or more times, only if the transaction resolves inline during
    /// this call (mirrors `Transaction::start()` completing reentrantly);
    /// any later resolution is delivered through `zone.notify(item)`
    /// instead, since by then this call has returned and `notify` no longer
    /// exists.
    fn attach(
        &self,
        zone: Zone,
        item: ProbeItemId,
        key: ResourceKey,
        notify: &mut dyn FnMut(ProbeItemId),
    ) -> Result<ProbeHandle, ZoneError>;

    /// Remove `item` from `handle`'s listener set (both pending and done)
    /// and garbage-collect the transaction if no listeners remain. Safe to
    /// call on an already-detached item.
    fn detach(&self, handle: ProbeHandle, item: ProbeItemId);

    fn state(&self, handle: ProbeHandle) -> ProbeState;

    /// The observed sender/destination, populated once `state` is `Success`.
    fn reply(&self, handle: ProbeHandle) -> Option<ProbeReply>;
}
