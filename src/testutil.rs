//! A deterministic, in-process [`ProbeCoordinator`] for tests and the demo
//! binary. Production probing transmits on the wire and resolves
//! asynchronously; this stand-in lets a test drive both the synchronous
//! ("transaction completes before `attach` returns") and asynchronous
//! ("resolution arrives later") paths explicitly.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::coordinator::{ProbeCoordinator, ProbeHandle, ProbeItemId, ProbeReply, ProbeState};
use crate::error::ZoneError;
use crate::record::ResourceKey;
use crate::zone::Zone;

struct Transaction {
    key: ResourceKey,
    state: ProbeState,
    reply: Option<ProbeReply>,
    listeners: Vec<(Zone, ProbeItemId)>,
}

#[derive(Default)]
struct Inner {
    next_handle: u64,
    by_key: HashMap<ResourceKey, ProbeHandle>,
    transactions: HashMap<ProbeHandle, Transaction>,
    /// An outcome queued by [`LoopbackCoordinator::queue_result`], consumed
    /// by the next `attach` for that key so it resolves synchronously.
    queued: HashMap<ResourceKey, (ProbeState, Option<ProbeReply>)>,
}

#[derive(Default)]
pub struct LoopbackCoordinator(Mutex<Inner>);

impl LoopbackCoordinator {
    pub fn new() -> Self {
        LoopbackCoordinator::default()
    }

    /// Pre-seeds the outcome the *next* new transaction on `key` resolves to,
    /// inline, before `attach` returns. Models a probe that wins or loses
    /// with no network round-trip at all.
    pub fn queue_result(&self, key: ResourceKey, state: ProbeState, reply: Option<ProbeReply>) {
        self.0.lock().unwrap().queued.insert(key, (state, reply));
    }

    /// Resolves the live transaction attached to `key`, notifying every
    /// listener. Models a reply arriving after `attach` has already
    /// returned.
    pub fn resolve(&self, key: &ResourceKey, state: ProbeState, reply: Option<ProbeReply>) {
        let listeners = {
            let mut inner = self.0.lock().unwrap();
            let Some(&handle) = inner.by_key.get(key) else {
                return;
            };
            let Some(txn) = inner.transactions.get_mut(&handle) else {
                return;
            };
            txn.state = state;
            txn.reply = reply;
            txn.listeners.clone()
        };
        for (zone, item) in listeners {
            zone.notify(item);
        }
    }
}

impl ProbeCoordinator for LoopbackCoordinator {
    fn attach(
        &self,
        zone: Zone,
        item: ProbeItemId,
        key: ResourceKey,
        notify: &mut dyn FnMut(ProbeItemId),
    ) -> Result<ProbeHandle, ZoneError> {
        let (handle, resolved) = {
            let mut inner = self.0.lock().unwrap();

            if let Some(&handle) = inner.by_key.get(&key) {
                let txn = inner.transactions.get_mut(&handle).expect("indexed transaction");
                txn.listeners.push((zone, item));
                (handle, !txn.state.is_inflight())
            } else {
                let handle = ProbeHandle(inner.next_handle);
                inner.next_handle += 1;

                let (state, reply) = inner
                    .queued
                    .remove(&key)
                    .unwrap_or((ProbeState::Pending, None));
                let resolved = !state.is_inflight();

                inner.transactions.insert(
                    handle,
                    Transaction {
                        key: key.clone(),
                        state,
                        reply,
                        listeners: vec![(zone, item)],
                    },
                );
                inner.by_key.insert(key, handle);

                (handle, resolved)
            }
        };

        if resolved {
            notify(item);
        }

        Ok(handle)
    }

    fn detach(&self, handle: ProbeHandle, item: ProbeItemId) {
        let mut inner = self.0.lock().unwrap();
        let Some(txn) = inner.transactions.get_mut(&handle) else {
            return;
        };
        txn.listeners.retain(|(_, listener)| *listener != item);
        if txn.listeners.is_empty() {
            let key = txn.key.clone();
            inner.transactions.remove(&handle);
            inner.by_key.remove(&key);
        }
    }

    fn state(&self, handle: ProbeHandle) -> ProbeState {
        self.0
            .lock()
            .unwrap()
            .transactions
            .get(&handle)
            .map(|t| t.state)
            .unwrap_or(ProbeState::Aborted)
    }

    fn reply(&self, handle: ProbeHandle) -> Option<ProbeReply> {
        self.0
            .lock()
            .unwrap()
            .transactions
            .get(&handle)
            .and_then(|t| t.reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::StaticHost;
    use crate::record::{RData, ResourceRecord};
    use crate::zone::Zone;
    use domain::base::iana::{Class, Rtype};
    use std::net::Ipv4Addr;
    use std::str::FromStr;
    use std::sync::Arc;

    fn name(s: &str) -> crate::record::DnsName {
        crate::record::DnsName::from_str(s).unwrap()
    }

    #[test]
    fn unopposed_probe_establishes_synchronously() {
        let coordinator = Arc::new(LoopbackCoordinator::new());
        let host = Arc::new(StaticHost::new(name("host.local")));
        let zone = Zone::new(coordinator.clone(), host);

        let rr = ResourceRecord::new(
            ResourceKey::new(Class::IN, Rtype::A, name("host.local")),
            120,
            RData::A(Ipv4Addr::new(192, 0, 2, 1)),
        );
        coordinator.queue_result(rr.key.probe_key(), ProbeState::Failure, None);
        zone.put(rr.clone(), true).unwrap();

        let id = zone.find_id(&rr).unwrap();
        assert_eq!(zone.item_state(id), Some(crate::zone::ItemState::Established));
    }

    #[test]
    fn probe_resolved_later_establishes_asynchronously() {
        let coordinator = Arc::new(LoopbackCoordinator::new());
        let host = Arc::new(StaticHost::new(name("host.local")));
        let zone = Zone::new(coordinator.clone(), host);

        let rr = ResourceRecord::new(
            ResourceKey::new(Class::IN, Rtype::A, name("host2.local")),
            120,
            RData::A(Ipv4Addr::new(192, 0, 2, 2)),
        );
        zone.put(rr.clone(), true).unwrap();
        let id = zone.find_id(&rr).unwrap();
        assert_eq!(zone.item_state(id), Some(crate::zone::ItemState::Probing));

        coordinator.resolve(&rr.key.probe_key(), ProbeState::Failure, None);
        assert_eq!(zone.item_state(id), Some(crate::zone::ItemState::Established));
    }
}
