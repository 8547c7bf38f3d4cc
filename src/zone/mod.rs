//! The zone: the set of RRs one scope claims as authoritative, indexed by
//! exact RR-key and by owner-name, with the probe/announce/defend lifecycle
//! that guarantees their uniqueness on the link (`spec.md` §3, §4.1).

pub mod item;

pub use item::{ItemId, ItemState};

use std::collections::HashMap;
use std::io::Write;
use std::sync::{Arc, RwLock};

use domain::base::iana::{Class, Rtype};

use crate::coordinator::{ProbeCoordinator, ProbeState};
use crate::error::{ErrorKind, Result, ZoneError};
use crate::host::Host;
use crate::record::{DnsName, ResourceKey, ResourceRecord, LLMNR_DEFAULT_TTL};
use item::ZoneItem;

/// Never allow more than this many entries (`spec.md` §3 invariant 5).
pub const ZONE_MAX: usize = 1024;

/// A resolved answer from [`Zone::lookup`].
#[derive(Debug, Default)]
pub struct LookupResult {
    pub answer: Vec<(Arc<ResourceRecord>, u32)>,
    pub soa: Option<(DnsName, u32, u32)>,
    pub tentative: bool,
}

impl LookupResult {
    fn empty() -> Self {
        LookupResult::default()
    }

    pub fn is_empty(&self) -> bool {
        self.answer.is_empty() && self.soa.is_none()
    }
}

struct ZoneInner {
    next_id: u64,
    items: HashMap<ItemId, ZoneItem>,
    by_key: HashMap<ResourceKey, Vec<ItemId>>,
    by_name: HashMap<DnsName, Vec<ItemId>>,
    coordinator: Arc<dyn ProbeCoordinator>,
    host: Arc<dyn Host>,
    max: usize,
}

/// Cheap-clone handle onto the zone's shared state, following the same
/// `Arc<RwLock<..>>` shape the teacher repo uses for its `Zones`/`Stats`
/// wrappers.
#[derive(Clone)]
pub struct Zone(Arc<RwLock<ZoneInner>>);

impl Zone {
    pub fn new(coordinator: Arc<dyn ProbeCoordinator>, host: Arc<dyn Host>) -> Self {
        Zone::with_capacity(coordinator, host, ZONE_MAX)
    }

    pub fn with_capacity(
        coordinator: Arc<dyn ProbeCoordinator>,
        host: Arc<dyn Host>,
        max: usize,
    ) -> Self {
        Zone(Arc::new(RwLock::new(ZoneInner {
            next_id: 0,
            items: HashMap::new(),
            by_key: HashMap::new(),
            by_name: HashMap::new(),
            coordinator,
            host,
            max,
        })))
    }

    /// Inserts `rr`. A deep-equal RR already present is a no-op success.
    /// Rejects pseudo classes/types. If `probe` is requested and no sibling
    /// on the same name is already `ESTABLISHED`, the item enters `PROBING`
    /// and attaches to an `ANY`-probe transaction for its owner-name.
    pub fn put(&self, rr: ResourceRecord, probe: bool) -> Result<()> {
        if rr.key.class_is_pseudo() || rr.key.type_is_pseudo() {
            return Err(ZoneError::new(
                ErrorKind::Invalid,
                "cannot claim a pseudo-class or pseudo-type resource record",
            ));
        }

        {
            let inner = self.0.read().unwrap();
            if find_deep_equal(&inner, &rr).is_some() {
                return Ok(());
            }
            if inner.items.len() >= inner.max {
                return Err(ZoneError::new(
                    ErrorKind::CapacityExceeded,
                    format!("zone already holds the maximum of {} items", inner.max),
                ));
            }
        }

        let rr = Arc::new(rr);
        let id = {
            let mut inner = self.0.write().unwrap();
            let id = ItemId(inner.next_id);
            inner.next_id += 1;

            let established_sibling = inner
                .by_name
                .get(&rr.key.name)
                .into_iter()
                .flatten()
                .any(|sibling| {
                    inner
                        .items
                        .get(sibling)
                        .map(|i| i.state == ItemState::Established)
                        .unwrap_or(false)
                });

            let initial_state = if !probe || established_sibling {
                ItemState::Established
            } else {
                ItemState::Probing
            };

            let item = ZoneItem::new(rr.clone(), initial_state, probe);
            inner.items.insert(id, item);
            inner.by_key.entry(rr.key.clone()).or_default().insert(0, id);
            inner
                .by_name
                .entry(rr.key.name.clone())
                .or_default()
                .insert(0, id);

            id
        };

        let needs_probe = {
            let inner = self.0.read().unwrap();
            inner.items[&id].state == ItemState::Probing
        };

        if needs_probe {
            if let Err(e) = self.start_probe(id) {
                self.remove_item(id);
                return Err(e);
            }
        }

        Ok(())
    }

    /// Finds the deep-equal item, if any, unlinks it from both indexes,
    /// detaches its probe attachment, and drops it. No-op if absent.
    pub fn remove(&self, rr: &ResourceRecord) {
        let id = {
            let inner = self.0.read().unwrap();
            find_deep_equal(&inner, rr)
        };
        if let Some(id) = id {
            self.remove_item(id);
        }
    }

    /// Removes all items; both indexes end empty.
    pub fn flush(&self) {
        let ids: Vec<ItemId> = {
            let inner = self.0.read().unwrap();
            inner.items.keys().copied().collect()
        };
        for id in ids {
            self.remove_item(id);
        }
    }

    fn remove_item(&self, id: ItemId) {
        let (coordinator, handle) = {
            let mut inner = self.0.write().unwrap();
            let Some(item) = inner.items.remove(&id) else {
                return;
            };

            unlink(&mut inner.by_key, &item.rr.key, id);
            unlink_by_name(&mut inner.by_name, &item.rr.key.name, id);

            (inner.coordinator.clone(), item.probe_transaction)
        };

        if let Some(handle) = handle {
            coordinator.detach(handle, id);
        }
    }

    /// Starts (or re-attaches to) a probe transaction for `id`'s owner-name.
    fn start_probe(&self, id: ItemId) -> Result<()> {
        let (coordinator, key) = {
            let inner = self.0.read().unwrap();
            let item = inner.items.get(&id).expect("item just inserted");
            (inner.coordinator.clone(), item.rr.key.probe_key())
        };

        {
            let mut inner = self.0.write().unwrap();
            if let Some(item) = inner.items.get_mut(&id) {
                item.block_ready += 1;
            }
        }

        let zone = self.clone();
        let attach_result = {
            let mut notify_cb = |notified: ItemId| zone.notify(notified);
            coordinator.attach(self.clone(), id, key, &mut notify_cb)
        };

        {
            let mut inner = self.0.write().unwrap();
            if let Some(item) = inner.items.get_mut(&id) {
                item.block_ready -= 1;
            }
        }

        let handle = attach_result?;

        {
            let mut inner = self.0.write().unwrap();
            if let Some(item) = inner.items.get_mut(&id) {
                item.probe_transaction = Some(handle);
            }
        }

        self.notify(id);
        Ok(())
    }

    /// Called by a [`ProbeCoordinator`] whenever `id`'s attached transaction
    /// changes state. A no-op while `block_ready > 0` or while the
    /// transaction is still in `{Null, Pending, Validating}`.
    pub fn notify(&self, id: ItemId) {
        let (coordinator, handle, state, rr, item_state) = {
            let inner = self.0.read().unwrap();
            let Some(item) = inner.items.get(&id) else {
                return;
            };
            if item.block_ready > 0 {
                return;
            }
            let Some(handle) = item.probe_transaction else {
                return;
            };
            let state = inner.coordinator.state(handle);
            if state.is_inflight() {
                return;
            }
            (
                inner.coordinator.clone(),
                handle,
                state,
                item.rr.clone(),
                item.state,
            )
        };

        let exempt = matches!(&rr.data, crate::record::RData::Ptr { target }
            if crate::record::is_service_enumeration_ptr_target(target));

        let we_lost = if state == ProbeState::Success && !exempt {
            if !matches!(item_state, ItemState::Established | ItemState::Verifying) {
                log::debug!(target: "probe", "got a successful probe for a not-yet-established RR, we lost");
                true
            } else {
                // The sender's address winning means *they* keep the name.
                let reply = coordinator.reply(handle);
                let sender_wins = reply
                    .map(|r| addr_bytes(r.sender) > addr_bytes(r.destination))
                    .unwrap_or(false);
                if sender_wins {
                    log::debug!(target: "probe", "got a successful probe reply for an established RR and lost tie-break");
                }
                sender_wins
            }
        } else {
            false
        };

        if we_lost {
            self.withdraw(id);
            return;
        }

        log::debug!(target: "probe", "record {:?} successfully probed", rr.key);
        coordinator.detach(handle, id);
        let mut inner = self.0.write().unwrap();
        if let Some(item) = inner.items.get_mut(&id) {
            item.probe_transaction = None;
            item.state = ItemState::Established;
        }
    }

    /// Transitions `id` to `WITHDRAWN`, detaching any probe, and fires the
    /// conflict callback if the withdrawn name is the host's own.
    fn withdraw(&self, id: ItemId) {
        let (coordinator, handle, host, name) = {
            let mut inner = self.0.write().unwrap();
            let Some(item) = inner.items.get_mut(&id) else {
                return;
            };
            if !item.state.is_visible() {
                return;
            }
            log::info!(target: "zone", "detected conflict on {:?}", item.rr.key);
            let handle = item.probe_transaction.take();
            item.state = ItemState::Withdrawn;
            (inner.coordinator.clone(), handle, inner.host.clone(), item.rr.key.name.clone())
        };

        if let Some(handle) = handle {
            coordinator.detach(handle, id);
        }

        if host.is_own_hostname(&name) {
            host.next_hostname();
        }
    }

    /// Re-probes `id` if it is currently `ESTABLISHED`; a no-op otherwise.
    /// On attach failure the item falls back to `ESTABLISHED` and the
    /// failure is only logged (verify failures are not propagated, per
    /// `spec.md` §7).
    fn verify_item(&self, id: ItemId) {
        {
            let mut inner = self.0.write().unwrap();
            let Some(item) = inner.items.get_mut(&id) else {
                return;
            };
            if item.state != ItemState::Established {
                return;
            }
            item.state = ItemState::Verifying;
        }

        if let Err(e) = self.start_probe(id) {
            log::error!(target: "probe", "failed to start probing to verify RR: {e}");
            let mut inner = self.0.write().unwrap();
            if let Some(item) = inner.items.get_mut(&id) {
                item.state = ItemState::Established;
            }
        }
    }

    /// Observed a remote RR with the same name as ours. Returns 0 if we
    /// hold nothing on that name, or if the RR is our own echo (deep-equal
    /// to an item we already hold). Otherwise re-verifies every other item
    /// on the name and returns how many.
    pub fn check_conflicts(&self, rr: &ResourceRecord) -> usize {
        let ids: Vec<ItemId> = {
            let inner = self.0.read().unwrap();
            let Some(siblings) = inner.by_name.get(&rr.key.name) else {
                return 0;
            };
            if find_deep_equal(&inner, rr).is_some() {
                return 0;
            }
            siblings
                .iter()
                .copied()
                .filter(|id| {
                    inner
                        .items
                        .get(id)
                        .map(|item| !item.rr.deep_eq(rr))
                        .unwrap_or(false)
                })
                .collect()
        };

        for id in &ids {
            self.verify_item(*id);
        }
        ids.len()
    }

    /// An external notification points at a possibly-conflicted name:
    /// re-verify every item on it.
    pub fn verify_conflicts(&self, name: &DnsName) -> usize {
        let ids: Vec<ItemId> = {
            let inner = self.0.read().unwrap();
            inner
                .by_name
                .get(name)
                .map(|v| v.clone())
                .unwrap_or_default()
        };
        for id in &ids {
            self.verify_item(*id);
        }
        ids.len()
    }

    /// Re-verifies every item in the zone.
    pub fn verify_all(&self) {
        let ids: Vec<ItemId> = {
            let inner = self.0.read().unwrap();
            inner.items.keys().copied().collect()
        };
        for id in ids {
            self.verify_item(id);
        }
    }

    /// Answers a lookup for `key`. Wildcard (`type = ANY` or `class = ANY`)
    /// queries scan `by_name`; specific queries scan `by_key` first, falling
    /// back to a same-name SOA placeholder. See `spec.md` §4.1.
    pub fn lookup(&self, key: &ResourceKey, ifindex: u32, want_tentative: bool) -> LookupResult {
        let inner = self.0.read().unwrap();

        let wildcard = key.rtype == Rtype::ANY || key.class == Class::ANY;

        let mut answer = Vec::new();
        let mut need_soa = false;
        let mut tentative = true;

        if wildcard {
            let mut found = false;
            if let Some(ids) = inner.by_name.get(&key.name) {
                for id in ids {
                    let Some(item) = inner.items.get(id) else { continue };
                    if !item.state.is_visible() {
                        continue;
                    }
                    found = true;
                    if key.matches(&item.rr.key) {
                        if item.state != ItemState::Probing {
                            tentative = false;
                        }
                        answer.push((item.rr.clone(), ifindex));
                    }
                }
            }
            if found && answer.is_empty() {
                need_soa = true;
            }
        } else {
            let mut found = false;
            if let Some(ids) = inner.by_key.get(key) {
                for id in ids {
                    let Some(item) = inner.items.get(id) else { continue };
                    if !item.state.is_visible() {
                        continue;
                    }
                    found = true;
                    if item.state != ItemState::Probing {
                        tentative = false;
                    }
                    answer.push((item.rr.clone(), ifindex));
                }
            }
            if !found {
                if let Some(ids) = inner.by_name.get(&key.name) {
                    for id in ids {
                        let Some(item) = inner.items.get(id) else { continue };
                        if !item.state.is_visible() {
                            continue;
                        }
                        if item.state != ItemState::Probing {
                            tentative = false;
                        }
                        need_soa = true;
                    }
                }
            }
        }

        if answer.is_empty() && !need_soa {
            return LookupResult::empty();
        }

        if !want_tentative && tentative {
            return LookupResult::empty();
        }

        LookupResult {
            answer,
            soa: if need_soa {
                Some((key.name.clone(), LLMNR_DEFAULT_TTL, ifindex))
            } else {
                None
            },
            tentative,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.read().unwrap().items.is_empty()
    }

    pub fn size(&self) -> usize {
        self.0.read().unwrap().items.len()
    }

    /// Emits one textual RR per line.
    pub fn dump(&self, writer: &mut dyn Write) -> std::io::Result<()> {
        let inner = self.0.read().unwrap();
        for item in inner.items.values() {
            writeln!(writer, "\t{:?}", item.rr)?;
        }
        Ok(())
    }

    /// The state of the deep-equal item for `rr`, if the zone holds one.
    /// Introspection helper alongside [`Zone::dump`]; not itself part of
    /// the probe/lookup data path.
    pub fn state_of(&self, rr: &ResourceRecord) -> Option<ItemState> {
        let inner = self.0.read().unwrap();
        find_deep_equal(&inner, rr).map(|id| inner.items[&id].state)
    }

    pub(crate) fn find_id(&self, rr: &ResourceRecord) -> Option<ItemId> {
        let inner = self.0.read().unwrap();
        find_deep_equal(&inner, rr)
    }

    pub(crate) fn item_state(&self, id: ItemId) -> Option<ItemState> {
        self.0.read().unwrap().items.get(&id).map(|i| i.state)
    }
}

fn find_deep_equal(inner: &ZoneInner, rr: &ResourceRecord) -> Option<ItemId> {
    inner
        .by_key
        .get(&rr.key)?
        .iter()
        .find(|id| inner.items[id].rr.deep_eq(rr))
        .copied()
}

fn unlink(by_key: &mut HashMap<ResourceKey, Vec<ItemId>>, key: &ResourceKey, id: ItemId) {
    if let Some(chain) = by_key.get_mut(key) {
        chain.retain(|existing| *existing != id);
        if chain.is_empty() {
            by_key.remove(key);
        }
    }
}

fn unlink_by_name(by_name: &mut HashMap<DnsName, Vec<ItemId>>, name: &DnsName, id: ItemId) {
    if let Some(chain) = by_name.get_mut(name) {
        chain.retain(|existing| *existing != id);
        if chain.is_empty() {
            by_name.remove(name);
        }
    }
}

fn addr_bytes(addr: std::net::IpAddr) -> Vec<u8> {
    match addr {
        std::net::IpAddr::V4(v4) => v4.octets().to_vec(),
        std::net::IpAddr::V6(v6) => v6.octets().to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::StaticHost;
    use crate::record::RData;
    use crate::testutil::LoopbackCoordinator;
    use std::net::Ipv4Addr;
    use std::str::FromStr;

    fn name(s: &str) -> DnsName {
        DnsName::from_str(s).unwrap()
    }

    fn zone() -> (Zone, Arc<LoopbackCoordinator>) {
        let coordinator = Arc::new(LoopbackCoordinator::new());
        let host = Arc::new(StaticHost::new(name("host.local")));
        (Zone::new(coordinator.clone(), host), coordinator)
    }

    fn a_rr(n: &str, octet: u8) -> ResourceRecord {
        ResourceRecord::new(
            ResourceKey::new(Class::IN, Rtype::A, name(n)),
            120,
            RData::A(Ipv4Addr::new(192, 0, 2, octet)),
        )
    }

    /// Invariant 1: every item is reachable from exactly one `by_key` chain
    /// and exactly one `by_name` chain.
    #[test]
    fn item_indexed_exactly_once_in_each_chain() {
        let (zone, coordinator) = zone();
        let rr = a_rr("printer.local", 10);
        coordinator.queue_result(rr.key.probe_key(), ProbeState::Failure, None);
        zone.put(rr.clone(), true).unwrap();

        let inner = zone.0.read().unwrap();
        let by_key_hits: usize = inner.by_key.values().map(|chain| chain.len()).sum();
        assert_eq!(by_key_hits, 1);
        let by_name_hits: usize = inner.by_name.values().map(|chain| chain.len()).sum();
        assert_eq!(by_name_hits, 1);
    }

    /// Invariants 2/3: map entries exist iff their chain is non-empty.
    #[test]
    fn removing_the_only_item_drops_both_map_entries() {
        let (zone, coordinator) = zone();
        let rr = a_rr("printer.local", 10);
        coordinator.queue_result(rr.key.probe_key(), ProbeState::Failure, None);
        zone.put(rr.clone(), true).unwrap();
        zone.remove(&rr);

        let inner = zone.0.read().unwrap();
        assert!(!inner.by_key.contains_key(&rr.key));
        assert!(!inner.by_name.contains_key(&rr.key.name));
    }

    /// Law: `put(rr); put(rr)` is idempotent (invariant 4: no duplicate RRs).
    #[test]
    fn duplicate_put_is_coalesced() {
        let (zone, coordinator) = zone();
        let rr = a_rr("printer.local", 10);
        coordinator.queue_result(rr.key.probe_key(), ProbeState::Failure, None);
        zone.put(rr.clone(), true).unwrap();
        zone.put(rr.clone(), true).unwrap();
        assert_eq!(zone.size(), 1);
    }

    /// Law: `put(rr); remove(rr)` returns the zone to its prior (empty) state.
    #[test]
    fn put_then_remove_is_a_no_op() {
        let (zone, coordinator) = zone();
        let rr = a_rr("printer.local", 10);
        coordinator.queue_result(rr.key.probe_key(), ProbeState::Failure, None);
        zone.put(rr.clone(), true).unwrap();
        zone.remove(&rr);
        assert!(zone.is_empty());
    }

    /// Law: `flush()` establishes `is_empty()`.
    #[test]
    fn flush_empties_the_zone() {
        let (zone, coordinator) = zone();
        for i in 0..5u8 {
            let rr = a_rr(&format!("host{i}.local"), i);
            coordinator.queue_result(rr.key.probe_key(), ProbeState::Failure, None);
            zone.put(rr, true).unwrap();
        }
        assert_eq!(zone.size(), 5);
        zone.flush();
        assert!(zone.is_empty());
    }

    /// Invariant 5: the zone rejects insertion past `ZONE_MAX` (a small cap
    /// here, via `with_capacity`).
    #[test]
    fn capacity_cap_is_enforced() {
        let coordinator = Arc::new(LoopbackCoordinator::new());
        let host = Arc::new(StaticHost::new(name("host.local")));
        let zone = Zone::with_capacity(coordinator.clone(), host, 2);

        for i in 0..2u8 {
            let rr = a_rr(&format!("host{i}.local"), i);
            coordinator.queue_result(rr.key.probe_key(), ProbeState::Failure, None);
            zone.put(rr, true).unwrap();
        }

        let overflow = a_rr("host2.local", 2);
        coordinator.queue_result(overflow.key.probe_key(), ProbeState::Failure, None);
        let err = zone.put(overflow, true).unwrap_err();
        assert_eq!(err.kind, ErrorKind::CapacityExceeded);
        assert_eq!(zone.size(), 2);
    }

    /// Invariant 6: a withdrawn item holds no probe transaction.
    #[test]
    fn withdrawn_item_has_no_probe_transaction() {
        let (zone, coordinator) = zone();
        let rr = a_rr("printer.local", 10);
        zone.put(rr.clone(), true).unwrap();
        let id = zone.find_id(&rr).unwrap();
        assert_eq!(zone.item_state(id), Some(ItemState::Probing));

        coordinator.resolve(
            &rr.key.probe_key(),
            ProbeState::Success,
            Some(crate::coordinator::ProbeReply {
                sender: "192.0.2.99".parse().unwrap(),
                destination: "192.0.2.10".parse().unwrap(),
            }),
        );

        assert_eq!(zone.item_state(id), Some(ItemState::Withdrawn));
        let inner = zone.0.read().unwrap();
        assert!(inner.items[&id].probe_transaction.is_none());
    }

    /// `check_conflicts` on a remote RR re-verifies every same-name sibling
    /// that isn't a deep-equal echo of our own, moving `ESTABLISHED` items to
    /// `VERIFYING`.
    #[test]
    fn check_conflicts_verifies_established_siblings() {
        let (zone, coordinator) = zone();
        let a = a_rr("printer.local", 10);
        coordinator.queue_result(a.key.probe_key(), ProbeState::Failure, None);
        zone.put(a.clone(), true).unwrap();
        let id = zone.find_id(&a).unwrap();
        assert_eq!(zone.item_state(id), Some(ItemState::Established));

        let remote = a_rr("printer.local", 99);
        assert_eq!(zone.check_conflicts(&remote), 1);
        assert_eq!(zone.item_state(id), Some(ItemState::Verifying));
    }

    /// `check_conflicts` returns 0 for our own echo (deep-equal RR).
    #[test]
    fn check_conflicts_ignores_own_echo() {
        let (zone, coordinator) = zone();
        let a = a_rr("printer.local", 10);
        coordinator.queue_result(a.key.probe_key(), ProbeState::Failure, None);
        zone.put(a.clone(), true).unwrap();
        assert_eq!(zone.check_conflicts(&a), 0);
    }

    /// Rejects pseudo-class / pseudo-type RRs (`Invalid`).
    #[test]
    fn rejects_pseudo_type() {
        let (zone, _coordinator) = zone();
        let rr = ResourceRecord::new(
            ResourceKey::new(Class::IN, Rtype::OPT, name("printer.local")),
            120,
            RData::Txt { items: vec![] },
        );
        let err = zone.put(rr, false).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Invalid);
    }

    /// Same-name, different-type lookup yields a negative SOA placeholder,
    /// not an empty no-op result.
    #[test]
    fn lookup_same_name_different_type_yields_soa() {
        let (zone, coordinator) = zone();
        let rr = a_rr("a.local", 1);
        coordinator.queue_result(rr.key.probe_key(), ProbeState::Failure, None);
        zone.put(rr, false).unwrap();

        let result = zone.lookup(
            &ResourceKey::new(Class::IN, Rtype::AAAA, name("a.local")),
            0,
            false,
        );
        assert!(result.answer.is_empty());
        let (soa_name, soa_ttl, _ifindex) = result.soa.expect("expected SOA placeholder");
        assert_eq!(soa_name, name("a.local"));
        assert_eq!(soa_ttl, LLMNR_DEFAULT_TTL);
        assert!(!result.tentative);
    }

    /// A `put(probe=true)` that lands on a name with an already-`ESTABLISHED`
    /// sibling establishes immediately rather than probing (RFC 6762:
    /// probing is name-scoped, not key-scoped).
    #[test]
    fn put_with_established_sibling_skips_probing() {
        let (zone, coordinator) = zone();
        let a = a_rr("printer.local", 10);
        coordinator.queue_result(a.key.probe_key(), ProbeState::Failure, None);
        zone.put(a.clone(), true).unwrap();
        let a_id = zone.find_id(&a).unwrap();
        assert_eq!(zone.item_state(a_id), Some(ItemState::Established));

        // No queued result for this key's probe: if it actually probed, it
        // would stay Probing forever (the Loopback coordinator never
        // resolves it without a queued/driven outcome).
        let aaaa = ResourceRecord::new(
            ResourceKey::new(Class::IN, Rtype::AAAA, name("printer.local")),
            120,
            RData::Aaaa(std::net::Ipv6Addr::LOCALHOST),
        );
        zone.put(aaaa.clone(), true).unwrap();
        let aaaa_id = zone.find_id(&aaaa).unwrap();
        assert_eq!(zone.item_state(aaaa_id), Some(ItemState::Established));
    }
}
