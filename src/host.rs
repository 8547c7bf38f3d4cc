//! The host-naming collaborator consumed on the conflict-callback path
//! (`spec.md` §4.2, §6): when an item withdraws because it lost a tie-break
//! on the host's own name, the host must rotate to a fresh candidate name
//! (RFC 6762 §9).

use crate::record::DnsName;

pub trait Host: Send + Sync {
    fn is_own_hostname(&self, name: &DnsName) -> bool;
    fn next_hostname(&self);
}

/// A fixed-hostname `Host` for the demo binary and tests. Counts
/// `next_hostname` calls instead of actually rotating, since the rotation
/// policy (RFC 6762 §9 "nameN" suffixing) lives outside this crate.
#[derive(Debug)]
pub struct StaticHost {
    hostname: DnsName,
    rotations: std::sync::atomic::AtomicU32,
}

impl StaticHost {
    pub fn new(hostname: DnsName) -> Self {
        StaticHost {
            hostname,
            rotations: std::sync::atomic::AtomicU32::new(0),
        }
    }

    pub fn rotations(&self) -> u32 {
        self.rotations.load(std::sync::atomic::Ordering::SeqCst)
    }
}

impl Host for StaticHost {
    fn is_own_hostname(&self, name: &DnsName) -> bool {
        &self.hostname == name
    }

    fn next_hostname(&self) {
        self.rotations
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        log::info!(target: "host", "own hostname lost a conflict, rotating to a new candidate");
    }
}
