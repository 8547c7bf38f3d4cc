//! The RR data model: [`ResourceKey`], [`ResourceRecord`] and their payloads.
//!
//! Names use `domain`'s `Name<Bytes>`, which already compares and hashes
//! DNS names case-insensitively on their canonical (escaped, dot-separated)
//! form — exactly the normalization the zone's indexes need.

use std::net::{Ipv4Addr, Ipv6Addr};

use bytes::Bytes;
use domain::base::iana::{Class, Rtype};
use domain::base::Name;

/// A DNS name, case-insensitively equal and hashed per `domain`'s `Name`.
pub type DnsName = Name<Bytes>;

/// The LLMNR/MDNS negative-answer placeholder TTL (RFC 6762 §10).
pub const LLMNR_DEFAULT_TTL: u32 = 120;

/// `(class, type, name)`. Two keys are equal iff all three fields match,
/// `name` under DNS-name equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceKey {
    pub class: Class,
    pub rtype: Rtype,
    pub name: DnsName,
}

impl ResourceKey {
    pub fn new(class: Class, rtype: Rtype, name: DnsName) -> Self {
        ResourceKey { class, rtype, name }
    }

    /// The `(class, ANY, name)` key a probe transaction is keyed by.
    pub fn probe_key(&self) -> ResourceKey {
        ResourceKey::new(self.class, Rtype::ANY, self.name.clone())
    }

    /// Pseudo classes (e.g. `ANY`, `NONE`) can't be stored as a concrete RR's class.
    pub fn class_is_pseudo(&self) -> bool {
        matches!(self.class, Class::ANY | Class::NONE)
    }

    /// Pseudo types (e.g. `ANY`, `OPT`, `TSIG`) can't be stored as a concrete RR's type.
    pub fn type_is_pseudo(&self) -> bool {
        matches!(
            self.rtype,
            Rtype::ANY
                | Rtype::OPT
                | Rtype::TSIG
                | Rtype::TKEY
                | Rtype::IXFR
                | Rtype::AXFR
                | Rtype::MAILA
                | Rtype::MAILB
        )
    }

    /// MDNS wildcard matching: `ANY` class/type in `self` (the query) matches
    /// anything in `other` (a stored RR's key); `other`'s name is assumed
    /// already selected (by the `by_name`/`by_key` chain traversal).
    pub fn matches(&self, other: &ResourceKey) -> bool {
        let class_ok = self.class == Class::ANY || self.class == other.class;
        let type_ok = self.rtype == Rtype::ANY || self.rtype == other.rtype;
        class_ok && type_ok
    }
}

/// An immutable resource record: a key, a TTL, and type-specific payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub key: ResourceKey,
    pub ttl: u32,
    pub data: RData,
}

impl ResourceRecord {
    pub fn new(key: ResourceKey, ttl: u32, data: RData) -> Self {
        ResourceRecord { key, ttl, data }
    }

    /// Deep RR equality per RFC 2136's RRset-equality rule: name, class,
    /// type and RDATA are compared; TTL is not (a TTL refresh of the same
    /// data is the same record, not a new one).
    pub fn deep_eq(&self, other: &ResourceRecord) -> bool {
        self.key == other.key && self.data == other.data
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RData {
    A(Ipv4Addr),
    Aaaa(Ipv6Addr),
    Ptr {
        target: DnsName,
    },
    Srv {
        priority: u16,
        weight: u16,
        port: u16,
        target: DnsName,
    },
    Txt {
        items: Vec<Bytes>,
    },
}

impl RData {
    pub fn rtype(&self) -> Rtype {
        match self {
            RData::A(_) => Rtype::A,
            RData::Aaaa(_) => Rtype::AAAA,
            RData::Ptr { .. } => Rtype::PTR,
            RData::Srv { .. } => Rtype::SRV,
            RData::Txt { .. } => Rtype::TXT,
        }
    }
}

/// `true` iff `name`'s last two labels are `_tcp.local` or `_udp.local` —
/// the DNS-SD service-enumeration PTR exemption from probe tie-break.
pub fn is_service_enumeration_ptr_target(name: &DnsName) -> bool {
    let lowered = name.to_string().to_ascii_lowercase();
    lowered.ends_with("_tcp.local") || lowered.ends_with("_udp.local")
}
