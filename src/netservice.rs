//! Synthesizes the PTR/SRV/TXT triad that advertises one DNS-SD service
//! instance (RFC 6763), the way `resolved-dns-netservice.c`'s
//! `dns_netservice_update_rrs` assembles them from a service definition.
//!
//! Loading `.dnssd`/`.netservice` definition files from disk is out of
//! scope here; this module only builds the records once the caller already
//! knows the service's `type`, `instance_name`, target `hostname` and SRV
//! parameters.

use bytes::Bytes;
use domain::base::iana::{Class, Rtype};

use crate::record::{DnsName, RData, ResourceKey, ResourceRecord, LLMNR_DEFAULT_TTL};

/// One DNS-SD service instance to advertise.
#[derive(Debug, Clone)]
pub struct ServiceInstance {
    /// e.g. `_ipp._tcp`
    pub service_type: DnsName,
    /// e.g. `My Printer`
    pub instance_name: DnsName,
    pub hostname: DnsName,
    pub priority: u16,
    pub weight: u16,
    pub port: u16,
    pub txt: Vec<Bytes>,
}

impl ServiceInstance {
    /// The three RRs `Zone::put` should claim for this instance: the
    /// type-enumeration PTR, the instance's SRV, and its TXT.
    pub fn records(&self) -> [ResourceRecord; 3] {
        let ptr = ResourceRecord::new(
            ResourceKey::new(Class::IN, Rtype::PTR, self.service_type.clone()),
            LLMNR_DEFAULT_TTL,
            RData::Ptr {
                target: self.instance_name.clone(),
            },
        );

        let srv = ResourceRecord::new(
            ResourceKey::new(Class::IN, Rtype::SRV, self.instance_name.clone()),
            LLMNR_DEFAULT_TTL,
            RData::Srv {
                priority: self.priority,
                weight: self.weight,
                port: self.port,
                target: self.hostname.clone(),
            },
        );

        let txt = ResourceRecord::new(
            ResourceKey::new(Class::IN, Rtype::TXT, self.instance_name.clone()),
            LLMNR_DEFAULT_TTL,
            txt_record(self.txt.clone()),
        );

        [ptr, srv, txt]
    }
}

/// RFC 6763 §6.1: an empty TXT attribute set is advertised as a single RR
/// holding one zero-length string, not a TXT RR with no items at all.
pub fn txt_record(items: Vec<Bytes>) -> RData {
    if items.is_empty() {
        RData::Txt {
            items: vec![Bytes::new()],
        }
    } else {
        RData::Txt { items }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn empty_txt_becomes_single_empty_string() {
        match txt_record(vec![]) {
            RData::Txt { items } => {
                assert_eq!(items.len(), 1);
                assert!(items[0].is_empty());
            }
            _ => panic!("expected Txt"),
        }
    }

    #[test]
    fn non_empty_txt_is_passed_through() {
        let items = vec![Bytes::from_static(b"txtvers=1")];
        match txt_record(items.clone()) {
            RData::Txt { items: got } => assert_eq!(got, items),
            _ => panic!("expected Txt"),
        }
    }

    #[test]
    fn service_instance_synthesizes_ptr_srv_txt() {
        let instance = ServiceInstance {
            service_type: DnsName::from_str("_ipp._tcp.local").unwrap(),
            instance_name: DnsName::from_str("My Printer._ipp._tcp.local").unwrap(),
            hostname: DnsName::from_str("printer.local").unwrap(),
            priority: 0,
            weight: 0,
            port: 631,
            txt: vec![],
        };

        let [ptr, srv, txt] = instance.records();
        assert_eq!(ptr.key.rtype, Rtype::PTR);
        assert_eq!(srv.key.rtype, Rtype::SRV);
        assert_eq!(txt.key.rtype, Rtype::TXT);
        assert!(matches!(ptr.data, RData::Ptr { .. }));
    }
}
