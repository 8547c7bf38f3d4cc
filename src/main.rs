//! A small demo daemon that claims a hostname and a couple of DNS-SD service
//! instances on the link, then reports what the zone answers for them.
//!
//! This binary has no network transport of its own: probing runs against
//! the in-process [`mdns_zoned::testutil::LoopbackCoordinator`], which wins
//! every probe uncontested. A real daemon would plug in a coordinator that
//! actually sends and collects mDNS packets; the zone itself doesn't care
//! which it's given.

use std::process::exit;
use std::sync::Arc;

use domain::base::iana::{Class, Rtype};

use mdns_zoned::coordinator::ProbeState;
use mdns_zoned::host::StaticHost;
use mdns_zoned::netservice::ServiceInstance;
use mdns_zoned::record::{DnsName, RData, ResourceKey, ResourceRecord};
use mdns_zoned::testutil::LoopbackCoordinator;
use mdns_zoned::{config, logger, Zone};

#[tokio::main]
async fn main() {
    let config_path = std::env::var("MDNSD_CONFIG").unwrap_or(config::BASE_CONFIG_FILE.into());
    let bytes = match std::fs::read(&config_path) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("Failed to read config file at path {}: {}", config_path, e);
            exit(1);
        }
    };
    let config = match config::Config::try_from(&bytes[..]) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to parse config file at path {}: {}", config_path, e);
            exit(1);
        }
    };

    logger::Logger::new()
        .with_level(config.log.level)
        .with_probe_trace(config.log.probe_trace)
        .init()
        .expect("Failed to initialize custom logger");

    let hostname: DnsName = match config.hostname.parse() {
        Ok(n) => n,
        Err(e) => {
            log::error!(target: "zone", "invalid hostname {:?}: {}", config.hostname, e);
            exit(1);
        }
    };

    let coordinator = Arc::new(LoopbackCoordinator::new());
    let host = Arc::new(StaticHost::new(hostname.clone()));

    let zone = match config.zone_max {
        Some(max) => Zone::with_capacity(coordinator.clone(), host, max),
        None => Zone::new(coordinator.clone(), host),
    };

    let address_key = ResourceKey::new(Class::IN, Rtype::A, hostname.clone());
    coordinator.queue_result(address_key.probe_key(), ProbeState::Failure, None);
    let address_rr = ResourceRecord::new(
        address_key,
        120,
        RData::A(std::net::Ipv4Addr::new(192, 0, 2, 10)),
    );
    if let Err(e) = zone.put(address_rr, true) {
        log::error!(target: "zone", "failed to claim {}: {}", config.hostname, e);
        exit(1);
    }
    log::info!(target: "zone", "claimed {}", config.hostname);

    let printer = ServiceInstance {
        service_type: "_ipp._tcp.local".parse().unwrap(),
        instance_name: "Demo Printer._ipp._tcp.local".parse().unwrap(),
        hostname,
        priority: 0,
        weight: 0,
        port: 631,
        txt: vec![],
    };
    for rr in printer.records() {
        coordinator.queue_result(rr.key.probe_key(), ProbeState::Failure, None);
        if let Err(e) = zone.put(rr, true) {
            log::warn!(target: "zone", "failed to advertise service record: {}", e);
        }
    }

    let lookup = zone.lookup(
        &ResourceKey::new(Class::IN, Rtype::PTR, "_ipp._tcp.local".parse().unwrap()),
        0,
        false,
    );
    log::info!(
        target: "zone",
        "lookup for _ipp._tcp.local returned {} record(s)",
        lookup.answer.len()
    );

    let mut dump = Vec::new();
    zone.dump(&mut dump).expect("writing to a Vec never fails");
    log::info!(target: "zone", "final zone contents:\n{}", String::from_utf8_lossy(&dump));
}
