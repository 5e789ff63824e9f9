use std::net::{IpAddr, Ipv4Addr};

/// Enumerate non-loopback IPv4 interface addresses using the `getifaddrs` crate.
/// Returns an empty Vec if enumeration fails.
pub fn list_non_loopback_v4() -> Vec<Ipv4Addr> {
    use getifaddrs::{Address, InterfaceFlags};

    let Ok(ifaces) = getifaddrs::getifaddrs() else {
        return vec![];
    };
    ifaces
        .filter(|i| !i.flags.contains(InterfaceFlags::LOOPBACK))
        .filter_map(|i| match &i.address {
            Address::V4(net_addr) => Some(net_addr.address),
            _ => None,
        })
        .collect()
}

/// Pick the address other devices on the LAN are most likely to reach us by.
///
/// Loopback, unspecified and link-local (169.254/16) addresses are never
/// chosen. RFC 1918 private addresses win over anything else; otherwise the
/// first remaining candidate is used.
pub fn pick_lan_address(candidates: &[Ipv4Addr]) -> Option<Ipv4Addr> {
    let usable: Vec<Ipv4Addr> = candidates
        .iter()
        .copied()
        .filter(|a| !a.is_loopback() && !a.is_unspecified() && !a.is_link_local())
        .collect();

    usable
        .iter()
        .copied()
        .find(Ipv4Addr::is_private)
        .or_else(|| usable.first().copied())
}

/// The address the OS would use for outbound traffic, if it is IPv4.
fn outbound_v4() -> Option<Ipv4Addr> {
    match local_ip_address::local_ip() {
        Ok(IpAddr::V4(addr)) => Some(addr),
        Ok(IpAddr::V6(_)) => None,
        Err(e) => {
            tracing::debug!("Cannot determine local IP: {}", e);
            None
        }
    }
}

/// Resolve the LAN-facing IPv4 address of this machine.
///
/// Falls back to 127.0.0.1 (with a warning) when the host has no usable
/// interface; catalog URLs will then only work on this machine.
pub fn lan_ipv4() -> Ipv4Addr {
    if let Some(addr) = pick_lan_address(&list_non_loopback_v4()) {
        return addr;
    }
    if let Some(addr) = outbound_v4().and_then(|a| pick_lan_address(&[a])) {
        return addr;
    }
    tracing::warn!("No LAN IPv4 address found, catalog URLs will use 127.0.0.1");
    Ipv4Addr::LOCALHOST
}
