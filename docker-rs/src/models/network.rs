// Copyright (c) Microsoft. All rights reserved.

use std::collections::BTreeMap;

use super::PortBinding;

docker_model! {
    pub struct Network {
        "Name" => name: String,
        "Id" => id: String,
        "Created" => created: String,
        "Scope" => scope: String,
        "Driver" => driver: String,
        "EnableIPv6" => enable_ipv6: bool,
        "IPAM" => ipam: Ipam,
        "Internal" => internal: bool,
        "Attachable" => attachable: bool,
        "Ingress" => ingress: bool,
        "Containers" => containers: BTreeMap<String, NetworkContainer>,
        "Options" => options: BTreeMap<String, String>,
        "Labels" => labels: BTreeMap<String, String>,
    }
}

docker_model! {
    pub struct NetworkContainer {
        "Name" => name: String,
        "EndpointID" => endpoint_id: String,
        "MacAddress" => mac_address: String,
        "IPv4Address" => ipv4_address: String,
        "IPv6Address" => ipv6_address: String,
    }
}

docker_model! {
    pub struct Ipam {
        /// Name of the IPAM driver to use.
        "Driver" => driver: String = "default",
        /// List of IPAM configuration options, specified as a map:
        /// `{"Subnet": <CIDR>, "IPRange": <CIDR>, "Gateway": <IP address>,
        /// "AuxAddress": <device_name:IP address>}`
        "Config" => config: Vec<IpamConfig>,
        /// Driver-specific options, specified as a map.
        "Options" => options: BTreeMap<String, String>,
    }
}

docker_model! {
    pub struct IpamConfig {
        "Subnet" => subnet: String,
        "IPRange" => ip_range: String,
        "Gateway" => gateway: String,
        "AuxiliaryAddresses" => auxiliary_addresses: BTreeMap<String, String>,
    }
}

docker_model! {
    /// Body of `POST /networks/create`.
    pub struct NetworkCreateRequest {
        /// The network's name.
        "Name" => name: String,
        /// Check for networks with duplicate names.
        "CheckDuplicate" => check_duplicate: bool,
        /// Name of the network driver plugin to use.
        "Driver" => driver: String = "bridge",
        /// Restrict external access to the network.
        "Internal" => internal: bool,
        /// Globally scoped network is manually attachable by regular
        /// containers from workers in swarm mode.
        "Attachable" => attachable: bool,
        /// Ingress network is the network which provides the routing-mesh in
        /// swarm mode.
        "Ingress" => ingress: bool,
        "IPAM" => ipam: Ipam,
        /// Enable IPv6 on the network.
        "EnableIPv6" => enable_ipv6: bool,
        /// Network specific options to be used by the drivers.
        "Options" => options: BTreeMap<String, String>,
        "Labels" => labels: BTreeMap<String, String>,
    }
}

docker_model! {
    pub struct NetworkCreateResponse {
        /// The ID of the created network.
        "Id" => id: String,
        "Warning" => warning: String,
    }
}

docker_model! {
    pub struct NetworkConnectRequest {
        /// The ID or name of the container to connect to the network.
        "Container" => container: String,
        "EndpointConfig" => endpoint_config: EndpointSettings,
    }
}

docker_model! {
    pub struct NetworkDisconnectRequest {
        /// The ID or name of the container to disconnect from the network.
        "Container" => container: String,
        /// Force the container to disconnect from the network.
        "Force" => force: bool,
    }
}

docker_model! {
    pub struct NetworkPruneResponse {
        /// Networks that were deleted
        "NetworksDeleted" => networks_deleted: Vec<String>,
    }
}

docker_model! {
    /// NetworkSettings exposes the network settings in the API
    pub struct NetworkSettings {
        /// Name of the network's bridge (for example, `docker0`).
        "Bridge" => bridge: String,
        /// SandboxID uniquely represents a container's network stack.
        "SandboxID" => sandbox_id: String,
        "HairpinMode" => hairpin_mode: bool,
        "LinkLocalIPv6Address" => link_local_ipv6_address: String,
        "LinkLocalIPv6PrefixLen" => link_local_ipv6_prefix_len: i64,
        /// Port mapping from container port to the host bindings. A `null`
        /// binding list means the port is exposed but not published.
        "Ports" => ports: BTreeMap<String, Option<Vec<PortBinding>>>,
        "SandboxKey" => sandbox_key: String,
        "SecondaryIPAddresses" => secondary_ip_addresses: Option<Vec<Address>>,
        "SecondaryIPv6Addresses" => secondary_ipv6_addresses: Option<Vec<Address>>,
        "EndpointID" => endpoint_id: String,
        "Gateway" => gateway: String,
        "GlobalIPv6Address" => global_ipv6_address: String,
        "GlobalIPv6PrefixLen" => global_ipv6_prefix_len: i64,
        "IPAddress" => ip_address: String,
        "IPPrefixLen" => ip_prefix_len: i64,
        "IPv6Gateway" => ipv6_gateway: String,
        "MacAddress" => mac_address: String,
        /// Information about all networks that the container is connected to.
        "Networks" => networks: BTreeMap<String, EndpointSettings>,
    }
}

docker_model! {
    /// Configuration for a network endpoint.
    pub struct EndpointSettings {
        "IPAMConfig" => ipam_config: Option<EndpointIpamConfig>,
        "Links" => links: Vec<String>,
        "Aliases" => aliases: Vec<String>,
        /// Unique ID of the network.
        "NetworkID" => network_id: String,
        /// Unique ID for the service endpoint in a Sandbox.
        "EndpointID" => endpoint_id: String,
        /// Gateway address for this network.
        "Gateway" => gateway: String,
        /// IPv4 address.
        "IPAddress" => ip_address: String,
        /// Mask length of the IPv4 address.
        "IPPrefixLen" => ip_prefix_len: i64,
        "IPv6Gateway" => ipv6_gateway: String,
        "GlobalIPv6Address" => global_ipv6_address: String,
        "GlobalIPv6PrefixLen" => global_ipv6_prefix_len: i64,
        /// MAC address for the endpoint on this network.
        "MacAddress" => mac_address: String,
        /// DriverOpts is a mapping of driver options and values. These options
        /// are passed directly to the driver and are network or driver
        /// specific.
        "DriverOpts" => driver_opts: Option<BTreeMap<String, String>>,
    }
}

docker_model! {
    /// EndpointIPAMConfig represents an endpoint's IPAM configuration.
    pub struct EndpointIpamConfig {
        "IPv4Address" => ipv4_address: String,
        "IPv6Address" => ipv6_address: String,
        "LinkLocalIPs" => link_local_ips: Vec<String>,
    }
}

docker_model! {
    /// Address represents an IPv4 or IPv6 IP address.
    pub struct Address {
        /// IP address.
        "Addr" => addr: String,
        /// Mask length of the IP address.
        "PrefixLen" => prefix_len: i64,
    }
}
