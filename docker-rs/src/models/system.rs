// Copyright (c) Microsoft. All rights reserved.

use std::collections::BTreeMap;

use super::{BuildCache, ContainerSummary, GenericResource, ImageSummary, SwarmInfo, Volume};

docker_model! {
    /// Response of `GET /info`.
    pub struct SystemInfo {
        /// Unique identifier of the daemon.
        "ID" => id: String,
        /// Total number of containers on the host.
        "Containers" => containers: i64,
        "ContainersRunning" => containers_running: i64,
        "ContainersPaused" => containers_paused: i64,
        "ContainersStopped" => containers_stopped: i64,
        /// Total number of images on the host, both tagged and untagged.
        "Images" => images: i64,
        /// Name of the storage driver in use.
        "Driver" => driver: String,
        /// Information specific to the storage driver, provided as
        /// "label" / "value" pairs.
        "DriverStatus" => driver_status: Vec<Vec<String>>,
        /// Root directory of persistent Docker state.
        "DockerRootDir" => docker_root_dir: String,
        "Plugins" => plugins: PluginsInfo,
        "MemoryLimit" => memory_limit: bool,
        "SwapLimit" => swap_limit: bool,
        "KernelMemoryTCP" => kernel_memory_tcp: bool,
        "CpuCfsPeriod" => cpu_cfs_period: bool,
        "CpuCfsQuota" => cpu_cfs_quota: bool,
        "CPUShares" => cpu_shares: bool,
        "CPUSet" => cpu_set: bool,
        "PidsLimit" => pids_limit: bool,
        "OomKillDisable" => oom_kill_disable: bool,
        "IPv4Forwarding" => ipv4_forwarding: bool,
        "BridgeNfIptables" => bridge_nf_iptables: bool,
        "BridgeNfIp6tables" => bridge_nf_ip6tables: bool,
        /// Indicates if the daemon is running in debug-mode / with debug-level
        /// logging enabled.
        "Debug" => debug: bool,
        /// The total number of file Descriptors in use by the daemon process.
        "NFd" => n_fd: i64,
        "NGoroutines" => n_goroutines: i64,
        /// Current system-time in RFC 3339 format with nano-seconds.
        "SystemTime" => system_time: String,
        /// The logging driver to use as a default for new containers.
        "LoggingDriver" => logging_driver: String,
        /// The driver to use for managing cgroups: `cgroupfs`, `systemd` or
        /// `none`.
        "CgroupDriver" => cgroup_driver: String = "cgroupfs",
        /// The version of the cgroup: `1` or `2`.
        "CgroupVersion" => cgroup_version: String = "1",
        "NEventsListener" => n_events_listener: i64,
        "KernelVersion" => kernel_version: String,
        /// Name of the host's operating system, for example: "Ubuntu 16.04.2
        /// LTS" or "Windows Server 2016 Datacenter"
        "OperatingSystem" => operating_system: String,
        "OSVersion" => os_version: String,
        /// Generic type of the operating system of the host, as returned by
        /// the Go runtime (`GOOS`).
        "OSType" => os_type: String,
        /// Hardware architecture of the host, as returned by the Go runtime
        /// (`GOARCH`).
        "Architecture" => architecture: String,
        /// The number of logical CPUs usable by the daemon.
        "NCPU" => ncpu: i64,
        /// Total amount of physical memory available on the host, in bytes.
        "MemTotal" => mem_total: i64,
        "IndexServerAddress" => index_server_address: String = "https://index.docker.io/v1/",
        "RegistryConfig" => registry_config: Option<RegistryServiceConfig>,
        "GenericResources" => generic_resources: Vec<GenericResource>,
        "HttpProxy" => http_proxy: String,
        "HttpsProxy" => https_proxy: String,
        "NoProxy" => no_proxy: String,
        /// Hostname of the host.
        "Name" => name: String,
        /// User-defined labels (key/value metadata) as set on the daemon.
        "Labels" => labels: Vec<String>,
        "ExperimentalBuild" => experimental_build: bool,
        "ServerVersion" => server_version: String,
        /// List of OCI compliant runtimes configured on the daemon, keyed by
        /// name.
        "Runtimes" => runtimes: BTreeMap<String, Runtime>,
        "DefaultRuntime" => default_runtime: String = "runc",
        "Swarm" => swarm: SwarmInfo,
        "LiveRestoreEnabled" => live_restore_enabled: bool = false,
        /// Represents the isolation technology to use as a default for
        /// containers. (Windows only)
        "Isolation" => isolation: String = "default",
        /// Name and, optional, path of the `docker-init` binary.
        "InitBinary" => init_binary: String,
        "ContainerdCommit" => containerd_commit: Commit,
        "RuncCommit" => runc_commit: Commit,
        "InitCommit" => init_commit: Commit,
        /// List of security features that are enabled on the daemon, such as
        /// apparmor, seccomp, SELinux, user-namespaces (userns), rootless and
        /// no-new-privileges.
        "SecurityOptions" => security_options: Vec<String>,
        "ProductLicense" => product_license: String,
        "DefaultAddressPools" => default_address_pools: Vec<DefaultAddressPool>,
        /// List of warnings / informational messages about missing features,
        /// or issues related to the daemon configuration.
        "Warnings" => warnings: Vec<String>,
    }
}

docker_model! {
    pub struct DefaultAddressPool {
        /// The network address in CIDR format
        "Base" => base: String,
        /// The network pool size
        "Size" => size: i64,
    }
}

docker_model! {
    /// RegistryServiceConfig stores daemon registry services configuration.
    pub struct RegistryServiceConfig {
        "AllowNondistributableArtifactsCIDRs" => allow_nondistributable_artifacts_cidrs: Vec<String>,
        "AllowNondistributableArtifactsHostnames" => allow_nondistributable_artifacts_hostnames: Vec<String>,
        /// List of IP ranges of insecure registries, using the CIDR syntax
        /// ([RFC 4632](https://tools.ietf.org/html/4632)).
        "InsecureRegistryCIDRs" => insecure_registry_cidrs: Vec<String>,
        "IndexConfigs" => index_configs: BTreeMap<String, IndexInfo>,
        /// List of registry URLs that act as a mirror for the official
        /// (`docker.io`) registry.
        "Mirrors" => mirrors: Vec<String>,
    }
}

docker_model! {
    /// IndexInfo contains information about a registry.
    pub struct IndexInfo {
        /// Name of the registry, such as "docker.io".
        "Name" => name: String,
        "Mirrors" => mirrors: Vec<String>,
        /// Indicates if the registry is part of the list of insecure
        /// registries.
        "Secure" => secure: bool,
        /// Indicates whether this is an official registry (i.e., Docker Hub /
        /// docker.io)
        "Official" => official: bool,
    }
}

docker_model! {
    /// Available plugins per type.
    pub struct PluginsInfo {
        "Volume" => volume: Vec<String>,
        "Network" => network: Vec<String>,
        "Authorization" => authorization: Vec<String>,
        "Log" => log: Vec<String>,
    }
}

docker_model! {
    /// Runtime describes an OCI compliant runtime.
    pub struct Runtime {
        /// Name and, optional, path, of the OCI executable binary.
        "path" => path: String,
        "runtimeArgs" => runtime_args: Option<Vec<String>>,
    }
}

docker_model! {
    /// Commit holds the Git-commit (SHA1) that a binary was built from, as
    /// reported in the version-string of external tools, such as
    /// `containerd`, or `runC`.
    pub struct Commit {
        "ID" => id: String,
        /// Commit ID of external tool expected by dockerd as set at build
        /// time.
        "Expected" => expected: String,
    }
}

docker_model! {
    /// Response of `GET /version`.
    pub struct SystemVersion {
        "Platform" => platform: SystemVersionPlatform,
        /// Information about system components
        "Components" => components: Vec<SystemVersionComponent>,
        "Version" => version: String,
        "ApiVersion" => api_version: String,
        "MinAPIVersion" => min_api_version: String,
        "GitCommit" => git_commit: String,
        "GoVersion" => go_version: String,
        "Os" => os: String,
        "Arch" => arch: String,
        "KernelVersion" => kernel_version: String,
        "Experimental" => experimental: bool,
        "BuildTime" => build_time: String,
    }
}

docker_model! {
    pub struct SystemVersionPlatform {
        "Name" => name: String,
    }
}

docker_model! {
    pub struct SystemVersionComponent {
        /// Name of the component
        "Name" => name: String,
        /// Version of the component
        "Version" => version: String,
        /// Key/value pairs of strings with additional information about the
        /// component. These values are intended for informational purposes
        /// only, and their content is not defined, and not part of the API
        /// specification.
        "Details" => details: Option<serde_json::Value>,
    }
}

docker_model! {
    /// Response of `GET /system/df`.
    pub struct SystemDataUsageResponse {
        "LayersSize" => layers_size: i64,
        "Images" => images: Vec<ImageSummary>,
        "Containers" => containers: Vec<ContainerSummary>,
        "Volumes" => volumes: Vec<Volume>,
        "BuildCache" => build_cache: Vec<BuildCache>,
        "ImagesDiskUsage" => images_disk_usage: ImagesDiskUsage,
        "ContainersDiskUsage" => containers_disk_usage: ContainersDiskUsage,
        "VolumesDiskUsage" => volumes_disk_usage: VolumesDiskUsage,
        "BuildCacheDiskUsage" => build_cache_disk_usage: BuildCacheDiskUsage,
    }
}

docker_model! {
    /// Disk usage summary for images.
    pub struct ImagesDiskUsage {
        /// Number of images in use by at least one container.
        "activeCount" => active_count: i64,
        "totalCount" => total_count: i64,
        /// Disk space that can be reclaimed by removing unused images, in
        /// bytes.
        "reclaimable" => reclaimable: i64,
        "totalSize" => total_size: i64,
        "items" => items: Vec<ImageSummary>,
    }
}

docker_model! {
    /// Disk usage summary for containers.
    pub struct ContainersDiskUsage {
        /// Number of running containers.
        "activeCount" => active_count: i64,
        "totalCount" => total_count: i64,
        "reclaimable" => reclaimable: i64,
        "totalSize" => total_size: i64,
        "items" => items: Vec<ContainerSummary>,
    }
}

docker_model! {
    /// Disk usage summary for volumes.
    pub struct VolumesDiskUsage {
        /// Number of volumes referenced by at least one container.
        "activeCount" => active_count: i64,
        "totalCount" => total_count: i64,
        "reclaimable" => reclaimable: i64,
        "totalSize" => total_size: i64,
        "items" => items: Vec<Volume>,
    }
}

docker_model! {
    /// Disk usage summary for the build cache.
    pub struct BuildCacheDiskUsage {
        /// Number of build cache records in use.
        "activeCount" => active_count: i64,
        "totalCount" => total_count: i64,
        "reclaimable" => reclaimable: i64,
        "totalSize" => total_size: i64,
        "items" => items: Vec<BuildCache>,
    }
}

docker_model! {
    /// One message of `GET /events`.
    pub struct EventMessage {
        /// The type of object emitting the event: `builder`, `config`,
        /// `container`, `daemon`, `image`, `network`, `node`, `plugin`,
        /// `secret`, `service` or `volume`.
        "Type" => event_type: String,
        /// The type of event
        "Action" => action: String,
        "Actor" => actor: EventActor,
        /// Scope of the event. Engine events are `local` scope. Cluster
        /// (Swarm) events are `swarm` scope.
        "scope" => scope: String,
        /// Timestamp of event
        "time" => time: i64,
        /// Timestamp of event, with nanosecond accuracy
        "timeNano" => time_nano: i64,
    }
}

docker_model! {
    /// Actor describes something that generates events, like a container,
    /// network, or a volume.
    pub struct EventActor {
        /// The ID of the object emitting the event
        "ID" => id: String,
        /// Various key/value attributes of the object, depending on its type.
        "Attributes" => attributes: BTreeMap<String, String>,
    }
}
