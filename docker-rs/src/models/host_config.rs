// Copyright (c) Microsoft. All rights reserved.

use std::collections::BTreeMap;

docker_model! {
    /// Container configuration that depends on the host we are running on.
    ///
    /// The first block of fields mirrors [`Resources`]; the Engine API
    /// flattens both into one object.
    pub struct HostConfig {
        /// An integer value representing this container's relative CPU weight
        /// versus other containers.
        "CpuShares" => cpu_shares: i64,
        /// Memory limit in bytes.
        "Memory" => memory: i64,
        /// Path to `cgroups` under which the container's `cgroup` is created.
        "CgroupParent" => cgroup_parent: String,
        /// Block IO weight (relative weight).
        "BlkioWeight" => blkio_weight: u16,
        "BlkioWeightDevice" => blkio_weight_device: Vec<WeightDevice>,
        "BlkioDeviceReadBps" => blkio_device_read_bps: Vec<ThrottleDevice>,
        "BlkioDeviceWriteBps" => blkio_device_write_bps: Vec<ThrottleDevice>,
        "BlkioDeviceReadIOps" => blkio_device_read_iops: Vec<ThrottleDevice>,
        "BlkioDeviceWriteIOps" => blkio_device_write_iops: Vec<ThrottleDevice>,
        /// The length of a CPU period in microseconds.
        "CpuPeriod" => cpu_period: i64,
        /// Microseconds of CPU time that the container can get in a CPU period.
        "CpuQuota" => cpu_quota: i64,
        "CpuRealtimePeriod" => cpu_realtime_period: i64,
        "CpuRealtimeRuntime" => cpu_realtime_runtime: i64,
        /// CPUs in which to allow execution (e.g., `0-3`, `0,1`).
        "CpusetCpus" => cpuset_cpus: String,
        "CpusetMems" => cpuset_mems: String,
        /// A list of devices to add to the container.
        "Devices" => devices: Vec<DeviceMapping>,
        "DeviceCgroupRules" => device_cgroup_rules: Vec<String>,
        "DeviceRequests" => device_requests: Vec<DeviceRequest>,
        "KernelMemoryTCP" => kernel_memory_tcp: i64,
        /// Memory soft limit in bytes.
        "MemoryReservation" => memory_reservation: i64,
        /// Total memory limit (memory + swap). Set as `-1` to enable unlimited
        /// swap.
        "MemorySwap" => memory_swap: i64,
        "MemorySwappiness" => memory_swappiness: i64,
        /// CPU quota in units of 10<sup>-9</sup> CPUs.
        "NanoCpus" => nano_cpus: i64,
        "OomKillDisable" => oom_kill_disable: bool,
        /// Run an init inside the container that forwards signals and reaps
        /// processes.
        "Init" => init: Option<bool>,
        /// Tune a container's PIDs limit. Set `0` or `-1` for unlimited, or
        /// `null` to not change.
        "PidsLimit" => pids_limit: Option<i64>,
        "Ulimits" => ulimits: Vec<Ulimit>,
        "CpuCount" => cpu_count: i64,
        "CpuPercent" => cpu_percent: i64,
        "IOMaximumIOps" => io_maximum_iops: i64,
        "IOMaximumBandwidth" => io_maximum_bandwidth: i64,

        /// A list of volume bindings for this container, in the form
        /// `host-src:container-dest[:options]`.
        "Binds" => binds: Vec<String>,
        /// Path to a file where the container ID is written
        "ContainerIDFile" => container_id_file: String,
        "LogConfig" => log_config: LogConfig,
        /// Network mode to use for this container. Supported standard values
        /// are: `bridge`, `host`, `none`, and `container:<name|id>`.
        "NetworkMode" => network_mode: String,
        /// Port mapping between the exposed port (container) and the host.
        "PortBindings" => port_bindings: BTreeMap<String, Vec<PortBinding>>,
        "RestartPolicy" => restart_policy: RestartPolicy,
        /// Automatically remove the container when the container's process
        /// exits.
        "AutoRemove" => auto_remove: bool,
        "VolumeDriver" => volume_driver: String,
        "VolumesFrom" => volumes_from: Vec<String>,
        /// Specification for mounts to be added to the container.
        "Mounts" => mounts: Vec<Mount>,
        "CapAdd" => cap_add: Vec<String>,
        "CapDrop" => cap_drop: Vec<String>,
        /// cgroup namespace mode for the container: `private` or `host`.
        "CgroupnsMode" => cgroupns_mode: String,
        "Dns" => dns: Vec<String>,
        "DnsOptions" => dns_options: Vec<String>,
        "DnsSearch" => dns_search: Vec<String>,
        /// A list of hostnames/IP mappings to add to the container's
        /// `/etc/hosts` file, in the form `["hostname:IP"]`.
        "ExtraHosts" => extra_hosts: Vec<String>,
        "GroupAdd" => group_add: Vec<String>,
        "IpcMode" => ipc_mode: String,
        "Cgroup" => cgroup: String,
        "Links" => links: Vec<String>,
        "OomScoreAdj" => oom_score_adj: i64,
        "PidMode" => pid_mode: String,
        /// Gives the container full access to the host.
        "Privileged" => privileged: bool,
        "PublishAllPorts" => publish_all_ports: bool,
        "ReadonlyRootfs" => readonly_rootfs: bool,
        "SecurityOpt" => security_opt: Vec<String>,
        "StorageOpt" => storage_opt: BTreeMap<String, String>,
        "Tmpfs" => tmpfs: BTreeMap<String, String>,
        "UTSMode" => uts_mode: String,
        "UsernsMode" => userns_mode: String,
        /// Size of `/dev/shm` in bytes.
        "ShmSize" => shm_size: i64,
        "Sysctls" => sysctls: BTreeMap<String, String>,
        "Runtime" => runtime: String,
        /// Initial console size, as an `[height, width]` array. (Windows only)
        "ConsoleSize" => console_size: Option<Vec<u32>>,
        /// Isolation technology of the container. (Windows only)
        "Isolation" => isolation: String,
        "MaskedPaths" => masked_paths: Vec<String>,
        "ReadonlyPaths" => readonly_paths: Vec<String>,
    }
}

docker_model! {
    /// A container's resources (cgroups config, ulimits, etc)
    pub struct Resources {
        "CpuShares" => cpu_shares: i64,
        "Memory" => memory: i64,
        "CgroupParent" => cgroup_parent: String,
        "BlkioWeight" => blkio_weight: u16,
        "BlkioWeightDevice" => blkio_weight_device: Vec<WeightDevice>,
        "BlkioDeviceReadBps" => blkio_device_read_bps: Vec<ThrottleDevice>,
        "BlkioDeviceWriteBps" => blkio_device_write_bps: Vec<ThrottleDevice>,
        "BlkioDeviceReadIOps" => blkio_device_read_iops: Vec<ThrottleDevice>,
        "BlkioDeviceWriteIOps" => blkio_device_write_iops: Vec<ThrottleDevice>,
        "CpuPeriod" => cpu_period: i64,
        "CpuQuota" => cpu_quota: i64,
        "CpuRealtimePeriod" => cpu_realtime_period: i64,
        "CpuRealtimeRuntime" => cpu_realtime_runtime: i64,
        "CpusetCpus" => cpuset_cpus: String,
        "CpusetMems" => cpuset_mems: String,
        "Devices" => devices: Vec<DeviceMapping>,
        "DeviceCgroupRules" => device_cgroup_rules: Vec<String>,
        "DeviceRequests" => device_requests: Vec<DeviceRequest>,
        "KernelMemoryTCP" => kernel_memory_tcp: i64,
        "MemoryReservation" => memory_reservation: i64,
        "MemorySwap" => memory_swap: i64,
        "MemorySwappiness" => memory_swappiness: i64,
        "NanoCpus" => nano_cpus: i64,
        "OomKillDisable" => oom_kill_disable: bool,
        "Init" => init: Option<bool>,
        "PidsLimit" => pids_limit: Option<i64>,
        "Ulimits" => ulimits: Vec<Ulimit>,
        "CpuCount" => cpu_count: i64,
        "CpuPercent" => cpu_percent: i64,
        "IOMaximumIOps" => io_maximum_iops: i64,
        "IOMaximumBandwidth" => io_maximum_bandwidth: i64,
    }
}

docker_model! {
    /// The behavior to apply when the container exits. The default is not to
    /// restart.
    ///
    /// An ever increasing delay (double the previous delay, starting at
    /// 100ms) is added before each restart to prevent flooding the server.
    pub struct RestartPolicy {
        /// - Empty string means not to restart
        /// - `no` Do not automatically restart
        /// - `always` Always restart
        /// - `unless-stopped` Restart always except when the user has manually
        ///   stopped the container
        /// - `on-failure` Restart only when the container exit code is non-zero
        "Name" => name: String,
        /// If `on-failure` is used, the number of times to retry before giving
        /// up.
        "MaximumRetryCount" => maximum_retry_count: i64,
    }
}

docker_model! {
    /// A device mapping between the host and container
    pub struct DeviceMapping {
        "PathOnHost" => path_on_host: String,
        "PathInContainer" => path_in_container: String,
        "CgroupPermissions" => cgroup_permissions: String,
    }
}

docker_model! {
    /// A request for devices to be sent to device drivers
    pub struct DeviceRequest {
        "Driver" => driver: String,
        "Count" => count: i64,
        "DeviceIDs" => device_ids: Vec<String>,
        /// A list of capabilities; an OR list of AND lists of capabilities.
        "Capabilities" => capabilities: Vec<Vec<String>>,
        /// Driver-specific options, specified as a key/value pairs.
        "Options" => options: BTreeMap<String, String>,
    }
}

docker_model! {
    pub struct ThrottleDevice {
        /// Device path
        "Path" => path: String,
        /// Rate
        "Rate" => rate: i64,
    }
}

docker_model! {
    pub struct WeightDevice {
        "Path" => path: String,
        "Weight" => weight: u16,
    }
}

docker_model! {
    pub struct Ulimit {
        /// Name of ulimit
        "Name" => name: String,
        /// Soft limit
        "Soft" => soft: i64,
        /// Hard limit
        "Hard" => hard: i64,
    }
}

docker_model! {
    /// The logging configuration for this container
    pub struct LogConfig {
        "Type" => log_type: String,
        "Config" => config: BTreeMap<String, String>,
    }
}

docker_model! {
    /// PortBinding represents a binding between a host IP address and a host
    /// port.
    pub struct PortBinding {
        /// Host IP address that the container's port is mapped to.
        "HostIp" => host_ip: String,
        /// Host port number that the container's port is mapped to.
        "HostPort" => host_port: String,
    }
}

docker_model! {
    pub struct Mount {
        /// Container path.
        "Target" => target: String,
        /// Mount source (e.g. a volume name, a host path).
        "Source" => source: String,
        /// The mount type: `bind`, `volume`, `tmpfs` or `npipe`.
        "Type" => mount_type: String,
        /// Whether the mount should be read-only.
        "ReadOnly" => read_only: bool,
        /// The consistency requirement for the mount: `default`,
        /// `consistent`, `cached`, or `delegated`.
        "Consistency" => consistency: String,
        "BindOptions" => bind_options: MountBindOptions,
        "VolumeOptions" => volume_options: MountVolumeOptions,
        "TmpfsOptions" => tmpfs_options: MountTmpfsOptions,
    }
}

docker_model! {
    /// Optional configuration for the `bind` type.
    pub struct MountBindOptions {
        /// A propagation mode with the value `[r]private`, `[r]shared`, or
        /// `[r]slave`.
        "Propagation" => propagation: String,
        /// Disable recursive bind mount.
        "NonRecursive" => non_recursive: bool = false,
        "CreateMountpoint" => create_mountpoint: bool = false,
    }
}

docker_model! {
    /// Optional configuration for the `volume` type.
    pub struct MountVolumeOptions {
        /// Populate volume with data from the target.
        "NoCopy" => no_copy: bool = false,
        "Labels" => labels: BTreeMap<String, String>,
        "DriverConfig" => driver_config: MountVolumeDriverConfig,
    }
}

docker_model! {
    /// Map of driver specific options
    pub struct MountVolumeDriverConfig {
        /// Name of the driver to use to create the volume.
        "Name" => name: String,
        /// key/value map of driver specific options.
        "Options" => options: BTreeMap<String, String>,
    }
}

docker_model! {
    /// Optional configuration for the `tmpfs` type.
    pub struct MountTmpfsOptions {
        /// The size for the tmpfs mount in bytes.
        "SizeBytes" => size_bytes: i64,
        /// The permission mode for the tmpfs mount in an integer.
        "Mode" => mode: i64,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use serde_json::json;

    use super::{HostConfig, Mount, MountBindOptions, PortBinding, RestartPolicy};
    use crate::presence::PartialRecord;

    #[test]
    fn host_config_serializes_nested_records() {
        let mut port_bindings = BTreeMap::new();
        port_bindings.insert(
            "27017/tcp".to_string(),
            vec![PortBinding::new().with_host_port("27017".to_string())],
        );

        let host_config = HostConfig::new()
            .with_port_bindings(port_bindings)
            .with_restart_policy(RestartPolicy::new().with_name("always".to_string()))
            .with_privileged(false);

        assert_eq!(
            json!({
                "PortBindings": {
                    "27017/tcp": [{ "HostPort": "27017" }]
                },
                "RestartPolicy": { "Name": "always" },
                "Privileged": false
            }),
            serde_json::to_value(&host_config).unwrap()
        );
    }

    #[test]
    fn bind_options_default_is_not_sent() {
        let options = MountBindOptions::new();
        assert!(!options.non_recursive());
        assert!(!options.is_initialized("NonRecursive"));

        let mount = Mount::new()
            .with_mount_type("bind".to_string())
            .with_source("/var/lib/data".to_string())
            .with_target("/data".to_string())
            .with_bind_options(options);

        assert_eq!(
            json!({
                "Target": "/data",
                "Source": "/var/lib/data",
                "Type": "bind",
                "BindOptions": {}
            }),
            serde_json::to_value(&mount).unwrap()
        );
    }

    #[test]
    fn host_config_decodes_daemon_inspect_output() {
        let host_config: HostConfig = serde_json::from_value(json!({
            "Binds": null,
            "NetworkMode": "default",
            "PortBindings": {},
            "PidsLimit": null,
            "ConsoleSize": [0, 0],
            "Memory": 0
        }))
        .unwrap();

        assert_eq!(
            vec!["memory", "pids_limit", "network_mode", "port_bindings", "console_size"],
            host_config.initialized_fields()
        );
        assert!(!host_config.is_initialized("Binds"));
        assert_eq!(Some(0), host_config.memory());
        assert_eq!(Some(None), host_config.pids_limit());
        assert_eq!(Some(Some(&[0, 0][..])), host_config.console_size());
        assert_eq!(Some("default"), host_config.network_mode());
    }
}
