// Copyright (c) Microsoft. All rights reserved.

use std::collections::BTreeMap;

use super::{
    DeviceMapping, DeviceRequest, EmptyObject, EndpointSettings, HostConfig, NetworkSettings,
    RestartPolicy, ThrottleDevice, Ulimit, WeightDevice,
};

docker_model! {
    /// Configuration for a container that is portable between hosts.
    pub struct ContainerConfig {
        /// The hostname to use for the container, as a valid RFC 1123 hostname.
        "Hostname" => hostname: String,
        /// The domain name to use for the container.
        "Domainname" => domainname: String,
        /// The user that commands are run as inside the container.
        "User" => user: String,
        "AttachStdin" => attach_stdin: bool = false,
        "AttachStdout" => attach_stdout: bool = true,
        "AttachStderr" => attach_stderr: bool = true,
        /// An object mapping ports to an empty object in the form
        /// `{"<port>/<tcp|udp|sctp>": {}}`
        "ExposedPorts" => exposed_ports: BTreeMap<String, EmptyObject>,
        /// Attach standard streams to a TTY, including `stdin` if it is not
        /// closed.
        "Tty" => tty: bool = false,
        "OpenStdin" => open_stdin: bool = false,
        /// Close `stdin` after one attached client disconnects
        "StdinOnce" => stdin_once: bool = false,
        /// A list of environment variables to set inside the container in the
        /// form `["VAR=value", ...]`.
        "Env" => env: Vec<String>,
        /// Command to run specified as a string or an array of strings.
        "Cmd" => cmd: Vec<String>,
        "Healthcheck" => healthcheck: HealthConfig,
        /// Command is already escaped (Windows only)
        "ArgsEscaped" => args_escaped: bool,
        /// The name of the image to use when creating the container
        "Image" => image: String,
        /// An object mapping mount point paths inside the container to empty
        /// objects.
        "Volumes" => volumes: BTreeMap<String, EmptyObject>,
        "WorkingDir" => working_dir: String,
        /// The entry point for the container as a string or an array of
        /// strings.
        ///
        /// If the array consists of exactly one empty string (`[""]`) then the
        /// entry point is reset to system default.
        "Entrypoint" => entrypoint: Vec<String>,
        "NetworkDisabled" => network_disabled: bool,
        "MacAddress" => mac_address: String,
        /// `ONBUILD` metadata that were defined in the image's `Dockerfile`.
        "OnBuild" => on_build: Vec<String>,
        /// User-defined key/value metadata.
        "Labels" => labels: BTreeMap<String, String>,
        /// Signal to stop a container as a string or unsigned integer.
        "StopSignal" => stop_signal: String,
        /// Timeout to stop a container in seconds.
        "StopTimeout" => stop_timeout: i64,
        /// Shell for when `RUN`, `CMD`, and `ENTRYPOINT` uses a shell.
        "Shell" => shell: Vec<String>,
    }
}

docker_model! {
    /// Body of `POST /containers/create`: the portable container config plus
    /// the host-specific and networking configuration.
    pub struct ContainerCreateBody {
        "Hostname" => hostname: String,
        "Domainname" => domainname: String,
        "User" => user: String,
        "AttachStdin" => attach_stdin: bool = false,
        "AttachStdout" => attach_stdout: bool = true,
        "AttachStderr" => attach_stderr: bool = true,
        "ExposedPorts" => exposed_ports: BTreeMap<String, EmptyObject>,
        "Tty" => tty: bool = false,
        "OpenStdin" => open_stdin: bool = false,
        "StdinOnce" => stdin_once: bool = false,
        "Env" => env: Vec<String>,
        "Cmd" => cmd: Vec<String>,
        "Healthcheck" => healthcheck: HealthConfig,
        "ArgsEscaped" => args_escaped: bool,
        "Image" => image: String,
        "Volumes" => volumes: BTreeMap<String, EmptyObject>,
        "WorkingDir" => working_dir: String,
        "Entrypoint" => entrypoint: Vec<String>,
        "NetworkDisabled" => network_disabled: bool,
        "MacAddress" => mac_address: String,
        "OnBuild" => on_build: Vec<String>,
        "Labels" => labels: BTreeMap<String, String>,
        "StopSignal" => stop_signal: String,
        "StopTimeout" => stop_timeout: i64,
        "Shell" => shell: Vec<String>,
        "HostConfig" => host_config: HostConfig,
        "NetworkingConfig" => networking_config: NetworkingConfig,
    }
}

docker_model! {
    /// OK response to ContainerCreate operation
    pub struct ContainerCreateResponse {
        /// The ID of the created container
        "Id" => id: String,
        /// Warnings encountered when creating the container
        "Warnings" => warnings: Vec<String>,
    }
}

docker_model! {
    pub struct ContainerInspectResponse {
        /// The ID of the container
        "Id" => id: String,
        /// The time the container was created
        "Created" => created: String,
        /// The path to the command being run
        "Path" => path: String,
        /// The arguments to the command being run
        "Args" => args: Vec<String>,
        "State" => state: ContainerState,
        /// The container's image ID
        "Image" => image: String,
        "ResolvConfPath" => resolv_conf_path: String,
        "HostnamePath" => hostname_path: String,
        "HostsPath" => hosts_path: String,
        "LogPath" => log_path: String,
        "Name" => name: String,
        "RestartCount" => restart_count: i64,
        "Driver" => driver: String,
        "Platform" => platform: String,
        "MountLabel" => mount_label: String,
        "ProcessLabel" => process_label: String,
        "AppArmorProfile" => app_armor_profile: String,
        /// IDs of exec instances that are running in the container.
        "ExecIDs" => exec_ids: Option<Vec<String>>,
        "HostConfig" => host_config: HostConfig,
        "GraphDriver" => graph_driver: GraphDriverData,
        /// The size of files that have been created or changed by this
        /// container.
        "SizeRw" => size_rw: i64,
        /// The total size of all the files in this container.
        "SizeRootFs" => size_root_fs: i64,
        "Mounts" => mounts: Vec<MountPoint>,
        "Config" => config: ContainerConfig,
        "NetworkSettings" => network_settings: NetworkSettings,
    }
}

docker_model! {
    /// ContainerState stores container's running state. It's part of
    /// ContainerJSONBase and will be returned by the "inspect" command.
    pub struct ContainerState {
        /// String representation of the container state. Can be one of
        /// "created", "running", "paused", "restarting", "removing", "exited",
        /// or "dead".
        "Status" => status: String,
        "Running" => running: bool,
        "Paused" => paused: bool,
        "Restarting" => restarting: bool,
        /// Whether a process within this container has been killed because it
        /// ran out of memory since the container was last started.
        "OOMKilled" => oom_killed: bool,
        "Dead" => dead: bool,
        /// The process ID of this container
        "Pid" => pid: i64,
        /// The last exit code of this container
        "ExitCode" => exit_code: i64,
        "Error" => error: String,
        /// The time when this container was last started.
        "StartedAt" => started_at: String,
        /// The time when this container last exited.
        "FinishedAt" => finished_at: String,
        "Health" => health: Health,
    }
}

docker_model! {
    /// Health stores information about the container's healthcheck results.
    pub struct Health {
        /// Status is one of `none`, `starting`, `healthy` or `unhealthy`.
        "Status" => status: String,
        /// FailingStreak is the number of consecutive failures
        "FailingStreak" => failing_streak: i64,
        /// Log contains the last few results (oldest first)
        "Log" => log: Vec<HealthcheckResult>,
    }
}

docker_model! {
    /// HealthcheckResult stores information about a single run of a
    /// healthcheck probe
    pub struct HealthcheckResult {
        /// Date and time at which this check started in RFC 3339 format with
        /// nano-seconds.
        "Start" => start: String,
        "End" => end: String,
        /// ExitCode meanings:
        ///
        /// - `0` healthy
        /// - `1` unhealthy
        /// - `2` reserved (considered unhealthy)
        /// - other values: error running probe
        "ExitCode" => exit_code: i64,
        /// Output from last check
        "Output" => output: String,
    }
}

docker_model! {
    /// A test to perform to check that the container is healthy.
    pub struct HealthConfig {
        /// The test to perform. Possible values are:
        ///
        /// - `[]` inherit healthcheck from image or parent image
        /// - `["NONE"]` disable healthcheck
        /// - `["CMD", args...]` exec arguments directly
        /// - `["CMD-SHELL", command]` run command with system's default shell
        "Test" => test: Vec<String>,
        /// The time to wait between checks in nanoseconds. It should be 0 or
        /// at least 1000000 (1 ms). 0 means inherit.
        "Interval" => interval: i64,
        "Timeout" => timeout: i64,
        /// The number of consecutive failures needed to consider a container
        /// as unhealthy. 0 means inherit.
        "Retries" => retries: i64,
        "StartPeriod" => start_period: i64,
    }
}

docker_model! {
    /// One entry of `GET /containers/json`.
    pub struct ContainerSummary {
        "Id" => id: String,
        /// The names that this container has been given
        "Names" => names: Vec<String>,
        "Image" => image: String,
        "ImageID" => image_id: String,
        /// Command to run when starting the container
        "Command" => command: String,
        /// When the container was created
        "Created" => created: i64,
        "Ports" => ports: Vec<Port>,
        "SizeRw" => size_rw: i64,
        "SizeRootFs" => size_root_fs: i64,
        "Labels" => labels: BTreeMap<String, String>,
        "State" => state: String,
        /// Additional human-readable status of this container (e.g. `Exit 0`)
        "Status" => status: String,
        "HostConfig" => host_config: ContainerSummaryHostConfig,
        "NetworkSettings" => network_settings: ContainerSummaryNetworkSettings,
        "Mounts" => mounts: Vec<MountPoint>,
    }
}

docker_model! {
    pub struct ContainerSummaryHostConfig {
        "NetworkMode" => network_mode: String,
    }
}

docker_model! {
    /// A summary of the container's network settings
    pub struct ContainerSummaryNetworkSettings {
        "Networks" => networks: BTreeMap<String, EndpointSettings>,
    }
}

docker_model! {
    /// An open port on a container
    pub struct Port {
        /// Host IP address that the container's port is mapped to
        "IP" => ip: String,
        /// Port on the container
        "PrivatePort" => private_port: u16,
        /// Port exposed on the host
        "PublicPort" => public_port: u16,
        /// `tcp`, `udp` or `sctp`
        "Type" => port_type: String,
    }
}

docker_model! {
    /// A mount point inside a container
    pub struct MountPoint {
        "Type" => mount_type: String,
        "Name" => name: String,
        "Source" => source: String,
        "Destination" => destination: String,
        "Driver" => driver: String,
        "Mode" => mode: String,
        "RW" => rw: bool,
        "Propagation" => propagation: String,
    }
}

docker_model! {
    /// Body of `POST /containers/{id}/update`: the container's resources plus
    /// its restart policy.
    pub struct ContainerUpdateBody {
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
        "RestartPolicy" => restart_policy: RestartPolicy,
    }
}

docker_model! {
    /// OK response to ContainerUpdate operation
    pub struct ContainerUpdateResponse {
        "Warnings" => warnings: Vec<String>,
    }
}

docker_model! {
    pub struct ContainerPruneResponse {
        /// Container IDs that were deleted
        "ContainersDeleted" => containers_deleted: Vec<String>,
        /// Disk space reclaimed in bytes
        "SpaceReclaimed" => space_reclaimed: i64,
    }
}

docker_model! {
    /// OK response to ContainerWait operation
    pub struct ContainerWaitResponse {
        /// Exit code of the container
        "StatusCode" => status_code: i64,
        "Error" => error: ContainerWaitExitError,
    }
}

docker_model! {
    /// container waiting error, if any
    pub struct ContainerWaitExitError {
        "Message" => message: String,
    }
}

docker_model! {
    /// OK response to ContainerTop operation
    pub struct ContainerTopResponse {
        /// The ps column titles
        "Titles" => titles: Vec<String>,
        /// Each process running in the container, where each is process is an
        /// array of values corresponding to the titles.
        "Processes" => processes: Vec<Vec<String>>,
    }
}

docker_model! {
    /// Information about the storage driver used to store the container's
    /// and image's filesystem.
    pub struct GraphDriverData {
        /// Name of the storage driver.
        "Name" => name: String,
        /// Low-level storage metadata, provided as key/value pairs.
        "Data" => data: BTreeMap<String, String>,
    }
}

docker_model! {
    /// NetworkingConfig represents the container's networking configuration
    /// for each of its interfaces. It is used for the networking configs
    /// specified in the `docker create` and `docker network connect`
    /// commands.
    pub struct NetworkingConfig {
        /// A mapping of network name to endpoint configuration for that
        /// network.
        "EndpointsConfig" => endpoints_config: BTreeMap<String, EndpointSettings>,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use serde_json::json;

    use super::{
        ContainerCreateBody, ContainerInspectResponse, ContainerSummary, ContainerWaitResponse,
    };
    use crate::models::{EmptyObject, HostConfig};
    use crate::presence::PartialRecord;

    #[test]
    fn attach_defaults_are_reported_but_not_sent() {
        let body = ContainerCreateBody::new().with_image("alpine:3".to_string());

        assert!(body.attach_stdout());
        assert!(body.attach_stderr());
        assert!(!body.attach_stdin());
        assert!(!body.tty());
        assert!(!body.is_initialized("AttachStdout"));
        assert_eq!(json!({ "Image": "alpine:3" }), serde_json::to_value(&body).unwrap());
    }

    #[test]
    fn exposed_ports_serialize_as_empty_objects() {
        let mut exposed_ports = BTreeMap::new();
        exposed_ports.insert("22/tcp".to_string(), EmptyObject::new());

        let body = ContainerCreateBody::new()
            .with_image("ubuntu".to_string())
            .with_exposed_ports(exposed_ports)
            .with_host_config(HostConfig::new().with_memory(0));

        assert_eq!(
            json!({
                "ExposedPorts": { "22/tcp": {} },
                "Image": "ubuntu",
                "HostConfig": { "Memory": 0 }
            }),
            serde_json::to_value(&body).unwrap()
        );
    }

    #[test]
    fn inspect_response_marks_nested_keys() {
        let inspect: ContainerInspectResponse = serde_json::from_value(json!({
            "Id": "ba033ac4401106a3b513bc9d639eee123ad78ca3616b921167cd74b20e25ed39",
            "Name": "/boring_euclid",
            "ExecIDs": null,
            "State": {
                "Status": "running",
                "Running": true,
                "Pid": 0,
                "ExitCode": 0,
                "Health": { "Status": "healthy", "FailingStreak": 0, "Log": [] }
            },
            "Config": { "Image": "ubuntu", "Tty": false, "Env": ["PATH=/usr/bin"] }
        }))
        .unwrap();

        assert_eq!(Some(None), inspect.exec_ids());
        assert!(!inspect.is_initialized("HostConfig"));

        let state = inspect.state().unwrap();
        assert_eq!(Some("running"), state.status());
        assert_eq!(Some(0), state.exit_code());
        assert!(state.is_initialized("Pid"));
        assert!(!state.is_initialized("Paused"));
        assert_eq!(Some(0), state.health().unwrap().failing_streak());

        let config = inspect.config().unwrap();
        assert!(config.is_initialized("tty"));
        assert!(!config.tty());
        assert!(!config.is_initialized("attach_stdout"));
        assert!(config.attach_stdout());
    }

    #[test]
    fn summary_keeps_port_fields_that_were_sent() {
        let summary: ContainerSummary = serde_json::from_value(json!({
            "Id": "8dfafdbc3a40",
            "Names": ["/boring_feynman"],
            "Ports": [{ "PrivatePort": 2222, "PublicPort": 3333, "Type": "tcp" }],
            "HostConfig": { "NetworkMode": "default" }
        }))
        .unwrap();

        let port = &summary.ports().unwrap()[0];
        assert_eq!(Some(2222), port.private_port());
        assert_eq!(Some(3333), port.public_port());
        assert_eq!(Some("tcp"), port.port_type());
        assert!(!port.is_initialized("IP"));
        assert_eq!(Some("default"), summary.host_config().unwrap().network_mode());
    }

    #[test]
    fn wait_response_exit_code_zero_is_present() {
        let wait: ContainerWaitResponse = r#"{"StatusCode":0}"#.parse().unwrap();
        assert_eq!(Some(0), wait.status_code());
        assert!(wait.error().is_none());
    }
}
