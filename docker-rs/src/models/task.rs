// Copyright (c) Microsoft. All rights reserved.

use std::collections::BTreeMap;

use super::{
    EmptyObject, GenericResource, HealthConfig, Limit, Mount, NetworkAttachmentConfig,
    ObjectVersion, Platform, PluginPrivilege, ResourceObject, Ulimit,
};

docker_model! {
    pub struct Task {
        /// The ID of the task.
        "ID" => id: String,
        "Version" => version: ObjectVersion,
        "CreatedAt" => created_at: String,
        "UpdatedAt" => updated_at: String,
        /// Name of the task.
        "Name" => name: String,
        "Labels" => labels: BTreeMap<String, String>,
        "Spec" => spec: TaskSpec,
        /// The ID of the service this task is part of.
        "ServiceID" => service_id: String,
        "Slot" => slot: i64,
        /// The ID of the node that this task is on.
        "NodeID" => node_id: String,
        "AssignedGenericResources" => assigned_generic_resources: Vec<GenericResource>,
        "Status" => status: TaskStatus,
        "DesiredState" => desired_state: String,
        /// If the Service this Task belongs to is a job-mode service, contains
        /// the JobIteration of the Service this Task was created for.
        "JobIteration" => job_iteration: ObjectVersion,
    }
}

docker_model! {
    /// User modifiable task configuration.
    ///
    /// `ContainerSpec`, `NetworkAttachmentSpec` and `PluginSpec` are mutually
    /// exclusive.
    pub struct TaskSpec {
        "PluginSpec" => plugin_spec: PluginSpec,
        "ContainerSpec" => container_spec: ContainerSpec,
        "NetworkAttachmentSpec" => network_attachment_spec: NetworkAttachmentSpec,
        "Resources" => resources: TaskResources,
        "RestartPolicy" => restart_policy: TaskRestartPolicy,
        "Placement" => placement: Placement,
        /// A counter that triggers an update even if no relevant parameters
        /// have been changed.
        "ForceUpdate" => force_update: i64,
        /// Runtime is the type of runtime specified for the task executor.
        "Runtime" => runtime: String,
        "Networks" => networks: Vec<NetworkAttachmentConfig>,
        "LogDriver" => log_driver: TaskLogDriver,
    }
}

docker_model! {
    /// Plugin spec for the service. Only used when `Runtime` is `plugin`.
    pub struct PluginSpec {
        "Name" => name: String,
        /// The remote image reference of the plugin.
        "Remote" => remote: String,
        "Disabled" => disabled: bool,
        "PluginPrivilege" => plugin_privilege: Vec<PluginPrivilege>,
    }
}

docker_model! {
    /// Container spec for the service.
    pub struct ContainerSpec {
        /// The image name to use for the container
        "Image" => image: String,
        "Labels" => labels: BTreeMap<String, String>,
        /// The command to be run in the image.
        "Command" => command: Vec<String>,
        /// Arguments to the command.
        "Args" => args: Vec<String>,
        "Hostname" => hostname: String,
        /// A list of environment variables in the form `VAR=value`.
        "Env" => env: Vec<String>,
        /// The working directory for commands to run in.
        "Dir" => dir: String,
        "User" => user: String,
        "Groups" => groups: Vec<String>,
        "Privileges" => privileges: ContainerSpecPrivileges,
        "TTY" => tty: bool,
        "OpenStdin" => open_stdin: bool,
        "ReadOnly" => read_only: bool,
        "Mounts" => mounts: Vec<Mount>,
        "StopSignal" => stop_signal: String,
        /// Amount of time to wait for the container to terminate before
        /// forcefully killing it.
        "StopGracePeriod" => stop_grace_period: i64,
        "HealthCheck" => health_check: HealthConfig,
        /// A list of hostname/IP mappings to add to the container's `hosts`
        /// file, in the form `IP_address canonical_hostname [aliases...]`.
        "Hosts" => hosts: Vec<String>,
        "DNSConfig" => dns_config: DnsConfig,
        "Secrets" => secrets: Vec<ContainerSpecSecret>,
        "Configs" => configs: Vec<ContainerSpecConfig>,
        /// Isolation technology of the containers running the service.
        /// (Windows only)
        "Isolation" => isolation: String,
        "Init" => init: Option<bool>,
        "Sysctls" => sysctls: BTreeMap<String, String>,
        "CapabilityAdd" => capability_add: Vec<String>,
        "CapabilityDrop" => capability_drop: Vec<String>,
        "Ulimits" => ulimits: Vec<Ulimit>,
    }
}

docker_model! {
    /// Security options for the container
    pub struct ContainerSpecPrivileges {
        "CredentialSpec" => credential_spec: CredentialSpec,
        "SELinuxContext" => selinux_context: SeLinuxContext,
    }
}

docker_model! {
    /// CredentialSpec for managed service account (Windows only)
    pub struct CredentialSpec {
        "Config" => config: String,
        "File" => file: String,
        "Registry" => registry: String,
    }
}

docker_model! {
    /// SELinux labels of the container
    pub struct SeLinuxContext {
        "Disable" => disable: bool,
        "User" => user: String,
        "Role" => role: String,
        "Type" => label_type: String,
        "Level" => level: String,
    }
}

docker_model! {
    /// File represents a specific target that is backed by a file.
    pub struct ContainerSpecFile {
        /// Name represents the final filename in the filesystem.
        "Name" => name: String,
        "UID" => uid: String,
        "GID" => gid: String,
        /// Mode represents the FileMode of the file.
        "Mode" => mode: u32,
    }
}

docker_model! {
    pub struct ContainerSpecSecret {
        "File" => file: ContainerSpecFile,
        /// SecretID represents the ID of the specific secret that we're
        /// referencing.
        "SecretID" => secret_id: String,
        /// SecretName is the name of the secret that this references, but this
        /// is just provided for lookup/display purposes.
        "SecretName" => secret_name: String,
    }
}

docker_model! {
    pub struct ContainerSpecConfig {
        "File" => file: ContainerSpecFile,
        /// Runtime represents a target that is not mounted into the container
        /// but is used by the task. `File` and `Runtime` are mutually
        /// exclusive.
        "Runtime" => runtime: EmptyObject,
        "ConfigID" => config_id: String,
        "ConfigName" => config_name: String,
    }
}

docker_model! {
    /// Specification for DNS related configurations in resolver configuration
    /// file (`resolv.conf`).
    pub struct DnsConfig {
        "Nameservers" => nameservers: Vec<String>,
        "Search" => search: Vec<String>,
        "Options" => options: Vec<String>,
    }
}

docker_model! {
    /// Read-only spec type for non-swarm containers attached to swarm overlay
    /// networks.
    pub struct NetworkAttachmentSpec {
        "ContainerID" => container_id: String,
    }
}

docker_model! {
    /// Resource requirements which apply to each individual container created
    /// as part of the service.
    pub struct TaskResources {
        "Limits" => limits: Limit,
        "Reservations" => reservations: ResourceObject,
    }
}

docker_model! {
    /// Specification for the restart policy which applies to containers
    /// created as part of this service.
    pub struct TaskRestartPolicy {
        /// Condition for restart: `none`, `on-failure` or `any`.
        "Condition" => condition: String,
        /// Delay between restart attempts.
        "Delay" => delay: i64,
        /// Maximum attempts to restart a given container before giving up
        /// (default value is 0, which is ignored).
        "MaxAttempts" => max_attempts: i64 = 0,
        /// Windows is the time window used to evaluate the restart policy
        /// (default value is 0, which is unbounded).
        "Window" => window: i64 = 0,
    }
}

docker_model! {
    pub struct Placement {
        /// An array of constraint expressions to limit the set of nodes where
        /// a task can be scheduled, e.g. `node.role==manager`.
        "Constraints" => constraints: Vec<String>,
        /// Preferences provide a way to make the scheduler aware of factors
        /// such as topology.
        "Preferences" => preferences: Vec<PlacementPreference>,
        /// Maximum number of replicas for per node (default value is 0, which
        /// is unlimited)
        "MaxReplicas" => max_replicas: i64 = 0,
        "Platforms" => platforms: Vec<Platform>,
    }
}

docker_model! {
    pub struct PlacementPreference {
        "Spread" => spread: SpreadOver,
    }
}

docker_model! {
    pub struct SpreadOver {
        /// label descriptor, such as `engine.labels.az`.
        "SpreadDescriptor" => spread_descriptor: String,
    }
}

docker_model! {
    /// Specifies the log driver to use for tasks created from this spec.
    pub struct TaskLogDriver {
        "Name" => name: String,
        "Options" => options: BTreeMap<String, String>,
    }
}

docker_model! {
    pub struct TaskStatus {
        "Timestamp" => timestamp: String,
        /// `new`, `allocated`, `pending`, `assigned`, `accepted`,
        /// `preparing`, `ready`, `starting`, `running`, `complete`,
        /// `shutdown`, `failed`, `rejected`, `remove` or `orphaned`.
        "State" => state: String,
        "Message" => message: String,
        "Err" => err: String,
        "ContainerStatus" => container_status: TaskContainerStatus,
    }
}

docker_model! {
    pub struct TaskContainerStatus {
        "ContainerID" => container_id: String,
        "PID" => pid: i64,
        "ExitCode" => exit_code: i64,
    }
}
