// Copyright (c) Microsoft. All rights reserved.

use std::collections::BTreeMap;

use super::{ObjectVersion, TlsInfo};

docker_model! {
    /// Swarm cluster as returned by `GET /swarm`, including join tokens.
    pub struct Swarm {
        /// The ID of the swarm.
        "ID" => id: String,
        "Version" => version: ObjectVersion,
        "CreatedAt" => created_at: String,
        "UpdatedAt" => updated_at: String,
        "Spec" => spec: SwarmSpec,
        "TLSInfo" => tls_info: TlsInfo,
        /// Whether there is currently a root CA rotation in progress for the
        /// swarm
        "RootRotationInProgress" => root_rotation_in_progress: bool,
        /// DataPathPort specifies the data path port number for data traffic.
        /// If no port is set or is set to 0, the default port (4789) is used.
        "DataPathPort" => data_path_port: u32,
        "DefaultAddrPool" => default_addr_pool: Vec<String>,
        "SubnetSize" => subnet_size: u32,
        "JoinTokens" => join_tokens: JoinTokens,
    }
}

docker_model! {
    /// ClusterInfo represents information about the swarm as is returned by
    /// the "/info" endpoint. Join-tokens are not included.
    pub struct ClusterInfo {
        "ID" => id: String,
        "Version" => version: ObjectVersion,
        "CreatedAt" => created_at: String,
        "UpdatedAt" => updated_at: String,
        "Spec" => spec: SwarmSpec,
        "TLSInfo" => tls_info: TlsInfo,
        "RootRotationInProgress" => root_rotation_in_progress: bool,
        "DataPathPort" => data_path_port: u32,
        "DefaultAddrPool" => default_addr_pool: Vec<String>,
        "SubnetSize" => subnet_size: u32,
    }
}

docker_model! {
    /// User modifiable swarm configuration.
    pub struct SwarmSpec {
        /// Name of the swarm.
        "Name" => name: String,
        "Labels" => labels: BTreeMap<String, String>,
        "Orchestration" => orchestration: Option<Orchestration>,
        "Raft" => raft: Raft,
        "Dispatcher" => dispatcher: Option<Dispatcher>,
        "CAConfig" => ca_config: Option<CaConfig>,
        "EncryptionConfig" => encryption_config: EncryptionConfig,
        "TaskDefaults" => task_defaults: TaskDefaults,
    }
}

docker_model! {
    /// Orchestration configuration.
    pub struct Orchestration {
        /// The number of historic tasks to keep per instance or node. If
        /// negative, never remove completed or failed tasks.
        "TaskHistoryRetentionLimit" => task_history_retention_limit: i64,
    }
}

docker_model! {
    /// Raft configuration.
    pub struct Raft {
        /// The number of log entries between snapshots.
        "SnapshotInterval" => snapshot_interval: u64,
        "KeepOldSnapshots" => keep_old_snapshots: u64,
        "LogEntriesForSlowFollowers" => log_entries_for_slow_followers: u64,
        /// The number of ticks that a follower will wait for a message from
        /// the leader before becoming a candidate and starting an election.
        "ElectionTick" => election_tick: i64,
        "HeartbeatTick" => heartbeat_tick: i64,
    }
}

docker_model! {
    /// Dispatcher configuration.
    pub struct Dispatcher {
        /// The delay for an agent to send a heartbeat to the dispatcher.
        "HeartbeatPeriod" => heartbeat_period: i64,
    }
}

docker_model! {
    /// CA configuration.
    pub struct CaConfig {
        /// The duration node certificates are issued for.
        "NodeCertExpiry" => node_cert_expiry: i64,
        "ExternalCAs" => external_cas: Vec<ExternalCa>,
        /// The desired signing CA certificate for all swarm node TLS leaf
        /// certificates, in PEM format.
        "SigningCACert" => signing_ca_cert: String,
        "SigningCAKey" => signing_ca_key: String,
        /// An integer whose purpose is to force swarm to generate a new
        /// signing CA certificate and key, if none have been specified.
        "ForceRotate" => force_rotate: u64,
    }
}

docker_model! {
    pub struct ExternalCa {
        /// Protocol for communication with the external CA (currently only
        /// `cfssl` is supported).
        "Protocol" => protocol: String = "cfssl",
        /// URL where certificate signing requests should be sent.
        "URL" => url: String,
        "Options" => options: BTreeMap<String, String>,
        "CACert" => ca_cert: String,
    }
}

docker_model! {
    /// Parameters related to encryption-at-rest.
    pub struct EncryptionConfig {
        /// If set, generate a key and use it to lock data stored on the
        /// managers.
        "AutoLockManagers" => auto_lock_managers: bool,
    }
}

docker_model! {
    /// Defaults for creating tasks in this cluster.
    pub struct TaskDefaults {
        "LogDriver" => log_driver: TaskDefaultsLogDriver,
    }
}

docker_model! {
    /// The log driver to use for tasks created in the orchestrator if
    /// unspecified by a service.
    pub struct TaskDefaultsLogDriver {
        "Name" => name: String,
        "Options" => options: BTreeMap<String, String>,
    }
}

docker_model! {
    /// JoinTokens contains the tokens workers and managers need to join the
    /// swarm.
    pub struct JoinTokens {
        "Worker" => worker: String,
        "Manager" => manager: String,
    }
}

docker_model! {
    /// Body of `POST /swarm/init`.
    pub struct SwarmInitRequest {
        /// Listen address used for inter-manager communication, as well as
        /// determining the networking interface used for the VXLAN Tunnel
        /// Endpoint (VTEP).
        "ListenAddr" => listen_addr: String,
        /// Externally reachable address advertised to other nodes.
        "AdvertiseAddr" => advertise_addr: String,
        "DataPathAddr" => data_path_addr: String,
        "DataPathPort" => data_path_port: u32,
        "DefaultAddrPool" => default_addr_pool: Vec<String>,
        /// Force creation of a new swarm.
        "ForceNewCluster" => force_new_cluster: bool,
        "SubnetSize" => subnet_size: u32,
        "Spec" => spec: SwarmSpec,
    }
}

docker_model! {
    /// Body of `POST /swarm/join`.
    pub struct SwarmJoinRequest {
        "ListenAddr" => listen_addr: String,
        "AdvertiseAddr" => advertise_addr: String,
        "DataPathAddr" => data_path_addr: String,
        /// Addresses of manager nodes already participating in the swarm.
        "RemoteAddrs" => remote_addrs: Vec<String>,
        /// Secret token for joining this swarm.
        "JoinToken" => join_token: String,
    }
}

docker_model! {
    /// Body of `POST /swarm/unlock`.
    pub struct SwarmUnlockRequest {
        "UnlockKey" => unlock_key: String,
    }
}

docker_model! {
    /// Represents generic information about swarm.
    pub struct SwarmInfo {
        /// Unique identifier of for this node in the swarm.
        "NodeID" => node_id: String,
        /// IP address at which this node can be reached by other nodes in the
        /// swarm.
        "NodeAddr" => node_addr: String,
        /// Current local status of this node: `""`, `inactive`, `pending`,
        /// `active`, `error` or `locked`.
        "LocalNodeState" => local_node_state: String,
        "ControlAvailable" => control_available: bool,
        "Error" => error: String,
        /// List of ID's and addresses of other managers in the swarm.
        "RemoteManagers" => remote_managers: Option<Vec<PeerNode>>,
        /// Total number of nodes in the swarm.
        "Nodes" => nodes: Option<i64>,
        /// Total number of managers in the swarm.
        "Managers" => managers: Option<i64>,
        "Cluster" => cluster: Option<ClusterInfo>,
    }
}

docker_model! {
    /// Represents a peer-node in the swarm
    pub struct PeerNode {
        "NodeID" => node_id: String,
        "Addr" => addr: String,
    }
}

docker_model! {
    pub struct UnlockKeyResponse {
        /// The swarm's unlock key.
        "UnlockKey" => unlock_key: String,
    }
}
