// Copyright (c) Microsoft. All rights reserved.

use std::collections::BTreeMap;

use super::{ObjectVersion, ResourceObject, TlsInfo};

docker_model! {
    pub struct Node {
        "ID" => id: String,
        "Version" => version: ObjectVersion,
        /// Date and time at which the node was added to the swarm in RFC 3339
        /// format with nano-seconds.
        "CreatedAt" => created_at: String,
        "UpdatedAt" => updated_at: String,
        "Spec" => spec: NodeSpec,
        "Description" => description: NodeDescription,
        "Status" => status: NodeStatus,
        "ManagerStatus" => manager_status: Option<ManagerStatus>,
    }
}

docker_model! {
    pub struct NodeSpec {
        /// Name for the node.
        "Name" => name: String,
        "Labels" => labels: BTreeMap<String, String>,
        /// Role of the node: `worker` or `manager`.
        "Role" => role: String,
        /// Availability of the node: `active`, `pause` or `drain`.
        "Availability" => availability: String,
    }
}

docker_model! {
    /// NodeDescription encapsulates the properties of the Node as reported by
    /// the agent.
    pub struct NodeDescription {
        "Hostname" => hostname: String,
        "Platform" => platform: NodePlatform,
        "Resources" => resources: ResourceObject,
        "Engine" => engine: EngineDescription,
        "TLSInfo" => tls_info: TlsInfo,
    }
}

docker_model! {
    pub struct NodePlatform {
        "Architecture" => architecture: String,
        "OS" => os: String,
    }
}

docker_model! {
    /// EngineDescription provides information about an engine.
    pub struct EngineDescription {
        "EngineVersion" => engine_version: String,
        "Labels" => labels: BTreeMap<String, String>,
        "Plugins" => plugins: Vec<EnginePlugin>,
    }
}

docker_model! {
    pub struct EnginePlugin {
        "Type" => plugin_type: String,
        "Name" => name: String,
    }
}

docker_model! {
    /// NodeStatus represents the status of a node.
    ///
    /// It provides the current status of the node, as seen by the manager.
    pub struct NodeStatus {
        /// `unknown`, `down`, `ready` or `disconnected`.
        "State" => state: String,
        "Message" => message: String,
        /// IP address of the node.
        "Addr" => addr: String,
    }
}

docker_model! {
    /// ManagerStatus represents the status of a manager.
    ///
    /// It provides the current status of a node's manager component, if the
    /// node is a manager.
    pub struct ManagerStatus {
        "Leader" => leader: bool = false,
        /// `unknown`, `unreachable` or `reachable`.
        "Reachability" => reachability: String,
        /// The IP address and port at which the manager is reachable.
        "Addr" => addr: String,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::Node;
    use crate::presence::PartialRecord;

    #[test]
    fn worker_node_has_null_manager_status() {
        let node: Node = serde_json::from_value(json!({
            "ID": "24ifsmvkjbyhk",
            "Version": { "Index": 373_531 },
            "Spec": { "Role": "worker", "Availability": "active" },
            "Description": {
                "Hostname": "bf3067039e47",
                "Platform": { "Architecture": "x86_64", "OS": "linux" },
                "Engine": { "EngineVersion": "24.0.0", "Plugins": [{ "Type": "Log", "Name": "awslogs" }] }
            },
            "Status": { "State": "ready", "Addr": "172.17.0.2" },
            "ManagerStatus": null
        }))
        .unwrap();

        assert_eq!(Some(373_531), node.version().unwrap().index());
        assert_eq!(Some("worker"), node.spec().unwrap().role());
        assert_eq!(Some(None), node.manager_status());

        let description = node.description().unwrap();
        assert_eq!(Some("x86_64"), description.platform().unwrap().architecture());
        let plugin = &description.engine().unwrap().plugins().unwrap()[0];
        assert_eq!(Some("Log"), plugin.plugin_type());
        assert!(!description.is_initialized("Resources"));
    }
}
