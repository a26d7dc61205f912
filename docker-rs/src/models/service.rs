// Copyright (c) Microsoft. All rights reserved.

use std::collections::BTreeMap;

use super::{EmptyObject, ObjectVersion, TaskSpec};

docker_model! {
    pub struct Service {
        "ID" => id: String,
        "Version" => version: ObjectVersion,
        "CreatedAt" => created_at: String,
        "UpdatedAt" => updated_at: String,
        "Spec" => spec: ServiceSpec,
        "Endpoint" => endpoint: ServiceEndpoint,
        "UpdateStatus" => update_status: ServiceUpdateStatus,
        "ServiceStatus" => service_status: ServiceStatus,
        "JobStatus" => job_status: ServiceJobStatus,
    }
}

docker_model! {
    /// User modifiable configuration for a service.
    pub struct ServiceSpec {
        /// Name of the service.
        "Name" => name: String,
        "Labels" => labels: BTreeMap<String, String>,
        "TaskTemplate" => task_template: TaskSpec,
        "Mode" => mode: ServiceMode,
        "UpdateConfig" => update_config: UpdateConfig,
        "RollbackConfig" => rollback_config: UpdateConfig,
        /// Specifies which networks the service should attach to.
        "Networks" => networks: Vec<NetworkAttachmentConfig>,
        "EndpointSpec" => endpoint_spec: EndpointSpec,
    }
}

docker_model! {
    /// Scheduling mode for the service. Exactly one member is set.
    pub struct ServiceMode {
        "Replicated" => replicated: ReplicatedService,
        "Global" => global: EmptyObject,
        /// The mode used for services with a finite number of tasks that run
        /// to a completed state.
        "ReplicatedJob" => replicated_job: ReplicatedJob,
        /// The mode used for services which run a task to the completed state
        /// on each valid node.
        "GlobalJob" => global_job: EmptyObject,
    }
}

docker_model! {
    pub struct ReplicatedService {
        "Replicas" => replicas: i64,
    }
}

docker_model! {
    pub struct ReplicatedJob {
        /// The maximum number of replicas to run simultaneously.
        "MaxConcurrent" => max_concurrent: i64 = 1,
        /// The total number of replicas desired to reach the Completed state.
        /// If unset, will default to the value of `MaxConcurrent`.
        "TotalCompletions" => total_completions: i64,
    }
}

docker_model! {
    /// Specification for the update or rollback strategy of the service.
    pub struct UpdateConfig {
        /// Maximum number of tasks to be updated in one iteration (0 means
        /// unlimited parallelism).
        "Parallelism" => parallelism: i64,
        /// Amount of time between updates, in nanoseconds.
        "Delay" => delay: i64,
        /// Action to take if an updated task fails to run, or stops running
        /// during the update: `continue`, `pause` or `rollback`.
        "FailureAction" => failure_action: String,
        /// Amount of time to monitor each updated task for failures, in
        /// nanoseconds.
        "Monitor" => monitor: i64,
        /// The fraction of tasks that may fail during an update before the
        /// failure action is invoked, specified as a floating point number
        /// between 0 and 1.
        "MaxFailureRatio" => max_failure_ratio: f64 = 0.0,
        /// The order of operations when rolling out an updated task:
        /// `stop-first` or `start-first`.
        "Order" => order: String,
    }
}

docker_model! {
    /// Properties that can be configured to access and load balance a
    /// service.
    pub struct EndpointSpec {
        /// The mode of resolution to use for internal load balancing between
        /// tasks: `vip` or `dnsrr`.
        "Mode" => mode: String = "vip",
        /// List of exposed ports that this service is accessible on from the
        /// outside. Ports can only be provided if `vip` resolution mode is
        /// used.
        "Ports" => ports: Vec<EndpointPortConfig>,
    }
}

docker_model! {
    pub struct EndpointPortConfig {
        "Name" => name: String,
        /// `tcp`, `udp` or `sctp`.
        "Protocol" => protocol: String,
        /// The port inside the container.
        "TargetPort" => target_port: i64,
        /// The port on the swarm hosts.
        "PublishedPort" => published_port: i64,
        /// The mode in which port is published: `ingress` makes the target
        /// port accessible on every node, `host` bypasses the routing mesh.
        "PublishMode" => publish_mode: String = "ingress",
    }
}

docker_model! {
    pub struct ServiceEndpoint {
        "Spec" => spec: EndpointSpec,
        "Ports" => ports: Vec<EndpointPortConfig>,
        "VirtualIPs" => virtual_ips: Vec<EndpointVirtualIp>,
    }
}

docker_model! {
    pub struct EndpointVirtualIp {
        "NetworkID" => network_id: String,
        "Addr" => addr: String,
    }
}

docker_model! {
    /// The status of a service update.
    pub struct ServiceUpdateStatus {
        /// `updating`, `paused`, `completed`, `rollback_started`,
        /// `rollback_paused` or `rollback_completed`.
        "State" => state: String,
        "StartedAt" => started_at: String,
        "CompletedAt" => completed_at: String,
        "Message" => message: String,
    }
}

docker_model! {
    /// The status of the service's tasks. Provided only when requested as part
    /// of a ServiceList operation.
    pub struct ServiceStatus {
        /// The number of tasks for the service currently in the Running state.
        "RunningTasks" => running_tasks: u64,
        /// The number of tasks for the service desired to be running.
        "DesiredTasks" => desired_tasks: u64,
        /// The number of tasks for a job that are in the Completed state.
        "CompletedTasks" => completed_tasks: u64,
    }
}

docker_model! {
    /// The status of the service when it is in one of ReplicatedJob or
    /// GlobalJob modes. Absent on Replicated and Global mode services.
    pub struct ServiceJobStatus {
        "JobIteration" => job_iteration: ObjectVersion,
        /// The last time, as observed by the server, that this job was
        /// started.
        "LastExecution" => last_execution: String,
    }
}

docker_model! {
    pub struct ServiceCreateResponse {
        /// The ID of the created service.
        "ID" => id: String,
        /// Optional warning message.
        "Warning" => warning: String,
    }
}

docker_model! {
    pub struct ServiceUpdateResponse {
        /// Optional warning messages
        "Warnings" => warnings: Vec<String>,
    }
}

docker_model! {
    /// Specifies how a service should be attached to a particular network.
    pub struct NetworkAttachmentConfig {
        /// The target network for attachment. Must be a network name or ID.
        "Target" => target: String,
        /// Discoverable alternate names for the service on this network.
        "Aliases" => aliases: Vec<String>,
        "DriverOpts" => driver_opts: BTreeMap<String, String>,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{EndpointPortConfig, EndpointSpec, ServiceMode, ServiceSpec, UpdateConfig};
    use crate::models::{ContainerSpec, EmptyObject, TaskSpec};
    use crate::presence::PartialRecord;

    #[test]
    fn global_mode_is_an_empty_object() {
        let container_spec = ContainerSpec::new().with_image("nginx:alpine".to_string());
        let spec = ServiceSpec::new()
            .with_name("web".to_string())
            .with_mode(ServiceMode::new().with_global(EmptyObject::new()))
            .with_task_template(TaskSpec::new().with_container_spec(container_spec));

        assert_eq!(
            json!({
                "Name": "web",
                "TaskTemplate": { "ContainerSpec": { "Image": "nginx:alpine" } },
                "Mode": { "Global": {} }
            }),
            serde_json::to_value(&spec).unwrap()
        );
    }

    #[test]
    fn zero_failure_ratio_is_sent_when_set() {
        let unset = UpdateConfig::new().with_parallelism(2);
        assert_eq!(0.0, unset.max_failure_ratio());
        assert_eq!(json!({ "Parallelism": 2 }), serde_json::to_value(&unset).unwrap());

        let zero = unset.with_max_failure_ratio(0.0);
        assert_eq!(
            json!({ "Parallelism": 2, "MaxFailureRatio": 0.0 }),
            serde_json::to_value(&zero).unwrap()
        );
    }

    #[test]
    fn endpoint_defaults() {
        let spec = EndpointSpec::new().with_ports(vec![EndpointPortConfig::new()
            .with_protocol("tcp".to_string())
            .with_target_port(80)
            .with_published_port(8080)]);

        assert_eq!("vip", spec.mode());
        let port = &spec.ports().unwrap()[0];
        assert_eq!("ingress", port.publish_mode());
        assert!(!port.is_initialized("PublishMode"));
        assert_eq!(Some(8080), port.published_port());
    }
}
