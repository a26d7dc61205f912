// Copyright (c) Microsoft. All rights reserved.

use std::collections::BTreeMap;

docker_model! {
    /// The version number of the object such as node, service, etc. This is
    /// needed to avoid conflicting writes. The client must send the version
    /// number along with the modified specification when updating these
    /// objects.
    pub struct ObjectVersion {
        "Index" => index: u64,
    }
}

docker_model! {
    /// An object with no fields, used where the Engine API expects `{}` as a
    /// placeholder value (exposed ports, volumes, global service mode).
    pub struct EmptyObject {}
}

docker_model! {
    /// Represents an error.
    pub struct ErrorResponse {
        /// The error message.
        "message" => message: String,
    }
}

docker_model! {
    /// Response to an API call that returns just an Id
    pub struct IdResponse {
        /// The id of the newly created object.
        "Id" => id: String,
    }
}

docker_model! {
    /// Platform represents the platform (Arch/OS).
    pub struct Platform {
        /// Architecture represents the hardware architecture (for example,
        /// `x86_64`).
        "Architecture" => architecture: String,
        /// OS represents the Operating System (for example, `linux` or
        /// `windows`).
        "OS" => os: String,
    }
}

docker_model! {
    /// Driver represents a driver (network, logging, secrets).
    pub struct Driver {
        /// Name of the driver.
        "Name" => name: String,
        /// Key/value map of driver-specific options.
        "Options" => options: BTreeMap<String, String>,
    }
}

docker_model! {
    pub struct NamedResourceSpec {
        "Kind" => kind: String,
        "Value" => value: String,
    }
}

docker_model! {
    pub struct DiscreteResourceSpec {
        "Kind" => kind: String,
        "Value" => value: i64,
    }
}

docker_model! {
    /// User-defined resource. Exactly one of the two specs is set.
    pub struct GenericResource {
        "NamedResourceSpec" => named_resource_spec: NamedResourceSpec,
        "DiscreteResourceSpec" => discrete_resource_spec: DiscreteResourceSpec,
    }
}

docker_model! {
    /// An object describing the resources which can be advertised by a node
    /// and requested by a task.
    pub struct ResourceObject {
        "NanoCPUs" => nano_cpus: i64,
        "MemoryBytes" => memory_bytes: i64,
        "GenericResources" => generic_resources: Vec<GenericResource>,
    }
}

docker_model! {
    /// An object describing a limit on resources which can be requested by a
    /// task.
    pub struct Limit {
        "NanoCPUs" => nano_cpus: i64,
        "MemoryBytes" => memory_bytes: i64,
        /// Limits the maximum number of PIDs in the container. Set `0` for
        /// unlimited.
        "Pids" => pids: i64,
    }
}

docker_model! {
    /// Information about the issuer of leaf TLS certificates and the trusted
    /// root CA certificate.
    pub struct TlsInfo {
        /// The root CA certificate(s) that are used to validate leaf TLS
        /// certificates.
        "TrustRoot" => trust_root: String,
        /// The base64-url-safe-encoded raw subject bytes of the issuer.
        "CertIssuerSubject" => cert_issuer_subject: String,
        /// The base64-url-safe-encoded raw public key bytes of the issuer.
        "CertIssuerPublicKey" => cert_issuer_public_key: String,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{EmptyObject, GenericResource, NamedResourceSpec, ObjectVersion};
    use crate::presence::PartialRecord;

    #[test]
    fn empty_object_round_trips_as_braces() {
        let empty: EmptyObject = serde_json::from_value(json!({})).unwrap();
        assert!(empty.is_empty());
        assert!(EmptyObject::FIELDS.is_empty());
        assert_eq!("{}", serde_json::to_string(&empty).unwrap());
    }

    #[test]
    fn object_version_index() {
        let version: ObjectVersion = "{\"Index\":373531}".parse().unwrap();
        assert_eq!(Some(373_531), version.index());
    }

    #[test]
    fn generic_resource_keeps_only_the_spec_that_was_set() {
        let resource = GenericResource::new().with_named_resource_spec(
            NamedResourceSpec::new()
                .with_kind("GPU".to_string())
                .with_value("UUID1".to_string()),
        );

        assert_eq!(
            json!({ "NamedResourceSpec": { "Kind": "GPU", "Value": "UUID1" } }),
            serde_json::to_value(&resource).unwrap()
        );
        assert_eq!(vec!["named_resource_spec"], resource.initialized_fields());
    }
}
