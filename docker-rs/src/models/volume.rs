// Copyright (c) Microsoft. All rights reserved.

use std::collections::BTreeMap;

docker_model! {
    pub struct Volume {
        /// Name of the volume.
        "Name" => name: String,
        /// Name of the volume driver used by the volume.
        "Driver" => driver: String,
        /// Mount path of the volume on the host.
        "Mountpoint" => mountpoint: String,
        /// Date/Time the volume was created.
        "CreatedAt" => created_at: String,
        /// Low-level details about the volume, provided by the volume driver.
        "Status" => status: BTreeMap<String, serde_json::Value>,
        "Labels" => labels: BTreeMap<String, String>,
        /// The level at which the volume exists: `local` for machine level or
        /// `global` for cluster-wide level.
        "Scope" => scope: String = "local",
        /// The driver specific options used when creating the volume.
        "Options" => options: BTreeMap<String, String>,
        "UsageData" => usage_data: Option<VolumeUsageData>,
    }
}

docker_model! {
    /// Usage details about the volume. This information is used by the
    /// `GET /system/df` endpoint, and omitted in other endpoints.
    pub struct VolumeUsageData {
        /// Amount of disk space used by the volume (in bytes). `-1` if the
        /// size could not be calculated.
        "Size" => size: i64,
        /// The number of containers referencing this volume. `-1` if the
        /// reference-count is not available.
        "RefCount" => ref_count: i64,
    }
}

docker_model! {
    /// Volume configuration
    pub struct VolumeCreateBody {
        /// The new volume's name. If not specified, Docker generates a name.
        "Name" => name: String,
        /// Name of the volume driver to use.
        "Driver" => driver: String = "local",
        /// A mapping of driver options and values. These options are passed
        /// directly to the driver and are driver specific.
        "DriverOpts" => driver_opts: BTreeMap<String, String>,
        /// User-defined key/value metadata.
        "Labels" => labels: BTreeMap<String, String>,
    }
}

docker_model! {
    /// Volume list response
    pub struct VolumeListResponse {
        "Volumes" => volumes: Vec<Volume>,
        /// Warnings that occurred when fetching the list of volumes.
        "Warnings" => warnings: Option<Vec<String>>,
    }
}

docker_model! {
    pub struct VolumePruneResponse {
        /// Volumes that were deleted
        "VolumesDeleted" => volumes_deleted: Vec<String>,
        /// Disk space reclaimed in bytes
        "SpaceReclaimed" => space_reclaimed: i64,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use serde_json::json;

    use super::{Volume, VolumeCreateBody, VolumeListResponse};
    use crate::codec;
    use crate::presence::PartialRecord;

    #[test]
    fn create_body_with_driver_opts() {
        let mut opts = BTreeMap::new();
        opts.insert("type".to_string(), "tmpfs".to_string());
        opts.insert("device".to_string(), "tmpfs".to_string());

        let volume = VolumeCreateBody::new()
            .with_name("tardis".to_string())
            .with_driver_opts(opts);

        assert_eq!(
            json!({
                "Name": "tardis",
                "DriverOpts": { "device": "tmpfs", "type": "tmpfs" }
            }),
            serde_json::to_value(&volume).unwrap()
        );
        assert_eq!("local", volume.driver());
        assert_eq!(vec!["name", "driver_opts"], volume.initialized_fields());
    }

    #[test]
    fn list_response_with_null_warnings() {
        let list: VolumeListResponse = serde_json::from_value(json!({
            "Volumes": [{
                "Name": "tardis",
                "Driver": "custom",
                "Mountpoint": "/var/lib/docker/volumes/tardis",
                "Labels": { "com.example.some-label": "some-value" },
                "Scope": "local",
                "UsageData": null
            }],
            "Warnings": null
        }))
        .unwrap();

        assert_eq!(Some(None), list.warnings());
        let volume = &list.volumes().unwrap()[0];
        assert_eq!(Some("custom"), volume.driver());
        assert_eq!("local", volume.scope());
        assert!(volume.is_initialized("Scope"));
        assert_eq!(Some(None), volume.usage_data());
        assert!(!volume.is_initialized("Options"));
    }

    #[test]
    fn driver_status_keeps_arbitrary_values() {
        let input = r#"{"Name":"v","Status":{"hello":"world","info":{"size":"1G"}}}"#;

        let volume: Volume = codec::from_str_strict(input).unwrap();
        let status = volume.status().unwrap();
        assert_eq!(json!("world"), status["hello"]);
        assert_eq!(json!({ "size": "1G" }), status["info"]);

        assert_eq!(input, codec::to_string(&volume).unwrap());
    }
}
