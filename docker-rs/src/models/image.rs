// Copyright (c) Microsoft. All rights reserved.

use std::collections::BTreeMap;

use super::{ContainerConfig, GraphDriverData};

docker_model! {
    /// One entry of `GET /images/json`.
    pub struct ImageSummary {
        "Id" => id: String,
        "ParentId" => parent_id: String,
        "RepoTags" => repo_tags: Vec<String>,
        "RepoDigests" => repo_digests: Vec<String>,
        "Created" => created: i64,
        "Size" => size: i64,
        /// Total size of image layers that are shared between this image and
        /// other images. `-1` if not calculated.
        "SharedSize" => shared_size: i64,
        "VirtualSize" => virtual_size: i64,
        "Labels" => labels: BTreeMap<String, String>,
        /// Number of containers using this image. `-1` if not calculated.
        "Containers" => containers: i64,
    }
}

docker_model! {
    /// Information about an image in the local image cache.
    pub struct ImageInspect {
        "Id" => id: String,
        "RepoTags" => repo_tags: Vec<String>,
        "RepoDigests" => repo_digests: Vec<String>,
        /// ID of the parent image. Empty when the image has no parent.
        "Parent" => parent: String,
        "Comment" => comment: String,
        "Created" => created: String,
        /// The ID of the container that was used to create the image.
        "Container" => container: String,
        "ContainerConfig" => container_config: ContainerConfig,
        "DockerVersion" => docker_version: String,
        "Author" => author: String,
        "Config" => config: ContainerConfig,
        "Architecture" => architecture: String,
        "Variant" => variant: String,
        "Os" => os: String,
        "OsVersion" => os_version: String,
        /// Total size of the image including all layers it is composed of.
        "Size" => size: i64,
        "VirtualSize" => virtual_size: i64,
        "GraphDriver" => graph_driver: GraphDriverData,
        "RootFS" => root_fs: ImageRootFs,
        "Metadata" => metadata: ImageMetadata,
    }
}

docker_model! {
    /// Information about the image's RootFS, including the layer IDs.
    pub struct ImageRootFs {
        "Type" => rootfs_type: String,
        "Layers" => layers: Vec<String>,
    }
}

docker_model! {
    /// Additional metadata of the image in the local cache. This information
    /// is local to the daemon, and not part of the image itself.
    pub struct ImageMetadata {
        /// Date and time at which the image was last tagged in RFC 3339 format
        /// with nano-seconds.
        "LastTagTime" => last_tag_time: Option<String>,
    }
}

docker_model! {
    pub struct ImageDeleteResponseItem {
        /// The image ID of an image that was untagged
        "Untagged" => untagged: String,
        /// The image ID of an image that was deleted
        "Deleted" => deleted: String,
    }
}

docker_model! {
    pub struct ImagePruneResponse {
        /// Images that were deleted
        "ImagesDeleted" => images_deleted: Vec<ImageDeleteResponseItem>,
        /// Disk space reclaimed in bytes
        "SpaceReclaimed" => space_reclaimed: i64,
    }
}

docker_model! {
    /// individual image layer information in response to ImageHistory
    /// operation
    pub struct HistoryResponseItem {
        "Id" => id: String,
        "Created" => created: i64,
        "CreatedBy" => created_by: String,
        "Tags" => tags: Vec<String>,
        "Size" => size: i64,
        "Comment" => comment: String,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{ImageInspect, ImagePruneResponse, ImageSummary};
    use crate::presence::PartialRecord;

    #[test]
    fn summary_distinguishes_not_calculated_from_absent() {
        let summary: ImageSummary = serde_json::from_value(json!({
            "Id": "sha256:ec3f0931a6e6b6855d76b2d7b0be30e81860baccd891b2e243280bf1cd8ad710",
            "RepoTags": ["ubuntu:22.04"],
            "Created": 1_644_009_612,
            "SharedSize": -1,
            "Containers": 0
        }))
        .unwrap();

        assert_eq!(Some(-1), summary.shared_size());
        assert_eq!(Some(0), summary.containers());
        assert_eq!(None, summary.size());
        assert_eq!(Some(&["ubuntu:22.04".to_string()][..]), summary.repo_tags());
    }

    #[test]
    fn inspect_keeps_null_last_tag_time() {
        let inspect: ImageInspect = serde_json::from_value(json!({
            "Id": "sha256:ec3f",
            "RootFS": { "Type": "layers", "Layers": ["sha256:1"] },
            "Metadata": { "LastTagTime": null }
        }))
        .unwrap();

        assert_eq!(Some("layers"), inspect.root_fs().unwrap().rootfs_type());
        let metadata = inspect.metadata().unwrap();
        assert!(metadata.is_initialized("LastTagTime"));
        assert_eq!(Some(None), metadata.last_tag_time());
    }

    #[test]
    fn prune_response_lists_deleted_images() {
        let prune: ImagePruneResponse = serde_json::from_value(json!({
            "ImagesDeleted": [{ "Untagged": "busybox:latest" }, { "Deleted": "sha256:e4a7" }],
            "SpaceReclaimed": 0
        }))
        .unwrap();

        let deleted = prune.images_deleted().unwrap();
        assert_eq!(vec!["untagged"], deleted[0].initialized_fields());
        assert_eq!(vec!["deleted"], deleted[1].initialized_fields());
        assert_eq!(Some(0), prune.space_reclaimed());
    }
}
