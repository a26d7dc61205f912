// Copyright (c) Microsoft. All rights reserved.

docker_model! {
    /// BuildCache contains information about a build cache record.
    pub struct BuildCache {
        /// Unique ID of the build cache record.
        "ID" => id: String,
        /// ID of the parent build cache record.
        "Parents" => parents: Option<Vec<String>>,
        /// Cache record type: `internal`, `frontend`, `source.local`,
        /// `source.git.checkout`, `exec.cachemount` or `regular`.
        "Type" => cache_type: String,
        /// Description of the build-step that produced the build cache.
        "Description" => description: String,
        /// Indicates if the build cache is in use.
        "InUse" => in_use: bool,
        /// Indicates if the build cache is shared.
        "Shared" => shared: bool,
        /// Amount of disk space used by the build cache (in bytes).
        "Size" => size: i64,
        "CreatedAt" => created_at: String,
        "LastUsedAt" => last_used_at: Option<String>,
        "UsageCount" => usage_count: i64,
    }
}

docker_model! {
    pub struct BuildPruneResponse {
        "CachesDeleted" => caches_deleted: Vec<String>,
        /// Disk space reclaimed in bytes
        "SpaceReclaimed" => space_reclaimed: i64,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::BuildCache;
    use crate::presence::PartialRecord;

    #[test]
    fn never_used_cache_has_null_last_used() {
        let cache: BuildCache = serde_json::from_value(json!({
            "ID": "ndlpt0hhvkqcdfkputsk4cq9c",
            "Parents": null,
            "Type": "regular",
            "InUse": false,
            "Shared": true,
            "Size": 51,
            "LastUsedAt": null,
            "UsageCount": 0
        }))
        .unwrap();

        assert_eq!(Some(None), cache.parents());
        assert_eq!(Some(None), cache.last_used_at());
        assert_eq!(Some(0), cache.usage_count());
        assert_eq!(Some(false), cache.in_use());
        assert!(!cache.is_initialized("Description"));
    }
}
