// Copyright (c) Microsoft. All rights reserved.

use std::collections::BTreeMap;

use log::{log, Level};
use serde::{Deserialize, Serialize};

use crate::codec;

/// Splits a container `Env` list (`KEY=VALUE` entries) into a map. Entries
/// without `=` map to an empty value; later duplicates win.
pub fn parse_docker_env(docker_env: Option<&[String]>) -> BTreeMap<&str, &str> {
    let mut result = BTreeMap::new();
    if let Some(env) = docker_env {
        result.extend(env.iter().filter_map(|s| {
            let mut tokens = s.splitn(2, '=');
            tokens.next().map(|key| (key, tokens.next().unwrap_or("")))
        }));
    }

    result
}

/// The `filters` query parameter accepted by list and prune endpoints, e.g.
/// `{"label":["com.example=1"],"dangling":["true"]}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Filters(BTreeMap<String, Vec<String>>);

impl Filters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `value` to the values of filter `key`.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.entry(key.into()).or_default().push(value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.0.get(key).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// JSON-encodes the filters for use as a query value. Empty filters are
    /// omitted from the query altogether.
    pub fn encode(&self) -> Result<Option<String>, codec::Error> {
        if self.is_empty() {
            Ok(None)
        } else {
            codec::to_string(self).map(Some)
        }
    }
}

pub fn log_failure(level: Level, fail: &dyn std::error::Error) {
    log!(level, "{}", fail);
    let mut cur = fail;
    while let Some(cause) = cur.source() {
        log!(level, "\tcaused by: {}", cause);
        cur = cause;
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_docker_env, Filters};

    #[test]
    fn parse_env_splits_on_first_equals() {
        let env = vec![
            "PATH=/usr/bin:/bin".to_string(),
            "OPTS=a=b".to_string(),
            "EMPTY=".to_string(),
            "BARE".to_string(),
        ];

        let parsed = parse_docker_env(Some(&env));
        assert_eq!(Some(&"/usr/bin:/bin"), parsed.get("PATH"));
        assert_eq!(Some(&"a=b"), parsed.get("OPTS"));
        assert_eq!(Some(&""), parsed.get("EMPTY"));
        assert_eq!(Some(&""), parsed.get("BARE"));
    }

    #[test]
    fn parse_env_none_is_empty() {
        assert!(parse_docker_env(None).is_empty());
    }

    #[test]
    fn filters_encode_as_json_object() {
        let filters = Filters::new()
            .with("label", "net.azure-devices.edge.owner=Microsoft.Azure.Devices.Edge.Agent")
            .with("label", "tier=frontend")
            .with("dangling", "true");

        assert_eq!(
            Some(
                r#"{"dangling":["true"],"label":["net.azure-devices.edge.owner=Microsoft.Azure.Devices.Edge.Agent","tier=frontend"]}"#
                    .to_string()
            ),
            filters.encode().unwrap()
        );
        assert_eq!(Some(&["true".to_string()][..]), filters.get("dangling"));
    }

    #[test]
    fn empty_filters_are_omitted() {
        assert_eq!(None, Filters::new().encode().unwrap());
    }
}
