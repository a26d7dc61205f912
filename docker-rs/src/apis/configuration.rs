// Copyright (c) Microsoft. All rights reserved.

use crate::codec::UnknownFields;

pub const DEFAULT_BASE_PATH: &str = "http://localhost/v1.43";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Configuration {
    /// Scheme, authority and API version prefix prepended to every endpoint
    /// path.
    pub base_path: String,
    pub user_agent: Option<String>,
    /// How response bodies with keys unknown to the target shape are treated.
    pub unknown_fields: UnknownFields,
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            base_path: DEFAULT_BASE_PATH.to_owned(),
            user_agent: Some(concat!("docker-engine/", env!("CARGO_PKG_VERSION")).to_owned()),
            unknown_fields: UnknownFields::default(),
        }
    }
}

impl Configuration {
    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = base_path.into();
        self
    }

    pub fn with_user_agent(mut self, user_agent: Option<String>) -> Self {
        self.user_agent = user_agent;
        self
    }

    pub fn with_unknown_fields(mut self, unknown_fields: UnknownFields) -> Self {
        self.unknown_fields = unknown_fields;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::{Configuration, DEFAULT_BASE_PATH};
    use crate::codec::UnknownFields;

    #[test]
    fn default_configuration() {
        let configuration = Configuration::default();
        assert_eq!(DEFAULT_BASE_PATH, configuration.base_path);
        assert!(configuration
            .user_agent
            .as_deref()
            .unwrap()
            .starts_with("docker-engine/"));
        assert_eq!(UnknownFields::Ignore, configuration.unknown_fields);
    }
}
