// Copyright (c) Microsoft. All rights reserved.

#![deny(rust_2018_idioms)]
#![deny(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate
)]

use std::path::{Path, PathBuf};

use docker_engine::codec::UnknownFields;
use docker_engine::Configuration;

mod error;

pub use crate::error::Error;

pub const CONFIG_ENV: &str = "DOCKER_ENGINE_CONFIG";
pub const CONFIG_DIR_ENV: &str = "DOCKER_ENGINE_CONFIG_DIR";

const DEFAULT_CONFIG_PATH: &str = "/etc/docker-engine/config.toml";
const DEFAULT_CONFIG_DIR: &str = "/etc/docker-engine/config.d";

/// Client settings for talking to the Engine API.
///
/// ```toml
/// base_path = "http://localhost/v1.43"
/// user_agent = "edge-agent/1.4"
/// unknown_fields = "reject"
/// ```
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct Settings {
    #[serde(default = "default_base_path")]
    base_path: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    user_agent: Option<String>,

    #[serde(default)]
    unknown_fields: UnknownFields,
}

fn default_base_path() -> String {
    docker_engine::apis::configuration::DEFAULT_BASE_PATH.to_owned()
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            base_path: default_base_path(),
            user_agent: None,
            unknown_fields: UnknownFields::default(),
        }
    }
}

impl Settings {
    /// Load the client settings.
    ///
    /// Settings are made up of /etc/docker-engine/config.toml (overridden by the `DOCKER_ENGINE_CONFIG` env var)
    /// and any `.toml` files in the /etc/docker-engine/config.d directory (overridden by the
    /// `DOCKER_ENGINE_CONFIG_DIR` env var), applied in file name order.
    pub fn new() -> Result<Self, Error> {
        let config_path =
            std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        let config_directory_path =
            std::env::var(CONFIG_DIR_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());

        Settings::from_paths(Path::new(&config_path), Some(Path::new(&config_directory_path)))
    }

    pub fn from_paths(
        config_path: &Path,
        config_directory_path: Option<&Path>,
    ) -> Result<Self, Error> {
        log::debug!("Reading settings from {}", config_path.display());
        let mut config = read_table(config_path)?;
        check_table(config_path, &config)?;

        if let Some(config_directory_path) = config_directory_path {
            for fragment_path in fragments(config_directory_path)? {
                log::debug!("Applying settings fragment {}", fragment_path.display());
                let fragment = read_table(&fragment_path)?;
                check_table(&fragment_path, &fragment)?;
                merge(&mut config, fragment);
            }
        }

        let settings: Settings = toml::Value::Table(config)
            .try_into()
            .map_err(|err| Error::parse(config_path, err))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    pub fn user_agent(&self) -> Option<&str> {
        self.user_agent.as_deref()
    }

    pub fn unknown_fields(&self) -> UnknownFields {
        self.unknown_fields
    }

    /// The endpoint client configuration these settings describe.
    pub fn to_configuration(&self) -> Result<Configuration, Error> {
        self.validate()?;

        let mut configuration = Configuration::default()
            .with_base_path(self.base_path.trim_end_matches('/'))
            .with_unknown_fields(self.unknown_fields);
        if let Some(user_agent) = &self.user_agent {
            configuration = configuration.with_user_agent(Some(user_agent.clone()));
        }
        Ok(configuration)
    }

    fn validate(&self) -> Result<(), Error> {
        let invalid =
            |message: &str| Error::InvalidBasePath(self.base_path.clone(), message.to_owned());

        let url = url::Url::parse(&self.base_path).map_err(|err| invalid(&err.to_string()))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(invalid("scheme must be http or https"));
        }
        if url.host().is_none() {
            return Err(invalid("missing host"));
        }
        if url.query().is_some() || url.fragment().is_some() {
            return Err(invalid("query and fragment are not allowed"));
        }
        Ok(())
    }
}

fn read_table(path: &Path) -> Result<toml::value::Table, Error> {
    let contents = std::fs::read_to_string(path).map_err(|err| Error::read(path, err))?;
    toml::from_str(&contents).map_err(|err| Error::parse(path, err))
}

// Every field has a default, so each file must deserialize on its own.
fn check_table(path: &Path, table: &toml::value::Table) -> Result<(), Error> {
    toml::Value::Table(table.clone())
        .try_into::<Settings>()
        .map(drop)
        .map_err(|err| Error::parse(path, err))
}

// A missing fragment directory is the same as an empty one.
fn fragments(directory: &Path) -> Result<Vec<PathBuf>, Error> {
    let entries = match std::fs::read_dir(directory) {
        Ok(entries) => entries,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(err) => return Err(Error::read(directory, err)),
    };

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry.map_err(|err| Error::read(directory, err))?.path();
        if path.is_file() && path.extension().map_or(false, |extension| extension == "toml") {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

fn merge(base: &mut toml::value::Table, overlay: toml::value::Table) {
    for (key, value) in overlay {
        match value {
            toml::Value::Table(value) => {
                if let Some(toml::Value::Table(existing)) = base.get_mut(&key) {
                    merge(existing, value);
                } else {
                    base.insert(key, toml::Value::Table(value));
                }
            }
            value => {
                base.insert(key, value);
            }
        }
    }
}
