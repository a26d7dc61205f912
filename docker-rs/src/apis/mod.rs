// Copyright (c) Microsoft. All rights reserved.

//! Typed clients for the Docker Engine HTTP API.

use http::{Method, StatusCode};

use crate::codec;

mod build_api;
mod client;
pub mod configuration;
mod container_api;
mod image_api;
mod network_api;
mod plugin_api;
mod swarm_api;
mod system_api;
mod transport;
mod volume_api;

pub use self::build_api::BuildApi;
pub use self::client::DockerApiClient;
pub use self::configuration::Configuration;
pub use self::container_api::ContainerApi;
pub use self::image_api::ImageApi;
pub use self::network_api::NetworkApi;
pub use self::plugin_api::PluginApi;
pub use self::swarm_api::SwarmApi;
pub use self::system_api::SystemApi;
pub use self::transport::Transport;
pub use self::volume_api::VolumeApi;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("could not build request {method} {uri}: {message}")]
    InvalidRequest {
        method: Method,
        uri: String,
        message: String,
    },

    #[error("could not send request {method} {uri}")]
    Transport {
        method: Method,
        uri: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("{method} {uri} failed with {status}: {message}")]
    Api {
        method: Method,
        uri: String,
        status: StatusCode,
        message: String,
    },

    #[error("could not encode request body")]
    Encode(#[source] codec::Error),

    #[error("could not decode response of {method} {uri}")]
    Decode {
        method: Method,
        uri: String,
        #[source]
        source: codec::Error,
    },
}

impl Error {
    /// The HTTP status the daemon answered with, for [`Error::Api`].
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The daemon's error message, for [`Error::Api`].
    pub fn message(&self) -> Option<&str> {
        match self {
            Error::Api { message, .. } => Some(message),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }

    pub fn is_not_modified(&self) -> bool {
        self.status() == Some(StatusCode::NOT_MODIFIED)
    }
}
