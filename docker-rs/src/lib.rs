// Copyright (c) Microsoft. All rights reserved.

#![deny(rust_2018_idioms)]
#![deny(clippy::all, clippy::pedantic)]
#![allow(
    clippy::doc_markdown,
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::new_without_default,
    clippy::too_many_arguments,
    clippy::too_many_lines
)]

#[macro_use]
mod macros;

pub mod apis;
pub mod codec;
pub mod models;
pub mod presence;
pub mod utils;

pub use crate::apis::{
    BuildApi, Configuration, ContainerApi, DockerApiClient, ImageApi, NetworkApi, PluginApi,
    SwarmApi, SystemApi, Transport, VolumeApi,
};
pub use crate::presence::{FieldInfo, FieldType, PartialRecord, Shape};
pub use crate::utils::{parse_docker_env, Filters};
