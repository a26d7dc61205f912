// Copyright (c) Microsoft. All rights reserved.

//! Docker Engine API object shapes.

mod auth;
pub use self::auth::*;
mod build_cache;
pub use self::build_cache::*;
mod common;
pub use self::common::*;
mod container;
pub use self::container::*;
mod host_config;
pub use self::host_config::*;
mod image;
pub use self::image::*;
mod network;
pub use self::network::*;
mod node;
pub use self::node::*;
mod plugin;
pub use self::plugin::*;
mod secret;
pub use self::secret::*;
mod service;
pub use self::service::*;
mod swarm;
pub use self::swarm::*;
mod system;
pub use self::system::*;
mod task;
pub use self::task::*;
mod volume;
pub use self::volume::*;
