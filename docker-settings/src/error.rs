// Copyright (c) Microsoft. All rights reserved.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Could not read {0}")]
    Read(PathBuf, #[source] std::io::Error),

    #[error("Could not parse {0}")]
    Parse(PathBuf, #[source] toml::de::Error),

    #[error("Invalid base path {0:?}: {1}")]
    InvalidBasePath(String, String),
}

impl Error {
    pub(crate) fn read(path: &std::path::Path, err: std::io::Error) -> Self {
        Error::Read(path.to_path_buf(), err)
    }

    pub(crate) fn parse(path: &std::path::Path, err: toml::de::Error) -> Self {
        Error::Parse(path.to_path_buf(), err)
    }
}
