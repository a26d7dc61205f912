// Copyright (c) Microsoft. All rights reserved.

docker_model! {
    /// A plugin for the Engine API
    pub struct Plugin {
        "Id" => id: String,
        "Name" => name: String,
        /// True if the plugin is running. False if the plugin is not running,
        /// only installed.
        "Enabled" => enabled: bool = false,
        "Settings" => settings: PluginSettings,
        /// plugin remote reference used to push/pull the plugin
        "PluginReference" => plugin_reference: String,
        "Config" => config: PluginConfig,
    }
}

docker_model! {
    /// Settings that can be modified by users.
    pub struct PluginSettings {
        "Mounts" => mounts: Vec<PluginMount>,
        "Env" => env: Vec<String>,
        "Args" => args: Vec<String>,
        "Devices" => devices: Vec<PluginDevice>,
    }
}

docker_model! {
    /// The config of a plugin.
    pub struct PluginConfig {
        /// Docker Version used to create the plugin
        "DockerVersion" => docker_version: String,
        "Description" => description: String,
        "Documentation" => documentation: String,
        "Interface" => interface: PluginInterface,
        "Entrypoint" => entrypoint: Vec<String>,
        "WorkDir" => work_dir: String,
        "User" => user: PluginUser,
        "Network" => network: PluginNetwork,
        "Linux" => linux: PluginLinux,
        "PropagatedMount" => propagated_mount: String,
        "IpcHost" => ipc_host: bool,
        "PidHost" => pid_host: bool,
        "Mounts" => mounts: Vec<PluginMount>,
        "Env" => env: Vec<PluginEnv>,
        "Args" => args: PluginArgs,
        "rootfs" => rootfs: PluginRootfs,
    }
}

docker_model! {
    /// The interface between Docker and the plugin
    pub struct PluginInterface {
        "Types" => types: Vec<PluginInterfaceType>,
        "Socket" => socket: String,
        /// Protocol to use for clients connecting to the plugin: `""` or
        /// `moby.plugins.http/v1`.
        "ProtocolScheme" => protocol_scheme: String,
    }
}

docker_model! {
    pub struct PluginInterfaceType {
        "Prefix" => prefix: String,
        "Capability" => capability: String,
        "Version" => version: String,
    }
}

docker_model! {
    pub struct PluginMount {
        "Name" => name: String,
        "Description" => description: String,
        "Settable" => settable: Vec<String>,
        "Source" => source: String,
        "Destination" => destination: String,
        "Type" => mount_type: String,
        "Options" => options: Vec<String>,
    }
}

docker_model! {
    pub struct PluginDevice {
        "Name" => name: String,
        "Description" => description: String,
        "Settable" => settable: Vec<String>,
        "Path" => path: String,
    }
}

docker_model! {
    pub struct PluginEnv {
        "Name" => name: String,
        "Description" => description: String,
        "Settable" => settable: Vec<String>,
        "Value" => value: String,
    }
}

docker_model! {
    pub struct PluginArgs {
        "Name" => name: String,
        "Description" => description: String,
        "Settable" => settable: Vec<String>,
        "Value" => value: Vec<String>,
    }
}

docker_model! {
    pub struct PluginLinux {
        "Capabilities" => capabilities: Vec<String>,
        "AllowAllDevices" => allow_all_devices: bool,
        "Devices" => devices: Vec<PluginDevice>,
    }
}

docker_model! {
    pub struct PluginNetwork {
        "Type" => network_type: String,
    }
}

docker_model! {
    pub struct PluginUser {
        "UID" => uid: u32,
        "GID" => gid: u32,
    }
}

docker_model! {
    pub struct PluginRootfs {
        "type" => rootfs_type: String,
        "diff_ids" => diff_ids: Vec<String>,
    }
}

docker_model! {
    /// Describes a permission the user has to accept upon installing the
    /// plugin.
    pub struct PluginPrivilege {
        "Name" => name: String,
        "Description" => description: String,
        "Value" => value: Vec<String>,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{Plugin, PluginPrivilege};
    use crate::presence::PartialRecord;

    #[test]
    fn plugin_keeps_lowercase_rootfs_keys() {
        let plugin: Plugin = serde_json::from_value(json!({
            "Id": "5724e2c8652da337ab2eedd19fc6fc0ec908e4bd907c7421bf6a8dfc70c4c078",
            "Name": "tiborvass/sample-volume-plugin",
            "Enabled": false,
            "Config": {
                "Interface": {
                    "Types": [{ "Prefix": "docker", "Capability": "volumedriver", "Version": "1.0" }],
                    "Socket": "plugins.sock"
                },
                "rootfs": { "type": "layers", "diff_ids": ["sha256:675532206fbf"] }
            }
        }))
        .unwrap();

        assert!(plugin.is_initialized("Enabled"));
        assert!(!plugin.enabled());

        let config = plugin.config().unwrap();
        let rootfs = config.rootfs().unwrap();
        assert_eq!(Some("layers"), rootfs.rootfs_type());
        assert_eq!(1, rootfs.diff_ids().unwrap().len());
        assert_eq!(
            Some("volumedriver"),
            config.interface().unwrap().types().unwrap()[0].capability()
        );
        assert!(!plugin.is_initialized("Settings"));
    }

    #[test]
    fn privilege_round_trip() {
        let privilege = PluginPrivilege::new()
            .with_name("network".to_string())
            .with_value(vec!["host".to_string()]);

        let json = serde_json::to_string(&privilege).unwrap();
        assert_eq!(r#"{"Name":"network","Value":["host"]}"#, json);
        assert_eq!(privilege, json.parse::<PluginPrivilege>().unwrap());
    }
}
