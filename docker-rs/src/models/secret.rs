// Copyright (c) Microsoft. All rights reserved.

use std::collections::BTreeMap;

use super::{Driver, ObjectVersion};

docker_model! {
    pub struct Secret {
        "ID" => id: String,
        "Version" => version: ObjectVersion,
        "CreatedAt" => created_at: String,
        "UpdatedAt" => updated_at: String,
        "Spec" => spec: SecretSpec,
    }
}

docker_model! {
    pub struct SecretSpec {
        /// User-defined name of the secret.
        "Name" => name: String,
        "Labels" => labels: BTreeMap<String, String>,
        /// Base64-url-safe-encoded (RFC 4648) data to store as secret.
        ///
        /// This field is only used to create a secret, and is not returned by
        /// other endpoints.
        "Data" => data: String,
        /// Name of the secrets driver used to fetch the secret's value from an
        /// external secret store.
        "Driver" => driver: Driver,
        /// Templating driver, if applicable
        "Templating" => templating: Driver,
    }
}

docker_model! {
    pub struct Config {
        "ID" => id: String,
        "Version" => version: ObjectVersion,
        "CreatedAt" => created_at: String,
        "UpdatedAt" => updated_at: String,
        "Spec" => spec: ConfigSpec,
    }
}

docker_model! {
    pub struct ConfigSpec {
        /// User-defined name of the config.
        "Name" => name: String,
        "Labels" => labels: BTreeMap<String, String>,
        /// Base64-url-safe-encoded (RFC 4648) config data.
        "Data" => data: String,
        "Templating" => templating: Driver,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use serde_json::json;

    use super::{Secret, SecretSpec};
    use crate::models::Driver;
    use crate::presence::PartialRecord;

    #[test]
    fn secret_spec_with_external_driver() {
        let mut options = BTreeMap::new();
        options.insert("OptionA".to_string(), "value for driver option A".to_string());

        let spec = SecretSpec::new()
            .with_name("app-key.crt".to_string())
            .with_driver(
                Driver::new()
                    .with_name("secret-bucket".to_string())
                    .with_options(options),
            );

        assert_eq!(
            json!({
                "Name": "app-key.crt",
                "Driver": {
                    "Name": "secret-bucket",
                    "Options": { "OptionA": "value for driver option A" }
                }
            }),
            serde_json::to_value(&spec).unwrap()
        );
    }

    #[test]
    fn inspected_secret_has_no_data() {
        let secret: Secret = serde_json::from_value(json!({
            "ID": "ktnbjxoalbkvbvedmg1urrz8h",
            "Version": { "Index": 11 },
            "Spec": { "Name": "app-dev.crt", "Labels": { "foo": "bar" } }
        }))
        .unwrap();

        let spec = secret.spec().unwrap();
        assert_eq!(Some("app-dev.crt"), spec.name());
        assert!(!spec.is_initialized("Data"));
        let labels = spec.labels().unwrap();
        assert_eq!(Some(&"bar".to_string()), labels.get("foo"));
    }
}
