// Copyright (c) Microsoft. All rights reserved.

//! JSON encoding and decoding of Engine API records.
//!
//! Encoding emits only the fields that were assigned. Decoding marks every
//! key that is present in the document. Keys that have no matching field are
//! ignored by the lenient functions, matching the Engine API's open schema
//! model, and rejected by the `*_strict` functions.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::error::Category;
use serde_json::Value;

use crate::presence::{FieldType, Shape};

/// What to do with JSON keys that do not belong to the target record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownFields {
    #[default]
    Ignore,
    Reject,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("malformed JSON document: {0}")]
    Malformed(serde_json::Error),

    #[error("JSON value does not match the declared field type: {0}")]
    TypeMismatch(serde_json::Error),

    #[error("unknown field {key:?} in {record} at {path}")]
    UnknownField {
        record: &'static str,
        key: String,
        path: String,
    },

    #[error("could not serialize record: {0}")]
    Serialize(serde_json::Error),
}

impl Error {
    fn deserialize(err: serde_json::Error) -> Self {
        match err.classify() {
            Category::Syntax | Category::Eof => Error::Malformed(err),
            Category::Data | Category::Io => Error::TypeMismatch(err),
        }
    }
}

pub fn to_string<T: Serialize + ?Sized>(value: &T) -> Result<String, Error> {
    serde_json::to_string(value).map_err(Error::Serialize)
}

pub fn to_vec<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, Error> {
    serde_json::to_vec(value).map_err(Error::Serialize)
}

pub fn to_value<T: Serialize + ?Sized>(value: &T) -> Result<Value, Error> {
    serde_json::to_value(value).map_err(Error::Serialize)
}

pub fn from_str<T: DeserializeOwned>(s: &str) -> Result<T, Error> {
    serde_json::from_str(s).map_err(Error::deserialize)
}

pub fn from_slice<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, Error> {
    serde_json::from_slice(bytes).map_err(Error::deserialize)
}

pub fn from_value<T: DeserializeOwned>(value: Value) -> Result<T, Error> {
    serde_json::from_value(value).map_err(Error::deserialize)
}

pub fn from_str_strict<T: DeserializeOwned + FieldType>(s: &str) -> Result<T, Error> {
    from_slice_strict(s.as_bytes())
}

pub fn from_slice_strict<T: DeserializeOwned + FieldType>(bytes: &[u8]) -> Result<T, Error> {
    let value = serde_json::from_slice(bytes).map_err(Error::deserialize)?;
    from_value_strict(value)
}

pub fn from_value_strict<T: DeserializeOwned + FieldType>(value: Value) -> Result<T, Error> {
    check_known_fields(&value, T::shape(), "$")?;
    from_value(value)
}

/// Decode `bytes` following the given unknown-field policy.
pub fn decode<T: DeserializeOwned + FieldType>(
    bytes: &[u8],
    unknown_fields: UnknownFields,
) -> Result<T, Error> {
    match unknown_fields {
        UnknownFields::Ignore => from_slice(bytes),
        UnknownFields::Reject => from_slice_strict(bytes),
    }
}

/// Decode a sequence of concatenated or newline-delimited JSON documents,
/// such as the body of `GET /events` once the stream has closed.
pub fn decode_stream<T: DeserializeOwned + FieldType>(
    bytes: &[u8],
    unknown_fields: UnknownFields,
) -> Result<Vec<T>, Error> {
    serde_json::Deserializer::from_slice(bytes)
        .into_iter::<Value>()
        .map(|value| {
            let value = value.map_err(Error::deserialize)?;
            match unknown_fields {
                UnknownFields::Ignore => from_value(value),
                UnknownFields::Reject => from_value_strict(value),
            }
        })
        .collect()
}

// Values whose JSON type does not match the shape are left for serde to report.
fn check_known_fields(value: &Value, shape: Shape, path: &str) -> Result<(), Error> {
    match (shape, value) {
        (Shape::Record { name, fields }, Value::Object(map)) => {
            for (key, child) in map {
                let info = fields.iter().find(|info| info.key == key).ok_or_else(|| {
                    Error::UnknownField {
                        record: name,
                        key: key.clone(),
                        path: path.to_owned(),
                    }
                })?;
                check_known_fields(child, (info.shape)(), &format!("{}.{}", path, key))?;
            }
            Ok(())
        }

        (Shape::List(element), Value::Array(items)) => {
            for (index, item) in items.iter().enumerate() {
                check_known_fields(item, element(), &format!("{}[{}]", path, index))?;
            }
            Ok(())
        }

        (Shape::Map(element), Value::Object(map)) => {
            for (key, child) in map {
                check_known_fields(child, element(), &format!("{}[{:?}]", path, key))?;
            }
            Ok(())
        }

        (Shape::Nullable(inner), value) => check_known_fields(value, inner(), path),

        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use serde_json::json;

    use super::{
        decode, decode_stream, from_slice, from_str, from_str_strict, to_string, to_value, Error,
        UnknownFields,
    };
    use crate::models::{
        ContainerCreateBody, ContainerSummary, EventMessage, HostConfig, ImagesDiskUsage,
        PortBinding, VolumeCreateBody,
    };
    use crate::presence::PartialRecord;

    #[test]
    fn serializes_only_assigned_fields() {
        let volume = VolumeCreateBody::new()
            .with_name("data".to_string())
            .with_driver("local".to_string());

        assert_eq!(r#"{"Name":"data","Driver":"local"}"#, to_string(&volume).unwrap());
        assert!(!volume.is_initialized("driverOpts"));
        assert!(!volume.is_initialized("driver_opts"));
    }

    #[test]
    fn unset_default_is_not_serialized() {
        let volume = VolumeCreateBody::new().with_name("data".to_string());
        assert_eq!(json!({ "Name": "data" }), to_value(&volume).unwrap());
    }

    #[test]
    fn explicit_zero_survives_decode() {
        let usage: ImagesDiskUsage = from_str(
            r#"{"activeCount":0,"totalCount":5,"reclaimable":0,"totalSize":100,"items":[]}"#,
        )
        .unwrap();

        assert!(usage.is_initialized("activeCount"));
        assert!(usage.is_initialized("active_count"));
        assert_eq!(Some(0), usage.active_count());
        assert_eq!(Some(5), usage.total_count());
        assert_eq!(Some(100), usage.total_size());
        assert_eq!(Some(&[][..]), usage.items());
    }

    #[test]
    fn round_trip_preserves_presence() {
        let mut port_bindings = BTreeMap::new();
        port_bindings.insert(
            "27017/tcp".to_string(),
            vec![PortBinding::new().with_host_port("27017".to_string())],
        );
        let original = ContainerCreateBody::new()
            .with_image("mongo".to_string())
            .with_tty(false)
            .with_host_config(HostConfig::new().with_port_bindings(port_bindings));

        let json = to_string(&original).unwrap();
        let decoded: ContainerCreateBody = from_str(&json).unwrap();

        assert_eq!(original, decoded);
        assert_eq!(original.initialized_fields(), decoded.initialized_fields());
        assert_eq!(vec!["tty", "image", "host_config"], decoded.initialized_fields());

        let host_config = decoded.host_config().unwrap();
        assert_eq!(vec!["port_bindings"], host_config.initialized_fields());
        assert_eq!(
            Some("27017"),
            host_config.port_bindings().unwrap()["27017/tcp"][0].host_port()
        );
    }

    #[test]
    fn lenient_decode_ignores_unknown_keys() {
        let volume: VolumeCreateBody =
            from_str(r#"{"Name":"data","ClusterVolumeSpec":{"Group":"g"}}"#).unwrap();
        assert_eq!(vec!["name"], volume.initialized_fields());
    }

    #[test]
    fn strict_decode_rejects_unknown_top_level_key() {
        let err = from_str_strict::<VolumeCreateBody>(r#"{"Name":"data","Bogus":1}"#).unwrap_err();
        match err {
            Error::UnknownField { record, key, path } => {
                assert_eq!("VolumeCreateBody", record);
                assert_eq!("Bogus", key);
                assert_eq!("$", path);
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn strict_decode_reports_nested_path() {
        let input = json!({
            "Image": "ubuntu",
            "HostConfig": {
                "PortBindings": {
                    "80/tcp": [{ "HostPort": "8080", "HostPortRange": "x" }]
                }
            }
        })
        .to_string();

        let err = from_str_strict::<ContainerCreateBody>(&input).unwrap_err();
        match err {
            Error::UnknownField { record, key, path } => {
                assert_eq!("PortBinding", record);
                assert_eq!("HostPortRange", key);
                assert_eq!(r#"$.HostConfig.PortBindings["80/tcp"][0]"#, path);
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn strict_decode_accepts_known_keys_in_lists() {
        let input = json!([
            { "Id": "abc", "Names": ["/web"], "Ports": [{ "PrivatePort": 80, "Type": "tcp" }] }
        ])
        .to_string();

        let containers: Vec<ContainerSummary> =
            decode(input.as_bytes(), UnknownFields::Reject).unwrap();
        assert_eq!(1, containers.len());
        assert_eq!(Some(80), containers[0].ports().unwrap()[0].private_port());
    }

    #[test]
    fn stream_decodes_each_document() {
        let body = concat!(
            r#"{"Type":"container","Action":"start","time":1}"#,
            "\n",
            r#"{"Type":"network","Action":"connect","time":2}"#,
            "\n"
        );

        let events: Vec<EventMessage> = decode_stream(body.as_bytes(), UnknownFields::Reject).unwrap();
        assert_eq!(2, events.len());
        assert_eq!(Some("network"), events[1].event_type());
        assert_eq!(Some(2), events[1].time());
        assert!(!events[0].is_initialized("timeNano"));

        let empty: Vec<EventMessage> = decode_stream(b"", UnknownFields::Ignore).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn stream_rejects_unknown_keys_when_strict() {
        let body = br#"{"Type":"container","status":"start"}"#;
        let err = decode_stream::<EventMessage>(body, UnknownFields::Reject).unwrap_err();
        assert!(matches!(err, Error::UnknownField { .. }), "{:?}", err);
        assert_eq!(1, decode_stream::<EventMessage>(body, UnknownFields::Ignore).unwrap().len());
    }

    #[test]
    fn type_mismatch_is_classified() {
        let err = from_str::<VolumeCreateBody>(r#"{"Name":42}"#).unwrap_err();
        assert!(matches!(err, Error::TypeMismatch(_)), "{:?}", err);
    }

    #[test]
    fn malformed_input_is_classified() {
        let err = from_slice::<VolumeCreateBody>(b"{\"Name\":").unwrap_err();
        assert!(matches!(err, Error::Malformed(_)), "{:?}", err);
    }

    #[test]
    fn unknown_fields_policy_deserializes_lowercase() {
        let policy: UnknownFields = serde_json::from_str("\"reject\"").unwrap();
        assert_eq!(UnknownFields::Reject, policy);
        assert_eq!(UnknownFields::Ignore, UnknownFields::default());
    }
}
