// Copyright (c) Microsoft. All rights reserved.

//! Per-field presence tracking for Engine API records.
//!
//! Every record field is stored as `Option<T>`. `None` means the field was
//! never assigned; `Some` means a setter (or the deserializer) stored a value,
//! including values equal to the type's zero or to a declared default.
//! Serialization skips `None` fields, so only explicitly assigned fields are
//! sent to the daemon, and deserialization marks every key that appeared in
//! the response.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};

/// Static description of one field of a record shape.
#[derive(Clone, Copy, Debug)]
pub struct FieldInfo {
    /// Rust accessor name, e.g. `driver_opts`.
    pub name: &'static str,
    /// JSON key with the casing used by the Engine API, e.g. `DriverOpts`.
    pub key: &'static str,
    pub shape: fn() -> Shape,
}

impl FieldInfo {
    /// Whether `field` names this field, either by accessor name or JSON key.
    pub fn matches(&self, field: &str) -> bool {
        self.name == field || self.key == field
    }
}

/// Structural type of a field, used to walk JSON documents against a record
/// shape without deserializing them.
#[derive(Clone, Copy, Debug)]
pub enum Shape {
    /// Arbitrary JSON.
    Any,
    Scalar,
    Record {
        name: &'static str,
        fields: &'static [FieldInfo],
    },
    List(fn() -> Shape),
    /// String-keyed map.
    Map(fn() -> Shape),
    /// A value that may be an explicit JSON `null`.
    Nullable(fn() -> Shape),
}

/// A type that can be stored in a record field.
pub trait FieldType: Sized {
    /// What the field getter hands out: borrowed for strings, lists, maps and
    /// records, by value for plain numbers and booleans.
    type Ref<'a>
    where
        Self: 'a;

    fn view(&self) -> Self::Ref<'_>;

    fn shape() -> Shape;

    /// Populate a field slot from a key that is present in the input.
    ///
    /// A JSON `null` leaves the slot unset even though the key is present:
    /// the declared type cannot hold it, and the Engine API sends `null` for
    /// empty lists and maps. Only nullable (`Option<T>`) fields record the
    /// `null` as set.
    fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Self>, D::Error>
    where
        D: Deserializer<'de>,
        Self: Deserialize<'de>,
    {
        Option::<Self>::deserialize(deserializer)
    }
}

/// `deserialize_with` target shared by every generated record field.
pub fn deserialize_field<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FieldType + Deserialize<'de>,
{
    T::deserialize_present(deserializer)
}

macro_rules! copy_field_type {
    ($($ty:ty),*) => {
        $(
            impl FieldType for $ty {
                type Ref<'a> = $ty;

                fn view(&self) -> Self::Ref<'_> {
                    *self
                }

                fn shape() -> Shape {
                    Shape::Scalar
                }
            }
        )*
    };
}

copy_field_type!(bool, i8, i16, i32, i64, u8, u16, u32, u64, f64);

impl FieldType for String {
    type Ref<'a> = &'a str;

    fn view(&self) -> Self::Ref<'_> {
        self.as_str()
    }

    fn shape() -> Shape {
        Shape::Scalar
    }
}

impl FieldType for serde_json::Value {
    type Ref<'a> = &'a serde_json::Value;

    fn view(&self) -> Self::Ref<'_> {
        self
    }

    fn shape() -> Shape {
        Shape::Any
    }
}

impl<T: FieldType> FieldType for Vec<T> {
    type Ref<'a> = &'a [T] where Self: 'a;

    fn view(&self) -> Self::Ref<'_> {
        self.as_slice()
    }

    fn shape() -> Shape {
        Shape::List(T::shape)
    }
}

impl<T: FieldType> FieldType for BTreeMap<String, T> {
    type Ref<'a> = &'a BTreeMap<String, T> where Self: 'a;

    fn view(&self) -> Self::Ref<'_> {
        self
    }

    fn shape() -> Shape {
        Shape::Map(T::shape)
    }
}

impl<T: FieldType> FieldType for Option<T> {
    type Ref<'a> = Option<T::Ref<'a>> where Self: 'a;

    fn view(&self) -> Self::Ref<'_> {
        self.as_ref().map(T::view)
    }

    fn shape() -> Shape {
        Shape::Nullable(T::shape)
    }

    fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Self>, D::Error>
    where
        D: Deserializer<'de>,
        Self: Deserialize<'de>,
    {
        Self::deserialize(deserializer).map(Some)
    }
}

/// A record shape with a closed, statically known set of fields.
pub trait PartialRecord {
    /// Schema name of the shape.
    const NAME: &'static str;

    /// Fields in declaration order.
    const FIELDS: &'static [FieldInfo];

    /// One presence flag per entry of [`Self::FIELDS`].
    fn presence(&self) -> Vec<bool>;

    fn field(name: &str) -> Option<&'static FieldInfo> {
        Self::FIELDS.iter().find(|info| info.matches(name))
    }

    /// Whether the named field has been assigned on this instance.
    ///
    /// `field` may be the accessor name (`driver_opts`) or the JSON key
    /// (`DriverOpts`). Names that are not part of the shape yield `false`.
    fn is_initialized(&self, field: &str) -> bool {
        Self::FIELDS
            .iter()
            .zip(self.presence())
            .any(|(info, present)| present && info.matches(field))
    }

    /// Accessor names of all assigned fields, in declaration order.
    fn initialized_fields(&self) -> Vec<&'static str> {
        Self::FIELDS
            .iter()
            .zip(self.presence())
            .filter_map(|(info, present)| present.then_some(info.name))
            .collect()
    }

    /// True when no field has been assigned.
    fn is_empty(&self) -> bool {
        !self.presence().into_iter().any(|present| present)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use serde_json::json;

    use super::{FieldType, PartialRecord, Shape};
    use crate::models::{DeviceMapping, Resources, VolumeCreateBody};

    #[test]
    fn fields_start_unset() {
        let volume = VolumeCreateBody::new();
        for info in VolumeCreateBody::FIELDS {
            assert!(!volume.is_initialized(info.name));
            assert!(!volume.is_initialized(info.key));
        }
        assert!(volume.is_empty());
        assert!(volume.initialized_fields().is_empty());
    }

    #[test]
    fn setter_marks_field_present() {
        let mut mapping = DeviceMapping::new();
        mapping.set_path_on_host("/dev/ttyUSB0".to_string());

        assert!(mapping.is_initialized("path_on_host"));
        assert!(mapping.is_initialized("PathOnHost"));
        assert!(!mapping.is_initialized("path_in_container"));
        assert_eq!(Some("/dev/ttyUSB0"), mapping.path_on_host());
        assert_eq!(vec!["path_on_host"], mapping.initialized_fields());
    }

    #[test]
    fn repeated_set_is_idempotent() {
        let once = DeviceMapping::new().with_cgroup_permissions("rwm".to_string());
        let twice = DeviceMapping::new()
            .with_cgroup_permissions("rwm".to_string())
            .with_cgroup_permissions("rwm".to_string());

        assert_eq!(once, twice);
        assert_eq!(once.presence(), twice.presence());
        assert_eq!(Some("rwm"), twice.cgroup_permissions());
    }

    #[test]
    fn later_set_replaces_value() {
        let mut volume = VolumeCreateBody::new().with_name("first".to_string());
        volume.set_name("second".to_string());
        assert_eq!(Some("second"), volume.name());
        assert!(volume.is_initialized("name"));
    }

    #[test]
    fn unknown_field_name_is_not_initialized() {
        let volume = VolumeCreateBody::new().with_name("data".to_string());
        assert!(!volume.is_initialized("no_such_field"));
        assert!(!volume.is_initialized(""));
        assert!(VolumeCreateBody::field("no_such_field").is_none());
    }

    #[test]
    fn defaulted_field_reads_default_while_unset() {
        let mut volume = VolumeCreateBody::new();
        assert_eq!("local", volume.driver());
        assert!(!volume.is_initialized("driver"));

        volume.set_driver("local".to_string());
        assert_eq!("local", volume.driver());
        assert!(volume.is_initialized("driver"));
    }

    #[test]
    fn explicit_zero_is_distinct_from_unset() {
        let unset = Resources::new();
        let zero = Resources::new().with_memory(0);

        assert_eq!(None, unset.memory());
        assert_eq!(Some(0), zero.memory());
        assert!(zero.is_initialized("Memory"));
        assert!(!unset.is_initialized("Memory"));
    }

    #[test]
    fn nullable_field_keeps_explicit_null() {
        let resources: Resources = serde_json::from_value(json!({ "PidsLimit": null })).unwrap();
        assert!(resources.is_initialized("pids_limit"));
        assert_eq!(Some(None), resources.pids_limit());

        let absent: Resources = serde_json::from_value(json!({})).unwrap();
        assert!(!absent.is_initialized("pids_limit"));
        assert_eq!(None, absent.pids_limit());

        let serialized = serde_json::to_value(&resources).unwrap();
        assert_eq!(json!({ "PidsLimit": null }), serialized);
    }

    #[test]
    fn null_for_non_nullable_field_stays_unset() {
        let volume: VolumeCreateBody =
            serde_json::from_value(json!({ "Name": "data", "Labels": null })).unwrap();
        assert!(volume.is_initialized("name"));
        assert!(!volume.is_initialized("labels"));
    }

    #[test]
    fn field_lookup_by_key_and_name() {
        let by_key = VolumeCreateBody::field("DriverOpts").unwrap();
        let by_name = VolumeCreateBody::field("driver_opts").unwrap();
        assert_eq!(by_key.name, by_name.name);
        assert_eq!("DriverOpts", by_name.key);
    }

    #[test]
    fn shapes_describe_nesting() {
        match <BTreeMap<String, Vec<DeviceMapping>> as FieldType>::shape() {
            Shape::Map(value) => match value() {
                Shape::List(element) => match element() {
                    Shape::Record { name, fields } => {
                        assert_eq!("DeviceMapping", name);
                        assert_eq!(3, fields.len());
                    }
                    other => panic!("unexpected element shape {:?}", other),
                },
                other => panic!("unexpected value shape {:?}", other),
            },
            other => panic!("unexpected shape {:?}", other),
        }
    }
}
