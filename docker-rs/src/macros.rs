// Copyright (c) Microsoft. All rights reserved.

//! Record shape generator.
//!
//! Each Engine API object is declared once as a list of
//! `"JsonKey" => accessor: Type` entries. An entry may carry a declared
//! default (`= "local"`), given in the getter's view type. The generator
//! emits the struct, its serde attributes, the `set_*`/`with_*`/getter
//! accessors and the [`PartialRecord`](crate::presence::PartialRecord) and
//! [`FieldType`](crate::presence::FieldType) impls.
//!
//! ```ignore
//! docker_model! {
//!     /// Volume configuration
//!     pub struct VolumeCreateBody {
//!         "Name" => name: String,
//!         "Driver" => driver: String = "local",
//!         "DriverOpts" => driver_opts: BTreeMap<String, String>,
//!     }
//! }
//! ```

macro_rules! docker_model {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $key:literal => $field:ident : $ty:ty $(= $default:expr)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
        pub struct $name {
            $(
                #[serde(
                    rename = $key,
                    default,
                    skip_serializing_if = "Option::is_none",
                    deserialize_with = "crate::presence::deserialize_field"
                )]
                $field: Option<$ty>,
            )*
        }

        impl $name {
            pub fn new() -> Self {
                Self::default()
            }

            $(
                docker_model_getter!($(#[$fmeta])* $field: $ty $(= $default)?);

                paste::paste! {
                    pub fn [<set_ $field>](&mut self, $field: $ty) {
                        self.$field = Some($field);
                    }

                    pub fn [<with_ $field>](mut self, $field: $ty) -> Self {
                        self.$field = Some($field);
                        self
                    }
                }
            )*
        }

        impl $crate::presence::PartialRecord for $name {
            const NAME: &'static str = stringify!($name);

            const FIELDS: &'static [$crate::presence::FieldInfo] = &[
                $(
                    $crate::presence::FieldInfo {
                        name: stringify!($field),
                        key: $key,
                        shape: <$ty as $crate::presence::FieldType>::shape,
                    },
                )*
            ];

            fn presence(&self) -> Vec<bool> {
                vec![$(self.$field.is_some()),*]
            }
        }

        impl $crate::presence::FieldType for $name {
            type Ref<'a> = &'a $name;

            fn view(&self) -> Self::Ref<'_> {
                self
            }

            fn shape() -> $crate::presence::Shape {
                $crate::presence::Shape::Record {
                    name: <$name as $crate::presence::PartialRecord>::NAME,
                    fields: <$name as $crate::presence::PartialRecord>::FIELDS,
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = serde_json::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                serde_json::from_str(s)
            }
        }
    };
}

macro_rules! docker_model_getter {
    ($(#[$fmeta:meta])* $field:ident: $ty:ty = $default:expr) => {
        $(#[$fmeta])*
        pub fn $field(&self) -> <$ty as $crate::presence::FieldType>::Ref<'_> {
            self.$field
                .as_ref()
                .map_or($default, <$ty as $crate::presence::FieldType>::view)
        }
    };

    ($(#[$fmeta:meta])* $field:ident: $ty:ty) => {
        $(#[$fmeta])*
        pub fn $field(&self) -> Option<<$ty as $crate::presence::FieldType>::Ref<'_>> {
            self.$field
                .as_ref()
                .map(<$ty as $crate::presence::FieldType>::view)
        }
    };
}
