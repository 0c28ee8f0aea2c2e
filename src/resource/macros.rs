// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Declarative builders for resource types and their client wrappers

/// Declares a resource struct together with its wire field table
///
/// ```ignore
/// routeros_resource! {
///     pub struct InterfaceVlan7 {
///         pub id: String => ".id",
///         pub vlan_id: u16 => "vlan-id",
///         pub running: bool => "running" [readonly],
///     }
/// }
/// ```
///
/// Field options: `readonly` (decoded, never sent) and `true_false` (boolean
/// spelled `true`/`false` instead of `yes`/`no`).
macro_rules! routeros_resource {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                pub $field:ident : $fty:ty => $key:literal $([$($opt:ident),* $(,)?])?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, ::serde::Serialize, ::serde::Deserialize)]
        pub struct $name {
            $(
                $(#[$fmeta])*
                #[serde(rename = $key, default)]
                pub $field: $fty,
            )*
        }

        impl $crate::codec::WireFields for $name {
            fn fields(&self) -> Vec<($crate::codec::FieldSpec, Option<String>)> {
                vec![$({
                    let spec = $crate::codec::FieldSpec::new($key) $($(.$opt())*)?;
                    (spec, $crate::codec::WireValue::encode(&self.$field, &spec))
                }),*]
            }

            fn assign(&mut self, key: &str, raw: &str) -> $crate::error::Result<()> {
                match key {
                    $($key => self.$field = $crate::codec::decode_field(key, raw)?,)*
                    _ => {}
                }
                Ok(())
            }
        }
    };
}

/// Standard `add`/`print`/`set`/`remove` command paths under one menu
macro_rules! menu_commands {
    ($menu:literal) => {
        fn action_to_command(action: $crate::resource::Action) -> Option<&'static str> {
            use $crate::resource::Action;
            Some(match action {
                Action::Add => concat!($menu, "/add"),
                Action::Find => concat!($menu, "/print"),
                Action::Update => concat!($menu, "/set"),
                Action::Delete => concat!($menu, "/remove"),
            })
        }
    };
}

/// `Resource` impl for a regular menu whose struct has an `id` field
macro_rules! impl_resource {
    (
        $ty:ident {
            kind: $kind:literal,
            menu: $menu:literal,
            find: $find_key:literal => $find_field:ident,
            delete: $delete_key:literal => $delete_field:ident $(,)?
        }
    ) => {
        impl $crate::resource::Resource for $ty {
            const KIND: &'static str = $kind;

            $crate::resource::menu_commands!($menu);

            fn id(&self) -> &str {
                &self.id
            }

            fn set_id(&mut self, id: String) {
                self.id = id;
            }

            fn find_field(&self) -> &'static str {
                $find_key
            }

            fn find_field_value(&self) -> &str {
                &self.$find_field
            }

            fn delete_field(&self) -> &'static str {
                $delete_key
            }

            fn delete_field_value(&self) -> &str {
                &self.$delete_field
            }
        }
    };
}

/// Typed convenience methods on `MikroTikClient` delegating to the generic dispatcher
///
/// `find` and `delete` take the attribute they look the resource up by.
macro_rules! client_wrappers {
    (@op $ty:ident add $wrapper:ident) => {
        pub async fn $wrapper(&self, resource: &$ty) -> $crate::error::Result<$ty> {
            self.add(resource).await
        }
    };
    (@op $ty:ident find $wrapper:ident ($field:ident)) => {
        pub async fn $wrapper(&self, $field: &str) -> $crate::error::Result<$ty> {
            let probe = $ty {
                $field: $field.to_string(),
                ..Default::default()
            };
            self.find(&probe).await
        }
    };
    (@op $ty:ident get $wrapper:ident) => {
        pub async fn $wrapper(&self) -> $crate::error::Result<$ty> {
            self.find(&$ty::default()).await
        }
    };
    (@op $ty:ident update $wrapper:ident) => {
        pub async fn $wrapper(&self, resource: &$ty) -> $crate::error::Result<$ty> {
            self.update(resource).await
        }
    };
    (@op $ty:ident delete $wrapper:ident ($field:ident)) => {
        pub async fn $wrapper(&self, $field: &str) -> $crate::error::Result<()> {
            let probe = $ty {
                $field: $field.to_string(),
                ..Default::default()
            };
            self.delete(&probe).await
        }
    };
    (@op $ty:ident list $wrapper:ident) => {
        pub async fn $wrapper(&self) -> $crate::error::Result<Vec<$ty>> {
            self.list::<$ty>().await
        }
    };
    ($ty:ident { $($op:ident $wrapper:ident $(($field:ident))?;)* }) => {
        impl $crate::mikrotik::MikroTikClient {
            $($crate::resource::client_wrappers!(@op $ty $op $wrapper $(($field))?);)*
        }
    };
}

pub(crate) use client_wrappers;
pub(crate) use impl_resource;
pub(crate) use menu_commands;
pub(crate) use routeros_resource;
