//! Declarative generators for model types.
//!
//! `wire_enum!` declares a closed string enum. `shape!` declares a shape: the immutable
//! value type, its builder, getters, `WireValue`/`Shape` impls and brace-form `Display`.
//! Setters store values in [`WireValue::canonical`] form.
//!
//! [`WireValue::canonical`]: crate::domain::ports::WireValue::canonical
//!
//! Field kinds for `shape!`:
//!
//! | kind | stored as | builder |
//! |---|---|---|
//! | `string(String)` | `Option<String>` | `f(impl Into<String>)`, `set_f(Option<String>)` |
//! | `enumeration(E)` | `Option<String>` (wire string) | `f(impl Into<String>)` accepts `E` or `&str` |
//! | `scalar(T)` | `Option<T>`, `T: Copy` | `f(T)`, `set_f(Option<T>)` |
//! | `structure(S)` | `Option<S>` | `f(impl Into<S>)`, `set_f(Option<S>)` |
//! | `list(T)` | `Option<Vec<T>>` | `f(item)` appends, `extend_f(items)`, `set_f(items)`, `clear_f()` |
//! | `map(T)` | `Option<BTreeMap<String, T>>` | `add_f_entry(k, v)?`, `try_add_f_entry(k, v)?`, `clear_f_entries()`, `set_f(entries)` |

#[macro_export]
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $crate::domain::ports::WireEnum for $name {
            const ENUM_NAME: &'static str = stringify!($name);
            const VALUES: &'static [&'static str] = &[$($wire),+];

            fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $wire ),+
                }
            }

            fn from_value(raw: &str) -> $crate::utils::error::Result<Self> {
                match raw {
                    "" => Err($crate::utils::error::ModelError::InvalidArgument {
                        message: "Value cannot be null or empty!".to_string(),
                    }),
                    $( $wire => Ok($name::$variant), )+
                    other => Err($crate::utils::error::ModelError::InvalidArgument {
                        message: format!(
                            "Cannot create enum {} from {} value!",
                            stringify!($name),
                            other
                        ),
                    }),
                }
            }
        }

        impl $name {
            /// The exact wire string.
            pub fn as_str(&self) -> &'static str {
                <Self as $crate::domain::ports::WireEnum>::as_str(self)
            }

            /// Exact, case-sensitive lookup; empty and unknown strings are rejected.
            pub fn from_value(raw: &str) -> $crate::utils::error::Result<Self> {
                <Self as $crate::domain::ports::WireEnum>::from_value(raw)
            }

            pub fn values() -> &'static [&'static str] {
                <Self as $crate::domain::ports::WireEnum>::VALUES
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::utils::error::ModelError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                Self::from_value(s)
            }
        }

        impl ::std::convert::TryFrom<&str> for $name {
            type Error = $crate::utils::error::ModelError;

            fn try_from(s: &str) -> ::std::result::Result<Self, Self::Error> {
                Self::from_value(s)
            }
        }

        impl ::std::convert::From<$name> for ::std::string::String {
            fn from(value: $name) -> Self {
                value.as_str().to_string()
            }
        }
    };
}

#[macro_export]
macro_rules! shape {
    (
        $(#[$meta:meta])*
        pub struct $name:ident => $shape_name:literal {
            $(
                $(#[$fmeta:meta])*
                $field:ident : $kind:ident ( $ty:ty ) = $wire:literal
                    $( { $( $ckey:ident : $cval:expr ),* $(,)? } )?
            ),* $(,)?
        }
    ) => {
        $crate::__private::paste! {
            $(#[$meta])*
            #[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
            pub struct $name {
                $( $field: $crate::shape!(@storage $kind $ty), )*
            }

            #[doc = "Builder for [`" $name "`]."]
            #[derive(Debug, Clone, Default, PartialEq, Eq)]
            pub struct [<$name Builder>] {
                $( $field: $crate::shape!(@storage $kind $ty), )*
            }

            impl $name {
                pub fn builder() -> [<$name Builder>] {
                    [<$name Builder>]::default()
                }

                /// A builder pre-filled with this value's fields.
                pub fn to_builder(&self) -> [<$name Builder>] {
                    [<$name Builder>] {
                        $( $field: self.$field.clone(), )*
                    }
                }

                $( $crate::shape!(@getter $kind $field $ty, $(#[$fmeta])*); )*
            }

            impl [<$name Builder>] {
                $( $crate::shape!(@methods $kind $field $ty, $wire); )*

                pub fn build(self) -> $name {
                    $name {
                        $( $field: self.$field, )*
                    }
                }
            }
        }

        impl $crate::domain::ports::WireValue for $name {
            fn field_type() -> $crate::domain::schema::FieldType {
                $crate::domain::schema::FieldType::structure($shape_name)
            }

            #[allow(unused_mut)]
            fn to_wire(&self) -> ::serde_json::Value {
                let mut object = ::serde_json::Map::new();
                $(
                    if let Some(value) = &self.$field {
                        object.insert(
                            $wire.to_string(),
                            $crate::domain::ports::WireValue::to_wire(value),
                        );
                    }
                )*
                ::serde_json::Value::Object(object)
            }

            #[allow(unused_variables)]
            fn from_wire(
                value: &::serde_json::Value,
                path: &str,
            ) -> $crate::utils::error::Result<Self> {
                let object = $crate::core::wire::expect_object(value, path)?;
                Ok(Self {
                    $( $field: $crate::core::wire::decode_member(object, $wire, path)?, )*
                })
            }
        }

        impl $crate::domain::ports::Shape for $name {
            const SHAPE_NAME: &'static str = $shape_name;

            fn describe() -> $crate::utils::error::Result<$crate::domain::schema::ShapeDescriptor> {
                $crate::domain::schema::ShapeDescriptor::builder($shape_name)
                    $(
                        .field(
                            $crate::domain::schema::FieldDescriptor::new(
                                stringify!($field),
                                $wire,
                                $crate::shape!(@field_type $kind $ty),
                            )
                            .with_constraints(
                                $crate::domain::schema::Constraints::default()
                                    $( $( .$ckey($cval) )* )?
                            ),
                        )
                    )*
                    .build()
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&$crate::core::wire::render_payload(
                    &$crate::domain::ports::WireValue::to_wire(self),
                ))
            }
        }
    };

    (@storage string $ty:ty) => { ::std::option::Option<::std::string::String> };
    (@storage enumeration $ty:ty) => { ::std::option::Option<::std::string::String> };
    (@storage scalar $ty:ty) => { ::std::option::Option<$ty> };
    (@storage structure $ty:ty) => { ::std::option::Option<$ty> };
    (@storage list $ty:ty) => { ::std::option::Option<::std::vec::Vec<$ty>> };
    (@storage map $ty:ty) => {
        ::std::option::Option<::std::collections::BTreeMap<::std::string::String, $ty>>
    };

    (@field_type string $ty:ty) => {
        <::std::string::String as $crate::domain::ports::WireValue>::field_type()
    };
    (@field_type enumeration $ty:ty) => {
        $crate::domain::schema::FieldType::Enum(::std::sync::Arc::new(
            <$ty as $crate::domain::ports::WireEnum>::descriptor(),
        ))
    };
    (@field_type scalar $ty:ty) => { <$ty as $crate::domain::ports::WireValue>::field_type() };
    (@field_type structure $ty:ty) => { <$ty as $crate::domain::ports::WireValue>::field_type() };
    (@field_type list $ty:ty) => {
        $crate::domain::schema::FieldType::list(<$ty as $crate::domain::ports::WireValue>::field_type())
    };
    (@field_type map $ty:ty) => {
        $crate::domain::schema::FieldType::map(<$ty as $crate::domain::ports::WireValue>::field_type())
    };

    (@getter string $field:ident $ty:ty, $(#[$fmeta:meta])*) => {
        $(#[$fmeta])*
        pub fn $field(&self) -> ::std::option::Option<&str> {
            self.$field.as_deref()
        }
    };
    (@getter enumeration $field:ident $ty:ty, $(#[$fmeta:meta])*) => {
        $(#[$fmeta])*
        pub fn $field(&self) -> ::std::option::Option<&str> {
            self.$field.as_deref()
        }
    };
    (@getter scalar $field:ident $ty:ty, $(#[$fmeta:meta])*) => {
        $(#[$fmeta])*
        pub fn $field(&self) -> ::std::option::Option<$ty> {
            self.$field
        }
    };
    (@getter structure $field:ident $ty:ty, $(#[$fmeta:meta])*) => {
        $(#[$fmeta])*
        pub fn $field(&self) -> ::std::option::Option<&$ty> {
            self.$field.as_ref()
        }
    };
    (@getter list $field:ident $ty:ty, $(#[$fmeta:meta])*) => {
        $(#[$fmeta])*
        pub fn $field(&self) -> ::std::option::Option<&[$ty]> {
            self.$field.as_deref()
        }
    };
    (@getter map $field:ident $ty:ty, $(#[$fmeta:meta])*) => {
        $(#[$fmeta])*
        pub fn $field(
            &self,
        ) -> ::std::option::Option<&::std::collections::BTreeMap<::std::string::String, $ty>> {
            self.$field.as_ref()
        }
    };

    (@methods string $field:ident $ty:ty, $wire:literal) => {
        $crate::shape!(@methods enumeration $field $ty, $wire);
    };
    (@methods enumeration $field:ident $ty:ty, $wire:literal) => {
        $crate::__private::paste! {
            pub fn $field(mut self, value: impl Into<::std::string::String>) -> Self {
                self.$field = Some(value.into());
                self
            }

            pub fn [<set_ $field>](&mut self, value: ::std::option::Option<::std::string::String>) {
                self.$field = value;
            }
        }
    };
    (@methods scalar $field:ident $ty:ty, $wire:literal) => {
        $crate::__private::paste! {
            pub fn $field(mut self, value: $ty) -> Self {
                self.$field = Some(<$ty as $crate::domain::ports::WireValue>::canonical(value));
                self
            }

            pub fn [<set_ $field>](&mut self, value: ::std::option::Option<$ty>) {
                self.$field = value.map(<$ty as $crate::domain::ports::WireValue>::canonical);
            }
        }
    };
    (@methods structure $field:ident $ty:ty, $wire:literal) => {
        $crate::__private::paste! {
            pub fn $field(mut self, value: impl Into<$ty>) -> Self {
                self.$field = Some(value.into());
                self
            }

            pub fn [<set_ $field>](&mut self, value: ::std::option::Option<$ty>) {
                self.$field = value;
            }
        }
    };
    (@methods list $field:ident $ty:ty, $wire:literal) => {
        $crate::__private::paste! {
            /// Appends one element, creating the list when absent.
            pub fn $field(mut self, item: impl Into<$ty>) -> Self {
                self.$field
                    .get_or_insert_with(::std::vec::Vec::new)
                    .push(<$ty as $crate::domain::ports::WireValue>::canonical(item.into()));
                self
            }

            /// Appends every element, keeping what is already there.
            pub fn [<extend_ $field>]<I, V>(mut self, items: I) -> Self
            where
                I: IntoIterator<Item = V>,
                V: Into<$ty>,
            {
                self.$field
                    .get_or_insert_with(::std::vec::Vec::new)
                    .extend(
                        items
                            .into_iter()
                            .map(|item| <$ty as $crate::domain::ports::WireValue>::canonical(item.into())),
                    );
                self
            }

            /// Replaces the list with a copy of `items`.
            pub fn [<set_ $field>]<I, V>(&mut self, items: I)
            where
                I: IntoIterator<Item = V>,
                V: Into<$ty>,
            {
                self.$field = Some(
                    items
                        .into_iter()
                        .map(|item| <$ty as $crate::domain::ports::WireValue>::canonical(item.into()))
                        .collect(),
                );
            }

            /// Resets the list to absent.
            pub fn [<clear_ $field>](&mut self) {
                self.$field = None;
            }
        }
    };
    (@methods map $field:ident $ty:ty, $wire:literal) => {
        $crate::__private::paste! {
            /// Adds one entry; a key that is already present is a `DuplicateKey` error.
            pub fn [<add_ $field _entry>](
                mut self,
                key: impl Into<::std::string::String>,
                value: impl Into<$ty>,
            ) -> $crate::utils::error::Result<Self> {
                self.[<try_add_ $field _entry>](key, value)?;
                Ok(self)
            }

            /// In-place form of the entry adder; on `DuplicateKey` the builder keeps
            /// everything set so far.
            pub fn [<try_add_ $field _entry>](
                &mut self,
                key: impl Into<::std::string::String>,
                value: impl Into<$ty>,
            ) -> $crate::utils::error::Result<()> {
                let key = key.into();
                let entries = self
                    .$field
                    .get_or_insert_with(::std::collections::BTreeMap::new);
                if entries.contains_key(&key) {
                    return Err($crate::utils::error::ModelError::DuplicateKey {
                        field: $wire.to_string(),
                        key,
                    });
                }
                entries.insert(key, <$ty as $crate::domain::ports::WireValue>::canonical(value.into()));
                Ok(())
            }

            /// Resets the map to absent, not to an empty map.
            pub fn [<clear_ $field _entries>](mut self) -> Self {
                self.$field = None;
                self
            }

            /// Replaces the map with a copy of `entries`.
            pub fn $field<I, K, V>(mut self, entries: I) -> Self
            where
                I: IntoIterator<Item = (K, V)>,
                K: Into<::std::string::String>,
                V: Into<$ty>,
            {
                self.[<set_ $field>](entries);
                self
            }

            pub fn [<set_ $field>]<I, K, V>(&mut self, entries: I)
            where
                I: IntoIterator<Item = (K, V)>,
                K: Into<::std::string::String>,
                V: Into<$ty>,
            {
                self.$field = Some(
                    entries
                        .into_iter()
                        .map(|(k, v)| {
                            (k.into(), <$ty as $crate::domain::ports::WireValue>::canonical(v.into()))
                        })
                        .collect(),
                );
            }
        }
    };
}
