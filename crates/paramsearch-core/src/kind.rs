//! Compile-time field classification.
//!
//! [`FieldKind`] maps a Rust type to the [`SemanticType`] the query pipeline
//! works with, so a record's schema can be described without runtime
//! reflection. [`Record`] lists a type's directly declared fields, and the
//! [`record_schema!`](crate::record_schema) macro implements it from a
//! field list.
//!
//! ```
//! use chrono::NaiveDate;
//! use paramsearch_core::{record_schema, Record, SemanticType};
//!
//! #[allow(dead_code)]
//! struct Person {
//!     name: String,
//!     birth_date: Option<NaiveDate>,
//! }
//!
//! record_schema!(Person {
//!     "name" => String,
//!     "birthDate" => Option<NaiveDate>,
//! });
//!
//! let fields = Person::fields();
//! assert_eq!(fields[1].semantic_type(), SemanticType::Temporal);
//! assert!(fields[1].is_nullable());
//! ```

use std::borrow::Cow;

use crate::types::{FieldDescriptor, SemanticType};

/// A Rust type that can back a searchable record field.
pub trait FieldKind {
    /// Semantic type of values of this type.
    const SEMANTIC_TYPE: SemanticType;

    /// Whether the type admits an absent value.
    const NULLABLE: bool = false;
}

/// A record type whose declared fields form a search schema.
///
/// Only fields declared directly on the type take part; there is no
/// inheritance or flattening of nested records.
pub trait Record {
    /// Descriptors for every declared field, in declaration order.
    fn fields() -> Vec<FieldDescriptor>;
}

macro_rules! impl_field_kind {
    ($semantic:expr => $($ty:ty),+ $(,)?) => {
        $(
            impl FieldKind for $ty {
                const SEMANTIC_TYPE: SemanticType = $semantic;
            }
        )+
    };
}

impl_field_kind!(SemanticType::Keyword => String, str, char);
impl_field_kind!(
    SemanticType::Number =>
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    f32, f64,
);
impl_field_kind!(
    SemanticType::Temporal =>
    chrono::NaiveDate,
    chrono::NaiveDateTime,
    chrono::NaiveTime,
    std::time::SystemTime,
);
impl_field_kind!(SemanticType::Other => bool, ());

impl FieldKind for &str {
    const SEMANTIC_TYPE: SemanticType = SemanticType::Keyword;
}

impl FieldKind for Cow<'_, str> {
    const SEMANTIC_TYPE: SemanticType = SemanticType::Keyword;
}

impl<Tz: chrono::TimeZone> FieldKind for chrono::DateTime<Tz> {
    const SEMANTIC_TYPE: SemanticType = SemanticType::Temporal;
}

impl<T> FieldKind for Vec<T> {
    const SEMANTIC_TYPE: SemanticType = SemanticType::Other;
}

impl<T: FieldKind + ?Sized> FieldKind for Box<T> {
    const SEMANTIC_TYPE: SemanticType = T::SEMANTIC_TYPE;
    const NULLABLE: bool = T::NULLABLE;
}

impl<T: FieldKind> FieldKind for Option<T> {
    const SEMANTIC_TYPE: SemanticType = T::SEMANTIC_TYPE;
    const NULLABLE: bool = true;
}

/// Implement [`Record`] for an existing type from a list of fields.
///
/// Fields are given either as `"wireName" => Type` pairs or as
/// `ident: Type` pairs (the identifier becomes the wire name). Each type must
/// implement [`FieldKind`].
#[macro_export]
macro_rules! record_schema {
    ($record:ty { $($field:ident : $ty:ty),* $(,)? }) => {
        impl $crate::Record for $record {
            fn fields() -> ::std::vec::Vec<$crate::FieldDescriptor> {
                ::std::vec![
                    $($crate::FieldDescriptor::of::<$ty>(::std::stringify!($field))),*
                ]
            }
        }
    };
    ($record:ty { $($name:literal => $ty:ty),* $(,)? }) => {
        impl $crate::Record for $record {
            fn fields() -> ::std::vec::Vec<$crate::FieldDescriptor> {
                ::std::vec![
                    $($crate::FieldDescriptor::of::<$ty>($name)),*
                ]
            }
        }
    };
}

// ============================================================================
// Tests
// ============================================================================
