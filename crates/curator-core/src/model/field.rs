use crate::{
    describe::{FieldDescriptor, ScalarTy},
    Error, Result,
};
use serde::Serialize;
use std::{fmt, str::FromStr};

/// One resolved, named, typed, single- or multi-valued attribute within a
/// [`Model`](crate::Model).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelField {
    name: String,
    #[serde(rename = "type")]
    field_type: FieldType,
    multi_valued: bool,
}

/// The fixed set of primitive wire types the catalog service understands.
///
/// Serialized names are protocol vocabulary; the catalog matches them
/// literally, so they must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FieldType {
    Boolean,
    Date,
    Double,
    Float,
    Integer,
    Long,
    String,
    Text,
}

impl FieldType {
    /// Every wire type, in declaration order. Candidate lookups preserve
    /// this order, so STRING is always seen before TEXT.
    const ALL: [FieldType; 8] = [
        FieldType::Boolean,
        FieldType::Date,
        FieldType::Double,
        FieldType::Float,
        FieldType::Integer,
        FieldType::Long,
        FieldType::String,
        FieldType::Text,
    ];

    /// The value representation this wire type stores.
    ///
    /// A representation may be shared: TEXT stores strings just like STRING
    /// but remains a distinct wire tag.
    pub fn value_ty(self) -> ScalarTy {
        match self {
            Self::Boolean => ScalarTy::Bool,
            Self::Date => ScalarTy::Instant,
            Self::Double => ScalarTy::F64,
            Self::Float => ScalarTy::F32,
            Self::Integer => ScalarTy::I32,
            Self::Long => ScalarTy::I64,
            Self::String | Self::Text => ScalarTy::Str,
        }
    }

    /// True if this member is the flagged representative for its value
    /// representation. Exactly one member per shared representation carries
    /// the flag; TEXT defers to STRING.
    fn is_default_for_value_ty(self) -> bool {
        !matches!(self, Self::Text)
    }

    /// Wire types whose value representation matches `value_ty`, in
    /// declaration order.
    pub fn candidates(value_ty: ScalarTy) -> impl Iterator<Item = FieldType> {
        Self::ALL
            .into_iter()
            .filter(move |field_type| field_type.value_ty() == value_ty)
    }

    /// The exact name sent over the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Boolean => "BOOLEAN",
            Self::Date => "DATE",
            Self::Double => "DOUBLE",
            Self::Float => "FLOAT",
            Self::Integer => "INTEGER",
            Self::Long => "LONG",
            Self::String => "STRING",
            Self::Text => "TEXT",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(match s {
            "BOOLEAN" => Self::Boolean,
            "DATE" => Self::Date,
            "DOUBLE" => Self::Double,
            "FLOAT" => Self::Float,
            "INTEGER" => Self::Integer,
            "LONG" => Self::Long,
            "STRING" => Self::String,
            "TEXT" => Self::Text,
            _ => {
                return Err(Error::invalid_argument(format!(
                    "`{s}` does not name a wire type"
                )))
            }
        })
    }
}

impl ModelField {
    pub fn new(name: impl Into<String>, field_type: FieldType, multi_valued: bool) -> Self {
        Self {
            name: name.into(),
            field_type,
            multi_valued,
        }
    }

    /// Resolves a declared field into its wire-level classification.
    ///
    /// Collections resolve against their element type and come out
    /// multi-valued. When the effective value representation matches exactly
    /// one wire type, that type wins and any explicit override is ignored.
    /// Otherwise an explicit `field_type` override picks among the matches;
    /// an override naming anything else is rejected. A representation with
    /// no match at all falls back to STRING, which is also how enumerations
    /// are published (as their string name).
    pub fn from_descriptor(descriptor: &FieldDescriptor) -> Result<ModelField> {
        let multi_valued = descriptor.value_ty.is_collection();
        let value_ty = descriptor.value_ty.scalar_ty();

        let candidates: Vec<_> = FieldType::candidates(value_ty).collect();
        let field_type = match candidates[..] {
            [only] => only,
            _ => {
                let overridden = descriptor.field_type.filter(|token| !token.is_empty());

                if let Some(token) = overridden {
                    let field_type: FieldType = token.parse()?;
                    if !candidates.contains(&field_type) {
                        return Err(Error::invalid_argument(format!(
                            "wire type override {field_type} does not match the declared \
                             value type `{value_ty}` of field `{}`",
                            descriptor.ident
                        )));
                    }
                    field_type
                } else if candidates.is_empty() {
                    FieldType::String
                } else {
                    candidates
                        .iter()
                        .copied()
                        .find(|field_type| field_type.is_default_for_value_ty())
                        .unwrap_or_else(|| {
                            panic!("no default wire type declared for value type `{value_ty}`")
                        })
                }
            }
        };

        let name = descriptor
            .attribute
            .filter(|attribute| !attribute.is_empty())
            .unwrap_or(descriptor.ident);

        Ok(ModelField::new(name, field_type, multi_valued))
    }

    /// Wire attribute name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resolved wire type.
    pub fn field_type(&self) -> FieldType {
        self.field_type
    }

    /// True if the source field is a collection of the resolved element
    /// type rather than a scalar.
    pub fn is_multi_valued(&self) -> bool {
        self.multi_valued
    }
}
