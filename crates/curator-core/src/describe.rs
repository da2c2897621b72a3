use std::fmt;

/// A flattened, ordered description of one annotated type: the model name
/// plus every metadata-participating field, embedded ancestors included.
///
/// Descriptors are normally emitted by `#[derive(MetaClass)]`, but nothing
/// stops callers from assembling them by hand.
#[derive(Debug, Clone)]
pub struct ClassDescriptor {
    /// Logical model name registered with the catalog.
    pub model_name: String,

    /// Metadata-participating fields, in declaration order.
    pub fields: Vec<FieldDescriptor>,
}

/// Static description of a single metadata-participating field.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    /// Source field identifier.
    pub ident: &'static str,

    /// The field's declared value type.
    pub value_ty: ValueTy,

    /// Explicit wire-name override.
    pub attribute: Option<&'static str>,

    /// Explicit wire-type override token, e.g. `"TEXT"`.
    pub field_type: Option<&'static str>,
}

/// Declared shape of a field's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueTy {
    Scalar(ScalarTy),

    /// A collection of the element type; resolves as multi-valued.
    Collection(ScalarTy),
}

impl ValueTy {
    /// The effective value representation: the element type for collections,
    /// the declared type otherwise.
    pub fn scalar_ty(self) -> ScalarTy {
        match self {
            Self::Scalar(ty) | Self::Collection(ty) => ty,
        }
    }

    pub fn is_collection(self) -> bool {
        matches!(self, Self::Collection(_))
    }
}

/// Value representation a field can declare.
///
/// Wire types map onto these; `Opaque` types (enumerations included) have no
/// mapping and resolve to the string wire type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarTy {
    Bool,

    /// UTC instant (`chrono::DateTime<Utc>`).
    Instant,

    F64,

    F32,

    I32,

    I64,

    Str,

    /// Reserved change-set marker: tag change tracking.
    TagChangeSet,

    /// Reserved change-set marker: user-defined property change tracking.
    UdpChangeSet,

    /// Any other type, identified by its source type name.
    Opaque(&'static str),
}

impl ScalarTy {
    /// True for the reserved change-set marker types, which are excluded
    /// from published model schemas.
    pub fn is_change_set(self) -> bool {
        matches!(self, Self::TagChangeSet | Self::UdpChangeSet)
    }
}

impl fmt::Display for ScalarTy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => f.write_str("bool"),
            Self::Instant => f.write_str("instant"),
            Self::F64 => f.write_str("f64"),
            Self::F32 => f.write_str("f32"),
            Self::I32 => f.write_str("i32"),
            Self::I64 => f.write_str("i64"),
            Self::Str => f.write_str("string"),
            Self::TagChangeSet => f.write_str("tag change set"),
            Self::UdpChangeSet => f.write_str("property change set"),
            Self::Opaque(name) => f.write_str(name),
        }
    }
}
