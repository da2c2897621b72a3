mod error;
pub use error::Error;

pub mod changeset;
pub use changeset::{TagChangeSet, UdpChangeSet};

pub mod describe;
pub use describe::{ClassDescriptor, FieldDescriptor, ScalarTy, ValueTy};

pub mod model;
pub use model::{build_model, FieldType, Model, ModelField};

/// A Result type alias that uses Curator's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
