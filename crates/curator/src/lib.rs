// Lets code generated by the derive refer to `::curator` from inside this
// crate as well as from downstream crates.
extern crate self as curator;

mod catalog;
pub use catalog::{Builder, Catalog};

mod client;
pub use client::Client;

pub mod config;
pub use self::config::{ClientConfig, Format};

pub mod entity;
pub use entity::{EntityType, HdfsEntity, Source, SourceType};

mod meta_class;
pub use meta_class::MetaClass;

pub use curator_core::{
    build_model, ClassDescriptor, FieldDescriptor, FieldType, Model, ModelField, ScalarTy,
    TagChangeSet, UdpChangeSet, ValueTy,
};

pub use curator_macros::MetaClass;

pub use anyhow::{Error, Result};

#[doc(hidden)]
pub mod codegen_support {
    pub use crate::meta_class::MetaClass;
    pub use curator_core::{ClassDescriptor, FieldDescriptor, ScalarTy, ValueTy};
}
