pub mod container;
pub mod data;
pub mod registry;
pub mod value;

pub use container::{Container, NAME_FIELD};
pub use data::{DataHandle, InMemoryData, LazyData};
pub use registry::{TypeDescriptor, TypeRegistry};
pub use value::FieldValue;
