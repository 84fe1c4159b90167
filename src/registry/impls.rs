pub mod descriptor_ref;
pub mod registry;
pub mod registry_accessors;
pub mod shared_registry;
