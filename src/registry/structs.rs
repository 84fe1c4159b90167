pub mod registry;
pub mod shared_registry;
