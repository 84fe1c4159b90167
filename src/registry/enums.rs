pub mod descriptor_ref;
