use crate::backend::enums::backend_kind::BackendKind;
use crate::registry::enums::descriptor_ref::DescriptorRef;

impl DescriptorRef<'_> {
    pub fn kind(&self) -> BackendKind {
        match self {
            DescriptorRef::redis(_) => BackendKind::redis,
            DescriptorRef::pq(_) => BackendKind::pq,
            DescriptorRef::cockroachdb(_) => BackendKind::cockroachdb,
            DescriptorRef::mongo(_) => BackendKind::mongo,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            DescriptorRef::redis(descriptor) => descriptor.id(),
            DescriptorRef::pq(descriptor) => descriptor.id(),
            DescriptorRef::cockroachdb(descriptor) => descriptor.id(),
            DescriptorRef::mongo(descriptor) => descriptor.id(),
        }
    }

    /// Whether the connect sequence already ran, successfully or not.
    pub fn is_resolved(&self) -> bool {
        match self {
            DescriptorRef::redis(descriptor) => descriptor.is_resolved(),
            DescriptorRef::pq(descriptor) => descriptor.is_resolved(),
            DescriptorRef::cockroachdb(descriptor) => descriptor.is_resolved(),
            DescriptorRef::mongo(descriptor) => descriptor.is_resolved(),
        }
    }
}
