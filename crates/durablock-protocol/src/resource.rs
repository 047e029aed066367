use std::io::Read;
use std::rc::Rc;
use std::sync::Arc;

/// Source of the default files shipped with the host.
///
/// Returning `None` means the resource is not bundled at all; callers treat
/// that as a missing default rather than an I/O failure.
pub trait ResourceProvider {
    fn open(&self, name: &str) -> Option<Box<dyn Read + '_>>;
}

impl<R: ResourceProvider + ?Sized> ResourceProvider for &R {
    fn open(&self, name: &str) -> Option<Box<dyn Read + '_>> {
        (**self).open(name)
    }
}

impl<R: ResourceProvider + ?Sized> ResourceProvider for Rc<R> {
    fn open(&self, name: &str) -> Option<Box<dyn Read + '_>> {
        (**self).open(name)
    }
}

impl<R: ResourceProvider + ?Sized> ResourceProvider for Arc<R> {
    fn open(&self, name: &str) -> Option<Box<dyn Read + '_>> {
        (**self).open(name)
    }
}
