//! Disposable resource handle.
//!
//! A [`Resource`] is `Open` until its owner calls [`Resource::close`], after
//! which it is `Closed` for good. `Drop` is the fallback: a resource that is
//! still open when it goes out of scope is released there and a warning is
//! logged. Whichever path runs first releases the external handle; the other
//! finds nothing left to release.

use tracing::{debug, info, warn};

use crate::error::{TourError, TourResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceState {
    Open,
    Closed,
}

/// Which cleanup path performed the release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleasePath {
    /// The owner closed the resource.
    Explicit,
    /// The owner forgot; released on drop.
    Fallback,
}

/// Something outside the program that must be given back exactly once.
pub trait ExternalHandle {
    /// Called once when the owning resource opens.
    fn acquire(&mut self, _name: &str) {}

    fn release(&mut self, name: &str, path: ReleasePath);
}

/// Default handle that only reports its open and release.
#[derive(Debug, Default)]
pub struct LoggedHandle;

impl ExternalHandle for LoggedHandle {
    fn acquire(&mut self, name: &str) {
        println!("Resource '{name}' created.");
    }

    fn release(&mut self, name: &str, path: ReleasePath) {
        if path == ReleasePath::Explicit {
            println!("Disposing managed resources for '{name}'.");
        }
        println!("Disposing unmanaged resources for '{name}'.");
    }
}

pub struct Resource<H: ExternalHandle = LoggedHandle> {
    name: String,
    handle: Option<H>,
}

impl Resource<LoggedHandle> {
    pub fn named(name: impl Into<String>) -> Self {
        Resource::open(name, LoggedHandle)
    }
}

impl<H: ExternalHandle> Resource<H> {
    pub fn open(name: impl Into<String>, mut handle: H) -> Self {
        let name = name.into();
        handle.acquire(&name);
        info!(resource = %name, "resource opened");
        Self {
            name,
            handle: Some(handle),
        }
    }

    /// Open a resource, hand it to `f`, and close it afterwards no matter
    /// what `f` returned.
    pub fn scoped<T>(
        name: impl Into<String>,
        handle: H,
        f: impl FnOnce(&Resource<H>) -> TourResult<T>,
    ) -> TourResult<T> {
        let mut resource = Resource::open(name, handle);
        let result = f(&resource);
        resource.close();
        result
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn state(&self) -> ResourceState {
        if self.handle.is_some() {
            ResourceState::Open
        } else {
            ResourceState::Closed
        }
    }

    pub fn is_closed(&self) -> bool {
        self.state() == ResourceState::Closed
    }

    pub fn do_work(&self) -> TourResult<String> {
        if self.is_closed() {
            return Err(TourError::disposed(&self.name));
        }
        Ok(format!("Resource '{}' is doing work.", self.name))
    }

    /// Release the external handle now. Closing twice is a no-op.
    pub fn close(&mut self) {
        match self.handle.take() {
            Some(mut handle) => {
                handle.release(&self.name, ReleasePath::Explicit);
                info!(resource = %self.name, "resource closed");
            }
            None => debug!(resource = %self.name, "close on closed resource ignored"),
        }
    }
}

impl<H: ExternalHandle> Drop for Resource<H> {
    fn drop(&mut self) {
        if let Some(mut handle) = self.handle.take() {
            warn!(resource = %self.name, "resource dropped while open, releasing via fallback");
            handle.release(&self.name, ReleasePath::Fallback);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct RecordingHandle {
        acquired: Rc<RefCell<Vec<String>>>,
        releases: Rc<RefCell<Vec<ReleasePath>>>,
    }

    impl ExternalHandle for RecordingHandle {
        fn acquire(&mut self, name: &str) {
            self.acquired.borrow_mut().push(name.to_string());
        }

        fn release(&mut self, _name: &str, path: ReleasePath) {
            self.releases.borrow_mut().push(path);
        }
    }

    #[test]
    fn test_open_resource_works() {
        let handle = RecordingHandle::default();
        let resource = Resource::open("FileHandle1", handle.clone());

        assert_eq!(resource.state(), ResourceState::Open);
        assert_eq!(
            resource.do_work().unwrap(),
            "Resource 'FileHandle1' is doing work."
        );
        drop(resource);
        assert_eq!(*handle.releases.borrow(), vec![ReleasePath::Fallback]);
    }

    #[test]
    fn test_open_acquires_under_its_name() {
        let handle = RecordingHandle::default();
        let mut resource = Resource::open("Socket1", handle.clone());

        assert_eq!(*handle.acquired.borrow(), vec![resource.name().to_string()]);
        resource.close();
        resource.close();
        assert_eq!(handle.acquired.borrow().len(), 1);
    }

    #[test]
    fn test_closed_resource_rejects_work() {
        let mut resource = Resource::open("FileHandle1", RecordingHandle::default());
        resource.close();

        let err = resource.do_work().unwrap_err();
        assert_eq!(err, TourError::disposed("FileHandle1"));
    }

    #[test]
    fn test_double_close_releases_once() {
        let handle = RecordingHandle::default();
        let mut resource = Resource::open("FileHandle1", handle.clone());

        resource.close();
        resource.close();
        assert!(resource.is_closed());
        drop(resource);

        assert_eq!(*handle.releases.borrow(), vec![ReleasePath::Explicit]);
    }

    #[test]
    fn test_scoped_closes_on_error() {
        let handle = RecordingHandle::default();
        let result: TourResult<()> = Resource::scoped("Socket", handle.clone(), |res| {
            res.do_work()?;
            Err(TourError::parse("oops", "i32"))
        });

        assert!(result.is_err());
        assert_eq!(*handle.releases.borrow(), vec![ReleasePath::Explicit]);
    }

    #[test]
    fn test_scoped_returns_closure_value() {
        let handle = RecordingHandle::default();
        let message = Resource::scoped("Socket", handle.clone(), |res| res.do_work()).unwrap();

        assert_eq!(message, "Resource 'Socket' is doing work.");
        assert_eq!(handle.releases.borrow().len(), 1);
    }
}
