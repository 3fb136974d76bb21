//! Container wrappers around a workload.
//!
//! Three ways of holding the same data:
//!
//! - [`OwnedObject`] owns its storage outright. Cloning it copies every element.
//! - [`SharedObject`] holds a reference-counted handle. Cloning it aliases the
//!   storage, and the handle can be released to emulate a transfer.
//! - [`WorkloadView`] is a borrowed pointer and length. Copying it never touches
//!   the elements.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::Error;
use crate::result::Result;
use crate::workload::{self, Element};

/// A workload held by value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OwnedObject {
    data: Vec<Element>,
}

impl OwnedObject {
    /// Generate a fresh workload of `len` elements and own it.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            data: workload::generate(len),
        }
    }

    /// Wrap existing storage.
    #[must_use]
    pub const fn from_vec(data: Vec<Element>) -> Self {
        Self { data }
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the object holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Borrow the elements.
    #[must_use]
    pub fn as_slice(&self) -> &[Element] {
        &self.data
    }

    /// Borrow a lightweight descriptor of the storage.
    #[must_use]
    pub fn view(&self) -> WorkloadView<'_> {
        WorkloadView { data: &self.data }
    }

    /// Read one element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index` is past the end.
    pub fn get(&self, index: usize) -> Result<Element> {
        self.data
            .get(index)
            .copied()
            .ok_or_else(|| Error::index_out_of_range(index, self.data.len()))
    }

    /// Overwrite one element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index` is past the end.
    pub fn set(&mut self, index: usize, value: Element) -> Result<()> {
        let len = self.data.len();
        let slot = self
            .data
            .get_mut(index)
            .ok_or_else(|| Error::index_out_of_range(index, len))?;
        *slot = value;
        Ok(())
    }

    /// Move the storage out, leaving this object empty.
    #[must_use]
    pub fn take(&mut self) -> Self {
        Self {
            data: std::mem::take(&mut self.data),
        }
    }

    /// Consume the object and return its storage.
    #[must_use]
    pub fn into_vec(self) -> Vec<Element> {
        self.data
    }
}

/// Build an [`OwnedObject`] inside a helper and return it to the caller.
#[must_use]
#[inline(never)]
pub fn create_owned_object(len: usize) -> OwnedObject {
    OwnedObject::new(len)
}

type Handle = Rc<RefCell<Vec<Element>>>;

/// A workload held through a shared, reference-counted handle.
///
/// `Clone` aliases the storage: both wrappers see each other's writes.
#[derive(Debug, Clone, Default)]
pub struct SharedObject {
    data: Option<Handle>,
}

impl SharedObject {
    /// Generate a fresh workload of `len` elements behind a new handle.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self::from_vec(workload::generate(len))
    }

    /// Put existing storage behind a new handle.
    #[must_use]
    pub fn from_vec(data: Vec<Element>) -> Self {
        Self {
            data: Some(Rc::new(RefCell::new(data))),
        }
    }

    /// Copy only the wrapper; the storage is shared.
    #[must_use]
    pub fn alias(&self) -> Self {
        self.clone()
    }

    /// Allocate new storage and copy every element into it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::HandleReleased`] if this wrapper no longer holds storage,
    /// or [`Error::AliasBorrowed`] if the storage is being written through
    /// another alias.
    pub fn deep_copy(&self) -> Result<Self> {
        self.to_vec().map(Self::from_vec)
    }

    /// Drop this wrapper's reference to the storage.
    ///
    /// Returns `true` if a handle was held. Other aliases keep the storage alive.
    pub fn release(&mut self) -> bool {
        self.data.take().is_some()
    }

    /// Whether [`release`](Self::release) has run on this wrapper.
    #[must_use]
    pub const fn is_released(&self) -> bool {
        self.data.is_none()
    }

    /// Whether `self` and `other` point at the same storage.
    #[must_use]
    pub fn shares_storage_with(&self, other: &Self) -> bool {
        match (&self.data, &other.data) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Number of live wrappers referencing this storage, or 0 once released.
    #[must_use]
    pub fn alias_count(&self) -> usize {
        self.data.as_ref().map_or(0, Rc::strong_count)
    }

    /// Number of elements.
    ///
    /// # Errors
    ///
    /// See [`deep_copy`](Self::deep_copy).
    pub fn len(&self) -> Result<usize> {
        self.with_data(<[Element]>::len)
    }

    /// Whether the storage holds no elements.
    ///
    /// # Errors
    ///
    /// See [`deep_copy`](Self::deep_copy).
    pub fn is_empty(&self) -> Result<bool> {
        self.with_data(<[Element]>::is_empty)
    }

    /// Read one element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index` is past the end, plus the
    /// errors of [`deep_copy`](Self::deep_copy).
    pub fn get(&self, index: usize) -> Result<Element> {
        self.with_data(|data| {
            data.get(index)
                .copied()
                .ok_or_else(|| Error::index_out_of_range(index, data.len()))
        })?
    }

    /// Overwrite one element; the write is visible through every alias.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index` is past the end, plus the
    /// errors of [`deep_copy`](Self::deep_copy).
    pub fn set(&self, index: usize, value: Element) -> Result<()> {
        let handle = self.handle()?;
        let mut data = handle.try_borrow_mut().map_err(|_| Error::AliasBorrowed)?;
        let len = data.len();
        let slot = data
            .get_mut(index)
            .ok_or_else(|| Error::index_out_of_range(index, len))?;
        *slot = value;
        Ok(())
    }

    /// Copy the elements into a new vector.
    ///
    /// # Errors
    ///
    /// See [`deep_copy`](Self::deep_copy).
    pub fn to_vec(&self) -> Result<Vec<Element>> {
        self.with_data(<[Element]>::to_vec)
    }

    fn handle(&self) -> Result<&Handle> {
        self.data.as_ref().ok_or(Error::HandleReleased)
    }

    fn with_data<R>(&self, f: impl FnOnce(&[Element]) -> R) -> Result<R> {
        let handle = self.handle()?;
        let data = handle.try_borrow().map_err(|_| Error::AliasBorrowed)?;
        Ok(f(data.as_slice()))
    }
}

/// Build a [`SharedObject`] inside a helper and return it to the caller.
#[must_use]
#[inline(never)]
pub fn create_shared_object(len: usize) -> SharedObject {
    SharedObject::new(len)
}

/// A borrowed pointer-and-length descriptor of a workload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkloadView<'a> {
    data: &'a [Element],
}

impl<'a> WorkloadView<'a> {
    /// Describe an existing slice.
    #[must_use]
    pub const fn new(data: &'a [Element]) -> Self {
        Self { data }
    }

    /// Number of elements.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the view covers no elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The described elements.
    #[must_use]
    pub const fn as_slice(&self) -> &'a [Element] {
        self.data
    }

    /// Whether this view describes the storage owned by `object`.
    #[must_use]
    pub fn describes(&self, object: &OwnedObject) -> bool {
        std::ptr::eq(self.data.as_ptr(), object.as_slice().as_ptr())
            && self.data.len() == object.len()
    }

    /// Copy every described element into new owned storage.
    #[must_use]
    pub fn to_owned_object(&self) -> OwnedObject {
        OwnedObject::from_vec(self.data.to_vec())
    }
}
