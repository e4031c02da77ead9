// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

use crate::error::DynArrayError;

/// Test behaviour for injecting failures into `DynArray` growth.
///
/// This is only available with the `test-utils` feature and allows users
/// to test error handling paths in their code by injecting failures.
///
/// The behaviour is sticky - once set, it remains active until changed.
/// It only affects growth (`reserve()`, `grow()`, `append()` and their
/// `try_` counterparts); construction and copies are never affected.
///
/// # Example
///
/// ```rust
/// // test-utils feature required in dev-dependencies
/// use dynarray::{DynArray, DynArrayBehaviour, DynArrayError};
///
/// let mut array = DynArray::<u8>::new();
/// array.change_behaviour(DynArrayBehaviour::FailAtAllocation);
///
/// assert_eq!(
///     array.try_append(1),
///     Err(DynArrayError::AllocationFailed { capacity: 1 })
/// );
///
/// array.change_behaviour(DynArrayBehaviour::None);
/// assert!(array.try_append(1).is_ok());
/// ```
#[cfg(any(test, feature = "test-utils"))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DynArrayBehaviour {
    /// Normal behaviour - no injected failures.
    #[default]
    None,
    /// Every growth fails with `AllocationFailed`.
    FailAtAllocation,
    /// Every growth fails with `CapacityOverflow`.
    FailAtCapacityOverflow,
}

/// A growable contiguous array with an explicit doubling growth policy.
///
/// The storage is a single owned buffer of exactly `capacity()` slots. Slots
/// in `[0, len())` hold appended values, slots in `[len(), capacity())` hold
/// `T::default()`.
///
/// Growth follows one rule: `reserve(0)` (and therefore `append()` on a full
/// array) goes `0 → 1` and doubles afterwards (`1 → 2 → 4 → 8...`), while
/// `reserve(n)` grows to exactly `n` and never shrinks.
///
/// # Example
///
/// ```rust
/// use dynarray::DynArray;
///
/// let mut array = DynArray::new();
/// array.append(5);
/// array.append(7);
/// array.append(9);
///
/// assert_eq!(array.len(), 3);
/// assert_eq!(array.capacity(), 4);
/// assert_eq!(array.as_slice(), &[5, 7, 9]);
///
/// // Index access reaches the whole storage, not only the used part.
/// assert_eq!(array[3], 0);
/// ```
pub struct DynArray<T> {
    buffer: Box<[T]>,
    len: usize,
    #[cfg(any(test, feature = "test-utils"))]
    behaviour: DynArrayBehaviour,
}

#[cold]
#[inline(never)]
#[track_caller]
fn capacity_panic(err: DynArrayError) -> ! {
    panic!("{err}")
}

impl<T> DynArray<T> {
    /// Creates a new empty `DynArray`.
    ///
    /// Does not allocate.
    pub fn new() -> Self {
        Self::from_buffer(Box::default())
    }

    fn from_buffer(buffer: Box<[T]>) -> Self {
        Self {
            buffer,
            len: 0,
            #[cfg(any(test, feature = "test-utils"))]
            behaviour: DynArrayBehaviour::default(),
        }
    }

    /// Changes the failure injection behaviour.
    #[cfg(any(test, feature = "test-utils"))]
    pub fn change_behaviour(&mut self, behaviour: DynArrayBehaviour) {
        self.behaviour = behaviour;
    }

    /// Returns the number of elements in use.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Alias of [`len()`](Self::len).
    #[inline]
    pub fn size(&self) -> usize {
        self.len
    }

    /// Returns `true` if no element is in use.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Returns the number of slots that can be appended without growing.
    #[inline]
    pub fn spare_capacity(&self) -> usize {
        self.capacity() - self.len
    }

    /// Releases the buffer and resets both length and capacity to zero.
    ///
    /// Calling it on an empty array is a no-op.
    pub fn clear(&mut self) {
        if self.capacity() != 0 {
            trace!(
                "dynarray: releasing {} slots ({} in use)",
                self.capacity(),
                self.len
            );
        }

        self.buffer = Box::default();
        self.len = 0;
    }

    /// Returns the elements in use.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.buffer[..self.len]
    }

    /// Returns the elements in use, mutably.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.buffer[..self.len]
    }

    /// Returns the whole storage, spare slots included.
    #[inline]
    pub fn as_storage(&self) -> &[T] {
        &self.buffer
    }

    /// Returns the whole storage, spare slots included, mutably.
    #[inline]
    pub fn as_mut_storage(&mut self) -> &mut [T] {
        &mut self.buffer
    }

    /// Returns a reference to the slot at `index` without any bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be lower than `capacity()`.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.capacity());
        // SAFETY: caller guarantees index < capacity() == buffer.len()
        unsafe { self.buffer.get_unchecked(index) }
    }

    /// Returns a mutable reference to the slot at `index` without any bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be lower than `capacity()`.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.capacity());
        // SAFETY: caller guarantees index < capacity() == buffer.len()
        unsafe { self.buffer.get_unchecked_mut(index) }
    }
}

impl<T> DynArray<T>
where
    T: Default,
{
    /// Creates a new `DynArray` with exactly `capacity` default-initialized slots.
    ///
    /// Does not allocate when `capacity` is 0.
    ///
    /// # Panics
    ///
    /// Panics if the buffer cannot be allocated.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::try_with_capacity(capacity).unwrap_or_else(|err| capacity_panic(err))
    }

    /// Fallible version of [`with_capacity()`](Self::with_capacity).
    pub fn try_with_capacity(capacity: usize) -> Result<Self, DynArrayError> {
        Ok(Self::from_buffer(allocate(capacity)?))
    }

    /// Appends `value` at slot `len()`, growing by the doubling policy when full.
    ///
    /// # Panics
    ///
    /// Panics if the array is full and cannot grow.
    pub fn append(&mut self, value: T) {
        if let Err(err) = self.try_append(value) {
            capacity_panic(err);
        }
    }

    /// Fallible version of [`append()`](Self::append).
    ///
    /// On error the array is left untouched and `value` is dropped.
    pub fn try_append(&mut self, value: T) -> Result<(), DynArrayError> {
        if self.len == self.capacity() {
            self.try_grow()?;
        }

        self.buffer[self.len] = value;
        self.len += 1;

        Ok(())
    }

    /// Grows the storage.
    ///
    /// - `new_capacity == 0`: doubling mode. Capacity goes to 1 if it was 0,
    ///   otherwise to twice its current value. Growth always happens.
    /// - `new_capacity > capacity()`: capacity goes to exactly `new_capacity`.
    /// - otherwise: no-op. Capacity never shrinks through this path.
    ///
    /// Length is never modified.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity overflows or cannot be allocated.
    pub fn reserve(&mut self, new_capacity: usize) {
        if let Err(err) = self.try_reserve(new_capacity) {
            capacity_panic(err);
        }
    }

    /// Fallible version of [`reserve()`](Self::reserve).
    ///
    /// On error the array is left untouched.
    pub fn try_reserve(&mut self, new_capacity: usize) -> Result<(), DynArrayError> {
        let target = if new_capacity == 0 {
            self.doubled_capacity()?
        } else if new_capacity > self.capacity() {
            new_capacity
        } else {
            return Ok(());
        };

        self.realloc(target)
    }

    /// Equivalent to `reserve(0)`.
    pub fn grow(&mut self) {
        self.reserve(0);
    }

    /// Equivalent to `try_reserve(0)`.
    pub fn try_grow(&mut self) -> Result<(), DynArrayError> {
        self.try_reserve(0)
    }

    #[inline]
    fn doubled_capacity(&self) -> Result<usize, DynArrayError> {
        match self.capacity() {
            0 => Ok(1),
            capacity => capacity
                .checked_mul(2)
                .ok_or(DynArrayError::CapacityOverflow),
        }
    }

    /// Moves the buffer into a fresh allocation of `new_capacity` slots.
    ///
    /// Elements in `[0, min(len, new_capacity))` are swapped into the new
    /// buffer in order, the old buffer (now holding defaults) is released.
    #[cold]
    #[inline(never)]
    fn realloc(&mut self, new_capacity: usize) -> Result<(), DynArrayError> {
        #[cfg(any(test, feature = "test-utils"))]
        match self.behaviour {
            DynArrayBehaviour::None => {}
            DynArrayBehaviour::FailAtAllocation => {
                return Err(DynArrayError::AllocationFailed {
                    capacity: new_capacity,
                });
            }
            DynArrayBehaviour::FailAtCapacityOverflow => {
                return Err(DynArrayError::CapacityOverflow);
            }
        }

        let mut buffer = allocate(new_capacity)?;
        let carried = self.len.min(new_capacity);
        buffer[..carried].swap_with_slice(&mut self.buffer[..carried]);

        trace!(
            "dynarray: realloc {} -> {} slots ({} in use)",
            self.capacity(),
            new_capacity,
            self.len
        );

        self.buffer = buffer;

        Ok(())
    }
}

impl<T> DynArray<T>
where
    T: Clone + Default,
{
    /// Replaces the contents of `self` with a deep copy of `source`.
    ///
    /// The current buffer is released first, then a buffer of exactly
    /// `source.capacity()` slots is allocated and `source.as_slice()` is
    /// cloned into it. Spare slots are default-initialized, not copied.
    ///
    /// Returns `self` so assignments can be chained:
    ///
    /// ```rust
    /// use dynarray::DynArray;
    ///
    /// let mut a = DynArray::<u8>::new();
    /// let mut b = DynArray::new();
    /// let mut c = DynArray::with_capacity(4);
    /// c.append(1);
    ///
    /// a.assign(b.assign(&c));
    ///
    /// assert_eq!(a.as_slice(), &[1]);
    /// assert_eq!(a.capacity(), 4);
    /// assert_eq!(b.as_slice(), &[1]);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the buffer cannot be allocated.
    pub fn assign(&mut self, source: &Self) -> &mut Self {
        if core::ptr::eq(&*self, source) {
            return self;
        }

        self.clear();

        let mut buffer = allocate(source.capacity()).unwrap_or_else(|err| capacity_panic(err));
        buffer[..source.len].clone_from_slice(source.as_slice());

        self.buffer = buffer;
        self.len = source.len;

        self
    }
}

/// Allocates exactly `capacity` default-initialized slots.
fn allocate<T: Default>(capacity: usize) -> Result<Box<[T]>, DynArrayError> {
    if capacity == 0 {
        return Ok(Box::default());
    }

    let bytes = capacity
        .checked_mul(core::mem::size_of::<T>())
        .ok_or(DynArrayError::CapacityOverflow)?;

    if bytes > isize::MAX as usize {
        return Err(DynArrayError::CapacityOverflow);
    }

    let mut slots = Vec::new();
    slots
        .try_reserve_exact(capacity)
        .map_err(|_| DynArrayError::AllocationFailed { capacity })?;
    slots.resize_with(capacity, T::default);

    Ok(slots.into_boxed_slice())
}

impl<T> Default for DynArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for DynArray<T>
where
    T: Clone + Default,
{
    /// Deep copy sized to `self.capacity()`, not `self.len()`.
    fn clone(&self) -> Self {
        let mut copy = Self::with_capacity(self.capacity());
        copy.buffer[..self.len].clone_from_slice(self.as_slice());
        copy.len = self.len;
        copy
    }

    fn clone_from(&mut self, source: &Self) {
        self.assign(source);
    }
}

impl<T> From<&[T]> for DynArray<T>
where
    T: Clone + Default,
{
    fn from(slice: &[T]) -> Self {
        let mut array = Self::with_capacity(slice.len());
        array.buffer.clone_from_slice(slice);
        array.len = slice.len();
        array
    }
}

impl<T> core::fmt::Debug for DynArray<T>
where
    T: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DynArray")
            .field("data", &self.as_slice())
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .finish()
    }
}

impl<T: PartialEq> PartialEq for DynArray<T> {
    fn eq(&self, other: &Self) -> bool {
        // Spare slots and capacity are not part of the value
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for DynArray<T> {}

/// Storage access: reaches `[0, capacity())`, not only the elements in use.
///
/// Panics if `index >= capacity()`. See [`DynArray::get_unchecked`] for the
/// unchecked variant.
impl<T> Index<usize> for DynArray<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.buffer[index]
    }
}

impl<T> IndexMut<usize> for DynArray<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.buffer[index]
    }
}
