//! The operation contract shared by every character sequence, plus the
//! argument checks both implementations run before mutating anything.

use crate::error::{Result, SequenceError};

/// An abstraction over mutable ordered sequences of single characters.
///
/// Implemented by [`SequenceArray`](crate::SequenceArray) (contiguous storage) and
/// [`SequenceRing`](crate::SequenceRing) (circular singly-linked storage) so that
/// callers can swap representations without changing behavior.
///
/// Element arguments are `&str` values that must hold exactly one character;
/// anything else fails with [`SequenceError::InvalidElement`]. Index arguments
/// outside the range an operation accepts fail with
/// [`SequenceError::IndexOutOfRange`]. Failed calls leave the sequence unchanged.
///
/// `Clone` is a supertrait: cloning any implementation yields a deep copy that
/// shares no storage with the original.
pub trait AnySequence: Clone {
    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if the sequence contains no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Adds `element` as the new last element.
    fn append(&mut self, element: &str) -> Result<()>;

    /// Inserts `element` so that it becomes the element at `index`.
    ///
    /// `index == len()` is accepted and behaves like [`append`](AnySequence::append).
    fn insert(&mut self, element: &str, index: usize) -> Result<()>;

    /// Returns the element at `index`.
    fn get(&self, index: usize) -> Result<char>;

    /// Removes and returns the element at `index`.
    fn delete(&mut self, index: usize) -> Result<char>;

    /// Removes every occurrence of `element`. Absent elements are not an error.
    fn delete_all(&mut self, element: &str) -> Result<()>;

    /// Reverses the element order in place.
    fn reverse(&mut self);

    /// Returns the index of the first occurrence of `element`, or `None`.
    fn find_first(&self, element: &str) -> Result<Option<usize>>;

    /// Returns the index of the last occurrence of `element`, or `None`.
    fn find_last(&self, element: &str) -> Result<Option<usize>>;

    /// Removes all elements.
    fn clear(&mut self);

    /// Appends a copy of every element of `other`, in order. `other` is not modified.
    fn extend_from(&mut self, other: &Self);

    /// Returns the elements in order as a vector.
    fn to_vec(&self) -> Vec<char>;
}

/// Checks that `element` is exactly one character and returns it.
pub fn validate_element(element: &str) -> Result<char> {
    let mut chars = element.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(ch),
        _ => Err(SequenceError::invalid_element(element)),
    }
}

/// Checks an index for access or removal: `index < len`.
#[inline]
pub(crate) fn check_access_index(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(SequenceError::index_out_of_range(index, len))
    }
}

/// Checks an index for insertion: `index <= len`.
#[inline]
pub(crate) fn check_insert_index(index: usize, len: usize) -> Result<()> {
    if index <= len {
        Ok(())
    } else {
        Err(SequenceError::index_out_of_range(index, len))
    }
}
