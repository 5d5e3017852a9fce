//! Character sequence backed by a contiguous growable array.

use std::fmt;
use std::iter::Copied;
use std::slice;

use log::trace;

use crate::error::Result;
use crate::sequence::{check_access_index, check_insert_index, validate_element, AnySequence};

/// An ordered character sequence stored in a `Vec<char>`.
///
/// Every operation maps to the matching `Vec` primitive after its arguments
/// have been checked. It is the baseline that [`SequenceRing`](crate::SequenceRing)
/// is measured and tested against.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct SequenceArray {
    items: Vec<char>,
}

impl SequenceArray {
    /// Creates a new empty sequence.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates an empty sequence with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of elements. O(1).
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[char] {
        &self.items
    }

    /// Iterates over the elements in order.
    pub fn iter(&self) -> Copied<slice::Iter<'_, char>> {
        self.items.iter().copied()
    }

    /// Appends an already validated character.
    #[inline]
    pub fn push(&mut self, ch: char) {
        self.items.push(ch);
    }

    pub fn append(&mut self, element: &str) -> Result<()> {
        let ch = validate_element(element)?;
        self.items.push(ch);
        Ok(())
    }

    pub fn insert(&mut self, element: &str, index: usize) -> Result<()> {
        let ch = validate_element(element)?;
        check_insert_index(index, self.items.len())?;
        self.items.insert(index, ch);
        Ok(())
    }

    pub fn get(&self, index: usize) -> Result<char> {
        check_access_index(index, self.items.len())?;
        Ok(self.items[index])
    }

    pub fn delete(&mut self, index: usize) -> Result<char> {
        check_access_index(index, self.items.len())?;
        Ok(self.items.remove(index))
    }

    pub fn delete_all(&mut self, element: &str) -> Result<()> {
        let ch = validate_element(element)?;
        self.items.retain(|&item| item != ch);
        Ok(())
    }

    pub fn reverse(&mut self) {
        self.items.reverse();
    }

    pub fn find_first(&self, element: &str) -> Result<Option<usize>> {
        let ch = validate_element(element)?;
        Ok(self.items.iter().position(|&item| item == ch))
    }

    pub fn find_last(&self, element: &str) -> Result<Option<usize>> {
        let ch = validate_element(element)?;
        Ok(self.items.iter().rposition(|&item| item == ch))
    }

    pub fn clear(&mut self) {
        trace!("array: clearing {} elements", self.items.len());
        self.items.clear();
    }

    pub fn extend_from(&mut self, other: &SequenceArray) {
        self.items.extend_from_slice(&other.items);
    }
}

impl AnySequence for SequenceArray {
    fn len(&self) -> usize {
        self.len()
    }
    fn is_empty(&self) -> bool {
        self.is_empty()
    }
    fn append(&mut self, element: &str) -> Result<()> {
        self.append(element)
    }
    fn insert(&mut self, element: &str, index: usize) -> Result<()> {
        self.insert(element, index)
    }
    fn get(&self, index: usize) -> Result<char> {
        self.get(index)
    }
    fn delete(&mut self, index: usize) -> Result<char> {
        self.delete(index)
    }
    fn delete_all(&mut self, element: &str) -> Result<()> {
        self.delete_all(element)
    }
    fn reverse(&mut self) {
        self.reverse();
    }
    fn find_first(&self, element: &str) -> Result<Option<usize>> {
        self.find_first(element)
    }
    fn find_last(&self, element: &str) -> Result<Option<usize>> {
        self.find_last(element)
    }
    fn clear(&mut self) {
        self.clear();
    }
    fn extend_from(&mut self, other: &Self) {
        self.extend_from(other);
    }
    fn to_vec(&self) -> Vec<char> {
        self.items.clone()
    }
}

impl fmt::Debug for SequenceArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl fmt::Display for SequenceArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.items.iter().try_for_each(|ch| fmt::Write::write_char(f, *ch))
    }
}

impl Extend<char> for SequenceArray {
    fn extend<I: IntoIterator<Item = char>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl FromIterator<char> for SequenceArray {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl From<&str> for SequenceArray {
    fn from(s: &str) -> Self {
        s.chars().collect()
    }
}

impl<'a> IntoIterator for &'a SequenceArray {
    type Item = char;
    type IntoIter = Copied<slice::Iter<'a, char>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SequenceError;

    fn abcde() -> SequenceArray {
        SequenceArray::from("ABCDE")
    }

    #[test]
    fn test_array_initial_empty_state() {
        let arr = SequenceArray::new();
        assert_eq!(arr.len(), 0);
        assert!(arr.is_empty());
        assert_eq!(arr.to_string(), "");
    }

    #[test]
    fn test_array_append_and_get() {
        let mut arr = abcde();
        arr.append("F").unwrap();
        assert_eq!(arr.get(5), Ok('F'));
        assert_eq!(arr.len(), 6);

        let mut empty = SequenceArray::new();
        empty.append("X").unwrap();
        assert_eq!(empty.get(0), Ok('X'));
        assert_eq!(empty.len(), 1);
    }

    #[test]
    fn test_array_insert() {
        let mut arr = abcde();
        arr.insert("Z", 2).unwrap();
        assert_eq!(arr.get(2), Ok('Z'));
        assert_eq!(arr.get(3), Ok('C'));
        assert_eq!(arr.len(), 6);

        arr.insert("Y", 0).unwrap();
        assert_eq!(arr.get(0), Ok('Y'));
        assert_eq!(arr.get(1), Ok('A'));

        let len = arr.len();
        arr.insert("W", len).unwrap();
        assert_eq!(arr.get(len), Ok('W'));

        assert_eq!(
            arr.insert("Q", 100),
            Err(SequenceError::index_out_of_range(100, 8))
        );
        assert_eq!(arr.to_string(), "YABZCDEW");
    }

    #[test]
    fn test_array_insert_validates_element_first() {
        let mut arr = abcde();
        assert_eq!(
            arr.insert("QQ", 100),
            Err(SequenceError::invalid_element("QQ"))
        );
        assert_eq!(arr, abcde());
    }

    #[test]
    fn test_array_delete() {
        let mut arr = abcde();
        assert_eq!(arr.delete(1), Ok('B'));
        assert_eq!(arr.get(1), Ok('C'));
        assert_eq!(arr.len(), 4);

        assert_eq!(arr.delete(0), Ok('A'));
        assert_eq!(arr.len(), 3);

        let last = arr.len() - 1;
        let expected = arr.get(last).unwrap();
        assert_eq!(arr.delete(last), Ok(expected));

        assert_eq!(
            arr.delete(10),
            Err(SequenceError::index_out_of_range(10, 2))
        );
        assert_eq!(arr.to_string(), "CD");
    }

    #[test]
    fn test_array_delete_all() {
        let mut arr = abcde();
        arr.append("A").unwrap();
        arr.append("A").unwrap();
        arr.delete_all("A").unwrap();
        assert_eq!(arr.find_first("A"), Ok(None));
        assert_eq!(arr.to_string(), "BCDE");

        arr.delete_all("Z").unwrap();
        assert_eq!(arr.len(), 4);
    }

    #[test]
    fn test_array_clone_independence() {
        let arr = abcde();
        let mut cloned = arr.clone();
        assert_eq!(cloned, arr);

        cloned.delete(0).unwrap();
        assert_ne!(cloned.len(), arr.len());
        assert_eq!(arr.to_string(), "ABCDE");

        let empty = SequenceArray::new();
        assert_eq!(empty.clone().len(), 0);
    }

    #[test]
    fn test_array_reverse() {
        let mut arr = abcde();
        arr.reverse();
        assert_eq!(arr.to_string(), "EDCBA");

        let mut empty = SequenceArray::new();
        empty.reverse();
        assert!(empty.is_empty());

        let mut single = SequenceArray::from("X");
        single.reverse();
        assert_eq!(single.get(0), Ok('X'));
    }

    #[test]
    fn test_array_find_operations() {
        let mut arr = abcde();
        assert_eq!(arr.find_first("C"), Ok(Some(2)));
        assert_eq!(arr.find_last("C"), Ok(Some(2)));

        arr.append("C").unwrap();
        assert_eq!(arr.find_first("C"), Ok(Some(2)));
        assert_eq!(arr.find_last("C"), Ok(Some(5)));

        assert_eq!(arr.find_first("Z"), Ok(None));
        assert_eq!(arr.find_last("Z"), Ok(None));

        let empty = SequenceArray::new();
        assert_eq!(empty.find_first("A"), Ok(None));
        assert_eq!(empty.find_last("A"), Ok(None));
    }

    #[test]
    fn test_array_clear_and_extend() {
        let mut arr = abcde();
        arr.clear();
        assert_eq!(arr.len(), 0);
        arr.clear();
        assert_eq!(arr.len(), 0);

        let mut first = SequenceArray::from("XY");
        let other = SequenceArray::from("Z");
        first.extend_from(&other);
        assert_eq!(first.to_string(), "XYZ");
        assert_eq!(other.to_string(), "Z");

        first.extend_from(&SequenceArray::new());
        assert_eq!(first.len(), 3);
    }

    #[test]
    fn test_array_empty_edge_cases() {
        let mut empty = SequenceArray::new();
        assert_eq!(empty.get(0), Err(SequenceError::index_out_of_range(0, 0)));
        assert_eq!(
            empty.delete(0),
            Err(SequenceError::index_out_of_range(0, 0))
        );
    }

    #[test]
    fn test_array_validation_errors() {
        let mut arr = abcde();
        assert!(arr.append("AB").is_err());
        assert!(arr.append("").is_err());
        assert!(arr.insert("", 0).is_err());
        assert!(arr.find_first("").is_err());
        assert!(arr.find_last("").is_err());
        assert!(arr.delete_all("AB").is_err());
        assert_eq!(arr, abcde());
    }

    #[test]
    fn test_array_traits() {
        let arr: SequenceArray = "ABC".chars().collect();
        assert_eq!(format!("{:?}", arr), "['A', 'B', 'C']");
        assert_eq!(format!("{}", arr), "ABC");
        assert_eq!((&arr).into_iter().collect::<String>(), "ABC");
        assert_eq!(arr.as_slice(), &['A', 'B', 'C']);

        let mut arr = SequenceArray::with_capacity(4);
        arr.extend("QR".chars());
        arr.push('S');
        assert_eq!(arr.to_string(), "QRS");
        assert_eq!(SequenceArray::default(), SequenceArray::new());
    }
}
