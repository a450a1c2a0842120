//! Ordered lists with DOM edit semantics (`SVGTransformList`, `SVGPointList`).
//!
//! [`SvgList`] implements the shared contract once; element types plug their
//! attribute grammar in through [`ListItem`].

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::{Result, SvgError};

/// An element type that can be read from attribute text.
pub trait ListItem: Sized {
    /// Name used in log events.
    const LIST_NAME: &'static str;

    /// Parse a whole attribute value into items, failing on the first malformed token.
    fn parse_list(text: &str) -> Result<Vec<Self>>;
}

/// An indexed, insertion-ordered list.
///
/// Indexing is zero-based. Every failing call leaves the list untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgList<T> {
    items: Vec<T>,
}

impl<T> SvgList<T> {
    /// Create an empty list.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn from_items(items: Vec<T>) -> Self {
        Self { items }
    }

    /// `numberOfItems`.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Clear the list and make `item` its only element.
    pub fn initialize(&mut self, item: T) -> &T {
        self.items.clear();
        self.items.push(item);
        &self.items[0]
    }

    pub fn get_item(&self, index: usize) -> Result<&T> {
        let len = self.items.len();
        self.items
            .get(index)
            .ok_or(SvgError::IndexOutOfRange { index, len })
    }

    /// Mutable access for in-place edits such as `set_rotate` during animation.
    pub fn get_item_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.items.len();
        self.items
            .get_mut(index)
            .ok_or(SvgError::IndexOutOfRange { index, len })
    }

    /// Insert before `index`. Index 0 inserts at the front and any index at or
    /// past the end appends, so this never fails.
    pub fn insert_item_before(&mut self, item: T, index: usize) -> &T {
        let at = index.min(self.items.len());
        self.items.insert(at, item);
        &self.items[at]
    }

    pub fn replace_item(&mut self, item: T, index: usize) -> Result<&T> {
        self.check_index(index)?;
        self.items[index] = item;
        Ok(&self.items[index])
    }

    /// Remove and return the item at `index`; later items shift down by one.
    pub fn remove_item(&mut self, index: usize) -> Result<T> {
        self.check_index(index)?;
        Ok(self.items.remove(index))
    }

    pub fn append_item(&mut self, item: T) -> &T {
        self.items.push(item);
        &self.items[self.items.len() - 1]
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.items.len() {
            Ok(())
        } else {
            Err(SvgError::IndexOutOfRange {
                index,
                len: self.items.len(),
            })
        }
    }
}

impl<T: ListItem> SvgList<T> {
    /// Replace the contents with the items parsed from `text`.
    ///
    /// Parsing happens into a scratch buffer; on a format error the current
    /// contents are kept.
    pub fn replace_from_str(&mut self, text: &str) -> Result<()> {
        let parsed = T::parse_list(text).map_err(|err| {
            debug!(
                list = T::LIST_NAME,
                category = err.category(),
                error = %err,
                "rejected list attribute"
            );
            err
        })?;
        self.items.clear();
        self.items.extend(parsed);
        Ok(())
    }
}

impl<T> Default for SvgList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ListItem> FromStr for SvgList<T> {
    type Err = SvgError;

    fn from_str(s: &str) -> Result<Self> {
        let mut list = Self::new();
        list.replace_from_str(s)?;
        Ok(list)
    }
}

impl<T> FromIterator<T> for SvgList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_items(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for SvgList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a SvgList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Serializes in attribute syntax, items separated by a single space.
impl<T: fmt::Display> fmt::Display for SvgList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", item)?;
        }
        Ok(())
    }
}
