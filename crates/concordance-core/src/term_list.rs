//! Singly linked list holding query terms in caller order

use crate::error::TermListError;
use std::fmt;

struct Node<T> {
    value: T,
    next: Option<Box<Node<T>>>,
}

/// Ordered container that the query engine walks front to back.
pub struct TermList<T> {
    head: Option<Box<Node<T>>>,
    len: usize,
}

impl<T> TermList<T> {
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Build a list whose iteration order matches `values`.
    ///
    /// Values are head-inserted in reverse so the first input ends up first.
    pub fn from_values(values: Vec<T>) -> Self {
        let mut list = Self::new();
        for value in values.into_iter().rev() {
            list.push_front(value);
        }
        list
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn head(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.value)
    }

    pub fn push_front(&mut self, value: T) -> &mut Self {
        let next = self.head.take();
        self.head = Some(Box::new(Node { value, next }));
        self.len += 1;
        self
    }

    /// Insert `value` after the first node accepted by `matches`.
    ///
    /// Without a predicate the last node matches, so the value is appended.
    /// An empty list always accepts the value as its head. A non-empty list
    /// with no matching node is left untouched and reports `NoMatch`.
    pub fn insert(
        &mut self,
        value: T,
        matches: Option<&dyn Fn(&T) -> bool>,
    ) -> Result<&mut Self, TermListError> {
        if self.head.is_none() {
            return Ok(self.push_front(value));
        }

        let mut cursor = self.head.as_deref_mut();
        while let Some(node) = cursor {
            let matched = match matches {
                Some(predicate) => predicate(&node.value),
                None => node.next.is_none(),
            };
            if matched {
                let next = node.next.take();
                node.next = Some(Box::new(Node { value, next }));
                self.len += 1;
                return Ok(self);
            }
            cursor = node.next.as_deref_mut();
        }

        Err(TermListError::NoMatch)
    }

    /// Append at the tail.
    pub fn push_back(&mut self, value: T) -> &mut Self {
        let mut link = &mut self.head;
        while let Some(node) = link {
            link = &mut node.next;
        }
        *link = Some(Box::new(Node { value, next: None }));
        self.len += 1;
        self
    }

    pub fn find<F>(&self, predicate: F) -> Option<&T>
    where
        F: Fn(&T) -> bool,
    {
        self.iter().find(|value| predicate(value))
    }

    /// First match together with the value of the node before it.
    pub fn find_with_previous<F>(&self, predicate: F) -> Option<(Option<&T>, &T)>
    where
        F: Fn(&T) -> bool,
    {
        let mut previous = None;
        for value in self.iter() {
            if predicate(value) {
                return Some((previous, value));
            }
            previous = Some(value);
        }
        None
    }

    /// Unlink the first match and hand back its value.
    pub fn remove<F>(&mut self, predicate: F) -> Option<T>
    where
        F: Fn(&T) -> bool,
    {
        let mut link = &mut self.head;
        while link.as_ref().is_some_and(|node| !predicate(&node.value)) {
            link = &mut link.as_mut()?.next;
        }

        let mut removed = link.take()?;
        *link = removed.next.take();
        self.len -= 1;
        Some(removed.value)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    pub fn join(&self, separator: &str) -> String
    where
        T: fmt::Display,
    {
        self.iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(separator)
    }
}

impl<T> Default for TermList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for TermList<T> {
    fn drop(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl<T> FromIterator<T> for TermList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_values(iter.into_iter().collect())
    }
}

impl<T> From<Vec<T>> for TermList<T> {
    fn from(values: Vec<T>) -> Self {
        Self::from_values(values)
    }
}

impl<T: fmt::Display> fmt::Display for TermList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join(","))
    }
}

impl<T: fmt::Debug> fmt::Debug for TermList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.value
        })
    }
}

impl<'a, T> IntoIterator for &'a TermList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
