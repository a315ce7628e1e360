// src/services/traversal.rs

//! Breadth-first search for microformat roots by type.

use std::collections::VecDeque;

use crate::models::{Document, Item};

/// Queue-based breadth-first walk over a document's items.
///
/// Always follows structural `children`. When `include_properties` is set
/// it also descends into property values that are themselves items, so
/// `p-author h-card` values are visited too.
pub struct Entries<'a, 't> {
    queue: VecDeque<&'a Item>,
    types: &'t [&'t str],
    include_properties: bool,
}

impl<'a, 't> Entries<'a, 't> {
    pub fn new(document: &'a Document, types: &'t [&'t str], include_properties: bool) -> Self {
        Self {
            queue: document.items.iter().collect(),
            types,
            include_properties,
        }
    }
}

impl<'a> Iterator for Entries<'a, '_> {
    type Item = &'a Item;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(item) = self.queue.pop_front() {
            self.queue.extend(item.children.iter());
            if self.include_properties {
                self.queue.extend(item.property_items());
            }
            if item.has_any_type(self.types) {
                return Some(item);
            }
        }
        None
    }
}

/// First item in breadth-first order whose types intersect `types`.
///
/// Properties are not searched.
pub fn find_first_entry<'a>(document: &'a Document, types: &[&str]) -> Option<&'a Item> {
    Entries::new(document, types, false).next()
}

/// All items whose types intersect `types`, in breadth-first order.
pub fn find_all_entries<'a>(
    document: &'a Document,
    types: &[&str],
    include_properties: bool,
) -> Vec<&'a Item> {
    Entries::new(document, types, include_properties).collect()
}
