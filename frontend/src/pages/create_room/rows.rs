//! Row Stack
//!
//! Ordered rows of one list. Mirrors the view-model's item sequence.

use super::layout::row_corners;
use crate::components::ListCell;
use crate::events::RowEvent;
use crate::models::ListItemData;
use egui::{Id, Rect, pos2, vec2};

/// One vertical stack of rows (input or switch)
#[derive(Debug, Default)]
pub struct RowStack {
    rows: Vec<ListCell>,
}

impl RowStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a row built from `item`
    pub fn push(&mut self, item: ListItemData, height: f32) {
        self.rows.push(ListCell::new(item, height));
    }

    /// Swaps the row at `index` for a fresh one built from `item`.
    /// Returns false, leaving the stack untouched, when `index` is out of range.
    pub fn replace(&mut self, index: usize, item: ListItemData, height: f32) -> bool {
        match self.rows.get_mut(index) {
            Some(row) => {
                *row = ListCell::new(item, height);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[cfg(test)]
    pub fn get(&self, index: usize) -> Option<&ListCell> {
        self.rows.get(index)
    }

    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = &ListCell> {
        self.rows.iter()
    }

    /// Labels top to bottom
    #[cfg(test)]
    pub fn labels(&self) -> Vec<&str> {
        self.rows.iter().map(ListCell::label).collect()
    }

    /// Sum of row heights: the stack's content height
    pub fn total_height(&self) -> f32 {
        self.rows.iter().map(ListCell::height).sum()
    }

    /// Draws every row inside `bounds`, top to bottom at full width.
    /// Returns the interactions as `(row index, event)` pairs.
    pub fn show(&mut self, ui: &mut egui::Ui, bounds: Rect, id: Id) -> Vec<(usize, RowEvent)> {
        let count = self.rows.len();
        let mut events = Vec::new();
        let mut top = bounds.top();

        for (index, row) in self.rows.iter_mut().enumerate() {
            let rect = Rect::from_min_size(pos2(bounds.left(), top), vec2(bounds.width(), row.height()));
            top = rect.bottom();

            if let Some(event) = row.show(ui, rect, row_corners(index, count), id.with(index)) {
                events.push((index, event));
            }
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack_of(labels: &[&str]) -> RowStack {
        let mut stack = RowStack::new();
        for label in labels {
            stack.push(ListItemData::text(*label, ""), 52.0);
        }
        stack
    }

    #[test]
    fn test_push_keeps_order() {
        let stack = stack_of(&["a", "b", "c"]);
        assert_eq!(stack.labels(), vec!["a", "b", "c"]);
        assert_eq!(stack.total_height(), 156.0);
    }

    #[test]
    fn test_replace_each_index_touches_only_that_row() {
        for index in 0..3 {
            let mut stack = stack_of(&["a", "b", "c"]);
            assert!(stack.replace(index, ListItemData::text("X", ""), 40.0));

            for (i, row) in stack.iter().enumerate() {
                if i == index {
                    assert_eq!(row.label(), "X");
                    assert_eq!(row.height(), 40.0);
                } else {
                    assert_eq!(row.label(), ["a", "b", "c"][i]);
                    assert_eq!(row.height(), 52.0);
                }
            }
        }
    }

    #[test]
    fn test_replace_out_of_range_is_rejected() {
        let mut stack = stack_of(&["a", "b", "c"]);
        for index in [3, 5, usize::MAX] {
            assert!(!stack.replace(index, ListItemData::text("X", ""), 40.0));
        }
        assert_eq!(stack.labels(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_empty_stack() {
        let mut stack = RowStack::new();
        assert!(stack.is_empty());
        assert!(!stack.replace(0, ListItemData::switch("x", true), 40.0));
        assert_eq!(stack.total_height(), 0.0);
    }
}
