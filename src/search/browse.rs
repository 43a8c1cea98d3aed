use crate::domain::{CategoryKind, Product};

/// Direction of an aisle swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}

/// Products whose category display name equals `name`, ignoring case. An
/// unknown category name matches nothing.
pub fn products_in_category(name: &str, corpus: &[Product]) -> Vec<Product> {
    let Some(kind) = CategoryKind::from_name(name) else {
        return Vec::new();
    };
    corpus
        .iter()
        .filter(|product| product.category == kind)
        .cloned()
        .collect()
}

/// Circular step through `category_count` aisles. A count of zero yields 0.
pub fn cycle(direction: Direction, current_index: usize, category_count: usize) -> usize {
    if category_count == 0 {
        return 0;
    }
    let current = current_index.min(category_count - 1);
    match direction {
        Direction::Next if current == category_count - 1 => 0,
        Direction::Next => current + 1,
        Direction::Prev if current == 0 => category_count - 1,
        Direction::Prev => current - 1,
    }
}
