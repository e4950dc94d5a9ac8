//! Generic sorting and filtering for list pages.

use std::cmp::Ordering;

/// Data types whose rows can be sorted by a named column.
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Data types whose rows can be matched against a search string.
pub trait Searchable {
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Sort rows in place by the given field.
pub fn sort_list<T: Sortable>(items: &mut Vec<T>, field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Keep only rows matching the search string. Filters shorter than two
/// characters are ignored to avoid flicker while typing.
pub fn filter_list<T: Searchable + Clone>(items: Vec<T>, filter: &str) -> Vec<T> {
    let filter = filter.trim();
    if filter.len() < 2 {
        return items;
    }
    items
        .into_iter()
        .filter(|item| item.matches_filter(filter))
        .collect()
}

/// Header indicator for the currently sorted column.
pub fn sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field != field {
        ""
    } else if ascending {
        " ▲"
    } else {
        " ▼"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row {
        name: String,
        total: f64,
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "name" => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
                "total" => self
                    .total
                    .partial_cmp(&other.total)
                    .unwrap_or(Ordering::Equal),
                _ => Ordering::Equal,
            }
        }
    }

    impl Searchable for Row {
        fn matches_filter(&self, filter: &str) -> bool {
            self.name.to_lowercase().contains(&filter.to_lowercase())
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "Carrots".into(), total: 12.0 },
            Row { name: "beef".into(), total: 90.0 },
            Row { name: "Butter".into(), total: 41.0 },
        ]
    }

    #[test]
    fn test_sort_list() {
        let mut items = rows();
        sort_list(&mut items, "name", true);
        assert_eq!(items[0].name, "beef");
        sort_list(&mut items, "total", false);
        assert_eq!(items[0].total, 90.0);
    }

    #[test]
    fn test_filter_list() {
        let filtered = filter_list(rows(), "bu");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Butter");
        // short filters are passthrough
        assert_eq!(filter_list(rows(), "b").len(), 3);
    }

    #[test]
    fn test_sort_indicator() {
        assert_eq!(sort_indicator("name", "name", true), " ▲");
        assert_eq!(sort_indicator("name", "total", true), "");
    }
}
