//! Item Query Module
//!
//! Pure filter-then-paginate engine over an in-memory collection, plus
//! lookup by id and append of new items.

use serde::Serialize;

use crate::error::{CatalogError, Result};
use crate::models::{Item, NewItem};

/// Message carried by [`CatalogError::NotFound`] for a missing item
pub const ITEM_NOT_FOUND_MESSAGE: &str = "Item not found";

// == Item Query ==
/// Typed list parameters.
///
/// `None` means "use the default": page 1, and a limit equal to the size
/// of the unfiltered collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemQuery {
    /// Case-insensitive substring matched against item names
    pub q: Option<String>,
    /// 1-based page number
    pub page: Option<i64>,
    /// Page size
    pub limit: Option<i64>,
}

// == Query Result ==
/// One page of the filtered collection plus paging metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryResult {
    pub page: i64,
    pub limit: i64,
    /// Number of items matching the filter, before pagination
    pub total: usize,
    pub items: Vec<Item>,
}

// == Query ==
/// Filters `collection` by `params.q` and returns the requested page.
///
/// The default limit is the length of the unfiltered collection. Page and
/// limit are not validated: zero or negative values flow into the window
/// arithmetic, where negative bounds count back from the end of the
/// filtered list. The result may be empty or partial, never an error.
pub fn query(collection: &[Item], params: &ItemQuery) -> QueryResult {
    let limit = params.limit.unwrap_or(collection.len() as i64);
    let page = params.page.unwrap_or(1);

    let filtered: Vec<&Item> = match params.q.as_deref().filter(|q| !q.is_empty()) {
        Some(q) => {
            let needle = q.to_lowercase();
            collection
                .iter()
                .filter(|item| item.name_contains(&needle))
                .collect()
        }
        None => collection.iter().collect(),
    };

    let total = filtered.len();
    let (start, end) = page_window(page, limit, total);
    let items = filtered[start..end].iter().map(|&item| item.clone()).collect();

    QueryResult {
        page,
        limit,
        total,
        items,
    }
}

/// Computes `[(page - 1) * limit, start + limit)` with array-slice bounds:
/// a negative index counts back from the end, then both are clamped into
/// `0..=len`. An inverted window is empty.
fn page_window(page: i64, limit: i64, len: usize) -> (usize, usize) {
    let start = page.saturating_sub(1).saturating_mul(limit);
    let end = start.saturating_add(limit);

    let start = slice_bound(start, len);
    (start, slice_bound(end, len).max(start))
}

fn slice_bound(index: i64, len: usize) -> usize {
    let len = len as i64;
    let resolved = if index < 0 {
        len.saturating_add(index).max(0)
    } else {
        index.min(len)
    };
    resolved as usize
}

// == Lookup ==
/// Parses an id as received in a request path.
///
/// Leading whitespace and an optional sign are accepted, then the longest
/// run of digits is used and anything after it ignored (`"12abc"` is 12).
/// No digits, or a value outside `i64`, can never match an item.
pub fn parse_id(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let unsigned = trimmed.trim_start_matches(['+', '-']);
    let sign_len = trimmed.len() - unsigned.len();
    if sign_len > 1 {
        return None;
    }

    let digits = unsigned.len()
        - unsigned
            .trim_start_matches(|c: char| c.is_ascii_digit())
            .len();
    if digits == 0 {
        return None;
    }

    trimmed[..sign_len + digits].parse().ok()
}

/// Returns the first item whose id equals `id`.
pub fn find_by_id(collection: &[Item], id: i64) -> Result<Item> {
    collection
        .iter()
        .find(|item| item.id == id)
        .cloned()
        .ok_or_else(|| CatalogError::NotFound(ITEM_NOT_FOUND_MESSAGE.to_string()))
}

// == Create ==
/// Assigns an id from the wall clock and appends the item to `collection`.
///
/// Two creations within the same millisecond receive the same id.
pub fn create(collection: &mut Vec<Item>, new_item: NewItem) -> Item {
    append(collection, new_item, next_item_id())
}

/// Appends `new_item` under the given id and returns the stored record.
pub fn append(collection: &mut Vec<Item>, new_item: NewItem, id: i64) -> Item {
    let item = new_item.with_id(id);
    collection.push(item.clone());
    item
}

/// Current Unix time in milliseconds.
pub fn next_item_id() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64, name: &str, quantity: f64, price: f64) -> Item {
        Item {
            id,
            name: name.to_string(),
            quantity,
            price,
        }
    }

    fn sample() -> Vec<Item> {
        vec![item(1, "Item A", 10.0, 5.0), item(2, "Item B", 20.0, 10.0)]
    }

    fn params(q: Option<&str>, page: Option<i64>, limit: Option<i64>) -> ItemQuery {
        ItemQuery {
            q: q.map(String::from),
            page,
            limit,
        }
    }

    #[test]
    fn test_query_defaults_echo_collection() {
        let collection = sample();
        let result = query(&collection, &ItemQuery::default());

        assert_eq!(result.page, 1);
        assert_eq!(result.limit, 2);
        assert_eq!(result.total, 2);
        assert_eq!(result.items, collection);
    }

    #[test]
    fn test_query_filter_by_name() {
        let collection = sample();
        let result = query(&collection, &params(Some("Item A"), None, None));

        assert_eq!(result.total, 1);
        assert_eq!(result.items, vec![collection[0].clone()]);
    }

    #[test]
    fn test_query_filter_case_insensitive() {
        let collection = sample();
        let result = query(&collection, &params(Some("iTeM b"), None, None));
        assert_eq!(result.items, vec![collection[1].clone()]);
    }

    #[test]
    fn test_query_empty_q_is_ignored() {
        let collection = sample();
        let result = query(&collection, &params(Some(""), None, None));
        assert_eq!(result.total, 2);
    }

    #[test]
    fn test_query_limit() {
        let collection = sample();
        let result = query(&collection, &params(None, None, Some(1)));

        assert_eq!(result.limit, 1);
        assert_eq!(result.total, 2);
        assert_eq!(result.items, vec![collection[0].clone()]);
    }

    #[test]
    fn test_query_second_page() {
        let collection = sample();
        let result = query(&collection, &params(None, Some(2), Some(1)));

        assert_eq!(result.page, 2);
        assert_eq!(result.items, vec![collection[1].clone()]);
    }

    #[test]
    fn test_query_default_limit_uses_unfiltered_size() {
        let collection = vec![
            item(1, "apple", 1.0, 1.0),
            item(2, "banana", 1.0, 1.0),
            item(3, "apricot", 1.0, 1.0),
        ];
        let result = query(&collection, &params(Some("ap"), None, None));

        assert_eq!(result.limit, 3);
        assert_eq!(result.total, 2);
        assert_eq!(result.items.len(), 2);
    }

    #[test]
    fn test_query_page_past_end_is_empty() {
        let collection = sample();
        let result = query(&collection, &params(None, Some(5), Some(1)));

        assert!(result.items.is_empty());
        assert_eq!(result.total, 2);
    }

    #[test]
    fn test_query_zero_and_negative_values_degrade() {
        let collection = sample();

        assert!(query(&collection, &params(None, Some(0), Some(1))).items.is_empty());
        assert!(query(&collection, &params(None, Some(1), Some(0))).items.is_empty());
        assert!(query(&collection, &params(None, Some(2), Some(-1))).items.is_empty());
        assert!(query(&collection, &params(None, Some(-5), Some(1))).items.is_empty());
    }

    #[test]
    fn test_query_negative_bounds_count_from_end() {
        let collection = sample();
        // [0, -1) is everything but the last item
        let result = query(&collection, &params(None, Some(1), Some(-1)));
        assert_eq!(result.items, vec![collection[0].clone()]);

        let three = vec![
            item(1, "a", 1.0, 1.0),
            item(2, "b", 1.0, 1.0),
            item(3, "c", 1.0, 1.0),
        ];
        // [-2, -1) is the middle item
        let result = query(&three, &params(None, Some(-1), Some(1)));
        assert_eq!(result.items, vec![three[1].clone()]);

        // [-4, -2) starts before the list and stops two from the end
        let result = query(&three, &params(None, Some(-1), Some(2)));
        assert_eq!(result.items, vec![three[0].clone()]);
    }

    #[test]
    fn test_query_partial_last_page() {
        let collection = vec![
            item(1, "a", 1.0, 1.0),
            item(2, "b", 1.0, 1.0),
            item(3, "c", 1.0, 1.0),
        ];
        let result = query(&collection, &params(None, Some(2), Some(2)));
        assert_eq!(result.items, vec![collection[2].clone()]);
    }

    #[test]
    fn test_query_extreme_values_do_not_overflow() {
        let collection = sample();
        let result = query(&collection, &params(None, Some(i64::MAX), Some(i64::MAX)));
        assert!(result.items.is_empty());

        // [i64::MIN, -1) resolves to everything but the last item
        let result = query(&collection, &params(None, Some(i64::MIN), Some(i64::MAX)));
        assert_eq!(result.items, vec![collection[0].clone()]);
    }

    #[test]
    fn test_query_empty_collection() {
        let result = query(&[], &ItemQuery::default());
        assert_eq!(result.limit, 0);
        assert_eq!(result.total, 0);
        assert!(result.items.is_empty());
    }

    #[test]
    fn test_find_by_id() {
        let collection = sample();
        assert_eq!(find_by_id(&collection, 2).unwrap().name, "Item B");
    }

    #[test]
    fn test_find_by_id_missing() {
        let collection = sample();
        let result = find_by_id(&collection, 999);
        assert_eq!(
            result,
            Err(CatalogError::NotFound(ITEM_NOT_FOUND_MESSAGE.to_string()))
        );
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("42"), Some(42));
        assert_eq!(parse_id("-7"), Some(-7));
        assert_eq!(parse_id("abc"), None);
        assert_eq!(parse_id(""), None);
        assert_eq!(parse_id("1abc"), Some(1));
        assert_eq!(parse_id(" 12.9"), Some(12));
        assert_eq!(parse_id("+3"), Some(3));
        assert_eq!(parse_id("--3"), None);
        assert_eq!(parse_id("-"), None);
        assert_eq!(parse_id("99999999999999999999"), None);
    }

    #[test]
    fn test_append_keeps_insertion_order() {
        let mut collection = sample();
        let new_item = NewItem {
            name: "Item C".to_string(),
            quantity: 5.0,
            price: 7.0,
        };

        let created = append(&mut collection, new_item, 3);

        assert_eq!(created.id, 3);
        assert_eq!(collection.len(), 3);
        assert_eq!(collection.last(), Some(&created));
    }

    #[test]
    fn test_create_assigns_wall_clock_id() {
        let mut collection = Vec::new();
        let before = chrono::Utc::now().timestamp_millis();
        let created = create(
            &mut collection,
            NewItem {
                name: "Item C".to_string(),
                quantity: 1.0,
                price: 2.0,
            },
        );
        let after = chrono::Utc::now().timestamp_millis();

        assert!(created.id >= before && created.id <= after);
        assert_eq!(collection, vec![created]);
    }
}
