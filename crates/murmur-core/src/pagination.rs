//! Fixed-size page slicing for ordered collections.

/// Default number of posts per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// One page of an ordered collection plus navigation metadata.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based number of the page actually served (after clamping).
    pub number: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    pub fn has_next(&self) -> bool {
        self.number < self.total_pages
    }
}

/// Slice `items` into the requested 1-based page of `per_page` elements.
///
/// An absent or zero page number serves page 1; a page number past the
/// end is clamped to the last page rather than erroring. An empty
/// collection yields a single empty page.
pub fn paginate<T>(items: Vec<T>, page: Option<usize>, per_page: usize) -> Page<T> {
    let per_page = per_page.max(1);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(per_page).max(1);
    let number = page.unwrap_or(1).clamp(1, total_pages);

    let items: Vec<T> = items
        .into_iter()
        .skip((number - 1) * per_page)
        .take(per_page)
        .collect();

    Page {
        items,
        number,
        total_items,
        total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thirteen_items_split_ten_three() {
        let items: Vec<u32> = (0..13).collect();

        let first = paginate(items.clone(), None, 10);
        assert_eq!(first.items.len(), 10);
        assert_eq!(first.number, 1);
        assert_eq!(first.total_pages, 2);
        assert!(!first.has_previous());
        assert!(first.has_next());

        let second = paginate(items, Some(2), 10);
        assert_eq!(second.items, vec![10, 11, 12]);
        assert!(second.has_previous());
        assert!(!second.has_next());
    }

    #[test]
    fn page_past_the_end_clamps_to_last() {
        let items: Vec<u32> = (0..13).collect();

        let page = paginate(items, Some(3), 10);
        assert_eq!(page.number, 2);
        assert_eq!(page.items, vec![10, 11, 12]);
    }

    #[test]
    fn zero_page_serves_first() {
        let page = paginate(vec![1, 2, 3], Some(0), 10);
        assert_eq!(page.number, 1);
        assert_eq!(page.items, vec![1, 2, 3]);
    }

    #[test]
    fn empty_collection_is_one_empty_page() {
        let page = paginate(Vec::<u32>::new(), None, 10);
        assert!(page.items.is_empty());
        assert_eq!(page.number, 1);
        assert_eq!(page.total_pages, 1);
        assert!(!page.has_previous());
        assert!(!page.has_next());
    }

    #[test]
    fn exact_multiple_has_no_partial_page() {
        let items: Vec<u32> = (0..20).collect();
        let page = paginate(items, Some(2), 10);
        assert_eq!(page.items.len(), 10);
        assert_eq!(page.total_pages, 2);
        assert!(!page.has_next());
    }
}
