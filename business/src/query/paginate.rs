//! Fixed-size pagination over the ordered view.

/// Rows per page.
pub const PAGE_SIZE: usize = 20;

/// `max(1, ceil(count / page_size))`.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1)).max(1)
}

/// Clamps a 1-based page number into `[1, total_pages]`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// One page of a slice, plus the bookkeeping the pagination controls need.
#[derive(Debug, PartialEq, Eq)]
pub struct PageSlice<'a, T> {
    /// 1-based, already clamped.
    pub number: usize,
    pub total_pages: usize,
    /// Index of the first item of this page within the whole slice.
    pub offset: usize,
    pub items: &'a [T],
}

impl<T> PageSlice<'_, T> {
    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    pub fn has_next(&self) -> bool {
        self.number < self.total_pages
    }

    /// Status label, e.g. `Page 1 of 2`.
    pub fn label(&self) -> String {
        format!("Page {} of {}", self.number, self.total_pages)
    }
}

/// Slices `[(page - 1) * PAGE_SIZE, page * PAGE_SIZE)` after clamping `page`.
pub fn paginate<T>(items: &[T], page: usize) -> PageSlice<'_, T> {
    paginate_by(items, page, PAGE_SIZE)
}

pub fn paginate_by<T>(items: &[T], page: usize, page_size: usize) -> PageSlice<'_, T> {
    let page_size = page_size.max(1);
    let total_pages = total_pages(items.len(), page_size);
    let number = clamp_page(page, total_pages);
    let offset = (number - 1) * page_size;
    let end = (offset + page_size).min(items.len());

    PageSlice {
        number,
        total_pages,
        offset,
        items: items.get(offset..end).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_is_at_least_one() {
        assert_eq!(total_pages(0, PAGE_SIZE), 1);
        assert_eq!(total_pages(1, PAGE_SIZE), 1);
        assert_eq!(total_pages(20, PAGE_SIZE), 1);
        assert_eq!(total_pages(21, PAGE_SIZE), 2);
        assert_eq!(total_pages(40, PAGE_SIZE), 2);
        assert_eq!(total_pages(41, PAGE_SIZE), 3);
    }

    #[test]
    fn test_twenty_five_items_split_twenty_and_five() {
        let items: Vec<usize> = (1..=25).collect();

        let first = paginate(&items, 1);
        assert_eq!(first.items, (1..=20).collect::<Vec<_>>().as_slice());
        assert_eq!(first.label(), "Page 1 of 2");
        assert!(!first.has_previous());
        assert!(first.has_next());

        let second = paginate(&items, 2);
        assert_eq!(second.items, &[21, 22, 23, 24, 25]);
        assert_eq!(second.offset, 20);
        assert_eq!(second.label(), "Page 2 of 2");
        assert!(second.has_previous());
        assert!(!second.has_next());
    }

    #[test]
    fn test_out_of_range_pages_are_clamped() {
        let items: Vec<usize> = (1..=25).collect();
        assert_eq!(paginate(&items, 0).number, 1);
        assert_eq!(paginate(&items, 99).number, 2);
        assert_eq!(paginate(&items, 99).items.len(), 5);
    }

    #[test]
    fn test_empty_input_is_single_disabled_page() {
        let items: Vec<usize> = Vec::new();
        let page = paginate(&items, 3);
        assert_eq!(page.number, 1);
        assert_eq!(page.total_pages, 1);
        assert!(page.items.is_empty());
        assert!(!page.has_previous());
        assert!(!page.has_next());
        assert_eq!(page.label(), "Page 1 of 1");
    }
}
