//! Client-side paging over the result list. Nothing here is stored; every
//! value is recomputed from `(len, current_page)` on each render.

use serde::Serialize;

pub const PAGE_SIZE: usize = 5;

/// `ceil(len / PAGE_SIZE)`. Zero results means zero pages.
pub fn total_pages(len: usize) -> usize {
    len.div_ceil(PAGE_SIZE)
}

/// Highest page the cursor may sit on. Page 1 is the floor even when empty.
pub fn last_page(len: usize) -> usize {
    total_pages(len).max(1)
}

pub fn clamp_page(page: usize, len: usize) -> usize {
    page.clamp(1, last_page(len))
}

pub fn previous_page(current: usize) -> usize {
    current.saturating_sub(1).max(1)
}

pub fn next_page(current: usize, len: usize) -> usize {
    (current + 1).min(last_page(len))
}

/// Half-open index range `[first, last)` of `page`, clamped to `len`.
pub fn page_bounds(page: usize, len: usize) -> (usize, usize) {
    let last = page.saturating_mul(PAGE_SIZE);
    let first = last.saturating_sub(PAGE_SIZE);
    (first.min(len), last.min(len))
}

pub fn page_items<T>(items: &[T], page: usize) -> &[T] {
    let (first, last) = page_bounds(page, items.len());
    &items[first..last]
}

/// Everything the search view needs to draw one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    /// 1-based index of the first item shown, 0 when nothing is shown.
    pub first_shown: usize,
    pub last_shown: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

impl PageInfo {
    pub fn new(current_page: usize, total_items: usize) -> Self {
        let total = total_pages(total_items);
        let (first, last) = page_bounds(current_page, total_items);
        PageInfo {
            current_page,
            total_pages: total,
            total_items,
            first_shown: if last > first { first + 1 } else { 0 },
            last_shown: last,
            has_previous: current_page > 1,
            has_next: current_page < total,
        }
    }

    /// "Showing 6-10 of 12 results"
    pub fn range_label(&self) -> String {
        format!(
            "Showing {}-{} of {} results",
            self.first_shown, self.last_shown, self.total_items
        )
    }

    /// "Page 2 of 3"
    pub fn page_label(&self) -> String {
        format!("Page {} of {}", self.current_page, self.total_pages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_is_ceiling() {
        assert_eq!(total_pages(0), 0);
        assert_eq!(total_pages(1), 1);
        assert_eq!(total_pages(5), 1);
        assert_eq!(total_pages(6), 2);
        assert_eq!(total_pages(12), 3);
        assert_eq!(last_page(0), 1);
    }

    #[test]
    fn every_page_is_full_except_the_last() {
        for n in 1..=23usize {
            let items: Vec<usize> = (0..n).collect();
            let total = total_pages(n);
            for p in 1..=total {
                let len = page_items(&items, p).len();
                if p < total {
                    assert_eq!(len, PAGE_SIZE, "n={} p={}", n, p);
                } else {
                    assert_eq!(len, n - PAGE_SIZE * (total - 1), "n={} p={}", n, p);
                }
            }
        }
    }

    #[test]
    fn page_slices_follow_response_order() {
        let items: Vec<usize> = (1..=12).collect();
        assert_eq!(page_items(&items, 1), &[1, 2, 3, 4, 5]);
        assert_eq!(page_items(&items, 2), &[6, 7, 8, 9, 10]);
        assert_eq!(page_items(&items, 3), &[11, 12]);
        assert!(page_items(&items, 4).is_empty());
    }

    #[test]
    fn navigation_clamps_at_both_ends() {
        assert_eq!(previous_page(1), 1);
        assert_eq!(previous_page(3), 2);
        assert_eq!(next_page(3, 12), 3);
        assert_eq!(next_page(1, 12), 2);
        assert_eq!(next_page(1, 0), 1);
        assert_eq!(clamp_page(0, 12), 1);
        assert_eq!(clamp_page(9, 12), 3);
    }

    #[test]
    fn labels() {
        let info = PageInfo::new(2, 12);
        assert_eq!(info.range_label(), "Showing 6-10 of 12 results");
        assert_eq!(info.page_label(), "Page 2 of 3");
        assert!(info.has_previous && info.has_next);

        let last = PageInfo::new(3, 12);
        assert_eq!(last.range_label(), "Showing 11-12 of 12 results");
        assert!(!last.has_next);

        let empty = PageInfo::new(1, 0);
        assert_eq!(empty.first_shown, 0);
        assert!(!empty.has_previous && !empty.has_next);
    }
}
