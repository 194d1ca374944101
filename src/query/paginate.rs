
pub const DEFAULT_PAGE_SIZE: usize = 70;

/// One page of a filtered result. `start_index`/`end_index` are 1-based
/// inclusive display bounds; an empty page reports `1..=0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub total_pages: usize,
    pub total: usize,
    pub start_index: usize,
    pub end_index: usize,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1)).max(1)
}

/// Slices `filtered` to `page`. Pages outside `1..=total_pages` give an
/// empty slice; callers clamp before asking.
pub fn paginate<T: Clone>(filtered: &[T], page: usize, page_size: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let total = filtered.len();
    let total_pages = total_pages(total, page_size);

    let start = page.saturating_sub(1).saturating_mul(page_size);
    let in_range = page >= 1 && page <= total_pages && start < total;

    let (items, start_index, end_index) = if in_range {
        let end = (start + page_size).min(total);
        (filtered[start..end].to_vec(), start + 1, end)
    } else {
        (Vec::new(), 1, 0)
    };

    Page {
        items,
        page,
        total_pages,
        total,
        start_index,
        end_index,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(n: usize) -> Vec<usize> {
        (1..=n).collect()
    }

    #[test]
    fn totals_follow_ceiling() {
        assert_eq!(total_pages(0, 70), 1);
        assert_eq!(total_pages(1, 70), 1);
        assert_eq!(total_pages(70, 70), 1);
        assert_eq!(total_pages(71, 70), 2);
        assert_eq!(total_pages(140, 70), 2);
    }

    #[test]
    fn full_pages_and_bounds() {
        let data = numbers(140);
        let second = paginate(&data, 2, DEFAULT_PAGE_SIZE);
        assert_eq!(second.total_pages, 2);
        assert_eq!(second.items.len(), 70);
        assert_eq!(second.items[0], 71);
        assert_eq!((second.start_index, second.end_index), (71, 140));
        assert!(second.has_prev());
        assert!(!second.has_next());
    }

    #[test]
    fn partial_last_page() {
        let data = numbers(75);
        let last = paginate(&data, 2, 70);
        assert_eq!(last.items, vec![71, 72, 73, 74, 75]);
        assert_eq!((last.start_index, last.end_index), (71, 75));
    }

    #[test]
    fn empty_result_is_one_empty_page() {
        let data: Vec<usize> = Vec::new();
        let page = paginate(&data, 1, 70);
        assert_eq!(page.total_pages, 1);
        assert!(page.is_empty());
        assert_eq!((page.start_index, page.end_index), (1, 0));
        assert!(!page.has_next());
    }

    #[test]
    fn out_of_range_pages_are_empty() {
        let data = numbers(10);
        assert!(paginate(&data, 0, 70).is_empty());
        assert!(paginate(&data, 2, 70).is_empty());
        assert!(paginate(&data, usize::MAX, 70).is_empty());
    }
}
