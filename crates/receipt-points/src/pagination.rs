//! Listing parameters.
//!
//! The store assumes a positive limit and a non-negative offset. Raw query
//! values are normalized here first: anything missing, unparseable or out of
//! range falls back to the default.

/// A validated `(limit, offset)` pair. `limit` is always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    limit: usize,
    offset: usize,
}

impl Pagination {
    /// Build from already-valid values. A zero `limit` becomes 1.
    pub fn new(limit: usize, offset: usize) -> Self {
        Self {
            limit: limit.max(1),
            offset,
        }
    }

    /// Normalize raw query values.
    ///
    /// `limit` must parse as a positive integer, `offset` as a non-negative
    /// one; otherwise `default_limit` and 0 are used.
    pub fn from_query(limit: Option<&str>, offset: Option<&str>, default_limit: usize) -> Self {
        let limit = limit
            .and_then(|l| l.parse::<i64>().ok())
            .filter(|&l| l > 0)
            .map_or(default_limit, |l| l as usize);
        let offset = offset
            .and_then(|o| o.parse::<i64>().ok())
            .filter(|&o| o >= 0)
            .map_or(0, |o| o as usize);

        Self::new(limit, offset)
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// 1-based page number containing `offset`.
    pub fn current_page(&self) -> usize {
        self.offset / self.limit + 1
    }

    /// Number of pages needed for `total` records.
    pub fn total_pages(&self, total: usize) -> usize {
        total.div_ceil(self.limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_missing() {
        let p = Pagination::from_query(None, None, 10);
        assert_eq!((p.limit(), p.offset()), (10, 0));
    }

    #[test]
    fn test_valid_values_kept() {
        let p = Pagination::from_query(Some("5"), Some("20"), 10);
        assert_eq!((p.limit(), p.offset()), (5, 20));
        assert_eq!(p.current_page(), 5);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        for (limit, offset) in [("0", "-1"), ("-5", "abc"), ("", ""), ("2.5", "1e3")] {
            let p = Pagination::from_query(Some(limit), Some(offset), 10);
            assert_eq!((p.limit(), p.offset()), (10, 0), "limit={limit:?} offset={offset:?}");
        }
    }

    #[test]
    fn test_total_pages() {
        let p = Pagination::new(10, 0);
        assert_eq!(p.total_pages(0), 0);
        assert_eq!(p.total_pages(10), 1);
        assert_eq!(p.total_pages(15), 2);

        let p = Pagination::new(1, 1);
        assert_eq!(p.total_pages(2), 2);
        assert_eq!(p.current_page(), 2);
    }

    #[test]
    fn test_zero_limit_clamped() {
        assert_eq!(Pagination::new(0, 3).limit(), 1);
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn limit_always_positive(limit in any::<Option<i64>>(), offset in any::<Option<i64>>()) {
                let limit = limit.map(|l| l.to_string());
                let offset = offset.map(|o| o.to_string());
                let p = Pagination::from_query(limit.as_deref(), offset.as_deref(), 10);

                prop_assert!(p.limit() >= 1);
            }

            #[test]
            fn pages_cover_total(limit in 1usize..50, total in 0usize..500) {
                let p = Pagination::new(limit, 0);
                let pages = p.total_pages(total);

                prop_assert!(pages * limit >= total);
                prop_assert!(pages == 0 || (pages - 1) * limit < total);
            }

            #[test]
            fn offset_lands_on_current_page(limit in 1usize..50, offset in 0usize..500) {
                let p = Pagination::new(limit, offset);
                let page = p.current_page();

                prop_assert!((page - 1) * limit <= offset);
                prop_assert!(offset < page * limit);
            }
        }
    }
}
