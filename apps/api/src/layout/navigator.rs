use serde::Serialize;

/// Tracks which page container is visible. Navigation never re-renders; it only
/// changes which of the pre-built pages is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageNavigator {
    current: u32,
    total: u32,
}

impl PageNavigator {
    /// Opens on page 1. A zero page count is treated as one page.
    pub fn open(total: u32) -> Self {
        PageNavigator {
            current: 1,
            total: total.max(1),
        }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    /// Moves to page `k`. Out-of-range requests are ignored and return `false`.
    pub fn go_to(&mut self, k: i64) -> bool {
        if k < 1 || k > self.total as i64 {
            return false;
        }
        self.current = k as u32;
        true
    }

    pub fn is_visible(&self, index: u32) -> bool {
        index == self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_starts_on_first_page() {
        let nav = PageNavigator::open(3);
        assert_eq!(nav.current(), 1);
        assert_eq!(nav.total(), 3);
    }

    #[test]
    fn test_go_to_in_range() {
        let mut nav = PageNavigator::open(3);
        assert!(nav.go_to(3));
        assert_eq!(nav.current(), 3);
        assert!(nav.go_to(1));
        assert_eq!(nav.current(), 1);
    }

    #[test]
    fn test_go_to_out_of_range_is_noop() {
        let mut nav = PageNavigator::open(3);
        nav.go_to(2);
        for k in [0, -1, 4, 100, i64::MIN, i64::MAX] {
            assert!(!nav.go_to(k), "k = {k}");
            assert_eq!(nav.current(), 2, "k = {k} must not move the navigator");
        }
    }

    #[test]
    fn test_exactly_one_page_visible() {
        let mut nav = PageNavigator::open(4);
        nav.go_to(3);
        let visible: Vec<u32> = (1..=4).filter(|&i| nav.is_visible(i)).collect();
        assert_eq!(visible, vec![3]);
    }

    #[test]
    fn test_reopen_resets_to_first_page() {
        let mut nav = PageNavigator::open(4);
        nav.go_to(4);
        nav = PageNavigator::open(4);
        assert_eq!(nav.current(), 1);
    }

    #[test]
    fn test_zero_pages_treated_as_one() {
        let mut nav = PageNavigator::open(0);
        assert_eq!(nav.total(), 1);
        assert!(!nav.go_to(2));
    }
}
