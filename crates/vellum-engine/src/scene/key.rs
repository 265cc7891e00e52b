use core::cmp::Ordering;

/// Stable sort key for queued draw items.
///
/// Ordering rules:
/// 1) `render_order`: ascending (back-to-front)
/// 2) `projected`: screen-fixed (`false`) before world space (`true`)
/// 3) `seq`: arrival order, so equal keys keep submission order
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct SortKey {
    pub render_order: i32,
    pub projected: bool,
    pub seq: u32,
}

impl SortKey {
    #[inline]
    pub const fn new(render_order: i32, projected: bool, seq: u32) -> Self {
        Self { render_order, projected, seq }
    }
}

impl Ord for SortKey {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.render_order
            .cmp(&other.render_order)
            .then(self.projected.cmp(&other.projected))
            .then(self.seq.cmp(&other.seq))
    }
}

impl PartialOrd for SortKey {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_order_dominates() {
        assert!(SortKey::new(1, true, 9) < SortKey::new(2, false, 0));
    }

    #[test]
    fn screen_fixed_precedes_projected_on_tie() {
        assert!(SortKey::new(3, false, 5) < SortKey::new(3, true, 0));
    }

    #[test]
    fn arrival_breaks_remaining_ties() {
        assert!(SortKey::new(0, true, 1) < SortKey::new(0, true, 2));
        assert_eq!(SortKey::new(0, true, 1).cmp(&SortKey::new(0, true, 1)), Ordering::Equal);
    }
}
