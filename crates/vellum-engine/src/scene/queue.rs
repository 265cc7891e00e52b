use super::{DrawItem, SortKey};

#[derive(Debug, Clone)]
struct Queued {
    key: SortKey,
    item: DrawItem,
}

/// Draw items collected for the current frame.
///
/// Performance characteristics:
/// - `push()` is O(1)
/// - paint-order iteration reuses an internal index buffer
/// - draining sorts in place and keeps the allocation for the next frame
#[derive(Debug, Default)]
pub struct DrawQueue {
    items: Vec<Queued>,
    next_seq: u32,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,
}

impl DrawQueue {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops all queued items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_seq = 0;
        self.sorted_indices.clear();
        self.sorted_dirty = true;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn push(&mut self, item: DrawItem) {
        let seq = self.next_seq;
        self.next_seq = self.next_seq.wrapping_add(1);

        self.items.push(Queued {
            key: SortKey::new(item.render_order, item.projected, seq),
            item,
        });
        self.sorted_dirty = true;
    }

    /// Iterates items in paint order without moving them.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }
        self.sorted_indices.iter().map(|&i| &self.items[i].item)
    }

    /// Removes every item, yielding them in paint order.
    pub fn drain_in_paint_order(&mut self) -> impl Iterator<Item = DrawItem> + '_ {
        self.items.sort_unstable_by_key(|q| q.key);
        self.next_seq = 0;
        self.sorted_indices.clear();
        self.sorted_dirty = true;
        self.items.drain(..).map(|q| q.item)
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.items.len());

        // Keys are unique (seq), so an unstable sort is still deterministic.
        let items = &self.items;
        self.sorted_indices.sort_unstable_by_key(|&i| items[i].key);

        self.sorted_dirty = false;
    }
}
