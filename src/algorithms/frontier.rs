use std::cmp::Ordering;

/// Priority of a frontier entry: `f` first, then `h`.
///
/// For Dijkstra `h` is always 0 and `f` is the g-cost.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Priority {
    pub f: f64,
    pub h: f64,
}

impl Priority {
    pub fn new(f: f64, h: f64) -> Self {
        Priority { f, h }
    }

    fn cmp_costs(&self, other: &Self) -> Ordering {
        self.f.total_cmp(&other.f).then_with(|| self.h.total_cmp(&other.h))
    }
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    index: usize,
    priority: Priority,
    /// Insertion counter of the entry's first insertion. Final tie-break.
    seq: u64,
}

impl Entry {
    fn cmp_key(&self, other: &Self) -> Ordering {
        self.priority
            .cmp_costs(&other.priority)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Open set keyed by [`Priority`] with decrease-key.
///
/// An indexed binary min-heap: `slots[index]` records where a cell sits in
/// `heap`, giving O(1) membership and O(log n) insert, update and extract.
/// Equal priorities pop in first-insertion order.
#[derive(Debug, Clone, Default)]
pub struct Frontier {
    heap: Vec<Entry>,
    slots: Vec<Option<usize>>,
    next_seq: u64,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a frontier for cell indices below `cells` without reallocation.
    pub fn with_capacity(cells: usize) -> Self {
        Frontier {
            heap: Vec::new(),
            slots: vec![None; cells],
            next_seq: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.slot(index).is_some()
    }

    /// Current priority of `index`, if it is in the frontier.
    pub fn priority(&self, index: usize) -> Option<Priority> {
        self.slot(index).map(|s| self.heap[s].priority)
    }

    /// The entry `extract_min` would return next.
    pub fn peek(&self) -> Option<(usize, Priority)> {
        self.heap.first().map(|e| (e.index, e.priority))
    }

    /// Adds `index`, or lowers its priority if the new one is strictly
    /// smaller. A priority is never raised. Returns whether anything changed.
    pub fn insert(&mut self, index: usize, priority: Priority) -> bool {
        if let Some(slot) = self.slot(index) {
            if priority.cmp_costs(&self.heap[slot].priority) != Ordering::Less {
                return false;
            }
            self.heap[slot].priority = priority;
            self.sift_up(slot);
            return true;
        }

        if index >= self.slots.len() {
            self.slots.resize(index + 1, None);
        }
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry { index, priority, seq });
        let slot = self.heap.len() - 1;
        self.slots[index] = Some(slot);
        self.sift_up(slot);
        true
    }

    /// Removes and returns the entry with the smallest priority.
    pub fn extract_min(&mut self) -> Option<(usize, Priority)> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.swap(0, last);
        let min = self.heap.pop()?;
        self.slots[min.index] = None;
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some((min.index, min.priority))
    }

    pub fn clear(&mut self) {
        for entry in self.heap.drain(..) {
            self.slots[entry.index] = None;
        }
        self.next_seq = 0;
    }

    fn slot(&self, index: usize) -> Option<usize> {
        self.slots.get(index).copied().flatten()
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.slots[self.heap[a].index] = Some(a);
        self.slots[self.heap[b].index] = Some(b);
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if self.heap[slot].cmp_key(&self.heap[parent]) != Ordering::Less {
                break;
            }
            self.swap(slot, parent);
            slot = parent;
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * slot + 1;
            let right = left + 1;
            let mut smallest = slot;
            if left < len && self.heap[left].cmp_key(&self.heap[smallest]) == Ordering::Less {
                smallest = left;
            }
            if right < len && self.heap[right].cmp_key(&self.heap[smallest]) == Ordering::Less {
                smallest = right;
            }
            if smallest == slot {
                break;
            }
            self.swap(slot, smallest);
            slot = smallest;
        }
    }
}
