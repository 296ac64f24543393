//! Slot-addressed unvisited set.
//!
//! Cities are tracked by their input position ("slot"), threaded on an
//! intrusive circular doubly linked list with a sentinel at index `len`.
//! Iteration follows input order over the remaining slots, and removing a
//! slot unlinks it in O(1) regardless of how many slots remain.

/// The set of input positions not yet appended to a tour.
///
/// # Examples
///
/// ```
/// use u_tour::constructive::UnvisitedSet;
///
/// let mut set = UnvisitedSet::with_len(4);
/// assert!(set.remove(1));
/// assert!(!set.remove(1));
/// assert_eq!(set.iter().collect::<Vec<_>>(), vec![0, 2, 3]);
/// assert_eq!(set.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct UnvisitedSet {
    next: Vec<usize>,
    prev: Vec<usize>,
    live: Vec<bool>,
    len: usize,
}

impl UnvisitedSet {
    /// Creates a set holding every slot in `0..len`.
    pub fn with_len(len: usize) -> Self {
        let nodes = len + 1;
        Self {
            next: (0..nodes).map(|i| (i + 1) % nodes).collect(),
            prev: (0..nodes).map(|i| (i + len) % nodes).collect(),
            live: vec![true; len],
            len,
        }
    }

    fn sentinel(&self) -> usize {
        self.live.len()
    }

    /// Number of slots still unvisited.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` once every slot has been removed.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if `slot` is still unvisited.
    pub fn contains(&self, slot: usize) -> bool {
        self.live.get(slot).copied().unwrap_or(false)
    }

    /// Lowest remaining slot, if any.
    pub fn first(&self) -> Option<usize> {
        let head = self.next[self.sentinel()];
        (head != self.sentinel()).then_some(head)
    }

    /// Removes `slot`, returning `false` if it was already removed or out of range.
    pub fn remove(&mut self, slot: usize) -> bool {
        if !self.contains(slot) {
            return false;
        }
        let (p, n) = (self.prev[slot], self.next[slot]);
        self.next[p] = n;
        self.prev[n] = p;
        self.live[slot] = false;
        self.len -= 1;
        true
    }

    /// Iterates over remaining slots in ascending input order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            set: self,
            cursor: self.next[self.sentinel()],
        }
    }
}

/// Iterator over the remaining slots of an [`UnvisitedSet`].
#[derive(Debug)]
pub struct Iter<'a> {
    set: &'a UnvisitedSet,
    cursor: usize,
}

impl Iterator for Iter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.cursor == self.set.sentinel() {
            return None;
        }
        let slot = self.cursor;
        self.cursor = self.set.next[slot];
        Some(slot)
    }
}

impl<'a> IntoIterator for &'a UnvisitedSet {
    type Item = usize;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}
