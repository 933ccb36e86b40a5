use std::{ops::Range, cmp};

/// min heap without decrease key, an element may be contained several times.
/// callers discard stale entries when they are popped (lazy deletion)
pub struct LazyMinHeap<T: Ord> {
    data: Vec<T>,
}

impl<T: Ord> LazyMinHeap<T> {

    pub fn new() -> Self {
        LazyMinHeap {
            data: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        LazyMinHeap {
            data: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn push(&mut self, entry: T) {
        let initial_index = self.data.len();
        self.data.push(entry);

        self.sift_up(initial_index);
    }

    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        let last_index = self.len() - 1;
        self.data.swap(0, last_index); // move first element to the back
        let min_element = self.data.pop();

        if !self.is_empty() {
            self.sift_down(0);
        }

        min_element
    }

    fn sift_up(&mut self, index: usize) {
        let mut current_index = index;

        while 0 < current_index {
            let parent_index = parent_index(current_index);

            if self.data[parent_index] <= self.data[current_index] {
                break;
            }

            self.data.swap(parent_index, current_index);
            current_index = parent_index;
        }
    }

    fn sift_down(&mut self, index: usize) {
        let mut current_index = index;

        while current_index < self.len() {
            let mut min_entry_index: usize = current_index;

            for child_index in self.children_indices(current_index) {
                if self.data[child_index] < self.data[min_entry_index] {
                    min_entry_index = child_index;
                }
            }

            if min_entry_index != current_index {
                self.data.swap(min_entry_index, current_index);

                current_index = min_entry_index;
            }
            else {
                break;
            }
        }
    }

    fn children_indices(&self, index: usize) -> Range<usize> {
        let min_index = cmp::min(self.len(), 2 * index + 1);
        let max_index = cmp::min(self.len(), 2 * index + 3);

        min_index..max_index
    }
}

impl<T: Ord> Default for LazyMinHeap<T> {

    fn default() -> Self {
        LazyMinHeap::new()
    }
}

fn parent_index(index: usize) -> usize {
    (index - 1) / 2
}
