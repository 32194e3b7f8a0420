/*!
 * Ready Queue
 * Ordered collection of process descriptors handed to a scheduling algorithm
 */

use super::descriptor::ProcessDescriptor;
use crate::scheduler::OrderKey;
use std::cmp::Ordering;
use std::collections::VecDeque;

/// Ordered collection of descriptors
///
/// Insertion order (file order for loaded queues) is the initial order.
/// Sorting is always stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadyQueue {
    entries: VecDeque<ProcessDescriptor>,
}

impl ReadyQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ProcessDescriptor> {
        self.entries.get(index)
    }

    pub fn push_back(&mut self, descriptor: ProcessDescriptor) {
        self.entries.push_back(descriptor);
    }

    /// Remove the descriptor at `index`, keeping the order of the rest
    pub fn remove(&mut self, index: usize) -> Option<ProcessDescriptor> {
        self.entries.remove(index)
    }

    pub fn front(&self) -> Option<&ProcessDescriptor> {
        self.entries.front()
    }

    pub fn pop_front(&mut self) -> Option<ProcessDescriptor> {
        self.entries.pop_front()
    }

    /// Stable in-place sort with a three-way comparison
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&ProcessDescriptor, &ProcessDescriptor) -> Ordering,
    {
        self.entries.make_contiguous().sort_by(compare);
    }

    /// Stable in-place sort by one of the scheduling keys
    pub fn sort_by_key(&mut self, key: OrderKey) {
        self.sort_by(|a, b| key.compare(a, b));
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProcessDescriptor> {
        self.entries.iter()
    }

    /// Sum of the original burst lengths
    pub fn total_burst(&self) -> u64 {
        self.entries.iter().map(|p| u64::from(p.burst)).sum()
    }
}

impl From<Vec<ProcessDescriptor>> for ReadyQueue {
    fn from(descriptors: Vec<ProcessDescriptor>) -> Self {
        Self {
            entries: descriptors.into(),
        }
    }
}

impl FromIterator<ProcessDescriptor> for ReadyQueue {
    fn from_iter<I: IntoIterator<Item = ProcessDescriptor>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ReadyQueue {
    type Item = ProcessDescriptor;
    type IntoIter = std::collections::vec_deque::IntoIter<ProcessDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a ReadyQueue {
    type Item = &'a ProcessDescriptor;
    type IntoIter = std::collections::vec_deque::Iter<'a, ProcessDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
