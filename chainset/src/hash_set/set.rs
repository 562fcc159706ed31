// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use std::collections::VecDeque;
use std::fmt;

use log::debug;

use crate::hash_set::DEFAULT_BUCKET_COUNT;
use crate::hash_set::DEFAULT_LOAD_FACTOR;
use crate::hash_set::IntegerHashSetBuilder;

/// A set of `i64` keys stored in a chained hash table.
///
/// Each bucket is a chain of keys, most recently inserted first. A key always lives in the
/// bucket at `key mod bucket_count` for the current bucket count.
///
/// Cloning produces a fully independent copy of every bucket.
///
/// # Examples
///
/// ```
/// use chainset::hash_set::IntegerHashSet;
///
/// let mut set = IntegerHashSet::with_bucket_count(3);
/// set.insert(1);
/// set.insert(4);
/// set.insert(-2);
///
/// assert_eq!(set.bucket_size(1), 3);
/// assert_eq!(set.find(4), Some(&4));
/// assert!(set.remove(1));
/// assert!(!set.contains(1));
/// ```
#[derive(Debug, Clone)]
pub struct IntegerHashSet {
    buckets: Vec<VecDeque<i64>>,
    target_load_factor: f32,
}

impl Default for IntegerHashSet {
    fn default() -> Self {
        Self::new()
    }
}

impl IntegerHashSet {
    /// Creates an empty set with 7 buckets and a target load factor of 0.7.
    pub fn new() -> Self {
        Self::with_bucket_count(DEFAULT_BUCKET_COUNT)
    }

    /// Creates an empty set with `bucket_count` buckets and the default target load factor.
    ///
    /// # Panics
    ///
    /// Panics if `bucket_count` is 0. Use [`IntegerHashSet::builder`] for a fallible variant.
    pub fn with_bucket_count(bucket_count: usize) -> Self {
        assert!(bucket_count > 0, "bucket_count must be at least 1");
        Self::from_parts(bucket_count, DEFAULT_LOAD_FACTOR)
    }

    /// Returns a builder to configure the initial bucket count and the target load factor.
    pub fn builder() -> IntegerHashSetBuilder {
        IntegerHashSetBuilder::default()
    }

    pub(super) fn from_parts(bucket_count: usize, target_load_factor: f32) -> Self {
        debug_assert!(bucket_count > 0);
        Self {
            buckets: vec![VecDeque::new(); bucket_count],
            target_load_factor,
        }
    }

    /// Adds `key` to the set.
    ///
    /// Before the key is placed, the table is doubled if the current load factor is above the
    /// target. The check runs against the size before this insert, and it runs even when `key`
    /// is already present.
    ///
    /// Returns true if the key was newly inserted.
    pub fn insert(&mut self, key: i64) -> bool {
        if self.load_factor() > self.target_load_factor {
            self.rehash(self.buckets.len() * 2);
        }

        if self.contains(key) {
            return false;
        }
        let index = self.hash(key);
        self.buckets[index].push_front(key);
        true
    }

    /// Removes `key` from the set.
    ///
    /// Returns true if the key was present. Removing an absent key is a no-op.
    pub fn remove(&mut self, key: i64) -> bool {
        let index = self.hash(key);
        let bucket = &mut self.buckets[index];
        match bucket.iter().position(|&k| k == key) {
            Some(pos) => {
                bucket.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Returns true if `key` is in the set.
    pub fn contains(&self, key: i64) -> bool {
        self.find(key).is_some()
    }

    /// Returns a reference to the stored key equal to `key`, if any.
    ///
    /// The reference borrows the set, so it cannot outlive the next mutation.
    pub fn find(&self, key: i64) -> Option<&i64> {
        self.buckets[self.hash(key)].iter().find(|&&k| k == key)
    }

    /// Rebuilds the table with `bucket_count` buckets, redistributing every key.
    ///
    /// A `bucket_count` of 0 is clamped to 1. The table may shrink. Keys within a bucket end up
    /// in reverse scan order of the old table.
    ///
    /// # Panics
    ///
    /// Panics if a bucket array of `bucket_count` buckets cannot be allocated.
    pub fn rehash(&mut self, bucket_count: usize) {
        let bucket_count = clamp_bucket_count(bucket_count);
        let mut new_buckets = vec![VecDeque::new(); bucket_count];
        for &key in self.buckets.iter().flatten() {
            new_buckets[bucket_index(key, bucket_count)].push_front(key);
        }

        debug!(
            "rehashed {} keys from {} to {} buckets",
            self.len(),
            self.buckets.len(),
            bucket_count
        );
        self.buckets = new_buckets;
    }

    /// Rehashes to the bucket count needed to hold `capacity` keys at the target load factor.
    ///
    /// The new count is `max(capacity, capacity / target_load_factor)`, truncated. It replaces
    /// the current count even when smaller, so this can shrink the table.
    ///
    /// # Panics
    ///
    /// Panics if the resulting bucket array cannot be allocated, e.g. for `usize::MAX`.
    pub fn reserve(&mut self, capacity: usize) {
        let scaled = (capacity as f32 / self.target_load_factor) as usize;
        self.rehash(capacity.max(scaled));
    }

    /// Removes every key. The bucket count is unchanged.
    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            bucket.clear();
        }
    }

    /// Returns the number of keys, summed over all buckets on every call.
    pub fn len(&self) -> usize {
        self.buckets.iter().map(VecDeque::len).sum()
    }

    /// Returns true if no bucket holds a key.
    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(VecDeque::is_empty)
    }

    /// Returns the number of buckets.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the number of keys in bucket `index`, or 0 if `index` is out of range.
    pub fn bucket_size(&self, index: usize) -> usize {
        self.buckets.get(index).map_or(0, VecDeque::len)
    }

    /// Returns the current ratio of keys to buckets.
    pub fn load_factor(&self) -> f32 {
        self.len() as f32 / self.buckets.len() as f32
    }

    /// Returns the target load factor fixed at construction.
    pub fn const_load_factor(&self) -> f32 {
        self.target_load_factor
    }

    /// Writes every bucket and its keys to stdout, one line per bucket.
    ///
    /// The text is the [`Display`](fmt::Display) form of the set.
    pub fn print(&self) {
        print!("{self}");
    }

    fn hash(&self, key: i64) -> usize {
        bucket_index(key, self.buckets.len())
    }
}

impl fmt::Display for IntegerHashSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, bucket) in self.buckets.iter().enumerate() {
            write!(f, "Bucket {index}: ")?;
            for key in bucket {
                write!(f, "{key} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Floor modulo of `key` by `bucket_count`, always in `[0, bucket_count)`.
#[inline]
fn bucket_index(key: i64, bucket_count: usize) -> usize {
    key.rem_euclid(bucket_count as i64) as usize
}

fn clamp_bucket_count(bucket_count: usize) -> usize {
    if bucket_count == 0 {
        debug!("clamping requested bucket count 0 to 1");
        return 1;
    }
    bucket_count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bucket(set: &IntegerHashSet, index: usize) -> Vec<i64> {
        set.buckets[index].iter().copied().collect()
    }

    #[test]
    fn test_bucket_index_is_floor_modulo() {
        assert_eq!(bucket_index(0, 7), 0);
        assert_eq!(bucket_index(9, 7), 2);
        assert_eq!(bucket_index(-1, 7), 6);
        assert_eq!(bucket_index(-7, 7), 0);
        assert_eq!(bucket_index(-8, 7), 6);
        assert_eq!(bucket_index(i64::MIN, 7), i64::MIN.rem_euclid(7) as usize);
        assert_eq!(bucket_index(i64::MAX, 1), 0);
    }

    #[test]
    fn test_insert_prepends_to_chain() {
        let mut set = IntegerHashSet::with_bucket_count(7);
        set.insert(0);
        set.insert(7);
        set.insert(14);

        assert_eq!(bucket(&set, 0), vec![14, 7, 0]);
        assert_eq!(set.bucket_count(), 7);
    }

    #[test]
    fn test_rehash_reverses_chain_order() {
        let mut set = IntegerHashSet::with_bucket_count(7);
        set.insert(0);
        set.insert(7);
        set.insert(14);

        set.rehash(7);
        assert_eq!(bucket(&set, 0), vec![0, 7, 14]);
    }

    #[test]
    fn test_rehash_places_keys_by_new_count() {
        let mut set = IntegerHashSet::with_bucket_count(7);
        for key in [1, 8, 15, -6] {
            set.insert(key);
        }
        assert_eq!(set.bucket_size(1), 4);

        set.rehash(14);
        assert_eq!(bucket(&set, 1), vec![1, 15]);
        assert_eq!(bucket(&set, 8), vec![8, -6]);
        for key in [1, 8, 15, -6] {
            assert!(set.contains(key), "missing {key} after rehash");
        }
    }

    #[test]
    fn test_clamp_bucket_count() {
        assert_eq!(clamp_bucket_count(0), 1);
        assert_eq!(clamp_bucket_count(1), 1);
        assert_eq!(clamp_bucket_count(42), 42);
    }

    #[test]
    fn test_remove_only_first_match() {
        // A high target keeps everything in two buckets.
        let mut set = IntegerHashSet::from_parts(2, 10.0);
        set.insert(3);
        set.insert(5);
        set.insert(1);

        assert!(set.remove(5));
        assert_eq!(bucket(&set, 1), vec![1, 3]);
        assert!(!set.remove(5));
    }
}
