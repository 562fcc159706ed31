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

use crate::error::Error;
use crate::hash_set::DEFAULT_BUCKET_COUNT;
use crate::hash_set::DEFAULT_LOAD_FACTOR;
use crate::hash_set::IntegerHashSet;

/// Builder for creating [`IntegerHashSet`]s.
///
/// The target load factor cannot be changed once the set is built.
///
/// # Examples
///
/// ```
/// use chainset::hash_set::IntegerHashSet;
///
/// let set = IntegerHashSet::builder()
///     .bucket_count(16)
///     .load_factor(0.5)
///     .build()
///     .unwrap();
///
/// assert_eq!(set.bucket_count(), 16);
/// assert_eq!(set.const_load_factor(), 0.5);
/// ```
#[derive(Debug, Clone)]
pub struct IntegerHashSetBuilder {
    bucket_count: usize,
    load_factor: f32,
}

impl Default for IntegerHashSetBuilder {
    fn default() -> Self {
        Self {
            bucket_count: DEFAULT_BUCKET_COUNT,
            load_factor: DEFAULT_LOAD_FACTOR,
        }
    }
}

impl IntegerHashSetBuilder {
    /// Sets the initial number of buckets. Defaults to 7.
    pub fn bucket_count(mut self, bucket_count: usize) -> Self {
        self.bucket_count = bucket_count;
        self
    }

    /// Sets the target load factor above which an insert doubles the table. Defaults to 0.7.
    pub fn load_factor(mut self, load_factor: f32) -> Self {
        self.load_factor = load_factor;
        self
    }

    /// Builds an empty set.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::ConfigInvalid`](crate::error::ErrorKind::ConfigInvalid) if the
    /// bucket count is 0 or the load factor is not a positive finite number.
    pub fn build(self) -> Result<IntegerHashSet, Error> {
        if self.bucket_count == 0 {
            return Err(Error::config_invalid("bucket count must be at least 1")
                .with_context("bucket_count", self.bucket_count));
        }
        if !self.load_factor.is_finite() || self.load_factor <= 0.0 {
            return Err(
                Error::config_invalid("load factor must be a positive finite number")
                    .with_context("load_factor", self.load_factor),
            );
        }
        Ok(IntegerHashSet::from_parts(self.bucket_count, self.load_factor))
    }
}
