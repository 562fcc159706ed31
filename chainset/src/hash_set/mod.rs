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

//! An open-hashing set of integers.
//!
//! [`IntegerHashSet`] resolves collisions by separate chaining: every bucket holds the keys
//! whose hash maps to it, most recently inserted first. The table doubles its bucket count
//! whenever an insert finds the load factor above the target set at construction.
//!
//! # Usage
//!
//! ```rust
//! use chainset::hash_set::IntegerHashSet;
//!
//! let mut set = IntegerHashSet::new();
//! for key in 0..6 {
//!     set.insert(key);
//! }
//!
//! assert!(set.contains(3));
//! assert_eq!(set.len(), 6);
//! assert_eq!(set.bucket_count(), 14);
//! ```
//!
//! # Notes
//!
//! - Keys hash to `key mod bucket_count` using floor modulo, so negative keys are supported.
//! - The growth check runs before the new key is added, so the load factor may sit above the
//!   target by exactly one element until the next insert.
//! - The table never shrinks on its own; [`IntegerHashSet::reserve`] and
//!   [`IntegerHashSet::rehash`] may shrink it on request.

mod builder;
mod set;

pub use self::builder::IntegerHashSetBuilder;
pub use self::set::IntegerHashSet;

/// Number of buckets a default-constructed set starts with.
pub const DEFAULT_BUCKET_COUNT: usize = 7;

/// Target load factor of a default-constructed set.
pub const DEFAULT_LOAD_FACTOR: f32 = 0.7;
