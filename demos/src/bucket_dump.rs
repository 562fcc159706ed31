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

use chainset::hash_set::IntegerHashSet;
use log::info;

fn main() {
    env_logger::init();

    println!("=== Growth ===");
    let mut set = IntegerHashSet::new();
    for key in 0..5 {
        set.insert(key);
    }
    println!(
        "5 keys in {} buckets, load factor {:.3} (target {})",
        set.bucket_count(),
        set.load_factor(),
        set.const_load_factor()
    );
    set.insert(5);
    println!(
        "6 keys in {} buckets, load factor {:.3}",
        set.bucket_count(),
        set.load_factor()
    );
    set.print();

    println!("\n=== Negative keys ===");
    for key in [-1, -8, -15] {
        set.insert(key);
    }
    set.print();

    println!("\n=== Reserve ===");
    set.reserve(20);
    info!("reserved room for 20 keys");
    println!("{} buckets after reserve(20)", set.bucket_count());
    set.print();

    println!("\n=== Builder ===");
    match IntegerHashSet::builder().bucket_count(0).build() {
        Ok(_) => println!("unexpected success"),
        Err(err) => println!("rejected: {err}"),
    }
}
