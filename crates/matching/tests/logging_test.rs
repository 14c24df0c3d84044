// Copyright 2025 itscheems
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Integration test for the logging system
//!
//! A global subscriber can only be installed once per process, so
//! everything runs in a single test.

use std::{fs, path::PathBuf};

use flatswap_matching::{MatchingStore, PropertyEntry, SearchEntry, logging};

fn test_log_root() -> PathBuf {
	std::env::temp_dir().join(format!("flatswap-logs-{}", std::process::id()))
}

#[test]
fn test_logging_initialization() {
	let root = test_log_root();
	unsafe {
		std::env::set_var("LOG_DIR", &root);
		std::env::set_var("LOG_TO_CONSOLE", "false");
		std::env::set_var("RUST_LOG", "debug");
	}

	assert_eq!(logging::log_root(), root);
	logging::init_logging().expect("logging should initialize");

	// A second install must fail instead of panicking
	assert!(logging::init_logging().is_err());

	// Drive the store so it emits events
	let store = MatchingStore::default();
	store.put_property(PropertyEntry {
		user_id: "A".to_string(),
		city_id: 1,
		rooms: 1,
		price: 500,
		..Default::default()
	});
	store.put_search(SearchEntry {
		user_id: "A".to_string(),
		city_id: 1,
		max_price: 500,
		..Default::default()
	});
	store.reject("A", "B");
	assert!(store.find_cycles().is_empty());

	let log_dir = root.join("matching");
	assert!(log_dir.is_dir());

	let log_files: Vec<_> = fs::read_dir(&log_dir)
		.unwrap()
		.filter_map(|e| e.ok())
		.filter(|e| e.file_name().to_string_lossy().starts_with("matching."))
		.collect();
	assert!(!log_files.is_empty());
}
