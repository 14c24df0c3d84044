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

use std::collections::BTreeMap;

use crate::{
	graph::{SwapGraph, build_graph},
	rejection::RejectionSet,
	snapshot::StoreSnapshot,
	types::{PropertyEntry, SearchEntry, UserId},
};

/// Matching store state
///
/// This structure holds everything the cycle search reads:
/// - Searches (one per user)
/// - Properties (one per user)
/// - Rejected pairs
///
/// Both maps are ordered by user id so graph construction iterates in a
/// fixed order.
#[derive(Debug, Clone, Default)]
pub struct StoreState {
	pub searches: BTreeMap<UserId, SearchEntry>,
	pub properties: BTreeMap<UserId, PropertyEntry>,
	pub rejections: RejectionSet,
}

impl StoreState {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn graph(&self) -> SwapGraph {
		build_graph(&self.searches, &self.properties, &self.rejections)
	}

	pub fn to_snapshot(&self) -> StoreSnapshot {
		StoreSnapshot {
			searches: self.searches.values().cloned().collect(),
			properties: self.properties.values().cloned().collect(),
			rejections: self.rejections.iter().collect(),
		}
	}

	/// Rebuild state from a snapshot
	///
	/// Entries are keyed by their own `user_id`; later duplicates win, the
	/// same as repeated puts.
	pub fn from_snapshot(snapshot: StoreSnapshot) -> Self {
		Self {
			searches: snapshot
				.searches
				.into_iter()
				.map(|entry| (entry.user_id.clone(), entry))
				.collect(),
			properties: snapshot
				.properties
				.into_iter()
				.map(|entry| (entry.user_id.clone(), entry))
				.collect(),
			rejections: snapshot.rejections.into_iter().collect(),
		}
	}
}
