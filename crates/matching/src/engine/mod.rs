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

mod state;

pub use state::StoreState;

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::{
	cycle::{self, MAX_PARTICIPANTS, MIN_PARTICIPANTS},
	graph::SwapGraph,
	snapshot::StoreSnapshot,
	types::{PropertyEntry, SearchEntry, SwapCycle},
};

/// Error types for matching engine setup
#[derive(Debug, Error)]
pub enum EngineError {
	#[error(
		"Invalid max participants: {0} (must be between {min} and {max})",
		min = MIN_PARTICIPANTS,
		max = MAX_PARTICIPANTS
	)]
	InvalidMaxParticipants(usize),
}

/// Configuration for the matching store
#[derive(Debug, Clone)]
pub struct EngineConfig {
	/// Largest swap loop to look for (2..=4)
	pub max_participants: usize,
	pub verbose_logging: bool,
}

impl Default for EngineConfig {
	fn default() -> Self {
		Self {
			max_participants: MAX_PARTICIPANTS,
			verbose_logging: false,
		}
	}
}

impl EngineConfig {
	pub fn validate(&self) -> Result<(), EngineError> {
		if (MIN_PARTICIPANTS..=MAX_PARTICIPANTS).contains(&self.max_participants) {
			Ok(())
		} else {
			Err(EngineError::InvalidMaxParticipants(self.max_participants))
		}
	}
}

/// Entry counts at a single point in time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreStats {
	pub searches: usize,
	pub properties: usize,
	pub rejections: usize,
}

/// Thread-safe matching store
///
/// Owns the searches, the properties and the rejection set behind one
/// reader/writer lock:
/// - Writers (`put_*`, `remove_*`, `reject`, `restore`) take the lock
///   exclusively
/// - `find_cycles` holds the shared lock across graph construction and the
///   cycle search, so a result always reflects one consistent state
/// - Concurrent searches proceed in parallel
///
/// Nothing inside the critical section does I/O; hold times are bounded by
/// pool size.
///
/// Share between workers with `Arc<MatchingStore>`.
#[derive(Debug, Default)]
pub struct MatchingStore {
	config: EngineConfig,
	state: RwLock<StoreState>,
}

impl MatchingStore {
	/// Create an empty store
	pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
		config.validate()?;
		Ok(Self {
			config,
			state: RwLock::new(StoreState::new()),
		})
	}

	pub fn config(&self) -> &EngineConfig {
		&self.config
	}

	// Every write is a single map/set operation, so a panic elsewhere can
	// never leave the state half-applied; recover from poisoning.
	fn read(&self) -> RwLockReadGuard<'_, StoreState> {
		self.state.read().unwrap_or_else(PoisonError::into_inner)
	}

	fn write(&self) -> RwLockWriteGuard<'_, StoreState> {
		self.state.write().unwrap_or_else(PoisonError::into_inner)
	}

	/// Insert or replace the search of `entry.user_id`
	pub fn put_search(&self, entry: SearchEntry) {
		if self.config.verbose_logging {
			debug!(
				user_id = %entry.user_id,
				city_id = entry.city_id,
				max_price = entry.max_price,
				"put search"
			);
		}
		self.write().searches.insert(entry.user_id.clone(), entry);
	}

	/// Insert or replace the property of `entry.user_id`
	pub fn put_property(&self, entry: PropertyEntry) {
		if self.config.verbose_logging {
			debug!(
				user_id = %entry.user_id,
				city_id = entry.city_id,
				price = entry.price,
				"put property"
			);
		}
		self.write().properties.insert(entry.user_id.clone(), entry);
	}

	pub fn remove_search(&self, user_id: &str) -> Option<SearchEntry> {
		let removed = self.write().searches.remove(user_id);
		if removed.is_some() {
			debug!(user_id, "removed search");
		}
		removed
	}

	pub fn remove_property(&self, user_id: &str) -> Option<PropertyEntry> {
		let removed = self.write().properties.remove(user_id);
		if removed.is_some() {
			debug!(user_id, "removed property");
		}
		removed
	}

	/// Take a user out of the pool, e.g. after they accepted a swap
	///
	/// Removes both entries under one exclusive lock. Rejections involving
	/// the user are kept. Returns `false` if the user had no entries.
	pub fn remove_user(&self, user_id: &str) -> bool {
		let mut state = self.write();
		let had_search = state.searches.remove(user_id).is_some();
		let had_property = state.properties.remove(user_id).is_some();
		drop(state);

		let removed = had_search || had_property;
		if removed {
			debug!(user_id, "removed user from pool");
		}
		removed
	}

	/// Permanently veto `searcher`'s search being satisfied by `owner`'s property
	///
	/// Idempotent. Either user may be unknown; the veto then takes effect
	/// once matching entries exist.
	pub fn reject(&self, searcher: &str, owner: &str) {
		if self.write().rejections.reject(searcher, owner) {
			debug!(searcher, owner, "pair rejected");
		}
	}

	pub fn is_rejected(&self, searcher: &str, owner: &str) -> bool {
		self.read().rejections.is_rejected(searcher, owner)
	}

	pub fn search(&self, user_id: &str) -> Option<SearchEntry> {
		self.read().searches.get(user_id).cloned()
	}

	pub fn property(&self, user_id: &str) -> Option<PropertyEntry> {
		self.read().properties.get(user_id).cloned()
	}

	/// Current compatibility graph
	pub fn graph(&self) -> SwapGraph {
		self.read().graph()
	}

	/// Every distinct swap cycle currently available
	///
	/// Builds the graph and searches it under one shared lock. An empty
	/// result means no swap is possible right now.
	pub fn find_cycles(&self) -> Vec<SwapCycle> {
		// Build and search against one consistent state
		let state = self.read();
		let graph = state.graph();
		let cycles = cycle::find_cycles(&graph, self.config.max_participants);
		drop(state);

		// Summary
		debug!(
			nodes = graph.node_count(),
			edges = graph.edge_count(),
			cycles = cycles.len(),
			"cycle search complete"
		);
		cycles
	}

	/// Swap cycles that include `user_id`
	pub fn find_cycles_for(&self, user_id: &str) -> Vec<SwapCycle> {
		self.find_cycles()
			.into_iter()
			.filter(|cycle| cycle.contains(user_id))
			.collect()
	}

	pub fn stats(&self) -> StoreStats {
		let state = self.read();
		StoreStats {
			searches: state.searches.len(),
			properties: state.properties.len(),
			rejections: state.rejections.len(),
		}
	}

	/// Copy the whole store
	pub fn snapshot(&self) -> StoreSnapshot {
		self.read().to_snapshot()
	}

	/// Load `snapshot` into the store
	///
	/// Searches and properties are replaced wholesale. Rejections are
	/// permanent, so the live set is merged with the snapshot's instead of
	/// being overwritten.
	pub fn restore(&self, snapshot: StoreSnapshot) {
		let mut restored = StoreState::from_snapshot(snapshot);

		let mut state = self.write();
		// Live vetoes survive; the snapshot may predate them
		restored.rejections.extend(state.rejections.iter());
		let stats = StoreStats {
			searches: restored.searches.len(),
			properties: restored.properties.len(),
			rejections: restored.rejections.len(),
		};
		*state = restored;
		drop(state);

		info!(
			searches = stats.searches,
			properties = stats.properties,
			rejections = stats.rejections,
			"restored store from snapshot"
		);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn search(user_id: &str, city_id: u8) -> SearchEntry {
		SearchEntry {
			user_id: user_id.to_string(),
			city_id,
			min_rooms: 1,
			max_price: 600,
			amenities: 1,
			..Default::default()
		}
	}

	fn property(user_id: &str, city_id: u8, price: u32) -> PropertyEntry {
		PropertyEntry {
			user_id: user_id.to_string(),
			city_id,
			rooms: 1,
			price,
			amenities: 1,
			..Default::default()
		}
	}

	fn pair_store() -> MatchingStore {
		let store = MatchingStore::default();
		store.put_property(property("A", 1, 500));
		store.put_search(search("A", 2));
		store.put_property(property("B", 2, 400));
		store.put_search(search("B", 1));
		store
	}

	#[test]
	fn test_config_validation() {
		for max in [2, 3, 4] {
			let config = EngineConfig {
				max_participants: max,
				..Default::default()
			};
			assert!(MatchingStore::new(config).is_ok());
		}
		for max in [0, 1, 5] {
			let config = EngineConfig {
				max_participants: max,
				..Default::default()
			};
			assert!(matches!(
				MatchingStore::new(config),
				Err(EngineError::InvalidMaxParticipants(m)) if m == max
			));
		}
	}

	#[test]
	fn test_put_replaces() {
		let store = MatchingStore::default();
		store.put_property(property("A", 1, 500));
		store.put_property(property("A", 3, 700));

		assert_eq!(store.stats().properties, 1);
		assert_eq!(store.property("A").unwrap().city_id, 3);
	}

	#[test]
	fn test_pair_found() {
		let store = pair_store();
		let cycles = store.find_cycles();

		assert_eq!(cycles.len(), 1);
		assert_eq!(cycles[0].to_string(), "A -> B -> A");
	}

	#[test]
	fn test_reject_removes_edge() {
		let store = pair_store();
		store.reject("B", "A");

		assert!(store.is_rejected("B", "A"));
		assert!(!store.is_rejected("A", "B"));
		assert!(store.find_cycles().is_empty());
		assert!(store.graph().has_edge("A", "B"));
	}

	#[test]
	fn test_remove_user() {
		let store = pair_store();
		assert!(store.remove_user("A"));
		assert!(!store.remove_user("A"));
		assert!(store.find_cycles().is_empty());
		assert_eq!(
			store.stats(),
			StoreStats {
				searches: 1,
				properties: 1,
				rejections: 0,
			}
		);
	}

	#[test]
	fn test_remove_single_side() {
		let store = pair_store();
		assert!(store.remove_property("B").is_some());
		assert!(store.remove_property("B").is_none());
		assert!(store.find_cycles().is_empty());

		store.put_property(property("B", 2, 400));
		assert_eq!(store.find_cycles().len(), 1);

		assert!(store.remove_search("A").is_some());
		assert!(store.find_cycles().is_empty());
	}

	#[test]
	fn test_find_cycles_for() {
		let store = pair_store();
		store.put_property(property("C", 5, 100));
		store.put_search(search("C", 5));

		assert_eq!(store.find_cycles_for("A").len(), 1);
		assert!(store.find_cycles_for("C").is_empty());
		assert!(store.find_cycles_for("nobody").is_empty());
	}

	#[test]
	fn test_snapshot_restore() {
		let store = pair_store();
		store.reject("A", "Z");
		let snapshot = store.snapshot();

		let restored = MatchingStore::default();
		restored.restore(snapshot.clone());

		assert_eq!(restored.stats(), store.stats());
		assert_eq!(restored.find_cycles(), store.find_cycles());
		assert!(restored.is_rejected("A", "Z"));
		assert_eq!(restored.snapshot(), snapshot);
	}

	#[test]
	fn test_restore_replaces_entries() {
		let store = pair_store();
		store.restore(StoreSnapshot::default());

		assert_eq!(store.stats(), StoreStats::default());
		assert!(store.find_cycles().is_empty());
	}

	#[test]
	fn test_restore_keeps_live_rejections() {
		let store = MatchingStore::default();
		let snapshot = pair_store().snapshot();
		assert!(snapshot.rejections.is_empty());

		store.reject("A", "B");
		store.restore(snapshot);

		assert!(store.is_rejected("A", "B"));
		assert!(!store.graph().has_edge("A", "B"));
		assert!(store.find_cycles().is_empty());
		assert_eq!(store.stats().rejections, 1);
	}

	#[test]
	fn test_restore_merges_snapshot_rejections() {
		let source = pair_store();
		source.reject("B", "C");
		let snapshot = source.snapshot();

		let store = MatchingStore::default();
		store.reject("A", "Z");
		store.reject("B", "C");
		store.restore(snapshot);

		assert!(store.is_rejected("A", "Z"));
		assert!(store.is_rejected("B", "C"));
		assert_eq!(store.stats().rejections, 2);
	}

	#[test]
	fn test_error_message() {
		let err = EngineError::InvalidMaxParticipants(7);
		assert_eq!(
			err.to_string(),
			"Invalid max participants: 7 (must be between 2 and 4)"
		);
	}
}
