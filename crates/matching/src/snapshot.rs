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

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{PropertyEntry, Rejection, SearchEntry};

/// Error types for snapshot encoding
#[derive(Debug, Error)]
pub enum SnapshotError {
	#[error("Failed to encode snapshot: {0}")]
	Encode(#[source] serde_json::Error),
	#[error("Failed to decode snapshot: {0}")]
	Decode(#[source] serde_json::Error),
}

/// Point-in-time copy of the whole store
///
/// The store keeps nothing on disk. A collaborator that wants its pool to
/// survive a restart takes a snapshot, persists it however it likes, and
/// hands it back through `MatchingStore::restore` before the next cycle
/// search.
///
/// Entries are listed in ascending user id order and rejections by
/// searcher then owner, so two snapshots of the same state encode to the
/// same bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSnapshot {
	pub searches: Vec<SearchEntry>,
	pub properties: Vec<PropertyEntry>,
	pub rejections: Vec<Rejection>,
}

impl StoreSnapshot {
	pub fn to_json(&self) -> Result<Vec<u8>, SnapshotError> {
		serde_json::to_vec(self).map_err(SnapshotError::Encode)
	}

	pub fn from_json(bytes: &[u8]) -> Result<Self, SnapshotError> {
		serde_json::from_slice(bytes).map_err(SnapshotError::Decode)
	}
}
