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

use std::collections::{BTreeMap, BTreeSet};

use crate::types::{Rejection, UserId};

/// Set of vetoed directed pairs `(searcher, owner)`
///
/// Layered on top of the compatibility predicate: an edge
/// `searcher -> owner` exists only if the pair has not been rejected.
///
/// Key semantic constraints:
/// - Insertion is idempotent
/// - Rejections are directional
/// - There is no removal; a rejection lives as long as the set
/// - Unknown user ids are accepted and simply have no effect until
///   matching entries show up
#[derive(Debug, Clone, Default)]
pub struct RejectionSet {
	/// searcher -> owners whose property the searcher refused
	by_searcher: BTreeMap<UserId, BTreeSet<UserId>>,
	len: usize,
}

impl RejectionSet {
	pub fn new() -> Self {
		Self::default()
	}

	/// Record that `searcher` never wants `owner`'s property
	///
	/// Returns `true` if the pair was not already present.
	pub fn reject(&mut self, searcher: &str, owner: &str) -> bool {
		let inserted = self
			.by_searcher
			.entry(searcher.to_string())
			.or_default()
			.insert(owner.to_string());
		if inserted {
			self.len += 1;
		}
		inserted
	}

	pub fn is_rejected(&self, searcher: &str, owner: &str) -> bool {
		self.by_searcher
			.get(searcher)
			.is_some_and(|owners| owners.contains(owner))
	}

	/// Number of distinct rejected pairs
	pub fn len(&self) -> usize {
		self.len
	}

	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	/// All pairs, ordered by searcher then owner
	pub fn iter(&self) -> impl Iterator<Item = Rejection> + '_ {
		self.by_searcher.iter().flat_map(|(searcher, owners)| {
			owners
				.iter()
				.map(move |owner| Rejection::new(searcher.clone(), owner.clone()))
		})
	}
}

impl Extend<Rejection> for RejectionSet {
	fn extend<I: IntoIterator<Item = Rejection>>(&mut self, iter: I) {
		for rejection in iter {
			self.reject(&rejection.searcher, &rejection.owner);
		}
	}
}

impl FromIterator<Rejection> for RejectionSet {
	fn from_iter<I: IntoIterator<Item = Rejection>>(iter: I) -> Self {
		let mut set = Self::new();
		set.extend(iter);
		set
	}
}
