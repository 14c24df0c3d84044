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

use serde::Serialize;

use crate::{
	compat::is_compatible,
	rejection::RejectionSet,
	types::{PropertyEntry, SearchEntry, UserId},
};

/// Directed compatibility graph
///
/// An edge `u -> v` means u's search is satisfied by v's property and the
/// pair has not been rejected. Sources and each target list are kept in
/// ascending id order, so a walk over the graph is reproducible for a
/// fixed input.
///
/// Only users with at least one outgoing edge appear as sources.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SwapGraph {
	adjacency: BTreeMap<UserId, Vec<UserId>>,
}

impl SwapGraph {
	/// Outgoing edges of `user_id`, ascending
	pub fn neighbors(&self, user_id: &str) -> &[UserId] {
		self.adjacency
			.get(user_id)
			.map(Vec::as_slice)
			.unwrap_or_default()
	}

	/// Sources in ascending order
	pub fn nodes(&self) -> impl Iterator<Item = &UserId> {
		self.adjacency.keys()
	}

	pub fn has_edge(&self, from: &str, to: &str) -> bool {
		self.neighbors(from).iter().any(|id| id == to)
	}

	pub fn node_count(&self) -> usize {
		self.adjacency.len()
	}

	pub fn edge_count(&self) -> usize {
		self.adjacency.values().map(Vec::len).sum()
	}

	pub fn is_empty(&self) -> bool {
		self.adjacency.is_empty()
	}
}

/// Build the compatibility graph over every search/property pair
///
/// O(S·P) predicate evaluations. Self-loops are never added. Because both
/// input maps iterate in key order, targets are pushed already sorted.
pub fn build_graph(
	searches: &BTreeMap<UserId, SearchEntry>,
	properties: &BTreeMap<UserId, PropertyEntry>,
	rejections: &RejectionSet,
) -> SwapGraph {
	let mut adjacency = BTreeMap::new();

	for (searcher, search) in searches {
		// Compatible, non-rejected owners other than the searcher
		let targets: Vec<UserId> = properties
			.iter()
			.filter(|(owner, property)| {
				*owner != searcher
					&& is_compatible(search, property)
					&& !rejections.is_rejected(searcher, owner)
			})
			.map(|(owner, _)| owner.clone())
			.collect();

		// Sources without edges stay out of the graph
		if !targets.is_empty() {
			adjacency.insert(searcher.clone(), targets);
		}
	}

	SwapGraph { adjacency }
}
