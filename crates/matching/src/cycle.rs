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

//! Bounded swap-cycle enumeration
//!
//! Every source of the graph is tried as a cycle start, in ascending id
//! order. From there a depth-first walk extends a simple path one edge at
//! a time (targets also in ascending order). An edge back to the start
//! closes a cycle once the path holds at least two users. Paths never grow
//! beyond `max_participants`.
//!
//! The same loop is reached once per rotation, so each hit is reduced to a
//! canonical rotation (smallest id first) and only the first hit is kept.
//! The reverse traversal of a loop uses different edges and is a distinct
//! cycle.

use std::collections::HashSet;

use crate::{
	graph::SwapGraph,
	types::{SwapCycle, UserId},
};

/// Smallest loop worth reporting
pub const MIN_PARTICIPANTS: usize = 2;

/// Hard cap on loop size
pub const MAX_PARTICIPANTS: usize = 4;

/// Rotate an open loop so it starts at its smallest id
pub fn canonical_rotation(participants: &[UserId]) -> Vec<UserId> {
	let Some(pivot) = participants
		.iter()
		.enumerate()
		.min_by(|(_, a), (_, b)| a.cmp(b))
		.map(|(idx, _)| idx)
	else {
		return Vec::new();
	};

	participants[pivot..]
		.iter()
		.chain(&participants[..pivot])
		.cloned()
		.collect()
}

/// Enumerate distinct swap cycles of `MIN_PARTICIPANTS..=max_participants` users
///
/// `max_participants` is clamped to `MAX_PARTICIPANTS`. Output order is
/// fully determined by the graph.
pub fn find_cycles(graph: &SwapGraph, max_participants: usize) -> Vec<SwapCycle> {
	// Setup
	let mut search = CycleSearch {
		graph,
		max_participants: max_participants.min(MAX_PARTICIPANTS),
		seen: HashSet::new(),
		cycles: Vec::new(),
	};

	// Walk from every source; rotations are collapsed in `record`
	let mut path = Vec::with_capacity(search.max_participants);
	for start in graph.nodes() {
		path.push(start.clone());
		search.extend(start, &mut path);
		path.clear();
	}

	search.cycles
}

struct CycleSearch<'a> {
	graph: &'a SwapGraph,
	max_participants: usize,
	/// Canonical rotations already reported
	seen: HashSet<Vec<UserId>>,
	cycles: Vec<SwapCycle>,
}

impl CycleSearch<'_> {
	fn extend(&mut self, start: &str, path: &mut Vec<UserId>) {
		let graph = self.graph;
		let Some(last) = path.last() else {
			return;
		};

		for next in graph.neighbors(last) {
			// Edge back to the start closes the loop
			if next == start {
				if path.len() >= MIN_PARTICIPANTS {
					self.record(path);
				}
			// Otherwise go deeper while the path is simple and under the cap
			} else if path.len() < self.max_participants && !path.contains(next) {
				path.push(next.clone());
				self.extend(start, path);
				path.pop();
			}
		}
	}

	fn record(&mut self, path: &[UserId]) {
		// Keep only the first rotation seen
		if self.seen.insert(canonical_rotation(path)) {
			self.cycles.push(SwapCycle::close(path));
		}
	}
}
