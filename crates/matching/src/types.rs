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

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier shared by a user's search and the property they offer
pub type UserId = String;

/// Search criteria published by a user
///
/// This is the "want" side of a swap. The transport layer is expected to
/// have validated the entry before it reaches the store; the engine does
/// not re-check field ranges.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchEntry {
	/// Owner of the search (stable key)
	pub user_id: UserId,
	/// Required city, exact match
	pub city_id: u8,
	/// Acceptable property categories (reserved, never consulted)
	#[serde(default)]
	pub property_bits: u8,
	/// Minimum room count, inclusive
	pub min_rooms: u8,
	/// Maximum price, inclusive
	pub max_price: u32,
	/// Required amenities; every set bit must be present on the property
	#[serde(default)]
	pub amenities: u64,
	/// First day the user needs the property (0 = unconstrained)
	#[serde(default)]
	pub date_start: u32,
	/// Last day the user needs the property (0 = unconstrained)
	#[serde(default)]
	pub date_end: u32,
}

/// Property offered by a user
///
/// This is the "offer" side of a swap. By convention `user_id` equals the
/// owning user's search id, but the store does not enforce the pairing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyEntry {
	/// Owner of the property (stable key)
	pub user_id: UserId,
	pub city_id: u8,
	pub rooms: u8,
	pub price: u32,
	#[serde(default)]
	pub amenities: u64,
	/// First day the property can be handed over (0 = always)
	#[serde(default)]
	pub available_from: u32,
	/// Last day the property is available (0 = open-ended)
	#[serde(default)]
	pub available_until: u32,
}

/// A permanent veto: `searcher`'s search is never satisfied by `owner`'s property
///
/// Rejections are directional. `(A, B)` says nothing about `(B, A)`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Rejection {
	pub searcher: UserId,
	pub owner: UserId,
}

impl Rejection {
	pub fn new(searcher: impl Into<UserId>, owner: impl Into<UserId>) -> Self {
		Self {
			searcher: searcher.into(),
			owner: owner.into(),
		}
	}
}

/// A closed swap loop `[v0, v1, ..., vk-1, v0]`
///
/// Every user in the loop hands their property to the previous user and
/// receives the next user's property: edge `vi -> v(i+1)` means `vi`'s
/// search is satisfied by `v(i+1)`'s property. The start is repeated at the
/// end, so a loop between two users has three entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SwapCycle(Vec<UserId>);

impl SwapCycle {
	/// Close an open path by repeating its first element
	pub(crate) fn close(path: &[UserId]) -> Self {
		let mut ids = Vec::with_capacity(path.len() + 1);
		ids.extend_from_slice(path);
		if let Some(start) = path.first() {
			ids.push(start.clone());
		}
		Self(ids)
	}

	/// Full closed sequence, start repeated at the end
	pub fn ids(&self) -> &[UserId] {
		&self.0
	}

	/// Distinct participants in loop order (closing repetition dropped)
	pub fn participants(&self) -> &[UserId] {
		match self.0.split_last() {
			Some((_, open)) => open,
			None => &[],
		}
	}

	pub fn participant_count(&self) -> usize {
		self.participants().len()
	}

	pub fn contains(&self, user_id: &str) -> bool {
		self.participants().iter().any(|id| id == user_id)
	}

	/// Directed edges `(searcher, owner)` traversed by the loop
	pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
		self.0.windows(2).map(|w| (w[0].as_str(), w[1].as_str()))
	}

	/// Rotation-independent key, e.g. `"A->B->C"`
	pub fn key(&self) -> String {
		crate::cycle::canonical_rotation(self.participants()).join("->")
	}

	pub fn into_inner(self) -> Vec<UserId> {
		self.0
	}
}

impl fmt::Display for SwapCycle {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0.join(" -> "))
	}
}
