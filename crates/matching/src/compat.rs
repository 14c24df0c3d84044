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

//! Compatibility predicate between a search and a property
//!
//! A property satisfies a search when all of the following hold:
//! - same city
//! - at least `min_rooms` rooms
//! - price at most `max_price`
//! - every amenity bit the search requires is set on the property
//! - the property's availability covers the requested dates
//!
//! There is no scoring: the answer is a plain yes/no, which keeps the
//! compatibility graph boolean.

use crate::types::{PropertyEntry, SearchEntry};

/// Day value meaning "no bound"
const UNBOUNDED: u32 = 0;

/// Check whether `property` satisfies `search`
pub fn is_compatible(search: &SearchEntry, property: &PropertyEntry) -> bool {
	search.city_id == property.city_id
		&& property.rooms >= search.min_rooms
		&& property.price <= search.max_price
		&& search.amenities & property.amenities == search.amenities
		&& covers_dates(search, property)
}

/// Availability containment check
///
/// Each bound is only compared when both sides specify it. A missing bound
/// on either side never blocks a match.
fn covers_dates(search: &SearchEntry, property: &PropertyEntry) -> bool {
	let start_ok = search.date_start == UNBOUNDED
		|| property.available_from == UNBOUNDED
		|| property.available_from <= search.date_start;

	let end_ok = search.date_end == UNBOUNDED
		|| property.available_until == UNBOUNDED
		|| property.available_until >= search.date_end;

	start_ok && end_ok
}
