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

use flatswap_matching::{PropertyEntry, SearchEntry};

#[derive(Clone, Copy)]
pub enum Scenario {
	/// Few cities, loose constraints: dense graph, many cycles
	Dense,
	/// Many cities, tight prices: sparse graph
	Sparse,
}

/// Deterministic pool generator
///
/// Uses a fixed linear congruential sequence so every run sees the same pool.
pub struct PoolGenerator {
	state: u64,
	scenario: Scenario,
	counter: u64,
}

impl PoolGenerator {
	pub fn new(seed: u64, scenario: Scenario) -> Self {
		Self {
			state: seed,
			scenario,
			counter: 0,
		}
	}

	fn next_u32(&mut self) -> u32 {
		self.state = self
			.state
			.wrapping_mul(6364136223846793005)
			.wrapping_add(1442695040888963407);
		(self.state >> 33) as u32
	}

	pub fn next_user(&mut self) -> (SearchEntry, PropertyEntry) {
		self.counter += 1;
		let user_id = format!("user-{:06}", self.counter);

		let (cities, price_slack) = match self.scenario {
			Scenario::Dense => (8, 400),
			Scenario::Sparse => (40, 50),
		};

		let home = (self.next_u32() % cities) as u8;
		let wanted = (self.next_u32() % cities) as u8;
		let price = 500 + self.next_u32() % 500;
		let rooms = 1 + (self.next_u32() % 4) as u8;

		let search = SearchEntry {
			user_id: user_id.clone(),
			city_id: wanted,
			min_rooms: 1 + (self.next_u32() % 2) as u8,
			max_price: price + price_slack,
			amenities: u64::from(self.next_u32() % 2),
			..Default::default()
		};
		let property = PropertyEntry {
			user_id,
			city_id: home,
			rooms,
			price,
			amenities: u64::from(self.next_u32() % 4),
			..Default::default()
		};
		(search, property)
	}
}
