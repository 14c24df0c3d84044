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

//! Flatswap Matching Engine
//!
//! This crate finds swap cycles among users who each offer one property
//! and search for another. A swap cycle is a closed loop of 2 to 4 users
//! where every user's search is satisfied by the next user's property.
//!
//! Architecture:
//! - Compatibility predicate: pure yes/no filter between a search and a property
//! - Rejection set: permanent directional vetoes layered on the predicate
//! - Graph builder: deterministic directed compatibility graph
//! - Cycle finder: bounded DFS with rotation-invariant deduplication
//! - Matching store: one reader/writer lock over all of the above
//!
//! The store is purely in-memory and transport-agnostic; front ends share
//! an `Arc<MatchingStore>` and validate entries before handing them over.

pub mod compat;
pub mod config;
pub mod cycle;
pub mod engine;
pub mod graph;
pub mod logging;
pub mod rejection;
pub mod snapshot;
pub mod types;

pub use compat::is_compatible;
pub use cycle::{MAX_PARTICIPANTS, MIN_PARTICIPANTS, canonical_rotation, find_cycles};
pub use engine::{EngineConfig, EngineError, MatchingStore, StoreState, StoreStats};
pub use graph::{SwapGraph, build_graph};
pub use rejection::RejectionSet;
pub use snapshot::{SnapshotError, StoreSnapshot};
pub use types::*;
