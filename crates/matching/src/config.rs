// Copyright 2025 chenjjiaa
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

use crate::cycle::MAX_PARTICIPANTS;
use crate::engine::{EngineConfig, EngineError};

// Logging configuration constants
/// Default log level (can be overridden by RUST_LOG environment variable)
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log directory component name
pub const LOG_COMPONENT_NAME: &str = "matching";

/// Default console output enabled (can be overridden by LOG_TO_CONSOLE environment variable)
pub const DEFAULT_LOG_TO_CONSOLE: bool = false;

/// Environment prefix for matching settings (`MATCHING_MAX_PARTICIPANTS`, ...)
pub const ENV_PREFIX: &str = "MATCHING";

/// Matching service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchingConfig {
	/// Largest swap loop to report (2..=4)
	pub max_participants: usize,
	/// Log every write at debug level
	pub verbose_logging: bool,
}

impl Default for MatchingConfig {
	fn default() -> Self {
		Self {
			max_participants: MAX_PARTICIPANTS,
			verbose_logging: false,
		}
	}
}

impl MatchingConfig {
	/// Load configuration from environment variables
	pub fn from_env() -> Result<Self, config::ConfigError> {
		dotenv::dotenv().ok();

		let cfg = config::Config::builder()
			.add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
			.build()?;

		cfg.try_deserialize()
	}

	/// Load configuration from file
	pub fn from_file(path: &str) -> Result<Self, config::ConfigError> {
		dotenv::dotenv().ok();

		let cfg = config::Config::builder()
			.add_source(config::File::with_name(path))
			.add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
			.build()?;

		cfg.try_deserialize()
	}

	/// Validated engine settings
	pub fn engine_config(&self) -> Result<EngineConfig, EngineError> {
		let engine = EngineConfig {
			max_participants: self.max_participants,
			verbose_logging: self.verbose_logging,
		};
		engine.validate()?;
		Ok(engine)
	}
}
