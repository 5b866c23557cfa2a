// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2026 Marquee

use std::{
	error::Error,
	fmt::{self, Display, Formatter},
	time::Duration,
};

pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Health of a running subsystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
	Healthy,
	Failed {
		description: String,
	},
}

impl HealthStatus {
	pub fn is_healthy(&self) -> bool {
		matches!(self, HealthStatus::Healthy)
	}
}

impl Display for HealthStatus {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			HealthStatus::Healthy => f.write_str("healthy"),
			HealthStatus::Failed {
				description,
			} => write!(f, "failed: {}", description),
		}
	}
}

#[derive(Debug, thiserror::Error)]
pub enum SubsystemError {
	#[error("{subsystem} subsystem failed to start: {source}")]
	Start {
		subsystem: &'static str,
		#[source]
		source: BoxError,
	},

	#[error("{subsystem} subsystem did not stop within {grace:?}")]
	ShutdownTimeout {
		subsystem: &'static str,
		grace: Duration,
	},
}

/// A component with an explicit start/stop lifecycle.
///
/// `start` is idempotent. `shutdown` stops accepting new work and waits for
/// in-flight work up to the subsystem's own grace period.
pub trait Subsystem: Send {
	fn name(&self) -> &'static str;

	fn start(&mut self) -> Result<(), SubsystemError>;

	fn shutdown(&mut self) -> Result<(), SubsystemError>;

	fn is_running(&self) -> bool;

	fn health_status(&self) -> HealthStatus;
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_health_status_display() {
		assert_eq!(HealthStatus::Healthy.to_string(), "healthy");
		let failed = HealthStatus::Failed {
			description: "Not running".to_string(),
		};
		assert_eq!(failed.to_string(), "failed: Not running");
		assert!(!failed.is_healthy());
	}

	#[test]
	fn test_shutdown_timeout_message() {
		let err = SubsystemError::ShutdownTimeout {
			subsystem: "Http",
			grace: Duration::from_secs(9),
		};
		assert_eq!(err.to_string(), "Http subsystem did not stop within 9s");
	}
}
