//! Use Case Factory
//!
//! Creates services and use cases with infrastructure dependencies wired up.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use crate::application::DeployUseCase;
use crate::config::Config;
use crate::domain::ports::DeployEventSink;
use crate::domain::services::PathResolver;
use crate::infrastructure::{ConsoleEventSink, JsonEventSink, LocalFs};

/// Concrete deploy use case backed by the local disk
pub type ConcreteDeployUseCase = DeployUseCase<LocalFs>;

/// Path resolver using the configured mount strategy and fallback
pub fn create_path_resolver(config: &Config) -> PathResolver {
    PathResolver::new(config.mount_strategy()).with_fallback_opt(config.fallback_path())
}

/// Deploy use case that stops between items once `running` is cleared
pub fn create_deploy_use_case(running: Arc<AtomicBool>) -> ConcreteDeployUseCase {
    DeployUseCase::new(LocalFs::new()).with_running_flag(running)
}

/// NDJSON events for `--json`, human lines otherwise
pub fn create_event_sink(json: bool) -> Box<dyn DeployEventSink> {
    if json {
        Box::new(JsonEventSink::stdout())
    } else {
        Box::new(ConsoleEventSink::stdout())
    }
}
