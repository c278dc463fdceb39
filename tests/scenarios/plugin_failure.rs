//! Scenario: A Plugin Cannot Be Installed
//!
//! Journey: The pipeline pins a plugin version that does not exist.
//!
//! Steps:
//! 1. Two plugins are requested, the first one is broken
//! 2. Victor still attempts the second one
//! 3. The run fails before touching the stack
//!
//! Success Criteria:
//! - The error lists every plugin with its outcome
//! - The webserver is never contacted
//! - Nothing is created

use victor::{Credentials, Phase, PluginRef, VictorError};

use crate::common::*;

/// SCENARIO: One broken plugin fails the run after all installs were tried
#[test]
fn scenario_broken_plugin_fails_fast_without_state_access() {
    let env = TestEnv::new();
    let server = StateServer::start();
    let world = world(&["ctfd"]);
    world.borrow_mut().broken_plugins.insert("kubernetes".to_string());

    let options = options(&env.program_dir(), &server)
        .with_plugins(vec![
            PluginRef::new("kubernetes", "v0.0.0-missing"),
            PluginRef::new("random", "v4.16.0"),
        ])
        .with_plugin_server(Some("https://plugins.ctfer.io".to_string()));

    let err = orchestrator(&world, Credentials::none())
        .run(&options)
        .expect_err("run fails");

    assert!(matches!(err, VictorError::PluginInstall(_)));
    assert_eq!(err.phase(), Phase::PluginInstall);
    assert!(!err.infrastructure_touched());

    let message = err.to_string();
    assert!(message.contains("1 of 2 plugin install attempts failed"), "{}", message);
    assert!(message.contains("kubernetes v0.0.0-missing:"), "{}", message);
    assert!(message.contains("random v4.16.0: ok"), "{}", message);

    // the healthy plugin was installed from the override server
    assert_eq!(
        world.borrow().installed,
        vec![(
            "random v4.16.0".to_string(),
            Some("https://plugins.ctfer.io".to_string())
        )]
    );

    assert!(server.requests().is_empty());
    assert!(world.borrow().live.is_empty());
}
