//! Scenario: The Webserver Misbehaves
//!
//! Journey: The state webserver rejects requests at either end of a run.
//!
//! Success Criteria:
//! - A failed fetch stops the run before anything changes
//! - A failed push after the update is reported as stale remote state

use victor::{Credentials, Phase, VictorError};

use crate::common::*;

/// SCENARIO: The webserver refuses to serve the state
#[test]
fn scenario_fetch_refused_leaves_infrastructure_alone() {
    let env = TestEnv::new();
    let server = StateServer::with_state(&snapshot_of(&["ctfd"]));
    server.fail_gets_with(403);
    let world = world(&["ctfd"]);

    let err = orchestrator(&world, Credentials::basic("ci", "wrong"))
        .run(&options(&env.program_dir(), &server))
        .expect_err("run fails");

    assert_eq!(err.phase(), Phase::Fetch);
    assert!(err.to_string().contains("403"), "{}", err);
    assert!(world.borrow().live.is_empty());
    assert_eq!(server.requests().len(), 1);
}

/// SCENARIO: The update went through but the new state could not be stored
#[test]
fn scenario_push_refused_after_update_is_stale() {
    let env = TestEnv::new();
    let server = StateServer::start();
    server.fail_puts_with(500);
    let world = world(&["ctfd"]);

    let err = orchestrator(&world, Credentials::none())
        .run(&options(&env.program_dir(), &server))
        .expect_err("run fails");

    assert!(matches!(err, VictorError::RemotePush(_)));
    assert!(err.infrastructure_touched());
    assert!(err.to_string().contains("stale"), "{}", err);

    // infrastructure changed, the webserver still has nothing
    assert!(world.borrow().live.contains("ctfd"));
    assert_eq!(server.stored(), None);
}

/// SCENARIO: A corrupt state file is rejected at import
#[test]
fn scenario_corrupt_remote_state_is_rejected() {
    let env = TestEnv::new();
    let server = StateServer::with_state(b"<html>maintenance</html>");
    let world = world(&["ctfd"]);

    let err = orchestrator(&world, Credentials::none())
        .run(&options(&env.program_dir(), &server))
        .expect_err("run fails");

    assert!(matches!(
        err,
        VictorError::StateFormat {
            phase: Phase::Import,
            ..
        }
    ));
    assert!(world.borrow().live.is_empty());
}
