//! Scenario: First Deployment of a Stack
//!
//! Journey: A CI pipeline deploys a CTF platform for the first time.
//!
//! Steps:
//! 1. The webserver holds no state for the stack
//! 2. Victor installs the plugins and applies the configuration
//! 3. The update creates every resource the program declares
//! 4. Outputs land in a file for the next CI step
//! 5. The new state is pushed to the webserver
//!
//! Success Criteria:
//! - GET then PUT, both authenticated and identified
//! - The pushed state tracks every created resource
//! - A second run with the same inputs is a no-op

use victor::{ConfigEntry, Credentials, OutputsDestination, PluginRef};

use crate::common::*;

/// SCENARIO: Nothing on the webserver yet, the stack starts fresh
#[test]
fn scenario_fresh_stack_is_created_and_pushed() {
    let env = TestEnv::new();
    let server = StateServer::start();
    let world = world(&["ctfd", "redis"]);

    let outputs_path = env.path("outputs.json");
    let options = options(&env.program_dir(), &server)
        .with_plugins(vec![PluginRef::new("kubernetes", "v4.5.5")])
        .with_configuration(vec![
            ConfigEntry::new("env", "prod"),
            ConfigEntry::new("token", "hunter2"),
        ])
        .with_outputs(Some(OutputsDestination::File(outputs_path.clone())));

    let report = orchestrator(&world, Credentials::basic("ci", "s3cr3t"))
        .run(&options)
        .expect("first run succeeds");

    // Step 1: fresh stack, nothing to tear down
    assert!(!report.restored);
    assert!(!report.destroyed);

    // Step 2: plugins from the default server, configuration applied
    assert_eq!(
        world.borrow().installed,
        vec![("kubernetes v4.5.5".to_string(), None)]
    );
    assert_eq!(world.borrow().config.get("env").map(String::as_str), Some("prod"));

    // Step 3: everything declared is running
    assert!(world.borrow().live.contains("ctfd"));
    assert!(world.borrow().live.contains("redis"));

    // Step 4: outputs file for downstream steps
    let written = std::fs::read_to_string(&outputs_path).expect("outputs written");
    insta::assert_snapshot!(
        written,
        @r#"{"env":{"Value":"prod","Secret":false},"resources":{"Value":2,"Secret":false},"token":{"Value":"hunter2","Secret":true}}"#
    );
    assert!(report.outputs_exported);

    // Step 5: GET (404) then PUT of the new state
    let requests = server.requests();
    let methods: Vec<&str> = requests.iter().map(|r| r.method.as_str()).collect();
    assert_eq!(methods, vec!["GET", "PUT"]);
    for request in &requests {
        assert_eq!(request.path, "/state/victor.json");
        assert_eq!(request.header("authorization"), Some("Basic Y2k6czNjcjN0"));
        assert_eq!(request.header("user-agent"), Some("CTFer.io Victor (0.0.0-test)"));
    }
    assert_eq!(server.stored(), Some(snapshot_of(&["ctfd", "redis"])));
}

/// SCENARIO: Running again with unchanged inputs restores and changes nothing
#[test]
fn scenario_second_run_restores_without_drift() {
    let env = TestEnv::new();
    let server = StateServer::start();
    let world = world(&["ctfd"]);

    let first = orchestrator(&world, Credentials::none())
        .run(&options(&env.program_dir(), &server))
        .expect("first run");
    assert!(!first.restored);

    // a new CI job: fresh engine state, same live infrastructure
    world.borrow_mut().tracked.clear();

    let second = orchestrator(&world, Credentials::none())
        .run(&options(&env.program_dir(), &server))
        .expect("second run");

    assert!(second.restored);
    assert!(!second.has_drift());
    assert!(!second.destroyed);
    assert_eq!(second.drift.count("same"), 1);
    assert_eq!(second.pushed_digest, first.pushed_digest);
    assert_eq!(world.borrow().destroyed_runs, 0);
}

/// SCENARIO: Without credentials no Authorization header is ever sent
#[test]
fn scenario_anonymous_webserver() {
    let env = TestEnv::new();
    let server = StateServer::start();
    let world = world(&["ctfd"]);

    orchestrator(&world, Credentials::new(Some("ci".to_string()), None))
        .run(&options(&env.program_dir(), &server))
        .expect("run succeeds");

    assert!(server
        .requests()
        .iter()
        .all(|r| r.header("authorization").is_none()));
}
