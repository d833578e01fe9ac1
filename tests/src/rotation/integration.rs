#![cfg(test)]

use std::collections::HashSet;
use std::str::FromStr;
use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::time::Duration;

use rekey_common::policy::ComplexityPolicy;
use rekey_common::rotation::{
    HostTarget, Phrase, PositionMode, RotationStatus, Strategy, TokenKind,
};
use rekey_core::pipeline::RotationPipeline;

use super::doubles::{FleetHost, InMemoryFleet};

const TIMEOUT: Duration = Duration::from_secs(30);

fn pipeline(fleet: &Arc<InMemoryFleet>, strategy: Strategy) -> RotationPipeline {
    let (probe, inventory, identity) = fleet.collaborators();
    RotationPipeline::new(probe, inventory, identity, strategy, TIMEOUT)
}

fn token_strategy(kind: TokenKind, phrase: &str, position: PositionMode) -> Strategy {
    Strategy::Token {
        kind,
        phrase: Phrase::from_str(phrase).expect("valid test phrase"),
        position,
    }
}

fn targets(hosts: &[&str]) -> Vec<HostTarget> {
    hosts
        .iter()
        .map(|h| HostTarget::new(*h, "Administrator"))
        .collect()
}

#[tokio::test]
async fn hostname_append_scenario_end_to_end() {
    let fleet = Arc::new(InMemoryFleet::new().with_host("WKS01", FleetHost::default()));
    let pipeline = pipeline(
        &fleet,
        token_strategy(TokenKind::Hostname, "Recycling*3ftw!", PositionMode::Append),
    );

    let outcomes = pipeline.run(&targets(&["WKS01"]), |_| {}).await;

    assert_eq!(outcomes.len(), 1);
    let outcome = &outcomes[0];
    assert_eq!(outcome.host, "WKS01");
    assert_eq!(outcome.account, "Administrator");
    assert_eq!(outcome.password, "WKS01Recycling*3ftw!");
    assert_eq!(outcome.status, RotationStatus::Successful);

    let applied = fleet.applied.lock().unwrap();
    assert_eq!(
        applied.as_slice(),
        &[(
            "WKS01".to_string(),
            "Administrator".to_string(),
            "WKS01Recycling*3ftw!".to_string()
        )]
    );
}

#[tokio::test]
async fn failing_host_does_not_stop_the_batch() {
    let fleet = Arc::new(
        InMemoryFleet::new()
            .with_host("host1", FleetHost::default())
            .with_host(
                "host2",
                FleetHost {
                    apply_fails: true,
                    ..FleetHost::default()
                },
            )
            .with_host("host3", FleetHost::default()),
    );
    let pipeline = pipeline(&fleet, Strategy::Random);

    let outcomes = pipeline
        .run(&targets(&["host1", "host2", "host3"]), |_| {})
        .await;

    assert_eq!(outcomes.len(), 3);
    assert_eq!(outcomes[0].status, RotationStatus::Successful);
    assert_eq!(outcomes[1].status, RotationStatus::PasswordSetFailed);
    assert_eq!(outcomes[2].status, RotationStatus::Successful);
    // The failed host still got exactly one apply attempt
    assert_eq!(fleet.apply_calls.load(Ordering::SeqCst), 3);
    // And its record keeps the attempted password
    assert!(!outcomes[1].password.is_empty());
}

#[tokio::test]
async fn unreachable_host_is_reported_without_an_apply_call() {
    let fleet = Arc::new(InMemoryFleet::new().with_host(
        "darkhost",
        FleetHost {
            reachable: false,
            ..FleetHost::default()
        },
    ));
    let pipeline = pipeline(&fleet, Strategy::Random);

    let outcomes = pipeline.run(&targets(&["darkhost"]), |_| {}).await;

    assert_eq!(outcomes[0].status, RotationStatus::NetworkConnectionFailed);
    assert!(outcomes[0].password.is_empty());
    assert_eq!(fleet.apply_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn random_mode_sets_unique_compliant_passwords_per_host() {
    let names = ["a1", "a2", "a3", "a4", "a5"];
    let mut fleet = InMemoryFleet::new();
    for name in names {
        fleet = fleet.with_host(name, FleetHost::default());
    }
    let fleet = Arc::new(fleet);
    let pipeline = pipeline(&fleet, Strategy::Random);

    let outcomes = pipeline.run(&targets(&names), |_| {}).await;

    let policy = ComplexityPolicy::generated();
    let mut seen: HashSet<String> = HashSet::new();
    for outcome in &outcomes {
        assert_eq!(outcome.status, RotationStatus::Successful);
        assert!(policy.satisfies(&outcome.password));
        assert!(seen.insert(outcome.password.clone()), "password reused");
    }

    // The password in each record is the password actually set
    let applied = fleet.applied.lock().unwrap();
    for ((host, _account, password), outcome) in applied.iter().zip(&outcomes) {
        assert_eq!(host, &outcome.host);
        assert_eq!(password, &outcome.password);
    }
}

#[tokio::test]
async fn blank_serial_still_rotates_with_the_phrase_alone() {
    let fleet = Arc::new(InMemoryFleet::new().with_host(
        "wks02",
        FleetHost {
            serial: String::new(),
            ..FleetHost::default()
        },
    ));
    let pipeline = pipeline(
        &fleet,
        token_strategy(TokenKind::Serial, "Xy7!pass", PositionMode::Append),
    );

    let outcomes = pipeline.run(&targets(&["wks02"]), |_| {}).await;

    assert_eq!(outcomes[0].status, RotationStatus::Successful);
    assert_eq!(outcomes[0].password, "Xy7!pass");
}

#[tokio::test]
async fn mac_token_prepend_uses_last_adapter() {
    let fleet = Arc::new(InMemoryFleet::new().with_host(
        "wks03",
        FleetHost {
            macs: vec!["AA".to_string(), "BB".to_string(), "CC".to_string()],
            ..FleetHost::default()
        },
    ));
    let pipeline = pipeline(
        &fleet,
        token_strategy(TokenKind::Mac, "Xy7!pass", PositionMode::Prepend),
    );

    let outcomes = pipeline.run(&targets(&["wks03"]), |_| {}).await;

    assert_eq!(outcomes[0].password, "Xy7!passCC");
    assert_eq!(outcomes[0].status, RotationStatus::Successful);
}

#[tokio::test]
async fn inventory_failure_fails_the_set_without_an_apply_call() {
    let fleet = Arc::new(InMemoryFleet::new().with_host(
        "flaky",
        FleetHost {
            inventory_fails: true,
            ..FleetHost::default()
        },
    ));
    let pipeline = pipeline(
        &fleet,
        token_strategy(TokenKind::Serial, "Xy7!pass", PositionMode::Append),
    );

    let outcomes = pipeline.run(&targets(&["flaky"]), |_| {}).await;

    // Failed query, not a blank token: no password was ever derived
    assert_eq!(outcomes[0].status, RotationStatus::PasswordSetFailed);
    assert!(outcomes[0].password.is_empty());
    assert!(
        outcomes[0]
            .detail
            .as_deref()
            .unwrap()
            .contains("inventory query failed")
    );
    assert_eq!(fleet.apply_calls.load(Ordering::SeqCst), 0);
}
