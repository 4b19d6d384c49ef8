mod common;

use actor_selection::framework::mock::TestProbe;
use actor_selection::framework::ActorIdentity;
use actor_selection::selection::{ActorSelection, SelectionError};
use common::{build, leaf, node, start};
use std::time::{Duration, Instant};

#[tokio::test]
async fn test_resolves_an_existing_actor() {
    let (system, mut probe) = start("res-found");
    let refs = build(&system, &mut probe, vec![node("a", vec![leaf("x")])]).await;

    let a = system.resolve_one("/a").await.unwrap();
    assert_eq!(a, refs[0]);

    let x = system
        .actor_selection("a/x")
        .unwrap()
        .resolve_one(Duration::from_secs(1))
        .await
        .unwrap();
    assert_eq!(x.path(), "local://res-found/a/x");

    // Resolution hands back the actor's own reference, not a new handle.
    let again = system.resolve_one("/a/x").await.unwrap();
    assert_eq!(x, again);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_missing_path_fails_fast_with_actor_not_found() {
    let (system, mut probe) = start("res-missing");
    build(&system, &mut probe, vec![node("a", vec![leaf("x")])]).await;
    let selection = system.actor_selection("/a/missing").unwrap();

    let timeout = Duration::from_secs(2);
    let started = Instant::now();
    let result = selection.resolve_one(timeout).await;

    match result {
        Err(SelectionError::ActorNotFound(failed)) => assert_eq!(failed, selection),
        other => panic!("expected ActorNotFound, got {:?}", other),
    }
    // Answered by the negative identify reply, not by the timeout.
    assert!(started.elapsed() < timeout);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_unmatched_wildcard_fails_fast() {
    let (system, mut probe) = start("res-nomatch");
    build(&system, &mut probe, vec![leaf("z")]).await;

    let timeout = Duration::from_secs(2);
    let started = Instant::now();
    let result = system.actor_selection("/w*").unwrap().resolve_one(timeout).await;

    assert!(matches!(result, Err(SelectionError::ActorNotFound(_))));
    assert!(started.elapsed() < timeout);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_silence_times_out_with_actor_not_found() {
    let probe = TestProbe::new("black-hole");
    let selection = ActorSelection::parse(probe.actor_ref(), "somewhere").unwrap();

    let timeout = Duration::from_millis(100);
    let started = Instant::now();
    let result = selection.resolve_one(timeout).await;

    assert!(matches!(result, Err(SelectionError::ActorNotFound(_))));
    assert!(started.elapsed() >= timeout);
}

#[tokio::test]
async fn test_late_reply_after_timeout_is_ignored() {
    let mut remote = TestProbe::new("slow-remote");
    let selection = ActorSelection::parse(remote.actor_ref(), "worker").unwrap();

    let result = selection.resolve_one(Duration::from_millis(50)).await;
    assert!(matches!(result, Err(SelectionError::ActorNotFound(_))));

    // Answer too late: the reply handle is already fixed to failure.
    let envelope = remote.expect_message(Duration::from_millis(10)).await;
    let identify = envelope.message.identify_request().cloned().unwrap();
    let reply_to = envelope.sender.unwrap();
    reply_to.tell(ActorIdentity::found(identify.correlation_id, remote.actor_ref()), None);
    remote.expect_no_message(Duration::from_millis(50)).await;
}

#[tokio::test]
async fn test_wildcard_resolves_to_one_of_the_matches() {
    let (system, mut probe) = start("res-wild");
    let refs = build(&system, &mut probe, vec![leaf("w1"), leaf("w2"), leaf("z")]).await;

    let found = system.resolve_one("/w*").await.unwrap();
    assert!(found == refs[0] || found == refs[1], "resolved {}", found);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_wildcard_with_partial_matches_still_resolves() {
    let (system, mut probe) = start("res-partial");
    build(
        &system,
        &mut probe,
        vec![node("w1", vec![leaf("inbox")]), leaf("w2"), leaf("w3")],
    )
    .await;

    // w2 and w3 have no inbox; their dead ends must not win the race.
    let found = system.resolve_one("/w*/inbox").await.unwrap();
    assert_eq!(found.path(), "local://res-partial/w1/inbox");
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_stopped_actor_no_longer_resolves() {
    let (system, mut probe) = start("res-stopped");
    let refs = build(&system, &mut probe, vec![leaf("a"), leaf("b")]).await;

    system.stop(&refs[0]);

    assert!(matches!(
        system.resolve_one("/a").await,
        Err(SelectionError::ActorNotFound(_))
    ));
    assert_eq!(system.resolve_one("/b").await.unwrap(), refs[1]);
    system.shutdown().await.unwrap();
}
