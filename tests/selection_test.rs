mod common;

use actor_selection::framework::{ActorRef, Envelope, Message, Payload, Recipient};
use actor_selection::selection::{ActorSelection, SelectionError};
use common::{build, delivered, deliveries, leaf, node, start, Relay, QUIET};

/// Opaque stand-in for a transport: passes every envelope on untouched.
struct Forwarder {
    path: String,
    target: ActorRef,
}

impl Recipient for Forwarder {
    fn path(&self) -> &str {
        &self.path
    }

    fn deliver(&self, envelope: Envelope) {
        self.target.deliver(envelope);
    }
}

#[tokio::test]
async fn test_child_name_delivers_exactly_once() {
    let (system, mut probe) = start("sel-name");
    build(&system, &mut probe, vec![node("a", vec![leaf("x"), leaf("y")])]).await;

    system.actor_selection("/a/x").unwrap().tell(Payload::new("hi"), None);

    assert_eq!(
        deliveries(&mut probe, 1).await,
        vec![delivered("local://sel-name/a/x", "hi")]
    );
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_missing_child_is_a_silent_drop() {
    let (system, mut probe) = start("sel-missing");
    build(&system, &mut probe, vec![node("a", vec![leaf("x")])]).await;

    system.actor_selection("/a/missing").unwrap().tell(Payload::new("hi"), None);
    system.actor_selection("/nope/x").unwrap().tell(Payload::new("hi"), None);

    probe.expect_no_message(QUIET).await;
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_wildcard_fans_out_to_matching_children_only() {
    let (system, mut probe) = start("sel-wild");
    build(&system, &mut probe, vec![leaf("w1"), leaf("w2"), leaf("z")]).await;

    system.actor_selection("/w*").unwrap().tell(Payload::new("hi"), None);

    assert_eq!(
        deliveries(&mut probe, 2).await,
        vec![
            delivered("local://sel-wild/w1", "hi"),
            delivered("local://sel-wild/w2", "hi"),
        ]
    );
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_wildcard_in_the_middle_of_a_path() {
    let (system, mut probe) = start("sel-mid");
    build(
        &system,
        &mut probe,
        vec![
            node("w1", vec![leaf("inbox"), leaf("outbox")]),
            node("w2", vec![leaf("inbox")]),
            node("z", vec![leaf("inbox")]),
        ],
    )
    .await;

    system.actor_selection("/w?/inbox").unwrap().tell(Payload::new("hi"), None);

    assert_eq!(
        deliveries(&mut probe, 2).await,
        vec![
            delivered("local://sel-mid/w1/inbox", "hi"),
            delivered("local://sel-mid/w2/inbox", "hi"),
        ]
    );
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_parent_hops_from_a_leaf() {
    let (system, mut probe) = start("sel-parent");
    build(&system, &mut probe, vec![node("a", vec![node("b", vec![leaf("c")])])]).await;
    let c = system.resolve_one("/a/b/c").await.unwrap();

    ActorSelection::parse(c.clone(), "..").unwrap().tell(Payload::new("up"), None);
    assert_eq!(
        deliveries(&mut probe, 1).await,
        vec![delivered("local://sel-parent/a/b", "up")]
    );

    ActorSelection::parse(c, "../..").unwrap().tell(Payload::new("up2"), None);
    assert_eq!(
        deliveries(&mut probe, 1).await,
        vec![delivered("local://sel-parent/a", "up2")]
    );
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_relative_and_absolute_paths_from_inside_an_actor() {
    let (system, mut probe) = start("sel-ctx");
    build(
        &system,
        &mut probe,
        vec![node("a", vec![leaf("x"), leaf("y")]), leaf("z")],
    )
    .await;
    let x = system.resolve_one("a/x").await.unwrap();

    x.tell(Payload::new(Relay { path: "../y", text: "sibling" }), None);
    assert_eq!(
        deliveries(&mut probe, 1).await,
        vec![delivered("local://sel-ctx/a/y", "sibling")]
    );

    x.tell(Payload::new(Relay { path: "/z", text: "absolute" }), None);
    assert_eq!(
        deliveries(&mut probe, 1).await,
        vec![delivered("local://sel-ctx/z", "absolute")]
    );
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_opaque_hand_off_continues_on_the_other_side() {
    let (system, mut probe) = start("sel-opaque");
    let refs = build(&system, &mut probe, vec![node("a", vec![leaf("x")])]).await;

    let remote_a = ActorRef::new(Forwarder {
        path: "remote://sel-opaque/a".to_string(),
        target: refs[0].clone(),
    });
    assert!(!remote_a.is_local());

    // The forwarder cannot be walked locally, so "x" travels inside a
    // SelectionMessage and `a` consumes it on arrival.
    let selection = ActorSelection::parse(remote_a, "x").unwrap();
    selection.tell(Payload::new("over the wire"), None);
    assert_eq!(
        deliveries(&mut probe, 1).await,
        vec![delivered("local://sel-opaque/a/x", "over the wire")]
    );

    let x = selection.resolve_one(common::TIMEOUT).await.unwrap();
    assert_eq!(x.path(), "local://sel-opaque/a/x");
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_poison_pill_through_a_wildcard() {
    let (system, mut probe) = start("sel-stop");
    build(&system, &mut probe, vec![leaf("w1"), leaf("w2"), leaf("keep")]).await;

    system.actor_selection("/w*").unwrap().tell(Message::PoisonPill, None);

    for path in ["/w1", "/w2"] {
        assert!(matches!(
            system.resolve_one(path).await,
            Err(SelectionError::ActorNotFound(_))
        ));
    }
    assert!(system.resolve_one("/keep").await.is_ok());
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_malformed_glob_fails_before_sending() {
    let (system, mut probe) = start("sel-glob");
    build(&system, &mut probe, vec![leaf("a")]).await;

    let err = system.actor_selection("/a/[*").unwrap_err();
    assert!(matches!(err, SelectionError::InvalidPattern { ref pattern, .. } if pattern == "[*"));

    probe.expect_no_message(QUIET).await;
    system.shutdown().await.unwrap();
}
