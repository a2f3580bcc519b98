use genz_core::{Notification, Post, Reactions, User};

#[test]
fn post_serialization_uses_expected_wire_fields() {
    let post = Post::new("p1", "Hello world", "This is my first post", "u1")
        .with_reaction(0)
        .unwrap();

    let json = serde_json::to_value(&post).unwrap();
    assert_eq!(json["id"], "p1");
    assert_eq!(json["title"], "Hello world");
    assert_eq!(json["authorId"], "u1");
    assert_eq!(json["reactions"], serde_json::json!([1, 0, 0, 0, 0]));

    let decoded: Post = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, post);
}

#[test]
fn deserialize_rejects_nonzero_locked_slot() {
    let value = serde_json::json!({
        "id": "p9",
        "title": "bad",
        "content": "",
        "authorId": "u1",
        "reactions": [0, 0, 0, 0, 3]
    });

    let err = serde_json::from_value::<Post>(value).unwrap_err();
    assert!(
        err.to_string().contains("reaction slot 4 is locked"),
        "unexpected error: {err}"
    );
}

#[test]
fn deserialize_rejects_wrong_reaction_count() {
    let err = serde_json::from_value::<Reactions>(serde_json::json!([0, 0])).unwrap_err();
    assert!(
        err.to_string().contains("exactly 5 counters"),
        "unexpected error: {err}"
    );
}

#[test]
fn user_and_notification_wire_shapes() {
    let user = serde_json::to_value(User::new("u1", "Alice")).unwrap();
    assert_eq!(user, serde_json::json!({ "id": "u1", "name": "Alice" }));

    let note = serde_json::to_value(Notification::new("n1", "Alice liked your post")).unwrap();
    assert_eq!(
        note,
        serde_json::json!({ "id": "n1", "text": "Alice liked your post" })
    );
}
