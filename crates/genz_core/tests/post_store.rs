use genz_core::{
    InMemoryPostRepository, Post, PostPatch, PostStore, SequentialIdSource, LOCKED_REACTION_SLOT,
};
use std::sync::Arc;

fn seeded_store() -> PostStore {
    PostStore::with_id_source(
        InMemoryPostRepository::with_posts(genz_core::seed::seed_posts()),
        Box::new(SequentialIdSource::new()),
    )
}

fn snapshot(store: &PostStore) -> Vec<Post> {
    store
        .list_posts()
        .iter()
        .map(|post| Post::clone(post))
        .collect()
}

#[test]
fn create_post_prepends_with_zeroed_reactions() {
    let mut store = seeded_store();
    let before = store.len();

    let created = store.create_post("New", "Body", "u2").unwrap();
    assert_eq!(created.id, "p_1");
    assert_eq!(created.reactions.as_slice(), &[0, 0, 0, 0, 0]);

    let listed = store.list_posts();
    assert_eq!(listed.len(), before + 1);
    assert!(Arc::ptr_eq(&listed[0], &created));
    assert_eq!(listed[0].title, "New");
}

#[test]
fn create_post_keeps_dangling_author() {
    let mut store = seeded_store();
    let created = store.create_post("Orphan", "", "u999").unwrap();
    assert_eq!(created.author_id, "u999");
}

#[test]
fn create_post_with_empty_title_is_noop() {
    let mut store = seeded_store();
    let before = snapshot(&store);
    assert!(store.create_post("", "Body", "u1").is_none());
    assert_eq!(snapshot(&store), before);
}

#[test]
fn create_post_with_whitespace_title_creates_post() {
    let mut store = seeded_store();
    let created = store.create_post(" ", "Body", "u1").unwrap();
    assert_eq!(created.title, " ");
    assert_eq!(store.len(), 3);
    assert!(Arc::ptr_eq(&store.list_posts()[0], &created));
}

#[test]
fn locked_slot_never_increments() {
    let mut store = seeded_store();
    let before = snapshot(&store);

    for _ in 0..10 {
        assert!(store.increment_reaction("p1", LOCKED_REACTION_SLOT).is_none());
    }

    assert_eq!(snapshot(&store), before);
    assert_eq!(store.get_post("p1").unwrap().reactions.get(4), Some(0));
}

#[test]
fn increment_reaction_on_unknown_id_leaves_store_unchanged() {
    let mut store = seeded_store();
    let before = snapshot(&store);

    for slot in 0..6 {
        assert!(store.increment_reaction("missing", slot).is_none());
    }

    assert_eq!(snapshot(&store), before);
}

#[test]
fn open_slots_increment_by_one_per_call() {
    let mut store = seeded_store();
    for slot in 0..4 {
        for _ in 0..=slot {
            store.increment_reaction("p2", slot);
        }
    }
    assert_eq!(
        store.get_post("p2").unwrap().reactions.as_slice(),
        &[1, 2, 3, 4, 0]
    );
}

#[test]
fn increment_reaction_leaves_prior_snapshots_untouched() {
    let mut store = seeded_store();
    let rendered = store.get_post("p1").unwrap();

    let updated = store.increment_reaction("p1", 2).unwrap();

    assert_eq!(rendered.reactions.as_slice(), &[0, 0, 0, 0, 0]);
    assert_eq!(updated.reactions.as_slice(), &[0, 0, 1, 0, 0]);
    assert_eq!(updated.title, rendered.title);
}

#[test]
fn update_post_title_changes_only_title() {
    let mut store = seeded_store();
    store.increment_reaction("p1", 0);
    let before = store.get_post("p1").unwrap();

    store.update_post("p1", &PostPatch::title("T"));

    let after = store.get_post("p1").unwrap();
    assert_eq!(after.title, "T");
    assert_eq!(after.id, before.id);
    assert_eq!(after.content, before.content);
    assert_eq!(after.author_id, before.author_id);
    assert_eq!(after.reactions, before.reactions);
}

#[test]
fn update_post_on_unknown_id_is_noop() {
    let mut store = seeded_store();
    let before = snapshot(&store);
    assert!(store
        .update_post("missing", &PostPatch::content("anything"))
        .is_none());
    assert_eq!(snapshot(&store), before);
}

#[test]
fn update_post_keeps_collection_order() {
    let mut store = seeded_store();
    store.update_post("p2", &PostPatch::content("edited"));
    let ids = store
        .list_posts()
        .iter()
        .map(|post| post.id.clone())
        .collect::<Vec<_>>();
    assert_eq!(ids, vec!["p1", "p2"]);
}

#[test]
fn posts_by_author_filters_on_author_id() {
    let mut store = seeded_store();
    store.create_post("Second by Alice", "", "u1");

    let titles = store
        .posts_by_author("u1")
        .iter()
        .map(|post| post.title.clone())
        .collect::<Vec<_>>();
    assert_eq!(titles, vec!["Second by Alice", "Hello world"]);
    assert!(store.posts_by_author("u3").is_empty());
}
