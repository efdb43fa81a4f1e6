//! Test fixtures and data generators
//!
//! A small fixed social graph:
//!
//! - `alice` (1) and `bob` (2) follow each other (friends)
//! - `alice` follows `dave` (4); `dave` does not follow back
//! - `carol` (3) has no follow edges
//!
//! Posts and collections are created at increasing timestamps in the order
//! they are listed below, so creation-time ordering is deterministic.

use chrono::{DateTime, Duration, TimeZone, Utc};
use social_core::{
    Collection, CollectionRecord, Id, Media, Post, PostRecord, Privacy, User, Viewer,
};

use crate::memory::MemoryStore;

pub const ALICE: Id = Id::new(1);
pub const BOB: Id = Id::new(2);
pub const CAROL: Id = Id::new(3);
pub const DAVE: Id = Id::new(4);

/// bob, friends-only
pub const BOB_FRIENDS_ONLY: Id = Id::new(101);
/// dave, public, content mentions "sunset"
pub const DAVE_PUBLIC: Id = Id::new(102);
/// alice, friends-only
pub const ALICE_FRIENDS_ONLY: Id = Id::new(103);
/// dave, friends-only; alice is not dave's friend
pub const DAVE_FRIENDS_ONLY: Id = Id::new(104);
/// carol, public, media titled "Sunset Beach", liked by alice, in carol's collection
pub const CAROL_PUBLIC: Id = Id::new(105);
/// alice, public
pub const ALICE_PUBLIC: Id = Id::new(106);

/// bob, friends-only, "travel"
pub const BOB_COLLECTION: Id = Id::new(201);
/// carol, public, "travel", two preview medias
pub const CAROL_COLLECTION: Id = Id::new(202);
/// alice, friends-only, "travel"
pub const ALICE_COLLECTION: Id = Id::new(203);
/// dave, friends-only, "travel"
pub const DAVE_COLLECTION: Id = Id::new(204);

pub const PREVIEW_FIRST: Id = Id::new(301);
pub const PREVIEW_SECOND: Id = Id::new(302);

/// Viewer for a fixture user
pub fn viewer(id: Id) -> Viewer {
    Viewer::new(id).expect("fixture ids are non-zero")
}

/// Deterministic timestamp `minutes` after a fixed epoch
pub fn at(minutes: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .single()
        .expect("valid fixed date")
        + Duration::minutes(minutes)
}

pub fn user(id: Id, name: &str, minutes: i64) -> User {
    let mut user = User::new(id, name, name.to_lowercase());
    user.created_at = at(minutes);
    user.bio = Some(format!("{name}'s bio"));
    user
}

pub fn media(id: Id, post_id: Option<Id>, title: &str) -> Media {
    Media {
        id,
        post_id,
        title: title.to_string(),
        url: format!("https://cdn.example.com/{id}.jpg"),
        created_at: at(0),
    }
}

pub fn post(id: Id, owner: &User, privacy: Privacy, content: &str, minutes: i64) -> PostRecord {
    PostRecord {
        post: Post {
            id,
            content: content.to_string(),
            privacy,
            owner_id: owner.id,
            collection_id: None,
            created_at: at(minutes),
        },
        owner: owner.summary(),
        media: Vec::new(),
        collection: None,
        like_count: 0,
        comment_count: 0,
        liker_ids: Vec::new(),
    }
}

pub fn collection(
    id: Id,
    owner: &User,
    privacy: Privacy,
    name: &str,
    minutes: i64,
) -> CollectionRecord {
    CollectionRecord {
        collection: Collection {
            id,
            name: name.to_string(),
            description: Some(format!("{name} by {}", owner.username)),
            photo: None,
            privacy,
            owner_id: owner.id,
            created_at: at(minutes),
        },
        owner: owner.summary(),
        preview_medias: Vec::new(),
    }
}

/// The fixed social graph described in the module docs
pub fn social_graph() -> MemoryStore {
    let alice = user(ALICE, "Alice", 0);
    let bob = user(BOB, "Bob", 1);
    let carol = user(CAROL, "Carol", 2);
    let dave = user(DAVE, "Dave", 3);

    let mut store = MemoryStore::new();

    store.follow(ALICE, BOB);
    store.follow(BOB, ALICE);
    store.follow(ALICE, DAVE);

    let mut carol_collection =
        collection(CAROL_COLLECTION, &carol, Privacy::Public, "carol travel", 11);
    carol_collection.preview_medias = vec![
        media(PREVIEW_FIRST, None, "first preview"),
        media(PREVIEW_SECOND, None, "second preview"),
    ];

    store.add_post(post(BOB_FRIENDS_ONLY, &bob, Privacy::FriendsOnly, "bob weekend plans", 1));
    store.add_post(post(DAVE_PUBLIC, &dave, Privacy::Public, "dave watching the sunset", 2));
    store.add_post(post(
        ALICE_FRIENDS_ONLY,
        &alice,
        Privacy::FriendsOnly,
        "alice note to friends",
        3,
    ));
    store.add_post(post(DAVE_FRIENDS_ONLY, &dave, Privacy::FriendsOnly, "dave hidden thoughts", 4));

    let mut carol_post = post(CAROL_PUBLIC, &carol, Privacy::Public, "carol hello world", 5);
    carol_post.media = vec![media(Id::new(401), Some(CAROL_PUBLIC), "Sunset Beach")];
    carol_post.post.collection_id = Some(CAROL_COLLECTION);
    carol_post.collection = Some(carol_collection.clone());
    carol_post.like_count = 1;
    carol_post.comment_count = 2;
    carol_post.liker_ids = vec![ALICE];
    store.add_post(carol_post);

    store.add_post(post(ALICE_PUBLIC, &alice, Privacy::Public, "alice public update", 6));

    store.add_collection(collection(BOB_COLLECTION, &bob, Privacy::FriendsOnly, "bob travel", 10));
    store.add_collection(carol_collection);
    store.add_collection(collection(
        ALICE_COLLECTION,
        &alice,
        Privacy::FriendsOnly,
        "alice travel",
        12,
    ));
    store.add_collection(collection(
        DAVE_COLLECTION,
        &dave,
        Privacy::FriendsOnly,
        "dave travel",
        13,
    ));

    store.add_user(alice);
    store.add_user(bob);
    store.add_user(carol);
    store.add_user(dave);

    store
}
