//! Composer tests over the in-memory store
//!
//! Run with: cargo test -p integration-tests --test service_tests

use std::sync::Arc;

use async_trait::async_trait;
use integration_tests::*;
use social_core::{
    partition, Audience, Id, PageRequest, SortOrder, StandardVisibility, Viewer, VisibilityPolicy,
};
use social_service::{
    AttachmentViewability, FeedService, PostResponse, SearchService, ServiceError, ServiceResult,
};

fn ids<T>(data: &[T], id: impl Fn(&T) -> Id) -> Vec<Id> {
    data.iter().map(id).collect()
}

fn post_ids(data: &[PostResponse]) -> Vec<Id> {
    ids(data, |p| p.id)
}

fn first_page() -> PageRequest {
    PageRequest::default()
}

// ============================================================================
// Feeds
// ============================================================================

#[tokio::test]
async fn test_for_you_feed_for_friend() {
    let ctx = service_context(Arc::new(social_graph()));
    let page = FeedService::new(&ctx)
        .for_you(viewer(ALICE), &first_page())
        .await
        .unwrap();

    assert_eq!(
        post_ids(&page.data),
        vec![ALICE_PUBLIC, CAROL_PUBLIC, ALICE_FRIENDS_ONLY, DAVE_PUBLIC, BOB_FRIENDS_ONLY]
    );
    assert_eq!(page.total_pages, 1);
    assert_eq!(page.message, "success");
}

#[tokio::test]
async fn test_for_you_feed_for_unrelated_viewer() {
    let ctx = service_context(Arc::new(social_graph()));
    let page = FeedService::new(&ctx)
        .for_you(viewer(CAROL), &first_page())
        .await
        .unwrap();

    let seen = post_ids(&page.data);
    assert_eq!(seen, vec![ALICE_PUBLIC, CAROL_PUBLIC, DAVE_PUBLIC]);
    assert!(!seen.contains(&BOB_FRIENDS_ONLY));
}

#[tokio::test]
async fn test_following_feed() {
    let ctx = service_context(Arc::new(social_graph()));
    let page = FeedService::new(&ctx)
        .following(viewer(ALICE), &first_page())
        .await
        .unwrap();

    // friend's friends-only post and the one-way followed account's public post;
    // never alice's own posts, never dave's friends-only post
    assert_eq!(post_ids(&page.data), vec![DAVE_PUBLIC, BOB_FRIENDS_ONLY]);
    assert_eq!(page.total_pages, 1);
}

#[tokio::test]
async fn test_following_feed_empty_for_isolated_viewer() {
    let ctx = service_context(Arc::new(social_graph()));
    let page = FeedService::new(&ctx)
        .following(viewer(CAROL), &first_page())
        .await
        .unwrap();

    assert!(page.data.is_empty());
    assert_eq!(page.total_pages, 0);
    assert_eq!(page.page, 1);
}

#[tokio::test]
async fn test_feed_pagination_and_order() {
    let ctx = service_context(Arc::new(social_graph()));
    let feed = FeedService::new(&ctx);

    let first = feed
        .for_you(viewer(ALICE), &PageRequest::new(1, 2, SortOrder::Asc))
        .await
        .unwrap();
    assert_eq!(post_ids(&first.data), vec![BOB_FRIENDS_ONLY, DAVE_PUBLIC]);
    assert_eq!(first.total_pages, 3);
    assert_eq!(first.per_page, 2);

    let last = feed
        .for_you(viewer(ALICE), &PageRequest::new(3, 2, SortOrder::Asc))
        .await
        .unwrap();
    assert_eq!(post_ids(&last.data), vec![ALICE_PUBLIC]);

    let beyond = feed
        .for_you(viewer(ALICE), &PageRequest::new(9, 2, SortOrder::Asc))
        .await
        .unwrap();
    assert!(beyond.data.is_empty());
    assert_eq!(beyond.total_pages, 3);
}

#[tokio::test]
async fn test_feed_matches_in_memory_partition() {
    let store = social_graph();
    let graph = store.follows().clone();
    let ctx = service_context(Arc::new(store));

    let filter = StandardVisibility.posts(viewer(BOB), Audience::General);
    let all = social_graph();
    let records = {
        use social_core::traits::PostRepository;
        let request = PageRequest::new(1, 50, SortOrder::Desc);
        let page = social_core::PaginationSettings::default().resolve(&request);
        all.find_page(&social_core::Filter::All(vec![]), &page, BOB)
            .await
            .unwrap()
    };
    let (visible, _hidden) = partition(&filter, records, &graph);

    let page = FeedService::new(&ctx)
        .for_you(viewer(BOB), &PageRequest::new(1, 50, SortOrder::Desc))
        .await
        .unwrap();
    assert_eq!(post_ids(&page.data), ids(&visible, |r| r.post.id));
}

#[tokio::test]
async fn test_post_view_model() {
    let ctx = service_context(Arc::new(social_graph()));
    let page = FeedService::new(&ctx)
        .for_you(viewer(ALICE), &first_page())
        .await
        .unwrap();

    let carol = page.data.iter().find(|p| p.id == CAROL_PUBLIC).unwrap();
    assert!(carol.is_liked_by_current_user);
    assert_eq!(carol.total_likes, 1);
    assert_eq!(carol.total_comments, 2);
    assert_eq!(carol.owner.id, CAROL);
    assert_eq!(carol.media.len(), 1);

    let collection = carol.collection.as_ref().unwrap();
    assert_eq!(collection.id, CAROL_COLLECTION);
    assert_eq!(
        ids(&collection.preview_medias, |m| m.id),
        vec![PREVIEW_FIRST, PREVIEW_SECOND]
    );

    let bob = page.data.iter().find(|p| p.id == BOB_FRIENDS_ONLY).unwrap();
    assert!(!bob.is_liked_by_current_user);
    assert!(bob.collection.is_none());
}

#[tokio::test]
async fn test_count_failure_fails_the_request() {
    let store = Arc::new(social_graph());
    store.fail_counts();
    let ctx = service_context(store);

    let err = FeedService::new(&ctx)
        .for_you(viewer(ALICE), &first_page())
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 500);
    assert_eq!(err.error_code(), "DATABASE_ERROR");
}

// ============================================================================
// Attachment viewability
// ============================================================================

/// Marks media viewable only for the post owner
struct OwnerOnlyMedia;

#[async_trait]
impl AttachmentViewability for OwnerOnlyMedia {
    async fn annotate(
        &self,
        mut posts: Vec<PostResponse>,
        viewer: Viewer,
    ) -> ServiceResult<Vec<PostResponse>> {
        for post in &mut posts {
            let viewable = post.owner.id == viewer.id();
            for media in &mut post.media {
                media.is_viewable = Some(viewable);
            }
        }
        Ok(posts)
    }
}

/// Violates the contract by dropping every post
struct DropsEverything;

#[async_trait]
impl AttachmentViewability for DropsEverything {
    async fn annotate(
        &self,
        _posts: Vec<PostResponse>,
        _viewer: Viewer,
    ) -> ServiceResult<Vec<PostResponse>> {
        Ok(Vec::new())
    }
}

#[tokio::test]
async fn test_viewability_annotates_without_reordering() {
    let plain = service_context(Arc::new(social_graph()));
    let annotated = context_builder(Arc::new(social_graph()))
        .viewability(Arc::new(OwnerOnlyMedia))
        .build()
        .unwrap();

    let before = FeedService::new(&plain).for_you(viewer(ALICE), &first_page()).await.unwrap();
    let after = FeedService::new(&annotated).for_you(viewer(ALICE), &first_page()).await.unwrap();

    assert_eq!(post_ids(&before.data), post_ids(&after.data));
    assert_eq!(before.total_pages, after.total_pages);

    let carol = after.data.iter().find(|p| p.id == CAROL_PUBLIC).unwrap();
    assert_eq!(carol.media[0].is_viewable, Some(false));
    assert!(before.data.iter().all(|p| p.media.iter().all(|m| m.is_viewable.is_none())));
}

#[tokio::test]
async fn test_viewability_that_drops_posts_is_rejected() {
    let ctx = context_builder(Arc::new(social_graph()))
        .viewability(Arc::new(DropsEverything))
        .build()
        .unwrap();

    let err = FeedService::new(&ctx)
        .for_you(viewer(ALICE), &first_page())
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Internal(_)));
}

// ============================================================================
// Search
// ============================================================================

#[tokio::test]
async fn test_post_search_matches_content_or_media_title() {
    let ctx = service_context(Arc::new(social_graph()));
    let page = SearchService::new(&ctx)
        .posts(viewer(ALICE), Some("Sunset!!"), &first_page())
        .await
        .unwrap();

    assert_eq!(post_ids(&page.data), vec![CAROL_PUBLIC, DAVE_PUBLIC]);
    assert_eq!(page.total_pages, 1);
}

#[tokio::test]
async fn test_post_search_respects_visibility() {
    let ctx = service_context(Arc::new(social_graph()));
    let search = SearchService::new(&ctx);

    let for_alice = search
        .posts(viewer(ALICE), Some("weekend"), &first_page())
        .await
        .unwrap();
    assert_eq!(post_ids(&for_alice.data), vec![BOB_FRIENDS_ONLY]);

    let for_carol = search
        .posts(viewer(CAROL), Some("weekend"), &first_page())
        .await
        .unwrap();
    assert!(for_carol.data.is_empty());
    assert_eq!(for_carol.total_pages, 0);
}

#[tokio::test]
async fn test_search_requires_query() {
    let ctx = service_context(Arc::new(social_graph()));
    let search = SearchService::new(&ctx);

    for query in [None, Some("")] {
        let err = search.posts(viewer(ALICE), query, &first_page()).await.unwrap_err();
        assert_eq!(err.status_code(), 422);
        assert_eq!(err.to_string(), "No query provided.");

        let err = search.users(viewer(ALICE), query, &first_page()).await.unwrap_err();
        assert_eq!(err.status_code(), 422);

        let err = search.collections(viewer(ALICE), query, &first_page()).await.unwrap_err();
        assert_eq!(err.status_code(), 422);
    }
}

#[tokio::test]
async fn test_query_with_no_tokens_matches_nothing() {
    let ctx = service_context(Arc::new(social_graph()));
    let page = SearchService::new(&ctx)
        .posts(viewer(ALICE), Some("!!! ???"), &first_page())
        .await
        .unwrap();

    assert!(page.data.is_empty());
    assert_eq!(page.total_pages, 0);
}

#[tokio::test]
async fn test_user_search_flags_followed_users() {
    let ctx = service_context(Arc::new(social_graph()));
    let search = SearchService::new(&ctx);

    let dave = search.users(viewer(ALICE), Some("dave"), &first_page()).await.unwrap();
    assert_eq!(ids(&dave.data, |u| u.id), vec![DAVE]);
    assert!(dave.data[0].is_followed_by_current_user);

    let carol = search.users(viewer(ALICE), Some("carol"), &first_page()).await.unwrap();
    assert_eq!(ids(&carol.data, |u| u.id), vec![CAROL]);
    assert!(!carol.data[0].is_followed_by_current_user);

    // dave does not follow alice back
    let alice = search.users(viewer(DAVE), Some("alice"), &first_page()).await.unwrap();
    assert!(!alice.data[0].is_followed_by_current_user);
}

#[tokio::test]
async fn test_collection_search_visibility() {
    let ctx = service_context(Arc::new(social_graph()));
    let page = SearchService::new(&ctx)
        .collections(viewer(ALICE), Some("travel"), &first_page())
        .await
        .unwrap();

    // bob's friends-only and carol's public; alice's own friends-only
    // collection has no owner clause and stays hidden
    assert_eq!(ids(&page.data, |c| c.id), vec![CAROL_COLLECTION, BOB_COLLECTION]);

    let carol = &page.data[0];
    assert_eq!(
        ids(&carol.preview_medias, |m| m.id),
        vec![PREVIEW_FIRST, PREVIEW_SECOND]
    );
    assert_eq!(carol.owner.id, CAROL);
}
