//! Entity to DTO mappers
//!
//! The post mapping is the single projection used by both feeds and post
//! search, so every surface returns the same post shape.

use social_core::{CollectionRecord, Media, PostRecord, User, UserSummary, Viewer};

use super::responses::{
    CollectionResponse, MediaResponse, OwnerResponse, PostResponse, UserSearchResponse,
};

// ============================================================================
// Owner / Media / Collection Mappers
// ============================================================================

impl From<UserSummary> for OwnerResponse {
    fn from(owner: UserSummary) -> Self {
        Self {
            id: owner.id,
            username: owner.username,
            handle: owner.handle,
            avatar: owner.avatar,
        }
    }
}

impl From<Media> for MediaResponse {
    fn from(media: Media) -> Self {
        Self {
            id: media.id,
            title: media.title,
            url: media.url,
            created_at: media.created_at,
            is_viewable: None,
        }
    }
}

impl From<CollectionRecord> for CollectionResponse {
    fn from(record: CollectionRecord) -> Self {
        let collection = record.collection;
        Self {
            id: collection.id,
            name: collection.name,
            description: collection.description,
            photo: collection.photo,
            privacy: collection.privacy,
            owner: record.owner.into(),
            preview_medias: record
                .preview_medias
                .into_iter()
                .map(MediaResponse::from)
                .collect(),
        }
    }
}

// ============================================================================
// Post Mapper
// ============================================================================

/// Project a post record for `viewer`.
///
/// Only the viewer's own like is consulted for `isLikedByCurrentUser`; the
/// like list is never exposed.
pub fn post_view(record: PostRecord, viewer: Viewer) -> PostResponse {
    let is_liked = record.is_liked_by(viewer.id());
    let post = record.post;

    PostResponse {
        id: post.id,
        content: post.content,
        privacy: post.privacy,
        owner: record.owner.into(),
        total_likes: record.like_count,
        total_comments: record.comment_count,
        is_liked_by_current_user: is_liked,
        media: record.media.into_iter().map(MediaResponse::from).collect(),
        collection: record.collection.map(CollectionResponse::from),
        created_at: post.created_at,
    }
}

// ============================================================================
// User Mapper
// ============================================================================

/// Project a user search hit
pub fn user_view(user: User, is_followed_by_current_user: bool) -> UserSearchResponse {
    UserSearchResponse {
        id: user.id,
        username: user.username,
        handle: user.handle,
        avatar: user.avatar,
        bio: user.bio,
        is_followed_by_current_user,
    }
}
