mod support;

use quill_core::application::commands::comments::SubmitCommentCommand;
use quill_core::application::dto::{AuthenticatedUser, CommentDto};
use quill_core::domain::user::Role;

use support::{TestHarness, actor};

async fn submit(
    harness: &TestHarness,
    user: &AuthenticatedUser,
    article_id: i64,
    parent_id: Option<i64>,
    content: &str,
) -> CommentDto {
    harness
        .comment_commands
        .submit_comment(
            Some(user),
            SubmitCommentCommand {
                article_id,
                parent_id,
                content: content.into(),
            },
        )
        .await
        .expect("comment submission should succeed")
}

#[tokio::test]
async fn comments_render_in_pre_order_with_computed_depths() {
    let harness = TestHarness::new(5);
    let author = actor(1, Role::Author);
    let reader = actor(2, Role::Reader);
    let article = harness.publish_article(&author, "Threads", "body", &[]).await;

    let c1 = submit(&harness, &reader, article.id, None, "first root").await;
    let c2 = submit(&harness, &reader, article.id, None, "second root").await;
    let c3 = submit(&harness, &reader, article.id, Some(c1.id), "child of first").await;
    let c4 = submit(&harness, &reader, article.id, Some(c3.id), "grandchild").await;

    let view = harness.canonical_view(None, &article).await;
    let order: Vec<i64> = view.comments.iter().map(|comment| comment.id).collect();
    let depths: Vec<u32> = view.comments.iter().map(|comment| comment.depth).collect();

    assert_eq!(order, vec![c1.id, c3.id, c4.id, c2.id]);
    assert_eq!(depths, vec![1, 2, 3, 1]);
    assert_eq!(view.comment_count, 4);
}

#[tokio::test]
async fn every_child_sits_one_level_below_its_parent() {
    let harness = TestHarness::new(5);
    let author = actor(1, Role::Author);
    let reader = actor(2, Role::Reader);
    let article = harness.publish_article(&author, "Depths", "body", &[]).await;

    let mut parent_id = None;
    for level in 1..=4 {
        let comment = submit(
            &harness,
            &reader,
            article.id,
            parent_id,
            &format!("level {level}"),
        )
        .await;
        assert_eq!(comment.depth, level);
        parent_id = Some(comment.id);
    }

    let view = harness.canonical_view(None, &article).await;
    for pair in view.comments.windows(2) {
        if pair[1].parent_id == Some(pair[0].id) {
            assert_eq!(pair[1].depth, pair[0].depth + 1);
        }
    }
}

#[tokio::test]
async fn an_article_without_comments_renders_empty() {
    let harness = TestHarness::new(5);
    let author = actor(1, Role::Author);
    let article = harness.publish_article(&author, "Quiet", "body", &[]).await;

    let view = harness.canonical_view(None, &article).await;
    assert!(view.comments.is_empty());
    assert_eq!(view.comment_count, 0);
}

#[tokio::test]
async fn sibling_subtrees_stay_in_creation_order() {
    let harness = TestHarness::new(5);
    let author = actor(1, Role::Author);
    let reader = actor(2, Role::Reader);
    let article = harness.publish_article(&author, "Siblings", "body", &[]).await;

    let c1 = submit(&harness, &reader, article.id, None, "root a").await;
    let c2 = submit(&harness, &reader, article.id, None, "root b").await;
    let c3 = submit(&harness, &reader, article.id, Some(c2.id), "reply to b").await;
    let c4 = submit(&harness, &reader, article.id, Some(c1.id), "reply to a").await;

    let view = harness.canonical_view(None, &article).await;
    let order: Vec<i64> = view.comments.iter().map(|comment| comment.id).collect();

    // Each root keeps its own subtree contiguous, roots in creation order.
    assert_eq!(order, vec![c1.id, c4.id, c2.id, c3.id]);
}
