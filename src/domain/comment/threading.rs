// src/domain/comment/threading.rs
//
// Display ordering and depth for a per-article comment forest. Depth is never
// stored: it is recomputed from the parent chain so it cannot drift from the
// actual tree shape.
use crate::domain::comment::entity::Comment;
use crate::domain::comment::value_objects::CommentId;
use crate::domain::errors::{DomainError, DomainResult};
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct ThreadedComment {
    pub comment: Comment,
    pub depth: u32,
}

/// Arrange an article's comments for display: pre-order traversal where each
/// comment appears directly after its parent and before its parent's later
/// siblings. Roots and siblings keep their creation order, so the input must
/// already be sorted ascending by (created_at, id) as the repository returns
/// it.
pub fn thread(comments: Vec<Comment>) -> DomainResult<Vec<ThreadedComment>> {
    let index_of: HashMap<CommentId, usize> = comments
        .iter()
        .enumerate()
        .map(|(idx, comment)| (comment.id, idx))
        .collect();

    let mut roots: Vec<usize> = Vec::new();
    let mut children: Vec<Vec<usize>> = vec![Vec::new(); comments.len()];

    for (idx, comment) in comments.iter().enumerate() {
        match comment.parent_id {
            None => roots.push(idx),
            Some(parent_id) => {
                let parent_idx = index_of.get(&parent_id).copied().ok_or_else(|| {
                    DomainError::Validation(format!(
                        "comment {} references a parent outside its article",
                        i64::from(comment.id)
                    ))
                })?;
                children[parent_idx].push(idx);
            }
        }
    }

    // Explicit stack instead of recursion; pushing children in reverse keeps
    // the earliest sibling on top.
    let mut ordered: Vec<(usize, u32)> = Vec::with_capacity(comments.len());
    let mut stack: Vec<(usize, u32)> = Vec::new();
    for root in roots.iter().rev() {
        stack.push((*root, 1));
    }
    while let Some((idx, depth)) = stack.pop() {
        ordered.push((idx, depth));
        for child in children[idx].iter().rev() {
            stack.push((*child, depth + 1));
        }
    }

    if ordered.len() != comments.len() {
        return Err(DomainError::Validation(
            "comment thread contains a parent cycle".into(),
        ));
    }

    let mut slots: Vec<Option<Comment>> = comments.into_iter().map(Some).collect();
    Ok(ordered
        .into_iter()
        .map(|(idx, depth)| ThreadedComment {
            comment: slots[idx].take().expect("each comment emitted once"),
            depth,
        })
        .collect())
}

/// Depth of one comment: 1 for a root, `depth(parent) + 1` otherwise,
/// computed by following parent ids. The walk is bounded by the size of the
/// comment set, so a corrupted chain terminates in an error instead of
/// looping.
pub fn depth_of(id: CommentId, comments: &[Comment]) -> DomainResult<u32> {
    let by_id: HashMap<CommentId, &Comment> = comments
        .iter()
        .map(|comment| (comment.id, comment))
        .collect();

    let mut current = *by_id
        .get(&id)
        .ok_or_else(|| DomainError::NotFound(format!("comment {} not found", i64::from(id))))?;
    let mut depth: u32 = 1;

    while let Some(parent_id) = current.parent_id {
        if depth as usize > comments.len() {
            return Err(DomainError::Validation(
                "comment parent chain does not terminate".into(),
            ));
        }
        current = *by_id.get(&parent_id).ok_or_else(|| {
            DomainError::Validation(format!(
                "comment {} references a parent outside its article",
                i64::from(current.id)
            ))
        })?;
        depth += 1;
    }

    Ok(depth)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::ArticleId;
    use crate::domain::comment::value_objects::CommentContent;
    use crate::domain::user::UserId;
    use chrono::{Duration, TimeZone, Utc};

    fn comment(id: i64, parent: Option<i64>) -> Comment {
        let base = Utc.with_ymd_and_hms(2013, 1, 1, 12, 0, 0).unwrap();
        Comment {
            id: CommentId::new(id).unwrap(),
            article_id: ArticleId::new(1).unwrap(),
            author_id: UserId::new(1).unwrap(),
            parent_id: parent.map(|p| CommentId::new(p).unwrap()),
            content: CommentContent::new(format!("comment {id}")).unwrap(),
            is_moderated: false,
            created_at: base + Duration::seconds(id),
        }
    }

    #[test]
    fn thread_orders_parent_before_later_siblings() {
        let comments = vec![
            comment(1, None),
            comment(2, None),
            comment(3, Some(1)),
            comment(4, Some(3)),
        ];
        let threaded = thread(comments).unwrap();
        let order: Vec<i64> = threaded
            .iter()
            .map(|entry| i64::from(entry.comment.id))
            .collect();
        let depths: Vec<u32> = threaded.iter().map(|entry| entry.depth).collect();
        assert_eq!(order, vec![1, 3, 4, 2]);
        assert_eq!(depths, vec![1, 2, 3, 1]);
    }

    #[test]
    fn thread_keeps_sibling_creation_order() {
        let comments = vec![
            comment(1, None),
            comment(2, Some(1)),
            comment(3, Some(1)),
            comment(4, Some(1)),
        ];
        let threaded = thread(comments).unwrap();
        let order: Vec<i64> = threaded
            .iter()
            .map(|entry| i64::from(entry.comment.id))
            .collect();
        assert_eq!(order, vec![1, 2, 3, 4]);
    }

    #[test]
    fn thread_of_empty_article_is_empty() {
        assert!(thread(Vec::new()).unwrap().is_empty());
    }

    #[test]
    fn thread_rejects_foreign_parent() {
        let comments = vec![comment(2, Some(99))];
        assert!(thread(comments).is_err());
    }

    #[test]
    fn depth_is_one_for_roots_and_parent_plus_one_below() {
        let comments = vec![comment(1, None), comment(2, Some(1)), comment(3, Some(2))];
        assert_eq!(depth_of(CommentId::new(1).unwrap(), &comments).unwrap(), 1);
        assert_eq!(depth_of(CommentId::new(2).unwrap(), &comments).unwrap(), 2);
        assert_eq!(depth_of(CommentId::new(3).unwrap(), &comments).unwrap(), 3);

        for entry in thread(comments.clone()).unwrap() {
            assert_eq!(
                entry.depth,
                depth_of(entry.comment.id, &comments).unwrap(),
                "threaded depth must agree with the parent-chain walk"
            );
        }
    }

    #[test]
    fn depth_walk_detects_cycles() {
        let comments = vec![comment(1, Some(2)), comment(2, Some(1))];
        assert!(depth_of(CommentId::new(1).unwrap(), &comments).is_err());
    }
}
