// SPDX-License-Identifier: MPL-2.0

use crate::api::{Comment, CommentUser, Post, User};
use std::collections::HashMap;

/// First user per id, matching a linear `find`
fn index_users(users: &[User]) -> HashMap<i64, &User> {
    let mut by_id = HashMap::with_capacity(users.len());
    for user in users {
        by_id.entry(user.id).or_insert(user);
    }
    by_id
}

/// Attach `author` to every post; posts without a matching user get `None`.
pub fn attach_authors(posts: &mut [Post], users: &[User]) {
    let by_id = index_users(users);
    for post in posts {
        post.author = by_id.get(&post.user_id).map(|user| (*user).clone());
    }
}

/// Fill in the embedded user for comments the server sent without one.
pub fn attach_comment_users(comments: &mut [Comment], users: &[User]) {
    let by_id = index_users(users);
    for comment in comments.iter_mut().filter(|c| c.user.is_none()) {
        comment.user = by_id.get(&comment.user_id).map(|user| CommentUser::from(*user));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Reactions;

    fn post(id: i64, user_id: i64) -> Post {
        Post {
            id,
            title: format!("post {id}"),
            body: String::new(),
            user_id,
            tags: Vec::new(),
            reactions: Reactions::default(),
            views: 0,
            author: None,
        }
    }

    fn comment(id: i64, user_id: i64, user: Option<CommentUser>) -> Comment {
        Comment {
            id,
            body: "c".to_string(),
            post_id: 1,
            user_id,
            likes: 0,
            dislikes: 0,
            user,
        }
    }

    #[test]
    fn test_authors_match_owner() {
        let users = vec![User::summary(1, "emilys", None), User::summary(2, "michaelw", None)];
        let mut posts = vec![post(10, 2), post(11, 1), post(12, 99)];

        attach_authors(&mut posts, &users);

        for p in &posts {
            assert!(p.author.as_ref().is_none_or(|a| a.id == p.user_id));
        }
        assert_eq!(posts[0].author.as_ref().unwrap().username, "michaelw");
        assert!(posts[2].author.is_none());
    }

    #[test]
    fn test_rejoin_clears_stale_author() {
        let mut posts = vec![post(10, 3)];
        posts[0].author = Some(User::summary(3, "old", None));

        attach_authors(&mut posts, &[]);
        assert!(posts[0].author.is_none());
    }

    #[test]
    fn test_comment_users_only_fill_missing() {
        let mut kept = User::summary(5, "kept", None);
        kept.first_name = Some("Kay".to_string());
        let users = vec![kept, User::summary(6, "other", None)];
        let embedded = CommentUser {
            id: 6,
            username: "from-server".to_string(),
            full_name: None,
        };
        let mut comments = vec![comment(1, 5, None), comment(2, 6, Some(embedded)), comment(3, 7, None)];

        attach_comment_users(&mut comments, &users);

        let first = comments[0].user.as_ref().unwrap();
        assert_eq!(first.username, "kept");
        assert_eq!(first.full_name.as_deref(), Some("Kay"));
        assert_eq!(comments[1].user.as_ref().unwrap().username, "from-server");
        assert!(comments[2].user.is_none());
    }
}
