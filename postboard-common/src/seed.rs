//! The fixed demo rows written by a database seed.

use crate::model::post::NewPost;

pub const SEED_POST_COUNT: usize = 3;

/// The canonical posts, in insertion order. After a seed they carry ids 1
/// through [`SEED_POST_COUNT`].
#[must_use]
pub fn seed_posts() -> [NewPost; SEED_POST_COUNT] {
    [
        seed_post(1, "Author1"),
        seed_post(2, "Author2"),
        seed_post(3, "Author1"),
    ]
}

fn seed_post(number: u8, author: &str) -> NewPost {
    NewPost {
        name: format!("Post{number}"),
        author: author.to_owned(),
        title: format!("Title{number}"),
        content: format!("This is the content of post {number}"),
    }
}

#[cfg(test)]
mod tests {
    use crate::seed::seed_posts;

    #[test]
    fn canonical_rows() {
        let posts = seed_posts();

        let names: Vec<_> = posts.iter().map(|post| post.name.as_str()).collect();
        assert_eq!(names, ["Post1", "Post2", "Post3"]);

        let by_author1 = posts.iter().filter(|post| post.author == "Author1").count();
        assert_eq!(by_author1, 2);

        assert_eq!(posts[1].title, "Title2");
        assert_eq!(posts[2].content, "This is the content of post 3");
    }
}
