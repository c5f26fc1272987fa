//! Static site content compiled into the binary

pub mod blog;
mod posts;

pub use blog::{BlogPost, all_blog_posts, get_blog_post};
