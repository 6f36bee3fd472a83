// src/domain/catalog/reserved.rs

/// Top-level paths owned by the storefront itself. A slug equal to one of
/// these would shadow a system route, so the resolver treats them as taken.
pub const RESERVED_SLUGS: &[&str] = &[
    "api",
    "ajax",
    "assets",
    "static",
    "admin",
    "signin",
    "signout",
    "signup",
    "post",
    "posts",
    "public",
    "rss",
    "feed",
    "setup",
    "tag",
    "tags",
    "user",
    "users",
    "sitemap.xml",
    "robots.txt",
];

pub fn is_reserved(slug: &str) -> bool {
    RESERVED_SLUGS.contains(&slug)
}
