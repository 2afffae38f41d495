//! The API endpoints URIs.
//!
//! Endpoints that take a parameter, e.g., '/blogs/{blog}', are matched by the
//! router with the parameter in curly braces.

/// The route for listing, creating, renaming and deleting users.
pub const USERS: &str = "/user";
/// The route for listing and creating a user's categories.
pub const CATEGORIES: &str = "/categories";
/// The route for renaming and deleting a single category.
pub const CATEGORY: &str = "/categories/{category}";
/// The route for listing and creating blogs.
pub const BLOGS: &str = "/blogs";
/// The route for fetching, updating and deleting a single blog.
pub const BLOG: &str = "/blogs/{blog}";

/// Replace the first parameter in `endpoint_path` with `id`.
///
/// Parameters are delimited by curly braces, e.g. `{blog}`. If the path has no
/// parameter it is returned unchanged.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_endpoint("/blogs/{blog}", "abc"), "/blogs/abc");
/// ```
#[cfg(test)]
pub fn format_endpoint(endpoint_path: &str, id: impl std::fmt::Display) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_string();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map(|offset| param_start + offset + 1)
        .unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
