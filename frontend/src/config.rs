/// Configuration for the frontend application

/// Base URL for static assets
/// - For local development: "/"
/// - Behind the CDN the bundle is served from the site root as well
pub const BASE_URL: &str = "/";

/// Helper function to construct asset paths
pub fn asset_path(path: &str) -> String {
    // Remove leading slash if present
    let path = path.strip_prefix('/').unwrap_or(path);
    format!("{}{}", BASE_URL, path)
}
