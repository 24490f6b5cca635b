// Version information for the Pagesmith node

/// Full version string with feature description
pub const VERSION: &str = "v0.1.0-landing-pipeline-2025-08-22";

/// Semantic version number
pub const VERSION_NUMBER: &str = "0.1.0";

/// Build date
pub const BUILD_DATE: &str = "2025-08-22";

/// Supported features in this version
pub const FEATURES: &[&str] = &[
    "landing-page-generation",
    "content-distribution",
    "gemini-text",
    "gemini-image",
    "stock-image-search",
    "newsletter-fallback",
    "byo-api-key",
    "session-gating",
];
