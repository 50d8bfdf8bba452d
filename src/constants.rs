//! Application constants and configuration

pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_DIR_NAME: &str = "Blog Home";

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_SITE_BASE_URL: &str = "http://localhost:5500/";

/// Fallback avatar for bloggers without one
pub const DEFAULT_AVATAR_URL: &str =
    "https://robohash.org/4ca0fc00a498763fe09274487f7b0286?set=set4&bgset=&size=400x400";

/// Storage key holding the session token
pub const SESSION_TOKEN_KEY: &str = "token";

// Element ids the page wires listeners to
pub const POSTS_ID: &str = "posts";
pub const BLOGGER_LIST_ID: &str = "blogger-list";
pub const CREATE_POST_BTN_ID: &str = "createPostBtn";
pub const AUTH_BTN_ID: &str = "authBtn";

pub const FOOTER_SINCE_YEAR: i32 = 2014;
