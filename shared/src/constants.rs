pub static API_EMAILS: &'static str = "emails";
pub static API_LIKE_STATUS: &'static str = "like_status";
pub static API_ADD_LIKE: &'static str = "add_like";
pub static API_REMOVE_LIKE: &'static str = "remove_like";
pub static API_EDIT: &'static str = "edit";

pub static COOKIE_CSRF: &'static str = "csrftoken";
pub static HEADER_CSRF: &'static str = "X-CSRFToken";

pub const FETCH_TIMEOUT_MS: u32 = 10_000;

pub static CLASS_READ: &'static str = "read";
pub static CLASS_UNREAD: &'static str = "unread";

pub static LABEL_LIKE: &'static str = "Like";
pub static LABEL_UNLIKE: &'static str = "Remove Like";

pub static POSTS_DATA_ID: &'static str = "posts-data";
