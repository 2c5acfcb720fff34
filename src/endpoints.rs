//! Server-relative endpoint paths.
//!
//! All paths are combined with the configured base URL by simple
//! concatenation; record operations take the record id as a path segment.

pub const LOGIN: &str = "/login";

pub const CREATE_NEEDY: &str = "/create-needy";
pub const LIST_NEEDY: &str = "/list-needy";
pub const LIST_ADMINS: &str = "/list-admins";

pub const NEEDY_LOCATIONS: &str = "/needy-locations";
pub const ADMIN_LOCATIONS: &str = "/admin-locations";

pub const REGISTRATION_STATS: &str = "/registration-stats";

pub fn get_needy(id: u64) -> String {
    format!("/get-needy/{id}")
}

pub fn edit_needy(id: u64) -> String {
    format!("/edit-needy/{id}")
}

pub fn delete_needy(id: u64) -> String {
    format!("/delete-needy/{id}")
}

pub fn get_admin(id: u64) -> String {
    format!("/get-admin/{id}")
}

pub fn edit_admin(id: u64) -> String {
    format!("/edit-admin/{id}")
}

pub fn delete_admin(id: u64) -> String {
    format!("/delete-admin/{id}")
}
