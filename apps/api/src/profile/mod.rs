// Profile Store and the endpoints that edit it.

pub mod handlers;
pub mod resume;
pub mod store;
