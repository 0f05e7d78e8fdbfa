// Registration and login. No sessions: login returns the user record and
// owner-scoped routes take `user_id` explicitly.

pub mod handlers;
pub mod password;
pub mod store;
