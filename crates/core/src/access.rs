//! Access rules for privileged operations.
//!
//! There is no role table. A single well-known user id is treated as the
//! administrator and may read the full user list.

use crate::types::DbId;

/// The user id granted admin access.
pub const ADMIN_USER_ID: DbId = 1;

/// Whether `user_id` is the admin identity.
pub fn is_admin(user_id: DbId) -> bool {
    user_id == ADMIN_USER_ID
}
