//! # Access Rules
//!
//! Who may do what. There are exactly two roles:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Role Model                                       │
//! │                                                                         │
//! │  Admin  = the single user whose email equals the configured admin      │
//! │           address (case-insensitive)                                   │
//! │  Rider  = everybody else                                               │
//! │                                                                         │
//! │  Operation                 Rider              Admin                     │
//! │  ────────────────────────  ─────────────────  ────────────────────────  │
//! │  list / delete users       403                ✓ (never itself)          │
//! │  edit own profile/password ✓                  403 (account is locked)   │
//! │  rentals                   own only           any                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything here is pure: the API layer resolves the authenticated user,
//! builds a [`Caller`], and asks it before touching the database.

use crate::error::{CoreError, CoreResult};
use crate::types::{Rental, User};

/// Returns true if `email` is the admin address.
pub fn is_admin_email(email: &str, admin_email: &str) -> bool {
    email.trim().eq_ignore_ascii_case(admin_email.trim())
}

/// The authenticated principal of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caller {
    pub user_id: i64,
    pub is_admin: bool,
}

impl Caller {
    /// Builds the caller for an authenticated user.
    pub fn for_user(user: &User, admin_email: &str) -> Self {
        Caller {
            user_id: user.id,
            is_admin: is_admin_email(&user.email, admin_email),
        }
    }

    /// Fails unless the caller is the admin.
    pub fn require_admin(&self) -> CoreResult<()> {
        if self.is_admin {
            Ok(())
        } else {
            Err(CoreError::AdminOnly)
        }
    }

    /// Fails if the caller is the admin: its own account is read-only.
    pub fn require_mutable_account(&self) -> CoreResult<()> {
        if self.is_admin {
            Err(CoreError::AdminAccountLocked)
        } else {
            Ok(())
        }
    }

    /// Whether the caller may act on data owned by `user_id`.
    #[inline]
    pub fn can_act_for(&self, user_id: i64) -> bool {
        self.is_admin || self.user_id == user_id
    }

    /// Fails unless the caller owns `rental` or is the admin.
    pub fn require_owner(&self, rental: &Rental) -> CoreResult<()> {
        if self.can_act_for(rental.user_id) {
            Ok(())
        } else {
            Err(CoreError::NotOwner {
                rental_id: rental.id,
            })
        }
    }

    /// Resolves who a new rental is for.
    ///
    /// Riders may omit `user_id` or pass their own; only the admin may open
    /// a rental on behalf of someone else.
    pub fn resolve_renter(&self, requested: Option<i64>) -> CoreResult<i64> {
        match requested {
            None => Ok(self.user_id),
            Some(user_id) if self.can_act_for(user_id) => Ok(user_id),
            Some(_) => Err(CoreError::AdminOnly),
        }
    }
}

/// Fails if `target` is the admin account; the admin can never be deleted.
pub fn require_deletable(target: &User, admin_email: &str) -> CoreResult<()> {
    if is_admin_email(&target.email, admin_email) {
        Err(CoreError::AdminAccountLocked)
    } else {
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
