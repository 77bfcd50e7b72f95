//! Role-based access checks for console views.

use crate::models::Role;

/// Whether an operator with `role` may open a view that requires `required`.
///
/// Anonymous operators are always denied. Any signed-in role satisfies a
/// `User` requirement; only `Admin` satisfies an `Admin` requirement.
pub fn can_access(role: Option<Role>, required: Role) -> bool {
    match (role, required) {
        (None, _) => false,
        (Some(_), Role::User) => true,
        (Some(role), Role::Admin) => role == Role::Admin,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_can_access_admin() {
        assert!(can_access(Some(Role::Admin), Role::Admin));
    }

    #[test]
    fn test_user_cannot_access_admin() {
        assert!(!can_access(Some(Role::User), Role::Admin));
    }

    #[test]
    fn test_any_role_can_access_user_views() {
        assert!(can_access(Some(Role::User), Role::User));
        assert!(can_access(Some(Role::Admin), Role::User));
    }

    #[test]
    fn test_anonymous_is_denied() {
        assert!(!can_access(None, Role::User));
        assert!(!can_access(None, Role::Admin));
    }
}
