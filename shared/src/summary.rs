//! Role counts derived from the user collection.

use crate::roles::Role;
use crate::User;

/// Per-role counts over a user collection, shown as summary cards above the
/// users table.
///
/// Derived data only: recomputed from scratch whenever the collection
/// changes, never patched incrementally. A user with several recognized
/// roles counts once per role, so the role counts need not sum to `total`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoleSummary {
    pub total: usize,
    pub user: usize,
    pub admin: usize,
    pub dispatcher: usize,
    pub broker: usize,
    pub owner: usize,
    pub driver: usize,
}

impl RoleSummary {
    /// Count roles across `users`. Unrecognized role tags are skipped.
    pub fn aggregate(users: &[User]) -> RoleSummary {
        let mut summary = RoleSummary {
            total: users.len(),
            ..RoleSummary::default()
        };
        for user in users {
            for tag in &user.roles {
                match Role::parse(tag) {
                    Some(Role::User) => summary.user += 1,
                    Some(Role::Admin) => summary.admin += 1,
                    Some(Role::Dispatcher) => summary.dispatcher += 1,
                    Some(Role::Broker) => summary.broker += 1,
                    Some(Role::Owner) => summary.owner += 1,
                    Some(Role::Driver) => summary.driver += 1,
                    None => {}
                }
            }
        }
        summary
    }

    /// The count for one recognized role.
    pub fn count(&self, role: Role) -> usize {
        match role {
            Role::User => self.user,
            Role::Admin => self.admin,
            Role::Dispatcher => self.dispatcher,
            Role::Broker => self.broker,
            Role::Owner => self.owner,
            Role::Driver => self.driver,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::RoleSummary;
    use crate::roles::Role;
    use crate::User;

    fn user(id: i64, roles: &[&str]) -> User {
        User {
            id,
            email: format!("user{id}@example.com"),
            display_name: format!("User {id}"),
            roles: roles.iter().map(|r| r.to_string()).collect(),
            is_approved: true,
        }
    }

    #[test]
    fn multi_tag_and_zero_tag_records() {
        let users = vec![user(1, &["admin", "driver"]), user(2, &[])];
        let summary = RoleSummary::aggregate(&users);
        assert_eq!(summary.admin, 1);
        assert_eq!(summary.driver, 1);
        assert_eq!(summary.total, 2);
    }

    #[test]
    fn unrecognized_tags_are_ignored() {
        let users = vec![user(1, &["admin", "superadmin", "auditor"])];
        let summary = RoleSummary::aggregate(&users);
        assert_eq!(summary.admin, 1);
        // Role counts reflect only recognized tags.
        let counted: usize = Role::ALL.iter().map(|r| summary.count(*r)).sum();
        assert_eq!(counted, 1);
        assert_eq!(summary.total, 1);
    }

    #[test]
    fn counts_need_not_sum_to_total() {
        let users = vec![
            user(1, &["admin", "owner", "driver"]),
            user(2, &[]),
            user(3, &["user"]),
        ];
        let summary = RoleSummary::aggregate(&users);
        let counted: usize = Role::ALL.iter().map(|r| summary.count(*r)).sum();
        assert_eq!(counted, 4);
        assert_eq!(summary.total, 3);
    }

    #[test]
    fn aggregation_is_deterministic() {
        let users = vec![user(1, &["driver"]), user(2, &["driver", "owner"])];
        assert_eq!(
            RoleSummary::aggregate(&users),
            RoleSummary::aggregate(&users)
        );
    }

    #[test]
    fn empty_collection_yields_zeroes() {
        assert_eq!(RoleSummary::aggregate(&[]), RoleSummary::default());
    }
}
