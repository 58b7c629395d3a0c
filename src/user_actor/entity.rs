//! [`ActorEntity`] implementation for [`User`].
//!
//! Users have no dependencies and no custom actions. Email addresses are
//! unique, compared case-insensitively.

use super::UserError;
use crate::model::{User, UserCreate, UserFilter, UserId, UserUpdate};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use chrono::Utc;

fn validate_name(name: &str) -> Result<(), UserError> {
    if name.trim().is_empty() {
        return Err(UserError::ValidationError("name must not be empty".into()));
    }
    Ok(())
}

#[async_trait]
impl ActorEntity for User {
    type Id = UserId;
    type Create = UserCreate;
    type Update = UserUpdate;
    type Action = ();
    type ActionResult = ();
    type Filter = UserFilter;
    type Context = ();
    type Error = UserError;

    fn from_create_params(id: UserId, params: UserCreate) -> Result<Self, Self::Error> {
        validate_name(&params.name)?;
        let email = params.email.trim().to_lowercase();
        if !email.contains('@') {
            return Err(UserError::ValidationError(format!(
                "invalid email: {}",
                params.email
            )));
        }

        Ok(Self {
            id,
            name: params.name,
            email,
            phone: params.phone,
            role: params.role,
            address: params.address,
            created_at: Utc::now(),
        })
    }

    fn matches(&self, filter: &UserFilter) -> bool {
        match filter {
            UserFilter::All => true,
            UserFilter::Role(role) => self.role == *role,
        }
    }

    fn conflicts_with(&self, existing: &Self) -> bool {
        self.email == existing.email
    }

    /// Applies profile changes. The name is checked before anything changes.
    async fn on_update(&mut self, update: UserUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(name) = &update.name {
            validate_name(name)?;
        }
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(phone) = update.phone {
            self.phone = Some(phone);
        }
        if let Some(address) = update.address {
            self.address = Some(address);
        }
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), Self::Error> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Role;

    #[test]
    fn test_email_is_normalized() {
        let user = User::from_create_params(
            UserId(1),
            UserCreate::new("Alice", "  Alice@Example.COM ", Role::Customer),
        )
        .unwrap();
        assert_eq!(user.email, "alice@example.com");
    }

    #[test]
    fn test_invalid_payloads_rejected() {
        let blank = UserCreate::new(" ", "a@example.com", Role::Customer);
        assert!(matches!(
            User::from_create_params(UserId(1), blank),
            Err(UserError::ValidationError(_))
        ));

        let no_at = UserCreate::new("Bob", "bob.example.com", Role::Customer);
        assert!(matches!(
            User::from_create_params(UserId(1), no_at),
            Err(UserError::ValidationError(_))
        ));
    }

    #[tokio::test]
    async fn test_rejected_update_changes_nothing() {
        let mut user = User::from_create_params(
            UserId(1),
            UserCreate::new("Alice", "alice@example.com", Role::Customer),
        )
        .unwrap();

        let update = UserUpdate {
            name: Some("".into()),
            phone: Some("555-0100".into()),
            address: None,
        };
        assert!(user.on_update(update, &()).await.is_err());
        assert_eq!(user.name, "Alice");
        assert!(user.phone.is_none());
    }
}
