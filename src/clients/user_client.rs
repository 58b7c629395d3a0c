use crate::authz::{self, Principal};
use crate::model::{User, UserCreate, UserFilter, UserId, UserUpdate};
use crate::user_actor::UserError;
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the User actor.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl UserClient {
    pub fn new(inner: ResourceClient<User>) -> Self {
        Self { inner }
    }

    /// Registers an account. Fails with [`UserError::AlreadyExists`] if the
    /// email is taken.
    #[instrument(skip(self, params), fields(email = %params.email))]
    pub async fn create_user(&self, params: UserCreate) -> Result<UserId, UserError> {
        debug!("Sending request");
        let email = params.email.trim().to_lowercase();
        self.inner.create(params).await.map_err(|e| match e {
            FrameworkError::Duplicate(_) => UserError::AlreadyExists(email),
            other => Self::map_error(other),
        })
    }

    /// Fetches a user, failing if it doesn't exist.
    pub async fn require(&self, id: UserId) -> Result<User, UserError> {
        self.get(id)
            .await?
            .ok_or_else(|| UserError::NotFound(id.to_string()))
    }

    #[instrument(skip(self))]
    pub async fn update_profile(
        &self,
        principal: &Principal,
        id: UserId,
        update: UserUpdate,
    ) -> Result<User, UserError> {
        if !authz::can_modify(principal, &id) {
            return Err(UserError::Unauthorized(format!("cannot edit {id}")));
        }
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Admin-only, including for one's own account.
    #[instrument(skip(self))]
    pub async fn delete_user(&self, principal: &Principal, id: UserId) -> Result<(), UserError> {
        if !principal.is_admin() {
            return Err(UserError::Unauthorized(format!("cannot delete {id}")));
        }
        self.delete(id).await
    }

    /// Admin-only user listing.
    #[instrument(skip(self))]
    pub async fn list_users(
        &self,
        principal: &Principal,
        filter: UserFilter,
    ) -> Result<Vec<User>, UserError> {
        if !principal.is_admin() {
            return Err(UserError::Unauthorized("listing users".into()));
        }
        self.list(filter).await
    }
}

#[async_trait]
impl ActorClient<User> for UserClient {
    type Error = UserError;

    fn inner(&self) -> &ResourceClient<User> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.into_entity_error::<UserError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => UserError::NotFound(id),
            Err(other) => UserError::ActorCommunicationError(other.to_string()),
        }
    }
}
