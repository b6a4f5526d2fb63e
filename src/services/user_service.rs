//! User service - account and profile management.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use super::auth_service::RegisterData;
use crate::domain::{NewUser, Password, ProfileUpdate, User};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

/// Profile changes requested by the user (or an admin on their behalf).
///
/// A password change requires the current password; it is verified before
/// anything is written.
#[derive(Debug, Clone, Default)]
pub struct ProfileChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub phone_number: Option<String>,
    pub current_password: Option<String>,
    pub new_password: Option<String>,
}

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Get user by ID
    async fn get_user(&self, id: Uuid) -> AppResult<User>;

    /// List all users, newest first
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Create an account without issuing a token (public registration)
    async fn create_user(&self, data: RegisterData) -> AppResult<User>;

    /// Apply profile changes
    async fn update_profile(&self, id: Uuid, changes: ProfileChanges) -> AppResult<User>;

    /// Permanently delete a user
    async fn delete_user(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of [`UserService`] using Unit of Work.
pub struct UserManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> UserManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> UserService for UserManager<U> {
    async fn get_user(&self, id: Uuid) -> AppResult<User> {
        self.uow
            .users()
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.uow.users().list().await
    }

    async fn create_user(&self, data: RegisterData) -> AppResult<User> {
        if self.uow.users().find_by_email(&data.email).await?.is_some() {
            return Err(AppError::conflict("User with this email already exists"));
        }

        let password_hash = Password::new(&data.password)?.into_string();
        self.uow
            .users()
            .create(NewUser {
                name: data.name,
                email: data.email,
                password_hash,
                address: data.address,
                phone_number: data.phone_number,
            })
            .await
    }

    async fn update_profile(&self, id: Uuid, changes: ProfileChanges) -> AppResult<User> {
        let user = self
            .uow
            .users()
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        // Changing email must not collide with another account
        if let Some(new_email) = &changes.email {
            if *new_email != user.email
                && self.uow.users().find_by_email(new_email).await?.is_some()
            {
                return Err(AppError::conflict("Email already exists"));
            }
        }

        // Password change requires the current password
        let password_hash = match (&changes.current_password, &changes.new_password) {
            (Some(current), Some(new)) => {
                let stored = Password::from_hash(user.password_hash.clone());
                if !stored.verify(current) {
                    return Err(AppError::validation("Current password is incorrect"));
                }
                Some(Password::new(new)?.into_string())
            }
            _ => None,
        };

        self.uow
            .users()
            .update(
                id,
                ProfileUpdate {
                    name: changes.name,
                    email: changes.email,
                    address: changes.address,
                    phone_number: changes.phone_number,
                    password_hash,
                },
            )
            .await
    }

    async fn delete_user(&self, id: Uuid) -> AppResult<()> {
        self.uow.users().delete(id).await
    }
}
