use sea_orm::DatabaseConnection;

use crate::{
    data::profile::ProfileRepository,
    error::{validation::ValidationError, Error},
    model::account::{ProfileDto, ProfileForm, ProfileUpdate},
    util::parse::{profile_update_from_form, required},
};

pub struct ProfileService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProfileService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns the user's profile, or the zero-value profile if none is stored
    pub async fn get_profile(&self, user_id: i32) -> Result<ProfileDto, Error> {
        let profile = ProfileRepository::new(self.db).get(user_id).await?;

        Ok(profile.map(ProfileDto::from).unwrap_or_default())
    }

    /// Writes the provided fields of a profile
    ///
    /// # Returns
    /// - `Ok(ProfileDto)` - The profile after the update
    /// - `Err(Error::ValidationError)` - Blank name or level below 1
    /// - `Err(Error::NotFound)` - The user has no profile
    pub async fn update_profile(
        &self,
        user_id: i32,
        mut update: ProfileUpdate,
    ) -> Result<ProfileDto, Error> {
        if let Some(name) = update.name.take() {
            update.name = Some(required("name", &name)?);
        }
        if let Some(level) = update.level {
            if level < 1 {
                return Err(ValidationError::InvalidLevel(level.to_string()).into());
            }
        }

        let profile = ProfileRepository::new(self.db)
            .update(user_id, update)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Profile for user ID {}", user_id)))?;

        tracing::debug!("Updated profile for user ID {}", user_id);

        Ok(profile.into())
    }

    /// Coerces a raw form submission and applies it
    pub async fn update_profile_form(
        &self,
        user_id: i32,
        form: ProfileForm,
    ) -> Result<ProfileDto, Error> {
        let update = profile_update_from_form(form)?;

        self.update_profile(user_id, update).await
    }

    pub async fn mark_email_verified(&self, user_id: i32) -> Result<(), Error> {
        let rows = ProfileRepository::new(self.db)
            .set_email_verified(user_id)
            .await?;

        if rows == 0 {
            return Err(Error::NotFound(format!("Profile for user ID {}", user_id)));
        }

        Ok(())
    }
}
