use chrono::Utc;
use entity::sea_orm_active_enums::{BanKind, ModerationStatus, Region};
use sea_orm::{ConnectionTrait, DatabaseConnection, SqlErr, TransactionTrait};

use crate::{
    data::{
        inventory::InventoryRepository, profile::ProfileRepository, user::UserRepository,
        wallet::WalletRepository,
    },
    error::{
        auth::AuthError, registration::RegistrationError, validation::ValidationError, Error,
    },
    model::{
        account::{Credentials, LoginOutcome, RegistrationRequest},
        db::UserModel,
    },
    service::profile::ProfileService,
    util::{
        defaults::{starting_inventory, STARTING_WALLET},
        parse::required,
        password::{hash_password_blocking, verify_password_blocking},
    },
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    /// Creates a new instance of [`AuthService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new account and returns its user ID
    ///
    /// The user, profile, wallet and starting inventory are written in one transaction, so a
    /// failure at any step leaves no partial account behind.
    ///
    /// # Returns
    /// - `Ok(i32)` - ID of the new user
    /// - `Err(Error::ValidationError)` - Username, email, password or name is blank
    /// - `Err(Error::RegistrationError)` - Username or email already registered
    /// - `Err(Error::DbErr)` - Database failure
    pub async fn register(&self, request: RegistrationRequest) -> Result<i32, Error> {
        let account = self.prepare_account(request).await?;

        let txn = self.db.begin().await?;
        let user = insert_account(&txn, account).await?;
        txn.commit().await?;

        tracing::info!("Registered user {:?} with ID {}", user.username, user.id);

        Ok(user.id)
    }

    /// Validates a registration and hashes its password, ready for [`insert_account`]
    pub(crate) async fn prepare_account(
        &self,
        request: RegistrationRequest,
    ) -> Result<NewAccount, Error> {
        let username = required("username", &request.username)?;
        let email = required("email", &request.email)?.to_lowercase();
        let name = required("name", &request.name)?;
        if request.password.is_empty() {
            return Err(ValidationError::MissingField("password").into());
        }

        if UserRepository::new(self.db)
            .identity_taken(&username, &email)
            .await?
        {
            tracing::debug!("Registration rejected for {:?}: identity taken", username);
            return Err(RegistrationError::DuplicateIdentity.into());
        }

        let password_hash = hash_password_blocking(request.password).await?;

        Ok(NewAccount {
            username,
            email,
            password_hash,
            name,
            region: request.region,
            country: request.country.trim().to_string(),
        })
    }

    /// Checks a username and password pair
    ///
    /// Unknown usernames and wrong passwords both return `Ok(None)`. An unknown username
    /// still runs a full password verification so both cases take comparable time.
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<Credentials>, Error> {
        let found = UserRepository::new(self.db)
            .find_by_username(username.trim())
            .await?;

        let Some((user, profile)) = found else {
            verify_password_blocking(password.to_string(), None).await?;
            return Ok(None);
        };

        let password_hash = Some(user.password_hash.clone());
        if !verify_password_blocking(password.to_string(), password_hash).await? {
            return Ok(None);
        }

        Ok(Some(Credentials::from_models(&user, profile.as_ref())))
    }

    /// Authenticates and applies the moderation gate
    ///
    /// An unverified email is marked verified and reported as
    /// [`LoginOutcome::EmailVerified`]; the caller starts a session only on
    /// [`LoginOutcome::Authenticated`].
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginOutcome, Error> {
        let credentials = self.authenticate(username, password).await?;

        let credentials = match evaluate_login_gate(credentials.as_ref()) {
            Ok(()) => credentials.ok_or_else(|| {
                Error::InternalError("login gate passed without credentials".to_string())
            })?,
            Err(e) => {
                tracing::warn!("Login refused for {:?}: {}", username, e);
                return Err(e.into());
            }
        };

        if !credentials.email_verified {
            ProfileService::new(self.db)
                .mark_email_verified(credentials.user_id)
                .await?;

            tracing::info!("Verified email for user ID {}", credentials.user_id);

            return Ok(LoginOutcome::EmailVerified(credentials.user_id));
        }

        Ok(LoginOutcome::Authenticated(credentials.user_id))
    }
}

/// A validated registration with its password already hashed.
pub(crate) struct NewAccount {
    username: String,
    email: String,
    password_hash: String,
    name: String,
    region: Region,
    country: String,
}

/// Writes the user, profile, starting wallet and starting inventory of a new account
///
/// Pass a transaction so a failure at any step leaves no partial account behind.
pub(crate) async fn insert_account<C: ConnectionTrait>(
    db: &C,
    account: NewAccount,
) -> Result<UserModel, Error> {
    // A concurrent registration can still claim the name between the check and the insert
    let user = match UserRepository::new(db)
        .create(account.username, account.email, account.password_hash)
        .await
    {
        Ok(user) => user,
        Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
            return Err(RegistrationError::DuplicateIdentity.into());
        }
        Err(e) => return Err(e.into()),
    };

    ProfileRepository::new(db)
        .create(
            user.id,
            account.name,
            account.region,
            account.country,
            Utc::now().date_naive(),
        )
        .await?;
    WalletRepository::new(db)
        .create(user.id, STARTING_WALLET)
        .await?;
    InventoryRepository::new(db)
        .create_many(
            user.id,
            starting_inventory()
                .into_iter()
                .map(|(category, item)| (category, item.to_string()))
                .collect(),
        )
        .await?;

    Ok(user)
}

/// Applies the moderation rules to an authentication result, in fixed order
///
/// Missing credentials fail first, then permanent bans, temporary bans, suspensions and locks.
/// Email verification is not checked here.
pub fn evaluate_login_gate(credentials: Option<&Credentials>) -> Result<(), AuthError> {
    let Some(credentials) = credentials else {
        return Err(AuthError::InvalidCredentials);
    };

    match credentials.status {
        ModerationStatus::Banned => match credentials.ban_kind {
            BanKind::Permanent => Err(AuthError::PermanentlyBanned),
            BanKind::Temporary | BanKind::NoBan => Err(AuthError::TemporarilyBanned {
                until: credentials.suspension_end,
            }),
        },
        ModerationStatus::Suspended => Err(AuthError::Suspended {
            until: credentials.suspension_end,
        }),
        ModerationStatus::Locked => Err(AuthError::Locked),
        ModerationStatus::Active => Ok(()),
    }
}
