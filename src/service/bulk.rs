use sea_orm::DatabaseConnection;

use crate::{
    data::user::UserRepository,
    error::Error,
    model::{
        account::RegistrationRequest,
        bulk::{AccountExport, CredentialRow, RegistrationRow, RowStatus},
    },
    service::{
        account::AccountService,
        auth::{evaluate_login_gate, AuthService},
    },
    util::parse::parse_region,
};

/// Row-by-row entry points for tabular import and export tools.
///
/// A rejected row is reported in its [`RowStatus`] and processing continues; only
/// infrastructure failures abort the batch.
pub struct BulkService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BulkService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks each credential pair against the login rules without side effects
    ///
    /// Unlike [`AuthService::login`], an unverified email is reported but not marked verified.
    pub async fn verify_rows(&self, rows: Vec<CredentialRow>) -> Result<Vec<RowStatus>, Error> {
        let auth_service = AuthService::new(self.db);
        let mut statuses = Vec::with_capacity(rows.len());

        for row in rows {
            let credentials = auth_service
                .authenticate(&row.username, &row.password)
                .await?;

            let status = match evaluate_login_gate(credentials.as_ref()) {
                Err(e) => RowStatus {
                    username: row.username,
                    success: false,
                    status: e.to_string(),
                },
                Ok(()) => {
                    let verified = credentials.is_some_and(|c| c.email_verified);
                    RowStatus {
                        username: row.username,
                        success: true,
                        status: if verified {
                            "Valid".to_string()
                        } else {
                            "Valid, email not verified".to_string()
                        },
                    }
                }
            };
            statuses.push(status);
        }

        Ok(statuses)
    }

    /// Registers each row as a new account
    ///
    /// The region is matched case-insensitively; an unknown region fails only its row.
    pub async fn register_rows(
        &self,
        rows: Vec<RegistrationRow>,
    ) -> Result<Vec<RowStatus>, Error> {
        let auth_service = AuthService::new(self.db);
        let mut statuses = Vec::with_capacity(rows.len());
        let mut registered = 0;

        for row in rows {
            let username = row.username.clone();

            let region = match parse_region(&row.region) {
                Ok(region) => region,
                Err(e) => {
                    statuses.push(RowStatus {
                        username,
                        success: false,
                        status: e.to_string(),
                    });
                    continue;
                }
            };

            let request = RegistrationRequest {
                username: row.username,
                email: row.email,
                password: row.password,
                name: row.name,
                region,
                country: row.country,
            };

            let status = match auth_service.register(request).await {
                Ok(user_id) => {
                    registered += 1;
                    RowStatus {
                        username,
                        success: true,
                        status: format!("Registered with user ID {}", user_id),
                    }
                }
                Err(e) if e.is_business() => RowStatus {
                    username,
                    success: false,
                    status: e.to_string(),
                },
                Err(e) => return Err(e),
            };
            statuses.push(status);
        }

        tracing::info!(
            "Bulk registration created {} of {} accounts",
            registered,
            statuses.len()
        );

        Ok(statuses)
    }

    /// One snapshot per user in registration order
    pub async fn export_accounts(&self) -> Result<Vec<AccountExport>, Error> {
        let users = UserRepository::new(self.db).all().await?;
        let account_service = AccountService::new(self.db);
        let mut exports = Vec::with_capacity(users.len());

        for user in users {
            let dashboard = account_service.get_dashboard(user.id).await?;
            exports.push(AccountExport {
                user_id: dashboard.user_id,
                username: dashboard.username,
                email: dashboard.email,
                profile: dashboard.profile,
                wallet: dashboard.wallet,
                inventory: dashboard.inventory,
                match_history: dashboard.match_history,
            });
        }

        Ok(exports)
    }
}
