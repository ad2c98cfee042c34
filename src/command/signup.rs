// SPDX-FileCopyrightText: 2025-2026 Ladle Maintainers
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use clap::Parser;
use secrecy::ExposeSecret;

use crate::{api, error::Result, model::Role, prompt::Prompt};

use super::Context;

/// Register a new account. Signing up does not sign you in; run
/// `ladle login` afterwards.
#[derive(Debug, Parser)]
pub(crate) struct Command {
    /// The role to register as.
    #[arg(long, value_enum)]
    role: Role,

    /// The email address of the new account.
    #[arg(long)]
    email: String,

    /// A display name.
    #[arg(long)]
    name: Option<String>,

    /// A contact phone number.
    #[arg(long)]
    phone_number: Option<String>,

    /// The country of the account.
    #[arg(long)]
    country: Option<String>,

    /// The dialing prefix of the phone number, for example +91.
    #[arg(long)]
    country_code: Option<String>,
}

#[async_trait]
impl super::Command for Command {
    async fn execute(self, ctx: Context) -> Result<()> {
        let password = ctx.prompt.password("Password").await?;

        let profile = api::RegistryRequest {
            name: self.name,
            email: self.email.clone(),
            password: password.expose_secret().clone(),
            phone_number: self.phone_number,
            country: self.country,
            country_code: self.country_code,
        };
        ctx.store
            .signup(ctx.api.as_ref(), &profile, self.role)
            .await?;

        println!("Registration successful! Welcome to the Muruga Kitchen family.");
        println!("Run `ladle login --email {}` to sign in.", self.email);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        command::testing::{context_with_prompt, Call, RecordingApi},
        command::Command as _,
        model::Role,
        prompt::testing::ScriptedPrompt,
    };

    #[tokio::test]
    async fn signup_registers_but_establishes_no_session() {
        let api = RecordingApi::default();
        let prompt = ScriptedPrompt::default().with_password("pw");
        let ctx = context_with_prompt(api.clone(), None, prompt).await;

        super::Command {
            role: Role::FoodDonator,
            email: "donor@example.com".to_owned(),
            name: Some("Anand".to_owned()),
            phone_number: None,
            country: None,
            country_code: None,
        }
        .execute(ctx)
        .await
        .unwrap();

        assert_eq!(api.recorded(), vec![Call::Register(Role::FoodDonator)]);
    }
}
