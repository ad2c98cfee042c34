// SPDX-FileCopyrightText: 2025-2026 Ladle Maintainers
//
// SPDX-License-Identifier: Apache-2.0

use log::warn;
use secrecy::{ExposeSecret as _, Secret, SecretString};
use serde::{Deserialize, Serialize};

use crate::{
    api,
    client::Api,
    error::{self, Result},
    model::Role,
    storage::Storage,
};

/// The bearer credential as it lives in memory and in the session file.
/// Wrapped so it is redacted from any debug output and wiped on drop.
#[derive(Clone, Deserialize, Serialize)]
pub(crate) struct TokenMaterial(String);

impl secrecy::Zeroize for TokenMaterial {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl secrecy::CloneableSecret for TokenMaterial {}

impl secrecy::SerializableSecret for TokenMaterial {}

/// The currently authenticated actor. A value of this type always carries
/// both a token and a role; an anonymous caller is the absence of a session,
/// never a partially filled one.
#[derive(Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Session {
    token: Secret<TokenMaterial>,
    role: Role,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    user_id: Option<String>,
    #[serde(default)]
    orphanage_id: Option<String>,
}

impl Session {
    pub(crate) fn new(
        token: String,
        role: Role,
        email: Option<String>,
        user_id: Option<String>,
        orphanage_id: Option<String>,
    ) -> Self {
        Self {
            token: Secret::new(TokenMaterial(token)),
            role,
            email,
            user_id,
            orphanage_id,
        }
    }

    /// A session file can carry an empty token string; such a record does
    /// not authenticate anyone and restores as anonymous.
    fn is_complete(&self) -> bool {
        !self.token.expose_secret().0.is_empty()
    }

    pub(crate) fn bearer(&self) -> SecretString {
        SecretString::new(self.token.expose_secret().0.clone())
    }

    pub(crate) const fn role(&self) -> Role {
        self.role
    }

    pub(crate) fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub(crate) fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    pub(crate) fn orphanage_id(&self) -> Option<&str> {
        self.orphanage_id.as_deref()
    }

    pub(crate) const fn is_hero(&self) -> bool {
        self.role.is_hero()
    }

    pub(crate) const fn is_orphanage(&self) -> bool {
        self.role.is_orphanage()
    }

    pub(crate) const fn can_publish(&self) -> bool {
        self.role.can_publish()
    }
}

/// Owns the persisted session and the in-memory copy of it. Every screen
/// reads the session through this store; only login and logout write it.
pub(crate) struct SessionStore {
    storage: Box<dyn Storage>,
    current: Option<Session>,
}

impl SessionStore {
    /// Reads the persisted session once, before any gated screen resolves.
    /// A corrupt or partial session file is tolerated and treated as absent.
    pub(crate) async fn restore(mut storage: Box<dyn Storage>) -> Self {
        let current = match storage.get().await {
            Ok(Some(session)) if session.is_complete() => Some(session),
            Ok(Some(_)) => {
                warn!("Ignoring a stored session without a usable token");
                None
            }
            Ok(None) => None,
            Err(e) => {
                warn!("Ignoring a stored session we could not read: {e}");
                None
            }
        };

        Self { storage, current }
    }

    pub(crate) fn current(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    pub(crate) fn bearer(&self) -> Option<SecretString> {
        self.current.as_ref().map(Session::bearer)
    }

    /// Authenticates against the server and installs the resulting session,
    /// persisting it before it is used. Returns the resolved role so the
    /// caller can land on the right screen.
    pub(crate) async fn login(
        &mut self,
        api: &(dyn Api + Send + Sync),
        email: &str,
        password: &SecretString,
    ) -> Result<Role> {
        let request = api::LoginRequest {
            email: email.to_owned(),
            password: password.expose_secret().clone(),
        };
        let response = api.login(&request).await?;
        let role = Role::from_wire(&response.role)
            .ok_or_else(|| error::Api::UnknownRole(response.role.clone()))?;

        let session = Session::new(
            response.token,
            role,
            Some(email.to_owned()),
            response.user_id,
            response.orphanage_id,
        );
        self.storage.update(&session).await?;
        self.current = Some(session);
        Ok(role)
    }

    /// Registers a new account. No session is established; the caller must
    /// direct the user to log in afterwards.
    pub(crate) async fn signup(
        &self,
        api: &(dyn Api + Send + Sync),
        profile: &api::RegistryRequest,
        role: Role,
    ) -> Result<()> {
        api.register(role, profile).await
    }

    /// Drops the persisted and in-memory session unconditionally. A missing
    /// session file is not an error.
    pub(crate) async fn logout(&mut self) -> Result<()> {
        self.storage.clear().await?;
        self.current = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        command::testing::RecordingApi,
        model::Role,
        storage::{Memory, Storage},
    };

    use super::{Session, SessionStore};

    fn full_session() -> Session {
        Session::new(
            "tok-1".to_owned(),
            Role::Orphanage,
            Some("home@example.com".to_owned()),
            Some("7".to_owned()),
            Some("orph-1".to_owned()),
        )
    }

    async fn storage_with(session: Option<Session>) -> Box<dyn Storage> {
        let mut storage = Memory::new();
        if let Some(session) = session {
            storage.update(&session).await.unwrap();
        }
        Box::new(storage)
    }

    #[tokio::test]
    async fn restore_installs_a_complete_session() {
        let store = SessionStore::restore(storage_with(Some(full_session())).await).await;
        let session = store.current().unwrap();
        assert_eq!(session.role(), Role::Orphanage);
        assert_eq!(session.email(), Some("home@example.com"));
        assert_eq!(session.user_id(), Some("7"));
        assert_eq!(session.orphanage_id(), Some("orph-1"));
    }

    #[tokio::test]
    async fn restore_without_a_stored_session_is_anonymous() {
        let store = SessionStore::restore(storage_with(None).await).await;
        assert!(store.current().is_none());
        assert!(store.bearer().is_none());
    }

    #[tokio::test]
    async fn restore_treats_an_empty_token_as_anonymous() {
        let hollow = Session::new(String::new(), Role::MissionHero, None, None, None);
        let store = SessionStore::restore(storage_with(Some(hollow)).await).await;
        assert!(store.current().is_none());
    }

    #[test]
    fn partial_session_records_do_not_deserialize() {
        // Both token and role are mandatory; anything less is not a session.
        assert!(serde_json::from_str::<Session>(r#"{"token": "tok-1"}"#).is_err());
        assert!(serde_json::from_str::<Session>(r#"{"role": "ORPHANAGE"}"#).is_err());
        assert!(serde_json::from_str::<Session>("{}").is_err());

        let session: Session =
            serde_json::from_str(r#"{"token": "tok-1", "role": "ORPHANAGE"}"#).unwrap();
        assert!(session.is_complete());
        assert_eq!(session.email(), None);
    }

    #[test]
    fn session_files_round_trip_with_stable_keys() {
        let json = serde_json::to_value(full_session()).unwrap();
        assert_eq!(json["token"], "tok-1");
        assert_eq!(json["role"], "ORPHANAGE");
        assert_eq!(json["email"], "home@example.com");
        assert_eq!(json["userId"], "7");
        assert_eq!(json["orphanageId"], "orph-1");
    }

    #[tokio::test]
    async fn login_persists_and_installs_the_session() {
        let api = RecordingApi::default().with_login(
            "tok-9",
            "MISSION_HERO",
            Some("42"),
            None,
        );
        let mut store = SessionStore::restore(storage_with(None).await).await;

        let role = store
            .login(&api, "hero@example.com", &"pw".to_owned().into())
            .await
            .unwrap();
        assert_eq!(role, Role::MissionHero);

        let session = store.current().unwrap();
        assert_eq!(session.email(), Some("hero@example.com"));
        assert_eq!(session.user_id(), Some("42"));
        assert!(session.is_hero());
        assert!(!session.can_publish());
    }

    #[tokio::test]
    async fn login_rejects_a_role_outside_the_taxonomy() {
        let api = RecordingApi::default().with_login("tok-9", "SUPERUSER", None, None);
        let mut store = SessionStore::restore(storage_with(None).await).await;

        let result = store
            .login(&api, "hero@example.com", &"pw".to_owned().into())
            .await;
        assert!(result.is_err());
        assert!(store.current().is_none());
    }

    #[tokio::test]
    async fn logout_always_yields_an_anonymous_session() {
        let mut store = SessionStore::restore(storage_with(Some(full_session())).await).await;
        assert!(store.current().is_some());

        store.logout().await.unwrap();
        assert!(store.current().is_none());

        // Logging out twice is fine: there is nothing left to clear.
        store.logout().await.unwrap();
        assert!(store.current().is_none());
    }
}
