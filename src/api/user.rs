//! User (account) endpoints.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::dispatch::{ApiError, ApiPayload, Dispatcher};
use crate::http::HttpClient;
use crate::queue::JobQueue;

/// Facade over the `user/*` endpoint family.
///
/// Every method builds the endpoint's parameter map and forwards it
/// through the shared dispatcher; errors surface unchanged.
#[derive(Debug)]
pub struct UserApi<H, Q> {
    dispatcher: Arc<Dispatcher<H, Q>>,
}

impl<H, Q> UserApi<H, Q> {
    pub(super) const fn new(dispatcher: Arc<Dispatcher<H, Q>>) -> Self {
        Self { dispatcher }
    }
}

impl<H: HttpClient, Q: JobQueue> UserApi<H, Q> {
    /// Creates an account (`accid`, unique within the app).
    ///
    /// `options` may carry the optional fields the endpoint accepts
    /// (`name`, `icon`, `token`, `sign`, `email`, `birth`, `mobile`,
    /// `gender`, `ex`). An `accid` entry in `options` is overridden by
    /// the explicit argument.
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`] from dispatch.
    pub async fn create(
        &self,
        accid: &str,
        options: &BTreeMap<String, String>,
    ) -> Result<ApiPayload, ApiError> {
        let mut params = options.clone();
        params.insert("accid".to_string(), accid.to_string());
        self.dispatcher.send("user/create.action", &params).await
    }

    /// Sets a new login token for the account.
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`] from dispatch.
    pub async fn update(&self, accid: &str, token: &str) -> Result<ApiPayload, ApiError> {
        let params = BTreeMap::from([
            ("accid".to_string(), accid.to_string()),
            ("token".to_string(), token.to_string()),
        ]);
        self.dispatcher.send("user/update.action", &params).await
    }

    /// Regenerates the account's login token; the new token is returned
    /// in the envelope.
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`] from dispatch.
    pub async fn refresh_token(&self, accid: &str) -> Result<ApiPayload, ApiError> {
        let params = BTreeMap::from([("accid".to_string(), accid.to_string())]);
        self.dispatcher
            .send("user/refreshToken.action", &params)
            .await
    }

    /// Bans the account. With `needkick` the account is also kicked out
    /// of any live session; the ban itself only takes effect on the
    /// next login.
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`] from dispatch.
    pub async fn block(&self, accid: &str, needkick: bool) -> Result<ApiPayload, ApiError> {
        let params = BTreeMap::from([
            ("accid".to_string(), accid.to_string()),
            ("needkick".to_string(), bool_str(needkick).to_string()),
        ]);
        self.dispatcher.send("user/block.action", &params).await
    }

    /// Lifts a ban placed by [`UserApi::block`].
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`] from dispatch.
    pub async fn unblock(&self, accid: &str) -> Result<ApiPayload, ApiError> {
        let params = BTreeMap::from([("accid".to_string(), accid.to_string())]);
        self.dispatcher.send("user/unblock.action", &params).await
    }

    /// Updates the account's profile card.
    ///
    /// `options` carries the card fields to change (`name`, `icon`,
    /// `sign`, `email`, `birth`, `mobile`, `gender`, `ex`).
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`] from dispatch.
    pub async fn update_uinfo(
        &self,
        accid: &str,
        options: &BTreeMap<String, String>,
    ) -> Result<ApiPayload, ApiError> {
        let mut params = options.clone();
        params.insert("accid".to_string(), accid.to_string());
        self.dispatcher
            .send("user/updateUinfo.action", &params)
            .await
    }

    /// Fetches profile cards for up to 200 accounts.
    ///
    /// The account list is sent as a JSON array string, as the wire
    /// protocol requires.
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`] from dispatch.
    pub async fn get_uinfos(&self, accids: &[&str]) -> Result<ApiPayload, ApiError> {
        let accids_json = serde_json::Value::from(
            accids.iter().map(|s| (*s).to_string()).collect::<Vec<_>>(),
        )
        .to_string();
        let params = BTreeMap::from([("accids".to_string(), accids_json)]);
        self.dispatcher.send("user/getUinfos.action", &params).await
    }

    /// Mutes or unmutes the account globally.
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`] from dispatch.
    pub async fn mute(&self, accid: &str, mute: bool) -> Result<ApiPayload, ApiError> {
        let params = BTreeMap::from([
            ("accid".to_string(), accid.to_string()),
            ("mute".to_string(), bool_str(mute).to_string()),
        ]);
        self.dispatcher.send("user/mute.action", &params).await
    }
}

/// Renders a boolean the way the wire protocol expects.
const fn bool_str(v: bool) -> &'static str {
    if v { "true" } else { "false" }
}
