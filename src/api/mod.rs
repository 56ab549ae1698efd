//! Client entrance and business-area facades.
//!
//! The [`Client`] owns one [`Dispatcher`] and constructs every facade
//! explicitly at setup time; there is no lazy first-use initialization.
//! Facades are thin: each method builds an endpoint URI plus a
//! parameter map and forwards through the shared dispatcher.

mod user;

#[cfg(test)]
mod test_support;

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::auth::Credentials;
use crate::callback;
use crate::config::{ClientConfig, ConfigError};
use crate::dispatch::{ApiError, ApiPayload, DispatchMode, Dispatcher};
use crate::http::{HttpClient, ReqwestClient};
use crate::queue::{JobQueue, NullQueue};

pub use user::UserApi;

/// Entry point to the Yunxin server API.
///
/// Shareable across tasks; all methods take `&self` and dispatch state
/// is per-call.
#[derive(Debug)]
pub struct Client<H = ReqwestClient, Q = NullQueue> {
    dispatcher: Arc<Dispatcher<H, Q>>,
    user: UserApi<H, Q>,
}

impl Client<ReqwestClient, NullQueue> {
    /// Creates a client from validated configuration, using the
    /// production HTTP client and no job queue.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the configuration fails validation.
    pub fn new(config: &ClientConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let http = ReqwestClient::with_timeout(config.timeout());
        let dispatcher = Dispatcher::new(
            Credentials::new(config.app_key.clone(), config.app_secret.clone()),
            http,
            NullQueue,
        )
        .with_base_url(config.parsed_base_url()?);
        Ok(Self::from_dispatcher(dispatcher))
    }
}

impl<H: HttpClient, Q: JobQueue> Client<H, Q> {
    /// Creates a client over a custom HTTP client and job queue.
    ///
    /// This is how deferred dispatch gets wired up: pass the queue
    /// collaborator that feeds your worker.
    #[must_use]
    pub fn from_dispatcher(dispatcher: Dispatcher<H, Q>) -> Self {
        let dispatcher = Arc::new(dispatcher);
        let user = UserApi::new(Arc::clone(&dispatcher));
        Self { dispatcher, user }
    }

    /// The user (account) facade.
    #[must_use]
    pub const fn user(&self) -> &UserApi<H, Q> {
        &self.user
    }

    /// The underlying dispatcher, for endpoints without a facade.
    #[must_use]
    pub fn dispatcher(&self) -> &Dispatcher<H, Q> {
        &self.dispatcher
    }

    /// Dispatches an arbitrary endpoint in the given mode.
    ///
    /// # Errors
    ///
    /// Same as [`Dispatcher::dispatch`].
    pub async fn dispatch(
        &self,
        uri: &str,
        params: &BTreeMap<String, String>,
        mode: DispatchMode,
    ) -> Result<ApiPayload, ApiError> {
        self.dispatcher.dispatch(uri, params, mode).await
    }

    /// Verifies the checksum of an inbound event-copy callback against
    /// this client's app secret. See [`callback::is_legal_checksum`].
    #[must_use]
    pub fn is_legal_checksum(&self, body: &[u8], cur_time: &str, checksum: &str) -> bool {
        callback::is_legal_checksum(
            self.dispatcher.credentials().app_secret(),
            body,
            cur_time,
            checksum,
        )
    }
}
