//! Entry point wiring credentials, gateway and resource clients together.

use crate::auth::{CredentialManager, TokenCell};
use crate::config::{ClientConfig, Credentials};
use crate::context::{ApiContext, ResourceClient};
use crate::http::HttpGateway;
use crate::{BearerToken, BnetError};

/// Authenticated handle to the Battle.net APIs.
///
/// ```no_run
/// use bnet_client::{BattleNet, ClientConfig, Credentials, Locale, Region};
/// use bnet_client::wow::BossClient;
///
/// # async fn run() -> Result<(), bnet_client::BnetError> {
/// let bnet = BattleNet::connect(Credentials::from_env()?, ClientConfig::from_env()?).await?;
/// let bosses = bnet.client::<BossClient>().get_master_list(Region::Us, Locale::EnUs).await?;
/// println!("{}", bosses["bosses"].as_array().map_or(0, Vec::len));
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct BattleNet {
    credentials: CredentialManager,
    context: ApiContext,
    config: ClientConfig,
}

impl BattleNet {
    /// Build the gateway and credential manager without authenticating.
    pub fn new(credentials: Credentials, config: ClientConfig) -> Result<Self, BnetError> {
        let http = config.http_client()?;
        let manager = CredentialManager::with_client(credentials, &config, http.clone());
        let gateway = HttpGateway::with_client(http, HttpGateway::cache_for(&config));
        let context =
            ApiContext::new(gateway, manager.token_cell()).with_api_base(config.api_base.clone());

        Ok(Self {
            credentials: manager,
            context,
            config,
        })
    }

    /// Build and perform the client-credentials exchange.
    pub async fn connect(credentials: Credentials, config: ClientConfig) -> Result<Self, BnetError> {
        let bnet = Self::new(credentials, config)?;
        bnet.credentials.authenticate().await?;
        Ok(bnet)
    }

    /// Build around a token obtained elsewhere. No exchange is performed,
    /// and `reauthenticate` fails with `Config` since no credentials are held.
    pub fn with_token(token: BearerToken, config: ClientConfig) -> Result<Self, BnetError> {
        let bnet = Self::new(Credentials::new("", ""), config)?;
        bnet.credentials.set_token(token);
        Ok(bnet)
    }

    pub fn credentials(&self) -> &CredentialManager {
        &self.credentials
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn gateway(&self) -> &HttpGateway {
        self.context.gateway()
    }

    pub fn token_cell(&self) -> TokenCell {
        self.credentials.token_cell()
    }

    /// Context shared by every client built from this handle.
    pub fn context(&self) -> ApiContext {
        self.context.clone()
    }

    /// Build any resource client, e.g. `bnet.client::<wow::RealmClient>()`.
    pub fn client<C: ResourceClient>(&self) -> C {
        C::from_context(self.context())
    }

    /// Re-run the token exchange. Clients pick up the new token at once.
    pub async fn reauthenticate(&self) -> Result<BearerToken, BnetError> {
        self.credentials.authenticate().await
    }
}
