use serde::{Deserialize, Serialize};

use crate::error::ConnectorError;
use crate::kind::ConnectorKind;
use crate::traits::Connector;
use crate::uri::QueryUri;

/// Customer.io messaging connector
///
/// `region` selects the Customer.io data center and is omitted from the URI
/// when not set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerIoConnector {
    pub api_key: String,
    #[serde(default)]
    pub region: Option<String>,
}

impl Connector for CustomerIoConnector {
    fn kind(&self) -> ConnectorKind {
        ConnectorKind::CustomerIo
    }

    fn uri(&self) -> Result<String, ConnectorError> {
        Ok(QueryUri::new(self.kind().scheme())
            .param("api_key", &self.api_key)
            .opt_param("region", self.region.as_deref())
            .finish())
    }
}

/// Mixpanel analytics connector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MixpanelConnector {
    pub username: String,
    pub password: String,
    pub project_id: String,
    /// Residency server, e.g. "eu" (default server when unset)
    #[serde(default)]
    pub server: Option<String>,
}

impl Connector for MixpanelConnector {
    fn kind(&self) -> ConnectorKind {
        ConnectorKind::Mixpanel
    }

    fn uri(&self) -> Result<String, ConnectorError> {
        Ok(QueryUri::new(self.kind().scheme())
            .param("username", &self.username)
            .param("password", &self.password)
            .param("project_id", &self.project_id)
            .opt_param("server", self.server.as_deref())
            .finish())
    }
}

/// TikTok Ads connector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TikTokAdsConnector {
    pub access_token: String,
    pub advertiser_ids: Vec<String>,
    #[serde(default)]
    pub timezone: Option<String>,
}

impl Connector for TikTokAdsConnector {
    fn kind(&self) -> ConnectorKind {
        ConnectorKind::TikTokAds
    }

    fn uri(&self) -> Result<String, ConnectorError> {
        Ok(QueryUri::new(self.kind().scheme())
            .param("access_token", &self.access_token)
            .param("advertiser_ids", &self.advertiser_ids.join(","))
            .opt_param("timezone", self.timezone.as_deref())
            .finish())
    }
}

/// LinkedIn Ads connector
///
/// When no account ids are given the downstream engine discovers the accounts
/// reachable with the token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkedInAdsConnector {
    pub access_token: String,
    #[serde(default)]
    pub account_ids: Vec<String>,
}

impl Connector for LinkedInAdsConnector {
    fn kind(&self) -> ConnectorKind {
        ConnectorKind::LinkedInAds
    }

    fn uri(&self) -> Result<String, ConnectorError> {
        Ok(QueryUri::new(self.kind().scheme())
            .param("access_token", &self.access_token)
            .param("account_ids", &self.account_ids.join(","))
            .finish())
    }
}

/// Chess.com public-data connector
///
/// Needs no credentials at all; the optional player list narrows the pull.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChessConnector {
    #[serde(default)]
    pub players: Vec<String>,
}

impl Connector for ChessConnector {
    fn kind(&self) -> ConnectorKind {
        ConnectorKind::Chess
    }

    fn uri(&self) -> Result<String, ConnectorError> {
        Ok(QueryUri::new(self.kind().scheme())
            .param("players", &self.players.join(","))
            .finish())
    }
}
