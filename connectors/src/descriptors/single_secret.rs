use serde::{Deserialize, Serialize};

use crate::error::ConnectorError;
use crate::kind::ConnectorKind;
use crate::traits::Connector;
use crate::uri::QueryUri;

/// HubSpot CRM connector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HubspotConnector {
    pub api_key: String,
}

impl Connector for HubspotConnector {
    fn kind(&self) -> ConnectorKind {
        ConnectorKind::Hubspot
    }

    fn uri(&self) -> Result<String, ConnectorError> {
        Ok(QueryUri::new(self.kind().scheme())
            .param("api_key", &self.api_key)
            .finish())
    }
}

/// Notion workspace connector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotionConnector {
    pub api_key: String,
}

impl Connector for NotionConnector {
    fn kind(&self) -> ConnectorKind {
        ConnectorKind::Notion
    }

    fn uri(&self) -> Result<String, ConnectorError> {
        Ok(QueryUri::new(self.kind().scheme())
            .param("api_key", &self.api_key)
            .finish())
    }
}

/// Stripe payments connector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StripeConnector {
    pub api_key: String,
}

impl Connector for StripeConnector {
    fn kind(&self) -> ConnectorKind {
        ConnectorKind::Stripe
    }

    fn uri(&self) -> Result<String, ConnectorError> {
        Ok(QueryUri::new(self.kind().scheme())
            .param("api_key", &self.api_key)
            .finish())
    }
}

/// Slack workspace connector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlackConnector {
    pub api_key: String,
}

impl Connector for SlackConnector {
    fn kind(&self) -> ConnectorKind {
        ConnectorKind::Slack
    }

    fn uri(&self) -> Result<String, ConnectorError> {
        Ok(QueryUri::new(self.kind().scheme())
            .param("api_key", &self.api_key)
            .finish())
    }
}

/// Klaviyo marketing connector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KlaviyoConnector {
    pub api_key: String,
}

impl Connector for KlaviyoConnector {
    fn kind(&self) -> ConnectorKind {
        ConnectorKind::Klaviyo
    }

    fn uri(&self) -> Result<String, ConnectorError> {
        Ok(QueryUri::new(self.kind().scheme())
            .param("api_key", &self.api_key)
            .finish())
    }
}

/// Pipedrive CRM connector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipedriveConnector {
    pub api_token: String,
}

impl Connector for PipedriveConnector {
    fn kind(&self) -> ConnectorKind {
        ConnectorKind::Pipedrive
    }

    fn uri(&self) -> Result<String, ConnectorError> {
        Ok(QueryUri::new(self.kind().scheme())
            .param("api_token", &self.api_token)
            .finish())
    }
}

/// Linear issue-tracking connector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearConnector {
    pub api_key: String,
}

impl Connector for LinearConnector {
    fn kind(&self) -> ConnectorKind {
        ConnectorKind::Linear
    }

    fn uri(&self) -> Result<String, ConnectorError> {
        Ok(QueryUri::new(self.kind().scheme())
            .param("api_key", &self.api_key)
            .finish())
    }
}

/// Attio CRM connector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttioConnector {
    pub api_key: String,
}

impl Connector for AttioConnector {
    fn kind(&self) -> ConnectorKind {
        ConnectorKind::Attio
    }

    fn uri(&self) -> Result<String, ConnectorError> {
        Ok(QueryUri::new(self.kind().scheme())
            .param("api_key", &self.api_key)
            .finish())
    }
}

/// PhantomBuster automation connector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhantombusterConnector {
    pub api_key: String,
}

impl Connector for PhantombusterConnector {
    fn kind(&self) -> ConnectorKind {
        ConnectorKind::Phantombuster
    }

    fn uri(&self) -> Result<String, ConnectorError> {
        Ok(QueryUri::new(self.kind().scheme())
            .param("api_key", &self.api_key)
            .finish())
    }
}

/// AppLovin ad-network connector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplovinConnector {
    pub api_key: String,
}

impl Connector for ApplovinConnector {
    fn kind(&self) -> ConnectorKind {
        ConnectorKind::Applovin
    }

    fn uri(&self) -> Result<String, ConnectorError> {
        Ok(QueryUri::new(self.kind().scheme())
            .param("api_key", &self.api_key)
            .finish())
    }
}

/// AppsFlyer attribution connector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppsflyerConnector {
    pub api_key: String,
}

impl Connector for AppsflyerConnector {
    fn kind(&self) -> ConnectorKind {
        ConnectorKind::Appsflyer
    }

    fn uri(&self) -> Result<String, ConnectorError> {
        Ok(QueryUri::new(self.kind().scheme())
            .param("api_key", &self.api_key)
            .finish())
    }
}

/// Pinterest ads connector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PinterestConnector {
    pub access_token: String,
}

impl Connector for PinterestConnector {
    fn kind(&self) -> ConnectorKind {
        ConnectorKind::Pinterest
    }

    fn uri(&self) -> Result<String, ConnectorError> {
        Ok(QueryUri::new(self.kind().scheme())
            .param("access_token", &self.access_token)
            .finish())
    }
}

/// Smartsheet spreadsheet connector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmartsheetConnector {
    pub access_token: String,
}

impl Connector for SmartsheetConnector {
    fn kind(&self) -> ConnectorKind {
        ConnectorKind::Smartsheet
    }

    fn uri(&self) -> Result<String, ConnectorError> {
        Ok(QueryUri::new(self.kind().scheme())
            .param("access_token", &self.access_token)
            .finish())
    }
}
