use serde::{Deserialize, Serialize};

use crate::error::ConnectorError;
use crate::kind::ConnectorKind;
use crate::traits::Connector;
use crate::uri::QueryUri;

/// Facebook Ads connector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacebookAdsConnector {
    pub access_token: String,
    pub account_id: String,
}

impl Connector for FacebookAdsConnector {
    fn kind(&self) -> ConnectorKind {
        ConnectorKind::FacebookAds
    }

    fn uri(&self) -> Result<String, ConnectorError> {
        Ok(QueryUri::new(self.kind().scheme())
            .param("access_token", &self.access_token)
            .param("account_id", &self.account_id)
            .finish())
    }
}

/// Asana project-management connector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AsanaConnector {
    pub access_token: String,
    pub workspace: String,
}

impl Connector for AsanaConnector {
    fn kind(&self) -> ConnectorKind {
        ConnectorKind::Asana
    }

    fn uri(&self) -> Result<String, ConnectorError> {
        Ok(QueryUri::new(self.kind().scheme())
            .param("access_token", &self.access_token)
            .param("workspace", &self.workspace)
            .finish())
    }
}

/// Airtable base connector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirtableConnector {
    pub access_token: String,
    pub base_id: String,
}

impl Connector for AirtableConnector {
    fn kind(&self) -> ConnectorKind {
        ConnectorKind::Airtable
    }

    fn uri(&self) -> Result<String, ConnectorError> {
        Ok(QueryUri::new(self.kind().scheme())
            .param("access_token", &self.access_token)
            .param("base_id", &self.base_id)
            .finish())
    }
}

/// Gorgias helpdesk connector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GorgiasConnector {
    pub domain: String,
    pub email: String,
    pub api_key: String,
}

impl Connector for GorgiasConnector {
    fn kind(&self) -> ConnectorKind {
        ConnectorKind::Gorgias
    }

    fn uri(&self) -> Result<String, ConnectorError> {
        Ok(QueryUri::new(self.kind().scheme())
            .param("domain", &self.domain)
            .param("email", &self.email)
            .param("api_key", &self.api_key)
            .finish())
    }
}

/// Freshdesk helpdesk connector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FreshdeskConnector {
    pub domain: String,
    pub api_key: String,
}

impl Connector for FreshdeskConnector {
    fn kind(&self) -> ConnectorKind {
        ConnectorKind::Freshdesk
    }

    fn uri(&self) -> Result<String, ConnectorError> {
        Ok(QueryUri::new(self.kind().scheme())
            .param("domain", &self.domain)
            .param("api_key", &self.api_key)
            .finish())
    }
}

/// Kafka topic connector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KafkaConnector {
    pub bootstrap_servers: String,
    pub group_id: String,
}

impl Connector for KafkaConnector {
    fn kind(&self) -> ConnectorKind {
        ConnectorKind::Kafka
    }

    fn uri(&self) -> Result<String, ConnectorError> {
        Ok(QueryUri::new(self.kind().scheme())
            .param("bootstrap_servers", &self.bootstrap_servers)
            .param("group_id", &self.group_id)
            .finish())
    }
}

/// Personio HR connector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonioConnector {
    pub client_id: String,
    pub client_secret: String,
}

impl Connector for PersonioConnector {
    fn kind(&self) -> ConnectorKind {
        ConnectorKind::Personio
    }

    fn uri(&self) -> Result<String, ConnectorError> {
        Ok(QueryUri::new(self.kind().scheme())
            .param("client_id", &self.client_id)
            .param("client_secret", &self.client_secret)
            .finish())
    }
}

/// Solidgate payments connector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolidgateConnector {
    pub public_key: String,
    pub secret_key: String,
}

impl Connector for SolidgateConnector {
    fn kind(&self) -> ConnectorKind {
        ConnectorKind::Solidgate
    }

    fn uri(&self) -> Result<String, ConnectorError> {
        Ok(QueryUri::new(self.kind().scheme())
            .param("public_key", &self.public_key)
            .param("secret_key", &self.secret_key)
            .finish())
    }
}

/// Trustpilot reviews connector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrustpilotConnector {
    pub business_unit_id: String,
    pub api_key: String,
}

impl Connector for TrustpilotConnector {
    fn kind(&self) -> ConnectorKind {
        ConnectorKind::Trustpilot
    }

    fn uri(&self) -> Result<String, ConnectorError> {
        Ok(QueryUri::new(self.kind().scheme())
            .param("business_unit_id", &self.business_unit_id)
            .param("api_key", &self.api_key)
            .finish())
    }
}

/// Shopify store connector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopifyConnector {
    pub shop_url: String,
    pub api_key: String,
}

impl Connector for ShopifyConnector {
    fn kind(&self) -> ConnectorKind {
        ConnectorKind::Shopify
    }

    fn uri(&self) -> Result<String, ConnectorError> {
        Ok(QueryUri::new(self.kind().scheme())
            .param("shop_url", &self.shop_url)
            .param("api_key", &self.api_key)
            .finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facebookads_uri_contains_both_parameters() {
        let connector = FacebookAdsConnector {
            access_token: "tok".to_string(),
            account_id: "42".to_string(),
        };
        assert_eq!(
            connector.uri().unwrap(),
            "facebookads://?access_token=tok&account_id=42"
        );
    }

    #[test]
    fn test_gorgias_parameter_order_is_fixed() {
        let connector = GorgiasConnector {
            domain: "acme".to_string(),
            email: "ops@acme.io".to_string(),
            api_key: "k".to_string(),
        };
        assert_eq!(
            connector.uri().unwrap(),
            "gorgias://?domain=acme&email=ops%40acme.io&api_key=k"
        );
    }

    #[test]
    fn test_kafka_bootstrap_servers_are_encoded() {
        let connector = KafkaConnector {
            bootstrap_servers: "broker1:9092,broker2:9092".to_string(),
            group_id: "ingest".to_string(),
        };
        assert_eq!(
            connector.uri().unwrap(),
            "kafka://?bootstrap_servers=broker1%3A9092%2Cbroker2%3A9092&group_id=ingest"
        );
    }

    #[test]
    fn test_missing_required_field_is_omitted() {
        let connector = AirtableConnector {
            access_token: "tok".to_string(),
            base_id: String::new(),
        };
        assert_eq!(connector.uri().unwrap(), "airtable://?access_token=tok");
    }
}
