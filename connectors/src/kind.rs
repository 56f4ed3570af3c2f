use serde::{Deserialize, Serialize};

/// Represents the type of connector
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ConnectorKind {
    Hubspot,
    Notion,
    Stripe,
    Slack,
    Klaviyo,
    Pipedrive,
    Linear,
    Attio,
    Phantombuster,
    Applovin,
    Appsflyer,
    Pinterest,
    Smartsheet,
    FacebookAds,
    Asana,
    Airtable,
    Gorgias,
    Freshdesk,
    Kafka,
    Personio,
    Solidgate,
    Trustpilot,
    Shopify,
    CustomerIo,
    Mixpanel,
    TikTokAds,
    LinkedInAds,
    Chess,
    Sftp,
    Zendesk,
    Elasticsearch,
}

impl ConnectorKind {
    /// The URI scheme token for this connector, as consumed by the ingestion engine
    pub fn scheme(&self) -> &'static str {
        match self {
            ConnectorKind::Hubspot => "hubspot",
            ConnectorKind::Notion => "notion",
            ConnectorKind::Stripe => "stripe",
            ConnectorKind::Slack => "slack",
            ConnectorKind::Klaviyo => "klaviyo",
            ConnectorKind::Pipedrive => "pipedrive",
            ConnectorKind::Linear => "linear",
            ConnectorKind::Attio => "attio",
            ConnectorKind::Phantombuster => "phantombuster",
            ConnectorKind::Applovin => "applovin",
            ConnectorKind::Appsflyer => "appsflyer",
            ConnectorKind::Pinterest => "pinterest",
            ConnectorKind::Smartsheet => "smartsheet",
            ConnectorKind::FacebookAds => "facebookads",
            ConnectorKind::Asana => "asana",
            ConnectorKind::Airtable => "airtable",
            ConnectorKind::Gorgias => "gorgias",
            ConnectorKind::Freshdesk => "freshdesk",
            ConnectorKind::Kafka => "kafka",
            ConnectorKind::Personio => "personio",
            ConnectorKind::Solidgate => "solidgate",
            ConnectorKind::Trustpilot => "trustpilot",
            ConnectorKind::Shopify => "shopify",
            ConnectorKind::CustomerIo => "customerio",
            ConnectorKind::Mixpanel => "mixpanel",
            ConnectorKind::TikTokAds => "tiktokads",
            ConnectorKind::LinkedInAds => "linkedinads",
            ConnectorKind::Chess => "chess",
            ConnectorKind::Sftp => "sftp",
            ConnectorKind::Zendesk => "zendesk",
            ConnectorKind::Elasticsearch => "elasticsearch",
        }
    }
}

impl std::fmt::Display for ConnectorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.scheme())
    }
}
