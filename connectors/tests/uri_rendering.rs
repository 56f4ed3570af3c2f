use ingest_connectors::{
    Connector, ConnectorKind, CustomerIoConnector, FacebookAdsConnector, HubspotConnector,
    MixpanelConnector, SftpConnector, SourceConnector,
};

// Values with every reserved character class the query encoder must handle
const HOSTILE_VALUES: &[&str] = &[
    "plain",
    "with space",
    "amp&ersand",
    "eq=uals",
    "quest?ion",
    "at@sign",
    "plus+sign",
    "percent%20",
    "unicode-ключ",
];

fn parse_query(uri: &str) -> Vec<(String, String)> {
    let query = uri.split_once("://?").expect("query-style URI").1;
    url::form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect()
}

#[test]
fn query_values_round_trip_through_a_standard_parser() {
    for value in HOSTILE_VALUES {
        let connector = FacebookAdsConnector {
            access_token: value.to_string(),
            account_id: "42".to_string(),
        };
        let uri = connector.uri().unwrap();
        let pairs = parse_query(&uri);
        assert_eq!(
            pairs,
            vec![
                ("access_token".to_string(), value.to_string()),
                ("account_id".to_string(), "42".to_string()),
            ],
            "round-trip failed for {:?}",
            value
        );
    }
}

#[test]
fn optional_field_appears_exactly_once_when_set() {
    let connector = CustomerIoConnector {
        api_key: "k".to_string(),
        region: Some("eu".to_string()),
    };
    let pairs = parse_query(&connector.uri().unwrap());
    let region_count = pairs.iter().filter(|(k, _)| k == "region").count();
    assert_eq!(region_count, 1);
}

#[test]
fn optional_field_absent_when_empty() {
    let connector = MixpanelConnector {
        username: "u".to_string(),
        password: "p".to_string(),
        project_id: "123".to_string(),
        server: None,
    };
    let pairs = parse_query(&connector.uri().unwrap());
    assert!(pairs.iter().all(|(k, _)| k != "server"));
}

#[test]
fn rendering_is_deterministic() {
    let connector = MixpanelConnector {
        username: "u ser".to_string(),
        password: "p&ss".to_string(),
        project_id: "99".to_string(),
        server: Some("eu".to_string()),
    };
    let first = connector.uri().unwrap();
    let second = connector.uri().unwrap();
    assert_eq!(first, second);
}

#[test]
fn scheme_matches_connector_kind() {
    let connector = HubspotConnector {
        api_key: "k".to_string(),
    };
    let uri = connector.uri().unwrap();
    assert!(uri.starts_with(connector.kind().scheme()));
    assert!(uri[..connector.kind().scheme().len()]
        .chars()
        .all(|c| c.is_ascii_lowercase()));
}

#[test]
fn authority_uri_parses_back_into_components() {
    let connector = SftpConnector {
        host: "files.example.com".to_string(),
        port: 2222,
        username: "u ser".to_string(),
        password: "p@ss:word".to_string(),
    };
    let uri = connector.uri().unwrap();
    let parsed = url::Url::parse(&uri).unwrap();
    assert_eq!(parsed.scheme(), "sftp");
    assert_eq!(parsed.host_str(), Some("files.example.com"));
    assert_eq!(parsed.port(), Some(2222));
    assert_eq!(
        url::form_urlencoded::parse(parsed.username().as_bytes())
            .next()
            .map(|(k, _)| k.into_owned()),
        Some("u ser".to_string())
    );
}

#[test]
fn config_record_renders_end_to_end() {
    let records = serde_json::json!([
        {"type": "klaviyo", "api_key": "kl-1"},
        {"type": "facebookads", "access_token": "tok", "account_id": "42"},
        {"type": "zendesk", "subdomain": "acme.zendesk.com", "email": "a@b.c", "api_token": "t"},
    ]);
    let sources: Vec<SourceConnector> = serde_json::from_value(records).unwrap();
    let uris: Vec<String> = sources.iter().map(|s| s.uri().unwrap()).collect();
    assert_eq!(
        uris,
        vec![
            "klaviyo://?api_key=kl-1",
            "facebookads://?access_token=tok&account_id=42",
            "zendesk://a%40b.c:t@acme.zendesk.com",
        ]
    );
    assert_eq!(sources[2].kind(), ConnectorKind::Zendesk);
}
