#![allow(clippy::unwrap_used)]
// Lifecycle tests for the reconciliation protocol against a mock connector.

use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use scc_core::{
    AbapCloudChannel, AbapCloudTarget, ConnectorClient, CoreError, DomainMapping, K8sChannel,
    Reconciler, Subaccount, SystemMappingResource,
};

const REGION: &str = "cf.eu10.hana.ondemand.com";
const SUB: &str = "3c1f7d2e-aa10-4b6f-9c3e-5d2b8e7f1a04";

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, ConnectorClient) {
    let server = MockServer::start().await;
    let client = ConnectorClient::from_reqwest(&server.uri(), reqwest::Client::new()).unwrap();
    (server, client)
}

fn sub_path(suffix: &str) -> String {
    format!("/api/v1/configuration/subaccounts/{REGION}/{SUB}{suffix}")
}

fn subaccount_json(state: &str, display_name: &str) -> Value {
    json!({
        "regionHost": REGION,
        "subaccount": SUB,
        "locationID": "",
        "displayName": display_name,
        "description": "",
        "tunnel": { "state": state, "connections": 0 }
    })
}

fn desired_subaccount() -> Subaccount {
    Subaccount {
        region_host: REGION.into(),
        subaccount: SUB.into(),
        cloud_user: Some("ops@example.com".into()),
        cloud_password: Some("hunter2".into()),
        display_name: Some("Primary".into()),
        connected: Some(true),
        ..Subaccount::default()
    }
}

fn abap_channel(id: u64, host: &str) -> Value {
    json!({
        "id": id,
        "typeDesc": "ABAP Cloud System",
        "abapCloudTenantHost": host,
        "instanceNumber": 0,
        "port": 33,
        "connections": 1,
        "enabled": true,
        "state": { "connected": false, "openedConnections": 0 }
    })
}

/// Method and path of every request the server has seen, in order.
async fn calls(server: &MockServer) -> Vec<(String, String)> {
    server
        .received_requests()
        .await
        .unwrap()
        .into_iter()
        .map(|r| (r.method.to_string(), r.url.path().to_owned()))
        .collect()
}

// ── Create ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_with_toggle_writes_state_then_refetches() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/configuration/subaccounts"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(sub_path("")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(subaccount_json("Disconnected", "Primary")),
        )
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path(sub_path("/state")))
        .and(body_json(json!({ "connected": true })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(sub_path("")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(subaccount_json("Connected", "Primary")),
        )
        .mount(&server)
        .await;

    let created = Reconciler::new(&client)
        .create(&desired_subaccount())
        .await
        .unwrap();

    assert_eq!(created.connected, Some(true));
    assert_eq!(created.cloud_password.as_deref(), Some("hunter2"));
    assert_eq!(
        calls(&server).await,
        vec![
            ("POST".into(), "/api/v1/configuration/subaccounts".into()),
            ("GET".into(), sub_path("")),
            ("PUT".into(), sub_path("/state")),
            ("GET".into(), sub_path("")),
        ]
    );
}

#[tokio::test]
async fn test_create_without_toggle_skips_state_write() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/configuration/subaccounts"))
        .respond_with(ResponseTemplate::new(201))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(sub_path("")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(subaccount_json("Connected", "Primary")),
        )
        .mount(&server)
        .await;

    let mut desired = desired_subaccount();
    desired.connected = None;
    let created = Reconciler::new(&client).create(&desired).await.unwrap();

    assert_eq!(created.connected, Some(true));
    assert_eq!(calls(&server).await.len(), 2);
}

#[tokio::test]
async fn test_failed_refetch_after_create_is_reported_without_rollback() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/configuration/subaccounts"))
        .respond_with(ResponseTemplate::new(201))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(sub_path("")))
        .respond_with(ResponseTemplate::new(500).set_body_string("tunnel busy"))
        .mount(&server)
        .await;

    let err = Reconciler::new(&client)
        .create(&desired_subaccount())
        .await
        .unwrap_err();

    assert!(matches!(err, CoreError::Request { status: 500, ref body } if body == "tunnel busy"));
    let seen = calls(&server).await;
    assert!(seen.iter().all(|(m, _)| m != "DELETE"));
}

#[tokio::test]
async fn test_create_subaccount_requires_cloud_credentials() {
    let (server, client) = setup().await;

    let mut desired = desired_subaccount();
    desired.cloud_user = None;
    let err = Reconciler::new(&client).create(&desired).await.unwrap_err();

    assert!(matches!(err, CoreError::MissingField { field: "cloud_user", .. }));
    assert!(calls(&server).await.is_empty());
}

// ── Natural-key lookup ──────────────────────────────────────────────

async fn create_abap_channel_with_listing(
    listing: Vec<Value>,
) -> (MockServer, Result<AbapCloudChannel, CoreError>) {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(sub_path("/channels/ABAPCloud")))
        .and(body_json(json!({
            "abapCloudTenantHost": "tenant.example.com",
            "instanceNumber": 0,
            "port": 33,
            "connections": 1
        })))
        .respond_with(ResponseTemplate::new(201))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(sub_path("/channels/ABAPCloud")))
        .respond_with(ResponseTemplate::new(200).set_body_json(Value::Array(listing)))
        .mount(&server)
        .await;

    let desired = AbapCloudChannel {
        region_host: REGION.into(),
        subaccount: SUB.into(),
        target: AbapCloudTarget {
            abap_cloud_tenant_host: "tenant.example.com".into(),
            instance_number: 0,
        },
        port: 33,
        connections: 1,
        ..AbapCloudChannel::default()
    };
    let result = Reconciler::new(&client).create(&desired).await;
    (server, result)
}

#[tokio::test]
async fn test_created_channel_is_found_by_natural_key_in_either_order() {
    let matching = abap_channel(12, "tenant.example.com");
    let other = abap_channel(11, "other.example.com");

    for listing in [
        vec![matching.clone(), other.clone()],
        vec![other.clone(), matching.clone()],
    ] {
        let (_server, result) = create_abap_channel_with_listing(listing).await;
        let created = result.unwrap();
        assert_eq!(created.id, Some(12));
        assert_eq!(created.target.abap_cloud_tenant_host, "tenant.example.com");
        assert_eq!(created.enabled, Some(true));
    }
}

#[tokio::test]
async fn test_created_channel_missing_from_listing_fails() {
    let (_server, result) =
        create_abap_channel_with_listing(vec![abap_channel(11, "other.example.com")]).await;
    assert!(matches!(
        result.unwrap_err(),
        CoreError::ReconciliationFailure { key_name: "abap_cloud_tenant_host", .. }
    ));
}

#[tokio::test]
async fn test_duplicate_natural_key_fails_loudly() {
    let (_server, result) = create_abap_channel_with_listing(vec![
        abap_channel(11, "tenant.example.com"),
        abap_channel(12, "tenant.example.com"),
    ])
    .await;
    assert!(matches!(
        result.unwrap_err(),
        CoreError::DuplicateNaturalKey { count: 2, .. }
    ));
}

#[tokio::test]
async fn test_channel_create_with_toggle_uses_recovered_id() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(sub_path("/channels/K8S")))
        .respond_with(ResponseTemplate::new(201))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(sub_path("/channels/K8S")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": 5,
            "k8sCluster": "cp.cluster.example.com:443",
            "k8sService": "svc.cluster.example.com:30001",
            "port": 3000,
            "connections": 1,
            "enabled": true
        }])))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path(sub_path("/channels/K8S/5/state")))
        .and(body_json(json!({ "enabled": false })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(sub_path("/channels/K8S/5")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 5,
            "k8sCluster": "cp.cluster.example.com:443",
            "k8sService": "svc.cluster.example.com:30001",
            "port": 3000,
            "connections": 1,
            "enabled": false
        })))
        .mount(&server)
        .await;

    let mut desired = K8sChannel {
        region_host: REGION.into(),
        subaccount: SUB.into(),
        port: 3000,
        connections: 1,
        enabled: Some(false),
        ..K8sChannel::default()
    };
    desired.target.k8s_cluster = "cp.cluster.example.com:443".into();
    desired.target.k8s_service = "svc.cluster.example.com:30001".into();

    let created = Reconciler::new(&client).create(&desired).await.unwrap();

    assert_eq!(created.id, Some(5));
    assert_eq!(created.enabled, Some(false));
}

// ── Update ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_update_of_mutable_fields_is_put_then_get() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path(sub_path("")))
        .and(body_json(json!({ "displayName": "Renamed" })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(sub_path("")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(subaccount_json("Connected", "Renamed")),
        )
        .mount(&server)
        .await;

    let prior = desired_subaccount();
    let mut desired = prior.clone();
    desired.display_name = Some("Renamed".into());

    let updated = Reconciler::new(&client).update(&prior, &desired).await.unwrap();

    assert_eq!(updated.display_name.as_deref(), Some("Renamed"));
    assert_eq!(
        calls(&server).await,
        vec![("PUT".into(), sub_path("")), ("GET".into(), sub_path(""))]
    );
}

#[tokio::test]
async fn test_update_with_changed_toggle_writes_state() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path(sub_path("")))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path(sub_path("/state")))
        .and(body_json(json!({ "connected": false })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(sub_path("")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(subaccount_json("Disconnected", "Primary")),
        )
        .mount(&server)
        .await;

    let prior = desired_subaccount();
    let mut desired = prior.clone();
    desired.connected = Some(false);

    let updated = Reconciler::new(&client).update(&prior, &desired).await.unwrap();

    assert_eq!(updated.connected, Some(false));
    assert_eq!(calls(&server).await.len(), 3);
}

#[tokio::test]
async fn test_identity_change_makes_no_calls() {
    let (server, client) = setup().await;

    let prior = desired_subaccount();
    let mut desired = prior.clone();
    desired.region_host = "cf.us10.hana.ondemand.com".into();

    let err = Reconciler::new(&client).update(&prior, &desired).await.unwrap_err();

    assert!(matches!(err, CoreError::IdentityMismatch { field: "region_host", .. }));
    assert!(calls(&server).await.is_empty());
}

// ── Read / delete ───────────────────────────────────────────────────

#[tokio::test]
async fn test_read_of_absent_record_is_not_found() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(sub_path("")))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such subaccount"))
        .mount(&server)
        .await;

    let err = Reconciler::new(&client)
        .read(&desired_subaccount())
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::NotFound { kind: "subaccount", .. }));
}

#[tokio::test]
async fn test_read_of_domain_mapping_missing_from_listing_is_not_found() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(sub_path("/domainMappings")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "virtualDomain": "virtual.example.com", "internalDomain": "other.corp" }
        ])))
        .mount(&server)
        .await;

    let known = DomainMapping {
        region_host: REGION.into(),
        subaccount: SUB.into(),
        internal_domain: "internal.corp".into(),
        virtual_domain: "virtual.example.com".into(),
    };
    let err = Reconciler::new(&client).read(&known).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_delete_of_absent_record_succeeds() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path(sub_path("")))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let known = desired_subaccount();
    let snapshot = Reconciler::new(&client).delete(&known).await.unwrap();
    assert_eq!(snapshot, known);
}

#[tokio::test]
async fn test_delete_failure_is_surfaced() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path(sub_path("/domainMappings/internal.corp")))
        .respond_with(ResponseTemplate::new(409).set_body_string("in use"))
        .mount(&server)
        .await;

    let known = DomainMapping {
        region_host: REGION.into(),
        subaccount: SUB.into(),
        internal_domain: "internal.corp".into(),
        virtual_domain: "virtual.example.com".into(),
    };
    let err = Reconciler::new(&client).delete(&known).await.unwrap_err();
    assert_eq!(err.status(), Some(409));
}

// ── Import ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_import_populates_identity_and_reads() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/configuration/subaccounts/region/subaccount/channels/K8S/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 42,
            "k8sCluster": "cp.cluster.example.com:443",
            "k8sService": "svc.cluster.example.com:30001",
            "port": 3000,
            "connections": 2,
            "enabled": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let imported: K8sChannel = Reconciler::new(&client)
        .import("region,subaccount,42")
        .await
        .unwrap();

    assert_eq!(imported.region_host, "region");
    assert_eq!(imported.subaccount, "subaccount");
    assert_eq!(imported.id, Some(42));
    assert_eq!(imported.connections, 2);
}

#[tokio::test]
async fn test_malformed_import_ids_make_no_calls() {
    let (server, client) = setup().await;
    let reconciler = Reconciler::new(&client);

    for raw in ["region,subaccount", "region,,42", "region,subaccount,forty-two"] {
        let err = reconciler.import::<K8sChannel>(raw).await.unwrap_err();
        match err {
            CoreError::MalformedImportIdentifier { expected, got, .. } => {
                assert_eq!(expected, "region_host,subaccount,id");
                assert_eq!(got, raw);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
    assert!(calls(&server).await.is_empty());
}

#[tokio::test]
async fn test_import_of_resource_uses_encoded_id() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(
            "/api/v1/configuration/subaccounts/region/subaccount/systemMappings/erp.virtual:44300/resources/-sap-opu-odata",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "/sap/opu/odata",
            "enabled": true,
            "exactMatchOnly": false,
            "websocketUpgradeAllowed": false
        })))
        .expect(1)
        .mount(&server)
        .await;

    let imported: SystemMappingResource = Reconciler::new(&client)
        .import("region,subaccount,erp.virtual,44300,/sap/opu/odata")
        .await
        .unwrap();

    assert_eq!(imported.id, "/sap/opu/odata");
    assert!(imported.enabled);
}
