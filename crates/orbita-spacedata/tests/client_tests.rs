use std::time::Duration;

use mockito::Matcher;
use serde_json::json;

use orbita_spacedata::{SpaceDataClient, SpaceDataError};

fn client_for(server: &mockito::ServerGuard) -> SpaceDataClient {
    SpaceDataClient::builder()
        .api_key("DEMO_KEY")
        .nasa_base(server.url())
        .eonet_base(server.url())
        .open_notify_base(server.url())
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap()
}

fn neo_json(name: &str) -> serde_json::Value {
    json!({
        "name": name,
        "is_potentially_hazardous_asteroid": true,
        "estimated_diameter": {
            "meters": {
                "estimated_diameter_min": 110.4567,
                "estimated_diameter_max": 246.9999
            }
        },
        "close_approach_data": [{
            "relative_velocity": {"kilometers_per_hour": "45678.1234"},
            "miss_distance": {"kilometers": "1234567.891"}
        }]
    })
}

#[test]
fn test_builder_requires_api_key() {
    let result = SpaceDataClient::builder().build();

    assert!(result.is_err());
    let err_msg = result.err().unwrap().to_string();
    assert!(err_msg.contains("API key"));
}

#[tokio::test]
async fn test_asteroid_feed_reshapes_and_rounds() {
    let mut server = mockito::Server::new_async().await;

    let feed = server
        .mock("GET", "/neo/rest/v1/feed")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("start_date".into(), "2026-01-15".into()),
            Matcher::UrlEncoded("end_date".into(), "2026-01-15".into()),
            Matcher::UrlEncoded("api_key".into(), "DEMO_KEY".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "element_count": 2,
                "near_earth_objects": {
                    "2026-01-15": [neo_json("(2026 AA)"), neo_json("(2026 AB)")]
                }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = client_for(&server);
    let report = client.asteroid_feed("2026-01-15").await.unwrap();

    assert_eq!(report.data_pesquisada, "2026-01-15");
    assert_eq!(report.total_asteroides_detectados, 2);

    let first = &report.asteroides[0];
    assert_eq!(first.nome, "(2026 AA)");
    assert!(first.perigoso);
    assert_eq!(first.tamanho_estimado_metros.min, 110.46);
    assert_eq!(first.tamanho_estimado_metros.max, 247.0);
    assert_eq!(first.velocidade_km_h, 45678.12);
    assert_eq!(first.distancia_da_terra_km, 1234567.89);

    feed.assert_async().await;
}

#[tokio::test]
async fn test_asteroid_feed_propagates_upstream_failure() {
    let mut server = mockito::Server::new_async().await;

    let _feed = server
        .mock("GET", "/neo/rest/v1/feed")
        .match_query(Matcher::Any)
        .with_status(503)
        .with_body("Service Unavailable")
        .create_async()
        .await;

    let client = client_for(&server);
    let result = client.asteroid_feed("2026-01-15").await;

    match result {
        Err(SpaceDataError::Status { status, body }) => {
            assert_eq!(status.as_u16(), 503);
            assert_eq!(body, "Service Unavailable");
        }
        other => panic!("expected Status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_apod_passes_date_through() {
    let mut server = mockito::Server::new_async().await;

    let apod = server
        .mock("GET", "/planetary/apod")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("api_key".into(), "DEMO_KEY".into()),
            Matcher::UrlEncoded("date".into(), "2026-01-15".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "title": "Lua Cheia",
                "date": "2026-01-15",
                "explanation": "A lua cheia de janeiro.",
                "url": "https://apod.nasa.gov/apod/image/lua.jpg",
                "media_type": "image"
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = client_for(&server);
    let summary = client.apod(Some("2026-01-15")).await.unwrap();

    assert_eq!(summary.titulo.as_deref(), Some("Lua Cheia"));
    assert_eq!(summary.copyright, "Domínio Público");

    apod.assert_async().await;
}

#[tokio::test]
async fn test_apod_without_date_omits_parameter() {
    let mut server = mockito::Server::new_async().await;

    let apod = server
        .mock("GET", "/planetary/apod")
        .match_query(Matcher::UrlEncoded("api_key".into(), "DEMO_KEY".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"title": "Hoje", "media_type": "image"}).to_string())
        .create_async()
        .await;

    let client = client_for(&server);
    let summary = client.apod(None).await.unwrap();

    assert_eq!(summary.titulo.as_deref(), Some("Hoje"));
    apod.assert_async().await;
}

#[tokio::test]
async fn test_earth_events_requests_open_events_window() {
    let mut server = mockito::Server::new_async().await;

    let events = server
        .mock("GET", "/events")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("days".into(), "14".into()),
            Matcher::UrlEncoded("status".into(), "open".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "events": [{
                    "id": "EONET_5555",
                    "title": "Tropical Cyclone Ana",
                    "link": "https://eonet.gsfc.nasa.gov/api/v3/events/EONET_5555",
                    "categories": [{"id": "severeStorms", "title": "Severe Storms"}],
                    "geometry": [{"date": "2026-01-12T06:00:00Z"}]
                }]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = client_for(&server);
    let report = client.earth_events(14).await.unwrap();

    assert_eq!(report.periodo_dias, 14);
    assert_eq!(report.eventos[0].categoria.as_deref(), Some("Severe Storms"));

    events.assert_async().await;
}

#[tokio::test]
async fn test_people_in_space_combines_both_feeds() {
    let mut server = mockito::Server::new_async().await;

    let _astros = server
        .mock("GET", "/astros.json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "number": 3,
                "people": [
                    {"name": "Ana Souza", "craft": "ISS"},
                    {"name": "John Smith", "craft": "ISS"},
                    {"name": "Li Wei", "craft": "Tiangong"}
                ],
                "message": "success"
            })
            .to_string(),
        )
        .create_async()
        .await;

    let _iss = server
        .mock("GET", "/iss-now.json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "iss_position": {"latitude": "12.3456", "longitude": "-98.7654"},
                "message": "success",
                "timestamp": 1767139200
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = client_for(&server);
    let report = client.people_in_space().await.unwrap();

    assert_eq!(report.total_humanos_no_espaco, 3);
    assert_eq!(report.astronautas.len(), 3);

    let position = report.iss_posicao_atual.unwrap();
    assert_eq!(position.latitude, 12.3456);
    assert_eq!(position.longitude, -98.7654);
}

#[tokio::test]
async fn test_people_in_space_fails_when_either_feed_fails() {
    let mut server = mockito::Server::new_async().await;

    let _astros = server
        .mock("GET", "/astros.json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"number": 0, "people": []}).to_string())
        .create_async()
        .await;

    let _iss = server
        .mock("GET", "/iss-now.json")
        .with_status(500)
        .with_body("upstream down")
        .create_async()
        .await;

    let client = client_for(&server);
    let result = client.people_in_space().await;

    assert!(matches!(result, Err(SpaceDataError::Status { .. })));
}
