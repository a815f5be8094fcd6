use std::collections::HashMap;

use pokeplan_catalog::wire::{PokemonRecord, TypeRecord};
use pokeplan_catalog::{CatalogClient, Options};
use pokeplan_dex::{analyze, Type};
use serde_json::json;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

const TYPE_FIRE: &str = include_str!("fixtures/type_fire.json");
const POKEMON_CHARIZARD: &str = include_str!("fixtures/pokemon_charizard.json");

/// Serve canned JSON bodies keyed by request path; anything else is a 404.
async fn serve(routes: impl FnOnce(&str) -> HashMap<String, String>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}/api/v2", listener.local_addr().unwrap());
    let routes = routes(&base);

    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                break;
            };
            let routes = routes.clone();
            tokio::spawn(async move {
                let mut buf = vec![0u8; 8192];
                let n = socket.read(&mut buf).await.unwrap_or(0);
                let request = String::from_utf8_lossy(&buf[..n]);
                let path = request.split_whitespace().nth(1).unwrap_or("/").to_string();

                let (status, body) = match routes.get(&path) {
                    Some(body) => ("200 OK", body.clone()),
                    None => ("404 Not Found", "{}".to_string()),
                };
                let response = format!(
                    "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    base
}

fn client(base: &str) -> CatalogClient {
    CatalogClient::with_options(Options {
        base_url: base.to_string(),
    })
}

fn type_record(name: &str, double_damage_from: &[&str], base: &str) -> String {
    let links: Vec<_> = double_damage_from
        .iter()
        .map(|n| json!({"name": n, "url": format!("{base}/type/{n}/")}))
        .collect();
    json!({
        "id": 1,
        "name": name,
        "damage_relations": {"double_damage_from": links}
    })
    .to_string()
}

#[test]
fn test_decode_type_fixture() {
    let record: TypeRecord = serde_json::from_str(TYPE_FIRE).unwrap();
    assert_eq!(record.id, 10);
    assert_eq!(record.name, "fire");

    let relations = record.damage_relations.to_relations();
    assert_eq!(
        relations.double_damage_from,
        vec![Type::Ground, Type::Rock, Type::Water]
    );
    assert_eq!(relations.half_damage_from.len(), 6);
    assert!(relations.no_damage_from.is_empty());
}

#[test]
fn test_decode_pokemon_fixture() {
    let record: PokemonRecord = serde_json::from_str(POKEMON_CHARIZARD).unwrap();
    let member = record.to_member();
    assert_eq!(member.id, 6);
    assert_eq!(member.types, vec![Type::Fire, Type::Flying]);
}

#[tokio::test]
async fn test_fetch_all_type_relations_follows_pages() {
    let base = serve(|base| {
        let mut routes = HashMap::new();
        routes.insert(
            "/api/v2/type?limit=100".to_string(),
            json!({
                "count": 4,
                "next": format!("{base}/type?offset=2&limit=100"),
                "previous": null,
                "results": [
                    {"name": "fire", "url": format!("{base}/type/fire/")},
                    {"name": "flying", "url": format!("{base}/type/flying/")}
                ]
            })
            .to_string(),
        );
        routes.insert(
            "/api/v2/type?offset=2&limit=100".to_string(),
            json!({
                "count": 4,
                "next": null,
                "previous": format!("{base}/type?limit=100"),
                "results": [
                    {"name": "stellar", "url": format!("{base}/type/stellar/")},
                    {"name": "water", "url": format!("{base}/type/water/")}
                ]
            })
            .to_string(),
        );
        routes.insert("/api/v2/type/fire/".to_string(), TYPE_FIRE.to_string());
        routes.insert(
            "/api/v2/type/flying/".to_string(),
            type_record("flying", &["electric", "ice", "rock"], base),
        );
        routes.insert(
            "/api/v2/type/water/".to_string(),
            type_record("water", &["electric", "grass"], base),
        );
        routes
    })
    .await;

    let catalog = client(&base);
    let types = catalog.list_types().await.unwrap();
    assert_eq!(types.len(), 4);

    let table = catalog.fetch_all_type_relations().await.unwrap();
    assert_eq!(table.len(), 3);
    assert!(table.contains(Type::Fire));
    assert!(table.contains(Type::Flying));
    assert!(table.contains(Type::Water));
    assert_eq!(
        table.get(Type::Water).double_damage_from,
        vec![Type::Electric, Type::Grass]
    );
}

#[tokio::test]
async fn test_fetch_member_and_analyze() {
    let base = serve(|base| {
        let mut routes = HashMap::new();
        routes.insert(
            "/api/v2/pokemon/charizard".to_string(),
            POKEMON_CHARIZARD.to_string(),
        );
        routes.insert("/api/v2/type/fire".to_string(), TYPE_FIRE.to_string());
        routes.insert(
            "/api/v2/type/flying".to_string(),
            type_record("flying", &["electric", "ice", "rock"], base),
        );
        routes
    })
    .await;

    let catalog = client(&base);
    let charizard = catalog.fetch_member("  Charizard ").await.unwrap();
    assert_eq!(charizard.name, "charizard");

    let table = [Type::Fire, Type::Flying];
    let mut relations = pokeplan_dex::RelationTable::new();
    for ty in table {
        relations.insert(ty, catalog.fetch_type_relations(ty).await.unwrap());
    }

    let analysis = analyze(&[charizard], &relations);
    assert_eq!(analysis.weakness_to(Type::Rock), 2);
    assert_eq!(analysis.weakness_to(Type::Ground), 1);
}

#[tokio::test]
async fn test_missing_species_is_an_error() {
    let base = serve(|_| HashMap::new()).await;
    let catalog = client(&base);

    let err = catalog.fetch_member("missingno").await.unwrap_err();
    assert!(format!("{err:#}").contains("missingno"));

    assert!(catalog.fetch_member("   ").await.is_err());
}

#[tokio::test]
async fn test_foreign_urls_are_rejected() {
    let base = serve(|_| {
        let mut routes = HashMap::new();
        routes.insert(
            "/api/v2/type?limit=100".to_string(),
            json!({
                "count": 1,
                "next": null,
                "results": [{"name": "fire", "url": "https://example.com/type/fire/"}]
            })
            .to_string(),
        );
        routes
    })
    .await;

    let err = client(&base).fetch_all_type_relations().await.unwrap_err();
    assert!(format!("{err:#}").contains("Mismatched catalog URL"));
}

#[test]
fn test_trailing_slash_is_trimmed() {
    let catalog = client("http://localhost:1/api/v2/");
    assert_eq!(catalog.base_url(), "http://localhost:1/api/v2");
    assert_eq!(CatalogClient::new().base_url(), pokeplan_catalog::POKEAPI_URL);
}
