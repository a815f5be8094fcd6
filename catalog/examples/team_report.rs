//! Team Report Example
//!
//! Fetches type relations and a handful of species from PokeAPI, builds a
//! team in an in-memory store and prints its matchup analysis.
//!
//! Falls back to the built-in type chart if the catalog is unreachable.
//!
//! ```text
//! RUST_LOG=debug cargo run -p pokeplan-catalog --example team_report -- charizard blastoise venusaur
//! ```

use anyhow::Result;
use pokeplan_catalog::CatalogClient;
use pokeplan_dex::query::compare;
use pokeplan_dex::{RelationTable, TypeCount};
use pokeplan_team::{MemoryStorage, StoreConfig, TeamStore};
use tracing_subscriber::EnvFilter;

fn format_tally(tally: &[TypeCount]) -> String {
    tally
        .iter()
        .map(|c| format!("{}x{}", c.ty, c.count))
        .collect::<Vec<_>>()
        .join(", ")
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut names: Vec<String> = std::env::args().skip(1).collect();
    if names.is_empty() {
        names = vec!["charizard".into(), "blastoise".into(), "venusaur".into()];
    }

    let catalog = CatalogClient::new();
    let relations = match catalog.fetch_all_type_relations().await {
        Ok(table) if !table.is_empty() => table,
        Ok(_) => RelationTable::standard(),
        Err(e) => {
            tracing::warn!(error = %e, "Catalog unavailable, using built-in chart");
            RelationTable::standard()
        }
    };

    let mut store = TeamStore::load(StoreConfig::default(), MemoryStorage::new());
    let team_id = store.create_team("Report")?;

    for name in &names {
        match catalog.fetch_member(name).await {
            Ok(member) => {
                let team = store.team(team_id);
                if team.is_some_and(|t| t.len() >= store.config().max_members_per_team) {
                    println!("Team is full, skipping {}", member.name);
                    continue;
                }
                if team.is_some_and(|t| t.contains(member.id)) {
                    println!("{} is already on the team", member.name);
                    continue;
                }
                store.add_member(team_id, member)?;
            }
            Err(e) => println!("Could not load {}: {:#}", name, e),
        }
    }

    let members = store
        .team(team_id)
        .map(|t| t.members().to_vec())
        .unwrap_or_default();
    let roster: Vec<&str> = members.iter().map(|m| m.name.as_str()).collect();

    let analysis = store.analyze_team(team_id, &relations)?;
    println!("Team: {}", roster.join(", "));
    println!("  coverage:    {}", format_tally(&analysis.coverage));
    println!("  weaknesses:  {}", format_tally(&analysis.weaknesses));
    println!("  resistances: {}", format_tally(&analysis.resistances));
    println!("  immunities:  {}", format_tally(&analysis.immunities));
    println!("  score:       {}", analysis.score);

    if let [left, right, ..] = members.as_slice() {
        let cmp = compare(left, right, &relations);
        println!(
            "{} vs {}: {}x / {}x",
            left.name, right.name, cmp.left.best_multiplier, cmp.right.best_multiplier
        );
    }

    Ok(())
}
