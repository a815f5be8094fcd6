//! Read-only PokeAPI client for the data team planning needs.
//!
//! The catalog is the source of [`RelationTable`]s and species typing. It is
//! meant to be queried once up front; the resolved table is then handed to
//! the analyzer as many times as needed.
//!
//! ```no_run
//! # async fn run() -> anyhow::Result<()> {
//! use pokeplan_catalog::CatalogClient;
//! use pokeplan_dex::analyze;
//!
//! let catalog = CatalogClient::new();
//! let relations = catalog.fetch_all_type_relations().await?;
//! let charizard = catalog.fetch_member("charizard").await?;
//!
//! let analysis = analyze(&[charizard], &relations);
//! println!("{:?}", analysis.weaknesses);
//! # Ok(())
//! # }
//! ```

pub mod wire;

use anyhow::{Context, Result};
use pokeplan_dex::{RelationTable, TeamMember, Type, TypeRelations};
use serde::de::DeserializeOwned;

use wire::{NamedResource, Page, PokemonRecord, TypeRecord};

/// Public PokeAPI v2 endpoint
pub const POKEAPI_URL: &str = "https://pokeapi.co/api/v2";

/// Entries requested per page when listing types
const PAGE_SIZE: usize = 100;

/// Options for constructing a [`CatalogClient`]
#[derive(Debug, Clone)]
pub struct Options {
    /// The base URL to point the client at
    pub base_url: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            base_url: POKEAPI_URL.to_string(),
        }
    }
}

/// Async PokeAPI client
pub struct CatalogClient {
    base_url: String,
    http: reqwest::Client,
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogClient {
    /// Create a client for the public PokeAPI
    pub fn new() -> Self {
        Self::with_options(Options::default())
    }

    /// Create a client with the given options
    pub fn with_options(opts: Options) -> Self {
        Self {
            base_url: opts.base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `url` and decode the JSON body
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        if !url.starts_with(&self.base_url) {
            anyhow::bail!(
                "Mismatched catalog URL (expected {} but got {})",
                self.base_url,
                url
            );
        }

        tracing::debug!(url, "Catalog request");
        let response = self
            .http
            .get(url)
            .send()
            .await
            .with_context(|| format!("Failed to request {}", url))?
            .error_for_status()
            .with_context(|| format!("Catalog returned an error for {}", url))?;

        let body = response
            .text()
            .await
            .with_context(|| format!("Failed to read response from {}", url))?;

        serde_json::from_str(&body).with_context(|| format!("Failed to parse response from {}", url))
    }

    /// List every type resource, following pagination
    pub async fn list_types(&self) -> Result<Vec<NamedResource>> {
        let mut next = Some(format!("{}/type?limit={}", self.base_url, PAGE_SIZE));
        let mut types = Vec::new();

        while let Some(url) = next {
            let page: Page = self.get_json(&url).await?;
            types.extend(page.results);
            next = page.next;
        }

        Ok(types)
    }

    /// Fetch the damage relations of a single type
    pub async fn fetch_type_relations(&self, ty: Type) -> Result<TypeRelations> {
        let url = format!("{}/type/{}", self.base_url, ty.as_str());
        let record: TypeRecord = self.get_json(&url).await?;
        Ok(record.damage_relations.to_relations())
    }

    /// Fetch the damage relations of every battle type
    ///
    /// Listed types outside the 18 battle types are skipped.
    pub async fn fetch_all_type_relations(&self) -> Result<RelationTable> {
        let mut table = RelationTable::new();

        for resource in self.list_types().await? {
            let Some(ty) = Type::from_name(&resource.name) else {
                tracing::debug!(name = %resource.name, "Skipping non-battle type");
                continue;
            };
            let record: TypeRecord = self
                .get_json(&resource.url)
                .await
                .with_context(|| format!("Failed to load relations for {}", ty))?;
            table.insert(ty, record.damage_relations.to_relations());
        }

        tracing::debug!(types = table.len(), "Loaded type relations");
        Ok(table)
    }

    /// Fetch a species by name or numeric id as a team member
    pub async fn fetch_member(&self, name_or_id: &str) -> Result<TeamMember> {
        let key = name_or_id.trim().to_lowercase();
        if key.is_empty() {
            anyhow::bail!("Species name must not be empty");
        }

        let url = format!("{}/pokemon/{}", self.base_url, key);
        let record: PokemonRecord = self
            .get_json(&url)
            .await
            .with_context(|| format!("Failed to load species {}", key))?;

        Ok(record.to_member())
    }
}
