use serde_json::{json, Value};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use super::props::{record_properties, title_query};
use super::{StoreError, UpsertOutcome};
use crate::record::LexicalRecord;

const API_BASE: &str = "https://api.notion.com/v1";
const NOTION_VERSION: &str = "2022-06-28";

/// Notion database client. Pages are keyed by their `Word` title.
pub struct NotionStore {
    api_token: String,
    database_id: String,
}

impl NotionStore {
    pub fn new(api_token: impl Into<String>, database_id: impl Into<String>) -> Self {
        Self {
            api_token: api_token.into(),
            database_id: database_id.into(),
        }
    }

    /// Insert or update the record, keyed by exact title match.
    pub fn upsert(&self, record: &LexicalRecord) -> Result<UpsertOutcome, StoreError> {
        let timestamp = if self.has_property("Last Updated") {
            OffsetDateTime::now_utc().format(&Rfc3339).ok()
        } else {
            None
        };
        let properties = record_properties(record, timestamp.as_deref());

        match self.find_page_by_word(&record.word)? {
            Some(page_id) => {
                tracing::debug!(word = %record.word, %page_id, "updating existing page");
                self.update_page(&page_id, &properties)?;
                Ok(UpsertOutcome::Updated)
            }
            None => {
                tracing::debug!(word = %record.word, "creating page");
                self.create_page(&properties)?;
                Ok(UpsertOutcome::Created)
            }
        }
    }

    /// True when the database schema defines `name`. Any failure reads as
    /// absent, so optional properties are skipped instead of failing the
    /// upsert.
    pub fn has_property(&self, name: &str) -> bool {
        let url = format!("{API_BASE}/databases/{}", self.database_id);
        let Ok(response) = ureq::get(&url)
            .header("Authorization", format!("Bearer {}", self.api_token))
            .header("Notion-Version", NOTION_VERSION)
            .call()
        else {
            return false;
        };
        let Ok(body) = response.into_body().read_to_string() else {
            return false;
        };
        let Ok(value) = serde_json::from_str::<Value>(&body) else {
            return false;
        };
        value["properties"].get(name).is_some()
    }

    /// Look up an existing page whose title equals `word` exactly.
    pub fn find_page_by_word(&self, word: &str) -> Result<Option<String>, StoreError> {
        let url = format!("{API_BASE}/databases/{}/query", self.database_id);
        let body = ureq::post(&url)
            .header("Authorization", format!("Bearer {}", self.api_token))
            .header("Notion-Version", NOTION_VERSION)
            .send_json(&title_query(word))
            .map_err(|e| http_err("title query", e))?
            .into_body()
            .read_to_string()
            .map_err(|e| StoreError::Http(format!("title query: {e}")))?;
        parse_page_id(&body)
    }

    pub fn create_page(&self, properties: &Value) -> Result<(), StoreError> {
        let url = format!("{API_BASE}/pages");
        let payload = json!({
            "parent": {"database_id": self.database_id},
            "properties": properties,
        });
        ureq::post(&url)
            .header("Authorization", format!("Bearer {}", self.api_token))
            .header("Notion-Version", NOTION_VERSION)
            .send_json(&payload)
            .map_err(|e| http_err("create page", e))?;
        Ok(())
    }

    pub fn update_page(&self, page_id: &str, properties: &Value) -> Result<(), StoreError> {
        let url = format!("{API_BASE}/pages/{page_id}");
        ureq::patch(&url)
            .header("Authorization", format!("Bearer {}", self.api_token))
            .header("Notion-Version", NOTION_VERSION)
            .send_json(&json!({"properties": properties}))
            .map_err(|e| http_err("update page", e))?;
        Ok(())
    }
}

fn http_err(operation: &str, e: ureq::Error) -> StoreError {
    match e {
        ureq::Error::StatusCode(status) => StoreError::Api {
            status,
            operation: operation.to_string(),
        },
        other => StoreError::Http(format!("{operation}: {other}")),
    }
}

/// Pull the first page id out of a database query response. An empty or
/// missing result list reads as "no such page".
fn parse_page_id(body: &str) -> Result<Option<String>, StoreError> {
    let value: Value = serde_json::from_str(body).map_err(|e| StoreError::Parse(e.to_string()))?;
    Ok(value["results"]
        .as_array()
        .and_then(|results| results.first())
        .and_then(|page| page["id"].as_str())
        .map(str::to_string))
}
