use serde_json::{json, Map, Value};

use crate::record::LexicalRecord;

/// Build the store property map for a record.
///
/// Empty fields are omitted so an update never blanks data a previous run
/// wrote; part of speech is always present. `timestamp` fills the optional
/// `Last Updated` date property when the database schema carries it.
pub fn record_properties(record: &LexicalRecord, timestamp: Option<&str>) -> Value {
    let mut props = Map::new();
    add_title(&mut props, "Word", &record.word);
    props.insert(
        "A Part of Speech".to_string(),
        json!({"multi_select": [{"name": record.pos.display_label()}]}),
    );
    add_rich_text(&mut props, "Definition (JP)", &record.definition_jp);
    add_rich_text(&mut props, "Example Sentence", &record.example);
    add_rich_text(&mut props, "Stress", &record.stress);
    add_rich_text(&mut props, "IPA", &record.ipa);
    add_rich_text(&mut props, "Katakana", &record.katakana);
    add_multi_select(&mut props, "Tags", &record.tags);
    if let Some(ts) = timestamp {
        props.insert("Last Updated".to_string(), json!({"date": {"start": ts}}));
    }
    Value::Object(props)
}

/// The query payload matching a page whose title equals `word` exactly.
pub(super) fn title_query(word: &str) -> Value {
    json!({
        "filter": {
            "property": "Word",
            "title": {"equals": word}
        },
        "page_size": 1
    })
}

fn add_title(props: &mut Map<String, Value>, key: &str, value: &str) {
    if value.is_empty() {
        return;
    }
    props.insert(
        key.to_string(),
        json!({"title": [{"text": {"content": value}}]}),
    );
}

fn add_rich_text(props: &mut Map<String, Value>, key: &str, value: &str) {
    if value.is_empty() {
        return;
    }
    props.insert(
        key.to_string(),
        json!({"rich_text": [{"text": {"content": value}}]}),
    );
}

fn add_multi_select(props: &mut Map<String, Value>, key: &str, values: &[String]) {
    if values.is_empty() {
        return;
    }
    let mut names: Vec<&str> = values.iter().map(String::as_str).collect();
    names.sort_unstable();
    let options: Vec<Value> = names.iter().map(|name| json!({"name": name})).collect();
    props.insert(key.to_string(), json!({"multi_select": options}));
}
