//! Common types and data structures

use serde::{Deserialize, Serialize};

/// Parent grouping of stars, bounded by `max_size`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Universe {
    pub id: u64,
    pub name: String,
    pub max_size: u32,
}

/// Star entity as returned by the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Star {
    pub id: u64,
    pub name: String,
    pub color: String,
    /// Embedded back-reference, display only
    #[serde(default)]
    pub universe: Option<Universe>,
}

/// Creation payload for `POST /stars`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStar {
    pub name: String,
    pub color: String,
    pub universe_id: u64,
}

/// One page of stars plus the server-reported total
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StarPage {
    pub stars: Vec<Star>,
    pub total_count: u64,
}

/// Colours offered by the create form
pub const STAR_COLORS: [&str; 5] = ["RED", "BLUE", "YELLOW", "WHITE", "BLACK"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn star_without_universe_deserializes() {
        let star: Star = serde_json::from_str(r#"{"id":5,"name":"Sirius","color":"BLUE"}"#).unwrap();
        assert_eq!(star.id, 5);
        assert!(star.universe.is_none());

        let star: Star =
            serde_json::from_str(r#"{"id":5,"name":"Sirius","color":"BLUE","universe":null}"#).unwrap();
        assert!(star.universe.is_none());
    }

    #[test]
    fn universe_uses_camel_case_max_size() {
        let star: Star = serde_json::from_str(
            r#"{"id":1,"name":"Vega","color":"WHITE","universe":{"id":2,"name":"Milky","maxSize":3}}"#,
        )
        .unwrap();
        assert_eq!(star.universe.unwrap().max_size, 3);
    }

    #[test]
    fn new_star_serializes_universe_id() {
        let body = serde_json::to_value(NewStar {
            name: "Rigel".into(),
            color: "BLUE".into(),
            universe_id: 4,
        })
        .unwrap();
        assert_eq!(body["universeId"], 4);
        assert_eq!(body["name"], "Rigel");
    }
}
