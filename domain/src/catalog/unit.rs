//! Catalog unit records
//!
//! A [`CatalogUnit`] is owned by the external catalog. Only the fields the
//! roster tools read are typed; everything else the provider sends is kept
//! verbatim in `extra` so that storage and export round-trip it untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Battlefield role as reported by the catalog
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UnitRole {
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One unit record from the catalog
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CatalogUnit {
    #[serde(rename = "Id", default)]
    pub id: Option<u64>,
    #[serde(rename = "Name")]
    pub name: String,
    /// Base point value at skill 4
    #[serde(rename = "BFPointValue", default)]
    pub point_value: Option<u32>,
    #[serde(rename = "Role", default)]
    pub role: Option<UnitRole>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CatalogUnit {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_point_value(mut self, pv: u32) -> Self {
        self.point_value = Some(pv);
        self
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(UnitRole {
            name: role.into(),
            extra: Map::new(),
        });
        self
    }

    pub fn with_stat(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Role name, or an empty string when the catalog sent none
    pub fn role_name(&self) -> &str {
        self.role.as_ref().map(|r| r.name.as_str()).unwrap_or("")
    }

    /// Raw provider field that is not otherwise typed (e.g. `BFMove`)
    pub fn stat(&self, key: &str) -> Option<&Value> {
        self.extra.get(key).filter(|v| !v.is_null())
    }

    /// Provider field rendered as display text
    pub fn stat_text(&self, key: &str) -> String {
        match self.stat(key) {
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => String::new(),
        }
    }
}

/// Response body of the catalog's unit search
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogSearchResponse {
    #[serde(rename = "Units", default)]
    pub units: Option<Vec<CatalogUnit>>,
}

impl CatalogSearchResponse {
    /// Candidates in provider order (a `null` list counts as empty)
    pub fn into_units(self) -> Vec<CatalogUnit> {
        self.units.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_catalog_unit_keeps_extra_fields() {
        let json = r#"{
            "Id": 140,
            "Name": "Atlas AS7-D",
            "BFPointValue": 52,
            "BFMove": "6\"",
            "BFArmor": 10,
            "Role": { "Id": 1, "Name": "Juggernaut" }
        }"#;
        let unit: CatalogUnit = serde_json::from_str(json).unwrap();
        assert_eq!(unit.id, Some(140));
        assert_eq!(unit.name, "Atlas AS7-D");
        assert_eq!(unit.point_value, Some(52));
        assert_eq!(unit.role_name(), "Juggernaut");
        assert_eq!(unit.stat_text("BFMove"), "6\"");
        assert_eq!(unit.stat_text("BFArmor"), "10");
        assert_eq!(unit.stat_text("BFAbilities"), "");
    }

    #[test]
    fn test_round_trip_preserves_provider_fields() {
        let json = r#"{"Id":1,"Name":"Locust LCT-1V","BFPointValue":18,"Role":null,"Tonnage":20}"#;
        let unit: CatalogUnit = serde_json::from_str(json).unwrap();
        let back = serde_json::to_value(&unit).unwrap();
        assert_eq!(back["Tonnage"], 20);
        assert_eq!(back["Name"], "Locust LCT-1V");
    }

    #[test]
    fn test_search_response_null_units() {
        let response: CatalogSearchResponse = serde_json::from_str(r#"{"Units":null}"#).unwrap();
        assert!(response.into_units().is_empty());
        let response: CatalogSearchResponse = serde_json::from_str("{}").unwrap();
        assert!(response.into_units().is_empty());
    }
}
