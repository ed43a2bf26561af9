use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalizedText {
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

/// One place as returned by the Places text-search endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceRecord {
    pub id: String,
    pub display_name: LocalizedText,
    #[serde(default)]
    pub formatted_address: String,
    #[serde(default)]
    pub primary_type: Option<String>,
    #[serde(default)]
    pub website_uri: Option<String>,
    #[serde(default)]
    pub location: Option<LatLng>,
}

impl PlaceRecord {
    pub fn name(&self) -> &str {
        &self.display_name.text
    }

    pub fn website(&self) -> Option<&str> {
        self.website_uri.as_deref()
    }
}

/// Body of a text-search response. An absent `places` field means zero results.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchTextResponse {
    #[serde(default)]
    pub places: Vec<PlaceRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WebsiteStatus {
    #[serde(rename = "No Website")]
    NoWebsite,
    #[serde(rename = "SNS Only")]
    SnsOnly,
    #[serde(rename = "Has Website")]
    HasWebsite,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LeadDetail {
    Mapped {
        #[serde(rename = "websiteUri", skip_serializing_if = "Option::is_none")]
        website_uri: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        lat: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        lng: Option<f64>,
    },
    Status {
        status: WebsiteStatus,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Lead {
    pub id: String,
    pub name: String,
    pub address: String,
    pub category: String,
    #[serde(flatten)]
    pub detail: LeadDetail,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    pub leads: Vec<Lead>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_place_record_from_provider_json() {
        let place: PlaceRecord = serde_json::from_value(json!({
            "id": "ChIJ123",
            "displayName": {"text": "カフェ・オリジナル", "languageCode": "ja"},
            "formattedAddress": "日本、神奈川県鎌倉市",
            "primaryType": "cafe",
            "websiteUri": "https://original-cafe.example.jp",
            "location": {"latitude": 35.319, "longitude": 139.550}
        }))
        .unwrap();

        assert_eq!(place.name(), "カフェ・オリジナル");
        assert_eq!(place.website(), Some("https://original-cafe.example.jp"));
        assert_eq!(place.location.unwrap().latitude, 35.319);
    }

    #[test]
    fn test_place_record_optional_fields_absent() {
        let place: PlaceRecord = serde_json::from_value(json!({
            "id": "ChIJ456",
            "displayName": {"text": "喫茶ひだまり"}
        }))
        .unwrap();

        assert_eq!(place.formatted_address, "");
        assert!(place.primary_type.is_none());
        assert!(place.website().is_none());
        assert!(place.location.is_none());
    }

    #[test]
    fn test_missing_places_field_is_empty() {
        let response: SearchTextResponse = serde_json::from_str("{}").unwrap();
        assert!(response.places.is_empty());
    }

    #[test]
    fn test_mapped_lead_serialization_omits_absent_fields() {
        let lead = Lead {
            id: "p1".to_string(),
            name: "喫茶ひだまり".to_string(),
            address: "鎌倉市".to_string(),
            category: "カフェ".to_string(),
            detail: LeadDetail::Mapped {
                website_uri: None,
                lat: Some(35.3),
                lng: Some(139.5),
            },
        };

        let value = serde_json::to_value(&lead).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "p1",
                "name": "喫茶ひだまり",
                "address": "鎌倉市",
                "category": "カフェ",
                "lat": 35.3,
                "lng": 139.5
            })
        );
    }

    #[test]
    fn test_status_lead_serialization_uses_display_labels() {
        let lead = Lead {
            id: "p2".to_string(),
            name: "mycafe".to_string(),
            address: "".to_string(),
            category: "カフェ".to_string(),
            detail: LeadDetail::Status {
                status: WebsiteStatus::SnsOnly,
            },
        };

        let value = serde_json::to_value(&lead).unwrap();
        assert_eq!(value["status"], "SNS Only");
        assert!(value.get("websiteUri").is_none());
    }
}
