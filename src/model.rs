//! Record types served by the airfield services
//!
//! Defines the `Airport` entity and the `FieldAccess` trait that lets the
//! indexer and route generator read named fields off a record without any
//! per-field code at the call site.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Read access to a record's fields by logical name.
///
/// Implementations provide an explicit accessor table: `FIELDS` lists every
/// logical field name, and `field` resolves one name to its canonical string
/// value. The indexer and the dynamic route generator are written against
/// this trait only, so they work for any homogeneous record type.
pub trait FieldAccess {
    /// Every logical field name of the record type, in declaration order.
    const FIELDS: &'static [&'static str];

    /// The canonical string value of the named field, or `None` if the name
    /// is not a field of this type.
    ///
    /// Absent optional fields stringify to the empty string.
    fn field(&self, name: &str) -> Option<Cow<'_, str>>;

    /// Whether `name` is a field of this record type.
    fn has_field(name: &str) -> bool {
        Self::FIELDS.contains(&name)
    }
}

/// One airport record from the dataset file.
///
/// Field names on the wire are the snake_case JSON keys of the dataset;
/// lookup routes use the PascalCase logical names from [`FieldAccess::FIELDS`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airport {
    pub code: String,
    pub lat: String,
    pub lon: String,
    pub name: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub woeid: String,
    pub tz: String,
    pub phone: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub email: String,
    pub url: String,
    pub runway_length: Option<String>,
    pub elev: Option<String>,
    pub icao: String,
    pub direct_flights: String,
    pub carriers: String,
}

impl FieldAccess for Airport {
    const FIELDS: &'static [&'static str] = &[
        "Code",
        "Lat",
        "Lon",
        "Name",
        "City",
        "State",
        "Country",
        "WoeId",
        "Tz",
        "Phone",
        "Type",
        "Email",
        "Url",
        "RunwayLength",
        "Elev",
        "Icao",
        "DirectFlights",
        "Carriers",
    ];

    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        let value = match name {
            "Code" => Cow::from(self.code.as_str()),
            "Lat" => Cow::from(self.lat.as_str()),
            "Lon" => Cow::from(self.lon.as_str()),
            "Name" => Cow::from(self.name.as_str()),
            "City" => Cow::from(self.city.as_str()),
            "State" => Cow::from(self.state.as_str()),
            "Country" => Cow::from(self.country.as_str()),
            "WoeId" => Cow::from(self.woeid.as_str()),
            "Tz" => Cow::from(self.tz.as_str()),
            "Phone" => Cow::from(self.phone.as_str()),
            "Type" => Cow::from(self.kind.as_str()),
            "Email" => Cow::from(self.email.as_str()),
            "Url" => Cow::from(self.url.as_str()),
            "RunwayLength" => Cow::from(self.runway_length.as_deref().unwrap_or("")),
            "Elev" => Cow::from(self.elev.as_deref().unwrap_or("")),
            "Icao" => Cow::from(self.icao.as_str()),
            "DirectFlights" => Cow::from(self.direct_flights.as_str()),
            "Carriers" => Cow::from(self.carriers.as_str()),
            _ => return None,
        };
        Some(value)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::Airport;

    /// Build a minimal airport for tests, varying only the fields a test
    /// cares about.
    pub fn airport(code: &str, city: &str, state: &str, country: &str) -> Airport {
        Airport {
            code: code.to_string(),
            lat: "0.0".to_string(),
            lon: "0.0".to_string(),
            name: format!("{} International", code),
            city: city.to_string(),
            state: state.to_string(),
            country: country.to_string(),
            woeid: "0".to_string(),
            tz: "UTC".to_string(),
            phone: String::new(),
            kind: "Airports".to_string(),
            email: String::new(),
            url: String::new(),
            runway_length: None,
            elev: None,
            icao: String::new(),
            direct_flights: "0".to_string(),
            carriers: "0".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::airport;
    use super::*;

    #[test]
    fn test_field_access_known_names() {
        let den = airport("DEN", "Denver", "CO", "US");

        assert_eq!(den.field("Code").unwrap(), "DEN");
        assert_eq!(den.field("City").unwrap(), "Denver");
        assert_eq!(den.field("State").unwrap(), "CO");
        assert_eq!(den.field("Country").unwrap(), "US");
    }

    #[test]
    fn test_field_access_unknown_name() {
        let den = airport("DEN", "Denver", "CO", "US");

        assert!(den.field("Zip").is_none());
        assert!(!Airport::has_field("Zip"));
    }

    #[test]
    fn test_absent_optional_field_is_empty_string() {
        let den = airport("DEN", "Denver", "CO", "US");

        assert_eq!(den.field("RunwayLength").unwrap(), "");
        assert_eq!(den.field("Elev").unwrap(), "");
    }

    #[test]
    fn test_every_declared_field_resolves() {
        let den = airport("DEN", "Denver", "CO", "US");

        for name in Airport::FIELDS {
            assert!(den.field(name).is_some(), "field {} did not resolve", name);
        }
    }

    #[test]
    fn test_json_round_trip_uses_dataset_keys() {
        let json = r#"{
            "code": "DEN",
            "lat": "39.8617",
            "lon": "-104.6731",
            "name": "Denver International Airport",
            "city": "Denver",
            "state": "CO",
            "country": "US",
            "woeid": "12520108",
            "tz": "America/Denver",
            "phone": "",
            "type": "Airports",
            "email": "",
            "url": "",
            "runway_length": "16000",
            "elev": "5431",
            "icao": "KDEN",
            "direct_flights": "197",
            "carriers": "24"
        }"#;

        let parsed: Airport = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.code, "DEN");
        assert_eq!(parsed.kind, "Airports");
        assert_eq!(parsed.runway_length.as_deref(), Some("16000"));

        let back = serde_json::to_value(&parsed).unwrap();
        assert_eq!(back["type"], "Airports");
        assert_eq!(back["runway_length"], "16000");
    }
}
