//! Typed response views over raw dataset records.
//!
//! The store hands the boundary untyped rows; these views pull out the
//! columns each endpoint promises, best-effort. Missing text columns become
//! empty strings, unparseable numerics become `null`, and flag columns
//! become booleans (false when missing).

use serde::Serialize;

use crate::store::Record;

#[derive(Debug, Clone, Serialize)]
pub struct Aircraft {
    pub icao: String,
    pub registration: String,
    pub model_icao: String,
    pub manufacturer: String,
    pub model: String,
    pub manufacturer_and_model: String,
    pub is_private_operator: bool,
    pub operator: String,
    pub airline_code: String,
    pub serial_number: String,
    pub year_built: Option<i64>,
}

impl Aircraft {
    pub fn from_record(record: &Record) -> Self {
        Self {
            icao: text(record, "ICAO"),
            registration: text(record, "Registration"),
            model_icao: text(record, "ModelICAO"),
            manufacturer: text(record, "Manufacturer"),
            model: text(record, "Model"),
            manufacturer_and_model: text(record, "ManufacturerAndModel"),
            is_private_operator: flag(record, "IsPrivateOperator"),
            operator: text(record, "Operator"),
            airline_code: text(record, "AirlineCode"),
            serial_number: text(record, "SerialNumber"),
            year_built: integer(record, "YearBuilt"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Airline {
    pub code: String,
    pub name: String,
    pub icao: String,
    pub iata: String,
    pub positioning_flight_pattern: String,
    pub charter_flight_pattern: String,
}

impl Airline {
    pub fn from_record(record: &Record) -> Self {
        Self {
            code: text(record, "Code"),
            name: text(record, "Name"),
            icao: text(record, "ICAO"),
            iata: text(record, "IATA"),
            positioning_flight_pattern: text(record, "PositioningFlightPattern"),
            charter_flight_pattern: text(record, "CharterFlightPattern"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Airport {
    pub code: String,
    pub name: String,
    pub icao: String,
    pub iata: String,
    pub location: String,
    pub country_iso2: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub altitude_feet: Option<i64>,
}

impl Airport {
    pub fn from_record(record: &Record) -> Self {
        Self {
            code: text(record, "Code"),
            name: text(record, "Name"),
            icao: text(record, "ICAO"),
            iata: text(record, "IATA"),
            location: text(record, "Location"),
            country_iso2: text(record, "CountryISO2"),
            latitude: float(record, "Latitude"),
            longitude: float(record, "Longitude"),
            altitude_feet: integer(record, "AltitudeFeet"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Route {
    pub callsign: String,
    pub code: String,
    pub number: String,
    pub airline_code: String,
    pub airport_codes: String,
}

impl Route {
    pub fn from_record(record: &Record) -> Self {
        Self {
            callsign: text(record, "Callsign"),
            code: text(record, "Code"),
            number: text(record, "Number"),
            airline_code: text(record, "AirlineCode"),
            airport_codes: text(record, "AirportCodes"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Country {
    pub iso: String,
    pub name: String,
}

impl Country {
    pub fn from_record(record: &Record) -> Self {
        Self {
            iso: text(record, "ISO"),
            name: text(record, "Name"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ModelType {
    pub icao: String,
    pub manufacturer: String,
    pub model: String,
    pub engines: String,
    pub engine_type_code: String,
    pub engine_placement_code: String,
    pub species_code: String,
    pub wake_turbulence_code: String,
    pub is_active: bool,
}

impl ModelType {
    pub fn from_record(record: &Record) -> Self {
        Self {
            icao: text(record, "ICAO"),
            manufacturer: text(record, "Manufacturer"),
            model: text(record, "Model"),
            engines: text(record, "Engines"),
            engine_type_code: text(record, "EngineTypeCode"),
            engine_placement_code: text(record, "EnginePlacementCode"),
            species_code: text(record, "SpeciesCode"),
            wake_turbulence_code: text(record, "WakeTurbulenceCode"),
            is_active: flag(record, "IsActive"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CodeBlock {
    pub start: String,
    pub finish: String,
    pub count: Option<i64>,
    pub bitmask: String,
    pub significant_bitmask: String,
    pub is_military: bool,
    pub country_iso2: String,
}

impl CodeBlock {
    pub fn from_record(record: &Record) -> Self {
        Self {
            start: text(record, "Start"),
            finish: text(record, "Finish"),
            count: integer(record, "Count"),
            bitmask: text(record, "Bitmask"),
            significant_bitmask: text(record, "SignificantBitmask"),
            is_military: flag(record, "IsMilitary"),
            country_iso2: text(record, "CountryISO2"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RegistrationPrefix {
    pub prefix: String,
    pub country_iso2: String,
    pub has_hyphen: bool,
    pub decode_full_regex: String,
    pub decode_no_hyphen_regex: String,
    pub format_template: String,
}

impl RegistrationPrefix {
    pub fn from_record(record: &Record) -> Self {
        Self {
            prefix: text(record, "Prefix"),
            country_iso2: text(record, "CountryISO2"),
            has_hyphen: flag(record, "HasHyphen"),
            decode_full_regex: text(record, "DecodeFullRegex"),
            decode_no_hyphen_regex: text(record, "DecodeNoHyphenRegex"),
            format_template: text(record, "FormatTemplate"),
        }
    }
}

fn text(record: &Record, column: &str) -> String {
    record.value(column).unwrap_or_default().to_string()
}

fn integer(record: &Record, column: &str) -> Option<i64> {
    record.value(column).and_then(|value| value.parse().ok())
}

fn float(record: &Record, column: &str) -> Option<f64> {
    record.value(column).and_then(|value| value.parse().ok())
}

/// Flag columns hold "0"/"1" in the source files.
fn flag(record: &Record, column: &str) -> bool {
    matches!(record.value(column), Some("1") | Some("true") | Some("True"))
}
