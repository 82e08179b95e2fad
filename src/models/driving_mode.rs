use serde::Serialize;

/// Driving condition recorded with a consumption reading.
/// The log stores free text, so values outside this set are tolerated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DrivingMode {
    City,    // C
    Highway, // H
    Mixed,   // M
    Eco,     // E
}

impl DrivingMode {
    pub fn code(&self) -> &'static str {
        match self {
            DrivingMode::City => "C",
            DrivingMode::Highway => "H",
            DrivingMode::Mixed => "M",
            DrivingMode::Eco => "E",
        }
    }

    /// Label persisted in the `Mode` column.
    pub fn label(&self) -> &'static str {
        match self {
            DrivingMode::City => "City",
            DrivingMode::Highway => "Highway",
            DrivingMode::Mixed => "Mixed",
            DrivingMode::Eco => "Eco",
        }
    }

    /// Accepts codes and labels in any case.
    pub fn from_code(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "C" | "CITY" => Some(DrivingMode::City),
            "H" | "HIGHWAY" | "HWY" => Some(DrivingMode::Highway),
            "M" | "MIXED" => Some(DrivingMode::Mixed),
            "E" | "ECO" => Some(DrivingMode::Eco),
            _ => None,
        }
    }

    /// Normalize CLI input: known modes become their label, anything else is
    /// kept verbatim. The flag tells the caller whether the input was known.
    pub fn normalize(s: &str) -> (String, bool) {
        match Self::from_code(s) {
            Some(m) => (m.label().to_string(), true),
            None => (s.trim().to_string(), s.trim().is_empty()),
        }
    }
}
