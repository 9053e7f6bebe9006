use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /api/crear-preferencia`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingPayload {
    #[serde(rename = "nombre")]
    pub name: String,
    pub email: String,
    #[serde(rename = "especialidad")]
    pub specialty: String,
    #[serde(rename = "medico_id")]
    pub doctor_id: i64,
    #[serde(rename = "fecha")]
    pub date: String,
    #[serde(rename = "hora")]
    pub time: String,
    #[serde(rename = "motivo")]
    pub reason: String,
}

/// Success body of the preference endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreferenceResponse {
    pub init_point: Option<String>,
}

impl PreferenceResponse {
    /// Lenient read of a response body; anything that is not a JSON object
    /// with a non-empty string `init_point` yields no payment link.
    pub fn from_body(body: &str) -> Self {
        let value: Value = serde_json::from_str(body).unwrap_or(Value::Null);
        Self {
            init_point: non_empty_str(&value, "init_point"),
        }
    }

    pub fn payment_link(&self) -> Option<&str> {
        self.init_point.as_deref()
    }
}

/// Optional error body returned by the backend on non-2xx.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub detail: Option<String>,
    pub error: Option<String>,
}

impl ApiErrorBody {
    pub fn from_body(body: &str) -> Self {
        let value: Value = serde_json::from_str(body).unwrap_or(Value::Null);
        Self {
            detail: non_empty_str(&value, "detail"),
            error: non_empty_str(&value, "error"),
        }
    }

    /// `detail`, then `error`, then `fallback`.
    pub fn message_or(&self, fallback: &str) -> String {
        self.detail
            .as_deref()
            .or(self.error.as_deref())
            .unwrap_or(fallback)
            .to_string()
    }
}

fn non_empty_str(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
