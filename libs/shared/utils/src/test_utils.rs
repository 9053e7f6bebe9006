use serde_json::{json, Value};

use shared_config::AppConfig;
use shared_models::{BookingPayload, Doctor};

pub struct TestConfig {
    pub api_base_url: String,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8000".to_string(),
        }
    }
}

impl TestConfig {
    pub fn new(api_base_url: &str) -> Self {
        Self {
            api_base_url: api_base_url.to_string(),
        }
    }

    /// Points at a port nothing listens on, so every request fails at transport level.
    pub fn unreachable() -> Self {
        Self::new("http://127.0.0.1:9")
    }

    pub fn to_app_config(&self) -> AppConfig {
        AppConfig::with_base_url(&self.api_base_url)
    }
}

pub struct MockBackendResponses;

impl MockBackendResponses {
    pub fn doctor(id: i64, name: &str, specialty: &str, price: f64, duration_min: i64) -> Value {
        json!({
            "id": id,
            "nombre": name,
            "especialidad": specialty,
            "precio": price,
            "duracion_min": duration_min
        })
    }

    /// Single cardiologist: `{id:1, nombre:"A", especialidad:"Cardio", precio:100, duracion_min:20}`.
    pub fn single_doctor_list() -> Value {
        json!([
            { "id": 1, "nombre": "A", "especialidad": "Cardio", "precio": 100, "duracion_min": 20 }
        ])
    }

    /// Five doctors across three specialties, deliberately unsorted.
    pub fn doctor_list() -> Value {
        json!([
            Self::doctor(3, "Dr. Gómez", "Pediatría", 12000.0, 30),
            Self::doctor(1, "Dra. Paz", "Cardiología", 15000.0, 40),
            Self::doctor(7, "Dr. Ruiz", "Dermatología", 9500.5, 20),
            Self::doctor(4, "Dra. Sosa", "Cardiología", 14000.0, 30),
            Self::doctor(9, "Dr. Lima", "Pediatría", 11000.0, 25),
        ])
    }

    pub fn doctors() -> Vec<Doctor> {
        serde_json::from_value(Self::doctor_list()).unwrap_or_default()
    }

    pub fn preference_response(init_point: &str) -> Value {
        json!({
            "id": "pref-123",
            "init_point": init_point
        })
    }

    pub fn error_response(detail: &str) -> Value {
        json!({ "detail": detail })
    }
}

pub fn sample_payload(doctor_id: i64) -> BookingPayload {
    BookingPayload {
        name: "Ana Pérez".to_string(),
        email: "ana@example.com".to_string(),
        specialty: "Cardiología".to_string(),
        doctor_id,
        date: "2026-11-02".to_string(),
        time: "10:30".to_string(),
        reason: "Control anual".to_string(),
    }
}
