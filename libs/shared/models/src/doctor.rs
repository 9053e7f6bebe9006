use serde::{Deserialize, Serialize};

/// A doctor as listed by `GET /api/medicos`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "especialidad")]
    pub specialty: String,
    #[serde(rename = "precio")]
    pub price: f64,
    #[serde(rename = "duracion_min")]
    pub duration_min: i64,
}

impl Doctor {
    /// Selector label, e.g. `Dr. X · Cardiología`.
    pub fn option_label(&self) -> String {
        format!("{} · {}", self.name, self.specialty)
    }

    pub fn price_label(&self) -> String {
        format!("${}", format_amount(self.price))
    }

    pub fn duration_label(&self) -> String {
        format!("{} min", self.duration_min)
    }
}

/// Integral amounts print without a fractional part.
pub fn format_amount(amount: f64) -> String {
    format!("{}", amount)
}
