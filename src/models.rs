use serde::{Deserialize, Deserializer};
use std::fmt;

/// The four resources the orchestrator exposes, in the order they are requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Resource {
    ReporteMorosidad,
    Clientes,
    Facturas,
    Pagos,
}

impl Resource {
    #[cfg(test)]
    pub const ALL: [Resource; 4] = [
        Resource::ReporteMorosidad,
        Resource::Clientes,
        Resource::Facturas,
        Resource::Pagos,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Resource::ReporteMorosidad => "reporte-morosidad",
            Resource::Clientes => "clientes",
            Resource::Facturas => "facturas",
            Resource::Pagos => "pagos",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

// Identifiers come back as strings or numbers depending on the backing table.
// A null or missing id reads as an empty string; the record is still shown.
fn lenient_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Text(s)) => s,
        Some(Raw::Int(n)) => n.to_string(),
        Some(Raw::Float(n)) => n.to_string(),
        None => String::new(),
    })
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientRecord {
    #[serde(default, deserialize_with = "lenient_id")]
    pub ci: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub nombre: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub categoria: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceRecord {
    #[serde(default, deserialize_with = "lenient_id")]
    pub codigo: String,
    #[serde(default, deserialize_with = "lenient_id")]
    pub cliente_ci: String,
    #[serde(default)]
    pub monto_total: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub fecha: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecord {
    #[serde(default, deserialize_with = "lenient_id")]
    pub codigo: String,
    #[serde(default, deserialize_with = "lenient_id")]
    pub factura_codigo: String,
    #[serde(default)]
    pub monto_pagado: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub fecha_pago: String,
}

/// Client population split by payment status. Missing counts read as zero.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DelinquencySummary {
    #[serde(default)]
    pub al_dia: Option<u64>,
    #[serde(default)]
    pub en_observacion: Option<u64>,
    #[serde(default)]
    pub morosos: Option<u64>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DelinquencyReport {
    #[serde(default, deserialize_with = "null_as_default")]
    pub resumen: DelinquencySummary,
    #[serde(default)]
    pub total_deuda_general: Option<f64>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Result of one successful acquisition cycle. Never partially populated.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardBundle {
    pub report: DelinquencyReport,
    pub clients: Vec<ClientRecord>,
    pub invoices: Vec<InvoiceRecord>,
    pub payments: Vec<PaymentRecord>,
}
