use crate::config::DashboardConfig;
use crate::format::{format_count, format_currency, format_date, summary_line};
use crate::models::DashboardBundle;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Tab {
    #[default]
    Resumen,
    Clientes,
    Facturas,
    Pagos,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown tab `{0}`; expected resumen, clientes, facturas or pagos")]
pub struct InvalidTab(pub String);

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Resumen, Tab::Clientes, Tab::Facturas, Tab::Pagos];

    pub fn as_str(self) -> &'static str {
        match self {
            Tab::Resumen => "resumen",
            Tab::Clientes => "clientes",
            Tab::Facturas => "facturas",
            Tab::Pagos => "pagos",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Resumen => "Resumen Morosidad",
            Tab::Clientes => "Clientes",
            Tab::Facturas => "Facturas",
            Tab::Pagos => "Pagos",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tab {
    type Err = InvalidTab;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tab::ALL
            .into_iter()
            .find(|tab| tab.as_str() == s)
            .ok_or_else(|| InvalidTab(s.to_string()))
    }
}

/// Reads the tab named by a URL fragment such as `#facturas`. An empty
/// fragment names no tab.
pub fn tab_from_fragment(hash: &str) -> Result<Option<Tab>, InvalidTab> {
    let name = hash.strip_prefix('#').unwrap_or(hash);
    if name.is_empty() {
        return Ok(None);
    }
    name.parse().map(Some)
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResumenView {
    pub al_dia: String,
    pub en_observacion: String,
    pub morosos: String,
    pub deuda_total: String,
    pub summary: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ClientRow {
    pub ci: String,
    pub nombre: String,
    pub categoria: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InvoiceRow {
    pub codigo: String,
    pub cliente_ci: String,
    pub monto: String,
    pub fecha: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PaymentRow {
    pub codigo: String,
    pub factura_codigo: String,
    pub monto: String,
    pub fecha: String,
}

/// What the active tab shows, already formatted for display.
#[derive(Clone, Debug, PartialEq)]
pub enum ContentDescriptor {
    Resumen(ResumenView),
    Clientes { rows: Vec<ClientRow>, count: usize },
    Facturas { rows: Vec<InvoiceRow>, count: usize },
    Pagos { rows: Vec<PaymentRow>, count: usize },
}

#[cfg(test)]
impl ContentDescriptor {
    pub fn tab(&self) -> Tab {
        match self {
            ContentDescriptor::Resumen(_) => Tab::Resumen,
            ContentDescriptor::Clientes { .. } => Tab::Clientes,
            ContentDescriptor::Facturas { .. } => Tab::Facturas,
            ContentDescriptor::Pagos { .. } => Tab::Pagos,
        }
    }
}

pub fn select(tab: Tab, bundle: &DashboardBundle, config: &DashboardConfig) -> ContentDescriptor {
    let symbol = config.currency_prefix.as_str();
    let locale = config.locale;

    match tab {
        Tab::Resumen => {
            let report = &bundle.report;
            ContentDescriptor::Resumen(ResumenView {
                al_dia: format_count(report.resumen.al_dia, locale),
                en_observacion: format_count(report.resumen.en_observacion, locale),
                morosos: format_count(report.resumen.morosos, locale),
                deuda_total: format_currency(report.total_deuda_general, symbol, locale),
                summary: summary_line(report, symbol, locale),
            })
        }
        Tab::Clientes => ContentDescriptor::Clientes {
            rows: bundle
                .clients
                .iter()
                .map(|c| ClientRow {
                    ci: c.ci.clone(),
                    nombre: c.nombre.clone(),
                    categoria: c.categoria.clone(),
                })
                .collect(),
            count: bundle.clients.len(),
        },
        Tab::Facturas => ContentDescriptor::Facturas {
            rows: bundle
                .invoices
                .iter()
                .map(|f| InvoiceRow {
                    codigo: f.codigo.clone(),
                    cliente_ci: f.cliente_ci.clone(),
                    monto: format_currency(f.monto_total, symbol, locale),
                    fecha: format_date(&f.fecha, locale),
                })
                .collect(),
            count: bundle.invoices.len(),
        },
        Tab::Pagos => ContentDescriptor::Pagos {
            rows: bundle
                .payments
                .iter()
                .map(|p| PaymentRow {
                    codigo: p.codigo.clone(),
                    factura_codigo: p.factura_codigo.clone(),
                    monto: format_currency(p.monto_pagado, symbol, locale),
                    fecha: format_date(&p.fecha_pago, locale),
                })
                .collect(),
            count: bundle.payments.len(),
        },
    }
}
