use crate::models::{ClientRecord, DashboardBundle, InvoiceRecord, PaymentRecord};
use std::collections::HashSet;

/// Everything the dashboard knows about one client, looked up by CI.
#[derive(Clone, Debug, PartialEq)]
pub struct ClientStatement {
    pub client: ClientRecord,
    pub invoices: Vec<InvoiceRecord>,
    pub payments: Vec<PaymentRecord>,
    pub total_invoiced: f64,
    pub total_paid: f64,
}

impl ClientStatement {
    pub fn balance(&self) -> f64 {
        self.total_invoiced - self.total_paid
    }
}

pub fn find(bundle: &DashboardBundle, ci: &str) -> Option<ClientStatement> {
    let ci = ci.trim();
    if ci.is_empty() {
        return None;
    }

    let client = bundle.clients.iter().find(|c| c.ci == ci)?.clone();
    let invoices: Vec<InvoiceRecord> = bundle
        .invoices
        .iter()
        .filter(|f| f.cliente_ci == ci)
        .cloned()
        .collect();

    // a payment without an invoice code belongs to nobody
    let codes: HashSet<&str> = invoices
        .iter()
        .map(|f| f.codigo.as_str())
        .filter(|codigo| !codigo.is_empty())
        .collect();
    let payments: Vec<PaymentRecord> = bundle
        .payments
        .iter()
        .filter(|p| codes.contains(p.factura_codigo.as_str()))
        .cloned()
        .collect();

    let total_invoiced: f64 = invoices.iter().filter_map(|f| f.monto_total).sum();
    let total_paid: f64 = payments.iter().filter_map(|p| p.monto_pagado).sum();

    Some(ClientStatement {
        client,
        invoices,
        payments,
        total_invoiced,
        total_paid,
    })
}
