use crate::api::{Endpoint, EndpointError};
use crate::models::{
    ClientRecord, DashboardBundle, DelinquencyReport, InvoiceRecord, PaymentRecord, Resource,
};
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use thiserror::Error;

/// The single failure surfaced when any of the four retrievals fails.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{resource}: {cause}")]
pub struct FetchFailure {
    pub resource: Resource,
    #[source]
    pub cause: EndpointError,
}

impl FetchFailure {
    pub fn new(resource: Resource, cause: EndpointError) -> Self {
        Self { resource, cause }
    }
}

/// Per-resource outcome of [`Orchestrator::load_settled`].
// Only tests read this until the dashboard renders partial data (see DESIGN.md, partial degradation).
#[allow(dead_code)]
pub type SettledLoad = BTreeMap<Resource, Result<(), EndpointError>>;

pub struct Orchestrator<E> {
    endpoint: E,
}

impl<E: Endpoint> Orchestrator<E> {
    pub fn new(endpoint: E) -> Self {
        Self { endpoint }
    }

    /// Fetches all four resources concurrently. Succeeds only when every one
    /// of them does; the first failure observed is returned and the other
    /// requests are dropped.
    pub async fn load_all(&self) -> Result<DashboardBundle, FetchFailure> {
        let (report, clients, invoices, payments) = futures::try_join!(
            self.fetch::<DelinquencyReport>(Resource::ReporteMorosidad),
            self.fetch::<Vec<ClientRecord>>(Resource::Clientes),
            self.fetch::<Vec<InvoiceRecord>>(Resource::Facturas),
            self.fetch::<Vec<PaymentRecord>>(Resource::Pagos),
        )?;

        log::info!(
            "dashboard loaded: {} clientes, {} facturas, {} pagos",
            clients.len(),
            invoices.len(),
            payments.len()
        );

        Ok(DashboardBundle {
            report,
            clients,
            invoices,
            payments,
        })
    }

    /// Waits for all four resources and reports each outcome on its own.
    /// Nothing is kept; this exists for diagnostics and for a future
    /// partially-degraded dashboard.
    // Unused by the session until that degraded mode lands (see DESIGN.md, partial degradation).
    #[allow(dead_code)]
    pub async fn load_settled(&self) -> SettledLoad {
        let (report, clients, invoices, payments) = futures::join!(
            self.fetch::<DelinquencyReport>(Resource::ReporteMorosidad),
            self.fetch::<Vec<ClientRecord>>(Resource::Clientes),
            self.fetch::<Vec<InvoiceRecord>>(Resource::Facturas),
            self.fetch::<Vec<PaymentRecord>>(Resource::Pagos),
        );

        let mut settled = SettledLoad::new();
        settled.insert(Resource::ReporteMorosidad, report.map(drop).map_err(|f| f.cause));
        settled.insert(Resource::Clientes, clients.map(drop).map_err(|f| f.cause));
        settled.insert(Resource::Facturas, invoices.map(drop).map_err(|f| f.cause));
        settled.insert(Resource::Pagos, payments.map(drop).map_err(|f| f.cause));
        settled
    }

    async fn fetch<T: DeserializeOwned>(&self, resource: Resource) -> Result<T, FetchFailure> {
        let payload = self
            .endpoint
            .retrieve(resource)
            .await
            .map_err(|cause| FetchFailure::new(resource, cause))?;

        serde_json::from_value(payload).map_err(|e| {
            FetchFailure::new(resource, EndpointError::Payload(e.to_string()))
        })
    }
}

#[cfg(test)]
pub(crate) mod fake {
    use super::*;
    use serde_json::{json, Value};
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    /// In-memory orchestrator. Resources without a canned response never resolve.
    #[derive(Clone, Default)]
    pub struct MemoryEndpoint {
        responses: HashMap<Resource, Result<Value, EndpointError>>,
        pub calls: Rc<RefCell<Vec<Resource>>>,
    }

    impl MemoryEndpoint {
        pub fn empty_dashboard() -> Self {
            Self::default()
                .respond(
                    Resource::ReporteMorosidad,
                    json!({"resumen": {"alDia": 0, "enObservacion": 0, "morosos": 0}, "totalDeudaGeneral": 0}),
                )
                .respond(Resource::Clientes, json!([]))
                .respond(Resource::Facturas, json!([]))
                .respond(Resource::Pagos, json!([]))
        }

        pub fn sample_dashboard() -> Self {
            Self::default()
                .respond(
                    Resource::ReporteMorosidad,
                    json!({"resumen": {"alDia": 3, "enObservacion": 1, "morosos": 2}, "totalDeudaGeneral": 1234567}),
                )
                .respond(
                    Resource::Clientes,
                    json!([
                        {"ci": 32320, "nombre": "Ana Quispe", "categoria": "Moroso"},
                        {"ci": "4455", "nombre": "Luis Mamani", "categoria": "Al día"}
                    ]),
                )
                .respond(
                    Resource::Facturas,
                    json!([
                        {"codigo": 1, "clienteCi": "32320", "montoTotal": 1500, "fecha": "2024-03-05T00:00:00Z"},
                        {"codigo": 2, "clienteCi": 32320, "montoTotal": 500.5, "fecha": "2024-04-01T10:30:00Z"},
                        {"codigo": 3, "clienteCi": "4455", "montoTotal": 200, "fecha": "2024-04-02"}
                    ]),
                )
                .respond(
                    Resource::Pagos,
                    json!([
                        {"codigo": 10, "facturaCodigo": 1, "montoPagado": 1000, "fechaPago": "2024-03-20T00:00:00Z"},
                        {"codigo": 11, "facturaCodigo": "3", "montoPagado": 200, "fechaPago": "2024-04-03T00:00:00Z"}
                    ]),
                )
        }

        pub fn respond(mut self, resource: Resource, payload: Value) -> Self {
            self.responses.insert(resource, Ok(payload));
            self
        }

        pub fn fail(mut self, resource: Resource, cause: EndpointError) -> Self {
            self.responses.insert(resource, Err(cause));
            self
        }

        pub fn hang(mut self, resource: Resource) -> Self {
            self.responses.remove(&resource);
            self
        }
    }

    impl Endpoint for MemoryEndpoint {
        async fn retrieve(&self, resource: Resource) -> Result<Value, EndpointError> {
            self.calls.borrow_mut().push(resource);
            match self.responses.get(&resource) {
                Some(response) => response.clone(),
                None => futures::future::pending().await,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fake::MemoryEndpoint;
    use super::*;
    use futures::executor::block_on;
    use futures::future::{abortable, Aborted};
    use serde_json::json;

    fn not_found() -> EndpointError {
        EndpointError::HttpStatus {
            status: 404,
            status_text: "Not Found".to_string(),
        }
    }

    #[test]
    fn load_all_returns_every_payload() {
        let orchestrator = Orchestrator::new(MemoryEndpoint::sample_dashboard());
        let bundle = block_on(orchestrator.load_all()).unwrap();

        assert_eq!(bundle.report.total_deuda_general, Some(1234567.0));
        assert_eq!(bundle.report.resumen.morosos, Some(2));
        assert_eq!(bundle.clients.len(), 2);
        assert_eq!(bundle.clients[0].ci, "32320");
        assert_eq!(bundle.invoices.len(), 3);
        assert_eq!(bundle.payments[1].factura_codigo, "3");
    }

    #[test]
    fn each_resource_is_requested_exactly_once() {
        let endpoint = MemoryEndpoint::sample_dashboard();
        let calls = endpoint.calls.clone();
        let orchestrator = Orchestrator::new(endpoint);
        block_on(orchestrator.load_all()).unwrap();

        let mut requested = calls.borrow().clone();
        requested.sort();
        assert_eq!(requested, Resource::ALL.to_vec());
    }

    #[test]
    fn one_failing_resource_fails_the_whole_load() {
        for resource in Resource::ALL {
            let endpoint = MemoryEndpoint::sample_dashboard().fail(resource, not_found());
            let failure = block_on(Orchestrator::new(endpoint).load_all()).unwrap_err();
            assert_eq!(failure.resource, resource);
            assert_eq!(failure.cause, not_found());
        }
    }

    #[test]
    fn failure_wins_over_a_request_that_never_finishes() {
        let endpoint = MemoryEndpoint::sample_dashboard()
            .hang(Resource::ReporteMorosidad)
            .fail(Resource::Pagos, EndpointError::Transport("offline".to_string()));
        let failure = block_on(Orchestrator::new(endpoint).load_all()).unwrap_err();
        assert_eq!(failure.resource, Resource::Pagos);
    }

    #[test]
    fn malformed_entity_is_a_payload_error() {
        let endpoint =
            MemoryEndpoint::sample_dashboard().respond(Resource::Facturas, json!({"not": "a list"}));
        let failure = block_on(Orchestrator::new(endpoint).load_all()).unwrap_err();
        assert_eq!(failure.resource, Resource::Facturas);
        assert!(matches!(failure.cause, EndpointError::Payload(_)));
    }

    #[test]
    fn null_fields_in_a_record_still_load() {
        let endpoint = MemoryEndpoint::sample_dashboard()
            .respond(
                Resource::Facturas,
                json!([{"codigo": 1, "clienteCi": "32320", "montoTotal": 10, "fecha": null}]),
            )
            .respond(Resource::Clientes, json!([{"ci": 32320, "categoria": "Moroso"}]))
            .respond(
                Resource::Pagos,
                json!([{"codigo": 10, "facturaCodigo": null, "montoPagado": 5, "fechaPago": "2024-04-01"}]),
            );

        let bundle = block_on(Orchestrator::new(endpoint).load_all()).unwrap();
        assert_eq!(bundle.invoices[0].fecha, "");
        assert_eq!(bundle.invoices[0].monto_total, Some(10.0));
        assert_eq!(bundle.clients[0].nombre, "");
        assert_eq!(bundle.payments[0].factura_codigo, "");
    }

    #[test]
    fn aborted_load_yields_nothing() {
        let endpoint = MemoryEndpoint::sample_dashboard().hang(Resource::Clientes);
        let orchestrator = Orchestrator::new(endpoint);
        let (load, handle) = abortable(orchestrator.load_all());
        handle.abort();
        assert_eq!(block_on(load), Err(Aborted));
    }

    #[test]
    fn settled_load_reports_each_resource() {
        let endpoint = MemoryEndpoint::sample_dashboard().fail(Resource::Clientes, not_found());
        let settled = block_on(Orchestrator::new(endpoint).load_settled());

        assert_eq!(settled.len(), 4);
        assert_eq!(settled[&Resource::Clientes], Err(not_found()));
        assert!(settled[&Resource::ReporteMorosidad].is_ok());
        assert!(settled[&Resource::Facturas].is_ok());
        assert!(settled[&Resource::Pagos].is_ok());
    }
}
