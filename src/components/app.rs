use super::atoms::{Button, Card, Loader};
use super::molecules::{CardColor, SearchForm, SummaryCard};
use crate::api::HttpEndpoint;
use crate::config::DashboardConfig;
use crate::format::{format_currency, format_date};
use crate::orchestrator::Orchestrator;
use crate::session::{load as load_session, SessionEvent, SessionState};
use crate::statement::ClientStatement;
use crate::tabs::{tab_from_fragment, ClientRow, ContentDescriptor, InvoiceRow, PaymentRow, ResumenView, Tab};
use futures::future::{abortable, Aborted};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let config = use_state(DashboardConfig::from_build_env);
    let session = use_reducer_eq(initial_session);

    // one acquisition per mount; unmount cancels whatever is still in flight
    {
        let session = session.clone();
        let config = (*config).clone();
        use_effect_with_deps(
            move |_| {
                let controller = web_sys::AbortController::new().ok();
                let mut endpoint = HttpEndpoint::new(&config);
                if let Some(controller) = &controller {
                    endpoint = endpoint.with_abort_signal(controller.signal());
                }

                log::info!("loading dashboard from {}", config.api_base);
                let (load, handle) = abortable(async move {
                    let orchestrator = Orchestrator::new(endpoint);
                    load_session(&orchestrator).await
                });
                spawn_local(async move {
                    match load.await {
                        Ok(event) => session.dispatch(event),
                        Err(Aborted) => log::info!("dashboard load cancelled"),
                    }
                });

                move || {
                    handle.abort();
                    if let Some(controller) = controller {
                        controller.abort();
                    }
                }
            },
            (),
        );
    }

    if session.is_loading() {
        return html! { <Loader /> };
    }

    if let Some(message) = session.error_message() {
        return html! {
            <div class="text-center text-red-600 text-2xl p-10">{ message.to_string() }</div>
        };
    }

    let on_select = {
        let session = session.clone();
        Callback::from(move |tab: Tab| session.dispatch(SessionEvent::SelectTab(tab)))
    };
    let on_search = {
        let session = session.clone();
        Callback::from(move |ci: String| session.dispatch(SessionEvent::Search(ci)))
    };
    let on_clear = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| session.dispatch(SessionEvent::ClearSearch))
    };

    let content = match session.content(&config) {
        Some(ContentDescriptor::Resumen(view)) => resumen_panel(&view),
        Some(ContentDescriptor::Clientes { rows, count }) => html! {
            <>
                <SearchForm {on_search} />
                { statement_panel(session.search.as_deref(), session.statement(), &config, on_clear) }
                { clientes_panel(&rows, count) }
            </>
        },
        Some(ContentDescriptor::Facturas { rows, count }) => facturas_panel(&rows, count),
        Some(ContentDescriptor::Pagos { rows, count }) => pagos_panel(&rows, count),
        None => html! {},
    };

    html! {
        <ContextProvider<DashboardConfig> context={(*config).clone()}>
            <div class="min-h-screen bg-gradient-to-br from-indigo-50 to-purple-100">
                <div class="container mx-auto p-6 max-w-7xl">
                    <h1 class="text-5xl font-bold text-center my-10 text-indigo-800">
                        {"Orquestador Contabilidad - Dashboard"}
                    </h1>
                    <TabBar active={session.active_tab} {on_select} />
                    <div class="grid gap-8">
                        { content }
                    </div>
                </div>
            </div>
        </ContextProvider<DashboardConfig>>
    }
}

/// `#facturas` in the address opens that tab; anything else is refused.
fn initial_session() -> SessionState {
    let hash = web_sys::window()
        .and_then(|window| window.location().hash().ok())
        .unwrap_or_default();

    let state = SessionState::default();
    match tab_from_fragment(&hash) {
        Ok(Some(tab)) => state.apply(SessionEvent::SelectTab(tab)),
        Ok(None) => state,
        Err(err) => {
            log::warn!("{}", err);
            state
        }
    }
}

#[derive(Properties, PartialEq)]
struct TabBarProps {
    active: Tab,
    on_select: Callback<Tab>,
}

#[function_component(TabBar)]
fn tab_bar(props: &TabBarProps) -> Html {
    html! {
        <div class="flex justify-center gap-4 mb-10 flex-wrap">
            { for Tab::ALL.into_iter().map(|tab| {
                let class = if tab == props.active {
                    classes!("px-8", "py-4", "rounded-xl", "font-bold", "text-lg", "transition", "bg-indigo-600", "text-white", "shadow-xl")
                } else {
                    classes!("px-8", "py-4", "rounded-xl", "font-bold", "text-lg", "transition", "bg-white", "text-indigo-700", "shadow", "hover:shadow-lg")
                };
                let on_select = props.on_select.clone();
                html! {
                    <Button
                        key={tab.as_str()}
                        label={tab.label()}
                        {class}
                        onclick={Callback::from(move |_: MouseEvent| on_select.emit(tab))}
                    />
                }
            }) }
        </div>
    }
}

fn resumen_panel(view: &ResumenView) -> Html {
    html! {
        <Card>
            <h2 class="text-4xl font-bold text-center mb-8">{"Reporte General de Morosidad"}</h2>
            <div class="grid grid-cols-1 md:grid-cols-4 gap-6">
                { count_tile(&view.al_dia, "Al día", "bg-green-100", "text-green-700") }
                { count_tile(&view.en_observacion, "En Observación", "bg-yellow-100", "text-yellow-700") }
                { count_tile(&view.morosos, "Morosos", "bg-red-100", "text-red-700") }
                { count_tile(&view.deuda_total, "Deuda Total", "bg-purple-100", "text-purple-700") }
            </div>
            <p class="sr-only">{ view.summary.clone() }</p>
        </Card>
    }
}

fn count_tile(value: &str, label: &'static str, background: &'static str, text: &'static str) -> Html {
    html! {
        <div class={classes!(background, "p-6", "rounded-xl", "text-center")}>
            <p class={classes!("text-5xl", "font-bold", text)}>{ value.to_string() }</p>
            <p class="text-xl">{ label }</p>
        </div>
    }
}

fn statement_panel(
    query: Option<&str>,
    statement: Option<ClientStatement>,
    config: &DashboardConfig,
    on_clear: Callback<MouseEvent>,
) -> Html {
    let Some(query) = query else {
        return html! {};
    };

    let Some(statement) = statement else {
        return html! {
            <Card>
                <p class="text-xl text-center">{ format!("No se encontró ningún cliente con CI {}", query) }</p>
                <div class="flex justify-center mt-6">
                    <Button label="Limpiar" onclick={on_clear} />
                </div>
            </Card>
        };
    };

    let symbol = config.currency_prefix.as_str();
    let locale = config.locale;
    let balance_color = if statement.balance() <= 0.0 {
        CardColor::Green
    } else if statement.total_paid > 0.0 {
        CardColor::Yellow
    } else {
        CardColor::Red
    };

    html! {
        <Card>
            <div class="flex items-center justify-between mb-6">
                <h2 class="text-3xl font-bold">
                    { format!("{} ({})", statement.client.nombre, statement.client.ci) }
                </h2>
                <Button label="Limpiar" onclick={on_clear} />
            </div>
            <p class="mb-6">{ format!("Categoría: {}", statement.client.categoria) }</p>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-6 mb-8">
                <SummaryCard title="Facturado" value={Some(statement.total_invoiced)} />
                <SummaryCard title="Pagado" value={Some(statement.total_paid)} color={CardColor::Green} />
                <SummaryCard title="Saldo" value={Some(statement.balance())} color={balance_color} />
            </div>
            <h3 class="text-xl font-bold mb-2">{ format!("Facturas ({})", statement.invoices.len()) }</h3>
            <ul class="space-y-2 mb-6">
                { for statement.invoices.iter().enumerate().map(|(i, f)| html! {
                    <li key={i}>
                        { format!("# {} · {} · {}", f.codigo, format_currency(f.monto_total, symbol, locale), format_date(&f.fecha, locale)) }
                    </li>
                }) }
            </ul>
            <h3 class="text-xl font-bold mb-2">{ format!("Pagos ({})", statement.payments.len()) }</h3>
            <ul class="space-y-2">
                { for statement.payments.iter().enumerate().map(|(i, p)| html! {
                    <li key={i}>
                        { format!("Factura #{} · {} · {}", p.factura_codigo, format_currency(p.monto_pagado, symbol, locale), format_date(&p.fecha_pago, locale)) }
                    </li>
                }) }
            </ul>
        </Card>
    }
}

fn clientes_panel(rows: &[ClientRow], count: usize) -> Html {
    html! {
        <Card>
            <h2 class="text-3xl font-bold mb-6">{ format!("Lista de Clientes ({})", count) }</h2>
            <div class="overflow-x-auto">
                <table class="w-full table-auto border-collapse">
                    <thead>
                        <tr class="bg-indigo-600 text-white">
                            <th class="p-4">{"CI"}</th>
                            <th class="p-4">{"Nombre"}</th>
                            <th class="p-4">{"Categoría"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for rows.iter().enumerate().map(|(i, c)| html! {
                            <tr key={i} class={if i % 2 == 0 { "bg-gray-50" } else { "bg-white" }}>
                                <td class="p-4 text-center font-mono">{ c.ci.clone() }</td>
                                <td class="p-4">{ c.nombre.clone() }</td>
                                <td class="p-4 text-center">{ c.categoria.clone() }</td>
                            </tr>
                        }) }
                    </tbody>
                </table>
            </div>
        </Card>
    }
}

fn facturas_panel(rows: &[InvoiceRow], count: usize) -> Html {
    html! {
        <Card>
            <h2 class="text-3xl font-bold mb-6">{ format!("Facturas ({})", count) }</h2>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                { for rows.iter().enumerate().map(|(i, f)| html! {
                    <div key={i} class="bg-indigo-50 p-6 rounded-xl border-2 border-indigo-200">
                        <p class="text-2xl font-bold">{ format!("# {}", f.codigo) }</p>
                        <p>{"CI Cliente: "}<strong>{ f.cliente_ci.clone() }</strong></p>
                        <p>{"Monto: "}<strong>{ f.monto.clone() }</strong></p>
                        <p class="text-sm text-gray-600">{ f.fecha.clone() }</p>
                    </div>
                }) }
            </div>
        </Card>
    }
}

fn pagos_panel(rows: &[PaymentRow], count: usize) -> Html {
    html! {
        <Card>
            <h2 class="text-3xl font-bold mb-6">{ format!("Pagos ({})", count) }</h2>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                { for rows.iter().enumerate().map(|(i, p)| html! {
                    <div key={i} class="bg-green-50 p-6 rounded-xl border-2 border-green-200">
                        <p class="text-2xl font-bold">{ format!("Factura #{}", p.factura_codigo) }</p>
                        <p>{"Monto Pagado: "}<strong>{ p.monto.clone() }</strong></p>
                        <p class="text-sm text-gray-600">{ p.fecha.clone() }</p>
                    </div>
                }) }
            </div>
        </Card>
    }
}
