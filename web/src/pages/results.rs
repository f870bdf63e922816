//! Results page – diagnosis requests from this session with the diseases
//! known for each crop.

use leptos::prelude::*;

use agriguard_common::Catalog;

use crate::components::disease_card::SeverityBadge;
use crate::components::empty_state::EmptyState;
use crate::model::DiagnosisRequest;
use crate::pages::diseases::get_catalog;
use crate::state::use_diagnosis;

#[component]
pub fn ResultsPage() -> impl IntoView {
    let diagnosis = use_diagnosis();
    let catalog = Resource::new(|| (), |_| get_catalog());

    view! {
        <div class="results-page">
            <h1>"Diagnosis Results"</h1>

            <Show
                when=move || diagnosis.requests.with(|r| !r.is_empty())
                fallback=|| view! {
                    <EmptyState
                        title="No diagnoses yet"
                        message="Submit a photo of an affected plant to see possible diseases here."
                        action=("/diagnosis", "Start a Diagnosis")
                    />
                }
            >
                <Suspense fallback=move || view! { <p class="loading">"Loading…"</p> }>
                    {move || catalog.get().map(|res| match res {
                        Ok(c) => view! { <RequestList catalog=c/> }.into_any(),
                        Err(e) => view! {
                            <p class="error">"Error: " {e.to_string()}</p>
                        }.into_any(),
                    })}
                </Suspense>
            </Show>
        </div>
    }
}

/// Newest request first.
#[component]
fn RequestList(catalog: Catalog) -> impl IntoView {
    let diagnosis = use_diagnosis();
    let catalog = StoredValue::new(catalog);

    view! {
        <div class="request-list">
            <For
                each=move || {
                    let mut list = diagnosis.requests.get();
                    list.reverse();
                    list
                }
                key=|r| r.id
                children=move |request: DiagnosisRequest| {
                    view! { <RequestCard request=request catalog=catalog/> }
                }
            />
        </div>
    }
}

#[component]
fn RequestCard(request: DiagnosisRequest, catalog: StoredValue<Catalog>) -> impl IntoView {
    let candidates = catalog.with_value(|c| {
        c.for_crop(&request.crop)
            .into_iter()
            .map(|d| {
                let href = format!("/diseases/{}", d.id);
                view! {
                    <li class="candidate">
                        <a href={href}>{d.name.clone()}</a>
                        " "
                        <SeverityBadge severity={d.severity}/>
                        <span class="accuracy-badge">{format!("{} Accuracy", d.confidence)}</span>
                    </li>
                }
            })
            .collect::<Vec<_>>()
    });
    let has_candidates = !candidates.is_empty();
    let notes = (!request.notes.is_empty()).then(|| request.notes.clone());

    view! {
        <article class="request-card">
            <header class="request-header">
                <h2>{format!("Request #{}", request.id)}</h2>
                <span class="crop-badge">{request.crop.clone()}</span>
                <span class="status-badge">"Awaiting analysis"</span>
            </header>
            <p class="request-image">"Photo: " {request.image_name.clone()}</p>
            {notes.map(|n| view! { <p class="request-notes">"Notes: " {n}</p> })}

            <h3>"Known diseases for this crop"</h3>
            {if has_candidates {
                view! { <ul class="candidate-list">{candidates}</ul> }.into_any()
            } else {
                view! { <p class="muted">"No diseases for this crop in the database."</p> }.into_any()
            }}
        </article>
    }
}
