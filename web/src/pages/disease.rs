//! Disease detail page – every field of a single record.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use agriguard_common::DiseaseRecord;

use crate::components::disease_card::SeverityBadge;

// ─── Server functions ────────────────────────────────────────────────────────

#[server(name = GetDisease, prefix = "/api")]
pub async fn get_disease(id: u32) -> Result<Option<DiseaseRecord>, ServerFnError> {
    let state = crate::server::app_state()?;
    Ok(state.catalog.get(id).cloned())
}

// ─── Page component ──────────────────────────────────────────────────────────

/// Detail page for `/diseases/:id`.
#[component]
pub fn DiseasePage() -> impl IntoView {
    let params = use_params_map();
    let id = move || params.with(|p| p.get("id").and_then(|s| s.parse::<u32>().ok()));

    let disease = Resource::new(id, |id| async move {
        match id {
            Some(id) => get_disease(id).await,
            None => Ok(None),
        }
    });

    view! {
        <div class="disease-page">
            <a href="/diseases" class="back-link">"← All Diseases"</a>

            <Suspense fallback=move || view! { <p class="loading">"Loading…"</p> }>
                {move || disease.get().map(|res| match res {
                    Ok(Some(d)) => view! { <DiseaseDetail disease=d/> }.into_any(),
                    Ok(None) => view! {
                        <p class="error">"Disease not found."</p>
                    }.into_any(),
                    Err(e) => view! {
                        <p class="error">"Error: " {e.to_string()}</p>
                    }.into_any(),
                })}
            </Suspense>
        </div>
    }
}

#[component]
fn DiseaseDetail(disease: DiseaseRecord) -> impl IntoView {
    view! {
        <article class="disease-detail">
            <div class="disease-hero">
                <img src={disease.image_url.clone()} alt={disease.name.clone()} class="disease-hero-img"/>
                <div class="disease-hero-info">
                    <h1>{disease.name.clone()}</h1>
                    <p class="disease-sci">{disease.scientific_name.clone()}</p>
                    <div class="disease-tags">
                        <SeverityBadge severity={disease.severity}/>
                        <span class="crop-badge">{disease.crop.clone()}</span>
                        <span class="accuracy-badge">{format!("{} Accuracy", disease.confidence)}</span>
                    </div>
                    <p><span class="note-label">"Season: "</span>{disease.season.clone()}</p>
                    <p><span class="note-label">"Spread: "</span>{disease.spread.clone()}</p>
                </div>
            </div>

            <div class="detail-sections">
                <DetailList title="Symptoms" accent="symptoms-title" items=disease.symptoms.clone()/>
                <DetailList title="Treatment" accent="treatment-title" items=disease.treatments.clone()/>
                <DetailList title="Prevention" accent="prevention-title" items=disease.prevention.clone()/>
            </div>
        </article>
    }
}

#[component]
fn DetailList(title: &'static str, accent: &'static str, items: Vec<String>) -> impl IntoView {
    view! {
        <section class="detail-section">
            <h2 class={format!("section-title {accent}")}>{title}</h2>
            <ol class="detail-list">
                {items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}
            </ol>
        </section>
    }
}
