//! Disease card for the catalog grid.

use leptos::prelude::*;

use agriguard_common::{DiseaseRecord, Severity};

/// Symptoms shown on a card before the "details" link.
const CARD_SYMPTOMS: usize = 3;
const CARD_TREATMENTS: usize = 2;

/// Coloured severity pill.
#[component]
pub fn SeverityBadge(severity: Severity) -> impl IntoView {
    view! { <span class={severity.badge_class()}>{severity.as_str()}</span> }
}

/// A card with image, badges, the first few symptoms and treatments, and
/// season and spread notes.
#[component]
pub fn DiseaseCard(disease: DiseaseRecord) -> impl IntoView {
    let href = format!("/diseases/{}", disease.id);

    let symptoms = disease
        .symptoms
        .iter()
        .take(CARD_SYMPTOMS)
        .map(|s| view! { <li class="symptom">{s.clone()}</li> })
        .collect_view();
    let treatments = disease
        .treatments
        .iter()
        .take(CARD_TREATMENTS)
        .map(|t| view! { <li class="treatment">{t.clone()}</li> })
        .collect_view();

    view! {
        <article class="disease-card">
            <div class="disease-img-wrap">
                <img
                    src={disease.image_url.clone()}
                    alt={disease.name.clone()}
                    class="disease-img"
                    loading="lazy"
                />
                <div class="disease-img-badge">
                    <SeverityBadge severity={disease.severity}/>
                </div>
            </div>
            <div class="disease-card-body">
                <div class="disease-tags">
                    <span class="crop-badge">{disease.crop.clone()}</span>
                    <span class="accuracy-badge">{format!("{} Accuracy", disease.confidence)}</span>
                </div>
                <h3 class="disease-name">
                    <a href={href}>{disease.name.clone()}</a>
                </h3>
                <p class="disease-sci">{disease.scientific_name.clone()}</p>

                <h4 class="section-title symptoms-title">"Symptoms"</h4>
                <ul class="card-list">{symptoms}</ul>

                <h4 class="section-title treatment-title">"Treatment"</h4>
                <ul class="card-list">{treatments}</ul>

                <div class="disease-notes">
                    <p><span class="note-label">"Season: "</span>{disease.season.clone()}</p>
                    <p><span class="note-label">"Spread: "</span>{disease.spread.clone()}</p>
                </div>
            </div>
        </article>
    }
}
