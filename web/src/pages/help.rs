//! Help page – static FAQ.

use leptos::prelude::*;

const FAQ: &[(&str, &str)] = &[
    (
        "How do I diagnose a plant?",
        "Open the Diagnose page, pick the crop, attach a clear photo of an affected leaf and submit.",
    ),
    (
        "What makes a good photo?",
        "Photograph a single leaf in daylight, filling most of the frame, with the symptoms in focus.",
    ),
    (
        "Where do I find treatment advice?",
        "Every entry in the disease database lists symptoms, treatment, prevention, season and how it spreads.",
    ),
    (
        "Why can a filter show no results?",
        "Every severity is always offered, even when no disease in the database has it. Clear the search or pick another option to see more.",
    ),
    (
        "Is my data stored?",
        "Diagnosis requests live only in this browser tab and are gone when you close it.",
    ),
];

#[component]
pub fn HelpPage() -> impl IntoView {
    view! {
        <div class="help-page">
            <h1>"Help"</h1>
            <dl class="faq">
                {FAQ.iter().map(|(q, a)| view! {
                    <dt class="faq-q">{*q}</dt>
                    <dd class="faq-a">{*a}</dd>
                }).collect_view()}
            </dl>
        </div>
    }
}
