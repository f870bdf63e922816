//! Home page – landing hero and entry points.

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <section class="hero">
                <h1>"Protect your crops with AgriGuard AI"</h1>
                <p class="hero-sub">
                    "Snap a photo of a diseased leaf, get likely causes and treatment advice."
                </p>
                <div class="hero-actions">
                    <a href="/diagnosis" class="btn btn-primary">"Start Diagnosis"</a>
                    <a href="/diseases" class="btn btn-secondary">"Browse Diseases"</a>
                </div>
            </section>

            <section class="feature-grid">
                <FeatureCard
                    icon="📷"
                    title="Photo diagnosis"
                    text="Upload a leaf photo and review the diseases known for that crop."
                />
                <FeatureCard
                    icon="📚"
                    title="Disease database"
                    text="Symptoms, treatment and prevention for common crop diseases."
                />
                <FeatureCard
                    icon="📊"
                    title="Dashboard"
                    text="See what the database covers and what you diagnosed this session."
                />
            </section>
        </div>
    }
}

#[component]
fn FeatureCard(icon: &'static str, title: &'static str, text: &'static str) -> impl IntoView {
    view! {
        <div class="feature-card">
            <div class="feature-icon">{icon}</div>
            <h3>{title}</h3>
            <p>{text}</p>
        </div>
    }
}
