//! Diagnosis page – submit a leaf photo for a crop.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::pages::diseases::get_catalog;
use crate::state::{file_name_from_input, use_app, use_diagnosis};

#[component]
pub fn DiagnosisPage() -> impl IntoView {
    let catalog = Resource::new(|| (), |_| get_catalog());

    view! {
        <div class="diagnosis-page">
            <h1>"Diagnose a Plant"</h1>
            <p class="page-desc">
                "Choose the crop, attach a clear photo of the affected leaf and add "
                "anything you noticed in the field."
            </p>

            <Suspense fallback=move || view! { <p class="loading">"Loading crops…"</p> }>
                {move || catalog.get().map(|res| match res {
                    Ok(c) => {
                        let crops = c.crops().into_iter().map(String::from).collect::<Vec<_>>();
                        view! { <DiagnosisForm crops=crops/> }.into_any()
                    }
                    Err(e) => view! {
                        <p class="error">"Error: " {e.to_string()}</p>
                    }.into_any(),
                })}
            </Suspense>
        </div>
    }
}

#[component]
fn DiagnosisForm(crops: Vec<String>) -> impl IntoView {
    let app = use_app();
    let diagnosis = use_diagnosis();
    let navigate = use_navigate();

    let (crop, set_crop) = signal(crops.first().cloned().unwrap_or_default());
    let (image_name, set_image_name) = signal(String::new());
    let (notes, set_notes) = signal(String::new());
    let (error_msg, set_error_msg) = signal::<Option<String>>(None);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let crop = crop.get();
        let image = image_name.get();
        if crop.is_empty() {
            set_error_msg.set(Some("Please choose a crop.".into()));
            return;
        }
        if image.is_empty() {
            set_error_msg.set(Some("Please attach a photo of the affected plant.".into()));
            return;
        }
        set_error_msg.set(None);

        let id = diagnosis.submit(crop.clone(), image, notes.get());
        app.notify(format!("Diagnosis request #{id} submitted for {crop}"));
        navigate("/results", Default::default());
    };

    let crop_options = crops
        .into_iter()
        .map(|c| view! { <option value=c.clone()>{c.clone()}</option> })
        .collect_view();

    view! {
        <form class="diagnosis-form" on:submit=on_submit>
            <label class="form-group">
                <span>"Crop"</span>
                <select
                    class="filter-select"
                    prop:value=move || crop.get()
                    on:change=move |ev| set_crop.set(event_target_value(&ev))
                >
                    {crop_options}
                </select>
            </label>

            <label class="form-group">
                <span>"Leaf photo"</span>
                <input
                    type="file"
                    accept="image/*"
                    on:change=move |ev| {
                        set_image_name.set(file_name_from_input(&event_target_value(&ev)));
                    }
                />
            </label>

            <label class="form-group">
                <span>"Notes"</span>
                <textarea
                    rows="4"
                    placeholder="e.g. spots appeared after a week of rain"
                    prop:value=move || notes.get()
                    on:input=move |ev| set_notes.set(event_target_value(&ev))
                ></textarea>
            </label>

            {move || error_msg.get().map(|msg| view! {
                <div class="form-error">{msg}</div>
            })}

            <button type="submit" class="btn btn-primary">"Submit for Diagnosis"</button>
        </form>
    }
}
