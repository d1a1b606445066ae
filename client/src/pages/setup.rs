//! World setup page: ecosystem picker plus genome entry.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::ApiClient;
use crate::net::types::CreateWorldRequest;
use crate::util::genome::parse_genome;
use crate::util::text::slugify;

/// Setup page: pick an ecosystem, paste a genome, create a world, and
/// navigate to its canvas view. Validation errors render inline under the
/// form rather than in the toast.
#[component]
pub fn SetupPage() -> impl IntoView {
    let navigate = use_navigate();

    // Catalogue of named ecosystem configurations, bundled with the app.
    let ecosystems = LocalResource::new(|| async {
        ApiClient::new().fetch_ecosystems().await.unwrap_or_default()
    });

    let world_name = RwSignal::new("world".to_owned());
    let selected = RwSignal::new(0usize);
    let dna = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let char_count = move || dna.get().chars().count();
    let gene_count = move || parse_genome(&dna.get()).len();

    let submit = move |_| {
        if submitting.get() {
            return;
        }
        let slug = slugify(&world_name.get());
        if slug.is_empty() {
            error.set(Some("World name is required.".to_owned()));
            return;
        }
        let dna_text = dna.get();
        if parse_genome(&dna_text).is_empty() {
            error.set(Some("Enter at least one 8-hex-digit gene.".to_owned()));
            return;
        }
        let Some(catalogue) = ecosystems.get() else {
            error.set(Some("Ecosystem catalogue is still loading.".to_owned()));
            return;
        };
        let Some(ecosystem) = catalogue.get(selected.get()).cloned() else {
            error.set(Some("Pick an ecosystem.".to_owned()));
            return;
        };

        submitting.set(true);
        error.set(None);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let request = CreateWorldRequest::standard(slug, dna_text, &ecosystem);
            match ApiClient::new().create_world(&request).await {
                Ok(resp) => {
                    navigate(&format!("/canvas/{}", resp.id), NavigateOptions::default());
                }
                Err(err) => {
                    error.set(Some(err.to_string()));
                    submitting.set(false);
                }
            }
        });
    };

    view! {
        <div class="setup-page">
            <h1>"Genome Stepper"</h1>
            <p class="setup-page__tagline">"Seed a world, then watch it grow tick by tick."</p>

            <form class="setup-form" on:submit=move |ev| ev.prevent_default()>
                <label class="setup-form__label">
                    "World name"
                    <input
                        class="setup-form__input"
                        type="text"
                        prop:value=move || world_name.get()
                        on:input=move |ev| world_name.set(event_target_value(&ev))
                    />
                </label>

                <label class="setup-form__label">
                    "Ecosystem"
                    <Suspense fallback=move || {
                        view! { <select class="setup-form__select" disabled></select> }
                    }>
                        <select
                            class="setup-form__select"
                            prop:value=move || selected.get().to_string()
                            on:change=move |ev| {
                                if let Ok(idx) = event_target_value(&ev).parse::<usize>() {
                                    selected.set(idx);
                                }
                            }
                        >
                            {move || {
                                ecosystems
                                    .get()
                                    .map(|catalogue| {
                                        catalogue
                                            .iter()
                                            .enumerate()
                                            .map(|(i, eco)| {
                                                view! {
                                                    <option value=i.to_string()>{eco.name.clone()}</option>
                                                }
                                            })
                                            .collect::<Vec<_>>()
                                    })
                            }}
                        </select>
                    </Suspense>
                </label>

                <label class="setup-form__label">
                    "Genome"
                    <textarea
                        class="setup-form__dna"
                        rows="6"
                        placeholder="8-hex-digit genes, separated by spaces or commas"
                        prop:value=move || dna.get()
                        on:input=move |ev| dna.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <p class="setup-form__count">
                    {move || format!("{} characters, {} valid genes", char_count(), gene_count())}
                </p>

                {move || {
                    error
                        .get()
                        .map(|message| view! { <p class="setup-form__error">{message}</p> })
                }}

                <button
                    class="btn btn--primary setup-form__submit"
                    disabled=move || submitting.get()
                    on:click=submit
                >
                    {move || if submitting.get() { "Creating..." } else { "Create world" }}
                </button>
            </form>
        </div>
    }
}
