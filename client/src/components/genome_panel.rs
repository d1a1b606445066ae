//! Genome panel: each gene rendered as four colored byte chips.

use leptos::prelude::*;

use crate::state::sim::SimState;
use crate::util::genome::{color_for_byte, gene_bytes};

/// Lists the inspected cell's genes. Each gene is four bytes; a byte's
/// chip color follows the green-to-lime ramp in [`color_for_byte`].
#[component]
pub fn GenomePanel() -> impl IntoView {
    let sim = expect_context::<RwSignal<SimState>>();

    view! {
        <section class="panel genome-panel">
            <h3 class="panel__title">"Genome"</h3>
            {move || {
                let genes = sim.get().inspection.map(|i| i.genes).unwrap_or_default();
                if genes.is_empty() {
                    view! { <p class="panel__empty">"No genes at this cell."</p> }.into_any()
                } else {
                    view! {
                        <ul class="genome-panel__genes">
                            {genes
                                .into_iter()
                                .map(|gene| view! { <GeneRow gene/> })
                                .collect::<Vec<_>>()}
                        </ul>
                    }
                    .into_any()
                }
            }}
        </section>
    }
}

#[component]
fn GeneRow(gene: String) -> impl IntoView {
    let bytes = gene_bytes(&gene).unwrap_or_default();

    view! {
        <li class="genome-panel__gene">
            {bytes
                .iter()
                .map(|byte| {
                    let color = color_for_byte(*byte);
                    view! {
                        <span class="genome-panel__byte" style:background-color=color>
                            {format!("{byte:02X}")}
                        </span>
                    }
                })
                .collect::<Vec<_>>()}
        </li>
    }
}
