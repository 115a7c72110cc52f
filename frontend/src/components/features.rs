use web_sys::MouseEvent;
use yew::prelude::*;

use crate::reveal::trigger::{use_reveal, RevealOptions};

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    items: [&'static str; 4],
}

const FEATURES: [Feature; 3] = [
    Feature {
        icon: "📄",
        title: "Legal Templates",
        description: "Comprehensive collection of ready-to-use templates:",
        items: [
            "Petitions, Plaints, Written Statements",
            "Complaints, Counters, Arguments",
            "RTI (Tamil & English)",
            "Govt Applications, Contracts, MoUs",
        ],
    },
    Feature {
        icon: "🔨",
        title: "Auto-Drafting Engine",
        description: "AI-powered assistance for better drafting:",
        items: [
            "Clause-level Suggestions",
            "Risk Scoring",
            "Auto-fill Features",
            "Title Deed Opinion Drafts",
        ],
    },
    Feature {
        icon: "🔎",
        title: "OCR + Deep Search",
        description: "Smart scanning & interpretation:",
        items: [
            "Upload Tamil/English PDF/DOC",
            "Intelligent OCR Scanning",
            "Deep Search with Filters",
            "Legal Document Interpretation",
        ],
    },
];

/// Clicking the open card closes it, any other card takes its place.
fn flip(active: Option<usize>, clicked: usize) -> Option<usize> {
    if active == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[function_component(Features)]
pub fn features() -> Html {
    let section_ref = use_node_ref();
    let visible = use_reveal("features", section_ref.clone(), RevealOptions::at(0.2));
    let active_card = use_state(|| None::<usize>);
    let animate = visible.then(|| "animate");

    html! {
        <section id="features" class="features-section" ref={section_ref}>
            <div class="features-container">
                <h2 class={classes!("features-title", animate)}>{"Platform Features"}</h2>
                <p class={classes!("features-subtitle", animate)}>
                    {"Powerful tools designed for legal professionals and individuals"}
                </p>

                <div class="features-grid">
                    { for FEATURES.iter().enumerate().map(|(index, feature)| {
                        let onclick = {
                            let active_card = active_card.clone();
                            Callback::from(move |_: MouseEvent| active_card.set(flip(*active_card, index)))
                        };
                        html! {
                            <div
                                class={classes!(
                                    "features-card",
                                    (*active_card == Some(index)).then(|| "active"),
                                    animate,
                                )}
                                style={format!("animation-delay: {:.1}s;", index as f64 * 0.1)}
                                onclick={onclick}
                            >
                                <div class="features-card-inner">
                                    <div class="features-card-front">
                                        <div class="features-icon-wrapper">{feature.icon}</div>
                                        <h3 class="features-card-title">{feature.title}</h3>
                                        <p class="features-card-description">{feature.description}</p>
                                        <div class="features-view-details">{"View Details →"}</div>
                                    </div>
                                    <div class="features-card-back">
                                        <div class="back-header">
                                            <div class="features-icon-wrapper small">{feature.icon}</div>
                                            <h3 class="features-card-title">{feature.title}</h3>
                                        </div>
                                        <ul class="features-list">
                                            { for feature.items.iter().map(|item| html! {
                                                <li><span class="check">{"✓"}</span><span>{*item}</span></li>
                                            }) }
                                        </ul>
                                        <button class="features-cta-button">{"Learn More →"}</button>
                                    </div>
                                </div>
                            </div>
                        }
                    }) }
                </div>

                <div class={classes!("features-cta", animate)}>
                    <p>{"Ready to experience these features?"}</p>
                    <button class="features-primary-button">{"Get Started Today →"}</button>
                </div>
            </div>
            <style>
                {r#"
                .features-section {
                    padding: 5rem 1.5rem;
                    background: #f5f7fb;
                }
                .features-container {
                    max-width: 1200px;
                    margin: 0 auto;
                    text-align: center;
                }
                .features-title, .features-subtitle, .features-card, .features-cta {
                    opacity: 0;
                    transform: translateY(20px);
                }
                .features-title.animate, .features-subtitle.animate,
                .features-card.animate, .features-cta.animate {
                    animation: features-rise 0.6s ease forwards;
                }
                @keyframes features-rise {
                    to { opacity: 1; transform: none; }
                }
                .features-title {
                    color: #1a3365;
                }
                .features-subtitle {
                    color: #4a5878;
                }
                .features-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                    gap: 2rem;
                    margin: 3rem 0;
                }
                .features-card {
                    perspective: 1000px;
                    height: 340px;
                    cursor: pointer;
                }
                .features-card-inner {
                    position: relative;
                    width: 100%;
                    height: 100%;
                    transition: transform 0.6s ease;
                    transform-style: preserve-3d;
                }
                .features-card.active .features-card-inner {
                    transform: rotateY(180deg);
                }
                .features-card-front, .features-card-back {
                    position: absolute;
                    inset: 0;
                    padding: 2rem;
                    border-radius: 16px;
                    background: #fff;
                    box-shadow: 0 10px 30px rgba(26, 51, 101, 0.08);
                    backface-visibility: hidden;
                }
                .features-card-back {
                    transform: rotateY(180deg);
                    text-align: left;
                }
                .features-icon-wrapper {
                    font-size: 2.5rem;
                }
                .features-icon-wrapper.small {
                    font-size: 1.5rem;
                }
                .back-header {
                    display: flex;
                    gap: 0.75rem;
                    align-items: center;
                }
                .features-list {
                    list-style: none;
                    padding: 0;
                }
                .features-list li {
                    display: flex;
                    gap: 0.5rem;
                    margin: 0.5rem 0;
                }
                .features-list .check {
                    color: #2e9d5b;
                }
                .features-view-details {
                    color: #c8a04a;
                    font-weight: 600;
                }
                .features-cta-button, .features-primary-button {
                    border: none;
                    border-radius: 8px;
                    padding: 0.7rem 1.4rem;
                    background: #1a3365;
                    color: #fff;
                    cursor: pointer;
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clicking_flips_and_unflips() {
        assert_eq!(flip(None, 1), Some(1));
        assert_eq!(flip(Some(1), 1), None);
        assert_eq!(flip(Some(1), 2), Some(2));
    }
}
