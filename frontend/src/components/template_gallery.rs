use std::rc::Rc;

use log::debug;
use web_sys::{HtmlInputElement, HtmlSelectElement, MouseEvent};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::animated_counter::AnimatedCounter;
use crate::content::catalog::Catalog;
use crate::content::templates::{SortKey, Template, TemplateQuery, ViewMode, CATEGORIES};
use crate::dom::BodyScrollLock;
use crate::reveal::counter::{group_thousands, CounterSpec};
use crate::reveal::trigger::{use_reveal, RevealOptions};
use crate::Route;

const MODAL_FEATURES: [&str; 4] = [
    "Customizable template tailored to your needs",
    "Step-by-step guidance through the process",
    "Legal tips and best practices",
    "Export options (PDF, Word, etc.)",
];

#[derive(Properties, PartialEq)]
pub struct TemplateGalleryProps {
    /// Rendered as its own page rather than a home page section.
    #[prop_or_default]
    pub standalone: bool,
}

#[function_component(TemplateGallery)]
pub fn template_gallery(props: &TemplateGalleryProps) -> Html {
    let catalog = use_context::<Rc<Catalog>>().unwrap_or_default();
    let query = use_state(TemplateQuery::default);
    let view_mode = use_state(ViewMode::default);
    let selected = use_state(|| None::<Template>);
    let header_ref = use_node_ref();
    let header_revealed = use_reveal(
        "template-gallery",
        header_ref.clone(),
        RevealOptions::default(),
    );

    use_effect_with_deps(
        move |open| {
            let lock = open.then(BodyScrollLock::acquire);
            move || drop(lock)
        },
        selected.is_some(),
    );

    let on_search = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(TemplateQuery {
                search: input.value(),
                ..(*query).clone()
            });
        })
    };

    let clear_search = {
        let query = query.clone();
        Callback::from(move |_: MouseEvent| {
            query.set(TemplateQuery {
                search: String::new(),
                ..(*query).clone()
            });
        })
    };

    let on_sort = {
        let query = query.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            query.set(TemplateQuery {
                sort: SortKey::from_value(&select.value()),
                ..(*query).clone()
            });
        })
    };

    let close_modal = {
        let selected = selected.clone();
        Callback::from(move |_: MouseEvent| selected.set(None))
    };

    let found = query.apply(&catalog.templates);
    let header_counters = [
        (CounterSpec::new(catalog.templates.len() as f64).suffix("+"), "Templates"),
        (CounterSpec::new(98.0).suffix("%"), "Success Rate"),
        (CounterSpec::new(50.0).suffix("K+"), "Users"),
    ];

    html! {
        <section class={classes!("free-tools", props.standalone.then(|| "standalone"))} id="resources">
            <div class="container">
                <div class="section-header" ref={header_ref}>
                    <div class="header-content">
                        <h2>{"Create Legal Documents in Minutes"}</h2>
                        <p>{"Free templates to help you with common legal procedures and documentation"}</p>
                    </div>
                    <div class="header-stats">
                        { for header_counters.into_iter().enumerate().map(|(index, (spec, label))| html! {
                            <div class="stat-item">
                                <AnimatedCounter class="stat-number" spec={spec} active={header_revealed} index={index} />
                                <span class="stat-label">{label}</span>
                            </div>
                        }) }
                    </div>
                </div>

                <div class="tools-controls">
                    <div class="search-box">
                        <input
                            type="text"
                            placeholder="Search templates..."
                            value={query.search.clone()}
                            oninput={on_search}
                        />
                        if !query.search.is_empty() {
                            <button class="clear-search" aria-label="Clear search" onclick={clear_search}>{"✕"}</button>
                        }
                    </div>

                    <div class="controls-right">
                        <div class="view-toggle">
                            { for [(ViewMode::Grid, "▦", "Grid view"), (ViewMode::List, "☰", "List view")].into_iter().map(|(mode, icon, label)| {
                                let view_mode = view_mode.clone();
                                html! {
                                    <button
                                        class={classes!("view-btn", (*view_mode == mode).then(|| "active"))}
                                        aria-label={label}
                                        onclick={Callback::from(move |_: MouseEvent| view_mode.set(mode))}
                                    >
                                        {icon}
                                    </button>
                                }
                            }) }
                        </div>

                        <div class="sort-filter">
                            <label for="sort-select">{"Sort by:"}</label>
                            <select id="sort-select" onchange={on_sort}>
                                { for SortKey::ALL.into_iter().map(|key| html! {
                                    <option value={key.value()} selected={query.sort == key}>{key.label()}</option>
                                }) }
                            </select>
                        </div>
                    </div>
                </div>

                <div class="category-filter">
                    { for CATEGORIES.iter().map(|&category| {
                        let active = query.category == category;
                        let query = query.clone();
                        let onclick = Callback::from(move |_: MouseEvent| {
                            query.set(TemplateQuery {
                                category: category.to_string(),
                                ..(*query).clone()
                            });
                        });
                        html! {
                            <button class={classes!("filter-btn", active.then(|| "active"))} onclick={onclick}>
                                {category}
                            </button>
                        }
                    }) }
                </div>

                <div class="results-count">
                    <p>{query.summary(found.len())}</p>
                </div>

                <div class={classes!("tools-container", view_mode.class())}>
                    if found.is_empty() {
                        <div class="no-results">
                            <div class="no-results-icon">{"🔍"}</div>
                            <h3>{"No templates found"}</h3>
                            <p>{"Try a different search term or category"}</p>
                        </div>
                    } else {
                        { for found.iter().map(|template| {
                            let selected = selected.clone();
                            let picked = (*template).clone();
                            let onclick = Callback::from(move |_: MouseEvent| {
                                debug!("Opening template {}", picked.id);
                                selected.set(Some(picked.clone()));
                            });
                            template_card(template, onclick)
                        }) }
                    }
                </div>

                if !props.standalone {
                    <div class="view-all-container">
                        <Link<Route> to={Route::Templates} classes="view-all-btn">
                            {format!("View All Templates ({}+)", catalog.templates.len())}
                        </Link<Route>>
                    </div>
                }
            </div>

            if let Some(template) = &*selected {
                { template_modal(template, close_modal) }
            }
            <style>
                {r#"
                .free-tools {
                    padding: 5rem 1.5rem;
                    background: #fff;
                }
                .free-tools.standalone {
                    padding-top: 8rem;
                }
                .free-tools .container {
                    max-width: 1200px;
                    margin: 0 auto;
                }
                .free-tools .section-header {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: space-between;
                    align-items: flex-end;
                    gap: 2rem;
                    margin-bottom: 2rem;
                }
                .free-tools h2 {
                    color: #1a3365;
                }
                .header-stats {
                    display: flex;
                    gap: 2rem;
                }
                .header-stats .stat-item {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                }
                .header-stats .stat-number {
                    font-size: 1.6rem;
                    font-weight: 700;
                    color: #c8a04a;
                }
                .tools-controls {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: space-between;
                    gap: 1rem;
                    margin-bottom: 1rem;
                }
                .search-box {
                    position: relative;
                    flex: 1;
                    max-width: 420px;
                }
                .search-box input {
                    width: 100%;
                    box-sizing: border-box;
                    padding: 0.7rem 2.2rem 0.7rem 1rem;
                    border: 1px solid #d5dbe8;
                    border-radius: 10px;
                }
                .clear-search {
                    position: absolute;
                    right: 0.6rem;
                    top: 50%;
                    transform: translateY(-50%);
                    border: none;
                    background: none;
                    cursor: pointer;
                }
                .controls-right {
                    display: flex;
                    gap: 1rem;
                    align-items: center;
                }
                .view-btn {
                    border: 1px solid #d5dbe8;
                    background: #fff;
                    padding: 0.4rem 0.6rem;
                    cursor: pointer;
                }
                .view-btn.active {
                    background: #1a3365;
                    color: #fff;
                }
                .category-filter {
                    display: flex;
                    gap: 0.5rem;
                    overflow-x: auto;
                    margin-bottom: 1rem;
                }
                .filter-btn {
                    border: 1px solid #d5dbe8;
                    background: #fff;
                    border-radius: 20px;
                    padding: 0.4rem 1rem;
                    white-space: nowrap;
                    cursor: pointer;
                }
                .filter-btn.active {
                    background: #c8a04a;
                    border-color: #c8a04a;
                    color: #fff;
                }
                .results-count {
                    color: #6b7896;
                }
                .tools-container.grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
                    gap: 1.5rem;
                }
                .tools-container.list {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .tool-card {
                    position: relative;
                    padding: 1.5rem;
                    border-radius: 12px;
                    background: #f5f7fb;
                    cursor: pointer;
                    transition: transform 0.2s ease, box-shadow 0.2s ease;
                }
                .tool-card:hover {
                    transform: translateY(-4px);
                    box-shadow: 0 12px 30px rgba(26, 51, 101, 0.12);
                }
                .new-badge {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    background: #2e9d5b;
                    color: #fff;
                    font-size: 0.7rem;
                    padding: 0.2rem 0.5rem;
                    border-radius: 6px;
                }
                .tool-card .card-header {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .tool-icon {
                    font-size: 2rem;
                }
                .meter-bar {
                    width: 80px;
                    height: 6px;
                    border-radius: 3px;
                    background: #d5dbe8;
                }
                .meter-fill {
                    height: 100%;
                    border-radius: 3px;
                    background: #c8a04a;
                }
                .tool-footer {
                    display: flex;
                    justify-content: space-between;
                    font-size: 0.8rem;
                    color: #6b7896;
                }
                .use-template-btn {
                    margin-top: 1rem;
                    width: 100%;
                    border: none;
                    border-radius: 8px;
                    padding: 0.6rem;
                    background: #1a3365;
                    color: #fff;
                    cursor: pointer;
                }
                .no-results {
                    text-align: center;
                    padding: 3rem;
                    color: #6b7896;
                }
                .view-all-container {
                    text-align: center;
                    margin-top: 2rem;
                }
                .view-all-btn {
                    display: inline-block;
                    padding: 0.8rem 1.6rem;
                    border-radius: 8px;
                    border: 2px solid #1a3365;
                    color: #1a3365;
                    text-decoration: none;
                    font-weight: 600;
                }
                .modal-overlay {
                    position: fixed;
                    inset: 0;
                    z-index: 2000;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: rgba(10, 20, 40, 0.6);
                }
                .modal-content {
                    position: relative;
                    width: min(560px, 92vw);
                    max-height: 90vh;
                    overflow-y: auto;
                    padding: 2rem;
                    border-radius: 16px;
                    background: #fff;
                }
                .modal-close {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    border: none;
                    background: none;
                    font-size: 1.2rem;
                    cursor: pointer;
                }
                .modal-header {
                    display: flex;
                    gap: 1rem;
                    align-items: center;
                }
                .modal-icon {
                    font-size: 2.5rem;
                }
                .modal-stats {
                    display: flex;
                    justify-content: space-between;
                    margin: 1.5rem 0;
                }
                .modal-stat {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                }
                .modal-actions {
                    display: flex;
                    justify-content: flex-end;
                    gap: 0.75rem;
                }
                .btn-primary, .btn-secondary {
                    padding: 0.6rem 1.2rem;
                    border-radius: 8px;
                    cursor: pointer;
                }
                .btn-primary {
                    border: none;
                    background: #1a3365;
                    color: #fff;
                }
                .btn-secondary {
                    border: 1px solid #1a3365;
                    background: #fff;
                    color: #1a3365;
                }
                "#}
            </style>
        </section>
    }
}

fn template_card(template: &Template, onclick: Callback<MouseEvent>) -> Html {
    html! {
        <div class="tool-card" onclick={onclick}>
            if template.is_new {
                <span class="new-badge">{"NEW"}</span>
            }
            <div class="card-header">
                <div class="tool-icon">{&template.icon}</div>
                <div class="tool-meta">
                    <div class="popularity-meter">
                        <div class="meter-bar">
                            <div class="meter-fill" style={format!("width: {}%;", template.popularity)}></div>
                        </div>
                        <span class="popularity-text">{format!("{}%", template.popularity)}</span>
                    </div>
                    <div class="tool-uses">{group_thousands(f64::from(template.uses))}</div>
                </div>
            </div>
            <div class="tool-content">
                <h3>{&template.title}</h3>
                <p>{&template.description}</p>
                <div class="tool-footer">
                    <span class="tool-category">{&template.category}</span>
                    <span class="time-estimate">{&template.time_estimate}</span>
                </div>
            </div>
            <button class="use-template-btn">{"Use Template"}</button>
        </div>
    }
}

fn template_modal(template: &Template, on_close: Callback<MouseEvent>) -> Html {
    html! {
        <div class="modal-overlay" onclick={on_close.clone()}>
            <div class="modal-content" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                <button class="modal-close" aria-label="Close" onclick={on_close}>{"✕"}</button>
                <div class="modal-header">
                    <div class="modal-icon">{&template.icon}</div>
                    <div class="modal-title-section">
                        <h2>{&template.title}</h2>
                        <span class="modal-category">{&template.category}</span>
                    </div>
                </div>
                <div class="modal-body">
                    <p>{&template.description}</p>
                    <div class="modal-stats">
                        <div class="modal-stat">
                            <span class="stat-value">{format!("{}%", template.popularity)}</span>
                            <span class="stat-label">{"Popularity"}</span>
                        </div>
                        <div class="modal-stat">
                            <span class="stat-value">{group_thousands(f64::from(template.uses))}</span>
                            <span class="stat-label">{"Times Used"}</span>
                        </div>
                        <div class="modal-stat">
                            <span class="stat-value">{&template.time_estimate}</span>
                            <span class="stat-label">{"Completion Time"}</span>
                        </div>
                    </div>
                    <div class="modal-features">
                        <h3>{"What You'll Get"}</h3>
                        <ul>
                            { for MODAL_FEATURES.iter().map(|feature| html! { <li>{*feature}</li> }) }
                        </ul>
                    </div>
                </div>
                <div class="modal-actions">
                    <button class="btn-secondary">{"Save for Later"}</button>
                    <button class="btn-primary">{"Use This Template"}</button>
                </div>
            </div>
        </div>
    }
}
