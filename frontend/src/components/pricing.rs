use std::rc::Rc;

use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::catalog::Catalog;
use crate::content::plans::BillingCycle;

#[function_component(Pricing)]
pub fn pricing() -> Html {
    let catalog = use_context::<Rc<Catalog>>().unwrap_or_default();
    let cycle = use_state(BillingCycle::default);
    let hovered = use_state(|| None::<String>);

    let toggle_cycle = {
        let cycle = cycle.clone();
        Callback::from(move |_: Event| cycle.set(cycle.toggled()))
    };

    html! {
        <section id="pricing" class="pricing-section">
            <div class="pricing-container">
                <div class="pricing-header">
                    <h2 class="pricing-title">{"Flexible Subscription Plans"}</h2>
                    <p class="pricing-subtitle">{"Choose the plan that works best for your needs"}</p>

                    <div class="billing-toggle">
                        <span class={classes!((*cycle == BillingCycle::Monthly).then(|| "active"))}>{"Monthly"}</span>
                        <label class="toggle-switch">
                            <input
                                type="checkbox"
                                checked={*cycle == BillingCycle::Yearly}
                                onchange={toggle_cycle}
                            />
                            <span class="slider"></span>
                        </label>
                        <span class={classes!((*cycle == BillingCycle::Yearly).then(|| "active"))}>{"Yearly (Save 15%)"}</span>
                    </div>
                </div>

                <div class="pricing-cards">
                    { for catalog.plans.iter().map(|plan| {
                        let onmouseenter = {
                            let hovered = hovered.clone();
                            let key = plan.key.clone();
                            Callback::from(move |_: MouseEvent| hovered.set(Some(key.clone())))
                        };
                        let onmouseleave = {
                            let hovered = hovered.clone();
                            Callback::from(move |_: MouseEvent| hovered.set(None))
                        };
                        let is_hovered = hovered.as_deref() == Some(plan.key.as_str());
                        html! {
                            <div
                                class={classes!(
                                    "pricing-card",
                                    plan.popular.then(|| "pricing-card-popular"),
                                    is_hovered.then(|| "hovered"),
                                )}
                                onmouseenter={onmouseenter}
                                onmouseleave={onmouseleave}
                            >
                                if plan.popular {
                                    <div class="popular-badge">{"Most Popular"}</div>
                                }
                                <div class="pricing-card-header">
                                    <h3>{&plan.title}</h3>
                                    <p>{&plan.subtitle}</p>
                                </div>
                                <div class="pricing-card-body">
                                    <div class="price">
                                        {cycle.price(plan)}
                                        <span class="period">{cycle.period()}</span>
                                    </div>
                                    <p class="plan-description">{&plan.description}</p>
                                    <ul class="pricing-features">
                                        { for plan.features.iter().map(|feature| html! {
                                            <li><span class="check-icon">{"✓"}</span>{feature}</li>
                                        }) }
                                    </ul>
                                    <button class={classes!(
                                        "pricing-cta",
                                        if plan.popular { "pricing-cta-primary" } else { "pricing-cta-secondary" },
                                    )}>
                                        {"Get Started"}
                                    </button>
                                </div>
                            </div>
                        }
                    }) }
                </div>

                <div class="pricing-footer">
                    <p>
                        {"Looking for daily, yearly, or lifetime plans? "}
                        <a href="#all-plans">{"View all options"}</a>
                    </p>
                </div>
            </div>
            <style>
                {r#"
                .pricing-section {
                    padding: 5rem 1.5rem;
                    background: #f5f7fb;
                }
                .pricing-container {
                    max-width: 1200px;
                    margin: 0 auto;
                }
                .pricing-header {
                    text-align: center;
                }
                .pricing-title {
                    color: #1a3365;
                }
                .billing-toggle {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.75rem;
                    margin: 1.5rem 0 3rem;
                    color: #6b7896;
                }
                .billing-toggle .active {
                    color: #1a3365;
                    font-weight: 600;
                }
                .toggle-switch {
                    position: relative;
                    width: 48px;
                    height: 26px;
                }
                .toggle-switch input {
                    opacity: 0;
                    width: 0;
                    height: 0;
                }
                .slider {
                    position: absolute;
                    inset: 0;
                    border-radius: 26px;
                    background: #d5dbe8;
                    cursor: pointer;
                    transition: background 0.3s ease;
                }
                .slider::before {
                    content: "";
                    position: absolute;
                    left: 3px;
                    top: 3px;
                    width: 20px;
                    height: 20px;
                    border-radius: 50%;
                    background: #fff;
                    transition: transform 0.3s ease;
                }
                .toggle-switch input:checked + .slider {
                    background: #c8a04a;
                }
                .toggle-switch input:checked + .slider::before {
                    transform: translateX(22px);
                }
                .pricing-cards {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                    gap: 2rem;
                }
                .pricing-card {
                    position: relative;
                    padding: 2rem;
                    border-radius: 16px;
                    background: #fff;
                    box-shadow: 0 10px 30px rgba(26, 51, 101, 0.08);
                    transition: transform 0.3s ease;
                }
                .pricing-card.hovered {
                    transform: translateY(-6px);
                }
                .pricing-card-popular {
                    border: 2px solid #c8a04a;
                }
                .popular-badge {
                    position: absolute;
                    top: -0.8rem;
                    left: 50%;
                    transform: translateX(-50%);
                    padding: 0.25rem 0.9rem;
                    border-radius: 12px;
                    background: #c8a04a;
                    color: #fff;
                    font-size: 0.8rem;
                }
                .price {
                    font-size: 2.2rem;
                    font-weight: 700;
                    color: #1a3365;
                }
                .period {
                    font-size: 1rem;
                    color: #6b7896;
                }
                .pricing-features {
                    list-style: none;
                    padding: 0;
                }
                .pricing-features li {
                    margin: 0.4rem 0;
                }
                .check-icon {
                    color: #2e9d5b;
                    margin-right: 0.5rem;
                }
                .pricing-cta {
                    width: 100%;
                    padding: 0.8rem;
                    border-radius: 8px;
                    cursor: pointer;
                    font-weight: 600;
                }
                .pricing-cta-primary {
                    border: none;
                    background: #1a3365;
                    color: #fff;
                }
                .pricing-cta-secondary {
                    border: 2px solid #1a3365;
                    background: #fff;
                    color: #1a3365;
                }
                .pricing-footer {
                    text-align: center;
                    margin-top: 2rem;
                    color: #6b7896;
                }
                "#}
            </style>
        </section>
    }
}
