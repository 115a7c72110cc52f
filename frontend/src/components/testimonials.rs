use std::rc::Rc;

use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::catalog::Catalog;
use crate::content::testimonials::{in_category, Testimonial, ALL_CATEGORIES, CATEGORIES};

fn stars(testimonial: &Testimonial) -> Html {
    html! {
        <div class="rating" aria-label={format!("{} out of 5", testimonial.rating)}>
            { for testimonial.stars().into_iter().map(|filled| html! {
                <span class={classes!("star", filled.then(|| "filled"))}>{"★"}</span>
            }) }
        </div>
    }
}

fn author(testimonial: &Testimonial) -> Html {
    html! {
        <>
            <div class="testimonial-author">
                <div class="author-info">
                    <h4>{&testimonial.name}</h4>
                    <p>{&testimonial.role}</p>
                </div>
                { stars(testimonial) }
            </div>
            <div class="testimonial-category">{&testimonial.category}</div>
        </>
    }
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let catalog = use_context::<Rc<Catalog>>().unwrap_or_default();
    let category = use_state(|| ALL_CATEGORIES);
    let flipped = use_state(|| None::<u32>);

    html! {
        <section id="testimonials" class="testimonials-container">
            <header class="testimonials-header">
                <h2>{"What Our Users Say"}</h2>
                <div class="categories">
                    { for CATEGORIES.iter().map(|&name| {
                        let onclick = {
                            let category = category.clone();
                            let flipped = flipped.clone();
                            Callback::from(move |_: MouseEvent| {
                                category.set(name);
                                flipped.set(None);
                            })
                        };
                        html! {
                            <button
                                class={classes!("category-btn", (*category == name).then(|| "active"))}
                                onclick={onclick}
                            >
                                {name}
                            </button>
                        }
                    }) }
                </div>
            </header>

            <div class="testimonials-grid">
                { for in_category(&catalog.testimonials, *category).into_iter().map(|testimonial| {
                    let id = testimonial.id;
                    let is_flipped = *flipped == Some(id);
                    let onclick = {
                        let flipped = flipped.clone();
                        Callback::from(move |_: MouseEvent| {
                            flipped.set(if is_flipped { None } else { Some(id) })
                        })
                    };
                    html! {
                        <div
                            class={classes!("testimonial-card", is_flipped.then(|| "flipped"))}
                            onclick={onclick}
                        >
                            <div class="card-inner">
                                <div class="card-front">
                                    <div class="quote-icon">{"\u{201C}"}</div>
                                    <p class="testimonial-text">{&testimonial.content}</p>
                                    { author(testimonial) }
                                </div>
                                <div class="card-back">
                                    <h3>{"Detailed Experience"}</h3>
                                    <p class="testimonial-detailed">{&testimonial.detailed}</p>
                                    { author(testimonial) }
                                    <div class="card-flip-hint">{"↩ Click to return"}</div>
                                </div>
                            </div>
                        </div>
                    }
                }) }
            </div>
            <style>
                {r#"
                .testimonials-container {
                    padding: 5rem 1.5rem;
                    max-width: 1200px;
                    margin: 0 auto;
                }
                .testimonials-header {
                    text-align: center;
                    margin-bottom: 2.5rem;
                }
                .testimonials-header h2 {
                    color: #1a3365;
                }
                .categories {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 0.5rem;
                }
                .category-btn {
                    border: 1px solid #d5dbe8;
                    background: #fff;
                    border-radius: 20px;
                    padding: 0.4rem 1rem;
                    cursor: pointer;
                }
                .category-btn.active {
                    background: #1a3365;
                    border-color: #1a3365;
                    color: #fff;
                }
                .testimonials-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
                    gap: 1.5rem;
                }
                .testimonial-card {
                    perspective: 1000px;
                    height: 320px;
                    cursor: pointer;
                }
                .testimonial-card .card-inner {
                    position: relative;
                    width: 100%;
                    height: 100%;
                    transition: transform 0.6s ease;
                    transform-style: preserve-3d;
                }
                .testimonial-card.flipped .card-inner {
                    transform: rotateY(180deg);
                }
                .card-front, .card-back {
                    position: absolute;
                    inset: 0;
                    padding: 1.5rem;
                    border-radius: 16px;
                    background: #fff;
                    box-shadow: 0 10px 30px rgba(26, 51, 101, 0.08);
                    backface-visibility: hidden;
                    overflow: hidden;
                }
                .card-back {
                    transform: rotateY(180deg);
                    background: #1a3365;
                    color: #fff;
                }
                .quote-icon {
                    font-size: 3rem;
                    line-height: 1;
                    color: #c8a04a;
                }
                .testimonial-author {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .author-info h4 {
                    margin: 0;
                }
                .author-info p {
                    margin: 0;
                    font-size: 0.85rem;
                    opacity: 0.75;
                }
                .star {
                    color: #d5dbe8;
                }
                .star.filled {
                    color: #c8a04a;
                }
                .testimonial-category {
                    margin-top: 0.75rem;
                    font-size: 0.75rem;
                    opacity: 0.7;
                }
                .card-flip-hint {
                    margin-top: 0.5rem;
                    font-size: 0.8rem;
                    opacity: 0.7;
                }
                "#}
            </style>
        </section>
    }
}
