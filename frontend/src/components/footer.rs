use chrono::Datelike;
use gloo_timers::callback::Timeout;
use log::info;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config::NEWSLETTER_CONFIRM_MS;

const QUICK_LINKS: [(&str, &str); 5] = [
    ("#home", "Home"),
    ("#features", "Features"),
    ("#pricing", "Pricing"),
    ("#resources", "Blog"),
    ("#contact", "Contact"),
];

const LEGAL_CATEGORIES: [&str; 5] = [
    "Criminal Law",
    "Civil Law",
    "Corporate Law",
    "Property Law",
    "Family Law",
];

fn copyright(year: i32) -> String {
    format!("© {} LawMaster. All rights reserved.", year)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let email = use_state(String::new);
    let subscribed = use_state(|| false);
    // Dropping the handle cancels a pending reset
    let reset_timer = use_mut_ref(|| None::<Timeout>);

    let on_input = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_submit = {
        let email = email.clone();
        let subscribed = subscribed.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if email.trim().is_empty() {
                return;
            }
            info!("Newsletter subscription submitted");
            email.set(String::new());
            subscribed.set(true);
            let subscribed = subscribed.clone();
            *reset_timer.borrow_mut() = Some(Timeout::new(NEWSLETTER_CONFIRM_MS, move || {
                subscribed.set(false)
            }));
        })
    };

    html! {
        <footer class="footer" id="contact">
            <div class="footer-container">
                <div class="footer-content">
                    <div class="footer-brand">
                        <h3 class="footer-logo">{"⚖️ LawMaster"}</h3>
                        <p class="footer-description">
                            {"Revolutionizing legal practice through AI-powered tools and comprehensive legal intelligence."}
                        </p>
                    </div>

                    <div class="footer-section">
                        <h4 class="footer-title">{"Quick Links"}</h4>
                        <ul class="footer-links">
                            { for QUICK_LINKS.iter().map(|(href, label)| html! {
                                <li><a href={*href}>{*label}</a></li>
                            }) }
                        </ul>
                    </div>

                    <div class="footer-section">
                        <h4 class="footer-title">{"Legal Categories"}</h4>
                        <ul class="footer-links">
                            { for LEGAL_CATEGORIES.iter().map(|name| html! {
                                <li><a href="#resources">{*name}</a></li>
                            }) }
                        </ul>
                    </div>

                    <div class="footer-section">
                        <h4 class="footer-title">{"Newsletter"}</h4>
                        <p class="newsletter-text">{"Subscribe to get updates on new features and legal insights."}</p>
                        if *subscribed {
                            <div class="newsletter-success">{"✔ Thank you for subscribing!"}</div>
                        } else {
                            <form class="newsletter-form" onsubmit={on_submit}>
                                <input
                                    type="email"
                                    placeholder="Your email address"
                                    value={(*email).clone()}
                                    oninput={on_input}
                                    required=true
                                />
                                <button type="submit">{"Subscribe"}</button>
                            </form>
                        }
                    </div>
                </div>

                <div class="footer-bottom">
                    <p>{copyright(chrono::Local::now().year())}</p>
                    <div class="legal-links">
                        <a href="#">{"Privacy Policy"}</a>
                        <span>{"|"}</span>
                        <a href="#">{"Terms of Service"}</a>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .footer {
                    background: #0f1f3f;
                    color: rgba(255, 255, 255, 0.8);
                    padding: 4rem 1.5rem 1.5rem;
                }
                .footer-container {
                    max-width: 1200px;
                    margin: 0 auto;
                }
                .footer-content {
                    display: grid;
                    grid-template-columns: 2fr 1fr 1fr 2fr;
                    gap: 2rem;
                }
                .footer-logo {
                    color: #fff;
                }
                .footer-title {
                    color: #c8a04a;
                }
                .footer-links {
                    list-style: none;
                    padding: 0;
                }
                .footer-links li {
                    margin: 0.4rem 0;
                }
                .footer-links a, .legal-links a {
                    color: rgba(255, 255, 255, 0.75);
                    text-decoration: none;
                }
                .footer-links a:hover, .legal-links a:hover {
                    color: #fff;
                }
                .newsletter-form {
                    display: flex;
                    gap: 0.5rem;
                }
                .newsletter-form input {
                    flex: 1;
                    padding: 0.6rem 0.8rem;
                    border: none;
                    border-radius: 6px;
                }
                .newsletter-form button {
                    border: none;
                    border-radius: 6px;
                    padding: 0.6rem 1rem;
                    background: #c8a04a;
                    color: #0f1f3f;
                    font-weight: 600;
                    cursor: pointer;
                }
                .newsletter-success {
                    color: #5fd08b;
                }
                .footer-bottom {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: space-between;
                    margin-top: 3rem;
                    padding-top: 1.5rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                    font-size: 0.85rem;
                }
                .legal-links {
                    display: flex;
                    gap: 0.5rem;
                }
                @media (max-width: 900px) {
                    .footer-content {
                        grid-template-columns: 1fr 1fr;
                    }
                }
                "#}
            </style>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_carries_the_year() {
        assert_eq!(copyright(2026), "© 2026 LawMaster. All rights reserved.");
    }
}
