use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::{use_click_away, use_window_scroll};

use crate::config::NAV_SCROLL_THRESHOLD;
use crate::dom::BodyScrollLock;

const LINKS: [(&str, &str); 5] = [
    ("#home", "Home"),
    ("#features", "Features"),
    ("#resources", "Resources"),
    ("#pricing", "Pricing"),
    ("#contact", "Contact"),
];

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let menu_open = use_state(|| false);
    let navbar_ref = use_node_ref();
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = scroll_y > NAV_SCROLL_THRESHOLD;

    {
        let menu_open = menu_open.clone();
        use_click_away(navbar_ref.clone(), move |_: Event| {
            if *menu_open {
                menu_open.set(false);
            }
        });
    }

    // Freeze the page behind the mobile menu
    use_effect_with_deps(
        move |open| {
            let lock = open.then(BodyScrollLock::acquire);
            move || drop(lock)
        },
        *menu_open,
    );

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    html! {
        <nav
            ref={navbar_ref}
            class={classes!(
                "lawmaster-navbar",
                is_scrolled.then(|| "lawmaster-navbar-scrolled"),
                (*menu_open).then(|| "menu-open"),
            )}
            role="navigation"
            aria-label="Main navigation"
        >
            <div class="lawmaster-navbar-container">
                <div class="lawmaster-navbar-logo">
                    <a href="#home" onclick={close_menu.clone()}>
                        <span class="lawmaster-logo-icon">{"⚖️"}</span>
                        <span class="lawmaster-logo-text">{"LawMaster"}</span>
                    </a>
                </div>

                <div class={classes!("lawmaster-navbar-links", (*menu_open).then(|| "active"))}>
                    <ul>
                        { for LINKS.iter().map(|(href, label)| html! {
                            <li><a href={*href} onclick={close_menu.clone()}>{*label}</a></li>
                        }) }
                        <li class="lawmaster-nav-search">
                            <div class="lawmaster-search-box">
                                <input type="text" placeholder="Type here to search" />
                                <button aria-label="Search">{"🔍"}</button>
                            </div>
                        </li>
                        <li>
                            <button class="lawmaster-btn lawmaster-btn-primary" onclick={close_menu.clone()}>
                                {"Get Started"}
                            </button>
                        </li>
                    </ul>
                </div>

                <button
                    class={classes!("lawmaster-navbar-toggle", (*menu_open).then(|| "active"))}
                    onclick={toggle_menu}
                    aria-label="Toggle navigation menu"
                    aria-expanded={menu_open.to_string()}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
            <style>
                {r#"
                .lawmaster-navbar {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 1000;
                    padding: 1.25rem 0;
                    background: transparent;
                    transition: background 0.3s ease, padding 0.3s ease, box-shadow 0.3s ease;
                }
                .lawmaster-navbar-scrolled {
                    background: rgba(255, 255, 255, 0.97);
                    padding: 0.75rem 0;
                    box-shadow: 0 2px 20px rgba(26, 51, 101, 0.1);
                }
                .lawmaster-navbar-container {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .lawmaster-navbar-logo a {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    text-decoration: none;
                    font-weight: 700;
                    font-size: 1.5rem;
                    color: #1a3365;
                }
                .lawmaster-navbar-links ul {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                    list-style: none;
                    margin: 0;
                    padding: 0;
                }
                .lawmaster-navbar-links a {
                    color: #1a3365;
                    text-decoration: none;
                    font-weight: 500;
                }
                .lawmaster-search-box {
                    display: flex;
                    border: 1px solid #d5dbe8;
                    border-radius: 20px;
                    overflow: hidden;
                }
                .lawmaster-search-box input {
                    border: none;
                    padding: 0.4rem 0.8rem;
                    outline: none;
                }
                .lawmaster-search-box button {
                    border: none;
                    background: none;
                    cursor: pointer;
                }
                .lawmaster-btn-primary {
                    background: #1a3365;
                    color: #fff;
                    border: none;
                    border-radius: 6px;
                    padding: 0.6rem 1.2rem;
                    cursor: pointer;
                }
                .lawmaster-navbar-toggle {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .lawmaster-navbar-toggle span {
                    width: 24px;
                    height: 2px;
                    background: #1a3365;
                    transition: transform 0.3s ease;
                }
                @media (max-width: 900px) {
                    .lawmaster-navbar-toggle {
                        display: flex;
                    }
                    .lawmaster-navbar-links {
                        position: fixed;
                        top: 0;
                        right: -100%;
                        width: 75%;
                        height: 100vh;
                        background: #fff;
                        transition: right 0.3s ease;
                        padding-top: 5rem;
                    }
                    .lawmaster-navbar-links.active {
                        right: 0;
                    }
                    .lawmaster-navbar-links ul {
                        flex-direction: column;
                    }
                }
                "#}
            </style>
        </nav>
    }
}
