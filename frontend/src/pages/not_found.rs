use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <main class="not-found">
            <h1>{"404"}</h1>
            <p>{"This page could not be found."}</p>
            <Link<Route> to={Route::Home} classes="not-found-home">
                {"Back to LawMaster"}
            </Link<Route>>
            <style>
                {r#"
                .not-found {
                    min-height: 70vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    color: #1a3365;
                    padding-top: 6rem;
                }
                .not-found h1 {
                    font-size: 5rem;
                    margin: 0;
                }
                .not-found-home {
                    margin-top: 1rem;
                    color: #c8a04a;
                    font-weight: 600;
                }
                "#}
            </style>
        </main>
    }
}
