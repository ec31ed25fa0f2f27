use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="container py-5 text-center not-found">
            <h1 class="display-4">{"Page not found"}</h1>
            <p class="lead">{"The page you are looking for has moved or never existed."}</p>
            <Link<Route> to={Route::Home} classes="btn btn-primary">
                {"Back to home"}
            </Link<Route>>
            <style>
                {r#"
                .not-found {
                    margin-top: 6rem;
                }
                "#}
            </style>
        </div>
    }
}
