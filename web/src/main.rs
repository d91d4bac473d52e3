use dioxus::prelude::*;
use ui::RegistrationService;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

#[derive(Clone, Routable, Debug, PartialEq)]
enum Route {
    #[route("/")]
    Register {},
    #[route("/login")]
    Login {},
}

#[component]
fn Register() -> Element {
    let nav = navigator();

    rsx! {
        RegistrationService {
            on_navigate: move |path: String| {
                let target = match path.as_str() {
                    "/login" => Route::Login {},
                    _ => Route::Register {},
                };
                nav.push(target);
            }
        }
    }
}

#[component]
fn Login() -> Element {
    rsx! {
        div {
            class: "login-placeholder",
            h1 { "Login" }
            p { "Use your new credentials to log in." }
        }
    }
}
