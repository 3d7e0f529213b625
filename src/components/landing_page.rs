use yew::prelude::*;

use super::Header;
use crate::hooks::{use_navigator, Route};

#[function_component(LandingPage)]
pub fn landing_page() -> Html {
    let navigator = use_navigator();
    let go_signup = {
        let navigator = navigator.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            navigator.go.emit(Route::Signup);
        })
    };

    html! {
        <div class="page landing">
            <Header />

            <section class="hero">
                <div class="hero-text">
                    <h1>{"Turn Spreadsheets into Barcode Labels Instantly"}</h1>
                    <p>
                        {"Upload your inventory spreadsheet and get print-ready barcode \
                          labels in seconds. No design skills needed – just your product \
                          data and our lightning-fast generator."}
                    </p>
                    <a href="/signup" class="btn-primary" onclick={go_signup.clone()}>
                        {"Get Started"}
                    </a>
                </div>
            </section>

            <section class="features">
                <h2>{"Everything You Need"}</h2>
                <div class="feature-grid">
                    <div class="feature-card">
                        <div class="feature-icon">{"📊"}</div>
                        <h3>{"Multiple Formats"}</h3>
                        <p>
                            {"Works with CSV and Excel files containing your product data. \
                              Upload thousands of items at once - we'll handle the rest."}
                        </p>
                    </div>
                    <div class="feature-card">
                        <div class="feature-icon">{"⚡"}</div>
                        <h3>{"Instant Processing"}</h3>
                        <p>
                            {"Our optimized engine creates barcode labels 80% faster than \
                              traditional methods. What used to take minutes now takes seconds."}
                        </p>
                    </div>
                    <div class="feature-card">
                        <div class="feature-icon">{"🎨"}</div>
                        <h3>{"Professional Output"}</h3>
                        <p>
                            {"Get perfectly formatted Code 128 barcodes arranged 20 per sheet. \
                              Compatible with standard label paper and any printer."}
                        </p>
                    </div>
                </div>
            </section>

            <section class="how-it-works">
                <h2>{"How It Works"}</h2>
                <ol class="steps">
                    <li>
                        <h3>{"Upload Your File"}</h3>
                        <p>
                            {"Drop in your CSV or Excel file with product codes, descriptions, \
                              and locations. We handle files with thousands of items."}
                        </p>
                    </li>
                    <li>
                        <h3>{"Process Instantly"}</h3>
                        <p>
                            {"Our system creates Code 128 barcodes for each item and arranges \
                              them on standard label sheets automatically."}
                        </p>
                    </li>
                    <li>
                        <h3>{"Download & Print"}</h3>
                        <p>
                            {"Get a ZIP file with all your barcode label sheets, ready to print \
                              on 4x5 label paper."}
                        </p>
                    </li>
                </ol>
            </section>

            <section class="cta">
                <h2>{"Start Creating Barcode Labels in Seconds"}</h2>
                <a href="/signup" class="btn-primary" onclick={go_signup}>
                    {"Get Started Free"}
                </a>
            </section>
        </div>
    }
}
