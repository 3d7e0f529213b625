use yew::prelude::*;

use super::Header;

#[function_component(HelpPage)]
pub fn help_page() -> Html {
    html! {
        <div class="page help">
            <Header />
            <div class="help-content">
                <section>
                    <h2>{"Quick Start"}</h2>
                    <div class="callout callout-info">
                        <p>
                            {"Simply upload a properly formatted CSV file, and the system will \
                              create professional label sheets ready for printing."}
                        </p>
                    </div>
                </section>

                <section>
                    <h2>{"CSV File Requirements"}</h2>
                    <div class="callout callout-warning">
                        <h3>{"⚠️ Critical: Column Order Cannot Be Changed"}</h3>
                        <p>
                            {"The system expects data in this exact sequence. Any changes will \
                              cause upload failures."}
                        </p>
                    </div>
                    <table class="help-table">
                        <thead>
                            <tr>
                                <th>{"Column 1"}</th>
                                <th>{"Column 2"}</th>
                                <th>{"Column 3"}</th>
                                <th>{"Column 4"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            <tr>
                                <td>{"Quantity"}</td>
                                <td>{"Location"}</td>
                                <td>{"Part Number"}</td>
                                <td>{"Unit"}</td>
                            </tr>
                            <tr>
                                <td>{"Numbers only"}</td>
                                <td>{"Warehouse location"}</td>
                                <td>{"Part/product ID"}</td>
                                <td>{"Unit type"}</td>
                            </tr>
                        </tbody>
                    </table>
                    <div class="help-example">
                        <h4>{"Example CSV Data:"}</h4>
                        <pre>
{"4,101-002-01-01,4001-PPHT175,EA\n\
990,101-002-02-04,4025-CT1,EA\n\
67,101-002-03-04,366-P420172,PK\n\
77,101-002-03-07,380-44302R,EA\n\
118,101-002-04-04,6130-151045,EA"}
                        </pre>
                    </div>
                </section>

                <section>
                    <h2>{"File Format Requirements"}</h2>
                    <ul>
                        <li>{"Supported: .csv, .xlsx and .xls files up to 50MB"}</li>
                        <li>{"One header row is fine; it is detected and skipped"}</li>
                        <li>{"Labels print as Code 128 barcodes, 20 per sheet"}</li>
                        <li>{"Use highest quality print settings for reliable scanning"}</li>
                    </ul>
                </section>
            </div>
        </div>
    }
}
