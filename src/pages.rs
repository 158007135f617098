use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::InputEvent;
use yew::prelude::*;

use crate::api::{self, TopPeriod};
use crate::models::{InventoryItem, Product, SaleRecord, TopProduct, UdhaarRecord};
use crate::stats;
use crate::store::{remove_by, replace_by, Liveness, Store};

#[derive(Properties, PartialEq)]
pub struct PageProps {
    pub store: Store,
}

const UNITS: &[&str] = &["KG", "GRAM", "LITRE", "ML", "PIECE", "PACKET"];

const PAYMENT_MODES: &[(&str, &str)] = &[
    ("CASH", "Cash"),
    ("UPI", "UPI"),
    ("CARD", "Card"),
    ("UDHAAR", "Udhaar"),
];

const EXPENSE_CATEGORIES: &[(&str, &[(&str, &str)])] = &[
    (
        "Cost of Goods Sold",
        &[
            ("INVENTORY_PURCHASE", "Inventory Purchase"),
            ("FREIGHT_AND_DELIVERY", "Freight & Delivery"),
            ("SPOILAGE", "Spoilage"),
        ],
    ),
    (
        "Operational Expenses",
        &[
            ("RENT", "Rent"),
            ("UTILITIES", "Utilities"),
            ("INTERNET_AND_PHONE", "Internet & Phone"),
            ("POS_SOFTWARE", "POS Software"),
        ],
    ),
    (
        "Staff Expenses",
        &[
            ("SALARIES", "Salaries"),
            ("OVERTIME", "Overtime"),
            ("EMPLOYEE_BENEFITS", "Employee Benefits"),
            ("TRAINING", "Training"),
            ("UNIFORMS", "Uniforms"),
        ],
    ),
    (
        "Logistics",
        &[
            ("VEHICLE_MAINTENANCE", "Vehicle Maintenance"),
            ("DELIVERY_FEES", "Delivery Fees"),
        ],
    ),
    (
        "Packaging & Supplies",
        &[
            ("PACKAGING_SUPPLIES", "Packaging Supplies"),
            ("CLEANING_SUPPLIES", "Cleaning Supplies"),
            ("OFFICE_SUPPLIES", "Office Supplies"),
        ],
    ),
    (
        "Marketing",
        &[
            ("ADVERTISING", "Advertising"),
            ("PROMOTIONS", "Promotions"),
            ("LOYALTY_PROGRAMS", "Loyalty Programs"),
        ],
    ),
    (
        "Security",
        &[
            ("SECURITY_SYSTEMS", "Security Systems"),
            ("FIRE_SAFETY", "Fire Safety"),
            ("GUARDS", "Security Guards"),
        ],
    ),
    (
        "Technology",
        &[
            ("BILLING_SOFTWARE", "Billing Software"),
            ("INVENTORY_SYSTEM", "Inventory System"),
            ("WEBSITE_HOSTING", "Website Hosting"),
        ],
    ),
    (
        "Professional Services",
        &[
            ("ACCOUNTING_FEES", "Accounting Fees"),
            ("LEGAL_FEES", "Legal Fees"),
            ("LICENSE_RENEWALS", "License Renewals"),
        ],
    ),
    (
        "Financial Charges",
        &[
            ("LOAN_EMI", "Loan EMI"),
            ("BANK_FEES", "Bank Fees"),
            ("CARD_TRANSACTION_FEES", "Card Transaction Fees"),
        ],
    ),
    (
        "Maintenance",
        &[
            ("EQUIPMENT_REPAIRS", "Equipment Repairs"),
            ("STORE_MAINTENANCE", "Store Maintenance"),
            ("PEST_CONTROL", "Pest Control"),
        ],
    ),
    (
        "Other",
        &[
            ("FRANCHISE_FEES", "Franchise Fees"),
            ("CENTRAL_WAREHOUSING", "Central Warehousing"),
        ],
    ),
];

// ---- shared helpers ----------------------------------------------------

fn shell_class(dark: bool) -> &'static str {
    if dark {
        "p-6 min-h-screen bg-gray-900 text-white"
    } else {
        "p-6 min-h-screen bg-gray-200 text-black"
    }
}

fn panel_class(dark: bool) -> &'static str {
    if dark {
        "p-6 rounded-lg shadow-md bg-gray-800"
    } else {
        "p-6 rounded-lg shadow-md bg-white"
    }
}

fn input_class(dark: bool) -> &'static str {
    if dark {
        "p-2 border rounded bg-gray-700 text-white"
    } else {
        "p-2 border rounded bg-white text-black"
    }
}

fn thead_class(dark: bool) -> &'static str {
    if dark {
        "bg-gray-700 text-left"
    } else {
        "bg-gray-100 text-left"
    }
}

fn row_class(dark: bool) -> &'static str {
    if dark {
        "bg-gray-800"
    } else {
        "bg-white"
    }
}

fn rupees(amount: f64) -> String {
    format!("₹{}", amount)
}

fn bind_input(handle: &UseStateHandle<String>) -> Callback<InputEvent> {
    let handle = handle.clone();
    Callback::from(move |e: InputEvent| {
        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
        handle.set(input.value());
    })
}

fn bind_select(handle: &UseStateHandle<String>) -> Callback<Event> {
    let handle = handle.clone();
    Callback::from(move |e: Event| {
        let input: web_sys::HtmlSelectElement = e.target_unchecked_into();
        handle.set(input.value());
    })
}

fn notice(error: &Option<String>, success: &Option<String>) -> Html {
    if let Some(msg) = error {
        html! { <p class="text-sm text-red-500 my-2">{ msg.clone() }</p> }
    } else if let Some(msg) = success {
        html! { <p class="text-sm text-green-500 my-2">{ msg.clone() }</p> }
    } else {
        html! {}
    }
}

pub fn valid_phone(phone: &str) -> bool {
    phone.len() == 10 && phone.chars().all(|c| c.is_ascii_digit())
}

pub fn valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

fn today() -> String {
    let iso = js_sys::Date::new_0().to_iso_string();
    let iso = iso.as_string().unwrap_or_default();
    stats::day_of(&iso).to_string()
}

pub fn total_pages(len: usize, per_page: usize) -> usize {
    if len == 0 || per_page == 0 {
        1
    } else {
        (len + per_page - 1) / per_page
    }
}

pub fn page_slice<T: Clone>(list: &[T], page: usize, per_page: usize) -> Vec<T> {
    list.iter()
        .skip(page.saturating_sub(1) * per_page)
        .take(per_page)
        .cloned()
        .collect()
}

fn pagination(dark: bool, page: usize, pages: usize, on_page: Callback<usize>) -> Html {
    let prev = {
        let on_page = on_page.clone();
        Callback::from(move |_| on_page.emit(page.saturating_sub(1).max(1)))
    };
    let next = {
        let on_page = on_page.clone();
        Callback::from(move |_| on_page.emit((page + 1).min(pages)))
    };
    let button_class = if dark {
        "bg-gray-700 text-white px-4 py-1 rounded disabled:opacity-50"
    } else {
        "bg-gray-500 text-white px-4 py-1 rounded disabled:opacity-50"
    };
    html! {
        <div class="flex justify-center mt-4 gap-2">
            <button class={button_class} disabled={page <= 1} onclick={prev}>{"Prev"}</button>
            <span class="px-4 py-1 font-semibold">{ format!("{} / {}", page, pages) }</span>
            <button class={button_class} disabled={page >= pages} onclick={next}>{"Next"}</button>
        </div>
    }
}

/// Hand the fetched PDF bytes to the browser as a file download.
fn trigger_download(bytes: &[u8], filename: &str) {
    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::new();
    parts.push(&array);
    let blob = match web_sys::Blob::new_with_u8_array_sequence(&parts) {
        Ok(blob) => blob,
        Err(_) => return,
    };
    let url = match web_sys::Url::create_object_url_with_blob(&blob) {
        Ok(url) => url,
        Err(_) => return,
    };
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let Ok(element) = document.create_element("a") {
            let anchor: web_sys::HtmlAnchorElement = element.unchecked_into();
            anchor.set_href(&url);
            anchor.set_download(filename);
            anchor.click();
        }
    }
    let _ = web_sys::Url::revoke_object_url(&url);
}

/// Scale day buckets into polyline coordinates for a fixed viewbox.
pub fn polyline_points(buckets: &[(String, f64)], width: f64, height: f64) -> String {
    if buckets.is_empty() {
        return String::new();
    }
    let max = buckets
        .iter()
        .map(|(_, total)| *total)
        .fold(f64::MIN, f64::max)
        .max(1.0);
    let step = if buckets.len() > 1 {
        width / (buckets.len() - 1) as f64
    } else {
        0.0
    };
    buckets
        .iter()
        .enumerate()
        .map(|(i, (_, total))| {
            let x = i as f64 * step;
            let y = height - (total / max) * height;
            format!("{:.1},{:.1}", x, y)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn sales_trend_chart(buckets: &[(String, f64)]) -> Html {
    if buckets.is_empty() {
        return html! { <p class="text-sm opacity-70">{"No sales data yet."}</p> };
    }
    let points = polyline_points(buckets, 300.0, 110.0);
    html! {
        <div>
            <svg viewBox="0 0 300 120" class="w-full h-48">
                <polyline
                    points={points}
                    fill="none"
                    stroke="rgb(75, 192, 192)"
                    stroke-width="2"
                    transform="translate(0, 5)"
                />
            </svg>
            <div class="flex justify-between text-xs opacity-70">
                { for buckets.iter().map(|(day, _)| html! { <span>{ day.clone() }</span> }) }
            </div>
        </div>
    }
}

// ---- login -------------------------------------------------------------

#[function_component(LoginPage)]
pub fn login_page(props: &PageProps) -> Html {
    let username = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let busy = use_state(|| false);

    let on_submit = {
        let store = props.store.clone();
        let username = username.clone();
        let password = password.clone();
        let error = error.clone();
        let busy = busy.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let username_val = username.trim().to_string();
            let password_val = (*password).clone();
            if username_val.is_empty() || password_val.is_empty() {
                error.set(Some("Username and password are required.".to_string()));
                return;
            }
            error.set(None);
            busy.set(true);

            let store = store.clone();
            let error = error.clone();
            let busy = busy.clone();
            spawn_local(async move {
                match api::login(&username_val, &password_val).await {
                    Ok(identity) => store.login(identity.username),
                    Err(err) => {
                        log::warn!("login failed: {}", err);
                        error.set(Some("Login failed".to_string()));
                    }
                }
                busy.set(false);
            });
        })
    };

    html! {
        <div class="flex justify-center items-center h-screen bg-gray-900">
            <div class="bg-blue-900 p-5 shadow-md rounded-md w-80 flex flex-col items-center text-white">
                <h2 class="text-xl font-bold mb-4">{"Login"}</h2>
                <form class="flex flex-col items-center w-full" onsubmit={on_submit}>
                    <input
                        type="text"
                        placeholder="Username"
                        class="block border p-2 my-2 w-full text-black rounded"
                        value={(*username).clone()}
                        oninput={bind_input(&username)}
                    />
                    <input
                        type="password"
                        placeholder="Password"
                        class="block border p-2 my-2 w-full text-black rounded"
                        value={(*password).clone()}
                        oninput={bind_input(&password)}
                    />
                    { notice(&error, &None) }
                    <button
                        type="submit"
                        class="bg-blue-500 text-white px-4 py-2 rounded mt-2"
                        disabled={*busy}
                    >
                        { if *busy { "Signing in..." } else { "Login" } }
                    </button>
                </form>
            </div>
        </div>
    }
}

// ---- dashboard ---------------------------------------------------------

#[function_component(DashboardPage)]
pub fn dashboard_page(props: &PageProps) -> Html {
    let store = &props.store;
    let dark = *store.dark_mode;

    let live = use_state(Liveness::new);
    {
        let store = store.clone();
        let live = (*live).clone();
        use_effect_with_deps(
            move |_| {
                store.fetch_inventory(&live);
                store.fetch_sales(&live);
                store.fetch_sales_desc(&live);
                store.fetch_expenses(&live);
                store.fetch_unpaid_udhaar(&live);
                move || live.revoke()
            },
            (),
        );
    }

    let period = use_state(|| TopPeriod::All);
    let top_products = use_state(Vec::<TopProduct>::new);
    let top_loading = use_state(|| false);
    {
        let top_products = top_products.clone();
        let top_loading = top_loading.clone();
        use_effect_with_deps(
            move |selected: &TopPeriod| {
                let selected = *selected;
                top_loading.set(true);
                spawn_local(async move {
                    match api::fetch_top_products(selected).await {
                        Ok(list) => top_products.set(list),
                        Err(err) => {
                            log::error!("failed to fetch top products: {}", err);
                            top_products.set(Vec::new());
                        }
                    }
                    top_loading.set(false);
                });
                || ()
            },
            *period,
        );
    }

    let total_sales = stats::total_sales(&store.sales);
    let total_inventory = stats::total_inventory(&store.inventory);
    let pending_udhaar = stats::pending_udhaar(&store.unpaid_udhaar);
    let transactions = stats::recent_transactions(&store.sales_desc, &store.expenses);
    let by_day = stats::sales_by_day(&store.sales);

    let username = (*store.user).clone().unwrap_or_else(|| "User".to_string());

    html! {
        <div class={shell_class(dark)}>
            <h1 class="text-3xl font-bold mb-4">{ format!("Welcome, {}!", username) }</h1>

            <div class="grid lg:grid-cols-2 md:grid-cols-1 gap-6">
                <div class="flex flex-col gap-2">
                    <div class="p-4 rounded-lg shadow-md bg-blue-500 text-white">
                        <h2 class="text-xl font-semibold">{"Total Sales"}</h2>
                        <p class="text-2xl mt-2">{ rupees(total_sales) }</p>
                    </div>
                    <div class="p-4 rounded-lg shadow-md bg-green-500 text-white">
                        <h2 class="text-xl font-semibold">{"Total Inventory"}</h2>
                        <p class="text-2xl mt-2">{ format!("{} Items", total_inventory) }</p>
                    </div>
                    <div class="p-4 rounded-lg shadow-md bg-red-500 text-white">
                        <h2 class="text-xl font-semibold">{"Pending Udhaar"}</h2>
                        <p class="text-2xl mt-2">{ rupees(pending_udhaar) }</p>
                    </div>
                </div>

                <div class={panel_class(dark)}>
                    <div class="flex justify-between items-center mb-4">
                        <h2 class="text-xl font-bold">{"Top Sold Products"}</h2>
                        <div class="space-x-2">
                            { for TopPeriod::ALL.iter().map(|p| {
                                let selected = *p == *period;
                                let class = if selected {
                                    "px-3 py-1 rounded-full font-semibold transition bg-blue-500 text-white"
                                } else if dark {
                                    "px-3 py-1 rounded-full font-semibold transition bg-gray-700 text-gray-300"
                                } else {
                                    "px-3 py-1 rounded-full font-semibold transition bg-gray-200 text-gray-700"
                                };
                                let period = period.clone();
                                let p = *p;
                                html! {
                                    <button class={class} onclick={Callback::from(move |_| period.set(p))}>
                                        { p.label() }
                                    </button>
                                }
                            }) }
                        </div>
                    </div>

                    <table class="w-full border-collapse border border-gray-300">
                        <thead>
                            <tr class={thead_class(dark)}>
                                <th class="border border-gray-300 p-2">{"#"}</th>
                                <th class="border border-gray-300 p-2">{"Product"}</th>
                                <th class="border border-gray-300 p-2">{"Quantity Sold"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            { if *top_loading {
                                html! {
                                    <tr><td colspan="3" class="border border-gray-300 p-2 text-center">{"Loading..."}</td></tr>
                                }
                            } else if top_products.is_empty() {
                                html! {
                                    <tr><td colspan="3" class="border border-gray-300 p-2 text-center">{"No data for this period."}</td></tr>
                                }
                            } else {
                                html! {
                                    <>
                                        { for top_products.iter().enumerate().map(|(index, prod)| html! {
                                            <tr key={prod.product_name.clone()} class={row_class(dark)}>
                                                <td class="border border-gray-300 px-4 py-2">{ index + 1 }</td>
                                                <td class="border border-gray-300 px-4 py-2">{ prod.product_name.clone() }</td>
                                                <td class="border border-gray-300 px-4 py-2">{ prod.quantity_sold }</td>
                                            </tr>
                                        }) }
                                    </>
                                }
                            }}
                        </tbody>
                    </table>
                </div>

                <div class={panel_class(dark)}>
                    <h2 class="text-xl font-bold mb-4">{"Sales Trends"}</h2>
                    { sales_trend_chart(&by_day) }
                </div>

                <div class={panel_class(dark)}>
                    <h2 class="text-xl font-bold mb-4">{"Recent Transactions"}</h2>
                    <table class="w-full border-collapse border border-gray-300">
                        <thead>
                            <tr class={thead_class(dark)}>
                                <th class="border border-gray-300 px-4 py-2">{"#"}</th>
                                <th class="border border-gray-300 px-4 py-2">{"Type"}</th>
                                <th class="border border-gray-300 px-4 py-2">{"Amount"}</th>
                                <th class="border border-gray-300 px-4 py-2">{"Date"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for transactions.iter().enumerate().map(|(index, txn)| html! {
                                <tr key={index} class={row_class(dark)}>
                                    <td class="border border-gray-300 px-4 py-2">{ index + 1 }</td>
                                    <td class="border border-gray-300 px-4 py-2">{ txn.kind.label() }</td>
                                    <td class="border border-gray-300 px-4 py-2">{ rupees(txn.amount) }</td>
                                    <td class="border border-gray-300 px-4 py-2">{ stats::day_of(&txn.date) }</td>
                                </tr>
                            }) }
                        </tbody>
                    </table>
                </div>
            </div>
        </div>
    }
}

// ---- products ----------------------------------------------------------

#[function_component(ProductsPage)]
pub fn products_page(props: &PageProps) -> Html {
    let store = &props.store;
    let dark = *store.dark_mode;

    let live = use_state(Liveness::new);
    {
        let store = store.clone();
        let live = (*live).clone();
        use_effect_with_deps(
            move |_| {
                store.fetch_products(&live);
                move || live.revoke()
            },
            (),
        );
    }

    let show_modal = use_state(|| false);
    let edit_id = use_state(|| None::<i64>);
    let form_name = use_state(String::new);
    let form_price = use_state(String::new);
    let form_category = use_state(String::new);
    let form_qty_per_unit = use_state(String::new);
    let form_unit = use_state(|| "KG".to_string());
    let form_error = use_state(|| None::<String>);
    let list_error = use_state(|| None::<String>);

    let filter_category = use_state(|| "All".to_string());
    let records_per_page = use_state(|| 5usize);
    let current_page = use_state(|| 1usize);

    let reset_form = {
        let show_modal = show_modal.clone();
        let edit_id = edit_id.clone();
        let form_name = form_name.clone();
        let form_price = form_price.clone();
        let form_category = form_category.clone();
        let form_qty_per_unit = form_qty_per_unit.clone();
        let form_unit = form_unit.clone();
        let form_error = form_error.clone();
        Callback::from(move |_: MouseEvent| {
            show_modal.set(false);
            edit_id.set(None);
            form_name.set(String::new());
            form_price.set(String::new());
            form_category.set(String::new());
            form_qty_per_unit.set(String::new());
            form_unit.set("KG".to_string());
            form_error.set(None);
        })
    };

    let open_add = {
        let show_modal = show_modal.clone();
        let edit_id = edit_id.clone();
        let form_name = form_name.clone();
        let form_price = form_price.clone();
        let form_category = form_category.clone();
        let form_qty_per_unit = form_qty_per_unit.clone();
        let form_unit = form_unit.clone();
        Callback::from(move |_| {
            edit_id.set(None);
            form_name.set(String::new());
            form_price.set(String::new());
            form_category.set(String::new());
            form_qty_per_unit.set(String::new());
            form_unit.set("KG".to_string());
            show_modal.set(true);
        })
    };

    let on_save = {
        let store = store.clone();
        let show_modal = show_modal.clone();
        let edit_id = edit_id.clone();
        let form_name = form_name.clone();
        let form_price = form_price.clone();
        let form_category = form_category.clone();
        let form_qty_per_unit = form_qty_per_unit.clone();
        let form_unit = form_unit.clone();
        let form_error = form_error.clone();
        Callback::from(move |_| {
            let name = form_name.trim().to_string();
            let price_raw = form_price.trim().to_string();
            let category = form_category.trim().to_string();
            if name.is_empty() || price_raw.is_empty() || category.is_empty() {
                form_error.set(Some("All fields are required.".to_string()));
                return;
            }
            let price = price_raw.parse::<f64>().unwrap_or(0.0);
            if price <= 0.0 {
                form_error.set(Some("Price must be a positive number.".to_string()));
                return;
            }
            let quantity_per_unit = form_qty_per_unit.trim().parse::<f64>().unwrap_or(1.0);
            let payload = serde_json::json!({
                "name": name,
                "price": price,
                "category": category,
                "quantityPerUnit": quantity_per_unit,
                "unit": (*form_unit).clone(),
            });
            form_error.set(None);

            let products = store.products.clone();
            let show_modal = show_modal.clone();
            let form_error = form_error.clone();
            let editing = *edit_id;
            let edit_id = edit_id.clone();
            spawn_local(async move {
                let outcome = match editing {
                    Some(id) => api::update_product(id, &payload)
                        .await
                        .map(|updated| replace_by(&products, updated, |p| p.product_id)),
                    None => api::add_product(&payload).await.map(|created| {
                        let mut next = (*products).clone();
                        next.push(created);
                        next
                    }),
                };
                match outcome {
                    Ok(next) => {
                        products.set(next);
                        show_modal.set(false);
                        edit_id.set(None);
                    }
                    Err(err) => {
                        log::error!("failed to save product: {}", err);
                        form_error.set(Some("Failed to add or update product.".to_string()));
                    }
                }
            });
        })
    };

    let on_delete = {
        let store = store.clone();
        let list_error = list_error.clone();
        Callback::from(move |product_id: i64| {
            let products = store.products.clone();
            let list_error = list_error.clone();
            spawn_local(async move {
                match api::delete_product(product_id).await {
                    Ok(()) => products.set(remove_by(&products, product_id, |p| p.product_id)),
                    Err(err) => {
                        log::error!("failed to delete product {}: {}", product_id, err);
                        list_error.set(Some("Delete failed.".to_string()));
                    }
                }
            });
        })
    };

    let categories: Vec<String> = {
        let mut seen = Vec::new();
        for product in store.products.iter() {
            if !seen.contains(&product.category) {
                seen.push(product.category.clone());
            }
        }
        seen
    };

    let filtered: Vec<Product> = if *filter_category == "All" {
        (*store.products).clone()
    } else {
        store
            .products
            .iter()
            .filter(|p| p.category == *filter_category)
            .cloned()
            .collect()
    };
    let pages = total_pages(filtered.len(), *records_per_page);
    let page = (*current_page).min(pages);
    let visible = page_slice(&filtered, page, *records_per_page);

    let on_page = {
        let current_page = current_page.clone();
        Callback::from(move |p: usize| current_page.set(p))
    };

    html! {
        <div class={shell_class(dark)}>
            <h1 class="text-3xl font-bold mb-4">{"Product Management"}</h1>

            <button class="mb-4 px-4 py-2 bg-blue-600 text-white rounded" onclick={open_add}>
                {"Add Product"}
            </button>

            <div class={format!("mb-4 flex items-center justify-between p-4 rounded {}", if dark { "bg-gray-700 text-white" } else { "bg-gray-300" })}>
                <div>
                    <label class="mr-2 font-medium">{"Filter by Category:"}</label>
                    <select
                        class={input_class(dark)}
                        value={(*filter_category).clone()}
                        onchange={bind_select(&filter_category)}
                    >
                        <option value="All">{"All"}</option>
                        { for categories.iter().map(|cat| html! { <option value={cat.clone()}>{ cat.clone() }</option> }) }
                    </select>
                </div>
                <div>
                    <label class="mr-2 font-medium">{"Records per page:"}</label>
                    <select
                        class={input_class(dark)}
                        onchange={{
                            let records_per_page = records_per_page.clone();
                            let current_page = current_page.clone();
                            Callback::from(move |e: Event| {
                                let input: web_sys::HtmlSelectElement = e.target_unchecked_into();
                                records_per_page.set(input.value().parse().unwrap_or(5));
                                current_page.set(1);
                            })
                        }}
                    >
                        { for [5usize, 10, 15, 20].iter().map(|n| html! {
                            <option value={n.to_string()} selected={*records_per_page == *n}>{ *n }</option>
                        }) }
                    </select>
                </div>
            </div>

            { notice(&list_error, &None) }

            <table class="w-full border-collapse border border-gray-300">
                <thead>
                    <tr class={thead_class(dark)}>
                        <th class="p-2 border">{"Product"}</th>
                        <th class="p-2 border">{"Price"}</th>
                        <th class="p-2 border">{"Category"}</th>
                        <th class="p-2 border">{"Qty/Unit"}</th>
                        <th class="p-2 border">{"Unit"}</th>
                        <th class="p-2 border">{"Actions"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for visible.iter().map(|item| {
                        let item = item.clone();
                        let on_edit = {
                            let show_modal = show_modal.clone();
                            let edit_id = edit_id.clone();
                            let form_name = form_name.clone();
                            let form_price = form_price.clone();
                            let form_category = form_category.clone();
                            let form_qty_per_unit = form_qty_per_unit.clone();
                            let form_unit = form_unit.clone();
                            let item = item.clone();
                            Callback::from(move |_| {
                                edit_id.set(Some(item.product_id));
                                form_name.set(item.name.clone());
                                form_price.set(item.price.to_string());
                                form_category.set(item.category.clone());
                                form_qty_per_unit.set(item.quantity_per_unit.to_string());
                                form_unit.set(item.unit.clone());
                                show_modal.set(true);
                            })
                        };
                        let on_delete = {
                            let on_delete = on_delete.clone();
                            let id = item.product_id;
                            Callback::from(move |_| on_delete.emit(id))
                        };
                        html! {
                            <tr key={item.product_id} class={row_class(dark)}>
                                <td class="p-2 border">{ item.name.clone() }</td>
                                <td class="p-2 border">{ rupees(item.price) }</td>
                                <td class="p-2 border">{ item.category.clone() }</td>
                                <td class="p-2 border">{ item.quantity_per_unit }</td>
                                <td class="p-2 border">{ item.unit.clone() }</td>
                                <td class="p-2 border">
                                    <button class="bg-yellow-400 px-3 py-1 rounded mr-2 text-black" onclick={on_edit}>{"Edit"}</button>
                                    <button class="bg-red-500 px-3 py-1 text-white rounded" onclick={on_delete}>{"Delete"}</button>
                                </td>
                            </tr>
                        }
                    }) }
                </tbody>
            </table>

            { pagination(dark, page, pages, on_page) }

            { if *show_modal {
                html! {
                    <div class="fixed inset-0 z-50 flex items-center justify-center bg-black bg-opacity-50">
                        <div class={format!("p-6 rounded shadow-md w-full max-w-xl {}", if dark { "bg-gray-800 text-white" } else { "bg-white" })}>
                            <h2 class="text-xl font-semibold mb-4">
                                { if edit_id.is_some() { "Edit Product" } else { "Add New Product" } }
                            </h2>
                            <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                                <input type="text" placeholder="Product Name" class={input_class(dark)}
                                    value={(*form_name).clone()} oninput={bind_input(&form_name)} />
                                <input type="number" placeholder="Price" class={input_class(dark)}
                                    value={(*form_price).clone()} oninput={bind_input(&form_price)} />
                                <input type="text" placeholder="Category" class={input_class(dark)}
                                    value={(*form_category).clone()} oninput={bind_input(&form_category)} />
                                <input type="number" placeholder="Quantity/Unit" class={input_class(dark)}
                                    value={(*form_qty_per_unit).clone()} oninput={bind_input(&form_qty_per_unit)} />
                                <select class={input_class(dark)} value={(*form_unit).clone()} onchange={bind_select(&form_unit)}>
                                    { for UNITS.iter().map(|unit| html! {
                                        <option value={*unit} selected={*form_unit == *unit}>{ *unit }</option>
                                    }) }
                                </select>
                            </div>
                            { notice(&form_error, &None) }
                            <div class="mt-6 flex justify-end gap-3">
                                <button class="px-4 py-2 bg-gray-500 text-white rounded" onclick={reset_form}>{"Cancel"}</button>
                                <button class="px-4 py-2 bg-green-600 text-white rounded" onclick={on_save}>
                                    { if edit_id.is_some() { "Update" } else { "Add" } }
                                </button>
                            </div>
                        </div>
                    </div>
                }
            } else {
                html! {}
            }}
        </div>
    }
}

// ---- sales -------------------------------------------------------------

#[derive(Clone, PartialEq)]
struct DraftItem {
    product_id: String,
    quantity: String,
    unit_price: f64,
}

#[function_component(SalesPage)]
pub fn sales_page(props: &PageProps) -> Html {
    let store = &props.store;
    let dark = *store.dark_mode;

    let live = use_state(Liveness::new);
    {
        let store = store.clone();
        let live = (*live).clone();
        use_effect_with_deps(
            move |_| {
                store.fetch_customers(&live);
                store.fetch_products(&live);
                store.fetch_sales_desc(&live);
                move || live.revoke()
            },
            (),
        );
    }

    let customer_id = use_state(String::new);
    let payment_mode = use_state(|| "CASH".to_string());
    let items = use_state(Vec::<DraftItem>::new);
    let form_error = use_state(|| None::<String>);
    let form_success = use_state(|| None::<String>);
    let saving = use_state(|| false);

    let records_per_page = use_state(|| 5usize);
    let current_page = use_state(|| 1usize);

    let show_report = use_state(|| false);
    let report_from = use_state(String::new);
    let report_to = use_state(today);
    let report_customer = use_state(String::new);
    let report_mode = use_state(String::new);
    let report_notice = use_state(|| None::<String>);

    let on_add_item = {
        let items = items.clone();
        Callback::from(move |_| {
            let mut next = (*items).clone();
            next.push(DraftItem {
                product_id: String::new(),
                quantity: "1".to_string(),
                unit_price: 0.0,
            });
            items.set(next);
        })
    };

    let on_submit = {
        let store = store.clone();
        let customer_id = customer_id.clone();
        let payment_mode = payment_mode.clone();
        let items = items.clone();
        let form_error = form_error.clone();
        let form_success = form_success.clone();
        let saving = saving.clone();
        Callback::from(move |_| {
            let customer = store
                .customers
                .iter()
                .find(|c| c.customer_id.to_string() == customer_id.trim())
                .cloned();
            let customer = match customer {
                Some(customer) => customer,
                None => {
                    form_error.set(Some("Please select a customer.".to_string()));
                    return;
                }
            };
            if items.is_empty() {
                form_error.set(Some("Please add at least one sale item.".to_string()));
                return;
            }

            let mut sale_items = Vec::new();
            for item in items.iter() {
                let product_id = item.product_id.parse::<i64>().unwrap_or(0);
                let quantity = item.quantity.parse::<u32>().unwrap_or(0);
                if product_id == 0 || quantity == 0 {
                    form_error.set(Some("Please fill in all sale item details correctly.".to_string()));
                    return;
                }
                sale_items.push(serde_json::json!({
                    "product": { "productId": product_id },
                    "quantity": quantity,
                    "unitPrice": item.unit_price,
                }));
            }

            let payload = serde_json::json!({
                "customer": { "customerId": customer.customer_id },
                "paymentMode": (*payment_mode).clone(),
                "salesItems": sale_items,
            });

            form_error.set(None);
            form_success.set(None);
            saving.set(true);

            let sales_desc = store.sales_desc.clone();
            let customer_id = customer_id.clone();
            let payment_mode = payment_mode.clone();
            let items = items.clone();
            let form_error = form_error.clone();
            let form_success = form_success.clone();
            let saving = saving.clone();
            spawn_local(async move {
                match api::record_sale(&payload).await {
                    Ok(created) => {
                        let mut next = (*sales_desc).clone();
                        next.push(created);
                        sales_desc.set(next);
                        customer_id.set(String::new());
                        payment_mode.set("CASH".to_string());
                        items.set(Vec::new());
                        form_success.set(Some("Sale added successfully!".to_string()));
                    }
                    Err(err) => {
                        log::error!("failed to record sale: {}", err);
                        form_error.set(Some("Failed to add sale. Please try again.".to_string()));
                    }
                }
                saving.set(false);
            });
        })
    };

    let on_download = {
        let report_from = report_from.clone();
        let report_to = report_to.clone();
        let report_customer = report_customer.clone();
        let report_mode = report_mode.clone();
        let report_notice = report_notice.clone();
        let show_report = show_report.clone();
        Callback::from(move |_| {
            let from = (*report_from).clone();
            let to = (*report_to).clone();
            let customer = (*report_customer).clone();
            let mode = (*report_mode).clone();
            let report_notice = report_notice.clone();
            let show_report = show_report.clone();
            spawn_local(async move {
                match api::download_sales_report(&from, &to, &customer, &mode).await {
                    Ok(bytes) if bytes.is_empty() => {
                        report_notice.set(Some("No sales data found for selected filters.".to_string()));
                    }
                    Ok(bytes) => {
                        trigger_download(&bytes, "sales_report.pdf");
                        report_notice.set(Some("Sales report downloaded successfully.".to_string()));
                        show_report.set(false);
                    }
                    Err(err) => {
                        log::error!("failed to download sales report: {}", err);
                        report_notice.set(Some("Failed to download sales report.".to_string()));
                    }
                }
            });
        })
    };

    let pages = total_pages(store.sales_desc.len(), *records_per_page);
    let page = (*current_page).min(pages);
    let visible: Vec<SaleRecord> = page_slice(&store.sales_desc, page, *records_per_page);

    let on_page = {
        let current_page = current_page.clone();
        Callback::from(move |p: usize| current_page.set(p))
    };

    html! {
        <div class={shell_class(dark)}>
            <h1 class="text-3xl font-bold mb-4">{"Sales Management"}</h1>

            <div class="mb-4 p-4 bg-[#646cff] text-white rounded">
                <h2 class="text-xl font-semibold mb-2">{"Add New Sale"}</h2>

                <select
                    class="p-2 m-1 border-0 rounded bg-white text-black"
                    value={(*customer_id).clone()}
                    onchange={bind_select(&customer_id)}
                >
                    <option value="">{"Select Customer"}</option>
                    { for store.customers.iter().map(|c| html! {
                        <option value={c.customer_id.to_string()}>
                            { format!("ID: {} || {}", c.customer_id, c.fname) }
                        </option>
                    }) }
                </select>

                <select
                    class="p-2 m-1 border-0 rounded bg-white text-black"
                    value={(*payment_mode).clone()}
                    onchange={bind_select(&payment_mode)}
                >
                    { for PAYMENT_MODES.iter().map(|(value, label)| html! {
                        <option value={*value} selected={*payment_mode == *value}>{ *label }</option>
                    }) }
                </select>

                <h3 class="mt-3 font-medium">{"Sale Items"}</h3>
                { for items.iter().enumerate().map(|(index, item)| {
                    let on_product = {
                        let items = items.clone();
                        let products = store.products.clone();
                        Callback::from(move |e: Event| {
                            let input: web_sys::HtmlSelectElement = e.target_unchecked_into();
                            let value = input.value();
                            let mut next = (*items).clone();
                            if let Some(draft) = next.get_mut(index) {
                                if let Some(product) = products.iter().find(|p| p.product_id.to_string() == value) {
                                    draft.product_id = value;
                                    draft.unit_price = product.price;
                                } else {
                                    draft.product_id = String::new();
                                    draft.unit_price = 0.0;
                                }
                            }
                            items.set(next);
                        })
                    };
                    let on_quantity = {
                        let items = items.clone();
                        Callback::from(move |e: InputEvent| {
                            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                            let mut next = (*items).clone();
                            if let Some(draft) = next.get_mut(index) {
                                draft.quantity = input.value();
                            }
                            items.set(next);
                        })
                    };
                    let on_remove = {
                        let items = items.clone();
                        Callback::from(move |_| {
                            let mut next = (*items).clone();
                            next.remove(index);
                            items.set(next);
                        })
                    };
                    html! {
                        <div key={index} class="flex flex-wrap gap-2 my-2 items-center">
                            <select class="p-2 border-0 rounded bg-white text-black" value={item.product_id.clone()} onchange={on_product}>
                                <option value="">{"Select Product"}</option>
                                { for store.products.iter().map(|p| html! {
                                    <option value={p.product_id.to_string()} selected={item.product_id == p.product_id.to_string()}>
                                        { format!("{} {} {}", p.name, p.quantity_per_unit, p.unit) }
                                    </option>
                                }) }
                            </select>
                            <input
                                type="number"
                                min="1"
                                class="p-2 border-0 rounded bg-white text-black w-24"
                                value={item.quantity.clone()}
                                oninput={on_quantity}
                            />
                            <span>{ rupees(item.unit_price) }</span>
                            <button class="bg-red-500 text-white px-3 py-1 rounded" onclick={on_remove}>{"Remove"}</button>
                        </div>
                    }
                }) }

                <div class="mt-2 space-x-2">
                    <button class="bg-white text-[#646cff] px-4 py-2 rounded font-semibold" onclick={on_add_item}>
                        {"Add Item"}
                    </button>
                    <button class="bg-green-500 text-white px-4 py-2 rounded font-semibold" onclick={on_submit} disabled={*saving}>
                        { if *saving { "Saving..." } else { "Record Sale" } }
                    </button>
                    <button class="bg-white text-[#646cff] px-4 py-2 rounded font-semibold" onclick={{
                        let show_report = show_report.clone();
                        Callback::from(move |_| show_report.set(true))
                    }}>
                        {"Download Report"}
                    </button>
                </div>
                { notice(&form_error, &form_success) }
            </div>

            <table class="w-full border-collapse border border-gray-300">
                <thead>
                    <tr class={thead_class(dark)}>
                        <th class="border border-gray-300 px-4 py-2">{"Customer"}</th>
                        <th class="border border-gray-300 px-4 py-2">{"Date"}</th>
                        <th class="border border-gray-300 px-4 py-2">{"Items"}</th>
                        <th class="border border-gray-300 px-4 py-2">{"Total"}</th>
                        <th class="border border-gray-300 px-4 py-2">{"Payment"}</th>
                        <th class="border border-gray-300 px-4 py-2">{"Udhaar Status"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for visible.iter().map(|sale| html! {
                        <tr key={sale.sale_id} class={row_class(dark)}>
                            <td class="border border-gray-300 px-4 py-2">{ sale.customer_name.clone() }</td>
                            <td class="border border-gray-300 px-4 py-2">{ stats::day_of(&sale.sale_date) }</td>
                            <td class="border border-gray-300 px-4 py-2">
                                { for sale.sales_items.iter().map(|item| html! {
                                    <div>
                                        { format!("{} (x{}) - {}", item.product_name, item.quantity, rupees(item.unit_price * item.quantity as f64)) }
                                    </div>
                                }) }
                            </td>
                            <td class="border border-gray-300 px-4 py-2">{ rupees(sale.total_amount) }</td>
                            <td class="border border-gray-300 px-4 py-2">{ sale.payment_mode.clone() }</td>
                            <td class="border border-gray-300 px-4 py-2">
                                { if sale.payment_mode == "UDHAAR" {
                                    let status = sale.udhaar.as_ref().map(|u| u.status.label()).unwrap_or("PENDING");
                                    let class = if status == "OVERDUE" { "text-red-500" } else { "text-yellow-400" };
                                    html! { <span class={class}>{ status }</span> }
                                } else {
                                    html! { {"N/A"} }
                                }}
                            </td>
                        </tr>
                    }) }
                </tbody>
            </table>

            { pagination(dark, page, pages, on_page) }

            { if *show_report {
                html! {
                    <div class="fixed inset-0 z-50 flex items-center justify-center bg-black bg-opacity-50">
                        <div class={format!("p-6 rounded shadow-md w-full max-w-md {}", if dark { "bg-gray-800 text-white" } else { "bg-white" })}>
                            <h2 class="text-xl font-semibold mb-4">{"Sales Report"}</h2>
                            <div class="grid grid-cols-1 gap-3">
                                <label>{"From"}</label>
                                <input type="date" class={input_class(dark)} value={(*report_from).clone()} oninput={bind_input(&report_from)} />
                                <label>{"To"}</label>
                                <input type="date" class={input_class(dark)} value={(*report_to).clone()} oninput={bind_input(&report_to)} />
                                <label>{"Customer"}</label>
                                <select class={input_class(dark)} value={(*report_customer).clone()} onchange={bind_select(&report_customer)}>
                                    <option value="">{"All Customers"}</option>
                                    { for store.customers.iter().map(|c| html! {
                                        <option value={c.customer_id.to_string()}>{ c.fname.clone() }</option>
                                    }) }
                                </select>
                                <label>{"Payment Mode"}</label>
                                <select class={input_class(dark)} value={(*report_mode).clone()} onchange={bind_select(&report_mode)}>
                                    <option value="">{"All Modes"}</option>
                                    { for PAYMENT_MODES.iter().map(|(value, label)| html! {
                                        <option value={*value}>{ *label }</option>
                                    }) }
                                </select>
                            </div>
                            { notice(&report_notice, &None) }
                            <div class="mt-6 flex justify-end gap-3">
                                <button class="px-4 py-2 bg-gray-500 text-white rounded" onclick={{
                                    let show_report = show_report.clone();
                                    Callback::from(move |_| show_report.set(false))
                                }}>{"Close"}</button>
                                <button class="px-4 py-2 bg-blue-600 text-white rounded" onclick={on_download}>{"Download PDF"}</button>
                            </div>
                        </div>
                    </div>
                }
            } else {
                html! {}
            }}
        </div>
    }
}

// ---- inventory ---------------------------------------------------------

#[function_component(InventoryPage)]
pub fn inventory_page(props: &PageProps) -> Html {
    let store = &props.store;
    let dark = *store.dark_mode;

    let live = use_state(Liveness::new);
    {
        let store = store.clone();
        let live = (*live).clone();
        use_effect_with_deps(
            move |_| {
                store.fetch_inventory(&live);
                store.fetch_products(&live);
                move || live.revoke()
            },
            (),
        );
    }

    let new_product_id = use_state(String::new);
    let new_quantity = use_state(String::new);
    let new_threshold = use_state(String::new);
    let form_error = use_state(|| None::<String>);
    let form_success = use_state(|| None::<String>);

    let edit_item = use_state(|| None::<InventoryItem>);
    let edit_quantity = use_state(String::new);
    let edit_threshold = use_state(String::new);
    let delete_confirm_id = use_state(|| None::<i64>);
    let current_page = use_state(|| 1usize);

    let on_add = {
        let store = store.clone();
        let new_product_id = new_product_id.clone();
        let new_quantity = new_quantity.clone();
        let new_threshold = new_threshold.clone();
        let form_error = form_error.clone();
        let form_success = form_success.clone();
        Callback::from(move |_| {
            let product_id = new_product_id.trim().parse::<i64>().unwrap_or(0);
            let quantity = (*new_quantity).clone();
            if product_id == 0 || quantity.trim().is_empty() {
                form_error.set(Some("Select a product and enter a stock quantity.".to_string()));
                return;
            }
            form_error.set(None);
            form_success.set(None);

            let inventory = store.inventory.clone();
            let threshold = (*new_threshold).clone();
            let new_product_id = new_product_id.clone();
            let new_quantity = new_quantity.clone();
            let new_threshold = new_threshold.clone();
            let form_error = form_error.clone();
            let form_success = form_success.clone();
            spawn_local(async move {
                match api::upsert_inventory(product_id, quantity.trim(), threshold.trim()).await {
                    Ok(created) => {
                        let mut next = (*inventory).clone();
                        next.push(created);
                        inventory.set(next);
                        new_product_id.set(String::new());
                        new_quantity.set(String::new());
                        new_threshold.set(String::new());
                        form_success.set(Some("Inventory item added!".to_string()));
                    }
                    Err(err) => {
                        log::error!("failed to add inventory: {}", err);
                        form_error.set(Some("Error adding inventory.".to_string()));
                    }
                }
            });
        })
    };

    let on_update = {
        let store = store.clone();
        let edit_item = edit_item.clone();
        let edit_quantity = edit_quantity.clone();
        let edit_threshold = edit_threshold.clone();
        let form_error = form_error.clone();
        let form_success = form_success.clone();
        Callback::from(move |_| {
            let editing = match &*edit_item {
                Some(item) => item.clone(),
                None => return,
            };
            let product_id = match &editing.product {
                Some(product) => product.product_id,
                None => {
                    form_error.set(Some("This row has no product to update.".to_string()));
                    return;
                }
            };
            let inventory = store.inventory.clone();
            let quantity = (*edit_quantity).clone();
            let threshold = (*edit_threshold).clone();
            let edit_item = edit_item.clone();
            let form_error = form_error.clone();
            let form_success = form_success.clone();
            spawn_local(async move {
                match api::upsert_inventory(product_id, quantity.trim(), threshold.trim()).await {
                    Ok(updated) => {
                        inventory.set(replace_by(&inventory, updated, |i| i.inventory_id));
                        edit_item.set(None);
                        form_success.set(Some("Inventory updated successfully!".to_string()));
                    }
                    Err(err) => {
                        log::error!("failed to update inventory: {}", err);
                        form_error.set(Some("Failed to update inventory.".to_string()));
                    }
                }
            });
        })
    };

    let on_delete = {
        let store = store.clone();
        let delete_confirm_id = delete_confirm_id.clone();
        let form_error = form_error.clone();
        Callback::from(move |inventory_id: i64| {
            let inventory = store.inventory.clone();
            let delete_confirm_id = delete_confirm_id.clone();
            let form_error = form_error.clone();
            spawn_local(async move {
                match api::delete_inventory(inventory_id).await {
                    Ok(()) => {
                        inventory.set(remove_by(&inventory, inventory_id, |i| i.inventory_id));
                        delete_confirm_id.set(None);
                    }
                    Err(err) => {
                        log::error!("failed to delete inventory {}: {}", inventory_id, err);
                        form_error.set(Some("Delete failed.".to_string()));
                    }
                }
            });
        })
    };

    let per_page = 5usize;
    let pages = total_pages(store.inventory.len(), per_page);
    let page = (*current_page).min(pages);
    let visible: Vec<InventoryItem> = page_slice(&store.inventory, page, per_page);

    let on_page = {
        let current_page = current_page.clone();
        Callback::from(move |p: usize| current_page.set(p))
    };

    html! {
        <div class={shell_class(dark)}>
            <h1 class="text-3xl font-bold mb-4">{"Inventory Management"}</h1>

            <div class={format!("mb-6 p-4 rounded {}", if dark { "bg-blue-800" } else { "bg-blue-100" })}>
                <h2 class="text-xl font-semibold mb-2">{"Add New Inventory"}</h2>
                <div class="flex flex-wrap gap-2">
                    <select class={input_class(dark)} value={(*new_product_id).clone()} onchange={bind_select(&new_product_id)}>
                        <option value="">{"Select Product"}</option>
                        { for store.products.iter().map(|product| html! {
                            <option value={product.product_id.to_string()}>
                                { format!("{} {} {}", product.name, product.quantity_per_unit, product.unit) }
                            </option>
                        }) }
                    </select>
                    <input type="number" placeholder="Stock Quantity" class={input_class(dark)}
                        value={(*new_quantity).clone()} oninput={bind_input(&new_quantity)} />
                    <input type="number" placeholder="Stock Threshold" class={input_class(dark)}
                        value={(*new_threshold).clone()} oninput={bind_input(&new_threshold)} />
                    <button class="bg-green-500 text-white px-4 py-2 rounded" onclick={on_add}>{"Add"}</button>
                </div>
                { notice(&form_error, &form_success) }
            </div>

            <table class="w-full border-collapse border border-gray-300">
                <thead>
                    <tr class={thead_class(dark)}>
                        <th class="border border-gray-300 px-4 py-2">{"Product"}</th>
                        <th class="border border-gray-300 px-4 py-2">{"Quantity"}</th>
                        <th class="border border-gray-300 px-4 py-2">{"Minimum Stock Threshold"}</th>
                        <th class="border border-gray-300 px-4 py-2">{"Actions"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for visible.iter().map(|item| {
                        let item = item.clone();
                        let product_label = item
                            .product
                            .as_ref()
                            .map(|p| format!("{}_{}{}", p.name, p.quantity_per_unit, p.unit))
                            .unwrap_or_else(|| "N/A".to_string());
                        let low_stock = item.stock_quantity < item.min_stock_threshold;
                        let quantity_class = if low_stock {
                            "border border-gray-300 px-4 py-2 text-red-500 font-semibold"
                        } else {
                            "border border-gray-300 px-4 py-2"
                        };
                        let on_edit = {
                            let edit_item = edit_item.clone();
                            let edit_quantity = edit_quantity.clone();
                            let edit_threshold = edit_threshold.clone();
                            let item = item.clone();
                            Callback::from(move |_| {
                                edit_quantity.set(item.stock_quantity.to_string());
                                edit_threshold.set(item.min_stock_threshold.to_string());
                                edit_item.set(Some(item.clone()));
                            })
                        };
                        let confirming = *delete_confirm_id == Some(item.inventory_id);
                        let on_confirm_delete = {
                            let delete_confirm_id = delete_confirm_id.clone();
                            let id = item.inventory_id;
                            Callback::from(move |_| delete_confirm_id.set(Some(id)))
                        };
                        let on_delete = {
                            let on_delete = on_delete.clone();
                            let id = item.inventory_id;
                            Callback::from(move |_| on_delete.emit(id))
                        };
                        let on_cancel_delete = {
                            let delete_confirm_id = delete_confirm_id.clone();
                            Callback::from(move |_| delete_confirm_id.set(None))
                        };
                        html! {
                            <tr key={item.inventory_id} class={row_class(dark)}>
                                <td class="border border-gray-300 px-4 py-2">{ product_label }</td>
                                <td class={quantity_class}>{ item.stock_quantity }</td>
                                <td class="border border-gray-300 px-4 py-2">{ item.min_stock_threshold }</td>
                                <td class="border border-gray-300 px-4 py-2 space-x-2">
                                    <button class="bg-yellow-500 text-white px-3 py-1 rounded" onclick={on_edit}>{"Edit"}</button>
                                    { if confirming {
                                        html! {
                                            <>
                                                <button class="bg-red-600 text-white px-3 py-1 rounded" onclick={on_delete}>{"Confirm"}</button>
                                                <button class="bg-gray-500 text-white px-3 py-1 rounded" onclick={on_cancel_delete}>{"Cancel"}</button>
                                            </>
                                        }
                                    } else {
                                        html! {
                                            <button class="bg-red-500 text-white px-3 py-1 rounded" onclick={on_confirm_delete}>{"Delete"}</button>
                                        }
                                    }}
                                </td>
                            </tr>
                        }
                    }) }
                </tbody>
            </table>

            { pagination(dark, page, pages, on_page) }

            { if let Some(editing) = &*edit_item {
                let product_label = editing
                    .product
                    .as_ref()
                    .map(|p| p.name.clone())
                    .unwrap_or_else(|| "N/A".to_string());
                html! {
                    <div class="fixed inset-0 z-50 flex items-center justify-center bg-black bg-opacity-50">
                        <div class={format!("p-6 rounded shadow-md w-full max-w-md {}", if dark { "bg-gray-800 text-white" } else { "bg-white" })}>
                            <h2 class="text-xl font-semibold mb-4">{ format!("Edit Inventory: {}", product_label) }</h2>
                            <div class="grid grid-cols-1 gap-3">
                                <label>{"Stock Quantity"}</label>
                                <input type="number" class={input_class(dark)}
                                    value={(*edit_quantity).clone()} oninput={bind_input(&edit_quantity)} />
                                <label>{"Minimum Stock Threshold"}</label>
                                <input type="number" class={input_class(dark)}
                                    value={(*edit_threshold).clone()} oninput={bind_input(&edit_threshold)} />
                            </div>
                            <div class="mt-6 flex justify-end gap-3">
                                <button class="px-4 py-2 bg-gray-500 text-white rounded" onclick={{
                                    let edit_item = edit_item.clone();
                                    Callback::from(move |_| edit_item.set(None))
                                }}>{"Cancel"}</button>
                                <button class="px-4 py-2 bg-green-600 text-white rounded" onclick={on_update}>{"Update"}</button>
                            </div>
                        </div>
                    </div>
                }
            } else {
                html! {}
            }}
        </div>
    }
}

// ---- customers ---------------------------------------------------------

#[function_component(CustomersPage)]
pub fn customers_page(props: &PageProps) -> Html {
    let store = &props.store;
    let dark = *store.dark_mode;

    let live = use_state(Liveness::new);
    {
        let store = store.clone();
        let live = (*live).clone();
        use_effect_with_deps(
            move |_| {
                store.fetch_customers(&live);
                move || live.revoke()
            },
            (),
        );
    }

    let fname = use_state(String::new);
    let lname = use_state(String::new);
    let phone = use_state(String::new);
    let email = use_state(String::new);
    let form_error = use_state(|| None::<String>);
    let form_success = use_state(|| None::<String>);
    let submitting = use_state(|| false);

    let on_submit = {
        let store = store.clone();
        let fname = fname.clone();
        let lname = lname.clone();
        let phone = phone.clone();
        let email = email.clone();
        let form_error = form_error.clone();
        let form_success = form_success.clone();
        let submitting = submitting.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let fname_val = fname.trim().to_string();
            let lname_val = lname.trim().to_string();
            let phone_val = phone.trim().to_string();
            let email_val = email.trim().to_string();

            if fname_val.is_empty() || lname_val.is_empty() || phone_val.is_empty() || email_val.is_empty() {
                form_error.set(Some("Please fill in all fields.".to_string()));
                return;
            }
            if !valid_phone(&phone_val) {
                form_error.set(Some("Phone must be 10 digits.".to_string()));
                return;
            }
            if !valid_email(&email_val) {
                form_error.set(Some("Invalid email format.".to_string()));
                return;
            }

            form_error.set(None);
            form_success.set(None);
            submitting.set(true);

            let payload = serde_json::json!({
                "fname": fname_val,
                "lname": lname_val,
                "phone": phone_val,
                "email": email_val,
            });
            let customers = store.customers.clone();
            let fname = fname.clone();
            let lname = lname.clone();
            let phone = phone.clone();
            let email = email.clone();
            let form_error = form_error.clone();
            let form_success = form_success.clone();
            let submitting = submitting.clone();
            spawn_local(async move {
                match api::add_customer(&payload).await {
                    Ok(created) => {
                        let mut next = (*customers).clone();
                        next.push(created);
                        customers.set(next);
                        fname.set(String::new());
                        lname.set(String::new());
                        phone.set(String::new());
                        email.set(String::new());
                        form_success.set(Some("Customer added successfully!".to_string()));
                    }
                    Err(err) => {
                        log::error!("failed to add customer: {}", err);
                        form_error.set(Some("Failed to add customer.".to_string()));
                    }
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <div class={shell_class(dark)}>
            <h2 class="text-2xl font-bold mb-4">{"Customer List"}</h2>

            <div class={format!("p-4 rounded-lg shadow mb-6 {}", if dark { "bg-gray-800" } else { "bg-white" })}>
                <h3 class="text-xl font-semibold mb-3">{"Add New Customer"}</h3>
                <form class="grid grid-cols-1 md:grid-cols-2 gap-4" onsubmit={on_submit}>
                    <input type="text" placeholder="First Name" class={input_class(dark)}
                        value={(*fname).clone()} oninput={bind_input(&fname)} />
                    <input type="text" placeholder="Last Name" class={input_class(dark)}
                        value={(*lname).clone()} oninput={bind_input(&lname)} />
                    <input type="text" placeholder="Phone (10 digits)" class={input_class(dark)}
                        value={(*phone).clone()} oninput={bind_input(&phone)} />
                    <input type="email" placeholder="Email" class={input_class(dark)}
                        value={(*email).clone()} oninput={bind_input(&email)} />
                    <button
                        type="submit"
                        class="md:col-span-2 p-2 bg-blue-600 text-white rounded hover:bg-blue-700 disabled:opacity-50"
                        disabled={*submitting}
                    >
                        { if *submitting { "Adding..." } else { "Add Customer" } }
                    </button>
                </form>
                { notice(&form_error, &form_success) }
            </div>

            <table class="w-full border-collapse border border-gray-300">
                <thead>
                    <tr class={thead_class(dark)}>
                        <th class="border border-gray-300 px-4 py-2">{"ID"}</th>
                        <th class="border border-gray-300 px-4 py-2">{"Name"}</th>
                        <th class="border border-gray-300 px-4 py-2">{"Phone"}</th>
                        <th class="border border-gray-300 px-4 py-2">{"Email"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for store.customers.iter().map(|customer| html! {
                        <tr key={customer.customer_id} class={row_class(dark)}>
                            <td class="border border-gray-300 px-4 py-2">{ customer.customer_id }</td>
                            <td class="border border-gray-300 px-4 py-2">{ format!("{} {}", customer.fname, customer.lname) }</td>
                            <td class="border border-gray-300 px-4 py-2">{ customer.phone.clone() }</td>
                            <td class="border border-gray-300 px-4 py-2">{ customer.email.clone() }</td>
                        </tr>
                    }) }
                </tbody>
            </table>
        </div>
    }
}

// ---- suppliers ---------------------------------------------------------

#[function_component(SuppliersPage)]
pub fn suppliers_page(props: &PageProps) -> Html {
    let store = &props.store;
    let dark = *store.dark_mode;

    let live = use_state(Liveness::new);
    {
        let store = store.clone();
        let live = (*live).clone();
        use_effect_with_deps(
            move |_| {
                store.fetch_suppliers(&live);
                move || live.revoke()
            },
            (),
        );
    }

    let is_open = use_state(|| false);
    let name = use_state(String::new);
    let contact = use_state(String::new);
    let email = use_state(String::new);
    let address = use_state(String::new);
    let form_error = use_state(|| None::<String>);

    let on_submit = {
        let store = store.clone();
        let name = name.clone();
        let contact = contact.clone();
        let email = email.clone();
        let address = address.clone();
        let form_error = form_error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let name_val = name.trim().to_string();
            let contact_val = contact.trim().to_string();
            let address_val = address.trim().to_string();
            if name_val.is_empty() || contact_val.is_empty() || address_val.is_empty() {
                form_error.set(Some("Name, contact and address are required.".to_string()));
                return;
            }
            form_error.set(None);

            let payload = serde_json::json!({
                "name": name_val,
                "contact": contact_val,
                "email": (*email).clone(),
                "address": address_val,
            });
            let suppliers = store.suppliers.clone();
            let name = name.clone();
            let contact = contact.clone();
            let email = email.clone();
            let address = address.clone();
            let form_error = form_error.clone();
            spawn_local(async move {
                match api::add_supplier(&payload).await {
                    Ok(created) => {
                        let mut next = (*suppliers).clone();
                        next.push(created);
                        suppliers.set(next);
                        name.set(String::new());
                        contact.set(String::new());
                        email.set(String::new());
                        address.set(String::new());
                    }
                    Err(err) => {
                        log::error!("failed to add supplier: {}", err);
                        form_error.set(Some("Error adding supplier.".to_string()));
                    }
                }
            });
        })
    };

    html! {
        <div class={shell_class(dark)}>
            <h2 class="text-2xl font-bold mb-4">{"Suppliers"}</h2>

            <button class="mb-4 px-4 py-2 bg-blue-600 text-white rounded" onclick={{
                let is_open = is_open.clone();
                Callback::from(move |_| is_open.set(!*is_open))
            }}>
                { if *is_open { "Hide Form" } else { "Add Supplier" } }
            </button>

            { if *is_open {
                html! {
                    <form class={format!("p-4 rounded-lg shadow mb-6 grid grid-cols-1 md:grid-cols-2 gap-4 {}", if dark { "bg-gray-800" } else { "bg-white" })} onsubmit={on_submit}>
                        <input type="text" placeholder="Name" class={input_class(dark)}
                            value={(*name).clone()} oninput={bind_input(&name)} />
                        <input type="text" placeholder="Contact" class={input_class(dark)}
                            value={(*contact).clone()} oninput={bind_input(&contact)} />
                        <input type="email" placeholder="Email" class={input_class(dark)}
                            value={(*email).clone()} oninput={bind_input(&email)} />
                        <input type="text" placeholder="Address" class={input_class(dark)}
                            value={(*address).clone()} oninput={bind_input(&address)} />
                        <button type="submit" class="md:col-span-2 p-2 bg-blue-600 text-white rounded">{"Add Supplier"}</button>
                        { notice(&form_error, &None) }
                    </form>
                }
            } else {
                html! {}
            }}

            <table class="w-full border-collapse border border-gray-300">
                <thead>
                    <tr class={thead_class(dark)}>
                        <th class="border border-gray-300 px-4 py-2">{"ID"}</th>
                        <th class="border border-gray-300 px-4 py-2">{"Name"}</th>
                        <th class="border border-gray-300 px-4 py-2">{"Contact"}</th>
                        <th class="border border-gray-300 px-4 py-2">{"Email"}</th>
                        <th class="border border-gray-300 px-4 py-2">{"Address"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for store.suppliers.iter().map(|supplier| html! {
                        <tr key={supplier.supplier_id} class={row_class(dark)}>
                            <td class="border border-gray-300 px-4 py-2">{ supplier.supplier_id }</td>
                            <td class="border border-gray-300 px-4 py-2">{ supplier.name.clone() }</td>
                            <td class="border border-gray-300 px-4 py-2">{ supplier.contact.clone() }</td>
                            <td class="border border-gray-300 px-4 py-2">{ supplier.email.clone() }</td>
                            <td class="border border-gray-300 px-4 py-2">{ supplier.address.clone() }</td>
                        </tr>
                    }) }
                </tbody>
            </table>
        </div>
    }
}

// ---- expenses ----------------------------------------------------------

#[function_component(ExpensesPage)]
pub fn expenses_page(props: &PageProps) -> Html {
    let store = &props.store;
    let dark = *store.dark_mode;

    let live = use_state(Liveness::new);
    {
        let store = store.clone();
        let live = (*live).clone();
        use_effect_with_deps(
            move |_| {
                store.fetch_expenses(&live);
                store.fetch_suppliers(&live);
                move || live.revoke()
            },
            (),
        );
    }

    let show_modal = use_state(|| false);
    let amount = use_state(String::new);
    let category = use_state(String::new);
    let supplier_id = use_state(String::new);
    let description = use_state(String::new);
    let date = use_state(today);
    let form_error = use_state(|| None::<String>);
    let list_notice = use_state(|| None::<String>);

    let show_report = use_state(|| false);
    let report_from = use_state(String::new);
    let report_to = use_state(String::new);
    let report_category = use_state(String::new);
    let report_notice = use_state(|| None::<String>);

    let on_add = {
        let store = store.clone();
        let show_modal = show_modal.clone();
        let amount = amount.clone();
        let category = category.clone();
        let supplier_id = supplier_id.clone();
        let description = description.clone();
        let date = date.clone();
        let form_error = form_error.clone();
        Callback::from(move |_| {
            let amount_raw = amount.trim().to_string();
            let category_val = (*category).clone();
            if amount_raw.is_empty() || category_val.is_empty() {
                form_error.set(Some("Please fill in all required fields.".to_string()));
                return;
            }
            let amount_val = amount_raw.parse::<f64>().unwrap_or(0.0);
            if amount_val <= 0.0 {
                form_error.set(Some("Amount must be a positive number.".to_string()));
                return;
            }
            form_error.set(None);

            let mut payload = serde_json::json!({
                "amount": amount_val,
                "category": category_val,
                "description": (*description).clone(),
                "date": (*date).clone(),
            });
            if !supplier_id.is_empty() {
                payload["supplierId"] = serde_json::json!(supplier_id.parse::<i64>().unwrap_or(0));
            }

            let expenses = store.expenses.clone();
            let show_modal = show_modal.clone();
            let amount = amount.clone();
            let category = category.clone();
            let supplier_id = supplier_id.clone();
            let description = description.clone();
            let date = date.clone();
            let form_error = form_error.clone();
            spawn_local(async move {
                match api::add_expense(&payload).await {
                    Ok(created) => {
                        let mut next = (*expenses).clone();
                        next.push(created);
                        expenses.set(next);
                        amount.set(String::new());
                        category.set(String::new());
                        supplier_id.set(String::new());
                        description.set(String::new());
                        date.set(today());
                        show_modal.set(false);
                    }
                    Err(err) => {
                        log::error!("failed to add expense: {}", err);
                        form_error.set(Some("Failed to add expense.".to_string()));
                    }
                }
            });
        })
    };

    let on_delete = {
        let store = store.clone();
        let list_notice = list_notice.clone();
        Callback::from(move |expense_id: i64| {
            let expenses = store.expenses.clone();
            let list_notice = list_notice.clone();
            spawn_local(async move {
                match api::delete_expense(expense_id).await {
                    Ok(()) => {
                        expenses.set(remove_by(&expenses, expense_id, |e| e.expense_id));
                    }
                    Err(err) => {
                        log::error!("failed to delete expense {}: {}", expense_id, err);
                        list_notice.set(Some("Failed to delete expense.".to_string()));
                    }
                }
            });
        })
    };

    let on_download = {
        let report_from = report_from.clone();
        let report_to = report_to.clone();
        let report_category = report_category.clone();
        let report_notice = report_notice.clone();
        let show_report = show_report.clone();
        Callback::from(move |_| {
            let from = (*report_from).clone();
            let to = (*report_to).clone();
            let category = (*report_category).clone();
            let report_notice = report_notice.clone();
            let show_report = show_report.clone();
            spawn_local(async move {
                match api::download_expense_report(&from, &to, &category).await {
                    Ok(bytes) if bytes.is_empty() => {
                        report_notice.set(Some("No expenses found for the selected filters.".to_string()));
                    }
                    Ok(bytes) => {
                        trigger_download(&bytes, "expense_report.pdf");
                        report_notice.set(Some("Expense report downloaded.".to_string()));
                        show_report.set(false);
                    }
                    Err(err) => {
                        log::error!("failed to download expense report: {}", err);
                        report_notice.set(Some("Failed to download report.".to_string()));
                    }
                }
            });
        })
    };

    let category_select = |handle: &UseStateHandle<String>, include_all: bool| -> Html {
        let current = (**handle).clone();
        html! {
            <select class={input_class(dark)} value={current.clone()} onchange={bind_select(handle)}>
                <option value="">{ if include_all { "All Categories" } else { "Select Category" } }</option>
                { for EXPENSE_CATEGORIES.iter().map(|(group, options)| html! {
                    <optgroup label={*group}>
                        { for options.iter().map(|(value, label)| html! {
                            <option value={*value} selected={current == *value}>{ *label }</option>
                        }) }
                    </optgroup>
                }) }
            </select>
        }
    };

    html! {
        <div class={shell_class(dark)}>
            <h1 class="text-3xl font-bold mb-4">{"Expense Management"}</h1>

            <div class="mb-4 space-x-2">
                <button class="px-4 py-2 bg-blue-600 text-white rounded" onclick={{
                    let show_modal = show_modal.clone();
                    Callback::from(move |_| show_modal.set(true))
                }}>
                    {"Add Expense"}
                </button>
                <button class="px-4 py-2 bg-gray-600 text-white rounded" onclick={{
                    let show_report = show_report.clone();
                    Callback::from(move |_| show_report.set(true))
                }}>
                    {"Download Report"}
                </button>
            </div>

            { notice(&list_notice, &None) }

            <table class="w-full border-collapse border border-gray-300">
                <thead>
                    <tr class={thead_class(dark)}>
                        <th class="border border-gray-300 px-4 py-2">{"ID"}</th>
                        <th class="border border-gray-300 px-4 py-2">{"Amount"}</th>
                        <th class="border border-gray-300 px-4 py-2">{"Category"}</th>
                        <th class="border border-gray-300 px-4 py-2">{"Description"}</th>
                        <th class="border border-gray-300 px-4 py-2">{"Date"}</th>
                        <th class="border border-gray-300 px-4 py-2">{"Actions"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for store.expenses.iter().map(|expense| {
                        let on_delete = {
                            let on_delete = on_delete.clone();
                            let id = expense.expense_id;
                            Callback::from(move |_| on_delete.emit(id))
                        };
                        html! {
                            <tr key={expense.expense_id} class={row_class(dark)}>
                                <td class="border border-gray-300 px-4 py-2">{ expense.expense_id }</td>
                                <td class="border border-gray-300 px-4 py-2">{ rupees(expense.amount) }</td>
                                <td class="border border-gray-300 px-4 py-2">{ expense.category.clone() }</td>
                                <td class="border border-gray-300 px-4 py-2">{ expense.description.clone() }</td>
                                <td class="border border-gray-300 px-4 py-2">{ stats::day_of(&expense.expense_date) }</td>
                                <td class="border border-gray-300 px-4 py-2">
                                    <button class="bg-red-500 text-white px-3 py-1 rounded" onclick={on_delete}>{"Delete"}</button>
                                </td>
                            </tr>
                        }
                    }) }
                </tbody>
            </table>

            { if *show_modal {
                html! {
                    <div class="fixed inset-0 z-50 flex items-center justify-center bg-black bg-opacity-50">
                        <div class={format!("p-6 rounded shadow-md w-full max-w-xl {}", if dark { "bg-gray-800 text-white" } else { "bg-white" })}>
                            <h2 class="text-xl font-semibold mb-4">{"Add New Expense"}</h2>
                            <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                                <input type="number" placeholder="Amount" class={input_class(dark)}
                                    value={(*amount).clone()} oninput={bind_input(&amount)} />
                                { category_select(&category, false) }
                                { if *category == "INVENTORY_PURCHASE" {
                                    html! {
                                        <select class={input_class(dark)} value={(*supplier_id).clone()} onchange={bind_select(&supplier_id)}>
                                            <option value="">{"Select Supplier"}</option>
                                            { for store.suppliers.iter().map(|supplier| html! {
                                                <option value={supplier.supplier_id.to_string()}>{ supplier.name.clone() }</option>
                                            }) }
                                        </select>
                                    }
                                } else {
                                    html! {}
                                }}
                                <input type="text" placeholder="Description" class={input_class(dark)}
                                    value={(*description).clone()} oninput={bind_input(&description)} />
                                <input type="date" max={today()} class={input_class(dark)}
                                    value={(*date).clone()} oninput={bind_input(&date)} />
                            </div>
                            { notice(&form_error, &None) }
                            <div class="mt-6 flex justify-end gap-3">
                                <button class="px-4 py-2 bg-gray-500 text-white rounded" onclick={{
                                    let show_modal = show_modal.clone();
                                    Callback::from(move |_| show_modal.set(false))
                                }}>{"Cancel"}</button>
                                <button class="px-4 py-2 bg-green-600 text-white rounded" onclick={on_add}>{"Add"}</button>
                            </div>
                        </div>
                    </div>
                }
            } else {
                html! {}
            }}

            { if *show_report {
                html! {
                    <div class="fixed inset-0 z-50 flex items-center justify-center bg-black bg-opacity-50">
                        <div class={format!("p-6 rounded shadow-md w-full max-w-md {}", if dark { "bg-gray-800 text-white" } else { "bg-white" })}>
                            <h2 class="text-xl font-semibold mb-4">{"Expense Report"}</h2>
                            <div class="grid grid-cols-1 gap-3">
                                <label>{"From"}</label>
                                <input type="date" max={today()} class={input_class(dark)}
                                    value={(*report_from).clone()} oninput={bind_input(&report_from)} />
                                <label>{"To"}</label>
                                <input type="date" max={today()} class={input_class(dark)}
                                    value={(*report_to).clone()} oninput={bind_input(&report_to)} />
                                <label>{"Category"}</label>
                                { category_select(&report_category, true) }
                            </div>
                            { notice(&report_notice, &None) }
                            <div class="mt-6 flex justify-end gap-3">
                                <button class="px-4 py-2 bg-gray-500 text-white rounded" onclick={{
                                    let show_report = show_report.clone();
                                    Callback::from(move |_| show_report.set(false))
                                }}>{"Close"}</button>
                                <button class="px-4 py-2 bg-blue-600 text-white rounded" onclick={on_download}>{"Download PDF"}</button>
                            </div>
                        </div>
                    </div>
                }
            } else {
                html! {}
            }}
        </div>
    }
}

// ---- udhaar ------------------------------------------------------------

#[function_component(UdhaarPage)]
pub fn udhaar_page(props: &PageProps) -> Html {
    let store = &props.store;
    let dark = *store.dark_mode;

    let live = use_state(Liveness::new);
    {
        let store = store.clone();
        let live = (*live).clone();
        use_effect_with_deps(
            move |_| {
                store.fetch_udhaar(&live);
                move || live.revoke()
            },
            (),
        );
    }

    let notice_msg = use_state(|| None::<String>);

    let on_mark_paid = {
        let store = store.clone();
        let live = (*live).clone();
        let notice_msg = notice_msg.clone();
        Callback::from(move |udhaar_id: i64| {
            let store = store.clone();
            let live = live.clone();
            let notice_msg = notice_msg.clone();
            spawn_local(async move {
                match api::mark_udhaar_paid(udhaar_id).await {
                    Ok(()) => store.fetch_udhaar(&live),
                    Err(err) => {
                        log::error!("failed to mark udhaar {} as paid: {}", udhaar_id, err);
                        notice_msg.set(Some("Failed to mark udhaar as paid.".to_string()));
                    }
                }
            });
        })
    };

    html! {
        <div class={shell_class(dark)}>
            <h2 class="text-2xl font-bold mb-4">{"Udhaar Records"}</h2>

            { notice(&notice_msg, &None) }

            <table class="w-full border-collapse border border-gray-300">
                <thead>
                    <tr class={thead_class(dark)}>
                        <th class="border border-gray-300 px-4 py-2">{"ID"}</th>
                        <th class="border border-gray-300 px-4 py-2">{"Customer"}</th>
                        <th class="border border-gray-300 px-4 py-2">{"Amount Due"}</th>
                        <th class="border border-gray-300 px-4 py-2">{"Due Date"}</th>
                        <th class="border border-gray-300 px-4 py-2">{"Status"}</th>
                        <th class="border border-gray-300 px-4 py-2">{"Actions"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for store.udhaar.iter().map(|record: &UdhaarRecord| {
                        let status_class = if record.status == crate::models::UdhaarStatus::Overdue {
                            "border border-gray-300 px-4 py-2 text-red-500 font-semibold"
                        } else {
                            "border border-gray-300 px-4 py-2"
                        };
                        let on_mark_paid = {
                            let on_mark_paid = on_mark_paid.clone();
                            let id = record.udhaar_id;
                            Callback::from(move |_| on_mark_paid.emit(id))
                        };
                        html! {
                            <tr key={record.udhaar_id} class={row_class(dark)}>
                                <td class="border border-gray-300 px-4 py-2">{ record.udhaar_id }</td>
                                <td class="border border-gray-300 px-4 py-2">{ record.customer_name.clone() }</td>
                                <td class="border border-gray-300 px-4 py-2">{ rupees(record.amount_due) }</td>
                                <td class="border border-gray-300 px-4 py-2">{ record.due_date.clone() }</td>
                                <td class={status_class}>{ record.status.label() }</td>
                                <td class="border border-gray-300 px-4 py-2">
                                    { if record.status.is_open() {
                                        html! {
                                            <button class="bg-green-600 text-white px-3 py-1 rounded" onclick={on_mark_paid}>
                                                {"Mark as Paid"}
                                            </button>
                                        }
                                    } else {
                                        html! {}
                                    }}
                                </td>
                            </tr>
                        }
                    }) }
                </tbody>
            </table>
        </div>
    }
}

// ---- create user -------------------------------------------------------

#[function_component(CreateUserPage)]
pub fn create_user_page(props: &PageProps) -> Html {
    let store = &props.store;
    let dark = *store.dark_mode;

    let username = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let confirm_password = use_state(String::new);
    let form_error = use_state(|| None::<String>);
    let form_success = use_state(|| None::<String>);

    let on_submit = {
        let store = store.clone();
        let username = username.clone();
        let email = email.clone();
        let password = password.clone();
        let confirm_password = confirm_password.clone();
        let form_error = form_error.clone();
        let form_success = form_success.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let username_val = username.trim().to_string();
            let email_val = email.trim().to_string();
            let password_val = (*password).clone();
            let confirm_val = (*confirm_password).clone();

            if username_val.is_empty() {
                form_error.set(Some("Username is required.".to_string()));
                return;
            }
            if email_val.is_empty() || !valid_email(&email_val) {
                form_error.set(Some("Invalid email format.".to_string()));
                return;
            }
            if password_val.len() < 6 {
                form_error.set(Some("Password must be at least 6 characters.".to_string()));
                return;
            }
            if password_val != confirm_val {
                form_error.set(Some("Passwords do not match.".to_string()));
                return;
            }

            form_error.set(None);
            form_success.set(None);

            let store = store.clone();
            let username = username.clone();
            let email = email.clone();
            let password = password.clone();
            let confirm_password = confirm_password.clone();
            let form_error = form_error.clone();
            let form_success = form_success.clone();
            spawn_local(async move {
                match api::create_admin(&username_val, &password_val, &email_val).await {
                    Ok(()) => {
                        username.set(String::new());
                        email.set(String::new());
                        password.set(String::new());
                        confirm_password.set(String::new());
                        form_success.set(Some("User created successfully! Signing out...".to_string()));
                        store.logout();
                    }
                    Err(err) => {
                        log::error!("failed to create user: {}", err);
                        form_error.set(Some("Failed to create user.".to_string()));
                    }
                }
            });
        })
    };

    html! {
        <div class={shell_class(dark)}>
            <h2 class="text-2xl font-semibold mb-4">{"Create User"}</h2>

            <form class={format!("p-6 rounded-lg shadow max-w-md {}", if dark { "bg-gray-800" } else { "bg-white" })} onsubmit={on_submit}>
                <input type="text" placeholder="Username" class={format!("block w-full my-2 {}", input_class(dark))}
                    value={(*username).clone()} oninput={bind_input(&username)} />
                <input type="email" placeholder="Email" class={format!("block w-full my-2 {}", input_class(dark))}
                    value={(*email).clone()} oninput={bind_input(&email)} />
                <input type="password" placeholder="Password" class={format!("block w-full my-2 {}", input_class(dark))}
                    value={(*password).clone()} oninput={bind_input(&password)} />
                <input type="password" placeholder="Confirm Password" class={format!("block w-full my-2 {}", input_class(dark))}
                    value={(*confirm_password).clone()} oninput={bind_input(&confirm_password)} />
                { notice(&form_error, &form_success) }
                <button type="submit" class="w-full mt-2 p-2 bg-blue-600 text-white rounded">{"Create User"}</button>
            </form>
        </div>
    }
}

// ---- update password ---------------------------------------------------

#[function_component(UpdatePasswordPage)]
pub fn update_password_page(props: &PageProps) -> Html {
    let store = &props.store;
    let dark = *store.dark_mode;

    let old_password = use_state(String::new);
    let new_password = use_state(String::new);
    let confirm_password = use_state(String::new);
    let form_error = use_state(|| None::<String>);
    let form_success = use_state(|| None::<String>);
    let busy = use_state(|| false);

    let on_update = {
        let store = store.clone();
        let old_password = old_password.clone();
        let new_password = new_password.clone();
        let confirm_password = confirm_password.clone();
        let form_error = form_error.clone();
        let form_success = form_success.clone();
        let busy = busy.clone();
        Callback::from(move |_| {
            if *new_password != *confirm_password {
                form_error.set(Some("New passwords do not match.".to_string()));
                return;
            }
            let username = match &*store.user {
                Some(username) => username.clone(),
                None => return,
            };

            form_error.set(None);
            form_success.set(None);
            busy.set(true);

            let old_val = (*old_password).clone();
            let new_val = (*new_password).clone();
            let old_password = old_password.clone();
            let new_password = new_password.clone();
            let confirm_password = confirm_password.clone();
            let form_error = form_error.clone();
            let form_success = form_success.clone();
            let busy = busy.clone();
            spawn_local(async move {
                match api::update_password(&username, &old_val, &new_val).await {
                    Ok(()) => {
                        old_password.set(String::new());
                        new_password.set(String::new());
                        confirm_password.set(String::new());
                        form_success.set(Some("Password updated successfully.".to_string()));
                    }
                    Err(err) => {
                        log::error!("failed to update password: {}", err);
                        form_error.set(Some("Failed to update password.".to_string()));
                    }
                }
                busy.set(false);
            });
        })
    };

    html! {
        <div class={shell_class(dark)}>
            <h2 class="text-2xl font-semibold mb-4">{"Update Password"}</h2>

            <div class={format!("p-6 rounded-lg shadow max-w-md {}", if dark { "bg-gray-800" } else { "bg-white" })}>
                <input type="password" placeholder="Current Password" class={format!("block w-full my-2 {}", input_class(dark))}
                    value={(*old_password).clone()} oninput={bind_input(&old_password)} />
                <input type="password" placeholder="New Password" class={format!("block w-full my-2 {}", input_class(dark))}
                    value={(*new_password).clone()} oninput={bind_input(&new_password)} />
                <input type="password" placeholder="Confirm New Password" class={format!("block w-full my-2 {}", input_class(dark))}
                    value={(*confirm_password).clone()} oninput={bind_input(&confirm_password)} />
                { notice(&form_error, &form_success) }
                <button class="w-full mt-2 p-2 bg-blue-600 text-white rounded disabled:opacity-50" onclick={on_update} disabled={*busy}>
                    { if *busy { "Updating..." } else { "Update Password" } }
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_validation_requires_exactly_ten_digits() {
        assert!(valid_phone("9876543210"));
        assert!(!valid_phone("98765"));
        assert!(!valid_phone("98765432101"));
        assert!(!valid_phone("98765abc10"));
    }

    #[test]
    fn email_validation_matches_the_form_rules() {
        assert!(valid_email("asha@store.in"));
        assert!(valid_email("a.b@c.d.e"));
        assert!(!valid_email("asha"));
        assert!(!valid_email("asha@store"));
        assert!(!valid_email("asha @store.in"));
        assert!(!valid_email("@store.in"));
        assert!(!valid_email("asha@.in"));
    }

    #[test]
    fn pagination_math_covers_edges() {
        assert_eq!(total_pages(0, 5), 1);
        assert_eq!(total_pages(5, 5), 1);
        assert_eq!(total_pages(6, 5), 2);
        assert_eq!(total_pages(11, 5), 3);
    }

    #[test]
    fn page_slice_returns_the_requested_window() {
        let list: Vec<i32> = (1..=12).collect();
        assert_eq!(page_slice(&list, 1, 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_slice(&list, 3, 5), vec![11, 12]);
        assert!(page_slice(&list, 4, 5).is_empty());
    }

    #[test]
    fn polyline_scales_into_the_viewbox() {
        let buckets = vec![
            ("2024-01-01".to_string(), 100.0),
            ("2024-01-02".to_string(), 50.0),
            ("2024-01-03".to_string(), 0.0),
        ];
        let points = polyline_points(&buckets, 300.0, 100.0);
        assert_eq!(points, "0.0,0.0 150.0,50.0 300.0,100.0");
        assert!(polyline_points(&[], 300.0, 100.0).is_empty());
    }

    #[test]
    fn polyline_handles_a_single_bucket() {
        let buckets = vec![("2024-01-01".to_string(), 40.0)];
        assert_eq!(polyline_points(&buckets, 300.0, 100.0), "0.0,0.0");
    }
}
