mod api;
mod models;
mod pages;
mod stats;
mod store;

use yew::prelude::*;

use crate::pages::{
    CreateUserPage, CustomersPage, DashboardPage, ExpensesPage, InventoryPage, LoginPage,
    ProductsPage, SalesPage, SuppliersPage, UdhaarPage, UpdatePasswordPage,
};
use crate::store::{Session, Store};

#[derive(Clone, Copy, PartialEq)]
enum Page {
    Dashboard,
    Products,
    Sales,
    Expenses,
    Suppliers,
    Inventory,
    Customers,
    Udhaar,
    UpdatePassword,
    CreateUser,
}

struct NavItem {
    label: &'static str,
    page: Page,
    icon: fn() -> Html,
}

#[derive(Properties, PartialEq)]
struct SidebarProps {
    store: Store,
    active_page: Page,
    on_select: Callback<Page>,
}

#[function_component(Sidebar)]
fn sidebar(props: &SidebarProps) -> Html {
    let nav_items = vec![
        NavItem {
            label: "Dashboard",
            page: Page::Dashboard,
            icon: icon_layout_grid,
        },
        NavItem {
            label: "Products",
            page: Page::Products,
            icon: icon_box,
        },
        NavItem {
            label: "Sales",
            page: Page::Sales,
            icon: icon_cart,
        },
        NavItem {
            label: "Expenses",
            page: Page::Expenses,
            icon: icon_wallet,
        },
        NavItem {
            label: "Suppliers",
            page: Page::Suppliers,
            icon: icon_truck,
        },
        NavItem {
            label: "Inventory",
            page: Page::Inventory,
            icon: icon_archive,
        },
        NavItem {
            label: "Customers",
            page: Page::Customers,
            icon: icon_users,
        },
        NavItem {
            label: "Udhaar",
            page: Page::Udhaar,
            icon: icon_hand_coins,
        },
        NavItem {
            label: "Update Password",
            page: Page::UpdatePassword,
            icon: icon_key,
        },
        NavItem {
            label: "Create User",
            page: Page::CreateUser,
            icon: icon_user_plus,
        },
    ];

    let on_logout = {
        let store = props.store.clone();
        Callback::from(move |_| store.logout())
    };

    let on_toggle_dark = {
        let store = props.store.clone();
        Callback::from(move |_| store.toggle_dark_mode())
    };

    html! {
        <div class="w-56 min-h-screen bg-gray-800 text-white p-4 flex flex-col">
            <div class="flex items-center gap-2 px-2 mb-6">
                <span class="text-2xl">{"🏪"}</span>
                <span class="text-xl font-bold tracking-tight">{"Kirana Admin"}</span>
            </div>

            <nav class="flex-1 space-y-1">
                { for nav_items.iter().map(|item| {
                    let is_active = item.page == props.active_page;
                    let class = if is_active {
                        "flex items-center gap-3 w-full px-4 py-2 rounded bg-gray-700 text-white"
                    } else {
                        "flex items-center gap-3 w-full px-4 py-2 rounded text-gray-300 hover:bg-gray-700 hover:text-white"
                    };
                    let on_select = props.on_select.clone();
                    let page = item.page;
                    html! {
                        <button type="button" class={class} onclick={Callback::from(move |_| on_select.emit(page))}>
                            <span class="shrink-0">{ (item.icon)() }</span>
                            <span class="truncate text-left text-sm">{ item.label }</span>
                        </button>
                    }
                }) }
            </nav>

            <div class="mt-auto pt-4 space-y-2 border-t border-gray-700">
                <label class="flex items-center gap-3 px-4 py-2 cursor-pointer text-sm text-gray-300">
                    { if *props.store.dark_mode { icon_moon() } else { icon_sun() } }
                    <span>{"Dark Mode"}</span>
                    <input type="checkbox" checked={*props.store.dark_mode} onclick={on_toggle_dark} />
                </label>
                <button onclick={on_logout} class="flex items-center gap-3 w-full px-4 py-2 rounded text-gray-300 hover:bg-gray-700 hover:text-white text-sm">
                    { icon_log_out() }
                    <span>{"Log Out"}</span>
                </button>
            </div>
        </div>
    }
}

#[function_component(App)]
fn app() -> Html {
    let session = Session::browser();
    let user = use_state(|| session.restore_user());
    let dark_mode = use_state(|| session.restore_dark_mode());
    let customers = use_state(Vec::new);
    let products = use_state(Vec::new);
    let sales = use_state(Vec::new);
    let sales_desc = use_state(Vec::new);
    let inventory = use_state(Vec::new);
    let expenses = use_state(Vec::new);
    let suppliers = use_state(Vec::new);
    let udhaar = use_state(Vec::new);
    let unpaid_udhaar = use_state(Vec::new);
    let active_page = use_state(|| Page::Dashboard);

    let store = Store {
        session,
        user,
        dark_mode,
        customers,
        products,
        sales,
        sales_desc,
        inventory,
        expenses,
        suppliers,
        udhaar,
        unpaid_udhaar,
    };

    if store.user.is_none() {
        return html! { <LoginPage store={store} /> };
    }

    let on_select = {
        let active_page = active_page.clone();
        Callback::from(move |page: Page| active_page.set(page))
    };

    let content = match *active_page {
        Page::Dashboard => html! { <DashboardPage store={store.clone()} /> },
        Page::Products => html! { <ProductsPage store={store.clone()} /> },
        Page::Sales => html! { <SalesPage store={store.clone()} /> },
        Page::Expenses => html! { <ExpensesPage store={store.clone()} /> },
        Page::Suppliers => html! { <SuppliersPage store={store.clone()} /> },
        Page::Inventory => html! { <InventoryPage store={store.clone()} /> },
        Page::Customers => html! { <CustomersPage store={store.clone()} /> },
        Page::Udhaar => html! { <UdhaarPage store={store.clone()} /> },
        Page::UpdatePassword => html! { <UpdatePasswordPage store={store.clone()} /> },
        Page::CreateUser => html! { <CreateUserPage store={store.clone()} /> },
    };

    html! {
        <div class="flex">
            <Sidebar store={store} active_page={*active_page} on_select={on_select} />
            <div class="w-full">
                { content }
            </div>
        </div>
    }
}

fn icon_base(path: &'static str) -> Html {
    html! {
        <svg width="18" height="18" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d={path}></path>
        </svg>
    }
}

fn icon_layout_grid() -> Html {
    icon_base("M3 3h8v8H3zM13 3h8v8h-8zM3 13h8v8H3zM13 13h8v8h-8z")
}
fn icon_box() -> Html {
    icon_base("M21 8l-9-5-9 5v8l9 5 9-5zM3 8l9 5 9-5M12 13v8")
}
fn icon_cart() -> Html {
    icon_base("M6 6h15l-2 9H8zM6 6L5 2H2M8 20a1 1 0 100-2 1 1 0 000 2M17 20a1 1 0 100-2 1 1 0 000 2")
}
fn icon_wallet() -> Html {
    icon_base("M3 7h18v10H3zM16 7V5H5v2")
}
fn icon_truck() -> Html {
    icon_base("M1 5h14v11H1zM15 9h4l3 3v4h-7zM6 19a2 2 0 100-4 2 2 0 000 4M18 19a2 2 0 100-4 2 2 0 000 4")
}
fn icon_archive() -> Html {
    icon_base("M3 4h18v4H3zM5 8v12h14V8M10 12h4")
}
fn icon_users() -> Html {
    icon_base("M17 21v-2a4 4 0 00-4-4H5a4 4 0 00-4 4v2M9 11a4 4 0 100-8 4 4 0 000 8M23 21v-2a4 4 0 00-3-3.87M16 3.13a4 4 0 010 7.75")
}
fn icon_hand_coins() -> Html {
    icon_base("M12 2v6M9 5h6M4 13c2-2 5-2 7 0l2 2h4a2 2 0 010 4h-8l-5-3M4 13v8")
}
fn icon_key() -> Html {
    icon_base("M21 2l-9.6 9.6M15.5 7.5l3 3L22 7l-3-3M11.6 11.6A5.5 5.5 0 1014 16l-2.4-4.4z")
}
fn icon_user_plus() -> Html {
    icon_base("M16 21v-2a4 4 0 00-4-4H5a4 4 0 00-4 4v2M8.5 11a4 4 0 100-8 4 4 0 000 8M20 8v6M23 11h-6")
}
fn icon_log_out() -> Html {
    icon_base("M9 21H5a2 2 0 01-2-2V5a2 2 0 012-2h4M16 17l5-5-5-5M21 12H9")
}
fn icon_moon() -> Html {
    icon_base("M21 12.79A9 9 0 1111.21 3a7 7 0 109.79 9.79z")
}
fn icon_sun() -> Html {
    icon_base("M12 17a5 5 0 100-10 5 5 0 000 10M12 1v2M12 21v2M4.22 4.22l1.42 1.42M18.36 18.36l1.42 1.42M1 12h2M21 12h2M4.22 19.78l1.42-1.42M18.36 5.64l1.42-1.42")
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
