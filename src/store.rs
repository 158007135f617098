use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::{self, ApiError};
use crate::models::{
    Customer, Expense, InventoryItem, Product, Sale, SaleRecord, Supplier, UdhaarRecord,
};

const USER_KEY: &str = "user";
const DARK_MODE_KEY: &str = "darkMode";

/// Persistence seam for the session and theme preference. The browser
/// build reads and writes window local storage; tests substitute an
/// in-memory map.
pub trait KeyValueStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Window local storage. Every accessor tolerates the storage being
/// unavailable (sandboxed frames) by acting as a no-op.
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// Session identity and theme preference, hydrated from persisted
/// storage at startup. Presence of the persisted user is the single
/// source of truth for "is authenticated".
#[derive(Clone)]
pub struct Session {
    storage: Rc<dyn KeyValueStorage>,
}

impl PartialEq for Session {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.storage, &other.storage)
    }
}

impl Session {
    pub fn new(storage: Rc<dyn KeyValueStorage>) -> Self {
        Session { storage }
    }

    pub fn browser() -> Self {
        Session::new(Rc::new(BrowserStorage))
    }

    pub fn restore_user(&self) -> Option<String> {
        let raw = self.storage.get(USER_KEY)?;
        serde_json::from_str(&raw).ok()
    }

    pub fn remember_user(&self, username: &str) {
        if let Ok(raw) = serde_json::to_string(username) {
            self.storage.set(USER_KEY, &raw);
        }
    }

    pub fn end(&self) {
        self.storage.remove(USER_KEY);
    }

    pub fn restore_dark_mode(&self) -> bool {
        self.storage
            .get(DARK_MODE_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or(true)
    }

    pub fn remember_dark_mode(&self, on: bool) {
        if let Ok(raw) = serde_json::to_string(&on) {
            self.storage.set(DARK_MODE_KEY, &raw);
        }
    }
}

/// Clear the local session, then let the backend know. The notification
/// is best-effort: it runs after the session is already gone and its
/// failure only produces a log line.
pub async fn end_session_and_notify<F>(session: &Session, notify: F)
where
    F: Future<Output = Result<(), ApiError>>,
{
    session.end();
    if let Err(err) = notify.await {
        log::warn!("logout notification failed: {}", err);
    }
}

/// Commit gate for in-flight fetches. Each page mount hands its fetches
/// a token and revokes it on teardown, so a late response can no longer
/// mutate state for an unmounted view.
#[derive(Clone)]
pub struct Liveness(Rc<Cell<bool>>);

impl Liveness {
    pub fn new() -> Self {
        Liveness(Rc::new(Cell::new(true)))
    }

    pub fn revoke(&self) {
        self.0.set(false);
    }

    pub fn is_live(&self) -> bool {
        self.0.get()
    }
}

impl Default for Liveness {
    fn default() -> Self {
        Liveness::new()
    }
}

impl PartialEq for Liveness {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Decide what a finished fetch does to the cached list: a successful
/// snapshot from a live request replaces the list wholesale; anything
/// else leaves the previous snapshot untouched. Failures are logged,
/// never propagated.
pub fn commit_snapshot<T>(
    fetched: Result<Vec<T>, ApiError>,
    live: &Liveness,
    what: &str,
) -> Option<Vec<T>> {
    match fetched {
        Ok(list) if live.is_live() => Some(list),
        Ok(_) => None,
        Err(err) => {
            log::error!("failed to fetch {}: {}", what, err);
            None
        }
    }
}

/// Replace the record whose key matches `updated`, keeping order.
pub fn replace_by<T: Clone>(list: &[T], updated: T, key: impl Fn(&T) -> i64) -> Vec<T> {
    let id = key(&updated);
    list.iter()
        .map(|item| {
            if key(item) == id {
                updated.clone()
            } else {
                item.clone()
            }
        })
        .collect()
}

/// Drop the record with the given key, keeping order.
pub fn remove_by<T: Clone>(list: &[T], id: i64, key: impl Fn(&T) -> i64) -> Vec<T> {
    list.iter()
        .filter(|item| key(item) != id)
        .cloned()
        .collect()
}

/// The process-wide state container: session identity, theme flag, and
/// the eight cached entity lists plus the dashboard's unpaid-credit
/// view. One instance is built in the app shell and passed to every
/// page by reference through props.
#[derive(Clone, PartialEq)]
pub struct Store {
    pub session: Session,
    pub user: UseStateHandle<Option<String>>,
    pub dark_mode: UseStateHandle<bool>,
    pub customers: UseStateHandle<Vec<Customer>>,
    pub products: UseStateHandle<Vec<Product>>,
    pub sales: UseStateHandle<Vec<Sale>>,
    pub sales_desc: UseStateHandle<Vec<SaleRecord>>,
    pub inventory: UseStateHandle<Vec<InventoryItem>>,
    pub expenses: UseStateHandle<Vec<Expense>>,
    pub suppliers: UseStateHandle<Vec<Supplier>>,
    pub udhaar: UseStateHandle<Vec<UdhaarRecord>>,
    pub unpaid_udhaar: UseStateHandle<Vec<UdhaarRecord>>,
}

impl Store {
    /// Record a successful login. Idempotent; the login request itself
    /// belongs to the login page.
    pub fn login(&self, username: String) {
        self.session.remember_user(&username);
        self.user.set(Some(username));
    }

    /// Clear the session locally and re-render to the login view, then
    /// notify the backend without waiting on the outcome.
    pub fn logout(&self) {
        self.user.set(None);
        let session = self.session.clone();
        spawn_local(async move {
            end_session_and_notify(&session, api::notify_logout()).await;
        });
    }

    pub fn toggle_dark_mode(&self) {
        let next = !*self.dark_mode;
        self.session.remember_dark_mode(next);
        self.dark_mode.set(next);
    }

    pub fn fetch_customers(&self, live: &Liveness) {
        let handle = self.customers.clone();
        let live = live.clone();
        spawn_local(async move {
            if let Some(list) = commit_snapshot(api::fetch_customers().await, &live, "customers") {
                handle.set(list);
            }
        });
    }

    pub fn fetch_products(&self, live: &Liveness) {
        let handle = self.products.clone();
        let live = live.clone();
        spawn_local(async move {
            if let Some(list) = commit_snapshot(api::fetch_products().await, &live, "products") {
                handle.set(list);
            }
        });
    }

    pub fn fetch_sales(&self, live: &Liveness) {
        let handle = self.sales.clone();
        let live = live.clone();
        spawn_local(async move {
            if let Some(list) = commit_snapshot(api::fetch_sales().await, &live, "sales") {
                handle.set(list);
            }
        });
    }

    pub fn fetch_sales_desc(&self, live: &Liveness) {
        let handle = self.sales_desc.clone();
        let live = live.clone();
        spawn_local(async move {
            if let Some(list) =
                commit_snapshot(api::fetch_sales_desc().await, &live, "sale records")
            {
                handle.set(list);
            }
        });
    }

    pub fn fetch_inventory(&self, live: &Liveness) {
        let handle = self.inventory.clone();
        let live = live.clone();
        spawn_local(async move {
            if let Some(list) = commit_snapshot(api::fetch_inventory().await, &live, "inventory") {
                handle.set(list);
            }
        });
    }

    pub fn fetch_expenses(&self, live: &Liveness) {
        let handle = self.expenses.clone();
        let live = live.clone();
        spawn_local(async move {
            if let Some(list) = commit_snapshot(api::fetch_expenses().await, &live, "expenses") {
                handle.set(list);
            }
        });
    }

    pub fn fetch_suppliers(&self, live: &Liveness) {
        let handle = self.suppliers.clone();
        let live = live.clone();
        spawn_local(async move {
            if let Some(list) = commit_snapshot(api::fetch_suppliers().await, &live, "suppliers") {
                handle.set(list);
            }
        });
    }

    pub fn fetch_udhaar(&self, live: &Liveness) {
        let handle = self.udhaar.clone();
        let live = live.clone();
        spawn_local(async move {
            if let Some(list) = commit_snapshot(api::fetch_udhaar().await, &live, "udhaar records")
            {
                handle.set(list);
            }
        });
    }

    pub fn fetch_unpaid_udhaar(&self, live: &Liveness) {
        let handle = self.unpaid_udhaar.clone();
        let live = live.clone();
        spawn_local(async move {
            if let Some(list) =
                commit_snapshot(api::fetch_unpaid_udhaar().await, &live, "unpaid udhaar")
            {
                handle.set(list);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStorage {
        values: RefCell<HashMap<String, String>>,
    }

    impl KeyValueStorage for MemoryStorage {
        fn get(&self, key: &str) -> Option<String> {
            self.values.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) {
            self.values.borrow_mut().insert(key.to_string(), value.to_string());
        }

        fn remove(&self, key: &str) {
            self.values.borrow_mut().remove(key);
        }
    }

    fn memory_session() -> Session {
        Session::new(Rc::new(MemoryStorage::default()))
    }

    #[test]
    fn user_round_trips_through_persistence() {
        let session = memory_session();
        assert_eq!(session.restore_user(), None);
        session.remember_user("asha");
        assert_eq!(session.restore_user(), Some("asha".to_string()));
    }

    #[test]
    fn dark_mode_defaults_on_and_double_toggle_restores() {
        let session = memory_session();
        assert!(session.restore_dark_mode());

        let original = session.restore_dark_mode();
        session.remember_dark_mode(!original);
        assert_eq!(session.restore_dark_mode(), !original);
        session.remember_dark_mode(original);
        assert_eq!(session.restore_dark_mode(), original);
    }

    #[test]
    fn logout_clears_session_even_when_notify_fails() {
        let session = memory_session();
        session.remember_user("asha");

        futures::executor::block_on(end_session_and_notify(&session, async {
            Err(ApiError::Network("connection refused".to_string()))
        }));

        assert_eq!(session.restore_user(), None);
    }

    #[test]
    fn failed_fetch_leaves_previous_snapshot_untouched() {
        let cached = vec!["a", "b", "c"];
        let live = Liveness::new();

        let committed = commit_snapshot::<&str>(
            Err(ApiError::Status(500)),
            &live,
            "customers",
        );

        assert!(committed.is_none());
        assert_eq!(cached.len(), 3);
    }

    #[test]
    fn revoked_liveness_discards_late_snapshot() {
        let live = Liveness::new();
        live.revoke();
        assert!(commit_snapshot(Ok(vec![1, 2, 3]), &live, "sales").is_none());
    }

    #[test]
    fn live_snapshot_replaces_wholesale() {
        let live = Liveness::new();
        assert_eq!(
            commit_snapshot(Ok(vec![1, 2, 3]), &live, "sales"),
            Some(vec![1, 2, 3])
        );
    }

    #[derive(Clone, PartialEq, Debug)]
    struct Row {
        id: i64,
        name: &'static str,
    }

    #[test]
    fn replace_by_swaps_only_the_matching_record() {
        let list = vec![
            Row { id: 1, name: "one" },
            Row { id: 2, name: "two" },
        ];
        let next = replace_by(&list, Row { id: 2, name: "TWO" }, |r| r.id);
        assert_eq!(next[0].name, "one");
        assert_eq!(next[1].name, "TWO");
    }

    #[test]
    fn remove_by_keeps_the_rest_in_order() {
        let list = vec![
            Row { id: 1, name: "one" },
            Row { id: 2, name: "two" },
            Row { id: 3, name: "three" },
        ];
        let next = remove_by(&list, 2, |r| r.id);
        assert_eq!(next.len(), 2);
        assert_eq!(next[0].id, 1);
        assert_eq!(next[1].id, 3);
    }
}
