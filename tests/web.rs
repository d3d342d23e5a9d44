//! Tests de montaje en navegador: `wasm-pack test --headless --firefox`
#![cfg(target_arch = "wasm32")]

use std::rc::Rc;

use shoe_configurator::app::MOUNTED_ATTR;
use shoe_configurator::router::link::{ACTIVE_CLASS, EXACT_ACTIVE_CLASS};
use shoe_configurator::router::{BrowserHistory, History, MemoryHistory};
use shoe_configurator::views::{RenderContext, Shell, View};
use shoe_configurator::{routes, App, AppContext, AppError, Router};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;
use web_sys::Element;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

fn mount_point(id: &str) -> Element {
    let element = document().create_element("div").unwrap();
    element.set_id(id);
    element.set_inner_html("<p class=\"placeholder\">loading</p>");
    document().body().unwrap().append_child(&element).unwrap();
    element
}

fn mount(id: &str, initial: &str) -> Result<Rc<AppContext>, AppError> {
    mount_point(id);
    let router = Router::new(routes::default_table().unwrap(), Box::new(MemoryHistory::new(initial)));
    App::create(Rc::new(Shell))
        .use_plugin(router)?
        .mount(&format!("#{}", id))
}

fn count(root: &Element, selector: &str) -> u32 {
    root.query_selector_all(selector).unwrap().length()
}

#[wasm_bindgen_test]
fn mounts_shell_and_initial_view() {
    let context = mount("mount-initial", "/").unwrap();
    let root = context.mount_element().unwrap();

    assert_eq!(root.get_attribute(MOUNTED_ATTR).as_deref(), Some("true"));
    assert_eq!(count(root, ".placeholder"), 0);
    assert_eq!(count(root, ".router-view"), 1);
    assert_eq!(count(root, ".view-home"), 1);
    let outlet = root.query_selector(".router-view").unwrap().unwrap();
    assert_eq!(outlet.get_attribute("data-view").as_deref(), Some("Home"));
}

#[wasm_bindgen_test]
fn navigation_swaps_the_active_view() {
    let context = mount("mount-navigation", "/").unwrap();
    let root = context.mount_element().unwrap();

    context.navigate("/new-page").unwrap();
    assert_eq!(count(root, ".view-new-page"), 1);
    assert_eq!(count(root, ".view-home"), 0);

    context.navigate("/configurator").unwrap();
    assert_eq!(count(root, ".view-configurator"), 1);
    assert_eq!(count(root, ".view-new-page"), 0);
}

#[wasm_bindgen_test]
fn unknown_path_leaves_outlet_empty() {
    let context = mount("mount-unknown", "/").unwrap();
    let root = context.mount_element().unwrap();

    context.navigate("/does-not-exist").unwrap();
    assert_eq!(count(root, ".view"), 0);
    let outlet = root.query_selector(".router-view").unwrap().unwrap();
    assert!(outlet.get_attribute("data-view").is_none());
}

#[wasm_bindgen_test]
fn nav_links_follow_the_current_route() {
    let context = mount("mount-links", "/").unwrap();
    let root = context.mount_element().unwrap();

    context.navigate("/configurator").unwrap();
    let active = root
        .query_selector(&format!("nav a.{}", EXACT_ACTIVE_CLASS))
        .unwrap()
        .unwrap();
    assert_eq!(active.get_attribute("href").as_deref(), Some("/configurator"));
    assert_eq!(count(root, &format!("nav a.{}", ACTIVE_CLASS)), 1);
}

#[wasm_bindgen_test]
fn missing_mount_target_renders_nothing() {
    let router = Router::new(routes::default_table().unwrap(), Box::new(MemoryHistory::new("/")));
    let err = App::create(Rc::new(Shell))
        .use_plugin(router)
        .unwrap()
        .mount("#no-such-node")
        .err()
        .unwrap();

    assert!(matches!(err, AppError::MountTargetNotFound { selector } if selector == "#no-such-node"));
}

#[wasm_bindgen_test]
fn second_mount_on_same_node_is_rejected() {
    let first = mount("mount-twice", "/").unwrap();
    let router = Router::new(routes::default_table().unwrap(), Box::new(MemoryHistory::new("/new-page")));
    let err = App::create(Rc::new(Shell))
        .use_plugin(router)
        .unwrap()
        .mount("#mount-twice")
        .err()
        .unwrap();

    assert!(matches!(err, AppError::AlreadyMounted { .. }));
    // La primera app sigue intacta
    assert_eq!(count(first.mount_element().unwrap(), ".view-home"), 1);
}

struct NoOutlet;

impl View for NoOutlet {
    fn name(&self) -> &str {
        "NoOutlet"
    }

    fn render(&self, _ctx: &RenderContext) -> Result<Element, JsValue> {
        document().create_element("div")
    }
}

#[wasm_bindgen_test]
fn root_without_outlet_is_rejected() {
    mount_point("mount-no-outlet");
    let router = Router::new(routes::default_table().unwrap(), Box::new(MemoryHistory::new("/")));
    let err = App::create(Rc::new(NoOutlet))
        .use_plugin(router)
        .unwrap()
        .mount("#mount-no-outlet")
        .err()
        .unwrap();
    assert!(matches!(err, AppError::MissingRouterView));

    // El nodo queda como estaba: sin marca y con su contenido previo
    let root = document().get_element_by_id("mount-no-outlet").unwrap();
    assert!(!root.has_attribute(MOUNTED_ATTR));
    assert_eq!(count(&root, ".placeholder"), 1);

    // Y admite un montaje correcto después
    let router = Router::new(routes::default_table().unwrap(), Box::new(MemoryHistory::new("/")));
    let context = App::create(Rc::new(Shell))
        .use_plugin(router)
        .unwrap()
        .mount("#mount-no-outlet")
        .unwrap();
    assert_eq!(count(context.mount_element().unwrap(), ".view-home"), 1);
    assert_eq!(count(&root, ".placeholder"), 0);
}

#[wasm_bindgen_test]
fn invalid_selector_is_not_a_missing_target() {
    let router = Router::new(routes::default_table().unwrap(), Box::new(MemoryHistory::new("/")));
    let err = App::create(Rc::new(Shell))
        .use_plugin(router)
        .unwrap()
        .mount("#[")
        .err()
        .unwrap();
    assert!(matches!(err, AppError::InvalidSelector { selector, .. } if selector == "#["));
}

// ============================================================================
// BrowserHistory: escriben en la URL real y la restauran al final
// ============================================================================

fn current_href() -> String {
    web_sys::window().unwrap().location().href().unwrap()
}

fn restore_href(href: &str) {
    web_sys::window()
        .unwrap()
        .history()
        .unwrap()
        .replace_state_with_url(&JsValue::NULL, "", Some(href))
        .unwrap();
}

fn pathname() -> String {
    web_sys::window().unwrap().location().pathname().unwrap()
}

#[wasm_bindgen_test]
fn web_history_hrefs_carry_the_base() {
    assert_eq!(BrowserHistory::web("").unwrap().create_href("/new-page"), "/new-page");
    assert_eq!(BrowserHistory::web("/shop/").unwrap().create_href("new-page"), "/shop/new-page");
}

#[wasm_bindgen_test]
fn hash_history_hrefs_keep_the_page_path() {
    let page = pathname();
    assert_eq!(
        BrowserHistory::hash("").unwrap().create_href("/new-page"),
        format!("{}#/new-page", page)
    );
    assert_eq!(BrowserHistory::hash("/shop").unwrap().create_href("/new-page"), "/shop/#/new-page");
}

#[wasm_bindgen_test]
fn web_push_updates_location_and_strips_base() {
    let original = current_href();
    let history = BrowserHistory::web("/shop").unwrap();

    history.push("/new-page?x=1#h").unwrap();
    assert_eq!(pathname(), "/shop/new-page");
    assert_eq!(history.location(), "/new-page?x=1#h");
    // Sin base el prefijo forma parte de la ubicación
    assert_eq!(BrowserHistory::web("").unwrap().location(), "/shop/new-page?x=1#h");

    history.replace("/configurator").unwrap();
    assert_eq!(pathname(), "/shop/configurator");
    assert_eq!(history.location(), "/configurator");

    restore_href(&original);
    assert_eq!(current_href(), original);
}

#[wasm_bindgen_test]
fn hash_push_writes_behind_the_hash() {
    let original = current_href();
    let page = pathname();
    let history = BrowserHistory::hash("").unwrap();

    history.push("/configurator").unwrap();
    let location = web_sys::window().unwrap().location();
    assert_eq!(location.hash().unwrap(), "#/configurator");
    assert_eq!(pathname(), page);
    assert_eq!(history.location(), "/configurator");

    restore_href(&original);
    assert_eq!(current_href(), original);
}
