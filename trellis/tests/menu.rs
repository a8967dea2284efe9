use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicUsize, Ordering};

use markdom::{Element, Event};
use trellis::widgets::{DropdownAlignment, DropdownMenu, MenuItem, Pill, RadioGroup};
use trellis::{DispatchResult, HandlerRegistry, Runtime, State, View};

#[derive(Clone, Default)]
struct Counters {
    trigger: Arc<AtomicUsize>,
    item: Arc<AtomicUsize>,
}

impl Counters {
    fn trigger(&self) -> usize {
        self.trigger.load(Ordering::SeqCst)
    }

    fn item(&self) -> usize {
        self.item.load(Ordering::SeqCst)
    }
}

fn render_menu(
    r: &HandlerRegistry,
    menu: &DropdownMenu,
    name: &str,
    counters: &Counters,
) -> Element {
    let trigger_count = Arc::clone(&counters.trigger);
    let trigger = Pill::new("Menu")
        .id(format!("{name}-trigger"))
        .on_click(move || {
            trigger_count.fetch_add(1, Ordering::SeqCst);
        })
        .build(r);

    let item_count = Arc::clone(&counters.item);
    let items = vec![
        MenuItem::text("First")
            .on_click(move || {
                item_count.fetch_add(1, Ordering::SeqCst);
            })
            .build(r),
        MenuItem::text("Second").build(r),
    ];
    menu.build(r, trigger, items)
}

fn page(menu: &DropdownMenu, counters: &Counters) -> Runtime<impl View + use<>> {
    let menu = menu.clone();
    let counters = counters.clone();
    let mut rt = Runtime::new(move |r: &HandlerRegistry| {
        Element::div()
            .id("page")
            .child(render_menu(r, &menu, "menu", &counters))
            .child(Element::text("Elsewhere").id("elsewhere"))
    });
    rt.mount().unwrap();
    rt
}

fn first_item<V: View>(rt: &Runtime<V>) -> String {
    rt.find_id(".menu-list li").unwrap().unwrap()
}

// ============================================================================
// Trigger
// ============================================================================

#[test]
fn test_trigger_opens_and_closes() {
    let menu = DropdownMenu::new();
    let mut rt = page(&menu, &Counters::default());
    assert!(!menu.is_open());
    assert!(rt.find_id(".menu-container").unwrap().is_none());

    rt.click("menu-trigger").unwrap();
    assert!(menu.is_open());
    assert!(rt.find_id(".menu-container").unwrap().is_some());
    assert_eq!(rt.listeners().count_for(&menu.id().to_string()), 1);
    assert_eq!(rt.listeners().active_len(), 1);

    rt.click("menu-trigger").unwrap();
    assert!(!menu.is_open());
    assert!(rt.find_id(".menu-container").unwrap().is_none());
    assert!(rt.listeners().is_empty());
}

#[test]
fn test_trigger_toggles_without_close_on_select() {
    let menu = DropdownMenu::new().close_on_select(false);
    let mut rt = page(&menu, &Counters::default());

    rt.click("menu-trigger").unwrap();
    assert!(menu.is_open());
    rt.click("menu-trigger").unwrap();
    assert!(!menu.is_open());
}

#[test]
fn test_trigger_handler_still_fires() {
    let menu = DropdownMenu::new();
    let counters = Counters::default();
    let mut rt = page(&menu, &counters);

    rt.click("menu-trigger").unwrap();
    assert_eq!(counters.trigger(), 1);
    assert!(menu.is_open());

    rt.click("menu-trigger").unwrap();
    assert_eq!(counters.trigger(), 2);
    assert!(!menu.is_open());

    rt.click("menu-trigger").unwrap();
    assert_eq!(counters.trigger(), 3);
    assert!(menu.is_open());
}

#[test]
fn test_secondary_button_is_ignored() {
    let menu = DropdownMenu::new();
    let mut rt = page(&menu, &Counters::default());

    rt.dispatch(Event::Click {
        target: Some("menu-trigger".into()),
        button: markdom::MouseButton::Right,
    })
    .unwrap();
    assert!(!menu.is_open());
}

// ============================================================================
// Outside clicks
// ============================================================================

#[test]
fn test_outside_click_closes_regardless_of_policy() {
    for close_on_select in [true, false] {
        let menu = DropdownMenu::new().close_on_select(close_on_select);
        let mut rt = page(&menu, &Counters::default());

        rt.click("menu-trigger").unwrap();
        assert!(menu.is_open());

        rt.click("elsewhere").unwrap();
        assert!(!menu.is_open(), "close_on_select={close_on_select}");
        assert!(rt.listeners().is_empty());
        assert!(rt.find_id(".menu-container").unwrap().is_none());
    }
}

#[test]
fn test_outside_click_still_reaches_its_target() {
    let menu = DropdownMenu::new();
    let picked = Arc::new(Mutex::new(Vec::new()));
    let mut rt = {
        let menu = menu.clone();
        let picked = Arc::clone(&picked);
        let counters = Counters::default();
        Runtime::new(move |r: &HandlerRegistry| {
            let picked = Arc::clone(&picked);
            Element::div()
                .id("page")
                .child(render_menu(r, &menu, "menu", &counters))
                .child(
                    RadioGroup::new("a")
                        .options([("a", "Alpha"), ("b", "Beta")].into_iter().collect())
                        .on_change(move |key| picked.lock().unwrap().push(key))
                        .build(r),
                )
        })
    };
    rt.mount().unwrap();
    let beta = rt
        .document()
        .select_all(".pill")
        .unwrap()
        .into_iter()
        .find(|pill| pill.text_content() == "Beta")
        .map(|pill| pill.id.clone())
        .unwrap();

    rt.click("menu-trigger").unwrap();
    assert!(menu.is_open());

    assert!(rt.click(&beta).unwrap().is_handled());
    assert!(!menu.is_open());
    assert_eq!(*picked.lock().unwrap(), ["b"]);
    assert!(rt.listeners().is_empty());
}

#[test]
fn test_background_click_closes() {
    let menu = DropdownMenu::new();
    let mut rt = page(&menu, &Counters::default());

    rt.click("menu-trigger").unwrap();
    rt.click_outside().unwrap();
    assert!(!menu.is_open());
}

#[test]
fn test_pointer_down_outside_is_enough() {
    let menu = DropdownMenu::new();
    let mut rt = page(&menu, &Counters::default());

    rt.click("menu-trigger").unwrap();
    assert_eq!(
        rt.dispatch(Event::pointer_down("elsewhere")).unwrap(),
        DispatchResult::Handled(1)
    );
    assert!(!menu.is_open());
}

#[test]
fn test_opening_click_is_not_seen_as_outside() {
    let menu = DropdownMenu::new();
    let mut rt = page(&menu, &Counters::default());

    // Only the click: the subscription it creates must not observe it.
    rt.dispatch(Event::click("menu-trigger")).unwrap();
    assert!(menu.is_open());
    assert_eq!(rt.listeners().active_len(), 1);
}

// ============================================================================
// Items
// ============================================================================

#[test]
fn test_item_click_closes_with_close_on_select() {
    let menu = DropdownMenu::new();
    let counters = Counters::default();
    let mut rt = page(&menu, &counters);

    rt.click("menu-trigger").unwrap();
    let item = first_item(&rt);
    rt.click(&item).unwrap();

    assert_eq!(counters.item(), 1);
    assert!(!menu.is_open());
    assert!(rt.listeners().is_empty());
}

#[test]
fn test_item_click_keeps_open_without_close_on_select() {
    let menu = DropdownMenu::new().close_on_select(false);
    let counters = Counters::default();
    let mut rt = page(&menu, &counters);

    rt.click("menu-trigger").unwrap();
    let item = first_item(&rt);
    rt.click(&item).unwrap();
    rt.click(&item).unwrap();

    assert_eq!(counters.item(), 2);
    assert!(menu.is_open());
    assert_eq!(rt.listeners().len(), 1);
}

#[test]
fn test_pointer_down_inside_leaves_page_alone() {
    let menu = DropdownMenu::new();
    let counters = Counters::default();
    let mut rt = page(&menu, &counters);

    rt.click("menu-trigger").unwrap();
    let item = first_item(&rt);

    assert_eq!(
        rt.dispatch(Event::pointer_down(item.as_str())).unwrap(),
        DispatchResult::NotHandled
    );
    assert!(rt.document().is_connected(&item));
    assert!(rt.dispatch(Event::click(item.as_str())).unwrap().is_handled());
    assert_eq!(counters.item(), 1);
    assert!(!menu.is_open());
}

#[test]
fn test_item_ids_are_stable_while_open() {
    let menu = DropdownMenu::new().close_on_select(false);
    let mut rt = page(&menu, &Counters::default());

    rt.click("menu-trigger").unwrap();
    let item = first_item(&rt);
    rt.refresh().unwrap();
    assert_eq!(first_item(&rt), item);
}

#[test]
fn test_generated_trigger_id_toggles() {
    let menu = DropdownMenu::new();
    let mut rt = {
        let menu = menu.clone();
        Runtime::new(move |r: &HandlerRegistry| {
            let trigger = Pill::new("Menu").build(r);
            let items = vec![MenuItem::text("Only").build(r)];
            Element::div().id("page").child(menu.build(r, trigger, items))
        })
    };
    rt.mount().unwrap();
    let trigger = rt.find_id(".pill").unwrap().unwrap();

    rt.click(&trigger).unwrap();
    assert!(menu.is_open());
    assert_eq!(rt.find_id(".pill").unwrap().unwrap(), trigger);

    rt.click(&trigger).unwrap();
    assert!(!menu.is_open());
}

#[test]
fn test_stale_item_is_ignored() {
    let menu = DropdownMenu::new();
    let counters = Counters::default();
    let mut rt = page(&menu, &counters);

    rt.click("menu-trigger").unwrap();
    let item = first_item(&rt);
    rt.click("menu-trigger").unwrap();

    assert_eq!(
        rt.dispatch(Event::click(item)).unwrap(),
        DispatchResult::StaleTarget
    );
    assert_eq!(counters.item(), 0);
    assert!(!menu.is_open());
}

// ============================================================================
// Lifecycle
// ============================================================================

#[test]
fn test_unmount_while_open_removes_listener() {
    let menu = DropdownMenu::new();
    let counters = Counters::default();
    let mut rt = page(&menu, &counters);
    let listeners = rt.listeners().clone();

    rt.click("menu-trigger").unwrap();
    assert_eq!(listeners.len(), 1);

    rt.unmount();
    assert!(listeners.is_empty());
    assert!(!menu.is_open());

    assert_eq!(rt.click_outside().unwrap(), DispatchResult::NotMounted);
    assert_eq!(rt.click("elsewhere").unwrap(), DispatchResult::NotMounted);
    assert_eq!(counters.item(), 0);
    assert_eq!(rt.to_html(), "");
}

#[test]
fn test_drop_while_open_removes_listener() {
    let menu = DropdownMenu::new();
    let mut rt = page(&menu, &Counters::default());
    let listeners = rt.listeners().clone();

    rt.click("menu-trigger").unwrap();
    drop(rt);

    assert!(listeners.is_empty());
    assert!(!menu.is_open());
}

#[test]
fn test_detached_menu_closes() {
    let menu = DropdownMenu::new();
    let shown = State::new(true);
    let counters = Counters::default();

    let mut rt = {
        let menu = menu.clone();
        let shown = shown.clone();
        Runtime::new(move |r: &HandlerRegistry| {
            let page = Element::div().id("page");
            if shown.get() {
                page.child(render_menu(r, &menu, "menu", &counters))
            } else {
                page
            }
        })
    };
    rt.mount().unwrap();

    rt.click("menu-trigger").unwrap();
    assert!(menu.is_open());

    shown.set(false);
    rt.refresh().unwrap();
    assert!(!menu.is_open());
    assert!(rt.listeners().is_empty());

    // Re-attached menus come back closed.
    shown.set(true);
    rt.refresh().unwrap();
    assert!(rt.find_id(".menu-container").unwrap().is_none());
}

#[test]
fn test_two_menus_are_independent() {
    let a = DropdownMenu::new();
    let b = DropdownMenu::new();
    let counters = Counters::default();

    let mut rt = {
        let (a, b) = (a.clone(), b.clone());
        Runtime::new(move |r: &HandlerRegistry| {
            Element::div()
                .id("page")
                .child(render_menu(r, &a, "a", &counters))
                .child(render_menu(r, &b, "b", &counters))
        })
    };
    rt.mount().unwrap();

    rt.click("a-trigger").unwrap();
    assert!(a.is_open());
    assert!(!b.is_open());

    rt.click("b-trigger").unwrap();
    assert!(!a.is_open());
    assert!(b.is_open());
    assert_eq!(rt.listeners().count_for(&a.id().to_string()), 0);
    assert_eq!(rt.listeners().count_for(&b.id().to_string()), 1);
    assert_eq!(rt.listeners().len(), 1);
}

// ============================================================================
// Markup
// ============================================================================

#[test]
fn test_left_alignment_markup() {
    let menu = DropdownMenu::new().class("account");
    let mut rt = page(&menu, &Counters::default());
    rt.click("menu-trigger").unwrap();

    let container = rt.document().get(&menu.id().to_string()).unwrap();
    assert!(container.has_class("relative"));
    assert!(container.has_class("inline-block"));
    assert!(container.has_class("account"));
    assert_eq!(container.get_data("open").map(String::as_str), Some("true"));

    let dropdown = rt.document().select(".menu-container .menu").unwrap().unwrap();
    for class in ["absolute", "left-0", "mt-1", "max-w-full", "w-full", "whitespace-nowrap", "z-10"] {
        assert!(dropdown.has_class(class), "missing {class}");
    }
    assert_eq!(dropdown.get_data("align").map(String::as_str), Some("left"));
}

#[test]
fn test_right_alignment_markup() {
    let menu = DropdownMenu::new().dropdown_alignment(DropdownAlignment::Right);
    let mut rt = page(&menu, &Counters::default());
    rt.click("menu-trigger").unwrap();

    let dropdown = rt.document().select(".menu").unwrap().unwrap();
    assert!(dropdown.has_class("right-0"));
    assert!(dropdown.has_class("max-w-content"));
    assert!(!dropdown.has_class("w-full"));
}

#[test]
fn test_trigger_is_rendered_unchanged() {
    let menu = DropdownMenu::new();
    let rt = page(&menu, &Counters::default());

    let trigger = rt.document().get("menu-trigger").unwrap();
    assert!(trigger.has_class("pill"));
    assert_eq!(trigger.text_content(), "Menu");
    assert_eq!(
        rt.document().parent("menu-trigger"),
        Some(menu.id().to_string().as_str())
    );
}

#[test]
fn test_menu_item_markup() {
    let registry = HandlerRegistry::new();
    let item = MenuItem::text("Logout").build(&registry);
    assert_eq!(item.tag, markdom::Tag::Li);
    assert!(item.has_class("cursor-pointer"));
    assert_eq!(item.text_content(), "Logout");
    assert!(registry.is_empty());
}
