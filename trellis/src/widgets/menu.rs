//! DropdownMenu widget - a trigger that shows a list of items.
//!
//! Two listeners cooperate while the menu is open:
//! - a click handler on the menu container handles clicks inside it
//!   (trigger toggles, body clicks close when `close_on_select` is set)
//! - a document-level subscription scoped to the container closes the menu
//!   on any pointer-down or click outside it
//!
//! The subscription is created by the click that opens the menu. Because
//! subscriptions made during a dispatch stay pending until it ends, that
//! click never reaches it.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use markdom::{Element, EventKind, IdScope, Tag};
use serde::{Deserialize, Serialize};

use crate::config::{MenuOptions, PassThrough};
use crate::handler_context::{HandlerContext, Listener};
use crate::runtime::{DocumentListeners, Subscription};
use crate::{HandlerRegistry, State};

static NEXT_MENU_ID: AtomicU64 = AtomicU64::new(1);

/// Stable element id of a menu's container, `__menu_<n>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MenuId(u64);

impl MenuId {
    fn next() -> Self {
        Self(NEXT_MENU_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl std::fmt::Display for MenuId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__menu_{}", self.0)
    }
}

/// Which edge of the container the dropdown lines up with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DropdownAlignment {
    #[default]
    Left,
    Right,
}

impl DropdownAlignment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    fn width_classes(&self) -> &'static str {
        match self {
            Self::Left => "max-w-full w-full",
            Self::Right => "max-w-content",
        }
    }
}

#[derive(Debug, Default)]
struct MenuState {
    open: bool,
    /// Outside-click listener; present exactly while open.
    subscription: Option<Subscription>,
}

// =============================================================================
// DropdownMenu
// =============================================================================

/// A dropdown menu.
///
/// Keep the same `DropdownMenu` across renders and call [`build`](Self::build)
/// from the view each time. Clones share the open state.
///
/// # Example
///
/// ```ignore
/// let trigger = Pill::new("Sort").build(registry);
/// let items = vec![
///     MenuItem::text("Newest").on_click(sort_newest).build(registry),
///     MenuItem::text("Oldest").on_click(sort_oldest).build(registry),
/// ];
/// self.menu.build(registry, trigger, items)
/// ```
#[derive(Clone)]
pub struct DropdownMenu {
    id: MenuId,
    state: State<MenuState>,
    close_on_select: bool,
    alignment: DropdownAlignment,
    class: Option<String>,
}

impl Default for DropdownMenu {
    fn default() -> Self {
        Self::new()
    }
}

impl DropdownMenu {
    pub fn new() -> Self {
        Self {
            id: MenuId::next(),
            state: State::default(),
            close_on_select: true,
            alignment: DropdownAlignment::default(),
            class: None,
        }
    }

    pub fn from_options(options: MenuOptions) -> Self {
        let mut menu = Self::new()
            .close_on_select(options.close_on_select)
            .dropdown_alignment(options.dropdown_alignment);
        menu.class = options.class_name;
        menu
    }

    /// Close on every click inside the menu (default `true`).
    pub fn close_on_select(mut self, close: bool) -> Self {
        self.close_on_select = close;
        self
    }

    pub fn dropdown_alignment(mut self, alignment: DropdownAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn id(&self) -> &MenuId {
        &self.id
    }

    pub fn is_open(&self) -> bool {
        self.state.with(|s| s.open)
    }

    /// Build the menu around `trigger`, showing `children` while open.
    ///
    /// The trigger is placed unchanged; handlers registered on it keep firing.
    pub fn build(
        &self,
        registry: &HandlerRegistry,
        trigger: Element,
        children: Vec<Element>,
    ) -> Element {
        let container_id = self.id.to_string();
        let open = self.is_open();
        log::debug!(
            "DropdownMenu::build id={} open={} items={}",
            container_id,
            open,
            children.len()
        );

        let trigger_id = trigger.id.clone();
        // The body exists only while open; its ids live in the container's
        // scope so opening and closing leaves the rest of the page's ids alone.
        let body = open.then(|| {
            let _ids = IdScope::enter(&container_id);
            let list = Element::new(Tag::Ul).class("menu-list").children(children);
            let dropdown = Element::div()
                .class("menu absolute")
                .class(format!("{}-0", self.alignment.as_str()))
                .class("mt-1")
                .class(self.alignment.width_classes())
                .class("whitespace-nowrap z-10")
                .data("align", self.alignment.as_str())
                .child(list);
            Element::div().class("menu-container").child(dropdown)
        });
        let body_id = body.as_ref().map(|b| b.id.clone());

        let menu = self.clone();
        registry.on_click(&container_id, move |cx| {
            if !cx.event().is_primary() {
                return;
            }
            let Some(target) = cx.target() else {
                return;
            };
            let document = cx.document();
            if document.contains(&trigger_id, target) {
                if menu.is_open() {
                    menu.close("trigger");
                } else {
                    menu.open(cx.listeners());
                }
            } else if body_id
                .as_deref()
                .is_some_and(|body| document.contains(body, target))
                && menu.close_on_select
                && menu.is_open()
            {
                menu.close("select");
            }
        });

        let mut container = Element::div()
            .id(container_id)
            .class("relative inline-block")
            .data("open", open.to_string());
        if let Some(class) = &self.class {
            container = container.class(class.as_str());
        }
        container.child(trigger).maybe_child(body)
    }

    fn open(&self, listeners: &DocumentListeners) {
        let scope = self.id.to_string();
        log::debug!("DropdownMenu::open id={}", scope);

        let menu = self.clone();
        let listener: Listener = Arc::new(move |cx| {
            if !menu.is_outside(cx) {
                return false;
            }
            menu.close("outside");
            true
        });
        let state = self.state.clone();
        let subscription = listeners
            .subscribe(scope, &[EventKind::PointerDown, EventKind::Click], listener)
            .on_detach(move || close_state(&state));

        let mut previous = None;
        self.state.update(|s| {
            s.open = true;
            previous = s.subscription.replace(subscription);
        });
        drop(previous);
    }

    fn close(&self, reason: &str) {
        log::debug!("DropdownMenu::close id={} reason={}", self.id, reason);
        close_state(&self.state);
    }

    /// Whether the event landed outside this menu's container.
    fn is_outside(&self, cx: &HandlerContext) -> bool {
        let document = cx.document();
        let container = self.id.to_string();
        if !document.is_connected(&container) {
            return false;
        }
        match cx.target() {
            None => true,
            Some(target) if !document.is_connected(target) => false,
            Some(target) => !document.contains(&container, target),
        }
    }
}

/// Mark closed and release the listener outside the state lock.
fn close_state(state: &State<MenuState>) {
    let mut released = None;
    state.update(|s| {
        s.open = false;
        released = s.subscription.take();
    });
    drop(released);
}

impl std::fmt::Debug for DropdownMenu {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DropdownMenu")
            .field("id", &self.id)
            .field("open", &self.is_open())
            .field("close_on_select", &self.close_on_select)
            .field("alignment", &self.alignment)
            .finish()
    }
}

// =============================================================================
// MenuItem
// =============================================================================

/// A list item for a dropdown menu. Knows nothing about the menu itself.
#[derive(Clone)]
pub struct MenuItem {
    content: Element,
    on_click: Option<Arc<dyn Fn() + Send + Sync>>,
    attrs: PassThrough,
}

impl MenuItem {
    pub fn new(content: Element) -> Self {
        Self {
            content,
            on_click: None,
            attrs: PassThrough::default(),
        }
    }

    /// An item showing plain text.
    pub fn text(label: impl Into<String>) -> Self {
        Self::new(Element::text(label))
    }

    pub fn on_click(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_click = Some(Arc::new(f));
        self
    }

    pub fn attrs(mut self, attrs: PassThrough) -> Self {
        self.attrs = attrs;
        self
    }

    pub fn build(self, registry: &HandlerRegistry) -> Element {
        let item = self
            .attrs
            .apply(Element::new(Tag::Li).class("cursor-pointer"))
            .child(self.content);
        if let Some(on_click) = self.on_click {
            registry.on_click(&item.id, move |_| on_click());
        }
        item
    }
}
