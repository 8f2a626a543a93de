//! Event wiring between the browser and [`Page`].

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Context;
use gloo::events::{EventListener, EventListenerOptions};
use gloo::render::{AnimationFrame, request_animation_frame};
use gloo::timers::callback::Timeout;
use vitrine_core::decor::Hover;
use vitrine_core::{OpenTicket, Page, ScrollDecision};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlImageElement};

use crate::config;
use crate::dom::WebDom;
use crate::observer::Observer;

const HOVER_EVENTS: [(&str, Hover); 2] =
    [("mouseenter", Hover::Enter), ("mouseleave", Hover::Leave)];

thread_local! {
    static RUNTIME: RefCell<Option<Rc<Runtime>>> = const { RefCell::new(None) };
}

/// Builds the runtime now or once the document has been parsed.
pub fn boot() -> anyhow::Result<()> {
    let window = web_sys::window().context("no global window")?;
    let host = WebDom::new(window)?;

    if host.document().ready_state() == "loading" {
        let document = host.document().clone();
        let waiting =
            EventListener::once(&document, "DOMContentLoaded", move |_| {
                Runtime::install(host);
            });
        waiting.forget();
    } else {
        Runtime::install(host);
    }
    Ok(())
}

/// Owns the page and every browser handle feeding it. Dropping a handle
/// cancels it, so pending frames and timeouts live in slots here.
pub struct Runtime {
    host: WebDom,
    page: RefCell<Page<WebDom>>,
    listeners: RefCell<Vec<EventListener>>,
    observers: RefCell<Vec<Observer>>,
    scroll_frame: RefCell<Option<AnimationFrame>>,
    resize_timer: RefCell<Option<Timeout>>,
    menu_frame: RefCell<Option<AnimationFrame>>,
    menu_timer: RefCell<Option<Timeout>>,
    fade_timer: RefCell<Option<Timeout>>,
}

impl Runtime {
    fn install(host: WebDom) {
        let loaded = config::load(host.document());
        let page = Page::ready(&host, loaded.config);
        let already_loaded =
            host.document().ready_state() == "complete";

        let runtime = Rc::new(Self {
            host,
            page: RefCell::new(page),
            listeners: RefCell::new(Vec::new()),
            observers: RefCell::new(Vec::new()),
            scroll_frame: RefCell::new(None),
            resize_timer: RefCell::new(None),
            menu_frame: RefCell::new(None),
            menu_timer: RefCell::new(None),
            fade_timer: RefCell::new(None),
        });

        runtime.install_window_listeners();
        runtime.install_click_listeners();
        runtime.install_hover_listeners();
        runtime.install_observers();
        if already_loaded {
            runtime.on_load();
        }

        RUNTIME.with(|slot| *slot.borrow_mut() = Some(runtime));
    }

    fn listen(&self, listener: EventListener) {
        self.listeners.borrow_mut().push(listener);
    }

    fn install_window_listeners(self: &Rc<Self>) {
        let window = self.host.window().clone();

        let runtime = Rc::clone(self);
        self.listen(EventListener::new(&window, "scroll", move |_| {
            runtime.on_scroll();
        }));

        let runtime = Rc::clone(self);
        self.listen(EventListener::new(&window, "resize", move |_| {
            runtime.on_resize();
        }));

        let runtime = Rc::clone(self);
        self.listen(EventListener::once(&window, "load", move |_| {
            runtime.on_load();
        }));
    }

    fn install_click_listeners(self: &Rc<Self>) {
        let page = self.page.borrow();

        if let Some(menu) = page.menu() {
            let runtime = Rc::clone(self);
            self.on_click(menu.trigger(), move |_| runtime.on_hamburger());

            let closers = std::iter::once(menu.backdrop()).chain(menu.links());
            for element in closers {
                let runtime = Rc::clone(self);
                self.on_click(element, move |_| {
                    runtime.page.borrow_mut().close_menu(&runtime.host);
                });
            }
        }

        if let Some(gallery) = page.gallery() {
            let runtime = Rc::clone(self);
            self.on_click(gallery.prev_button(), move |_| {
                runtime.page.borrow_mut().on_gallery_prev(&runtime.host);
            });
            let runtime = Rc::clone(self);
            self.on_click(gallery.next_button(), move |_| {
                runtime.page.borrow_mut().on_gallery_next(&runtime.host);
            });
        }

        if let Some(awards) = page.awards() {
            let runtime = Rc::clone(self);
            self.on_click(awards.prev_button(), move |_| {
                runtime.page.borrow_mut().on_awards_prev(&runtime.host);
            });
            let runtime = Rc::clone(self);
            self.on_click(awards.next_button(), move |_| {
                runtime.page.borrow_mut().on_awards_next(&runtime.host);
            });
        }

        if let Some(button) = page.scroll_top_button() {
            let runtime = Rc::clone(self);
            self.on_click(button, move |event| {
                event.prevent_default();
                runtime.page.borrow().on_scroll_top_click(&runtime.host);
            });
        }

        for anchor in page.anchors() {
            let runtime = Rc::clone(self);
            let link = anchor.clone();
            self.on_click(anchor, move |event| {
                let href = link.get_attribute("href").unwrap_or_default();
                if runtime.page.borrow().on_anchor_click(&runtime.host, &href) {
                    event.prevent_default();
                }
            });
        }
    }

    fn on_click(
        &self,
        element: &Element,
        handler: impl FnMut(&Event) + 'static,
    ) {
        self.listen(EventListener::new_with_options(
            element,
            "click",
            EventListenerOptions::enable_prevent_default(),
            handler,
        ));
    }

    fn install_hover_listeners(self: &Rc<Self>) {
        let page = self.page.borrow();
        for (element, _) in page.hover().targets() {
            for (event, hover) in HOVER_EVENTS {
                let runtime = Rc::clone(self);
                let target = element.clone();
                self.listen(EventListener::new(element, event, move |_| {
                    let page = runtime.page.borrow();
                    page.on_hover(&runtime.host, &target, hover);
                }));
            }
        }
    }

    /// Failing to build an observer never leaves content hidden: sections
    /// are shown outright and images keep their natural opacity.
    fn install_observers(self: &Rc<Self>) {
        let sections = self.observe_sections();
        if sections.is_none() {
            self.page.borrow_mut().reveal_all_sections(&self.host);
        }
        let images = self.observe_images();
        self.observers.borrow_mut().extend(sections.into_iter().chain(images));
    }

    fn observe_sections(self: &Rc<Self>) -> Option<Observer> {
        let page = self.page.borrow();
        let runtime = Rc::clone(self);
        let observer = Observer::new(page.sections().options(), move |target| {
            runtime
                .page
                .borrow_mut()
                .on_section_intersect(&runtime.host, target)
        })
        .inspect_err(|err| log::warn!("section fade-in disabled: {err:#}"))
        .ok()?;
        for section in page.sections().sections() {
            observer.observe(section);
        }
        Some(observer)
    }

    fn observe_images(self: &Rc<Self>) -> Option<Observer> {
        let page = self.page.borrow();
        let runtime = Rc::clone(self);
        let observer = Observer::new(page.images().options(), move |target| {
            let complete = target
                .dyn_ref::<HtmlImageElement>()
                .is_some_and(HtmlImageElement::complete);
            runtime
                .page
                .borrow_mut()
                .on_image_intersect(&runtime.host, target, complete)
        })
        .inspect_err(|err| log::warn!("lazy image fade disabled: {err:#}"))
        .ok()?;
        for image in page.images().images() {
            observer.observe(image);
            let runtime = Rc::clone(self);
            let target = image.clone();
            self.listen(EventListener::new(image, "load", move |_| {
                runtime.page.borrow().on_image_loaded(&runtime.host, &target);
            }));
        }
        Some(observer)
    }

    fn on_scroll(self: &Rc<Self>) {
        let decision = self.page.borrow_mut().on_scroll();
        if decision != ScrollDecision::ScheduleFrame {
            return;
        }
        let runtime = Rc::clone(self);
        let frame = request_animation_frame(move |_| {
            runtime.scroll_frame.borrow_mut().take();
            runtime.page.borrow_mut().on_frame(&runtime.host);
        });
        *self.scroll_frame.borrow_mut() = Some(frame);
    }

    fn on_resize(self: &Rc<Self>) {
        let (ticket, delay) = {
            let mut page = self.page.borrow_mut();
            (page.on_resize(&self.host), page.resize_delay_ms())
        };
        let runtime = Rc::clone(self);
        let timer = Timeout::new(delay, move || {
            runtime
                .page
                .borrow_mut()
                .on_resize_settled(&runtime.host, ticket);
        });
        // Replacing the slot cancels the previous timeout.
        *self.resize_timer.borrow_mut() = Some(timer);
    }

    fn on_load(self: &Rc<Self>) {
        let delay = {
            let mut page = self.page.borrow_mut();
            page.on_load(&self.host);
            page.page_fade_delay_ms()
        };
        let runtime = Rc::clone(self);
        let timer = Timeout::new(delay, move || {
            runtime.page.borrow().finish_page_fade(&runtime.host);
        });
        *self.fade_timer.borrow_mut() = Some(timer);
    }

    fn on_hamburger(self: &Rc<Self>) {
        let opened = self.page.borrow_mut().on_hamburger_click(&self.host);
        if let Some(ticket) = opened {
            self.stage_menu(ticket);
        }
    }

    fn stage_menu(self: &Rc<Self>, ticket: OpenTicket) {
        let runtime = Rc::clone(self);
        let frame = request_animation_frame(move |_| {
            let delay = {
                let page = runtime.page.borrow();
                if !page.on_menu_frame(&runtime.host, ticket) {
                    return;
                }
                page.menu_panel_delay_ms()
            };
            let inner = Rc::clone(&runtime);
            let timer = Timeout::new(delay, move || {
                inner.page.borrow().on_menu_panel_delay(&inner.host, ticket);
            });
            *runtime.menu_timer.borrow_mut() = Some(timer);
        });
        *self.menu_frame.borrow_mut() = Some(frame);
    }
}

impl std::fmt::Debug for Runtime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Runtime")
            .field("page", &self.page)
            .field("listeners", &self.listeners.borrow().len())
            .field("observers", &self.observers.borrow().len())
            .finish_non_exhaustive()
    }
}

