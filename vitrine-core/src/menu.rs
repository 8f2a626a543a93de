//! Mobile navigation menu.
//!
//! Opening is staged: the body class and ARIA state change at once, the
//! backdrop, content shift and trigger activate on the next animation frame,
//! and the panel slides in a few milliseconds later. The host runs the
//! staged steps with the [`OpenTicket`] returned by [`Menu::open`]; steps
//! for a superseded ticket do nothing.

use vitrine_config::{ClassNames, Selectors};

use crate::error::{BindError, Result};
use crate::host::Dom;

const COMPONENT: &str = "menu";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// Identifies one opening. Invalidated by the next close.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenTicket(u64);

/// Pure open/closed bookkeeping.
#[derive(Debug, Clone, Default)]
pub struct MenuMachine {
    state: MenuState,
    generation: u64,
}

impl MenuMachine {
    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == MenuState::Open
    }

    /// `None` when already open.
    pub fn open(&mut self) -> Option<OpenTicket> {
        match self.state {
            MenuState::Open => None,
            MenuState::Closed => {
                self.state = MenuState::Open;
                self.generation = self.generation.wrapping_add(1);
                Some(OpenTicket(self.generation))
            }
        }
    }

    /// Returns `false` when already closed.
    pub fn close(&mut self) -> bool {
        match self.state {
            MenuState::Closed => false,
            MenuState::Open => {
                self.state = MenuState::Closed;
                true
            }
        }
    }

    /// Whether a staged step for `ticket` should still run.
    pub fn is_current(&self, ticket: OpenTicket) -> bool {
        self.state == MenuState::Open && ticket.0 == self.generation
    }
}

#[derive(Debug)]
pub struct Menu<D: Dom> {
    trigger: D::Element,
    panel: D::Element,
    content: D::Element,
    backdrop: D::Element,
    body: Option<D::Element>,
    links: Vec<D::Element>,
    classes: ClassNames,
    machine: MenuMachine,
}

impl<D: Dom> Menu<D> {
    /// Requires the trigger, the panel and the main content wrapper. The
    /// backdrop is created by the page.
    pub fn bind(
        dom: &D,
        selectors: &Selectors,
        classes: &ClassNames,
        backdrop: D::Element,
    ) -> Result<Self> {
        let find = |selector: &str| {
            dom.query(selector)
                .ok_or_else(|| BindError::missing(COMPONENT, selector))
        };
        let trigger = find(&selectors.hamburger)?;
        let panel = find(&selectors.mobile_menu)?;
        let content = find(&selectors.main_content)?;

        Ok(Self {
            trigger,
            panel,
            content,
            backdrop,
            body: dom.body(),
            links: dom.query_all(&selectors.menu_link),
            classes: classes.clone(),
            machine: MenuMachine::default(),
        })
    }

    pub fn state(&self) -> MenuState {
        self.machine.state()
    }

    pub fn is_open(&self) -> bool {
        self.machine.is_open()
    }

    pub fn trigger(&self) -> &D::Element {
        &self.trigger
    }

    pub fn backdrop(&self) -> &D::Element {
        &self.backdrop
    }

    pub fn links(&self) -> &[D::Element] {
        &self.links
    }

    /// Synchronous first stage of opening. `None` when already open.
    pub fn open(&mut self, dom: &D) -> Option<OpenTicket> {
        let ticket = self.machine.open()?;
        if let Some(body) = &self.body {
            dom.add_class(body, &self.classes.menu_open);
        }
        dom.set_attribute(&self.panel, "aria-hidden", "false");
        dom.set_attribute(&self.trigger, "aria-expanded", "true");
        log::debug!("{COMPONENT}: open");
        Some(ticket)
    }

    /// Animation-frame stage: backdrop, content shift and trigger.
    pub fn activate_chrome(&self, dom: &D, ticket: OpenTicket) -> bool {
        if !self.machine.is_current(ticket) {
            return false;
        }
        dom.add_class(&self.backdrop, &self.classes.active);
        dom.add_class(&self.content, &self.classes.shift);
        dom.add_class(&self.trigger, &self.classes.active);
        true
    }

    /// Delayed stage: the panel itself.
    pub fn activate_panel(&self, dom: &D, ticket: OpenTicket) -> bool {
        if !self.machine.is_current(ticket) {
            return false;
        }
        dom.add_class(&self.panel, &self.classes.active);
        true
    }

    /// Undoes every stage at once. Returns `false` when already closed.
    pub fn close(&mut self, dom: &D) -> bool {
        if !self.machine.close() {
            return false;
        }
        dom.remove_class(&self.panel, &self.classes.active);
        dom.remove_class(&self.backdrop, &self.classes.active);
        dom.remove_class(&self.content, &self.classes.shift);
        dom.remove_class(&self.trigger, &self.classes.active);
        if let Some(body) = &self.body {
            dom.remove_class(body, &self.classes.menu_open);
        }
        dom.set_attribute(&self.panel, "aria-hidden", "true");
        dom.set_attribute(&self.trigger, "aria-expanded", "false");
        log::debug!("{COMPONENT}: closed");
        true
    }

    /// Opens a closed menu or closes an open one. Returns the ticket when it
    /// opened.
    pub fn toggle(&mut self, dom: &D) -> Option<OpenTicket> {
        if self.is_open() {
            self.close(dom);
            None
        } else {
            self.open(dom)
        }
    }
}
