//! Dashboard root component (`helpdesk desk`)
//!
//! Holds the `DeskModel` in iocraft state and acts as its driver: effects the
//! model emits are queued, drained on the next render into an async handler
//! that talks to the service, and the outcomes are fed back into the model.
//! A background ticker fires the debounce timers.

use std::time::{Duration, Instant};

use iocraft::prelude::*;

use crate::api::ApiClient;
use crate::config::Timing;
use crate::desk::{DeskModel, Effect, StatsView, run_effect};
use crate::tui::components::{
    Footer, Header, Toast, form_shortcuts, list_shortcuts, render_toast, search_shortcuts,
};
use crate::tui::form::TicketFormModal;
use crate::tui::keymap::{Mode, key_to_action};
use crate::tui::list_pane::{CARD_HEIGHT, TicketListPane};
use crate::tui::state::{Pane, UiState};
use crate::tui::stats_panel::StatsPanel;
use crate::tui::theme::theme;

/// Timer resolution for debounces and toast expiry
const TICK: Duration = Duration::from_millis(50);

/// Rows taken by everything except the cards: header, footer, list title,
/// search box, filter row and an error banner
const CHROME_ROWS: usize = 10;

/// Props for the DeskApp component
#[derive(Default, Props)]
pub struct DeskAppProps {
    /// Service client; without one the dashboard only shows an error
    pub api: Option<ApiClient>,
    pub timing: Timing,
    /// Service origin shown in the header
    pub origin: Option<String>,
}

/// Layout:
/// ```text
/// +------------------------------------------+
/// | Header                                   |
/// +----------------------------+-------------+
/// | Support Tickets (3)        | Statistics  |
/// | / search                   |             |
/// | [c] ... [p] ... [t] ...    | Total  12   |
/// | TicketCard                 | Open    4   |
/// | TicketCard                 | ...         |
/// +----------------------------+-------------+
/// | Footer                                   |
/// +------------------------------------------+
/// ```
#[component]
pub fn DeskApp<'a>(props: &DeskAppProps, mut hooks: Hooks) -> impl Into<AnyElement<'a>> {
    let (width, height) = hooks.use_terminal_size();
    let mut system = hooks.use_context_mut::<SystemContext>();

    let timing = props.timing;
    let mut model: State<DeskModel> = hooks.use_state(move || DeskModel::new(timing));
    let mut ui: State<UiState> = hooks.use_state(UiState::default);
    let mut queue: State<Vec<Effect>> = hooks.use_state(Vec::new);
    let mut toast: State<Option<Toast>> = hooks.use_state(|| None);
    let mut mounted = hooks.use_state(|| false);

    let visible_cards = ((height as usize).saturating_sub(CHROME_ROWS) / CARD_HEIGHT).max(1);

    // Sends one request and folds the response back into the model
    let effect_handler: Handler<Effect> = hooks.use_async_handler({
        let api = props.api.clone();
        move |effect: Effect| {
            let api = api.clone();
            let mut model = model;
            let mut queue = queue;
            let mut toast = toast;
            let mut ui = ui;

            async move {
                let Some(api) = api else {
                    return;
                };
                let outcome = run_effect(&api, effect).await;

                let (follow_up, created) = {
                    let mut desk = model.write();
                    let follow_up = desk.apply(outcome);
                    (follow_up, desk.take_created())
                };
                if !follow_up.is_empty() {
                    queue.write().extend(follow_up);
                }
                if let Some(ticket) = created {
                    toast.set(Some(Toast::new(
                        format!("Created ticket #{}: {}", ticket.id, ticket.title),
                        Instant::now(),
                    )));
                    ui.write().form_open = false;
                }
            }
        }
    });

    // Debounce timers and toast expiry
    hooks.use_future(async move {
        loop {
            tokio::time::sleep(TICK).await;
            let now = Instant::now();

            let due = model.read().next_deadline().is_some_and(|at| at <= now);
            if due {
                let effects = model.write().tick(now);
                if !effects.is_empty() {
                    queue.write().extend(effects);
                }
            }

            let expired = toast.read().as_ref().is_some_and(|t| t.is_expired(now));
            if expired {
                toast.set(None);
            }
        }
    });

    if !mounted.get() {
        mounted.set(true);
        let effects = model.write().mount();
        queue.write().extend(effects);
    }

    if !queue.read().is_empty() {
        let effects = std::mem::take(&mut *queue.write());
        for effect in effects {
            effect_handler(effect);
        }
    }

    hooks.use_terminal_events(move |event| {
        if let TerminalEvent::Key(KeyEvent {
            code,
            kind,
            modifiers,
            ..
        }) = event
        {
            if kind == KeyEventKind::Release {
                return;
            }
            let mode = ui.read().mode();
            let Some(key) = key_to_action(code, modifiers, mode) else {
                return;
            };

            let action = {
                let desk = model.read();
                ui.write().apply(key, &desk, visible_cards)
            };
            if let Some(action) = action {
                let effects = model.write().handle(action, Instant::now());
                if !effects.is_empty() {
                    queue.write().extend(effects);
                }
            }
        }
    });

    if ui.read().should_exit {
        system.exit();
    }

    // Keep the selection inside the list after a refetch shrinks it
    let card_count = model.read().list.cards().len();
    let current = ui.read().clone();
    let mut clamped = current.clone();
    clamped.clamp(card_count);
    if clamped.selected_index != current.selected_index
        || clamped.scroll_offset != current.scroll_offset
    {
        ui.set(clamped);
    }

    let theme = theme();
    let view = ui.read().clone();
    let (busy, stats) = {
        let desk = model.read();
        let busy = desk.list.is_loading()
            || desk.form.is_submitting()
            || desk.form.is_classifying()
            || matches!(desk.stats.view(), StatsView::Loading);
        (busy, desk.stats.clone())
    };

    let shortcuts = match view.mode() {
        Mode::List => list_shortcuts(),
        Mode::Search => search_shortcuts(),
        Mode::Form(_) => form_shortcuts(),
    };
    let toast_element = render_toast(toast.read().as_ref());
    let has_api = props.api.is_some();

    element! {
        View(
            width,
            height,
            flex_direction: FlexDirection::Column,
            background_color: theme.background,
        ) {
            Header(
                title: Some("Helpdesk"),
                origin: props.origin.clone(),
                busy,
            )

            #((!has_api).then(|| element! {
                View(padding_left: 1) {
                    Text(content: "No service client configured.", color: theme.error)
                }
            }))

            View(
                flex_grow: 1.0,
                flex_direction: FlexDirection::Row,
                width: 100pct,
                overflow: Overflow::Hidden,
            ) {
                TicketListPane(
                    model: Some(model),
                    selected_index: view.selected_index,
                    scroll_offset: view.scroll_offset,
                    visible_cards,
                    search_focused: !view.form_open && view.pane == Pane::Search,
                    list_focused: !view.form_open && view.pane == Pane::List,
                )
                StatsPanel(stats: Some(stats))
            }

            #(toast_element)

            Footer(shortcuts)

            #(view.form_open.then(|| element! {
                TicketFormModal(model: Some(model), field: view.form_field)
            }))
        }
    }
}
