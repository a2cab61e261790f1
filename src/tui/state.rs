//! Presentation state for the dashboard
//!
//! Focus, selection and scrolling live here rather than in `DeskModel`, which
//! only knows about tickets and requests. `UiState::apply` turns a key action
//! into an optional model `Action`, keeping the iocraft component thin.

use crate::desk::{Action, DeskModel, FieldUpdate, FilterUpdate, FormField};
use crate::tui::components::select::{Selectable, cycle_filter};
use crate::tui::keymap::{KeyAction, Mode};
use crate::tui::navigation::{page_down_target, page_up_target, select};

/// Which pane has focus when the form is closed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pane {
    #[default]
    List,
    Search,
}

#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub pane: Pane,
    pub form_open: bool,
    pub form_field: FormField,
    pub selected_index: usize,
    pub scroll_offset: usize,
    pub should_exit: bool,
}

impl UiState {
    pub fn mode(&self) -> Mode {
        if self.form_open {
            Mode::Form(self.form_field)
        } else {
            match self.pane {
                Pane::List => Mode::List,
                Pane::Search => Mode::Search,
            }
        }
    }

    /// Keep selection inside a list of `count` cards
    pub fn clamp(&mut self, count: usize) {
        if self.selected_index >= count {
            self.selected_index = count.saturating_sub(1);
        }
        if self.scroll_offset > self.selected_index {
            self.scroll_offset = self.selected_index;
        }
    }

    fn select(&mut self, target: usize, count: usize, list_height: usize) {
        select(
            &mut self.selected_index,
            &mut self.scroll_offset,
            target,
            count,
            list_height,
        );
    }

    /// Apply a key action, returning the model action it implies, if any
    pub fn apply(&mut self, key: KeyAction, model: &DeskModel, list_height: usize) -> Option<Action> {
        let count = model.list.cards().len();
        let list_height = list_height.max(1);

        match key {
            KeyAction::MoveDown => self.select(self.selected_index.saturating_add(1), count, list_height),
            KeyAction::MoveUp => self.select(self.selected_index.saturating_sub(1), count, list_height),
            KeyAction::GoToTop => self.select(0, count, list_height),
            KeyAction::GoToBottom => self.select(usize::MAX, count, list_height),
            KeyAction::PageDown => {
                self.select(page_down_target(self.selected_index, list_height), count, list_height)
            }
            KeyAction::PageUp => {
                self.select(page_up_target(self.selected_index, list_height), count, list_height)
            }

            KeyAction::FocusSearch => self.pane = Pane::Search,
            KeyAction::ExitSearch => self.pane = Pane::List,
            KeyAction::ClearSearchAndExit => {
                self.pane = Pane::List;
                return Some(Action::SearchInput(String::new()));
            }

            KeyAction::NextStatus | KeyAction::PrevStatus => {
                let card = model.list.cards().get(self.selected_index)?;
                if card.is_updating() {
                    return None;
                }
                let status = if key == KeyAction::NextStatus {
                    card.status().next()
                } else {
                    card.status().prev()
                };
                return Some(Action::ChangeStatus {
                    id: card.id().clone(),
                    status,
                });
            }

            KeyAction::CycleCategory { forward } => {
                let current = model.list.filters().category;
                return Some(Action::SetFilter(FilterUpdate::Category(cycle_filter(
                    current, forward,
                ))));
            }
            KeyAction::CyclePriority { forward } => {
                let current = model.list.filters().priority;
                return Some(Action::SetFilter(FilterUpdate::Priority(cycle_filter(
                    current, forward,
                ))));
            }
            KeyAction::CycleStatusFilter { forward } => {
                let current = model.list.filters().status;
                return Some(Action::SetFilter(FilterUpdate::Status(cycle_filter(
                    current, forward,
                ))));
            }
            KeyAction::ClearFilters => return Some(Action::ClearFilters),
            KeyAction::Refresh => return Some(Action::Refresh),

            KeyAction::OpenForm => {
                self.form_open = true;
                self.form_field = FormField::Title;
            }
            KeyAction::CloseForm => self.form_open = false,
            KeyAction::NextField => self.form_field = self.form_field.next(),
            KeyAction::PrevField => self.form_field = self.form_field.prev(),
            KeyAction::CycleFieldValue { forward } => {
                let form = &model.form;
                let update = match self.form_field {
                    FormField::Category => FieldUpdate::Category(if forward {
                        form.category().next()
                    } else {
                        form.category().prev()
                    }),
                    FormField::Priority => FieldUpdate::Priority(if forward {
                        form.priority().next()
                    } else {
                        form.priority().prev()
                    }),
                    FormField::Title | FormField::Description => return None,
                };
                return Some(Action::EditField(update));
            }
            KeyAction::SubmitForm => {
                if model.form.is_submitting() {
                    return None;
                }
                return Some(Action::SubmitForm);
            }
            KeyAction::ResetForm => {
                self.form_field = FormField::Title;
                return Some(Action::ResetForm);
            }

            KeyAction::Quit => self.should_exit = true,
        }
        None
    }
}
