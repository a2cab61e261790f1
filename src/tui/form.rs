//! New-ticket form modal
//!
//! Title and description are free text; category and priority are selectors
//! that the classifier may fill in while the user is still typing.

use std::time::Instant;

use iocraft::prelude::*;

use crate::desk::{Action, DeskModel, FieldUpdate, FormField};
use crate::tui::components::{Footer, Select, form_shortcuts};
use crate::tui::theme::theme;
use crate::types::TITLE_MAX_CHARS;

/// Props for the TicketFormModal component
#[derive(Default, Props)]
pub struct TicketFormModalProps {
    /// Dashboard state the form reads and writes
    pub model: Option<State<DeskModel>>,
    /// The field that currently has focus
    pub field: FormField,
}

#[component]
pub fn TicketFormModal<'a>(props: &TicketFormModalProps) -> impl Into<AnyElement<'a>> {
    let theme = theme();
    let Some(mut model) = props.model else {
        return element! { View() };
    };
    let focused = props.field;

    let (title, description, category, priority, error, submitting, classifying) = {
        let desk = model.read();
        let form = &desk.form;
        (
            form.title().to_string(),
            form.description().to_string(),
            form.category(),
            form.priority(),
            form.error().map(str::to_string),
            form.is_submitting(),
            form.is_classifying(),
        )
    };
    let title_len = title.chars().count();

    let label_color = |field: FormField| {
        if focused == field {
            theme.border_focused
        } else {
            theme.text_dimmed
        }
    };
    let border_color = |field: FormField| {
        if focused == field {
            theme.border_focused
        } else {
            theme.border
        }
    };

    let header_title = if submitting {
        "New Ticket (Submitting...)"
    } else {
        "New Ticket"
    };

    element! {
        // Modal backdrop
        View(
            width: 100pct,
            height: 100pct,
            position: Position::Absolute,
            top: 0,
            left: 0,
            flex_direction: FlexDirection::Column,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            background_color: Color::Rgb { r: 80, g: 80, b: 80 },
        ) {
            View(
                width: 80pct,
                flex_direction: FlexDirection::Column,
                border_style: BorderStyle::Round,
                border_color: theme.border_focused,
                background_color: theme.background,
            ) {
                View(
                    width: 100pct,
                    height: 1,
                    padding_left: 1,
                    background_color: theme.border,
                ) {
                    Text(content: header_title, color: theme.text, weight: Weight::Bold)
                }

                #(error.map(|error| element! {
                    View(width: 100pct, padding_left: 1, padding_right: 1, margin_top: 1) {
                        Text(content: error, color: theme.error)
                    }
                }))

                View(
                    width: 100pct,
                    padding: 1,
                    flex_direction: FlexDirection::Column,
                    gap: 1,
                ) {
                    // Title
                    View(flex_direction: FlexDirection::Column) {
                        View(flex_direction: FlexDirection::Row, justify_content: JustifyContent::SpaceBetween) {
                            Text(content: "Title:", color: label_color(FormField::Title))
                            Text(
                                content: format!("{}/{}", title_len, TITLE_MAX_CHARS),
                                color: theme.text_dimmed,
                            )
                        }
                        View(
                            border_style: BorderStyle::Round,
                            border_color: border_color(FormField::Title),
                            padding_left: 1,
                            padding_right: 1,
                            width: 100pct,
                        ) {
                            TextInput(
                                value: title,
                                has_focus: focused == FormField::Title && !submitting,
                                on_change: move |value: String| {
                                    model.write().handle(
                                        Action::EditField(FieldUpdate::Title(value)),
                                        Instant::now(),
                                    );
                                },
                                color: theme.text,
                            )
                        }
                    }

                    // Description
                    View(flex_direction: FlexDirection::Column) {
                        View(flex_direction: FlexDirection::Row, justify_content: JustifyContent::SpaceBetween) {
                            Text(content: "Description:", color: label_color(FormField::Description))
                            #(classifying.then(|| element! {
                                Text(content: "Analyzing description...", color: theme.highlight)
                            }))
                        }
                        View(
                            border_style: BorderStyle::Round,
                            border_color: border_color(FormField::Description),
                            padding_left: 1,
                            padding_right: 1,
                            width: 100pct,
                        ) {
                            TextInput(
                                value: description,
                                has_focus: focused == FormField::Description && !submitting,
                                on_change: move |value: String| {
                                    model.write().handle(
                                        Action::EditField(FieldUpdate::Description(value)),
                                        Instant::now(),
                                    );
                                },
                                color: theme.text,
                            )
                        }
                    }

                    // Category and priority
                    View(flex_direction: FlexDirection::Row, gap: 4) {
                        Select(
                            label: Some("Category"),
                            value: category.label().to_string(),
                            has_focus: focused == FormField::Category,
                            disabled: submitting,
                            value_color: Some(theme.category_color(category)),
                        )
                        Select(
                            label: Some("Priority"),
                            value: priority.label().to_string(),
                            has_focus: focused == FormField::Priority,
                            disabled: submitting,
                            value_color: Some(theme.priority_color(priority)),
                        )
                    }
                }

                Footer(shortcuts: form_shortcuts())
            }
        }
    }
}
