//! Date picker widget.
//!
//! A text input with a calendar toggle button and an inline popup holding
//! year/month dropdowns and the 6x7 day grid. The widget never owns the
//! selected date; edits and picks are reported through a
//! [`DatePickerHandler`] and the host passes the updated text back on the
//! next frame.

mod state;

pub use state::{
    DatePickerHandler, DatePickerState, PickerEvent, PickerOutput, PopupVisibility, Transition,
};

use chrono::NaiveDate;
use egui::{RichText, Stroke};

use crate::models::blackout::BlackoutDates;
use crate::models::calendar::{month_name, CalendarViewState, DateCell, WEEKDAY_LABELS};
use crate::models::settings::BlackoutPolicy;
use crate::services::calendar_grid::build_grid;
use crate::ui_egui::theme::PickerTheme;
use crate::utils::date::{
    is_displayable_year, parse_date_text, DATE_FORMAT_HINT, INVALID_DATE_MESSAGE,
};

/// Years listed in the year dropdown, starting half the span before `center`.
///
/// Years that do not format as four digits are left out.
pub fn year_options(center: i32, span: u32) -> impl Iterator<Item = i32> {
    let span = i32::try_from(span).unwrap_or(i32::MAX);
    let start = center.saturating_sub(span / 2);
    (0..span)
        .map(move |offset| start.saturating_add(offset))
        .filter(|&year| is_displayable_year(year))
}

/// Event produced by a day cell this frame, if any.
///
/// Blackout cells under [`BlackoutPolicy::Block`] never produce a pick.
pub fn cell_event(
    cell: DateCell,
    is_blackout: bool,
    policy: BlackoutPolicy,
    clicked: bool,
) -> Option<PickerEvent> {
    (clicked && policy.allows_pick(is_blackout)).then_some(PickerEvent::CellClicked(cell))
}

/// Event produced by the input's focus changes this frame, if any.
///
/// `refocused` is set on the frame after Enter handed focus back; the focus
/// gained then must not reopen the popup Enter just toggled.
pub fn focus_event(
    gained_focus: bool,
    left_on_enter: bool,
    refocused: bool,
) -> Option<PickerEvent> {
    if left_on_enter {
        Some(PickerEvent::EnterPressed)
    } else if gained_focus && !refocused {
        Some(PickerEvent::InputFocused)
    } else {
        None
    }
}

pub struct DatePicker<'a> {
    id: egui::Id,
    selected_date: &'a str,
    blackout: &'a BlackoutDates,
    theme: &'a PickerTheme,
    policy: BlackoutPolicy,
    year_span: u32,
}

impl<'a> DatePicker<'a> {
    pub fn new(
        id_source: impl std::hash::Hash,
        selected_date: &'a str,
        blackout: &'a BlackoutDates,
        theme: &'a PickerTheme,
    ) -> Self {
        Self {
            id: egui::Id::new(id_source),
            selected_date,
            blackout,
            theme,
            policy: BlackoutPolicy::default(),
            year_span: 50,
        }
    }

    pub fn blackout_policy(mut self, policy: BlackoutPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn year_span(mut self, year_span: u32) -> Self {
        self.year_span = year_span.max(1);
        self
    }

    /// Render the picker and apply this frame's interactions.
    ///
    /// Returns the state to use on the next frame.
    pub fn show<H>(
        self,
        ui: &mut egui::Ui,
        state: DatePickerState,
        handler: &mut H,
    ) -> DatePickerState
    where
        H: DatePickerHandler + ?Sized,
    {
        let mut events = Vec::new();

        ui.vertical(|ui| {
            self.render_warning(ui);
            self.render_input_row(ui, &mut events);
            if state.is_open() {
                self.render_popup(ui, state.view, &mut events);
            }
        });

        events.into_iter().fold(state, |state, event| {
            log::debug!("Date picker event: {:?}", event);
            state.dispatch(event, &mut *handler)
        })
    }

    fn render_warning(&self, ui: &mut egui::Ui) {
        if !parse_date_text(self.selected_date).is_valid() {
            ui.label(
                RichText::new(INVALID_DATE_MESSAGE)
                    .small()
                    .color(self.theme.warning_text),
            );
        }
    }

    fn render_input_row(&self, ui: &mut egui::Ui, events: &mut Vec<PickerEvent>) {
        ui.horizontal(|ui| {
            let mut text = self.selected_date.to_owned();
            let response = ui.add(
                egui::TextEdit::singleline(&mut text)
                    .id(self.id.with("input"))
                    .hint_text(DATE_FORMAT_HINT)
                    .desired_width(120.0),
            );

            let refocus_key = self.id.with("enter_refocus");
            let refocused = ui.data(|d| d.get_temp::<bool>(refocus_key)).unwrap_or(false);
            ui.data_mut(|d| d.remove::<bool>(refocus_key));

            // Single-line edits give up focus on Enter, so take it back
            let left_on_enter =
                response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if left_on_enter {
                response.request_focus();
                ui.data_mut(|d| d.insert_temp(refocus_key, true));
            }

            if response.changed() {
                events.push(PickerEvent::TextEdited(text));
            }
            events.extend(focus_event(response.gained_focus(), left_on_enter, refocused));

            if ui
                .button("📅")
                .on_hover_text("Toggle calendar")
                .clicked()
            {
                events.push(PickerEvent::ToggleClicked);
            }
        });
    }

    fn render_popup(
        &self,
        ui: &mut egui::Ui,
        view: CalendarViewState,
        events: &mut Vec<PickerEvent>,
    ) {
        egui::Frame::none()
            .fill(self.theme.popup_background)
            .stroke(Stroke::new(1.0, self.theme.other_month_text))
            .rounding(egui::Rounding::same(6.0))
            .inner_margin(egui::Margin::same(6.0))
            .show(ui, |ui| {
                ui.set_max_width(240.0);
                self.render_header(ui, view, events);
                ui.separator();
                self.render_grid(ui, view, events);
            });
    }

    /// Year and month dropdowns
    fn render_header(
        &self,
        ui: &mut egui::Ui,
        view: CalendarViewState,
        events: &mut Vec<PickerEvent>,
    ) {
        ui.horizontal(|ui| {
            let mut year = view.year();
            egui::ComboBox::from_id_source(self.id.with("year"))
                .width(70.0)
                .selected_text(year.to_string())
                .show_ui(ui, |ui| {
                    for option in year_options(view.year(), self.year_span) {
                        ui.selectable_value(&mut year, option, option.to_string());
                    }
                });
            if year != view.year() {
                events.push(PickerEvent::YearSelected(year));
            }

            let mut month = view.month();
            egui::ComboBox::from_id_source(self.id.with("month"))
                .width(100.0)
                .selected_text(view.month_name())
                .show_ui(ui, |ui| {
                    for option in 0..12 {
                        ui.selectable_value(&mut month, option, month_name(option));
                    }
                });
            if month != view.month() {
                events.push(PickerEvent::MonthSelected(month));
            }
        });
    }

    fn render_grid(
        &self,
        ui: &mut egui::Ui,
        view: CalendarViewState,
        events: &mut Vec<PickerEvent>,
    ) {
        let grid = build_grid(view);
        let selected = parse_date_text(self.selected_date).date();

        egui::Grid::new(self.id.with("grid"))
            .num_columns(WEEKDAY_LABELS.len())
            .spacing([2.0, 2.0])
            .min_col_width(28.0)
            .show(ui, |ui| {
                for name in WEEKDAY_LABELS {
                    ui.label(RichText::new(name).small().strong());
                }
                ui.end_row();

                for row in grid.rows() {
                    for cell in row {
                        let date = cell.resolve(view);
                        events.extend(self.render_cell(ui, cell, date, selected));
                    }
                    ui.end_row();
                }
            });
    }

    fn render_cell(
        &self,
        ui: &mut egui::Ui,
        cell: &DateCell,
        date: Option<NaiveDate>,
        selected: Option<NaiveDate>,
    ) -> Option<PickerEvent> {
        let is_blackout = date.map_or(false, |d| self.blackout.contains_date(d));
        let is_selected = date.is_some() && date == selected;

        let mut text = RichText::new(cell.day.to_string());
        text = if is_blackout {
            text.strikethrough().color(self.theme.blackout_text)
        } else if cell.in_current_month {
            text.color(self.theme.day_text)
        } else {
            text.color(self.theme.other_month_text)
        };

        let enabled = self.policy.allows_pick(is_blackout);
        let mut response = ui.add_enabled(enabled, egui::SelectableLabel::new(is_selected, text));
        if is_blackout {
            response = response.on_hover_text("Unavailable");
        }

        cell_event(*cell, is_blackout, self.policy, response.clicked())
    }
}
