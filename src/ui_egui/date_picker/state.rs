use chrono::{Datelike, NaiveDate};

use crate::models::calendar::{CalendarViewState, DateCell};
use crate::models::date_input::DateInput;
use crate::utils::date::{is_displayable_year, parse_date_text};

/// Whether the popup calendar is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PopupVisibility {
    #[default]
    Closed,
    Open,
}

impl PopupVisibility {
    pub fn toggled(self) -> Self {
        match self {
            PopupVisibility::Closed => PopupVisibility::Open,
            PopupVisibility::Open => PopupVisibility::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == PopupVisibility::Open
    }
}

/// User interaction with the picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerEvent {
    /// Input text changed (every keystroke)
    TextEdited(String),
    InputFocused,
    /// Calendar button next to the input
    ToggleClicked,
    /// Enter pressed while the input had focus
    EnterPressed,
    CellClicked(DateCell),
    YearSelected(i32),
    /// 0-based month from the month dropdown
    MonthSelected(u32),
}

/// Notification raised to the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerOutput {
    /// New raw text for the input, not necessarily valid
    DateChanged(String),
    /// A grid cell was picked
    DatePicked(NaiveDate),
}

/// Receives the picker's notifications
#[cfg_attr(test, mockall::automock)]
pub trait DatePickerHandler {
    fn on_date_change(&mut self, text: String);
    fn on_date_pick(&mut self, date: NaiveDate);
}

/// Result of applying one event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: DatePickerState,
    pub output: Option<PickerOutput>,
}

/// Widget-local state of the picker.
///
/// Replaced as a whole on every event; the selected date itself belongs to
/// the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatePickerState {
    pub popup: PopupVisibility,
    pub view: CalendarViewState,
}

impl DatePickerState {
    /// Start closed, viewing the month of `selected_date` or of `today` when
    /// the text does not match.
    pub fn new(selected_date: &str, today: NaiveDate) -> Self {
        let view = match parse_date_text(selected_date) {
            DateInput::Valid(fields) => fields.view(),
            DateInput::Pending(_) => None,
        }
        .unwrap_or_else(|| CalendarViewState::from_date(today));

        Self {
            popup: PopupVisibility::Closed,
            view,
        }
    }

    pub fn is_open(&self) -> bool {
        self.popup.is_open()
    }

    pub fn reduce(self, event: PickerEvent) -> Transition {
        let mut state = self;
        let output = match event {
            PickerEvent::TextEdited(text) => {
                if let DateInput::Valid(fields) = parse_date_text(&text) {
                    if let Some(view) = fields.view() {
                        state.view = view;
                    }
                }
                Some(PickerOutput::DateChanged(text))
            }
            PickerEvent::InputFocused => {
                state.popup = PopupVisibility::Open;
                None
            }
            PickerEvent::ToggleClicked | PickerEvent::EnterPressed => {
                state.popup = state.popup.toggled();
                None
            }
            PickerEvent::CellClicked(cell) => match cell.resolve(self.view) {
                Some(date) if is_displayable_year(date.year()) => {
                    state.view = CalendarViewState::from_date(date);
                    state.popup = PopupVisibility::Closed;
                    Some(PickerOutput::DatePicked(date))
                }
                _ => {
                    log::warn!("Cell {:?} does not resolve in {:?}", cell, self.view);
                    None
                }
            },
            PickerEvent::YearSelected(year) => state.select_view(
                Some(year)
                    .filter(|&year| is_displayable_year(year))
                    .and_then(|year| CalendarViewState::new(year, self.view.month())),
            ),
            PickerEvent::MonthSelected(month) => {
                state.select_view(CalendarViewState::new(self.view.year(), month))
            }
        };

        Transition { state, output }
    }

    /// Apply an event and forward its output to `handler`
    pub fn dispatch<H>(self, event: PickerEvent, handler: &mut H) -> Self
    where
        H: DatePickerHandler + ?Sized,
    {
        let Transition { state, output } = self.reduce(event);
        match output {
            Some(PickerOutput::DateChanged(text)) => handler.on_date_change(text),
            Some(PickerOutput::DatePicked(date)) => handler.on_date_pick(date),
            None => {}
        }
        state
    }

    /// Move to a dropdown-selected month; the text becomes the 1st of it
    fn select_view(&mut self, view: Option<CalendarViewState>) -> Option<PickerOutput> {
        let Some(view) = view else {
            log::warn!("Ignoring out-of-range dropdown selection");
            return None;
        };
        self.view = view;
        Some(PickerOutput::DateChanged(format!(
            "{}/1/{}",
            view.month() + 1,
            view.year()
        )))
    }
}
