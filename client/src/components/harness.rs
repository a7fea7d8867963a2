//! Role/name-driven test harness for the bounds form.
//!
//! Drives `apply_action` against a plain `MapState` the way a user drives the
//! rendered form: controls are looked up by ARIA role and accessible name
//! through the same table `InputBox` renders from.

use crate::components::controls::{Control, FormAction, Role, find_control};
use crate::components::input_box::apply_action;
use crate::components::message_box::MessageBoxView;
use crate::state::form::FormState;
use crate::state::map::MapState;
use crate::state::service::MapService;

pub struct FormHarness {
    form: FormState,
    service: MapService,
    state: MapState,
    now_ms: f64,
}

impl FormHarness {
    pub fn new(service: MapService) -> Self {
        Self { form: FormState::default(), service, state: MapState::default(), now_ms: 0.0 }
    }

    /// Harness over the bundled overlay and notes.
    pub fn bundled() -> Self {
        Self::new(MapService::bundled().expect("bundled data loads"))
    }

    fn locate(role: Role, name: &str) -> Control {
        find_control(role, name).unwrap_or_else(|| panic!("no {role:?} named {name:?}"))
    }

    fn text_mut(&mut self, role: Role, name: &str) -> &mut String {
        match Self::locate(role, name) {
            Control::Bound(field) => self.form.bound_mut(field),
            Control::Keyword => &mut self.form.keyword,
            Control::Note(field) => self.form.note.field_mut(field),
            Control::Action(action) => panic!("{action:?} button does not take text"),
        }
    }

    /// Append `text` to a field, like typing into it. Number inputs behave
    /// like the browser's: unparseable text reads back as an empty value
    /// with the bad-input flag raised.
    pub fn type_text(&mut self, role: Role, name: &str, text: &str) -> &mut Self {
        if let Control::Bound(field) = Self::locate(role, name) {
            let typed = format!("{}{text}", self.form.bound(field));
            let bad_input = !typed.trim().is_empty() && typed.trim().parse::<f64>().is_err();
            let value = if bad_input { String::new() } else { typed };
            self.form.input_bound(field, value, bad_input);
        } else {
            self.text_mut(role, name).push_str(text);
        }
        self
    }

    pub fn clear(&mut self, role: Role, name: &str) -> &mut Self {
        if let Control::Bound(field) = Self::locate(role, name) {
            self.form.input_bound(field, String::new(), false);
        } else {
            self.text_mut(role, name).clear();
        }
        self
    }

    /// Current text of a field.
    pub fn value(&self, role: Role, name: &str) -> &str {
        match Self::locate(role, name) {
            Control::Bound(field) => self.form.bound(field),
            Control::Keyword => &self.form.keyword,
            Control::Note(field) => self.form.note.field(field),
            Control::Action(action) => panic!("{action:?} button has no value"),
        }
    }

    /// Activate the button with accessible name `name`.
    pub fn click(&mut self, name: &str) -> &mut Self {
        let Control::Action(action) = Self::locate(Role::Button, name) else {
            unreachable!("find_control only returns actions for buttons");
        };
        self.run(action)
    }

    fn run(&mut self, action: FormAction) -> &mut Self {
        apply_action(action, &mut self.form, &mut self.service, self.now_ms, &mut self.state);
        self
    }

    pub fn advance_ms(&mut self, ms: f64) -> &mut Self {
        self.now_ms += ms;
        self
    }

    /// What the message box currently shows.
    pub fn alert(&self) -> MessageBoxView {
        MessageBoxView::new(&self.state.message)
    }

    pub fn state(&self) -> &MapState {
        &self.state
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn service(&self) -> &MapService {
        &self.service
    }
}
