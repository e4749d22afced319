//! Control handles - the user-interface side of the player
//!
//! The controller never renders anything itself. It writes text, values and
//! playlist entries into handles supplied by the host, which owns the actual
//! widgets and decides how they look. Every method on [`Control`] defaults to a
//! no-op so a host only implements what a given widget can show.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::error::PlayerError;

/// Logical controls the player binds to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ControlName {
    Toggle,
    Prev,
    Next,
    Volume,
    VolumePerc,
    Seek,
    CurrentTime,
    Duration,
    Track,
    Artist,
    Title,
    Thumbnail,
    Playlist,
}

impl ControlName {
    pub const ALL: [ControlName; 13] = [
        ControlName::Toggle,
        ControlName::Prev,
        ControlName::Next,
        ControlName::Volume,
        ControlName::VolumePerc,
        ControlName::Seek,
        ControlName::CurrentTime,
        ControlName::Duration,
        ControlName::Track,
        ControlName::Artist,
        ControlName::Title,
        ControlName::Thumbnail,
        ControlName::Playlist,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ControlName::Toggle => "toggle",
            ControlName::Prev => "prev",
            ControlName::Next => "next",
            ControlName::Volume => "volume",
            ControlName::VolumePerc => "volumePerc",
            ControlName::Seek => "seek",
            ControlName::CurrentTime => "currentTime",
            ControlName::Duration => "duration",
            ControlName::Track => "track",
            ControlName::Artist => "artist",
            ControlName::Title => "title",
            ControlName::Thumbnail => "thumbnail",
            ControlName::Playlist => "playlist",
        }
    }
}

impl fmt::Display for ControlName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single on-screen element the controller can write to
pub trait Control {
    /// Replace the text content (labels, buttons)
    fn set_text(&mut self, _text: &str) {}

    /// Current value of a range input (volume, seek)
    fn set_value(&mut self, _value: f64) {}

    /// Upper bound of a range input
    fn set_max(&mut self, _max: f64) {}

    /// Image locator, `None` clears the image
    fn set_image(&mut self, _src: Option<&str>) {}

    // Playlist container. Entries are addressed by the index they were
    // appended at; `set_entry_active` is called once per playlist entry.
    fn clear_entries(&mut self) {}
    fn append_entry(&mut self, _label: &str) {}
    fn set_entry_active(&mut self, _index: usize, _active: bool) {}
}

pub type ControlHandle = Rc<RefCell<dyn Control>>;

/// Wrap a control so it can be shared between the host and the player
pub fn handle<C: Control + 'static>(control: C) -> ControlHandle {
    Rc::new(RefCell::new(control))
}

/// Placeholder used for every control the host did not bind
#[derive(Debug, Default)]
pub struct InertControl;

impl Control for InertControl {}

/// Partial set of bindings supplied by the host
#[derive(Default, Clone)]
pub struct ControlOverrides {
    handles: HashMap<ControlName, ControlHandle>,
}

impl ControlOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(mut self, name: ControlName, handle: ControlHandle) -> Self {
        self.handles.insert(name, handle);
        self
    }

    pub fn is_bound(&self, name: ControlName) -> bool {
        self.handles.contains_key(&name)
    }
}

/// Complete set of bindings, one handle per [`ControlName`]
pub struct ControlBindings {
    handles: [ControlHandle; 13],
    missing: Vec<ControlName>,
}

impl ControlBindings {
    pub fn resolve(mut overrides: ControlOverrides) -> Self {
        let mut missing = Vec::new();
        let handles = ControlName::ALL.map(|name| match overrides.handles.remove(&name) {
            Some(handle) => handle,
            None => {
                tracing::debug!(control = %name, error = %PlayerError::MissingBinding(name), "Falling back to inert control");
                missing.push(name);
                handle(InertControl)
            }
        });

        Self { handles, missing }
    }

    pub fn get(&self, name: ControlName) -> &ControlHandle {
        &self.handles[name as usize]
    }

    /// Controls that were never bound by the host
    pub fn missing(&self) -> &[ControlName] {
        &self.missing
    }

    pub fn set_text(&self, name: ControlName, text: &str) {
        self.get(name).borrow_mut().set_text(text);
    }

    pub fn set_value(&self, name: ControlName, value: f64) {
        self.get(name).borrow_mut().set_value(value);
    }

    pub fn set_max(&self, name: ControlName, max: f64) {
        self.get(name).borrow_mut().set_max(max);
    }

    pub fn set_image(&self, name: ControlName, src: Option<&str>) {
        self.get(name).borrow_mut().set_image(src);
    }
}
