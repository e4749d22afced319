//! Terminal-side control handles
//!
//! Each widget stores whatever the player writes into it; the view reads them
//! back when drawing a frame.

use std::cell::RefCell;
use std::rc::Rc;

use audioplayer::{Control, ControlName, PlayerOptions};

#[derive(Debug, Default, Clone)]
pub struct Label {
    pub text: String,
}

impl Label {
    pub fn new(text: &str) -> Self {
        Self { text: text.to_string() }
    }
}

impl Control for Label {
    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }
}

#[derive(Debug, Default, Clone)]
pub struct Slider {
    pub value: f64,
    pub max: f64,
}

impl Slider {
    pub fn new(value: f64, max: f64) -> Self {
        Self { value, max }
    }

    pub fn ratio(&self) -> f64 {
        let ratio = if self.max > 0.0 { self.value / self.max } else { 0.0 };
        if ratio.is_finite() { ratio.clamp(0.0, 1.0) } else { 0.0 }
    }
}

impl Control for Slider {
    fn set_value(&mut self, value: f64) {
        self.value = value;
    }

    fn set_max(&mut self, max: f64) {
        self.max = max;
    }
}

#[derive(Debug, Default, Clone)]
pub struct Thumbnail {
    pub src: Option<String>,
}

impl Control for Thumbnail {
    fn set_image(&mut self, src: Option<&str>) {
        self.src = src.map(str::to_string);
    }
}

#[derive(Debug, Default, Clone)]
pub struct PlaylistView {
    pub entries: Vec<String>,
    active: Vec<bool>,
}

impl PlaylistView {
    pub fn active_index(&self) -> Option<usize> {
        self.active.iter().position(|a| *a)
    }
}

impl Control for PlaylistView {
    fn clear_entries(&mut self) {
        self.entries.clear();
        self.active.clear();
    }

    fn append_entry(&mut self, label: &str) {
        self.entries.push(label.to_string());
        self.active.push(false);
    }

    fn set_entry_active(&mut self, index: usize, active: bool) {
        if let Some(slot) = self.active.get_mut(index) {
            *slot = active;
        }
    }
}

/// Every control the terminal host renders
pub struct Widgets {
    pub toggle: Rc<RefCell<Label>>,
    pub prev: Rc<RefCell<Label>>,
    pub next: Rc<RefCell<Label>>,
    pub volume: Rc<RefCell<Slider>>,
    pub volume_perc: Rc<RefCell<Label>>,
    pub seek: Rc<RefCell<Slider>>,
    pub current_time: Rc<RefCell<Label>>,
    pub duration: Rc<RefCell<Label>>,
    pub track: Rc<RefCell<Label>>,
    pub artist: Rc<RefCell<Label>>,
    pub title: Rc<RefCell<Label>>,
    pub thumbnail: Rc<RefCell<Thumbnail>>,
    pub playlist: Rc<RefCell<PlaylistView>>,
}

fn shared<T>(value: T) -> Rc<RefCell<T>> {
    Rc::new(RefCell::new(value))
}

impl Widgets {
    pub fn new() -> Self {
        Self {
            toggle: shared(Label::default()),
            prev: shared(Label::new("|<<")),
            next: shared(Label::new(">>|")),
            volume: shared(Slider::new(0.0, 100.0)),
            volume_perc: shared(Label::default()),
            seek: shared(Slider::default()),
            current_time: shared(Label::default()),
            duration: shared(Label::default()),
            track: shared(Label::default()),
            artist: shared(Label::default()),
            title: shared(Label::default()),
            thumbnail: shared(Thumbnail::default()),
            playlist: shared(PlaylistView::default()),
        }
    }

    /// Bind every widget to its control name
    pub fn bind(&self, options: PlayerOptions) -> PlayerOptions {
        options
            .control(ControlName::Toggle, self.toggle.clone())
            .control(ControlName::Prev, self.prev.clone())
            .control(ControlName::Next, self.next.clone())
            .control(ControlName::Volume, self.volume.clone())
            .control(ControlName::VolumePerc, self.volume_perc.clone())
            .control(ControlName::Seek, self.seek.clone())
            .control(ControlName::CurrentTime, self.current_time.clone())
            .control(ControlName::Duration, self.duration.clone())
            .control(ControlName::Track, self.track.clone())
            .control(ControlName::Artist, self.artist.clone())
            .control(ControlName::Title, self.title.clone())
            .control(ControlName::Thumbnail, self.thumbnail.clone())
            .control(ControlName::Playlist, self.playlist.clone())
    }
}
