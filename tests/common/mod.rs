#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use audioplayer::{
    AudioPlayer, Control, ControlName, PlayerOptions, PlaylistEntry, SimulatedPlayback,
};

#[derive(Default)]
pub struct Recorder {
    pub text: String,
    pub value: Option<f64>,
    pub max: Option<f64>,
    pub image: Option<String>,
    pub entries: Vec<String>,
    pub active: Vec<bool>,
    pub writes: usize,
}

impl Recorder {
    pub fn active_entries(&self) -> Vec<usize> {
        self.active
            .iter()
            .enumerate()
            .filter(|(_, a)| **a)
            .map(|(i, _)| i)
            .collect()
    }
}

impl Control for Recorder {
    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.writes += 1;
    }

    fn set_value(&mut self, value: f64) {
        self.value = Some(value);
    }

    fn set_max(&mut self, max: f64) {
        self.max = Some(max);
    }

    fn set_image(&mut self, src: Option<&str>) {
        self.image = src.map(str::to_string);
    }

    fn clear_entries(&mut self) {
        self.entries.clear();
        self.active.clear();
    }

    fn append_entry(&mut self, label: &str) {
        self.entries.push(label.to_string());
        self.active.push(false);
    }

    fn set_entry_active(&mut self, index: usize, active: bool) {
        self.active[index] = active;
    }
}

/// One recorder per control name, kept by the test
pub struct Panel {
    recorders: Vec<(ControlName, Rc<RefCell<Recorder>>)>,
}

impl Panel {
    pub fn new() -> Self {
        let recorders = ControlName::ALL
            .iter()
            .map(|name| (*name, Rc::new(RefCell::new(Recorder::default()))))
            .collect();
        Self { recorders }
    }

    pub fn bind(&self, mut options: PlayerOptions) -> PlayerOptions {
        for (name, recorder) in &self.recorders {
            options = options.control(*name, recorder.clone());
        }
        options
    }

    pub fn get(&self, name: ControlName) -> Rc<RefCell<Recorder>> {
        self.recorders
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, r)| r.clone())
            .expect("every control has a recorder")
    }

    pub fn text(&self, name: ControlName) -> String {
        self.get(name).borrow().text.clone()
    }
}

pub fn openbsd_playlist() -> Vec<PlaylistEntry> {
    vec![
        PlaylistEntry::new("assets/song61.mp3", "OpenBSD", "Winter of 95")
            .with_thumbnail("https://www.openbsd.org/images/61_right.jpg"),
        PlaylistEntry::new("assets/song62.mp3", "OpenBSD", "A 3 line diff")
            .with_thumbnail("https://www.openbsd.org/images/62_right.gif"),
        PlaylistEntry::new("assets/song63.ogg", "OpenBSD", "Puffy"),
    ]
}

pub fn player_with(panel: &Panel, options: PlayerOptions) -> AudioPlayer<SimulatedPlayback> {
    let playback = SimulatedPlayback::new().with_default_duration(125.0);
    AudioPlayer::new(playback, panel.bind(options)).expect("player builds")
}

pub fn player(panel: &Panel) -> AudioPlayer<SimulatedPlayback> {
    player_with(panel, PlayerOptions::new().playlist(openbsd_playlist()))
}
