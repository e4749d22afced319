//! Label templates for the toggle button and playlist entries

/// Glyph shown on the toggle while paused (the action a click performs)
pub const PLAY_GLYPH: &str = "▶";
/// Glyph shown on the toggle while playing
pub const PAUSE_GLYPH: &str = "||";
pub const PLAYLIST_ITEM_TEMPLATE: &str = "%N. %A - %T";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Labels {
    pub play: String,
    pub pause: String,
    /// Playlist entry text with `%N`, `%A` and `%T` placeholders
    pub playlist_item: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            play: PLAY_GLYPH.to_string(),
            pause: PAUSE_GLYPH.to_string(),
            playlist_item: PLAYLIST_ITEM_TEMPLATE.to_string(),
        }
    }
}

/// Partial labels supplied by the host; unset fields keep the defaults
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LabelOverrides {
    pub play: Option<String>,
    pub pause: Option<String>,
    pub playlist_item: Option<String>,
}

impl Labels {
    pub fn merged(overrides: LabelOverrides) -> Self {
        let defaults = Self::default();
        Self {
            play: overrides.play.unwrap_or(defaults.play),
            pause: overrides.pause.unwrap_or(defaults.pause),
            playlist_item: overrides.playlist_item.unwrap_or(defaults.playlist_item),
        }
    }

    pub fn toggle_glyph(&self, is_playing: bool) -> &str {
        if is_playing { &self.pause } else { &self.play }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_replace_only_what_they_set() {
        let labels = Labels::merged(LabelOverrides {
            playlist_item: Some("%N. %A > %T".to_string()),
            ..Default::default()
        });

        assert_eq!(labels.playlist_item, "%N. %A > %T");
        assert_eq!(labels.play, PLAY_GLYPH);
        assert_eq!(labels.pause, PAUSE_GLYPH);
    }

    #[test]
    fn toggle_shows_the_next_action() {
        let labels = Labels::default();
        assert_eq!(labels.toggle_glyph(false), PLAY_GLYPH);
        assert_eq!(labels.toggle_glyph(true), PAUSE_GLYPH);
    }
}
