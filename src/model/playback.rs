//! Playback state snapshot and the small conversions shown in the controls

/// Shown in the time labels while a value is not known yet
pub const TIME_ZERO: &str = "00:00";

/// Snapshot of the player, taken on demand
#[derive(Clone, Debug, PartialEq)]
pub struct PlayerState {
    pub current_index: usize,
    pub is_playing: bool,
    pub volume: f64,
    pub current_time: Option<f64>,
    pub duration: Option<f64>,
}

/// Format seconds as `MM:SS`.
///
/// Minutes are floored, seconds rounded; a rounded 60 carries into the
/// minutes so `59.6` reads `01:00` rather than `00:60`.
pub fn format_song_time(t: f64) -> String {
    let t = if t.is_finite() { t.max(0.0) } else { 0.0 };
    let mut minutes = (t / 60.0).floor() as u64;
    let mut seconds = (t % 60.0).round() as u64;
    if seconds == 60 {
        minutes += 1;
        seconds = 0;
    }
    format!("{:02}:{:02}", minutes, seconds)
}

/// Label for a timing value the primitive may not have reported yet.
///
/// Unknown, zero and non-finite values all render as [`TIME_ZERO`].
pub fn timestamp_label(t: Option<f64>) -> String {
    match known_time(t) {
        Some(t) => format_song_time(t),
        None => TIME_ZERO.to_string(),
    }
}

/// A timing value counts as known once it is finite and non-zero
pub fn known_time(t: Option<f64>) -> Option<f64> {
    t.filter(|t| t.is_finite() && *t != 0.0)
}

/// Bring a raw volume into `[0, 1]`.
///
/// Anything above 1 is read as a percentage and divided by 100 once, then
/// clamped. Returns `None` for non-finite input.
pub fn normalize_volume(raw: f64) -> Option<f64> {
    if !raw.is_finite() {
        return None;
    }
    let value = if raw > 1.0 { raw / 100.0 } else { raw };
    Some(value.clamp(0.0, 1.0))
}

/// Percentage text for the volume display, one decimal
pub fn volume_label(volume: f64) -> String {
    format!("{:.1}%", volume * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_minutes_and_seconds() {
        assert_eq!(format_song_time(65.0), "01:05");
        assert_eq!(format_song_time(5.0), "00:05");
        assert_eq!(format_song_time(90.0), "01:30");
        assert_eq!(format_song_time(0.0), "00:00");
    }

    #[test]
    fn rounding_carries_into_minutes() {
        assert_eq!(format_song_time(59.6), "01:00");
        assert_eq!(format_song_time(119.5), "02:00");
        assert_eq!(format_song_time(64.4), "01:04");
    }

    #[test]
    fn long_tracks_keep_counting_minutes() {
        assert_eq!(format_song_time(6000.0), "100:00");
    }

    #[test]
    fn unknown_times_render_zero_state() {
        assert_eq!(timestamp_label(None), TIME_ZERO);
        assert_eq!(timestamp_label(Some(0.0)), TIME_ZERO);
        assert_eq!(timestamp_label(Some(f64::NAN)), TIME_ZERO);
        assert_eq!(timestamp_label(Some(f64::INFINITY)), TIME_ZERO);
        assert_eq!(timestamp_label(Some(125.0)), "02:05");
    }

    #[test]
    fn percentages_are_divided_once() {
        assert_eq!(normalize_volume(50.0), Some(0.5));
        assert_eq!(normalize_volume(0.5), Some(0.5));
        assert_eq!(normalize_volume(1.0), Some(1.0));
        assert_eq!(normalize_volume(150.0), Some(1.0));
        assert_eq!(normalize_volume(-0.2), Some(0.0));
        assert_eq!(normalize_volume(f64::NAN), None);
    }

    #[test]
    fn volume_label_has_one_decimal() {
        assert_eq!(volume_label(0.5), "50.0%");
        assert_eq!(volume_label(0.25), "25.0%");
        assert_eq!(volume_label(0.0), "0.0%");
    }
}
