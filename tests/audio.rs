use levelgrid::audio::*;

#[test]
fn default_sound_config_is_neutral() {
    let cfg = SoundConfig::default();
    assert_eq!(cfg.resolve(0.0, 1.0), (1.0, 1.0));
    assert_eq!(cfg.resolve(0.9, 0.1), (1.0, 1.0));
}

#[test]
fn pitch_variation_spans_plus_minus_range() {
    let cfg = SoundConfig { pitch_variation: 0.1, ..SoundConfig::default() };
    let (low, _) = cfg.resolve(0.0, 0.5);
    let (mid, _) = cfg.resolve(0.5, 0.5);
    let (high, _) = cfg.resolve(1.0, 0.5);
    assert!((low - 0.9).abs() < 1e-6);
    assert!((mid - 1.0).abs() < 1e-6);
    assert!((high - 1.1).abs() < 1e-6);
}

#[test]
fn volume_is_clamped() {
    let loud = SoundConfig { volume: 1.9, volume_variation: 0.5, ..SoundConfig::default() };
    assert_eq!(loud.resolve(0.5, 1.0).1, 2.0);
    let quiet = SoundConfig { volume: 0.1, volume_variation: 0.5, ..SoundConfig::default() };
    assert_eq!(quiet.resolve(0.5, 0.0).1, 0.0);
}

#[test]
fn silent_cues_accept_calls() {
    let mut cues = SilentCues;
    let sink: &mut dyn FeedbackCues = &mut cues;
    sink.on_hover_changed();
    sink.on_confirmed();
}
