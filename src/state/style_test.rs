use super::*;

fn index_of(display: &str) -> usize {
    STYLE_CHOICES.iter().position(|c| c.display == display).unwrap()
}

// =============================================================
// STYLE_CHOICES
// =============================================================

#[test]
fn display_to_form_value_mapping() {
    let pairs: Vec<(&str, &str)> = STYLE_CHOICES.iter().map(|c| (c.display, c.genre.form_value())).collect();
    assert_eq!(
        pairs,
        vec![
            ("rock", "rock"),
            ("jazz", "jazz"),
            ("edm", "electronic"),
            ("hip-hop", "hip-hop"),
            ("pop", "pop"),
            ("ambient", "ambient"),
            ("classical", "classical"),
            ("cinematic", "cinematic"),
        ]
    );
}

#[test]
fn every_genre_has_a_card() {
    for genre in Genre::ALL {
        assert!(STYLE_CHOICES.iter().any(|c| c.genre == genre), "{genre} has no card");
    }
}

// =============================================================
// StyleSelectionState
// =============================================================

#[test]
fn default_has_no_active_card() {
    let state = StyleSelectionState::default();
    assert_eq!(state.active, None);
    assert_eq!(state.hint, DEFAULT_HINT);
    assert!(state.hint_pulse.running);
    assert!(state.vinyl_spin.running);
    assert!(!state.field_highlight.on);
}

#[test]
fn selecting_rock_writes_rock() {
    let mut state = StyleSelectionState::default();
    let effects = state.select(index_of("rock")).unwrap();
    assert_eq!(effects.genre.form_value(), "rock");
}

#[test]
fn selecting_edm_writes_electronic() {
    let mut state = StyleSelectionState::default();
    let effects = state.select(index_of("edm")).unwrap();
    assert_eq!(effects.genre.form_value(), "electronic");
    assert_eq!(state.hint, "🎧 Сделай танцевальный EDM трек");
}

#[test]
fn selection_is_exclusive() {
    let mut state = StyleSelectionState::default();
    state.select(0);
    state.select(3);
    let active: Vec<usize> = (0..STYLE_CHOICES.len()).filter(|&i| state.is_active(i)).collect();
    assert_eq!(active, vec![3]);
}

#[test]
fn selection_restarts_animations_and_raises_highlight() {
    let mut state = StyleSelectionState::default();
    let effects = state.select(1).unwrap();
    assert!(!state.hint_pulse.running);
    assert!(!state.vinyl_spin.running);
    assert!(state.field_highlight.on);

    assert!(state.hint_pulse.resume(effects.hint_seq));
    assert!(state.vinyl_spin.resume(effects.vinyl_seq));
    assert!(state.field_highlight.lower(effects.highlight_seq));
}

#[test]
fn quick_reselect_keeps_highlight_for_the_new_window() {
    let mut state = StyleSelectionState::default();
    let first = state.select(0).unwrap();
    let second = state.select(4).unwrap();
    assert!(!state.field_highlight.lower(first.highlight_seq));
    assert!(state.field_highlight.on);
    assert!(!state.hint_pulse.resume(first.hint_seq));
    assert!(state.hint_pulse.resume(second.hint_seq));
}

#[test]
fn out_of_range_select_changes_nothing() {
    let mut state = StyleSelectionState::default();
    assert_eq!(state.select(STYLE_CHOICES.len()), None);
    assert_eq!(state, StyleSelectionState::default());
}

#[test]
fn hover_cue_skips_active_card() {
    let mut state = StyleSelectionState::default();
    assert!(state.hover_plays_cue(2));
    state.select(2);
    assert!(!state.hover_plays_cue(2));
    assert!(state.hover_plays_cue(5));
    assert!(!state.hover_plays_cue(99));
}
