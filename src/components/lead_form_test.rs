use super::*;

use crate::state::lead_form::LeadFormState;

fn filled(fields: LeadFields) {
    fields.name.set("  Анна ".to_owned());
    fields.email.set("anna@example.com".to_owned());
    fields.phone.set("+7 (999) 123-45-67".to_owned());
    fields.style.set("jazz".to_owned());
    fields.has_text.set(true);
    fields.text_description.set("Про море".to_owned());
    fields.message.set("К субботе".to_owned());
}

// =============================================================
// LeadFields
// =============================================================

#[test]
fn draft_snapshots_every_field() {
    let owner = Owner::new();
    owner.with(|| {
        let fields = LeadFields::new();
        filled(fields);
        let draft = fields.draft();
        assert_eq!(draft.name, "  Анна ");
        assert_eq!(draft.email, "anna@example.com");
        assert_eq!(draft.phone, "+7 (999) 123-45-67");
        assert_eq!(draft.style, "jazz");
        assert!(draft.has_text);
        assert_eq!(draft.text_description, "Про море");
        assert_eq!(draft.message, "К субботе");
    });
}

#[test]
fn reset_clears_fields_and_collapses_description() {
    let owner = Owner::new();
    owner.with(|| {
        let fields = LeadFields::new();
        filled(fields);
        fields.reset();
        let draft = fields.draft();
        assert_eq!(draft, LeadDraft::default());
        assert!(!fields.has_text.get_untracked());
    });
}

#[test]
fn filled_draft_passes_the_submit_guard() {
    let owner = Owner::new();
    owner.with(|| {
        let fields = LeadFields::new();
        filled(fields);
        let mut form = LeadFormState::default();
        assert!(matches!(form.begin_submit(&fields.draft()), SubmitDecision::Send(_)));
        assert!(form.is_loading());
    });
}
