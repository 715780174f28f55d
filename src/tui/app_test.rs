use super::*;
use crate::display::DisplayState;
use crate::fs::mock::MockFs;
use crate::notify::{ChannelNotifier, IMPORT_MESSAGE};
use crate::widget::testing::widget_on;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};

/// テスト用の Model を構築するヘルパー
fn make_model() -> (Arc<MockFs>, Model, UnboundedReceiver<String>) {
    let fs = Arc::new(MockFs::new());
    let widget = widget_on(fs.clone()).into_shared();
    let (tx, rx) = unbounded_channel();
    let model = Model::new(
        widget,
        fs.clone(),
        Arc::new(ChannelNotifier::new(tx)),
        PathBuf::from("/export/quotes.json"),
    );
    (fs, model, rx)
}

fn type_text(model: &mut Model, text: &str) {
    for c in text.chars() {
        update(model, Msg::Input(c), Instant::now());
    }
}

// ============================================================================
// key_to_msg
// ============================================================================

#[test]
fn main_keys_map_to_actions() {
    let (_, model, _) = make_model();
    assert_eq!(model.key_to_msg(KeyCode::Char('n')), Some(Msg::NextQuote));
    assert_eq!(model.key_to_msg(KeyCode::Char('a')), Some(Msg::OpenAddForm));
    assert_eq!(model.key_to_msg(KeyCode::Char('c')), Some(Msg::OpenCategories));
    assert_eq!(model.key_to_msg(KeyCode::Char('e')), Some(Msg::Export));
    assert_eq!(model.key_to_msg(KeyCode::Char('i')), Some(Msg::OpenImport));
    assert_eq!(model.key_to_msg(KeyCode::Char('s')), Some(Msg::SyncNow));
    assert_eq!(model.key_to_msg(KeyCode::Char('q')), Some(Msg::Quit));
}

#[test]
fn q_is_text_input_inside_form() {
    let (_, mut model, _) = make_model();
    update(&mut model, Msg::OpenAddForm, Instant::now());
    assert_eq!(model.key_to_msg(KeyCode::Char('q')), Some(Msg::Input('q')));
}

#[test]
fn any_key_dismisses_dialog() {
    let (_, mut model, _) = make_model();
    model.dialog = Some("error".to_string());
    assert_eq!(model.key_to_msg(KeyCode::Char('n')), Some(Msg::DismissDialog));
}

// ============================================================================
// add form
// ============================================================================

#[test]
fn add_form_submits_and_requests_push() {
    let (_, mut model, _) = make_model();
    update(&mut model, Msg::OpenAddForm, Instant::now());
    type_text(&mut model, "Typed quote");
    update(&mut model, Msg::SwitchField, Instant::now());
    type_text(&mut model, "Typed");

    let effect = update(&mut model, Msg::Submit, Instant::now());

    assert_eq!(effect.push, Some(Quote::new("Typed quote", "Typed")));
    assert!(matches!(model.mode, Mode::Main));
    assert_eq!(lock(&model.widget).quotes().len(), 4);
}

#[test]
fn add_form_with_empty_category_shows_dialog_and_keeps_input() {
    let (_, mut model, _) = make_model();
    update(&mut model, Msg::OpenAddForm, Instant::now());
    type_text(&mut model, "No category");

    let effect = update(&mut model, Msg::Submit, Instant::now());

    assert_eq!(effect, UpdateEffect::default());
    assert_eq!(
        model.dialog.as_deref(),
        Some("Please enter both quote and category.")
    );
    match &model.mode {
        Mode::AddForm(form) => assert_eq!(form.text, "No category"),
        _ => panic!("form should stay open"),
    }
    assert_eq!(lock(&model.widget).quotes().len(), 3);
}

#[test]
fn backspace_edits_focused_field() {
    let (_, mut model, _) = make_model();
    update(&mut model, Msg::OpenAddForm, Instant::now());
    type_text(&mut model, "abc");
    update(&mut model, Msg::Backspace, Instant::now());

    match &model.mode {
        Mode::AddForm(form) => assert_eq!(form.text, "ab"),
        _ => panic!("form should be open"),
    }
}

// ============================================================================
// category select
// ============================================================================

#[test]
fn category_select_changes_filter() {
    let (fs, mut model, _) = make_model();
    update(&mut model, Msg::OpenCategories, Instant::now());
    // all -> Motivation -> Education
    update(&mut model, Msg::Down, Instant::now());
    update(&mut model, Msg::Down, Instant::now());
    update(&mut model, Msg::Submit, Instant::now());

    let widget = lock(&model.widget);
    assert_eq!(widget.selected().as_value(), "Education");
    assert_eq!(widget.state().quote().unwrap().category, "Education");
    assert_eq!(fs.content("/data/selectedCategory").as_deref(), Some("Education"));
}

#[test]
fn category_select_down_is_clamped() {
    let (_, mut model, _) = make_model();
    update(&mut model, Msg::OpenCategories, Instant::now());
    for _ in 0..10 {
        update(&mut model, Msg::Down, Instant::now());
    }

    match &model.mode {
        Mode::CategorySelect { state } => assert_eq!(state.selected(), Some(3)),
        _ => panic!("selector should be open"),
    }
}

// ============================================================================
// import / export
// ============================================================================

#[test]
fn import_success_notifies_through_notifier() {
    let (fs, mut model, mut rx) = make_model();
    fs.add_file("/in.json", r#"[{"text":"Imported","category":"File"}]"#);
    update(&mut model, Msg::OpenImport, Instant::now());
    type_text(&mut model, "/in.json");

    update(&mut model, Msg::Submit, Instant::now());

    assert!(model.dialog.is_none());
    assert_eq!(rx.try_recv().unwrap(), IMPORT_MESSAGE);
    assert_eq!(lock(&model.widget).quotes().len(), 4);
}

#[test]
fn import_non_array_shows_error_dialog() {
    let (fs, mut model, mut rx) = make_model();
    fs.add_file("/bad.json", r#"{"not":"an array"}"#);
    update(&mut model, Msg::OpenImport, Instant::now());
    type_text(&mut model, "/bad.json");

    update(&mut model, Msg::Submit, Instant::now());

    assert_eq!(
        model.dialog.as_deref(),
        Some("Error importing JSON: Invalid JSON format")
    );
    assert!(rx.try_recv().is_err());
    assert_eq!(lock(&model.widget).quotes().len(), 3);
}

#[test]
fn export_writes_file_and_notifies() {
    let (fs, mut model, _) = make_model();

    update(&mut model, Msg::Export, Instant::now());

    assert!(fs.content("/export/quotes.json").is_some());
    assert_eq!(model.notifications.len(), 1);
    assert!(model.notifications[0].message.contains("Exported 3 quote(s)"));
}

// ============================================================================
// notifications / misc
// ============================================================================

#[test]
fn notifications_expire_after_ttl() {
    let (_, mut model, _) = make_model();
    let start = Instant::now();
    update(&mut model, Msg::Notify("hello".to_string()), start);

    update(&mut model, Msg::Tick, start + Duration::from_secs(4));
    assert_eq!(model.notifications.len(), 1);

    update(&mut model, Msg::Tick, start + NOTIFICATION_TTL);
    assert!(model.notifications.is_empty());
}

#[test]
fn sync_now_requests_cycle() {
    let (_, mut model, _) = make_model();
    let effect = update(&mut model, Msg::SyncNow, Instant::now());
    assert!(effect.sync_now);
}

#[test]
fn next_quote_keeps_showing() {
    let (_, mut model, _) = make_model();
    update(&mut model, Msg::NextQuote, Instant::now());
    assert!(matches!(
        lock(&model.widget).state(),
        DisplayState::Showing(_)
    ));
}

#[test]
fn quit_sets_flag() {
    let (_, mut model, _) = make_model();
    update(&mut model, Msg::Quit, Instant::now());
    assert!(model.should_quit);
}
