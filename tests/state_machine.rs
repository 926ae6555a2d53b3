use chrono::NaiveDate;
use filetime::{set_file_mtime, FileTime};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use yappad::app::list::FilterState;
use yappad::app::{Command, Event, KeyCode, KeyPress, Mode};
use yappad::domain::{Clock, JournalMode, SortMode};
use yappad::preview::{CellPos, ImageGeometry};
use yappad::ui::render;
use yappad::vault::Vault;
use yappad::{handle_event, initialize, AppState, Config};

const WIDTH: usize = 120;
const HEIGHT: usize = 40;

/// Creates a vault holding `files`, newest first in the order given.
fn vault(files: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    Vault::new(tmp.path()).bootstrap().unwrap();

    for (age, file) in files.iter().enumerate() {
        let path = tmp.path().join(file);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, format!("# {file}\n")).unwrap();
        let mtime = 1_710_000_000 - i64::try_from(age).unwrap() * 60;
        set_file_mtime(&path, FileTime::from_unix_time(mtime, 0)).unwrap();
    }
    tmp
}

fn start(tmp: &TempDir, journal: JournalMode) -> (AppState, Vec<Command>) {
    let clock = Clock::Fixed(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
    let mut state = initialize(&Config::default(), Vault::new(tmp.path()), journal, clock);
    let commands = handle_event(
        &mut state,
        &Event::Resize {
            width: WIDTH,
            height: HEIGHT,
        },
    );
    (state, commands)
}

fn press(state: &mut AppState, key: KeyPress) -> Vec<Command> {
    handle_event(state, &Event::Key(key))
}

fn type_text(state: &mut AppState, text: &str) {
    for c in text.chars() {
        press(state, KeyPress::char(c));
    }
}

fn erase(state: &mut AppState, count: usize) {
    for _ in 0..count {
        press(state, KeyPress::plain(KeyCode::Backspace));
    }
}

fn editor_path(commands: &[Command]) -> Option<PathBuf> {
    commands.iter().flat_map(Command::leaves).find_map(|c| match c {
        Command::OpenEditor { path } => Some(path.clone()),
        _ => None,
    })
}

fn text_preview(path: &Path) -> Command {
    Command::sequence(vec![
        Command::ClearGraphics,
        Command::LoadText {
            path: path.to_path_buf(),
        },
    ])
}

#[test]
fn startup_previews_the_newest_note() {
    let tmp = vault(&["daily/2024-03-15.md", "daily/2024-03-14.md"]);
    let (state, commands) = start(&tmp, JournalMode::Daily);

    assert!(state.ready);
    assert_eq!(state.selected_file.as_deref(), Some("2024-03-15.md"));
    assert_eq!(commands, vec![text_preview(&tmp.path().join("daily/2024-03-15.md"))]);
}

#[test]
fn new_daily_note_uses_template_and_opens_editor() {
    let tmp = vault(&[]);
    fs::write(tmp.path().join(".templates/daily.md"), "## Today\n").unwrap();
    let (mut state, _) = start(&tmp, JournalMode::Daily);

    assert_eq!(press(&mut state, KeyPress::ctrl('n')), vec![Command::ClearGraphics]);
    assert_eq!(state.mode, Mode::Input(yappad::app::InputKind::Create));

    let commands = press(&mut state, KeyPress::plain(KeyCode::Enter));
    let expected = tmp.path().join("daily/2024-03-15.md");

    assert_eq!(editor_path(&commands), Some(expected.clone()));
    assert_eq!(fs::read_to_string(&expected).unwrap(), "## Today\n");
    assert!(state.mode.is_browsing());
    assert_eq!(state.list.len(), 1);
}

#[test]
fn new_weekly_note_gets_iso_week_name() {
    let tmp = vault(&[]);
    let (mut state, _) = start(&tmp, JournalMode::Weekly);

    press(&mut state, KeyPress::ctrl('n'));
    let commands = press(&mut state, KeyPress::plain(KeyCode::Enter));

    assert_eq!(editor_path(&commands), Some(tmp.path().join("weekly/2024-W11.md")));
}

#[test]
fn named_note_is_created_relative_to_the_vault_root() {
    let tmp = vault(&[]);
    let (mut state, _) = start(&tmp, JournalMode::Monthly);

    press(&mut state, KeyPress::ctrl('n'));
    type_text(&mut state, "ideas/garden");
    let commands = press(&mut state, KeyPress::plain(KeyCode::Enter));

    let expected = tmp.path().join("ideas/garden.md");
    assert_eq!(editor_path(&commands), Some(expected.clone()));
    assert_eq!(fs::read_to_string(expected).unwrap(), "");
}

#[test]
fn tab_while_composing_retargets_the_default_name() {
    let tmp = vault(&[]);
    let (mut state, _) = start(&tmp, JournalMode::Daily);

    press(&mut state, KeyPress::ctrl('n'));
    press(&mut state, KeyPress::plain(KeyCode::Tab));
    assert_eq!(state.journal, JournalMode::Weekly);
    assert_eq!(state.input.placeholder(), "weekly/2024-W11.md (default)");

    let commands = press(&mut state, KeyPress::plain(KeyCode::Enter));
    assert_eq!(editor_path(&commands), Some(tmp.path().join("weekly/2024-W11.md")));
}

#[test]
fn image_preview_blanks_then_draws_over_the_pane() {
    let tmp = vault(&["daily/photo.png"]);
    let (_state, commands) = start(&tmp, JournalMode::Daily);

    assert_eq!(
        commands,
        vec![Command::sequence(vec![
            Command::ClearGraphics,
            Command::BlankViewport,
            Command::RenderImage {
                path: tmp.path().join("daily/photo.png"),
                geometry: ImageGeometry {
                    cols: 76,
                    rows: 34,
                    origin: CellPos { col: 43, row: 4 },
                },
            },
        ])]
    );
}

#[test]
fn preview_toggle_round_trips() {
    let tmp = vault(&["daily/a.md"]);
    let (mut state, _) = start(&tmp, JournalMode::Daily);
    let layout = state.layout();

    assert_eq!(press(&mut state, KeyPress::ctrl('p')), vec![Command::ClearGraphics]);
    assert!(!state.show_preview);
    assert_eq!(state.layout().viewport_width, 0);
    assert_eq!(state.layout().list_width, WIDTH - 2);

    let commands = press(&mut state, KeyPress::ctrl('p'));
    assert!(state.show_preview);
    assert_eq!(state.layout(), layout);
    assert_eq!(commands, vec![text_preview(&tmp.path().join("daily/a.md"))]);
}

#[test]
fn configured_hidden_preview_starts_single_pane() {
    let tmp = vault(&["daily/a.md"]);
    let config = Config::from_toml_str("show_preview = false").unwrap();
    let mut state = initialize(&config, Vault::new(tmp.path()), JournalMode::Daily, Clock::System);

    let commands = handle_event(&mut state, &Event::Resize { width: 80, height: 24 });

    assert!(commands.is_empty());
    assert!(!render(&state).plain_text().contains("# daily/a.md"));
}

#[test]
fn delete_needs_confirmation() {
    let tmp = vault(&["daily/keep.md"]);
    let (mut state, _) = start(&tmp, JournalMode::Daily);
    let path = tmp.path().join("daily/keep.md");

    press(&mut state, KeyPress::ctrl('d'));
    assert!(render(&state)
        .plain_text()
        .contains("Are you sure you want to delete this file? (y/n)"));
    press(&mut state, KeyPress::char('n'));
    assert!(path.exists());
    assert!(state.mode.is_browsing());

    press(&mut state, KeyPress::ctrl('d'));
    let commands = press(&mut state, KeyPress::char('y'));

    assert!(!path.exists());
    assert!(state.list.is_empty());
    assert_eq!(commands, Vec::<Command>::new());
    assert!(state.selected_file.is_none());
}

#[test]
fn rename_refuses_to_overwrite() {
    let tmp = vault(&["daily/a.md", "daily/b.md"]);
    let (mut state, _) = start(&tmp, JournalMode::Daily);

    press(&mut state, KeyPress::ctrl('r'));
    assert_eq!(state.input.value(), "daily/a.md");
    erase(&mut state, 4);
    type_text(&mut state, "b.md");
    press(&mut state, KeyPress::plain(KeyCode::Enter));

    assert!(state.mode.is_renaming());
    assert_eq!(fs::read_to_string(tmp.path().join("daily/a.md")).unwrap(), "# daily/a.md\n");
    assert_eq!(fs::read_to_string(tmp.path().join("daily/b.md")).unwrap(), "# daily/b.md\n");

    erase(&mut state, 4);
    type_text(&mut state, "c.md");
    press(&mut state, KeyPress::plain(KeyCode::Enter));

    assert!(state.mode.is_browsing());
    assert!(!tmp.path().join("daily/a.md").exists());
    assert_eq!(fs::read_to_string(tmp.path().join("daily/c.md")).unwrap(), "# daily/a.md\n");
}

#[test]
fn rename_can_move_a_note_between_journals() {
    let tmp = vault(&["daily/a.md"]);
    let (mut state, _) = start(&tmp, JournalMode::Daily);

    press(&mut state, KeyPress::ctrl('r'));
    press(&mut state, KeyPress::ctrl('u'));
    type_text(&mut state, "yearly/2024.md");
    press(&mut state, KeyPress::plain(KeyCode::Enter));

    assert!(tmp.path().join("yearly/2024.md").exists());
    assert!(state.list.is_empty());
}

#[test]
fn composing_filters_the_whole_vault_live() {
    let tmp = vault(&["daily/alpha.md", "weekly/beta.md", "ideas/alphabet.md"]);
    let (mut state, _) = start(&tmp, JournalMode::Daily);

    press(&mut state, KeyPress::ctrl('n'));
    type_text(&mut state, "ALPH");

    let titles: Vec<String> = (0..state.list.len())
        .filter_map(|i| state.list.visible_item(i).map(|item| item.title.clone()))
        .collect();
    assert_eq!(titles, vec!["daily/alpha.md", "ideas/alphabet.md"]);

    erase(&mut state, 4);
    assert_eq!(state.list.total_len(), 1);
}

#[test]
fn stale_text_preview_is_dropped() {
    let tmp = vault(&["daily/a.md", "daily/b.md"]);
    let (mut state, _) = start(&tmp, JournalMode::Daily);

    handle_event(
        &mut state,
        &Event::TextLoaded {
            path: tmp.path().join("daily/b.md"),
            content: "stale".to_string(),
        },
    );
    assert!(state.viewport.is_empty());

    handle_event(
        &mut state,
        &Event::TextLoaded {
            path: tmp.path().join("daily/a.md"),
            content: "fresh".to_string(),
        },
    );
    assert_eq!(state.viewport.visible_lines().first().map(String::as_str), Some("fresh"));
}

#[test]
fn moving_the_cursor_previews_the_next_note() {
    let tmp = vault(&["daily/a.md", "daily/b.md"]);
    let (mut state, _) = start(&tmp, JournalMode::Daily);

    let commands = press(&mut state, KeyPress::plain(KeyCode::Down));

    assert_eq!(state.selected_file.as_deref(), Some("b.md"));
    assert_eq!(commands, vec![text_preview(&tmp.path().join("daily/b.md"))]);
}

#[test]
fn digit_switches_journal() {
    let tmp = vault(&["daily/a.md", "yearly/2024.md"]);
    let (mut state, _) = start(&tmp, JournalMode::Daily);

    let commands = press(&mut state, KeyPress::char('4'));

    assert_eq!(state.journal, JournalMode::Yearly);
    assert_eq!(commands, vec![text_preview(&tmp.path().join("yearly/2024.md"))]);
    assert!(render(&state).plain_text().contains("Yearly"));

    press(&mut state, KeyPress::char('0'));
    assert_eq!(state.list.total_len(), 2);
}

#[test]
fn quit_clears_graphics_before_exiting() {
    let tmp = vault(&["daily/a.md"]);
    let (mut state, _) = start(&tmp, JournalMode::Daily);

    let commands = press(&mut state, KeyPress::ctrl('c'));
    assert_eq!(
        commands,
        vec![Command::sequence(vec![Command::ClearGraphics, Command::Quit])]
    );

    handle_event(&mut state, &Event::GraphicsCleared);
    handle_event(&mut state, &Event::Quit);
    assert!(state.should_quit);
}

fn visible_titles(state: &AppState) -> Vec<String> {
    (0..state.list.len())
        .filter_map(|i| state.list.visible_item(i).map(|item| item.title.clone()))
        .collect()
}

#[test]
fn rename_drops_a_committed_list_filter() {
    let tmp = vault(&["daily/alpha.md", "daily/zeta.md", "weekly/zed-plan.md"]);
    let (mut state, _) = start(&tmp, JournalMode::Daily);

    press(&mut state, KeyPress::char('/'));
    type_text(&mut state, "alp");
    press(&mut state, KeyPress::plain(KeyCode::Enter));
    assert_eq!(state.list.filter_state(), FilterState::FilterApplied);
    assert_eq!(visible_titles(&state), vec!["alpha.md"]);

    press(&mut state, KeyPress::ctrl('r'));
    assert_eq!(state.list.filter_state(), FilterState::Unfiltered);
    assert_eq!(state.input.value(), "daily/alpha.md");

    press(&mut state, KeyPress::ctrl('u'));
    type_text(&mut state, "z");

    assert_eq!(visible_titles(&state), vec!["daily/zeta.md", "weekly/zed-plan.md"]);
    assert_eq!(state.list.filter_query(), "");
}

#[test]
fn delete_prompt_drops_a_committed_list_filter() {
    let tmp = vault(&["daily/alpha.md", "daily/zeta.md"]);
    let (mut state, _) = start(&tmp, JournalMode::Daily);

    press(&mut state, KeyPress::char('/'));
    type_text(&mut state, "zet");
    press(&mut state, KeyPress::plain(KeyCode::Enter));
    press(&mut state, KeyPress::ctrl('d'));

    assert_eq!(state.mode, Mode::ConfirmDelete { target: "zeta.md".to_string() });
    assert_eq!(state.list.filter_state(), FilterState::Unfiltered);

    press(&mut state, KeyPress::char('y'));
    assert!(!tmp.path().join("daily/zeta.md").exists());
    assert!(tmp.path().join("daily/alpha.md").exists());
}

#[test]
fn sort_key_cycles_the_catalog_order() {
    let tmp = vault(&["daily/a.md", "daily/b.md", "daily/c.md"]);
    let (mut state, _) = start(&tmp, JournalMode::Daily);
    assert_eq!(visible_titles(&state), vec!["a.md", "b.md", "c.md"]);
    assert!(render(&state).plain_text().contains("Sort: Modified (Newest)"));

    press(&mut state, KeyPress::ctrl('s'));

    assert_eq!(state.sort, SortMode::ModifiedAsc);
    assert_eq!(visible_titles(&state), vec!["c.md", "b.md", "a.md"]);
    assert!(render(&state).plain_text().contains("Sort: Modified (Oldest)"));

    for _ in 0..3 {
        press(&mut state, KeyPress::ctrl('s'));
    }
    assert_eq!(state.sort, SortMode::ModifiedDesc);
    assert_eq!(visible_titles(&state), vec!["a.md", "b.md", "c.md"]);
}

#[test]
fn enter_opens_the_selected_note_in_its_journal() {
    let tmp = vault(&["daily/a.md", "daily/b.md"]);
    let (mut state, _) = start(&tmp, JournalMode::Daily);

    press(&mut state, KeyPress::plain(KeyCode::Down));
    let commands = press(&mut state, KeyPress::plain(KeyCode::Enter));

    assert_eq!(editor_path(&commands), Some(tmp.path().join("daily/b.md")));
}

#[test]
fn enter_in_all_mode_resolves_from_the_vault_root() {
    let tmp = vault(&["weekly/2024-W11.md", "daily/a.md"]);
    let (mut state, _) = start(&tmp, JournalMode::All);
    assert_eq!(state.selected_file.as_deref(), Some("weekly/2024-W11.md"));

    let commands = press(&mut state, KeyPress::plain(KeyCode::Enter));

    assert_eq!(editor_path(&commands), Some(tmp.path().join("weekly/2024-W11.md")));
}

#[test]
fn enter_while_filtering_commits_instead_of_opening() {
    let tmp = vault(&["daily/apple.md", "daily/berry.md"]);
    let (mut state, _) = start(&tmp, JournalMode::Daily);

    press(&mut state, KeyPress::char('/'));
    type_text(&mut state, "ber");
    let commands = press(&mut state, KeyPress::plain(KeyCode::Enter));

    assert_eq!(editor_path(&commands), None);
    assert_eq!(state.list.filter_state(), FilterState::FilterApplied);
    assert_eq!(visible_titles(&state), vec!["berry.md"]);

    let commands = press(&mut state, KeyPress::plain(KeyCode::Enter));
    assert_eq!(editor_path(&commands), Some(tmp.path().join("daily/berry.md")));
}

#[test]
fn enter_on_an_empty_list_does_nothing() {
    let tmp = vault(&[]);
    let (mut state, _) = start(&tmp, JournalMode::Daily);

    assert!(press(&mut state, KeyPress::plain(KeyCode::Enter)).is_empty());
}
