use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use yappad::app::{Command, Event};
use yappad::preview::graphics::GraphicsOp;
use yappad::preview::{CellPos, ImageConverter, ImageGeometry, RecordingSink};
use yappad::worker::{CommandRunner, Dispatcher};

const TIMEOUT: Duration = Duration::from_secs(5);

/// Converter that "renders" every image to the bytes of its file name.
struct NameConverter;

impl ImageConverter for NameConverter {
    fn convert(&self, path: &Path, _cols: usize, _rows: usize) -> Option<Vec<u8>> {
        path.file_name()
            .filter(|name| !name.to_string_lossy().starts_with("broken"))
            .map(|name| name.to_string_lossy().into_owned().into_bytes())
    }
}

fn dispatcher() -> (Dispatcher, RecordingSink, Receiver<Event>) {
    let sink = RecordingSink::new();
    let runner = CommandRunner::new(Arc::new(sink.clone()), Arc::new(NameConverter));
    let (tx, rx) = mpsc::channel();
    (Dispatcher::new(runner, tx), sink, rx)
}

fn collect(rx: &Receiver<Event>, count: usize) -> Vec<Event> {
    (0..count)
        .map(|_| rx.recv_timeout(TIMEOUT).expect("completion event"))
        .collect()
}

fn geometry() -> ImageGeometry {
    ImageGeometry {
        cols: 40,
        rows: 20,
        origin: CellPos { col: 30, row: 4 },
    }
}

fn image_preview(path: PathBuf) -> Command {
    Command::sequence(vec![
        Command::ClearGraphics,
        Command::BlankViewport,
        Command::RenderImage {
            path,
            geometry: geometry(),
        },
    ])
}

#[test]
fn image_sequence_completes_in_order() {
    let (dispatcher, sink, rx) = dispatcher();
    let path = PathBuf::from("/vault/daily/cat.png");

    dispatcher.dispatch(image_preview(path.clone())).unwrap();

    assert_eq!(
        collect(&rx, 3),
        vec![
            Event::GraphicsCleared,
            Event::ViewportCleared,
            Event::ImageRendered { path, drawn: true },
        ]
    );
    assert_eq!(
        sink.ops(),
        vec![
            GraphicsOp::Clear,
            GraphicsOp::Draw {
                origin: CellPos { col: 30, row: 4 },
                len: "cat.png".len(),
            },
        ]
    );
}

#[test]
fn failed_conversion_draws_nothing() {
    let (dispatcher, sink, rx) = dispatcher();
    let path = PathBuf::from("/vault/broken.png");

    dispatcher
        .dispatch(Command::RenderImage {
            path: path.clone(),
            geometry: geometry(),
        })
        .unwrap();

    assert_eq!(collect(&rx, 1), vec![Event::ImageRendered { path, drawn: false }]);
    assert!(sink.ops().is_empty());
}

#[test]
fn text_preview_arrives_highlighted() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("note.md");
    fs::write(&path, "# Title\n").unwrap();
    let (dispatcher, _sink, rx) = dispatcher();

    dispatcher
        .dispatch(Command::sequence(vec![
            Command::ClearGraphics,
            Command::LoadText { path: path.clone() },
        ]))
        .unwrap();

    let events = collect(&rx, 2);
    assert_eq!(events[0], Event::GraphicsCleared);
    match &events[1] {
        Event::TextLoaded { path: loaded, content } => {
            assert_eq!(loaded, &path);
            assert_eq!(strip_ansi_escapes::strip_str(content), "# Title\n");
        }
        other => panic!("unexpected event {other:?}"),
    }
}

#[test]
fn batch_children_each_complete_once() {
    let (dispatcher, _sink, rx) = dispatcher();

    dispatcher
        .dispatch(Command::batch(vec![
            Command::ClearGraphics,
            Command::BlankViewport,
            Command::Quit,
        ]))
        .unwrap();

    let mut names: Vec<&str> = collect(&rx, 3).iter().map(Event::name).collect();
    names.sort_unstable();
    assert_eq!(names, vec!["graphics_cleared", "quit", "viewport_cleared"]);
    assert!(rx.recv_timeout(Duration::from_millis(100)).is_err());
}

#[test]
fn nested_batch_inside_sequence_finishes_before_next_step() {
    let (dispatcher, _sink, rx) = dispatcher();

    dispatcher
        .dispatch(Command::sequence(vec![
            Command::batch(vec![Command::ClearGraphics, Command::BlankViewport]),
            Command::Quit,
        ]))
        .unwrap();

    let events = collect(&rx, 3);
    assert_eq!(events[2], Event::Quit);
}

#[test]
fn editor_on_a_worker_reports_failure() {
    let (dispatcher, _sink, rx) = dispatcher();
    let path = PathBuf::from("/vault/a.md");

    dispatcher
        .dispatch(Command::OpenEditor { path: path.clone() })
        .unwrap();

    match collect(&rx, 1).remove(0) {
        Event::EditorClosed { path: closed, error } => {
            assert_eq!(closed, path);
            assert!(error.is_some());
        }
        other => panic!("unexpected event {other:?}"),
    }
}
