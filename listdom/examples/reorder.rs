use std::fs::File;
use std::io::{self, Stdout, Write};

use crossterm::event::{self, Event as CrosstermEvent, KeyCode};
use crossterm::style::{Attribute, Print, SetAttribute};
use crossterm::{cursor, execute, queue, terminal};
use listdom::{Document, DragConfig, DragController, Element, PointerEvent, Position, Rect, Size};
use simplelog::{Config, LevelFilter, WriteLogger};

const TASKS: [&str; 6] = [
    "Write release notes",
    "Review open pull requests",
    "Triage new issues",
    "Update dependencies",
    "Fix flaky layout test",
    "Plan next sprint",
];

fn main() -> io::Result<()> {
    let log_file = File::create("reorder.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(
        stdout,
        terminal::EnterAlternateScreen,
        cursor::Hide,
        event::EnableMouseCapture
    )?;

    let result = run(&mut stdout);

    execute!(
        stdout,
        event::DisableMouseCapture,
        cursor::Show,
        terminal::LeaveAlternateScreen
    )?;
    terminal::disable_raw_mode()?;
    result
}

fn run(stdout: &mut Stdout) -> io::Result<()> {
    let config = DragConfig::default();
    let mut doc = Document::new(list(&config), Rect::new(2, 2, 40, 20));
    let mut drag = DragController::new("tasks", config);
    let mut status = String::from("Drag to reorder, Ctrl+press to multi-select, 'q' to quit");

    loop {
        draw(stdout, &doc, drag.config(), &status)?;

        match event::read()? {
            CrosstermEvent::Key(key) if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) => {
                return Ok(());
            }
            CrosstermEvent::Mouse(mouse) => {
                let Some(mut pointer) = PointerEvent::from_crossterm(mouse) else {
                    continue;
                };
                if let Some(moved) = drag.handle(&mut doc, &mut pointer) {
                    status = format!(
                        "moved {:?} from {} to {}",
                        moved.items, moved.old_index, moved.new_index
                    );
                }
            }
            _ => {}
        }
    }
}

fn list(config: &DragConfig) -> Element {
    Element::col().id("tasks").children(TASKS.iter().enumerate().map(|(i, task)| {
        Element::text(format!("{}. {task}", i + 1))
            .id(format!("task-{i}"))
            .class(config.item_class.clone())
            .height(Size::Fixed(2))
    }))
}

fn draw(stdout: &mut Stdout, doc: &Document, config: &DragConfig, status: &str) -> io::Result<()> {
    queue!(stdout, terminal::Clear(terminal::ClearType::All))?;

    // Flow items first, floating ones on top.
    let mut children: Vec<&Element> = doc.root().child_elements().iter().collect();
    children.sort_by_key(|c| (c.position == Position::Absolute, c.z_index));

    for child in children {
        let Some(rect) = doc.rect(&child.id) else {
            continue;
        };
        let width = rect.width as usize;
        let label = if child.has_class(&config.placeholder_class) {
            "╌".repeat(width)
        } else {
            format!("{:<width$}", child.text_content())
        };

        if child.has_class(&config.dragging_class) {
            queue!(stdout, SetAttribute(Attribute::Reverse))?;
        } else if child.has_class(&config.multiple_class) {
            queue!(stdout, SetAttribute(Attribute::Bold))?;
        }
        queue!(
            stdout,
            cursor::MoveTo(rect.x, rect.y),
            Print(label),
            SetAttribute(Attribute::Reset)
        )?;
    }

    queue!(stdout, cursor::MoveTo(2, 0), Print(status))?;
    stdout.flush()
}
