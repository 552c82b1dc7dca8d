use std::cell::RefCell;
use std::fs::File;
use std::io::{self, Write};
use std::rc::Rc;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::{cursor, execute, queue, terminal};
use simplelog::{Config, LevelFilter, WriteLogger};
use tuidrawer::{
    Backdrop, Direction, Drawer, DrawerConfig, Easing, Rect, Rgb, Style, ViewportTracker,
};

const PANEL_CONTENT_WIDTH: u16 = 32;

fn main() -> io::Result<()> {
    // Set up file logging
    let log_file = File::create("drawer.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;

    let result = run(&mut stdout);

    execute!(stdout, terminal::LeaveAlternateScreen, cursor::Show)?;
    terminal::disable_raw_mode()?;
    result
}

fn run(stdout: &mut io::Stdout) -> io::Result<()> {
    let mut tracker = ViewportTracker::detect()?;
    let drawer = Rc::new(RefCell::new(Drawer::new(
        DrawerConfig::new()
            .direction(Direction::Right)
            .easing(Easing::EaseOut)
            .container(Style::new().background(Rgb::new(40, 44, 70))),
    )));

    let (width, height) = tracker.size();
    drawer.borrow_mut().on_viewport_resize(width, height);
    let subscription = {
        let drawer = drawer.clone();
        tracker.subscribe(move |w, h| drawer.borrow_mut().on_viewport_resize(w, h))
    };

    let mut last_layout: Option<Rect> = None;

    loop {
        let now = Instant::now();
        let (width, height) = tracker.size();

        let animating = {
            let mut drawer = drawer.borrow_mut();
            let animating = drawer.tick(now);
            draw(stdout, &drawer, width, height)?;
            // Report the panel's layout when it changes, as a layout engine
            // would after laying out the mounted panel.
            if drawer.is_open() {
                let rect = Rect::new(0, 0, PANEL_CONTENT_WIDTH, height);
                if last_layout != Some(rect) {
                    drawer.on_layout(rect, now);
                    last_layout = Some(rect);
                }
            }
            animating
        };

        let timeout = if animating {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(250)
        };
        if event::poll(timeout)? {
            let ev = event::read()?;
            tracker.handle_event(&ev);
            if let Event::Key(key) = ev {
                if key.kind == KeyEventKind::Press {
                    let now = Instant::now();
                    match key.code {
                        KeyCode::Char('o') => drawer.borrow_mut().open(now),
                        KeyCode::Char('c') => drawer.borrow_mut().close(now),
                        KeyCode::Char('q') | KeyCode::Esc => break,
                        _ => {}
                    }
                }
            }
        }
    }

    tracker.unsubscribe(subscription);
    Ok(())
}

fn draw(stdout: &mut io::Stdout, drawer: &Drawer, width: u16, height: u16) -> io::Result<()> {
    let frame = drawer.frame();
    let backdrop = frame.map(|f| f.backdrop).unwrap_or(Backdrop::None);

    // Background, dimmed by the drawer's backdrop channel
    let base = backdrop.apply(Rgb::new(18, 48, 64));
    let blank = " ".repeat(width as usize);
    queue!(
        stdout,
        SetBackgroundColor(Color::Rgb {
            r: base.r,
            g: base.g,
            b: base.b
        })
    )?;
    for y in 0..height {
        queue!(stdout, cursor::MoveTo(0, y), Print(&blank))?;
    }
    queue!(
        stdout,
        cursor::MoveTo(2, 1),
        SetForegroundColor(Color::White),
        Print("o: open drawer   c: close drawer   q: quit")
    )?;

    // Panel surface
    if let Some(frame) = frame {
        if let Some(rect) = frame.panel_rect(width, height) {
            let bg = frame.container.background.unwrap_or(Rgb::new(60, 60, 60));
            queue!(
                stdout,
                SetBackgroundColor(Color::Rgb {
                    r: bg.r,
                    g: bg.g,
                    b: bg.b
                })
            )?;
            let x0 = rect.x.max(0) as u16;
            let x1 = rect.right().clamp(0, width as i32) as u16;
            let y0 = rect.y.max(0) as u16;
            let y1 = rect.bottom().clamp(0, height as i32) as u16;
            if x1 > x0 {
                let row = " ".repeat((x1 - x0) as usize);
                for y in y0..y1 {
                    queue!(stdout, cursor::MoveTo(x0, y), Print(&row))?;
                }
                queue!(
                    stdout,
                    cursor::MoveTo(x0 + 2, y0.saturating_add(1)),
                    SetForegroundColor(Color::White),
                    Print("Drawer")
                )?;
            }
        }
    }

    queue!(stdout, ResetColor)?;
    stdout.flush()?;
    Ok(())
}
