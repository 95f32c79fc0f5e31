//! Player — the interactive terminal host.
//!
//! Owns the animation state, drives the engine once per display refresh and
//! draws the resulting grid. Mouse input perturbs the field and clicks cycle
//! through the fields. The player makes no rendering decisions of its own;
//! it draws whatever the engine produced.

pub mod config;
pub mod state;

use std::io::{self, Write};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::{cursor, execute, queue, style, terminal};
use log::{debug, info};

use crate::engine::reveal::FRAME_PERIOD;
use crate::engine::Engine;
use crate::menubar::queue_menu;
use crate::renderer::Renderer;
use crate::types::{Cell, Color, Grid, Style, SurfaceBox, GRID_HEIGHT, GRID_WIDTH};
use config::{matches_binding, PlayerConfig};
use state::AnimationState;

/// Rows reserved above the canvas for the menu bar.
const CANVAS_OFFSET: u16 = 1;

/// Page colour behind the canvas.
const PAPER: Color = Color::rgb(0xF0, 0xEE, 0xE6);
/// Ink for background glyphs; message text brings its own colour.
const INK: Color = Color::rgb(0x33, 0x33, 0x33);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub struct Player {
    config: PlayerConfig,
    state: AnimationState,
    /// Canvas bounds in terminal cells; `None` while the terminal is too small
    /// or could not be measured.
    surface: Option<SurfaceBox>,
    /// What is currently on screen, for diffing.
    shown: Option<Grid>,
}

impl Player {
    pub fn new(config: PlayerConfig) -> Self {
        let state = AnimationState::new(config.initial_field);
        Self {
            config,
            state,
            surface: None,
            shown: None,
        }
    }

    /// Run the animation in the terminal until a quit key is pressed.
    ///
    /// Sets up the terminal, enters the event loop, and restores the terminal
    /// on exit (even on error).
    pub fn play(&mut self) -> Result<()> {
        let mut stdout = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            event::EnableMouseCapture,
            cursor::Hide,
            terminal::Clear(terminal::ClearType::All),
        )?;
        info!("player started at {} fps on field {}", self.config.fps, self.state.field);

        let result = self.run_loop(&mut stdout);

        // Always restore terminal state.
        let _ = execute!(
            stdout,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen,
        );
        let _ = terminal::disable_raw_mode();
        info!("player stopped at frame {}", self.state.frame);

        result
    }

    // -----------------------------------------------------------------------
    // Event loop
    // -----------------------------------------------------------------------

    fn run_loop(&mut self, stdout: &mut io::Stdout) -> Result<()> {
        let interval = Duration::from_secs_f64(1.0 / self.config.fps as f64);
        self.surface = match terminal::size() {
            Ok((w, h)) => measure_surface(w, h),
            Err(e) => {
                debug!("terminal size unavailable: {e}");
                None
            }
        };
        self.redraw_all(stdout)?;

        let mut next_frame = Instant::now();
        loop {
            let timeout = next_frame.saturating_duration_since(Instant::now());
            if event::poll(timeout)? {
                let flow = match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
                    Event::Mouse(mouse) => {
                        self.handle_mouse(mouse);
                        Flow::Continue
                    }
                    Event::Resize(w, h) => {
                        debug!("resized to {w}x{h}");
                        self.surface = measure_surface(w, h);
                        self.redraw_all(stdout)?;
                        Flow::Continue
                    }
                    _ => Flow::Continue,
                };
                if flow == Flow::Quit {
                    break;
                }
                continue;
            }

            self.render_frame(stdout)?;
            self.state.tick();

            next_frame += interval;
            let now = Instant::now();
            if next_frame < now {
                next_frame = now;
            }
        }

        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) -> Flow {
        let bindings = &self.config.key_bindings;
        if matches_binding(&bindings.quit, &key) || matches_binding(&bindings.quit_alt, &key) {
            return Flow::Quit;
        }
        if matches_binding(&bindings.next_field, &key) {
            self.state.click();
        }
        Flow::Continue
    }

    /// Left button down/up is the pointer press; a release completes a click.
    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let (x, y) = (mouse.column as f64, mouse.row as f64);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.state.pointer_moved(x, y);
                self.state.pointer_pressed();
            }
            MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved => {
                self.state.pointer_moved(x, y);
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.state.pointer_moved(x, y);
                if self.state.pointer.pressed {
                    self.state.click();
                }
                self.state.pointer_released();
            }
            _ => {}
        }
    }

    // -----------------------------------------------------------------------
    // Terminal output
    // -----------------------------------------------------------------------

    fn redraw_all(&mut self, stdout: &mut io::Stdout) -> Result<()> {
        self.shown = None;
        queue!(stdout, terminal::Clear(terminal::ClearType::All))?;
        self.render_menubar(stdout)?;
        if self.surface.is_none() {
            self.render_too_small(stdout)?;
        }
        stdout.flush()?;
        Ok(())
    }

    fn render_frame(&mut self, stdout: &mut io::Stdout) -> Result<()> {
        let Some(surface) = self.surface else {
            return Ok(());
        };
        let grid = Engine::render_frame(&self.state.frame_input(self.surface));
        let (left, top) = (surface.left as u16, surface.top as u16);

        queue!(stdout, terminal::BeginSynchronizedUpdate)?;
        match &self.shown {
            Some(prev) => {
                for change in Renderer::diff(prev, &grid) {
                    queue_cell(stdout, left + change.x, top + change.y, &change.cell)?;
                }
            }
            None => {
                for (y, row) in grid.rows().iter().enumerate() {
                    for (x, cell) in row.iter().enumerate() {
                        queue_cell(stdout, left + x as u16, top + y as u16, cell)?;
                    }
                }
            }
        }
        self.render_status(stdout, top + GRID_HEIGHT as u16)?;
        queue!(stdout, terminal::EndSynchronizedUpdate)?;
        stdout.flush()?;

        self.shown = Some(grid);
        Ok(())
    }

    fn render_menubar(&self, stdout: &mut io::Stdout) -> Result<()> {
        let quit = &self.config.key_bindings.quit;
        let next = &self.config.key_bindings.next_field;
        let items = [
            "[click] next field".to_string(),
            "[drag] ripple".to_string(),
            format!("[{next}] next field"),
            format!("[{quit}] quit"),
        ];
        queue!(stdout, cursor::MoveTo(0, 0))?;
        queue_menu(stdout, &items)?;
        Ok(())
    }

    fn render_status(&self, stdout: &mut io::Stdout, row: u16) -> Result<()> {
        let (_, term_h) = terminal::size()?;
        if row >= term_h {
            return Ok(()); // No room for status bar.
        }

        let status = format!(
            " {:<8} frame {:>3}/{} ",
            self.state.field.name(),
            self.state.frame,
            FRAME_PERIOD,
        );
        let mut cs = style::ContentStyle::default();
        cs.attributes.set(style::Attribute::Dim);

        queue!(
            stdout,
            cursor::MoveTo(0, row),
            style::PrintStyledContent(style::StyledContent::new(cs, status)),
        )?;
        Ok(())
    }

    fn render_too_small(&self, stdout: &mut io::Stdout) -> Result<()> {
        queue!(
            stdout,
            cursor::MoveTo(0, CANVAS_OFFSET),
            style::Print(format!(
                "Terminal too small: need {}x{}",
                GRID_WIDTH,
                GRID_HEIGHT as u16 + CANVAS_OFFSET + 1,
            )),
        )?;
        Ok(())
    }
}

/// Where the canvas sits in a terminal of `width`×`height` cells: centred
/// horizontally below the menu bar, with one row left for the status bar.
pub fn measure_surface(width: u16, height: u16) -> Option<SurfaceBox> {
    let need_w = GRID_WIDTH as u16;
    let need_h = GRID_HEIGHT as u16 + CANVAS_OFFSET + 1;
    if width < need_w || height < need_h {
        debug!("terminal {width}x{height} cannot hold the canvas");
        return None;
    }
    Some(SurfaceBox {
        left: ((width - need_w) / 2) as f64,
        top: CANVAS_OFFSET as f64,
        width: GRID_WIDTH as f64,
        height: GRID_HEIGHT as f64,
    })
}

fn queue_cell(stdout: &mut io::Stdout, x: u16, y: u16, cell: &Cell) -> Result<()> {
    let cs = to_content_style(&cell.style);
    queue!(
        stdout,
        cursor::MoveTo(x, y),
        style::PrintStyledContent(style::StyledContent::new(cs, cell.ch)),
    )?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Style conversion
// ---------------------------------------------------------------------------

pub fn to_content_style(s: &Style) -> style::ContentStyle {
    let mut cs = style::ContentStyle::default();
    cs.foreground_color = Some(to_ct_color(&s.fg.unwrap_or(INK)));
    cs.background_color = Some(to_ct_color(&PAPER));
    if s.bold {
        cs.attributes.set(style::Attribute::Bold);
    }
    cs
}

pub fn to_ct_color(c: &Color) -> style::Color {
    style::Color::Rgb {
        r: c.r,
        g: c.g,
        b: c.b,
    }
}
