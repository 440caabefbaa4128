/// Terminal-based ASCII wireframe mesh viewer
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self},
};
use ov3d_core::{Camera, Mesh};
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};

pub mod renderer;

pub use renderer::WireframeRenderer;

const ROTATE_STEP: f32 = 5.0; // degrees
const TRANSLATE_STEP: f32 = 0.1;
const SCALE_STEP: f32 = 1.1;

/// Main application struct for the terminal viewer
pub struct TerminalApp {
    mesh: Mesh,
    camera: Camera,
    renderer: WireframeRenderer,
    running: bool,
    last_frame: Instant,
    frame_count: u32,
    fps: f32,
}

impl TerminalApp {
    pub fn new(mesh: Mesh) -> io::Result<Self> {
        let (width, height) = terminal::size()?;

        Ok(Self {
            mesh,
            camera: Camera::new(width as u32, height as u32),
            renderer: WireframeRenderer::new(width as usize, height as usize),
            running: true,
            last_frame: Instant::now(),
            frame_count: 0,
            fps: 0.0,
        })
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        let target_frame_time = Duration::from_millis(1000 / 30); // 30 FPS target

        while self.running {
            let frame_start = Instant::now();

            // Handle input
            if event::poll(Duration::from_millis(0))? {
                self.handle_input()?;
            }

            // Render
            self.render()?;

            // Frame timing
            self.frame_count += 1;
            let elapsed = frame_start.elapsed();
            if elapsed < target_frame_time {
                std::thread::sleep(target_frame_time - elapsed);
            }

            // Update FPS counter
            let now = Instant::now();
            if (now - self.last_frame).as_secs() >= 1 {
                self.fps = self.frame_count as f32 / (now - self.last_frame).as_secs_f32();
                self.frame_count = 0;
                self.last_frame = now;
            }
        }

        Ok(())
    }

    /// Map keys to the core's mutators.
    ///
    /// The transform parameters are absolute, so each key reads the current
    /// value back from the mesh, adjusts it, and replaces it; the app keeps
    /// no transform state of its own.
    fn handle_input(&mut self) -> io::Result<()> {
        if let Event::Key(KeyEvent { code, .. }) = event::read()? {
            let params = *self.mesh.params();
            let rot = params.rotate;
            let pos = params.translate;

            match code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.running = false;
                }
                KeyCode::Char('w') | KeyCode::Up => {
                    self.mesh.rotate(rot.x + ROTATE_STEP, rot.y, rot.z);
                }
                KeyCode::Char('s') | KeyCode::Down => {
                    self.mesh.rotate(rot.x - ROTATE_STEP, rot.y, rot.z);
                }
                KeyCode::Char('a') | KeyCode::Left => {
                    self.mesh.rotate(rot.x, rot.y - ROTATE_STEP, rot.z);
                }
                KeyCode::Char('d') | KeyCode::Right => {
                    self.mesh.rotate(rot.x, rot.y + ROTATE_STEP, rot.z);
                }
                KeyCode::Char('e') => {
                    self.mesh.rotate(rot.x, rot.y, rot.z + ROTATE_STEP);
                }
                KeyCode::Char('r') => {
                    self.mesh.rotate(rot.x, rot.y, rot.z - ROTATE_STEP);
                }
                KeyCode::Char('+') | KeyCode::Char('=') => {
                    self.mesh.scale(params.scale * SCALE_STEP);
                }
                KeyCode::Char('-') => {
                    // The core rejects factors at or below its minimum and
                    // keeps the previous value; nothing to track here.
                    self.mesh.scale(params.scale / SCALE_STEP);
                }
                KeyCode::Char('j') => {
                    self.mesh.translate(pos.x - TRANSLATE_STEP, pos.y, pos.z);
                }
                KeyCode::Char('l') => {
                    self.mesh.translate(pos.x + TRANSLATE_STEP, pos.y, pos.z);
                }
                KeyCode::Char('i') => {
                    self.mesh.translate(pos.x, pos.y + TRANSLATE_STEP, pos.z);
                }
                KeyCode::Char('k') => {
                    self.mesh.translate(pos.x, pos.y - TRANSLATE_STEP, pos.z);
                }
                KeyCode::Char('u') => {
                    self.mesh.translate(pos.x, pos.y, pos.z + TRANSLATE_STEP);
                }
                KeyCode::Char('m') => {
                    self.mesh.translate(pos.x, pos.y, pos.z - TRANSLATE_STEP);
                }
                KeyCode::Char('p') => {
                    self.camera.toggle_mode();
                }
                KeyCode::Char('c') => {
                    self.mesh.clear();
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn render(&mut self) -> io::Result<()> {
        // Clear renderer
        self.renderer.clear();

        // Render mesh
        self.renderer.render_mesh(&self.mesh, &self.camera);

        // Output to terminal
        let mut stdout = stdout();
        queue!(stdout, cursor::MoveTo(0, 0))?;

        self.renderer.draw(&mut stdout)?;

        // Draw UI overlay
        let name = if self.mesh.filename().is_empty() {
            "(no mesh)"
        } else {
            self.mesh.filename()
        };
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "{} | vertices: {} edges: {} scale: {:.2} | FPS: {:.1} | WASD/Arrows+ER=Rotate IJKLUM=Move +/-=Scale P=Projection C=Clear Q=Quit",
                name,
                self.mesh.vertex_count(),
                self.mesh.edge_count(),
                self.mesh.params().scale,
                self.fps
            )),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}
