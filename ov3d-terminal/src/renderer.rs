/// ASCII wireframe rasterizer for terminal rendering
use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use ov3d_core::{Camera, Face, Mesh};
use std::io::Write;

/// Character luminosity ramp for depth shading (darkest to lightest)
const LUMINOSITY_RAMP: &[char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// Wireframe renderer that converts mesh face loops to terminal characters
pub struct WireframeRenderer {
    width: usize,
    height: usize,
    depth_buffer: Vec<f32>,
    char_buffer: Vec<char>,
}

impl WireframeRenderer {
    pub fn new(width: usize, height: usize) -> Self {
        let size = width * height;
        Self {
            width,
            height,
            depth_buffer: vec![f32::INFINITY; size],
            char_buffer: vec![' '; size],
        }
    }

    pub fn clear(&mut self) {
        for i in 0..self.depth_buffer.len() {
            self.depth_buffer[i] = f32::INFINITY;
            self.char_buffer[i] = ' ';
        }
    }

    /// Draw every face of the mesh as a closed line loop.
    pub fn render_mesh(&mut self, mesh: &Mesh, camera: &Camera) {
        for face in mesh.faces() {
            self.render_face(face, mesh, camera);
        }
    }

    fn render_face(&mut self, face: &Face, mesh: &Mesh, camera: &Camera) {
        let vertices = mesh.vertices();

        let mut screen = Vec::with_capacity(face.indices.len());
        for &index in &face.indices {
            screen.push(camera.project_to_screen(
                &vertices[index].position,
                self.width as u32,
                self.height as u32,
            ));
        }

        // Boundary loop: each vertex connects to the next, the last back to
        // the first. Segments with a clipped endpoint are skipped.
        for i in 0..screen.len() {
            let j = (i + 1) % screen.len();
            if let (Some(a), Some(b)) = (screen[i], screen[j]) {
                self.draw_segment(a, b);
            }
        }
    }

    /// Bresenham over the cell grid, interpolating depth along the run.
    fn draw_segment(&mut self, a: (f32, f32, f32), b: (f32, f32, f32)) {
        let (x0, y0) = (a.0.round() as i32, a.1.round() as i32);
        let (x1, y1) = (b.0.round() as i32, b.1.round() as i32);

        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        let steps = dx.max(-dy).max(1);
        let mut x = x0;
        let mut y = y0;
        let mut step = 0;

        loop {
            let t = step as f32 / steps as f32;
            let depth = a.2 + (b.2 - a.2) * t;
            self.plot(x, y, depth);

            if x == x1 && y == y1 {
                break;
            }

            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
            step += 1;
        }
    }

    fn plot(&mut self, x: i32, y: i32, depth: f32) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }

        let idx = y as usize * self.width + x as usize;
        if depth < self.depth_buffer[idx] {
            self.depth_buffer[idx] = depth;
            self.char_buffer[idx] = shade(depth);
        }
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for y in 0..self.height {
            for x in 0..self.width {
                let idx = y * self.width + x;
                let c = self.char_buffer[idx];

                // Color based on character intensity
                let color = match c {
                    ' ' | '.' | ':' => Color::DarkGrey,
                    '-' | '=' => Color::Grey,
                    '+' | '*' => Color::White,
                    '#' | '%' | '@' => Color::Cyan,
                    _ => Color::White,
                };

                writer.queue(SetForegroundColor(color))?;
                writer.queue(Print(c))?;
            }
            writer.queue(Print('\n'))?;
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

/// Map normalized-device depth to a ramp character, near bright, far dim.
/// Never returns a blank so drawn lines stay visible.
fn shade(depth: f32) -> char {
    let brightness = 1.0 - ((depth + 1.0) * 0.5).clamp(0.0, 1.0);
    let index = (brightness * (LUMINOSITY_RAMP.len() - 1) as f32) as usize;
    LUMINOSITY_RAMP[index.clamp(1, LUMINOSITY_RAMP.len() - 1)]
}
