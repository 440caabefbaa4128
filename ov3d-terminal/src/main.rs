/// OV3D Terminal Viewer
///
/// Loads a mesh from a line-oriented text file and displays it as an ASCII
/// wireframe. Controls:
///   - WASD / Arrow Keys: Rotate around X and Y
///   - E/R: Roll rotation
///   - I/J/K/L, U/M: Translate
///   - +/-: Scale
///   - P: Toggle projection mode
///   - C: Clear the mesh
///   - Q/ESC: Quit

use ov3d_terminal::TerminalApp;
use std::env;
use std::io;

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <mesh.obj>", args[0]);
        return Ok(());
    }

    let path = &args[1];

    println!("Loading mesh: {}", path);

    let mesh = ov3d_core::load_obj(path)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;

    println!(
        "Loaded {} vertices, {} faces, {} edges",
        mesh.vertex_count(),
        mesh.face_count(),
        mesh.edge_count()
    );
    println!("Starting terminal viewer (press Q to quit)...");
    std::thread::sleep(std::time::Duration::from_secs(1));

    // Run the terminal app
    let mut app = TerminalApp::new(mesh)?;
    app.run()?;

    Ok(())
}
