/// Example: Load a mesh file and print its contents after a transform
///
/// Usage: cargo run --example dump_mesh -- path/to/model.obj

use std::env;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <mesh.obj>", args[0]);
        process::exit(1);
    }

    let mesh = match ov3d_core::load_obj(&args[1]) {
        Ok(mesh) => mesh,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    println!(
        "{}: {} vertices, {} faces, {} edges",
        mesh.filename(),
        mesh.vertex_count(),
        mesh.face_count(),
        mesh.edge_count()
    );

    let mut mesh = mesh;
    mesh.rotate(30.0, 45.0, 0.0);

    for (i, vertex) in mesh.vertices().iter().enumerate().take(8) {
        let p = vertex.position;
        println!("v[{i}] = ({:.3}, {:.3}, {:.3})", p.x, p.y, p.z);
    }
}
