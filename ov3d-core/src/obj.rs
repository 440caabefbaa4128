/// Parser for the line-oriented OBJ-subset mesh format
///
/// Two record kinds matter: `v x y z` appends a vertex and `f i j k ...`
/// appends a face of 1-based vertex references (negative references count
/// back from the end of the vertex list so far). Any other leading token is
/// ignored. Parsing is line-tolerant: a malformed vertex line or an
/// unusable face index token is skipped with a warning rather than aborting
/// the load. Only an unreadable file or a file that yields zero vertices is
/// fatal.
use nom::{
    character::complete::{i64 as signed_int, multispace0, multispace1},
    number::complete::float,
    IResult,
};
use std::fs;
use std::path::Path;
use tracing::warn;

use crate::error::{LoadError, LoadResult};
use crate::mesh::{Face, Mesh, Vertex};

/// A face survives only if at least this many of its index tokens resolve.
const MIN_FACE_INDICES: usize = 3;

/// Load a mesh from a file.
///
/// Fails with [`LoadError::FileOpen`] when the path is unreadable and
/// [`LoadError::EmptyMesh`] when no vertices survive parsing; the returned
/// mesh has its baseline frozen and transform parameters at defaults.
pub fn load_obj(path: impl AsRef<Path>) -> LoadResult<Mesh> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| LoadError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;

    let (vertices, faces) = parse_records(&contents);
    if vertices.is_empty() {
        return Err(LoadError::EmptyMesh);
    }

    Ok(Mesh::from_parts(vertices, faces, path.display().to_string()))
}

/// Parse mesh text directly, leaving the filename empty.
pub fn parse_obj(input: &str) -> LoadResult<Mesh> {
    let (vertices, faces) = parse_records(input);
    if vertices.is_empty() {
        return Err(LoadError::EmptyMesh);
    }

    Ok(Mesh::from_parts(vertices, faces, String::new()))
}

impl Mesh {
    /// Replace this mesh's contents with the file at `path`.
    ///
    /// The previous contents are discarded before the attempt, so a failed
    /// load leaves the mesh empty rather than keeping stale buffers.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> LoadResult<()> {
        self.clear();
        *self = load_obj(path)?;
        Ok(())
    }
}

fn parse_records(input: &str) -> (Vec<Vertex>, Vec<Face>) {
    let mut vertices = Vec::new();
    let mut faces = Vec::new();

    for (line_no, line) in input.lines().enumerate() {
        let trimmed = line.trim();
        let mut tokens = trimmed.split_whitespace();

        match tokens.next() {
            Some("v") => match float_triple(&trimmed[1..]) {
                Ok((_, (x, y, z))) => vertices.push(Vertex::new(x, y, z)),
                Err(_) => warn!(
                    "line {}: skipping malformed vertex record '{}'",
                    line_no + 1,
                    trimmed
                ),
            },
            Some("f") => {
                let mut face = Face::default();
                for token in tokens {
                    match resolve_index(token, vertices.len()) {
                        Some(index) => face.indices.push(index),
                        None => warn!(
                            "line {}: skipping unusable face index '{}'",
                            line_no + 1,
                            token
                        ),
                    }
                }
                if face.indices.len() >= MIN_FACE_INDICES {
                    faces.push(face);
                }
            }
            _ => {}
        }
    }

    (vertices, faces)
}

/// Resolve one face index token against the vertices seen so far.
///
/// References are 1-based; a negative reference counts back from the end of
/// the current vertex list. Returns the zero-based index, or `None` when
/// the token has no leading integer or resolves out of range.
fn resolve_index(token: &str, vertex_count: usize) -> Option<usize> {
    let (_, reference) = signed_int::<&str, nom::error::Error<&str>>(token).ok()?;

    let resolved = if reference < 0 {
        vertex_count as i64 + reference + 1
    } else {
        reference
    };

    if resolved < 1 || resolved > vertex_count as i64 {
        return None;
    }

    Some(resolved as usize - 1)
}

fn float_triple(input: &str) -> IResult<&str, (f32, f32, f32)> {
    let (input, _) = multispace0(input)?;
    let (input, x) = float(input)?;
    let (input, _) = multispace1(input)?;
    let (input, y) = float(input)?;
    let (input, _) = multispace1(input)?;
    let (input, z) = float(input)?;
    Ok((input, (x, y, z)))
}
