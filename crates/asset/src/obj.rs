//! Wavefront OBJ loader producing unindexed triangle meshes.
//!
//! Supported records: `v`, `vt`, `vn`, `f` (triangles and larger polygons,
//! fan-triangulated), `o`/`g` for mesh splitting. Everything else is ignored.
//! Errors never escape the [`Loader`]: an unreadable source clears the load
//! flag, a bad line or face is skipped and recorded as a diagnostic.

use std::{
    fmt,
    fs::File,
    io::{self, BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, anyhow};
use corelib::{Vec2, Vec3};
use thiserror::Error;

use crate::mesh::{Mesh, Vertex};

/// Which attribute pool a face index points into.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum IndexKind {
    Position,
    TexCoord,
    Normal,
}

impl fmt::Display for IndexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            IndexKind::Position => "position",
            IndexKind::TexCoord => "texcoord",
            IndexKind::Normal => "normal",
        })
    }
}

/// Problems met while loading. Line numbers are 1-based.
#[derive(Debug, Error)]
pub enum ObjError {
    #[error("Failed to open OBJ file {}: {source}", .path.display())]
    FileNotReadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to read line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },
    #[error("Malformed OBJ line {line}: {reason}")]
    MalformedLine { line: usize, reason: String },
    #[error("OBJ {kind} index {index} resolved out of bounds (len={len}) on line {line}")]
    FaceIndexOutOfRange {
        line: usize,
        kind: IndexKind,
        index: i64,
        len: usize,
    },
    #[error("OBJ indices are 1-based; found {kind} index 0 on line {line}")]
    ZeroIndex { line: usize, kind: IndexKind },
    #[error("OBJ face on line {line} references skipped {kind} record #{index}")]
    SkippedRecord {
        line: usize,
        kind: IndexKind,
        index: usize,
    },
}

impl ObjError {
    /// `true` for errors that abort the whole load.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ObjError::FileNotReadable { .. } | ObjError::Read { .. })
    }

    fn malformed(line: usize, reason: impl Into<String>) -> Self {
        ObjError::MalformedLine {
            line,
            reason: reason.into(),
        }
    }
}

/// Result of loading one OBJ source.
///
/// Check [`Loader::is_loaded`] before using [`Loader::meshes`]; a failed
/// loader simply has no meshes.
#[derive(Debug)]
pub struct Loader {
    meshes: Vec<Mesh>,
    loaded: bool,
    diagnostics: Vec<ObjError>,
}

impl Loader {
    /// Read and parse the file at `path`.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let loader = match File::open(path) {
            Ok(file) => Self::from_reader(BufReader::new(file)),
            Err(source) => Self::failed(
                Vec::new(),
                ObjError::FileNotReadable {
                    path: path.to_path_buf(),
                    source,
                },
            ),
        };
        if loader.loaded {
            log::info!(
                "Loaded OBJ {:?}: {} mesh(es), {} vertices, {} skipped record(s)",
                path,
                loader.meshes.len(),
                loader.meshes.iter().map(Mesh::vertex_count).sum::<usize>(),
                loader.diagnostics.len()
            );
        }
        loader
    }

    /// Parse OBJ text from any buffered reader.
    pub fn from_reader<R: BufRead>(reader: R) -> Self {
        let mut parser = Parser::default();
        for (idx, line) in reader.lines().enumerate() {
            let line_no = idx + 1;
            match line {
                Ok(text) => parser.line(line_no, &text),
                Err(source) => {
                    return Self::failed(
                        parser.diagnostics,
                        ObjError::Read {
                            line: line_no,
                            source,
                        },
                    );
                }
            }
        }

        for mesh in &parser.meshes {
            log::debug!(
                "OBJ mesh '{}': {} vertices ({} triangles)",
                mesh.name,
                mesh.vertex_count(),
                mesh.triangle_count()
            );
        }

        Self {
            meshes: parser.meshes,
            loaded: true,
            diagnostics: parser.diagnostics,
        }
    }

    /// Parse OBJ text held in memory.
    pub fn parse_str(contents: &str) -> Self {
        Self::from_reader(io::Cursor::new(contents))
    }

    fn failed(mut diagnostics: Vec<ObjError>, err: ObjError) -> Self {
        log::error!("{err}");
        diagnostics.push(err);
        Self {
            meshes: Vec::new(),
            loaded: false,
            diagnostics,
        }
    }

    #[inline]
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Meshes in file order. Empty when the source could not be read.
    pub fn meshes(&self) -> &[Mesh] {
        &self.meshes
    }

    /// Every error absorbed during the load, in the order met.
    pub fn diagnostics(&self) -> &[ObjError] {
        &self.diagnostics
    }

    /// Turn the load flag into a `Result`, keeping the fatal error as cause.
    pub fn into_result(self) -> Result<Vec<Mesh>> {
        if self.loaded {
            return Ok(self.meshes);
        }
        let cause = self
            .diagnostics
            .into_iter()
            .find(ObjError::is_fatal)
            .map(anyhow::Error::new)
            .unwrap_or_else(|| anyhow!("unknown failure"));
        Err::<Vec<Mesh>, _>(cause).context("OBJ could not be loaded")
    }
}

/// Load all meshes of an OBJ file, failing if it cannot be read.
pub fn load_obj_from_path(path: impl AsRef<Path>) -> Result<Vec<Mesh>> {
    Loader::new(path).into_result()
}

/// Convenience helper to parse an OBJ string literal.
pub fn load_obj_from_str(contents: &str) -> Result<Vec<Mesh>> {
    Loader::parse_str(contents).into_result()
}

/// Attribute pools shared by the whole file plus the meshes built so far.
/// A malformed record still takes its slot (`None`) so later indices keep
/// pointing at the records they were written against.
#[derive(Default)]
struct Parser {
    positions: Vec<Option<Vec3>>,
    normals: Vec<Option<Vec3>>,
    texcoords: Vec<Option<Vec2>>,
    meshes: Vec<Mesh>,
    diagnostics: Vec<ObjError>,
}

impl Parser {
    fn line(&mut self, line_no: usize, text: &str) {
        if let Err(err) = self.record(line_no, text) {
            log::warn!("Skipping OBJ record: {err}");
            self.diagnostics.push(err);
        }
    }

    fn record(&mut self, line_no: usize, text: &str) -> Result<(), ObjError> {
        let content = text.split('#').next().unwrap_or_default().trim();
        let mut parts = content.split_whitespace();
        let Some(tag) = parts.next() else {
            return Ok(());
        };

        match tag {
            "v" => {
                let position = parse_vec3(&mut parts, line_no, "position");
                self.current();
                reserve(&mut self.positions, position)?;
            }
            "vn" => {
                let normal =
                    parse_vec3(&mut parts, line_no, "normal").map(Vec3::normalize_or_zero);
                self.current();
                reserve(&mut self.normals, normal)?;
            }
            "vt" => {
                let texcoord = parse_texcoord(&mut parts, line_no);
                self.current();
                reserve(&mut self.texcoords, texcoord)?;
            }
            "f" => {
                let corners = parts
                    .map(|token| self.face_vertex(token, line_no))
                    .collect::<Result<Vec<_>, _>>()?;
                if corners.len() < 3 {
                    return Err(ObjError::malformed(
                        line_no,
                        format!("face needs at least 3 vertices, got {}", corners.len()),
                    ));
                }
                let mesh = self.current();
                // Triangulate fan
                for i in 1..corners.len() - 1 {
                    mesh.vertices.extend([corners[0], corners[i], corners[i + 1]]);
                }
            }
            "o" | "g" => {
                let name = content[tag.len()..].trim();
                self.begin_mesh(name);
            }
            _ => {
                // Ignore other directives (s/usemtl/mtllib/l/p/etc.)
            }
        }
        Ok(())
    }

    /// Mesh receiving faces, created on first use.
    fn current(&mut self) -> &mut Mesh {
        if self.meshes.is_empty() {
            self.meshes.push(Mesh::default());
        }
        let last = self.meshes.len() - 1;
        &mut self.meshes[last]
    }

    /// An empty current mesh is renamed rather than left behind.
    fn begin_mesh(&mut self, name: &str) {
        match self.meshes.last_mut() {
            Some(mesh) if mesh.is_empty() => mesh.name = name.to_owned(),
            _ => self.meshes.push(Mesh::new(name, Vec::new())),
        }
    }

    fn face_vertex(&self, token: &str, line_no: usize) -> Result<Vertex, ObjError> {
        let mut split = token.split('/');
        let pos = split.next().unwrap_or_default();
        let tex = split.next().filter(|s| !s.is_empty());
        let norm = split.next().filter(|s| !s.is_empty());
        if split.next().is_some() {
            return Err(ObjError::malformed(
                line_no,
                format!("face element '{token}' has too many components"),
            ));
        }

        let position = lookup(&self.positions, pos, IndexKind::Position, line_no)?;
        let uv = match tex {
            Some(t) => lookup(&self.texcoords, t, IndexKind::TexCoord, line_no)?,
            None => Vec2::ZERO,
        };
        let normal = match norm {
            Some(n) => lookup(&self.normals, n, IndexKind::Normal, line_no)?,
            None => Vec3::ZERO,
        };

        Ok(Vertex::new(position, normal, uv))
    }
}

/// Push `value` into its slot, `None` when it failed to parse.
fn reserve<T: Copy>(
    pool: &mut Vec<Option<T>>,
    value: Result<T, ObjError>,
) -> Result<(), ObjError> {
    pool.push(value.as_ref().ok().copied());
    value.map(drop)
}

fn lookup<T: Copy>(
    pool: &[Option<T>],
    token: &str,
    kind: IndexKind,
    line_no: usize,
) -> Result<T, ObjError> {
    let idx = resolve_index(token, pool.len(), kind, line_no)?;
    pool[idx].ok_or(ObjError::SkippedRecord {
        line: line_no,
        kind,
        index: idx + 1,
    })
}

/// `u [v [w]]`; `v` defaults to 0 and `w` is ignored.
fn parse_texcoord<'a>(
    parts: &mut impl Iterator<Item = &'a str>,
    line_no: usize,
) -> Result<Vec2, ObjError> {
    let u = parse_f32(parts.next(), line_no, "u coordinate")?;
    let v = match parts.next() {
        Some(token) => parse_f32(Some(token), line_no, "v coordinate")?,
        None => 0.0,
    };
    Ok(Vec2::new(u, v))
}

fn parse_vec3<'a>(
    parts: &mut impl Iterator<Item = &'a str>,
    line_no: usize,
    what: &str,
) -> Result<Vec3, ObjError> {
    let x = parse_f32(parts.next(), line_no, what)?;
    let y = parse_f32(parts.next(), line_no, what)?;
    let z = parse_f32(parts.next(), line_no, what)?;
    Ok(Vec3::new(x, y, z))
}

fn parse_f32(value: Option<&str>, line_no: usize, what: &str) -> Result<f32, ObjError> {
    let token = value.ok_or_else(|| ObjError::malformed(line_no, format!("missing {what}")))?;
    token
        .parse::<f32>()
        .map_err(|_| ObjError::malformed(line_no, format!("invalid {what} '{token}'")))
}

/// Map a 1-based (or negative, relative) OBJ index onto a pool of `len`.
fn resolve_index(
    token: &str,
    len: usize,
    kind: IndexKind,
    line_no: usize,
) -> Result<usize, ObjError> {
    let raw = token
        .parse::<i64>()
        .map_err(|_| ObjError::malformed(line_no, format!("invalid {kind} index '{token}'")))?;
    if raw == 0 {
        return Err(ObjError::ZeroIndex {
            line: line_no,
            kind,
        });
    }

    let idx = if raw > 0 {
        raw - 1
    } else {
        len as i64 + raw
    };

    if idx < 0 || idx as usize >= len {
        return Err(ObjError::FaceIndexOutOfRange {
            line: line_no,
            kind,
            index: raw,
            len,
        });
    }

    Ok(idx as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use corelib::vec3;

    const TRIANGLE: &str = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n";

    fn temp_obj(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "normalviz-{}-{}.obj",
            std::process::id(),
            name
        ));
        std::fs::write(&path, contents).expect("write temp OBJ");
        path
    }

    #[test]
    fn triangle_without_normals() {
        let loader = Loader::parse_str(TRIANGLE);
        assert!(loader.is_loaded());
        assert_eq!(loader.meshes().len(), 1);

        let mesh = &loader.meshes()[0];
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.vertices[1].position, vec3(1.0, 0.0, 0.0));
        assert!(mesh.vertices.iter().all(|v| v.normal == Vec3::ZERO));
        assert!(loader.diagnostics().is_empty());
    }

    #[test]
    fn parse_full_face_syntax() {
        let src = r#"
            v 0.0 0.0 0.0
            v 1.0 0.0 0.0
            v 0.0 1.0 0.0
            vn 0.0 0.0 2.0
            vt 0.0 0.0
            vt 1.0 0.0
            vt 0.0 1.0
            f 1/1/1 2/2/1 3/3/1
            f 1//1 2//1 3//1
            f 3/3 2/2 1/1
        "#;
        let meshes = load_obj_from_str(src).expect("parse triangles");
        let mesh = &meshes[0];
        assert_eq!(mesh.vertex_count(), 9);
        // declared normals are normalized
        assert_eq!(mesh.vertices[0].normal, Vec3::Z);
        assert_eq!(mesh.vertices[1].uv, Vec2::new(1.0, 0.0));
        assert_eq!(mesh.vertices[4].uv, Vec2::ZERO);
        assert_eq!(mesh.vertices[6].position, vec3(0.0, 1.0, 0.0));
        assert_eq!(mesh.vertices[6].normal, Vec3::ZERO);
    }

    #[test]
    fn out_of_range_face_is_dropped_alone() {
        let src = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\nf 1 2 99\nf 3 2 1\n";
        let loader = Loader::parse_str(src);
        assert!(loader.is_loaded());

        let mesh = &loader.meshes()[0];
        assert_eq!(mesh.vertex_count(), 6);
        let positions: Vec<Vec3> = mesh.vertices.iter().map(|v| v.position).collect();
        assert_eq!(
            positions,
            vec![
                Vec3::ZERO,
                Vec3::X,
                Vec3::Y,
                Vec3::Y,
                Vec3::X,
                Vec3::ZERO
            ]
        );

        assert_eq!(loader.diagnostics().len(), 1);
        assert!(matches!(
            loader.diagnostics()[0],
            ObjError::FaceIndexOutOfRange {
                line: 5,
                kind: IndexKind::Position,
                index: 99,
                len: 3
            }
        ));
    }

    #[test]
    fn bad_normal_index_and_zero_index_are_skipped() {
        let src = "v 0 0 0\nv 1 0 0\nv 0 1 0\nvn 0 0 1\nf 1//2 2//1 3//1\nf 0 1 2\nf 1//1 2//1 3//1\n";
        let loader = Loader::parse_str(src);
        assert!(loader.is_loaded());
        assert_eq!(loader.meshes()[0].vertex_count(), 3);
        assert!(matches!(
            loader.diagnostics()[0],
            ObjError::FaceIndexOutOfRange {
                kind: IndexKind::Normal,
                ..
            }
        ));
        assert!(matches!(
            loader.diagnostics()[1],
            ObjError::ZeroIndex { line: 6, .. }
        ));
    }

    #[test]
    fn quad_is_fan_triangulated() {
        let src = "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3 4\n";
        let loader = Loader::parse_str(src);
        let mesh = &loader.meshes()[0];
        assert_eq!(mesh.triangle_count(), 2);
        let p: Vec<Vec3> = mesh.vertices.iter().map(|v| v.position).collect();
        assert_eq!(
            p,
            vec![
                Vec3::ZERO,
                Vec3::X,
                vec3(1.0, 1.0, 0.0),
                Vec3::ZERO,
                vec3(1.0, 1.0, 0.0),
                Vec3::Y
            ]
        );
    }

    #[test]
    fn negative_indices_are_relative() {
        let src = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf -3 -2 -1\n";
        let loader = Loader::parse_str(src);
        let mesh = &loader.meshes()[0];
        assert_eq!(mesh.vertices[0].position, Vec3::ZERO);
        assert_eq!(mesh.vertices[2].position, Vec3::Y);
    }

    #[test]
    fn malformed_lines_are_skipped() {
        let src = "v 0 0 0\nv 1 zero 0\nv 1 0\nv 1 0 0\nv 0 1 0\nf 1 4\nf 1/2/3/4 4 5\nbogus line\nf 1 4 5\n";
        let loader = Loader::parse_str(src);
        assert!(loader.is_loaded());
        let mesh = &loader.meshes()[0];
        assert_eq!(mesh.vertex_count(), 3);
        // skipped `v` lines keep their slots, so 4 and 5 still name X and Y
        assert_eq!(mesh.vertices[1].position, Vec3::X);
        assert_eq!(mesh.vertices[2].position, Vec3::Y);
        // unknown tags are ignored silently
        assert_eq!(loader.diagnostics().len(), 4);
        assert!(
            loader
                .diagnostics()
                .iter()
                .all(|d| matches!(d, ObjError::MalformedLine { .. }))
        );
    }

    #[test]
    fn skipped_records_keep_later_indices_stable() {
        let src = "v 0 0 0\nv 5 bad 5\nv 1 0 0\nv 0 1 0\nf 1 3 4\nf 1 2 3\n";
        let loader = Loader::parse_str(src);
        assert!(loader.is_loaded());

        let mesh = &loader.meshes()[0];
        let positions: Vec<Vec3> = mesh.vertices.iter().map(|v| v.position).collect();
        assert_eq!(positions, vec![Vec3::ZERO, Vec3::X, Vec3::Y]);

        assert_eq!(loader.diagnostics().len(), 2);
        assert!(matches!(
            loader.diagnostics()[0],
            ObjError::MalformedLine { line: 2, .. }
        ));
        assert!(matches!(
            loader.diagnostics()[1],
            ObjError::SkippedRecord {
                line: 6,
                kind: IndexKind::Position,
                index: 2
            }
        ));
    }

    #[test]
    fn skipped_normal_and_texcoord_drop_faces_citing_them() {
        let src = "v 0 0 0\nv 1 0 0\nv 0 1 0\nvn 0 0\nvn 0 0 1\nvt oops\nvt 1 1\n\
                   f 1//1 2//1 3//1\nf 1/1 2/1 3/1\nf 1/2/2 2/2/2 3/2/2\n";
        let loader = Loader::parse_str(src);
        let mesh = &loader.meshes()[0];
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.vertices[0].normal, Vec3::Z);
        assert_eq!(mesh.vertices[0].uv, Vec2::ONE);
        assert!(matches!(
            loader.diagnostics()[2],
            ObjError::SkippedRecord {
                kind: IndexKind::Normal,
                index: 1,
                ..
            }
        ));
        assert!(matches!(
            loader.diagnostics()[3],
            ObjError::SkippedRecord {
                kind: IndexKind::TexCoord,
                index: 1,
                ..
            }
        ));
    }

    #[test]
    fn one_dimensional_texcoords_default_v_to_zero() {
        let src = "v 0 0 0\nv 1 0 0\nv 0 1 0\nvt 0.5\nvn 0 0 1\nf 1/1/1 2/1/1 3/1/1\n";
        let loader = Loader::parse_str(src);
        assert!(loader.diagnostics().is_empty());
        let mesh = &loader.meshes()[0];
        assert_eq!(mesh.vertex_count(), 3);
        assert!(mesh.vertices.iter().all(|v| v.uv == Vec2::new(0.5, 0.0)));
    }

    #[test]
    fn extra_vertex_components_are_ignored() {
        let src = "v 0 0 0 1\nv 1 0 0 0.2 0.4 0.6\nv 0 1 0 1.0\nf 1 2 3\n";
        let loader = Loader::parse_str(src);
        assert!(loader.diagnostics().is_empty());
        let positions: Vec<Vec3> = loader.meshes()[0]
            .vertices
            .iter()
            .map(|v| v.position)
            .collect();
        assert_eq!(positions, vec![Vec3::ZERO, Vec3::X, Vec3::Y]);
    }

    #[test]
    fn zero_length_normal_stays_zero() {
        let src = "v 0 0 0\nv 1 0 0\nv 0 1 0\nvn 0 0 0\nf 1//1 2//1 3//1\n";
        let loader = Loader::parse_str(src);
        let mesh = &loader.meshes()[0];
        assert!(mesh.vertices.iter().all(|v| v.normal == Vec3::ZERO));
        assert!(mesh.vertices.iter().all(|v| !v.normal.is_nan()));
    }

    #[test]
    fn negative_normal_and_texcoord_indices() {
        let src = "v 0 0 0\nv 1 0 0\nv 0 1 0\nvn 1 0 0\nvn 0 1 0\nvt 0 0\nvt 1 1\n\
                   f -3/-2/-1 -2/-1/-2 -1/-1/-1\n";
        let loader = Loader::parse_str(src);
        assert!(loader.diagnostics().is_empty());
        let mesh = &loader.meshes()[0];
        assert_eq!(mesh.vertices[0].uv, Vec2::ZERO);
        assert_eq!(mesh.vertices[0].normal, Vec3::Y);
        assert_eq!(mesh.vertices[1].uv, Vec2::ONE);
        assert_eq!(mesh.vertices[1].normal, Vec3::X);
        assert_eq!(mesh.vertices[2].normal, Vec3::Y);
    }

    #[test]
    fn bare_object_and_group_tags() {
        let src = "o\nv 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\ng\nf 3 2 1\n";
        let loader = Loader::parse_str(src);
        assert!(loader.diagnostics().is_empty());
        let names: Vec<&str> = loader.meshes().iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["", ""]);
        assert_eq!(loader.meshes()[1].vertex_count(), 3);
    }

    #[test]
    fn empty_input_loads_without_meshes() {
        let loader = Loader::parse_str("");
        assert!(loader.is_loaded());
        assert!(loader.meshes().is_empty());

        let comments = Loader::parse_str("# nothing here\n\n   \n");
        assert!(comments.is_loaded());
        assert!(comments.meshes().is_empty());
    }

    #[test]
    fn vertices_without_faces_give_one_empty_mesh() {
        let loader = Loader::parse_str("v 0 0 0\nv 1 0 0\nvn 0 1 0\n");
        assert!(loader.is_loaded());
        assert_eq!(loader.meshes().len(), 1);
        assert!(loader.meshes()[0].is_empty());
    }

    #[test]
    fn objects_split_meshes() {
        let src = "o first\nv 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\ng second\nf 3 2 1\nf 1 2 3\n";
        let loader = Loader::parse_str(src);
        let names: Vec<&str> = loader.meshes().iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["first", "second"]);
        assert_eq!(loader.meshes()[0].vertex_count(), 3);
        assert_eq!(loader.meshes()[1].vertex_count(), 6);
    }

    #[test]
    fn leading_vertices_then_object_renames_default_mesh() {
        let src = "v 0 0 0\nv 1 0 0\nv 0 1 0\no tri\nf 1 2 3\n";
        let loader = Loader::parse_str(src);
        assert_eq!(loader.meshes().len(), 1);
        assert_eq!(loader.meshes()[0].name, "tri");
    }

    #[test]
    fn crlf_and_inline_comments() {
        let src = "v 0 0 0\r\nv 1 0 0 # x axis\r\nv 0 1 0\r\ns off\r\nusemtl none\r\nf 1 2 3\r\n";
        let loader = Loader::parse_str(src);
        assert!(loader.diagnostics().is_empty());
        assert_eq!(loader.meshes()[0].vertex_count(), 3);
    }

    #[test]
    fn missing_file_is_not_loaded() {
        let loader = Loader::new("/definitely/not/here/model.obj");
        assert!(!loader.is_loaded());
        assert!(loader.meshes().is_empty());
        assert!(matches!(
            loader.diagnostics(),
            [ObjError::FileNotReadable { .. }]
        ));

        let err = load_obj_from_path("/definitely/not/here/model.obj").unwrap_err();
        assert!(err.to_string().contains("could not be loaded"));
        assert!(format!("{err:#}").contains("model.obj"));
    }

    #[test]
    fn non_utf8_input_fails_the_load() {
        let loader = Loader::from_reader(io::Cursor::new(b"v 0 0 0\n\xff\xfe\n".to_vec()));
        assert!(!loader.is_loaded());
        assert!(loader.meshes().is_empty());
        assert!(matches!(
            loader.diagnostics().last(),
            Some(ObjError::Read { line: 2, .. })
        ));
    }

    #[test]
    fn loads_from_file() {
        let path = temp_obj("triangle", TRIANGLE);
        let loader = Loader::new(&path);
        std::fs::remove_file(&path).ok();
        assert!(loader.is_loaded());
        assert_eq!(loader.meshes()[0].vertex_count(), 3);
    }

    #[test]
    fn empty_file_loads_without_meshes() {
        let path = temp_obj("empty", "");
        let meshes = load_obj_from_path(&path);
        std::fs::remove_file(&path).ok();
        assert!(meshes.expect("empty file loads").is_empty());
    }
}
