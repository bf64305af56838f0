//! Structure file output
//!
//! The destination is created (empty) before the walk, so a structure file inside
//! the walked tree lists itself. The rendered text is then moved over it through a
//! temporary file in the same directory. A failed render removes a destination it
//! created and leaves a pre-existing one untouched.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::TreeError;
use crate::tree::TreeWalker;

use super::text::TextOutput;

/// Render the tree rooted at `root` into the file at `output`.
pub fn write_structure(walker: &TreeWalker, root: &Path, output: &Path) -> Result<(), TreeError> {
    let output_error = |source| TreeError::OutputFile {
        path: output.to_path_buf(),
        source,
    };

    let reservation = Reservation::new(output).map_err(output_error)?;

    let mut text = TextOutput::new(Vec::new());
    walker.render(root, &mut text)?;

    let mut tmp = NamedTempFile::new_in(output_dir(output)).map_err(output_error)?;
    tracing::debug!(tmp = %tmp.path().display(), "Writing structure to temporary file");
    tmp.write_all(&text.into_inner()).map_err(output_error)?;
    tmp.as_file().sync_all().map_err(output_error)?;
    tmp.persist(output).map_err(|e| output_error(e.error))?;
    reservation.keep();

    tracing::info!(output = %output.display(), "Structure written");
    Ok(())
}

/// The destination file, created empty if it did not exist yet.
///
/// Dropping it without `keep` removes a file this run created. A pre-existing
/// file is never touched.
struct Reservation<'a> {
    path: &'a Path,
    created: bool,
    kept: bool,
}

impl<'a> Reservation<'a> {
    fn new(path: &'a Path) -> io::Result<Self> {
        let created = match OpenOptions::new().write(true).create_new(true).open(path) {
            Ok(_) => true,
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => false,
            Err(e) => return Err(e),
        };
        Ok(Self {
            path,
            created,
            kept: false,
        })
    }

    fn keep(mut self) {
        self.kept = true;
    }
}

impl Drop for Reservation<'_> {
    fn drop(&mut self) {
        if !self.created || self.kept {
            return;
        }
        if let Err(e) = fs::remove_file(self.path) {
            tracing::warn!(output = %self.path.display(), error = %e, "Could not remove output file");
        }
    }
}

/// Directory the temporary file is created in, so the final rename stays on one filesystem.
fn output_dir(output: &Path) -> PathBuf {
    match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestDir;
    use crate::tree::WalkerConfig;

    fn walker(skip: &[&str]) -> TreeWalker {
        TreeWalker::new(WalkerConfig::with_skip_names(skip.iter().copied())).unwrap()
    }

    #[test]
    fn test_writes_structure_file() {
        let root = TestDir::named("A");
        root.add_file("b.txt", "");
        root.add_file("C/d.txt", "");
        let out_dir = TestDir::new();
        let output = out_dir.path().join("structure.txt");

        write_structure(&walker(&[]), root.path(), &output).unwrap();

        let text = fs::read_to_string(&output).unwrap();
        assert_eq!(text, "A/\n├── C/\n│   └── d.txt\n└── b.txt\n");
    }

    #[test]
    fn test_output_inside_tree_lists_itself() {
        let root = TestDir::named("A");
        root.add_file("b.txt", "");
        let output = root.path().join("structure.txt");

        write_structure(&walker(&[]), root.path(), &output).unwrap();
        let first = fs::read_to_string(&output).unwrap();
        assert_eq!(first, "A/\n├── b.txt\n└── structure.txt\n");

        // A second run sees the same tree.
        write_structure(&walker(&[]), root.path(), &output).unwrap();
        assert_eq!(fs::read_to_string(&output).unwrap(), first);
    }

    #[test]
    fn test_overwrites_existing_file() {
        let root = TestDir::named("A");
        root.add_file("x.txt", "");
        let out_dir = TestDir::new();
        let output = out_dir.add_file("structure.txt", "stale contents\nfrom before\n");

        write_structure(&walker(&[]), root.path(), &output).unwrap();

        assert_eq!(fs::read_to_string(&output).unwrap(), "A/\n└── x.txt\n");
    }

    #[test]
    fn test_failed_render_leaves_no_file() {
        let out_dir = TestDir::new();
        let output = out_dir.path().join("structure.txt");
        let missing = out_dir.path().join("missing");

        let err = write_structure(&walker(&[]), &missing, &output).unwrap_err();

        assert!(matches!(err, TreeError::Listing { .. }));
        assert!(!output.exists());
        let leftovers: Vec<_> = fs::read_dir(out_dir.path()).unwrap().collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn test_failed_render_keeps_existing_file() {
        let out_dir = TestDir::new();
        let output = out_dir.add_file("structure.txt", "previous\n");
        let missing = out_dir.path().join("missing");

        assert!(write_structure(&walker(&[]), &missing, &output).is_err());
        assert_eq!(fs::read_to_string(&output).unwrap(), "previous\n");
    }

    #[test]
    fn test_missing_output_directory_is_sink_failure() {
        let root = TestDir::named("A");
        let out_dir = TestDir::new();
        let output = out_dir.path().join("no/such/dir/structure.txt");

        let err = write_structure(&walker(&[]), root.path(), &output).unwrap_err();
        assert!(err.is_sink_failure(), "got {:?}", err);
    }

    #[test]
    fn test_unkept_reservation_removes_created_file() {
        let dir = TestDir::new();
        let output = dir.path().join("structure.txt");

        let reservation = Reservation::new(&output).unwrap();
        assert!(output.exists(), "destination is created up front");
        drop(reservation);
        assert!(!output.exists(), "abandoned destination is removed");
    }

    #[test]
    fn test_kept_reservation_stays() {
        let dir = TestDir::new();
        let output = dir.path().join("structure.txt");

        Reservation::new(&output).unwrap().keep();
        assert!(output.exists());
    }

    #[test]
    fn test_reservation_of_existing_file_is_never_removed() {
        let dir = TestDir::new();
        let output = dir.add_file("structure.txt", "previous\n");

        drop(Reservation::new(&output).unwrap());
        assert_eq!(fs::read_to_string(&output).unwrap(), "previous\n");
    }

    #[test]
    fn test_output_dir_of_bare_file_name() {
        assert_eq!(output_dir(Path::new("structure.txt")), PathBuf::from("."));
        assert_eq!(output_dir(Path::new("out/structure.txt")), PathBuf::from("out"));
    }
}
