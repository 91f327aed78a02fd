//! Crash-safe CSV export files.
//!
//! Rows stream into a hidden `.part` file beside the target, which is renamed
//! into place only after the data has been synced. Readers therefore see
//! either the previous export or the complete new one.

use std::io::BufWriter;
use std::sync::atomic::{AtomicU64, Ordering};

use camino::{Utf8Component, Utf8Path, Utf8PathBuf};
use cap_std::fs::{Dir, File, OpenOptions};

use crate::error::ExportError;
use crate::export::write_csv;
use crate::record::PersonRecord;

static PART_COUNTER: AtomicU64 = AtomicU64::new(0);

/// A `.part` file awaiting its rename. Dropping it uncommitted removes it.
struct StagedExport<'dir> {
    dir: &'dir Dir,
    part_name: String,
    target: Utf8PathBuf,
    committed: bool,
}

impl<'dir> StagedExport<'dir> {
    fn create(dir: &'dir Dir, target: &Utf8Path) -> Result<(Self, File), ExportError> {
        let file_name = bare_file_name(target)?;
        let part_name = format!(
            ".{file_name}.{}.{}.part",
            std::process::id(),
            PART_COUNTER.fetch_add(1, Ordering::Relaxed)
        );
        let mut options = OpenOptions::new();
        options.write(true).create_new(true);
        let file = dir
            .open_with(&part_name, &options)
            .map_err(|err| write_error(target, &err))?;
        let staged = Self {
            dir,
            part_name,
            target: target.to_path_buf(),
            committed: false,
        };
        Ok((staged, file))
    }

    fn commit(mut self) -> Result<(), ExportError> {
        self.dir
            .rename(&self.part_name, self.dir, self.target.as_str())
            .map_err(|err| write_error(&self.target, &err))?;
        self.committed = true;
        // The rename is already visible; a failed directory sync only weakens
        // durability across power loss.
        drop(self.dir.open(".").and_then(|handle| handle.sync_all()));
        Ok(())
    }
}

impl Drop for StagedExport<'_> {
    fn drop(&mut self) {
        if !self.committed {
            drop(self.dir.remove_file(&self.part_name));
        }
    }
}

/// Streams `records` as CSV into `file_name` inside `dir`, replacing any
/// existing file only once every row has been written and synced.
///
/// `file_name` must be a bare file name relative to `dir`.
///
/// # Errors
///
/// Returns [`ExportError::WriteError`] for a non-bare name or an I/O
/// failure, and propagates CSV failures from [`write_csv`].
pub(crate) fn write_records_atomic(
    dir: &Dir,
    file_name: &Utf8Path,
    records: &[PersonRecord],
) -> Result<(), ExportError> {
    let (staged, file) = StagedExport::create(dir, file_name)?;
    let file = write_csv(records, BufWriter::new(file))?
        .into_inner()
        .map_err(|err| write_error(file_name, err.error()))?;
    file.sync_all().map_err(|err| write_error(file_name, &err))?;
    drop(file);
    staged.commit()
}

fn bare_file_name(path: &Utf8Path) -> Result<&str, ExportError> {
    let mut components = path.components();
    match (components.next(), components.next()) {
        (Some(Utf8Component::Normal(name)), None) => Ok(name),
        _ => Err(ExportError::WriteError {
            path: path.to_path_buf(),
            message: "export target must be a bare file name".to_owned(),
        }),
    }
}

fn write_error(path: &Utf8Path, err: &std::io::Error) -> ExportError {
    ExportError::WriteError {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use cap_std::ambient_authority;
    use rstest::{fixture, rstest};

    use super::*;
    use crate::noise::ErrorBudget;
    use crate::page::{PageRequest, generate_page};
    use crate::region::Region;

    struct ScratchDir {
        path: Utf8PathBuf,
        dir: Dir,
    }

    impl ScratchDir {
        fn entries(&self) -> Vec<String> {
            let mut names: Vec<String> = self
                .dir
                .entries()
                .expect("list scratch dir")
                .map(|entry| {
                    entry
                        .expect("dir entry")
                        .file_name()
                        .to_string_lossy()
                        .into_owned()
                })
                .collect();
            names.sort();
            names
        }
    }

    impl Drop for ScratchDir {
        fn drop(&mut self) {
            if let Ok(root) = Dir::open_ambient_dir(".", ambient_authority()) {
                drop(root.remove_dir_all(&self.path));
            }
        }
    }

    #[fixture]
    fn scratch() -> ScratchDir {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        let counter = COUNTER.fetch_add(1, Ordering::Relaxed);
        let path = Utf8PathBuf::from("target")
            .join("records-atomic-tests")
            .join(format!("scratch-{}-{counter}", std::process::id()));
        let root = Dir::open_ambient_dir(".", ambient_authority()).expect("open cwd");
        root.create_dir_all(&path).expect("create scratch dir");
        let dir = root.open_dir(&path).expect("open scratch dir");
        ScratchDir { path, dir }
    }

    fn records(limit: u32) -> Vec<PersonRecord> {
        let request =
            PageRequest::new(Region::En, 3, ErrorBudget::NONE, 1, limit).expect("valid request");
        generate_page(&request)
    }

    #[rstest]
    fn streams_every_row_into_the_target(scratch: ScratchDir) {
        write_records_atomic(&scratch.dir, Utf8Path::new("data.csv"), &records(4))
            .expect("write export");

        let text = scratch.dir.read_to_string("data.csv").expect("read export");
        assert_eq!(text.lines().count(), 5);
        assert_eq!(scratch.entries(), vec!["data.csv".to_owned()]);
    }

    #[rstest]
    fn replaces_an_existing_export(scratch: ScratchDir) {
        scratch
            .dir
            .write("data.csv", "stale contents\n")
            .expect("seed stale file");

        write_records_atomic(&scratch.dir, Utf8Path::new("data.csv"), &records(2))
            .expect("write export");

        let text = scratch.dir.read_to_string("data.csv").expect("read export");
        assert!(text.starts_with("Number,ID,Full Name,Address,Phone Number\n"));
        assert_eq!(text.lines().count(), 3);
    }

    #[rstest]
    #[case("nested/data.csv")]
    #[case("..")]
    #[case("")]
    fn rejects_names_that_are_not_bare(scratch: ScratchDir, #[case] name: &str) {
        let err = write_records_atomic(&scratch.dir, Utf8Path::new(name), &records(1))
            .expect_err("expected rejection");

        assert!(matches!(err, ExportError::WriteError { .. }));
        assert!(scratch.entries().is_empty());
    }

    #[rstest]
    fn failed_rename_leaves_no_part_file(scratch: ScratchDir) {
        scratch
            .dir
            .create_dir("data.csv")
            .expect("occupy target with a directory");

        let err = write_records_atomic(&scratch.dir, Utf8Path::new("data.csv"), &records(3))
            .expect_err("rename over a directory fails");

        assert!(
            matches!(&err, ExportError::WriteError { path, .. } if path.as_str() == "data.csv")
        );
        assert_eq!(scratch.entries(), vec!["data.csv".to_owned()]);
    }
}
